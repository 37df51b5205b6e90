use std::sync::Arc;

use anyhow::Result;
use topicboard::api::HttpTopicBackend;
use topicboard::config::Config;
use topicboard::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    log::info!("Starting topicboard against {}", config.server.base_url);

    let backend = Arc::new(HttpTopicBackend::new(config.server.base_url.clone()));
    ui::run_app(backend, &config).await?;

    Ok(())
}
