//! Dialog components module

pub mod common;
pub mod delete_confirmation_dialog;
pub mod topic_creation_dialog;
