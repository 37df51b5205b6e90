//! Topicboard - A Terminal User Interface (TUI) client for the topic board
//!
//! This library provides a terminal-based interface for browsing, creating
//! and deleting topics on a topic-management server. It includes an HTTP
//! client for the server API and a rich interactive UI built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - Topic server client and data structures
//! * [`config`] - Application configuration management
//! * [`logger`] - File logging setup
//! * [`ui`] - Terminal user interface components

/// Topic server API client and data models
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;
