//! draftdesk - Draft meeting invites and emails from a few form fields
//!
//! Form input is substituted into a fixed prompt template and sent to a
//! text-generation service; the returned text (or an error) is displayed.

pub mod cli;
pub mod config;
pub mod llm;
pub mod prompt;
pub mod tui;

use thiserror::Error;

/// Main error type for draftdesk
#[derive(Error, Debug)]
pub enum DraftdeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, DraftdeskError>;

/// Application name
pub const APP_NAME: &str = "draftdesk";
