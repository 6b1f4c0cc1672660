//! Configuration module for draftdesk
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{GeneralSettings, LlmSettings, Settings, TuiSettings};
