//! Configuration module for meeting-notes
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{DocumentSettings, LlmSettings, Settings, API_KEY_ENV_VARS};
