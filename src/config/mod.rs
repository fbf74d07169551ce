//! Configuration management for chatterbox.
//!
//! This module handles loading configuration from `~/.chatterbox/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{ColorSetting, Config, DatesConfig, GeneralConfig, StorageConfig};
