//! Backend tuning options.
//!
//! Options are plain data with serde defaults so a host application can embed
//! a `[backend]`-style table in its own TOML configuration and hand the
//! parsed slice to [`crate::BackendSlot::init`].  Every field is optional in
//! the file; absent fields take the documented default, so an empty string
//! parses to [`BackendOptions::default`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for options parsing.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The TOML content could not be parsed.
    #[error("failed to parse backend options TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tuning knobs for one backend instance, fixed at init.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendOptions {
    /// Log every key event (code, scan, virtual key, modifiers) at debug
    /// level.  Verbose; intended for bring-up of a new host adapter.
    #[serde(default)]
    pub key_event_debug: bool,

    /// Warn (once per code) when a native key code has no abstract mapping.
    #[serde(default = "default_true")]
    pub unmapped_key_warnings: bool,
}

impl Default for BackendOptions {
    fn default() -> Self {
        Self {
            key_event_debug: false,
            unmapped_key_warnings: true,
        }
    }
}

impl BackendOptions {
    /// Parses options from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Parse`] when the document is not valid TOML or
    /// a field has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(text)?)
    }
}

fn default_true() -> bool {
    true
}
