//! Decoder configuration loader.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::decoder::DecodeOptions;

/// File name searched for by [`DecoderConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "combo.config.json";

/// Discoverable configuration controlling how strictly combo paths are decoded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Accept groups without any sub-delimiter as bare `path` groups.
    pub allow_bare_paths: bool,
    /// Reject paths that do not start with `/`.
    pub require_leading_slash: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        let options = DecodeOptions::default();
        Self {
            allow_bare_paths: options.allow_bare_paths,
            require_leading_slash: options.require_leading_slash,
        }
    }
}

impl DecoderConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall back to the
    /// permissive defaults.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Read configuration from a specific JSON file, reporting why it could not be used.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Convert the configuration into decoder options.
    pub fn to_options(&self) -> DecodeOptions {
        DecodeOptions {
            allow_bare_paths: self.allow_bare_paths,
            require_leading_slash: self.require_leading_slash,
        }
    }
}
