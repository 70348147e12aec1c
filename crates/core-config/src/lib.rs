//! Per-session read options and their optional TOML source.
//!
//! Options are immutable for the duration of a session and read-only to the
//! editing core. The file layer is tolerant: a missing file or one that fails
//! to parse yields defaults, and unknown fields are ignored so newer files
//! keep working with older builds. The only validation is numeric
//! normalization (`ReadOptions::normalize`).

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "oxread.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AutocompleteOptions {
    pub enabled: bool,
    /// Candidates, scanned in order; the first prefix match wins.
    pub items: Vec<String>,
    /// Shortest typed token that triggers a suggestion.
    pub min_length: usize,
    pub case_sensitive: bool,
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            items: Vec::new(),
            min_length: 1,
            case_sensitive: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MaskOptions {
    pub enabled: bool,
    pub mask_char: char,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            mask_char: '*',
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ReadOptions {
    /// Capacity applied to the shared history store by the top-level entry points.
    pub history_capacity: usize,
    pub add_returned_value_to_history: bool,
    /// Esc hands back the text the session started with instead of no value.
    pub escape_returns_original_input: bool,
    pub autocomplete: AutocompleteOptions,
    pub masked_input: MaskOptions,
    /// Move to a fresh terminal line when the session ends.
    pub newline_on_exit: bool,
    /// Width of the visible window over the buffer.
    pub max_display_length: Option<usize>,
    /// Treat `max_display_length` as columns reserved at the end of the line
    /// rather than as a cap.
    pub subtract_from_available_space: bool,
    /// Echo each key's identity after dispatch.
    pub debug: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            history_capacity: 100,
            add_returned_value_to_history: true,
            escape_returns_original_input: true,
            autocomplete: AutocompleteOptions::default(),
            masked_input: MaskOptions::default(),
            newline_on_exit: true,
            max_display_length: None,
            subtract_from_available_space: false,
            debug: false,
        }
    }
}

impl ReadOptions {
    /// Autocomplete is suppressed entirely while input is masked.
    pub fn autocomplete_active(&self) -> bool {
        self.autocomplete.enabled && !self.masked_input.enabled
    }

    /// Raise out-of-range numeric values to their nearest valid minimum.
    /// Returns true when anything changed.
    pub fn normalize(&mut self) -> bool {
        let mut changed = false;
        if self.history_capacity < 1 {
            info!(target: "config", raw = self.history_capacity, clamped = 1, "history_capacity_clamped");
            self.history_capacity = 1;
            changed = true;
        }
        if self.max_display_length == Some(0) {
            info!(target: "config", "max_display_length_zero_disabled");
            self.max_display_length = None;
            changed = true;
        }
        changed
    }

    pub fn with_autocomplete<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.autocomplete.items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn masked(mut self, mask_char: char) -> Self {
        self.masked_input = MaskOptions {
            enabled: true,
            mask_char,
        };
        self
    }
}

/// Best-effort config path: `./oxread.toml` first, then the platform config
/// dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("oxread").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<ReadOptions> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(ReadOptions::default());
    };
    match toml::from_str::<ReadOptions>(&content) {
        Ok(mut opts) => {
            opts.normalize();
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(opts)
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(ReadOptions::default())
        }
    }
}
