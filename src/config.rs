//! Process configuration read from the environment.
//!
//! # Environment Variables
//!
//! - `FINGERPRINT_ALPHABET`: Visit-count symbols (default: `" .+oVXLZAHPDRB"`)
//! - `FINGERPRINT_HEIGHT`: Grid rows (default: 8)
//! - `FINGERPRINT_WIDTH`: Grid columns (default: 16)
//! - `FINGERPRINT_COLOR`: Set to "1" or "true" to color the art by default
//!
//! Unparsable numbers fall back to the default. Command-line flags override
//! anything set here.

use crate::core::{ArtConfig, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub alphabet: Option<String>,
    pub height: Option<u16>,
    pub width: Option<u16>,
    pub color: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup (tests use a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let alphabet = lookup("FINGERPRINT_ALPHABET").filter(|s| !s.is_empty());

        let height = lookup("FINGERPRINT_HEIGHT").and_then(|s| s.trim().parse().ok());
        let width = lookup("FINGERPRINT_WIDTH").and_then(|s| s.trim().parse().ok());

        let color = lookup("FINGERPRINT_COLOR")
            .map(|v| {
                let v = v.trim().to_ascii_lowercase();
                v == "1" || v == "true"
            })
            .unwrap_or(false);

        Self {
            alphabet,
            height,
            width,
            color,
        }
    }

    /// Layer command-line values over these settings.
    pub fn with_overrides(
        mut self,
        alphabet: Option<String>,
        height: Option<u16>,
        width: Option<u16>,
        color: bool,
    ) -> Self {
        self.alphabet = alphabet.or(self.alphabet);
        self.height = height.or(self.height);
        self.width = width.or(self.width);
        self.color |= color;
        self
    }

    /// Validated art configuration; unset fields take their defaults.
    pub fn art_config(&self) -> Result<ArtConfig> {
        let mut builder = ArtConfig::builder();
        if let Some(alphabet) = &self.alphabet {
            builder = builder.alphabet(alphabet.as_str());
        }
        if let Some(height) = self.height {
            builder = builder.height(height);
        }
        if let Some(width) = self.width {
            builder = builder.width(width);
        }
        builder.build()
    }
}
