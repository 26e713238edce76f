//! Tunables for the positioner.

use anyhow::{Context as _, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;

/// Positioner options. Every field has a default, so `{}` is a valid
/// options document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StickyOptions {
    /// Gap kept from the viewport edge for elements that do not set one.
    pub default_offset: f64,
    /// Leave elements with an unusable rectangle (zero height, NaN, inverted)
    /// unpinned instead of positioning them.
    pub skip_degenerate: bool,
}

impl Default for StickyOptions {
    fn default() -> Self {
        Self {
            default_offset: 0.0,
            skip_degenerate: true,
        }
    }
}

impl StickyOptions {
    /// Parse options from a JSON document.
    ///
    /// # Errors
    /// Returns an error if the document is not valid JSON, has unknown keys,
    /// or sets a non-finite default offset.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(text).context("parsing sticky options")?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_to_string(path)
            .with_context(|| format!("reading sticky options from {}", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Check values that serde cannot.
    ///
    /// # Errors
    /// Returns an error when `default_offset` is NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.default_offset.is_finite(),
            "default_offset must be finite, got {}",
            self.default_offset
        );
        Ok(())
    }

    /// Gap for an element, falling back to [`Self::default_offset`].
    pub fn offset_or_default(&self, offset: Option<f64>) -> f64 {
        offset.unwrap_or(self.default_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let options = StickyOptions::from_json_str("{}");
        assert_eq!(options.ok(), Some(StickyOptions::default()));
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let options = StickyOptions::from_json_str(r#"{"default_offset": 8}"#)
            .unwrap_or_else(|err| panic!("options: {err:#}"));
        assert_eq!(options.default_offset, 8.0);
        assert!(options.skip_degenerate);
        assert_eq!(options.offset_or_default(None), 8.0);
        assert_eq!(options.offset_or_default(Some(2.0)), 2.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = StickyOptions::from_json_str(r#"{"defualt_offset": 8}"#);
        assert!(err.is_err());
    }

    #[test]
    fn missing_file_mentions_path() {
        let path = Path::new("/nonexistent/sticky-options.json");
        let message = StickyOptions::load(path)
            .err()
            .map(|err| format!("{err:#}"))
            .unwrap_or_default();
        assert!(message.contains("sticky-options.json"), "{message}");
    }
}
