//! Text codec configuration
//!
//! ```
//! use nebula_variant::TextCodecConfig;
//!
//! let config = TextCodecConfig::default();
//! assert!(config.honor_variant_layout);
//!
//! let iso = TextCodecConfig::rfc3339();
//! assert!(!iso.honor_variant_layout);
//! assert!(iso.validate().is_ok());
//! ```

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VariantError};
use crate::variant::DEFAULT_LAYOUT;

/// RFC 3339 layout with fractional seconds and a `+hh:mm` offset
pub const RFC3339_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// How variants cross the text boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextCodecConfig {
    /// Layout for time tokens, and the layout attached to decoded variants
    pub layout: String,

    /// Format time tokens with the variant's own layout instead of [`Self::layout`]
    pub honor_variant_layout: bool,
}

impl Default for TextCodecConfig {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT.to_owned(),
            honor_variant_layout: true,
        }
    }
}

impl TextCodecConfig {
    /// RFC 3339 time tokens regardless of the variant's layout
    pub fn rfc3339() -> Self {
        Self {
            layout: RFC3339_LAYOUT.to_owned(),
            honor_variant_layout: false,
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    #[must_use]
    pub fn with_honor_variant_layout(mut self, honor: bool) -> Self {
        self.honor_variant_layout = honor;
        self
    }

    /// Reject an empty layout or one with unknown strftime specifiers
    pub fn validate(&self) -> Result<()> {
        if self.layout.is_empty() {
            return Err(VariantError::config("time layout is empty"));
        }
        if StrftimeItems::new(&self.layout).any(|item| matches!(item, Item::Error)) {
            return Err(VariantError::config(format!(
                "invalid time layout '{}'",
                self.layout
            )));
        }
        Ok(())
    }
}
