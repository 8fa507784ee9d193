//! Variant error types
//!
//! Conversions between kinds never fail, so this type only surfaces at the
//! text boundary and when validating codec configuration.

use thiserror::Error;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Errors from the text boundary and configuration
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    /// Structurally malformed document token
    #[error("Cannot decode '{input}': {reason}")]
    Decode { input: String, reason: String },

    /// Document writer failure
    #[error("Encoding error: {0}")]
    Encode(String),

    /// Invalid codec configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl VariantError {
    /// Create a decode error
    pub fn decode(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an encode error
    pub fn encode(reason: impl Into<String>) -> Self {
        Self::Encode(reason.into())
    }

    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

impl VariantError {
    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::Decode { .. } => "VARIANT_DECODE_ERROR",
            Self::Encode(_) => "VARIANT_ENCODE_ERROR",
            Self::Config(_) => "VARIANT_CONFIG_ERROR",
        }
    }

    /// Check if the caller supplied the bad input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Config(_))
    }
}

// ============================================================================
// EXTERNAL ERROR CONVERSIONS
// ============================================================================

/// Convert from serde_json errors
impl From<serde_json::Error> for VariantError {
    fn from(error: serde_json::Error) -> Self {
        Self::Encode(error.to_string())
    }
}

/// Result type alias for boundary operations
pub type Result<T> = std::result::Result<T, VariantError>;
