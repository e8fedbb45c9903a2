//! Construction-time errors.
//!
//! Masking itself is infallible; every error here surfaces while an operator
//! is being wired up.

use thiserror::Error;

/// Errors raised while constructing a masking operator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MaskingError {
    /// A required constructor argument was absent.
    #[error("missing required argument `{parameter}`")]
    MissingArgument {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// The pattern text failed to compile.
    #[cfg(feature = "regex")]
    #[error("invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The replacement template references a group the pattern does not define.
    #[error("replacement pattern references unknown capture group `{reference}`")]
    UnknownCaptureGroup {
        /// The group reference as written in the template, without the `$`.
        reference: String,
    },
}

impl MaskingError {
    pub(crate) fn missing(parameter: &'static str) -> Self {
        Self::MissingArgument { parameter }
    }

    /// Name of the missing parameter, if this is a [`MaskingError::MissingArgument`].
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::MissingArgument { parameter } => Some(*parameter),
            _ => None,
        }
    }
}
