//! The outcome of a single masking attempt.

/// Result of one call to [`crate::MaskingOperator::mask`].
///
/// When `is_match` is `false`, `value` is the input the operator tested,
/// passed through verbatim. When it is `true`, `value` is the computed
/// replacement (or whatever a post-match hook replaced it with).
///
/// Results are plain values: they are compared by value, built fresh on every
/// call and never retained by the operator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskingResult {
    is_match: bool,
    value: String,
}

impl MaskingResult {
    /// No attempt was made, or a pre-match hook cancelled it.
    ///
    /// Callers must treat this exactly like a non-match and ignore the value.
    pub const NO_MATCH: Self = Self {
        is_match: false,
        value: String::new(),
    };

    /// A successful match carrying the masked value.
    #[must_use]
    pub fn matched(value: impl Into<String>) -> Self {
        Self {
            is_match: true,
            value: value.into(),
        }
    }

    /// A failed match carrying the tested value unchanged.
    #[must_use]
    pub fn unmatched(value: impl Into<String>) -> Self {
        Self {
            is_match: false,
            value: value.into(),
        }
    }

    /// Whether the operator's pattern matched.
    pub fn is_match(&self) -> bool {
        self.is_match
    }

    /// The masked value on a match, otherwise the tested value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` if this result equals [`MaskingResult::NO_MATCH`].
    pub fn is_no_match(&self) -> bool {
        *self == Self::NO_MATCH
    }

    /// Consumes the result and returns the value.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }

    pub(crate) fn with_value(mut self, value: String) -> Self {
        self.value = value;
        self
    }
}
