//! Adapters for emitting masking output through `slog`.
//!
//! This module connects [`MaskingOperator`] with `slog` by providing
//! `slog::Value` implementations:
//! - [`MaskingResult`] logs as a nested structured value
//!   (`{"is_match": .., "value": ..}`) via `slog`'s nested-value support.
//! - [`MaskedValue`] logs as a plain string: the operator's output value,
//!   or the original input when the attempt was cancelled.
//!
//! Logging never fails because of this module: if a result cannot be
//! converted to JSON, a placeholder string is emitted instead.
//!
//! It does not configure `slog` or decide which operators apply to which keys.

use std::fmt;

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{operator::MaskingOperator, result::MaskingResult};

const SERIALIZATION_FAILED: &str = "Failed to serialize masking result";

impl SlogValue for MaskingResult {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let json = serde_json::to_value(self)
            .unwrap_or_else(|_| JsonValue::String(SERIALIZATION_FAILED.to_string()));
        SlogValue::serialize(&slog::Serde(json), record, key, serializer)
    }
}

/// A `slog::Value` holding the string an operator decided should be logged.
///
/// Built with [`MaskValueExt::masked`]. The operator runs once, when the
/// value is built; serializing only emits the stored string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedValue {
    is_match: bool,
    value: String,
}

impl MaskedValue {
    fn new(original: &str, result: MaskingResult) -> Self {
        if result.is_no_match() {
            return Self {
                is_match: false,
                value: original.to_string(),
            };
        }
        Self {
            is_match: result.is_match(),
            value: result.into_value(),
        }
    }

    /// Whether the operator masked the value.
    pub fn is_match(&self) -> bool {
        self.is_match
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for MaskedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl SlogValue for MaskedValue {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.value)
    }
}

/// Runs an operator and wraps its outcome as a `slog::Value`.
///
/// ## Example
/// ```ignore
/// use masking::slog::MaskValueExt;
///
/// info!(logger, "login"; "email" => email_operator.masked(&email, "***"));
/// ```
pub trait MaskValueExt: MaskingOperator {
    /// Masks `value` and returns what should be logged for it.
    ///
    /// This is the value of the operator's result, so hook rewrites and
    /// overrides apply on both paths. When a pre-match hook cancelled the
    /// attempt, it is `value` unchanged.
    fn masked(&self, value: &str, mask: &str) -> MaskedValue {
        MaskedValue::new(value, self.mask(value, mask))
    }
}

impl<T> MaskValueExt for T where T: MaskingOperator + ?Sized {}
