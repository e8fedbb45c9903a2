//! Pluggable masking operators for redacting sensitive text.
//!
//! This crate separates:
//! - **Operators**: strategies that decide whether a value contains sensitive
//!   content and, if so, what it should be replaced with.
//! - **Hooks**: caller-registered observers that run before and after an
//!   operator matches, able to veto, rewrite the input, or override the output.
//!
//! A host pipeline holds a collection of operators (usually as
//! `Box<dyn MaskingOperator>`) and calls [`MaskingOperator::mask`] for each
//! candidate string:
//!
//! ```rust
//! use masking::{MaskingOperator, RegexMaskingOperator};
//! use regex::Regex;
//!
//! let op = RegexMaskingOperator::new(Regex::new(r"\d{4}-\d{4}").unwrap());
//! let result = op.mask("card 1234-5678 used", "***MASK***");
//!
//! assert!(result.is_match());
//! assert_eq!(result.value(), "card ***MASK*** used");
//! ```
//!
//! Key rules:
//! - A value that does not match passes through unchanged; it is never
//!   replaced with the mask.
//! - A cancelled attempt returns [`MaskingResult::NO_MATCH`].
//! - Post-match hooks may replace the masked value but never the match flag.
//!
//! What this crate does not do:
//! - perform I/O or logging on its own
//! - discover, order, or orchestrate operators across a whole log event
//! - ship a catalog of built-in detection patterns
//!
//! The `slog` feature adds `slog::Value` adapters that log masked output.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod error;
mod operator;
mod result;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use error::MaskingError;
#[cfg(feature = "regex")]
pub use operator::{
    RegexMaskingOperator, RegexMaskingOperatorBuilder, MASK_PLACEHOLDER,
    WHOLE_MATCH_REPLACEMENT,
};
pub use operator::{
    mask_with_hooks, AfterMaskContext, AfterMaskHook, BeforeMaskContext, BeforeMaskHook,
    MaskingHooks, MaskingOperator,
};
pub use result::MaskingResult;
