//! The masking-operator contract and its shared hook orchestration.
//!
//! - **`hooks`**: subscriber lists and the contexts handed to subscribers
//! - **`regex_operator`**: the regex-backed reference operator
//!
//! Operators implement [`MaskingOperator::mask`] over their own matching
//! logic and route it through [`mask_with_hooks`], which wraps that logic in
//! the pre-match and post-match chains.

mod hooks;
#[cfg(feature = "regex")]
mod regex_operator;

use std::{rc::Rc, sync::Arc};

pub use hooks::{AfterMaskContext, AfterMaskHook, BeforeMaskContext, BeforeMaskHook, MaskingHooks};
#[cfg(feature = "regex")]
pub use regex_operator::{
    RegexMaskingOperator, RegexMaskingOperatorBuilder, MASK_PLACEHOLDER,
    WHOLE_MATCH_REPLACEMENT,
};

use crate::result::MaskingResult;

/// A redaction strategy.
///
/// Hosts hold operators without knowing their concrete type, typically as
/// `Vec<Box<dyn MaskingOperator>>`, and call `mask` once per candidate string.
///
/// ```rust
/// use masking::{mask_with_hooks, MaskingHooks, MaskingOperator, MaskingResult};
///
/// /// Masks any value that looks like a bearer token.
/// struct BearerOperator {
///     hooks: MaskingHooks,
/// }
///
/// impl MaskingOperator for BearerOperator {
///     fn mask(&self, value_to_mask: &str, mask: &str) -> MaskingResult {
///         mask_with_hooks(&self.hooks, value_to_mask, mask, |input, mask| {
///             match input.strip_prefix("Bearer ") {
///                 Some(_) => MaskingResult::matched(format!("Bearer {mask}")),
///                 None => MaskingResult::unmatched(input),
///             }
///         })
///     }
/// }
///
/// let op = BearerOperator { hooks: MaskingHooks::new() };
/// assert_eq!(op.mask("Bearer abc", "***").value(), "Bearer ***");
/// assert_eq!(op.mask("plain", "***").value(), "plain");
/// ```
pub trait MaskingOperator {
    /// Tests `value_to_mask` and, on a match, replaces the sensitive content
    /// with `mask`.
    ///
    /// On no match the returned value is the tested input, unchanged.
    fn mask(&self, value_to_mask: &str, mask: &str) -> MaskingResult;
}

/// Runs `matcher` between the pre-match and post-match chains of `hooks`.
///
/// 1. Pre-match subscribers run; if any cancels, returns
///    [`MaskingResult::NO_MATCH`] without calling `matcher`.
/// 2. `matcher` is called with the (possibly rewritten) input and `mask`.
/// 3. Post-match subscribers run and may replace the returned value. The
///    match flag computed by `matcher` is kept.
pub fn mask_with_hooks<F>(
    hooks: &MaskingHooks,
    value_to_mask: &str,
    mask: &str,
    matcher: F,
) -> MaskingResult
where
    F: FnOnce(&str, &str) -> MaskingResult,
{
    let Some(effective_input) = hooks.run_before_mask(value_to_mask) else {
        return MaskingResult::NO_MATCH;
    };
    let result = matcher(&effective_input, mask);
    hooks.run_after_mask(result)
}

impl<T> MaskingOperator for &T
where
    T: MaskingOperator + ?Sized,
{
    fn mask(&self, value_to_mask: &str, mask: &str) -> MaskingResult {
        (**self).mask(value_to_mask, mask)
    }
}

impl<T> MaskingOperator for Box<T>
where
    T: MaskingOperator + ?Sized,
{
    fn mask(&self, value_to_mask: &str, mask: &str) -> MaskingResult {
        (**self).mask(value_to_mask, mask)
    }
}

impl<T> MaskingOperator for Rc<T>
where
    T: MaskingOperator + ?Sized,
{
    fn mask(&self, value_to_mask: &str, mask: &str) -> MaskingResult {
        (**self).mask(value_to_mask, mask)
    }
}

impl<T> MaskingOperator for Arc<T>
where
    T: MaskingOperator + ?Sized,
{
    fn mask(&self, value_to_mask: &str, mask: &str) -> MaskingResult {
        (**self).mask(value_to_mask, mask)
    }
}
