//! Pre-match and post-match hook plumbing shared by every operator.
//!
//! Hooks are ordered lists of closures. Each closure receives a mutable
//! context; subscribers run synchronously in registration order and see the
//! mutations of the subscribers before them.
//!
//! Merge rules:
//! - replacement values: the last writer wins
//! - cancellation: any subscriber cancelling cancels the attempt

use std::fmt;

use crate::result::MaskingResult;

/// A pre-match subscriber.
pub type BeforeMaskHook = Box<dyn Fn(&mut BeforeMaskContext) + Send + Sync>;

/// A post-match subscriber.
pub type AfterMaskHook = Box<dyn Fn(&mut AfterMaskContext) + Send + Sync>;

/// State handed to pre-match subscribers.
///
/// Once cancelled, a context stays cancelled:
///
/// ```compile_fail
/// let mut ctx = masking::BeforeMaskContext::new("TEST");
/// ctx.cancel();
/// ctx.cancelled = false;
/// ```
#[derive(Debug)]
pub struct BeforeMaskContext {
    value_to_mask: String,
    cancelled: bool,
}

impl BeforeMaskContext {
    /// Creates a context for `value_to_mask`.
    #[must_use]
    pub fn new(value_to_mask: impl Into<String>) -> Self {
        Self {
            value_to_mask: value_to_mask.into(),
            cancelled: false,
        }
    }

    /// The value that will be tested if the attempt proceeds.
    pub fn value(&self) -> &str {
        &self.value_to_mask
    }

    /// Replaces the value that will be tested and, on no match, returned.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value_to_mask = value.into();
    }

    /// Vetoes the attempt. The operator returns [`MaskingResult::NO_MATCH`].
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether any subscriber has cancelled the attempt.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// State handed to post-match subscribers.
///
/// Subscribers may replace the masked value but not the match flag:
///
/// ```compile_fail
/// let mut ctx = masking::AfterMaskContext::new(false, "TEST");
/// ctx.set_is_match(true);
/// ```
#[derive(Debug)]
pub struct AfterMaskContext {
    is_match: bool,
    masked_value: String,
}

impl AfterMaskContext {
    /// Creates a context for a computed outcome.
    #[must_use]
    pub fn new(is_match: bool, masked_value: impl Into<String>) -> Self {
        Self {
            is_match,
            masked_value: masked_value.into(),
        }
    }

    /// Whether the operator's pattern matched.
    pub fn is_match(&self) -> bool {
        self.is_match
    }

    /// The value that will be returned, as computed so far.
    pub fn masked_value(&self) -> &str {
        &self.masked_value
    }

    /// Overrides the value that will be returned.
    pub fn set_masked_value(&mut self, value: impl Into<String>) {
        self.masked_value = value.into();
    }
}

/// The subscriber lists of one operator.
///
/// Registration takes `&mut self`, so hooks cannot be added while the
/// operator is being used for masking. Register everything during setup,
/// then share the operator.
#[derive(Default)]
pub struct MaskingHooks {
    before_mask: Vec<BeforeMaskHook>,
    after_mask: Vec<AfterMaskHook>,
}

impl MaskingHooks {
    /// Creates empty subscriber lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pre-match subscriber.
    pub fn on_before_mask<F>(&mut self, hook: F)
    where
        F: Fn(&mut BeforeMaskContext) + Send + Sync + 'static,
    {
        self.before_mask.push(Box::new(hook));
    }

    /// Appends a post-match subscriber.
    pub fn on_after_mask<F>(&mut self, hook: F)
    where
        F: Fn(&mut AfterMaskContext) + Send + Sync + 'static,
    {
        self.after_mask.push(Box::new(hook));
    }

    /// Number of registered pre-match subscribers.
    pub fn before_mask_len(&self) -> usize {
        self.before_mask.len()
    }

    /// Number of registered post-match subscribers.
    pub fn after_mask_len(&self) -> usize {
        self.after_mask.len()
    }

    /// Whether neither list has a subscriber.
    pub fn is_empty(&self) -> bool {
        self.before_mask.is_empty() && self.after_mask.is_empty()
    }

    /// Removes every subscriber from both lists.
    pub fn clear(&mut self) {
        self.before_mask.clear();
        self.after_mask.clear();
    }

    /// Runs the pre-match chain. Returns the value to test, or `None` if cancelled.
    pub(crate) fn run_before_mask(&self, value_to_mask: &str) -> Option<String> {
        let mut ctx = BeforeMaskContext::new(value_to_mask);
        for hook in &self.before_mask {
            hook(&mut ctx);
        }
        if ctx.cancelled {
            None
        } else {
            Some(ctx.value_to_mask)
        }
    }

    /// Runs the post-match chain over `result`. The match flag is preserved.
    pub(crate) fn run_after_mask(&self, result: MaskingResult) -> MaskingResult {
        if self.after_mask.is_empty() {
            return result;
        }
        let mut ctx = AfterMaskContext::new(result.is_match(), result.value());
        for hook in &self.after_mask {
            hook(&mut ctx);
        }
        result.with_value(ctx.masked_value)
    }
}

impl fmt::Debug for MaskingHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskingHooks")
            .field("before_mask", &self.before_mask.len())
            .field("after_mask", &self.after_mask.len())
            .finish()
    }
}
