//! Regex-backed masking operator.
//!
//! The operator tests a compiled pattern against the (possibly hook-rewritten)
//! input. On a match, every non-overlapping match is replaced by the
//! replacement template with the caller's mask substituted for
//! [`MASK_PLACEHOLDER`]. On no match, the input passes through unchanged.
//!
//! Replacement templates use the `regex` crate's syntax: `$1`, `${1}`,
//! `$name` and `${name}` expand to capture groups and `$$` is a literal
//! dollar. Group references are checked against the pattern when the
//! operator is built. `{mask}` is only recognised in literal text, never
//! inside a group reference, so `${mask}` names a capture group.

use regex::Regex;

use super::{
    hooks::{AfterMaskContext, BeforeMaskContext, MaskingHooks},
    mask_with_hooks, MaskingOperator,
};
use crate::{error::MaskingError, result::MaskingResult};

/// Token in a replacement template that is substituted with the caller's mask.
pub const MASK_PLACEHOLDER: &str = "{mask}";

/// Default replacement template: each match is replaced by the mask.
pub const WHOLE_MATCH_REPLACEMENT: &str = MASK_PLACEHOLDER;

/// Masks values that match a regular expression.
///
/// ```rust
/// use masking::{MaskingOperator, RegexMaskingOperator};
/// use regex::Regex;
///
/// // Keep the user name, mask the domain.
/// let op = RegexMaskingOperator::with_replacement(
///     Regex::new(r"(?P<user>[\w.]+)@[\w.]+").unwrap(),
///     "${user}@{mask}",
/// )
/// .unwrap();
///
/// let result = op.mask("mail jane.doe@example.com", "***");
/// assert_eq!(result.value(), "mail jane.doe@***");
/// ```
#[derive(Debug)]
pub struct RegexMaskingOperator {
    regex: Regex,
    replacement_pattern: String,
    template: Vec<TemplatePart>,
    hooks: MaskingHooks,
}

/// A parsed replacement template segment.
#[derive(Clone, Debug, PartialEq, Eq)]
enum TemplatePart {
    /// Replacement syntax ready for `regex`: literal dollars doubled, group
    /// references braced.
    Text(String),
    /// Where the caller's mask goes.
    Mask,
}

impl RegexMaskingOperator {
    /// Creates an operator that replaces each match with the mask.
    #[must_use]
    pub fn new(regex: Regex) -> Self {
        Self {
            regex,
            replacement_pattern: WHOLE_MATCH_REPLACEMENT.to_string(),
            template: vec![TemplatePart::Mask],
            hooks: MaskingHooks::new(),
        }
    }

    /// Creates an operator with an explicit replacement template.
    pub fn with_replacement(
        regex: Regex,
        replacement_pattern: impl Into<String>,
    ) -> Result<Self, MaskingError> {
        let replacement_pattern = replacement_pattern.into();
        let template = parse_template(&regex, &replacement_pattern)?;
        Ok(Self {
            regex,
            replacement_pattern,
            template,
            hooks: MaskingHooks::new(),
        })
    }

    /// Creates an operator from possibly absent arguments.
    ///
    /// Both arguments are required; an absent one is reported as
    /// [`MaskingError::MissingArgument`] naming `regex` or
    /// `replacement_pattern`, the Rust parameter names. The regex is checked
    /// first.
    pub fn try_new(
        regex: Option<Regex>,
        replacement_pattern: Option<String>,
    ) -> Result<Self, MaskingError> {
        let regex = regex.ok_or_else(|| MaskingError::missing("regex"))?;
        let replacement_pattern =
            replacement_pattern.ok_or_else(|| MaskingError::missing("replacement_pattern"))?;
        Self::with_replacement(regex, replacement_pattern)
    }

    /// Compiles `pattern` and creates a whole-match operator.
    pub fn from_pattern(pattern: &str) -> Result<Self, MaskingError> {
        Ok(Self::new(Regex::new(pattern)?))
    }

    #[must_use]
    pub fn builder() -> RegexMaskingOperatorBuilder {
        RegexMaskingOperatorBuilder::default()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The replacement template as configured.
    pub fn replacement_pattern(&self) -> &str {
        &self.replacement_pattern
    }

    pub fn hooks(&self) -> &MaskingHooks {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut MaskingHooks {
        &mut self.hooks
    }

    /// Appends a pre-match subscriber.
    pub fn on_before_mask<F>(&mut self, hook: F)
    where
        F: Fn(&mut BeforeMaskContext) + Send + Sync + 'static,
    {
        self.hooks.on_before_mask(hook);
    }

    /// Appends a post-match subscriber.
    pub fn on_after_mask<F>(&mut self, hook: F)
    where
        F: Fn(&mut AfterMaskContext) + Send + Sync + 'static,
    {
        self.hooks.on_after_mask(hook);
    }

    fn substitute(&self, input: &str, mask: &str) -> MaskingResult {
        let Some(captures) = self.regex.captures(input) else {
            return MaskingResult::unmatched(input);
        };
        let replacement = render_template(&self.template, mask);

        // Only empty matches, at every position: one match over the whole input.
        let first_is_empty = captures.get(0).is_some_and(|found| found.is_empty());
        if first_is_empty && self.matches_empty_everywhere(input) {
            let mut masked = String::new();
            captures.expand(&replacement, &mut masked);
            return MaskingResult::matched(masked);
        }

        MaskingResult::matched(self.regex.replace_all(input, replacement.as_str()))
    }

    fn matches_empty_everywhere(&self, input: &str) -> bool {
        let mut positions = 0;
        for found in self.regex.find_iter(input) {
            if !found.is_empty() {
                return false;
            }
            positions += 1;
        }
        positions == input.chars().count() + 1
    }
}

impl MaskingOperator for RegexMaskingOperator {
    fn mask(&self, value_to_mask: &str, mask: &str) -> MaskingResult {
        mask_with_hooks(&self.hooks, value_to_mask, mask, |input, mask| {
            self.substitute(input, mask)
        })
    }
}

#[derive(Debug)]
enum PatternSource {
    Compiled(Regex),
    Text(String),
}

/// Builder for [`RegexMaskingOperator`].
///
/// ```rust
/// use masking::{MaskingOperator, RegexMaskingOperator};
///
/// let op = RegexMaskingOperator::builder()
///     .pattern(r"\d{3}-\d{2}-(\d{4})")
///     .replacement_pattern("{mask}-$1")
///     .on_before_mask(|ctx| {
///         let trimmed = ctx.value().trim().to_string();
///         ctx.set_value(trimmed);
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(op.mask(" 123-45-6789 ", "***").value(), "***-6789");
/// ```
#[derive(Debug, Default)]
pub struct RegexMaskingOperatorBuilder {
    source: Option<PatternSource>,
    replacement_pattern: Option<String>,
    hooks: MaskingHooks,
}

impl RegexMaskingOperatorBuilder {
    /// Uses an already compiled regex. Replaces any earlier pattern.
    #[must_use]
    pub fn regex(mut self, regex: Regex) -> Self {
        self.source = Some(PatternSource::Compiled(regex));
        self
    }

    /// Uses pattern text, compiled by [`build`](Self::build). Replaces any earlier regex.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.source = Some(PatternSource::Text(pattern.into()));
        self
    }

    /// Sets the replacement template. Defaults to [`WHOLE_MATCH_REPLACEMENT`].
    #[must_use]
    pub fn replacement_pattern(mut self, replacement_pattern: impl Into<String>) -> Self {
        self.replacement_pattern = Some(replacement_pattern.into());
        self
    }

    #[must_use]
    pub fn on_before_mask<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut BeforeMaskContext) + Send + Sync + 'static,
    {
        self.hooks.on_before_mask(hook);
        self
    }

    #[must_use]
    pub fn on_after_mask<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut AfterMaskContext) + Send + Sync + 'static,
    {
        self.hooks.on_after_mask(hook);
        self
    }

    /// Compiles the pattern if needed and validates the replacement template.
    pub fn build(self) -> Result<RegexMaskingOperator, MaskingError> {
        let regex = match self.source {
            Some(PatternSource::Compiled(regex)) => regex,
            Some(PatternSource::Text(pattern)) => Regex::new(&pattern)?,
            None => return Err(MaskingError::missing("regex")),
        };
        let replacement_pattern = self
            .replacement_pattern
            .unwrap_or_else(|| WHOLE_MATCH_REPLACEMENT.to_string());

        let mut operator = RegexMaskingOperator::with_replacement(regex, replacement_pattern)?;
        operator.hooks = self.hooks;
        Ok(operator)
    }
}

/// Splits `template` into literal text, group references and mask
/// placeholders. Group references are braced and literal dollars doubled;
/// references to groups `regex` does not define are rejected.
fn parse_template(regex: &Regex, template: &str) -> Result<Vec<TemplatePart>, MaskingError> {
    let mut parts = Vec::new();
    let mut text = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        push_literal(&mut parts, &mut text, &rest[..pos]);
        rest = &rest[pos + 1..];

        if let Some(after) = rest.strip_prefix('$') {
            text.push_str("$$");
            rest = after;
            continue;
        }

        let (name, tail) = match rest.strip_prefix('{') {
            Some(braced) => match braced.find('}') {
                Some(end) => (&braced[..end], &braced[end + 1..]),
                None => ("", rest),
            },
            None => {
                let end = rest
                    .find(|c: char| c != '_' && !c.is_ascii_alphanumeric())
                    .unwrap_or(rest.len());
                (&rest[..end], &rest[end..])
            }
        };

        // A dollar that does not start a reference is literal.
        if name.is_empty() {
            text.push_str("$$");
            continue;
        }

        if !has_group(regex, name) {
            return Err(MaskingError::UnknownCaptureGroup {
                reference: name.to_string(),
            });
        }
        text.push_str("${");
        text.push_str(name);
        text.push('}');
        rest = tail;
    }

    push_literal(&mut parts, &mut text, rest);
    if !text.is_empty() {
        parts.push(TemplatePart::Text(text));
    }
    Ok(parts)
}

/// Appends literal template text, splitting out mask placeholders.
fn push_literal(parts: &mut Vec<TemplatePart>, text: &mut String, literal: &str) {
    let mut segments = literal.split(MASK_PLACEHOLDER);
    if let Some(first) = segments.next() {
        text.push_str(first);
    }
    for segment in segments {
        if !text.is_empty() {
            parts.push(TemplatePart::Text(std::mem::take(text)));
        }
        parts.push(TemplatePart::Mask);
        text.push_str(segment);
    }
}

fn render_template(parts: &[TemplatePart], mask: &str) -> String {
    let mask = mask.replace('$', "$$");
    parts
        .iter()
        .map(|part| match part {
            TemplatePart::Text(text) => text.as_str(),
            TemplatePart::Mask => mask.as_str(),
        })
        .collect()
}

fn has_group(regex: &Regex, name: &str) -> bool {
    match name.parse::<usize>() {
        Ok(index) => index < regex.captures_len(),
        Err(_) => regex.capture_names().flatten().any(|group| group == name),
    }
}
