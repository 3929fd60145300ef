//! Fixed-point `{key}` template expansion
//!
//! Values in the output database reference variables as `{key}`. Each pass
//! sweeps every output value once, replacing placeholders with the current
//! variable values. Text produced by a substitution is only rescanned on the
//! next pass. Passes repeat until nothing changes or the pass cap is hit.
//!
//! Placeholders are found with a plain token scanner and resolved by direct
//! lookup, so keys match literally whatever characters they contain.

use super::PropertyMap;
use crate::error::{Result, props as props_error};

/// Pass cap used when none is configured
pub const DEFAULT_MAX_PASSES: usize = 10;

/// What to do with a `{name}` token whose name is not a variable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnresolvedPolicy {
    /// Abort expansion with `UnresolvedPlaceholder`
    #[default]
    Error,
    /// Leave the token in place for a later build step
    Keep,
}

/// Expansion settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandOptions {
    pub max_passes: usize,
    pub unresolved: UnresolvedPolicy,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
            unresolved: UnresolvedPolicy::default(),
        }
    }
}

/// Outcome of an expansion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionReport {
    /// Number of sweeps performed, including the final unchanged one
    pub passes: usize,
    /// Whether a sweep finished without changing any value
    pub converged: bool,
}

/// Expand `{key}` placeholders in `output` against `variables`, in place
///
/// Hitting the pass cap is not an error: the values are left partially
/// resolved and the report says `converged: false`.
pub fn expand(
    output: &mut PropertyMap,
    variables: &PropertyMap,
    options: ExpandOptions,
) -> Result<ExpansionReport> {
    let mut report = ExpansionReport {
        passes: 0,
        converged: false,
    };

    while report.passes < options.max_passes {
        report.passes += 1;

        let mut changed = false;
        for (key, value) in output.iter_mut() {
            let swept = substitute_once(value, variables, options.unresolved)
                .map_err(|placeholder| props_error::unresolved(placeholder, key))?;

            if swept != *value {
                *value = swept;
                changed = true;
            }
        }

        tracing::trace!(pass = report.passes, changed, "Substitution pass");

        if !changed {
            report.converged = true;
            break;
        }
    }

    if !report.converged {
        tracing::debug!(
            max_passes = options.max_passes,
            "Expansion stopped at pass cap before reaching a fixed point"
        );
    }

    Ok(report)
}

/// One substitution sweep over `value`
///
/// At each `{`, the longest variable name followed by `}` wins, so names that
/// contain braces still match. Returns the unresolved placeholder name on
/// lookup failure under `UnresolvedPolicy::Error`.
fn substitute_once(
    value: &str,
    variables: &PropertyMap,
    policy: UnresolvedPolicy,
) -> std::result::Result<String, String> {
    let mut result = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        if let Some((close, replacement)) = longest_known_name(after_open, variables) {
            result.push_str(replacement);
            rest = &after_open[close + 1..];
            continue;
        }

        let Some(close) = after_open.find(['{', '}']) else {
            // No closing brace anywhere after this one
            result.push_str(&rest[open..]);
            return Ok(result);
        };

        if after_open.as_bytes()[close] == b'{' {
            // Nested opener: the token, if any, starts there instead
            result.push_str(&rest[open..=open + close]);
            rest = &after_open[close..];
            continue;
        }

        let name = &after_open[..close];
        if is_placeholder_name(name) && policy == UnresolvedPolicy::Error {
            return Err(name.to_string());
        }
        result.push_str(&rest[open..=open + 1 + close]);
        rest = &after_open[close + 1..];
    }

    result.push_str(rest);
    Ok(result)
}

/// Position of the `}` closing the longest variable name at the start of
/// `after_open`, with that variable's value
fn longest_known_name<'v>(
    after_open: &str,
    variables: &'v PropertyMap,
) -> Option<(usize, &'v str)> {
    after_open
        .match_indices('}')
        .filter_map(|(close, _)| variables.get(&after_open[..close]).map(|value| (close, value)))
        .last()
}

/// Whether unmatched `{text}` should be treated as a missing variable
/// rather than literal braces
fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace)
}
