//! Decoding of loosely typed tool arguments into a validated [`LogRequest`].
//!
//! All coercion happens here, once. Everything downstream works with the
//! strongly typed fields only.

use regex::Regex;
use serde_json::Value;

use crate::error::{LogError, LogResult};
use crate::filter::LineFilter;

/// Number of lines returned when the caller doesn't ask for a count.
pub const DEFAULT_LINES: usize = 20;

/// A validated tail request.
#[derive(Debug, Clone)]
pub struct LogRequest {
    /// Log file path (never empty).
    pub path: String,
    /// Maximum number of lines to return (always >= 1).
    pub limit: usize,
    /// Substring filter, if one was given.
    pub substring: Option<String>,
    /// Compiled regex filter, if one was given. Takes precedence over `substring`.
    pub pattern: Option<Regex>,
}

impl LogRequest {
    /// Build a request from a JSON arguments object.
    ///
    /// Expects `file` (required), `lines`, `filter` and `regex`. The regex is
    /// compiled here so an invalid pattern fails before any source is opened.
    pub fn from_args(args: &Value, default_lines: usize) -> LogResult<Self> {
        let default_lines = default_lines.max(1);

        let path = match args.get("file").and_then(Value::as_str) {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => return Err(LogError::MissingParameter("file".into())),
        };

        let limit = coerce_line_count(args.get("lines"), default_lines);
        let substring = non_empty_str(args.get("filter"));
        let pattern = non_empty_str(args.get("regex"))
            .map(|p| Regex::new(&p).map_err(|e| LogError::InvalidPattern(e.to_string())))
            .transpose()?;

        Ok(Self {
            path,
            limit,
            substring,
            pattern,
        })
    }

    /// The predicate actually applied. A regex wins over a substring.
    pub fn filter(&self) -> LineFilter<'_> {
        match (&self.pattern, &self.substring) {
            (Some(re), _) => LineFilter::Pattern(re),
            (None, Some(s)) => LineFilter::Substring(s),
            (None, None) => LineFilter::All,
        }
    }

    /// Substring as supplied, or empty.
    pub fn substring_str(&self) -> &str {
        self.substring.as_deref().unwrap_or_default()
    }

    /// Regex source as supplied, or empty.
    pub fn pattern_str(&self) -> &str {
        self.pattern.as_ref().map(Regex::as_str).unwrap_or_default()
    }
}

/// Coerce a `lines` argument to a positive count.
///
/// Numbers are truncated toward zero; numeric strings are parsed. Anything
/// else, and any value below 1, yields `default`.
fn coerce_line_count(value: Option<&Value>, default: usize) -> usize {
    let requested = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.parse::<i64>().ok(),
        _ => None,
    };
    match requested {
        Some(n) if n >= 1 => usize::try_from(n).unwrap_or(default),
        _ => default,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
