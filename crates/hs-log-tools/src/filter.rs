//! Line predicates and the windowed filter stage.

use regex::Regex;

use crate::window::TailWindow;

/// The single predicate applied to a request's raw lines.
#[derive(Debug, Clone, Copy)]
pub enum LineFilter<'a> {
    /// Every line passes.
    All,
    /// Case-sensitive substring containment.
    Substring(&'a str),
    /// Regex match anywhere in the line.
    Pattern(&'a Regex),
}

impl LineFilter<'_> {
    pub fn matches(&self, line: &str) -> bool {
        match self {
            Self::All => true,
            Self::Substring(needle) => line.contains(needle),
            Self::Pattern(re) => re.is_match(line),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

impl std::fmt::Display for LineFilter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("none"),
            Self::Substring(needle) => write!(f, "substring {needle:?}"),
            Self::Pattern(re) => write!(f, "regex /{}/", re.as_str()),
        }
    }
}

/// Keep the last `limit` lines that pass `filter`, oldest first.
///
/// Only the lines handed in are considered. When the caller has already
/// bounded `lines` to the last `limit` raw lines, a filter can only shrink
/// the result; nothing outside that raw window is searched for extra matches.
pub fn filter_window<I>(lines: I, filter: LineFilter<'_>, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut window = TailWindow::new(limit);
    window.extend(lines.into_iter().filter(|line| filter.matches(line)));
    window.into_vec()
}
