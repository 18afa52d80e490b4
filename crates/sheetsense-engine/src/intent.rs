//! Prompt intent classification
//!
//! Ordered pattern matching over the lower-cased prompt. The first matching
//! rule wins, so a prompt mentioning both "summarize" and "top" always
//! groups: grouping is checked before ranking. This precedence is fixed.

use lazy_regex::{regex_captures, regex_is_match};

/// Default result size for top/bottom prompts without an explicit count
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// The classified operation kind of a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Group rows by a field and aggregate numeric columns per group
    GroupAggregate,
    /// Keep the N largest (or smallest) rows by a sort field
    TopN { is_top: bool, limit: usize },
    /// Reorder the full table by a sort field
    Sort { descending: bool },
    /// One summary row of descriptive statistics per numeric column
    Statistics,
    /// Keep rows containing prompt keywords
    Filter,
    /// Per-category counts and averages
    Compare,
    /// No rule matched; return a leading sample unchanged
    Sample,
}

/// Classify a prompt into an operation kind
///
/// Never fails: anything unrecognized is [`Intent::Sample`].
pub fn classify_intent(prompt: &str) -> Intent {
    let prompt = prompt.to_lowercase();

    if regex_is_match!(r"summarize|group|aggregate|count", &prompt) {
        return Intent::GroupAggregate;
    }

    if let Some((_, word, digits)) =
        regex_captures!(r"(top|bottom|highest|lowest|best|worst)\s*(\d+)?", &prompt)
    {
        let is_top = matches!(word, "top" | "highest" | "best");
        // A zero or missing count falls back to the default
        let limit = match digits.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => DEFAULT_TOP_LIMIT,
        };
        return Intent::TopN { is_top, limit };
    }

    if regex_is_match!(r"sort|order", &prompt) {
        let descending = prompt.contains("desc") || prompt.contains("high to low");
        return Intent::Sort { descending };
    }

    if regex_is_match!(r"average|mean|median|sum|total|statistics", &prompt) {
        return Intent::Statistics;
    }

    if regex_is_match!(r"filter|where|find|search|contains", &prompt) {
        return Intent::Filter;
    }

    if regex_is_match!(r"compare|vs|versus|difference", &prompt) {
        return Intent::Compare;
    }

    Intent::Sample
}
