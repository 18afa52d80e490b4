//! Criteria matching for COUNTIF
//!
//! Criteria are either exact values or text containing the `*` wildcard,
//! which matches any run of characters. Wildcard criteria are translated to
//! an anchored regex; everything else is exact equality.

use crate::evaluator::FormulaValue;
use regex::Regex;

/// Criteria matcher for COUNTIF
#[derive(Debug)]
pub struct CriteriaMatcher {
    criteria_type: CriteriaType,
}

#[derive(Debug)]
enum CriteriaType {
    /// Exact value match
    Exact(FormulaValue),
    /// Wildcard text pattern, pre-compiled
    Wildcard(Regex),
}

impl CriteriaMatcher {
    /// Create a matcher from a criteria value
    pub fn new(criteria: &FormulaValue) -> Self {
        let criteria_type = match criteria {
            FormulaValue::Text(s) if s.contains('*') => {
                match wildcard_regex(s) {
                    Some(re) => CriteriaType::Wildcard(re),
                    // Regex construction only fails on pathological input;
                    // fall back to exact matching on the raw text
                    None => CriteriaType::Exact(criteria.clone()),
                }
            }
            other => CriteriaType::Exact(other.clone()),
        };

        Self { criteria_type }
    }

    /// Check whether a value matches the criteria
    pub fn matches(&self, value: &FormulaValue) -> bool {
        match &self.criteria_type {
            CriteriaType::Wildcard(re) => re.is_match(&value.as_text()),
            CriteriaType::Exact(expected) => match (expected, value) {
                (FormulaValue::Number(a), FormulaValue::Number(b)) => a == b,
                (FormulaValue::Text(a), FormulaValue::Text(b)) => a == b,
                (FormulaValue::Boolean(a), FormulaValue::Boolean(b)) => a == b,
                (FormulaValue::Empty, FormulaValue::Empty) => true,
                _ => false,
            },
        }
    }
}

/// Translate a `*` wildcard pattern to an anchored regex.
///
/// Literal segments are escaped so regex metacharacters in the criteria
/// cannot change the match.
fn wildcard_regex(pattern: &str) -> Option<Regex> {
    let escaped: Vec<String> = pattern.split('*').map(|seg| regex::escape(seg)).collect();
    let body = escaped.join(".*");
    Regex::new(&format!("^{}$", body)).ok()
}
