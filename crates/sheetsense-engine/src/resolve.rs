//! Field resolution: prompt text to concrete columns
//!
//! Resolution never fails on a non-empty schema; when nothing in the prompt
//! matches, the first column is the deterministic fallback.

use crate::error::{EngineError, EngineResult};
use lazy_regex::regex_captures;
use sheetsense_core::Schema;

/// Column-name keywords that usually denote a numeric measure
pub const NUMERIC_KEYWORDS: &[&str] = &[
    "price", "cost", "amount", "value", "revenue", "sales", "quantity", "score", "rating",
];

/// Column-name keywords that usually denote a categorical dimension
pub const CATEGORY_KEYWORDS: &[&str] = &[
    "category", "type", "status", "region", "country", "department", "group",
];

/// Resolve a prompt fragment to a column index.
///
/// Priority order: a column name mentioned verbatim in the prompt, then the
/// word after "by" matched against column names by substring overlap, then
/// `hints` keywords matched against column names, then the first column.
pub fn resolve_field(prompt: &str, schema: &Schema, hints: &[&str]) -> EngineResult<usize> {
    if schema.is_empty() {
        return Err(EngineError::NoColumns);
    }
    Ok(match_field(&prompt.to_lowercase(), schema, hints).unwrap_or(0))
}

/// Resolve the sort field for ranking prompts.
///
/// Prefers columns that look numeric: after direct mentions, prompt keywords
/// like "price" or "score" pick a matching column, and failing that the
/// first column whose name looks like a measure.
pub fn resolve_sort_field(prompt: &str, schema: &Schema) -> EngineResult<usize> {
    if schema.is_empty() {
        return Err(EngineError::NoColumns);
    }
    let prompt = prompt.to_lowercase();

    if let Some(idx) = match_field(&prompt, schema, NUMERIC_KEYWORDS) {
        return Ok(idx);
    }

    let numeric_name = schema.names().iter().position(|name| {
        let lower = name.to_lowercase();
        NUMERIC_KEYWORDS
            .iter()
            .chain(&["number", "count"])
            .any(|k| lower.contains(k))
    });

    Ok(numeric_name.unwrap_or(0))
}

fn match_field(prompt_lower: &str, schema: &Schema, hints: &[&str]) -> Option<usize> {
    // 1. A column name appearing verbatim in the prompt
    for (idx, name) in schema.names().iter().enumerate() {
        if prompt_lower.contains(&name.to_lowercase()) {
            return Some(idx);
        }
    }

    // 2. "by <word>": closest column by substring overlap
    if let Some((_, word)) = regex_captures!(r"by\s+(\w+)", prompt_lower) {
        return Some(closest_field(word, schema));
    }

    // 3. Domain keywords
    for hint in hints {
        if prompt_lower.contains(hint) {
            if let Some(idx) = schema
                .names()
                .iter()
                .position(|name| name.to_lowercase().contains(hint))
            {
                return Some(idx);
            }
        }
    }

    None
}

/// Column whose name overlaps `term` the most.
///
/// Overlap means case-insensitive containment in either direction, scored
/// by the shorter length; ties keep the earlier column.
fn closest_field(term: &str, schema: &Schema) -> usize {
    let mut best = 0;
    let mut best_score = 0;

    for (idx, name) in schema.names().iter().enumerate() {
        let lower = name.to_lowercase();
        if lower == term {
            return idx;
        }
        if lower.contains(term) || term.contains(lower.as_str()) {
            let score = lower.len().min(term.len());
            if score > best_score {
                best_score = score;
                best = idx;
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(names: &[&str]) -> Schema {
        Schema::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_verbatim_mention_wins() {
        let s = schema(&["product", "region", "revenue"]);
        assert_eq!(resolve_field("summarize by Region", &s, &[]).unwrap(), 1);
    }

    #[test]
    fn test_by_word_overlap() {
        let s = schema(&["product_name", "sales_region", "total"]);
        // "region" is not a column, but overlaps "sales_region"
        assert_eq!(resolve_field("group by region", &s, &[]).unwrap(), 1);
    }

    #[test]
    fn test_hint_keywords() {
        let s = schema(&["id", "item_category", "price"]);
        assert_eq!(
            resolve_field("summarize per category please", &s, CATEGORY_KEYWORDS).unwrap(),
            1
        );
    }

    #[test]
    fn test_fallback_first_column() {
        let s = schema(&["alpha", "beta"]);
        assert_eq!(resolve_field("do something", &s, &[]).unwrap(), 0);
    }

    #[test]
    fn test_empty_schema_errors() {
        let s = Schema::new(vec![]).unwrap();
        assert!(matches!(
            resolve_field("anything", &s, &[]),
            Err(EngineError::NoColumns)
        ));
    }

    #[test]
    fn test_sort_field_prefers_measures() {
        let s = schema(&["name", "unit_price", "stock"]);
        // "price" keyword picks the measure column
        assert_eq!(resolve_sort_field("top 5 by price", &s).unwrap(), 1);
        // No mention at all: first measure-looking column
        assert_eq!(resolve_sort_field("show the best ones", &s).unwrap(), 1);
    }

    #[test]
    fn test_sort_field_direct_mention_beats_keywords() {
        let s = schema(&["name", "amount"]);
        assert_eq!(resolve_sort_field("sort by name", &s).unwrap(), 0);
    }
}
