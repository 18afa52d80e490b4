//! Formula suggestion
//!
//! Maps a prompt to a ready-to-apply formula template plus an explanation.
//! Per-row references use column names (bound from the current row when the
//! formula is applied); whole-column aggregates use letter ranges.

use crate::error::{EngineError, EngineResult};
use sheetsense_core::Table;
use sheetsense_formula::column_letter;

/// Header keywords that indicate a revenue-like column
const REVENUE_KEYWORDS: &[&str] = &["revenue", "sales", "income", "price", "amount"];

/// Header keywords that indicate a cost-like column
const COST_KEYWORDS: &[&str] = &["cost", "expense", "cogs", "spending"];

/// A suggested formula with a plain-language explanation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaSuggestion {
    pub formula: String,
    pub explanation: String,
}

/// Suggest a formula for a prompt against a table.
///
/// Pattern checks run in a fixed order; the first hit wins and an
/// unmatched prompt gets a generic comparison template. Never fails on a
/// table with at least one column.
pub fn suggest_formula(table: &Table, prompt: &str) -> EngineResult<FormulaSuggestion> {
    if table.column_count() == 0 {
        return Err(EngineError::NoColumns);
    }
    let prompt = prompt.to_lowercase();
    let headers = table.schema().names();

    if prompt.contains("margin") {
        let revenue = find_column(headers, REVENUE_KEYWORDS);
        let cost = find_column(headers, COST_KEYWORDS);
        if let (Some(revenue), Some(cost)) = (revenue, cost) {
            return Ok(FormulaSuggestion {
                formula: format!("=({} - {}) / {}", revenue, cost, revenue),
                explanation: format!(
                    "Calculates the profit margin by subtracting {} from {} and dividing \
                     by {}. The result is a decimal fraction per row.",
                    cost, revenue, revenue
                ),
            });
        }
    }

    if prompt.contains("categor") {
        if let Some((name, _)) = numeric_column(table) {
            return Ok(FormulaSuggestion {
                formula: format!(
                    "=IF({} > 1000, \"High\", IF({} > 500, \"Medium\", \"Low\"))",
                    name, name
                ),
                explanation: format!(
                    "Labels each row by its {} value: \"High\" above 1000, \"Medium\" \
                     above 500, \"Low\" otherwise. Adjust the thresholds as needed.",
                    name
                ),
            });
        }
    }

    if prompt.contains("lookup") {
        return Ok(FormulaSuggestion {
            formula: "=VLOOKUP(A2, A:B, 2, TRUE)".to_string(),
            explanation: "Searches for the value of cell A2 in the first column of the \
                          range A:B and returns the matching row's second column. The \
                          TRUE argument requires an exact match. Adjust the range and \
                          column index to your data."
                .to_string(),
        });
    }

    if prompt.contains("outlier") || prompt.contains("highlight") {
        if let Some((name, idx)) = numeric_column(table) {
            let letter = column_letter(idx);
            return Ok(FormulaSuggestion {
                formula: format!(
                    "=IF(ABS({} - AVERAGE({}:{})) > 2*STDEV({}:{}), \"Outlier\", \"Normal\")",
                    name, letter, letter, letter, letter
                ),
                explanation: format!(
                    "Flags a row as an outlier when its {} value is more than two \
                     standard deviations from the column average.",
                    name
                ),
            });
        }
    }

    if prompt.contains("sum") || prompt.contains("total") {
        if let Some((name, idx)) = numeric_column(table) {
            let letter = column_letter(idx);
            return Ok(FormulaSuggestion {
                formula: format!("=SUM({}:{})", letter, letter),
                explanation: format!("Sums every value in the {} column.", name),
            });
        }
    }

    if prompt.contains("average") || prompt.contains("mean") {
        if let Some((name, idx)) = numeric_column(table) {
            let letter = column_letter(idx);
            return Ok(FormulaSuggestion {
                formula: format!("=AVERAGE({}:{})", letter, letter),
                explanation: format!("Averages every value in the {} column.", name),
            });
        }
    }

    if prompt.contains("count") || prompt.contains("frequency") {
        let name = headers.first().map(String::as_str).unwrap_or_default();
        let letter = column_letter(0);
        return Ok(FormulaSuggestion {
            formula: format!("=COUNTIF({}:{}, \"criteria\")", letter, letter),
            explanation: format!(
                "Counts cells in the {} column matching the criteria. Replace \
                 \"criteria\" with a value or a pattern using * as a wildcard.",
                name
            ),
        });
    }

    if prompt.contains("if") || prompt.contains("condition") {
        return Ok(FormulaSuggestion {
            formula: "=IF(A2>100, \"Over Budget\", \"Within Budget\")".to_string(),
            explanation: "Evaluates the condition A2>100 and returns \"Over Budget\" \
                          when true, \"Within Budget\" otherwise. Adjust the condition \
                          and labels to your needs."
                .to_string(),
        });
    }

    Ok(FormulaSuggestion {
        formula: "=IF(A2>B2, A2-B2, \"N/A\")".to_string(),
        explanation: "Compares the values in columns A and B, returning the difference \
                      when A is greater, or \"N/A\" otherwise. Customize it for your \
                      data."
            .to_string(),
    })
}

/// First header containing any keyword, in keyword priority order
fn find_column<'a>(headers: &'a [String], keywords: &[&str]) -> Option<&'a str> {
    for keyword in keywords {
        if let Some(name) = headers.iter().find(|h| h.to_lowercase().contains(keyword)) {
            return Some(name.as_str());
        }
    }
    None
}

/// First column with any numeric-looking value
fn numeric_column(table: &Table) -> Option<(&str, usize)> {
    for col in 0..table.column_count() {
        let has_numeric = table.column_values(col).any(|v| v.as_number().is_some());
        if has_numeric {
            return table.schema().name(col).map(|n| (n, col));
        }
    }
    None
}
