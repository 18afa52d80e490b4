//! Service request/response surface
//!
//! The shapes a hosting server exchanges with clients: analyze a table
//! against a prompt, or generate a formula suggestion. Transport and
//! status codes belong to the host; this layer distinguishes client
//! errors (bad input) from internal ones.

use crate::records::{records_from_table, table_from_records};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sheetsense_engine::{generate_insights, suggest_formula, EngineError, InsightProvider};
use thiserror::Error;

/// Rows sampled for the optional remote insight call
const INSIGHT_SAMPLE_ROWS: usize = 5;

/// Input for the analyze operation
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub data: Vec<Map<String, Value>>,
    pub prompt: String,
}

/// Output of the analyze operation
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub data: Vec<Map<String, Value>>,
    pub summary: String,
}

/// Input for the generate-formula operation
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateFormulaRequest {
    pub data: Vec<Map<String, Value>>,
    pub prompt: String,
    #[serde(default)]
    pub headers: Vec<String>,
}

/// Output of the generate-formula operation
#[derive(Debug, Clone, Serialize)]
pub struct GenerateFormulaResponse {
    pub formula: String,
    pub explanation: String,
}

/// Service-level failures
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or empty input; the caller should fix the request
    #[error("{0}")]
    InvalidInput(String),

    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Whether the host should report this as a client error (HTTP 4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::InvalidInput(_))
    }
}

impl From<EngineError> for ServiceError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NoColumns | EngineError::EmptyTable => {
                ServiceError::InvalidInput(format!(
                    "{}. Upload a file or paste data first.",
                    err
                ))
            }
            EngineError::Table(e) => ServiceError::Internal(e.to_string()),
        }
    }
}

/// Run the analyze operation.
///
/// The local engine always produces the result table; `provider` may add
/// supplementary text to the summary but can never fail the request.
pub fn analyze_request(
    request: &AnalyzeRequest,
    provider: &dyn InsightProvider,
) -> Result<AnalyzeResponse, ServiceError> {
    if request.data.is_empty() {
        return Err(ServiceError::InvalidInput(
            "Valid data array is required".to_string(),
        ));
    }
    if request.prompt.trim().is_empty() {
        return Err(ServiceError::InvalidInput("Prompt is required".to_string()));
    }

    let table = table_from_records(&request.data)
        .map_err(|e| ServiceError::Internal(e.to_string()))?;

    let result = sheetsense_engine::analyze(&table, &request.prompt)?;
    let insights = generate_insights(&table);

    let mut summary = format!("Smart Analysis: {} {}", result.summary, insights)
        .trim_end()
        .to_string();

    if let Some(extra) = provider.try_insight(&request.prompt, &table.head(INSIGHT_SAMPLE_ROWS)) {
        summary.push(' ');
        summary.push_str(&extra);
    }

    Ok(AnalyzeResponse {
        data: records_from_table(&result.data),
        summary,
    })
}

/// Run the generate-formula operation
pub fn generate_formula_request(
    request: &GenerateFormulaRequest,
) -> Result<GenerateFormulaResponse, ServiceError> {
    if request.data.is_empty() {
        return Err(ServiceError::InvalidInput(
            "Valid data array is required".to_string(),
        ));
    }
    if request.prompt.trim().is_empty() {
        return Err(ServiceError::InvalidInput("Prompt is required".to_string()));
    }

    // The explicit header list, when given, fixes column order; otherwise
    // the first record's keys do
    let table = if request.headers.is_empty() {
        table_from_records(&request.data)
    } else {
        table_with_headers(&request.headers, &request.data)
    }
    .map_err(|e| ServiceError::Internal(e.to_string()))?;

    let suggestion = suggest_formula(&table, &request.prompt)?;

    Ok(GenerateFormulaResponse {
        formula: suggestion.formula,
        explanation: suggestion.explanation,
    })
}

fn table_with_headers(
    headers: &[String],
    records: &[Map<String, Value>],
) -> Result<sheetsense_core::Table, sheetsense_core::TableError> {
    let schema = sheetsense_core::Schema::new(headers.to_vec())?;
    let mut table = sheetsense_core::Table::new(schema);
    for record in records {
        let row: Vec<_> = headers
            .iter()
            .map(|name| {
                record
                    .get(name)
                    .map(crate::records::cell_from_json)
                    .unwrap_or(sheetsense_core::CellValue::Empty)
            })
            .collect();
        table.push_row(row)?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sheetsense_core::Table;
    use sheetsense_engine::NoRemote;

    fn records(value: Value) -> Vec<Map<String, Value>> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|v| match v {
                    Value::Object(map) => map,
                    _ => panic!("expected object"),
                })
                .collect(),
            _ => panic!("expected array"),
        }
    }

    #[test]
    fn test_empty_data_is_client_error() {
        let request = AnalyzeRequest {
            data: vec![],
            prompt: "summarize".to_string(),
        };
        let err = analyze_request(&request, &NoRemote).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_empty_prompt_is_client_error() {
        let request = AnalyzeRequest {
            data: records(json!([{"a": 1}])),
            prompt: "  ".to_string(),
        };
        let err = analyze_request(&request, &NoRemote).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_analyze_summary_prefix() {
        let request = AnalyzeRequest {
            data: records(json!([{"region": "north", "amount": 10}])),
            prompt: "summarize by region".to_string(),
        };
        let response = analyze_request(&request, &NoRemote).unwrap();
        assert!(response.summary.starts_with("Smart Analysis: Grouped 1 records by region"));
        assert_eq!(response.data.len(), 1);
    }

    #[test]
    fn test_provider_text_is_appended() {
        struct Canned;
        impl InsightProvider for Canned {
            fn try_insight(&self, _prompt: &str, _sample: &Table) -> Option<String> {
                Some("Remote note.".to_string())
            }
        }

        let request = AnalyzeRequest {
            data: records(json!([{"a": 1}])),
            prompt: "show me things".to_string(),
        };
        let response = analyze_request(&request, &Canned).unwrap();
        assert!(response.summary.ends_with("Remote note."));
        // The computed table never depends on the provider
        assert_eq!(response.data.len(), 1);
    }

    #[test]
    fn test_generate_formula() {
        let request = GenerateFormulaRequest {
            data: records(json!([{"revenue": 100, "cost": 60}])),
            prompt: "profit margin".to_string(),
            headers: vec!["revenue".to_string(), "cost".to_string()],
        };
        let response = generate_formula_request(&request).unwrap();
        assert_eq!(response.formula, "=(revenue - cost) / revenue");
        assert!(!response.explanation.is_empty());
    }
}
