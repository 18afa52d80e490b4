//! Built-in formula functions
//!
//! The function set is closed: exactly the names registered here evaluate;
//! anything else fails with an unknown-function error.

pub mod criteria;
pub mod logical;
pub mod lookup;
pub mod math;
pub mod statistical;
pub mod text;

use crate::error::FormulaResult;
use crate::evaluator::{EvaluationContext, FormulaValue};
use ahash::AHashMap;

/// Function implementation signature
pub type FunctionImpl = fn(&[FormulaValue], &EvaluationContext) -> FormulaResult<FormulaValue>;

/// Function definition
pub struct FunctionDef {
    /// Function name (uppercase)
    pub name: &'static str,
    /// Minimum arguments
    pub min_args: usize,
    /// Maximum arguments (None = unlimited)
    pub max_args: Option<usize>,
    /// Implementation
    pub implementation: FunctionImpl,
}

/// Function registry
pub struct FunctionRegistry {
    functions: AHashMap<String, FunctionDef>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionRegistry {
    /// Create a new registry with all built-in functions
    pub fn new() -> Self {
        let mut registry = Self {
            functions: AHashMap::new(),
        };

        registry.register_math_functions();
        registry.register_logical_functions();
        registry.register_text_functions();
        registry.register_lookup_functions();
        registry.register_statistical_functions();

        registry
    }

    /// Look up a function by name
    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(&name.to_uppercase())
    }

    /// Register a function
    pub fn register(&mut self, def: FunctionDef) {
        self.functions.insert(def.name.to_uppercase(), def);
    }

    fn register_math_functions(&mut self) {
        self.register(FunctionDef {
            name: "SUM",
            min_args: 1,
            max_args: None,
            implementation: math::fn_sum,
        });

        self.register(FunctionDef {
            name: "AVERAGE",
            min_args: 1,
            max_args: None,
            implementation: math::fn_average,
        });

        self.register(FunctionDef {
            name: "COUNT",
            min_args: 1,
            max_args: None,
            implementation: math::fn_count,
        });

        self.register(FunctionDef {
            name: "ABS",
            min_args: 1,
            max_args: Some(1),
            implementation: math::fn_abs,
        });

        self.register(FunctionDef {
            name: "ROUND",
            min_args: 1,
            max_args: Some(2),
            implementation: math::fn_round,
        });
    }

    fn register_logical_functions(&mut self) {
        self.register(FunctionDef {
            name: "IF",
            min_args: 3,
            max_args: Some(3),
            implementation: logical::fn_if,
        });

        self.register(FunctionDef {
            name: "AND",
            min_args: 1,
            max_args: None,
            implementation: logical::fn_and,
        });

        self.register(FunctionDef {
            name: "OR",
            min_args: 1,
            max_args: None,
            implementation: logical::fn_or,
        });

        self.register(FunctionDef {
            name: "NOT",
            min_args: 1,
            max_args: Some(1),
            implementation: logical::fn_not,
        });
    }

    fn register_text_functions(&mut self) {
        self.register(FunctionDef {
            name: "CONCATENATE",
            min_args: 1,
            max_args: None,
            implementation: text::fn_concatenate,
        });
    }

    fn register_lookup_functions(&mut self) {
        self.register(FunctionDef {
            name: "VLOOKUP",
            min_args: 3,
            max_args: Some(4),
            implementation: lookup::fn_vlookup,
        });
    }

    fn register_statistical_functions(&mut self) {
        self.register(FunctionDef {
            name: "STDEV",
            min_args: 1,
            max_args: None,
            implementation: statistical::fn_stdev,
        });

        self.register(FunctionDef {
            name: "COUNTIF",
            min_args: 2,
            max_args: Some(2),
            implementation: statistical::fn_countif,
        });
    }
}

/// Flatten arguments in row-major order, expanding ranges
pub(crate) fn flatten(args: &[FormulaValue]) -> Vec<FormulaValue> {
    let mut out = Vec::new();
    for arg in args {
        match arg {
            FormulaValue::Array(rows) => {
                for row in rows {
                    for cell in row {
                        out.push(cell.clone());
                    }
                }
            }
            other => out.push(other.clone()),
        }
    }
    out
}

/// Numeric values among the flattened arguments (non-numeric skipped)
pub(crate) fn numeric_values(args: &[FormulaValue]) -> Vec<f64> {
    flatten(args)
        .iter()
        .filter(|v| !matches!(v, FormulaValue::Empty))
        .filter_map(|v| v.as_number())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_exactly_the_dialect() {
        let registry = FunctionRegistry::new();
        for name in [
            "SUM",
            "AVERAGE",
            "COUNT",
            "IF",
            "AND",
            "OR",
            "NOT",
            "CONCATENATE",
            "VLOOKUP",
            "ABS",
            "ROUND",
            "STDEV",
            "COUNTIF",
        ] {
            assert!(registry.get(name).is_some(), "missing {}", name);
        }
        assert!(registry.get("SUMIF").is_none());
        assert!(registry.get("RAND").is_none());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = FunctionRegistry::new();
        assert!(registry.get("sum").is_some());
    }

    #[test]
    fn test_flatten_row_major() {
        let arr = FormulaValue::Array(vec![
            vec![FormulaValue::Number(1.0), FormulaValue::Number(2.0)],
            vec![FormulaValue::Number(3.0), FormulaValue::Number(4.0)],
        ]);
        let flat = flatten(&[arr, FormulaValue::Number(5.0)]);
        let nums: Vec<f64> = flat.iter().filter_map(|v| v.as_number()).collect();
        assert_eq!(nums, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }
}
