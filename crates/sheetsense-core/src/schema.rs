//! Table schema: ordered column names with a lookup built once

use crate::error::{Result, TableError};
use ahash::AHashMap;

/// Ordered column descriptors plus a name→index lookup.
///
/// The schema is computed once (at ingestion or construction) and passed
/// alongside the table, rather than re-derived from row data.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    names: Vec<String>,
    index: AHashMap<String, usize>,
}

impl Schema {
    /// Create a schema from ordered column names
    ///
    /// Column names must be unique within a table.
    pub fn new(names: Vec<String>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self { names, index })
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether the schema has no columns
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column names in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of the column at `idx`
    pub fn name(&self, idx: usize) -> Option<&str> {
        self.names.get(idx).map(|s| s.as_str())
    }

    /// Position of a column by exact name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Build a new schema with one column appended
    pub fn with_column(&self, name: &str) -> Result<Schema> {
        let mut names = self.names.clone();
        names.push(name.to_string());
        Schema::new(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lookup() {
        let schema = Schema::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.index_of("b"), Some(1));
        assert_eq!(schema.index_of("z"), None);
        assert_eq!(schema.name(2), Some("c"));
    }

    #[test]
    fn test_schema_rejects_duplicates() {
        let err = Schema::new(vec!["a".into(), "a".into()]).unwrap_err();
        assert!(matches!(err, TableError::DuplicateColumn(_)));
    }

    #[test]
    fn test_with_column() {
        let schema = Schema::new(vec!["a".into()]).unwrap();
        let extended = schema.with_column("b").unwrap();
        assert_eq!(extended.names(), &["a".to_string(), "b".to_string()]);
        assert!(schema.with_column("a").is_err());
    }
}
