//! Tabular report results.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One report row: metric name to value, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRow {
    columns: IndexMap<String, Value>,
}

impl DataRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.columns.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns.get(name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// An ordered collection of report rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataTable {
    rows: Vec<DataRow>,
}

impl DataTable {
    pub fn new(rows: Vec<DataRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    pub fn first_row(&self) -> Option<&DataRow> {
        self.rows.first()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Renames columns in every row according to `rename` (old name to new
    /// name). Entries naming a column that is absent are ignored, and column
    /// order is preserved.
    ///
    /// Each key is looked up once against the row's original names, so a
    /// map like `{a -> a_x}` applied twice yields `a_x`, never `a_x_x`.
    pub fn rename_columns(&mut self, rename: &HashMap<String, String>) {
        for row in &mut self.rows {
            let columns = std::mem::take(&mut row.columns);
            row.columns = columns
                .into_iter()
                .map(|(name, value)| match rename.get(&name) {
                    Some(new_name) => (new_name.clone(), value),
                    None => (name, value),
                })
                .collect();
        }
    }

    /// Drops every column not listed in `keep`. An empty list keeps all.
    pub fn retain_columns(&mut self, keep: &[String]) {
        if keep.is_empty() {
            return;
        }
        for row in &mut self.rows {
            row.columns.retain(|name, _| keep.iter().any(|k| k == name));
        }
    }
}
