//! Row/column table model shared by every converter.

use serde_json::{Map, Value};

/// An in-memory tabular view of one dataset split.
///
/// Cells are JSON values so that arbitrary Hub schemas (nested structs,
/// lists, nulls) survive until a converter decides how to render them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row given a JSON object, aligning cells to column order.
    ///
    /// Missing keys become nulls; keys outside the column set are ignored.
    pub fn push_object(&mut self, object: &Map<String, Value>) {
        let row = self
            .columns
            .iter()
            .map(|column| object.get(column).cloned().unwrap_or(Value::Null))
            .collect();
        self.rows.push(row);
    }

    /// Append an already-aligned row of cells.
    pub fn push_row(&mut self, row: Vec<Value>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One row as a JSON object keyed by column name.
    pub fn record(&self, index: usize) -> Value {
        let mut object = Map::new();
        if let Some(row) = self.rows.get(index) {
            for (column, cell) in self.columns.iter().zip(row) {
                object.insert(column.clone(), cell.clone());
            }
        }
        Value::Object(object)
    }

    /// The first `limit` rows as JSON objects.
    pub fn records(&self, limit: usize) -> Vec<Value> {
        (0..self.rows.len().min(limit))
            .map(|index| self.record(index))
            .collect()
    }

    /// Plain-text form of one cell. Strings render unquoted, nulls render
    /// empty, everything else keeps its JSON rendering.
    pub fn cell_text(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }

    /// Fixed-width text rendering of the first `max_rows` rows: a header
    /// line, then one line per row, columns padded to their widest cell.
    pub fn render_text(&self, max_rows: usize) -> String {
        let row_limit = self.rows.len().min(max_rows);

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows[..row_limit] {
            for (index, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(index) {
                    *width = (*width).max(Self::cell_text(cell).chars().count());
                }
            }
        }

        let mut lines = Vec::with_capacity(row_limit + 1);
        lines.push(render_line(&self.columns, &widths));
        for row in &self.rows[..row_limit] {
            let cells: Vec<String> = row.iter().map(Self::cell_text).collect();
            lines.push(render_line(&cells, &widths));
        }
        lines.join("\n")
    }
}

fn render_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let mut parts = Vec::with_capacity(cells.len());
    for (index, cell) in cells.iter().enumerate() {
        let cell = cell.as_ref();
        let width = widths.get(index).copied().unwrap_or(0);
        let padding = width.saturating_sub(cell.chars().count());
        parts.push(format!("{}{}", cell, " ".repeat(padding)));
    }
    parts.join("  ").trim_end().to_string()
}
