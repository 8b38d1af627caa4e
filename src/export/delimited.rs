//! Comma-separated text serialization.

use crate::error::HfgrabError;
use crate::table::Table;

/// Serialize the full table as UTF-8 comma-separated text: a header row,
/// then one row per record, no index column.
pub fn to_csv(table: &Table) -> Result<Vec<u8>, HfgrabError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(&table.columns)?;
    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(Table::cell_text).collect();
        writer.write_record(&cells)?;
    }

    writer
        .into_inner()
        .map_err(|source| HfgrabError::Io(source.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn header_then_one_line_per_row() {
        let mut table = Table::new(vec!["id".to_string(), "text".to_string()]);
        table.push_row(vec![json!(1), json!("hello")]);
        table.push_row(vec![json!(2), Value::Null]);

        let bytes = to_csv(&table).expect("csv");
        let text = String::from_utf8(bytes).expect("utf8");

        assert_eq!(text, "id,text\n1,hello\n2,\n");
    }

    #[test]
    fn cells_with_commas_are_quoted() {
        let mut table = Table::new(vec!["text".to_string()]);
        table.push_row(vec![json!("a, b")]);

        let bytes = to_csv(&table).expect("csv");
        let text = String::from_utf8(bytes).expect("utf8");

        assert_eq!(text, "text\n\"a, b\"\n");
    }
}
