//! JSON record serializations: one record per line, plus the indented raw
//! dump used by the terminal fallback.

use crate::error::HfgrabError;
use crate::table::Table;

/// Serialize every row as one JSON object per line, UTF-8 encoded.
pub fn to_jsonl(table: &Table) -> Result<Vec<u8>, HfgrabError> {
    let mut buffer = Vec::new();
    for index in 0..table.rows.len() {
        serde_json::to_writer(&mut buffer, &table.record(index))?;
        buffer.push(b'\n');
    }
    Ok(buffer)
}

/// Indented JSON dump of the first `limit` records.
pub fn to_raw_json(table: &Table, limit: usize) -> Result<Vec<u8>, HfgrabError> {
    Ok(serde_json::to_vec_pretty(&table.records(limit))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn one_object_per_line() {
        let mut table = Table::new(vec!["id".to_string(), "ok".to_string()]);
        table.push_row(vec![json!(1), json!(true)]);
        table.push_row(vec![json!(2), Value::Null]);

        let bytes = to_jsonl(&table).expect("jsonl");
        let text = String::from_utf8(bytes).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        let first: Value = serde_json::from_str(lines[0]).expect("parse");
        assert_eq!(first, json!({"id": 1, "ok": true}));
        let second: Value = serde_json::from_str(lines[1]).expect("parse");
        assert_eq!(second, json!({"id": 2, "ok": null}));
    }

    #[test]
    fn empty_table_yields_empty_output() {
        let table = Table::new(vec!["id".to_string()]);
        assert!(to_jsonl(&table).expect("jsonl").is_empty());
    }

    #[test]
    fn raw_dump_is_indented_and_capped() {
        let mut table = Table::new(vec!["n".to_string()]);
        for n in 0..5 {
            table.push_row(vec![json!(n)]);
        }

        let bytes = to_raw_json(&table, 3).expect("raw");
        let parsed: Vec<Value> = serde_json::from_slice(&bytes).expect("parse");
        assert_eq!(parsed.len(), 3);
        assert!(bytes.windows(2).any(|w| w == b"\n "));
    }
}
