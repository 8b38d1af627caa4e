use proptest::collection::vec;
use proptest::prelude::*;
use serde_json::Value;

use hfgrab::export::{delimited, records};
use hfgrab::table::Table;

fn cell_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z ]{0,12}".prop_map(Value::from),
    ]
}

fn table_strategy() -> impl Strategy<Value = Table> {
    (1usize..5)
        .prop_flat_map(|width| vec(vec(cell_strategy(), width), 0..16).prop_map(move |rows| (width, rows)))
        .prop_map(|(width, rows)| {
            let columns = (0..width).map(|n| format!("c{n}")).collect();
            let mut table = Table::new(columns);
            for row in rows {
                table.push_row(row);
            }
            table
        })
}

proptest! {
    #[test]
    fn csv_preserves_shape_and_cell_text(table in table_strategy()) {
        let bytes = delimited::to_csv(&table).unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());

        let headers = reader.headers().unwrap().clone();
        prop_assert_eq!(headers.len(), table.columns.len());

        let mut rows_seen = 0;
        for (record, row) in reader.records().zip(&table.rows) {
            let record = record.unwrap();
            for (cell, value) in record.iter().zip(row) {
                let text = Table::cell_text(value);
                prop_assert_eq!(cell, text.as_str());
            }
            rows_seen += 1;
        }
        prop_assert_eq!(rows_seen, table.rows.len());
    }

    #[test]
    fn jsonl_lines_parse_back_to_the_source_records(table in table_strategy()) {
        let bytes = records::to_jsonl(&table).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), table.rows.len());

        for (index, line) in lines.iter().enumerate() {
            let parsed: Value = serde_json::from_str(line).unwrap();
            prop_assert_eq!(parsed, table.record(index));
        }
    }
}
