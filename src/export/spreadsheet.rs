//! Single-sheet XLSX serialization.

use rust_xlsxwriter::{Workbook, XlsxError};
use serde_json::Value;

use crate::error::HfgrabError;
use crate::table::Table;

/// Serialize the full table into a one-worksheet workbook named `data`:
/// a header row, then one row per record, no index column.
pub fn to_xlsx(table: &Table) -> Result<Vec<u8>, HfgrabError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("data")?;

    for (index, name) in table.columns.iter().enumerate() {
        let column = u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)?;
        worksheet.write_string(0, column, name)?;
    }

    for (row_index, row) in table.rows.iter().enumerate() {
        let sheet_row =
            u32::try_from(row_index + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col_index, cell) in row.iter().enumerate() {
            let column = u16::try_from(col_index).map_err(|_| XlsxError::RowColumnLimitError)?;
            match cell {
                Value::Null => {}
                Value::Bool(flag) => {
                    worksheet.write_boolean(sheet_row, column, *flag)?;
                }
                Value::Number(number) => {
                    if let Some(float) = number.as_f64() {
                        worksheet.write_number(sheet_row, column, float)?;
                    } else {
                        worksheet.write_string(sheet_row, column, number.to_string())?;
                    }
                }
                Value::String(text) => {
                    worksheet.write_string(sheet_row, column, text)?;
                }
                other => {
                    worksheet.write_string(sheet_row, column, other.to_string())?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
