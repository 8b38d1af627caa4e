//! Printable document rendering.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::HfgrabError;
use crate::table::Table;

/// Rows rendered into the document. The document is a quick printable
/// preview, not a full dump.
pub const DOCUMENT_ROW_LIMIT: usize = 30;

/// Render the first [`DOCUMENT_ROW_LIMIT`] rows as fixed-width monospace
/// lines in a paginated A4 document, one line per table row.
pub fn to_pdf(table: &Table) -> Result<Vec<u8>, HfgrabError> {
    let text = table.render_text(DOCUMENT_ROW_LIMIT);

    let (document, first_page, first_layer) =
        PdfDocument::new("dataset preview", Mm(210.0), Mm(297.0), "data");
    let font = document
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|source| HfgrabError::Document(source.to_string()))?;

    let mut layer = document.get_page(first_page).get_layer(first_layer);
    let mut cursor = 287.0;
    for line in text.lines() {
        if cursor < 10.0 {
            let (page, layer_index) = document.add_page(Mm(210.0), Mm(297.0), "data");
            layer = document.get_page(page).get_layer(layer_index);
            cursor = 287.0;
        }
        layer.use_text(line, 10.0, Mm(10.0), Mm(cursor), &font);
        cursor -= 5.0;
    }

    document
        .save_to_bytes()
        .map_err(|source| HfgrabError::Document(source.to_string()))
}
