use std::path::Path;

use super::{ExportError, Sheet};
use crate::files::write_atomic;

/// UTF-8 byte-order mark written ahead of every sheet.
pub const BOM: &str = "\u{feff}";

/// Render a sheet as CSV text, without the byte-order mark.
///
/// Every cell is quoted and embedded quotes are doubled, so commas,
/// quotes and newlines inside values survive. Records end with CRLF.
pub fn render_csv(sheet: &Sheet) -> String {
    let mut output = String::new();

    push_line(&mut output, sheet.headers().iter().copied());
    for record in &sheet.records {
        push_line(&mut output, record.values());
    }

    output
}

/// Write a sheet to `path` atomically, prefixed with a BOM.
pub fn write_csv(path: &Path, sheet: &Sheet) -> Result<(), ExportError> {
    let mut contents = String::from(BOM);
    contents.push_str(&render_csv(sheet));
    write_atomic(path, contents.as_bytes()).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn push_line<'a>(output: &mut String, cells: impl Iterator<Item = &'a str>) {
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            output.push(',');
        }
        output.push('"');
        output.push_str(&cell.replace('"', "\"\""));
        output.push('"');
    }
    output.push_str("\r\n");
}
