use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::columns::ColumnDef;
use crate::fetch::Record;

/// UTF-8 byte-order mark. Excel misreads a BOM-less UTF-8 CSV as the system
/// codepage, so every exported file starts with these three bytes.
pub const BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// CSV-escape a single scalar value.
///
/// Null renders as an empty string. Everything else renders as its plain
/// textual form; if that text contains a double quote, a comma or a newline
/// it is wrapped in double quotes with inner quotes doubled. A bare `\r`
/// deliberately does not trigger quoting.
pub fn escape_field(value: &Value) -> String {
    let s = match value {
        Value::Null => return String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if s.contains('"') || s.contains(',') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s
    }
}

/// Render the CSV body: one header line of labels, then one line per record.
/// Column order follows `selection`; row order follows `records`; every line
/// is `\n`-terminated. Fails with no output when the selection is empty so
/// the caller never writes an empty file.
pub fn render_csv(records: &[Record], selection: &[&ColumnDef]) -> Result<String> {
    if selection.is_empty() {
        bail!("select at least one column to export");
    }

    let mut csv = String::new();
    let header: Vec<&str> = selection.iter().map(|c| c.label).collect();
    csv.push_str(&header.join(","));
    csv.push('\n');

    for record in records {
        let row: Vec<String> = selection
            .iter()
            .map(|c| escape_field(record.field(c.key)))
            .collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    Ok(csv)
}

/// Write BOM + rendered body to `path`.
pub fn write_csv(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    let mut file =
        File::create(path).with_context(|| format!("creating `{}`", path.display()))?;
    file.write_all(BOM)
        .and_then(|_| file.write_all(content.as_bytes()))
        .with_context(|| format!("writing `{}`", path.display()))?;
    info!(
        "wrote {} bytes to {}",
        BOM.len() + content.len(),
        path.display()
    );
    Ok(())
}
