use serde_json::Value;

use crate::columns::ColumnDef;
use crate::fetch::Record;

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render records as a plain-text table: header row plus one row per record,
/// each column padded to its widest cell. Widths count chars, so full-width
/// CJK glyphs can drift in terminals that render them double-width.
pub fn render_table(records: &[Record], columns: &[ColumnDef]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| columns.iter().map(|c| cell_text(r.field(c.key))).collect())
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.label.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(c, &w)| format!("{:<width$}", c.label, width = w))
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::STAFF_COLUMNS;
    use serde_json::json;

    #[test]
    fn one_line_per_record_plus_header() {
        let records: Vec<Record> = serde_json::from_value(json!([
            {"user_id": "u-1", "name": "山田"},
            {"user_id": "u-2", "name": null}
        ]))
        .unwrap();

        let table = render_table(&records, STAFF_COLUMNS);
        let lines: Vec<&str> = table.split_terminator('\n').collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("UUID"));
        assert!(lines[1].contains("山田"));
    }

    #[test]
    fn columns_align_to_widest_cell() {
        let records: Vec<Record> = serde_json::from_value(json!([
            {"user_id": "a-very-long-identifier", "name": "x"}
        ]))
        .unwrap();

        let table = render_table(&records, STAFF_COLUMNS);
        let lines: Vec<&str> = table.split_terminator('\n').collect();
        let name_col = lines[0].find("氏名").unwrap();
        assert!(name_col > "a-very-long-identifier".len());
    }
}
