use anyhow::{bail, Result};

/// One exportable field: the record key the endpoint serves and the header
/// text written to the CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub label: &'static str,
}

/// Fixed column catalogue, in the order the endpoint declares the fields.
/// Export column order comes from the user's selection, never from this list.
pub static STAFF_COLUMNS: &[ColumnDef] = &[
    ColumnDef {
        key: "user_id",
        label: "UUID",
    },
    ColumnDef {
        key: "name",
        label: "氏名",
    },
    ColumnDef {
        key: "d_id",
        label: "D番号",
    },
    ColumnDef {
        key: "employee_number",
        label: "職員番号",
    },
    ColumnDef {
        key: "position_id",
        label: "職種ID",
    },
    ColumnDef {
        key: "position_name",
        label: "職種名称",
    },
    ColumnDef {
        key: "department_id",
        label: "部署ID",
    },
    ColumnDef {
        key: "department_name",
        label: "部署名称",
    },
];

/// Look up a catalogue column by record key.
pub fn find_column(key: &str) -> Option<&'static ColumnDef> {
    STAFF_COLUMNS.iter().find(|c| c.key == key)
}

/// Split a comma-separated `--columns` argument into keys, dropping empty
/// pieces so trailing commas are harmless.
pub fn parse_selection_arg(arg: &str) -> Vec<String> {
    arg.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve an ordered list of keys against the catalogue. The result keeps
/// the input order. Unknown and repeated keys are rejected up front, before
/// any fetch or file write happens.
pub fn resolve_selection(keys: &[String]) -> Result<Vec<&'static ColumnDef>> {
    let mut selection: Vec<&'static ColumnDef> = Vec::with_capacity(keys.len());
    for key in keys {
        let col = match find_column(key) {
            Some(c) => c,
            None => {
                let known: Vec<&str> = STAFF_COLUMNS.iter().map(|c| c.key).collect();
                bail!("unknown column `{}` (known: {})", key, known.join(", "));
            }
        };
        if selection.contains(&col) {
            bail!("column `{}` selected more than once", key);
        }
        selection.push(col);
    }
    Ok(selection)
}
