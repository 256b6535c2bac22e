use rusqlite::types::Value;

use crate::error::Result;
use crate::models::file::FileRecord;

/// How result rows are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowFormat {
    /// `(1, "abc", "/path")`
    #[default]
    Tuple,
    /// `[1,"abc","/path"]`, or an object for whole records
    Json,
}

impl RowFormat {
    #[must_use]
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            RowFormat::Json
        } else {
            RowFormat::Tuple
        }
    }

    /// Render one row without a trailing newline.
    pub fn render(self, values: &[Value]) -> Result<String> {
        match self {
            RowFormat::Tuple => Ok(format_tuple(values)),
            RowFormat::Json => format_json_row(values),
        }
    }

    /// Render a stored record. JSON mode serializes it as an object keyed
    /// by column name.
    pub fn render_record(self, record: &FileRecord) -> Result<String> {
        match self {
            RowFormat::Tuple => Ok(format_tuple(&record_values(record))),
            RowFormat::Json => Ok(serde_json::to_string(record)?),
        }
    }
}

/// Render a row as a tuple literal. A single value keeps its trailing comma.
#[must_use]
pub fn format_tuple(values: &[Value]) -> String {
    let mut out = String::from("(");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        push_literal(&mut out, value);
    }
    if values.len() == 1 {
        out.push(',');
    }
    out.push(')');
    out
}

fn push_literal(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Integer(i) => out.push_str(&i.to_string()),
        Value::Real(f) => out.push_str(&format!("{f:?}")),
        Value::Text(s) => out.push_str(&format!("{s:?}")),
        Value::Blob(b) => {
            out.push_str("x'");
            out.push_str(&hex(b));
            out.push('\'');
        }
    }
}

/// Render a row as a minified JSON array.
pub fn format_json_row(values: &[Value]) -> Result<String> {
    let array: Vec<serde_json::Value> = values.iter().map(to_json).collect();
    Ok(serde_json::to_string(&array)?)
}

fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Integer(i) => (*i).into(),
        Value::Real(f) => serde_json::Number::from_f64(*f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::Text(s) => s.clone().into(),
        Value::Blob(b) => hex(b).into(),
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Values of a record in `SELECT rowid, sha1sum, filename` column order.
#[must_use]
pub fn record_values(record: &FileRecord) -> [Value; 3] {
    [
        Value::Integer(record.id),
        Value::Text(record.digest.clone()),
        Value::Text(record.path.clone()),
    ]
}

/// Format an error for stderr.
pub fn format_error(err: &dyn std::fmt::Display) -> String {
    format!("sqlitexplorer: error: {err}")
}
