//! Loading table records from a data file.
//!
//! Data files are YAML (or JSON, by `.json` extension). The record list is
//! either the whole document or the list under a top-level `data` key:
//!
//! ```yaml
//! data:
//!   - name: baseline
//!     acc: 0.8125
//!     row_css: muted
//!   - name: proposed
//!     acc: 0.9031
//!     hline: true
//! ```
//!
//! Files are read on every call. Nothing is cached between tables.
//!
//! YAML documents are converted into records explicitly. Non-finite numbers
//! (`.nan`, `.inf`, `-.inf`) have no JSON representation and keep their YAML
//! spelling as text, so numeric value types report them instead of rendering
//! an empty cell silently. Non-string mapping keys become their display form.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{DatatableError, Result};
use crate::format::is_falsy;

/// Key wrapping the record list at the top of a data file.
pub const DATA_KEY: &str = "data";
/// Row hint: CSS class applied when row highlighting is enabled.
pub const ROW_CSS_KEY: &str = "row_css";
/// Row hint: draw a divider above the row.
pub const HLINE_KEY: &str = "hline";

/// One row of table data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Record(fields)
    }

    /// Looks up a field. Dotted names address nested mappings (`metrics.f1`);
    /// a literal key containing dots takes precedence.
    ///
    /// `None` means the field is absent, which is distinct from a `null` value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        if let Some(value) = self.0.get(field) {
            return Some(value);
        }
        if !field.contains('.') {
            return None;
        }
        let mut parts = field.split('.');
        let mut current = self.0.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        Some(current)
    }

    /// Row CSS class hint, if set and non-empty.
    pub fn row_css(&self) -> Option<&str> {
        self.0
            .get(ROW_CSS_KEY)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Whether the row carries a divider hint.
    pub fn has_hline(&self) -> bool {
        self.0.get(HLINE_KEY).is_some_and(|v| !is_falsy(v))
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Record(fields)
    }
}

/// Reads and parses the records of a data file.
pub fn load(path: &Path) -> Result<Vec<Record>> {
    if !path.is_file() {
        return Err(DatatableError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|e| parse_error(path, e))?;

    let document: Value = if has_extension(path, "json") {
        serde_json::from_str(&content).map_err(|e| parse_error(path, e))?
    } else {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|e| parse_error(path, e))?;
        from_yaml(yaml)
    };

    records_from_value(path, document)
}

/// Extracts records from an already parsed document.
pub fn records_from_value(path: &Path, document: Value) -> Result<Vec<Record>> {
    let list = match document {
        Value::Object(mut map) if map.contains_key(DATA_KEY) => map.remove(DATA_KEY),
        other => Some(other),
    };

    let Some(Value::Array(items)) = list else {
        return Err(parse_error(path, "expected a list of records"));
    };

    let mut records = Vec::with_capacity(items.len());
    for (position, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(fields) => records.push(Record(fields)),
            Value::Null => {}
            other => warn!(
                source = %path.display(),
                position,
                "skipping non-mapping record: {}",
                other
            ),
        }
    }
    Ok(records)
}

/// Converts a YAML value into the record value model.
fn from_yaml(value: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => from_yaml_number(&n),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(from_yaml).collect()),
        Yaml::Mapping(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (yaml_key(key), from_yaml(value)))
                .collect(),
        ),
        Yaml::Tagged(tagged) => from_yaml(tagged.value),
    }
}

fn from_yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::from(i);
    }
    if let Some(u) = n.as_u64() {
        return Value::from(u);
    }
    match n.as_f64().and_then(serde_json::Number::from_f64) {
        Some(number) => Value::Number(number),
        None => Value::String(n.to_string()),
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => s,
        Yaml::Null => "null".to_string(),
        Yaml::Bool(b) => b.to_string(),
        Yaml::Number(n) => n.to_string(),
        Yaml::Tagged(tagged) => yaml_key(tagged.value),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn parse_error(path: &Path, err: impl ToString) -> DatatableError {
    DatatableError::SourceParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
