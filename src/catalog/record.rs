// src/catalog/record.rs

use csv::WriterBuilder;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Name of the one column that is coerced to a boolean instead of kept as text.
pub const IS_NEW_FIELD: &str = "isNew";

/// A single cell of a parsed catalog row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Builds the value for `field` from an already trimmed/unescaped token.
    pub fn for_field(field: &str, token: &str) -> Self {
        if field == IS_NEW_FIELD {
            FieldValue::Flag(token.to_lowercase() == "true")
        } else {
            FieldValue::Text(token.to_string())
        }
    }

    /// The empty value for `field`, used when a row is shorter than the header.
    pub fn empty_for(field: &str) -> Self {
        Self::for_field(field, "")
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(v) => v.fmt(f),
            FieldValue::Flag(v) => v.fmt(f),
        }
    }
}

/// One data row, keyed by header name, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`. A repeated header name keeps its first position
    /// and takes the latest value.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Text value of `name`; `None` when absent or boolean.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    /// Boolean value of `name`; `false` when absent or textual.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(FieldValue::as_bool).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Header line matching [`Record::to_csv_line`]'s column order.
    pub fn header_line(&self) -> String {
        self.field_names().collect::<Vec<_>>().join(",")
    }

    /// Formats the values as one CSV line (no terminator), quoting only where
    /// a value needs it.
    pub fn to_csv_line(&self) -> String {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(Vec::new());

        let cells: Vec<String> = self.fields.iter().map(|(_, v)| v.to_string()).collect();
        // writing into a Vec cannot fail on I/O
        if writer.write_record(&cells).is_err() {
            return cells.join(",");
        }
        match writer.into_inner() {
            Ok(bytes) => String::from_utf8_lossy(&bytes)
                .trim_end_matches(['\r', '\n'])
                .to_string(),
            Err(_) => cells.join(","),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
