//! Record model: the field values a list view reads from each entity.

use std::fmt::{Debug, Display};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};


/// A single facetable value, as stored in the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum FacetOriginalValue {
    String(String),
    Int(i64),
}

impl FacetOriginalValue {
    /// Blank strings never contribute to a facet.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::String(s) => s.trim().is_empty(),
            Self::Int(_) => false,
        }
    }
}

impl Display for FacetOriginalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{}", s),
            Self::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for FacetOriginalValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FacetOriginalValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for FacetOriginalValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<i64> for FacetOriginalValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}


/// What a record holds for one field.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Missing,
    Single(FacetOriginalValue),
    Many(Vec<FacetOriginalValue>),
}

impl FieldValue {
    pub fn single(value: impl Into<FacetOriginalValue>) -> Self {
        let value = value.into();
        if value.is_blank() {
            Self::Missing
        } else {
            Self::Single(value)
        }
    }

    pub fn optional<V: Into<FacetOriginalValue>>(value: Option<V>) -> Self {
        value.map(Self::single).unwrap_or_default()
    }

    pub fn many<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FacetOriginalValue>,
    {
        Self::Many(values.into_iter().map(Into::into).filter(|v| !v.is_blank()).collect())
    }

    /// Values this field contributes to a facet.
    ///
    /// A scalar counts as a one-element list. A list read through a
    /// single-valued facet is malformed and contributes nothing, as do
    /// missing and blank values.
    pub fn facet_values(&self, multi_valued: bool) -> impl Iterator<Item = &FacetOriginalValue> {
        let values: &[FacetOriginalValue] = match self {
            Self::Missing => &[],
            Self::Single(v) => std::slice::from_ref(v),
            Self::Many(vs) if multi_valued => vs.as_slice(),
            Self::Many(_) => &[],
        };
        values.iter().filter(|v| !v.is_blank())
    }
}


/// An entity as seen by a list view.
///
/// Each view declares its own field type, so only the fields the view
/// actually reads can be asked for.
pub trait Record {
    type Field: Clone + Ord + Debug + 'static;

    fn field_value(&self, field: &Self::Field) -> FieldValue;
}


/// Untyped record for collaborators that only hand over JSON objects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonRecord(pub Map<String, Value>);

impl JsonRecord {
    /// Parses a JSON array of objects. Entries that are not objects are skipped.
    pub fn parse_collection(json: &str) -> anyhow::Result<Vec<JsonRecord>> {
        let items: Vec<Value> = serde_json::from_str(json).context("record collection is not a JSON array")?;
        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(map) => records.push(JsonRecord(map)),
                other => tracing::warn!("skipping record #{index}: expected an object, got {other}"),
            }
        }
        Ok(records)
    }
}

impl Record for JsonRecord {
    type Field = String;

    fn field_value(&self, field: &String) -> FieldValue {
        match self.0.get(field) {
            None | Some(Value::Null) => FieldValue::Missing,
            Some(Value::Array(items)) => FieldValue::Many(
                items.iter().filter_map(json_scalar).filter(|v| !v.is_blank()).collect(),
            ),
            Some(value) => match json_scalar(value) {
                Some(v) => FieldValue::single(v),
                None => {
                    tracing::debug!("field {field} holds a non-scalar value, treating as empty");
                    FieldValue::Missing
                }
            },
        }
    }
}

fn json_scalar(value: &Value) -> Option<FacetOriginalValue> {
    match value {
        Value::String(s) => Some(FacetOriginalValue::String(s.clone())),
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => FacetOriginalValue::Int(i),
            None => FacetOriginalValue::String(n.to_string()),
        }),
        _ => None,
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn json_record(value: Value) -> JsonRecord {
        match value {
            Value::Object(map) => JsonRecord(map),
            _ => panic!("test record must be an object"),
        }
    }

    fn collect(value: &FieldValue, multi_valued: bool) -> Vec<FacetOriginalValue> {
        value.facet_values(multi_valued).cloned().collect()
    }

    #[test]
    fn test_scalar_counts_as_singleton() {
        let value = FieldValue::single("Grant");
        assert_eq!(collect(&value, false), vec![FacetOriginalValue::from("Grant")]);
        assert_eq!(collect(&value, true), vec![FacetOriginalValue::from("Grant")]);
    }

    #[test]
    fn test_list_in_single_valued_facet_contributes_nothing() {
        let value = FieldValue::many(["a", "b"]);
        assert!(collect(&value, false).is_empty());
        assert_eq!(collect(&value, true).len(), 2);
    }

    #[test]
    fn test_blank_values_are_dropped() {
        assert_eq!(FieldValue::single("  "), FieldValue::Missing);
        assert_eq!(FieldValue::optional(None::<String>), FieldValue::Missing);
        assert_eq!(FieldValue::many(["", "x"]), FieldValue::Many(vec!["x".into()]));
        // built by hand, bypassing the constructors
        let raw = FieldValue::Single(FacetOriginalValue::String(String::new()));
        assert!(collect(&raw, true).is_empty());
    }

    #[test]
    fn test_json_record_normalizes_values() {
        let record = json_record(json!({
            "country": "US",
            "year": 2021,
            "score": 4.5,
            "themes": ["AI", 7, null, {"nested": true}, ""],
            "owner": {"id": 1},
            "flag": true,
            "empty": null,
        }));
        assert_eq!(record.field_value(&"country".to_string()), FieldValue::Single("US".into()));
        assert_eq!(record.field_value(&"year".to_string()), FieldValue::Single(FacetOriginalValue::Int(2021)));
        assert_eq!(record.field_value(&"score".to_string()), FieldValue::Single("4.5".into()));
        assert_eq!(
            record.field_value(&"themes".to_string()),
            FieldValue::Many(vec!["AI".into(), FacetOriginalValue::Int(7)])
        );
        assert_eq!(record.field_value(&"owner".to_string()), FieldValue::Missing);
        assert_eq!(record.field_value(&"flag".to_string()), FieldValue::Missing);
        assert_eq!(record.field_value(&"empty".to_string()), FieldValue::Missing);
        assert_eq!(record.field_value(&"absent".to_string()), FieldValue::Missing);
    }

    #[test]
    fn test_parse_collection_skips_non_objects() {
        let records = JsonRecord::parse_collection(r#"[{"a": 1}, 3, "x", {"a": 2}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert!(JsonRecord::parse_collection(r#"{"a": 1}"#).is_err());
    }
}
