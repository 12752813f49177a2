//! Sorting and exact-match filtering over documents.
//!
//! Documents sort and match on their JSON projection, so the query surface
//! speaks the same field names as the persisted layout.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::RepoError;

/// Sort direction, taken from the `-` prefix of a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Parsed sort key: a field name, descending when prefixed with `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<'a> {
    pub field: &'a str,
    pub order: SortOrder,
}

impl<'a> SortKey<'a> {
    pub fn parse(spec: &'a str) -> Self {
        match spec.strip_prefix('-') {
            Some(field) => Self {
                field,
                order: SortOrder::Descending,
            },
            None => Self {
                field: spec,
                order: SortOrder::Ascending,
            },
        }
    }
}

/// Total order over JSON values used for sorting.
///
/// Absent fields compare as `Null`. Ranks: null < bool < number < string <
/// array < object. Booleans put false first, numbers compare by
/// `f64::total_cmp`, strings lexicographically, arrays elementwise then by
/// length, objects by their serialized text. Total on purpose: mixed-type
/// and missing values must sort deterministically.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => {
            for (xv, yv) in x.iter().zip(y.iter()) {
                let ord = compare_values(xv, yv);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        (Value::Object(_), Value::Object(_)) => a.to_string().cmp(&b.to_string()),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Sorts documents by the given key. Stable: documents with equal keys keep
/// their pre-sort relative order.
pub fn sort_documents<T: Serialize>(items: Vec<T>, key: &SortKey<'_>) -> Result<Vec<T>, RepoError> {
    let mut keyed = Vec::with_capacity(items.len());
    for item in items {
        let projected = serde_json::to_value(&item)?;
        let field = projected.get(key.field).cloned().unwrap_or(Value::Null);
        keyed.push((field, item));
    }
    keyed.sort_by(|(a, _), (b, _)| match key.order {
        SortOrder::Ascending => compare_values(a, b),
        SortOrder::Descending => compare_values(b, a),
    });
    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}

/// Exact-match filter criteria: a document matches iff every listed field
/// strictly equals the required value. Empty criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    fields: Map<String, Value>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exact-match requirement on `name`.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when the document satisfies every requirement. A document
    /// lacking a criterion field never matches it.
    pub fn matches(&self, doc: &Value) -> bool {
        self.fields
            .iter()
            .all(|(name, expected)| doc.get(name).is_some_and(|actual| actual == expected))
    }
}
