//! Firestore Wire Model
//!
//! Request and response bodies for the Firestore REST v1 calls this crate
//! makes, plus the mapping between wire documents and [`PantryItem`].
//! Firestore carries typed field values: strings as `{"stringValue": ...}`
//! and 64-bit integers as `{"integerValue": "<decimal string>"}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{PantryError, PantryItem, PantryResult};

/// Field holding the item name inside a pantry document
pub(crate) const FIELD_NAME: &str = "name";
/// Field holding the unit count inside a pantry document
pub(crate) const FIELD_QUANTITY: &str = "quantity";

/// A Firestore typed value, restricted to the two types the pantry schema uses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Value {
    #[serde(rename = "stringValue")]
    String(String),
    /// Integers travel as decimal strings in JSON
    #[serde(rename = "integerValue")]
    Integer(String),
}

impl Value {
    pub(crate) fn integer(value: i64) -> Self {
        Value::Integer(value.to_string())
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(raw) => raw.parse().ok(),
            _ => None,
        }
    }
}

/// A Firestore document: optional resource name plus typed fields
///
/// Server responses carry the full resource name and timestamps; write
/// bodies carry only `fields`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) fields: BTreeMap<String, Value>,
}

impl Document {
    /// Build the write body for an item (no resource name)
    pub(crate) fn from_item(item: &PantryItem) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(FIELD_NAME.to_string(), Value::String(item.name.clone()));
        fields.insert(FIELD_QUANTITY.to_string(), Value::integer(item.quantity));
        Self { name: None, fields }
    }

    /// Decode the pantry schema out of a document
    pub(crate) fn to_item(&self) -> PantryResult<PantryItem> {
        let name = self
            .fields
            .get(FIELD_NAME)
            .and_then(Value::as_str)
            .ok_or_else(|| self.schema_error(FIELD_NAME))?;
        let quantity = self
            .fields
            .get(FIELD_QUANTITY)
            .and_then(Value::as_i64)
            .ok_or_else(|| self.schema_error(FIELD_QUANTITY))?;
        Ok(PantryItem::new(name, quantity))
    }

    fn schema_error(&self, field: &str) -> PantryError {
        PantryError::Backend(format!(
            "document {} is missing a valid `{}` field",
            self.name.as_deref().unwrap_or("<unnamed>"),
            field
        ))
    }
}

/// Response body of a collection listing call
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListDocumentsResponse {
    /// Empty collections omit the key entirely
    #[serde(default)]
    pub(crate) documents: Vec<Document>,
    pub(crate) next_page_token: Option<String>,
}

/// One streamed result entry of a `runQuery` call
///
/// Entries carrying only progress metadata (a bare `readTime`) have no
/// document and are skipped by the caller.
#[derive(Debug, Deserialize)]
pub(crate) struct RunQueryEntry {
    pub(crate) document: Option<Document>,
}

/// Request body of a `runQuery` call
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RunQueryRequest {
    structured_query: StructuredQuery,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StructuredQuery {
    from: Vec<CollectionSelector>,
    #[serde(rename = "where")]
    filter: Filter,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionSelector {
    collection_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Filter {
    field_filter: FieldFilter,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldFilter {
    field: FieldReference,
    op: String,
    value: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldReference {
    field_path: String,
}

impl RunQueryRequest {
    /// Exact-match query on the `name` field of a collection
    pub(crate) fn name_equals(collection_id: &str, name: &str) -> Self {
        Self {
            structured_query: StructuredQuery {
                from: vec![CollectionSelector {
                    collection_id: collection_id.to_string(),
                }],
                filter: Filter {
                    field_filter: FieldFilter {
                        field: FieldReference {
                            field_path: FIELD_NAME.to_string(),
                        },
                        op: "EQUAL".to_string(),
                        value: Value::String(name.to_string()),
                    },
                },
            },
        }
    }
}

/// Request body of a `commit` call
#[derive(Debug, Serialize)]
pub(crate) struct CommitRequest {
    writes: Vec<Write>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Write {
    transform: DocumentTransform,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentTransform {
    document: String,
    field_transforms: Vec<FieldTransform>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldTransform {
    field_path: String,
    increment: Value,
}

impl CommitRequest {
    /// A single server-side increment of an integer field
    pub(crate) fn increment_field(document: String, field: &str, delta: i64) -> Self {
        Self {
            writes: vec![Write {
                transform: DocumentTransform {
                    document,
                    field_transforms: vec![FieldTransform {
                        field_path: field.to_string(),
                        increment: Value::integer(delta),
                    }],
                },
            }],
        }
    }
}
