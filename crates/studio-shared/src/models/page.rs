//! Content nodes and their stored field values.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A stored field value as exposed by the content store.
///
/// Page references are projected to the referenced pages' titles, option
/// selections to their option titles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Plain string form of the value, as the host would cast it.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Bool(true) => Cow::Borrowed("1"),
            FieldValue::Bool(false) => Cow::Borrowed(""),
            FieldValue::Integer(n) => Cow::Owned(n.to_string()),
            FieldValue::Float(n) => Cow::Owned(n.to_string()),
            FieldValue::Text(s) => Cow::Borrowed(s),
            FieldValue::List(items) => Cow::Owned(items.join(", ")),
        }
    }

    /// Numeric form for ordering, if the value is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(n) => Some(*n as f64),
            FieldValue::Float(n) => Some(*n),
            FieldValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            FieldValue::Text(_) | FieldValue::List(_) => None,
        }
    }
}

/// A content node (page) conforming to a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageNode {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<u32>,
    /// Name of the template this node uses.
    pub template: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub values: BTreeMap<String, FieldValue>,
}

impl PageNode {
    pub fn new(id: u32, template: impl Into<String>) -> Self {
        Self {
            id,
            parent: None,
            template: template.into(),
            name: String::new(),
            title: String::new(),
            url: String::new(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_parent(mut self, parent: u32) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_value(mut self, field: impl Into<String>, value: FieldValue) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    /// Value of a field; `title` and `name` read the node's own attributes.
    pub fn value(&self, field: &str) -> Option<Cow<'_, FieldValue>> {
        match field {
            "title" => Some(Cow::Owned(FieldValue::Text(self.title.clone()))),
            "name" => Some(Cow::Owned(FieldValue::Text(self.name.clone()))),
            _ => self.values.get(field).map(Cow::Borrowed),
        }
    }
}
