//! Template descriptors: a named fieldgroup plus structural rules.

use serde::{Deserialize, Serialize};

use super::field::FieldDescriptor;

/// Read-only projection of a schema template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub label: String,
    /// Ordered fieldgroup.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    /// Names of templates allowed for children of pages using this template.
    #[serde(default)]
    pub child_templates: Vec<String>,
    /// System templates are excluded from every user-facing operation.
    #[serde(default)]
    pub system: bool,
}

impl TemplateDescriptor {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            label: String::new(),
            fields: Vec::new(),
            child_templates: Vec::new(),
            system: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_child_template(mut self, name: impl Into<String>) -> Self {
        self.child_templates.push(name.into());
        self
    }

    pub fn system(mut self) -> Self {
        self.system = true;
        self
    }

    /// Label, falling back to the name when no label is configured.
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    /// Look up a field of this template's fieldgroup by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in fieldgroup order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}
