//! Templates and fields offered to the code generator.

use serde::Serialize;

use studio_shared::models::{FieldDescriptor, TemplateDescriptor};
use studio_shared::SchemaProvider;

/// Field metadata shown when picking fields for generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSummary {
    pub id: u32,
    pub name: String,
    pub label: String,
    /// Host type class name, e.g. `FieldtypeText`.
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub required: bool,
}

impl From<&FieldDescriptor> for FieldSummary {
    fn from(field: &FieldDescriptor) -> Self {
        Self {
            id: field.id,
            name: field.name.clone(),
            label: field.label.clone(),
            kind: field.kind.type_name().to_string(),
            description: field.description.clone(),
            required: field.required,
        }
    }
}

/// Non-system templates, sorted case-insensitively by label (falling back to name).
pub fn available_templates(schema: &dyn SchemaProvider) -> Vec<&TemplateDescriptor> {
    let mut templates: Vec<&TemplateDescriptor> = schema
        .templates()
        .into_iter()
        .filter(|t| !t.system)
        .collect();
    templates.sort_by_cached_key(|t| t.display_label().to_lowercase());
    templates
}

/// Fields of the template with `template_id`, in fieldgroup order.
///
/// `None` when the id does not resolve; id `0` never does.
pub fn template_fields(schema: &dyn SchemaProvider, template_id: u32) -> Option<Vec<FieldSummary>> {
    if template_id == 0 {
        return None;
    }
    let template = schema.template_by_id(template_id)?;
    Some(template.fields.iter().map(FieldSummary::from).collect())
}
