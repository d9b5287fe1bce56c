//! Field-to-snippet generation.
//!
//! `generate_code` takes a template and a caller-supplied field selection and
//! produces one annotated block of template-file code per field:
//!
//! ```text
//! <?php
//! // Generated code for template: product
//! $sanitizer = wire('sanitizer');
//! $modules = wire('modules');
//!
//! // BEGIN field: price (Price)
//! <?php $number = number_format((float) $page->price, 2); ?>
//! // Use: $number
//! // END field: price
//! ```
//!
//! The selection is a request input and is never trusted: names are sanitised
//! and only fields that exist in the template's fieldgroup produce code.

use std::fmt::Write as _;

use studio_shared::models::{FieldDescriptor, FieldKind, TemplateDescriptor};
use studio_shared::sanitize;
use studio_shared::SchemaProvider;

use super::engine::{self, SnippetEngine};
use super::CodegenError;

const PAGE_VAR: &str = "$page";
const ITEM_VAR: &str = "$item";
const SUBFIELD_INDENT: usize = 4;
const TITLE_FIELD: &str = "title";
const EMPTY_REPEATER_BODY: &str = "    // Add your repeater item fields here\n";

/// Snippet emitted for a field, chosen from its kind and cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetStrategy {
    /// The `title` pseudo-field.
    Title,
    EscapedText,
    /// Rich text: purify when a purifier is installed, raw output otherwise.
    PurifiedHtml,
    ImageLoop,
    ImageSingle,
    PageReferenceLoop,
    PageReferenceSingle,
    Repeater,
    Options,
    Datetime,
    Url,
    Email,
    Integer,
    Float,
    Checkbox,
    /// Scalar-guarded escaped output.
    Generic,
}

impl SnippetStrategy {
    pub const ALL: [SnippetStrategy; 16] = [
        SnippetStrategy::Title,
        SnippetStrategy::EscapedText,
        SnippetStrategy::PurifiedHtml,
        SnippetStrategy::ImageLoop,
        SnippetStrategy::ImageSingle,
        SnippetStrategy::PageReferenceLoop,
        SnippetStrategy::PageReferenceSingle,
        SnippetStrategy::Repeater,
        SnippetStrategy::Options,
        SnippetStrategy::Datetime,
        SnippetStrategy::Url,
        SnippetStrategy::Email,
        SnippetStrategy::Integer,
        SnippetStrategy::Float,
        SnippetStrategy::Checkbox,
        SnippetStrategy::Generic,
    ];

    /// Strategy for a top-level field.
    pub fn for_field(field: &FieldDescriptor) -> Self {
        match &field.kind {
            FieldKind::Text | FieldKind::Textarea | FieldKind::PageTitle => {
                if field.is_rich_text() {
                    SnippetStrategy::PurifiedHtml
                } else {
                    SnippetStrategy::EscapedText
                }
            }
            FieldKind::Image if field.is_multi_valued() => SnippetStrategy::ImageLoop,
            FieldKind::Image => SnippetStrategy::ImageSingle,
            FieldKind::PageReference if field.is_multi_valued() => {
                SnippetStrategy::PageReferenceLoop
            }
            FieldKind::PageReference => SnippetStrategy::PageReferenceSingle,
            FieldKind::Repeater => SnippetStrategy::Repeater,
            FieldKind::Options => SnippetStrategy::Options,
            FieldKind::Datetime => SnippetStrategy::Datetime,
            FieldKind::Url => SnippetStrategy::Url,
            FieldKind::Email => SnippetStrategy::Email,
            FieldKind::Integer => SnippetStrategy::Integer,
            FieldKind::Float => SnippetStrategy::Float,
            FieldKind::Checkbox => SnippetStrategy::Checkbox,
            FieldKind::Unknown(_) => SnippetStrategy::Generic,
        }
    }

    /// Strategy for a repeater sub-field. Repeaters do not nest.
    pub fn for_subfield(field: &FieldDescriptor) -> Self {
        match Self::for_field(field) {
            SnippetStrategy::Repeater => SnippetStrategy::Generic,
            strategy => strategy,
        }
    }

    pub(crate) fn template_name(&self) -> &'static str {
        match self {
            SnippetStrategy::Title => "title",
            SnippetStrategy::EscapedText => "text",
            SnippetStrategy::PurifiedHtml => "html",
            SnippetStrategy::ImageLoop => "image_multiple",
            SnippetStrategy::ImageSingle => "image_single",
            SnippetStrategy::PageReferenceLoop => "page_multiple",
            SnippetStrategy::PageReferenceSingle => "page_single",
            SnippetStrategy::Repeater => "repeater",
            SnippetStrategy::Options => "options",
            SnippetStrategy::Datetime => "datetime",
            SnippetStrategy::Url => "url",
            SnippetStrategy::Email => "email",
            SnippetStrategy::Integer => "integer",
            SnippetStrategy::Float => "float",
            SnippetStrategy::Checkbox => "checkbox",
            SnippetStrategy::Generic => "generic",
        }
    }
}

/// Sanitise requested names to field-name tokens, dropping empties and
/// duplicates. First occurrence wins the position.
pub fn normalize_selection<S: AsRef<str>>(selected: &[S]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(selected.len());
    for raw in selected {
        let name = sanitize::field_name(raw.as_ref());
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Generate code for the selected fields of the template with `template_id`.
///
/// Returns an empty string when the template does not resolve, the selection
/// is empty after sanitising, or none of the selected fields belong to the
/// template.
pub fn generate_code<S: AsRef<str>>(
    schema: &dyn SchemaProvider,
    template_id: u32,
    selected: &[S],
) -> String {
    match schema.template_by_id(template_id) {
        Some(template) => generate_for_template(schema, template, selected),
        None => {
            tracing::debug!(template_id, "Template not found, nothing to generate");
            String::new()
        }
    }
}

/// Generate code for an already resolved template.
///
/// Blocks follow the order of `selected`. `schema` resolves repeater
/// sub-templates.
pub fn generate_for_template<S: AsRef<str>>(
    schema: &dyn SchemaProvider,
    template: &TemplateDescriptor,
    selected: &[S],
) -> String {
    let selection = normalize_selection(selected);
    if selection.is_empty() {
        return String::new();
    }

    let engine = match engine::shared() {
        Ok(engine) => engine,
        Err(e) => {
            tracing::warn!(error = %e, "Code generation unavailable");
            return String::new();
        }
    };

    let mut blocks = String::new();
    for name in &selection {
        if name == TITLE_FIELD {
            match engine.render(SnippetStrategy::Title, PAGE_VAR, TITLE_FIELD, "") {
                Ok(snippet) => {
                    let _ = write!(
                        blocks,
                        "// BEGIN field: {TITLE_FIELD}\n{snippet}// END field: {TITLE_FIELD}\n\n"
                    );
                }
                Err(e) => tracing::warn!(error = %e, "Skipping title block"),
            }
            continue;
        }

        let Some(field) = template.field(name) else {
            tracing::debug!(
                field = %name,
                template = %template.name,
                "Field not in fieldgroup, dropped"
            );
            continue;
        };

        match render_field(engine, schema, field, PAGE_VAR, SnippetStrategy::for_field(field)) {
            Ok(snippet) => {
                let label = sanitize::comment_text(field.display_label());
                let _ = write!(
                    blocks,
                    "// BEGIN field: {name} ({label})\n{snippet}// END field: {name}\n\n"
                );
            }
            Err(e) => {
                tracing::warn!(field = %name, error = %e, "Skipping field block");
            }
        }
    }

    if blocks.is_empty() {
        return String::new();
    }

    format!("{}{blocks}", preamble(&template.name))
}

fn preamble(template_name: &str) -> String {
    format!(
        "<?php\n// Generated code for template: {template_name}\n$sanitizer = wire('sanitizer');\n$modules = wire('modules');\n\n"
    )
}

fn render_field(
    engine: &SnippetEngine,
    schema: &dyn SchemaProvider,
    field: &FieldDescriptor,
    page_var: &str,
    strategy: SnippetStrategy,
) -> Result<String, CodegenError> {
    let body = match strategy {
        SnippetStrategy::Repeater => repeater_body(engine, schema, field)?,
        _ => String::new(),
    };
    engine.render(strategy, page_var, &field.name, &body)
}

/// Loop body of a repeater: one commented, indented block per sub-field.
fn repeater_body(
    engine: &SnippetEngine,
    schema: &dyn SchemaProvider,
    field: &FieldDescriptor,
) -> Result<String, CodegenError> {
    let sub_template_name = field.repeater_template_name();
    let Some(sub_template) = schema.template_by_name(&sub_template_name) else {
        tracing::debug!(
            field = %field.name,
            template = %sub_template_name,
            "Repeater template not found"
        );
        return Ok(EMPTY_REPEATER_BODY.to_string());
    };

    let mut body = String::new();
    for sub in &sub_template.fields {
        let snippet = render_field(
            engine,
            schema,
            sub,
            ITEM_VAR,
            SnippetStrategy::for_subfield(sub),
        )?;
        let label = sanitize::comment_text(sub.display_label());
        let _ = writeln!(body, "    // Subfield: {} ({label})", sub.name);
        body.push_str(&indent_code(&snippet, SUBFIELD_INDENT));
        body.push('\n');
    }

    if body.is_empty() {
        body.push_str(EMPTY_REPEATER_BODY);
    }
    Ok(body)
}

/// Indent every non-blank line by `spaces`; blank lines become empty.
pub(crate) fn indent_code(code: &str, spaces: usize) -> String {
    let indent = " ".repeat(spaces);
    code.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
