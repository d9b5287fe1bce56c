//! `templates` and `fields`.

use serde::Serialize;

use studio_sdk::codegen::{available_templates, template_fields};

use super::resolve_template;
use crate::{output, Context, OutputFormat};

#[derive(Debug, Serialize)]
struct TemplateRow<'a> {
    id: u32,
    name: &'a str,
    label: &'a str,
    fields: usize,
}

pub(crate) fn list_templates(ctx: &Context) -> anyhow::Result<()> {
    let templates = available_templates(&ctx.site);

    if ctx.format == OutputFormat::Json {
        let rows: Vec<TemplateRow<'_>> = templates
            .iter()
            .map(|t| TemplateRow {
                id: t.id,
                name: &t.name,
                label: t.display_label(),
                fields: t.fields.len(),
            })
            .collect();
        return output::json(&rows);
    }

    if templates.is_empty() {
        output::dim("No templates.");
        return Ok(());
    }
    output::header(format!("Templates ({})", templates.len()));
    for t in templates {
        output::entry(
            format!("{:>4}  {}", t.id, t.display_label()),
            format!("{} · {} fields", t.name, t.fields.len()),
        );
    }
    Ok(())
}

pub(crate) fn list_fields(ctx: &Context, template: &str) -> anyhow::Result<()> {
    let template = resolve_template(ctx, template)?;
    let fields = template_fields(&ctx.site, template.id).unwrap_or_default();

    if ctx.format == OutputFormat::Json {
        return output::json(&fields);
    }

    output::header(format!("{} ({})", template.display_label(), template.name));
    if fields.is_empty() {
        output::dim("  No fields.");
        return Ok(());
    }
    for field in &fields {
        let marker = if field.required { " *" } else { "" };
        let label = if field.label.is_empty() {
            &field.name
        } else {
            &field.label
        };
        output::entry(
            format!("{}{marker}", field.name),
            format!("{} · {label}", field.kind),
        );
    }
    Ok(())
}
