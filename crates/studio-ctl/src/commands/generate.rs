//! `generate`: accessor code for selected fields.

use serde::Serialize;

use studio_sdk::codegen::{generate_for_template, normalize_selection};

use super::resolve_template;
use crate::{output, Context, OutputFormat};

#[derive(Debug, Serialize)]
struct GeneratedCode<'a> {
    template: &'a str,
    fields: Vec<String>,
    code: String,
}

pub(crate) fn generate_fields(
    ctx: &Context,
    template: &str,
    fields: &[String],
) -> anyhow::Result<()> {
    let template = resolve_template(ctx, template)?;
    let selection = normalize_selection(fields);
    let code = generate_for_template(&ctx.site, template, &selection);

    if code.is_empty() {
        output::warning(format!(
            "none of the selected fields belong to template '{}'",
            template.name
        ));
    }

    match ctx.format {
        OutputFormat::Json => output::json(&GeneratedCode {
            template: &template.name,
            fields: selection,
            code,
        }),
        OutputFormat::Text => {
            output::raw(&code);
            Ok(())
        }
    }
}
