//! Command handlers.

mod generate;
mod lister;
mod skeleton;
mod templates;

pub(crate) use generate::generate_fields;
pub(crate) use lister::show_lister;
pub(crate) use skeleton::{generate_skeleton, SkeletonArgs};
pub(crate) use templates::{list_fields, list_templates};

use studio_shared::models::TemplateDescriptor;
use studio_shared::SchemaProvider;

use crate::Context;

/// Resolve a template argument: a numeric id first, then a name.
///
/// System templates are not offered by any command.
pub(crate) fn resolve_template<'a>(
    ctx: &'a Context,
    reference: &str,
) -> anyhow::Result<&'a TemplateDescriptor> {
    let reference = reference.trim();
    let found = reference
        .parse::<u32>()
        .ok()
        .and_then(|id| ctx.site.template_by_id(id))
        .or_else(|| ctx.site.template_by_name(reference))
        .filter(|t| !t.system);

    found.ok_or_else(|| anyhow::anyhow!("template '{reference}' not found"))
}
