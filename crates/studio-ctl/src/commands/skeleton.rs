//! `skeleton`: template file body for a template.

use serde::Serialize;

use studio_sdk::codegen::{generate_skeleton as render_skeleton, SkeletonOptions};
use studio_shared::config::{Region, SkeletonKind};

use super::resolve_template;
use crate::{output, Context, OutputFormat};

/// Command-line overrides on top of the configured skeleton options.
#[derive(Debug, Default)]
pub(crate) struct SkeletonArgs {
    pub kind: Option<String>,
    pub include_head: bool,
    pub regions: Vec<String>,
    pub lang: Option<String>,
}

impl SkeletonArgs {
    fn apply(self, mut options: SkeletonOptions) -> SkeletonOptions {
        if let Some(kind) = self.kind {
            options.kind = SkeletonKind::parse_lenient(&kind);
        }
        if self.include_head {
            options.include_head = true;
        }
        if !self.regions.is_empty() {
            let mut regions: Vec<Region> =
                self.regions.iter().filter_map(|r| Region::from_name(r)).collect();
            regions.sort();
            regions.dedup();
            options.regions = regions;
        }
        if let Some(lang) = self.lang.filter(|l| !l.trim().is_empty()) {
            options.lang = lang.trim().to_string();
        }
        options
    }
}

#[derive(Debug, Serialize)]
struct GeneratedSkeleton<'a> {
    template: &'a str,
    kind: &'static str,
    code: String,
}

pub(crate) fn generate_skeleton(
    ctx: &Context,
    template: &str,
    args: SkeletonArgs,
) -> anyhow::Result<()> {
    let template = resolve_template(ctx, template)?;
    let options = args.apply(SkeletonOptions::from_settings(&ctx.settings));
    tracing::debug!(template = %template.name, kind = %options.kind, "Generating skeleton");
    let code = render_skeleton(template, &options);

    match ctx.format {
        OutputFormat::Json => output::json(&GeneratedSkeleton {
            template: &template.name,
            kind: options.kind.as_str(),
            code,
        }),
        OutputFormat::Text => {
            output::raw(&code);
            Ok(())
        }
    }
}
