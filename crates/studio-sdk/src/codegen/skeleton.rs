//! Template file skeletons.
//!
//! Produces the starting body of a template file for a new template. Writing
//! the file is left to the caller.

use std::fmt::Write as _;

use studio_shared::config::{Region, SkeletonKind, StudioSettings};
use studio_shared::models::TemplateDescriptor;
use studio_shared::sanitize;

const RULE_WIDTH: usize = 50;
const DEFAULT_LANG: &str = "en";
const UIKIT_VERSION: &str = "3.16.14";

/// How a skeleton is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonOptions {
    pub kind: SkeletonKind,
    /// Emit a full HTML document instead of a region fragment.
    pub include_head: bool,
    pub regions: Vec<Region>,
    /// `lang` attribute of the `<html>` element.
    pub lang: String,
}

impl Default for SkeletonOptions {
    fn default() -> Self {
        Self {
            kind: SkeletonKind::Basic,
            include_head: false,
            regions: Vec::new(),
            lang: DEFAULT_LANG.to_string(),
        }
    }
}

impl SkeletonOptions {
    pub fn from_settings(settings: &StudioSettings) -> Self {
        Self {
            kind: settings.template_skeleton_type,
            include_head: settings.template_include_head,
            regions: settings.regions(),
            ..Self::default()
        }
    }

    fn has(&self, region: Region) -> bool {
        self.regions.contains(&region)
    }
}

/// Generate a template file body for `template`.
pub fn generate_skeleton(template: &TemplateDescriptor, options: &SkeletonOptions) -> String {
    let mut out = match options.kind {
        SkeletonKind::Minimal => minimal(template, options),
        SkeletonKind::Basic | SkeletonKind::MarkupRegions | SkeletonKind::Uikit => {
            layout(template, options)
        }
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn header_comment(template: &TemplateDescriptor, fields: &str, markup_regions: bool) -> String {
    let mut comment = String::from("<?php namespace ProcessWire;\n\n");
    let _ = writeln!(
        comment,
        "// Template file for pages using the \"{}\" template",
        sanitize::comment_text(&template.name)
    );
    let _ = writeln!(comment, "// {}", "-".repeat(RULE_WIDTH));

    if markup_regions {
        comment.push_str(
            "// The #main element in this file will replace the #main element in _main.php\n\
             // when the Markup Regions feature is enabled, as it is by default.\n\
             // You can also append to (or prepend to) the #main element, and much more.\n\
             // See the Markup Regions documentation:\n\
             // https://processwire.com/docs/front-end/output/markup-regions/\n",
        );
    }

    if !fields.is_empty() {
        comment.push_str("//\n");
        let _ = writeln!(comment, "// Available fields: {fields}");
    }

    comment.push_str("\n?>");
    comment
}

fn document_head(out: &mut String, options: &SkeletonOptions, uikit: bool, with_ids: bool) {
    let _ = writeln!(out, "<!DOCTYPE html>\n<html lang=\"{}\">", options.lang);
    out.push_str(if with_ids { "<head id=\"html-head\">\n" } else { "<head>\n" });
    out.push_str("\t<meta http-equiv=\"content-type\" content=\"text/html; charset=utf-8\" />\n");
    out.push_str("\t<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("\t<title><?php echo $page->title; ?></title>\n");
    if uikit {
        out.push_str("\t<!-- UIkit CSS -->\n");
        let _ = writeln!(
            out,
            "\t<link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/uikit@{UIKIT_VERSION}/dist/css/uikit.min.css\">"
        );
    }
    out.push_str("</head>\n");
    out.push_str(if with_ids { "<body id=\"html-body\">\n\n" } else { "<body>\n\n" });
}

fn minimal(template: &TemplateDescriptor, options: &SkeletonOptions) -> String {
    let mut out = header_comment(template, "", false);
    out.push('\n');
    if options.include_head {
        document_head(&mut out, options, false, false);
        out.push_str("<!-- Your code here -->\n\n</body>\n</html>\n");
    } else {
        out.push_str("<!-- Your code here -->\n");
    }
    out
}

/// One layout region. UIkit wraps the content in a container.
fn region(out: &mut String, tag: &str, id: &str, uikit_class: Option<&str>, content: &str) {
    match uikit_class {
        Some(class) => {
            let _ = writeln!(out, "<{tag} id=\"{id}\" class=\"{class}\">");
            out.push_str("\t<div class=\"uk-container\">\n");
            let _ = writeln!(out, "\t\t{content}");
            out.push_str("\t</div>\n");
        }
        None => {
            let _ = writeln!(out, "<{tag} id=\"{id}\">");
            let _ = writeln!(out, "\t{content}");
        }
    }
    let _ = writeln!(out, "</{tag}>");
}

fn layout(template: &TemplateDescriptor, options: &SkeletonOptions) -> String {
    let uikit = options.kind == SkeletonKind::Uikit;
    let fields = template.field_names().join(", ");
    let mut out = header_comment(
        template,
        &fields,
        options.kind == SkeletonKind::MarkupRegions,
    );
    out.push_str("\n\n");

    if options.include_head {
        document_head(&mut out, options, uikit, true);
    }

    if options.has(Region::Header) {
        let class = uikit.then_some("uk-section uk-section-primary");
        region(&mut out, "header", "header", class, "<!-- Header content -->");
        out.push('\n');
    }

    if options.has(Region::Sidebar) {
        let class = uikit.then_some("uk-section");
        region(&mut out, "aside", "sidebar", class, "<!-- Sidebar content -->");
        out.push('\n');
    }

    if uikit {
        out.push_str("<main id=\"main\" class=\"uk-section\">\n");
        out.push_str("\t<div class=\"uk-container\">\n\n");
        out.push_str("\t\t<h1 class=\"uk-heading-medium\"><?php echo $page->title; ?></h1>\n\n");
        out.push_str("\t\t<!-- Your content here -->\n\n");
        out.push_str("\t</div>\n");
        out.push_str("</main>\n");
    } else {
        out.push_str("<main id=\"main\">\n\n\t<!-- Your content here -->\n\n</main>\n");
    }

    if options.has(Region::Footer) {
        out.push('\n');
        let class = uikit.then_some("uk-section uk-section-secondary");
        region(&mut out, "footer", "footer", class, "<!-- Footer content -->");
    }

    if options.include_head {
        if uikit {
            out.push_str("\n\t<!-- UIkit JS -->\n");
            let _ = writeln!(
                out,
                "\t<script src=\"https://cdn.jsdelivr.net/npm/uikit@{UIKIT_VERSION}/dist/js/uikit.min.js\"></script>"
            );
            let _ = writeln!(
                out,
                "\t<script src=\"https://cdn.jsdelivr.net/npm/uikit@{UIKIT_VERSION}/dist/js/uikit-icons.min.js\"></script>"
            );
        }
        out.push_str("\n</body>\n</html>\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_shared::models::{FieldDescriptor, FieldKind};

    fn article() -> TemplateDescriptor {
        TemplateDescriptor::new(3, "article")
            .with_field(FieldDescriptor::new("title", FieldKind::PageTitle))
            .with_field(FieldDescriptor::new("body", FieldKind::Textarea))
    }

    fn options(kind: SkeletonKind) -> SkeletonOptions {
        SkeletonOptions {
            kind,
            ..Default::default()
        }
    }

    #[test]
    fn test_basic_skeleton() {
        let out = generate_skeleton(&article(), &options(SkeletonKind::Basic));
        assert!(out.starts_with("<?php namespace ProcessWire;\n\n// Template file for pages using the \"article\" template\n"));
        assert!(out.contains(&format!("// {}\n", "-".repeat(50))));
        assert!(out.contains("//\n// Available fields: title, body\n\n?>\n\n<main id=\"main\">"));
        assert!(!out.contains("<!DOCTYPE html>"));
        assert!(!out.contains("<header"));
        assert!(out.ends_with("</main>\n"));
    }

    #[test]
    fn test_minimal_skeleton_has_no_field_list() {
        let out = generate_skeleton(&article(), &options(SkeletonKind::Minimal));
        assert!(!out.contains("Available fields"));
        assert!(out.ends_with("?>\n<!-- Your code here -->\n"));
    }

    #[test]
    fn test_minimal_with_head() {
        let opts = SkeletonOptions {
            include_head: true,
            ..options(SkeletonKind::Minimal)
        };
        let out = generate_skeleton(&article(), &opts);
        assert!(out.contains("?>\n<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n"));
        assert!(out.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_markup_regions_note() {
        let out = generate_skeleton(&article(), &options(SkeletonKind::MarkupRegions));
        assert!(out.contains("// The #main element in this file will replace the #main element in _main.php\n"));
        assert!(out.contains("markup-regions/\n//\n// Available fields: title, body\n"));
    }

    #[test]
    fn test_regions_in_layout_order() {
        let opts = SkeletonOptions {
            regions: vec![Region::Footer, Region::Header, Region::Sidebar],
            ..options(SkeletonKind::Basic)
        };
        let out = generate_skeleton(&article(), &opts);
        let header = out.find("<header id=\"header\">").unwrap();
        let aside = out.find("<aside id=\"sidebar\">").unwrap();
        let main = out.find("<main id=\"main\">").unwrap();
        let footer = out.find("<footer id=\"footer\">").unwrap();
        assert!(header < aside && aside < main && main < footer);
        assert!(out.contains("<header id=\"header\">\n\t<!-- Header content -->\n</header>\n\n"));
    }

    #[test]
    fn test_uikit_with_head_and_regions() {
        let opts = SkeletonOptions {
            include_head: true,
            regions: vec![Region::Header],
            lang: "de".into(),
            ..options(SkeletonKind::Uikit)
        };
        let out = generate_skeleton(&article(), &opts);
        assert!(out.contains("<html lang=\"de\">\n<head id=\"html-head\">\n"));
        assert!(out.contains("uikit@3.16.14/dist/css/uikit.min.css"));
        assert!(out.contains("<header id=\"header\" class=\"uk-section uk-section-primary\">\n\t<div class=\"uk-container\">\n\t\t<!-- Header content -->\n\t</div>\n</header>\n"));
        assert!(out.contains("<h1 class=\"uk-heading-medium\"><?php echo $page->title; ?></h1>"));
        assert!(out.contains("uikit-icons.min.js"));
        assert!(out.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_options_from_settings() {
        let settings = StudioSettings {
            template_skeleton_type: SkeletonKind::Uikit,
            template_include_head: true,
            template_regions: vec!["sidebar".into(), "nav".into()],
            ..Default::default()
        };
        let opts = SkeletonOptions::from_settings(&settings);
        assert_eq!(opts.kind, SkeletonKind::Uikit);
        assert!(opts.include_head);
        assert_eq!(opts.regions, vec![Region::Sidebar]);
        assert_eq!(opts.lang, "en");
    }
}
