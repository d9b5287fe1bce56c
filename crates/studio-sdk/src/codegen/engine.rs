//! Tera engine holding the built-in field snippet templates.
//!
//! Snippets are compiled into the binary and registered under their strategy
//! name. Each template sees `pv` (page variable, e.g. `$page`), `f` (field
//! name) and, for repeaters, `body`.

use once_cell::sync::Lazy;
use tera::{Context, Tera};

use super::generator::SnippetStrategy;
use super::CodegenError;

const TEMPLATES: &[(&str, &str)] = &[
    ("title", include_str!("../../templates/snippets/title.php.tera")),
    ("text", include_str!("../../templates/snippets/text.php.tera")),
    ("html", include_str!("../../templates/snippets/html.php.tera")),
    (
        "image_multiple",
        include_str!("../../templates/snippets/image_multiple.php.tera"),
    ),
    (
        "image_single",
        include_str!("../../templates/snippets/image_single.php.tera"),
    ),
    (
        "page_multiple",
        include_str!("../../templates/snippets/page_multiple.php.tera"),
    ),
    (
        "page_single",
        include_str!("../../templates/snippets/page_single.php.tera"),
    ),
    ("repeater", include_str!("../../templates/snippets/repeater.php.tera")),
    ("options", include_str!("../../templates/snippets/options.php.tera")),
    ("datetime", include_str!("../../templates/snippets/datetime.php.tera")),
    ("url", include_str!("../../templates/snippets/url.php.tera")),
    ("email", include_str!("../../templates/snippets/email.php.tera")),
    ("integer", include_str!("../../templates/snippets/integer.php.tera")),
    ("float", include_str!("../../templates/snippets/float.php.tera")),
    ("checkbox", include_str!("../../templates/snippets/checkbox.php.tera")),
    ("generic", include_str!("../../templates/snippets/generic.php.tera")),
];

#[derive(Debug)]
pub(crate) struct SnippetEngine {
    tera: Tera,
}

impl SnippetEngine {
    pub(crate) fn new() -> Result<Self, CodegenError> {
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());
        tera.add_raw_templates(TEMPLATES.iter().copied())
            .map_err(CodegenError::Load)?;
        Ok(Self { tera })
    }

    /// Render one snippet. The result always ends in exactly one newline.
    pub(crate) fn render(
        &self,
        strategy: SnippetStrategy,
        page_var: &str,
        field_name: &str,
        body: &str,
    ) -> Result<String, CodegenError> {
        let name = strategy.template_name();
        let mut context = Context::new();
        context.insert("pv", page_var);
        context.insert("f", field_name);
        context.insert("body", body);

        let rendered = self
            .tera
            .render(name, &context)
            .map_err(|source| CodegenError::Render {
                snippet: name,
                source,
            })?;
        Ok(format!("{}\n", rendered.trim_end_matches('\n')))
    }
}

static SHARED: Lazy<Option<SnippetEngine>> = Lazy::new(|| match SnippetEngine::new() {
    Ok(engine) => Some(engine),
    Err(e) => {
        tracing::error!(error = %e, "Snippet templates failed to load");
        None
    }
});

/// Process-wide engine; templates are parsed once.
pub(crate) fn shared() -> Result<&'static SnippetEngine, CodegenError> {
    SHARED.as_ref().ok_or(CodegenError::Unavailable)
}
