//! # Code Generation
//!
//! Turns a template's field definitions into template-file code.
//!
//! - [`generator`]: annotated accessor snippets for a selection of fields,
//!   dispatched by field kind
//! - [`catalog`]: the templates and fields a developer can pick from
//! - [`skeleton`]: complete template-file bodies for new templates
//!
//! Generation is total: an unknown template, an empty selection or a field the
//! template does not have all degrade to less (or empty) output, never to an
//! error. [`CodegenError`] only describes template-engine failures, which are
//! logged where they occur.

pub mod catalog;
mod engine;
pub mod generator;
pub mod skeleton;

pub use catalog::{available_templates, template_fields, FieldSummary};
pub use generator::{generate_code, generate_for_template, normalize_selection, SnippetStrategy};
pub use skeleton::{generate_skeleton, SkeletonOptions};

/// Template engine failure while rendering a snippet.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error("failed to load snippet templates: {0}")]
    Load(#[source] tera::Error),

    #[error("failed to render snippet '{snippet}': {source}")]
    Render {
        snippet: &'static str,
        source: tera::Error,
    },

    #[error("snippet engine unavailable")]
    Unavailable,
}
