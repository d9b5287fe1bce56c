//! Host collaborator traits.
//!
//! The tools are driven entirely by a host CMS object model. These traits are
//! the seams: the admin integration implements them over the live host, tests
//! and the CLI use [`crate::snapshot::SiteSnapshot`].

use crate::config::StudioSettings;
use crate::errors::SettingsError;
use crate::models::{PageNode, Selector, TemplateDescriptor};

/// Resolves templates and their fieldgroups.
pub trait SchemaProvider {
    fn template_by_id(&self, id: u32) -> Option<&TemplateDescriptor>;

    fn template_by_name(&self, name: &str) -> Option<&TemplateDescriptor>;

    /// Every template known to the host, system templates included.
    fn templates(&self) -> Vec<&TemplateDescriptor>;
}

/// One page of query results plus the total match count.
#[derive(Debug, Clone, Default)]
pub struct QueryPage<'a> {
    pub items: Vec<&'a PageNode>,
    pub total: usize,
}

/// Resolves content nodes and evaluates child queries.
pub trait ContentStore {
    fn node(&self, id: u32) -> Option<&PageNode>;

    /// Direct children of `parent_id` in host order, at most `limit`.
    fn children(&self, parent_id: u32, limit: usize) -> Vec<&PageNode>;

    /// Evaluate a selector; `total` ignores the selector's window.
    fn find(&self, selector: &Selector) -> QueryPage<'_>;
}

/// Reads and writes the operator-level settings blob.
pub trait ConfigStore {
    /// Current settings; missing or malformed data yields defaults.
    fn load(&self) -> StudioSettings;

    fn save(&mut self, settings: &StudioSettings) -> Result<(), SettingsError>;
}
