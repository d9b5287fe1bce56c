//! In-memory site snapshot.
//!
//! A YAML export of a site's templates and pages, used by the CLI and tests in
//! place of a live host. It implements both [`SchemaProvider`] and
//! [`ContentStore`].
//!
//! ```yaml
//! templates:
//!   - id: 44
//!     name: product
//!     label: Product
//!     fields:
//!       - { name: price, type: FieldtypeFloat }
//! pages:
//!   - { id: 1000, template: products, title: Products }
//!   - { id: 1001, parent: 1000, template: product, title: Lamp, values: { price: 19.5 } }
//! ```

use std::cmp::Ordering;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::SnapshotError;
use crate::host::{ContentStore, QueryPage, SchemaProvider};
use crate::models::{FieldValue, PageNode, Selector, SortDirection, TemplateDescriptor};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSnapshot {
    #[serde(default)]
    pub templates: Vec<TemplateDescriptor>,
    /// Pages in host order; children are listed in the order they appear here.
    #[serde(default)]
    pub pages: Vec<PageNode>,
}

impl SiteSnapshot {
    pub fn new(templates: Vec<TemplateDescriptor>, pages: Vec<PageNode>) -> Self {
        Self { templates, pages }
    }

    pub fn from_yaml_str(yaml: &str, origin: &Path) -> Result<Self, SnapshotError> {
        serde_yaml::from_str(yaml).map_err(|source| SnapshotError::Yaml {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_yaml_str(&contents, path)?;
        tracing::debug!(
            path = %path.display(),
            templates = snapshot.templates.len(),
            pages = snapshot.pages.len(),
            "Loaded site snapshot"
        );
        Ok(snapshot)
    }

    fn child_nodes(&self, parent_id: u32) -> impl Iterator<Item = &PageNode> {
        self.pages
            .iter()
            .filter(move |page| page.parent == Some(parent_id))
    }
}

impl SchemaProvider for SiteSnapshot {
    fn template_by_id(&self, id: u32) -> Option<&TemplateDescriptor> {
        self.templates.iter().find(|t| t.id == id)
    }

    fn template_by_name(&self, name: &str) -> Option<&TemplateDescriptor> {
        self.templates.iter().find(|t| t.name == name)
    }

    fn templates(&self) -> Vec<&TemplateDescriptor> {
        self.templates.iter().collect()
    }
}

fn matches_term(page: &PageNode, field: &str, needle: &str) -> bool {
    page.value(field)
        .is_some_and(|value| value.display_text().to_lowercase().contains(needle))
}

/// Total order for sorting: missing values, then numbers, then text.
fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a
                .display_text()
                .to_lowercase()
                .cmp(&b.display_text().to_lowercase()),
        },
    }
}

impl ContentStore for SiteSnapshot {
    fn node(&self, id: u32) -> Option<&PageNode> {
        self.pages.iter().find(|page| page.id == id)
    }

    fn children(&self, parent_id: u32, limit: usize) -> Vec<&PageNode> {
        self.child_nodes(parent_id).take(limit).collect()
    }

    fn find(&self, selector: &Selector) -> QueryPage<'_> {
        let needle = selector
            .text_match
            .as_ref()
            .map(|m| (m.field.as_str(), m.term.to_lowercase()));

        let mut items: Vec<&PageNode> = self
            .child_nodes(selector.parent)
            .filter(|page| match &needle {
                Some((field, term)) => matches_term(page, field, term),
                None => true,
            })
            .collect();

        let sort_field = selector.sort.field.as_str();
        items.sort_by(|a, b| {
            let ordering = compare_values(
                a.value(sort_field).as_deref(),
                b.value(sort_field).as_deref(),
            );
            match selector.sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = items.len();
        let items = match selector.window {
            Some(window) => items
                .into_iter()
                .skip(window.start)
                .take(window.limit)
                .collect(),
            None => items,
        };

        QueryPage { items, total }
    }
}
