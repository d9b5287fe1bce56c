//! The complete listing model for one container request.

use serde::Serialize;

use studio_shared::config::ListerSettings;
use studio_shared::models::SortDirection;
use studio_shared::{ContentStore, SchemaProvider};

use super::cells::cell_text;
use super::fields::{child_templates, is_data_container, select_display_fields};
use super::filter::{build_selector, ActiveFilter, RequestParams};
use super::pager::{pager_items, pager_query, Pager, Pagination};

/// One child page in the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListerRow {
    pub id: u32,
    pub title: String,
    pub url: String,
    /// One entry per display field, in column order.
    pub cells: Vec<String>,
}

/// Everything the rendering layer needs to draw a container listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListerOverview {
    pub parent_id: u32,
    pub parent_title: String,
    pub child_templates: Vec<String>,
    /// Display columns after `title`.
    pub fields: Vec<String>,
    /// Searchable fields, `title` first.
    pub allowed_fields: Vec<String>,
    pub selector: String,
    pub active: Option<ActiveFilter>,
    pub sort: String,
    pub dir: SortDirection,
    pub pagination: Pagination,
    pub total: usize,
    pub rows: Vec<ListerRow>,
    pub pager: Pager,
    pub show_help: bool,
    pub show_view: bool,
}

impl ListerOverview {
    /// Run the listing flow for `node_id`.
    ///
    /// `None` when the node does not exist, is not a configured container, or
    /// has no resolvable child templates; the caller then shows the regular
    /// page tree.
    pub fn build(
        settings: &ListerSettings,
        schema: &dyn SchemaProvider,
        content: &dyn ContentStore,
        node_id: u32,
        params: &RequestParams,
    ) -> Option<Self> {
        let node = content.node(node_id)?;
        if !is_data_container(settings, node) {
            tracing::debug!(node = node_id, template = %node.template, "Not a data container");
            return None;
        }

        let templates = child_templates(schema, content, node);
        if templates.is_empty() {
            tracing::debug!(node = node_id, "Container has no child templates");
            return None;
        }

        let fields = select_display_fields(settings, node, &templates);
        let build = build_selector(node, &fields, params);
        let pagination = Pagination::from_params(params, settings.page_size);
        let selector = build
            .selector
            .clone()
            .with_window(pagination.start, pagination.page_size);

        let result = content.find(&selector);
        let rows = result
            .items
            .iter()
            .map(|page| ListerRow {
                id: page.id,
                title: page.title.clone(),
                url: page.url.clone(),
                cells: fields
                    .iter()
                    .map(|field| cell_text(page.value(field).as_deref()))
                    .collect(),
            })
            .collect();

        tracing::debug!(
            node = node_id,
            selector = %selector,
            total = result.total,
            "Built lister overview"
        );

        Some(Self {
            parent_id: node.id,
            parent_title: node.title.clone(),
            child_templates: templates.iter().map(|t| t.name.clone()).collect(),
            allowed_fields: build.allowed_fields,
            selector: selector.to_string(),
            active: build.active,
            sort: build.selector.sort.field,
            dir: build.selector.sort.direction,
            pager: pager_items(pagination.page, pagination.page_size, result.total),
            pagination,
            total: result.total,
            rows,
            fields,
            show_help: settings.show_help,
            show_view: settings.show_view,
        })
    }

    /// Query string for the pager link to `page`.
    pub fn page_query(&self, page: usize) -> String {
        pager_query(self.active.as_ref(), page)
    }
}
