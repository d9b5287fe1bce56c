//! Request parameters to child selector.

use serde::Serialize;

use studio_shared::models::{PageNode, Selector, SortDirection, TextMatch};
use studio_shared::sanitize;

const TITLE_FIELD: &str = "title";

/// Raw lister query parameters, before sanitising.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    /// Free-text search term.
    pub q: Option<String>,
    /// Field searched by `q`.
    pub by: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    /// 1-based page number.
    pub pg: Option<String>,
}

impl RequestParams {
    /// Parse a URL query string (with or without the leading `?`). Repeated
    /// keys keep the last value; unknown keys are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "q" => &mut params.q,
                "by" => &mut params.by,
                "sort" => &mut params.sort,
                "dir" => &mut params.dir,
                "pg" => &mut params.pg,
                _ => continue,
            };
            *slot = Some(value.into_owned());
        }
        params
    }
}

/// Search the listing is currently filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilter {
    pub by: String,
    pub q: String,
}

/// Result of [`build_selector`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorBuild {
    pub selector: Selector,
    /// Only set when a non-empty search term was supplied, whatever the sort.
    pub active: Option<ActiveFilter>,
    /// `title` followed by the display fields; the valid values for `by`.
    pub allowed_fields: Vec<String>,
}

impl SelectorBuild {
    pub fn selector_string(&self) -> String {
        self.selector.to_string()
    }
}

/// Build the child query for `parent` from request parameters.
///
/// `by` must name an allowed field and falls back to `title`. `sort` is only
/// sanitised to a name token without a leading `-` or `.` (direction comes
/// from `dir` alone); it is not checked against the allowed fields.
pub fn build_selector(
    parent: &PageNode,
    field_names: &[String],
    params: &RequestParams,
) -> SelectorBuild {
    let mut allowed_fields = vec![TITLE_FIELD.to_string()];
    for name in field_names {
        if !allowed_fields.contains(name) {
            allowed_fields.push(name.clone());
        }
    }

    let by = params
        .by
        .as_deref()
        .map(sanitize::name)
        .filter(|by| allowed_fields.contains(by))
        .unwrap_or_else(|| TITLE_FIELD.to_string());

    let q = params.q.as_deref().map(sanitize::text).unwrap_or_default();

    let mut selector = Selector::children_of(parent.id);
    let active = if q.is_empty() {
        None
    } else {
        selector.text_match = Some(TextMatch {
            field: by.clone(),
            term: q.clone(),
        });
        Some(ActiveFilter { by, q })
    };

    selector.sort.field = params
        .sort
        .as_deref()
        .map(|sort| {
            sanitize::name(sort)
                .trim_start_matches(['-', '.'])
                .to_string()
        })
        .filter(|sort| !sort.is_empty())
        .unwrap_or_else(|| TITLE_FIELD.to_string());
    selector.sort.direction = params
        .dir
        .as_deref()
        .map(|dir| SortDirection::parse_lenient(&sanitize::text(dir)))
        .unwrap_or_default();

    SelectorBuild {
        selector,
        active,
        allowed_fields,
    }
}
