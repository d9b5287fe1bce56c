//! Pagination of the listing.

use serde::Serialize;

use super::filter::{ActiveFilter, RequestParams};

/// Number of pages shown in full before the pager collapses into gaps.
const MAX_FULL_PAGES: usize = 7;

/// Requested page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub start: usize,
}

impl Pagination {
    /// `pg` that is missing, not a number or below 1 means page 1.
    pub fn from_params(params: &RequestParams, page_size: u32) -> Self {
        let page = params
            .pg
            .as_deref()
            .and_then(|pg| pg.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);
        let page_size = page_size as usize;
        Self {
            page,
            page_size,
            start: (page - 1).saturating_mul(page_size),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PagerItem {
    Page { number: usize, current: bool },
    Gap,
}

/// Pager links for one listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pager {
    pub items: Vec<PagerItem>,
    pub previous: Option<usize>,
    pub next: Option<usize>,
    pub pages: usize,
}

impl Pager {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Pager for `page` when `total` results are shown `limit` at a time.
///
/// Empty when everything fits on one page. Up to seven pages are listed in
/// full; beyond that the first and last page and the neighbours of the
/// current page are shown, with gaps in between.
pub fn pager_items(page: usize, limit: usize, total: usize) -> Pager {
    if limit == 0 || total <= limit {
        return Pager::default();
    }
    let pages = total.div_ceil(limit);

    let numbers: Vec<Option<usize>> = if pages <= MAX_FULL_PAGES {
        (1..=pages).map(Some).collect()
    } else {
        let mut numbers = vec![Some(1)];
        if page > 3 {
            numbers.push(None);
        }
        let low = page.saturating_sub(1).max(2);
        let high = page.saturating_add(1).min(pages - 1);
        numbers.extend((low..=high).map(Some));
        if page.saturating_add(2) < pages {
            numbers.push(None);
        }
        numbers.push(Some(pages));
        numbers
    };

    let items = numbers
        .into_iter()
        .map(|n| match n {
            Some(number) => PagerItem::Page {
                number,
                current: number == page,
            },
            None => PagerItem::Gap,
        })
        .collect();

    Pager {
        items,
        previous: (page > 1).then(|| page - 1),
        next: (page < pages).then(|| page + 1),
        pages,
    }
}

/// Query string for a pager link: the active search plus `pg`.
pub fn pager_query(active: Option<&ActiveFilter>, page: usize) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(active) = active {
        if !active.q.is_empty() {
            query.append_pair("q", &active.q);
        }
        if !active.by.is_empty() {
            query.append_pair("by", &active.by);
        }
    }
    query.append_pair("pg", &page.to_string());
    query.finish()
}
