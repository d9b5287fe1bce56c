//! Structured child query evaluated by the content store.
//!
//! The `Display` form is the host's selector string, e.g.
//! `parent=1042, summary*=lamp, sort=title asc, start=0, limit=50`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort direction of a selector's sort clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Anything case-insensitively equal to `desc` is descending, all else ascending.
    pub fn parse_lenient(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// "Field contains text" clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMatch {
    pub field: String,
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortClause {
    pub field: String,
    pub direction: SortDirection,
}

/// Pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start: usize,
    pub limit: usize,
}

/// Query for the direct children of one parent node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    pub parent: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_match: Option<TextMatch>,
    pub sort: SortClause,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<Window>,
}

impl Selector {
    /// Children of `parent`, sorted by title ascending.
    pub fn children_of(parent: u32) -> Self {
        Self {
            parent,
            text_match: None,
            sort: SortClause {
                field: "title".to_string(),
                direction: SortDirection::Asc,
            },
            window: None,
        }
    }

    /// Same query restricted to one page of results.
    pub fn with_window(mut self, start: usize, limit: usize) -> Self {
        self.window = Some(Window { start, limit });
        self
    }

    /// Same query without a pagination window, for counting.
    pub fn without_window(&self) -> Self {
        Self {
            window: None,
            ..self.clone()
        }
    }
}

/// Quote a selector value when it contains separator characters.
fn selector_value(term: &str) -> String {
    let cleaned = term.replace('"', "");
    if cleaned.contains([',', '|']) {
        format!("\"{cleaned}\"")
    } else {
        cleaned
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parent={}", self.parent)?;
        if let Some(m) = &self.text_match {
            write!(f, ", {}*={}", m.field, selector_value(&m.term))?;
        }
        write!(f, ", sort={} {}", self.sort.field, self.sort.direction)?;
        if let Some(w) = &self.window {
            write!(f, ", start={}, limit={}", w.start, w.limit)?;
        }
        Ok(())
    }
}
