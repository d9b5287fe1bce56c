//! # Data Page Lister
//!
//! Shows the children of configured container pages as a table instead of a
//! page tree.
//!
//! ```text
//! node ──► is_data_container ──► child_templates ──► select_display_fields
//!                                                        │
//!          request params ──► build_selector ◄───────────┘
//!                                   │
//!                                   ▼
//!                  ContentStore::find ──► ListerOverview
//! ```

pub mod cells;
pub mod fields;
pub mod filter;
pub mod overview;
pub mod pager;

pub use cells::cell_text;
pub use fields::{
    allowed_field_names, child_templates, is_data_container, select_display_fields,
    SYSTEM_FIELDS,
};
pub use filter::{build_selector, ActiveFilter, RequestParams, SelectorBuild};
pub use overview::{ListerOverview, ListerRow};
pub use pager::{pager_items, pager_query, Pager, PagerItem, Pagination};
