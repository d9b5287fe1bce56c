//! # Model Types
//!
//! Read-only descriptors borrowed from the host schema and content store for
//! the duration of one request. Nothing in the core mutates them.
//!
//! ```text
//! models/
//! ├── mod.rs        # re-exports
//! ├── field.rs      # FieldDescriptor, FieldKind and type-specific settings
//! ├── template.rs   # TemplateDescriptor (fieldgroup + allowed children)
//! ├── page.rs       # PageNode and FieldValue
//! └── selector.rs   # Structured child query (scope, text match, sort, window)
//! ```

pub mod field;
pub mod page;
pub mod selector;
pub mod template;

pub use field::{ContentType, FieldDescriptor, FieldKind, PageDeref};
pub use page::{FieldValue, PageNode};
pub use selector::{Selector, SortClause, SortDirection, TextMatch, Window};
pub use template::TemplateDescriptor;
