//! Shared components for pw-studio.
//!
//! Everything here is a read-only projection of a host CMS (templates, fields,
//! pages) plus the operator settings the tools are driven by. The logic crates
//! never talk to the host directly; they go through the traits in [`host`].
//!
//! # Modules
//!
//! - [`models`]: Field, template, page and selector descriptors
//! - [`host`]: Schema provider, content store and configuration store traits
//! - [`snapshot`]: In-memory site snapshot implementing the host traits
//! - [`config`]: Operator settings, lister configs and settings loading
//! - [`sanitize`]: Input sanitizers for field names, names and free text
//! - [`logging`]: Tracing subscriber setup for binaries
//! - [`errors`]: Error types for snapshot and settings I/O

pub mod config;
pub mod errors;
pub mod host;
pub mod logging;
pub mod models;
pub mod sanitize;
pub mod snapshot;

pub use self::config::{
    load_settings, FieldSelectionMode, FileConfigStore, ListerConfig, ListerMode, ListerSettings,
    MemoryConfigStore, Region, SkeletonKind, StudioSettings,
};
pub use errors::{SettingsError, SnapshotError};
pub use host::{ConfigStore, ContentStore, QueryPage, SchemaProvider};
pub use models::{
    FieldDescriptor, FieldKind, FieldValue, PageNode, Selector, SortDirection, TemplateDescriptor,
};
pub use snapshot::SiteSnapshot;
