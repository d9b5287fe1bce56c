//! # studio-sdk
//!
//! The decision logic of pw-studio, independent of any admin UI:
//!
//! - [`codegen`]: field snippet generation, template catalog and template
//!   file skeletons
//! - [`lister`]: data container detection, display field selection, child
//!   selector construction and pagination
//!
//! Both read the host through the traits in [`studio_shared::host`] and never
//! mutate it.

pub mod codegen;
pub mod lister;

pub use codegen::{generate_code, generate_skeleton, CodegenError, SkeletonOptions};
pub use lister::{build_selector, ListerOverview, RequestParams};
