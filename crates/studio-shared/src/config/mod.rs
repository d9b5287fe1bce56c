//! # Operator Settings
//!
//! The settings blob the admin tools are driven by, and its persistence.
//!
//! ## Structure
//!
//! ```text
//! config/
//! ├── mod.rs        # re-exports
//! ├── settings.rs   # StudioSettings, SkeletonKind, Region
//! ├── lister.rs     # ListerSettings, ListerConfig and selection modes
//! ├── lenient.rs    # Per-key defaults for values of the wrong type
//! └── loader.rs     # File/env loading and the ConfigStore implementations
//! ```
//!
//! ## Example
//!
//! ```toml
//! template_skeleton_type = "uikit"
//! template_regions = ["header", "footer"]
//!
//! [lister]
//! templates = ["products"]
//! page_size = 25
//!
//! [lister.configs.products]
//! mode = "manual"
//! fields = "price, sku, stock"
//! ```

mod lenient;
pub mod lister;
pub mod loader;
pub mod settings;

pub use lister::{FieldSelectionMode, ListerConfig, ListerMode, ListerSettings};
pub use loader::{load_settings, try_load_settings, FileConfigStore, MemoryConfigStore, ENV_PREFIX};
pub use settings::{Region, SkeletonKind, StudioSettings};
