//! # pw-studio
//!
//! Developer toolbox core for ProcessWire sites.
//!
//! - [`sdk`]: field snippet generation, template skeletons and the data
//!   page lister
//! - [`shared`]: models, host traits, settings and the site snapshot
//!
//! ```no_run
//! use std::path::Path;
//! use pw_studio::shared::SiteSnapshot;
//! use pw_studio::sdk::generate_code;
//!
//! let site = SiteSnapshot::load(Path::new("site.yaml"))?;
//! let code = generate_code(&site, 44, &["title", "price"]);
//! print!("{code}");
//! # Ok::<(), pw_studio::shared::SnapshotError>(())
//! ```

pub use studio_sdk as sdk;
pub use studio_shared as shared;
