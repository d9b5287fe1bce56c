//! Shared fixtures for the cross-crate tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use pw_studio::shared::config::ListerSettings;
use pw_studio::shared::SiteSnapshot;

pub const PRODUCTS_PAGE: u32 = 1000;
pub const BLOG_PAGE: u32 = 2000;
pub const PRODUCT_TEMPLATE: u32 = 11;

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn site() -> SiteSnapshot {
    SiteSnapshot::load(&fixture_path("site.yaml")).expect("fixture site loads")
}

/// Products and blog enabled as containers, everything else default.
pub fn lister_settings() -> ListerSettings {
    ListerSettings {
        templates: vec!["products".into(), "blog".into()],
        ..Default::default()
    }
}
