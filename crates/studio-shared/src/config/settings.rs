//! Top-level operator settings.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lenient;
use super::lister::ListerSettings;

/// Template file skeleton flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkeletonKind {
    Minimal,
    #[default]
    Basic,
    Uikit,
    MarkupRegions,
}

impl SkeletonKind {
    pub const ALL: [SkeletonKind; 4] = [
        SkeletonKind::Minimal,
        SkeletonKind::Basic,
        SkeletonKind::Uikit,
        SkeletonKind::MarkupRegions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkeletonKind::Minimal => "minimal",
            SkeletonKind::Basic => "basic",
            SkeletonKind::Uikit => "uikit",
            SkeletonKind::MarkupRegions => "markup-regions",
        }
    }

    /// Parse a kind name; anything outside the known set is `Basic`.
    pub fn parse_lenient(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value.trim())
            .unwrap_or_default()
    }
}

impl From<String> for SkeletonKind {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl From<SkeletonKind> for String {
    fn from(kind: SkeletonKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for SkeletonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional layout region of a template file skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Header,
    Sidebar,
    Footer,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Header => "header",
            Region::Sidebar => "sidebar",
            Region::Footer => "footer",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim() {
            "header" => Some(Region::Header),
            "sidebar" => Some(Region::Sidebar),
            "footer" => Some(Region::Footer),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator-level settings blob shared by the code tools and the lister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioSettings {
    #[serde(deserialize_with = "lenient::or_default")]
    pub enable_minification: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub auto_create_template_files: bool,
    #[serde(deserialize_with = "lenient::or_true")]
    pub template_file_backup: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub template_skeleton_type: SkeletonKind,
    #[serde(deserialize_with = "lenient::or_default")]
    pub template_include_head: bool,
    /// Region names; unknown entries are ignored by [`StudioSettings::regions`].
    #[serde(deserialize_with = "lenient::or_default")]
    pub template_regions: Vec<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub lister: ListerSettings,
}

impl Default for StudioSettings {
    fn default() -> Self {
        Self {
            enable_minification: false,
            auto_create_template_files: false,
            template_file_backup: true,
            template_skeleton_type: SkeletonKind::Basic,
            template_include_head: false,
            template_regions: Vec::new(),
            lister: ListerSettings::default(),
        }
    }
}

impl StudioSettings {
    /// Known regions from `template_regions`, deduplicated, in declaration order.
    pub fn regions(&self) -> Vec<Region> {
        let mut regions: Vec<Region> = self
            .template_regions
            .iter()
            .filter_map(|r| Region::from_name(r))
            .collect();
        regions.sort();
        regions.dedup();
        regions
    }

    pub fn normalized(&self) -> Self {
        Self {
            template_regions: self.regions().iter().map(|r| r.to_string()).collect(),
            lister: self.lister.normalized(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = StudioSettings::default();
        assert!(!settings.enable_minification);
        assert!(!settings.auto_create_template_files);
        assert!(settings.template_file_backup);
        assert_eq!(settings.template_skeleton_type, SkeletonKind::Basic);
        assert!(settings.template_regions.is_empty());
        assert_eq!(settings.lister.page_size, 50);
    }

    #[test]
    fn test_skeleton_kind_lenient_parse() {
        assert_eq!(SkeletonKind::parse_lenient("uikit"), SkeletonKind::Uikit);
        assert_eq!(
            SkeletonKind::parse_lenient("markup-regions"),
            SkeletonKind::MarkupRegions
        );
        assert_eq!(SkeletonKind::parse_lenient("bootstrap"), SkeletonKind::Basic);
    }

    #[test]
    fn test_regions_filter_unknown_and_order() {
        let settings = StudioSettings {
            template_regions: vec![
                "footer".into(),
                "banner".into(),
                "header".into(),
                "footer".into(),
            ],
            ..Default::default()
        };
        assert_eq!(settings.regions(), vec![Region::Header, Region::Footer]);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: StudioSettings = toml::from_str(
            "template_skeleton_type = \"minimal\"\n[lister]\npage_size = 20\n",
        )
        .unwrap();
        assert_eq!(settings.template_skeleton_type, SkeletonKind::Minimal);
        assert_eq!(settings.lister.page_size, 20);
        assert!(settings.lister.show_help);
        assert!(settings.template_file_backup);
    }
}
