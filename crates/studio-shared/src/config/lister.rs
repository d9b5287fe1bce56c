//! Data page lister settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::lenient;
use crate::sanitize;

pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const MIN_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 200;
pub const DEFAULT_NUM_FIELDS: u32 = 5;

/// How display fields are chosen for a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ListerMode {
    #[default]
    Auto,
    Manual,
}

impl From<String> for ListerMode {
    fn from(value: String) -> Self {
        if value.trim() == "manual" {
            ListerMode::Manual
        } else {
            ListerMode::Auto
        }
    }
}

impl From<ListerMode> for String {
    fn from(mode: ListerMode) -> Self {
        match mode {
            ListerMode::Auto => "auto".to_string(),
            ListerMode::Manual => "manual".to_string(),
        }
    }
}

/// Automatic field selection strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldSelectionMode {
    /// First N allowed fields of the first child template.
    #[default]
    FirstN,
    /// First N fields common to every child template.
    Common,
}

impl From<String> for FieldSelectionMode {
    fn from(value: String) -> Self {
        if value.trim() == "common" {
            FieldSelectionMode::Common
        } else {
            FieldSelectionMode::FirstN
        }
    }
}

impl From<FieldSelectionMode> for String {
    fn from(mode: FieldSelectionMode) -> Self {
        match mode {
            FieldSelectionMode::FirstN => "firstN".to_string(),
            FieldSelectionMode::Common => "common".to_string(),
        }
    }
}

/// Per-template field selection config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListerConfig {
    #[serde(deserialize_with = "lenient::or_default")]
    pub mode: ListerMode,
    #[serde(deserialize_with = "lenient::or_default")]
    pub field_selection_mode: FieldSelectionMode,
    /// Bounded 1–20 by the settings form; not re-validated on use.
    #[serde(deserialize_with = "lenient::num_fields")]
    pub num_fields: u32,
    /// Comma-separated field list for manual mode.
    #[serde(deserialize_with = "lenient::or_default")]
    pub fields: String,
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            mode: ListerMode::Auto,
            field_selection_mode: FieldSelectionMode::FirstN,
            num_fields: DEFAULT_NUM_FIELDS,
            fields: String::new(),
        }
    }
}

impl ListerConfig {
    /// Manual field list: trimmed, empty tokens dropped, order kept.
    pub fn manual_fields(&self) -> Vec<String> {
        self.fields
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Settings of the data page lister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListerSettings {
    /// Allow-list of container template names.
    #[serde(deserialize_with = "lenient::or_default")]
    pub templates: Vec<String>,
    /// Field selection config keyed by container template name.
    #[serde(deserialize_with = "lenient::configs")]
    pub configs: BTreeMap<String, ListerConfig>,
    #[serde(deserialize_with = "lenient::page_size")]
    pub page_size: u32,
    #[serde(deserialize_with = "lenient::or_true")]
    pub show_help: bool,
    #[serde(deserialize_with = "lenient::or_true")]
    pub hide_children: bool,
    #[serde(deserialize_with = "lenient::or_true")]
    pub rename_edit: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub show_view: bool,
}

impl Default for ListerSettings {
    fn default() -> Self {
        Self {
            templates: Vec::new(),
            configs: BTreeMap::new(),
            page_size: DEFAULT_PAGE_SIZE,
            show_help: true,
            hide_children: true,
            rename_edit: true,
            show_view: false,
        }
    }
}

impl ListerSettings {
    pub fn is_enabled(&self, template_name: &str) -> bool {
        self.templates.iter().any(|t| t == template_name)
    }

    pub fn config_for(&self, template_name: &str) -> Option<&ListerConfig> {
        self.configs.get(template_name)
    }

    /// Normalise the way the settings form does before saving: names
    /// sanitised, page size clamped, configs kept only for enabled templates.
    pub fn normalized(&self) -> Self {
        let templates: Vec<String> = self
            .templates
            .iter()
            .map(|t| sanitize::name(t))
            .filter(|t| !t.is_empty())
            .collect();

        let configs = self
            .configs
            .iter()
            .map(|(name, config)| {
                let normalized = ListerConfig {
                    fields: sanitize::text(&config.fields),
                    ..config.clone()
                };
                (sanitize::name(name), normalized)
            })
            .filter(|(name, _)| templates.contains(name))
            .collect();

        Self {
            templates,
            configs,
            page_size: self.page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
            ..self.clone()
        }
    }
}
