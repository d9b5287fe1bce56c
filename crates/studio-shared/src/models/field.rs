//! Field descriptors and the closed set of field kinds.
//!
//! The host identifies field types by class name (`FieldtypeText`,
//! `FieldtypePage`, ...). Those names are parsed once into [`FieldKind`] so the
//! generators can dispatch with an exhaustive `match` instead of comparing
//! strings. Type names the tools do not know land in [`FieldKind::Unknown`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Input control class-name markers that identify a rich-text (HTML) editor.
const RICH_EDITOR_MARKERS: [&str; 2] = ["tinymce", "ckeditor"];

/// The kind of a field, parsed from the host's type class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Textarea,
    PageTitle,
    Image,
    /// Reference to one or more other pages.
    PageReference,
    /// Sequence of sub-records conforming to an internal sub-template.
    Repeater,
    Options,
    Datetime,
    Url,
    Email,
    Integer,
    Float,
    Checkbox,
    /// Any type name outside the known set; keeps the original name.
    Unknown(String),
}

impl FieldKind {
    /// Parse a host type name. Accepts both `FieldtypeTextarea` and `textarea`.
    pub fn from_type_name(name: &str) -> Self {
        let trimmed = name.trim();
        let short = trimmed.strip_prefix("Fieldtype").unwrap_or(trimmed);
        match short.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "text" => FieldKind::Text,
            "textarea" => FieldKind::Textarea,
            "pagetitle" => FieldKind::PageTitle,
            "image" => FieldKind::Image,
            "page" | "pagereference" => FieldKind::PageReference,
            "repeater" => FieldKind::Repeater,
            "options" => FieldKind::Options,
            "datetime" => FieldKind::Datetime,
            "url" => FieldKind::Url,
            "email" => FieldKind::Email,
            "integer" => FieldKind::Integer,
            "float" => FieldKind::Float,
            "checkbox" => FieldKind::Checkbox,
            _ => FieldKind::Unknown(trimmed.to_string()),
        }
    }

    /// Host class name for this kind.
    pub fn type_name(&self) -> &str {
        match self {
            FieldKind::Text => "FieldtypeText",
            FieldKind::Textarea => "FieldtypeTextarea",
            FieldKind::PageTitle => "FieldtypePageTitle",
            FieldKind::Image => "FieldtypeImage",
            FieldKind::PageReference => "FieldtypePage",
            FieldKind::Repeater => "FieldtypeRepeater",
            FieldKind::Options => "FieldtypeOptions",
            FieldKind::Datetime => "FieldtypeDatetime",
            FieldKind::Url => "FieldtypeURL",
            FieldKind::Email => "FieldtypeEmail",
            FieldKind::Integer => "FieldtypeInteger",
            FieldKind::Float => "FieldtypeFloat",
            FieldKind::Checkbox => "FieldtypeCheckbox",
            FieldKind::Unknown(name) => name,
        }
    }

    /// Whether values of this kind can be shown in a plain table cell.
    ///
    /// Repeaters, images and unknown kinds need bespoke rendering and are
    /// never offered as listing columns.
    pub fn is_list_displayable(&self) -> bool {
        match self {
            FieldKind::Text
            | FieldKind::Textarea
            | FieldKind::PageTitle
            | FieldKind::Integer
            | FieldKind::Float
            | FieldKind::Checkbox
            | FieldKind::Datetime
            | FieldKind::Email
            | FieldKind::Url
            | FieldKind::Options
            | FieldKind::PageReference => true,
            FieldKind::Image | FieldKind::Repeater | FieldKind::Unknown(_) => false,
        }
    }
}

impl From<String> for FieldKind {
    fn from(value: String) -> Self {
        FieldKind::from_type_name(&value)
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.type_name().to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Content type flag of a textarea field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    #[default]
    Unknown,
    /// Markup/HTML content.
    Html,
    /// HTML with image management; not treated as rich text by the generator.
    ImageHtml,
}

/// Cardinality of a page reference field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageDeref {
    /// A collection of pages.
    #[default]
    Multiple,
    /// A single page, or an empty page when unset.
    SingleOrNull,
    /// A single page, or `false` when unset.
    SingleOrFalse,
}

/// Read-only projection of a schema field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(default)]
    pub id: u32,
    /// Unique within a template.
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub content_type: ContentType,
    /// Class name of the configured input control, e.g. `InputfieldCKEditor`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_class: Option<String>,
    /// Image fields: maximum number of files, `0` meaning unlimited.
    #[serde(default)]
    pub max_files: u32,
    #[serde(default)]
    pub deref_as_page: PageDeref,
    /// Repeater fields: name of the sub-template holding the item fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeater_template: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: 0,
            name: name.into(),
            label: String::new(),
            kind,
            description: String::new(),
            required: false,
            content_type: ContentType::Unknown,
            input_class: None,
            max_files: 0,
            deref_as_page: PageDeref::Multiple,
            repeater_template: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_input_class(mut self, class: impl Into<String>) -> Self {
        self.input_class = Some(class.into());
        self
    }

    pub fn with_max_files(mut self, max_files: u32) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn with_deref(mut self, deref: PageDeref) -> Self {
        self.deref_as_page = deref;
        self
    }

    pub fn with_repeater_template(mut self, template: impl Into<String>) -> Self {
        self.repeater_template = Some(template.into());
        self
    }

    /// Label, falling back to the name when no label is configured.
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    /// Whether the field holds a collection rather than a single value.
    pub fn is_multi_valued(&self) -> bool {
        match self.kind {
            FieldKind::Image => self.max_files != 1,
            FieldKind::PageReference => self.deref_as_page == PageDeref::Multiple,
            FieldKind::Repeater => true,
            _ => false,
        }
    }

    /// Whether a text field holds HTML.
    ///
    /// Heuristic: a textarea flagged with HTML content type, or any text field
    /// whose input control class name contains a known rich-editor marker.
    pub fn is_rich_text(&self) -> bool {
        if self.kind == FieldKind::Textarea && self.content_type == ContentType::Html {
            return true;
        }
        self.input_class.as_deref().is_some_and(|class| {
            let class = class.to_ascii_lowercase();
            RICH_EDITOR_MARKERS
                .iter()
                .any(|marker| class.contains(marker))
        })
    }

    /// Sub-template name for a repeater, using the host's `repeater_<field>`
    /// naming convention when none is configured.
    pub fn repeater_template_name(&self) -> String {
        self.repeater_template
            .clone()
            .unwrap_or_else(|| format!("repeater_{}", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_class_and_short_names() {
        assert_eq!(FieldKind::from_type_name("FieldtypeText"), FieldKind::Text);
        assert_eq!(
            FieldKind::from_type_name("FieldtypePage"),
            FieldKind::PageReference
        );
        assert_eq!(FieldKind::from_type_name("url"), FieldKind::Url);
        assert_eq!(
            FieldKind::from_type_name("page-title"),
            FieldKind::PageTitle
        );
        assert_eq!(
            FieldKind::from_type_name("FieldtypeMapMarker"),
            FieldKind::Unknown("FieldtypeMapMarker".into())
        );
    }

    #[test]
    fn test_kind_type_name_keeps_unknown_name() {
        let kind = FieldKind::from_type_name("FieldtypeTable");
        assert_eq!(kind.type_name(), "FieldtypeTable");
        assert_eq!(FieldKind::Url.to_string(), "FieldtypeURL");
    }

    #[test]
    fn test_kind_deserializes_from_yaml_string() {
        let field: FieldDescriptor =
            serde_yaml::from_str("name: body\ntype: FieldtypeTextarea\n").unwrap();
        assert_eq!(field.kind, FieldKind::Textarea);
        assert_eq!(field.max_files, 0);
        assert_eq!(field.deref_as_page, PageDeref::Multiple);
    }

    #[test]
    fn test_list_displayable_whitelist() {
        assert!(FieldKind::Options.is_list_displayable());
        assert!(FieldKind::PageReference.is_list_displayable());
        assert!(!FieldKind::Image.is_list_displayable());
        assert!(!FieldKind::Repeater.is_list_displayable());
        assert!(!FieldKind::Unknown("FieldtypeTable".into()).is_list_displayable());
    }

    #[test]
    fn test_image_cardinality() {
        let single = FieldDescriptor::new("hero", FieldKind::Image).with_max_files(1);
        let unlimited = FieldDescriptor::new("gallery", FieldKind::Image);
        let capped = FieldDescriptor::new("gallery", FieldKind::Image).with_max_files(4);
        assert!(!single.is_multi_valued());
        assert!(unlimited.is_multi_valued());
        assert!(capped.is_multi_valued());
    }

    #[test]
    fn test_page_reference_cardinality() {
        let many = FieldDescriptor::new("tags", FieldKind::PageReference);
        let one = FieldDescriptor::new("author", FieldKind::PageReference)
            .with_deref(PageDeref::SingleOrNull);
        let one_or_false = FieldDescriptor::new("author", FieldKind::PageReference)
            .with_deref(PageDeref::SingleOrFalse);
        assert!(many.is_multi_valued());
        assert!(!one.is_multi_valued());
        assert!(!one_or_false.is_multi_valued());
    }

    #[test]
    fn test_rich_text_from_content_type() {
        let html = FieldDescriptor::new("body", FieldKind::Textarea)
            .with_content_type(ContentType::Html);
        let plain = FieldDescriptor::new("body", FieldKind::Textarea);
        assert!(html.is_rich_text());
        assert!(!plain.is_rich_text());
    }

    #[test]
    fn test_rich_text_content_type_only_counts_for_textarea() {
        let text = FieldDescriptor::new("headline", FieldKind::Text)
            .with_content_type(ContentType::Html);
        assert!(!text.is_rich_text());
    }

    #[test]
    fn test_rich_text_from_input_class_marker() {
        let tiny = FieldDescriptor::new("body", FieldKind::Textarea)
            .with_input_class("InputfieldTinyMCE");
        let ck = FieldDescriptor::new("intro", FieldKind::Text).with_input_class("InputfieldCKEditor");
        let plain = FieldDescriptor::new("intro", FieldKind::Text).with_input_class("InputfieldText");
        assert!(tiny.is_rich_text());
        assert!(ck.is_rich_text());
        assert!(!plain.is_rich_text());
    }

    #[test]
    fn test_display_label_falls_back_to_name() {
        let field = FieldDescriptor::new("summary", FieldKind::Textarea);
        assert_eq!(field.display_label(), "summary");
        let field = field.with_label("Summary");
        assert_eq!(field.display_label(), "Summary");
    }

    #[test]
    fn test_repeater_template_name_convention() {
        let field = FieldDescriptor::new("slides", FieldKind::Repeater);
        assert_eq!(field.repeater_template_name(), "repeater_slides");
        let field = field.with_repeater_template("custom_slides");
        assert_eq!(field.repeater_template_name(), "custom_slides");
    }
}
