//! Container detection and display field selection.
//!
//! Every lookup here degrades: a missing config means defaults, a missing
//! template contributes nothing, and an empty result is a valid answer.

use studio_shared::config::{FieldSelectionMode, ListerConfig, ListerMode, ListerSettings};
use studio_shared::models::{PageNode, TemplateDescriptor};
use studio_shared::{ContentStore, SchemaProvider};

/// Fields never offered as columns; `title` is always shown separately.
pub const SYSTEM_FIELDS: [&str; 6] = ["title", "name", "sort", "created", "modified", "status"];

/// How many existing children are inspected to discover child templates.
pub const CHILD_SAMPLE_LIMIT: usize = 10;

/// Whether `node` is a configured data container.
///
/// Only the explicit allow-list counts; the children's templates are irrelevant.
pub fn is_data_container(settings: &ListerSettings, node: &PageNode) -> bool {
    settings.is_enabled(&node.template)
}

/// Templates of the node's children.
///
/// Uses the templates of the first [`CHILD_SAMPLE_LIMIT`] children in
/// first-seen order. A node without children falls back to the child
/// templates its own template declares. System templates and names that do
/// not resolve are skipped.
pub fn child_templates<'s>(
    schema: &'s dyn SchemaProvider,
    content: &dyn ContentStore,
    node: &PageNode,
) -> Vec<&'s TemplateDescriptor> {
    let observed: Vec<String> = content
        .children(node.id, CHILD_SAMPLE_LIMIT)
        .into_iter()
        .map(|child| child.template.clone())
        .collect();

    let names = if observed.is_empty() {
        schema
            .template_by_name(&node.template)
            .map(|t| t.child_templates.clone())
            .unwrap_or_default()
    } else {
        observed
    };

    let mut templates: Vec<&'s TemplateDescriptor> = Vec::new();
    for name in &names {
        match schema.template_by_name(name) {
            Some(template) if template.system => {}
            Some(template) => {
                if !templates.iter().any(|t| t.name == template.name) {
                    templates.push(template);
                }
            }
            None => {
                tracing::debug!(template = %name, node = node.id, "Child template not found");
            }
        }
    }
    templates
}

/// Field names of `template` that can be shown as table columns, in
/// fieldgroup order.
pub fn allowed_field_names(template: &TemplateDescriptor) -> Vec<String> {
    template
        .fields
        .iter()
        .filter(|f| !SYSTEM_FIELDS.contains(&f.name.as_str()))
        .filter(|f| f.kind.is_list_displayable())
        .map(|f| f.name.clone())
        .collect()
}

/// Columns for the node's listing.
///
/// Manual mode keeps the configured order, restricted to fields the first
/// child template allows. When that leaves nothing, or in auto mode, the first
/// `num_fields` allowed fields are used: of the first child template, or of
/// all child templates in common mode.
pub fn select_display_fields(
    settings: &ListerSettings,
    node: &PageNode,
    child_templates: &[&TemplateDescriptor],
) -> Vec<String> {
    let Some(first) = child_templates.first() else {
        return Vec::new();
    };

    let default_config = ListerConfig::default();
    let config = settings
        .config_for(&node.template)
        .unwrap_or(&default_config);
    let first_allowed = allowed_field_names(first);

    if config.mode == ListerMode::Manual {
        let manual = filter_in_order(&config.manual_fields(), &first_allowed);
        if !manual.is_empty() {
            return manual;
        }
        tracing::debug!(
            template = %node.template,
            "No manual field is allowed, falling back to automatic selection"
        );
    }

    let limit = config.num_fields as usize;
    if config.field_selection_mode == FieldSelectionMode::Common && child_templates.len() > 1 {
        let others: Vec<Vec<String>> = child_templates[1..]
            .iter()
            .map(|t| allowed_field_names(t))
            .collect();
        return ordered_intersection(first_allowed, &others)
            .into_iter()
            .take(limit)
            .collect();
    }

    first_allowed.into_iter().take(limit).collect()
}

/// Entries of `wanted` that appear in `allowed`, in `wanted` order, without
/// duplicates.
fn filter_in_order(wanted: &[String], allowed: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in wanted {
        if allowed.contains(name) && !out.contains(name) {
            out.push(name.clone());
        }
    }
    out
}

/// Intersect `first` with each list in `others`, keeping `first`'s order.
fn ordered_intersection(first: Vec<String>, others: &[Vec<String>]) -> Vec<String> {
    others.iter().fold(first, |common, set| {
        common.into_iter().filter(|name| set.contains(name)).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_shared::models::{FieldDescriptor, FieldKind};
    use studio_shared::SiteSnapshot;

    fn template(id: u32, name: &str, fields: &[(&str, FieldKind)]) -> TemplateDescriptor {
        fields
            .iter()
            .fold(TemplateDescriptor::new(id, name), |t, (field, kind)| {
                t.with_field(FieldDescriptor::new(*field, kind.clone()))
            })
    }

    fn settings_with(name: &str, config: ListerConfig) -> ListerSettings {
        let mut settings = ListerSettings {
            templates: vec![name.to_string()],
            ..Default::default()
        };
        settings.configs.insert(name.to_string(), config);
        settings
    }

    #[test]
    fn test_allowed_fields_exclude_system_and_complex_kinds() {
        let t = template(
            1,
            "product",
            &[
                ("title", FieldKind::PageTitle),
                ("price", FieldKind::Float),
                ("gallery", FieldKind::Image),
                ("status", FieldKind::Integer),
                ("variants", FieldKind::Repeater),
                ("brand", FieldKind::PageReference),
                ("map", FieldKind::Unknown("FieldtypeMapMarker".into())),
                ("summary", FieldKind::Textarea),
            ],
        );
        assert_eq!(allowed_field_names(&t), vec!["price", "brand", "summary"]);
    }

    #[test]
    fn test_is_data_container_uses_allow_list_only() {
        let settings = ListerSettings {
            templates: vec!["products".into(), "product".into()],
            ..Default::default()
        };
        let products = PageNode::new(1000, "products");
        let blog = PageNode::new(2000, "blog");
        assert!(is_data_container(&settings, &products));
        assert!(!is_data_container(&settings, &blog));
    }

    #[test]
    fn test_manual_mode_keeps_manual_order() {
        let child = template(
            2,
            "article",
            &[
                ("tags", FieldKind::PageReference),
                ("summary", FieldKind::Text),
                ("date", FieldKind::Datetime),
            ],
        );
        let settings = settings_with(
            "blog",
            ListerConfig {
                mode: ListerMode::Manual,
                fields: "date, summary, ghost, tags".into(),
                ..Default::default()
            },
        );
        let node = PageNode::new(1, "blog");
        assert_eq!(
            select_display_fields(&settings, &node, &[&child]),
            vec!["date", "summary", "tags"]
        );
    }

    #[test]
    fn test_manual_mode_without_valid_fields_falls_back() {
        let child = template(
            2,
            "article",
            &[("summary", FieldKind::Text), ("date", FieldKind::Datetime)],
        );
        let settings = settings_with(
            "blog",
            ListerConfig {
                mode: ListerMode::Manual,
                fields: "ghost, phantom".into(),
                num_fields: 1,
                ..Default::default()
            },
        );
        let node = PageNode::new(1, "blog");
        assert_eq!(
            select_display_fields(&settings, &node, &[&child]),
            vec!["summary"]
        );
    }

    #[test]
    fn test_common_mode_ordered_intersection() {
        let first = template(
            2,
            "one",
            &[
                ("a", FieldKind::Text),
                ("b", FieldKind::Text),
                ("c", FieldKind::Text),
            ],
        );
        let second = template(
            3,
            "two",
            &[
                ("d", FieldKind::Text),
                ("c", FieldKind::Text),
                ("b", FieldKind::Text),
            ],
        );
        let settings = settings_with(
            "mixed",
            ListerConfig {
                field_selection_mode: FieldSelectionMode::Common,
                num_fields: 5,
                ..Default::default()
            },
        );
        let node = PageNode::new(1, "mixed");
        assert_eq!(
            select_display_fields(&settings, &node, &[&first, &second]),
            vec!["b", "c"]
        );
    }

    #[test]
    fn test_common_mode_with_single_template_uses_first_n() {
        let only = template(
            2,
            "one",
            &[
                ("a", FieldKind::Text),
                ("b", FieldKind::Text),
                ("c", FieldKind::Text),
            ],
        );
        let settings = settings_with(
            "mixed",
            ListerConfig {
                field_selection_mode: FieldSelectionMode::Common,
                num_fields: 2,
                ..Default::default()
            },
        );
        let node = PageNode::new(1, "mixed");
        assert_eq!(
            select_display_fields(&settings, &node, &[&only]),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_missing_config_defaults_to_first_five() {
        let names = ["f1", "f2", "f3", "f4", "f5", "f6", "f7"];
        let fields: Vec<(&str, FieldKind)> = names.iter().map(|n| (*n, FieldKind::Text)).collect();
        let child = template(2, "item", &fields);
        let node = PageNode::new(1, "list");
        assert_eq!(
            select_display_fields(&ListerSettings::default(), &node, &[&child]),
            vec!["f1", "f2", "f3", "f4", "f5"]
        );
    }

    #[test]
    fn test_no_child_templates_selects_nothing() {
        let node = PageNode::new(1, "list");
        assert!(select_display_fields(&ListerSettings::default(), &node, &[]).is_empty());
    }

    #[test]
    fn test_child_templates_first_seen_from_children() {
        let site = SiteSnapshot::new(
            vec![
                TemplateDescriptor::new(1, "products").with_child_template("fallback"),
                TemplateDescriptor::new(2, "product"),
                TemplateDescriptor::new(3, "bundle"),
                TemplateDescriptor::new(4, "fallback"),
            ],
            vec![
                PageNode::new(100, "products"),
                PageNode::new(101, "bundle").with_parent(100),
                PageNode::new(102, "product").with_parent(100),
                PageNode::new(103, "bundle").with_parent(100),
            ],
        );
        let node = site.pages[0].clone();
        let names: Vec<&str> = child_templates(&site, &site, &node)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["bundle", "product"]);
    }

    #[test]
    fn test_child_templates_only_inspects_first_ten_children() {
        let mut pages = vec![PageNode::new(100, "products")];
        for i in 0..10 {
            pages.push(PageNode::new(101 + i, "product").with_parent(100));
        }
        pages.push(PageNode::new(200, "bundle").with_parent(100));
        let site = SiteSnapshot::new(
            vec![
                TemplateDescriptor::new(1, "products"),
                TemplateDescriptor::new(2, "product"),
                TemplateDescriptor::new(3, "bundle"),
            ],
            pages,
        );
        let node = site.pages[0].clone();
        let names: Vec<&str> = child_templates(&site, &site, &node)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["product"]);
    }

    #[test]
    fn test_child_templates_fall_back_to_declared() {
        let site = SiteSnapshot::new(
            vec![
                TemplateDescriptor::new(1, "products")
                    .with_child_template("product")
                    .with_child_template("missing")
                    .with_child_template("admin"),
                TemplateDescriptor::new(2, "product"),
                TemplateDescriptor::new(3, "admin").system(),
            ],
            vec![PageNode::new(100, "products")],
        );
        let node = site.pages[0].clone();
        let names: Vec<&str> = child_templates(&site, &site, &node)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["product"]);
    }
}
