//! Code generation against the fixture site.

mod common;

use pw_studio::sdk::codegen::{
    available_templates, generate_code, generate_skeleton, template_fields, SkeletonOptions,
};
use pw_studio::shared::config::{Region, SkeletonKind};
use pw_studio::shared::SchemaProvider;

use common::{site, PRODUCT_TEMPLATE};

fn block<'a>(code: &'a str, field: &str) -> &'a str {
    let begin = code
        .find(&format!("// BEGIN field: {field}"))
        .unwrap_or_else(|| panic!("no block for {field}"));
    let end_marker = format!("// END field: {field}\n");
    let end = code[begin..].find(&end_marker).expect("block is closed") + end_marker.len();
    &code[begin..begin + end]
}

#[test]
fn test_catalog_hides_system_templates() {
    let site = site();
    let names: Vec<&str> = available_templates(&site)
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, vec!["blog", "post", "home", "product", "products"]);
}

#[test]
fn test_template_fields_serialize_with_type_names() {
    let site = site();
    let fields = template_fields(&site, PRODUCT_TEMPLATE).unwrap();
    let json = serde_json::to_value(&fields).unwrap();
    assert_eq!(json[1]["name"], "price");
    assert_eq!(json[1]["type"], "FieldtypeFloat");
    assert_eq!(json[0]["required"], true);
    assert!(template_fields(&site, 0).is_none());
    assert!(template_fields(&site, 999).is_none());
}

#[test]
fn test_generate_follows_selection_order() {
    let site = site();
    let code = generate_code(&site, PRODUCT_TEMPLATE, &["price", "title", "sku"]);

    assert!(code.starts_with("<?php\n// Generated code for template: product\n"));
    let price = code.find("// BEGIN field: price").unwrap();
    let title = code.find("// BEGIN field: title").unwrap();
    let sku = code.find("// BEGIN field: sku").unwrap();
    assert!(price < title && title < sku);

    assert!(block(&code, "price").contains("number_format((float) $page->price, 2)"));
    assert!(block(&code, "title").contains("$sanitizer->entities($page->title)"));
    assert!(block(&code, "sku").contains("$sanitizer->entities($page->sku)"));
}

#[test]
fn test_generate_dispatches_by_field_settings() {
    let site = site();
    let code = generate_code(
        &site,
        PRODUCT_TEMPLATE,
        &["body", "gallery", "hero", "category", "in_stock", "map"],
    );

    assert!(block(&code, "body").contains("MarkupHTMLPurifier"));
    assert!(block(&code, "gallery").contains("foreach($page->gallery as $image)"));
    assert!(!block(&code, "hero").contains("foreach"));
    assert!(block(&code, "category").contains("$page->category->url"));
    assert!(block(&code, "in_stock").starts_with("// BEGIN field: in_stock (In stock)\n"));
    assert!(block(&code, "map").contains("$page->map"));
}

#[test]
fn test_repeater_renders_subfields() {
    let site = site();
    let code = generate_code(&site, PRODUCT_TEMPLATE, &["features"]);
    let features = block(&code, "features");

    assert!(features.contains("<?php foreach($page->features as $item): ?>\n"));
    assert!(features.contains("    // Subfield: headline (Headline)\n"));
    assert!(features.contains("$sanitizer->entities($item->headline)"));
    assert!(features.contains("    // Subfield: icon (Icon)\n"));
    assert!(features.contains("<?php endforeach; ?>"));
}

#[test]
fn test_unknown_and_foreign_fields_are_dropped() {
    let site = site();
    let code = generate_code(&site, PRODUCT_TEMPLATE, &["summary", "price", "<script>"]);
    assert!(!code.contains("summary"));
    assert!(code.contains("// BEGIN field: price (Price)"));

    assert!(generate_code(&site, PRODUCT_TEMPLATE, &["summary"]).is_empty());
    assert!(generate_code(&site, PRODUCT_TEMPLATE, &[] as &[&str]).is_empty());
    assert!(generate_code(&site, 999, &["title"]).is_empty());
}

#[test]
fn test_skeleton_lists_fields_and_regions() {
    let site = site();
    let product = site.template_by_name("product").unwrap();
    let options = SkeletonOptions {
        kind: SkeletonKind::Uikit,
        include_head: true,
        regions: vec![Region::Header, Region::Footer],
        lang: "en".into(),
    };
    let code = generate_skeleton(product, &options);

    assert!(code.starts_with("<?php namespace ProcessWire;"));
    assert!(code.contains("// Available fields: title, price, sku"));
    assert!(code.contains("<html lang=\"en\">"));
    assert!(code.contains("uikit"));
    assert!(code.contains("<header"));
    assert!(code.contains("<footer"));
    assert!(!code.contains("sidebar"));
    assert!(code.ends_with('\n'));
}

#[test]
fn test_minimal_skeleton_omits_field_list() {
    let site = site();
    let post = site.template_by_name("post").unwrap();
    let options = SkeletonOptions {
        kind: SkeletonKind::Minimal,
        ..Default::default()
    };
    let code = generate_skeleton(post, &options);
    assert!(code.contains("post"));
    assert!(!code.contains("Available fields"));
}
