//! Data page listing against the fixture site.

mod common;

use pw_studio::sdk::lister::{ListerOverview, RequestParams};
use pw_studio::shared::config::{ListerConfig, ListerMode};

use common::{lister_settings, site, BLOG_PAGE, PRODUCTS_PAGE};

#[test]
fn test_products_default_listing() {
    let site = site();
    let overview = ListerOverview::build(
        &lister_settings(),
        &site,
        &site,
        PRODUCTS_PAGE,
        &RequestParams::default(),
    )
    .unwrap();

    assert_eq!(overview.child_templates, vec!["product"]);
    assert_eq!(overview.fields, vec!["price", "sku", "body", "category", "in_stock"]);
    assert_eq!(
        overview.selector,
        "parent=1000, sort=title asc, start=0, limit=50"
    );
    assert_eq!(overview.total, 4);
    assert!(overview.pager.is_empty());

    let titles: Vec<&str> = overview.rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Armchair", "Bookshelf", "Desk Lamp", "Floor Lamp"]);
    assert_eq!(overview.rows[0].cells, vec!["349", "C-100", "", "Seating", "1"]);
    assert_eq!(overview.rows[0].url, "/products/armchair/");
}

#[test]
fn test_search_and_numeric_sort() {
    let site = site();
    let params = RequestParams::from_query("?q=lamp&by=title&sort=price&dir=desc");
    let overview =
        ListerOverview::build(&lister_settings(), &site, &site, PRODUCTS_PAGE, &params).unwrap();

    assert_eq!(
        overview.selector,
        "parent=1000, title*=lamp, sort=price desc, start=0, limit=50"
    );
    let titles: Vec<&str> = overview.rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Floor Lamp", "Desk Lamp"]);
    let active = overview.active.as_ref().unwrap();
    assert_eq!((active.by.as_str(), active.q.as_str()), ("title", "lamp"));
}

#[test]
fn test_search_field_must_be_a_column() {
    let site = site();
    let settings = lister_settings();

    let by_sku = RequestParams::from_query("q=L-&by=sku");
    let overview = ListerOverview::build(&settings, &site, &site, PRODUCTS_PAGE, &by_sku).unwrap();
    assert!(overview.selector.contains("sku*=L-"));
    assert_eq!(overview.total, 2);

    let by_gallery = RequestParams::from_query("q=lamp&by=gallery");
    let overview =
        ListerOverview::build(&settings, &site, &site, PRODUCTS_PAGE, &by_gallery).unwrap();
    assert!(overview.selector.contains("title*=lamp"));
}

#[test]
fn test_manual_blog_columns() {
    let site = site();
    let mut settings = lister_settings();
    settings.configs.insert(
        "blog".into(),
        ListerConfig {
            mode: ListerMode::Manual,
            fields: "published, summary, bogus".into(),
            ..Default::default()
        },
    );
    let overview =
        ListerOverview::build(&settings, &site, &site, BLOG_PAGE, &RequestParams::default())
            .unwrap();

    assert_eq!(overview.fields, vec!["published", "summary"]);
    assert_eq!(overview.rows[0].title, "New lamps");
    assert_eq!(overview.rows[0].cells, vec!["2026-04-12", "Two new lamps arrived."]);
}

#[test]
fn test_pages_that_are_not_containers() {
    let site = site();
    let settings = lister_settings();
    let params = RequestParams::default();

    // home is not enabled, a product is a leaf, 42 does not exist
    for id in [1, 1001, 42] {
        assert!(ListerOverview::build(&settings, &site, &site, id, &params).is_none());
    }
}

#[test]
fn test_overview_serializes_for_rendering() {
    let site = site();
    let overview = ListerOverview::build(
        &lister_settings(),
        &site,
        &site,
        BLOG_PAGE,
        &RequestParams::from_query("q=lamps"),
    )
    .unwrap();
    let json = serde_json::to_value(&overview).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["active"]["q"], "lamps");
    assert_eq!(json["dir"], "asc");
    assert_eq!(json["rows"][0]["id"], 2002);
}
