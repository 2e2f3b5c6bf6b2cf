//! Product ledger integration tests.

mod common;

use std::collections::HashSet;
use std::fs;

use common::TestHarness;
use shopkeeper_core::ProductId;
use shopkeeper_engine::{CatalogError, ProductPatch};

#[test]
fn add_then_view_shows_submitted_fields() {
    let harness = TestHarness::new();
    let id = harness.add_product("Pen", 10, 2);

    let listed = harness.engine.products().view().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].name, "Pen");
    assert_eq!(listed[0].price, 10);
    assert_eq!(listed[0].quantity, 2);
}

#[test]
fn added_ids_are_distinct() {
    let harness = TestHarness::new();
    let mut seen = HashSet::new();
    for n in 0..30 {
        let id = harness.add_product(&format!("Widget {n}"), 1, 1);
        assert!(seen.insert(id), "id {id} handed out twice");
    }
}

#[test]
fn add_rejects_invalid_fields() {
    let harness = TestHarness::new();
    let cases: [(&str, i64, i64); 3] = [("   ", 10, 1), ("Pen", -1, 1), ("Pen", 10, -1)];
    for (name, price, quantity) in cases {
        let err = harness
            .engine
            .products()
            .add(name, price, quantity)
            .unwrap_err();
        assert!(
            matches!(err, CatalogError::InvalidInput { .. }),
            "got {err:?}"
        );
    }
    assert!(harness.engine.products().view().unwrap().is_empty());
}

#[test]
fn a_failed_save_surfaces_storage_error_and_commits_nothing() {
    let harness = TestHarness::new();

    // Block the sibling temp path so the save cannot complete.
    fs::create_dir(harness.temp_dir.path().join("catalog.json.tmp")).unwrap();

    let err = harness.engine.products().add("Pen", 10, 2).unwrap_err();
    assert!(
        matches!(err, CatalogError::StorageUnavailable(_)),
        "got {err:?}"
    );
    assert!(harness.engine.products().view().unwrap().is_empty());
}

#[test]
fn get_returns_the_product_or_none() {
    let harness = TestHarness::new();
    let id = harness.add_product("Pen", 10, 2);

    let record = harness.engine.products().get(id).unwrap().unwrap();
    assert_eq!(record.name, "Pen");

    let other = if id.suffix() == 1000 { "P1001" } else { "P1000" };
    let missing: ProductId = other.parse().unwrap();
    assert!(harness.engine.products().get(missing).unwrap().is_none());
}

#[test]
fn view_lists_products_ordered_by_id() {
    let harness = TestHarness::new();
    for n in 0..10 {
        harness.add_product(&format!("Widget {n}"), 1, 1);
    }

    let ids: Vec<ProductId> = harness
        .engine
        .products()
        .view()
        .unwrap()
        .into_iter()
        .map(|record| record.id)
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn search_matches_case_insensitively() {
    let harness = TestHarness::new();
    harness.add_product("Blue Pen", 10, 1);
    harness.add_product("STAPLER", 50, 1);
    harness.add_product("pencil", 5, 1);

    let hits = harness.engine.products().search("PEN").unwrap();
    let names: Vec<&str> = hits.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(hits.len(), 2);
    assert!(names.contains(&"Blue Pen"));
    assert!(names.contains(&"pencil"));
}

#[test]
fn search_with_no_match_is_empty_not_an_error() {
    let harness = TestHarness::new();
    harness.add_product("Pen", 10, 1);
    assert!(harness.engine.products().search("stapler").unwrap().is_empty());
}

#[test]
fn edit_updates_only_patched_fields() {
    let harness = TestHarness::new();
    let id = harness.add_product("Pen", 10, 2);

    harness
        .engine
        .products()
        .edit(
            id,
            ProductPatch {
                price: Some(25),
                ..ProductPatch::default()
            },
        )
        .unwrap();

    let record = harness.engine.products().get(id).unwrap().unwrap();
    assert_eq!(record.name, "Pen");
    assert_eq!(record.price, 25);
    assert_eq!(record.quantity, 2);
}

#[test]
fn edit_missing_product_fails() {
    let harness = TestHarness::new();
    let id: ProductId = "P1234".parse().unwrap();
    let err = harness
        .engine
        .products()
        .edit(id, ProductPatch::default())
        .unwrap_err();
    assert!(
        matches!(err, CatalogError::ProductNotFound { .. }),
        "got {err:?}"
    );
}

#[test]
fn edit_rejects_invalid_patch_and_changes_nothing() {
    let harness = TestHarness::new();
    let id = harness.add_product("Pen", 10, 2);

    let err = harness
        .engine
        .products()
        .edit(
            id,
            ProductPatch {
                quantity: Some(-5),
                ..ProductPatch::default()
            },
        )
        .unwrap_err();
    assert!(
        matches!(err, CatalogError::InvalidInput { .. }),
        "got {err:?}"
    );

    let record = harness.engine.products().get(id).unwrap().unwrap();
    assert_eq!(record.quantity, 2);
}

#[test]
fn delete_removes_the_product() {
    let harness = TestHarness::new();
    let id = harness.add_product("Pen", 10, 2);

    harness.engine.products().delete(id).unwrap();
    assert!(harness.engine.products().get(id).unwrap().is_none());
    assert!(harness.engine.products().view().unwrap().is_empty());
}

#[test]
fn delete_missing_product_fails() {
    let harness = TestHarness::new();
    let id: ProductId = "P1234".parse().unwrap();
    let err = harness.engine.products().delete(id).unwrap_err();
    assert!(
        matches!(err, CatalogError::ProductNotFound { .. }),
        "got {err:?}"
    );
}

#[test]
fn delete_cascades_into_carts() {
    let harness = TestHarness::new();
    harness.register("Alice", "alice@example.com");
    let pen = harness.add_product("Pen", 10, 5);
    let ink = harness.add_product("Ink", 20, 5);
    let carts = harness.engine.carts();
    carts.add_item("alice@example.com", pen).unwrap();
    carts.add_item("alice@example.com", ink).unwrap();
    carts.add_item("alice@example.com", pen).unwrap();

    harness.engine.products().delete(pen).unwrap();

    let view = carts.view_cart("alice@example.com").unwrap();
    assert_eq!(view.lines.len(), 1);
    assert_eq!(view.lines[0].id, ink);
    assert!(view.stale.is_empty());

    // The cascade reaches the document itself, not just the view.
    let doc = harness.read_document();
    assert_eq!(doc.carts["alice@example.com"], vec![ink]);
}

#[test]
fn products_survive_a_reopen() {
    let harness = TestHarness::new();
    let id = harness.add_product("Pen", 10, 2);

    let reopened = harness.reopen();
    let record = reopened.products().get(id).unwrap().unwrap();
    assert_eq!(record.name, "Pen");
    assert_eq!(record.quantity, 2);
}
