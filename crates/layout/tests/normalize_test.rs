#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Normalization, sanitization, and injection pipeline tests.

mod common;

use std::collections::HashSet;

use serde_json::{Value, json};

use bottega_layout::layout::{BlockType, RUNTIME_ROOT_KEYS, RenderContext};

use common::{default_document, engine};

#[test]
fn test_normalize_total_over_malformed_inputs() {
    let engine = engine();
    let default = default_document();
    let garbage = [
        Value::Null,
        Value::Bool(false),
        json!(3.5),
        json!([{ "type": "hero" }]),
        json!("definitely not json"),
        json!("\"a bare string\""),
        json!({ "content": "nope", "zones": [], "root": 9 }),
    ];

    for raw in garbage {
        let normalized = engine.normalize(&raw, &default, None);
        assert!(normalized.is_renderable(), "input {raw} broke normalization");
    }
}

#[test]
fn test_normalize_null_returns_default_copy() {
    let normalized = engine().normalize(&Value::Null, &default_document(), None);
    assert_eq!(normalized, default_document());
}

#[test]
fn test_normalize_decodes_string_encoded_document() {
    let encoded = json!({
        "content": [{ "type": "hero", "props": { "id": "block-hero-1", "title": "Hi" } }]
    })
    .to_string();
    let normalized = engine().normalize(&json!(encoded), &default_document(), None);

    assert_eq!(normalized.content.len(), 1);
    assert_eq!(normalized.content[0].block_type, BlockType::Hero);
    assert_eq!(normalized.content[0].id(), Some("block-hero-1"));
}

#[test]
fn test_normalize_is_idempotent() {
    let engine = engine();
    let default = default_document();
    let raw = json!({
        "content": [
            { "type": "header-nav", "props": { "sticky": true } },
            { "type": "hero", "props": { "id": "x", "title": "Hi" } },
            { "type": "product-list", "props": { "id": "x", "limit": 6 } },
            "garbage",
        ],
        "zones": {
            "sidebar": [{ "type": "rich-text", "props": { "text": "hello" } }],
            "broken": "not an array",
        },
        "root": { "props": { "layoutWidth": "wide", "isPreview": true } },
    });

    let once = engine.normalize(&raw, &default, None);
    let twice = engine.normalize(&serde_json::to_value(&once).unwrap(), &default, None);

    assert_eq!(once, twice);
}

#[test]
fn test_sanitize_inject_duality() {
    let engine = engine();
    let default = default_document();
    let raw = json!({
        "content": [
            { "type": "header-nav", "props": { "sticky": false } },
            { "type": "hero", "props": { "title": "Hi" } },
        ],
        "zones": { "footer": [{ "type": "footer" }] },
        "root": { "props": { "layoutWidth": "narrow" } },
    });
    let context = RenderContext {
        store: json!({ "name": "Acme" }),
        products: json!([{ "title": "Mug" }]),
        is_preview: true,
        is_editing: true,
        preview_offset: 42.0,
    };

    let injected = engine.inject_context(&raw, &default, None, &context);
    let sanitized = engine.sanitize_for_storage(&injected, &default, None);

    assert_eq!(sanitized, engine.normalize(&raw, &default, None));
    for key in RUNTIME_ROOT_KEYS {
        assert!(!sanitized.root.props.contains_key(key), "{key} survived");
    }
    assert_eq!(
        sanitized.root.props.get("layoutWidth"),
        Some(&json!("narrow"))
    );
}

#[test]
fn test_ids_unique_and_non_empty_across_zones() {
    let raw = json!({
        "content": [
            { "type": "hero", "props": { "id": "x" } },
            { "type": "hero", "props": { "id": "x" } },
            { "type": "text" },
        ],
        "zones": {
            "a": [{ "type": "text", "props": { "id": "x" } }],
            "b": [{ "type": "button" }, { "type": "button", "props": { "id": "" } }],
        },
    });
    let normalized = engine().normalize(&raw, &default_document(), None);

    let ids: Vec<&str> = normalized.blocks().map(|b| b.id().unwrap()).collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), 6);
    assert_eq!(unique.len(), ids.len(), "duplicate ids in {ids:?}");
    assert!(ids.iter().all(|id| !id.trim().is_empty()));
}

#[test]
fn test_duplicate_id_first_occurrence_keeps_it() {
    let raw = json!({
        "content": [
            { "type": "hero", "props": { "id": "x" } },
            { "type": "text", "props": { "id": "x" } },
        ],
    });
    let normalized = engine().normalize(&raw, &default_document(), None);

    assert_eq!(normalized.content[0].id(), Some("x"));
    let second = normalized.content[1].id().unwrap();
    assert_ne!(second, "x");
    assert!(second.starts_with("block-text-"));
}

#[test]
fn test_legacy_alias_matches_directly_authored_block() {
    let engine = engine();
    let default = default_document();
    let legacy = json!({
        "content": [{ "type": "header-nav", "props": { "sticky": false } }]
    });
    let modern = json!({
        "content": [{ "type": "navbar", "props": { "fixed": false, "reserveSpace": true } }]
    });

    assert_eq!(
        engine.normalize(&legacy, &default, None),
        engine.normalize(&modern, &default, None)
    );
}

#[test]
fn test_legacy_navbar_rename_scenario() {
    let raw = json!({
        "content": [{ "type": "header-nav", "props": { "sticky": false } }]
    });
    let normalized = engine().normalize(&raw, &default_document(), None);

    assert_eq!(normalized.content.len(), 1);
    let navbar = &normalized.content[0];
    assert_eq!(navbar.block_type, BlockType::Navbar);
    assert_eq!(navbar.props.get("fixed"), Some(&json!(false)));
    assert_eq!(navbar.props.get("reserveSpace"), Some(&json!(true)));
    assert!(!navbar.props.contains_key("sticky"));
    assert!(navbar.id().is_some());
}

#[test]
fn test_allowed_set_drops_other_types() {
    let raw = json!({
        "content": [
            { "type": "navbar" },
            { "type": "hero" },
            { "type": "footer" },
        ],
    });
    let allowed: HashSet<BlockType> = [BlockType::Hero, BlockType::Footer].into_iter().collect();
    let normalized = engine().normalize(&raw, &default_document(), Some(&allowed));

    let types: Vec<BlockType> = normalized.content.iter().map(|b| b.block_type).collect();
    assert_eq!(types, vec![BlockType::Hero, BlockType::Footer]);
}

#[test]
fn test_zone_names_preserved_byte_for_byte() {
    let raw = json!({
        "content": [{ "type": "hero" }],
        "zones": {
            "Sidebar Left ": [{ "type": "text" }],
            "promo": "not an array",
            "empty": [],
        },
    });
    let normalized = engine().normalize(&raw, &default_document(), None);

    let names: Vec<&str> = normalized.zones.keys().map(String::as_str).collect();
    assert!(names.contains(&"Sidebar Left "));
    assert!(names.contains(&"promo"));
    assert!(names.contains(&"empty"));
    assert!(normalized.zones["promo"].is_empty());
}

#[test]
fn test_non_renderable_document_replaced_by_default() {
    let raw = json!({
        "content": [],
        "zones": { "sidebar": [], "footer": [] },
        "root": { "props": { "layoutWidth": "wide" } },
    });
    let normalized = engine().normalize(&raw, &default_document(), None);
    assert_eq!(normalized, default_document());
}

#[test]
fn test_inject_clamps_malformed_context() {
    let raw = json!({ "content": [{ "type": "hero" }] });
    let context = RenderContext {
        store: Value::Null,
        products: json!("not a list"),
        is_preview: false,
        is_editing: false,
        preview_offset: f64::INFINITY,
    };
    let injected = engine().inject_context(&raw, &default_document(), None, &context);

    assert_eq!(injected.root.props["products"], json!([]));
    assert_eq!(injected.root.props["previewOffset"], json!(0.0));
}
