#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common fixtures and in-memory fakes for integration tests.
//!
//! The fakes implement the real collaborator traits so tests exercise the
//! actual service and engine code against controlled data.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use bottega_layout::layout::{LayoutDocument, LayoutEngine};
use bottega_layout::models::{Product, StoreRecord, StoreSettings};
use bottega_layout::services::{FeatureFlags, LayoutRepository, LiveDataSource};

pub fn engine() -> LayoutEngine {
    LayoutEngine::storefront()
}

pub fn default_document() -> LayoutDocument {
    LayoutDocument::starter()
}

pub fn store_record(id: Uuid, settings: StoreSettings) -> StoreRecord {
    StoreRecord {
        id,
        name: "Test Store".to_string(),
        slug: "test-store".to_string(),
        settings,
        created: Utc::now(),
        changed: Utc::now(),
    }
}

pub fn product(title: &str, price_cents: i64) -> Product {
    Product {
        id: Uuid::now_v7(),
        title: title.to_string(),
        price_cents,
        image_url: None,
        published: true,
    }
}

/// In-memory layout repository storing raw JSON values per store.
#[derive(Default)]
pub struct MemoryRepository {
    layouts: Mutex<HashMap<Uuid, Value>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw stored value, bypassing sanitization.
    pub fn seed(&self, store_id: Uuid, raw: Value) {
        self.layouts.lock().unwrap().insert(store_id, raw);
    }

    /// The raw stored value for a store, as the repository holds it.
    pub fn stored(&self, store_id: Uuid) -> Option<Value> {
        self.layouts.lock().unwrap().get(&store_id).cloned()
    }
}

#[async_trait]
impl LayoutRepository for MemoryRepository {
    async fn load_layout(&self, store_id: Uuid) -> Result<Option<Value>> {
        Ok(self.layouts.lock().unwrap().get(&store_id).cloned())
    }

    async fn save_layout(&self, store_id: Uuid, document: &LayoutDocument) -> Result<()> {
        let value = serde_json::to_value(document)?;
        self.layouts.lock().unwrap().insert(store_id, value);
        Ok(())
    }
}

/// Live data source serving one fixed store record and product list.
pub struct FakeLiveData {
    pub store: StoreRecord,
    pub products: Vec<Product>,
}

#[async_trait]
impl LiveDataSource for FakeLiveData {
    async fn store_record(&self, store_id: Uuid) -> Result<Option<StoreRecord>> {
        if store_id == self.store.id {
            Ok(Some(self.store.clone()))
        } else {
            Ok(None)
        }
    }

    async fn product_list(&self, _store_id: Uuid) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

/// Feature flag source answering the same value for every store.
pub struct FixedFlags(pub bool);

impl FeatureFlags for FixedFlags {
    fn block_tree_enabled(&self, _store_id: Uuid) -> bool {
        self.0
    }
}
