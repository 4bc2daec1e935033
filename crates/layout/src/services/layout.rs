//! Layout service: load, persist, preview, and public page assembly.
//!
//! Provides:
//! - `LayoutRepository` / `LiveDataSource` / `FeatureFlags`: collaborator contracts
//! - `LayoutService`: orchestrates the layout engine over those collaborators
//! - `PublicPageView`: everything a public-render surface needs for one store

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{LayoutError, LayoutResult};
use crate::layout::{BlockType, LayoutDocument, LayoutEngine, RenderContext};
use crate::models::{Product, StoreRecord};
use crate::theme::{
    RenderVariant, ResolvedTheme, TemplateCatalog, resolve_theme, select_renderer,
};

/// Read/write access to a store's persisted layout value.
///
/// The stored value carries no schema guarantee; the engine normalizes
/// whatever comes back. Writes are whole-document, last write wins.
#[async_trait]
pub trait LayoutRepository: Send + Sync {
    /// Load the raw stored layout for a store, `None` when absent.
    async fn load_layout(&self, store_id: Uuid) -> Result<Option<Value>>;

    /// Persist an already sanitized layout document for a store.
    async fn save_layout(&self, store_id: Uuid, document: &LayoutDocument) -> Result<()>;
}

/// Supplies the current store record and product collection at render time.
#[async_trait]
pub trait LiveDataSource: Send + Sync {
    async fn store_record(&self, store_id: Uuid) -> Result<Option<StoreRecord>>;

    async fn product_list(&self, store_id: Uuid) -> Result<Vec<Product>>;
}

/// Supplies the flag enabling the block-tree renderer.
pub trait FeatureFlags: Send + Sync {
    fn block_tree_enabled(&self, store_id: Uuid) -> bool;
}

/// Everything a public-render surface needs for one store's page.
#[derive(Debug, Clone)]
pub struct PublicPageView {
    pub document: LayoutDocument,
    pub variant: RenderVariant,
    /// Style variables, present only for the fixed-template variant.
    pub theme: Option<ResolvedTheme>,
}

/// Orchestrates the layout engine over the injected collaborators.
///
/// The engine stays pure; this service owns every I/O call and logs at the
/// boundary.
pub struct LayoutService {
    repository: Arc<dyn LayoutRepository>,
    live_data: Arc<dyn LiveDataSource>,
    flags: Arc<dyn FeatureFlags>,
    engine: LayoutEngine,
    catalog: TemplateCatalog,
    default_document: LayoutDocument,
}

impl LayoutService {
    /// Create a service for the storefront layout family.
    pub fn new(
        repository: Arc<dyn LayoutRepository>,
        live_data: Arc<dyn LiveDataSource>,
        flags: Arc<dyn FeatureFlags>,
    ) -> Self {
        Self {
            repository,
            live_data,
            flags,
            engine: LayoutEngine::storefront(),
            catalog: TemplateCatalog::with_standard_families(),
            default_document: LayoutDocument::starter(),
        }
    }

    /// Replace the engine, e.g. for a different layout family.
    pub fn with_engine(mut self, engine: LayoutEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Replace the template catalog.
    pub fn with_catalog(mut self, catalog: TemplateCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the default document materialized for empty stores.
    pub fn with_default_document(mut self, document: LayoutDocument) -> Self {
        self.default_document = document;
        self
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Load a store's layout for the editing surface.
    ///
    /// A missing or corrupt stored value materializes the default document.
    pub async fn load_for_editing(
        &self,
        store_id: Uuid,
        allowed: Option<&HashSet<BlockType>>,
    ) -> LayoutResult<LayoutDocument> {
        let raw = self
            .repository
            .load_layout(store_id)
            .await
            .context("loading stored layout")
            .map_err(LayoutError::Persistence)?
            .unwrap_or(Value::Null);

        let document = self.engine.normalize(&raw, &self.default_document, allowed);
        debug!(
            %store_id,
            blocks = document.blocks().count(),
            "loaded layout for editing"
        );
        Ok(document)
    }

    /// Sanitize and persist a store's layout, returning the stored form.
    pub async fn persist(
        &self,
        store_id: Uuid,
        document: &LayoutDocument,
        allowed: Option<&HashSet<BlockType>>,
    ) -> LayoutResult<LayoutDocument> {
        let sanitized = self
            .engine
            .sanitize_for_storage(document, &self.default_document, allowed);

        self.repository
            .save_layout(store_id, &sanitized)
            .await
            .context("saving sanitized layout")
            .map_err(LayoutError::Persistence)?;

        info!(
            %store_id,
            blocks = sanitized.blocks().count(),
            "persisted layout"
        );
        Ok(sanitized)
    }

    /// Build an editor preview document with live data injected.
    pub async fn editor_preview(
        &self,
        store_id: Uuid,
        document: &LayoutDocument,
        preview_offset: f64,
    ) -> LayoutResult<LayoutDocument> {
        let (_, mut context) = self.live_context(store_id).await?;
        context.is_preview = true;
        context.is_editing = true;
        context.preview_offset = preview_offset;

        let raw = serde_json::to_value(document).unwrap_or(Value::Null);
        Ok(self
            .engine
            .inject_context(&raw, &self.default_document, None, &context))
    }

    /// Assemble everything the public-render surface needs for a store.
    pub async fn public_page(&self, store_id: Uuid) -> LayoutResult<PublicPageView> {
        let (store, context) = self.live_context(store_id).await?;

        let raw = self
            .repository
            .load_layout(store_id)
            .await
            .context("loading stored layout")
            .map_err(LayoutError::Persistence)?
            .unwrap_or(Value::Null);
        let document = self
            .engine
            .inject_context(&raw, &self.default_document, None, &context);

        let feature_enabled = self.flags.block_tree_enabled(store_id);
        let variant = select_renderer(&store.settings, feature_enabled, None);
        let theme = (variant == RenderVariant::FixedTemplate)
            .then(|| resolve_theme(&store.settings, &self.catalog));

        debug!(%store_id, ?variant, "assembled public page");
        Ok(PublicPageView {
            document,
            variant,
            theme,
        })
    }

    /// Load the store record and build the baseline render context.
    async fn live_context(&self, store_id: Uuid) -> LayoutResult<(StoreRecord, RenderContext)> {
        let store = self
            .live_data
            .store_record(store_id)
            .await
            .context("loading store record")
            .map_err(LayoutError::LiveData)?
            .ok_or(LayoutError::StoreNotFound(store_id))?;
        let products = self
            .live_data
            .product_list(store_id)
            .await
            .context("loading product list")
            .map_err(LayoutError::LiveData)?;

        let context = RenderContext {
            store: serde_json::to_value(&store).unwrap_or(Value::Null),
            products: serde_json::to_value(&products).unwrap_or_else(|_| Value::Array(Vec::new())),
            is_preview: false,
            is_editing: false,
            preview_offset: 0.0,
        };
        Ok((store, context))
    }
}
