//! Store and product models supplied by the live data source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::theme::RenderVariant;

/// Explicit per-store style overrides.
///
/// Colors only take effect as a pair; see theme resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStyle {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub font: Option<String>,
}

/// Stored rendering configuration for a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// The store's stored renderer choice, when it has opted in.
    pub renderer: Option<RenderVariant>,
    /// Selected template family for the fixed-template renderer.
    pub template_family: Option<String>,
    #[serde(default)]
    pub style: StoreStyle,
}

/// A store record as supplied by the live data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub settings: StoreSettings,
    pub created: DateTime<Utc>,
    pub changed: DateTime<Utc>,
}

/// A published product as supplied by the live data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub published: bool,
}
