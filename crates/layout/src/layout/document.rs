//! Layout document model.
//!
//! Provides:
//! - `BlockType`: the closed set of block variants known to the engine
//! - `Block`: one placed, typed, prop-bearing unit in a layout
//! - `RootSettings`: document-wide configuration props
//! - `LayoutDocument`: the persisted layout (content, zones, root)

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A block variant known to the engine.
///
/// Raw type identifiers resolve into this enum via the alias table; an
/// identifier that resolves to no variant marks its block as dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    Navbar,
    Hero,
    Text,
    Image,
    Button,
    Divider,
    ProductGrid,
    Footer,
}

impl BlockType {
    /// All known block variants.
    pub const ALL: [BlockType; 8] = [
        BlockType::Navbar,
        BlockType::Hero,
        BlockType::Text,
        BlockType::Image,
        BlockType::Button,
        BlockType::Divider,
        BlockType::ProductGrid,
        BlockType::Footer,
    ];

    /// The stored identifier for this variant (e.g. "product-grid").
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Navbar => "navbar",
            BlockType::Hero => "hero",
            BlockType::Text => "text",
            BlockType::Image => "image",
            BlockType::Button => "button",
            BlockType::Divider => "divider",
            BlockType::ProductGrid => "product-grid",
            BlockType::Footer => "footer",
        }
    }

    /// Parse a current (non-aliased) type identifier.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One placed block in a layout document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Resolved block variant.
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Property bag; plain data only, shape varies per type.
    #[serde(default)]
    pub props: Map<String, Value>,
}

impl Block {
    /// Create a block with no props.
    pub fn new(block_type: BlockType) -> Self {
        Self {
            block_type,
            props: Map::new(),
        }
    }

    /// Create a block with props taken from a JSON object value.
    ///
    /// A non-object value yields an empty prop map.
    pub fn with_props(block_type: BlockType, props: Value) -> Self {
        let props = match props {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self { block_type, props }
    }

    /// The block's identity, when present, a string, and non-blank.
    pub fn id(&self) -> Option<&str> {
        self.props
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.trim().is_empty())
    }

    /// Overwrite the block's identity.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.props.insert("id".to_string(), Value::String(id.into()));
    }
}

/// Document-wide configuration carried on the layout root.
///
/// Holds props only; the root is not a block and has no type or identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootSettings {
    #[serde(default)]
    pub props: Map<String, Value>,
}

/// The persisted layout for one store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// Top-level block sequence (the unnamed zone).
    #[serde(default)]
    pub content: Vec<Block>,
    /// Named zones; a zone exists independently of having blocks.
    #[serde(default)]
    pub zones: BTreeMap<String, Vec<Block>>,
    /// Document-wide configuration.
    #[serde(default)]
    pub root: RootSettings,
}

impl LayoutDocument {
    /// Whether anything would render: content or at least one zone has blocks.
    pub fn is_renderable(&self) -> bool {
        !self.content.is_empty() || self.zones.values().any(|blocks| !blocks.is_empty())
    }

    /// Iterate every block in document order: content first, then zones.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.content.iter().chain(self.zones.values().flatten())
    }

    /// The starter layout materialized for stores with no saved layout.
    pub fn starter() -> Self {
        let content = vec![
            Block::with_props(
                BlockType::Hero,
                serde_json::json!({
                    "id": "block-hero-1",
                    "title": "Welcome to our store",
                    "subtitle": "Browse our latest products",
                }),
            ),
            Block::with_props(
                BlockType::ProductGrid,
                serde_json::json!({
                    "id": "block-product-grid-2",
                    "maxItems": 8,
                    "columns": 4,
                }),
            ),
            Block::with_props(
                BlockType::Footer,
                serde_json::json!({
                    "id": "block-footer-3",
                    "showSocial": true,
                }),
            ),
        ];
        Self {
            content,
            zones: BTreeMap::new(),
            root: RootSettings::default(),
        }
    }
}
