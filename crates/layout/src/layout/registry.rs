//! Block type registry for layout families.
//!
//! Provides:
//! - `BlockTypeDefinition`: label and default props for a single block variant
//! - `BlockTypeRegistry`: the set of variants legal for one layout family

use std::collections::{HashMap, HashSet};

use serde_json::{Map, Value};

use super::document::{Block, BlockType};

/// Definition of a single block variant available to a layout family.
#[derive(Debug, Clone)]
pub struct BlockTypeDefinition {
    /// The variant this definition describes.
    pub block_type: BlockType,
    /// Human-readable label shown in the editor palette.
    pub label: String,
    /// Props applied when a block of this type is created.
    pub defaults: Map<String, Value>,
}

/// Registry of the block variants legal for one layout family.
///
/// Injected into the engine rather than held as process-wide state, so
/// different layout families can carry different registries.
#[derive(Debug, Clone)]
pub struct BlockTypeRegistry {
    types: HashMap<BlockType, BlockTypeDefinition>,
}

impl Default for BlockTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockTypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the 8 storefront block types.
    pub fn with_storefront_types() -> Self {
        let mut registry = Self::new();
        registry.register_storefront_types();
        registry
    }

    /// Register a single block type definition.
    pub fn register(&mut self, definition: BlockTypeDefinition) {
        self.types.insert(definition.block_type, definition);
    }

    /// Look up a block type definition.
    pub fn get(&self, block_type: BlockType) -> Option<&BlockTypeDefinition> {
        self.types.get(&block_type)
    }

    /// Check whether a block type is registered.
    pub fn contains(&self, block_type: BlockType) -> bool {
        self.types.contains_key(&block_type)
    }

    /// Return the number of registered block types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// List all registered type identifiers.
    pub fn type_names(&self) -> Vec<String> {
        self.types.keys().map(|t| t.to_string()).collect()
    }

    /// The full registered set, usable as an allowed-type set.
    pub fn allowed(&self) -> HashSet<BlockType> {
        self.types.keys().copied().collect()
    }

    /// The registered default props for a type, empty when unregistered.
    pub fn default_props(&self, block_type: BlockType) -> Map<String, Value> {
        self.types
            .get(&block_type)
            .map(|def| def.defaults.clone())
            .unwrap_or_default()
    }

    /// Create a new block of `block_type` carrying the registered defaults.
    ///
    /// Returns `None` for types this registry does not know. The new block
    /// has no identity yet; normalization assigns one.
    pub fn new_block(&self, block_type: BlockType) -> Option<Block> {
        let definition = self.types.get(&block_type)?;
        let mut block = Block::new(block_type);
        block.props = definition.defaults.clone();
        Some(block)
    }

    /// Register the 8 storefront block types: navbar, hero, text, image,
    /// button, divider, product-grid, footer.
    pub fn register_storefront_types(&mut self) {
        self.register(BlockTypeDefinition {
            block_type: BlockType::Navbar,
            label: "Navigation bar".to_string(),
            defaults: defaults(serde_json::json!({
                "fixed": true,
                "reserveSpace": true,
            })),
        });

        self.register(BlockTypeDefinition {
            block_type: BlockType::Hero,
            label: "Hero".to_string(),
            defaults: defaults(serde_json::json!({
                "title": "Welcome to our store",
                "subtitle": "",
            })),
        });

        self.register(BlockTypeDefinition {
            block_type: BlockType::Text,
            label: "Text".to_string(),
            defaults: defaults(serde_json::json!({
                "text": "",
            })),
        });

        self.register(BlockTypeDefinition {
            block_type: BlockType::Image,
            label: "Image".to_string(),
            defaults: defaults(serde_json::json!({
                "url": "",
                "alt": "",
            })),
        });

        self.register(BlockTypeDefinition {
            block_type: BlockType::Button,
            label: "Button".to_string(),
            defaults: defaults(serde_json::json!({
                "label": "Shop now",
                "href": "/",
            })),
        });

        self.register(BlockTypeDefinition {
            block_type: BlockType::Divider,
            label: "Divider".to_string(),
            defaults: defaults(serde_json::json!({})),
        });

        self.register(BlockTypeDefinition {
            block_type: BlockType::ProductGrid,
            label: "Product grid".to_string(),
            defaults: defaults(serde_json::json!({
                "maxItems": 8,
                "columns": 4,
            })),
        });

        self.register(BlockTypeDefinition {
            block_type: BlockType::Footer,
            label: "Footer".to_string(),
            defaults: defaults(serde_json::json!({
                "showSocial": true,
            })),
        });
    }
}

fn defaults(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
