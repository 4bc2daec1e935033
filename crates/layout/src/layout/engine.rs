//! Layout engine: normalization, storage sanitization, and context injection.
//!
//! Provides:
//! - `LayoutEngine`: the pure transformation core for one layout family
//! - `RenderContext`: live data overlaid onto a document's root at render time
//! - `RUNTIME_ROOT_KEYS`: root props that must never reach storage
//!
//! Every method is total: any input, however malformed, yields a valid
//! document. Malformed elements are dropped one by one; only a top-level
//! shape mismatch or a non-renderable result falls back to the supplied
//! default document.

use std::collections::{BTreeMap, HashSet};

use serde_json::{Map, Value};

use super::alias::AliasTable;
use super::document::{Block, BlockType, LayoutDocument, RootSettings};
use super::identity::assign_block_ids;
use super::registry::BlockTypeRegistry;

/// Root props that exist only on in-memory documents produced by
/// `inject_context` and are stripped from every normalized document.
pub const RUNTIME_ROOT_KEYS: [&str; 5] =
    ["store", "products", "isPreview", "isEditing", "previewOffset"];

/// Live data overlaid onto a normalized document's root for rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// The owning store record, as a plain JSON value.
    pub store: Value,
    /// The store's product collection; coerced to an array on injection.
    pub products: Value,
    pub is_preview: bool,
    pub is_editing: bool,
    /// Vertical offset of the preview viewport; coerced to a finite number.
    pub preview_offset: f64,
}

/// Pure transformation core over layout documents.
///
/// Holds the injected alias table and block registry for one layout family.
/// No method performs I/O or logging; collaborators own both.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    aliases: AliasTable,
    registry: BlockTypeRegistry,
}

impl LayoutEngine {
    /// Create an engine from an alias table and block registry.
    pub fn new(aliases: AliasTable, registry: BlockTypeRegistry) -> Self {
        Self { aliases, registry }
    }

    /// The engine preconfigured for the storefront layout family.
    pub fn storefront() -> Self {
        Self::new(
            AliasTable::storefront(),
            BlockTypeRegistry::with_storefront_types(),
        )
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn registry(&self) -> &BlockTypeRegistry {
        &self.registry
    }

    /// Produce a well-formed document from an arbitrary persisted value.
    ///
    /// A string value is decoded first; a value that is not (or does not
    /// decode to) an object yields a copy of `default_document`, as does a
    /// result with no blocks anywhere. Block elements that are malformed,
    /// of unknown type, or outside `allowed` are dropped individually. Zone
    /// names are preserved even when their value is not an array. Runtime
    /// root keys are stripped and every surviving block receives a unique
    /// identity, so normalizing an already-normalized document changes
    /// nothing.
    pub fn normalize(
        &self,
        raw: &Value,
        default_document: &LayoutDocument,
        allowed: Option<&HashSet<BlockType>>,
    ) -> LayoutDocument {
        let decoded;
        let value = match raw {
            Value::String(text) => match serde_json::from_str::<Value>(text) {
                Ok(parsed) => {
                    decoded = parsed;
                    &decoded
                }
                Err(_) => return default_document.clone(),
            },
            other => other,
        };
        let Some(object) = value.as_object() else {
            return default_document.clone();
        };

        let mut content = self.normalize_sequence(object.get("content"), allowed);

        let mut zones: BTreeMap<String, Vec<Block>> = BTreeMap::new();
        if let Some(raw_zones) = object.get("zones").and_then(Value::as_object) {
            for (name, blocks) in raw_zones {
                let normalized = match blocks {
                    Value::Array(_) => self.normalize_sequence(Some(blocks), allowed),
                    _ => Vec::new(),
                };
                zones.insert(name.clone(), normalized);
            }
        }

        let mut root_props = object
            .get("root")
            .and_then(|root| root.get("props"))
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        for key in RUNTIME_ROOT_KEYS {
            root_props.remove(key);
        }

        assign_block_ids(&mut content, &mut zones);

        let document = LayoutDocument {
            content,
            zones,
            root: RootSettings { props: root_props },
        };
        if document.is_renderable() {
            document
        } else {
            default_document.clone()
        }
    }

    /// Derive the storage-safe form of an in-memory document.
    ///
    /// Delegates to `normalize` over the serialized document, so runtime
    /// root keys are removed by the same path that cleans loaded records
    /// and the two can never disagree.
    pub fn sanitize_for_storage(
        &self,
        document: &LayoutDocument,
        default_document: &LayoutDocument,
        allowed: Option<&HashSet<BlockType>>,
    ) -> LayoutDocument {
        let raw = serde_json::to_value(document).unwrap_or(Value::Null);
        self.normalize(&raw, default_document, allowed)
    }

    /// Produce a render-ready document: normalize, then overlay the live
    /// context onto the root props.
    ///
    /// Malformed context values are clamped rather than propagated: the
    /// product collection is coerced to an array and the preview offset to
    /// a finite number.
    pub fn inject_context(
        &self,
        raw: &Value,
        default_document: &LayoutDocument,
        allowed: Option<&HashSet<BlockType>>,
        context: &RenderContext,
    ) -> LayoutDocument {
        let mut document = self.normalize(raw, default_document, allowed);
        let props = &mut document.root.props;

        props.insert("store".to_string(), context.store.clone());
        let products = match &context.products {
            Value::Array(_) => context.products.clone(),
            _ => Value::Array(Vec::new()),
        };
        props.insert("products".to_string(), products);
        props.insert("isPreview".to_string(), Value::Bool(context.is_preview));
        props.insert("isEditing".to_string(), Value::Bool(context.is_editing));
        let offset = if context.preview_offset.is_finite() {
            context.preview_offset
        } else {
            0.0
        };
        props.insert("previewOffset".to_string(), Value::from(offset));

        document
    }

    fn normalize_sequence(
        &self,
        raw: Option<&Value>,
        allowed: Option<&HashSet<BlockType>>,
    ) -> Vec<Block> {
        let Some(elements) = raw.and_then(Value::as_array) else {
            return Vec::new();
        };
        elements
            .iter()
            .filter_map(|element| self.normalize_block(element, allowed))
            .collect()
    }

    /// Normalize one raw block element; `None` drops it.
    fn normalize_block(
        &self,
        element: &Value,
        allowed: Option<&HashSet<BlockType>>,
    ) -> Option<Block> {
        let object = element.as_object()?;
        let raw_type = object.get("type")?.as_str()?;
        let block_type = self.aliases.resolve(raw_type)?;
        if !self.registry.contains(block_type) {
            return None;
        }
        if let Some(allowed) = allowed
            && !allowed.contains(&block_type)
        {
            return None;
        }

        let mut props: Map<String, Value> = object
            .get("props")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        self.aliases.apply_migrations(block_type, &mut props);

        Some(Block { block_type, props })
    }
}
