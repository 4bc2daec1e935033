//! Layout document model and transformation pipeline.
//!
//! This module provides:
//! - `LayoutDocument` / `Block` / `BlockType`: the persisted layout model
//! - `BlockTypeRegistry`: legal block variants per layout family
//! - `AliasTable`: legacy type aliases and property migrations
//! - `assign_block_ids`: document-wide identity allocation
//! - `LayoutEngine`: normalization, storage sanitization, context injection

pub mod alias;
pub mod document;
pub mod engine;
mod identity;
pub mod registry;

pub use alias::{AliasTable, PropMigration};
pub use document::{Block, BlockType, LayoutDocument, RootSettings};
pub use engine::{LayoutEngine, RUNTIME_ROOT_KEYS, RenderContext};
pub use identity::assign_block_ids;
pub use registry::{BlockTypeDefinition, BlockTypeRegistry};
