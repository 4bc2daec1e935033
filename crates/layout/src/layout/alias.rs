//! Legacy block-type aliases and property migrations.
//!
//! Old records carry no schema version; they keep loading because the alias
//! table tolerates their obsolete type identifiers and prop shapes.
//!
//! Provides:
//! - `PropMigration`: a data-driven prop rewrite for one block type
//! - `AliasTable`: obsolete-identifier mapping plus per-type migrations

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::document::BlockType;

/// A data-driven property rewrite applied after alias resolution.
#[derive(Debug, Clone)]
pub enum PropMigration {
    /// Move `from` into `to` unless `to` is already set; `from` is removed
    /// either way.
    RenameIfAbsent {
        from: &'static str,
        to: &'static str,
    },
    /// Insert `key = value` when `key` is absent.
    DefaultIfAbsent { key: &'static str, value: Value },
}

/// Mapping from obsolete type identifiers to current ones, plus per-type
/// property migrations.
///
/// Injected into the engine rather than held as process-wide state, so
/// different layout families can carry different tables.
#[derive(Debug, Clone)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
    migrations: HashMap<BlockType, Vec<PropMigration>>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            aliases: HashMap::new(),
            migrations: HashMap::new(),
        }
    }

    /// The alias table for the storefront layout family.
    pub fn storefront() -> Self {
        let mut table = Self::new();
        table.alias("header-nav", "navbar");
        table.alias("hero-banner", "hero");
        table.alias("rich-text", "text");
        table.alias("separator", "divider");
        table.alias("product-list", "product-grid");

        table.migrate(
            BlockType::Navbar,
            vec![
                PropMigration::RenameIfAbsent {
                    from: "sticky",
                    to: "fixed",
                },
                PropMigration::DefaultIfAbsent {
                    key: "reserveSpace",
                    value: Value::Bool(true),
                },
            ],
        );
        table.migrate(
            BlockType::ProductGrid,
            vec![PropMigration::RenameIfAbsent {
                from: "limit",
                to: "maxItems",
            }],
        );

        table
    }

    /// Register an alias from an obsolete identifier to a current one.
    pub fn alias(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.aliases.insert(from.into(), to.into());
    }

    /// Register the migrations applied to blocks of `block_type`.
    pub fn migrate(&mut self, block_type: BlockType, migrations: Vec<PropMigration>) {
        self.migrations.insert(block_type, migrations);
    }

    /// Resolve a raw type identifier to a known block type, following at
    /// most one alias hop.
    pub fn resolve(&self, raw: &str) -> Option<BlockType> {
        let current = self.aliases.get(raw).map_or(raw, String::as_str);
        BlockType::parse(current)
    }

    /// Apply the registered migrations for `block_type` to `props` in place.
    ///
    /// Migrations are corrective only: they never fail, and properties they
    /// do not name pass through untouched. Applying them twice changes
    /// nothing.
    pub fn apply_migrations(&self, block_type: BlockType, props: &mut Map<String, Value>) {
        let Some(migrations) = self.migrations.get(&block_type) else {
            return;
        };
        for migration in migrations {
            match migration {
                PropMigration::RenameIfAbsent { from, to } => {
                    if let Some(value) = props.remove(*from)
                        && !props.contains_key(*to)
                    {
                        props.insert((*to).to_string(), value);
                    }
                }
                PropMigration::DefaultIfAbsent { key, value } => {
                    if !props.contains_key(*key) {
                        props.insert((*key).to_string(), value.clone());
                    }
                }
            }
        }
    }
}
