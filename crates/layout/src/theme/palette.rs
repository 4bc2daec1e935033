//! Theme resolution for the fixed-template renderer.
//!
//! Provides:
//! - `ThemePalette` / `ResolvedTheme`: the style variables handed to the renderer
//! - `TemplateCatalog`: declared defaults per template family
//! - `resolve_theme`: the three-tier store / family / global fallback chain

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{StoreSettings, StoreStyle};

/// Global fallback primary color.
pub const DEFAULT_PRIMARY: &str = "#1f2937";
/// Global fallback secondary color.
pub const DEFAULT_SECONDARY: &str = "#f9fafb";
/// Global fallback font family.
pub const DEFAULT_FONT: &str = "Inter";

/// A coherent primary/secondary color pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub primary: String,
    pub secondary: String,
}

/// The style variables handed to the fixed-template renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTheme {
    pub colors: ThemePalette,
    pub font: String,
}

/// Declared defaults for one template family.
#[derive(Debug, Clone)]
pub struct TemplateDefaults {
    /// Human-readable label shown in the template picker.
    pub label: String,
    pub palette: ThemePalette,
    pub font: String,
}

/// Catalog of template families, keyed by family name.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    families: HashMap<String, TemplateDefaults>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            families: HashMap::new(),
        }
    }

    /// Create a catalog pre-populated with the 3 standard families:
    /// minimal, boutique, bold.
    pub fn with_standard_families() -> Self {
        let mut catalog = Self::new();
        catalog.register(
            "minimal",
            TemplateDefaults {
                label: "Minimal".to_string(),
                palette: ThemePalette {
                    primary: "#111827".to_string(),
                    secondary: "#ffffff".to_string(),
                },
                font: "Inter".to_string(),
            },
        );
        catalog.register(
            "boutique",
            TemplateDefaults {
                label: "Boutique".to_string(),
                palette: ThemePalette {
                    primary: "#7c2d12".to_string(),
                    secondary: "#fef3c7".to_string(),
                },
                font: "Playfair Display".to_string(),
            },
        );
        catalog.register(
            "bold",
            TemplateDefaults {
                label: "Bold".to_string(),
                palette: ThemePalette {
                    primary: "#be123c".to_string(),
                    secondary: "#0f172a".to_string(),
                },
                font: "Archivo".to_string(),
            },
        );
        catalog
    }

    /// Register a template family.
    pub fn register(&mut self, name: impl Into<String>, defaults: TemplateDefaults) {
        self.families.insert(name.into(), defaults);
    }

    /// Look up a template family by name.
    pub fn get(&self, name: &str) -> Option<&TemplateDefaults> {
        self.families.get(name)
    }

    /// Return the number of registered families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

/// Resolve the active theme for a store.
///
/// Colors resolve a whole pair at a time: the store's explicit palette wins
/// only when both colors are set, otherwise the template family's palette
/// applies, otherwise the global default. Mixing one store color with one
/// family color would produce an incoherent palette, so partial store
/// palettes are ignored. The font falls through the same tiers on its own.
pub fn resolve_theme(settings: &StoreSettings, catalog: &TemplateCatalog) -> ResolvedTheme {
    let family = settings
        .template_family
        .as_deref()
        .and_then(|name| catalog.get(name));

    let colors = store_palette(&settings.style)
        .or_else(|| family.map(|defaults| defaults.palette.clone()))
        .unwrap_or(ThemePalette {
            primary: DEFAULT_PRIMARY.to_string(),
            secondary: DEFAULT_SECONDARY.to_string(),
        });

    let font = settings
        .style
        .font
        .clone()
        .or_else(|| family.map(|defaults| defaults.font.clone()))
        .unwrap_or_else(|| DEFAULT_FONT.to_string());

    ResolvedTheme { colors, font }
}

/// The store's explicit palette, present only when both colors are set.
fn store_palette(style: &StoreStyle) -> Option<ThemePalette> {
    match (&style.primary_color, &style.secondary_color) {
        (Some(primary), Some(secondary)) => Some(ThemePalette {
            primary: primary.clone(),
            secondary: secondary.clone(),
        }),
        _ => None,
    }
}
