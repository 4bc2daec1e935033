//! Render variant selection and theme resolution.
//!
//! This module provides:
//! - `select_renderer`: block-tree vs fixed-template decision
//! - `resolve_theme`: three-tier color and font resolution
//! - `TemplateCatalog`: declared defaults per template family

pub mod palette;
pub mod variant;

pub use palette::{
    DEFAULT_FONT, DEFAULT_PRIMARY, DEFAULT_SECONDARY, ResolvedTheme, TemplateCatalog,
    TemplateDefaults, ThemePalette, resolve_theme,
};
pub use variant::{RenderVariant, select_renderer};
