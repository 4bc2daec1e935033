//! Public-render variant selection.

use serde::{Deserialize, Serialize};

use crate::models::StoreSettings;

/// Which renderer produces a store's public page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderVariant {
    /// Walk the layout document block by block.
    BlockTree,
    /// Render the fixed template component for the store's family.
    FixedTemplate,
}

/// Decide which renderer serves a store's public page.
///
/// The block tree runs only when the feature is enabled and the store opted
/// in. A forced fixed template always wins; a forced block tree is honored
/// only while the feature is enabled and otherwise falls back to the
/// regular decision.
pub fn select_renderer(
    settings: &StoreSettings,
    feature_enabled: bool,
    force: Option<RenderVariant>,
) -> RenderVariant {
    match force {
        Some(RenderVariant::FixedTemplate) => return RenderVariant::FixedTemplate,
        Some(RenderVariant::BlockTree) if feature_enabled => return RenderVariant::BlockTree,
        Some(RenderVariant::BlockTree) | None => {}
    }

    if feature_enabled && settings.renderer == Some(RenderVariant::BlockTree) {
        RenderVariant::BlockTree
    } else {
        RenderVariant::FixedTemplate
    }
}
