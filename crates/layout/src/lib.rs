//! Bottega Layout Engine Library
//!
//! The layout document core for the storefront builder: the persisted
//! layout model, its normalization and migration pipeline, the persistence
//! sanitizer, the runtime context injector, and the public-render variant
//! and theme selection that consume the normalized document.
//!
//! Persistence, live data, and feature flags are injected collaborators;
//! see `services` for their contracts.

pub mod error;
pub mod layout;
pub mod models;
pub mod services;
pub mod theme;
