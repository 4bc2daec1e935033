//! Service layer bridging the layout engine to external collaborators.

mod layout;

pub use layout::{FeatureFlags, LayoutRepository, LayoutService, LiveDataSource, PublicPageView};
