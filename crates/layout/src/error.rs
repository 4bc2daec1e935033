//! Layout service error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced at the layout service boundary.
///
/// The transformation core itself is total and never fails; these cover the
/// injected persistence and live-data collaborators.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("store {0} not found")]
    StoreNotFound(Uuid),

    #[error("layout persistence failed")]
    Persistence(#[source] anyhow::Error),

    #[error("live data lookup failed")]
    LiveData(#[source] anyhow::Error),
}

/// Result type alias using LayoutError.
pub type LayoutResult<T> = Result<T, LayoutError>;
