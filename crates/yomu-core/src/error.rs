//! Error taxonomy for catalog and chapter loads.
//!
//! Out-of-range page indices are deliberately absent here: the session
//! treats them as silent no-ops, logged at debug level and never surfaced.

use crate::model::{ChapterId, MangaId};

/// Failures surfaced by catalog and image-source collaborators.
///
/// All of these are non-fatal to a running session: the previous chapter and
/// page stay loaded, and the caller may retry.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ReaderError {
    /// The requested manga does not exist in the catalog.
    #[error("manga {0} not found")]
    MangaNotFound(MangaId),

    /// The requested chapter does not exist.
    #[error("chapter {0} not found")]
    ChapterNotFound(ChapterId),

    /// Transport failure while talking to the backend.
    #[error("network error: {0}")]
    Network(String),
}
