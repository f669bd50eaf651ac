//! Data model shared between the session and its collaborators.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a manga title.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MangaId(pub u64);

/// Identifier of a chapter.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChapterId(pub u64);

impl fmt::Display for MangaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Manga metadata. Immutable once fetched.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Manga {
    pub id: MangaId,
    pub title: String,
    pub author: String,
}

/// One chapter of a manga. Position within the fetched chapter list defines
/// "next" and "previous"; the id alone carries no ordering.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: ChapterId,
    pub title: String,
}

/// A single page image. `page` is the 0-based position within the chapter,
/// matching the index into the loaded page list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PageImage {
    pub page: usize,
    pub url: String,
}

/// How pages are laid out and traversed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingMode {
    /// One page at a time, explicit navigation.
    #[default]
    Single,
    /// Continuous scroll; the viewport tracker drives the current page.
    Vertical,
}

impl ReadingMode {
    /// Next mode in the fixed toggle cycle.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Single => Self::Vertical,
            Self::Vertical => Self::Single,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycle_covers_both_modes() {
        assert_eq!(ReadingMode::Single.toggled(), ReadingMode::Vertical);
        assert_eq!(ReadingMode::Vertical.toggled(), ReadingMode::Single);
        assert_eq!(ReadingMode::default(), ReadingMode::Single);
    }
}
