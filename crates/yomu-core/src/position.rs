//! Resume-position persistence.

use crate::model::{ChapterId, MangaId};

/// Abstract store for per-chapter resume positions.
///
/// Kept synchronous so `set_current_page` stays callable from viewport
/// callbacks; a store backed by a remote settings service is expected to
/// queue writes instead of blocking.
pub trait PositionStore {
    /// Last saved page for `(manga, chapter)`, if any.
    fn last_position(&self, manga: MangaId, chapter: ChapterId) -> Option<usize>;

    /// Record `page` as the last read position for `(manga, chapter)`.
    fn save_position(&mut self, manga: MangaId, chapter: ChapterId, page: usize);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct LastPosition {
    manga: MangaId,
    chapter: ChapterId,
    page: usize,
}

/// In-memory position store.
#[derive(Clone, Debug, Default)]
pub struct MemoryPositionStore {
    positions: Vec<LastPosition>,
}

impl MemoryPositionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PositionStore for MemoryPositionStore {
    fn last_position(&self, manga: MangaId, chapter: ChapterId) -> Option<usize> {
        self.positions
            .iter()
            .find(|p| p.manga == manga && p.chapter == chapter)
            .map(|p| p.page)
    }

    fn save_position(&mut self, manga: MangaId, chapter: ChapterId, page: usize) {
        match self
            .positions
            .iter_mut()
            .find(|p| p.manga == manga && p.chapter == chapter)
        {
            Some(existing) => existing.page = page,
            None => self.positions.push(LastPosition {
                manga,
                chapter,
                page,
            }),
        }
    }
}

/// Store that remembers nothing; for sessions without a signed-in user.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPersistence;

impl PositionStore for NoPersistence {
    fn last_position(&self, _manga: MangaId, _chapter: ChapterId) -> Option<usize> {
        None
    }

    fn save_position(&mut self, _manga: MangaId, _chapter: ChapterId, _page: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_and_overwrites_per_chapter() {
        let mut store = MemoryPositionStore::new();
        let manga = MangaId(1);

        assert_eq!(store.last_position(manga, ChapterId(1)), None);

        store.save_position(manga, ChapterId(1), 4);
        store.save_position(manga, ChapterId(2), 7);
        assert_eq!(store.last_position(manga, ChapterId(1)), Some(4));
        assert_eq!(store.last_position(manga, ChapterId(2)), Some(7));

        store.save_position(manga, ChapterId(1), 9);
        assert_eq!(store.last_position(manga, ChapterId(1)), Some(9));
    }

    #[test]
    fn no_persistence_always_empty() {
        let mut store = NoPersistence;
        store.save_position(MangaId(1), ChapterId(1), 3);
        assert_eq!(store.last_position(MangaId(1), ChapterId(1)), None);
    }
}
