//! Reading-session state machine.
//!
//! A [`ReaderSession`] owns everything a reader view needs: the current
//! manga, its ordered chapter list, the loaded page list, the current page,
//! the reading mode, and the set of pages already read. Navigation intents
//! and viewport feedback both funnel into [`ReaderSession::set_current_page`]
//! through the single `&mut` session, so page updates can never interleave.

use std::collections::BTreeSet;

use log::debug;

use crate::{
    error::ReaderError,
    model::{Chapter, ChapterId, Manga, MangaId, PageImage, ReadingMode},
    position::PositionStore,
    source::{ChapterImageSource, MangaCatalog},
};

/// Scroll side effect the host must apply after a navigation intent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub enum ScrollRequest {
    /// Leave the viewport where it is.
    None,
    /// Scroll to the top of the reader view.
    Top,
    /// Bring this page's element into view.
    ToPage(usize),
}

/// Session-wide tunables.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderOptions {
    /// Reaching the last page in vertical mode arms an automatic
    /// next-chapter request (see [`ReaderSession::take_auto_advance`]).
    pub auto_advance_on_last_page: bool,
    /// Tie-break when several pages cross the visibility threshold at once.
    pub tie_break: TieBreak,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            auto_advance_on_last_page: false,
            tie_break: TieBreak::LastReported,
        }
    }
}

/// State machine for one open reader view.
///
/// Generic over the catalog/image source and the position store so tests and
/// the demo harness can plug in in-memory collaborators.
pub struct ReaderSession<S, P>
where
    S: MangaCatalog + ChapterImageSource,
    P: PositionStore,
{
    source: S,
    positions: P,
    options: ReaderOptions,
    manga: Option<Manga>,
    chapters: Vec<Chapter>,
    chapter: Option<Chapter>,
    pages: Vec<PageImage>,
    current_page: usize,
    mode: ReadingMode,
    read_pages: BTreeSet<usize>,
    tracker: ViewportTracker,
    requested_chapter: Option<ChapterId>,
    auto_advance_armed: bool,
}

impl<S, P> ReaderSession<S, P>
where
    S: MangaCatalog + ChapterImageSource,
    P: PositionStore,
{
    pub fn new(source: S, positions: P, options: ReaderOptions) -> Self {
        Self {
            source,
            positions,
            options,
            manga: None,
            chapters: Vec::new(),
            chapter: None,
            pages: Vec::new(),
            current_page: 0,
            mode: ReadingMode::default(),
            read_pages: BTreeSet::new(),
            tracker: ViewportTracker::new(options.tie_break),
            requested_chapter: None,
            auto_advance_armed: false,
        }
    }

    /// Open a reader view on one `(manga, chapter)` pair.
    ///
    /// Fetches the catalog entry and chapter list, loads the chapter, then
    /// seeds the current page from the position store. Nothing is committed
    /// until every fetch has succeeded.
    pub async fn open(&mut self, manga: MangaId, chapter: ChapterId) -> Result<(), ReaderError> {
        let list = self.source.manga_list().await?;
        let Some(meta) = list.into_iter().find(|m| m.id == manga) else {
            return Err(ReaderError::MangaNotFound(manga));
        };
        let chapters = self.source.chapters(manga).await?;
        let Some(chapter_meta) = chapters.iter().find(|c| c.id == chapter).cloned() else {
            return Err(ReaderError::ChapterNotFound(chapter));
        };

        self.requested_chapter = Some(chapter);
        let pages = self.source.chapter_pages(chapter).await?;
        if self.requested_chapter != Some(chapter) {
            debug!("reader-load: stale open of chapter {chapter} dropped");
            return Ok(());
        }

        self.manga = Some(meta);
        self.chapters = chapters;
        self.apply_chapter(chapter_meta, pages);

        // Resume position is consulted once per open, not on every
        // navigation-driven chapter load.
        if let Some(page) = self.positions.last_position(manga, chapter) {
            self.set_current_page(page.min(self.pages.len().saturating_sub(1)));
        }
        Ok(())
    }

    /// Replace the loaded chapter with another one from the chapter list.
    ///
    /// All-or-nothing: on any failure the previous chapter, page position,
    /// and read set stay untouched. A response that arrives after a newer
    /// load request has been issued is dropped (last write wins).
    pub async fn load_chapter(&mut self, chapter: ChapterId) -> Result<(), ReaderError> {
        let Some(meta) = self.chapters.iter().find(|c| c.id == chapter).cloned() else {
            return Err(ReaderError::ChapterNotFound(chapter));
        };

        self.requested_chapter = Some(chapter);
        let pages = self.source.chapter_pages(chapter).await?;
        if self.requested_chapter != Some(chapter) {
            debug!("reader-load: stale response for chapter {chapter} dropped");
            return Ok(());
        }

        self.apply_chapter(meta, pages);
        Ok(())
    }

    fn apply_chapter(&mut self, chapter: Chapter, pages: Vec<PageImage>) {
        debug!(
            "reader-load: chapter {} ({:?}, {} pages)",
            chapter.id,
            chapter.title,
            pages.len()
        );
        self.chapter = Some(chapter);
        self.pages = pages;
        self.current_page = 0;
        self.read_pages.clear();
        self.auto_advance_armed = false;
        self.reattach_tracker();
    }

    /// Move to `page` and mark it read. Out-of-range indices are ignored.
    pub fn set_current_page(&mut self, page: usize) {
        if page >= self.pages.len() {
            debug!(
                "reader-nav: page {page} out of range (total {})",
                self.pages.len()
            );
            return;
        }

        self.current_page = page;
        self.read_pages.insert(page);
        if let (Some(manga), Some(chapter)) = (&self.manga, &self.chapter) {
            self.positions.save_position(manga.id, chapter.id, page);
        }

        if self.options.auto_advance_on_last_page
            && self.mode == ReadingMode::Vertical
            && page + 1 == self.pages.len()
            && self.can_go_next_chapter()
        {
            self.auto_advance_armed = true;
        }
    }

    /// Switch the layout mode. Never touches the loaded chapter or the
    /// current page; the tracker is re-initialized because the set of
    /// observed elements changes with the mode.
    pub fn set_reading_mode(&mut self, mode: ReadingMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.reattach_tracker();
    }

    /// True once after the last page was reached in vertical mode with
    /// auto-advance enabled; the host reacts by calling
    /// [`Self::next_chapter`].
    pub fn take_auto_advance(&mut self) -> bool {
        core::mem::take(&mut self.auto_advance_armed)
    }

    pub fn manga(&self) -> Option<&Manga> {
        self.manga.as_ref()
    }

    pub fn chapter(&self) -> Option<&Chapter> {
        self.chapter.as_ref()
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn pages(&self) -> &[PageImage] {
        &self.pages
    }

    pub fn reading_mode(&self) -> ReadingMode {
        self.mode
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    /// Image URL of the current page, absent while no chapter is loaded.
    pub fn current_page_image(&self) -> Option<&str> {
        self.pages.get(self.current_page).map(|p| p.url.as_str())
    }

    pub fn is_page_read(&self, page: usize) -> bool {
        self.read_pages.contains(&page)
    }

    pub fn can_go_next_page(&self) -> bool {
        self.current_page + 1 < self.pages.len()
    }

    pub fn can_go_prev_page(&self) -> bool {
        self.current_page > 0
    }

    /// Position of the current chapter in the chapter list.
    pub fn chapter_index(&self) -> Option<usize> {
        let current = self.chapter.as_ref()?;
        self.chapters.iter().position(|c| c.id == current.id)
    }

    pub fn can_go_next_chapter(&self) -> bool {
        matches!(self.chapter_index(), Some(index) if index + 1 < self.chapters.len())
    }

    pub fn can_go_prev_chapter(&self) -> bool {
        matches!(self.chapter_index(), Some(index) if index > 0)
    }

    /// 1-based "page / total" label for a page counter display.
    pub fn page_counter(&self) -> String {
        format!("{} / {}", self.current_page + 1, self.pages.len())
    }
}

include!("navigation.rs");
include!("viewport.rs");
