//! Collaborator traits that feed the reader session.

mod stub;

pub use stub::{StubLibrary, sample_library};

use async_trait::async_trait;

use crate::error::ReaderError;
use crate::model::{Chapter, ChapterId, Manga, MangaId, PageImage};

/// Read-only catalog of manga titles and their chapter lists.
#[async_trait]
pub trait MangaCatalog: Send + Sync {
    /// All known manga titles.
    async fn manga_list(&self) -> Result<Vec<Manga>, ReaderError>;

    /// Ordered chapter list for one manga. List order defines next/previous.
    async fn chapters(&self, manga: MangaId) -> Result<Vec<Chapter>, ReaderError>;
}

/// Supplies the ordered page images of a single chapter.
#[async_trait]
pub trait ChapterImageSource: Send + Sync {
    /// Page list for a chapter, ordered by page index.
    async fn chapter_pages(&self, chapter: ChapterId) -> Result<Vec<PageImage>, ReaderError>;
}
