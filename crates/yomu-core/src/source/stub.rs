use async_trait::async_trait;

use super::{ChapterImageSource, MangaCatalog};
use crate::error::ReaderError;
use crate::model::{Chapter, ChapterId, Manga, MangaId, PageImage};

const PAGE_WIDTH: u32 = 800;
const PAGE_HEIGHT: u32 = 1200;

/// One catalog entry: manga metadata plus its chapters and page counts.
#[derive(Clone, Debug)]
struct Title {
    manga: Manga,
    chapters: Vec<(Chapter, usize)>,
}

/// In-memory library used until a real backend is connected; also the
/// fixture source for session tests.
#[derive(Clone, Debug, Default)]
pub struct StubLibrary {
    titles: Vec<Title>,
}

/// Default sample catalog with three well-known titles.
pub fn sample_library() -> StubLibrary {
    let mut library = StubLibrary::new();
    library.add_title("Naruto", "Masashi Kishimoto", &[45, 39, 42]);
    library.add_title("One Piece", "Eiichiro Oda", &[45, 39, 42]);
    library.add_title("Attack on Titan", "Hajime Isayama", &[45, 39, 42]);
    library
}

impl StubLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a title. Manga ids count up from 1; chapter ids are assigned
    /// sequentially across the whole library so a chapter id alone is enough
    /// to locate its pages.
    pub fn add_title(&mut self, title: &str, author: &str, page_counts: &[usize]) -> MangaId {
        let manga_id = MangaId(self.titles.len() as u64 + 1);
        let next_chapter_id = self
            .titles
            .iter()
            .map(|t| t.chapters.len() as u64)
            .sum::<u64>()
            + 1;

        let chapters = page_counts
            .iter()
            .enumerate()
            .map(|(index, &pages)| {
                let chapter = Chapter {
                    id: ChapterId(next_chapter_id + index as u64),
                    title: format!("Chapter {}", index + 1),
                };
                (chapter, pages)
            })
            .collect();

        self.titles.push(Title {
            manga: Manga {
                id: manga_id,
                title: title.to_owned(),
                author: author.to_owned(),
            },
            chapters,
        });
        manga_id
    }

    /// Case-insensitive title/author search.
    pub fn search(&self, query: &str) -> Vec<Manga> {
        let query = query.to_lowercase();
        self.titles
            .iter()
            .filter(|t| {
                t.manga.title.to_lowercase().contains(&query)
                    || t.manga.author.to_lowercase().contains(&query)
            })
            .map(|t| t.manga.clone())
            .collect()
    }

    fn page_url(manga: &Manga, chapter: &Chapter, page: usize) -> String {
        // Placeholder art; page numbers are shown 1-based on the image.
        format!(
            "https://placehold.co/{PAGE_WIDTH}x{PAGE_HEIGHT}?text={}+{}+Page+{}",
            manga.title.replace(' ', "+"),
            chapter.title.replace(' ', "+"),
            page + 1
        )
    }
}

#[async_trait]
impl MangaCatalog for StubLibrary {
    async fn manga_list(&self) -> Result<Vec<Manga>, ReaderError> {
        Ok(self.titles.iter().map(|t| t.manga.clone()).collect())
    }

    async fn chapters(&self, manga: MangaId) -> Result<Vec<Chapter>, ReaderError> {
        self.titles
            .iter()
            .find(|t| t.manga.id == manga)
            .map(|t| t.chapters.iter().map(|(c, _)| c.clone()).collect())
            .ok_or(ReaderError::MangaNotFound(manga))
    }
}

#[async_trait]
impl ChapterImageSource for StubLibrary {
    async fn chapter_pages(&self, chapter: ChapterId) -> Result<Vec<PageImage>, ReaderError> {
        for title in &self.titles {
            if let Some((meta, pages)) = title.chapters.iter().find(|(c, _)| c.id == chapter) {
                let pages = (0..*pages)
                    .map(|page| PageImage {
                        page,
                        url: Self::page_url(&title.manga, meta, page),
                    })
                    .collect();
                return Ok(pages);
            }
        }
        Err(ReaderError::ChapterNotFound(chapter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sample_catalog_lists_three_titles() {
        let library = sample_library();
        let list = library.manga_list().await.unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].title, "Naruto");
        assert_eq!(list[2].author, "Hajime Isayama");
    }

    #[tokio::test]
    async fn chapter_ids_are_unique_across_titles() {
        let library = sample_library();
        let first = library.chapters(MangaId(1)).await.unwrap();
        let second = library.chapters(MangaId(2)).await.unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].id, ChapterId(1));
        assert_eq!(second[0].id, ChapterId(4));
    }

    #[tokio::test]
    async fn pages_are_zero_based_and_ordered() {
        let library = sample_library();
        let pages = library.chapter_pages(ChapterId(1)).await.unwrap();
        assert_eq!(pages.len(), 45);
        assert_eq!(pages[0].page, 0);
        assert_eq!(pages[44].page, 44);
        assert!(pages[0].url.contains("Page+1"));
    }

    #[tokio::test]
    async fn unknown_ids_fail_with_not_found() {
        let library = sample_library();
        assert_eq!(
            library.chapters(MangaId(99)).await,
            Err(ReaderError::MangaNotFound(MangaId(99)))
        );
        assert_eq!(
            library.chapter_pages(ChapterId(99)).await,
            Err(ReaderError::ChapterNotFound(ChapterId(99)))
        );
    }

    #[test]
    fn search_matches_title_and_author() {
        let library = sample_library();
        assert_eq!(library.search("oda").len(), 1);
        assert_eq!(library.search("titan")[0].title, "Attack on Titan");
        assert!(library.search("bleach").is_empty());
    }
}
