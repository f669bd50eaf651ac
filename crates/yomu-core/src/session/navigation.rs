impl<S, P> ReaderSession<S, P>
where
    S: MangaCatalog + ChapterImageSource,
    P: PositionStore,
{
    /// Advance one page, crossing into the next chapter at the boundary.
    ///
    /// In vertical mode the manga reads as one continuous strip, so "next"
    /// always means the next chapter; intra-chapter position is owned by the
    /// viewport tracker there.
    pub async fn next_page(&mut self) -> Result<ScrollRequest, ReaderError> {
        match self.mode {
            ReadingMode::Single => {
                if self.can_go_next_page() {
                    self.set_current_page(self.current_page + 1);
                    Ok(ScrollRequest::Top)
                } else {
                    self.next_chapter().await
                }
            }
            ReadingMode::Vertical => self.next_chapter().await,
        }
    }

    /// Step back one page. Crossing a chapter boundary lands on the last
    /// page of the previous chapter, unlike the explicit
    /// [`Self::prev_chapter`] intent which starts it from page 0.
    pub async fn prev_page(&mut self) -> Result<ScrollRequest, ReaderError> {
        match self.mode {
            ReadingMode::Single => {
                if self.can_go_prev_page() {
                    self.set_current_page(self.current_page - 1);
                    Ok(ScrollRequest::Top)
                } else if self.can_go_prev_chapter() {
                    let scroll = self.prev_chapter().await?;
                    if !self.pages.is_empty() {
                        self.set_current_page(self.pages.len() - 1);
                    }
                    Ok(scroll)
                } else {
                    debug!("reader-nav: at the first page of the first chapter");
                    Ok(ScrollRequest::None)
                }
            }
            ReadingMode::Vertical => self.prev_chapter().await,
        }
    }

    /// Jump to a page of the current chapter. Unknown indices are ignored.
    pub fn go_to_page(&mut self, page: usize) -> ScrollRequest {
        if page >= self.pages.len() {
            debug!(
                "reader-nav: go-to-page {page} ignored (total {})",
                self.pages.len()
            );
            return ScrollRequest::None;
        }

        self.set_current_page(page);
        match self.mode {
            ReadingMode::Single => ScrollRequest::None,
            ReadingMode::Vertical => {
                // The programmatic scroll re-enters the observer; swallow
                // that batch so it cannot fight the jump.
                self.tracker.suppress_next(1);
                ScrollRequest::ToPage(page)
            }
        }
    }

    /// Cycle the reading mode in fixed order, keeping the visual position:
    /// entering vertical scrolls to the current page, entering single
    /// scrolls back to the top.
    pub fn toggle_reading_mode(&mut self) -> ScrollRequest {
        let mode = self.mode.toggled();
        self.set_reading_mode(mode);
        match mode {
            ReadingMode::Vertical if !self.pages.is_empty() => {
                self.tracker.suppress_next(1);
                ScrollRequest::ToPage(self.current_page)
            }
            ReadingMode::Vertical | ReadingMode::Single => ScrollRequest::Top,
        }
    }

    /// Load the following chapter; no-op at the end of the list.
    pub async fn next_chapter(&mut self) -> Result<ScrollRequest, ReaderError> {
        let Some(index) = self.chapter_index() else {
            return Ok(ScrollRequest::None);
        };
        let Some(next) = self.chapters.get(index + 1) else {
            debug!("reader-nav: already at the last chapter");
            return Ok(ScrollRequest::None);
        };

        let id = next.id;
        self.load_chapter(id).await?;
        Ok(ScrollRequest::Top)
    }

    /// Load the preceding chapter; no-op at the start of the list.
    pub async fn prev_chapter(&mut self) -> Result<ScrollRequest, ReaderError> {
        let Some(index) = self.chapter_index() else {
            return Ok(ScrollRequest::None);
        };
        if index == 0 {
            debug!("reader-nav: already at the first chapter");
            return Ok(ScrollRequest::None);
        }

        let id = self.chapters[index - 1].id;
        self.load_chapter(id).await?;
        Ok(ScrollRequest::Top)
    }
}
