/// Minimum share of a page element that must be visible before the tracker
/// treats it as the current page.
const VISIBILITY_THRESHOLD: f32 = 0.5;

/// Visibility of one page element, as reported by the host's observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageVisibility {
    /// 0-based page index of the observed element.
    pub page: usize,
    /// Fraction of the element's area inside the viewport, `0.0..=1.0`.
    pub ratio: f32,
}

/// Policy when several pages cross the threshold in one batch.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TieBreak {
    /// Accept the last intersecting entry in delivery order.
    #[default]
    LastReported,
    /// Accept the lowest page index among the intersecting entries.
    Topmost,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TrackerState {
    Detached,
    Observing { page_count: usize },
}

/// Tracks which page element currently dominates the viewport.
///
/// Detached until a chapter is loaded in vertical mode; re-initialized on
/// every chapter or mode change because the observed elements change.
#[derive(Clone, Copy, Debug)]
struct ViewportTracker {
    state: TrackerState,
    suppressed: u32,
    tie_break: TieBreak,
}

impl ViewportTracker {
    fn new(tie_break: TieBreak) -> Self {
        Self {
            state: TrackerState::Detached,
            suppressed: 0,
            tie_break,
        }
    }

    fn attach(&mut self, page_count: usize) {
        self.state = TrackerState::Observing { page_count };
        self.suppressed = 0;
    }

    fn detach(&mut self) {
        self.state = TrackerState::Detached;
        self.suppressed = 0;
    }

    fn is_observing(&self) -> bool {
        matches!(self.state, TrackerState::Observing { .. })
    }

    /// Ignore the next `batches` notification batches. Used while a
    /// programmatic scroll is in flight.
    fn suppress_next(&mut self, batches: u32) {
        self.suppressed = self.suppressed.saturating_add(batches);
    }

    /// Pick the page a notification batch makes current, if any.
    fn select(&mut self, batch: &[PageVisibility]) -> Option<usize> {
        let TrackerState::Observing { page_count } = self.state else {
            return None;
        };
        if self.suppressed > 0 {
            self.suppressed -= 1;
            return None;
        }

        let intersecting = batch
            .iter()
            .filter(|entry| entry.ratio >= VISIBILITY_THRESHOLD && entry.page < page_count)
            .map(|entry| entry.page);
        match self.tie_break {
            TieBreak::LastReported => intersecting.last(),
            TieBreak::Topmost => intersecting.min(),
        }
    }
}

impl<S, P> ReaderSession<S, P>
where
    S: MangaCatalog + ChapterImageSource,
    P: PositionStore,
{
    /// Feed one observer notification batch.
    ///
    /// Only meaningful in vertical mode; single-mode batches are dropped.
    /// Accepted indices go through [`Self::set_current_page`], so tracker
    /// updates and explicit navigation stay serialized.
    pub fn observe_visibility(&mut self, batch: &[PageVisibility]) {
        if self.mode != ReadingMode::Vertical {
            return;
        }
        if let Some(page) = self.tracker.select(batch) {
            self.set_current_page(page);
        }
    }

    /// True while the tracker is watching page elements.
    pub fn is_tracking_viewport(&self) -> bool {
        self.tracker.is_observing()
    }

    fn reattach_tracker(&mut self) {
        match self.mode {
            ReadingMode::Vertical => self.tracker.attach(self.pages.len()),
            ReadingMode::Single => self.tracker.detach(),
        }
    }
}
