//! Page state: the focused index plus the telemetry of the drag in progress.
use tracing::trace;

use crate::gesture::DragSample;

/// An update to perform on the focused index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageUpdate {
    /// Increase the index by one.
    Next,
    /// Decrease the index by one.
    Previous,
    /// Move to the first page.
    MoveToFirst,
    /// Move to the last page.
    MoveToLast,
    /// Move by the given signed amount.
    Move(isize),
    /// Move to the given index.
    New(usize),
}

/// Mutable paging state owned by a single pager.
///
/// `index` is always a valid index: clamped to `0..total_pages` for finite
/// pagers, reduced modulo `total_pages` in loop mode, and pinned to zero
/// while the collection is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    index: usize,
    total_pages: usize,
    looping: bool,
    dragging_offset: f32,
    dragging_velocity: f32,
    last_sample: Option<DragSample>,
    page_increment: usize,
}

impl PageState {
    /// Creates a state focused on `initial_page` out of `total_pages`.
    pub fn new(initial_page: usize, total_pages: usize, looping: bool) -> Self {
        let mut state = Self {
            index: 0,
            total_pages,
            looping,
            dragging_offset: 0.0,
            dragging_velocity: 0.0,
            last_sample: None,
            page_increment: 0,
        };
        state.index = state.resolve(initial_page as isize);
        state
    }

    /// Focused page index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of pages in the backing sequence.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Whether the pager wraps around.
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Signed displacement of the drag in progress; zero when idle.
    pub fn dragging_offset(&self) -> f32 {
        self.dragging_offset
    }

    /// Signed velocity measured between the last two drag samples.
    pub fn dragging_velocity(&self) -> f32 {
        self.dragging_velocity
    }

    /// Last sample fed to the drag tracker.
    pub fn last_sample(&self) -> Option<DragSample> {
        self.last_sample
    }

    /// Magnitude of the page change committed last, until its transition
    /// settles.
    pub fn page_increment(&self) -> usize {
        self.page_increment
    }

    /// Maps a raw, possibly out-of-range index onto a valid one.
    pub fn resolve(&self, raw: isize) -> usize {
        if self.total_pages == 0 {
            return 0;
        }
        let total = self.total_pages as isize;
        if self.looping {
            raw.rem_euclid(total) as usize
        } else {
            raw.clamp(0, total - 1) as usize
        }
    }

    /// Index `update` would move to, without applying it.
    pub fn target(&self, update: PageUpdate) -> usize {
        let current = self.index as isize;
        let raw = match update {
            PageUpdate::Next => current + 1,
            PageUpdate::Previous => current - 1,
            PageUpdate::MoveToFirst => 0,
            PageUpdate::MoveToLast => self.total_pages as isize - 1,
            PageUpdate::Move(increment) => current.saturating_add(increment),
            PageUpdate::New(index) => isize::try_from(index).unwrap_or(isize::MAX),
        };
        self.resolve(raw)
    }

    /// Applies `update` and returns whether the index changed.
    ///
    /// Ignored while the collection is empty.
    pub fn update(&mut self, update: PageUpdate) -> bool {
        if self.total_pages == 0 {
            return false;
        }
        let target = self.target(update);
        let changed = target != self.index;
        self.index = target;
        changed
    }

    /// Replaces the page count, re-clamping the focused index.
    pub fn set_total_pages(&mut self, total_pages: usize) {
        self.total_pages = total_pages;
        self.index = self.resolve(self.index as isize);
    }

    /// Switches loop mode, re-applying the clamp/wrap rule.
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
        self.index = self.resolve(self.index as isize);
    }

    /// Shortest number of pages between the focused index and `target`.
    pub fn distance_to(&self, target: usize) -> usize {
        let direct = self.index.abs_diff(target);
        if self.looping && self.total_pages > 0 {
            direct.min(self.total_pages - direct)
        } else {
            direct
        }
    }

    pub(crate) fn record_sample(&mut self, sample: DragSample) {
        self.last_sample = Some(sample);
    }

    pub(crate) fn record_drag(&mut self, offset: f32, velocity: Option<f32>, sample: DragSample) {
        trace!(offset, ?velocity, "drag sample applied");
        self.dragging_offset = offset;
        if let Some(velocity) = velocity {
            self.dragging_velocity = velocity;
        }
        self.last_sample = Some(sample);
    }

    pub(crate) fn reset_drag(&mut self) {
        self.dragging_offset = 0.0;
        self.dragging_velocity = 0.0;
        self.last_sample = None;
    }

    /// Ends the drag and focuses `new_page`, remembering the increment until
    /// the transition settles.
    pub(crate) fn commit(&mut self, new_page: usize, increment: usize) {
        self.reset_drag();
        self.page_increment = increment;
        self.index = self.resolve(new_page as isize);
    }

    pub(crate) fn set_page_increment(&mut self, increment: usize) {
        self.page_increment = increment;
    }

    pub(crate) fn take_page_increment(&mut self) -> usize {
        std::mem::take(&mut self.page_increment)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_negative_index_clamps_to_zero() {
        let state = PageState::new(0, 10, false);
        assert_eq!(state.resolve(-4), 0);
    }

    #[test]
    fn test_index_too_big_clamps_to_last() {
        let state = PageState::new(12, 10, false);
        assert_eq!(state.index(), 9);
    }

    #[test]
    fn test_updates() {
        let mut state = PageState::new(0, 10, false);
        assert!(state.update(PageUpdate::Next));
        assert_eq!(state.index(), 1);
        assert!(state.update(PageUpdate::Previous));
        assert_eq!(state.index(), 0);
        assert!(!state.update(PageUpdate::Previous));
        assert!(state.update(PageUpdate::MoveToLast));
        assert_eq!(state.index(), 9);
        assert!(state.update(PageUpdate::MoveToFirst));
        assert!(state.update(PageUpdate::New(4)));
        assert_eq!(state.index(), 4);
        assert!(state.update(PageUpdate::Move(-2)));
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_loop_wraps() {
        let mut state = PageState::new(0, 20, true);
        assert!(state.update(PageUpdate::Previous));
        assert_eq!(state.index(), 19);
        assert!(state.update(PageUpdate::Move(22)));
        assert_eq!(state.index(), 1);
        assert_eq!(state.distance_to(19), 2);
    }

    #[test]
    fn test_shrinking_collection_reclamps() {
        let mut state = PageState::new(8, 10, false);
        state.set_total_pages(5);
        assert_eq!(state.index(), 4);
        state.set_total_pages(0);
        assert_eq!(state.index(), 0);
        assert!(!state.update(PageUpdate::New(3)));
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_commit_resets_drag() {
        let mut state = PageState::new(3, 10, false);
        let sample = DragSample::new(glam::Vec2::new(10.0, 0.0), std::time::Duration::ZERO);
        state.record_drag(-60.0, Some(-300.0), sample);
        state.commit(4, 1);
        assert_eq!(state.dragging_offset(), 0.0);
        assert_eq!(state.dragging_velocity(), 0.0);
        assert_eq!(state.last_sample(), None);
        assert_eq!(state.page_increment(), 1);
        assert_eq!(state.take_page_increment(), 1);
        assert_eq!(state.page_increment(), 0);
    }

    proptest! {
        #[test]
        fn index_stays_valid(
            total in 0usize..40,
            looping: bool,
            moves in proptest::collection::vec(-50isize..50, 0..30),
        ) {
            let mut state = PageState::new(0, total, looping);
            for step in moves {
                state.update(PageUpdate::Move(step));
                if total == 0 {
                    prop_assert_eq!(state.index(), 0);
                } else {
                    prop_assert!(state.index() < total);
                }
            }
        }
    }
}
