//! Window selector: decides which pages are materialized at once.
//!
//! Lazy loading keeps an odd number of pages resident around the focused
//! one, enough to cover `recycling_ratio` viewports along the scroll axis.
//! Loop mode walks the window forward from its lower bound and wraps around
//! the end of the sequence.
use smallvec::SmallVec;

/// Number of window slots stored inline before spilling to the heap.
const INLINE_SLOTS: usize = 8;

/// How many pages are kept materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentLoadingPolicy {
    /// Materialize every page.
    Eager,
    /// Materialize enough pages to cover `recycling_ratio` viewports.
    Lazy {
        /// Multiplier of the viewport length kept resident. Must be positive.
        recycling_ratio: usize,
    },
}

impl Default for ContentLoadingPolicy {
    fn default() -> Self {
        Self::Lazy { recycling_ratio: 5 }
    }
}

/// Number of pages the window may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowBudget {
    /// Every page is materialized.
    All,
    /// At most this many pages are materialized.
    Count(usize),
}

/// Computes the window budget for the current layout.
///
/// Lazy budgets are forced to an odd count so the focused page sits in the
/// middle slot: an even count grows by one when the ratio is even and
/// shrinks by one otherwise. Loop mode additionally caps the count at
/// `total_pages`, staying odd.
pub fn recycling_budget(
    policy: ContentLoadingPolicy,
    total_pages: usize,
    looping: bool,
    viewport_main: f32,
    page_distance: f32,
) -> WindowBudget {
    let ratio = match policy {
        ContentLoadingPolicy::Eager => return WindowBudget::All,
        ContentLoadingPolicy::Lazy { recycling_ratio } => recycling_ratio.max(1),
    };
    if !(page_distance > f32::EPSILON) || total_pages == 0 {
        return WindowBudget::Count(0);
    }

    let mut count = (ratio as f32 * viewport_main / page_distance).ceil().max(0.0) as usize;
    if count % 2 == 0 {
        count = if ratio % 2 == 0 {
            count + 1
        } else {
            count.saturating_sub(1)
        };
    }

    if !looping {
        return WindowBudget::Count(count);
    }
    count = count.min(total_pages);
    if count % 2 == 0 {
        count -= 1;
    }
    WindowBudget::Count(count)
}

/// Ordered set of materialized page indices, lowest offset first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageWindow {
    indices: SmallVec<[usize; INLINE_SLOTS]>,
    focused_slot: usize,
    looping: bool,
}

impl PageWindow {
    /// Selects the window around `focused` out of `total_pages` pages.
    ///
    /// The window always contains `focused` when the sequence is not empty,
    /// and never holds more than `total_pages` entries.
    pub fn select(focused: usize, total_pages: usize, looping: bool, budget: WindowBudget) -> Self {
        if total_pages == 0 {
            return Self {
                looping,
                ..Self::default()
            };
        }
        let focused = if looping {
            focused % total_pages
        } else {
            focused.min(total_pages - 1)
        };

        if looping {
            let count = match budget {
                WindowBudget::All => total_pages,
                WindowBudget::Count(count) => count.clamp(1, total_pages),
            };
            let half = count / 2;
            let lower = (focused + total_pages - half % total_pages) % total_pages;
            let indices = (0..count)
                .map(|offset| (lower + offset) % total_pages)
                .collect();
            return Self {
                indices,
                focused_slot: half,
                looping,
            };
        }

        let (lower, upper) = match budget {
            WindowBudget::All => (0, total_pages - 1),
            WindowBudget::Count(count) => {
                let half = count / 2;
                (
                    focused.saturating_sub(half),
                    focused.saturating_add(half).min(total_pages - 1),
                )
            }
        };
        Self {
            indices: (lower..=upper).collect(),
            focused_slot: focused - lower,
            looping,
        }
    }

    /// Page indices in slot order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of materialized pages.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` when nothing is materialized.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Slot holding the focused page.
    pub fn focused_slot(&self) -> usize {
        self.focused_slot
    }

    /// Returns `true` if the page in `slot` only exists to let the loop
    /// re-center without a visible pop, and should be rendered invisible.
    ///
    /// Edge hiding needs at least three pages and is suspended while the
    /// user is dragging.
    pub fn is_edge_slot(
        &self,
        slot: usize,
        total_pages: usize,
        pending_increment: usize,
        dragging: bool,
    ) -> bool {
        if !self.looping || total_pages < 3 || dragging || slot >= self.len() {
            return false;
        }
        let limit = pending_increment.max(1);
        slot < limit || slot + limit >= self.len()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn lazy(ratio: usize) -> ContentLoadingPolicy {
        ContentLoadingPolicy::Lazy {
            recycling_ratio: ratio,
        }
    }

    #[test]
    fn test_budget_is_odd() {
        assert_eq!(
            recycling_budget(lazy(5), 20, false, 300.0, 300.0),
            WindowBudget::Count(5)
        );
        // 4 viewports -> 4 pages, even ratio grows to 5.
        assert_eq!(
            recycling_budget(lazy(4), 20, false, 300.0, 300.0),
            WindowBudget::Count(5)
        );
        // 3 viewports of 2 pages -> 6 pages, odd ratio shrinks to 5.
        assert_eq!(
            recycling_budget(lazy(3), 20, false, 300.0, 150.0),
            WindowBudget::Count(5)
        );
    }

    #[test]
    fn test_budget_caps_at_total_when_looping() {
        assert_eq!(
            recycling_budget(lazy(5), 4, true, 300.0, 100.0),
            WindowBudget::Count(3)
        );
        assert_eq!(
            recycling_budget(ContentLoadingPolicy::Eager, 4, true, 300.0, 100.0),
            WindowBudget::All
        );
        assert_eq!(
            recycling_budget(lazy(5), 4, true, 300.0, 0.0),
            WindowBudget::Count(0)
        );
    }

    #[test]
    fn test_finite_window() {
        let window = PageWindow::select(0, 20, false, WindowBudget::Count(5));
        assert_eq!(window.indices(), &[0, 1, 2]);
        assert_eq!(window.focused_slot(), 0);

        let window = PageWindow::select(10, 20, false, WindowBudget::Count(5));
        assert_eq!(window.indices(), &[8, 9, 10, 11, 12]);
        assert_eq!(window.focused_slot(), 2);

        let window = PageWindow::select(19, 20, false, WindowBudget::Count(5));
        assert_eq!(window.indices(), &[17, 18, 19]);
        assert_eq!(window.focused_slot(), 2);
    }

    #[test]
    fn test_eager_window_holds_everything() {
        let window = PageWindow::select(7, 10, false, WindowBudget::All);
        assert_eq!(window.len(), 10);
        assert_eq!(window.focused_slot(), 7);
    }

    #[test]
    fn test_loop_window_wraps() {
        let window = PageWindow::select(0, 20, true, WindowBudget::Count(5));
        assert_eq!(window.indices(), &[18, 19, 0, 1, 2]);
        assert_eq!(window.focused_slot(), 2);

        let window = PageWindow::select(19, 20, true, WindowBudget::Count(5));
        assert_eq!(window.indices(), &[17, 18, 19, 0, 1]);
    }

    #[test]
    fn test_empty_collection() {
        let window = PageWindow::select(3, 0, true, WindowBudget::Count(5));
        assert!(window.is_empty());
        let window = PageWindow::select(3, 0, false, WindowBudget::All);
        assert!(window.is_empty());
    }

    #[test]
    fn test_edge_slots() {
        let window = PageWindow::select(0, 20, true, WindowBudget::Count(5));
        assert!(window.is_edge_slot(0, 20, 0, false));
        assert!(window.is_edge_slot(4, 20, 0, false));
        assert!(!window.is_edge_slot(1, 20, 0, false));
        assert!(window.is_edge_slot(1, 20, 2, false));
        assert!(!window.is_edge_slot(0, 20, 0, true));
        // Fewer than three pages: nothing to hide.
        let small = PageWindow::select(0, 2, true, WindowBudget::All);
        assert!(!small.is_edge_slot(0, 2, 0, false));
        // Finite pagers never hide edges.
        let finite = PageWindow::select(0, 20, false, WindowBudget::Count(5));
        assert!(!finite.is_edge_slot(0, 20, 0, false));
    }

    proptest! {
        #[test]
        fn window_contains_focused_and_fits(
            total in 1usize..60,
            focused in 0usize..80,
            count in 0usize..40,
            looping: bool,
            eager: bool,
        ) {
            let budget = if eager { WindowBudget::All } else { WindowBudget::Count(count) };
            let window = PageWindow::select(focused, total, looping, budget);
            let expected = if looping { focused % total } else { focused.min(total - 1) };
            prop_assert!(window.len() <= total);
            prop_assert_eq!(window.indices()[window.focused_slot()], expected);
            prop_assert!(window.indices().iter().all(|&index| index < total));
        }
    }
}
