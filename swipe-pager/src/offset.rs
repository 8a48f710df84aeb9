//! Offset resolver: translation of the materialized page strip.
//!
//! The strip is laid out centered in the viewport. The resolver shifts it so
//! the focused slot sits in the middle, adds the live drag offset and the
//! alignment offset, then clamps the result so finite pagers can only
//! overshoot their first and last page by the bounce allowance.

/// Everything the resolver needs for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetInput {
    /// Number of materialized pages.
    pub window_len: usize,
    /// Slot of the focused page inside the window.
    pub focused_slot: usize,
    /// Distance between the centers of neighbouring pages.
    pub page_distance: f32,
    /// Drag offset plus the programmatic page offset, see [`total_offset`].
    pub total_offset: f32,
    /// Offset contributed by the main-axis alignment.
    pub alignment_offset: f32,
    /// Page the drag currently points at.
    pub current_page: usize,
    /// Number of pages in the backing sequence.
    pub total_pages: usize,
    /// Whether the pager wraps around.
    pub looping: bool,
    /// Whether a small overshoot past the first and last page is allowed.
    pub bounces: bool,
}

/// Allowed range of the strip translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetBounds {
    /// Smallest translation, reached when overshooting the last page.
    pub min: f32,
    /// Largest translation, reached when overshooting the first page.
    pub max: f32,
}

/// Converts a programmatic page offset into strip units.
pub fn content_offset(page_offset: f32, page_distance: f32) -> f32 {
    -page_offset * page_distance
}

/// Drag offset plus programmatic page offset.
pub fn total_offset(dragging_offset: f32, page_offset: f32, page_distance: f32) -> f32 {
    dragging_offset + content_offset(page_offset, page_distance)
}

/// Strip translation before clamping.
pub fn unclamped_offset(input: &OffsetInput) -> f32 {
    let distance = input.page_distance;
    (input.window_len as f32 / 2.0 - input.focused_slot as f32) * distance - distance / 2.0
        + input.total_offset
        + input.alignment_offset
}

/// Bounds of the strip translation. Loop mode, and any page other than the
/// first or last, is unbounded.
pub fn offset_bounds(input: &OffsetInput) -> OffsetBounds {
    let distance = input.page_distance;
    let half_window = input.window_len as f32 / 2.0;
    let allowance = if input.bounces {
        distance / 4.0
    } else {
        distance / 2.0
    };

    let max = if !input.looping && input.current_page == 0 {
        half_window * distance - allowance + input.alignment_offset
    } else {
        f32::INFINITY
    };
    let last_page = input.total_pages.saturating_sub(1);
    let min = if !input.looping && input.current_page == last_page {
        -half_window * distance + allowance + input.alignment_offset
    } else {
        f32::NEG_INFINITY
    };
    OffsetBounds { min, max }
}

/// Clamped strip translation.
pub fn resolve_offset(input: &OffsetInput) -> f32 {
    let bounds = offset_bounds(input);
    unclamped_offset(input).min(bounds.max).max(bounds.min)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn input(window_len: usize, focused_slot: usize, current_page: usize) -> OffsetInput {
        OffsetInput {
            window_len,
            focused_slot,
            page_distance: 100.0,
            total_offset: 0.0,
            alignment_offset: 0.0,
            current_page,
            total_pages: 20,
            looping: false,
            bounces: true,
        }
    }

    #[test]
    fn test_resting_offset_recovers_focused_slot() {
        for (len, slot, page) in [(5, 2, 10), (3, 0, 0), (3, 2, 19), (1, 0, 0)] {
            let input = input(len, slot, page);
            let offset = resolve_offset(&input);
            let recovered = len as f32 / 2.0 - 0.5 - offset / input.page_distance;
            assert_abs_diff_eq!(recovered, slot as f32, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_first_page_bounce_allowance() {
        let mut bounce = input(3, 0, 0);
        bounce.total_offset = 80.0;
        // Resting at 100, may overshoot by a quarter page.
        assert_abs_diff_eq!(resolve_offset(&bounce), 125.0);

        bounce.bounces = false;
        assert_abs_diff_eq!(resolve_offset(&bounce), 100.0);
    }

    #[test]
    fn test_last_page_bounce_allowance() {
        let mut last = input(3, 2, 19);
        last.total_offset = -80.0;
        // Resting at -100, may overshoot by a quarter page.
        assert_abs_diff_eq!(resolve_offset(&last), -125.0);

        last.bounces = false;
        assert_abs_diff_eq!(resolve_offset(&last), -100.0);
    }

    #[test]
    fn test_looping_is_unbounded() {
        let mut looping = input(5, 2, 0);
        looping.looping = true;
        looping.total_offset = 400.0;
        // Resting at 0, the drag is passed through untouched.
        assert_abs_diff_eq!(resolve_offset(&looping), 400.0);
        let bounds = offset_bounds(&looping);
        assert!(bounds.max.is_infinite() && bounds.min.is_infinite());
    }

    #[test]
    fn test_content_offset() {
        assert_abs_diff_eq!(content_offset(2.6, 100.0), -260.0);
        assert_abs_diff_eq!(total_offset(-10.0, 0.5, 100.0), -60.0);
    }
}
