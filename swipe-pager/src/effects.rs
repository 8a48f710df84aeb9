//! Interactive effects: per-page scale, opacity and 3D rotation derived from
//! the fractional focus position of the drag in progress.
use glam::Vec3;

/// Axis pages rotate around when the 3D rotation effect is enabled.
pub const ROTATION_AXIS: Vec3 = Vec3::Y;

/// Fractional focus position of the pager.
///
/// Idle, this is the focused index. While dragging it moves continuously
/// towards the page being revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusProgress {
    position: f32,
    dragging: bool,
    total_pages: usize,
    looping: bool,
}

impl FocusProgress {
    /// Progress of a pager focused on `page` displaced by `total_offset`.
    pub fn new(
        page: usize,
        total_offset: f32,
        page_distance: f32,
        total_pages: usize,
        looping: bool,
    ) -> Self {
        let dragging = total_offset != 0.0 && page_distance > f32::EPSILON;
        let position = if dragging {
            page as f32 - total_offset / page_distance
        } else {
            page as f32
        };
        Self {
            position,
            dragging,
            total_pages,
            looping,
        }
    }

    /// Fractional page index currently in focus.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Returns `true` while the pager is displaced from its focused page.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Signed distance from `index` to the focus position. Loop mode takes
    /// the shortest way around.
    pub fn distance_to(&self, index: usize) -> f32 {
        let difference = self.position - index as f32;
        if self.looping && self.total_pages > 0 {
            let total = self.total_pages as f32;
            (difference + total / 2.0).rem_euclid(total) - total / 2.0
        } else {
            difference
        }
    }
}

/// Scale of the page at `index`.
///
/// `shrink` is the scale of pages a full page away from the focus; pages
/// between interpolate linearly up to 1.
pub fn scale(progress: &FocusProgress, index: usize, shrink: f32) -> f32 {
    let distance = progress.distance_to(index).abs().min(1.0);
    1.0 - (1.0 - shrink) * distance
}

/// Opacity of the page at `index`, falling off by `decrement` per page.
pub fn opacity(progress: &FocusProgress, index: usize, decrement: Option<f32>) -> f32 {
    let Some(decrement) = decrement else {
        return 1.0;
    };
    (1.0 - progress.distance_to(index).abs() * decrement).clamp(0.0, 1.0)
}

/// Rotation of the page at `index` around [`ROTATION_AXIS`], in degrees.
pub fn rotation_degrees(progress: &FocusProgress, index: usize, step: f32, enabled: bool) -> f32 {
    if !enabled {
        return 0.0;
    }
    progress.distance_to(index) * step
}

/// Rotation axis; zero when the effect is disabled.
pub fn rotation_axis(enabled: bool) -> Vec3 {
    if enabled { ROTATION_AXIS } else { Vec3::ZERO }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_idle_scale() {
        let progress = FocusProgress::new(3, 0.0, 100.0, 10, false);
        assert!(!progress.is_dragging());
        assert_eq!(scale(&progress, 3, 0.8), 1.0);
        assert_abs_diff_eq!(scale(&progress, 4, 0.8), 0.8, epsilon = 1e-5);
        assert_abs_diff_eq!(scale(&progress, 7, 0.8), 0.8, epsilon = 1e-5);
    }

    #[test]
    fn test_scale_interpolates_while_dragging() {
        let progress = FocusProgress::new(3, -50.0, 100.0, 10, false);
        assert_abs_diff_eq!(progress.position(), 3.5, epsilon = 1e-5);
        assert_abs_diff_eq!(scale(&progress, 3, 0.8), 0.9, epsilon = 1e-5);
        assert_abs_diff_eq!(scale(&progress, 4, 0.8), 0.9, epsilon = 1e-5);
        assert_abs_diff_eq!(scale(&progress, 5, 0.8), 0.8, epsilon = 1e-5);

        let progress = FocusProgress::new(3, 25.0, 100.0, 10, false);
        assert_abs_diff_eq!(scale(&progress, 3, 0.8), 0.95, epsilon = 1e-5);
        assert_abs_diff_eq!(scale(&progress, 2, 0.8), 0.85, epsilon = 1e-5);
    }

    #[test]
    fn test_opacity() {
        let progress = FocusProgress::new(3, -50.0, 100.0, 10, false);
        assert_eq!(opacity(&progress, 5, None), 1.0);
        assert_abs_diff_eq!(opacity(&progress, 5, Some(0.2)), 0.7, epsilon = 1e-5);
        assert_abs_diff_eq!(opacity(&progress, 9, Some(0.5)), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_rotation() {
        let idle = FocusProgress::new(3, 0.0, 100.0, 10, false);
        assert_abs_diff_eq!(rotation_degrees(&idle, 4, 20.0, true), -20.0, epsilon = 1e-5);
        assert_abs_diff_eq!(rotation_degrees(&idle, 2, 20.0, true), 20.0, epsilon = 1e-5);
        assert_eq!(rotation_degrees(&idle, 2, 20.0, false), 0.0);

        let dragging = FocusProgress::new(3, -50.0, 100.0, 10, false);
        assert_abs_diff_eq!(rotation_degrees(&dragging, 4, 20.0, true), -10.0, epsilon = 1e-5);
        assert_eq!(rotation_axis(true), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(rotation_axis(false), Vec3::ZERO);
    }

    #[test]
    fn test_loop_uses_circular_distance() {
        let progress = FocusProgress::new(0, 50.0, 100.0, 20, true);
        assert_abs_diff_eq!(progress.distance_to(19), 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(scale(&progress, 19, 0.8), 0.9, epsilon = 1e-5);

        let idle = FocusProgress::new(0, 0.0, 100.0, 20, true);
        assert_abs_diff_eq!(rotation_degrees(&idle, 19, 20.0, true), 20.0, epsilon = 1e-5);
        assert_abs_diff_eq!(rotation_degrees(&idle, 1, 20.0, true), -20.0, epsilon = 1e-5);
    }
}
