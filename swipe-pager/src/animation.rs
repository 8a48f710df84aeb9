//! Describes the transition a host should animate after a drag commits.
//!
//! The engine never runs animations itself. Every commit hands the host a
//! [`PagingAnimation`] and a speed multiplier and the host drives its own
//! curve, reporting back through [`crate::pager::Pager::complete_transition`].
use std::time::Duration;

/// Upper bound applied to the speed-up of multi-page transitions.
const MAX_SPEED_DIVISOR: f32 = 4.0;

/// Curve and duration of a page transition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PagingAnimation {
    /// Ease-out curve. Single pagination uses this by default.
    Standard {
        /// Length of the transition.
        duration: Duration,
    },
    /// Very fast start and slow end, cubic-bezier `(0.2, 1, 0.9, 1)`.
    /// Multi-page commits use this by default.
    Steep {
        /// Length of the transition.
        duration: Duration,
    },
}

impl PagingAnimation {
    /// Ease-out over 350ms.
    pub const STANDARD: Self = Self::Standard {
        duration: Duration::from_millis(350),
    };
    /// Steep curve over 200ms.
    pub const STEEP: Self = Self::Steep {
        duration: Duration::from_millis(200),
    };

    /// Returns the duration of the transition.
    pub fn duration(self) -> Duration {
        match self {
            Self::Standard { duration } | Self::Steep { duration } => duration,
        }
    }

    /// Cubic-bezier control points `(x1, y1, x2, y2)` of the curve.
    pub fn control_points(self) -> [f32; 4] {
        match self {
            Self::Standard { .. } => [0.0, 0.0, 0.58, 1.0],
            Self::Steep { .. } => [0.2, 1.0, 0.9, 1.0],
        }
    }
}

impl Default for PagingAnimation {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Summary of a finished drag, handed to custom animation selectors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragResult {
    /// Page focused when the drag ended.
    pub page: usize,
    /// Page the pager is about to commit to.
    pub new_page: usize,
    /// Dragging offset at release time.
    pub translation: f32,
    /// Last measured drag velocity.
    pub velocity: f32,
}

/// Picks the default animation and speed multiplier for a commit.
pub(crate) fn default_paging_animation(
    page_increment: usize,
    multiple_pagination: bool,
) -> (PagingAnimation, f32) {
    if multiple_pagination && page_increment > 1 {
        let speed = 1.0 / (page_increment as f32).min(MAX_SPEED_DIVISOR);
        (PagingAnimation::STEEP, speed)
    } else {
        (PagingAnimation::STANDARD, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_commit_uses_standard() {
        assert_eq!(
            default_paging_animation(1, false),
            (PagingAnimation::STANDARD, 1.0)
        );
        assert_eq!(
            default_paging_animation(3, false),
            (PagingAnimation::STANDARD, 1.0)
        );
        assert_eq!(
            default_paging_animation(1, true),
            (PagingAnimation::STANDARD, 1.0)
        );
    }

    #[test]
    fn test_multi_page_commit_is_steep_and_capped() {
        assert_eq!(default_paging_animation(2, true), (PagingAnimation::STEEP, 0.5));
        assert_eq!(default_paging_animation(9, true), (PagingAnimation::STEEP, 0.25));
    }

    #[test]
    fn test_durations() {
        assert_eq!(
            PagingAnimation::STANDARD.duration(),
            Duration::from_millis(350)
        );
        assert_eq!(PagingAnimation::STEEP.duration(), Duration::from_millis(200));
        assert_eq!(PagingAnimation::STEEP.control_points(), [0.2, 1.0, 0.9, 1.0]);
    }
}
