//! Drag gesture state machine and the commit decision.
//!
//! Samples arrive one at a time from the host. The machine turns them into a
//! signed drag offset on [`PageState`] and, when the gesture ends, decides
//! which page to settle on. All positions are first normalized so that `x`
//! runs along the scroll axis and grows in the swipe direction.
use std::time::Duration;

use glam::Vec2;
use tracing::trace;

use crate::{geometry::Orientation, page::PageState};

/// A single pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Pointer position in viewport coordinates.
    pub position: Vec2,
    /// Time of the sample, relative to any fixed origin.
    pub timestamp: Duration,
}

impl DragSample {
    /// Creates a sample at `position` taken at `timestamp`.
    pub fn new(position: Vec2, timestamp: Duration) -> Self {
        Self {
            position,
            timestamp,
        }
    }
}

/// Gesture events delivered by the host, strictly in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// The pointer went down.
    Began(DragSample),
    /// The pointer moved.
    Changed(DragSample),
    /// The pointer was lifted.
    Ended,
    /// The platform took the gesture away.
    Cancelled,
}

/// Phase of the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// A pointer is down but has not travelled the minimum distance yet.
    Pressed,
    /// Samples are moving the drag offset.
    Dragging,
    /// The gesture ended and its commit is being processed.
    Committing,
}

/// Direction pages move in when swiping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDirection {
    /// Swiping towards the start (left or up) reveals the next page.
    #[default]
    Forward,
    /// Swiping towards the end (right or down) reveals the next page.
    Reverse,
}

impl SwipeDirection {
    /// Sign applied to sample positions.
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }
}

/// Region where a drag may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeInteractionArea {
    /// Only on the frame of a materialized page.
    #[default]
    Page,
    /// Anywhere inside the viewport.
    AllAvailable,
}

/// Direction of a drag relative to the page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageDirection {
    /// Towards higher indices.
    Forward,
    /// Towards lower indices.
    Backward,
}

impl PageDirection {
    /// Direction implied by a total offset; `None` when not displaced.
    pub fn from_offset(total_offset: f32) -> Option<Self> {
        if total_offset < 0.0 {
            Some(Self::Forward)
        } else if total_offset > 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }
}

/// Layout and configuration the machine needs to process a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragContext {
    /// Scroll axis.
    pub orientation: Orientation,
    /// Swipe direction sign.
    pub swipe_direction: SwipeDirection,
    /// Flips offsets and velocities for right-to-left layouts.
    pub right_to_left: bool,
    /// Distance between page centers.
    pub page_distance: f32,
    /// Viewport extent along the scroll axis.
    pub viewport_main: f32,
    /// Raw pixels map to raw offset when set.
    pub multiple_pagination: bool,
    /// Max reveal of a neighbour, in pages, without multiple pagination.
    pub page_ratio: f32,
    /// Only backward-moving translations are accepted.
    pub drag_forward_only: bool,
    /// Travel required before a press turns into a drag.
    pub minimum_distance: f32,
    /// Half-width of the accepted cone around the scroll axis, in degrees.
    pub angle_tolerance_degrees: f32,
}

impl DragContext {
    fn local(&self, point: Vec2) -> Vec2 {
        self.orientation.normalize(point) * self.swipe_direction.sign()
    }

    fn layout_sign(&self) -> f32 {
        if self.right_to_left { -1.0 } else { 1.0 }
    }
}

/// What processing one sample produced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SampleOutcome {
    /// The press turned into a drag on this sample.
    pub began: bool,
    /// Drag progress in pages, when the offset moved.
    pub progress: Option<f32>,
}

/// Drag state machine.
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    phase: GesturePhase,
    origin: Option<DragSample>,
}

impl DragGesture {
    /// Current phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` while samples move the drag offset.
    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    /// Starts tracking a press. Presses arriving while a commit is processed
    /// are dropped.
    pub fn press(
        &mut self,
        sample: DragSample,
        context: &DragContext,
        state: &mut PageState,
    ) -> SampleOutcome {
        if self.phase == GesturePhase::Committing {
            trace!("press ignored while committing");
            return SampleOutcome::default();
        }
        state.reset_drag();
        self.origin = Some(sample);
        self.phase = GesturePhase::Pressed;
        self.change(sample, context, state)
    }

    /// Processes a pointer move.
    pub fn change(
        &mut self,
        sample: DragSample,
        context: &DragContext,
        state: &mut PageState,
    ) -> SampleOutcome {
        let Some(origin) = self.origin else {
            return SampleOutcome::default();
        };
        if !matches!(self.phase, GesturePhase::Pressed | GesturePhase::Dragging) {
            return SampleOutcome::default();
        }
        if !(context.page_distance > f32::EPSILON && context.viewport_main > f32::EPSILON) {
            return SampleOutcome::default();
        }

        let location = context.local(sample.position);
        let translation = location - context.local(origin.position);
        if self.phase == GesturePhase::Pressed && translation.length() < context.minimum_distance {
            return SampleOutcome::default();
        }
        if context.drag_forward_only && !(translation.x < 0.0) {
            return SampleOutcome::default();
        }

        let last = state.last_sample();
        if let Some(last) = last.filter(|last| sample.timestamp < last.timestamp) {
            trace!(
                timestamp = ?sample.timestamp,
                last = ?last.timestamp,
                "ignoring drag sample older than the last one"
            );
            return SampleOutcome::default();
        }

        // The first qualifying sample only seeds the tracker.
        if self.phase == GesturePhase::Pressed {
            self.phase = GesturePhase::Dragging;
            state.record_sample(sample);
            return SampleOutcome {
                began: true,
                progress: None,
            };
        }

        let last_location = last.map_or(location, |last| context.local(last.position));
        let delta = location - last_location;
        if !is_along_main_axis(delta, context.angle_tolerance_degrees) {
            state.record_sample(sample);
            return SampleOutcome::default();
        }

        // A drag that has not moved yet must start along the scroll axis.
        if state.dragging_offset() == 0.0 && !(translation.x.abs() > translation.y.abs()) {
            return SampleOutcome::default();
        }

        let ratio = if context.multiple_pagination {
            1.0
        } else {
            context.page_distance / context.viewport_main
        };
        let increment = delta.x * ratio * context.layout_sign();
        let velocity = last
            .map(|last| (sample.timestamp - last.timestamp).as_secs_f32())
            .filter(|elapsed| *elapsed > 0.0)
            .map(|elapsed| increment / elapsed);

        let mut offset = state.dragging_offset() + increment;
        if !context.multiple_pagination {
            let limit = context.page_ratio * context.page_distance;
            offset = offset.clamp(-limit, limit);
        }
        state.record_drag(offset, velocity, sample);
        SampleOutcome {
            began: false,
            progress: Some(-offset / context.page_distance),
        }
    }

    /// Ends the gesture. Returns `true` when a drag was in progress and its
    /// commit must now be processed.
    pub fn end(&mut self) -> bool {
        self.origin = None;
        if self.phase == GesturePhase::Dragging {
            self.phase = GesturePhase::Committing;
            true
        } else {
            self.phase = GesturePhase::Idle;
            false
        }
    }

    /// Marks the commit as processed.
    pub fn finish(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}

/// Angle of `delta` in degrees, in `[0, 360)`. A zero vector has angle zero.
pub fn swipe_angle(delta: Vec2) -> f32 {
    if delta == Vec2::ZERO {
        return 0.0;
    }
    delta.y.atan2(delta.x).to_degrees().rem_euclid(360.0)
}

/// Returns `true` if `delta` points within `tolerance` degrees of the scroll
/// axis, in either direction.
pub fn is_along_main_axis(delta: Vec2, tolerance: f32) -> bool {
    let degrees = swipe_angle(delta);
    degrees > 360.0 - tolerance
        || degrees < tolerance
        || (degrees > 180.0 - tolerance && degrees < 180.0 + tolerance)
}

/// Page a drag of `total_offset` points at.
///
/// Whole pages crossed always count. The fraction of the page in progress
/// only tips over to the next page once it reaches `sensitivity`.
pub fn current_page(
    page: usize,
    total_pages: usize,
    looping: bool,
    total_offset: f32,
    page_distance: f32,
    sensitivity: f32,
) -> usize {
    if total_pages == 0 {
        return 0;
    }
    if total_offset == 0.0 || !total_offset.is_finite() || !(page_distance > f32::EPSILON) {
        return page;
    }
    let total_f = total_pages as f32;
    let pages = total_offset / page_distance;
    let remaining = pages.fract();
    // Whole laps are reduced so the index math below stays in range.
    let whole = if looping {
        pages.trunc() % total_f
    } else {
        pages.trunc().clamp(-total_f, total_f)
    };
    let tip = if remaining == 0.0 || remaining.abs() < sensitivity {
        0
    } else {
        remaining.signum() as isize
    };
    let crossed = whole as isize + tip;
    let target = page as isize - crossed;
    let total = total_pages as isize;
    if looping {
        target.rem_euclid(total) as usize
    } else {
        target.clamp(0, total - 1) as usize
    }
}

/// Inputs of the commit decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitInput {
    /// Page focused when the gesture started.
    pub page: usize,
    /// Number of pages.
    pub total_pages: usize,
    /// Whether the pager wraps around.
    pub looping: bool,
    /// Drag offset plus programmatic page offset.
    pub total_offset: f32,
    /// Last measured drag velocity, same sign convention as the offset.
    pub velocity: f32,
    /// Distance between page centers.
    pub page_distance: f32,
    /// Viewport extent along the scroll axis.
    pub viewport_main: f32,
    /// Fraction of a page required to tip over.
    pub sensitivity: f32,
    /// Whether more than one page may be committed.
    pub multiple_pagination: bool,
    /// Velocity above which a short drag still moves one page.
    pub fling_velocity_threshold: f32,
    /// Cap of a multi-page commit, as a fraction of the page count.
    pub max_increment_fraction: f32,
}

/// Result of the commit decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    /// Page focused before the commit.
    pub page: usize,
    /// Page to focus.
    pub new_page: usize,
    /// Number of pages travelled.
    pub increment: usize,
    /// Direction of travel, if any.
    pub direction: Option<PageDirection>,
}

/// Decides where a finished drag settles.
pub fn drag_result(input: &CommitInput) -> DragOutcome {
    let page = input.page;
    let unchanged = DragOutcome {
        page,
        new_page: page,
        increment: 0,
        direction: None,
    };
    if input.total_pages == 0
        || !(input.page_distance > f32::EPSILON)
        || !(input.viewport_main > f32::EPSILON)
    {
        return unchanged;
    }

    let total = input.total_pages as isize;
    let wrap = |raw: isize| -> usize {
        if input.looping {
            raw.rem_euclid(total) as usize
        } else {
            raw.clamp(0, total - 1) as usize
        }
    };
    let current = current_page(
        page,
        input.total_pages,
        input.looping,
        input.total_offset,
        input.page_distance,
        input.sensitivity,
    );
    // Positive when flinging towards higher indices.
    let velocity = -input.velocity;

    let (new_page, travelled) = if input.multiple_pagination {
        let direction = PageDirection::from_offset(input.total_offset).or(if velocity > 0.0 {
            Some(PageDirection::Forward)
        } else if velocity < 0.0 {
            Some(PageDirection::Backward)
        } else {
            None
        });
        let Some(direction) = direction else {
            return unchanged;
        };

        let pages_per_viewport = input.viewport_main / input.page_distance;
        let max_increment =
            (input.total_pages as f32 * input.max_increment_fraction).ceil() as usize;
        let velocity_increment =
            (velocity.abs() / pages_per_viewport / input.fling_velocity_threshold) as usize;
        let crossed = match direction {
            PageDirection::Forward => current as isize - page as isize,
            PageDirection::Backward => page as isize - current as isize,
        };
        let offset_increment = if input.looping {
            crossed.rem_euclid(total) as usize
        } else {
            crossed.max(0) as usize
        };
        let increment = velocity_increment
            .saturating_add(offset_increment)
            .min(max_increment) as isize;
        let raw = match direction {
            PageDirection::Forward => page as isize + increment,
            PageDirection::Backward => page as isize - increment,
        };
        (wrap(raw), increment as usize)
    } else {
        let mut raw = current as isize;
        if current == page && velocity.abs() > input.fling_velocity_threshold {
            raw += velocity.signum() as isize;
        }
        (wrap(raw), 1)
    };

    if new_page == page {
        return unchanged;
    }
    let increment = if input.looping {
        travelled
    } else {
        new_page.abs_diff(page)
    };
    let direction = if input.looping {
        if (new_page + input.total_pages - page) % input.total_pages == increment % input.total_pages
        {
            PageDirection::Forward
        } else {
            PageDirection::Backward
        }
    } else if new_page > page {
        PageDirection::Forward
    } else {
        PageDirection::Backward
    };
    DragOutcome {
        page,
        new_page,
        increment,
        direction: Some(direction),
    }
}
