//! Pager configuration and notification callbacks.
//!
//! Plain fields get chained setters from `derive_setters`. Fields with a valid
//! range get hand-written setters that reject out-of-range values, log them
//! and keep the previous value.
use std::sync::Arc;

use derive_setters::Setters;
use glam::Vec2;
use thiserror::Error;
use tracing::warn;

use crate::{
    alignment::{ItemAlignment, PositionAlignment},
    animation::{DragResult, PagingAnimation},
    geometry::{ItemSizing, Orientation},
    gesture::{SwipeDirection, SwipeInteractionArea},
    sensitivity::PaginationSensitivity,
    window::ContentLoadingPolicy,
};

/// Default travel before a press turns into a drag.
pub const DEFAULT_MINIMUM_DISTANCE: f32 = 15.0;
/// Shrink scale forced by the 3D rotation effect.
pub const ROTATION_INTERACTIVE_SCALE: f32 = 0.7;

/// A configuration value outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Aspect ratios must be positive and finite.
    #[error("aspect ratio must be positive, got {0}")]
    InvalidAspectRatio(f32),
    /// Preferred sizes must be positive and finite on both axes.
    #[error("preferred item size must be positive, got {width}x{height}")]
    InvalidPreferredSize {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },
    /// Interactive scale must lie in `(0, 1]`.
    #[error("interactive scale must be in (0, 1], got {0}")]
    InvalidInteractiveScale(f32),
    /// Page ratio must lie in `[0, 1]`.
    #[error("page ratio must be in [0, 1], got {0}")]
    InvalidPageRatio(f32),
    /// Sensitivity must lie in `(0, 1)`.
    #[error("pagination sensitivity must be in (0, 1), got {0}")]
    InvalidSensitivity(f32),
    /// Opacity decrement must lie in `[0, 1]`.
    #[error("opacity decrement must be in [0, 1], got {0}")]
    InvalidOpacityDecrement(f32),
    /// Lazy loading needs to keep at least one viewport.
    #[error("recycling ratio must be at least 1, got {0}")]
    InvalidRecyclingRatio(usize),
    /// A length that cannot be negative.
    #[error("{field} must not be negative, got {value}")]
    NegativeLength {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// A value that must be a finite number.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// A tuning constant that must be positive.
    #[error("{field} must be positive, got {value}")]
    InvalidTuning {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: f32,
    },
}

/// A committed page change, reported before it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageTransition {
    /// Page focused before the transition.
    pub current_page: usize,
    /// Page focused after the transition.
    pub next_page: usize,
    /// Number of pages travelled.
    pub page_increment: usize,
}

/// Why a gesture did not lead to a page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageTransitionError {
    /// The drag ended without crossing to another page.
    #[error("dragging stopped without changing page")]
    DraggingStopped,
}

/// Receives a page index.
pub type PageCallback = Arc<dyn Fn(usize) + Send + Sync>;
/// Receives the outcome of a finished gesture.
pub type TransitionCallback =
    Arc<dyn Fn(Result<PageTransition, PageTransitionError>) + Send + Sync>;
/// Drag lifecycle notification.
pub type DragCallback = Arc<dyn Fn() + Send + Sync>;
/// Receives drag progress in pages.
pub type DragProgressCallback = Arc<dyn Fn(f32) + Send + Sync>;
/// Picks the animation for a finished drag.
pub type PagingAnimationSelector = Arc<dyn Fn(DragResult) -> PagingAnimation + Send + Sync>;

/// Arguments for a [`crate::Pager`].
///
/// ## Examples
///
/// ```
/// use swipe_pager::{Orientation, PagerArgs, PaginationSensitivity};
///
/// let args = PagerArgs::default()
///     .orientation(Orientation::Vertical)
///     .item_spacing(8.0)
///     .sensitivity(PaginationSensitivity::High)
///     .loop_pages(true)
///     .on_page_changed(|page| println!("now on {page}"));
/// assert!(args.validate().is_ok());
/// ```
#[derive(Clone, Setters)]
pub struct PagerArgs {
    /// Page focused when the pager is created.
    pub initial_page: usize,
    /// Scroll axis.
    pub orientation: Orientation,
    /// Which way a swipe has to go to reveal the next page.
    pub swipe_direction: SwipeDirection,
    /// Mirror offsets and velocities for right-to-left layouts.
    pub right_to_left: bool,
    /// Gap between neighbouring pages.
    #[setters(skip)]
    pub item_spacing: f32,
    /// How pages are sized.
    #[setters(skip)]
    pub item_sizing: ItemSizing,
    /// Cross-axis placement of pages that do not fill the viewport.
    pub item_alignment: ItemAlignment,
    /// Main-axis placement of the focused page.
    pub alignment: PositionAlignment,
    /// Inset removed from each side of the viewport before sizing pages.
    #[setters(skip)]
    pub side_insets: f32,
    /// How many pages are materialized.
    #[setters(skip)]
    pub content_loading_policy: ContentLoadingPolicy,
    /// Wrap around past the first and last page.
    pub loop_pages: bool,
    /// Times the source items are repeated in loop mode.
    pub loop_repeat_count: usize,
    /// Whether the user may drag.
    pub allows_dragging: bool,
    /// Only allow swiping towards the next page.
    pub drag_forward_only: bool,
    /// Allow a short overshoot past the first and last page.
    pub bounces: bool,
    /// Where a drag may start.
    pub swipe_interaction_area: SwipeInteractionArea,
    /// Travel required before a press turns into a drag.
    #[setters(skip)]
    pub minimum_distance: f32,
    /// Max reveal of a neighbour in pages, without multiple pagination.
    #[setters(skip)]
    pub page_ratio: f32,
    /// Fraction of a page required to move to it.
    #[setters(skip)]
    pub sensitivity: PaginationSensitivity,
    /// Allow a single gesture to move several pages.
    #[setters(skip)]
    pub multiple_pagination: bool,
    /// Scale of unfocused pages.
    #[setters(skip)]
    pub interactive_scale: f32,
    /// Opacity lost per page of distance from the focus.
    #[setters(skip)]
    pub opacity_decrement: Option<f32>,
    /// Rotate pages around the vertical axis like a carousel.
    pub rotation_3d: bool,
    /// Programmatic offset in pages added to the drag offset.
    #[setters(skip)]
    pub page_offset: f32,
    /// Velocity above which a short drag still moves one page.
    #[setters(skip)]
    pub fling_velocity_threshold: f32,
    /// Cap of a multi-page commit, as a fraction of the page count.
    #[setters(skip)]
    pub max_increment_fraction: f32,
    /// Rotation between neighbouring pages, in degrees.
    #[setters(skip)]
    pub rotation_step_degrees: f32,
    /// Half-width of the accepted cone around the scroll axis, in degrees.
    #[setters(skip)]
    pub swipe_angle_tolerance: f32,
    /// Called with the new page before a committed change.
    #[setters(skip)]
    pub on_page_will_change: Option<PageCallback>,
    /// Called with the outcome of every finished gesture.
    #[setters(skip)]
    pub on_page_will_transition: Option<TransitionCallback>,
    /// Called with the new page once its transition settled.
    #[setters(skip)]
    pub on_page_changed: Option<PageCallback>,
    /// Called when a press turns into a drag.
    #[setters(skip)]
    pub on_dragging_began: Option<DragCallback>,
    /// Called with the drag progress in pages.
    #[setters(skip)]
    pub on_dragging_changed: Option<DragProgressCallback>,
    /// Called when a drag ends, before any page change notification.
    #[setters(skip)]
    pub on_dragging_ended: Option<DragCallback>,
    /// Overrides the animation chosen for a finished drag.
    #[setters(skip)]
    pub paging_animation: Option<PagingAnimationSelector>,
}

impl Default for PagerArgs {
    fn default() -> Self {
        Self {
            initial_page: 0,
            orientation: Orientation::default(),
            swipe_direction: SwipeDirection::default(),
            right_to_left: false,
            item_spacing: 0.0,
            item_sizing: ItemSizing::default(),
            item_alignment: ItemAlignment::default(),
            alignment: PositionAlignment::default(),
            side_insets: 0.0,
            content_loading_policy: ContentLoadingPolicy::default(),
            loop_pages: false,
            loop_repeat_count: 1,
            allows_dragging: true,
            drag_forward_only: false,
            bounces: true,
            swipe_interaction_area: SwipeInteractionArea::default(),
            minimum_distance: DEFAULT_MINIMUM_DISTANCE,
            page_ratio: 1.0,
            sensitivity: PaginationSensitivity::default(),
            multiple_pagination: false,
            interactive_scale: 1.0,
            opacity_decrement: None,
            rotation_3d: false,
            page_offset: 0.0,
            fling_velocity_threshold: 500.0,
            max_increment_fraction: 0.25,
            rotation_step_degrees: 20.0,
            swipe_angle_tolerance: 25.0,
            on_page_will_change: None,
            on_page_will_transition: None,
            on_page_changed: None,
            on_dragging_began: None,
            on_dragging_changed: None,
            on_dragging_ended: None,
            paging_animation: None,
        }
    }
}

fn check_sizing(sizing: ItemSizing) -> Result<(), ConfigError> {
    match sizing {
        ItemSizing::Fill => Ok(()),
        ItemSizing::AspectRatio(ratio) if ratio > 0.0 && ratio.is_finite() => Ok(()),
        ItemSizing::AspectRatio(ratio) => Err(ConfigError::InvalidAspectRatio(ratio)),
        ItemSizing::Preferred(size) if size.cmpgt(Vec2::ZERO).all() && size.is_finite() => Ok(()),
        ItemSizing::Preferred(size) => Err(ConfigError::InvalidPreferredSize {
            width: size.x,
            height: size.y,
        }),
    }
}

fn check_length(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NegativeLength { field, value })
    }
}

fn check_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidTuning { field, value })
    }
}

fn check_policy(policy: ContentLoadingPolicy) -> Result<(), ConfigError> {
    match policy {
        ContentLoadingPolicy::Lazy { recycling_ratio: 0 } => {
            Err(ConfigError::InvalidRecyclingRatio(0))
        }
        _ => Ok(()),
    }
}

fn check_page_ratio(ratio: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&ratio) {
        Ok(())
    } else {
        Err(ConfigError::InvalidPageRatio(ratio))
    }
}

fn check_sensitivity(sensitivity: PaginationSensitivity) -> Result<(), ConfigError> {
    if sensitivity.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::InvalidSensitivity(sensitivity.value()))
    }
}

fn check_interactive_scale(scale: f32) -> Result<(), ConfigError> {
    if scale > 0.0 && scale <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidInteractiveScale(scale))
    }
}

fn check_opacity_decrement(decrement: Option<f32>) -> Result<(), ConfigError> {
    match decrement {
        Some(value) if !(0.0..=1.0).contains(&value) => {
            Err(ConfigError::InvalidOpacityDecrement(value))
        }
        _ => Ok(()),
    }
}

fn check_angle_tolerance(degrees: f32) -> Result<(), ConfigError> {
    if degrees > 0.0 && degrees <= 90.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTuning {
            field: "swipe_angle_tolerance",
            value: degrees,
        })
    }
}

/// Stores `value` in `slot` when `check` passed, otherwise logs and keeps the
/// previous value.
fn accept<T>(slot: &mut T, value: T, check: Result<(), ConfigError>) {
    match check {
        Ok(()) => *slot = value,
        Err(err) => warn!("Ignoring pager setting: {err}"),
    }
}

impl PagerArgs {
    /// Sets the gap between neighbouring pages. May be negative to overlap.
    pub fn item_spacing(mut self, spacing: f32) -> Self {
        accept(
            &mut self.item_spacing,
            spacing,
            check_finite("item_spacing", spacing),
        );
        self
    }

    /// Shifts the pages by `offset` pages on top of any drag.
    pub fn page_offset(mut self, offset: f32) -> Self {
        accept(
            &mut self.page_offset,
            offset,
            check_finite("page_offset", offset),
        );
        self
    }

    /// Sets the rotation between neighbouring pages, in degrees.
    pub fn rotation_step_degrees(mut self, degrees: f32) -> Self {
        accept(
            &mut self.rotation_step_degrees,
            degrees,
            check_finite("rotation_step_degrees", degrees),
        );
        self
    }

    /// Sets how pages are sized.
    pub fn item_sizing(mut self, sizing: ItemSizing) -> Self {
        accept(&mut self.item_sizing, sizing, check_sizing(sizing));
        self
    }

    /// Sizes pages with a fixed `main / cross` aspect ratio.
    pub fn item_aspect_ratio(self, ratio: f32) -> Self {
        self.item_sizing(ItemSizing::AspectRatio(ratio))
    }

    /// Sizes pages with a preferred size. Side insets are reset, the size
    /// already accounts for them.
    pub fn preferred_item_size(mut self, size: Vec2) -> Self {
        let sizing = ItemSizing::Preferred(size);
        if let Err(err) = check_sizing(sizing) {
            warn!("Ignoring pager setting: {err}");
            return self;
        }
        self.item_sizing = sizing;
        self.side_insets = 0.0;
        self
    }

    /// Sets the inset removed from each side of the viewport.
    pub fn side_insets(mut self, insets: f32) -> Self {
        accept(
            &mut self.side_insets,
            insets,
            check_length("side_insets", insets),
        );
        self
    }

    /// Sets how many pages are materialized.
    pub fn content_loading_policy(mut self, policy: ContentLoadingPolicy) -> Self {
        accept(
            &mut self.content_loading_policy,
            policy,
            check_policy(policy),
        );
        self
    }

    /// Sets the travel required before a press turns into a drag.
    pub fn minimum_distance(mut self, distance: f32) -> Self {
        accept(
            &mut self.minimum_distance,
            distance,
            check_length("minimum_distance", distance),
        );
        self
    }

    /// Starts drags only after the default travel when `true`, immediately
    /// otherwise.
    pub fn delays_touches(mut self, delays: bool) -> Self {
        self.minimum_distance = if delays {
            DEFAULT_MINIMUM_DISTANCE
        } else {
            0.0
        };
        self
    }

    /// Limits how far a neighbour can be revealed, in pages.
    pub fn page_ratio(mut self, ratio: f32) -> Self {
        accept(&mut self.page_ratio, ratio, check_page_ratio(ratio));
        self
    }

    /// Sets the fraction of a page required to move to it.
    pub fn sensitivity(mut self, sensitivity: PaginationSensitivity) -> Self {
        accept(
            &mut self.sensitivity,
            sensitivity,
            check_sensitivity(sensitivity),
        );
        self
    }

    /// Allows a single gesture to move several pages. Every page has to be
    /// reachable, so this also switches to eager loading.
    pub fn multiple_pagination(mut self, enabled: bool) -> Self {
        self.multiple_pagination = enabled;
        if enabled {
            self.content_loading_policy = ContentLoadingPolicy::Eager;
        }
        self
    }

    /// Shrinks unfocused pages to `scale`. Ignored while the 3D rotation
    /// effect is on.
    pub fn interactive_scale(mut self, scale: f32) -> Self {
        accept(
            &mut self.interactive_scale,
            scale,
            check_interactive_scale(scale),
        );
        self
    }

    /// Fades pages out by `decrement` per page of distance from the focus.
    pub fn opacity_decrement(mut self, decrement: f32) -> Self {
        accept(
            &mut self.opacity_decrement,
            Some(decrement),
            check_opacity_decrement(Some(decrement)),
        );
        self
    }

    /// Sets the velocity above which a short drag still moves one page.
    pub fn fling_velocity_threshold(mut self, velocity: f32) -> Self {
        accept(
            &mut self.fling_velocity_threshold,
            velocity,
            check_positive("fling_velocity_threshold", velocity),
        );
        self
    }

    /// Caps a multi-page commit to this fraction of the page count.
    pub fn max_increment_fraction(mut self, fraction: f32) -> Self {
        accept(
            &mut self.max_increment_fraction,
            fraction,
            check_positive("max_increment_fraction", fraction),
        );
        self
    }

    /// Sets the half-width of the accepted cone around the scroll axis.
    pub fn swipe_angle_tolerance(mut self, degrees: f32) -> Self {
        accept(
            &mut self.swipe_angle_tolerance,
            degrees,
            check_angle_tolerance(degrees),
        );
        self
    }

    /// Set the handler called before a committed page change.
    pub fn on_page_will_change<F>(mut self, on_page_will_change: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_page_will_change = Some(Arc::new(on_page_will_change));
        self
    }

    /// Set the page-will-change handler using a shared callback.
    pub fn on_page_will_change_shared(mut self, on_page_will_change: PageCallback) -> Self {
        self.on_page_will_change = Some(on_page_will_change);
        self
    }

    /// Set the handler called with the outcome of every finished gesture.
    pub fn on_page_will_transition<F>(mut self, on_page_will_transition: F) -> Self
    where
        F: Fn(Result<PageTransition, PageTransitionError>) + Send + Sync + 'static,
    {
        self.on_page_will_transition = Some(Arc::new(on_page_will_transition));
        self
    }

    /// Set the page-will-transition handler using a shared callback.
    pub fn on_page_will_transition_shared(
        mut self,
        on_page_will_transition: TransitionCallback,
    ) -> Self {
        self.on_page_will_transition = Some(on_page_will_transition);
        self
    }

    /// Set the handler called once a page transition settled.
    pub fn on_page_changed<F>(mut self, on_page_changed: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_page_changed = Some(Arc::new(on_page_changed));
        self
    }

    /// Set the page-changed handler using a shared callback.
    pub fn on_page_changed_shared(mut self, on_page_changed: PageCallback) -> Self {
        self.on_page_changed = Some(on_page_changed);
        self
    }

    /// Set the handler called when a press turns into a drag.
    pub fn on_dragging_began<F>(mut self, on_dragging_began: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_dragging_began = Some(Arc::new(on_dragging_began));
        self
    }

    /// Set the dragging-began handler using a shared callback.
    pub fn on_dragging_began_shared(mut self, on_dragging_began: DragCallback) -> Self {
        self.on_dragging_began = Some(on_dragging_began);
        self
    }

    /// Set the handler called with the drag progress in pages.
    pub fn on_dragging_changed<F>(mut self, on_dragging_changed: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_dragging_changed = Some(Arc::new(on_dragging_changed));
        self
    }

    /// Set the dragging-changed handler using a shared callback.
    pub fn on_dragging_changed_shared(mut self, on_dragging_changed: DragProgressCallback) -> Self {
        self.on_dragging_changed = Some(on_dragging_changed);
        self
    }

    /// Set the handler called when a drag ends.
    pub fn on_dragging_ended<F>(mut self, on_dragging_ended: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_dragging_ended = Some(Arc::new(on_dragging_ended));
        self
    }

    /// Set the dragging-ended handler using a shared callback.
    pub fn on_dragging_ended_shared(mut self, on_dragging_ended: DragCallback) -> Self {
        self.on_dragging_ended = Some(on_dragging_ended);
        self
    }

    /// Set the selector that picks the animation of a finished drag.
    pub fn paging_animation<F>(mut self, paging_animation: F) -> Self
    where
        F: Fn(DragResult) -> PagingAnimation + Send + Sync + 'static,
    {
        self.paging_animation = Some(Arc::new(paging_animation));
        self
    }

    /// Set the paging animation selector using a shared callback.
    pub fn paging_animation_shared(mut self, paging_animation: PagingAnimationSelector) -> Self {
        self.paging_animation = Some(paging_animation);
        self
    }

    /// Shrink scale actually applied to unfocused pages.
    pub fn effective_interactive_scale(&self) -> f32 {
        if self.rotation_3d {
            ROTATION_INTERACTIVE_SCALE
        } else {
            self.interactive_scale
        }
    }

    /// Loading policy actually applied.
    pub fn effective_loading_policy(&self) -> ContentLoadingPolicy {
        if self.multiple_pagination {
            ContentLoadingPolicy::Eager
        } else {
            self.content_loading_policy
        }
    }

    /// Checks every ranged field, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("item_spacing", self.item_spacing)?;
        check_sizing(self.item_sizing)?;
        check_length("side_insets", self.side_insets)?;
        check_policy(self.content_loading_policy)?;
        check_length("minimum_distance", self.minimum_distance)?;
        check_page_ratio(self.page_ratio)?;
        check_sensitivity(self.sensitivity)?;
        check_interactive_scale(self.interactive_scale)?;
        check_opacity_decrement(self.opacity_decrement)?;
        check_finite("page_offset", self.page_offset)?;
        check_positive("fling_velocity_threshold", self.fling_velocity_threshold)?;
        check_positive("max_increment_fraction", self.max_increment_fraction)?;
        check_finite("rotation_step_degrees", self.rotation_step_degrees)?;
        check_angle_tolerance(self.swipe_angle_tolerance)?;
        Ok(())
    }

    /// Replaces every invalid ranged field with the value from `previous`.
    pub fn retain_valid(mut self, previous: &PagerArgs) -> Self {
        fn keep<T: Copy>(slot: &mut T, previous: T, check: impl Fn(T) -> Result<(), ConfigError>) {
            if let Err(err) = check(*slot) {
                warn!("Ignoring pager setting: {err}");
                *slot = previous;
            }
        }

        keep(&mut self.item_spacing, previous.item_spacing, |value| {
            check_finite("item_spacing", value)
        });
        keep(&mut self.item_sizing, previous.item_sizing, check_sizing);
        keep(&mut self.side_insets, previous.side_insets, |value| {
            check_length("side_insets", value)
        });
        keep(
            &mut self.content_loading_policy,
            previous.content_loading_policy,
            check_policy,
        );
        keep(&mut self.minimum_distance, previous.minimum_distance, |value| {
            check_length("minimum_distance", value)
        });
        keep(&mut self.page_ratio, previous.page_ratio, check_page_ratio);
        keep(&mut self.sensitivity, previous.sensitivity, check_sensitivity);
        keep(
            &mut self.interactive_scale,
            previous.interactive_scale,
            check_interactive_scale,
        );
        keep(
            &mut self.opacity_decrement,
            previous.opacity_decrement,
            check_opacity_decrement,
        );
        keep(&mut self.page_offset, previous.page_offset, |value| {
            check_finite("page_offset", value)
        });
        keep(
            &mut self.fling_velocity_threshold,
            previous.fling_velocity_threshold,
            |value| check_positive("fling_velocity_threshold", value),
        );
        keep(
            &mut self.max_increment_fraction,
            previous.max_increment_fraction,
            |value| check_positive("max_increment_fraction", value),
        );
        keep(
            &mut self.rotation_step_degrees,
            previous.rotation_step_degrees,
            |value| check_finite("rotation_step_degrees", value),
        );
        keep(
            &mut self.swipe_angle_tolerance,
            previous.swipe_angle_tolerance,
            check_angle_tolerance,
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let args = PagerArgs::default();
        assert!(args.validate().is_ok());
        assert_eq!(args.minimum_distance, 15.0);
        assert_eq!(args.sensitivity.value(), 0.5);
        assert_eq!(args.effective_interactive_scale(), 1.0);
    }

    #[test]
    fn test_invalid_values_keep_previous() {
        let args = PagerArgs::default()
            .item_aspect_ratio(1.5)
            .item_aspect_ratio(-2.0)
            .interactive_scale(0.8)
            .interactive_scale(1.4)
            .page_ratio(0.5)
            .page_ratio(2.0)
            .sensitivity(PaginationSensitivity::Custom(1.5))
            .side_insets(-3.0)
            .opacity_decrement(3.0)
            .content_loading_policy(ContentLoadingPolicy::Lazy { recycling_ratio: 0 });
        assert_eq!(args.item_sizing, ItemSizing::AspectRatio(1.5));
        assert_eq!(args.interactive_scale, 0.8);
        assert_eq!(args.page_ratio, 0.5);
        assert_eq!(args.sensitivity, PaginationSensitivity::Medium);
        assert_eq!(args.side_insets, 0.0);
        assert_eq!(args.opacity_decrement, None);
        assert_eq!(args.content_loading_policy, ContentLoadingPolicy::default());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_literal_values() {
        let args = PagerArgs {
            page_ratio: 1.5,
            ..PagerArgs::default()
        };
        assert_eq!(args.validate(), Err(ConfigError::InvalidPageRatio(1.5)));

        let fixed = args.retain_valid(&PagerArgs::default().page_ratio(0.3));
        assert_eq!(fixed.page_ratio, 0.3);
        assert!(fixed.validate().is_ok());
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let args = PagerArgs::default()
            .page_offset(0.5)
            .page_offset(f32::NAN)
            .item_spacing(4.0)
            .item_spacing(f32::INFINITY)
            .rotation_step_degrees(f32::NEG_INFINITY);
        assert_eq!(args.page_offset, 0.5);
        assert_eq!(args.item_spacing, 4.0);
        assert_eq!(args.rotation_step_degrees, 20.0);

        let literal = PagerArgs {
            page_offset: f32::INFINITY,
            ..PagerArgs::default()
        };
        assert!(matches!(
            literal.validate(),
            Err(ConfigError::NonFinite {
                field: "page_offset",
                ..
            })
        ));
        let fixed = literal.retain_valid(&PagerArgs::default());
        assert_eq!(fixed.page_offset, 0.0);
        assert!(fixed.validate().is_ok());
    }

    #[test]
    fn test_retain_valid_restores_every_ranged_field() {
        let broken = PagerArgs {
            item_sizing: ItemSizing::AspectRatio(-1.0),
            side_insets: -2.0,
            minimum_distance: f32::NAN,
            interactive_scale: 0.0,
            opacity_decrement: Some(2.0),
            fling_velocity_threshold: 0.0,
            swipe_angle_tolerance: 120.0,
            ..PagerArgs::default()
        };
        let previous = PagerArgs::default()
            .item_aspect_ratio(2.0)
            .side_insets(5.0)
            .interactive_scale(0.6);
        let fixed = broken.retain_valid(&previous);
        assert_eq!(fixed.item_sizing, ItemSizing::AspectRatio(2.0));
        assert_eq!(fixed.side_insets, 5.0);
        assert_eq!(fixed.minimum_distance, 15.0);
        assert_eq!(fixed.interactive_scale, 0.6);
        assert_eq!(fixed.opacity_decrement, None);
        assert_eq!(fixed.fling_velocity_threshold, 500.0);
        assert_eq!(fixed.swipe_angle_tolerance, 25.0);
        assert!(fixed.validate().is_ok());
    }

    #[test]
    fn test_multiple_pagination_loads_everything() {
        let args = PagerArgs::default().multiple_pagination(true);
        assert_eq!(args.content_loading_policy, ContentLoadingPolicy::Eager);
        let literal = PagerArgs {
            multiple_pagination: true,
            ..PagerArgs::default()
        };
        assert_eq!(
            literal.effective_loading_policy(),
            ContentLoadingPolicy::Eager
        );
    }

    #[test]
    fn test_rotation_forces_scale() {
        let args = PagerArgs::default().interactive_scale(0.9).rotation_3d(true);
        assert_eq!(args.effective_interactive_scale(), 0.7);
        let args = args.interactive_scale(0.5);
        assert_eq!(args.effective_interactive_scale(), 0.7);
    }

    #[test]
    fn test_delays_touches_and_preferred_size() {
        let args = PagerArgs::default().delays_touches(false);
        assert_eq!(args.minimum_distance, 0.0);
        let args = args.delays_touches(true);
        assert_eq!(args.minimum_distance, 15.0);

        let args = PagerArgs::default()
            .side_insets(12.0)
            .preferred_item_size(Vec2::new(200.0, 100.0));
        assert_eq!(args.side_insets, 0.0);
        assert_eq!(
            args.item_sizing,
            ItemSizing::Preferred(Vec2::new(200.0, 100.0))
        );
    }

    #[test]
    fn test_callbacks_are_stored() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let args = PagerArgs::default().on_page_changed(move |page| {
            counter.fetch_add(page, Ordering::SeqCst);
        });
        if let Some(callback) = &args.on_page_changed {
            callback(3);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
