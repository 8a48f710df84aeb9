//! The pager controller.
//!
//! [`Pager`] owns the configuration, the page state and the drag state
//! machine. Hosts feed it the viewport size, gesture events and programmatic
//! page requests, and read back a [`PagerFrame`] to render every frame.
//! Notifications are delivered synchronously through the callbacks stored in
//! [`PagerArgs`].
use glam::{Vec2, Vec3};
use tracing::debug;

use crate::{
    animation::{DragResult, PagingAnimation, default_paging_animation},
    args::{PageTransition, PageTransitionError, PagerArgs},
    data::{ItemKey, PagerData},
    effects::{self, FocusProgress},
    geometry::{self, Orientation, PageGeometry},
    gesture::{
        CommitInput, DragContext, DragGesture, DragSample, GestureEvent, GesturePhase,
        PageDirection, SampleOutcome, SwipeInteractionArea, current_page, drag_result,
    },
    offset::{self, OffsetInput},
    page::{PageState, PageUpdate},
    window::{PageWindow, recycling_budget},
};

/// Sensitivity used to decide which page is focused while dragging.
const FOCUS_SENSITIVITY: f32 = 0.5;

/// Directional navigation request, e.g. from arrow keys or a remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveDirection {
    /// Towards the left edge.
    Left,
    /// Towards the right edge.
    Right,
    /// Towards the top edge.
    Up,
    /// Towards the bottom edge.
    Down,
}

/// Outcome of a finished drag, for the host to animate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageCommit {
    /// Page focused before the commit.
    pub page: usize,
    /// Page focused after the commit.
    pub new_page: usize,
    /// Number of pages travelled.
    pub increment: usize,
    /// Direction of travel, if the page changed.
    pub direction: Option<PageDirection>,
    /// Animation to settle with.
    pub animation: PagingAnimation,
    /// Speed multiplier for `animation`.
    pub speed: f32,
}

/// A materialized page.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSlot {
    /// Index in the backing sequence.
    pub index: usize,
    /// Stable identity of the item.
    pub key: ItemKey,
    /// Center along the scroll axis, relative to the viewport center.
    pub position: f32,
    /// Whether this is the page the pager points at.
    pub is_focused: bool,
    /// Loop-mode filler that should be rendered invisible.
    pub is_edge: bool,
    /// Scale to render the page with.
    pub scale: f32,
    /// Opacity to render the page with.
    pub opacity: f32,
    /// Rotation around `rotation_axis`, in degrees.
    pub rotation_degrees: f32,
    /// Rotation axis; zero when rotation is disabled.
    pub rotation_axis: Vec3,
}

/// Everything a host needs to render one frame.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerFrame {
    /// Committed page.
    pub page: usize,
    /// Page the pager currently points at, including drag progress.
    pub current_page: usize,
    /// Size of every page.
    pub page_size: Vec2,
    /// Effective spacing between pages.
    pub item_spacing: f32,
    /// Distance between page centers.
    pub page_distance: f32,
    /// Clamped translation of the page strip.
    pub container_offset: f32,
    /// Cross-axis offset applied to every page.
    pub cross_offset: f32,
    /// Materialized pages, lowest offset first.
    pub slots: Vec<PageSlot>,
}

/// A paging controller.
///
/// ## Examples
///
/// ```
/// use std::time::Duration;
///
/// use glam::Vec2;
/// use swipe_pager::{DragSample, Pager, PagerArgs};
///
/// let mut pager = Pager::new(PagerArgs::default().delays_touches(false), 10);
/// pager.set_viewport(Vec2::new(300.0, 300.0));
///
/// let at = |x: f32, ms: u64| DragSample::new(Vec2::new(x, 150.0), Duration::from_millis(ms));
/// pager.begin_drag(at(250.0, 0));
/// pager.drag(at(100.0, 1000));
/// let commit = pager.end_drag();
///
/// assert_eq!(commit.map(|commit| commit.new_page), Some(1));
/// assert_eq!(pager.page(), 1);
/// ```
pub struct Pager {
    args: PagerArgs,
    data: PagerData,
    state: PageState,
    gesture: DragGesture,
    viewport: Vec2,
}

impl Pager {
    /// Creates a pager over `item_count` source items.
    pub fn new(args: PagerArgs, item_count: usize) -> Self {
        let args = args.retain_valid(&PagerArgs::default());
        let data = data_for(&args, item_count);
        let state = PageState::new(args.initial_page, data.len(), args.loop_pages);
        Self {
            args,
            data,
            state,
            gesture: DragGesture::default(),
            viewport: Vec2::ZERO,
        }
    }

    /// Current configuration.
    pub fn args(&self) -> &PagerArgs {
        &self.args
    }

    /// Replaces the configuration. Invalid ranged values keep their previous
    /// setting. The focused page is re-clamped.
    pub fn set_args(&mut self, args: PagerArgs) {
        let args = args.retain_valid(&self.args);
        self.data = data_for(&args, self.data.source_len());
        self.state.set_looping(args.loop_pages);
        self.state.set_total_pages(self.data.len());
        self.args = args;
    }

    /// Sets the viewport size used by the next layout and drag samples.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Viewport size.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Replaces the number of source items, re-clamping the focused page.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.data = data_for(&self.args, item_count);
        self.state.set_total_pages(self.data.len());
        debug!(
            "Pager now holds {} pages, focused on {}",
            self.data.len(),
            self.state.index()
        );
    }

    /// Backing sequence bookkeeping.
    pub fn data(&self) -> &PagerData {
        &self.data
    }

    /// Page state.
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Phase of the drag state machine.
    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Committed page.
    pub fn page(&self) -> usize {
        self.state.index()
    }

    /// Number of pages in the backing sequence.
    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    /// Page the pager currently points at, taking the drag offset and the
    /// programmatic page offset into account.
    pub fn current_page(&self) -> usize {
        let geometry = self.geometry();
        current_page(
            self.state.index(),
            self.state.total_pages(),
            self.state.is_looping(),
            self.total_offset(&geometry),
            geometry.page_distance,
            FOCUS_SENSITIVITY,
        )
    }

    /// Geometry for the current viewport.
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::compute(self.viewport, &self.args)
    }

    fn window_for(&self, geometry: &PageGeometry) -> PageWindow {
        let budget = recycling_budget(
            self.args.effective_loading_policy(),
            self.state.total_pages(),
            self.state.is_looping(),
            self.args.orientation.main(self.viewport),
            geometry.page_distance,
        );
        PageWindow::select(
            self.state.index(),
            self.state.total_pages(),
            self.state.is_looping(),
            budget,
        )
    }

    fn total_offset(&self, geometry: &PageGeometry) -> f32 {
        if geometry.is_degenerate() {
            return 0.0;
        }
        offset::total_offset(
            self.state.dragging_offset(),
            self.args.page_offset,
            geometry.page_distance,
        )
    }

    /// Sign turning logical strip positions into viewport positions.
    fn visual_sign(&self) -> f32 {
        let layout = if self.args.right_to_left { -1.0 } else { 1.0 };
        self.args.swipe_direction.sign() * layout
    }

    /// Computes the frame to render.
    ///
    /// Empty while the collection is empty or the viewport has no area.
    pub fn layout(&self) -> PagerFrame {
        let geometry = self.geometry();
        let page = self.state.index();
        let total_pages = self.state.total_pages();
        let looping = self.state.is_looping();
        let total_offset = self.total_offset(&geometry);
        let current = current_page(
            page,
            total_pages,
            looping,
            total_offset,
            geometry.page_distance,
            FOCUS_SENSITIVITY,
        );
        let mut frame = PagerFrame {
            page,
            current_page: current,
            page_size: geometry.page_size,
            item_spacing: geometry.item_spacing,
            page_distance: geometry.page_distance,
            ..PagerFrame::default()
        };
        if geometry.is_degenerate() || total_pages == 0 {
            return frame;
        }

        let orientation = self.args.orientation;
        let window = self.window_for(&geometry);
        let page_main = orientation.main(geometry.page_size);
        let alignment_offset = geometry::alignment_offset(
            self.args.alignment,
            orientation.main(self.viewport),
            page_main,
            window.focused_slot(),
            window.len(),
        );
        let offset_input = OffsetInput {
            window_len: window.len(),
            focused_slot: window.focused_slot(),
            page_distance: geometry.page_distance,
            total_offset,
            alignment_offset,
            current_page: current,
            total_pages,
            looping,
            bounces: self.args.bounces,
        };
        let container_offset = offset::resolve_offset(&offset_input);
        frame.container_offset = container_offset;
        frame.cross_offset = geometry::cross_offset(
            self.args.item_alignment,
            self.args.item_sizing,
            self.args.side_insets,
            orientation.cross(self.viewport),
            orientation.cross(geometry.page_size),
        );

        let progress = FocusProgress::new(
            page,
            total_offset,
            geometry.page_distance,
            total_pages,
            looping,
        );
        let shrink = self.args.effective_interactive_scale();
        let rotation = self.args.rotation_3d;
        let center = (window.len() as f32 - 1.0) / 2.0;
        let sign = self.visual_sign();
        frame.slots = window
            .indices()
            .iter()
            .enumerate()
            .filter_map(|(slot, &index)| {
                let key = self.data.key(index)?;
                Some(PageSlot {
                    index,
                    key,
                    position: sign
                        * ((slot as f32 - center) * geometry.page_distance + container_offset),
                    is_focused: index == current,
                    is_edge: window.is_edge_slot(
                        slot,
                        total_pages,
                        self.state.page_increment(),
                        progress.is_dragging(),
                    ),
                    scale: effects::scale(&progress, index, shrink),
                    opacity: effects::opacity(&progress, index, self.args.opacity_decrement),
                    rotation_degrees: effects::rotation_degrees(
                        &progress,
                        index,
                        self.args.rotation_step_degrees,
                        rotation,
                    ),
                    rotation_axis: effects::rotation_axis(rotation),
                })
            })
            .collect();
        frame
    }

    /// Page whose rendered frame contains `point`, in viewport coordinates
    /// with the origin at the top-left corner.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        let frame = self.layout();
        let orientation = self.args.orientation;
        let local = point - self.viewport / 2.0;
        let main = orientation.main(local);
        let cross = orientation.cross(local);
        let half_main = orientation.main(frame.page_size) / 2.0;
        let half_cross = orientation.cross(frame.page_size) / 2.0;
        frame
            .slots
            .iter()
            .find(|slot| {
                !slot.is_edge
                    && (main - slot.position).abs() <= half_main * slot.scale
                    && (cross - frame.cross_offset).abs() <= half_cross * slot.scale
            })
            .map(|slot| slot.index)
    }

    fn drag_context(&self, geometry: &PageGeometry) -> DragContext {
        DragContext {
            orientation: self.args.orientation,
            swipe_direction: self.args.swipe_direction,
            right_to_left: self.args.right_to_left,
            page_distance: geometry.page_distance,
            viewport_main: self.args.orientation.main(self.viewport),
            multiple_pagination: self.args.multiple_pagination,
            page_ratio: self.args.page_ratio,
            drag_forward_only: self.args.drag_forward_only,
            minimum_distance: self.args.minimum_distance,
            angle_tolerance_degrees: self.args.swipe_angle_tolerance,
        }
    }

    /// Routes a gesture event. Returns the commit when the event ended a
    /// drag.
    pub fn handle_event(&mut self, event: GestureEvent) -> Option<PageCommit> {
        match event {
            GestureEvent::Began(sample) => {
                self.begin_drag(sample);
                None
            }
            GestureEvent::Changed(sample) => {
                self.drag(sample);
                None
            }
            GestureEvent::Ended => self.end_drag(),
            GestureEvent::Cancelled => self.cancel_drag(),
        }
    }

    /// Starts tracking a press. Returns `false` when dragging is disabled,
    /// nothing can be laid out, or the press is outside the interaction area.
    pub fn begin_drag(&mut self, sample: DragSample) -> bool {
        if self.gesture.is_dragging() {
            self.end_drag();
        }
        if !self.args.allows_dragging || self.data.is_empty() {
            return false;
        }
        let geometry = self.geometry();
        if geometry.is_degenerate() {
            return false;
        }
        if self.args.swipe_interaction_area == SwipeInteractionArea::Page
            && self.hit_test(sample.position).is_none()
        {
            return false;
        }
        let context = self.drag_context(&geometry);
        let outcome = self.gesture.press(sample, &context, &mut self.state);
        self.notify_sample(outcome);
        self.gesture.phase() != GesturePhase::Idle
    }

    /// Feeds a pointer move.
    pub fn drag(&mut self, sample: DragSample) {
        if !matches!(
            self.gesture.phase(),
            GesturePhase::Pressed | GesturePhase::Dragging
        ) {
            return;
        }
        let geometry = self.geometry();
        let context = self.drag_context(&geometry);
        let outcome = self.gesture.change(sample, &context, &mut self.state);
        self.notify_sample(outcome);
    }

    fn notify_sample(&self, outcome: SampleOutcome) {
        if outcome.began
            && let Some(on_dragging_began) = &self.args.on_dragging_began
        {
            on_dragging_began();
        }
        if let (Some(progress), Some(on_dragging_changed)) =
            (outcome.progress, &self.args.on_dragging_changed)
        {
            on_dragging_changed(progress);
        }
    }

    /// Ends the gesture and commits the page it settled on.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn end_drag(&mut self) -> Option<PageCommit> {
        if !self.gesture.end() {
            return None;
        }
        let geometry = self.geometry();
        let page = self.state.index();
        let input = CommitInput {
            page,
            total_pages: self.state.total_pages(),
            looping: self.state.is_looping(),
            total_offset: self.total_offset(&geometry),
            velocity: self.state.dragging_velocity(),
            page_distance: geometry.page_distance,
            viewport_main: self.args.orientation.main(self.viewport),
            sensitivity: self.args.sensitivity.value(),
            multiple_pagination: self.args.multiple_pagination,
            fling_velocity_threshold: self.args.fling_velocity_threshold,
            max_increment_fraction: self.args.max_increment_fraction,
        };
        let outcome = drag_result(&input);

        if let Some(on_dragging_ended) = &self.args.on_dragging_ended {
            on_dragging_ended();
        }

        let (default_animation, speed) =
            default_paging_animation(outcome.increment, self.args.multiple_pagination);
        let animation = self
            .args
            .paging_animation
            .as_ref()
            .map_or(default_animation, |select| {
                select(DragResult {
                    page,
                    new_page: outcome.new_page,
                    translation: self.state.dragging_offset(),
                    velocity: self.state.dragging_velocity(),
                })
            });

        if outcome.new_page != page {
            if let Some(on_page_will_change) = &self.args.on_page_will_change {
                on_page_will_change(outcome.new_page);
            }
            if let Some(on_page_will_transition) = &self.args.on_page_will_transition {
                on_page_will_transition(Ok(PageTransition {
                    current_page: page,
                    next_page: outcome.new_page,
                    page_increment: outcome.increment,
                }));
            }
        } else if let Some(on_page_will_transition) = &self.args.on_page_will_transition {
            on_page_will_transition(Err(PageTransitionError::DraggingStopped));
        }

        self.state.commit(outcome.new_page, outcome.increment);
        self.gesture.finish();
        debug!(
            "Drag committed: page {page} -> {} (increment {})",
            outcome.new_page, outcome.increment
        );
        Some(PageCommit {
            page,
            new_page: outcome.new_page,
            increment: outcome.increment,
            direction: outcome.direction,
            animation,
            speed,
        })
    }

    /// The platform took the gesture away. The drag is committed from its
    /// last known sample.
    pub fn cancel_drag(&mut self) -> Option<PageCommit> {
        self.end_drag()
    }

    /// The hosting surface became inactive. A drag in progress is ended from
    /// its last known sample so its offset does not stay stuck.
    pub fn deactivate(&mut self) -> Option<PageCommit> {
        match self.gesture.phase() {
            GesturePhase::Dragging => {
                debug!("Pager deactivated mid-drag, forcing the gesture to end");
                self.end_drag()
            }
            GesturePhase::Pressed => {
                self.gesture.end();
                None
            }
            GesturePhase::Idle | GesturePhase::Committing => None,
        }
    }

    /// The host finished animating the last transition. Fires the
    /// page-changed notification once per committed change and returns the
    /// settled page.
    pub fn complete_transition(&mut self) -> Option<usize> {
        if self.state.take_page_increment() == 0 {
            return None;
        }
        let page = self.state.index();
        if let Some(on_page_changed) = &self.args.on_page_changed {
            on_page_changed(page);
        }
        Some(page)
    }

    /// Moves to the next page.
    pub fn next(&mut self) -> bool {
        self.update(PageUpdate::Next)
    }

    /// Moves to the previous page.
    pub fn previous(&mut self) -> bool {
        self.update(PageUpdate::Previous)
    }

    /// Moves to `index`, clamped or wrapped into range.
    pub fn move_to(&mut self, index: usize) -> bool {
        self.update(PageUpdate::New(index))
    }

    /// Applies a programmatic page update as a gesture-free commit.
    ///
    /// Returns whether the focused page changed. Ignored while the
    /// collection is empty.
    pub fn update(&mut self, update: PageUpdate) -> bool {
        if self.data.is_empty() {
            debug!("Ignoring {update:?} on an empty pager");
            return false;
        }
        let page = self.state.index();
        let target = self.state.target(update);
        if target == page {
            return false;
        }
        let increment = self.state.distance_to(target);
        if let Some(on_page_will_change) = &self.args.on_page_will_change {
            on_page_will_change(target);
        }
        self.state.update(update);
        self.state.set_page_increment(increment);
        debug!("Moved from page {page} to {target}");
        true
    }

    /// Handles a directional navigation request. Directions across the
    /// scroll axis are ignored, as are backward moves in forward-only mode.
    pub fn move_command(&mut self, direction: MoveDirection) -> bool {
        let forward = match (direction, self.args.orientation) {
            (MoveDirection::Right, Orientation::Horizontal)
            | (MoveDirection::Down, Orientation::Vertical) => true,
            (MoveDirection::Left, Orientation::Horizontal)
            | (MoveDirection::Up, Orientation::Vertical) => false,
            _ => return false,
        };
        if forward {
            self.next()
        } else if self.args.drag_forward_only {
            false
        } else {
            self.previous()
        }
    }
}

fn data_for(args: &PagerArgs, item_count: usize) -> PagerData {
    let repeat = if args.loop_pages {
        args.loop_repeat_count
    } else {
        1
    };
    PagerData::new(item_count).with_repeat(repeat)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::window::ContentLoadingPolicy;

    fn pager(args: PagerArgs, items: usize) -> Pager {
        let mut pager = Pager::new(args, items);
        pager.set_viewport(Vec2::new(300.0, 300.0));
        pager
    }

    fn sample(x: f32, millis: u64) -> DragSample {
        DragSample::new(Vec2::new(x, 150.0), Duration::from_millis(millis))
    }

    fn indices(pager: &Pager) -> Vec<usize> {
        pager.layout().slots.iter().map(|slot| slot.index).collect()
    }

    #[test]
    fn test_lazy_window_at_start() {
        let pager = pager(
            PagerArgs::default().content_loading_policy(ContentLoadingPolicy::Lazy {
                recycling_ratio: 5,
            }),
            20,
        );
        assert_eq!(indices(&pager), vec![0, 1, 2]);
    }

    #[test]
    fn test_loop_window_at_start() {
        let pager = pager(PagerArgs::default().loop_pages(true), 20);
        assert_eq!(indices(&pager), vec![18, 19, 0, 1, 2]);
    }

    #[test]
    fn test_page_offset_moves_current_page() {
        let pager = pager(PagerArgs::default().page_offset(2.6), 20);
        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.page(), 0);

        let looping = pager_with_loop_offset();
        assert_eq!(looping.current_page(), 19);
    }

    fn pager_with_loop_offset() -> Pager {
        pager(PagerArgs::default().loop_pages(true).page_offset(-1.0), 20)
    }

    #[test]
    fn test_focused_slot_is_centered() {
        let pager = pager(PagerArgs::default().initial_page(10), 20);
        let frame = pager.layout();
        let focused = frame.slots.iter().find(|slot| slot.is_focused);
        assert_eq!(focused.map(|slot| slot.index), Some(10));
        assert_abs_diff_eq!(focused.map_or(f32::NAN, |slot| slot.position), 0.0);
        assert_eq!(frame.slots.len(), 5);
        assert_abs_diff_eq!(frame.slots[3].position, 300.0);
    }

    #[test]
    fn test_first_page_frame_is_centered() {
        let frame = pager(PagerArgs::default(), 20).layout();
        assert_abs_diff_eq!(frame.slots[0].position, 0.0);
        assert_abs_diff_eq!(frame.slots[1].position, 300.0);
    }

    #[test]
    fn test_empty_and_degenerate_frames() {
        let empty = pager(PagerArgs::default(), 0);
        assert!(empty.layout().slots.is_empty());

        let mut degenerate = Pager::new(PagerArgs::default(), 5);
        degenerate.set_viewport(Vec2::ZERO);
        assert!(degenerate.layout().slots.is_empty());
        assert!(!degenerate.begin_drag(sample(10.0, 0)));
    }

    #[test]
    fn test_hit_test_honours_interaction_area() {
        let args = PagerArgs::default()
            .delays_touches(false)
            .item_aspect_ratio(2.0);
        let mut pager = pager(args, 5);
        // Pages are 300x150 centered vertically.
        assert_eq!(pager.hit_test(Vec2::new(150.0, 150.0)), Some(0));
        assert_eq!(pager.hit_test(Vec2::new(150.0, 20.0)), None);
        assert!(!pager.begin_drag(DragSample::new(Vec2::new(150.0, 20.0), Duration::ZERO)));

        let args = pager
            .args()
            .clone()
            .swipe_interaction_area(SwipeInteractionArea::AllAvailable);
        pager.set_args(args);
        assert!(pager.begin_drag(DragSample::new(Vec2::new(150.0, 20.0), Duration::ZERO)));
    }

    #[test]
    fn test_programmatic_moves_notify_once() {
        use std::sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        };

        let will_change = Arc::new(AtomicUsize::new(0));
        let changed = Arc::new(AtomicUsize::new(0));
        let will_change_counter = will_change.clone();
        let changed_counter = changed.clone();
        let mut pager = pager(
            PagerArgs::default()
                .on_page_will_change(move |_| {
                    will_change_counter.fetch_add(1, Ordering::SeqCst);
                })
                .on_page_changed(move |_| {
                    changed_counter.fetch_add(1, Ordering::SeqCst);
                }),
            10,
        );

        assert!(pager.move_to(4));
        assert_eq!(pager.state().page_increment(), 4);
        assert_eq!(pager.complete_transition(), Some(4));
        assert_eq!(pager.complete_transition(), None);
        assert!(!pager.move_to(4));
        assert!(!pager.move_to(40) || pager.page() == 9);
        assert_eq!(will_change.load(Ordering::SeqCst), 2);
        assert_eq!(pager.complete_transition(), Some(9));
        assert_eq!(changed.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_move_commands() {
        let mut pager = pager(PagerArgs::default(), 5);
        assert!(pager.move_command(MoveDirection::Right));
        assert_eq!(pager.page(), 1);
        assert!(!pager.move_command(MoveDirection::Down));
        assert!(pager.move_command(MoveDirection::Left));
        assert_eq!(pager.page(), 0);

        let mut vertical = pager_vertical_forward_only();
        assert!(vertical.move_command(MoveDirection::Down));
        assert!(!vertical.move_command(MoveDirection::Up));
        assert_eq!(vertical.page(), 1);
    }

    fn pager_vertical_forward_only() -> Pager {
        pager(
            PagerArgs::default()
                .orientation(Orientation::Vertical)
                .drag_forward_only(true),
            5,
        )
    }

    #[test]
    fn test_shrinking_collection_reclamps() {
        let mut pager = pager(PagerArgs::default().initial_page(8), 10);
        pager.set_item_count(3);
        assert_eq!(pager.page(), 2);
        pager.set_item_count(0);
        assert_eq!(pager.page(), 0);
        assert!(!pager.next());
    }

    #[test]
    fn test_loop_repeat_count_multiplies_pages() {
        let pager = pager(
            PagerArgs::default().loop_pages(true).loop_repeat_count(3),
            4,
        );
        assert_eq!(pager.total_pages(), 12);
        assert_eq!(pager.data().source_len(), 4);
        assert_eq!(pager.data().repeat(), 3);
        let frame = pager.layout();
        let keys: Vec<_> = frame.slots.iter().map(|slot| slot.key).collect();
        assert!(keys.contains(&ItemKey {
            repetition: 2,
            source_index: 3
        }));
    }

    #[test]
    fn test_loop_edges_are_hidden_when_idle() {
        let pager = pager(PagerArgs::default().loop_pages(true), 20);
        let frame = pager.layout();
        let edges: Vec<bool> = frame.slots.iter().map(|slot| slot.is_edge).collect();
        assert_eq!(edges, vec![true, false, false, false, true]);
    }

    #[test]
    fn test_reverse_direction_mirrors_positions() {
        let args = PagerArgs::default().swipe_direction(crate::gesture::SwipeDirection::Reverse);
        let frame = pager(args, 5).layout();
        assert_abs_diff_eq!(frame.slots[1].position, -300.0);
    }

    #[test]
    fn test_extreme_page_offset_stays_in_range() {
        let huge = PagerArgs {
            page_offset: 1e20,
            ..PagerArgs::default()
        };
        let shifted = pager(huge, 10);
        assert_eq!(shifted.viewport(), Vec2::new(300.0, 300.0));
        // A huge forward offset points at the last page.
        assert_eq!(shifted.current_page(), 9);
        let frame = shifted.layout();
        assert!(frame.container_offset.is_finite());
        assert!(frame.slots.iter().all(|slot| slot.index < 10));

        let looping = PagerArgs {
            page_offset: -1e20,
            loop_pages: true,
            ..PagerArgs::default()
        };
        assert!(pager(looping, 10).current_page() < 10);
    }

    #[test]
    fn test_non_finite_page_offset_is_replaced() {
        let args = PagerArgs {
            page_offset: f32::NAN,
            ..PagerArgs::default()
        };
        let broken = pager(args, 10);
        assert_eq!(broken.args().page_offset, 0.0);
        assert_eq!(broken.layout(), pager(PagerArgs::default(), 10).layout());
    }
}
