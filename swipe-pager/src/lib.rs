//! A headless swipe pager engine.
//!
//! `swipe-pager` computes everything a paging carousel needs: which pages to
//! materialize, where to place them, how a drag moves them and which page a
//! finished gesture settles on. It renders nothing. A host feeds it the
//! viewport size and pointer samples, then draws the [`PagerFrame`] it gets
//! back.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use glam::Vec2;
//! use swipe_pager::{DragSample, GestureEvent, Pager, PagerArgs, PaginationSensitivity};
//!
//! let mut pager = Pager::new(
//!     PagerArgs::default()
//!         .delays_touches(false)
//!         .sensitivity(PaginationSensitivity::High)
//!         .interactive_scale(0.8),
//!     12,
//! );
//! pager.set_viewport(Vec2::new(320.0, 480.0));
//!
//! let sample = |x: f32, ms: u64| DragSample::new(Vec2::new(x, 240.0), Duration::from_millis(ms));
//! pager.handle_event(GestureEvent::Began(sample(300.0, 0)));
//! pager.handle_event(GestureEvent::Changed(sample(200.0, 400)));
//!
//! // Mid-drag the neighbour grows towards full size.
//! let frame = pager.layout();
//! assert!(frame.slots[1].scale > 0.8);
//!
//! let commit = pager.handle_event(GestureEvent::Ended);
//! assert_eq!(commit.map(|commit| commit.new_page), Some(1));
//! assert_eq!(pager.complete_transition(), Some(1));
//! ```
//!
//! # Modules
//!
//! - [`geometry`]: page size, spacing and alignment offsets.
//! - [`window`]: which pages are materialized.
//! - [`offset`]: translation of the page strip.
//! - [`gesture`]: the drag state machine and commit decision.
//! - [`effects`]: scale, opacity and rotation per page.
//! - [`pager`]: the controller tying them together.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod alignment;
pub mod animation;
pub mod args;
pub mod data;
pub mod effects;
pub mod geometry;
pub mod gesture;
pub mod offset;
pub mod page;
pub mod pager;
pub mod sensitivity;
pub mod window;

pub use alignment::{ItemAlignment, PositionAlignment};
pub use animation::{DragResult, PagingAnimation};
pub use args::{ConfigError, PageTransition, PageTransitionError, PagerArgs};
pub use data::{ItemKey, PagerData};
pub use geometry::{ItemSizing, Orientation, PageGeometry};
pub use gesture::{
    DragSample, GestureEvent, GesturePhase, PageDirection, SwipeDirection, SwipeInteractionArea,
};
pub use page::{PageState, PageUpdate};
pub use pager::{MoveDirection, PageCommit, PageSlot, Pager, PagerFrame};
pub use sensitivity::PaginationSensitivity;
pub use window::{ContentLoadingPolicy, PageWindow};
