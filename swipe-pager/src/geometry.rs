//! Geometry calculator: item size, effective spacing, page distance and the
//! alignment offsets derived from the viewport and the pager arguments.
//!
//! Every function here is pure. All math happens in an axis-normalized frame
//! (`main` is the scroll axis, `cross` the perpendicular one) and sizes are
//! packed back into `width x height` at the boundary.
use glam::Vec2;

use crate::{
    alignment::{ItemAlignment, PositionAlignment},
    args::PagerArgs,
};

/// Direction in which pages are laid out and scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Pages are laid out left to right.
    #[default]
    Horizontal,
    /// Pages are laid out top to bottom.
    Vertical,
}

impl Orientation {
    /// Extent of `size` along the scroll axis.
    pub fn main(self, size: Vec2) -> f32 {
        match self {
            Self::Horizontal => size.x,
            Self::Vertical => size.y,
        }
    }

    /// Extent of `size` across the scroll axis.
    pub fn cross(self, size: Vec2) -> f32 {
        match self {
            Self::Horizontal => size.y,
            Self::Vertical => size.x,
        }
    }

    /// Packs main/cross extents back into a `width x height` vector.
    pub fn pack(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(main, cross),
            Self::Vertical => Vec2::new(cross, main),
        }
    }

    /// Re-expresses a point so that `x` runs along the scroll axis.
    pub fn normalize(self, point: Vec2) -> Vec2 {
        match self {
            Self::Horizontal => point,
            Self::Vertical => Vec2::new(point.y, point.x),
        }
    }
}

/// How each page is sized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemSizing {
    /// Fill the viewport minus the side insets on both axes.
    #[default]
    Fill,
    /// Keep a `main / cross` aspect ratio, fitted into the inset viewport.
    AspectRatio(f32),
    /// Try to use this `width x height`, shrunk to fit the viewport.
    Preferred(Vec2),
}

/// Sizes derived for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageGeometry {
    /// Viewport the geometry was computed for.
    pub viewport: Vec2,
    /// Size of every page, `width x height`.
    pub page_size: Vec2,
    /// Spacing between neighbouring pages after interactive compensation.
    pub item_spacing: f32,
    /// Distance between the centers of two neighbouring pages.
    pub page_distance: f32,
}

impl PageGeometry {
    /// Computes the geometry for `viewport` under `args`.
    pub fn compute(viewport: Vec2, args: &PagerArgs) -> Self {
        let orientation = args.orientation;
        let page_size = page_size(viewport, orientation, args.item_sizing, args.side_insets);
        if page_size == Vec2::ZERO {
            return Self {
                viewport,
                ..Self::default()
            };
        }

        let page_main = orientation.main(page_size);
        let item_spacing =
            interactive_item_spacing(args.item_spacing, page_main, args.effective_interactive_scale());
        Self {
            viewport,
            page_size,
            item_spacing,
            page_distance: page_main + item_spacing,
        }
    }

    /// Returns `true` when no layout is possible and all drag math must be
    /// skipped.
    pub fn is_degenerate(&self) -> bool {
        !(self.page_distance > f32::EPSILON)
    }
}

/// Size of a single page for the given viewport.
///
/// Degenerates to zero when the viewport has no area.
pub fn page_size(
    viewport: Vec2,
    orientation: Orientation,
    sizing: ItemSizing,
    side_insets: f32,
) -> Vec2 {
    if !(viewport.x > 0.0 && viewport.y > 0.0) {
        return Vec2::ZERO;
    }

    let viewport_main = orientation.main(viewport);
    let viewport_cross = orientation.cross(viewport);
    let inset_main = (viewport_main - 2.0 * side_insets).max(0.0);
    let inset_cross = (viewport_cross - 2.0 * side_insets).max(0.0);

    match sizing {
        ItemSizing::Preferred(preferred) => orientation.pack(
            orientation.main(preferred).min(viewport_main),
            orientation.cross(preferred).min(viewport_cross),
        ),
        ItemSizing::Fill => orientation.pack(inset_main, inset_cross),
        ItemSizing::AspectRatio(ratio) => {
            let side = inset_main.min(inset_cross);
            if ratio > 1.0 {
                orientation.pack(side, side / ratio)
            } else {
                orientation.pack(side * ratio, side)
            }
        }
    }
}

/// Spacing between pages once unfocused pages are shrunk by `scale`.
///
/// A shrunk neighbour leaves `page_main * (1 - scale) / 2` of empty room next
/// to the focused page; that room is taken out of the spacing so the visible
/// gap stays equal to `spacing`.
pub fn interactive_item_spacing(spacing: f32, page_main: f32, scale: f32) -> f32 {
    spacing - page_main * (1.0 - scale) / 2.0
}

/// Extra main-axis offset applied to the page strip for `alignment`.
///
/// `focused_slot` is the position of the focused page inside a window of
/// `window_len` materialized pages.
pub fn alignment_offset(
    alignment: PositionAlignment,
    viewport_main: f32,
    page_main: f32,
    focused_slot: usize,
    window_len: usize,
) -> f32 {
    let free = (viewport_main - page_main) / 2.0;
    let is_last = window_len > 0 && focused_slot == window_len - 1;
    match alignment {
        PositionAlignment::End(insets) => free - insets,
        PositionAlignment::Justified(insets) if is_last => free - insets,
        PositionAlignment::Start(insets) => -free + insets,
        PositionAlignment::Justified(insets) if focused_slot == 0 => -free + insets,
        PositionAlignment::Center | PositionAlignment::Justified(_) => 0.0,
    }
}

/// Cross-axis offset of every page for `item_alignment`.
///
/// Filling pages span the cross axis, so only aspect-ratio and preferred
/// sizes get shifted. Half of `side_insets` is kept free on the aligned side.
pub fn cross_offset(
    item_alignment: ItemAlignment,
    sizing: ItemSizing,
    side_insets: f32,
    viewport_cross: f32,
    page_cross: f32,
) -> f32 {
    if matches!(sizing, ItemSizing::Fill) {
        return 0.0;
    }
    let available = (viewport_cross - page_cross - side_insets) / 2.0 - item_alignment.insets();
    if available <= 0.0 {
        return 0.0;
    }
    match item_alignment {
        ItemAlignment::Center => 0.0,
        ItemAlignment::Start(_) => -available,
        ItemAlignment::End(_) => available,
    }
}
