//! Alignment options for pages inside the pager viewport.

/// Places the focused page along the scroll (main) axis.
///
/// # Variants
///
/// - `Center`: Keep the focused page centered in the viewport.
/// - `Start`: Pin the focused page to the start edge (left or top), leaving
///   the given inset.
/// - `End`: Pin the focused page to the end edge (right or bottom), leaving
///   the given inset.
/// - `Justified`: Behave like `Start` on the first page, like `End` on the
///   last page and like `Center` everywhere in between.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionAlignment {
    /// Keep the focused page centered.
    #[default]
    Center,
    /// Align the focused page to the start edge with the given inset.
    Start(f32),
    /// Align the focused page to the end edge with the given inset.
    End(f32),
    /// Start-align the first page, end-align the last one, center the rest.
    Justified(f32),
}

impl PositionAlignment {
    /// Returns the inset carried by this alignment.
    pub fn insets(self) -> f32 {
        match self {
            Self::Center => 0.0,
            Self::Start(insets) | Self::End(insets) | Self::Justified(insets) => insets,
        }
    }
}

/// Places an item on the cross axis when it does not fill it.
///
/// Only meaningful for aspect-ratio or preferred-size items; filling items
/// always span the cross axis minus the side insets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemAlignment {
    /// Center items on the cross axis.
    #[default]
    Center,
    /// Move items toward the start of the cross axis (top or left).
    Start(f32),
    /// Move items toward the end of the cross axis (bottom or right).
    End(f32),
}

impl ItemAlignment {
    /// Returns the inset carried by this alignment.
    pub fn insets(self) -> f32 {
        match self {
            Self::Center => 0.0,
            Self::Start(insets) | Self::End(insets) => insets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_alignment_insets() {
        assert_eq!(PositionAlignment::Center.insets(), 0.0);
        assert_eq!(PositionAlignment::Start(8.0).insets(), 8.0);
        assert_eq!(PositionAlignment::End(4.0).insets(), 4.0);
        assert_eq!(PositionAlignment::Justified(2.0).insets(), 2.0);
    }

    #[test]
    fn test_item_alignment_defaults_to_center() {
        assert_eq!(ItemAlignment::default(), ItemAlignment::Center);
        assert_eq!(ItemAlignment::End(3.0).insets(), 3.0);
    }
}
