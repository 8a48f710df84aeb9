//! Pagination sensitivity presets.

/// Fraction of one page's extent a drag must cross before the commit snaps
/// forward instead of back.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaginationSensitivity {
    /// The drag must cross at least 75% of a page.
    Low,
    /// The drag must cross at least 50% of a page.
    #[default]
    Medium,
    /// The drag must cross at least 25% of a page.
    High,
    /// The drag must cross at least the given fraction, in `(0, 1)`.
    Custom(f32),
}

impl PaginationSensitivity {
    /// Returns the threshold fraction.
    pub fn value(self) -> f32 {
        match self {
            Self::Low => 0.75,
            Self::Medium => 0.5,
            Self::High => 0.25,
            Self::Custom(value) => value,
        }
    }

    pub(crate) fn is_valid(self) -> bool {
        let value = self.value();
        value > 0.0 && value < 1.0
    }
}
