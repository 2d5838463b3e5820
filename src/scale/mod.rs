//! Scales map slider values (domain) to a normalized `[0, 1]` track fraction.
//!
//! The interaction layer uses [`Linear`] in both directions: a pointer fraction
//! is denormalized into a raw slider value, and an effective value is
//! normalized back into a fraction when handles are laid out on the track.
//!
//! [`OptionIter`] produces the evenly spaced values behind the clickable
//! scale labels.

pub mod linear;
pub mod options;

pub use linear::Linear;
pub use options::OptionIter;

use num_traits::{Float, Zero};

/// Bidirectional mapping between a numeric domain and the normalized `[0, 1]` range.
///
/// The `_opt` variants return `None` when a numeric conversion between the
/// domain and normalized types fails; the plain variants fall back to zero.
pub trait Scale {
    type Domain: Float;
    type Normalized: Float;

    /// Returns the `(min, max)` domain as set.
    fn domain(&self) -> (&Self::Domain, &Self::Domain);

    fn normalize_opt(&self, value: &Self::Domain) -> Option<Self::Normalized>;

    fn denormalize_opt(&self, t: Self::Normalized) -> Option<Self::Domain>;

    /// Maps a domain value to the normalized range.
    fn normalize(&self, value: &Self::Domain) -> Self::Normalized {
        self.normalize_opt(value)
            .unwrap_or_else(Self::Normalized::zero)
    }

    /// Maps a normalized value back to the domain.
    fn denormalize(&self, t: Self::Normalized) -> Self::Domain {
        self.denormalize_opt(t).unwrap_or_else(|| *self.domain().0)
    }
}
