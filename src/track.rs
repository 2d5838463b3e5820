//! Track geometry: converting pointer positions into track fractions.
//!
//! # Coordinate Systems
//!
//! Pointer samples arrive as [`ScreenPoint`]s in pixels, relative to the top-left
//! corner of the track's bounding box:
//!
//! - X increases to the right
//! - Y increases downward
//!
//! Slider values grow along the track's **axis**:
//!
//! - Horizontal tracks: from the left edge, so the axis offset is `x`
//! - Vertical tracks: from the bottom edge, so the axis offset is `length - y`
//!
//! The vertical inversion is a pure coordinate transform; everything after
//! [`Track::axis_offset`] works the same for both orientations.
//!
//! # Examples
//!
//! ```rust
//! use glidar::{ScreenPoint, Track};
//!
//! let track = Track::horizontal(200.0);
//! assert_eq!(track.fraction_at(&ScreenPoint::new(50.0, 4.0)), 0.25);
//!
//! // Vertical tracks measure from the bottom.
//! let track = Track::vertical(200.0);
//! assert_eq!(track.fraction_at(&ScreenPoint::new(4.0, 50.0)), 0.75);
//!
//! // Pointers beyond the track are clamped.
//! assert_eq!(track.fraction_at(&ScreenPoint::new(4.0, 900.0)), 0.0);
//! ```

use num_traits::Float;

/// A point in screen/pixel coordinates, relative to the track's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint<S = f32> {
    /// X coordinate in pixels.
    pub x: S,
    /// Y coordinate in pixels.
    pub y: S,
}

impl<S> ScreenPoint<S> {
    /// Creates a new screen point at the given pixel coordinates.
    pub const fn new(x: S, y: S) -> Self {
        Self { x, y }
    }
}

/// Direction in which slider values grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Bottom to top.
    Vertical,
}

/// Length and orientation of a slider track.
///
/// Supplied by the rendering layer at the moment a pointer event is handled,
/// since the track may have been resized since the last one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track<S = f32> {
    /// Track length in pixels along its axis.
    pub length: S,
    pub orientation: Orientation,
}

impl<S> Track<S> {
    pub const fn new(length: S, orientation: Orientation) -> Self {
        Self {
            length,
            orientation,
        }
    }

    pub const fn horizontal(length: S) -> Self {
        Self::new(length, Orientation::Horizontal)
    }

    pub const fn vertical(length: S) -> Self {
        Self::new(length, Orientation::Vertical)
    }
}

impl<S: Float> Track<S> {
    /// Track length in pixels; negative or unrepresentable lengths count as zero.
    pub fn length_px(&self) -> f64 {
        self.length.to_f64().map_or(0.0, |length| length.max(0.0))
    }

    pub fn axis_offset_opt(&self, point: &ScreenPoint<S>) -> Option<f64> {
        let offset = match self.orientation {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => self.length - point.y,
        };
        offset.to_f64()
    }

    /// Distance of `point` from the track's value origin, along its axis.
    ///
    /// Not clamped: pointers beyond either end give offsets outside
    /// `[0, length]`.
    pub fn axis_offset(&self, point: &ScreenPoint<S>) -> f64 {
        self.axis_offset_opt(point).unwrap_or(0.0)
    }

    /// Clamps an axis offset into `[0, length]`.
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.max(0.0).min(self.length_px())
    }

    /// Fraction of the track covered by an axis offset, in `[0, 1]`.
    ///
    /// A zero-length track always yields `0`.
    pub fn fraction_at_offset(&self, offset: f64) -> f64 {
        let length = self.length_px();
        if length == 0.0 {
            return 0.0;
        }
        self.clamp_offset(offset) / length
    }

    /// Fraction of the track in front of `point`, in `[0, 1]`.
    pub fn fraction_at(&self, point: &ScreenPoint<S>) -> f64 {
        self.fraction_at_offset(self.axis_offset(point))
    }

    /// Axis offset in pixels of a track fraction.
    pub fn offset_of_fraction(&self, fraction: f64) -> f64 {
        fraction * self.length_px()
    }
}
