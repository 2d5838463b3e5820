//! Slider state and the partial updates that drive it.

use crate::handle::HandleId;
use crate::lattice::Lattice;

pub const DEFAULT_MIN_VALUE: f64 = 0.0;
pub const DEFAULT_MAX_VALUE: f64 = 100.0;
pub const DEFAULT_STEP: f64 = 1.0;

/// The effective value of a slider.
///
/// The variant carries the mode: a single-handle slider always holds
/// `Single`, a range slider always holds `Range(low, high)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderValue {
    Single(f64),
    Range(f64, f64),
}

impl SliderValue {
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::Range(..))
    }

    /// The first handle's value (the low end of a range).
    pub const fn low(&self) -> f64 {
        match *self {
            Self::Single(value) | Self::Range(value, _) => value,
        }
    }

    /// The high end of a range, or the single value.
    pub const fn high(&self) -> f64 {
        match *self {
            Self::Single(value) | Self::Range(_, value) => value,
        }
    }

    /// Value held by `handle`, if the slider has that handle.
    pub const fn get(&self, handle: HandleId) -> Option<f64> {
        match (*self, handle) {
            (Self::Single(value), HandleId::First) => Some(value),
            (Self::Single(_), HandleId::Second) => None,
            (Self::Range(low, _), HandleId::First) => Some(low),
            (Self::Range(_, high), HandleId::Second) => Some(high),
        }
    }
}

/// A proposed value, before snapping and collision handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueProposal {
    /// A single value. Moves the first handle in range mode.
    Single(f64),
    /// Both ends of a range. Only the low end is used in single mode.
    Range(f64, f64),
    /// One handle only; the other keeps its previous value.
    Handle(HandleId, f64),
}

impl From<SliderValue> for ValueProposal {
    fn from(value: SliderValue) -> Self {
        match value {
            SliderValue::Single(value) => Self::Single(value),
            SliderValue::Range(low, high) => Self::Range(low, high),
        }
    }
}

/// A partial state change. `None` fields keep their previous setting.
///
/// # Examples
///
/// ```
/// use glidar::{StateUpdate, ValueProposal};
///
/// let update = StateUpdate::default()
///     .with_bounds(0.0, 10.0)
///     .with_step(2.0)
///     .with_value(ValueProposal::Single(3.0));
///
/// assert_eq!(update.min_value, Some(0.0));
/// assert_eq!(update.is_range, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StateUpdate {
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub step: Option<f64>,
    pub is_range: Option<bool>,
    pub value: Option<ValueProposal>,
}

impl StateUpdate {
    #[must_use]
    pub fn with_bounds(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = Some(min_value);
        self.max_value = Some(max_value);
        self
    }

    #[must_use]
    pub fn with_min_value(mut self, min_value: f64) -> Self {
        self.min_value = Some(min_value);
        self
    }

    #[must_use]
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    #[must_use]
    pub fn with_range(mut self, is_range: bool) -> Self {
        self.is_range = Some(is_range);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: ValueProposal) -> Self {
        self.value = Some(value);
        self
    }

    /// Fields of `other` that are set replace the ones in `self`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min_value: other.min_value.or(self.min_value),
            max_value: other.max_value.or(self.max_value),
            step: other.step.or(self.step),
            is_range: other.is_range.or(self.is_range),
            value: other.value.or(self.value),
        }
    }
}

/// A fully validated slider state.
///
/// Produced only by [`crate::ValueEngine`]; the values handed out are copies.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    pub min_value: f64,
    pub max_value: f64,
    pub step: f64,
    pub steps: Lattice,
    pub is_range: bool,
    pub value: SliderValue,
}
