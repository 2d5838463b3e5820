//! Handles and their layout on the track.

use num_traits::Float;

use crate::scale::Linear;
use crate::state::{SliderState, SliderValue};
use crate::track::Track;

/// Identifies one of the slider's handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleId {
    /// The only handle of a single slider, or the low end of a range.
    First,
    /// The high end of a range.
    Second,
}

/// Where a handle sits and what it shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleView {
    pub id: HandleId,
    /// The handle's effective value, shown in its tooltip.
    pub value: f64,
    /// Pixel offset from the value origin (left edge, or bottom edge when vertical).
    pub offset: f64,
    pub tooltip_visible: bool,
}

/// The handles of a slider. The shape follows the slider's mode.
///
/// # Examples
///
/// ```
/// use glidar::{HandleId, HandleSet, StateUpdate, Track, ValueEngine, ValueProposal};
///
/// let engine = ValueEngine::new(
///     StateUpdate::default()
///         .with_range(true)
///         .with_value(ValueProposal::Range(25.0, 75.0)),
/// );
/// let handles = HandleSet::layout(&engine.state(), &Track::horizontal(400.0), true);
///
/// assert_eq!(handles.len(), 2);
/// assert_eq!(handles.first().offset, 100.0);
/// assert_eq!(handles.get(HandleId::Second).map(|h| h.offset), Some(300.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleSet {
    Single { first: HandleView },
    Range { first: HandleView, second: HandleView },
}

impl HandleSet {
    /// Positions the handles of `state` along `track`.
    pub fn layout<S: Float>(state: &SliderState, track: &Track<S>, tooltip_visible: bool) -> Self {
        let scale = Linear::<f64, f64>::new(state.min_value, state.max_value);
        let view = |id, value: f64| HandleView {
            id,
            value,
            offset: track.offset_of_fraction(scale.normalize_clamped(&value)),
            tooltip_visible,
        };

        match state.value {
            SliderValue::Single(value) => Self::Single {
                first: view(HandleId::First, value),
            },
            SliderValue::Range(low, high) => Self::Range {
                first: view(HandleId::First, low),
                second: view(HandleId::Second, high),
            },
        }
    }

    pub const fn first(&self) -> &HandleView {
        match self {
            Self::Single { first } | Self::Range { first, .. } => first,
        }
    }

    pub const fn second(&self) -> Option<&HandleView> {
        match self {
            Self::Single { .. } => None,
            Self::Range { second, .. } => Some(second),
        }
    }

    pub const fn get(&self, id: HandleId) -> Option<&HandleView> {
        match id {
            HandleId::First => Some(self.first()),
            HandleId::Second => self.second(),
        }
    }

    pub const fn len(&self) -> usize {
        match self {
            Self::Single { .. } => 1,
            Self::Range { .. } => 2,
        }
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &HandleView> {
        std::iter::once(self.first()).chain(self.second())
    }
}
