//! The value engine: owns the slider state and validates every change to it.
//!
//! # Validation
//!
//! [`ValueEngine::set_state`] accepts any subset of fields and never fails.
//! Malformed input is repaired, in this order:
//!
//! 1. **Step**: absolute value; zero or non-finite becomes `1`.
//! 2. **Bounds**: inverted bounds are swapped, equal bounds become
//!    `[min, min + 1]`. A single supplied bound pairs with the retained other
//!    one only if the pair stays ordered; otherwise it is ignored. The step is
//!    then clamped to the resolved span, and widened if the lattice would
//!    exceed [`MAX_POINTS`].
//! 3. **Lattice**: rebuilt from bounds and step.
//! 4. **Mode**: an explicit `is_range` wins, otherwise the mode is kept.
//! 5. **Value**: snapped to the nearest lattice point. In range mode crossed
//!    or collided handles are pulled apart by one lattice step.
//!
//! The resolved value is then stored and broadcast to subscribers.

use log::{debug, trace};

use crate::handle::HandleId;
use crate::lattice::{Lattice, MAX_POINTS};
use crate::observer::{Subscribers, SubscriptionId};
use crate::scale::Linear;
use crate::state::{
    DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, DEFAULT_STEP, SliderState, SliderValue, StateUpdate,
    ValueProposal,
};

/// Owns a [`SliderState`] and is the only thing allowed to change it.
///
/// # Examples
///
/// ```
/// use glidar::{SliderValue, StateUpdate, ValueEngine, ValueProposal};
///
/// let mut engine = ValueEngine::new(
///     StateUpdate::default()
///         .with_bounds(0.0, 10.0)
///         .with_range(true)
///         .with_value(ValueProposal::Range(3.0, 7.0)),
/// );
///
/// // Crossed handles are pulled apart by one step.
/// let value = engine.set_state(StateUpdate::default().with_value(ValueProposal::Range(8.0, 5.0)));
/// assert_eq!(value, SliderValue::Range(4.0, 5.0));
///
/// // Inverted bounds are swapped.
/// engine.set_state(StateUpdate::default().with_bounds(50.0, 10.0));
/// let state = engine.state();
/// assert_eq!((state.min_value, state.max_value), (10.0, 50.0));
/// ```
#[derive(Debug)]
pub struct ValueEngine {
    state: SliderState,
    subscribers: Subscribers<SliderValue>,
}

impl Default for ValueEngine {
    fn default() -> Self {
        Self::new(StateUpdate::default())
    }
}

impl ValueEngine {
    /// Creates an engine from a partial configuration merged over the defaults
    /// (`min 0`, `max 100`, `step 1`, single mode).
    ///
    /// Without an initial value the handles start at the ends of the track:
    /// `min` in single mode, `[min, max]` in range mode.
    pub fn new(initial: StateUpdate) -> Self {
        let defaults = SliderState {
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            step: DEFAULT_STEP,
            steps: Lattice::build(DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE, DEFAULT_STEP),
            is_range: false,
            value: SliderValue::Single(DEFAULT_MIN_VALUE),
        };

        let mut state = validate(&defaults, &initial);
        if initial.value.is_none() {
            state.value = if state.is_range {
                SliderValue::Range(state.steps.first(), state.steps.last())
            } else {
                SliderValue::Single(state.steps.first())
            };
        }
        trace!("slider engine created: {state:?}");

        Self {
            state,
            subscribers: Subscribers::default(),
        }
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> SliderState {
        self.state.clone()
    }

    pub fn value(&self) -> SliderValue {
        self.state.value
    }

    pub fn lattice(&self) -> &Lattice {
        &self.state.steps
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.state.min_value, self.state.max_value)
    }

    pub fn is_range(&self) -> bool {
        self.state.is_range
    }

    /// Applies a partial update, repairing anything invalid.
    ///
    /// Every call notifies subscribers with the resolved value, even when it
    /// did not change.
    pub fn set_state(&mut self, update: StateUpdate) -> SliderValue {
        self.state = validate(&self.state, &update);
        trace!("slider state resolved: {:?}", self.state);

        let value = self.state.value;
        self.subscribers.emit(&value);
        value
    }

    /// Registers a handler called with the resolved value after every update.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&SliderValue) + 'static,
    {
        self.subscribers.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Values for `count` evenly spaced scale labels, snapped to the lattice.
    ///
    /// Labels that snap onto the same lattice point are merged.
    pub fn scale_options(&self, count: usize) -> Vec<f64> {
        let scale = Linear::<f64, f64>::new(self.state.min_value, self.state.max_value);
        let mut options: Vec<f64> = scale
            .options(count)
            .map(|value| self.state.steps.nearest(value))
            .collect();
        options.dedup();
        options
    }
}

fn validate(prev: &SliderState, update: &StateUpdate) -> SliderState {
    let step = resolve_step(prev.step, update.step);
    let (min_value, max_value) = resolve_bounds(prev, update.min_value, update.max_value);

    let span = max_value - min_value;
    let finest = span / (MAX_POINTS - 1) as f64;
    let step = if step > span {
        debug!("step {step} exceeds span {span}, clamping");
        span
    } else if step < finest {
        debug!("step {step} too fine for span {span}, widened to {finest}");
        finest
    } else {
        step
    };

    let steps = Lattice::build(min_value, max_value, step);
    let is_range = update.is_range.unwrap_or(prev.is_range);

    let proposal = update.value.unwrap_or_else(|| prev.value.into());
    let value = if is_range {
        resolve_range(&prev.value, proposal, step, &steps)
    } else {
        resolve_single(&prev.value, proposal, &steps)
    };

    SliderState {
        min_value,
        max_value,
        step,
        steps,
        is_range,
        value,
    }
}

fn resolve_step(prev: f64, step: Option<f64>) -> f64 {
    let Some(step) = step else {
        return prev;
    };
    if step == 0.0 || !step.is_finite() {
        debug!("step {step} replaced by default {DEFAULT_STEP}");
        return DEFAULT_STEP;
    }
    if step < 0.0 {
        debug!("negative step {step} replaced by its magnitude");
    }
    step.abs()
}

fn resolve_bounds(prev: &SliderState, min: Option<f64>, max: Option<f64>) -> (f64, f64) {
    let min = min.filter(|v| v.is_finite());
    let max = max.filter(|v| v.is_finite());

    let (min, max) = match (min, max) {
        (Some(min), Some(max)) => (min, max),
        (None, None) => return (prev.min_value, prev.max_value),
        (Some(min), None) if min < prev.max_value => return (min, prev.max_value),
        (None, Some(max)) if max > prev.min_value => return (prev.min_value, max),
        (min, max) => {
            debug!(
                "lone bound min={min:?} max={max:?} does not fit [{}, {}], ignored",
                prev.min_value, prev.max_value
            );
            return (prev.min_value, prev.max_value);
        }
    };

    if min == max {
        let nudged = min + 1.0;
        if nudged > min {
            debug!("equal bounds {min}, max moved to {nudged}");
            return (min, nudged);
        }
        debug!("equal bounds {min} cannot be separated, keeping previous bounds");
        return (prev.min_value, prev.max_value);
    }

    if min > max {
        debug!("inverted bounds [{min}, {max}] swapped");
        return (max, min);
    }
    (min, max)
}

fn resolve_single(prev: &SliderValue, proposal: ValueProposal, steps: &Lattice) -> SliderValue {
    let raw = match proposal {
        ValueProposal::Single(value)
        | ValueProposal::Range(value, _)
        | ValueProposal::Handle(_, value) => value,
    };
    let raw = if raw.is_finite() { raw } else { prev.low() };
    SliderValue::Single(steps.nearest(raw))
}

fn resolve_range(
    prev: &SliderValue,
    proposal: ValueProposal,
    step: f64,
    steps: &Lattice,
) -> SliderValue {
    // The second handle of a slider that was single until now starts at max.
    let prev_high = match prev {
        SliderValue::Range(_, high) => *high,
        SliderValue::Single(_) => steps.last(),
    };

    let (raw_low, raw_high) = match proposal {
        ValueProposal::Range(low, high) => (low, high),
        ValueProposal::Single(low) | ValueProposal::Handle(HandleId::First, low) => {
            (low, prev_high)
        }
        ValueProposal::Handle(HandleId::Second, high) => (prev.low(), high),
    };
    let raw_low = if raw_low.is_finite() { raw_low } else { prev.low() };
    let raw_high = if raw_high.is_finite() { raw_high } else { prev_high };

    let low = steps.nearest(raw_low);
    let high = steps.nearest(raw_high);
    if low < high {
        return SliderValue::Range(low, high);
    }

    let (low, high) = separate(prev.low(), (raw_low, raw_high), (low, high), step, steps);
    debug!("handles collided at [{raw_low}, {raw_high}], separated to [{low}, {high}]");
    SliderValue::Range(low, high)
}

/// Pulls apart snapped handles where `low >= high`.
///
/// If the low handle kept its previous position the high handle is pushed one
/// step above it, otherwise the low handle is pulled one step below the high.
fn separate(
    prev_low: f64,
    raw: (f64, f64),
    snapped: (f64, f64),
    step: f64,
    steps: &Lattice,
) -> (f64, f64) {
    let (low, high) = snapped;
    let (min, max) = (steps.first(), steps.last());

    if step >= max - min {
        return steps.first_pair();
    }
    if low == high && low == max {
        return steps.last_pair();
    }
    let outside = |value: f64| value < min || value > max;
    if outside(raw.0) && outside(raw.1) {
        return steps.first_pair();
    }

    if low == prev_low {
        steps
            .index_of(low)
            .and_then(|index| steps.get(index + 1))
            .map_or_else(|| steps.last_pair(), |above| (low, above))
    } else {
        steps
            .index_of(high)
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| steps.get(index))
            .map_or_else(|| steps.first_pair(), |below| (below, high))
    }
}
