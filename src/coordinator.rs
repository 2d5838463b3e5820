//! Pointer interaction: turns track clicks, handle drags and scale clicks
//! into value proposals for the [`ValueEngine`].
//!
//! # Drag lifecycle
//!
//! ```text
//! Idle -> Dragging -> Idle
//! ```
//!
//! A drag starts on a pointer-down over a handle, or right after a track click
//! has moved a handle, so the same gesture can keep dragging it. Every pointer
//! move while dragging proposes a new value. Releasing the pointer anywhere
//! ends the session; the last proposed value stays.

use log::{debug, trace};
use num_traits::Float;

use crate::engine::ValueEngine;
use crate::handle::HandleId;
use crate::scale::{Linear, Scale};
use crate::state::{SliderValue, StateUpdate, ValueProposal};
use crate::track::{ScreenPoint, Track};

/// An open pointer-down-to-pointer-up gesture on one handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub active_handle: HandleId,
    /// Axis distance in pixels between the pointer and the handle's anchor
    /// when the drag started. Held for the whole session so the handle does
    /// not jump to the pointer.
    pub pointer_offset: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Maps pointer input onto a [`ValueEngine`] it owns.
///
/// # Examples
///
/// ```
/// use glidar::{InteractionCoordinator, ScreenPoint, SliderValue, StateUpdate, Track, ValueEngine};
///
/// let engine = ValueEngine::new(StateUpdate::default().with_bounds(0.0, 100.0).with_step(10.0));
/// let mut slider = InteractionCoordinator::new(engine);
/// let track = Track::horizontal(500.0);
///
/// // A click at 42% of the track lands on the 40 step...
/// let value = slider.bar_pointer_down(&ScreenPoint::new(210.0, 8.0), &track);
/// assert_eq!(value, SliderValue::Single(40.0));
///
/// // ...and keeps dragging until the pointer is released.
/// assert!(slider.is_dragging());
/// slider.pointer_move(&ScreenPoint::new(400.0, 8.0), &track);
/// slider.pointer_up();
///
/// assert_eq!(slider.engine().value(), SliderValue::Single(80.0));
/// assert_eq!(slider.pointer_move(&ScreenPoint::new(0.0, 8.0), &track), None);
/// ```
#[derive(Debug, Default)]
pub struct InteractionCoordinator {
    engine: ValueEngine,
    drag: DragState,
}

impl InteractionCoordinator {
    pub fn new(engine: ValueEngine) -> Self {
        Self {
            engine,
            drag: DragState::Idle,
        }
    }

    pub fn engine(&self) -> &ValueEngine {
        &self.engine
    }

    /// Access for live reconfiguration. Allowed mid-drag: the next pointer
    /// move is validated against the new state.
    pub fn engine_mut(&mut self) -> &mut ValueEngine {
        &mut self.engine
    }

    pub fn into_engine(self) -> ValueEngine {
        self.engine
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    pub fn active_handle(&self) -> Option<HandleId> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session.active_handle),
        }
    }

    /// Pointer-down on the bare track.
    ///
    /// Moves the nearest handle to the clicked position and opens a drag
    /// session on it.
    pub fn bar_pointer_down<S: Float>(
        &mut self,
        point: &ScreenPoint<S>,
        track: &Track<S>,
    ) -> SliderValue {
        let raw = self.value_at_fraction(track.fraction_at(point));
        let handle = self.nearest_handle(raw);
        let value = self.propose(handle, raw);

        self.begin_drag(DragSession {
            active_handle: handle,
            pointer_offset: 0.0,
        });
        value
    }

    /// Pointer-down on a handle. Opens a drag session without changing the value.
    ///
    /// Returns `None`, and stays idle, for a handle the slider does not have.
    pub fn handle_pointer_down<S: Float>(
        &mut self,
        handle: HandleId,
        point: &ScreenPoint<S>,
        track: &Track<S>,
    ) -> Option<DragSession> {
        let Some(value) = self.engine.value().get(handle) else {
            debug!("pointer down on missing handle {handle:?} ignored");
            return None;
        };

        let anchor = track.offset_of_fraction(self.fraction_of_value(value));
        let session = DragSession {
            active_handle: handle,
            pointer_offset: track.axis_offset(point) - anchor,
        };
        self.begin_drag(session);
        Some(session)
    }

    /// Pointer-move. Proposes a value for the dragged handle.
    ///
    /// Returns `None` without touching the engine when no drag is open.
    pub fn pointer_move<S: Float>(
        &mut self,
        point: &ScreenPoint<S>,
        track: &Track<S>,
    ) -> Option<SliderValue> {
        let DragState::Dragging(session) = self.drag else {
            debug!("pointer move without an open drag ignored");
            return None;
        };

        let offset = track.axis_offset(point) - session.pointer_offset;
        let raw = self.value_at_fraction(track.fraction_at_offset(offset));
        Some(self.propose(session.active_handle, raw))
    }

    /// Pointer-up. Ends the open drag session, if any, and returns it.
    pub fn pointer_up(&mut self) -> Option<DragSession> {
        match std::mem::take(&mut self.drag) {
            DragState::Idle => None,
            DragState::Dragging(session) => {
                trace!("drag ended: {session:?}");
                Some(session)
            }
        }
    }

    /// Click on a scale label. Moves the nearest handle; no drag is opened.
    pub fn scale_option_click(&mut self, value: f64) -> SliderValue {
        let handle = self.nearest_handle(value);
        self.propose(handle, value)
    }

    fn begin_drag(&mut self, session: DragSession) {
        if let DragState::Dragging(previous) = self.drag {
            debug!("drag {previous:?} replaced without pointer up");
        }
        trace!("drag started: {session:?}");
        self.drag = DragState::Dragging(session);
    }

    /// The handle whose current value is closest to `raw`; ties go to the first.
    fn nearest_handle(&self, raw: f64) -> HandleId {
        match self.engine.value() {
            SliderValue::Single(_) => HandleId::First,
            SliderValue::Range(low, high) => {
                if (raw - low).abs() <= (raw - high).abs() {
                    HandleId::First
                } else {
                    HandleId::Second
                }
            }
        }
    }

    fn propose(&mut self, handle: HandleId, raw: f64) -> SliderValue {
        let proposal = if self.engine.is_range() {
            ValueProposal::Handle(handle, raw)
        } else {
            ValueProposal::Single(raw)
        };
        self.engine
            .set_state(StateUpdate::default().with_value(proposal))
    }

    fn scale(&self) -> Linear<f64, f64> {
        let (min, max) = self.engine.bounds();
        Linear::new(min, max)
    }

    fn value_at_fraction(&self, fraction: f64) -> f64 {
        self.scale().denormalize(fraction)
    }

    fn fraction_of_value(&self, value: f64) -> f64 {
        self.scale().normalize_clamped(&value)
    }
}
