//! Slider value engine
//!
//! `glidar` is the headless core of a slider widget: it keeps a slider's value
//! legal and turns pointer gestures into value changes. Rendering is left to the
//! host; it reads handle positions back out and feeds pointer samples in.
//!
//! # Core Concepts
//!
//! ## Value engine
//!
//! [`ValueEngine`] owns the slider state (bounds, step, mode and value) and is
//! the only thing that changes it. Every change goes through one validation
//! pipeline that repairs malformed input instead of rejecting it:
//! - Steps and bounds are normalized
//! - Values snap to the [`Lattice`] of legal values
//! - Crossed range handles are pulled apart
//!
//! Subscribers registered with [`ValueEngine::subscribe`] see every resolved value.
//!
//! ## Interaction
//!
//! [`InteractionCoordinator`] maps pointer input on a [`Track`] to value
//! proposals for the engine:
//! - [`ScreenPoint`] - Pointer samples in pixels
//! - [`Track`] - Track length and [`Orientation`]; vertical tracks grow upward
//! - [`DragState`] - Idle, or dragging one handle
//!
//! ## Configuration
//!
//! [`Options`] reads the camelCase options of a host page from JSON, and
//! [`Slider`] bundles everything behind one handle.
//!
//! # Examples
//!
//! ## Validating values
//!
//! ```rust
//! use glidar::{SliderValue, StateUpdate, ValueEngine, ValueProposal};
//!
//! let mut engine = ValueEngine::new(StateUpdate::default().with_bounds(0.0, 100.0).with_step(10.0));
//!
//! // Values snap to the nearest step.
//! assert_eq!(engine.set_state(StateUpdate::default().with_value(ValueProposal::Single(37.0))), SliderValue::Single(40.0));
//!
//! // Broken steps are repaired.
//! engine.set_state(StateUpdate::default().with_step(0.0));
//! assert_eq!(engine.state().step, 1.0);
//! ```
//!
//! ## Pointer input
//!
//! ```rust
//! use glidar::{InteractionCoordinator, ScreenPoint, SliderValue, StateUpdate, Track, ValueEngine};
//!
//! let engine = ValueEngine::new(StateUpdate::default().with_bounds(0.0, 100.0).with_step(10.0));
//! let mut coordinator = InteractionCoordinator::new(engine);
//! let track = Track::horizontal(500.0);
//!
//! // A click at 42% of the track lands on 40.
//! let value = coordinator.bar_pointer_down(&ScreenPoint::new(210.0, 8.0), &track);
//! assert_eq!(value, SliderValue::Single(40.0));
//!
//! // The click opened a drag; moving the pointer keeps adjusting the value.
//! coordinator.pointer_move(&ScreenPoint::new(400.0, 8.0), &track);
//! coordinator.pointer_up();
//! assert_eq!(coordinator.engine().value(), SliderValue::Single(80.0));
//! ```
//!
//! ## Scales
//!
//! ```rust
//! use glidar::{Scale, scale::Linear};
//!
//! let scale = Linear::<f64, f64>::new(-50.0, 50.0);
//! assert_eq!(scale.normalize(&0.0), 0.5);
//! assert_eq!(scale.denormalize(0.25), -25.0);
//! ```
//!

pub mod config;
pub mod coordinator;
pub mod engine;
pub mod error;
pub mod handle;
pub mod lattice;
pub mod observer;
pub mod scale;
pub mod slider;
pub mod state;
pub mod track;

pub use num_traits::Float;

pub use config::{ConfigValue, Options, SliderConfig, ViewOptions};
pub use coordinator::{DragSession, DragState, InteractionCoordinator};
pub use engine::ValueEngine;
pub use error::{Error, Result};
pub use handle::{HandleId, HandleSet, HandleView};
pub use lattice::Lattice;
pub use observer::SubscriptionId;
pub use scale::Scale;
pub use slider::Slider;
pub use state::{SliderState, SliderValue, StateUpdate, ValueProposal};
pub use track::{Orientation, ScreenPoint, Track};
