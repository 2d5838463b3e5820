//! A configured slider: value engine, pointer coordinator and view options
//! behind one handle.

use num_traits::Float;

use crate::config::{Options, SliderConfig, ViewOptions};
use crate::coordinator::InteractionCoordinator;
use crate::engine::ValueEngine;
use crate::error::Result;
use crate::handle::HandleSet;
use crate::observer::SubscriptionId;
use crate::state::{SliderState, SliderValue, StateUpdate, ValueProposal};
use crate::track::{Orientation, Track};

/// A slider built from [`Options`].
///
/// Pointer input goes through [`Slider::coordinator_mut`]; the host's
/// rendering layer reads back [`Slider::layout`] and [`Slider::scale_options`].
///
/// # Examples
///
/// ```
/// use glidar::{ScreenPoint, Slider, SliderValue};
///
/// let mut slider = Slider::from_json(
///     r#"{ "minValue": 0, "maxValue": 100, "step": 2, "value": [50, 80], "scaleOptionsNum": 5 }"#,
/// )?;
/// assert_eq!(slider.scale_options(), vec![0.0, 24.0, 50.0, 74.0, 100.0]);
///
/// let track = slider.track(400.0);
/// slider.coordinator_mut().bar_pointer_down(&ScreenPoint::new(360.0, 5.0), &track);
/// slider.coordinator_mut().pointer_up();
/// assert_eq!(slider.value(), SliderValue::Range(50.0, 90.0));
///
/// let handles = slider.layout(400.0);
/// assert_eq!(handles.first().offset, 200.0);
/// # Ok::<(), glidar::Error>(())
/// ```
#[derive(Debug)]
pub struct Slider {
    coordinator: InteractionCoordinator,
    view: ViewOptions,
}

impl Slider {
    pub fn new(options: Options) -> Result<Self> {
        let update = options.slider.to_update()?;
        Ok(Self {
            coordinator: InteractionCoordinator::new(ValueEngine::new(update)),
            view: options.view,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(Options::from_json(json)?)
    }

    /// Live reconfiguration. Omitted options keep their current setting.
    ///
    /// Invalid options are rejected before anything changes.
    pub fn update(&mut self, options: Options) -> Result<SliderValue> {
        let update = options.slider.to_update()?;
        self.view = self.view.merge(options.view);
        Ok(self.coordinator.engine_mut().set_state(update))
    }

    /// Current options, with every field filled in.
    pub fn options(&self) -> Options {
        Options {
            slider: SliderConfig::from_state(&self.state()),
            view: ViewOptions {
                is_vertical: Some(self.orientation() == Orientation::Vertical),
                scale_options_num: Some(self.view.scale_options_num()),
                is_tooltip_disabled: Some(!self.view.tooltip_visible()),
            },
        }
    }

    pub fn value(&self) -> SliderValue {
        self.coordinator.engine().value()
    }

    pub fn set_value(&mut self, value: ValueProposal) -> SliderValue {
        self.coordinator
            .engine_mut()
            .set_state(StateUpdate::default().with_value(value))
    }

    pub fn state(&self) -> SliderState {
        self.coordinator.engine().state()
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&SliderValue) + 'static,
    {
        self.coordinator.engine_mut().subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.coordinator.engine_mut().unsubscribe(id)
    }

    pub fn view_options(&self) -> &ViewOptions {
        &self.view
    }

    pub fn orientation(&self) -> Orientation {
        self.view.orientation()
    }

    /// A track of the given pixel length in this slider's orientation.
    pub fn track<S>(&self, length: S) -> Track<S> {
        Track::new(length, self.orientation())
    }

    /// Values of the scale labels, empty when the scale is off.
    pub fn scale_options(&self) -> Vec<f64> {
        self.coordinator
            .engine()
            .scale_options(self.view.scale_options_num())
    }

    /// Handle positions for a track of `track_length` pixels.
    pub fn layout<S: Float>(&self, track_length: S) -> HandleSet {
        HandleSet::layout(
            &self.state(),
            &self.track(track_length),
            self.view.tooltip_visible(),
        )
    }

    pub fn coordinator(&self) -> &InteractionCoordinator {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut InteractionCoordinator {
        &mut self.coordinator
    }
}
