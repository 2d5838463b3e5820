//! Slider options as supplied by a host page or a settings file.
//!
//! Field names are camelCase, matching the attribute names used by the
//! widget's markup (`minValue`, `isVertical`, ...). Every field is optional;
//! omitted ones keep their current (or default) setting.
//!
//! # Examples
//!
//! ```
//! use glidar::{Options, Orientation, ValueProposal};
//!
//! let options = Options::from_json(
//!     r#"{ "minValue": -101, "maxValue": 100, "step": 8,
//!          "value": [-50, 50], "isVertical": true, "scaleOptionsNum": 5 }"#,
//! )?;
//!
//! let update = options.slider.to_update()?;
//! assert_eq!(update.is_range, Some(true));
//! assert_eq!(update.value, Some(ValueProposal::Range(-50.0, 50.0)));
//! assert_eq!(options.view.orientation(), Orientation::Vertical);
//! # Ok::<(), glidar::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::state::{SliderState, SliderValue, StateUpdate, ValueProposal};
use crate::track::Orientation;

/// A configured value: one number, or a one- or two-element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Number(f64),
    List(Vec<f64>),
}

impl From<SliderValue> for ConfigValue {
    fn from(value: SliderValue) -> Self {
        match value {
            SliderValue::Single(value) => Self::Number(value),
            SliderValue::Range(low, high) => Self::List(vec![low, high]),
        }
    }
}

/// Value-engine options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ConfigValue>,
    #[serde(default, alias = "range", skip_serializing_if = "Option::is_none")]
    pub is_range: Option<bool>,
}

impl SliderConfig {
    /// Snapshot of a resolved state.
    pub fn from_state(state: &SliderState) -> Self {
        Self {
            min_value: Some(state.min_value),
            max_value: Some(state.max_value),
            step: Some(state.step),
            value: Some(state.value.into()),
            is_range: Some(state.is_range),
        }
    }

    /// Converts to an engine update.
    ///
    /// A two-element value without an explicit `isRange` switches to range mode.
    pub fn to_update(&self) -> Result<StateUpdate> {
        let value = match &self.value {
            None => None,
            Some(ConfigValue::Number(value)) => Some(ValueProposal::Single(*value)),
            Some(ConfigValue::List(values)) => match values.as_slice() {
                [value] => Some(ValueProposal::Single(*value)),
                [low, high] => Some(ValueProposal::Range(*low, *high)),
                _ => return Err(Error::ValueArity { len: values.len() }),
            },
        };

        let implied_range = matches!(value, Some(ValueProposal::Range(..))).then_some(true);

        Ok(StateUpdate {
            min_value: self.min_value,
            max_value: self.max_value,
            step: self.step,
            is_range: self.is_range.or(implied_range),
            value,
        })
    }
}

/// Presentation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vertical: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_options_num: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_tooltip_disabled: Option<bool>,
}

impl ViewOptions {
    pub fn orientation(&self) -> Orientation {
        if self.is_vertical.unwrap_or(false) {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// Number of scale labels; `0` means no scale.
    pub fn scale_options_num(&self) -> usize {
        self.scale_options_num.unwrap_or(0)
    }

    pub fn tooltip_visible(&self) -> bool {
        !self.is_tooltip_disabled.unwrap_or(false)
    }

    /// Fields set in `other` replace the ones in `self`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            is_vertical: other.is_vertical.or(self.is_vertical),
            scale_options_num: other.scale_options_num.or(self.scale_options_num),
            is_tooltip_disabled: other.is_tooltip_disabled.or(self.is_tooltip_disabled),
        }
    }
}

/// All options of a slider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    #[serde(flatten)]
    pub slider: SliderConfig,
    #[serde(flatten)]
    pub view: ViewOptions,
}

impl Options {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options() {
        let options = Options::from_json("{}").unwrap();

        assert_eq!(options, Options::default());
        assert_eq!(options.slider.to_update().unwrap(), StateUpdate::default());
        assert_eq!(options.view.orientation(), Orientation::Horizontal);
        assert!(options.view.tooltip_visible());
        assert_eq!(options.view.scale_options_num(), 0);
    }

    #[test]
    fn test_single_value_options() {
        let options = Options::from_json(
            r#"{"minValue": -33, "maxValue": 103, "step": 5, "value": 75, "scaleOptionsNum": 6}"#,
        )
        .unwrap();

        let update = options.slider.to_update().unwrap();
        assert_eq!(update.min_value, Some(-33.0));
        assert_eq!(update.max_value, Some(103.0));
        assert_eq!(update.step, Some(5.0));
        assert_eq!(update.value, Some(ValueProposal::Single(75.0)));
        assert_eq!(update.is_range, None);
        assert_eq!(options.view.scale_options_num(), 6);
    }

    #[test]
    fn test_range_alias() {
        let options = Options::from_json(r#"{"range": false, "value": [1, 2]}"#).unwrap();

        let update = options.slider.to_update().unwrap();
        assert_eq!(update.is_range, Some(false));
    }

    #[test]
    fn test_bad_value_arity() {
        let options = Options::from_json(r#"{"value": [1, 2, 3]}"#).unwrap();

        let err = options.slider.to_update().unwrap_err();
        assert!(matches!(err, Error::ValueArity { len: 3 }));
        assert_eq!(err.to_string(), "slider value must have 1 or 2 elements, got 3");
    }

    #[test]
    fn test_malformed_json() {
        let err = Options::from_json(r#"{"minValue": "low"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_view_merge() {
        let base = ViewOptions {
            is_vertical: Some(true),
            scale_options_num: Some(5),
            is_tooltip_disabled: None,
        };
        let merged = base.merge(ViewOptions {
            is_tooltip_disabled: Some(true),
            ..ViewOptions::default()
        });

        assert_eq!(merged.orientation(), Orientation::Vertical);
        assert_eq!(merged.scale_options_num(), 5);
        assert!(!merged.tooltip_visible());
    }

    #[test]
    fn test_json_snapshot_roundtrip() {
        let options = Options {
            slider: SliderConfig {
                min_value: Some(0.0),
                max_value: Some(10.0),
                value: Some(ConfigValue::List(vec![2.0, 8.0])),
                ..SliderConfig::default()
            },
            view: ViewOptions {
                is_vertical: Some(true),
                ..ViewOptions::default()
            },
        };

        let json = options.to_json().unwrap();
        assert!(json.contains("\"minValue\":0.0"));
        assert!(json.contains("\"isVertical\":true"));
        assert_eq!(Options::from_json(&json).unwrap(), options);
    }
}
