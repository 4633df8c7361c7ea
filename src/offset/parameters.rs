use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{OffsetError, Result};

/// Caller-supplied inputs for a single offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetParameters {
    /// Required vertical offset (the rise).
    pub offset_distance: f64,
    /// Fitting angle in degrees.
    pub angle: f64,
    /// Outer pipe diameter, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipe_diameter: Option<f64>,
}

impl OffsetParameters {
    /// Creates parameters without a pipe diameter.
    #[must_use]
    pub fn new(offset_distance: f64, angle: f64) -> Self {
        Self {
            offset_distance,
            angle,
            pipe_diameter: None,
        }
    }

    /// Sets the pipe diameter.
    #[must_use]
    pub fn with_pipe_diameter(mut self, pipe_diameter: f64) -> Self {
        self.pipe_diameter = Some(pipe_diameter);
        self
    }

    /// Reads parameters from a loosely-typed JSON record.
    ///
    /// Accepts `{ "offsetDistance": .., "angle": .., "pipeDiameter": .. }`.
    /// A missing or non-numeric `offsetDistance` or `angle`, and a non-numeric
    /// `pipeDiameter`, become NaN so that
    /// [`OffsetCalculator::calculate_offset`](super::OffsetCalculator::calculate_offset)
    /// rejects them with the matching error kind and in the usual order.
    /// `"pipeDiameter": null` is the same as leaving it out.
    ///
    /// # Errors
    ///
    /// Returns [`OffsetError::InvalidOffsetDistance`] if `value` is not an object.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Some(record) = value.as_object() else {
            return Err(OffsetError::InvalidOffsetDistance { value: f64::NAN });
        };

        let number = |key: &str| record.get(key).and_then(Value::as_f64).unwrap_or(f64::NAN);
        let pipe_diameter = match record.get("pipeDiameter") {
            None | Some(Value::Null) => None,
            Some(v) => Some(v.as_f64().unwrap_or(f64::NAN)),
        };

        Ok(Self {
            offset_distance: number("offsetDistance"),
            angle: number("angle"),
            pipe_diameter,
        })
    }
}
