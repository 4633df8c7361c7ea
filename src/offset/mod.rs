//! Travel, run and cut-length calculation for a single angled pipe offset.

mod parameters;
mod validate;

pub use parameters::OffsetParameters;

use serde::{Deserialize, Serialize};

use crate::angle::supported_angles;
use crate::diagram::DiagramData;
use crate::error::Result;

use validate::validate;

/// Dimensions of a fabricated offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetResult {
    /// Vertical leg; always the input offset distance.
    pub rise: f64,
    /// Horizontal leg.
    pub run: f64,
    /// Length of the angled section, including any pipe diameter correction.
    pub travel: f64,
    /// Length to cut the angled segment to. Equal to `travel` for a single offset.
    pub cut_length: f64,
    pub diagram: DiagramData,
}

/// Computes offset dimensions for the supported fitting angles.
///
/// The calculator holds no state; construct one wherever it is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetCalculator;

impl OffsetCalculator {
    /// Creates a new calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the supported angles in degrees as a caller-owned copy.
    #[must_use]
    pub fn supported_angles(&self) -> Vec<f64> {
        supported_angles()
    }

    /// Calculates rise, run, travel and cut length for an offset.
    ///
    /// `travel = rise / sin θ` and `run = rise / tan θ`. A positive pipe
    /// diameter lengthens travel by `diameter / sin θ`; a diameter of zero is
    /// treated exactly like no diameter. At 90° the run is a tiny positive
    /// residue of the floating-point tangent, not exactly zero.
    ///
    /// # Errors
    ///
    /// Returns an [`OffsetError`](crate::OffsetError) if the offset distance
    /// is not a positive finite number, the angle is not finite or not a
    /// supported angle, or the pipe diameter is negative or not finite.
    pub fn calculate_offset(&self, params: &OffsetParameters) -> Result<OffsetResult> {
        let fitting = validate(params).inspect_err(|err| {
            tracing::debug!(kind = ?err.kind(), %err, "rejected offset parameters");
        })?;

        let radians = params.angle.to_radians();
        let sin = radians.sin();

        let rise = params.offset_distance;
        let mut travel = rise / sin;
        let run = rise / radians.tan();

        let pipe_diameter = params.pipe_diameter.filter(|d| *d > 0.0);
        if let Some(diameter) = pipe_diameter {
            travel += diameter / sin;
        }
        let cut_length = travel;

        tracing::debug!(
            rise,
            angle = %fitting,
            ?pipe_diameter,
            travel,
            run,
            "calculated offset"
        );

        Ok(OffsetResult {
            rise,
            run,
            travel,
            cut_length,
            diagram: DiagramData {
                offset_distance: rise,
                angle: params.angle,
                travel,
                rise,
                run,
                pipe_diameter,
            },
        })
    }
}
