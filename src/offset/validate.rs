use crate::angle::{supported_angles, FittingAngle};
use crate::error::{OffsetError, Result};

use super::OffsetParameters;

/// Checks parameters before any computation, returning the matched fitting.
///
/// Checks run in a fixed order and the first failure wins: offset distance,
/// angle, angle membership, then pipe diameter.
pub(super) fn validate(params: &OffsetParameters) -> Result<FittingAngle> {
    let offset = params.offset_distance;
    if !offset.is_finite() || offset <= 0.0 {
        return Err(OffsetError::InvalidOffsetDistance { value: offset });
    }

    let angle = params.angle;
    if !angle.is_finite() {
        return Err(OffsetError::InvalidAngle { value: angle });
    }
    let Some(fitting) = FittingAngle::from_degrees(angle) else {
        return Err(OffsetError::UnsupportedAngle {
            value: angle,
            supported: supported_angles(),
        });
    };

    if let Some(diameter) = params.pipe_diameter {
        if !diameter.is_finite() || diameter < 0.0 {
            return Err(OffsetError::InvalidPipeDiameter { value: diameter });
        }
    }

    Ok(fitting)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kind(params: &OffsetParameters) -> ErrorKind {
        validate(params).unwrap_err().kind()
    }

    #[test]
    fn accepts_every_supported_angle() {
        for fitting in FittingAngle::ALL {
            let params = OffsetParameters::new(1.0, fitting.degrees());
            assert_eq!(validate(&params).unwrap(), fitting);
        }
    }

    #[test]
    fn rejects_bad_offset_distance() {
        for value in [0.0, -0.0, -10.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let params = OffsetParameters::new(value, 45.0);
            assert_eq!(kind(&params), ErrorKind::InvalidOffsetDistance, "{value}");
        }
    }

    #[test]
    fn rejects_non_finite_angle() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let params = OffsetParameters::new(100.0, value);
            assert_eq!(kind(&params), ErrorKind::InvalidAngle, "{value}");
        }
    }

    #[test]
    fn rejects_unsupported_angle_with_full_table() {
        let err = validate(&OffsetParameters::new(100.0, 0.0)).unwrap_err();
        match err {
            OffsetError::UnsupportedAngle { supported, .. } => {
                assert_eq!(supported, supported_angles());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_bad_pipe_diameter() {
        for value in [-0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let params = OffsetParameters::new(100.0, 45.0).with_pipe_diameter(value);
            assert_eq!(kind(&params), ErrorKind::InvalidPipeDiameter, "{value}");
        }
    }

    #[test]
    fn accepts_zero_pipe_diameter() {
        let params = OffsetParameters::new(100.0, 45.0).with_pipe_diameter(0.0);
        assert!(validate(&params).is_ok());
    }

    #[test]
    fn offset_distance_is_checked_first() {
        let params = OffsetParameters {
            offset_distance: -1.0,
            angle: f64::NAN,
            pipe_diameter: Some(-1.0),
        };
        assert_eq!(kind(&params), ErrorKind::InvalidOffsetDistance);
    }

    #[test]
    fn angle_is_checked_before_diameter() {
        let params = OffsetParameters::new(1.0, 37.0).with_pipe_diameter(-1.0);
        assert_eq!(kind(&params), ErrorKind::UnsupportedAngle);
    }
}
