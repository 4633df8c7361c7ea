use std::fmt;

/// A trade-standard fitting angle supported by the offset calculator.
///
/// The set is fixed at compile time. Adding an angle means adding a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FittingAngle {
    Deg15,
    Deg22_5,
    Deg30,
    Deg45,
    Deg60,
    Deg90,
}

impl FittingAngle {
    /// Every supported angle, in ascending order.
    pub const ALL: [FittingAngle; 6] = [
        FittingAngle::Deg15,
        FittingAngle::Deg22_5,
        FittingAngle::Deg30,
        FittingAngle::Deg45,
        FittingAngle::Deg60,
        FittingAngle::Deg90,
    ];

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> f64 {
        match self {
            Self::Deg15 => 15.0,
            Self::Deg22_5 => 22.5,
            Self::Deg30 => 30.0,
            Self::Deg45 => 45.0,
            Self::Deg60 => 60.0,
            Self::Deg90 => 90.0,
        }
    }

    /// Returns the angle in radians.
    #[must_use]
    pub fn radians(self) -> f64 {
        self.degrees().to_radians()
    }

    /// Looks up the fitting for an angle given in degrees.
    ///
    /// Only exact matches are accepted; `44.999` is not `45`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.degrees() == degrees)
    }

    /// Returns the fitting's trade name, expressed as a fraction of a full turn.
    #[must_use]
    pub fn bend_name(self) -> &'static str {
        match self {
            Self::Deg15 => "1/24 bend",
            Self::Deg22_5 => "1/16 bend",
            Self::Deg30 => "1/12 bend",
            Self::Deg45 => "1/8 bend",
            Self::Deg60 => "1/6 bend",
            Self::Deg90 => "1/4 bend",
        }
    }

    /// Travel per unit of rise (`1 / sin θ`).
    #[must_use]
    pub fn travel_multiplier(self) -> f64 {
        1.0 / self.radians().sin()
    }

    /// Run per unit of rise (`1 / tan θ`).
    ///
    /// For 90° this is a tiny positive residue rather than exactly zero.
    #[must_use]
    pub fn run_multiplier(self) -> f64 {
        1.0 / self.radians().tan()
    }
}

impl fmt::Display for FittingAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Returns the supported angles in degrees, ascending.
///
/// Each call returns a freshly allocated vector owned by the caller.
#[must_use]
pub fn supported_angles() -> Vec<f64> {
    FittingAngle::ALL.iter().map(|a| a.degrees()).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn table_is_ascending_and_complete() {
        assert_eq!(supported_angles(), vec![15.0, 22.5, 30.0, 45.0, 60.0, 90.0]);
        assert!(FittingAngle::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn from_degrees_round_trips_every_variant() {
        for angle in FittingAngle::ALL {
            assert_eq!(FittingAngle::from_degrees(angle.degrees()), Some(angle));
        }
    }

    #[test]
    fn from_degrees_rejects_near_misses() {
        assert_eq!(FittingAngle::from_degrees(37.0), None);
        assert_eq!(FittingAngle::from_degrees(44.999), None);
        assert_eq!(FittingAngle::from_degrees(-45.0), None);
        assert_eq!(FittingAngle::from_degrees(f64::NAN), None);
    }

    #[test]
    fn forty_five_multipliers() {
        let a = FittingAngle::Deg45;
        assert_relative_eq!(a.travel_multiplier(), 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(a.run_multiplier(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn thirty_multipliers() {
        let a = FittingAngle::Deg30;
        assert_relative_eq!(a.travel_multiplier(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(a.run_multiplier(), 3.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn ninety_run_multiplier_is_tiny_not_zero() {
        let m = FittingAngle::Deg90.run_multiplier();
        assert_abs_diff_eq!(m, 0.0, epsilon = 1e-12);
        assert!(m != 0.0);
    }

    #[test]
    fn bend_names() {
        assert_eq!(FittingAngle::Deg22_5.bend_name(), "1/16 bend");
        assert_eq!(FittingAngle::Deg90.bend_name(), "1/4 bend");
    }

    #[test]
    fn display_uses_degree_sign() {
        assert_eq!(FittingAngle::Deg22_5.to_string(), "22.5°");
        assert_eq!(FittingAngle::Deg60.to_string(), "60°");
    }

    #[test]
    fn returned_table_is_independent() {
        let mut first = supported_angles();
        first.push(7.5);
        first[0] = 0.0;
        assert_eq!(supported_angles(), vec![15.0, 22.5, 30.0, 45.0, 60.0, 90.0]);
    }
}
