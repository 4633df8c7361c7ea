/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Relative tolerance for geometric identities such as `travel² = rise² + run²`.
pub const TOLERANCE: f64 = 1e-9;
