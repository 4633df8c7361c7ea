pub mod angle;
pub mod diagram;
pub mod error;
pub mod math;
pub mod offset;

pub use angle::{supported_angles, FittingAngle};
pub use diagram::{DiagramData, OffsetTriangle};
pub use error::{ErrorKind, OffsetError, Result};
pub use offset::{OffsetCalculator, OffsetParameters, OffsetResult};
