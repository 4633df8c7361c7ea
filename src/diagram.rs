use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// Snapshot of an offset calculation for a rendering component.
///
/// Holds its own copies of the dimensions rather than references into the
/// [`OffsetResult`](crate::offset::OffsetResult) it was built alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramData {
    pub offset_distance: f64,
    /// Fitting angle in degrees.
    pub angle: f64,
    pub travel: f64,
    pub rise: f64,
    pub run: f64,
    /// Diameter applied as a travel correction; a supplied `0` applies none and is recorded as `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipe_diameter: Option<f64>,
}

impl DiagramData {
    /// Lays the offset out as a right triangle in diagram space.
    ///
    /// The run lies along +X from the origin and the rise along +Y, so the
    /// hypotenuse is the angled section. With a pipe diameter correction the
    /// recorded `travel` is longer than the drawn hypotenuse.
    #[must_use]
    pub fn vertices(&self) -> OffsetTriangle {
        OffsetTriangle {
            start: Point2::new(0.0, 0.0),
            corner: Point2::new(self.run, 0.0),
            end: Point2::new(self.run, self.rise),
        }
    }
}

/// The three corners of an offset triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetTriangle {
    /// Where the angled section leaves the original run.
    pub start: Point2,
    /// The right-angle corner below `end`.
    pub corner: Point2,
    /// Where the angled section rejoins the offset run.
    pub end: Point2,
}

impl OffsetTriangle {
    /// Length of the angled leg, `start → end`.
    #[must_use]
    pub fn travel_length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Length of the horizontal leg, `start → corner`.
    #[must_use]
    pub fn run_length(&self) -> f64 {
        (self.corner - self.start).norm()
    }

    /// Length of the vertical leg, `corner → end`.
    #[must_use]
    pub fn rise_length(&self) -> f64 {
        (self.end - self.corner).norm()
    }

    /// Returns the `(min, max)` corners of the axis-aligned bounding box.
    #[must_use]
    pub fn bounds(&self) -> (Point2, Point2) {
        let pts = [self.start, self.corner, self.end];
        let mut min = pts[0];
        let mut max = pts[0];
        for p in &pts[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }
}
