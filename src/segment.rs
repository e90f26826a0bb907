#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::vec2::Vec2f;

/// Anything that has a direction vector `(a, b)` and can take part in a dot product with a segment.
pub trait Directed {
    fn direction(&self) -> Vec2f;
}

impl Directed for Vec2f {
    fn direction(&self) -> Vec2f {
        *self
    }
}

/// Directed line segment from `(x1, y1)` to `(x2, y2)`.
///
/// The direction vector `a = x2 - x1`, `b = y2 - y1` is derived once on construction.
/// There are no mutating methods, so it always matches the endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(from = "Endpoints", into = "Endpoints")
)]
pub struct Segment {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    a: f64,
    b: f64,
}

impl Segment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            a: x2 - x1,
            b: y2 - y1,
        }
    }

    pub fn from_points(begin: Vec2f, end: Vec2f) -> Self {
        Self::new(begin.x, begin.y, end.x, end.y)
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn x2(&self) -> f64 {
        self.x2
    }

    pub fn y2(&self) -> f64 {
        self.y2
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn begin(&self) -> Vec2f {
        Vec2f::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Vec2f {
        Vec2f::new(self.x2, self.y2)
    }

    pub fn dot<T: Directed>(&self, other: &T) -> f64 {
        let other = other.direction();
        self.a * other.x + self.b * other.y
    }

    pub fn dot_self(&self) -> f64 {
        self.dot(self)
    }

    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }

    /// Coefficient `t` such that `begin + t * (a, b)` is the orthogonal foot of `(x, y)`.
    /// Not clamped to `[0, 1]`. NaN for a degenerate segment.
    pub fn projection_scalar(&self, x: f64, y: f64) -> f64 {
        let to_point = Segment::new(self.x1, self.y1, x, y);
        to_point.dot(self) / self.dot_self()
    }

    /// Orthogonal projection of `(x, y)` onto the infinite line through both endpoints.
    ///
    /// A degenerate segment gives NaN coordinates, see [`Segment::try_project_point`]
    /// for the checked version.
    pub fn project_point(&self, x: f64, y: f64) -> Vec2f {
        self.begin() + self.direction() * self.projection_scalar(x, y)
    }

    pub fn try_project_point(&self, x: f64, y: f64) -> Result<Vec2f, DegenerateSegmentError> {
        if self.is_degenerate() {
            return Err(DegenerateSegmentError { point: self.begin() });
        }
        Ok(self.project_point(x, y))
    }

    /// Whether `(x, y)` lies inside the axis-aligned box spanned by the endpoints.
    pub fn bounding_box_contains(&self, x: f64, y: f64) -> bool {
        x <= self.x1.max(self.x2)
            && x >= self.x1.min(self.x2)
            && y <= self.y1.max(self.y2)
            && y >= self.y1.min(self.y2)
    }

    /// Turn direction when walking from `begin` through `end` to `(x, y)`.
    pub fn orientation(&self, x: f64, y: f64) -> Orientation {
        let turn = self.direction().cross(Vec2f::new(x, y) - self.end());
        if turn.abs() <= COLLINEAR_EPSILON {
            Orientation::Collinear
        } else if turn > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }

    /// Whether `(x, y)` lies on the segment itself, endpoints included.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.bounding_box_contains(x, y) && self.orientation(x, y) == Orientation::Collinear
    }

    pub fn intersects(&self, other: &Segment) -> bool {
        let o1 = self.orientation(other.x1, other.y1);
        let o2 = self.orientation(other.x2, other.y2);
        let o3 = other.orientation(self.x1, self.y1);
        let o4 = other.orientation(self.x2, self.y2);
        if o1 != o2 && o3 != o4 {
            return true;
        }
        (o1 == Orientation::Collinear && self.bounding_box_contains(other.x1, other.y1))
            || (o2 == Orientation::Collinear && self.bounding_box_contains(other.x2, other.y2))
            || (o3 == Orientation::Collinear && other.bounding_box_contains(self.x1, self.y1))
            || (o4 == Orientation::Collinear && other.bounding_box_contains(self.x2, self.y2))
    }
}

/// Absolute tolerance on the cross product below which three points count as collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Directed for Segment {
    fn direction(&self) -> Vec2f {
        Vec2f::new(self.a, self.b)
    }
}

/// Returned by [`Segment::try_project_point`] when both endpoints are at `point`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegenerateSegmentError {
    pub point: Vec2f,
}

impl std::fmt::Display for DegenerateSegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Can't project onto zero-length segment at ({}, {})",
            self.point.x, self.point.y
        )
    }
}

impl std::error::Error for DegenerateSegmentError {}

#[cfg(feature = "serde")]
#[derive(Deserialize, Serialize)]
struct Endpoints {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

#[cfg(feature = "serde")]
impl From<Endpoints> for Segment {
    fn from(v: Endpoints) -> Self {
        Segment::new(v.x1, v.y1, v.x2, v.y2)
    }
}

#[cfg(feature = "serde")]
impl From<Segment> for Endpoints {
    fn from(v: Segment) -> Self {
        Endpoints {
            x1: v.x1,
            y1: v.y1,
            x2: v.x2,
            y2: v.y2,
        }
    }
}
