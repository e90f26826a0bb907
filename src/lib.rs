#[cfg(feature = "cli")]
#[macro_use]
extern crate log;

pub mod segment;
#[cfg(feature = "cli")]
pub mod tool;
pub mod vec2;

pub use segment::{DegenerateSegmentError, Directed, Orientation, Segment, COLLINEAR_EPSILON};
#[cfg(feature = "cli")]
pub use tool::{run_projection, ProjectParams};
pub use vec2::Vec2f;
