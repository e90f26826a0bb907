use clap::Parser;

use crate::segment::{DegenerateSegmentError, Segment};
use crate::vec2::Vec2f;

/// Projects a point onto the line through a segment.
#[derive(Parser, Debug)]
#[clap(name = "segproj")]
pub struct ProjectParams {
    #[clap(long, allow_hyphen_values = true)]
    pub x1: f64,
    #[clap(long, allow_hyphen_values = true)]
    pub y1: f64,
    #[clap(long, allow_hyphen_values = true)]
    pub x2: f64,
    #[clap(long, allow_hyphen_values = true)]
    pub y2: f64,
    #[clap(long, allow_hyphen_values = true)]
    pub x: f64,
    #[clap(long, allow_hyphen_values = true)]
    pub y: f64,
    /// Fail on zero-length segment instead of producing NaN
    #[clap(long)]
    pub strict: bool,
}

impl ProjectParams {
    pub fn segment(&self) -> Segment {
        Segment::new(self.x1, self.y1, self.x2, self.y2)
    }
}

pub fn run_projection(params: &ProjectParams) -> Result<Vec2f, DegenerateSegmentError> {
    let segment = params.segment();
    debug!("Project point ({}, {}) onto {:?}", params.x, params.y, segment);
    let projected = if params.strict {
        segment.try_project_point(params.x, params.y).map_err(|e| {
            warn!("{}", e);
            e
        })?
    } else {
        segment.project_point(params.x, params.y)
    };
    if !projected.is_finite() {
        warn!("Projection has non-finite coordinates: {:?}", projected);
    }
    info!(
        "Projected point ({}, {}) to ({}, {})",
        params.x, params.y, projected.x, projected.y
    );
    Ok(projected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_should_accept_negative_values() {
        let params = ProjectParams::try_parse_from(&[
            "segproj", "--x1", "-1", "--y1", "0", "--x2", "3", "--y2", "0", "--x", "-4.5", "--y",
            "-2",
        ])
        .unwrap();
        assert_eq!(params.segment(), Segment::new(-1.0, 0.0, 3.0, 0.0));
        assert_eq!(params.x, -4.5);
        assert_eq!(params.y, -2.0);
        assert!(!params.strict);
    }

    #[test]
    fn params_should_require_all_coordinates() {
        assert!(ProjectParams::try_parse_from(&["segproj", "--x1", "0", "--y1", "0"]).is_err());
    }

    #[test]
    fn params_should_parse_strict_flag() {
        let params = ProjectParams::try_parse_from(&[
            "segproj", "--x1=0", "--y1=0", "--x2=1", "--y2=1", "--x=2", "--y=0", "--strict",
        ])
        .unwrap();
        assert!(params.strict);
    }
}
