use kurbo::{BezPath, CubicBez, ParamCurve, Point};

use crate::{
    foundation::error::{WanderError, WanderResult},
    path::arclen::{ArcLengthTable, SAMPLES_PER_SEGMENT},
};

/// Maximum gap allowed between consecutive segment endpoints.
pub const JOIN_TOLERANCE: f64 = 1e-6;

/// A closed chain of cubic Bezier segments with a precomputed arc-length table.
///
/// The last segment ends where the first one starts, so distances wrap without a jump.
#[derive(Clone, Debug)]
pub struct LoopPath {
    segments: Vec<CubicBez>,
    table: ArcLengthTable,
}

impl LoopPath {
    /// Validate a closed chain and precompute its arc length.
    pub fn from_segments(segments: Vec<CubicBez>) -> WanderResult<Self> {
        let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
            return Err(WanderError::geometry("loop path needs at least one segment"));
        };

        for seg in &segments {
            let finite = [seg.p0, seg.p1, seg.p2, seg.p3]
                .iter()
                .all(|p| p.x.is_finite() && p.y.is_finite());
            if !finite {
                return Err(WanderError::geometry("segment has non-finite coordinates"));
            }
        }

        if let Some(i) = segments
            .windows(2)
            .position(|w| w[0].p3.distance(w[1].p0) > JOIN_TOLERANCE)
        {
            return Err(WanderError::geometry(format!(
                "segment {} does not start where segment {i} ends",
                i + 1
            )));
        }

        if last.p3.distance(first.p0) > JOIN_TOLERANCE {
            return Err(WanderError::geometry(
                "loop path is open: last segment must end at the first start point",
            ));
        }

        let table = ArcLengthTable::build(&segments, SAMPLES_PER_SEGMENT);
        Ok(Self { segments, table })
    }

    /// Segments in travel order.
    pub fn segments(&self) -> &[CubicBez] {
        &self.segments
    }

    /// Start (and end) point of the loop.
    pub fn start(&self) -> Point {
        self.segments[0].p0
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.table.total()
    }

    /// Zero-length loops cannot be sampled.
    pub fn is_degenerate(&self) -> bool {
        self.length() <= f64::EPSILON
    }

    /// Point at arc-length distance `s`, wrapped into `[0, length)`.
    ///
    /// Returns `None` for degenerate loops or a non-finite `s`.
    pub fn point_at(&self, s: f64) -> Option<Point> {
        if self.is_degenerate() || !s.is_finite() {
            return None;
        }
        let s = s.rem_euclid(self.length());
        let (seg, t) = self.table.locate(s);
        Some(self.segments[seg].eval(t))
    }

    /// The loop as a closed `BezPath` for painting.
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start());
        for seg in &self.segments {
            path.curve_to(seg.p1, seg.p2, seg.p3);
        }
        path.close_path();
        path
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/curve.rs"]
mod tests;
