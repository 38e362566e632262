use kurbo::{CubicBez, Point};

use crate::{
    foundation::{
        core::Viewport,
        error::{WanderError, WanderResult},
        rng::Rng64,
    },
    path::curve::LoopPath,
};

/// Shape parameters for the procedural loop, as fractions of the viewport.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PathParams {
    /// Random segments before the closing segment.
    pub segments: usize,
    /// Start point of the loop.
    pub start: [f64; 2],
    /// Range control points are drawn from (may exceed the viewport).
    pub control_span: [f64; 2],
    /// Range segment endpoints are drawn from.
    pub endpoint_span: [f64; 2],
}

impl Default for PathParams {
    fn default() -> Self {
        Self {
            segments: 20,
            start: [0.5, 0.1],
            control_span: [-0.5, 1.5],
            endpoint_span: [0.1, 0.9],
        }
    }
}

impl PathParams {
    /// Reject zero segments, non-finite values and empty spans.
    pub fn validate(&self) -> WanderResult<()> {
        if self.segments == 0 {
            return Err(WanderError::validation("path segments must be > 0"));
        }
        if !self.start.iter().all(|v| v.is_finite()) {
            return Err(WanderError::validation("path start must be finite"));
        }
        for (name, [lo, hi]) in [
            ("control_span", self.control_span),
            ("endpoint_span", self.endpoint_span),
        ] {
            if !lo.is_finite() || !hi.is_finite() || lo >= hi {
                return Err(WanderError::validation(format!(
                    "path {name} must be finite with lo < hi, got [{lo}, {hi}]"
                )));
            }
        }
        Ok(())
    }
}

/// Build a closed, viewport-filling loop of random cubic segments.
///
/// The loop starts at `params.start`, chains `params.segments` random cubics and closes with
/// one more cubic whose random control points lead back to the start.
#[tracing::instrument(skip(params, rng))]
pub fn generate_loop(
    viewport: Viewport,
    params: &PathParams,
    rng: &mut Rng64,
) -> WanderResult<LoopPath> {
    params.validate()?;

    let (w, h) = (viewport.w(), viewport.h());
    let mut sample = |[lo, hi]: [f64; 2]| Point::new(rng.range(lo, hi) * w, rng.range(lo, hi) * h);

    let start = Point::new(params.start[0] * w, params.start[1] * h);
    let mut segments = Vec::with_capacity(params.segments + 1);
    let mut cursor = start;
    for _ in 0..params.segments {
        let c1 = sample(params.control_span);
        let c2 = sample(params.control_span);
        let end = sample(params.endpoint_span);
        segments.push(CubicBez::new(cursor, c1, c2, end));
        cursor = end;
    }
    let c1 = sample(params.control_span);
    let c2 = sample(params.control_span);
    segments.push(CubicBez::new(cursor, c1, c2, start));

    let path = LoopPath::from_segments(segments)?;
    tracing::debug!(length = path.length(), "generated loop path");
    Ok(path)
}

/// Regeneration policy: always on first sizing, afterwards only past the jitter threshold.
pub fn should_regenerate(previous: Option<Viewport>, next: Viewport, threshold_px: u32) -> bool {
    match previous {
        None => true,
        Some(prev) => prev.differs_by_more_than(next, threshold_px),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/generator.rs"]
mod tests;
