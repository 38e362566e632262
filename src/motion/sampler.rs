use kurbo::Point;

use crate::path::curve::LoopPath;

/// Look-behind distance used for the tangent when none is configured.
pub const DEFAULT_TANGENT_EPSILON: f64 = 3.0;

/// Position and heading of the marker at one arc-length distance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PathSample {
    /// Render position.
    pub point: Point,
    /// Direction of travel in radians.
    pub angle: f64,
}

/// Constant-speed sampling over a [`LoopPath`].
///
/// All queries wrap `s` into `[0, length)`; a degenerate loop answers `None` ("no path").
#[derive(Clone, Copy, Debug)]
pub struct MotionSampler<'a> {
    path: &'a LoopPath,
    epsilon: f64,
}

impl<'a> MotionSampler<'a> {
    /// Sampler over `path`; a non-positive or non-finite `epsilon` falls back to the default.
    pub fn new(path: &'a LoopPath, epsilon: f64) -> Self {
        let epsilon = if epsilon.is_finite() && epsilon > 0.0 {
            epsilon
        } else {
            DEFAULT_TANGENT_EPSILON
        };
        Self { path, epsilon }
    }

    /// Length of the sampled loop.
    pub fn path_length(&self) -> f64 {
        self.path.length()
    }

    /// Position at distance `s`, wrapped; `None` on a degenerate loop.
    pub fn point_at(&self, s: f64) -> Option<Point> {
        self.path.point_at(s)
    }

    /// Heading from `point_at(s - epsilon)` to `point_at(s)`.
    pub fn tangent_angle_at(&self, s: f64) -> Option<f64> {
        let here = self.path.point_at(s)?;
        let behind = self
            .path
            .point_at((s - self.epsilon).rem_euclid(self.path.length()))?;
        Some((here.y - behind.y).atan2(here.x - behind.x))
    }

    /// Position and heading at distance `s`.
    pub fn sample(&self, s: f64) -> Option<PathSample> {
        Some(PathSample {
            point: self.point_at(s)?,
            angle: self.tangent_angle_at(s)?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/sampler.rs"]
mod tests;
