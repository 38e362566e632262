use kurbo::{CubicBez, ParamCurve};

/// Parameter steps sampled per cubic segment.
pub const SAMPLES_PER_SEGMENT: usize = 64;

const LENGTH_EPSILON: f64 = 1e-9;

/// Cumulative chord-length table over a chain of cubic segments.
///
/// Entry `i` holds the distance travelled up to global parameter `i / samples_per_segment`,
/// where the integer part of a global parameter selects the segment and the fractional part
/// is the segment-local `t`.
#[derive(Clone, Debug)]
pub struct ArcLengthTable {
    cumulative: Vec<f64>,
    samples_per_segment: usize,
    segment_count: usize,
}

impl ArcLengthTable {
    /// Sample every segment at `samples_per_segment` uniform steps.
    pub fn build(segments: &[CubicBez], samples_per_segment: usize) -> Self {
        let samples_per_segment = samples_per_segment.max(1);
        let mut cumulative = Vec::with_capacity(segments.len() * samples_per_segment + 1);
        cumulative.push(0.0);

        let mut total = 0.0;
        for seg in segments {
            let mut prev = seg.start();
            for i in 1..=samples_per_segment {
                let t = i as f64 / samples_per_segment as f64;
                let p = seg.eval(t);
                total += prev.distance(p);
                cumulative.push(total);
                prev = p;
            }
        }

        Self {
            cumulative,
            samples_per_segment,
            segment_count: segments.len(),
        }
    }

    /// Total arc length of the chain.
    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Map a distance along the chain to `(segment index, local t)`.
    ///
    /// `distance` is clamped into `[0, total]`.
    pub fn locate(&self, distance: f64) -> (usize, f64) {
        let total = self.total();
        if self.segment_count == 0 || total <= LENGTH_EPSILON {
            return (0, 0.0);
        }

        let target = distance.clamp(0.0, total);
        let idx = self.cumulative.partition_point(|&c| c < target);
        if idx == 0 {
            return (0, 0.0);
        }
        if idx >= self.cumulative.len() {
            return (self.segment_count - 1, 1.0);
        }

        let prev = self.cumulative[idx - 1];
        let next = self.cumulative[idx];
        let span = next - prev;
        let alpha = if span <= 0.0 {
            0.0
        } else {
            (target - prev) / span
        };

        let global = ((idx - 1) as f64 + alpha) / self.samples_per_segment as f64;
        let seg = (global.floor() as usize).min(self.segment_count - 1);
        let t = (global - seg as f64).clamp(0.0, 1.0);
        (seg, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/arclen.rs"]
mod tests;
