use crate::foundation::error::{WanderError, WanderResult};

/// What happens to `progress` when the loop is regenerated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeProgress {
    /// Start over from the loop's start point.
    #[default]
    Reset,
    /// Keep the absolute distance, wrapped into the new length.
    Wrap,
    /// Keep the relative position (same fraction of the loop).
    Rescale,
}

/// Arc-length position of the marker and its constant speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    progress: f64,
    speed: f64,
}

impl MotionState {
    /// Start at progress 0; `speed` must be finite and positive.
    pub fn new(speed: f64) -> WanderResult<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(WanderError::validation(format!(
                "speed must be finite and > 0, got {speed}"
            )));
        }
        Ok(Self {
            progress: 0.0,
            speed,
        })
    }

    /// Distance travelled along the loop, always in `[0, path_length)`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Arc-length units per tick.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Move forward by one tick's worth of distance.
    pub fn advance(&mut self, path_length: f64) {
        if path_length <= 0.0 || !path_length.is_finite() {
            return;
        }
        self.progress = wrap(self.progress + self.speed, path_length);
    }

    /// Re-fit `progress` after the loop changed from `old_length` to `new_length`.
    pub fn refit(&mut self, policy: ResizeProgress, old_length: f64, new_length: f64) {
        if new_length <= 0.0 || !new_length.is_finite() {
            self.progress = 0.0;
            return;
        }
        self.progress = match policy {
            ResizeProgress::Reset => 0.0,
            ResizeProgress::Wrap => wrap(self.progress, new_length),
            ResizeProgress::Rescale if old_length > 0.0 => {
                wrap(self.progress / old_length * new_length, new_length)
            }
            ResizeProgress::Rescale => 0.0,
        };
    }
}

fn wrap(s: f64, length: f64) -> f64 {
    let w = s.rem_euclid(length);
    // rem_euclid can round up to `length` for tiny negative inputs.
    if w >= length { 0.0 } else { w }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/state.rs"]
mod tests;
