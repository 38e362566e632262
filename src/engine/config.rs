use std::path::Path;

use crate::{
    foundation::error::{WanderError, WanderResult},
    interaction::{
        hit::HitZone,
        machine::{DEFAULT_COUNTDOWN_TICKS, Reentry},
    },
    motion::{sampler::DEFAULT_TANGENT_EPSILON, state::ResizeProgress},
    path::generator::PathParams,
    render::compose::RenderStyle,
};

/// Tunables for one animated background instance.
///
/// Every field has a default, so a JSON config only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundConfig {
    /// Arc-length units per tick.
    pub speed: f64,
    /// Ticks spent in `Acknowledging`.
    pub countdown_ticks: u32,
    /// Look-behind distance for the heading.
    pub tangent_epsilon: f64,
    /// Resizes smaller than this (per side) keep the current loop.
    pub regen_threshold_px: u32,
    /// What happens to progress when the loop is regenerated.
    pub resize_progress: ResizeProgress,
    /// Whether hovering during the countdown re-engages.
    pub reentry: Reentry,
    /// Hover region around the marker.
    pub hit_zone: HitZone,
    /// Tick rate used to turn ticks into time for the glow pulse.
    pub ticks_per_second: u32,
    /// Fixed seed for reproducible loops; entropy when unset.
    pub seed: Option<u64>,
    /// Loop shape parameters.
    pub path: PathParams,
    /// Colors and overlay geometry.
    pub style: RenderStyle,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            speed: 1.5,
            countdown_ticks: DEFAULT_COUNTDOWN_TICKS,
            tangent_epsilon: DEFAULT_TANGENT_EPSILON,
            regen_threshold_px: 100,
            resize_progress: ResizeProgress::default(),
            reentry: Reentry::default(),
            hit_zone: HitZone::default(),
            ticks_per_second: 60,
            seed: None,
            path: PathParams::default(),
            style: RenderStyle::default(),
        }
    }
}

impl BackgroundConfig {
    /// Check every field, including nested path and hit-zone parameters.
    pub fn validate(&self) -> WanderResult<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(WanderError::validation("speed must be finite and > 0"));
        }
        if self.countdown_ticks == 0 {
            return Err(WanderError::validation("countdown_ticks must be > 0"));
        }
        if !self.tangent_epsilon.is_finite() || self.tangent_epsilon <= 0.0 {
            return Err(WanderError::validation(
                "tangent_epsilon must be finite and > 0",
            ));
        }
        if self.ticks_per_second == 0 {
            return Err(WanderError::validation("ticks_per_second must be > 0"));
        }
        self.hit_zone.validate()?;
        self.path.validate()?;

        let s = &self.style;
        if !(0.0..=1.0).contains(&s.trace_opacity) {
            return Err(WanderError::validation("style.trace_opacity must be in [0, 1]"));
        }
        let [w, h] = s.marker_size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(WanderError::validation("style.marker_size must be positive"));
        }
        if !s.label_size_px.is_finite() || s.label_size_px <= 0.0 {
            return Err(WanderError::validation("style.label_size_px must be > 0"));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> WanderResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| WanderError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> WanderResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| WanderError::config(format!("read '{}': {e}", path.display())))?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/config.rs"]
mod tests;
