use kurbo::Point;

use crate::{
    engine::config::BackgroundConfig,
    foundation::{
        core::{Tick, Viewport},
        error::WanderResult,
        rng::Rng64,
    },
    interaction::machine::{InteractionMachine, InteractionState},
    motion::{
        sampler::{MotionSampler, PathSample},
        state::MotionState,
    },
    path::{
        curve::LoopPath,
        generator::{generate_loop, should_regenerate},
    },
    render::{
        compose::{FrameView, compose_frame},
        plan::FramePlan,
    },
};

/// Per-tick view of the animation, for tracing and diagnostics.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TickSnapshot {
    /// Ticks run so far.
    pub tick: u64,
    /// Arc-length distance along the loop.
    pub progress: f64,
    /// Total loop length; 0 before the first sizing.
    pub path_length: f64,
    /// Interaction state after the last tick.
    pub interaction: InteractionState,
    /// Marker position and heading, if the loop can be sampled.
    pub marker: Option<PathSample>,
}

/// The animation state bundle owned by one mounted background.
///
/// Holds the loop, the marker's motion and the interaction machine. Nothing outside this
/// value mutates them; the host only supplies pointer positions and viewport sizes.
#[derive(Debug)]
pub struct AnimatedBackground {
    config: BackgroundConfig,
    viewport: Option<Viewport>,
    generated_for: Option<Viewport>,
    path: Option<LoopPath>,
    motion: MotionState,
    machine: InteractionMachine,
    rng: Rng64,
    tick: Tick,
}

impl AnimatedBackground {
    /// Validate `config` and build an unsized background in `Traveling`.
    ///
    /// Nothing is painted until the first [`resize`](Self::resize).
    pub fn new(config: BackgroundConfig) -> WanderResult<Self> {
        config.validate()?;
        Ok(Self {
            motion: MotionState::new(config.speed)?,
            machine: InteractionMachine::new(config.countdown_ticks, config.reentry)?,
            rng: Rng64::from_seed_or_entropy(config.seed),
            viewport: None,
            generated_for: None,
            path: None,
            tick: Tick::default(),
            config,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    /// Latest surface size reported by the host.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Size the current loop was generated for.
    pub fn generated_for(&self) -> Option<Viewport> {
        self.generated_for
    }

    /// Current loop, once sized.
    pub fn path(&self) -> Option<&LoopPath> {
        self.path.as_ref()
    }

    /// Current loop length, or 0 without a loop.
    pub fn path_length(&self) -> f64 {
        self.path.as_ref().map_or(0.0, LoopPath::length)
    }

    /// Arc-length distance travelled along the loop.
    pub fn progress(&self) -> f64 {
        self.motion.progress()
    }

    /// Current interaction state.
    pub fn state(&self) -> InteractionState {
        self.machine.state()
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> Tick {
        self.tick
    }

    /// Where the marker is drawn right now (the point the next hit test uses).
    pub fn marker(&self) -> Option<PathSample> {
        let path = self.path.as_ref()?;
        MotionSampler::new(path, self.config.tangent_epsilon).sample(self.motion.progress())
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> TickSnapshot {
        TickSnapshot {
            tick: self.tick.0,
            progress: self.progress(),
            path_length: self.path_length(),
            interaction: self.state(),
            marker: self.marker(),
        }
    }

    /// Adopt a new surface size, regenerating the loop when the change is large enough.
    ///
    /// The threshold is measured against the size the current loop was generated for, so
    /// a run of small resizes still regenerates once the drift adds up. Returns whether a
    /// new loop was generated. Regeneration happens synchronously, so the next tick always
    /// reads a complete loop.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, viewport: Viewport) -> WanderResult<bool> {
        let regenerate = self.path.is_none()
            || should_regenerate(self.generated_for, viewport, self.config.regen_threshold_px);
        self.viewport = Some(viewport);
        if !regenerate {
            return Ok(false);
        }

        let old_length = self.path_length();
        let path = generate_loop(viewport, &self.config.path, &mut self.rng)?;
        self.motion
            .refit(self.config.resize_progress, old_length, path.length());
        tracing::debug!(
            length = path.length(),
            progress = self.motion.progress(),
            "loop regenerated"
        );
        self.path = Some(path);
        self.generated_for = Some(viewport);
        Ok(true)
    }

    /// Run one animation tick against the latest pointer position.
    ///
    /// Hit test and state transition come first, then the optional advance, then the
    /// frame is composed from the resulting state. Without a loop (not sized yet, or
    /// degenerate) the returned plan has no paint ops and the interaction state is left
    /// untouched.
    pub fn tick(&mut self, pointer: Point) -> FramePlan {
        let tick = self.tick;
        self.tick = tick.next();

        let style = &self.config.style;
        let Some(viewport) = self.viewport else {
            return FramePlan::blank(0, 0, style.background);
        };
        let blank = FramePlan::blank(viewport.width, viewport.height, style.background);
        let Some(path) = self.path.as_ref() else {
            return blank;
        };

        let sampler = MotionSampler::new(path, self.config.tangent_epsilon);
        let Some(current) = sampler.sample(self.motion.progress()) else {
            return blank;
        };

        let hovering = self
            .config
            .hit_zone
            .contains(current.point, current.angle, pointer);
        let step = self.machine.step(hovering);
        if step.advance {
            self.motion.advance(path.length());
        }

        let marker = sampler.sample(self.motion.progress()).unwrap_or(current);
        compose_frame(
            &FrameView {
                viewport,
                path,
                marker,
                state: step.to,
                tick,
                ticks_per_second: self.config.ticks_per_second,
            },
            style,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/background.rs"]
mod tests;
