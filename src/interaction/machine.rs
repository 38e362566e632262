use crate::foundation::error::{WanderError, WanderResult};

/// Default `Acknowledging` duration: two seconds at 60 ticks per second.
pub const DEFAULT_COUNTDOWN_TICKS: u32 = 120;

/// Marker interaction state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InteractionState {
    /// Moving along the loop.
    Traveling,
    /// Pointer is over the marker; the marker holds still.
    Engaged,
    /// Pointer left; the marker says thanks for `remaining` more ticks.
    Acknowledging {
        /// Ticks left before returning to `Traveling`.
        remaining: u32,
    },
}

impl InteractionState {
    /// Whether progress may advance while in this state.
    pub fn allows_advance(self) -> bool {
        matches!(self, Self::Traveling)
    }

    /// Ticks left in `Acknowledging`, if any.
    pub fn timer(self) -> Option<u32> {
        match self {
            Self::Acknowledging { remaining } => Some(remaining),
            _ => None,
        }
    }
}

/// Whether hovering during the acknowledgement re-engages right away.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reentry {
    /// The countdown always runs to completion first.
    #[default]
    AfterCountdown,
    /// Hovering during the countdown jumps straight back to `Engaged`.
    Immediate,
}

/// Result of one [`InteractionMachine::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// State before the step.
    pub from: InteractionState,
    /// State after the step.
    pub to: InteractionState,
    /// Whether progress advances this tick.
    pub advance: bool,
}

impl Step {
    /// Whether the step switched to a different state kind.
    pub fn changed(&self) -> bool {
        std::mem::discriminant(&self.from) != std::mem::discriminant(&self.to)
    }
}

/// Traveling / Engaged / Acknowledging state machine, stepped once per tick.
#[derive(Clone, Debug)]
pub struct InteractionMachine {
    state: InteractionState,
    countdown_ticks: u32,
    reentry: Reentry,
}

impl InteractionMachine {
    /// Machine in `Traveling`; `countdown_ticks` must be non-zero.
    pub fn new(countdown_ticks: u32, reentry: Reentry) -> WanderResult<Self> {
        if countdown_ticks == 0 {
            return Err(WanderError::validation("countdown_ticks must be > 0"));
        }
        Ok(Self {
            state: InteractionState::Traveling,
            countdown_ticks,
            reentry,
        })
    }

    /// Current state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Length of the acknowledgement countdown.
    pub fn countdown_ticks(&self) -> u32 {
        self.countdown_ticks
    }

    /// Feed this tick's hit-test result and transition.
    pub fn step(&mut self, hovering: bool) -> Step {
        use InteractionState::*;

        let from = self.state;
        let (to, advance) = match from {
            Traveling if hovering => (Engaged, false),
            Traveling => (Traveling, true),
            Engaged if hovering => (Engaged, false),
            Engaged => (
                Acknowledging {
                    remaining: self.countdown_ticks,
                },
                false,
            ),
            Acknowledging { .. } if hovering && self.reentry == Reentry::Immediate => {
                (Engaged, false)
            }
            Acknowledging { remaining } => match remaining.saturating_sub(1) {
                0 => (Traveling, false),
                remaining => (Acknowledging { remaining }, false),
            },
        };

        self.state = to;
        let step = Step { from, to, advance };
        if step.changed() {
            tracing::debug!(from = ?from, to = ?to, "interaction transition");
        }
        step
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/machine.rs"]
mod tests;
