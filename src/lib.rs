//! wanderline draws a decorative animated background: a marker that wanders along a
//! procedural closed Bezier loop and reacts when the pointer catches it.
//!
//! # Pipeline overview
//!
//! Every tick runs the same fixed sequence:
//!
//! 1. **Sample**: the marker position and heading at the current arc-length `progress`
//!    ([`MotionSampler`] over a [`LoopPath`])
//! 2. **Interact**: hit-test the pointer against the marker ([`HitZone`]) and step the
//!    [`InteractionMachine`] (`Traveling` / `Engaged` / `Acknowledging`)
//! 3. **Advance**: move `progress` forward only while the machine allows it
//! 4. **Compose**: project the state into a backend-neutral [`FramePlan`]
//! 5. **Render** (optional): rasterize the plan with [`CpuBackend`] into [`FrameRGBA`]
//!
//! [`AnimatedBackground`] owns the state bundle and runs steps 1-4;
//! [`BackgroundLoop`] wires it to a host [`FrameScheduler`] and a shared [`PointerCell`].
//!
//! The key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Never fatal per tick**: degenerate geometry, a missing surface or a failed paint skip
//!   the frame and the loop carries on.
//! - **Deterministic with a seed**: loops are generated from a seeded SplitMix64 stream.
//! - **Premultiplied RGBA8** output from the CPU backend.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod engine;
mod foundation;
mod interaction;
mod motion;
mod path;
mod render;

pub use engine::background::{AnimatedBackground, TickSnapshot};
pub use engine::config::BackgroundConfig;
pub use engine::lifecycle::{BackgroundLoop, FrameHandle, FrameScheduler, ManualScheduler};
pub use engine::pointer::{OFFSCREEN, PointerCell};
pub use foundation::core::{Affine, BezPath, CubicBez, Point, Rect, Rgba8, Tick, Vec2, Viewport};
pub use foundation::error::{WanderError, WanderResult};
pub use foundation::rng::Rng64;
pub use interaction::hit::{HitZone, MIN_HIT_EXTENT, to_marker_local};
pub use interaction::machine::{
    DEFAULT_COUNTDOWN_TICKS, InteractionMachine, InteractionState, Reentry, Step,
};
pub use motion::sampler::{DEFAULT_TANGENT_EPSILON, MotionSampler, PathSample};
pub use motion::state::{MotionState, ResizeProgress};
pub use path::arclen::{ArcLengthTable, SAMPLES_PER_SEGMENT};
pub use path::curve::LoopPath;
pub use path::generator::{PathParams, generate_loop, should_regenerate};
pub use render::backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend};
pub use render::compose::{FrameView, RenderStyle, compose_frame, upright_overlay};
pub use render::cpu::CpuBackend;
pub use render::plan::{DrawOp, FramePlan};
pub use render::text::{TextBrushRgba8, TextLayoutEngine};
