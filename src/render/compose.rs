use kurbo::{Affine, BezPath, Circle, Point, RoundedRect, Shape, Vec2};

use crate::{
    foundation::core::{Rgba8, Tick, Viewport},
    interaction::machine::InteractionState,
    motion::sampler::PathSample,
    path::curve::LoopPath,
    render::plan::{DrawOp, FramePlan},
};

const SHAPE_TOLERANCE: f64 = 0.1;
const GLOW_OPACITY: f64 = 0.2;

/// Colors, marker geometry and overlay placement.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Clear color; `None` leaves the surface transparent.
    pub background: Option<Rgba8>,
    /// Trace and traveling marker color.
    pub accent: Rgba8,
    /// Marker color while engaged.
    pub engaged: Rgba8,
    /// Marker and glow color while acknowledging.
    pub acknowledged: Rgba8,
    /// Opacity of the ambient loop stroke.
    pub trace_opacity: f64,
    /// Width of the ambient loop stroke.
    pub trace_width: f64,
    /// Marker pill width and height.
    pub marker_size: [f64; 2],
    /// Corner radius of the marker pill.
    pub marker_radius: f64,
    /// Pulsing glow under an engaged or acknowledging marker.
    pub glow: bool,
    /// Distance of the engaged badge above the marker.
    pub badge_offset: f64,
    /// Fill of the engaged badge disc.
    pub badge_color: Rgba8,
    /// Distance of the thank-you bubble above the marker.
    pub bubble_offset: f64,
    /// Fill of the thank-you bubble.
    pub bubble_fill: Rgba8,
    /// Text shown in the bubble.
    pub thank_you_label: String,
    /// Label font size in pixels.
    pub label_size_px: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: None,
            accent: Rgba8::rgb(0xF1, 0xD5, 0x00),
            engaged: Rgba8::rgb(0xFF, 0xFF, 0xFF),
            acknowledged: Rgba8::rgb(0x10, 0xB9, 0x81),
            trace_opacity: 0.05,
            trace_width: 1.0,
            marker_size: [20.0, 8.0],
            marker_radius: 4.0,
            glow: true,
            badge_offset: 32.0,
            badge_color: Rgba8::rgba(235, 69, 52, 242),
            bubble_offset: 25.0,
            bubble_fill: Rgba8::rgba(16, 16, 16, 242),
            thank_you_label: "Thank you!".to_string(),
            label_size_px: 12.0,
        }
    }
}

/// Everything the composer reads for one frame. It never mutates animation state.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    /// Surface size.
    pub viewport: Viewport,
    /// Loop drawn as the ambient trace.
    pub path: &'a LoopPath,
    /// Marker position and heading after this tick's advance.
    pub marker: PathSample,
    /// State after this tick's transition.
    pub state: InteractionState,
    /// Tick being drawn; drives the glow pulse.
    pub tick: Tick,
    /// Tick rate used to turn `tick` into time.
    pub ticks_per_second: u32,
}

/// Project the current animation state into paint operations.
///
/// Order: ambient trace, glow, marker pill, then the state overlay.
pub fn compose_frame(view: &FrameView<'_>, style: &RenderStyle) -> FramePlan {
    let mut plan = FramePlan::blank(view.viewport.width, view.viewport.height, style.background);

    plan.ops.push(DrawOp::StrokePath {
        path: view.path.to_bezpath(),
        transform: Affine::IDENTITY,
        color: style.accent.with_opacity(style.trace_opacity),
        width: style.trace_width,
    });

    let PathSample { point, angle } = view.marker;
    let marker_xf = Affine::translate(point.to_vec2()) * Affine::rotate(angle);

    if style.glow && view.state != InteractionState::Traveling {
        let t_ms = view.tick.to_millis(view.ticks_per_second);
        let radius = (t_ms / 150.0).sin() * 5.0 + 15.0;
        let base = match view.state {
            InteractionState::Acknowledging { .. } => style.acknowledged,
            _ => style.accent,
        };
        plan.ops.push(DrawOp::FillPath {
            path: Circle::new(Point::ORIGIN, radius).to_path(SHAPE_TOLERANCE),
            transform: marker_xf,
            color: base.with_opacity(GLOW_OPACITY),
        });
    }

    let [w, h] = style.marker_size;
    plan.ops.push(DrawOp::FillPath {
        path: RoundedRect::new(-w / 2.0, -h / 2.0, w / 2.0, h / 2.0, style.marker_radius)
            .to_path(SHAPE_TOLERANCE),
        transform: marker_xf,
        color: marker_color(view.state, style),
    });

    match view.state {
        InteractionState::Traveling => {}
        InteractionState::Engaged => {
            let xf = upright_overlay(marker_xf, angle, style.badge_offset);
            push_badge(&mut plan.ops, xf, style);
        }
        InteractionState::Acknowledging { .. } => {
            let xf = upright_overlay(marker_xf, angle, style.bubble_offset);
            push_bubble(&mut plan.ops, xf, style);
        }
    }

    plan
}

fn marker_color(state: InteractionState, style: &RenderStyle) -> Rgba8 {
    match state {
        InteractionState::Traveling => style.accent,
        InteractionState::Engaged => style.engaged,
        InteractionState::Acknowledging { .. } => style.acknowledged,
    }
}

/// Offset along the marker's local -y, then undo the heading so content stays upright.
pub fn upright_overlay(marker_xf: Affine, angle: f64, offset: f64) -> Affine {
    marker_xf * Affine::translate(Vec2::new(0.0, -offset)) * Affine::rotate(-angle)
}

fn push_badge(ops: &mut Vec<DrawOp>, xf: Affine, style: &RenderStyle) {
    let black = Rgba8::rgb(0, 0, 0);
    ops.push(DrawOp::FillPath {
        path: Circle::new(Point::ORIGIN, 10.0).to_path(SHAPE_TOLERANCE),
        transform: xf,
        color: style.badge_color,
    });

    let mut eyes = Circle::new((-3.5, -0.5), 1.2).to_path(SHAPE_TOLERANCE);
    eyes.extend(Circle::new((3.5, -0.5), 1.2).path_elements(SHAPE_TOLERANCE));
    ops.push(DrawOp::FillPath {
        path: eyes,
        transform: xf,
        color: black,
    });

    let mut brows = BezPath::new();
    brows.move_to((-5.0, -4.0));
    brows.line_to((-2.0, -3.0));
    brows.move_to((5.0, -4.0));
    brows.line_to((2.0, -3.0));
    ops.push(DrawOp::StrokePath {
        path: brows,
        transform: xf,
        color: black,
        width: 1.0,
    });
}

fn push_bubble(ops: &mut Vec<DrawOp>, xf: Affine, style: &RenderStyle) {
    let bubble = RoundedRect::new(-35.0, -12.0, 35.0, 10.0, 8.0).to_path(SHAPE_TOLERANCE);
    ops.push(DrawOp::FillPath {
        path: bubble.clone(),
        transform: xf,
        color: style.bubble_fill,
    });
    ops.push(DrawOp::StrokePath {
        path: bubble,
        transform: xf,
        color: style.accent,
        width: 1.0,
    });
    ops.push(DrawOp::Text {
        text: style.thank_you_label.clone(),
        transform: xf,
        color: style.accent,
        size_px: style.label_size_px,
    });
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
