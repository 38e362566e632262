use super::*;
use crate::foundation::rng::Rng64;
use crate::path::generator::{PathParams, generate_loop};

fn fixture() -> (Viewport, LoopPath) {
    let vp = Viewport::new(800, 600).unwrap();
    let path = generate_loop(vp, &PathParams::default(), &mut Rng64::new(17)).unwrap();
    (vp, path)
}

fn view<'a>(vp: Viewport, path: &'a LoopPath, state: InteractionState) -> FrameView<'a> {
    FrameView {
        viewport: vp,
        path,
        marker: PathSample {
            point: Point::new(200.0, 150.0),
            angle: 0.7,
        },
        state,
        tick: Tick(30),
        ticks_per_second: 60,
    }
}

fn fills(plan: &FramePlan) -> Vec<Rgba8> {
    plan.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillPath { color, .. } => Some(*color),
            _ => None,
        })
        .collect()
}

#[test]
fn traveling_draws_trace_and_accent_marker_only() {
    let (vp, path) = fixture();
    let style = RenderStyle::default();
    let plan = compose_frame(&view(vp, &path, InteractionState::Traveling), &style);

    assert_eq!((plan.width, plan.height), (800, 600));
    assert_eq!(plan.ops.len(), 2);
    let DrawOp::StrokePath { color, width, .. } = &plan.ops[0] else {
        panic!("first op must be the ambient trace");
    };
    assert_eq!(color.a, 13);
    assert_eq!(*width, 1.0);
    assert_eq!(fills(&plan), vec![style.accent]);
}

#[test]
fn engaged_adds_glow_white_marker_and_badge() {
    let (vp, path) = fixture();
    let style = RenderStyle::default();
    let plan = compose_frame(&view(vp, &path, InteractionState::Engaged), &style);

    let f = fills(&plan);
    assert_eq!(f[0], style.accent.with_opacity(0.2));
    assert_eq!(f[1], style.engaged);
    assert_eq!(f[2], style.badge_color);
    assert!(!plan.ops.iter().any(|op| matches!(op, DrawOp::Text { .. })));
}

#[test]
fn acknowledging_draws_green_marker_and_label() {
    let (vp, path) = fixture();
    let style = RenderStyle::default();
    let plan = compose_frame(
        &view(vp, &path, InteractionState::Acknowledging { remaining: 50 }),
        &style,
    );

    let f = fills(&plan);
    assert_eq!(f[0], style.acknowledged.with_opacity(0.2));
    assert_eq!(f[1], style.acknowledged);
    let label = plan.ops.iter().find_map(|op| match op {
        DrawOp::Text { text, .. } => Some(text.as_str()),
        _ => None,
    });
    assert_eq!(label, Some("Thank you!"));
}

#[test]
fn glow_can_be_disabled() {
    let (vp, path) = fixture();
    let style = RenderStyle {
        glow: false,
        ..RenderStyle::default()
    };
    let plan = compose_frame(&view(vp, &path, InteractionState::Engaged), &style);
    assert_eq!(fills(&plan)[0], style.engaged);
}

#[test]
fn overlay_stays_upright_above_marker() {
    let angle = 1.1;
    let point = Point::new(40.0, 60.0);
    let marker_xf = Affine::translate(point.to_vec2()) * Affine::rotate(angle);
    let xf = upright_overlay(marker_xf, angle, 25.0);

    let c = xf.as_coeffs();
    assert!((c[0] - 1.0).abs() < 1e-9);
    assert!(c[1].abs() < 1e-9);
    assert!(c[2].abs() < 1e-9);
    assert!((c[3] - 1.0).abs() < 1e-9);

    let expected = point + (Affine::rotate(angle) * Point::new(0.0, -25.0)).to_vec2();
    let origin = xf * Point::ORIGIN;
    assert!(origin.distance(expected) < 1e-9);
}
