use super::*;
use crate::engine::pointer::OFFSCREEN;
use crate::motion::state::ResizeProgress;
use kurbo::CubicBez;

fn seeded(seed: u64) -> BackgroundConfig {
    BackgroundConfig {
        seed: Some(seed),
        ..BackgroundConfig::default()
    }
}

fn sized(config: BackgroundConfig, w: u32, h: u32) -> AnimatedBackground {
    let mut bg = AnimatedBackground::new(config).unwrap();
    assert!(bg.resize(Viewport::new(w, h).unwrap()).unwrap());
    bg
}

#[test]
fn unsized_background_paints_nothing() {
    let mut bg = AnimatedBackground::new(seeded(1)).unwrap();
    let plan = bg.tick(OFFSCREEN);
    assert!(plan.is_blank());
    assert_eq!(bg.progress(), 0.0);
    assert_eq!(bg.state(), InteractionState::Traveling);
    assert!(bg.marker().is_none());
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = BackgroundConfig {
        speed: 0.0,
        ..BackgroundConfig::default()
    };
    assert!(AnimatedBackground::new(cfg).is_err());
}

#[test]
fn travels_at_constant_speed_while_pointer_is_away() {
    let mut bg = sized(seeded(2), 1024, 768);
    for _ in 0..60 {
        let plan = bg.tick(OFFSCREEN);
        assert!(!plan.is_blank());
    }
    assert!((bg.progress() - 90.0).abs() < 1e-9);
    assert_eq!(bg.state(), InteractionState::Traveling);
    assert_eq!(bg.ticks(), Tick(60));
}

#[test]
fn hovering_holds_the_marker_in_place() {
    let mut bg = sized(seeded(3), 1024, 768);
    for _ in 0..10 {
        bg.tick(OFFSCREEN);
    }
    let marker = bg.marker().unwrap().point;
    let before = bg.progress();
    for _ in 0..100 {
        bg.tick(marker);
        assert_eq!(bg.state(), InteractionState::Engaged);
    }
    assert_eq!(bg.progress(), before);
}

#[test]
fn small_resizes_keep_the_loop() {
    let mut bg = sized(seeded(4), 1024, 768);
    for _ in 0..20 {
        bg.tick(OFFSCREEN);
    }
    let length = bg.path_length();
    let progress = bg.progress();

    assert!(!bg.resize(Viewport::new(1080, 700).unwrap()).unwrap());
    assert_eq!(bg.viewport(), Some(Viewport::new(1080, 700).unwrap()));
    assert_eq!(bg.generated_for(), Some(Viewport::new(1024, 768).unwrap()));
    assert_eq!(bg.path_length(), length);
    assert_eq!(bg.progress(), progress);
}

#[test]
fn large_resizes_regenerate_and_reset_progress() {
    let mut bg = sized(seeded(5), 1024, 768);
    for _ in 0..20 {
        bg.tick(OFFSCREEN);
    }
    assert!(bg.resize(Viewport::new(1920, 1080).unwrap()).unwrap());
    assert_eq!(bg.progress(), 0.0);
    assert!(bg.path_length() > 0.0);
}

#[test]
fn wrap_policy_keeps_distance_inside_new_loop() {
    let cfg = BackgroundConfig {
        resize_progress: ResizeProgress::Wrap,
        ..seeded(6)
    };
    let mut bg = sized(cfg, 1024, 768);
    for _ in 0..20 {
        bg.tick(OFFSCREEN);
    }
    assert!(bg.resize(Viewport::new(300, 200).unwrap()).unwrap());
    assert!(bg.progress() >= 0.0);
    assert!(bg.progress() < bg.path_length());
}

#[test]
fn tiny_and_huge_viewports_animate() {
    for (w, h) in [(1, 1), (7680, 4320)] {
        let mut bg = sized(seeded(7), w, h);
        for _ in 0..5 {
            bg.tick(OFFSCREEN);
        }
        assert!(bg.progress() >= 0.0);
        assert!(bg.path_length() >= 0.0);
    }
}

#[test]
fn snapshot_reflects_state() {
    let mut bg = sized(seeded(8), 640, 480);
    bg.tick(OFFSCREEN);
    let snap = bg.snapshot();
    assert_eq!(snap.tick, 1);
    assert!((snap.progress - 1.5).abs() < 1e-9);
    assert_eq!(snap.interaction, InteractionState::Traveling);
    assert!(snap.marker.is_some());

    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["interaction"]["state"], "traveling");
}

#[test]
fn growing_in_small_steps_regenerates_once_the_drift_adds_up() {
    let mut bg = sized(seeded(10), 1024, 768);
    let original = bg.path_length();

    let mut regenerated_at = Vec::new();
    for step in 1..=20u32 {
        let vp = Viewport::new(1024 + 50 * step, 768 + 30 * step).unwrap();
        if bg.resize(vp).unwrap() {
            regenerated_at.push(step);
            assert_eq!(bg.generated_for(), Some(vp));
        }
    }

    // Width drifts 50 px per step, so every third step crosses the 100 px threshold.
    assert_eq!(regenerated_at, vec![3, 6, 9, 12, 15, 18]);
    assert_ne!(bg.path_length(), original);
    assert_eq!(
        bg.generated_for(),
        Some(Viewport::new(1024 + 50 * 18, 768 + 30 * 18).unwrap())
    );

    // Endpoints are drawn from the 10%..90% band of the size the loop was generated for.
    let max_end_x = bg
        .path()
        .unwrap()
        .segments()
        .iter()
        .map(|seg| seg.p3.x)
        .fold(f64::MIN, f64::max);
    assert!(max_end_x > 0.5 * 1024.0, "max endpoint x {max_end_x}");
    for seg in bg.path().unwrap().segments() {
        assert!(seg.p3.x >= 0.1 * 1924.0 - 1e-9 && seg.p3.x <= 0.9 * 1924.0 + 1e-9);
    }
}

#[test]
fn jitter_back_and_forth_keeps_the_loop() {
    let mut bg = sized(seeded(11), 1024, 768);
    for (w, h) in [(1100, 768), (1024, 700), (950, 800), (1124, 868), (1024, 768)] {
        assert!(!bg.resize(Viewport::new(w, h).unwrap()).unwrap());
    }
    assert_eq!(bg.generated_for(), Some(Viewport::new(1024, 768).unwrap()));
}

#[test]
fn degenerate_loop_paints_nothing_and_freezes_state() {
    let mut bg = sized(seeded(12), 200, 150);
    for _ in 0..4 {
        bg.tick(OFFSCREEN);
    }
    let marker = bg.marker().unwrap().point;
    bg.tick(marker);
    assert_eq!(bg.state(), InteractionState::Engaged);
    let progress = bg.progress();

    let p = Point::new(50.0, 50.0);
    bg.path = Some(LoopPath::from_segments(vec![CubicBez::new(p, p, p, p)]).unwrap());
    assert_eq!(bg.path_length(), 0.0);
    assert!(bg.marker().is_none());

    for pointer in [OFFSCREEN, p] {
        let plan = bg.tick(pointer);
        assert!(plan.is_blank());
        assert_eq!((plan.width, plan.height), (200, 150));
        assert_eq!(bg.state(), InteractionState::Engaged);
        assert_eq!(bg.progress(), progress);
    }
}
