use super::*;

#[test]
fn speed_must_be_positive_and_finite() {
    assert!(MotionState::new(0.0).is_err());
    assert!(MotionState::new(-1.0).is_err());
    assert!(MotionState::new(f64::INFINITY).is_err());
    assert!(MotionState::new(1.5).is_ok());
}

#[test]
fn advance_accumulates_and_wraps() {
    let mut m = MotionState::new(1.5).unwrap();
    for _ in 0..60 {
        m.advance(1000.0);
    }
    assert!((m.progress() - 90.0).abs() < 1e-9);

    let mut m = MotionState::new(4.0).unwrap();
    for _ in 0..3 {
        m.advance(10.0);
    }
    assert!((m.progress() - 2.0).abs() < 1e-9);
    assert!(m.progress() < 10.0);
}

#[test]
fn advance_on_empty_path_is_noop() {
    let mut m = MotionState::new(2.0).unwrap();
    m.advance(0.0);
    m.advance(f64::NAN);
    assert_eq!(m.progress(), 0.0);
}

#[test]
fn refit_policies() {
    let mut m = MotionState::new(50.0).unwrap();
    for _ in 0..3 {
        m.advance(1000.0);
    }
    assert_eq!(m.progress(), 150.0);

    let mut reset = m;
    reset.refit(ResizeProgress::Reset, 1000.0, 500.0);
    assert_eq!(reset.progress(), 0.0);

    let mut wrapped = m;
    wrapped.refit(ResizeProgress::Wrap, 1000.0, 100.0);
    assert!((wrapped.progress() - 50.0).abs() < 1e-9);

    let mut rescaled = m;
    rescaled.refit(ResizeProgress::Rescale, 1000.0, 2000.0);
    assert!((rescaled.progress() - 300.0).abs() < 1e-9);

    let mut degenerate = m;
    degenerate.refit(ResizeProgress::Wrap, 1000.0, 0.0);
    assert_eq!(degenerate.progress(), 0.0);
}
