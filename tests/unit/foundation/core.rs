use super::*;

#[test]
fn viewport_rejects_empty_sides() {
    assert!(Viewport::new(0, 10).is_err());
    assert!(Viewport::new(10, 0).is_err());
    assert!(Viewport::new(1, 1).is_ok());
    assert!(Viewport::new(7680, 4320).is_ok());
}

#[test]
fn viewport_threshold_is_exclusive() {
    let a = Viewport::new(1000, 800).unwrap();
    assert!(!a.differs_by_more_than(Viewport::new(1100, 800).unwrap(), 100));
    assert!(a.differs_by_more_than(Viewport::new(1101, 800).unwrap(), 100));
    assert!(a.differs_by_more_than(Viewport::new(1000, 650).unwrap(), 100));
}

#[test]
fn tick_millis_at_sixty_hz() {
    assert_eq!(Tick(0).to_millis(60), 0.0);
    assert!((Tick(60).to_millis(60) - 1000.0).abs() < 1e-9);
    assert_eq!(Tick(5).to_millis(0), 0.0);
    assert_eq!(Tick(u64::MAX).next(), Tick(u64::MAX));
}

#[test]
fn rgba_opacity_and_premul() {
    let c = Rgba8::rgb(241, 213, 0).with_opacity(0.05);
    assert_eq!(c.a, 13);
    assert_eq!(Rgba8::rgb(10, 20, 30).premultiplied(), [10, 20, 30, 255]);
    assert_eq!(Rgba8::rgba(255, 255, 255, 0).premultiplied(), [0, 0, 0, 0]);
}
