use super::*;
use std::f64::consts::FRAC_PI_2;

#[test]
fn marker_center_always_hovers() {
    let marker = Point::new(300.0, 200.0);
    for zone in [
        HitZone::default(),
        HitZone::Radius {
            radius: MIN_HIT_EXTENT,
        },
        HitZone::OrientedBox {
            half_width: MIN_HIT_EXTENT,
            half_height: MIN_HIT_EXTENT,
        },
    ] {
        for angle in [0.0, 1.0, -2.5, FRAC_PI_2] {
            assert!(zone.contains(marker, angle, marker));
        }
    }
}

#[test]
fn oriented_box_bounds_are_inclusive() {
    let zone = HitZone::default();
    let m = Point::new(0.0, 0.0);
    assert!(zone.contains(m, 0.0, Point::new(15.0, -15.0)));
    assert!(!zone.contains(m, 0.0, Point::new(15.01, 0.0)));
}

#[test]
fn oriented_box_rotates_with_heading() {
    let zone = HitZone::OrientedBox {
        half_width: 30.0,
        half_height: 5.0,
    };
    let m = Point::new(100.0, 100.0);
    // Heading along +x: the long side is horizontal.
    assert!(zone.contains(m, 0.0, Point::new(125.0, 100.0)));
    assert!(!zone.contains(m, 0.0, Point::new(100.0, 125.0)));
    // Heading along +y: the long side is vertical.
    assert!(zone.contains(m, FRAC_PI_2, Point::new(100.0, 125.0)));
    assert!(!zone.contains(m, FRAC_PI_2, Point::new(125.0, 100.0)));
}

#[test]
fn local_frame_projection() {
    let local = to_marker_local(Point::new(10.0, 10.0), FRAC_PI_2, Point::new(10.0, 20.0));
    assert!((local.x - 10.0).abs() < 1e-9);
    assert!(local.y.abs() < 1e-9);
}

#[test]
fn radius_is_strict_and_validated() {
    let zone = HitZone::Radius { radius: 65.0 };
    let m = Point::new(0.0, 0.0);
    assert!(zone.contains(m, 0.0, Point::new(64.9, 0.0)));
    assert!(!zone.contains(m, 0.0, Point::new(65.0, 0.0)));

    assert!(HitZone::Radius { radius: 0.0 }.validate().is_err());
    assert!(
        HitZone::OrientedBox {
            half_width: -1.0,
            half_height: 1.0
        }
        .validate()
        .is_err()
    );
    assert!(HitZone::default().validate().is_ok());
}

#[test]
fn extents_below_one_pixel_are_rejected() {
    for zone in [
        HitZone::Radius { radius: 0.5 },
        HitZone::OrientedBox {
            half_width: 0.0,
            half_height: 0.0,
        },
        HitZone::OrientedBox {
            half_width: 15.0,
            half_height: 0.9,
        },
        HitZone::Radius {
            radius: f64::INFINITY,
        },
    ] {
        assert!(zone.validate().is_err(), "{zone:?}");
    }
}

#[test]
fn smallest_zone_hits_a_pointer_passed_through_the_shared_cell() {
    use crate::engine::pointer::PointerCell;

    let cell = PointerCell::default();
    let zone = HitZone::OrientedBox {
        half_width: MIN_HIT_EXTENT,
        half_height: MIN_HIT_EXTENT,
    };
    for (marker, angle) in [
        (Point::new(512.123_456_789, 76.8), 0.3),
        (Point::new(7679.987_654_321, 4319.000_000_1), -2.0),
        (Point::new(65_534.9, 0.1), FRAC_PI_2),
    ] {
        cell.set(marker);
        assert_ne!(cell.get(), marker);
        assert!(zone.contains(marker, angle, cell.get()));
        assert!(HitZone::Radius {
            radius: MIN_HIT_EXTENT
        }
        .contains(marker, angle, cell.get()));
    }
}
