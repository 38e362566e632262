use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn range_stays_in_bounds() {
    let mut rng = Rng64::new(9);
    for _ in 0..1000 {
        let v = rng.range(-0.5, 1.5);
        assert!((-0.5..1.5).contains(&v));
    }
}

#[test]
fn explicit_seed_wins_over_entropy() {
    let mut a = Rng64::from_seed_or_entropy(Some(42));
    let mut b = Rng64::new(42);
    assert_eq!(a.next_u64(), b.next_u64());
}
