use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use kurbo::Point;

/// Sentinel position meaning "no pointer over the page".
pub const OFFSCREEN: Point = Point::new(-100.0, -100.0);

/// Last-write-wins pointer position shared between the host and the animation tick.
///
/// The host writes (`set`, `leave`); the tick only reads. Both coordinates live in one
/// atomic word, so a read never observes half of an update.
#[derive(Clone, Debug)]
pub struct PointerCell {
    bits: Arc<AtomicU64>,
}

impl Default for PointerCell {
    fn default() -> Self {
        Self::new(OFFSCREEN)
    }
}

impl PointerCell {
    /// Cell holding `p`.
    pub fn new(p: Point) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(pack(p))),
        }
    }

    /// Record a pointer-move in viewport pixels.
    pub fn set(&self, p: Point) {
        self.bits.store(pack(p), Ordering::Relaxed);
    }

    /// Record a pointer-leave so no stale hover persists.
    pub fn leave(&self) {
        self.set(OFFSCREEN);
    }

    /// Latest written position.
    pub fn get(&self) -> Point {
        unpack(self.bits.load(Ordering::Relaxed))
    }
}

// Coordinates are stored as f32: sub-pixel precision is plenty for viewport positions.
fn pack(p: Point) -> u64 {
    (u64::from((p.x as f32).to_bits()) << 32) | u64::from((p.y as f32).to_bits())
}

fn unpack(bits: u64) -> Point {
    let x = f32::from_bits((bits >> 32) as u32);
    let y = f32::from_bits(bits as u32);
    Point::new(f64::from(x), f64::from(y))
}

#[cfg(test)]
#[path = "../../tests/unit/engine/pointer.rs"]
mod tests;
