use kurbo::{Point, Vec2};

use crate::foundation::error::{WanderError, WanderResult};

/// Smallest accepted radius or half extent, in pixels.
///
/// Pointer positions cross the host boundary as `f32`, which is off by far less than this
/// anywhere inside a `u16` surface, so a pointer on the marker always hits.
pub const MIN_HIT_EXTENT: f64 = 1.0;

/// Region around the marker that counts as "hovering".
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HitZone {
    /// Pointer within `radius` pixels of the marker center (strict `<`).
    Radius {
        /// Hover radius in pixels.
        radius: f64,
    },
    /// Pointer inside a box aligned with the marker's heading (inclusive bounds).
    OrientedBox {
        /// Half extent along the heading.
        half_width: f64,
        /// Half extent across the heading.
        half_height: f64,
    },
}

impl Default for HitZone {
    fn default() -> Self {
        Self::OrientedBox {
            half_width: 15.0,
            half_height: 15.0,
        }
    }
}

impl HitZone {
    /// Reject non-finite extents and anything below [`MIN_HIT_EXTENT`].
    pub fn validate(&self) -> WanderResult<()> {
        let extent_ok = |v: f64| v.is_finite() && v >= MIN_HIT_EXTENT;
        let ok = match *self {
            Self::Radius { radius } => extent_ok(radius),
            Self::OrientedBox {
                half_width,
                half_height,
            } => extent_ok(half_width) && extent_ok(half_height),
        };
        if !ok {
            return Err(WanderError::validation(format!(
                "hit zone extents must be finite and >= {MIN_HIT_EXTENT}: {self:?}"
            )));
        }
        Ok(())
    }

    /// Whether `pointer` hovers a marker centered at `marker` heading along `angle`.
    pub fn contains(&self, marker: Point, angle: f64, pointer: Point) -> bool {
        match *self {
            Self::Radius { radius } => marker.distance(pointer) < radius,
            Self::OrientedBox {
                half_width,
                half_height,
            } => {
                let local = to_marker_local(marker, angle, pointer);
                local.x.abs() <= half_width && local.y.abs() <= half_height
            }
        }
    }
}

/// Pointer offset expressed in the marker's frame (x along the heading).
pub fn to_marker_local(marker: Point, angle: f64, pointer: Point) -> Vec2 {
    let d = pointer - marker;
    let (sin, cos) = (-angle).sin_cos();
    Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/hit.rs"]
mod tests;
