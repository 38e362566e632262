use kurbo::{Affine, BezPath};

use crate::foundation::core::Rgba8;

/// One paint operation. Colors are straight alpha.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill a closed path.
    FillPath {
        /// Shape in local coordinates.
        path: BezPath,
        /// Local-to-surface transform.
        transform: Affine,
        /// Fill color.
        color: Rgba8,
    },
    /// Stroke a path with a fixed width.
    StrokePath {
        /// Shape in local coordinates.
        path: BezPath,
        /// Local-to-surface transform.
        transform: Affine,
        /// Stroke color.
        color: Rgba8,
        /// Stroke width in local units.
        width: f64,
    },
    /// Single-line label centered on the transform's origin.
    Text {
        /// Label contents.
        text: String,
        /// Local-to-surface transform.
        transform: Affine,
        /// Glyph color.
        color: Rgba8,
        /// Font size in pixels.
        size_px: f32,
    },
}

/// Backend-neutral paint list for one frame, in painter's order.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Clear color; backends fall back to their own setting when `None`.
    pub clear: Option<Rgba8>,
    /// Paint operations, bottom to top.
    pub ops: Vec<DrawOp>,
}

impl FramePlan {
    /// A plan that only clears the surface.
    pub fn blank(width: u32, height: u32, clear: Option<Rgba8>) -> Self {
        Self {
            width,
            height,
            clear,
            ops: Vec::new(),
        }
    }

    /// Whether nothing would be painted besides the clear.
    pub fn is_blank(&self) -> bool {
        self.ops.is_empty()
    }
}
