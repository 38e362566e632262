use crate::{
    foundation::core::{Affine, BezPath, Rgba8},
    foundation::error::{WanderError, WanderResult},
    render::backend::{FrameRGBA, RenderBackend, RenderSettings},
    render::plan::{DrawOp, FramePlan},
    render::text::{TextBrushRgba8, TextLayoutEngine},
};

/// CPU raster backend powered by `vello_cpu`.
#[derive(Debug)]
pub struct CpuBackend {
    settings: RenderSettings,
    text: Option<TextLayoutEngine>,
}

impl CpuBackend {
    /// Build a backend; fails only when `settings.font_bytes` cannot be parsed.
    pub fn new(settings: RenderSettings) -> WanderResult<Self> {
        let text = match &settings.font_bytes {
            Some(bytes) => Some(TextLayoutEngine::from_font_bytes(bytes.as_ref().clone())?),
            None => None,
        };
        Ok(Self { settings, text })
    }

    /// Whether label text can be drawn.
    pub fn has_font(&self) -> bool {
        self.text.is_some()
    }
}

impl RenderBackend for CpuBackend {
    fn render_plan(&mut self, plan: &FramePlan) -> WanderResult<FrameRGBA> {
        let width: u16 = plan
            .width
            .try_into()
            .map_err(|_| WanderError::render("surface width exceeds u16"))?;
        let height: u16 = plan
            .height
            .try_into()
            .map_err(|_| WanderError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(WanderError::render("surface has zero area"));
        }

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let clear = plan.clear.map(|c| [c.r, c.g, c.b, c.a]).or(self.settings.clear_rgba);
        if let Some([r, g, b, a]) = clear {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));
        }

        for op in &plan.ops {
            draw_op(self.text.as_mut(), &mut ctx, op)?;
        }

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: plan.width,
            height: plan.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn draw_op(
    text: Option<&mut TextLayoutEngine>,
    ctx: &mut vello_cpu::RenderContext,
    op: &DrawOp,
) -> WanderResult<()> {
    match op {
        DrawOp::FillPath {
            path,
            transform,
            color,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_path(&bezpath_to_cpu(path));
            Ok(())
        }
        DrawOp::StrokePath {
            path,
            transform,
            color,
            width,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(color_to_cpu(*color));
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
            ctx.stroke_path(&bezpath_to_cpu(path));
            Ok(())
        }
        DrawOp::Text {
            text: label,
            transform,
            color,
            size_px,
        } => {
            let Some(engine) = text else {
                tracing::debug!(label = %label, "no font configured; skipping label");
                return Ok(());
            };

            let brush = TextBrushRgba8 {
                r: color.r,
                g: color.g,
                b: color.b,
                a: color.a,
            };
            let layout = engine.layout_line(label, *size_px, brush)?;
            let center = kurbo::Vec2::new(
                -f64::from(layout.width()) / 2.0,
                -f64::from(layout.height()) / 2.0,
            );
            ctx.set_transform(affine_to_cpu(*transform * Affine::translate(center)));

            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };

                    let brush = run.style().brush;
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                        brush.r, brush.g, brush.b, brush.a,
                    ));

                    let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(engine.font())
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
            Ok(())
        }
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
