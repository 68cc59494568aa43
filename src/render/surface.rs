use crate::foundation::core::{Point, Rect, Rgb8};
use crate::foundation::error::MotionPlotResult;
use crate::render::plan::{DrawOp, FramePlan, TextAnchor};

/// Drawing capability supplied by the host.
///
/// Surfaces own the actual pixels (a canvas binding, a GUI widget, the
/// bundled [`PixmapSurface`](crate::PixmapSurface)) and interpret commands
/// in screen space. Implementations are free to approximate: a surface
/// without text support may ignore [`draw_text`](Self::draw_text) as long as
/// it reports success.
pub trait DrawSurface {
    /// Clear a rectangle to a solid color.
    fn clear(&mut self, region: Rect, color: Rgb8) -> MotionPlotResult<()>;

    /// Stroke a straight line segment.
    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f64,
        color: Rgb8,
    ) -> MotionPlotResult<()>;

    /// Fill a circle and outline it with a one-pixel border.
    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        fill: Rgb8,
        border: Rgb8,
    ) -> MotionPlotResult<()>;

    /// Draw a single line of text anchored at `pos`, rotated about it.
    fn draw_text(
        &mut self,
        pos: Point,
        content: &str,
        anchor: TextAnchor,
        rotation_rad: f64,
    ) -> MotionPlotResult<()>;
}

/// Replay a plan's ops onto a surface, in order.
///
/// Fails fast: the first op the surface rejects aborts the replay and the
/// surface is left with whatever was drawn so far.
pub fn execute_plan<S: DrawSurface + ?Sized>(
    surface: &mut S,
    plan: &FramePlan,
) -> MotionPlotResult<()> {
    for op in &plan.ops {
        match op {
            DrawOp::Clear { region, color } => surface.clear(*region, *color)?,
            DrawOp::StrokeLine {
                from,
                to,
                width,
                color,
            } => surface.stroke_line(*from, *to, *width, *color)?,
            DrawOp::FillCircle {
                center,
                radius,
                fill,
                border,
            } => surface.fill_circle(*center, *radius, *fill, *border)?,
            DrawOp::Text {
                pos,
                content,
                anchor,
                rotation_rad,
            } => surface.draw_text(*pos, content, *anchor, *rotation_rad)?,
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
