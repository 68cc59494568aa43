use crate::axis::projector::to_pixel;
use crate::axis::ticks::{TickDescriptor, TickDirection, plan_ticks};
use crate::chart::config::ChartConfig;
use crate::data::index::DataSet;
use crate::foundation::core::{Axis2D, Point, Rgb8};
use crate::foundation::error::MotionPlotResult;
use crate::render::plan::{DrawOp, FramePlan, TextAnchor};

/// Stroke width of the two axis lines.
const AXIS_LINE_WIDTH: f64 = 2.0;
/// Gap between a major tick's mark and its label, in pixels.
const TICK_LABEL_PAD: f64 = 4.0;
/// Distance of the rotated y-axis title from the canvas' left edge.
const TITLE_INSET: f64 = 20.0;

/// Pixel spans available to data once the axis gutters are excluded.
fn plot_spans(config: &ChartConfig) -> (f64, f64) {
    (
        f64::from(config.canvas.width) - config.gutters.y_width,
        f64::from(config.canvas.height) - config.gutters.x_height,
    )
}

/// Draw commands for the chart background: one full-canvas clear.
pub fn plan_background(config: &ChartConfig) -> FramePlan {
    FramePlan {
        ops: vec![DrawOp::Clear {
            region: config.canvas.bounds(),
            color: config.background,
        }],
        missing: Vec::new(),
    }
}

/// Draw commands for the axis furniture: both axis lines, their tick marks,
/// major tick labels, and the axis titles.
///
/// The x axis sits on top of the bottom gutter and runs to the canvas' right
/// edge; its ticks extend down into the gutter. The y axis sits on the right
/// edge of the left gutter and runs to the canvas' top; its ticks extend left.
#[tracing::instrument(skip_all)]
pub fn plan_axes(data: &DataSet, config: &ChartConfig) -> MotionPlotResult<FramePlan> {
    let w = f64::from(config.canvas.width);
    let h = f64::from(config.canvas.height);
    let origin = Point::new(config.gutters.y_width, h - config.gutters.x_height);
    let mut plan = FramePlan::default();

    let x_end = Point::new(w, origin.y);
    plan.ops.push(DrawOp::StrokeLine {
        from: origin,
        to: x_end,
        width: AXIS_LINE_WIDTH,
        color: Rgb8::BLACK,
    });
    let ticks = plan_ticks(
        &config.ticks.x,
        origin,
        x_end,
        data.x_domain(),
        Axis2D::X,
        TickDirection::Positive,
    )?;
    push_tick_ops(&mut plan, &ticks, Axis2D::X);

    let y_top = Point::new(origin.x, 0.0);
    plan.ops.push(DrawOp::StrokeLine {
        from: origin,
        to: y_top,
        width: AXIS_LINE_WIDTH,
        color: Rgb8::BLACK,
    });
    let ticks = plan_ticks(
        &config.ticks.y,
        y_top,
        origin,
        data.y_domain(),
        Axis2D::Y,
        TickDirection::Negative,
    )?;
    push_tick_ops(&mut plan, &ticks, Axis2D::Y);

    if let Some(title) = &config.titles.x {
        plan.ops.push(DrawOp::Text {
            pos: Point::new(w / 2.0, h),
            content: title.clone(),
            anchor: TextAnchor::Middle,
            rotation_rad: 0.0,
        });
    }
    if let Some(title) = &config.titles.y {
        plan.ops.push(DrawOp::Text {
            pos: Point::new(TITLE_INSET, (h - config.gutters.x_height) / 2.0),
            content: title.clone(),
            anchor: TextAnchor::Middle,
            rotation_rad: -std::f64::consts::FRAC_PI_2,
        });
    }
    Ok(plan)
}

fn push_tick_ops(plan: &mut FramePlan, ticks: &[TickDescriptor], axis: Axis2D) {
    for tick in ticks {
        let end = tick.end(axis);
        plan.ops.push(DrawOp::StrokeLine {
            from: tick.start,
            to: end,
            width: tick.width,
            color: Rgb8::BLACK,
        });
        if let Some(value) = tick.label {
            // Labels sit just past the mark, further along its direction.
            let pad = tick.length.signum() * TICK_LABEL_PAD;
            let (pos, anchor) = match axis {
                Axis2D::X => (Point::new(end.x, end.y + pad), TextAnchor::Middle),
                Axis2D::Y => (Point::new(end.x + pad, end.y), TextAnchor::End),
            };
            plan.ops.push(DrawOp::Text {
                pos,
                content: format_tick_label(value),
                anchor,
                rotation_rad: 0.0,
            });
        }
    }
}

/// Whole numbers print without a trailing `.0` so axis labels stay short.
fn format_tick_label(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Draw commands for the data points at `z_index`: one bordered circle per
/// entity with a record there.
///
/// Positions project through the per-axis domains onto the plot spans, with
/// the y offset flipped so larger values sit higher on screen. Entities with
/// no record at `z_index`, or whose record lacks a finite x or y, are listed
/// in the plan's missing set instead of being drawn.
#[tracing::instrument(skip(data, config), fields(z = z_index))]
pub fn plan_frame(data: &DataSet, z_index: f64, config: &ChartConfig) -> FramePlan {
    let (span_w, span_h) = plot_spans(config);
    let x_domain = data.x_domain().for_projection();
    let y_domain = data.y_domain().for_projection();

    let frame = data.frame_at(z_index);
    let mut plan = FramePlan::default();
    for point in &frame.points {
        let value_x = point.record.x(data.keys()).filter(|v| v.is_finite());
        let value_y = point.record.y(data.keys()).filter(|v| v.is_finite());
        let (Some(value_x), Some(value_y)) = (value_x, value_y) else {
            plan.missing.push(point.entity.to_string());
            continue;
        };
        let x_offset = to_pixel(x_domain, span_w, value_x);
        let y_offset = to_pixel(y_domain, span_h, value_y);
        plan.ops.push(DrawOp::FillCircle {
            center: Point::new(config.gutters.y_width + x_offset, span_h - y_offset),
            radius: config.point_radius,
            fill: point.color,
            border: Rgb8::BLACK,
        });
    }
    plan.missing.extend(frame.missing.iter().map(|s| s.to_string()));
    plan.missing.sort();
    if !plan.missing.is_empty() {
        tracing::debug!(
            skipped = plan.missing.len(),
            "entities without a drawable record at this z index"
        );
    }
    plan
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
