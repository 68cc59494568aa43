use crate::foundation::core::{Axis2D, Domain, Point};
use crate::foundation::error::{MotionPlotError, MotionPlotResult};

/// Hard cap on planned ticks per axis, so a tiny frequency over a wide
/// domain fails loudly instead of allocating without bound.
const MAX_TICKS: f64 = 10_000.0;

/// Geometry of one tick weight.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TickLevel {
    /// Tick spacing. Minor spacing is in domain units; major spacing counts
    /// minor steps (every Nth minor tick is promoted).
    pub frequency: f64,
    /// Mark length in pixels.
    pub length: f64,
    /// Stroke width in pixels.
    pub width: f64,
}

/// Tick configuration for one axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AxisTickSpec {
    /// Labeled, heavier graduations.
    pub major: TickLevel,
    /// Intermediate graduations.
    pub minor: TickLevel,
}

impl Default for AxisTickSpec {
    fn default() -> Self {
        Self {
            major: TickLevel {
                frequency: 4.0,
                length: 8.0,
                width: 2.0,
            },
            minor: TickLevel {
                frequency: 1.0,
                length: 4.0,
                width: 1.0,
            },
        }
    }
}

/// Visual weight of a planned tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TickKind {
    /// Labeled, heavier graduation.
    Major,
    /// Intermediate graduation.
    Minor,
}

/// Which way marks extend from the axis line and which way planning walks
/// along it, as a screen-space sign.
///
/// The x axis uses [`Positive`](Self::Positive): planning walks rightward and
/// marks extend downward into the bottom gutter. The y axis uses
/// [`Negative`](Self::Negative): planning walks upward (decreasing screen y)
/// and marks extend leftward into the left gutter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TickDirection {
    /// Walk and extend toward increasing screen coordinates.
    Positive,
    /// Walk and extend toward decreasing screen coordinates.
    Negative,
}

impl TickDirection {
    /// The direction as a multiplier.
    pub fn signum(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// One renderable tick: a mark position plus an optional label value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TickDescriptor {
    /// Base point on the axis line.
    pub start: Point,
    /// Signed mark extent in pixels, perpendicular to the axis. The planning
    /// direction's sign is already applied.
    pub length: f64,
    /// Stroke width in pixels.
    pub width: f64,
    /// Visual weight.
    pub kind: TickKind,
    /// Domain value to label the tick with; major ticks only.
    pub label: Option<f64>,
}

impl TickDescriptor {
    /// Endpoint of the mark, extending perpendicular to `axis`.
    pub fn end(&self, axis: Axis2D) -> Point {
        let mut p = self.start;
        match axis.other() {
            Axis2D::X => p.x += self.length,
            Axis2D::Y => p.y += self.length,
        }
        p
    }
}

/// Plan the graduations for one axis.
///
/// The axis line runs from `axis_start` to `axis_end` in screen space. Ticks
/// are spaced every `spec.minor.frequency` domain units; the pixel stride is
/// the axis' pixel extent divided by the fractional tick count, so a domain
/// that is not a whole multiple of the frequency gets a final partial step
/// (the count rounds up). Every `spec.major.frequency`-th tick is a major
/// carrying the label value `minor.frequency * i + domain.min`.
///
/// Planning starts from `(axis_start.x, axis_end.y)`: with the conventional
/// argument order (x axis left to right, y axis top to origin) both axes
/// start at the chart origin and walk outward per `direction`.
pub fn plan_ticks(
    spec: &AxisTickSpec,
    axis_start: Point,
    axis_end: Point,
    domain: Domain,
    axis: Axis2D,
    direction: TickDirection,
) -> MotionPlotResult<Vec<TickDescriptor>> {
    if !spec.minor.frequency.is_finite() || spec.minor.frequency <= 0.0 {
        return Err(MotionPlotError::invalid_tick_config(
            "minor tick frequency must be positive and finite",
        ));
    }
    if !spec.major.frequency.is_finite() || spec.major.frequency <= 0.0 {
        return Err(MotionPlotError::invalid_tick_config(
            "major tick frequency must be positive and finite",
        ));
    }
    let num_ticks = domain.span() / spec.minor.frequency;
    if !num_ticks.is_finite() || num_ticks < 0.0 {
        return Err(MotionPlotError::invalid_tick_config(format!(
            "tick count for domain [{}, {}] at frequency {} is not representable",
            domain.min, domain.max, spec.minor.frequency
        )));
    }
    if num_ticks > MAX_TICKS {
        return Err(MotionPlotError::invalid_tick_config(format!(
            "tick count {} exceeds the per-axis cap of {MAX_TICKS}",
            num_ticks.ceil()
        )));
    }

    let count = num_ticks.ceil() as usize;
    let px_per_tick = (axis.of(axis_end) - axis.of(axis_start)) / num_ticks;
    let sign = direction.signum();
    let mut base = Point::new(axis_start.x, axis_end.y);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let is_major = (i as f64) % spec.major.frequency == 0.0;
        let (kind, level) = if is_major {
            (TickKind::Major, spec.major)
        } else {
            (TickKind::Minor, spec.minor)
        };
        out.push(TickDescriptor {
            start: base,
            length: sign * level.length,
            width: level.width,
            kind,
            label: is_major.then(|| spec.minor.frequency * i as f64 + domain.min),
        });
        match axis {
            Axis2D::X => base.x += sign * px_per_tick,
            Axis2D::Y => base.y += sign * px_per_tick,
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/axis/ticks.rs"]
mod tests;
