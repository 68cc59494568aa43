use std::time::Duration;

use crate::axis::ticks::AxisTickSpec;
use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{MotionPlotError, MotionPlotResult};

/// Gutter sizes reserved for axis furniture, in pixels.
///
/// The x gutter is a horizontal band along the bottom edge (it hosts the x
/// axis line, its ticks, and its labels), the y gutter a vertical band along
/// the left edge. Data points are laid out in the remaining plot area.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AxisGutters {
    /// Height of the bottom gutter.
    pub x_height: f64,
    /// Width of the left gutter.
    pub y_width: f64,
}

impl Default for AxisGutters {
    fn default() -> Self {
        Self {
            x_height: 40.0,
            y_width: 50.0,
        }
    }
}

/// Axis title strings; `None` suppresses the title.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AxisTitles {
    /// Title under the x axis.
    pub x: Option<String>,
    /// Title beside the y axis, drawn rotated.
    pub y: Option<String>,
}

impl Default for AxisTitles {
    fn default() -> Self {
        Self {
            x: Some("Horizontal Axis".into()),
            y: Some("Vertical Axis".into()),
        }
    }
}

/// Tick configuration for both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChartTicks {
    /// X axis graduations.
    pub x: AxisTickSpec,
    /// Y axis graduations.
    pub y: AxisTickSpec,
}

/// Complete presentation and playback configuration for one chart.
///
/// Everything is plain data with serde support, so chart setups can live in
/// JSON next to the records they render. Axis field bindings are not part of
/// this config; they belong to the [`DataIndex`](crate::DataIndex) because
/// they shape the dataset, not its presentation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Output canvas size in pixels.
    pub canvas: Canvas,
    /// Gutters reserved for axis furniture.
    pub gutters: AxisGutters,
    /// Tick graduations per axis.
    pub ticks: ChartTicks,
    /// Axis titles.
    pub titles: AxisTitles,
    /// Z increment per playback step.
    pub z_step: f64,
    /// Interval between automatic steps while playing.
    pub play_interval: Duration,
    /// Data point radius in pixels.
    pub point_radius: f64,
    /// Background color.
    pub background: Rgb8,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 600,
                height: 350,
            },
            gutters: AxisGutters::default(),
            ticks: ChartTicks::default(),
            titles: AxisTitles::default(),
            z_step: 1.0,
            play_interval: Duration::from_millis(500),
            point_radius: 10.0,
            background: Rgb8 {
                r: 0xf0,
                g: 0xf0,
                b: 0xf0,
            },
        }
    }
}

impl ChartConfig {
    /// Check the config for values the planners cannot work with.
    ///
    /// Tick frequencies are deliberately not checked here; they surface from
    /// [`plan_ticks`](crate::plan_ticks) as
    /// [`InvalidTickConfig`](crate::MotionPlotError::InvalidTickConfig) when
    /// an axes plan is requested.
    pub fn validate(&self) -> MotionPlotResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(MotionPlotError::validation(
                "canvas dimensions must be non-zero",
            ));
        }
        if !self.gutters.x_height.is_finite()
            || !self.gutters.y_width.is_finite()
            || self.gutters.x_height < 0.0
            || self.gutters.y_width < 0.0
        {
            return Err(MotionPlotError::validation(
                "axis gutters must be non-negative and finite",
            ));
        }
        if self.gutters.y_width >= f64::from(self.canvas.width)
            || self.gutters.x_height >= f64::from(self.canvas.height)
        {
            return Err(MotionPlotError::validation(
                "axis gutters must leave room for the plot area",
            ));
        }
        if !self.z_step.is_finite() || self.z_step <= 0.0 {
            return Err(MotionPlotError::validation(
                "z step must be positive and finite",
            ));
        }
        if self.play_interval.is_zero() {
            return Err(MotionPlotError::validation(
                "play interval must be non-zero",
            ));
        }
        if !self.point_radius.is_finite() || self.point_radius <= 0.0 {
            return Err(MotionPlotError::validation(
                "point radius must be positive and finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/config.rs"]
mod tests;
