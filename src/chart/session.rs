use std::time::Instant;

use crate::chart::config::ChartConfig;
use crate::data::index::{DataIndex, DataSet};
use crate::data::interp::Interpolator;
use crate::foundation::error::MotionPlotResult;
use crate::playback::controller::{FrameObserver, PlaybackController, StepDirection};
use crate::render::frame::{plan_axes, plan_background, plan_frame};
use crate::render::plan::FramePlan;

/// One configured chart: built data plus playback, emitting frame plans.
///
/// The session ties the pipeline together. Construction validates the config,
/// freezes the ingested index into a [`DataSet`], and seats a stopped
/// [`PlaybackController`] at the z minimum. From then on the host loop is
/// three calls: pump [`tick`](Self::tick) (or step manually), ask for plans,
/// replay them onto a surface.
///
/// Layering matches the plan split: the background and axes only depend on
/// config and domains, so hosts with layered surfaces can draw
/// [`background_plan`](Self::background_plan) and
/// [`axes_plan`](Self::axes_plan) once and redraw only
/// [`content_plan`](Self::content_plan) per frame. Single-surface hosts use
/// [`full_plan`](Self::full_plan).
#[derive(Debug)]
pub struct ChartSession {
    config: ChartConfig,
    data: DataSet,
    playback: PlaybackController,
}

impl ChartSession {
    /// Validate `config`, build the index, and seat playback at the z
    /// minimum.
    #[tracing::instrument(skip_all)]
    pub fn new(
        config: ChartConfig,
        index: DataIndex,
        interpolator: &dyn Interpolator,
    ) -> MotionPlotResult<Self> {
        config.validate()?;
        let data = index.build(interpolator)?;
        let playback =
            PlaybackController::new(data.z_domain(), config.z_step, config.play_interval)?;
        Ok(Self {
            config,
            data,
            playback,
        })
    }

    /// The configuration this session renders with.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The built dataset.
    pub fn data(&self) -> &DataSet {
        &self.data
    }

    /// The playback controller, for state queries.
    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    /// Draw commands for the background layer.
    pub fn background_plan(&self) -> FramePlan {
        plan_background(&self.config)
    }

    /// Draw commands for the axes layer.
    pub fn axes_plan(&self) -> MotionPlotResult<FramePlan> {
        plan_axes(&self.data, &self.config)
    }

    /// Draw commands for the data points at the current playback index.
    pub fn content_plan(&self) -> FramePlan {
        plan_frame(&self.data, self.playback.current_index(), &self.config)
    }

    /// Background, axes, and content concatenated in paint order.
    pub fn full_plan(&self) -> MotionPlotResult<FramePlan> {
        let mut plan = self.background_plan();
        plan.extend(self.axes_plan()?);
        plan.extend(self.content_plan());
        Ok(plan)
    }

    /// The z index the chart currently shows.
    pub fn current_index(&self) -> f64 {
        self.playback.current_index()
    }

    /// True while automatic playback is armed.
    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Step the chart once in `direction`. See [`PlaybackController::step`].
    pub fn step(&mut self, direction: StepDirection) -> bool {
        self.playback.step(direction)
    }

    /// Jump to a z index without notifying the frame observer.
    pub fn seek(&mut self, z: f64) {
        self.playback.seek(z);
    }

    /// Arm or disarm automatic playback. See
    /// [`PlaybackController::toggle_play`].
    pub fn toggle_play(&mut self, now: Instant) {
        self.playback.toggle_play(now);
    }

    /// Pump automatic playback; true when the chart advanced and needs a
    /// fresh content plan.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.playback.tick(now)
    }

    /// Install (or clear) the observer notified after each committed step.
    pub fn set_frame_observer(&mut self, observer: Option<FrameObserver>) {
        self.playback.set_frame_observer(observer);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/session.rs"]
mod tests;
