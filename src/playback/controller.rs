use std::time::{Duration, Instant};

use crate::foundation::core::Domain;
use crate::foundation::error::{MotionPlotError, MotionPlotResult};

/// Direction of a manual playback step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StepDirection {
    /// Advance toward the z maximum.
    Forward,
    /// Retreat toward the z minimum.
    Back,
}

impl StepDirection {
    fn signum(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Back => -1.0,
        }
    }
}

/// Callback invoked with the new z index after every committed step.
pub type FrameObserver = Box<dyn FnMut(f64)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PlayState {
    Stopped,
    Playing { next_due: Instant },
}

/// Play/stop state machine over the z range.
///
/// The controller owns the current z index and steps it in fixed increments
/// within `[z_min, z_max]`. It never spawns threads or sleeps: hosts call
/// [`tick`](Self::tick) from their event loop with the current instant, and
/// the controller advances at most one step per call once the configured
/// interval has elapsed. Reaching the end of the range while playing flips
/// the state back to stopped, so a stale timer can never keep firing.
///
/// [`toggle_play`](Self::toggle_play) is idempotent-safe under rapid double
/// invocation: the state is a single enum, so two quick toggles arm and
/// disarm exactly once instead of stacking timers.
pub struct PlaybackController {
    current: f64,
    min: f64,
    max: f64,
    step: f64,
    interval: Duration,
    state: PlayState,
    observer: Option<FrameObserver>,
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("current", &self.current)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("step", &self.step)
            .field("interval", &self.interval)
            .field("state", &self.state)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl PlaybackController {
    /// A stopped controller positioned at the z minimum.
    pub fn new(z_domain: Domain, step: f64, interval: Duration) -> MotionPlotResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(MotionPlotError::validation(
                "playback step must be positive and finite",
            ));
        }
        if !z_domain.min.is_finite() || !z_domain.max.is_finite() || z_domain.min > z_domain.max {
            return Err(MotionPlotError::validation(
                "playback range must be a finite, ordered interval",
            ));
        }
        if interval.is_zero() {
            return Err(MotionPlotError::validation(
                "playback interval must be non-zero",
            ));
        }
        Ok(Self {
            current: z_domain.min,
            min: z_domain.min,
            max: z_domain.max,
            step,
            interval,
            state: PlayState::Stopped,
            observer: None,
        })
    }

    /// The z index playback currently sits at.
    pub fn current_index(&self) -> f64 {
        self.current
    }

    /// Lower bound of the playback range.
    pub fn z_min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the playback range.
    pub fn z_max(&self) -> f64 {
        self.max
    }

    /// Fixed z increment per step.
    pub fn step_size(&self) -> f64 {
        self.step
    }

    /// Interval between automatic steps while playing.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True while the play timer is armed.
    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlayState::Playing { .. })
    }

    /// The greatest index reachable by whole steps from the minimum.
    ///
    /// When the range is not a whole multiple of the step this lies short of
    /// `z_max`; playback stops there because the next step would overshoot.
    pub fn last_step_index(&self) -> f64 {
        self.max - ((self.max - self.min) % self.step)
    }

    /// Install (or clear) the observer notified after each committed step.
    pub fn set_frame_observer(&mut self, observer: Option<FrameObserver>) {
        self.observer = observer;
    }

    /// Step once in `direction`.
    ///
    /// The move commits and notifies the observer only if the target index
    /// stays within `[z_min, z_max]`; otherwise the current index is left
    /// untouched and false is returned.
    pub fn step(&mut self, direction: StepDirection) -> bool {
        let candidate = self.current + direction.signum() * self.step;
        if candidate > self.max || candidate < self.min {
            return false;
        }
        self.current = candidate;
        if let Some(observer) = self.observer.as_mut() {
            observer(candidate);
        }
        true
    }

    /// Jump straight to `value` without stepping or notifying the observer.
    ///
    /// Trusted input: callers are expected to pass a value inside the
    /// playback range, typically one obtained from this controller.
    pub fn seek(&mut self, value: f64) {
        self.current = value;
    }

    /// Arm or disarm the play timer.
    ///
    /// Arming schedules the first automatic step one interval after `now`.
    /// Toggling while playing stops without moving the index.
    pub fn toggle_play(&mut self, now: Instant) {
        self.state = match self.state {
            PlayState::Stopped => PlayState::Playing {
                next_due: now + self.interval,
            },
            PlayState::Playing { .. } => PlayState::Stopped,
        };
        tracing::debug!(playing = self.is_playing(), "playback toggled");
    }

    /// Advance automatic playback.
    ///
    /// Returns true when a step committed. While stopped, or before the next
    /// step is due, this is a cheap no-op. A due tick that cannot step (end
    /// of range) stops playback instead.
    pub fn tick(&mut self, now: Instant) -> bool {
        let PlayState::Playing { next_due } = self.state else {
            return false;
        };
        if now < next_due {
            return false;
        }
        if self.step(StepDirection::Forward) {
            self.state = PlayState::Playing {
                next_due: now + self.interval,
            };
            true
        } else {
            self.toggle_play(now);
            false
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/controller.rs"]
mod tests;
