use super::*;

use std::cell::RefCell;
use std::rc::Rc;

const INTERVAL: Duration = Duration::from_millis(500);

fn controller(min: f64, max: f64, step: f64) -> PlaybackController {
    PlaybackController::new(Domain { min, max }, step, INTERVAL).unwrap()
}

#[test]
fn construction_validates_inputs() {
    assert!(PlaybackController::new(Domain { min: 0.0, max: 5.0 }, 0.0, INTERVAL).is_err());
    assert!(PlaybackController::new(Domain { min: 0.0, max: 5.0 }, -1.0, INTERVAL).is_err());
    assert!(PlaybackController::new(Domain { min: 5.0, max: 0.0 }, 1.0, INTERVAL).is_err());
    assert!(
        PlaybackController::new(
            Domain {
                min: f64::NEG_INFINITY,
                max: 0.0
            },
            1.0,
            INTERVAL
        )
        .is_err()
    );
    assert!(PlaybackController::new(Domain { min: 0.0, max: 5.0 }, 1.0, Duration::ZERO).is_err());
}

#[test]
fn starts_stopped_at_the_minimum() {
    let pc = controller(-2.0, 3.0, 1.0);
    assert!(!pc.is_playing());
    assert_eq!(pc.current_index(), -2.0);
    assert_eq!(pc.z_min(), -2.0);
    assert_eq!(pc.z_max(), 3.0);
    assert_eq!(pc.step_size(), 1.0);
}

#[test]
fn steps_commit_only_inside_the_range() {
    let mut pc = controller(0.0, 2.0, 1.0);

    // Back off the minimum: refused, index untouched.
    assert!(!pc.step(StepDirection::Back));
    assert_eq!(pc.current_index(), 0.0);

    assert!(pc.step(StepDirection::Forward));
    assert!(pc.step(StepDirection::Forward));
    assert_eq!(pc.current_index(), 2.0);

    // Forward past the maximum: refused.
    assert!(!pc.step(StepDirection::Forward));
    assert_eq!(pc.current_index(), 2.0);

    assert!(pc.step(StepDirection::Back));
    assert_eq!(pc.current_index(), 1.0);
}

#[test]
fn stepping_stops_short_when_range_is_not_a_step_multiple() {
    let mut pc = controller(0.0, 2.5, 1.0);
    assert_eq!(pc.last_step_index(), 2.0);

    assert!(pc.step(StepDirection::Forward));
    assert!(pc.step(StepDirection::Forward));
    assert_eq!(pc.current_index(), 2.0);
    // 3.0 would overshoot 2.5.
    assert!(!pc.step(StepDirection::Forward));
    assert_eq!(pc.current_index(), 2.0);
}

#[test]
fn observer_fires_on_committed_steps_only() {
    let seen: Rc<RefCell<Vec<f64>>> = Rc::default();
    let sink = Rc::clone(&seen);

    let mut pc = controller(0.0, 2.0, 1.0);
    pc.set_frame_observer(Some(Box::new(move |z| sink.borrow_mut().push(z))));

    assert!(pc.step(StepDirection::Forward));
    assert!(pc.step(StepDirection::Forward));
    assert!(!pc.step(StepDirection::Forward)); // refused, no callback
    assert_eq!(*seen.borrow(), vec![1.0, 2.0]);

    pc.set_frame_observer(None);
    assert!(pc.step(StepDirection::Back));
    assert_eq!(*seen.borrow(), vec![1.0, 2.0]);
}

#[test]
fn seek_jumps_without_notifying() {
    let seen: Rc<RefCell<Vec<f64>>> = Rc::default();
    let sink = Rc::clone(&seen);

    let mut pc = controller(0.0, 10.0, 1.0);
    pc.set_frame_observer(Some(Box::new(move |z| sink.borrow_mut().push(z))));

    pc.seek(7.0);
    assert_eq!(pc.current_index(), 7.0);
    assert!(seen.borrow().is_empty());

    // Stepping resumes from the seeked position.
    assert!(pc.step(StepDirection::Forward));
    assert_eq!(*seen.borrow(), vec![8.0]);
}

#[test]
fn ticks_advance_once_per_elapsed_interval() {
    let t0 = Instant::now();
    let mut pc = controller(0.0, 10.0, 1.0);

    // Stopped controllers ignore ticks.
    assert!(!pc.tick(t0));

    pc.toggle_play(t0);
    assert!(pc.is_playing());

    // Not due yet.
    assert!(!pc.tick(t0));
    assert!(!pc.tick(t0 + INTERVAL / 2));
    assert_eq!(pc.current_index(), 0.0);

    assert!(pc.tick(t0 + INTERVAL));
    assert_eq!(pc.current_index(), 1.0);

    // One committed step reschedules; the same instant is no longer due.
    assert!(!pc.tick(t0 + INTERVAL));
    assert!(pc.tick(t0 + 2 * INTERVAL));
    assert_eq!(pc.current_index(), 2.0);
}

#[test]
fn an_overdue_tick_still_advances_a_single_step() {
    let t0 = Instant::now();
    let mut pc = controller(0.0, 10.0, 1.0);
    pc.toggle_play(t0);

    // Host stalled for many intervals; playback does not try to catch up.
    assert!(pc.tick(t0 + 10 * INTERVAL));
    assert_eq!(pc.current_index(), 1.0);
}

#[test]
fn playback_stops_itself_at_the_end_of_the_range() {
    let t0 = Instant::now();
    let mut pc = controller(0.0, 2.0, 1.0);
    pc.toggle_play(t0);

    assert!(pc.tick(t0 + INTERVAL));
    assert!(pc.tick(t0 + 2 * INTERVAL));
    assert_eq!(pc.current_index(), 2.0);
    assert!(pc.is_playing());

    // The next due tick cannot step; the controller disarms itself.
    assert!(!pc.tick(t0 + 3 * INTERVAL));
    assert!(!pc.is_playing());
    assert_eq!(pc.current_index(), 2.0);

    // Subsequent ticks are inert until toggled again.
    assert!(!pc.tick(t0 + 4 * INTERVAL));
}

#[test]
fn double_toggle_arms_and_disarms_exactly_once() {
    let t0 = Instant::now();
    let mut pc = controller(0.0, 5.0, 1.0);

    pc.toggle_play(t0);
    pc.toggle_play(t0);
    assert!(!pc.is_playing());
    // No timer survives the pair.
    assert!(!pc.tick(t0 + 10 * INTERVAL));
    assert_eq!(pc.current_index(), 0.0);
}

#[test]
fn toggling_while_playing_keeps_the_current_index() {
    let t0 = Instant::now();
    let mut pc = controller(0.0, 5.0, 1.0);
    pc.toggle_play(t0);
    assert!(pc.tick(t0 + INTERVAL));

    pc.toggle_play(t0 + INTERVAL);
    assert!(!pc.is_playing());
    assert_eq!(pc.current_index(), 1.0);
}

#[test]
fn debug_omits_the_observer_closure() {
    let mut pc = controller(0.0, 1.0, 1.0);
    pc.set_frame_observer(Some(Box::new(|_| {})));
    let dbg = format!("{pc:?}");
    assert!(dbg.contains("PlaybackController"));
    assert!(dbg.contains("observer: true"));
}
