//! Browser timers behind the [`TimerCommand`] interface.
//!
//! Handles are `gloo-timers` values, so dropping one out of its slot clears
//! the browser timer.

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};

use crate::core::{TaskSlot, TimerCommand};

/// Callbacks fired by a widget's timers. `on_resume` runs when the one-shot
/// slot fires, whatever the widget uses it for.
#[derive(Clone)]
pub struct TimerHooks {
    pub on_tick: Rc<dyn Fn()>,
    pub on_resume: Rc<dyn Fn()>,
}

/// The two timer slots an autoplaying widget owns.
///
/// Neither hook may issue a command that clears its own slot: a handle is
/// never dropped from inside its own callback.
#[derive(Default)]
pub struct TimerSlots {
    autoplay: TaskSlot<Interval>,
    resume: TaskSlot<Timeout>,
}

impl TimerSlots {
    pub fn apply(&mut self, commands: impl IntoIterator<Item = TimerCommand>, hooks: &TimerHooks) {
        for command in commands {
            match command {
                TimerCommand::StartAutoplay { period_ms } => {
                    let tick = hooks.on_tick.clone();
                    self.autoplay
                        .start_with(|| Interval::new(period_ms, move || tick()));
                }
                TimerCommand::StopAutoplay => {
                    self.autoplay.cancel();
                }
                TimerCommand::ScheduleResume { delay_ms } => {
                    let resume = hooks.on_resume.clone();
                    self.resume
                        .schedule_with(|| Timeout::new(delay_ms, move || resume()));
                }
                TimerCommand::CancelResume => {
                    self.resume.cancel();
                }
            }
        }
    }
}
