//! Slide carousel state machine.
//!
//! Shared by the hero carousel and the neighborhood slideshow. The machine
//! owns the slide index and the *logical* state of its two timers (the
//! repeating autoplay timer and the one-shot resume timer); it never touches
//! real timers itself but returns [`TimerCommand`]s for the caller to apply.

use crate::config;
use crate::core::index::{step, wrap_index};
use crate::core::scheduler::TimerCommand;

/// What happens to autoplay after a manual navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManualPolicy {
    /// Stop autoplay and restart it after a quiet period. Each new manual
    /// action reschedules the restart.
    RestartAfter { quiet_ms: u32 },
    /// Restart the autoplay period right away.
    Reset,
}

/// Timing configuration for a carousel variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    pub autoplay_ms: u32,
    pub manual: ManualPolicy,
}

impl CarouselConfig {
    /// Hero carousel: 5 s autoplay, 10 s debounced restart.
    pub const fn hero() -> Self {
        Self {
            autoplay_ms: config::hero::AUTOPLAY_MS,
            manual: ManualPolicy::RestartAfter {
                quiet_ms: config::hero::RESTART_MS,
            },
        }
    }

    /// Neighborhood slideshow: 4 s autoplay, reset on dot click.
    pub const fn neighborhood() -> Self {
        Self {
            autoplay_ms: config::neighborhood::AUTOPLAY_MS,
            manual: ManualPolicy::Reset,
        }
    }
}

/// Carousel over a fixed, non-empty sequence of slides.
#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
    config: CarouselConfig,
    autoplay_running: bool,
    resume_pending: bool,
}

impl Carousel {
    /// Creates a carousel at slide 0. Returns `None` for an empty sequence.
    pub fn new(len: usize, config: CarouselConfig) -> Option<Self> {
        (len > 0).then_some(Self {
            len,
            index: 0,
            config,
            autoplay_running: false,
            resume_pending: false,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay_running
    }

    #[cfg(test)]
    pub fn is_resume_pending(&self) -> bool {
        self.resume_pending
    }

    /// Moves to slide `index`, wrapping negative and out-of-range values.
    pub fn go_to(&mut self, index: i64) -> usize {
        // len > 0 is guaranteed by the constructor
        self.index = wrap_index(index, self.len).unwrap_or(0);
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.index = step(self.index, 1, self.len).unwrap_or(0);
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = step(self.index, -1, self.len).unwrap_or(0);
        self.index
    }

    // ------------------------------------------------------------------------
    // Autoplay
    // ------------------------------------------------------------------------

    /// Starts autoplay. A no-op while it is already running.
    pub fn start_autoplay(&mut self) -> Option<TimerCommand> {
        if self.autoplay_running {
            return None;
        }
        self.autoplay_running = true;
        Some(TimerCommand::StartAutoplay {
            period_ms: self.config.autoplay_ms,
        })
    }

    /// Stops autoplay and drops any pending resume.
    pub fn stop_autoplay(&mut self) -> Vec<TimerCommand> {
        let mut commands = Vec::with_capacity(2);
        if self.resume_pending {
            self.resume_pending = false;
            commands.push(TimerCommand::CancelResume);
        }
        if self.autoplay_running {
            self.autoplay_running = false;
            commands.push(TimerCommand::StopAutoplay);
        }
        commands
    }

    /// Autoplay timer fired. Advances one slide, unless autoplay was stopped
    /// while the tick was already queued.
    pub fn tick(&mut self) -> Option<usize> {
        self.autoplay_running.then(|| self.next())
    }

    /// Pauses autoplay (hover enter, touch start).
    pub fn pause(&mut self) -> Vec<TimerCommand> {
        self.stop_autoplay()
    }

    /// Resumes autoplay immediately (hover leave).
    pub fn resume(&mut self) -> Option<TimerCommand> {
        self.start_autoplay()
    }

    /// Schedules autoplay to resume after `delay_ms`, replacing any pending
    /// resume.
    pub fn resume_after(&mut self, delay_ms: u32) -> TimerCommand {
        self.resume_pending = true;
        TimerCommand::ScheduleResume { delay_ms }
    }

    /// The one-shot resume timer fired.
    pub fn resume_fired(&mut self) -> Option<TimerCommand> {
        if !self.resume_pending {
            return None;
        }
        self.resume_pending = false;
        self.start_autoplay()
    }

    // ------------------------------------------------------------------------
    // Manual navigation
    // ------------------------------------------------------------------------

    /// Manual jump to `index` (dot click).
    pub fn manual_go_to(&mut self, index: i64) -> (usize, Vec<TimerCommand>) {
        let mut commands = self.before_manual();
        let index = self.go_to(index);
        commands.extend(self.after_manual());
        (index, commands)
    }

    /// Manual step by `steps` slides (arrow, swipe, tap).
    pub fn manual_step(&mut self, steps: i64) -> (usize, Vec<TimerCommand>) {
        let target = self.index as i64 + steps;
        self.manual_go_to(target)
    }

    /// Timer changes to apply before a manual move.
    pub fn before_manual(&mut self) -> Vec<TimerCommand> {
        match self.config.manual {
            ManualPolicy::RestartAfter { .. } => self.stop_autoplay(),
            ManualPolicy::Reset => Vec::new(),
        }
    }

    /// Timer changes to apply after a manual move.
    pub fn after_manual(&mut self) -> Vec<TimerCommand> {
        match self.config.manual {
            ManualPolicy::RestartAfter { quiet_ms } => vec![self.resume_after(quiet_ms)],
            ManualPolicy::Reset => {
                let mut commands = self.stop_autoplay();
                commands.extend(self.start_autoplay());
                commands
            }
        }
    }
}
