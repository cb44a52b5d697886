//! Timer bookkeeping for autoplaying widgets.
//!
//! Widgets never own raw timer ids. Their state machines emit
//! [`TimerCommand`]s, and the DOM layer applies them to [`TaskSlot`]s that
//! hold the live handles. A slot holds at most one handle: scheduling into
//! an occupied slot drops (and so cancels) the previous handle, which gives
//! debounced restarts for free.

/// Timer change requested by a widget state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    /// Start the repeating autoplay timer with the given period.
    StartAutoplay { period_ms: u32 },
    /// Stop the repeating autoplay timer.
    StopAutoplay,
    /// (Re)schedule the one-shot resume timer, replacing any pending one.
    ScheduleResume { delay_ms: u32 },
    /// Drop the pending one-shot resume timer, if any.
    CancelResume,
}

/// Single-slot register for a timer handle.
///
/// `H` is the handle type whose `Drop` cancels the underlying timer
/// (`gloo_timers::callback::Interval` / `Timeout` in the browser).
///
/// A slot must not be cleared from inside the callback of the handle it
/// holds; fired one-shot handles are simply left in place until the next
/// `schedule_with` or `cancel`.
#[derive(Debug)]
pub struct TaskSlot<H> {
    handle: Option<H>,
}

impl<H> TaskSlot<H> {
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Whether a handle is currently held.
    #[cfg(test)]
    pub fn is_set(&self) -> bool {
        self.handle.is_some()
    }

    /// Installs the handle built by `start` unless one is already held.
    ///
    /// Returns `true` when a new handle was installed.
    pub fn start_with(&mut self, start: impl FnOnce() -> H) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(start());
        true
    }

    /// Replaces any held handle with the one built by `schedule`.
    ///
    /// The old handle is dropped before the new one is built.
    pub fn schedule_with(&mut self, schedule: impl FnOnce() -> H) {
        self.handle = None;
        self.handle = Some(schedule());
    }

    /// Drops the held handle. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        self.handle.take().is_some()
    }
}

impl<H> Default for TaskSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    /// Handle that counts how many times it was dropped (cancelled).
    pub(crate) struct CountingHandle(pub Rc<Cell<u32>>);

    impl Drop for CountingHandle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    /// Timer event delivered by [`SimClock`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub(crate) enum Fired {
        Autoplay,
        Resume,
    }

    /// Millisecond-resolution stand-in for browser timers.
    ///
    /// Unlike [`TaskSlot`], every `StartAutoplay` creates a new interval, the
    /// way a raw `setInterval` would, so duplicate starts show up as extra ticks.
    #[derive(Default)]
    pub(crate) struct SimClock {
        now: u64,
        intervals: Vec<(u64, u64)>,
        resume_at: Option<u64>,
    }

    impl SimClock {
        pub(crate) fn apply(&mut self, commands: impl IntoIterator<Item = TimerCommand>) {
            for command in commands {
                match command {
                    TimerCommand::StartAutoplay { period_ms } => {
                        let period = u64::from(period_ms);
                        self.intervals.push((period, self.now + period));
                    }
                    TimerCommand::StopAutoplay => self.intervals.clear(),
                    TimerCommand::ScheduleResume { delay_ms } => {
                        self.resume_at = Some(self.now + u64::from(delay_ms));
                    }
                    TimerCommand::CancelResume => self.resume_at = None,
                }
            }
        }

        pub(crate) fn interval_count(&self) -> usize {
            self.intervals.len()
        }

        /// Advances time, feeding each fired timer to `on_fire` and applying
        /// the commands it returns.
        pub(crate) fn run_for(
            &mut self,
            ms: u64,
            mut on_fire: impl FnMut(Fired) -> Vec<TimerCommand>,
        ) {
            let end = self.now + ms;
            while self.now < end {
                self.now += 1;
                let mut fired = Vec::new();
                for (period, next) in &mut self.intervals {
                    if *next == self.now {
                        *next += *period;
                        fired.push(Fired::Autoplay);
                    }
                }
                if self.resume_at == Some(self.now) {
                    self.resume_at = None;
                    fired.push(Fired::Resume);
                }
                for event in fired {
                    let commands = on_fire(event);
                    self.apply(commands);
                }
            }
        }
    }

    #[test]
    fn test_start_is_idempotent() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = TaskSlot::new();
        let mut built = 0;

        assert!(slot.start_with(|| {
            built += 1;
            CountingHandle(drops.clone())
        }));
        assert!(!slot.start_with(|| {
            built += 1;
            CountingHandle(drops.clone())
        }));

        assert_eq!(built, 1);
        assert_eq!(drops.get(), 0);
        assert!(slot.is_set());
    }

    #[test]
    fn test_schedule_replaces_pending() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = TaskSlot::new();

        slot.schedule_with(|| CountingHandle(drops.clone()));
        slot.schedule_with(|| CountingHandle(drops.clone()));
        slot.schedule_with(|| CountingHandle(drops.clone()));

        assert_eq!(drops.get(), 2);
        assert!(slot.is_set());
    }

    #[test]
    fn test_cancel_empty_slot() {
        let mut slot: TaskSlot<CountingHandle> = TaskSlot::default();
        assert!(!slot.cancel());
        assert!(!slot.is_set());
    }

    #[test]
    fn test_cancel_drops_handle() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = TaskSlot::new();
        slot.schedule_with(|| CountingHandle(drops.clone()));

        assert!(slot.cancel());
        assert_eq!(drops.get(), 1);
        assert!(!slot.cancel());
        assert_eq!(drops.get(), 1);
    }
}
