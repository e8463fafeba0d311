#![forbid(unsafe_code)]

//! Timer-driven auto-advance.
//!
//! Autoplay arms a repeating [`Scheduler`](glide_runtime::Scheduler)
//! interval at bind time. Without `cancel_on_interaction` the carousel is
//! forced into looping mode so ticks never stop at the last slide. With it,
//! arrow hiding is held back until the first touch, click or hover stops the
//! timer for good.

use glide_runtime::scheduler::TimerId;

use crate::carousel::{Carousel, MoveOptions, Task};
use crate::dom::Dom;

/// Armed autoplay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AutoplayState {
    timer: TimerId,
    cancel_on_interaction: bool,
}

impl<D: Dom> Carousel<D> {
    pub(crate) fn arm_autoplay(&mut self) {
        let Some(autoplay) = self.config.autoplay else {
            return;
        };
        let Some(period) = autoplay.interval_duration() else {
            return;
        };
        let timer = self.scheduler.set_interval(period, Task::AutoplayTick);
        self.autoplay = Some(AutoplayState {
            timer,
            cancel_on_interaction: autoplay.cancel_on_interaction,
        });
        tracing::debug!(
            message = "autoplay.arm",
            period_ms = period.as_millis() as u64,
            cancel_on_interaction = autoplay.cancel_on_interaction
        );
    }

    pub(crate) fn autoplay_tick(&mut self) {
        if self.autoplay.is_none() || self.length == 0 {
            return;
        }
        let target = if self.looping.is_some() {
            self.index + 1
        } else {
            self.index % self.length + 1
        };
        tracing::trace!(message = "autoplay.tick", from = self.index, to = target);
        self.move_to(target as i64, MoveOptions::default());
    }

    /// A touch, click or hover happened.
    pub(crate) fn note_interaction(&mut self) {
        if self
            .autoplay
            .is_some_and(|autoplay| autoplay.cancel_on_interaction)
        {
            self.stop_autoplay();
        }
    }

    /// Stop autoplay and restore the configured arrow hiding.
    pub fn stop_autoplay(&mut self) {
        let Some(autoplay) = self.autoplay.take() else {
            return;
        };
        self.scheduler.cancel(autoplay.timer);
        self.hide_arrows = self.config.auto_hide_arrows && self.looping.is_none();
        self.apply_arrows(self.index);
        tracing::debug!(message = "autoplay.cancel", index = self.index);
    }

    /// Whether the autoplay timer is running.
    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }
}
