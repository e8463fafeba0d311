#![forbid(unsafe_code)]

//! Runtime: time and deferred work for host-driven widgets.
//!
//! Nothing here blocks or spawns threads. The embedding host owns the real
//! event loop (a browser's `requestAnimationFrame` and timers, or a test
//! that advances time by hand) and pumps it into a [`Scheduler`], which
//! hands back plain message values for the widget to act on.
//!
//! - [`clock`]: the host-fed monotonic time source.
//! - [`scheduler`]: frame tasks, one-shot timers and repeating intervals.

pub mod clock;
pub mod scheduler;

pub use clock::{Clock, DeterministicClock};
pub use scheduler::{Scheduler, TimerId};
