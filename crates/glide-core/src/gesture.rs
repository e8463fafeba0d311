#![forbid(unsafe_code)]

//! Swipe recognition: turns pointer sequences into carousel decisions.
//!
//! [`SwipeRecognizer`] consumes one pointer-down → move* → up cycle at a time
//! and answers three questions: is this a horizontal drag or a vertical
//! scroll, where should the track be drawn while dragging, and does the
//! release advance, retreat or snap back.
//!
//! # State Machine
//!
//! ```text
//! Idle ──down──▶ Dragging ──|dx|>|dy|, |dx|>drag_radius──▶ ThresholdMet
//!                   │
//!                   └──────|dy|>|dx|, |dy|>drag_radius──▶ Canceled
//! any ──up/leave──▶ Idle
//! ```
//!
//! # Invariants
//!
//! 1. Only one gesture is tracked; a pointer-down while dragging is ignored.
//! 2. Once `Canceled`, no later move in the same gesture changes anything and
//!    the release always snaps back.
//! 3. Once `ThresholdMet`, every move yields a drag offset.
//! 4. Edge resistance never increases the magnitude of the drag.
//!
//! # Sign convention
//!
//! `dx = start.x - current.x`: positive when the finger moves left, which
//! pulls the next slide into view in left-to-right mode. The drag offset
//! applied to the track is `-dx`.

use crate::event::Point;

/// Thresholds for swipe recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Movement (px) before a gesture is classified as drag or scroll (default: 10).
    pub drag_radius: f64,
    /// Drag distance (px) at release needed to change slides (default: 20).
    pub move_radius: f64,
    /// Reverse the drag direction semantics.
    pub right_to_left: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_radius: 10.0,
            move_radius: 20.0,
            right_to_left: false,
        }
    }
}

/// Boundary locks captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeLocks {
    /// The carousel sits on its first slide.
    pub left: bool,
    /// The carousel sits on its last slide.
    pub right: bool,
}

impl EdgeLocks {
    /// No resistance on either side.
    pub const NONE: Self = Self {
        left: false,
        right: false,
    };
}

/// Observable phase of the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer is down.
    Idle,
    /// Pointer is down, intent not yet known.
    Dragging,
    /// Horizontal intent confirmed.
    ThresholdMet,
    /// Vertical intent detected; scrolling wins.
    Canceled,
}

/// State of one pointer-down … up cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    /// Pointer-down position.
    pub start: Point,
    /// Horizontal delta, damped once resistance applies.
    pub dx: f64,
    /// Vertical delta.
    pub dy: f64,
    /// Horizontal intent confirmed.
    pub threshold_met: bool,
    /// Vertical intent detected.
    pub canceled: bool,
    /// Boundary locks snapshot.
    pub locks: EdgeLocks,
}

impl GestureState {
    fn new(start: Point, locks: EdgeLocks) -> Self {
        Self {
            start,
            dx: 0.0,
            dy: 0.0,
            threshold_met: false,
            canceled: false,
            locks,
        }
    }

    /// Current phase derived from the flags.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.canceled {
            GesturePhase::Canceled
        } else if self.threshold_met {
            GesturePhase::ThresholdMet
        } else {
            GesturePhase::Dragging
        }
    }
}

/// Result of feeding a pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// No gesture in progress, or it was already canceled.
    Ignored,
    /// Intent still unknown.
    Pending,
    /// Vertical intent detected on this move.
    Canceled,
    /// Horizontal drag: draw the track shifted by `offset` px.
    Drag {
        /// Offset to add to the resting position.
        offset: f64,
    },
}

/// Decision taken at pointer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Go to the next slide.
    Advance,
    /// Go to the previous slide.
    Retreat,
    /// Return to the current slide's resting position.
    SnapBack,
}

/// Rubber-band damping for drags past a boundary slide.
///
/// `limit` is the carousel container width. At the left bound, pulling right
/// (`dx < 0`) is damped; at the right bound, pulling left (`dx > 0`).
#[must_use]
pub fn edge_resistance(dx: f64, limit: f64, locks: EdgeLocks) -> f64 {
    if locks.left && dx < 0.0 {
        dx * -limit / (dx - limit)
    } else if locks.right && dx > 0.0 {
        dx * limit / (dx + limit)
    } else {
        dx
    }
}

/// Stateful swipe recognizer for a single track.
#[derive(Debug, Clone)]
pub struct SwipeRecognizer {
    config: GestureConfig,
    current: Option<GestureState>,
    /// Whether the most recent gesture confirmed horizontal intent.
    last_threshold_met: bool,
}

impl SwipeRecognizer {
    /// Create a recognizer with the given thresholds.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            current: None,
            last_threshold_met: false,
        }
    }

    /// Start a gesture. Returns `false` if one is already in progress.
    pub fn begin(&mut self, pos: Point, locks: EdgeLocks) -> bool {
        if self.current.is_some() {
            return false;
        }
        self.current = Some(GestureState::new(pos, locks));
        self.last_threshold_met = false;
        true
    }

    /// Feed a pointer move. `limit` is the current container width.
    pub fn drag(&mut self, pos: Point, limit: f64) -> DragUpdate {
        let drag_radius = self.config.drag_radius;
        let Some(state) = self.current.as_mut() else {
            return DragUpdate::Ignored;
        };
        if state.canceled {
            return DragUpdate::Ignored;
        }

        let dx = state.start.x - pos.x;
        let dy = state.start.y - pos.y;
        state.dx = dx;
        state.dy = dy;

        if state.threshold_met || (dx.abs() > dy.abs() && dx.abs() > drag_radius) {
            state.threshold_met = true;
            self.last_threshold_met = true;
            state.dx = edge_resistance(dx, limit, state.locks);
            DragUpdate::Drag { offset: -state.dx }
        } else if dy.abs() > dx.abs() && dy.abs() > drag_radius {
            state.canceled = true;
            tracing::trace!(message = "gesture.cancel", dx, dy);
            DragUpdate::Canceled
        } else {
            DragUpdate::Pending
        }
    }

    /// Finish the gesture. Returns `None` if no gesture was in progress.
    pub fn end(&mut self) -> Option<SwipeOutcome> {
        let state = self.current.take()?;
        let outcome = if !state.canceled && state.dx.abs() > self.config.move_radius {
            let forward = if self.config.right_to_left {
                state.dx < 0.0
            } else {
                state.dx > 0.0
            };
            if forward {
                SwipeOutcome::Advance
            } else {
                SwipeOutcome::Retreat
            }
        } else {
            SwipeOutcome::SnapBack
        };
        tracing::debug!(message = "gesture.resolve", dx = state.dx, outcome = ?outcome);
        Some(outcome)
    }

    /// Whether a click following the last gesture should be swallowed.
    #[inline]
    #[must_use]
    pub fn should_suppress_click(&self) -> bool {
        self.last_threshold_met
    }

    /// Whether a pointer is currently down.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.current.is_some()
    }

    /// Phase of the current gesture.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.current
            .as_ref()
            .map_or(GesturePhase::Idle, GestureState::phase)
    }

    /// The in-progress gesture, if any.
    #[inline]
    #[must_use]
    pub fn state(&self) -> Option<&GestureState> {
        self.current.as_ref()
    }

    /// Drop any in-progress gesture without resolving it.
    pub fn reset(&mut self) {
        self.current = None;
        self.last_threshold_met = false;
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
