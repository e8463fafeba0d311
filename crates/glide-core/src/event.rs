#![forbid(unsafe_code)]

//! Canonical host events.
//!
//! The host translates its native input (DOM touch/mouse events, window
//! resizes, control clicks) into these types and pushes them into the
//! carousel. All coordinates are CSS pixels in the host's client space.
//!
//! # Design Notes
//!
//! - Element identity is an opaque [`NodeId`]; the host maps it to whatever
//!   it really holds (a DOM node, a test fixture index).
//! - Pointer events carry their [`PointerSource`] so a carousel bound to
//!   touch input can ignore synthesized mouse events and vice versa.
//! - Handlers answer with a [`Disposition`] instead of calling
//!   `preventDefault` themselves.

use crate::caps::InputMode;

/// Opaque handle to a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Raw handle value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal client coordinate.
    pub x: f64,
    /// Vertical client coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where a pointer event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    /// First touch point of a touch event.
    Touch,
    /// Mouse cursor.
    Mouse,
}

impl PointerSource {
    /// Whether this source is the one a host with `mode` listens to.
    #[inline]
    #[must_use]
    pub const fn matches(self, mode: InputMode) -> bool {
        matches!(
            (self, mode),
            (Self::Touch, InputMode::Touch) | (Self::Mouse, InputMode::Mouse)
        )
    }
}

/// Pointer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Finger or button went down on the track.
    Down,
    /// Pointer moved.
    Move,
    /// Finger lifted or button released.
    Up,
    /// Pointer left the track (`mouseout`); treated as release.
    Leave,
}

/// A single pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Input family.
    pub source: PointerSource,
    /// Lifecycle phase.
    pub phase: PointerPhase,
    /// Client position.
    pub pos: Point,
}

impl PointerEvent {
    /// Create a pointer event.
    #[must_use]
    pub const fn new(source: PointerSource, phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            source,
            phase,
            pos: Point::new(x, y),
        }
    }

    /// Mouse-down at `(x, y)`.
    #[must_use]
    pub const fn mouse_down(x: f64, y: f64) -> Self {
        Self::new(PointerSource::Mouse, PointerPhase::Down, x, y)
    }

    /// Mouse-move to `(x, y)`.
    #[must_use]
    pub const fn mouse_move(x: f64, y: f64) -> Self {
        Self::new(PointerSource::Mouse, PointerPhase::Move, x, y)
    }

    /// Mouse-up at `(x, y)`.
    #[must_use]
    pub const fn mouse_up(x: f64, y: f64) -> Self {
        Self::new(PointerSource::Mouse, PointerPhase::Up, x, y)
    }

    /// Touch-start at `(x, y)`.
    #[must_use]
    pub const fn touch_start(x: f64, y: f64) -> Self {
        Self::new(PointerSource::Touch, PointerPhase::Down, x, y)
    }

    /// Touch-move to `(x, y)`.
    #[must_use]
    pub const fn touch_move(x: f64, y: f64) -> Self {
        Self::new(PointerSource::Touch, PointerPhase::Move, x, y)
    }

    /// Touch-end at `(x, y)`.
    #[must_use]
    pub const fn touch_end(x: f64, y: f64) -> Self {
        Self::new(PointerSource::Touch, PointerPhase::Up, x, y)
    }
}

/// Canonical host event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer activity on the track.
    Pointer(PointerEvent),

    /// A click inside the carousel.
    ///
    /// `target` is the clicked element when the host knows it; controls
    /// carrying a `data-slide` action are resolved through it.
    Click {
        /// Clicked element.
        target: Option<NodeId>,
    },

    /// The pointer entered the carousel (`mouseenter`).
    Hover,

    /// The window was resized or reoriented.
    Resize {
        /// New window width in CSS pixels.
        width: f64,
    },
}

/// What the host should do with the native event after the carousel saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disposition {
    /// Let the native default action happen.
    #[default]
    PassThrough,
    /// Call `preventDefault` on the native event.
    PreventDefault,
}

impl Disposition {
    /// Whether the default action should be suppressed.
    #[inline]
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::PreventDefault)
    }
}
