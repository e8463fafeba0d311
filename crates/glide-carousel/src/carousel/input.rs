#![forbid(unsafe_code)]

//! Pointer, click and resize handling.

use glide_core::event::{Disposition, NodeId, Point, PointerEvent, PointerPhase};
use glide_core::gesture::{DragUpdate, EdgeLocks, SwipeOutcome};

use super::{Carousel, Lifecycle, MoveOptions};
use crate::dom::Dom;

impl<D: Dom> Carousel<D> {
    pub(super) fn handle_pointer(&mut self, pointer: PointerEvent) -> Disposition {
        if !pointer.source.matches(self.caps.input_mode()) {
            return Disposition::PassThrough;
        }
        if pointer.phase == PointerPhase::Down {
            self.note_interaction();
        }
        if self.lifecycle != Lifecycle::Bound {
            return Disposition::PassThrough;
        }
        match pointer.phase {
            PointerPhase::Down => self.pointer_down(pointer.pos),
            PointerPhase::Move => self.pointer_move(pointer.pos),
            PointerPhase::Up | PointerPhase::Leave => self.pointer_up(),
        }
    }

    fn pointer_down(&mut self, pos: Point) -> Disposition {
        let locks = if self.looping.is_some() {
            EdgeLocks::NONE
        } else {
            EdgeLocks {
                left: self.index == 1,
                right: self.index == self.length,
            }
        };
        if !self.gesture.begin(pos, locks) {
            return Disposition::PassThrough;
        }
        self.disable_animation();
        // Mouse hosts would otherwise start a native image/text drag.
        if self.caps.touch {
            Disposition::PassThrough
        } else {
            Disposition::PreventDefault
        }
    }

    fn pointer_move(&mut self, pos: Point) -> Disposition {
        let Some(limit) = self
            .dom
            .as_ref()
            .map(|dom| dom.client_width(dom.container()))
        else {
            return Disposition::PassThrough;
        };
        match self.gesture.drag(pos, limit) {
            DragUpdate::Drag { offset } => {
                self.drag_offset = offset;
                self.update();
                Disposition::PreventDefault
            }
            DragUpdate::Ignored | DragUpdate::Pending | DragUpdate::Canceled => {
                Disposition::PassThrough
            }
        }
    }

    fn pointer_up(&mut self) -> Disposition {
        let Some(outcome) = self.gesture.end() else {
            return Disposition::PassThrough;
        };
        self.enable_animation();
        match outcome {
            SwipeOutcome::Advance => self.next(),
            SwipeOutcome::Retreat => self.prev(),
            SwipeOutcome::SnapBack => {
                self.drag_offset = 0.0;
                self.update();
            }
        }
        Disposition::PassThrough
    }

    pub(super) fn handle_click(&mut self, target: Option<NodeId>) -> Disposition {
        self.note_interaction();
        let mut disposition = Disposition::PassThrough;
        if self.lifecycle == Lifecycle::Bound && self.gesture.should_suppress_click() {
            disposition = Disposition::PreventDefault;
        }
        let action = target.and_then(|node| self.dom.as_ref().and_then(|dom| dom.slide_action(node)));
        if let Some(action) = action {
            self.run_action(&action);
            disposition = Disposition::PreventDefault;
        }
        disposition
    }

    /// Execute a `data-slide` control value.
    fn run_action(&mut self, action: &str) {
        if let Ok(index) = action.trim().parse::<i64>() {
            self.move_to(index, MoveOptions::default());
            return;
        }
        match action {
            "next" => self.next(),
            "prev" => self.prev(),
            "refresh" => self.refresh(),
            other => tracing::debug!(message = "carousel.unknown_action", action = other),
        }
    }

    pub(super) fn handle_resize(&mut self, width: f64) -> Disposition {
        if width == self.window_width {
            return Disposition::PassThrough;
        }
        tracing::debug!(message = "carousel.resize", from = self.window_width, to = width);
        self.window_width = width;
        self.disable_animation();
        self.update();
        Disposition::PassThrough
    }
}
