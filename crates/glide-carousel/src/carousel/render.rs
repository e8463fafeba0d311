#![forbid(unsafe_code)]

//! Track positioning, render coalescing and animation toggling.

use glide_core::event::NodeId;
use web_time::Duration;

use super::{Carousel, Task, UpdateCallback};
use crate::dom::Dom;

/// Delay between a render frame and its completion callbacks.
const SETTLE_DELAY: Duration = Duration::from_millis(10);

impl<D: Dom> Carousel<D> {
    /// Schedule a repositioning for the next frame.
    ///
    /// Any number of calls before that frame produce a single render.
    pub fn update(&mut self) {
        if !self.is_live() || self.needs_update {
            return;
        }
        self.needs_update = true;
        self.scheduler.request_frame(Task::Render);
    }

    /// [`update`](Self::update), then run `callback` once, 10 ms after the
    /// frame that renders.
    pub fn update_then(&mut self, callback: impl FnOnce(&mut Self) + 'static) {
        if !self.is_live() {
            return;
        }
        let callback: UpdateCallback<D> = Box::new(callback);
        self.callbacks.push(callback);
        self.update();
    }

    /// Pump an animation frame at host time `now`.
    pub fn animation_frame(&mut self, now: Duration) {
        if !self.is_live() {
            return;
        }
        for task in self.scheduler.take_frame(now) {
            if task == Task::Render {
                self.render_frame();
            }
        }
    }

    /// Pump timers up to host time `now`.
    pub fn advance_time(&mut self, now: Duration) {
        if !self.is_live() {
            return;
        }
        for task in self.scheduler.advance(now) {
            if !self.is_live() {
                break;
            }
            match task {
                Task::Settle(batch) => self.settle(batch),
                Task::AutoplayTick => self.autoplay_tick(),
                Task::Render => {}
            }
        }
    }

    /// A CSS transition ended on `target`.
    ///
    /// Only the track's own transition completes a pending animated move;
    /// transitions bubbling up from slide content are ignored.
    pub fn transition_end(&mut self, target: NodeId) {
        let Some(track) = self.dom.as_ref().map(Dom::track) else {
            return;
        };
        if target != track {
            tracing::trace!(message = "carousel.transition_ignored", target = target.raw());
            return;
        }
        if self.pending_slide.is_some_and(|pending| pending.rendered) {
            self.finish_pending_slide();
        }
    }

    fn render_frame(&mut self) {
        let attempted = self.needs_update;
        let changed = if attempted {
            self.needs_update = false;
            self.reposition()
        } else {
            false
        };

        let batch = std::mem::take(&mut self.callbacks);
        if !batch.is_empty() {
            let id = self.next_batch;
            self.next_batch += 1;
            self.settling.push_back((id, batch));
            self.scheduler.set_timeout(SETTLE_DELAY, Task::Settle(id));
        }

        if attempted && self.pending_slide.is_some_and(|pending| !pending.rendered) {
            if changed && self.driver.can_animate() {
                if let Some(pending) = self.pending_slide.as_mut() {
                    pending.rendered = true;
                }
            } else {
                // Nothing moved or nothing animates: no transition will ever end.
                self.finish_pending_slide();
            }
        }
    }

    fn settle(&mut self, batch: u64) {
        let Some(position) = self.settling.iter().position(|(id, _)| *id == batch) else {
            return;
        };
        let Some((_, callbacks)) = self.settling.remove(position) else {
            return;
        };
        for callback in callbacks {
            if !self.is_live() {
                return;
            }
            callback(self);
        }
    }

    /// Render immediately, cancelling the effect of a pending frame.
    pub(crate) fn render_now(&mut self) {
        self.needs_update = false;
        self.reposition();
    }

    /// Apply the current offset to the track. Returns whether it changed.
    fn reposition(&mut self) -> bool {
        let current = self.slide_node(self.index);
        let start = self.track_nodes.first().copied();
        let Some(dom) = self.dom.as_mut() else {
            return false;
        };
        let (Some(current), Some(start)) = (current, start) else {
            return false;
        };
        if !dom.is_rendered(current) {
            tracing::trace!(message = "carousel.render_skipped", index = self.index);
            return false;
        }

        let anchor = |node: NodeId| dom.offset_left(node) + dom.client_width(node) * self.alignment;
        let x = (-(anchor(current) - anchor(start)) + self.drag_offset).round() as i64;
        let track = dom.track();
        self.driver.set_offset(dom, track, x);

        let changed = self.last_offset != Some(x);
        self.last_offset = Some(x);
        tracing::trace!(message = "carousel.render", index = self.index, x, changed);
        changed
    }

    /// Restore transitions and drop the dragging marker. Idempotent.
    pub(crate) fn enable_animation(&mut self) {
        if self.animating {
            return;
        }
        let Some(dom) = self.dom.as_mut() else {
            return;
        };
        let track = dom.track();
        self.driver.set_transitions_enabled(dom, track, true);
        dom.remove_class(track, &self.classes.dragging);
        self.animating = true;
    }

    /// Make track movement instant and add the dragging marker. Idempotent.
    pub(crate) fn disable_animation(&mut self) {
        if !self.animating {
            return;
        }
        let Some(dom) = self.dom.as_mut() else {
            return;
        };
        let track = dom.track();
        self.driver.set_transitions_enabled(dom, track, false);
        dom.add_class(track, &self.classes.dragging);
        self.animating = false;
    }

    /// Whether track transitions are currently enabled.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }
}

#[cfg(test)]
mod tests {
    use crate::carousel::{Carousel, CarouselState, MoveOptions};
    use crate::config::CarouselConfig;
    use crate::dom::Dom;
    use crate::testing::MockDom;
    use glide_core::caps::{StaticFeatures, probe};
    use std::cell::Cell;
    use std::rc::Rc;
    use web_time::Duration;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn bound(dom: &MockDom) -> Carousel<MockDom> {
        Carousel::new(dom.clone(), probe(&StaticFeatures::modern(false)), CarouselConfig::default())
    }

    #[test]
    fn updates_coalesce_into_one_render() {
        let dom = MockDom::new(3, 100.0);
        let mut carousel = bound(&dom);
        carousel.animation_frame(ms(16));
        dom.clear_style_log();

        for _ in 0..5 {
            carousel.update();
        }
        carousel.animation_frame(ms(32));
        let renders = dom
            .style_log()
            .iter()
            .filter(|w| w.property == "transform")
            .count();
        assert_eq!(renders, 1);
    }

    #[test]
    fn callbacks_run_once_after_settle_delay() {
        let dom = MockDom::new(3, 100.0);
        let mut carousel = bound(&dom);
        let hits = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let hits = Rc::clone(&hits);
            carousel.update_then(move |_| hits.set(hits.get() + 1));
        }
        carousel.animation_frame(ms(16));
        carousel.advance_time(ms(25));
        assert_eq!(hits.get(), 0);
        carousel.advance_time(ms(26));
        assert_eq!(hits.get(), 3);
        carousel.advance_time(ms(500));
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn callback_can_drive_the_carousel() {
        let dom = MockDom::new(3, 100.0);
        let mut carousel = bound(&dom);
        carousel.update_then(|c| c.move_to(3, MoveOptions::instant()));
        carousel.animation_frame(ms(16));
        carousel.advance_time(ms(26));
        assert_eq!(carousel.index(), 3);
        assert_eq!(dom.track_x(), Some(-200));
    }

    #[test]
    fn centered_alignment_uses_slide_midpoints() {
        let dom = MockDom::with_widths(&[100.0, 200.0, 100.0], 300.0);
        dom.add_container_class("m-center");
        let mut carousel = bound(&dom);
        carousel.move_to(2, MoveOptions::instant());
        // anchor(2) = 100 + 100, anchor(1) = 0 + 50
        assert_eq!(dom.track_x(), Some(-150));
    }

    #[test]
    fn hidden_slide_skips_render_and_completes_move() {
        let dom = MockDom::new(3, 100.0);
        let mut carousel = bound(&dom);
        carousel.animation_frame(ms(16));
        dom.set_hidden(dom.container(), true);
        carousel.next();
        carousel.animation_frame(ms(32));
        assert_eq!(dom.track_x(), Some(0));
        assert_eq!(carousel.state(), CarouselState::Idle);
    }

    #[test]
    fn animation_toggle_is_idempotent() {
        let dom = MockDom::new(2, 100.0);
        let mut carousel = bound(&dom);
        dom.clear_style_log();
        carousel.disable_animation();
        carousel.disable_animation();
        assert!(dom.has_class(dom.track(), "m-dragging"));
        carousel.enable_animation();
        carousel.enable_animation();
        assert!(!dom.has_class(dom.track(), "m-dragging"));
        let toggles: Vec<String> = dom
            .style_log()
            .into_iter()
            .filter(|w| w.property == "transitionDuration")
            .map(|w| w.value)
            .collect();
        // bind leaves animation disabled after the initial start
        assert_eq!(toggles, vec!["".to_string()]);
    }
}
