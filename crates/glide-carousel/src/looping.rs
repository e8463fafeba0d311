#![forbid(unsafe_code)]

//! Infinite looping through cloned slides.
//!
//! The first and last [`CLONES_PER_END`] slides are cloned onto the opposite
//! ends of the track:
//!
//! ```text
//! [c(n-1) c(n)] 1 2 ... n [c(1) c(2)]
//!        ▲ index 0               ▲ index n+1
//! ```
//!
//! Moves may land on index `0` or `n + 1`, which show clones of the last and
//! first slide. When such a move completes, the carousel silently jumps to
//! the real slide (`n` or `1`) with transitions disabled, so the wrap is
//! invisible and no extra slide events fire.

use glide_core::event::NodeId;

use crate::carousel::Carousel;
use crate::dom::Dom;

/// Slides cloned from each end.
pub const CLONES_PER_END: usize = 2;

/// Clones currently inserted into the track.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LoopState {
    clones: Vec<NodeId>,
    prepended: usize,
}

impl LoopState {
    /// Number of clones in front of the first real slide.
    pub(crate) fn prepended(&self) -> usize {
        self.prepended
    }
}

impl<D: Dom> Carousel<D> {
    /// Clone the end slides and widen the bounds to `[0, length + 1]`.
    pub(crate) fn install_loop(&mut self) {
        let count = CLONES_PER_END.min(self.items.len());
        let Some(dom) = self.dom.as_mut() else {
            return;
        };

        let mut front = Vec::with_capacity(count);
        for &node in self.items[self.items.len() - count..].iter().rev() {
            let clone = dom.clone_node(node);
            dom.remove_class(clone, &self.classes.active);
            dom.prepend_to_track(clone);
            front.insert(0, clone);
        }
        let mut back = Vec::with_capacity(count);
        for &node in &self.items[..count] {
            let clone = dom.clone_node(node);
            dom.remove_class(clone, &self.classes.active);
            dom.append_to_track(clone);
            back.push(clone);
        }

        self.track_nodes = front
            .iter()
            .chain(&self.items)
            .chain(&back)
            .copied()
            .collect();
        self.lock_left = 0;
        self.lock_right = self.length + 1;
        self.looping = Some(LoopState {
            prepended: front.len(),
            clones: front.into_iter().chain(back).collect(),
        });
        tracing::debug!(message = "loop.install", clones = count * 2, length = self.length);
    }

    /// Take every clone back out of the document.
    pub(crate) fn remove_clones(&mut self) {
        let Some(state) = self.looping.take() else {
            return;
        };
        if let Some(dom) = self.dom.as_mut() {
            for clone in state.clones {
                dom.remove_node(clone);
            }
        }
        self.track_nodes = self.items.clone();
        self.lock_left = 1;
        self.lock_right = self.length;
    }

    /// Jump from a clone position to the real slide it shows.
    pub(crate) fn correct_wrap(&mut self) {
        let from = self.index;
        let to = if from < 1 {
            self.length
        } else if from > self.length {
            1
        } else {
            return;
        };
        if self.length == 0 {
            return;
        }
        tracing::debug!(message = "carousel.wrap", from, to);
        self.index = to;
        self.drag_offset = 0.0;
        self.apply_markers(from, to);
        self.disable_animation();
        self.render_now();
        self.enable_animation();
    }
}

#[cfg(test)]
mod tests {
    use crate::carousel::{Carousel, MoveOptions};
    use crate::config::CarouselConfig;
    use crate::dom::Dom;
    use crate::events::SlideEvent;
    use crate::testing::MockDom;
    use glide_core::caps::{StaticFeatures, probe};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;
    use web_time::Duration;

    fn looping(dom: &MockDom) -> (Carousel<MockDom>, Rc<RefCell<Vec<SlideEvent>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let carousel = Carousel::builder(dom.clone())
            .capabilities(probe(&StaticFeatures::modern(false)))
            .config(CarouselConfig::default().with_infinite(true))
            .on_event(move |e| sink.borrow_mut().push(*e))
            .build();
        log.borrow_mut().clear();
        (carousel, log)
    }

    #[test]
    fn clones_wrap_both_ends() {
        let dom = MockDom::new(4, 100.0);
        let originals = dom.slides();
        let (carousel, _) = looping(&dom);

        let track = dom.slides();
        assert_eq!(track.len(), 8);
        let sources: Vec<_> = track.iter().map(|n| dom.cloned_from(*n)).collect();
        assert_eq!(
            sources,
            vec![
                Some(originals[2]),
                Some(originals[3]),
                None,
                None,
                None,
                None,
                Some(originals[0]),
                Some(originals[1]),
            ]
        );
        assert_eq!(carousel.bounds(), (0, 5));
        assert_eq!(carousel.length(), 4);
        assert!(carousel.is_looping());
    }

    #[test]
    fn single_slide_gets_one_clone_per_end() {
        let dom = MockDom::new(1, 100.0);
        let (carousel, _) = looping(&dom);
        assert_eq!(dom.slides().len(), 3);
        assert_eq!(carousel.bounds(), (0, 2));
    }

    #[test]
    fn first_slide_renders_after_prepended_clones() {
        let dom = MockDom::new(3, 100.0);
        let (mut carousel, _) = looping(&dom);
        carousel.animation_frame(Duration::from_millis(16));
        assert_eq!(dom.track_x(), Some(-200));
    }

    #[test]
    fn next_past_end_wraps_to_first() {
        let dom = MockDom::new(3, 100.0);
        let (mut carousel, log) = looping(&dom);
        carousel.move_to(3, MoveOptions::instant());
        log.borrow_mut().clear();
        dom.clear_style_log();

        carousel.next();
        carousel.animation_frame(Duration::from_millis(16));
        // index 4 is the clone of slide 1 at track position 5
        assert_eq!(dom.track_x(), Some(-500));
        carousel.transition_end(dom.track());

        assert_eq!(carousel.index(), 1);
        assert_eq!(dom.track_x(), Some(-200));
        assert_eq!(
            *log.borrow(),
            vec![
                SlideEvent::BeforeSlide { from: 3, to: 4 },
                SlideEvent::AfterSlide { from: 3, to: 4 },
            ]
        );

        // the jump back happens with transitions off, then they come back on
        let tail: Vec<String> = dom
            .style_log()
            .into_iter()
            .skip_while(|w| w.value != "0s")
            .map(|w| w.value)
            .collect();
        assert_eq!(
            tail,
            vec!["0s".to_string(), "translate3d(-200px,0,0)".to_string(), String::new()]
        );
    }

    #[test]
    fn prev_before_start_wraps_to_last() {
        let dom = MockDom::new(3, 100.0);
        let (mut carousel, log) = looping(&dom);
        carousel.move_to(-10, MoveOptions::instant());
        assert_eq!(carousel.index(), 3);
        assert_eq!(dom.track_x(), Some(-400));
        assert_eq!(
            *log.borrow(),
            vec![
                SlideEvent::BeforeSlide { from: 1, to: 0 },
                SlideEvent::AfterSlide { from: 1, to: 0 },
            ]
        );
        let real_last = dom.slides()[4];
        assert!(dom.has_class(real_last, "m-active"));
        let clone_of_last = dom.slides()[1];
        assert!(!dom.has_class(clone_of_last, "m-active"));
    }

    #[test]
    fn looping_has_no_edge_resistance() {
        use glide_core::event::{Event, PointerEvent};
        let dom = MockDom::new(3, 300.0);
        let (mut carousel, _) = looping(&dom);
        carousel.handle_event(&Event::Pointer(PointerEvent::mouse_down(0.0, 0.0)));
        carousel.handle_event(&Event::Pointer(PointerEvent::mouse_move(300.0, 0.0)));
        assert_eq!(carousel.drag_offset(), 300.0);
    }

    #[test]
    fn refresh_reclones() {
        let dom = MockDom::new(3, 100.0);
        let (mut carousel, _) = looping(&dom);
        let first_clones: Vec<_> = dom
            .slides()
            .into_iter()
            .filter(|n| dom.cloned_from(*n).is_some())
            .collect();
        dom.push_slide(100.0);
        carousel.refresh();

        assert_eq!(carousel.length(), 4);
        assert_eq!(carousel.bounds(), (0, 5));
        assert_eq!(dom.slides().len(), 8);
        for clone in first_clones {
            assert!(!dom.is_attached(clone));
        }
    }
}
