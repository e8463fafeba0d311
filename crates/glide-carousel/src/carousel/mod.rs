#![forbid(unsafe_code)]

//! The carousel session: one bound container and its slide state machine.
//!
//! A [`Carousel`] owns its [`Dom`] handle, a [`SwipeRecognizer`], a
//! [`TransformDriver`] and a [`Scheduler`] of deferred work. The host feeds
//! it four things and nothing else:
//!
//! | Host call | When |
//! |-----------|------|
//! | [`handle_event`](Carousel::handle_event) | pointer, click, hover and resize events |
//! | [`animation_frame`](Carousel::animation_frame) | every animation frame |
//! | [`advance_time`](Carousel::advance_time) | whenever time moves (timers) |
//! | [`transition_end`](Carousel::transition_end) | a CSS transition finished on some node |
//!
//! # Lifecycle
//!
//! ```text
//! Initializing ──build──▶ Idle ◀──▶ Dragging
//!                          ▲  │
//!                          │  ▼
//!                        Animating          any ──destroy──▶ Destroyed
//! ```
//!
//! Every public operation and every deferred task re-checks liveness and
//! is a silent no-op after [`destroy`](Carousel::destroy).
//!
//! # Move protocol
//!
//! Each committed move emits exactly one [`SlideEvent::BeforeSlide`] and one
//! [`SlideEvent::AfterSlide`]. Animated moves complete on the track's
//! transition end; instant moves complete synchronously. A move issued while
//! an earlier one still waits for its transition completes the earlier one
//! first.

mod input;
mod render;

use std::collections::VecDeque;

use glide_core::caps::Capabilities;
use glide_core::event::{Disposition, Event, NodeId};
use glide_core::gesture::SwipeRecognizer;
use glide_core::transform::TransformDriver;
use glide_runtime::scheduler::Scheduler;

use crate::autoplay::AutoplayState;
use crate::config::{CarouselConfig, ClassRole};
use crate::dom::Dom;
use crate::events::{ListenerId, Listeners, SlideEvent};
use crate::looping::LoopState;

/// Deferred work delivered back by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Task {
    /// Reposition the track if an update is pending.
    Render,
    /// Run the completion callbacks of one rendered batch.
    Settle(u64),
    /// Advance one slide.
    AutoplayTick,
}

/// Completion callback queued by [`Carousel::update_then`].
pub type UpdateCallback<D> = Box<dyn FnOnce(&mut Carousel<D>)>;

/// Per-move options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOptions {
    /// Override the configured `animate` flag for this move.
    pub animate: Option<bool>,
}

impl MoveOptions {
    /// Force an animated move.
    #[must_use]
    pub const fn animated() -> Self {
        Self {
            animate: Some(true),
        }
    }

    /// Force an instant move.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            animate: Some(false),
        }
    }
}

/// Observable phase of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselState {
    /// Construction has not finished.
    Initializing,
    /// Bound and at rest.
    Idle,
    /// A pointer is down on the track.
    Dragging,
    /// An animated move waits for its transition to end.
    Animating,
    /// Torn down; every operation is a no-op.
    Destroyed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Initializing,
    Bound,
    Unbound,
    Destroyed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingSlide {
    from: usize,
    to: usize,
    rendered: bool,
}

/// Resolved class names used at runtime.
#[derive(Debug, Clone)]
pub(crate) struct Classes {
    pub(crate) item: String,
    pub(crate) touch: String,
    pub(crate) dragging: String,
    pub(crate) active: String,
    pub(crate) inactive: String,
}

impl Classes {
    fn from_config(config: &CarouselConfig) -> Self {
        Self {
            item: config.class(ClassRole::Item),
            touch: config.class(ClassRole::Touch),
            dragging: config.class(ClassRole::Dragging),
            active: config.class(ClassRole::Active),
            inactive: config.class(ClassRole::Inactive),
        }
    }
}

/// Builder for [`Carousel`].
///
/// Listeners registered here observe the initial
/// `BeforeSlide(1, 1)`/`AfterSlide(1, 1)` pair emitted while binding.
pub struct CarouselBuilder<D: Dom> {
    dom: D,
    caps: Capabilities,
    config: CarouselConfig,
    listeners: Listeners,
}

impl<D: Dom> CarouselBuilder<D> {
    /// Use probed platform capabilities (default: none, mouse input).
    #[must_use]
    pub fn capabilities(mut self, caps: Capabilities) -> Self {
        self.caps = caps;
        self
    }

    /// Use `config` (default: [`CarouselConfig::default`]).
    #[must_use]
    pub fn config(mut self, config: CarouselConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a slide listener before binding.
    #[must_use]
    pub fn on_event(mut self, listener: impl FnMut(&SlideEvent) + 'static) -> Self {
        self.listeners.subscribe(listener);
        self
    }

    /// Bind the carousel.
    pub fn build(self) -> Carousel<D> {
        Carousel::bind(self.dom, self.caps, self.config, self.listeners)
    }
}

/// A carousel bound to one container.
pub struct Carousel<D: Dom> {
    pub(crate) dom: Option<D>,
    pub(crate) config: CarouselConfig,
    caps: Capabilities,
    driver: TransformDriver,
    gesture: SwipeRecognizer,
    pub(crate) scheduler: Scheduler<Task>,
    listeners: Listeners,
    lifecycle: Lifecycle,
    pub(crate) classes: Classes,
    pub(crate) index: usize,
    pub(crate) length: usize,
    pub(crate) lock_left: usize,
    pub(crate) lock_right: usize,
    /// Logical slides, clones excluded.
    pub(crate) items: Vec<NodeId>,
    /// Track children in order, clones included.
    pub(crate) track_nodes: Vec<NodeId>,
    alignment: f64,
    fluid: bool,
    pub(crate) drag_offset: f64,
    animating: bool,
    needs_update: bool,
    callbacks: Vec<UpdateCallback<D>>,
    settling: VecDeque<(u64, Vec<UpdateCallback<D>>)>,
    next_batch: u64,
    pending_slide: Option<PendingSlide>,
    last_offset: Option<i64>,
    window_width: f64,
    pub(crate) looping: Option<LoopState>,
    pub(crate) autoplay: Option<AutoplayState>,
    pub(crate) hide_arrows: bool,
}

impl<D: Dom> std::fmt::Debug for Carousel<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("state", &self.state())
            .field("index", &self.index)
            .field("length", &self.length)
            .field("lock_left", &self.lock_left)
            .field("lock_right", &self.lock_right)
            .field("drag_offset", &self.drag_offset)
            .field("looping", &self.looping.is_some())
            .field("autoplay", &self.autoplay.is_some())
            .finish()
    }
}

impl<D: Dom> Carousel<D> {
    /// Start building a carousel over `dom`.
    pub fn builder(dom: D) -> CarouselBuilder<D> {
        CarouselBuilder {
            dom,
            caps: Capabilities::default(),
            config: CarouselConfig::default(),
            listeners: Listeners::new(),
        }
    }

    /// Bind a carousel with no pre-registered listeners.
    pub fn new(dom: D, caps: Capabilities, config: CarouselConfig) -> Self {
        Self::builder(dom).capabilities(caps).config(config).build()
    }

    fn bind(mut dom: D, caps: Capabilities, mut config: CarouselConfig, listeners: Listeners) -> Self {
        let autoplay = config
            .autoplay
            .filter(|autoplay| autoplay.interval_duration().is_some());
        if autoplay.is_some_and(|autoplay| !autoplay.cancel_on_interaction) {
            config.infinite = true;
        }
        let suspend_arrows = autoplay.is_some_and(|autoplay| autoplay.cancel_on_interaction);

        let classes = Classes::from_config(&config);
        let container = dom.container();
        let alignment = if dom.has_class(container, &config.class(ClassRole::Center)) {
            0.5
        } else {
            0.0
        };
        let fluid = dom.has_class(container, &config.class(ClassRole::Fluid));
        if caps.touch {
            dom.add_class(container, &classes.touch);
        }
        let items = dom.track_items(&classes.item);
        let length = items.len();
        let window_width = dom.viewport_width();

        let mut carousel = Self {
            driver: TransformDriver::new(&caps),
            gesture: SwipeRecognizer::new(config.gesture_config()),
            scheduler: Scheduler::new(),
            listeners,
            lifecycle: Lifecycle::Initializing,
            hide_arrows: config.auto_hide_arrows && !config.infinite && !suspend_arrows,
            classes,
            index: 1,
            length,
            lock_left: 1,
            lock_right: length,
            track_nodes: items.clone(),
            items,
            alignment,
            fluid,
            drag_offset: 0.0,
            animating: false,
            needs_update: false,
            callbacks: Vec::new(),
            settling: VecDeque::new(),
            next_batch: 0,
            pending_slide: None,
            last_offset: None,
            window_width,
            looping: None,
            autoplay: None,
            dom: Some(dom),
            config,
            caps,
        };

        carousel.enable_animation();
        if carousel.config.infinite {
            carousel.install_loop();
        }
        carousel.lifecycle = Lifecycle::Bound;
        tracing::debug!(
            message = "carousel.bind",
            length = carousel.length,
            looping = carousel.looping.is_some(),
            touch = carousel.caps.touch,
            alignment = carousel.alignment
        );
        carousel.start();
        carousel.arm_autoplay();
        carousel
    }

    /// Current 1-based index (0 or `length + 1` transiently while looping).
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of logical slides, clones excluded.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Inclusive bounds a move is clamped into.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> (usize, usize) {
        (self.lock_left, self.lock_right)
    }

    /// Whether the container carries the fluid class.
    #[must_use]
    pub fn is_fluid(&self) -> bool {
        self.fluid
    }

    /// Horizontal alignment of the current slide: 0.0 left, 0.5 centered.
    #[must_use]
    pub fn alignment(&self) -> f64 {
        self.alignment
    }

    /// Pixel offset added by an in-progress drag.
    #[must_use]
    pub fn drag_offset(&self) -> f64 {
        self.drag_offset
    }

    /// Whether slides wrap around through clones.
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping.is_some()
    }

    /// Whether pointer input is still handled.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.lifecycle == Lifecycle::Bound
    }

    /// Whether [`destroy`](Self::destroy) has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.lifecycle == Lifecycle::Destroyed
    }

    /// Effective configuration (autoplay may have forced `infinite`).
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Capabilities the carousel was bound with.
    #[must_use]
    pub fn capabilities(&self) -> &Capabilities {
        &self.caps
    }

    /// The bound document, until destroyed.
    #[must_use]
    pub fn dom(&self) -> Option<&D> {
        self.dom.as_ref()
    }

    /// Observable phase.
    #[must_use]
    pub fn state(&self) -> CarouselState {
        match self.lifecycle {
            Lifecycle::Initializing => CarouselState::Initializing,
            Lifecycle::Destroyed => CarouselState::Destroyed,
            Lifecycle::Bound | Lifecycle::Unbound => {
                if self.gesture.is_dragging() {
                    CarouselState::Dragging
                } else if self.pending_slide.is_some() {
                    CarouselState::Animating
                } else {
                    CarouselState::Idle
                }
            }
        }
    }

    /// Register a slide listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&SlideEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// Remove a slide listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub(crate) fn is_live(&self) -> bool {
        self.lifecycle != Lifecycle::Destroyed && self.dom.is_some()
    }

    /// Move to `index`, clamped into [`bounds`](Self::bounds).
    ///
    /// Moving to the current index emits nothing; a leftover drag offset is
    /// animated back to rest.
    pub fn move_to(&mut self, index: i64, options: MoveOptions) {
        if !self.is_live() || self.length == 0 {
            return;
        }
        self.finish_pending_slide();

        let from = self.index;
        let to = self.clamp_index(index);
        if to == from {
            if self.drag_offset != 0.0 {
                self.drag_offset = 0.0;
                self.update();
            }
            return;
        }

        let animate = options.animate.unwrap_or(self.config.animate);
        tracing::debug!(message = "carousel.move", from, to, animate);
        if animate {
            self.enable_animation();
        } else {
            self.disable_animation();
        }
        self.listeners.emit(&SlideEvent::BeforeSlide { from, to });

        self.drag_offset = 0.0;
        self.index = to;
        if animate {
            self.pending_slide = Some(PendingSlide {
                from,
                to,
                rendered: false,
            });
            self.update();
        } else {
            self.render_now();
            self.enable_animation();
            self.after_slide(from, to);
        }
    }

    /// Move one slide forward.
    pub fn next(&mut self) {
        self.move_to(self.index as i64 + 1, MoveOptions::default());
    }

    /// Move one slide back.
    pub fn prev(&mut self) {
        self.move_to(self.index as i64 - 1, MoveOptions::default());
    }

    /// Re-announce the current slide and schedule a render.
    pub fn start(&mut self) {
        if !self.is_live() {
            return;
        }
        self.disable_animation();
        let index = self.index;
        self.listeners.emit(&SlideEvent::BeforeSlide {
            from: index,
            to: index,
        });
        self.after_slide(index, index);
        self.update();
    }

    /// Re-scan the track after slides were added or removed.
    pub fn refresh(&mut self) {
        if !self.is_live() {
            return;
        }
        self.finish_pending_slide();
        if self.looping.is_some() {
            self.remove_clones();
        }
        let Some(dom) = self.dom.as_ref() else {
            return;
        };
        self.items = dom.track_items(&self.classes.item);
        self.length = self.items.len();
        self.track_nodes = self.items.clone();
        self.lock_left = 1;
        self.lock_right = self.length;
        if self.config.infinite {
            self.install_loop();
        }
        self.index = self.index.clamp(1, self.length.max(1));
        self.drag_offset = 0.0;
        self.last_offset = None;
        tracing::debug!(message = "carousel.refresh", length = self.length, index = self.index);
        self.start();
    }

    /// Stop handling pointer input. Programmatic moves keep working.
    pub fn unbind(&mut self) {
        if self.lifecycle != Lifecycle::Bound {
            return;
        }
        self.gesture.reset();
        self.lifecycle = Lifecycle::Unbound;
        tracing::debug!(message = "carousel.unbind");
    }

    /// Tear down: cancel timers, emit [`SlideEvent::Destroy`], remove the
    /// container and release the document.
    pub fn destroy(&mut self) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }
        self.unbind();
        self.autoplay = None;
        self.scheduler.clear();
        self.callbacks.clear();
        self.settling.clear();
        self.pending_slide = None;

        self.listeners.emit(&SlideEvent::Destroy);
        self.listeners.clear();
        if let Some(mut dom) = self.dom.take() {
            let container = dom.container();
            dom.remove_node(container);
        }
        self.items.clear();
        self.track_nodes.clear();
        self.looping = None;
        self.lifecycle = Lifecycle::Destroyed;
        tracing::debug!(message = "carousel.destroy");
    }

    /// Feed a host event. The returned disposition tells the host whether to
    /// cancel the event's default action.
    pub fn handle_event(&mut self, event: &Event) -> Disposition {
        if !self.is_live() {
            return Disposition::PassThrough;
        }
        match *event {
            Event::Pointer(pointer) => self.handle_pointer(pointer),
            Event::Click { target } => self.handle_click(target),
            Event::Hover => {
                self.note_interaction();
                Disposition::PassThrough
            }
            Event::Resize { width } => self.handle_resize(width),
        }
    }

    fn clamp_index(&self, index: i64) -> usize {
        let low = self.lock_left as i64;
        let high = (self.lock_right as i64).max(low);
        index.clamp(low, high) as usize
    }

    /// Track node showing logical `index`, clones included.
    pub(crate) fn slide_node(&self, index: usize) -> Option<NodeId> {
        let prepended = self.looping.as_ref().map_or(0, LoopState::prepended);
        (index + prepended)
            .checked_sub(1)
            .and_then(|position| self.track_nodes.get(position))
            .copied()
    }

    fn finish_pending_slide(&mut self) {
        if let Some(pending) = self.pending_slide.take() {
            self.after_slide(pending.from, pending.to);
        }
    }

    /// Internal reactions first, then listeners.
    fn after_slide(&mut self, from: usize, to: usize) {
        self.apply_markers(from, to);
        if self.looping.is_some() {
            self.correct_wrap();
        }
        self.listeners.emit(&SlideEvent::AfterSlide { from, to });
    }

    /// Move the active marker from `from` to `to` on slides and indicators.
    pub(crate) fn apply_markers(&mut self, from: usize, to: usize) {
        let leaving = self.slide_node(from);
        let entering = self.slide_node(to);
        let Some(dom) = self.dom.as_mut() else {
            return;
        };
        let active = &self.classes.active;
        if let Some(node) = leaving {
            dom.remove_class(node, active);
        }
        if let Some(node) = entering {
            dom.add_class(node, active);
        }
        for node in dom.slide_controls(&from.to_string()) {
            dom.remove_class(node, active);
        }
        for node in dom.slide_controls(&to.to_string()) {
            dom.add_class(node, active);
        }
        self.apply_arrows(to);
    }

    /// Mark prev/next controls inactive at the ends.
    pub(crate) fn apply_arrows(&mut self, index: usize) {
        if !self.hide_arrows {
            return;
        }
        let Some(dom) = self.dom.as_mut() else {
            return;
        };
        let inactive = &self.classes.inactive;
        let prev = dom.slide_controls("prev");
        let next = dom.slide_controls("next");
        for &node in prev.iter().chain(&next) {
            dom.remove_class(node, inactive);
        }
        if index == 1 {
            for &node in &prev {
                dom.add_class(node, inactive);
            }
        }
        if index == self.length {
            for &node in &next {
                dom.add_class(node, inactive);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockDom;
    use glide_core::caps::{StaticFeatures, probe};
    use std::cell::RefCell;
    use std::rc::Rc;
    use web_time::Duration;

    fn caps() -> Capabilities {
        probe(&StaticFeatures::modern(false))
    }

    fn recorded(dom: MockDom, config: CarouselConfig) -> (Carousel<MockDom>, Rc<RefCell<Vec<SlideEvent>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let carousel = Carousel::builder(dom)
            .capabilities(caps())
            .config(config)
            .on_event(move |e| sink.borrow_mut().push(*e))
            .build();
        (carousel, log)
    }

    #[test]
    fn bind_emits_initial_pair_and_marks_first_slide() {
        let dom = MockDom::new(3, 100.0);
        let (carousel, log) = recorded(dom.clone(), CarouselConfig::default());
        assert_eq!(
            *log.borrow(),
            vec![
                SlideEvent::BeforeSlide { from: 1, to: 1 },
                SlideEvent::AfterSlide { from: 1, to: 1 },
            ]
        );
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.length(), 3);
        assert_eq!(carousel.bounds(), (1, 3));
        assert!(dom.has_class(dom.slides()[0], "m-active"));
        assert_eq!(carousel.state(), CarouselState::Idle);
    }

    #[test]
    fn instant_move_is_synchronous() {
        let dom = MockDom::new(3, 100.0);
        let (mut carousel, log) = recorded(dom.clone(), CarouselConfig::default());
        log.borrow_mut().clear();

        carousel.move_to(3, MoveOptions::instant());
        assert_eq!(
            *log.borrow(),
            vec![
                SlideEvent::BeforeSlide { from: 1, to: 3 },
                SlideEvent::AfterSlide { from: 1, to: 3 },
            ]
        );
        assert_eq!(dom.track_x(), Some(-200));
        let slides = dom.slides();
        assert!(!dom.has_class(slides[0], "m-active"));
        assert!(dom.has_class(slides[2], "m-active"));
    }

    #[test]
    fn animated_move_waits_for_transition_end() {
        let dom = MockDom::new(3, 100.0);
        let (mut carousel, log) = recorded(dom.clone(), CarouselConfig::default());
        carousel.animation_frame(Duration::from_millis(16));
        log.borrow_mut().clear();

        carousel.next();
        assert_eq!(*log.borrow(), vec![SlideEvent::BeforeSlide { from: 1, to: 2 }]);
        assert_eq!(carousel.state(), CarouselState::Animating);

        carousel.animation_frame(Duration::from_millis(32));
        assert_eq!(dom.track_x(), Some(-100));
        assert_eq!(log.borrow().len(), 1);

        let slide = dom.slides()[1];
        carousel.transition_end(slide);
        assert_eq!(log.borrow().len(), 1, "descendant transitions are ignored");

        carousel.transition_end(dom.track());
        assert_eq!(log.borrow()[1], SlideEvent::AfterSlide { from: 1, to: 2 });
        assert_eq!(carousel.state(), CarouselState::Idle);
    }

    #[test]
    fn same_index_move_is_silent() {
        let dom = MockDom::new(3, 100.0);
        let (mut carousel, log) = recorded(dom, CarouselConfig::default());
        log.borrow_mut().clear();
        carousel.move_to(1, MoveOptions::default());
        carousel.prev();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn out_of_range_is_clamped() {
        let dom = MockDom::new(4, 100.0);
        let (mut carousel, _) = recorded(dom, CarouselConfig::default());
        carousel.move_to(99, MoveOptions::instant());
        assert_eq!(carousel.index(), 4);
        carousel.move_to(-7, MoveOptions::instant());
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn empty_track_ignores_moves() {
        let dom = MockDom::new(0, 100.0);
        let (mut carousel, log) = recorded(dom, CarouselConfig::default());
        log.borrow_mut().clear();
        carousel.next();
        carousel.move_to(3, MoveOptions::instant());
        assert!(log.borrow().is_empty());
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn move_during_pending_animation_completes_it_first() {
        let dom = MockDom::new(4, 100.0);
        let (mut carousel, log) = recorded(dom, CarouselConfig::default());
        log.borrow_mut().clear();
        carousel.next();
        carousel.animation_frame(Duration::from_millis(16));
        carousel.next();
        assert_eq!(
            *log.borrow(),
            vec![
                SlideEvent::BeforeSlide { from: 1, to: 2 },
                SlideEvent::AfterSlide { from: 1, to: 2 },
                SlideEvent::BeforeSlide { from: 2, to: 3 },
            ]
        );
    }

    #[test]
    fn touch_host_marks_container() {
        let dom = MockDom::new(2, 100.0);
        let _carousel = Carousel::new(dom.clone(), probe(&StaticFeatures::modern(true)), CarouselConfig::default());
        assert!(dom.has_class(dom.container(), "m-has-touch"));
    }

    #[test]
    fn center_and_fluid_read_at_bind() {
        let dom = MockDom::new(2, 100.0);
        dom.add_container_class("m-center");
        dom.add_container_class("m-fluid");
        let (carousel, _) = recorded(dom, CarouselConfig::default());
        assert_eq!(carousel.alignment(), 0.5);
        assert!(carousel.is_fluid());
    }

    #[test]
    fn refresh_picks_up_new_slides() {
        let dom = MockDom::new(2, 100.0);
        let (mut carousel, log) = recorded(dom.clone(), CarouselConfig::default());
        dom.push_slide(100.0);
        log.borrow_mut().clear();
        carousel.refresh();
        assert_eq!(carousel.length(), 3);
        assert_eq!(carousel.bounds(), (1, 3));
        assert_eq!(
            *log.borrow(),
            vec![
                SlideEvent::BeforeSlide { from: 1, to: 1 },
                SlideEvent::AfterSlide { from: 1, to: 1 },
            ]
        );
    }

    #[test]
    fn unbind_stops_pointer_input_only() {
        let dom = MockDom::new(3, 100.0);
        let (mut carousel, _) = recorded(dom, CarouselConfig::default());
        carousel.unbind();
        assert!(!carousel.is_bound());
        let disposition = carousel.handle_event(&Event::Pointer(
            glide_core::event::PointerEvent::mouse_down(50.0, 10.0),
        ));
        assert_eq!(disposition, Disposition::PassThrough);
        assert_eq!(carousel.state(), CarouselState::Idle);
        carousel.move_to(2, MoveOptions::instant());
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn destroy_is_terminal() {
        let dom = MockDom::new(3, 100.0);
        let (mut carousel, log) = recorded(dom.clone(), CarouselConfig::default());
        log.borrow_mut().clear();
        carousel.destroy();
        assert_eq!(*log.borrow(), vec![SlideEvent::Destroy]);
        assert!(!dom.is_attached(dom.container()));
        assert!(carousel.dom().is_none());
        assert_eq!(carousel.state(), CarouselState::Destroyed);

        carousel.next();
        carousel.start();
        carousel.refresh();
        carousel.destroy();
        carousel.animation_frame(Duration::from_millis(100));
        carousel.advance_time(Duration::from_millis(100));
        assert_eq!(*log.borrow(), vec![SlideEvent::Destroy]);
    }
}
