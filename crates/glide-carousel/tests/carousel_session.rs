//! End-to-end carousel sessions driven the way a host drives them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use glide_carousel::testing::MockDom;
use glide_carousel::{Carousel, CarouselConfig, CarouselState, Dom, SlideEvent};
use glide_core::caps::{StaticFeatures, probe};
use glide_core::event::{Disposition, Event, PointerEvent};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn touch_swipe_through_json_configured_loop() {
    init_tracing();
    let config = CarouselConfig::from_json(
        r#"{
            "infinite": true,
            "moveRadius": 30,
            "classNames": { "active": "current" }
        }"#,
    )
    .expect("valid options");

    let dom = MockDom::new(3, 320.0);
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let mut carousel = Carousel::builder(dom.clone())
        .capabilities(probe(&StaticFeatures::modern(true)))
        .config(config)
        .on_event(move |e| sink.borrow_mut().push(*e))
        .build();
    carousel.animation_frame(ms(16));
    assert!(dom.has_class(dom.container(), "m-has-touch"));
    assert_eq!(dom.track_x(), Some(-640));

    // mouse input is ignored on a touch host
    let ignored = carousel.handle_event(&Event::Pointer(PointerEvent::mouse_down(300.0, 10.0)));
    assert_eq!(ignored, Disposition::PassThrough);
    assert_eq!(carousel.state(), CarouselState::Idle);

    // swipe right from the first slide lands on the clone of the last
    let down = carousel.handle_event(&Event::Pointer(PointerEvent::touch_start(100.0, 10.0)));
    assert_eq!(down, Disposition::PassThrough);
    let drag = carousel.handle_event(&Event::Pointer(PointerEvent::touch_move(200.0, 12.0)));
    assert_eq!(drag, Disposition::PreventDefault);
    carousel.animation_frame(ms(32));
    assert_eq!(dom.track_x(), Some(-540));
    carousel.handle_event(&Event::Pointer(PointerEvent::touch_end(200.0, 12.0)));
    assert_eq!(carousel.index(), 0);

    carousel.animation_frame(ms(48));
    assert_eq!(dom.track_x(), Some(-320));
    carousel.transition_end(dom.track());

    assert_eq!(carousel.index(), 3);
    assert_eq!(dom.track_x(), Some(-1280));
    assert_eq!(
        *events.borrow(),
        vec![
            SlideEvent::BeforeSlide { from: 1, to: 1 },
            SlideEvent::AfterSlide { from: 1, to: 1 },
            SlideEvent::BeforeSlide { from: 1, to: 0 },
            SlideEvent::AfterSlide { from: 1, to: 0 },
        ]
    );
    let current = dom.nodes_with_class("m-current");
    assert_eq!(current, vec![dom.slides()[4]]);
}

#[test]
fn destroy_turns_deferred_work_into_no_ops() {
    init_tracing();
    let dom = MockDom::new(4, 100.0);
    let mut carousel = Carousel::new(
        dom.clone(),
        probe(&StaticFeatures::modern(false)),
        CarouselConfig::default(),
    );
    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);
    carousel.update_then(move |c| {
        flag.set(true);
        c.next();
    });
    carousel.animation_frame(ms(16));
    carousel.next();
    carousel.destroy();
    dom.clear_style_log();

    carousel.animation_frame(ms(32));
    carousel.advance_time(ms(1000));
    carousel.transition_end(dom.track());
    carousel.update();
    assert_eq!(
        carousel.handle_event(&Event::Pointer(PointerEvent::mouse_down(1.0, 1.0))),
        Disposition::PassThrough
    );

    assert!(!ran.get());
    assert!(dom.style_log().is_empty());
    assert!(!dom.is_attached(dom.container()));
    assert_eq!(carousel.state(), CarouselState::Destroyed);
}

#[test]
fn auto_hide_arrows_at_both_ends() {
    let dom = MockDom::new(3, 100.0);
    let prev = dom.add_control("prev");
    let next = dom.add_control("next");
    let mut carousel = Carousel::new(
        dom.clone(),
        probe(&StaticFeatures::modern(false)),
        CarouselConfig::default()
            .with_auto_hide_arrows(true)
            .with_animate(false),
    );
    let state = |dom: &MockDom| (dom.has_class(prev, "m-inactive"), dom.has_class(next, "m-inactive"));

    assert_eq!(state(&dom), (true, false));
    carousel.next();
    assert_eq!(state(&dom), (false, false));
    carousel.next();
    assert_eq!(state(&dom), (false, true));
    carousel.handle_event(&Event::Click { target: Some(prev) });
    assert_eq!(carousel.index(), 2);
    assert_eq!(state(&dom), (false, false));
}

#[test]
fn left_offset_fallback_without_transforms() {
    let dom = MockDom::new(3, 150.0);
    let caps = probe(&StaticFeatures::new());
    let mut carousel = Carousel::new(dom.clone(), caps, CarouselConfig::default().with_animate(false));
    carousel.move_to(2, glide_carousel::MoveOptions::default());
    assert_eq!(dom.style(dom.track(), "left").as_deref(), Some("-150px"));
    assert!(
        dom.style_log().iter().all(|w| w.property == "left"),
        "no transition property means no transition writes"
    );
}

#[test]
fn animated_loop_completes_without_transition_support() {
    init_tracing();
    let dom = MockDom::new(3, 100.0);
    let caps = probe(&StaticFeatures::new().with_property("transform"));
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let mut carousel = Carousel::builder(dom.clone())
        .capabilities(caps)
        .config(CarouselConfig::default().with_infinite(true))
        .on_event(move |e| sink.borrow_mut().push(*e))
        .build();
    carousel.move_to(3, glide_carousel::MoveOptions::instant());
    events.borrow_mut().clear();

    carousel.next();
    assert_eq!(carousel.state(), CarouselState::Animating);
    carousel.animation_frame(ms(16));

    assert_eq!(
        *events.borrow(),
        vec![
            SlideEvent::BeforeSlide { from: 3, to: 4 },
            SlideEvent::AfterSlide { from: 3, to: 4 },
        ]
    );
    assert_eq!(carousel.index(), 1);
    assert_eq!(carousel.state(), CarouselState::Idle);
    assert_eq!(dom.track_x(), Some(-200));
    assert_eq!(dom.nodes_with_class("m-active"), vec![dom.slides()[2]]);
}

#[test]
fn prefixed_engine_uses_two_d_translate() {
    let dom = MockDom::new(2, 200.0);
    let caps = probe(
        &StaticFeatures::new()
            .with_property("WebkitTransform")
            .with_property("WebkitTransitionDuration"),
    );
    let mut carousel = Carousel::new(dom.clone(), caps, CarouselConfig::default());
    carousel.next();
    carousel.animation_frame(ms(16));
    assert_eq!(
        dom.style(dom.track(), "WebkitTransform").as_deref(),
        Some("translate(-200px,0)")
    );
    assert_eq!(
        dom.style(dom.track(), "WebkitTransitionDuration").as_deref(),
        Some("")
    );
}
