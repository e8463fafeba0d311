#![forbid(unsafe_code)]

//! Carousel: the slide state machine bound to a host document.
//!
//! # Role in Glide
//! `glide-carousel` is where slides live. It owns the current index, the
//! bounds, render coalescing, the observer events and the loop and autoplay
//! extensions. Input decoding and track positioning come from `glide-core`;
//! frame and timer scheduling from `glide-runtime`.
//!
//! # Host contract
//! The host implements [`Dom`] over its document, probes [`Capabilities`]
//! once, and then only forwards events, animation frames, time and
//! transition ends. Nothing here spawns threads or reads a clock.
//!
//! With the `test-helpers` feature, the in-memory `testing::MockDom` stands
//! in for a browser document:
//!
//! ```
//! use glide_carousel::testing::MockDom;
//! use glide_carousel::{Carousel, CarouselConfig, MoveOptions};
//! use glide_core::caps::{probe, StaticFeatures};
//!
//! let dom = MockDom::new(3, 320.0);
//! let mut carousel = Carousel::new(
//!     dom.clone(),
//!     probe(&StaticFeatures::modern(false)),
//!     CarouselConfig::default(),
//! );
//! carousel.move_to(3, MoveOptions::instant());
//! assert_eq!(carousel.index(), 3);
//! assert_eq!(dom.track_x(), Some(-640));
//! ```

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod dom;
pub mod error;
pub mod events;
pub mod looping;
#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use carousel::{Carousel, CarouselBuilder, CarouselState, MoveOptions, UpdateCallback};
pub use config::{AutoplayConfig, CarouselConfig, ClassNames, ClassRole};
pub use dom::Dom;
pub use error::ConfigError;
pub use events::{ListenerId, Listeners, SlideEvent};

pub use glide_core::caps::Capabilities;
