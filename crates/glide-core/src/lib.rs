#![forbid(unsafe_code)]

//! Core: platform capabilities, track positioning, pointer input and swipes.
//!
//! # Role in Glide
//! `glide-core` is the input and output edge of the carousel. It knows how to
//! probe what the host platform supports, how to translate the track using
//! the best technique available, and how to turn raw pointer sequences into
//! swipe decisions. It holds no slide state of its own.
//!
//! # Primary responsibilities
//! - **Capabilities**: touch vs mouse input and transform support, probed once.
//! - **TransformDriver**: applies horizontal offsets and toggles transitions.
//! - **Event**: canonical host events (pointer, click, hover, resize).
//! - **SwipeRecognizer**: drag intent, edge resistance and swipe resolution.
//!
//! # How it fits in the system
//! `glide-carousel` owns the slide state machine and drives these pieces;
//! `glide-runtime` supplies the frame and timer scheduling around them.

pub mod caps;
pub mod event;
pub mod gesture;
pub mod transform;

pub use caps::{Capabilities, FeatureSource, InputMode, OffsetStrategy, StaticFeatures, probe};
pub use event::{Disposition, Event, NodeId, Point, PointerEvent, PointerPhase, PointerSource};
pub use gesture::{
    DragUpdate, EdgeLocks, GestureConfig, GesturePhase, GestureState, SwipeOutcome, SwipeRecognizer,
    edge_resistance,
};
pub use transform::{StyleSink, TransformDriver};
