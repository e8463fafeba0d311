#![forbid(unsafe_code)]

//! Track positioning.
//!
//! [`TransformDriver`] applies a horizontal pixel offset to the track using
//! the best technique the probe found (3-D transform, 2-D transform, then a
//! plain `left` offset) and toggles whether style changes animate.
//!
//! The driver never reads layout; it only writes style through a
//! [`StyleSink`]. Calling it twice with the same arguments writes the same
//! value twice, which is a no-op in effect.

use crate::caps::{Capabilities, OffsetStrategy};
use crate::event::NodeId;

/// Duration value that makes every transition instantaneous.
const INSTANT_DURATION: &str = "0s";

/// Style mutation half of the host DOM.
pub trait StyleSink {
    /// Set an inline style property on `node`. An empty value clears it.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);
}

/// Applies offsets and transition toggles chosen once from [`Capabilities`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformDriver {
    strategy: OffsetStrategy,
    transform_property: String,
    duration_property: Option<String>,
}

impl TransformDriver {
    /// Create a driver for the probed capabilities.
    #[must_use]
    pub fn new(caps: &Capabilities) -> Self {
        Self {
            strategy: caps.offset_strategy(),
            transform_property: caps
                .transform_property
                .clone()
                .unwrap_or_else(|| "left".to_string()),
            duration_property: caps.transition_duration_property.clone(),
        }
    }

    /// The offset technique in use.
    #[inline]
    #[must_use]
    pub fn strategy(&self) -> OffsetStrategy {
        self.strategy
    }

    /// Whether style changes can animate at all. Without a transition
    /// property the host never reports a transition end.
    #[inline]
    #[must_use]
    pub fn can_animate(&self) -> bool {
        self.duration_property.is_some()
    }

    /// Style property and value that place the track at `px`.
    #[must_use]
    pub fn offset_declaration(&self, px: i64) -> (&str, String) {
        match self.strategy {
            OffsetStrategy::Translate3d => (
                self.transform_property.as_str(),
                format!("translate3d({px}px,0,0)"),
            ),
            OffsetStrategy::Translate => (
                self.transform_property.as_str(),
                format!("translate({px}px,0)"),
            ),
            OffsetStrategy::LeftOffset => ("left", format!("{px}px")),
        }
    }

    /// Move `node` horizontally to `px`.
    pub fn set_offset(&self, sink: &mut impl StyleSink, node: NodeId, px: i64) {
        let (property, value) = self.offset_declaration(px);
        sink.set_style(node, property, &value);
    }

    /// Enable (default duration) or disable (instant) transitions on `node`.
    ///
    /// Hosts without a transition-duration property never animate, so this
    /// is a no-op for them.
    pub fn set_transitions_enabled(&self, sink: &mut impl StyleSink, node: NodeId, enabled: bool) {
        let Some(property) = self.duration_property.as_deref() else {
            return;
        };
        let value = if enabled { "" } else { INSTANT_DURATION };
        sink.set_style(node, property, value);
    }
}
