#![forbid(unsafe_code)]

//! The document capability a carousel is bound to.
//!
//! The carousel never touches a real document. The host implements [`Dom`]
//! over whatever it renders into (a browser DOM through bindings, a
//! retained scene graph, or `testing::MockDom` in tests)
//! and hands it to [`Carousel`](crate::Carousel) at construction.
//!
//! Geometry is reported in CSS pixels. `offset_left` is relative to the
//! track, so it includes any cloned slides placed before a node.

use glide_core::event::NodeId;
use glide_core::transform::StyleSink;

/// Element queries and mutations needed by a carousel.
pub trait Dom: StyleSink {
    /// The outer container element.
    fn container(&self) -> NodeId;

    /// The sliding track element.
    fn track(&self) -> NodeId;

    /// Children of the track carrying `item_class`, in document order.
    fn track_items(&self, item_class: &str) -> Vec<NodeId>;

    /// Whether `node` carries `class`.
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Add `class` to `node`. Adding a present class is a no-op.
    fn add_class(&mut self, node: NodeId, class: &str);

    /// Remove `class` from `node`. Removing an absent class is a no-op.
    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Left edge of `node` relative to the track.
    fn offset_left(&self, node: NodeId) -> f64;

    /// Inner width of `node`.
    fn client_width(&self, node: NodeId) -> f64;

    /// Current viewport (window) width.
    fn viewport_width(&self) -> f64;

    /// Whether `node` has a layout box. Hidden carousels report `false`.
    fn is_rendered(&self, node: NodeId) -> bool;

    /// The `data-slide` value of `node` or its nearest ancestor inside the
    /// container.
    fn slide_action(&self, node: NodeId) -> Option<String>;

    /// Elements inside the container whose `data-slide` equals `action`.
    fn slide_controls(&self, action: &str) -> Vec<NodeId>;

    /// Deep-clone `node`. The clone is detached until inserted.
    fn clone_node(&mut self, node: NodeId) -> NodeId;

    /// Insert `node` as the first child of the track.
    fn prepend_to_track(&mut self, node: NodeId);

    /// Insert `node` as the last child of the track.
    fn append_to_track(&mut self, node: NodeId);

    /// Detach `node` (and its subtree) from the document.
    fn remove_node(&mut self, node: NodeId);
}
