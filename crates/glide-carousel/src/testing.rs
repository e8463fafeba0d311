#![forbid(unsafe_code)]

//! In-memory [`Dom`] for tests and headless hosts.
//!
//! [`MockDom`] lays slides out left to right with fixed widths, so
//! `offset_left` of a slide is the sum of the widths before it on the track
//! (cloned slides included). Handles are cheap clones of shared state: keep
//! one in the test while the carousel owns another, and inspect the document
//! afterwards, even after `destroy`.
//!
//! ```
//! use glide_carousel::testing::MockDom;
//! use glide_carousel::Dom;
//!
//! let dom = MockDom::new(3, 200.0);
//! let slides = dom.slides();
//! assert_eq!(slides.len(), 3);
//! assert_eq!(dom.offset_left(slides[2]), 400.0);
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use glide_core::event::NodeId;
use glide_core::transform::StyleSink;

use crate::dom::Dom;

/// One recorded `set_style` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleWrite {
    /// Target node.
    pub node: NodeId,
    /// Property name as passed by the carousel.
    pub property: String,
    /// Value as passed by the carousel.
    pub value: String,
}

#[derive(Debug, Clone, Default)]
struct MockNode {
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    width: f64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data_slide: Option<String>,
    hidden: bool,
    cloned_from: Option<NodeId>,
}

#[derive(Debug)]
struct MockState {
    nodes: Vec<MockNode>,
    container: NodeId,
    track: NodeId,
    attached: bool,
    viewport_width: f64,
    log: Vec<StyleWrite>,
}

impl MockState {
    fn node(&self, id: NodeId) -> Option<&MockNode> {
        self.nodes.get(id.raw() as usize)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut MockNode> {
        self.nodes.get_mut(id.raw() as usize)
    }

    fn alloc(&mut self, node: MockNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId, front: bool) {
        self.detach(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            if front {
                node.children.insert(0, child);
            } else {
                node.children.push(child);
            }
        }
    }

    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.node(child).and_then(|n| n.parent) else {
            return;
        };
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|c| *c != child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = None;
        }
    }

    /// Whether `id` is `container` or hangs below it, and the container is
    /// attached.
    fn connected(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == self.container {
                return self.attached;
            }
            cursor = self.node(current).and_then(|n| n.parent);
        }
        false
    }

    fn rendered(&self, id: NodeId) -> bool {
        if !self.connected(id) {
            return false;
        }
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            match self.node(current) {
                Some(node) if node.hidden => return false,
                Some(node) => cursor = node.parent,
                None => return false,
            }
        }
        true
    }

    fn deep_clone(&mut self, id: NodeId) -> Option<NodeId> {
        let source = self.node(id)?.clone();
        let copy = self.alloc(MockNode {
            children: Vec::new(),
            parent: None,
            cloned_from: Some(id),
            ..source.clone()
        });
        for child in source.children {
            if let Some(child_copy) = self.deep_clone(child) {
                self.attach(copy, child_copy, false);
            }
        }
        Some(copy)
    }
}

/// Shared handle to an in-memory carousel document.
#[derive(Debug, Clone)]
pub struct MockDom {
    state: Rc<RefCell<MockState>>,
}

impl MockDom {
    /// Container with a track of `slides` equally wide slides, using the
    /// default class names. Container and viewport are one slide wide.
    #[must_use]
    pub fn new(slides: usize, slide_width: f64) -> Self {
        Self::with_widths(&vec![slide_width; slides], slide_width)
    }

    /// Container `container_width` wide holding one slide per entry of
    /// `widths`.
    #[must_use]
    pub fn with_widths(widths: &[f64], container_width: f64) -> Self {
        let mut state = MockState {
            nodes: Vec::new(),
            container: NodeId(0),
            track: NodeId(1),
            attached: true,
            viewport_width: container_width,
            log: Vec::new(),
        };
        let container = state.alloc(MockNode {
            classes: BTreeSet::from(["m-scooch".to_string()]),
            width: container_width,
            ..MockNode::default()
        });
        let track = state.alloc(MockNode {
            classes: BTreeSet::from(["m-scooch-inner".to_string()]),
            width: container_width,
            ..MockNode::default()
        });
        state.attach(container, track, false);
        state.container = container;
        state.track = track;
        let dom = Self {
            state: Rc::new(RefCell::new(state)),
        };
        for &width in widths {
            dom.push_slide(width);
        }
        dom
    }

    /// Append a new `m-item` slide to the track.
    pub fn push_slide(&self, width: f64) -> NodeId {
        let mut state = self.state.borrow_mut();
        let slide = state.alloc(MockNode {
            classes: BTreeSet::from(["m-item".to_string()]),
            width,
            ..MockNode::default()
        });
        let track = state.track;
        state.attach(track, slide, false);
        slide
    }

    /// Add a `data-slide` control to the container.
    pub fn add_control(&self, action: &str) -> NodeId {
        let container = self.state.borrow().container;
        self.add_child(container, Some(action))
    }

    /// Add a child element under `parent`, optionally with a `data-slide`.
    pub fn add_child(&self, parent: NodeId, action: Option<&str>) -> NodeId {
        let mut state = self.state.borrow_mut();
        let child = state.alloc(MockNode {
            data_slide: action.map(str::to_string),
            ..MockNode::default()
        });
        state.attach(parent, child, false);
        child
    }

    /// Add a class to the container before binding (`m-center`, ...).
    pub fn add_container_class(&self, class: &str) {
        let mut state = self.state.borrow_mut();
        let container = state.container;
        if let Some(n) = state.node_mut(container) {
            n.classes.insert(class.to_string());
        }
    }

    /// Hide or show `node` (no layout box while hidden).
    pub fn set_hidden(&self, node: NodeId, hidden: bool) {
        if let Some(n) = self.state.borrow_mut().node_mut(node) {
            n.hidden = hidden;
        }
    }

    /// Change the viewport width reported to the carousel.
    pub fn set_viewport_width(&self, width: f64) {
        self.state.borrow_mut().viewport_width = width;
    }

    /// Current track children, clones included.
    #[must_use]
    pub fn slides(&self) -> Vec<NodeId> {
        let state = self.state.borrow();
        state
            .node(state.track)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// Source node of a clone.
    #[must_use]
    pub fn cloned_from(&self, node: NodeId) -> Option<NodeId> {
        self.state.borrow().node(node).and_then(|n| n.cloned_from)
    }

    /// Whether `node` is still in the document.
    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.state.borrow().connected(node)
    }

    /// Last value written to `property` on `node`.
    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.state
            .borrow()
            .node(node)
            .and_then(|n| n.styles.get(property).cloned())
    }

    /// Horizontal offset last applied to the track, whatever the strategy.
    #[must_use]
    pub fn track_x(&self) -> Option<i64> {
        let state = self.state.borrow();
        state
            .log
            .iter()
            .rev()
            .filter(|w| w.node == state.track)
            .find_map(|w| parse_offset(&w.property, &w.value))
    }

    /// Every style write so far, in order.
    #[must_use]
    pub fn style_log(&self) -> Vec<StyleWrite> {
        self.state.borrow().log.clone()
    }

    /// Forget recorded style writes.
    pub fn clear_style_log(&self) {
        self.state.borrow_mut().log.clear();
    }

    /// Nodes under the container carrying `class`.
    #[must_use]
    pub fn nodes_with_class(&self, class: &str) -> Vec<NodeId> {
        let state = self.state.borrow();
        (0..state.nodes.len() as u32)
            .map(NodeId)
            .filter(|id| state.connected(*id))
            .filter(|id| state.node(*id).is_some_and(|n| n.classes.contains(class)))
            .collect()
    }
}

fn parse_offset(property: &str, value: &str) -> Option<i64> {
    let px = if property == "left" {
        value.strip_suffix("px")?
    } else {
        let args = value
            .strip_prefix("translate3d(")
            .or_else(|| value.strip_prefix("translate("))?;
        args.split_once("px")?.0
    };
    px.parse().ok()
}

impl StyleSink for MockDom {
    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        if let Some(n) = state.node_mut(node) {
            n.styles.insert(property.to_string(), value.to_string());
        }
        state.log.push(StyleWrite {
            node,
            property: property.to_string(),
            value: value.to_string(),
        });
    }
}

impl Dom for MockDom {
    fn container(&self) -> NodeId {
        self.state.borrow().container
    }

    fn track(&self) -> NodeId {
        self.state.borrow().track
    }

    fn track_items(&self, item_class: &str) -> Vec<NodeId> {
        let state = self.state.borrow();
        let Some(track) = state.node(state.track) else {
            return Vec::new();
        };
        track
            .children
            .iter()
            .copied()
            .filter(|c| state.node(*c).is_some_and(|n| n.classes.contains(item_class)))
            .collect()
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.state
            .borrow()
            .node(node)
            .is_some_and(|n| n.classes.contains(class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.state.borrow_mut().node_mut(node) {
            n.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.state.borrow_mut().node_mut(node) {
            n.classes.remove(class);
        }
    }

    fn offset_left(&self, node: NodeId) -> f64 {
        let state = self.state.borrow();
        let Some(parent) = state.node(node).and_then(|n| n.parent) else {
            return 0.0;
        };
        let Some(siblings) = state.node(parent).map(|p| &p.children) else {
            return 0.0;
        };
        siblings
            .iter()
            .take_while(|s| **s != node)
            .filter_map(|s| state.node(*s))
            .map(|s| s.width)
            .sum()
    }

    fn client_width(&self, node: NodeId) -> f64 {
        self.state.borrow().node(node).map_or(0.0, |n| n.width)
    }

    fn viewport_width(&self) -> f64 {
        self.state.borrow().viewport_width
    }

    fn is_rendered(&self, node: NodeId) -> bool {
        self.state.borrow().rendered(node)
    }

    fn slide_action(&self, node: NodeId) -> Option<String> {
        let state = self.state.borrow();
        if !state.connected(node) {
            return None;
        }
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            let n = state.node(current)?;
            if let Some(action) = &n.data_slide {
                return Some(action.clone());
            }
            if current == state.container {
                return None;
            }
            cursor = n.parent;
        }
        None
    }

    fn slide_controls(&self, action: &str) -> Vec<NodeId> {
        let state = self.state.borrow();
        (0..state.nodes.len() as u32)
            .map(NodeId)
            .filter(|id| state.connected(*id))
            .filter(|id| {
                state
                    .node(*id)
                    .is_some_and(|n| n.data_slide.as_deref() == Some(action))
            })
            .collect()
    }

    fn clone_node(&mut self, node: NodeId) -> NodeId {
        let mut state = self.state.borrow_mut();
        match state.deep_clone(node) {
            Some(copy) => copy,
            None => state.alloc(MockNode::default()),
        }
    }

    fn prepend_to_track(&mut self, node: NodeId) {
        let mut state = self.state.borrow_mut();
        let track = state.track;
        state.attach(track, node, true);
    }

    fn append_to_track(&mut self, node: NodeId) {
        let mut state = self.state.borrow_mut();
        let track = state.track;
        state.attach(track, node, false);
    }

    fn remove_node(&mut self, node: NodeId) {
        let mut state = self.state.borrow_mut();
        if node == state.container {
            state.attached = false;
        }
        state.detach(node);
    }
}
