//! In-memory surface for tests and demos.
//!
//! Nodes live in a slotmap arena with parent/child links; styles, computed
//! styles, and attributes are plain string maps. Events are synthesized
//! with [`HeadlessSurface::dispatch`], which bubbles from the target node
//! up to the document so document-level handlers observe every gesture.

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use tracing::{debug, trace};

use rheostat_foundation::Px;

use crate::{Event, EventHandler, EventKind, NodeId, SelectStartHandler, Surface, SurfaceError};

#[derive(Default)]
struct NodeData {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attrs: FxHashMap<String, String>,
    styles: FxHashMap<String, String>,
    computed: FxHashMap<String, String>,
    text: Option<String>,
    handlers: FxHashMap<EventKind, Vec<EventHandler>>,
}

#[derive(Default)]
struct Tree {
    nodes: SlotMap<NodeId, NodeData>,
    ids: FxHashMap<String, NodeId>,
}

/// A surface with no rendering behind it.
///
/// Rendered sizes come from computed styles seeded by the test or demo via
/// [`HeadlessSurface::set_computed_style`], standing in for what a real
/// embed would measure after rendering.
pub struct HeadlessSurface {
    tree: RwLock<Tree>,
    document: NodeId,
    select_start: Mutex<Option<SelectStartHandler>>,
}

impl HeadlessSurface {
    /// Creates a surface holding only the document root.
    pub fn new() -> Self {
        let mut tree = Tree::default();
        let document = tree.nodes.insert(NodeData {
            tag: "document".to_string(),
            ..NodeData::default()
        });
        Self {
            tree: RwLock::new(tree),
            document,
            select_start: Mutex::new(None),
        }
    }

    /// Seeds a computed style value, the stand-in for a rendered size.
    pub fn set_computed_style(&self, node: NodeId, property: &str, value: &str) {
        let mut tree = self.tree.write();
        if let Some(data) = tree.nodes.get_mut(node) {
            data.computed.insert(property.to_string(), value.to_string());
        }
    }

    /// Seeds computed width and height in one call.
    pub fn set_measured(&self, node: NodeId, width: Px, height: Px) {
        self.set_computed_style(node, "width", &format!("{}px", width.raw()));
        self.set_computed_style(node, "height", &format!("{}px", height.raw()));
    }

    /// The text content of a node.
    pub fn text(&self, node: NodeId) -> Option<String> {
        self.tree.read().nodes.get(node).and_then(|n| n.text.clone())
    }

    /// Child handles of a node, in creation order.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree
            .read()
            .nodes
            .get(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// The tag a node was created with.
    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.tree.read().nodes.get(node).map(|n| n.tag.clone())
    }

    /// Delivers an event to `node`, bubbling through its ancestors up to
    /// the document. Handlers run outside the tree lock, so they are free
    /// to read and write the surface.
    pub fn dispatch(&self, node: NodeId, event: &Event) {
        let handlers: Vec<EventHandler> = {
            let tree = self.tree.read();
            let mut collected = Vec::new();
            let mut cursor = Some(node);
            while let Some(current) = cursor {
                let Some(data) = tree.nodes.get(current) else {
                    break;
                };
                if let Some(attached) = data.handlers.get(&event.kind) {
                    collected.extend(attached.iter().cloned());
                }
                cursor = data.parent;
            }
            collected
        };
        trace!(kind = ?event.kind, handlers = handlers.len(), "dispatching event");
        for handler in handlers {
            handler(event);
        }
    }

    /// Whether an installed select-start handler currently suppresses text
    /// selection.
    pub fn selection_suppressed(&self) -> bool {
        let handler = self.select_start.lock().clone();
        match handler {
            Some(handler) => !handler(),
            None => false,
        }
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for HeadlessSurface {
    fn document(&self) -> NodeId {
        self.document
    }

    fn node_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.read().ids.get(id).copied()
    }

    fn create_node(
        &self,
        parent: NodeId,
        tag: &str,
        id: &str,
        class: &str,
        text: Option<&str>,
    ) -> Result<NodeId, SurfaceError> {
        let mut tree = self.tree.write();
        if !tree.nodes.contains_key(parent) {
            return Err(SurfaceError::ParentRequired);
        }
        if !id.is_empty() && tree.ids.contains_key(id) {
            return Err(SurfaceError::DuplicateId(id.to_string()));
        }
        let mut attrs = FxHashMap::default();
        if !id.is_empty() {
            attrs.insert("id".to_string(), id.to_string());
        }
        if !class.is_empty() {
            attrs.insert("class".to_string(), class.to_string());
        }
        let node = tree.nodes.insert(NodeData {
            tag: tag.to_string(),
            parent: Some(parent),
            attrs,
            text: text.map(str::to_string),
            ..NodeData::default()
        });
        if let Some(parent_data) = tree.nodes.get_mut(parent) {
            parent_data.children.push(node);
        }
        if !id.is_empty() {
            tree.ids.insert(id.to_string(), node);
        }
        debug!(tag, id, "created node");
        Ok(node)
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.tree
            .read()
            .nodes
            .get(node)
            .and_then(|n| n.attrs.get(name).cloned())
    }

    fn set_attr(&self, node: NodeId, name: &str, value: &str) {
        let mut tree = self.tree.write();
        if let Some(data) = tree.nodes.get_mut(node) {
            data.attrs.insert(name.to_string(), value.to_string());
        }
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        let tree = self.tree.read();
        let data = tree.nodes.get(node)?;
        data.styles
            .get(property)
            .or_else(|| data.computed.get(property))
            .cloned()
    }

    fn set_style(&self, node: NodeId, property: &str, value: &str) {
        let mut tree = self.tree.write();
        if let Some(data) = tree.nodes.get_mut(node) {
            data.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn attach(&self, node: NodeId, kind: EventKind, handler: EventHandler) {
        let mut tree = self.tree.write();
        if let Some(data) = tree.nodes.get_mut(node) {
            data.handlers.entry(kind).or_default().push(handler);
        }
    }

    fn replace_select_start_handler(
        &self,
        handler: Option<SelectStartHandler>,
    ) -> Option<SelectStartHandler> {
        let mut slot = self.select_start.lock();
        std::mem::replace(&mut *slot, handler)
    }
}
