//! An in-memory host document.
//!
//! [`MemoryDocument`] behaves like a small subset of the browser DOM: nodes live in a slot map, elements hold ordered
//! attributes, and setting text content replaces an element's children with a single text node. It's used for
//! server-side rendering and for testing mount logic without a browser.

use crate::{Attributes, HostDocument, MountError, Result};
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// A handle to a node in a [`MemoryDocument`].
    ///
    /// Handles are generational: once a node is removed its handle never resolves again, even after the slot is
    /// reused.
    pub struct NodeId;
}

/// An element node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementNode {
    /// The tag of the element
    pub tag: String,
    /// The attributes of the element, in the order they were first set
    pub attributes: Attributes,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::default(),
        }
    }
}

/// A type of node with data specific to the node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// The document node at the top of the tree
    Document,
    /// An element node
    Element(ElementNode),
    /// A text node
    Text(String),
}

impl From<ElementNode> for NodeType {
    fn from(element: ElementNode) -> Self {
        Self::Element(element)
    }
}

#[derive(Debug, Clone)]
struct Node {
    value: NodeType,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A document tree held entirely in memory.
#[derive(Debug)]
pub struct MemoryDocument {
    nodes: SlotMap<NodeId, Node>,
    document: NodeId,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Create an empty document containing only the document node.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let document = nodes.insert(Node {
            value: NodeType::Document,
            parent: None,
            children: Vec::new(),
        });
        Self { nodes, document }
    }

    /// Create a document with a single `<div id="{rootname}">` ready to be mounted into.
    pub fn with_root(rootname: &str) -> Self {
        let mut doc = Self::new();
        let mut root = ElementNode::new("div");
        root.attributes.insert("id", rootname);
        let root = doc.create_node(root);
        doc.nodes[root].parent = Some(doc.document);
        doc.nodes[doc.document].children.push(root);
        doc
    }

    /// The id of the document node.
    pub fn document_id(&self) -> NodeId {
        self.document
    }

    /// Insert a new detached node.
    pub fn create_node(&mut self, value: impl Into<NodeType>) -> NodeId {
        self.nodes.insert(Node {
            value: value.into(),
            parent: None,
            children: Vec::new(),
        })
    }

    /// Append `child` to `parent`, detaching it from its previous parent first.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let Some(parent_node) = self.nodes.get(parent) else {
            return Err(MountError::Host(format!("{parent:?} does not exist")));
        };
        if matches!(parent_node.value, NodeType::Text(_)) {
            return Err(MountError::Host(format!("{parent:?} is a text node")));
        }
        if !self.nodes.contains_key(child) {
            return Err(MountError::Host(format!("{child:?} does not exist")));
        }
        if child == self.document || self.is_ancestor(child, parent) {
            return Err(MountError::Host(format!(
                "appending {child:?} to {parent:?} would create a cycle"
            )));
        }

        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        Ok(())
    }

    /// Remove a node and all of its descendants.
    pub fn remove(&mut self, id: NodeId) {
        if id == self.document || !self.nodes.contains_key(id) {
            return;
        }
        self.detach(id);
        self.remove_recursive(id);
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeType> {
        self.nodes.get(id).map(|node| &node.value)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.get(id)? {
            NodeType::Element(element) => Some(element.tag.as_str()),
            _ => None,
        }
    }

    pub fn attributes(&self, id: NodeId) -> Option<&Attributes> {
        match self.get(id)? {
            NodeType::Element(element) => Some(&element.attributes),
            _ => None,
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attributes(id)?.get(name)
    }

    /// The concatenated text of the node and all of its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    /// Whether the node can be reached from the document node.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.is_ancestor(self.document, id)
    }

    /// Find the attached element whose `id` attribute matches.
    pub fn element_by_id(&self, name: &str) -> Option<NodeId> {
        let mut stack = vec![self.document];
        while let Some(id) = stack.pop() {
            if self.attribute(id, "id") == Some(name) {
                return Some(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        None
    }

    /// The number of nodes in the document, not counting the document node itself.
    pub fn size(&self) -> usize {
        self.nodes.len() - 1
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementNode> {
        match self.nodes.get_mut(id).map(|node| &mut node.value) {
            Some(NodeType::Element(element)) => Ok(element),
            Some(_) => Err(MountError::Host(format!("{id:?} is not an element"))),
            None => Err(MountError::Host(format!("{id:?} does not exist"))),
        }
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id].parent.take() {
            self.nodes[parent].children.retain(|child| *child != id);
        }
    }

    fn remove_recursive(&mut self, id: NodeId) {
        let Some(node) = self.nodes.remove(id) else {
            return;
        };
        for child in node.children {
            self.remove_recursive(child);
        }
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(NodeType::Text(text)) = self.get(id) {
            out.push_str(text);
        }
        for child in self.children(id) {
            self.collect_text(*child, out);
        }
    }
}

impl HostDocument for MemoryDocument {
    type Node = NodeId;

    fn create_element(&mut self, kind: &str) -> Result<NodeId> {
        let id = self.create_node(ElementNode::new(kind));
        tracing::trace!(?id, kind, "Created element");
        Ok(id)
    }

    fn set_text_content(&mut self, node: &NodeId, text: &str) -> Result<()> {
        self.element_mut(*node)?;

        for child in std::mem::take(&mut self.nodes[*node].children) {
            self.nodes[child].parent = None;
            self.remove_recursive(child);
        }

        if !text.is_empty() {
            let text_node = self.create_node(NodeType::Text(text.to_string()));
            self.add_child(*node, text_node)?;
        }
        Ok(())
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<()> {
        self.element_mut(*node)?.attributes.insert(name, value);
        Ok(())
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<()> {
        self.add_child(*parent, *child)
    }

    fn can_append(&self, container: &NodeId) -> bool {
        matches!(self.get(*container), Some(NodeType::Element(_))) && self.is_attached(*container)
    }

    fn root(&self, name: &str) -> Option<NodeId> {
        self.element_by_id(name)
    }

    fn discard(&mut self, node: &NodeId) {
        if self.parent(*node).is_none() {
            self.remove(*node);
        }
    }
}
