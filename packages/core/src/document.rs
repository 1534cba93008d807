use crate::Result;

/// A host document tree that elements can be mounted into.
///
/// The mounter never reaches for a global document. Everything it does to the host goes through this trait, which
/// keeps the mount logic identical for the browser DOM, the in-memory [`crate::MemoryDocument`], or any other tree a
/// renderer wants to drive.
pub trait HostDocument {
    /// A handle to a node in this document.
    type Node: Clone + std::fmt::Debug;

    /// Create a new, detached element of the given kind.
    fn create_element(&mut self, kind: &str) -> Result<Self::Node>;

    /// Replace all content of the node with the given text.
    fn set_text_content(&mut self, node: &Self::Node, text: &str) -> Result<()>;

    /// Set an attribute on an element
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str) -> Result<()>;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<()>;

    /// Whether this node exists, is attached to the document, and can hold children.
    fn can_append(&self, container: &Self::Node) -> bool;

    /// Look up the element with the given id.
    ///
    /// This is how a renderer finds the root it should mount into.
    fn root(&self, name: &str) -> Option<Self::Node>;

    /// Drop a node that was created but never attached.
    ///
    /// Garbage collected hosts can ignore this.
    fn discard(&mut self, _node: &Self::Node) {}
}
