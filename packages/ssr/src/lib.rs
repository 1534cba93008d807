//! Render the contents of a [`MemoryDocument`] to HTML.
//!
//! Mount descriptors into a [`MemoryDocument`] with `domount-core`, then turn the tree into a string here.

use domount_core::{ElementDescriptor, ElementMounter, MemoryDocument, NodeId, Result};

mod renderer;

pub use crate::renderer::Renderer;

/// A convenience function to render everything below the document node.
pub fn render(doc: &MemoryDocument) -> String {
    Renderer::new().render(doc)
}

/// A convenience function to render a single node and its descendants.
pub fn render_node(doc: &MemoryDocument, id: NodeId) -> String {
    Renderer::new().render_node(doc, id)
}

/// Mount a descriptor into a scratch document and render just the new element.
pub fn render_element(descriptor: &ElementDescriptor) -> Result<String> {
    let mut mounter = ElementMounter::new(MemoryDocument::with_root("main"));
    let node = mounter.mount_to_root(descriptor, "main")?;
    Ok(render_node(mounter.document(), node))
}
