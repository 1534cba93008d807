use crate::{ElementDescriptor, HostDocument, MountError, Result, CHILDREN};

/// Mounts element descriptors into the host document it owns.
///
/// ```rust
/// use domount_core::{ElementDescriptor, ElementMounter, MemoryDocument};
///
/// let mut mounter = ElementMounter::new(MemoryDocument::with_root("root"));
///
/// let link = ElementDescriptor::new("a")
///     .attr("href", "https://google.com")
///     .with_children("Google");
/// let node = mounter.mount_to_root(&link, "root").unwrap();
///
/// let doc = mounter.document();
/// assert_eq!(doc.tag(node), Some("a"));
/// assert_eq!(doc.text_content(node), "Google");
/// ```
pub struct ElementMounter<D: HostDocument> {
    document: D,
}

impl<D: HostDocument> ElementMounter<D> {
    pub fn new(document: D) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn into_document(self) -> D {
        self.document
    }

    /// Mount the descriptor as the last child of `container`.
    ///
    /// See [`mount`] for the exact semantics.
    pub fn mount(&mut self, descriptor: &ElementDescriptor, container: &D::Node) -> Result<D::Node> {
        mount(&mut self.document, descriptor, container)
    }

    /// Mount the descriptor into the element with the id `rootname`.
    ///
    /// Fails with [`MountError::InvalidContainer`] if the document has no such element.
    pub fn mount_to_root(&mut self, descriptor: &ElementDescriptor, rootname: &str) -> Result<D::Node> {
        let container = self.document.root(rootname).ok_or_else(|| {
            MountError::InvalidContainer(format!("no element with id `{rootname}` in the document"))
        })?;
        mount(&mut self.document, descriptor, &container)
    }
}

/// Create one node from `descriptor` and append it to `container`, returning the new node.
///
/// The node gets the descriptor's kind and its text payload as text content. Every attribute is copied in order,
/// except the reserved [`CHILDREN`] key. The node is appended last, so a failure anywhere before that leaves the
/// document without the new node.
///
/// Mounting is not idempotent. Each call creates and appends a fresh node.
pub fn mount<D: HostDocument + ?Sized>(
    document: &mut D,
    descriptor: &ElementDescriptor,
    container: &D::Node,
) -> Result<D::Node> {
    descriptor.validate()?;

    if !document.can_append(container) {
        return Err(MountError::InvalidContainer(format!(
            "{container:?} is missing, detached, or cannot hold children"
        )));
    }

    tracing::debug!(kind = %descriptor.kind, "Mounting element");

    let node = document.create_element(&descriptor.kind)?;
    if let Err(err) = configure(document, descriptor, &node) {
        document.discard(&node);
        return Err(err);
    }

    if let Err(err) = document.append_child(container, &node) {
        document.discard(&node);
        return Err(err);
    }

    tracing::debug!(kind = %descriptor.kind, ?node, "Mounted element");

    Ok(node)
}

fn configure<D: HostDocument + ?Sized>(
    document: &mut D,
    descriptor: &ElementDescriptor,
    node: &D::Node,
) -> Result<()> {
    document.set_text_content(node, &descriptor.children)?;

    for (name, value) in descriptor.attributes.iter() {
        if name == CHILDREN {
            tracing::warn!("Skipping reserved `{CHILDREN}` attribute on <{}>", descriptor.kind);
            continue;
        }

        tracing::trace!(name, value, "Setting attribute");
        document.set_attribute(node, name, value)?;
    }

    Ok(())
}
