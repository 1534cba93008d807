//! Mount plain element descriptors into a host document.
//!
//! An [`ElementDescriptor`] says what element to create, which attributes to put on it, and what text it holds.
//! [`mount`] turns one descriptor into one node and appends it to a container in a [`HostDocument`]. The host is
//! always passed in explicitly, so the same code drives the browser DOM (see `domount-web`) and the
//! [`MemoryDocument`] used for server rendering and tests.
//!
//! ```rust
//! use domount_core::{mount, ElementDescriptor, HostDocument, MemoryDocument};
//!
//! let mut doc = MemoryDocument::with_root("root");
//! let root = doc.root("root").unwrap();
//!
//! let link = ElementDescriptor::new("a")
//!     .attr("href", "https://google.com")
//!     .attr("target", "_blank")
//!     .with_children("Click and render Google");
//!
//! let node = mount(&mut doc, &link, &root).unwrap();
//! assert_eq!(doc.children(root), &[node]);
//! assert_eq!(doc.attribute(node, "href"), Some("https://google.com"));
//! ```

mod descriptor;
mod document;
mod error;
mod memory;
mod mounter;

pub use crate::descriptor::{create_element, Attributes, ElementDescriptor, CHILDREN};
pub use crate::document::HostDocument;
pub use crate::error::{MountError, Result};
pub use crate::memory::{ElementNode, MemoryDocument, NodeId, NodeType};
pub use crate::mounter::{mount, ElementMounter};

pub mod prelude {
    pub use crate::{
        create_element, mount, ElementDescriptor, ElementMounter, HostDocument, MountError,
    };
}
