//! domount: mount plain element descriptors into a host document
//!
//! An element descriptor is a tag, an ordered set of attributes, and a text payload. Mounting turns one descriptor
//! into one node and appends it to a container. This crate re-exports the pieces:
//!
//! - [`core`]: descriptors, the `HostDocument` trait, `mount`, and the in-memory `MemoryDocument`
//! - `ssr` (feature `ssr`, on by default): render a `MemoryDocument` to HTML
//! - `web` (feature `web`): mount into the browser DOM through web-sys
//! - `logger` (feature `logger`, on by default): install a tracing subscriber for native or wasm targets
//!
//! ```rust
//! use domount::prelude::*;
//!
//! let mut mounter = ElementMounter::new(MemoryDocument::with_root("root"));
//! let link = create_element("a", [("href", "https://google.com")], "Google");
//! mounter.mount_to_root(&link, "root").unwrap();
//! ```

pub use domount_core as core;

#[cfg(feature = "ssr")]
pub use domount_ssr as ssr;

#[cfg(feature = "web")]
pub use domount_web as web;

#[cfg(feature = "logger")]
pub use domount_logger as logger;

pub mod prelude {
    pub use domount_core::prelude::*;
    pub use domount_core::{Attributes, MemoryDocument, CHILDREN};
}
