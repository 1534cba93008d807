//! domount WebSys
//!
//! Mount element descriptors straight into the browser DOM. [`WebDocument`] implements the
//! [`HostDocument`](domount_core::HostDocument) trait on top of web-sys, and [`launch`] mounts a descriptor into the
//! page's root element in one call.
//!
//! ```rust, ignore
//! use domount_core::create_element;
//!
//! let link = create_element(
//!     "a",
//!     [("href", "https://google.com"), ("target", "_blank")],
//!     "Click and render Google",
//! );
//! domount_web::launch(&link).unwrap();
//! ```

pub use crate::cfg::Config;
pub use crate::document::WebDocument;

use domount_core::{ElementDescriptor, ElementMounter, Result};

mod cfg;
mod document;

/// Mount the descriptor into the element with id `root`.
pub fn launch(descriptor: &ElementDescriptor) -> Result<web_sys::Element> {
    launch_cfg(descriptor, Config::new())
}

/// Mount the descriptor into the root element named by the config.
pub fn launch_cfg(descriptor: &ElementDescriptor, cfg: Config) -> Result<web_sys::Element> {
    let mut mounter = ElementMounter::new(WebDocument::get()?);

    let node = mounter
        .mount_to_root(descriptor, &cfg.rootname)
        .inspect_err(|err| tracing::error!("Failed to mount into #{}: {err}", cfg.rootname))?;

    tracing::info!("Mounted <{}> into #{}", descriptor.kind, cfg.rootname);
    Ok(node)
}
