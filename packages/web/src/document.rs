use domount_core::{HostDocument, MountError, Result};
use wasm_bindgen::JsValue;
use web_sys::Element;

/// The browser's document, driven through web-sys.
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Get the document of the current window.
    pub fn get() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| MountError::Host("no global `window` exists".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| MountError::Host("the window has no document".to_string()))?;
        Ok(Self::new(document))
    }

    pub fn inner(&self) -> &web_sys::Document {
        &self.document
    }
}

fn js_error(err: JsValue) -> MountError {
    MountError::Host(format!("{err:?}"))
}

impl HostDocument for WebDocument {
    type Node = Element;

    fn create_element(&mut self, kind: &str) -> Result<Element> {
        self.document.create_element(kind).map_err(js_error)
    }

    fn set_text_content(&mut self, node: &Element, text: &str) -> Result<()> {
        node.set_text_content(Some(text));
        Ok(())
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) -> Result<()> {
        node.set_attribute(name, value).map_err(js_error)
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> Result<()> {
        parent.append_child(child).map(drop).map_err(js_error)
    }

    fn can_append(&self, container: &Element) -> bool {
        container.is_connected()
    }

    fn root(&self, name: &str) -> Option<Element> {
        self.document.get_element_by_id(name)
    }
}
