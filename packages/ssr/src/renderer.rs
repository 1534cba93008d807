use domount_core::{ElementNode, MemoryDocument, NodeId, NodeType};
use std::fmt::Write;

const INDENT: &str = "    ";

/// Writes a memory document out as HTML.
pub struct Renderer {
    /// should we do our best to prettify the output?
    pub pretty: bool,

    /// Should we sanitize text nodes? (escape HTML)
    pub sanitize: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            pretty: false,
            sanitize: true,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, doc: &MemoryDocument) -> String {
        self.render_node(doc, doc.document_id())
    }

    pub fn render_node(&self, doc: &MemoryDocument, id: NodeId) -> String {
        let mut buf = String::new();
        // Writing into a String never fails
        let _ = self.render_to(&mut buf, doc, id);
        buf
    }

    pub fn render_to(
        &self,
        buf: &mut impl Write,
        doc: &MemoryDocument,
        id: NodeId,
    ) -> std::fmt::Result {
        self.render_inner(buf, doc, id, 0)
    }

    fn render_inner(
        &self,
        buf: &mut impl Write,
        doc: &MemoryDocument,
        id: NodeId,
        depth: usize,
    ) -> std::fmt::Result {
        match doc.get(id) {
            Some(NodeType::Document) => {
                for (idx, child) in doc.children(id).iter().enumerate() {
                    if self.pretty && idx > 0 {
                        writeln!(buf)?;
                    }
                    self.render_inner(buf, doc, *child, depth)?;
                }
            }
            Some(NodeType::Text(text)) => {
                if self.sanitize {
                    write!(buf, "{}", askama_escape::escape(text, askama_escape::Html))?;
                } else {
                    write!(buf, "{text}")?;
                }
            }
            Some(NodeType::Element(element)) => self.render_element(buf, doc, id, element, depth)?,
            None => tracing::warn!("Skipping {id:?}, it is not part of the document"),
        }

        Ok(())
    }

    fn render_element(
        &self,
        buf: &mut impl Write,
        doc: &MemoryDocument,
        id: NodeId,
        element: &ElementNode,
        depth: usize,
    ) -> std::fmt::Result {
        let tag = &element.tag;
        write!(buf, "<{tag}")?;
        for (name, value) in element.attributes.iter() {
            write_attribute(buf, name, value)?;
        }

        // Void elements have no content model, so anything mounted inside them is dropped
        if tag_is_self_closing(tag) {
            if !doc.children(id).is_empty() {
                tracing::warn!("Dropping the content of void element <{tag}>");
            }
            return write!(buf, "/>");
        }
        write!(buf, ">")?;

        // Only element-only content is broken onto new lines, text and mixed content stay inline
        let children = doc.children(id);
        let block = self.pretty
            && !children.is_empty()
            && children
                .iter()
                .all(|child| matches!(doc.get(*child), Some(NodeType::Element(_))));

        for child in children {
            if block {
                writeln!(buf)?;
                write_indent(buf, depth + 1)?;
            }
            self.render_inner(buf, doc, *child, depth + 1)?;
        }

        if block {
            writeln!(buf)?;
            write_indent(buf, depth)?;
        }

        write!(buf, "</{tag}>")
    }
}

pub(crate) fn write_attribute(buf: &mut impl Write, name: &str, value: &str) -> std::fmt::Result {
    write!(
        buf,
        " {name}=\"{}\"",
        askama_escape::escape(value, askama_escape::Html)
    )
}

fn write_indent(buf: &mut impl Write, depth: usize) -> std::fmt::Result {
    for _ in 0..depth {
        buf.write_str(INDENT)?;
    }
    Ok(())
}

fn tag_is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
