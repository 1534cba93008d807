//! Mount a descriptor into an in-memory document and inspect the result.

use domount_core::prelude::*;
use domount_core::{MemoryDocument, NodeId, NodeType};
use pretty_assertions::assert_eq;

fn root_doc() -> (MemoryDocument, NodeId) {
    let doc = MemoryDocument::with_root("root");
    let root = doc.root("root").unwrap();
    (doc, root)
}

#[test]
fn mounts_anchor() {
    let (mut doc, root) = root_doc();

    let link = ElementDescriptor::new("a")
        .attr("href", "https://x")
        .attr("target", "_blank")
        .with_children("Click");

    let node = mount(&mut doc, &link, &root).unwrap();

    assert_eq!(doc.children(root), &[node]);
    assert_eq!(doc.tag(node), Some("a"));
    assert_eq!(doc.attribute(node, "href"), Some("https://x"));
    assert_eq!(doc.attribute(node, "target"), Some("_blank"));
    assert_eq!(doc.attributes(node).unwrap().len(), 2);
    assert_eq!(doc.text_content(node), "Click");
}

#[test]
fn children_attribute_is_never_copied() {
    let (mut doc, root) = root_doc();

    let descriptor = ElementDescriptor::new("p")
        .attr("children", "<b>not an attribute</b>")
        .attr("class", "lead")
        .with_children("payload");

    let node = mount(&mut doc, &descriptor, &root).unwrap();

    assert_eq!(doc.attribute(node, "children"), None);
    assert_eq!(doc.attribute(node, "class"), Some("lead"));
    assert_eq!(doc.text_content(node), "payload");
}

#[test]
fn attributes_keep_descriptor_order() {
    let (mut doc, root) = root_doc();

    let descriptor = create_element(
        "img",
        [("src", "/logo.png"), ("alt", "logo"), ("width", "32")],
        "",
    );
    let node = mount(&mut doc, &descriptor, &root).unwrap();

    let names: Vec<_> = doc.attributes(node).unwrap().iter().map(|(k, _)| k).collect();
    assert_eq!(names, ["src", "alt", "width"]);
    assert!(doc.children(node).is_empty());
}

#[test]
fn mounts_append_in_call_order() {
    let (mut doc, root) = root_doc();

    let first = mount(&mut doc, &ElementDescriptor::new("h1").with_children("one"), &root).unwrap();
    let second = mount(&mut doc, &ElementDescriptor::new("p").with_children("two"), &root).unwrap();

    assert_eq!(doc.children(root), &[first, second]);
    assert_eq!(doc.text_content(root), "onetwo");
}

#[test]
fn mount_is_not_idempotent() {
    let (mut doc, root) = root_doc();
    let descriptor = ElementDescriptor::new("li").with_children("item");

    let a = mount(&mut doc, &descriptor, &root).unwrap();
    let b = mount(&mut doc, &descriptor, &root).unwrap();

    assert_ne!(a, b);
    assert_eq!(doc.children(root).len(), 2);
    assert_eq!(doc.get(a), doc.get(b));
}

#[test]
fn mount_leaves_existing_children_alone() {
    let (mut doc, root) = root_doc();
    let existing = doc.create_node(NodeType::Text("before".to_string()));
    doc.add_child(root, existing).unwrap();

    let node = mount(&mut doc, &ElementDescriptor::new("span"), &root).unwrap();

    assert_eq!(doc.children(root), &[existing, node]);
    assert_eq!(doc.get(existing), Some(&NodeType::Text("before".to_string())));
}

#[test]
fn empty_kind_is_rejected() {
    let (mut doc, root) = root_doc();
    let size = doc.size();

    let err = mount(&mut doc, &ElementDescriptor::new("").with_children("x"), &root).unwrap_err();

    assert!(matches!(err, MountError::InvalidDescriptor(_)));
    assert!(doc.children(root).is_empty());
    assert_eq!(doc.size(), size);
}

#[test]
fn malformed_names_are_rejected() {
    let (mut doc, root) = root_doc();

    for descriptor in [
        ElementDescriptor::new("a b"),
        ElementDescriptor::new("<a>"),
        ElementDescriptor::new("a").attr("", "x"),
        ElementDescriptor::new("a").attr("on click", "x"),
        ElementDescriptor::new("a").attr("x=\"y\"", "z"),
    ] {
        let err = mount(&mut doc, &descriptor, &root).unwrap_err();
        assert!(matches!(err, MountError::InvalidDescriptor(_)), "{descriptor:?}");
    }

    assert!(doc.children(root).is_empty());
}

#[test]
fn missing_root_is_an_invalid_container() {
    let mut mounter = ElementMounter::new(MemoryDocument::with_root("root"));
    let size = mounter.document().size();

    let err = mounter
        .mount_to_root(&ElementDescriptor::new("a"), "app")
        .unwrap_err();

    assert!(matches!(err, MountError::InvalidContainer(_)));
    assert_eq!(mounter.document().size(), size);
}

#[test]
fn detached_and_stale_containers_are_rejected() {
    let (mut doc, _) = root_doc();
    let detached = doc.create_element("div").unwrap();
    let size = doc.size();

    let err = mount(&mut doc, &ElementDescriptor::new("a"), &detached).unwrap_err();
    assert!(matches!(err, MountError::InvalidContainer(_)));
    assert!(doc.children(detached).is_empty());

    doc.remove(detached);
    let err = mount(&mut doc, &ElementDescriptor::new("a"), &detached).unwrap_err();
    assert!(matches!(err, MountError::InvalidContainer(_)));
    assert_eq!(doc.size(), size - 1);
}

#[test]
fn removed_container_stays_invalid_after_slot_reuse() {
    let (mut doc, root) = root_doc();
    let stale = doc.create_element("div").unwrap();
    let document = doc.document_id();
    doc.add_child(document, stale).unwrap();
    doc.remove(stale);

    // Allocates into the slot the removed container used
    let anchor = mount(&mut doc, &ElementDescriptor::new("a"), &root).unwrap();
    assert_ne!(anchor, stale);

    let err = mount(&mut doc, &ElementDescriptor::new("span"), &stale).unwrap_err();
    assert!(matches!(err, MountError::InvalidContainer(_)));
    assert!(doc.children(anchor).is_empty());
    assert_eq!(doc.children(root), &[anchor]);
}

#[test]
fn text_nodes_are_not_containers() {
    let (mut doc, root) = root_doc();
    let text = doc.create_node(NodeType::Text("hi".to_string()));
    doc.add_child(root, text).unwrap();

    let err = mount(&mut doc, &ElementDescriptor::new("a"), &text).unwrap_err();
    assert!(matches!(err, MountError::InvalidContainer(_)));
}

#[test]
fn mounter_owns_its_document() {
    let mut mounter = ElementMounter::new(MemoryDocument::with_root("root"));
    let link = create_element("a", [("href", "https://google.com")], "Google");

    let node = mounter.mount_to_root(&link, "root").unwrap();

    let doc = mounter.into_document();
    let root = doc.element_by_id("root").unwrap();
    assert_eq!(doc.children(root), &[node]);
    assert!(doc.is_attached(node));
}

#[test]
fn mounted_nodes_can_be_containers() {
    let mut mounter = ElementMounter::new(MemoryDocument::with_root("root"));
    let list = mounter
        .mount_to_root(&ElementDescriptor::new("ul"), "root")
        .unwrap();
    let item = mounter
        .mount(&ElementDescriptor::new("li").with_children("first"), &list)
        .unwrap();

    assert_eq!(mounter.document().parent(item), Some(list));
}
