use domount::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn mount_and_render_through_the_facade() {
    let mut mounter = ElementMounter::new(MemoryDocument::with_root("root"));
    mounter
        .mount_to_root(
            &create_element("a", [("href", "https://google.com")], "Google"),
            "root",
        )
        .unwrap();

    assert_eq!(
        domount::ssr::render(mounter.document()),
        "<div id=\"root\"><a href=\"https://google.com\">Google</a></div>"
    );
}
