//! Mount the anchor from the getting-started guide and print the resulting page.

use domount_core::{create_element, ElementMounter, MemoryDocument};

fn main() -> domount_core::Result<()> {
    domount_logger::initialize_default();

    let link = create_element(
        "a",
        [("href", "https://google.com"), ("target", "_blank")],
        "Click and render Google",
    );

    let mut mounter = ElementMounter::new(MemoryDocument::with_root("root"));
    mounter.mount_to_root(&link, "root")?;

    let renderer = domount_ssr::Renderer {
        pretty: true,
        ..Default::default()
    };
    println!("{}", renderer.render(mounter.document()));

    Ok(())
}
