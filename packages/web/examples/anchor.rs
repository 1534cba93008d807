//! The getting-started anchor, mounted into `<div id="root">`.

use domount_core::create_element;

fn main() {
    domount_logger::initialize_default();

    let link = create_element(
        "a",
        [("href", "https://google.com"), ("target", "_blank")],
        "Click and render Google",
    );

    if let Err(err) = domount_web::launch(&link) {
        tracing::error!("{err}");
    }
}
