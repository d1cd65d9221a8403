//! Configure-and-show walkthrough: a destructive confirmation dialog on a
//! dark host, driven from code the way a platform event loop would.
//!
//! Run with logging:
//! ```sh
//! RUST_LOG=debug cargo run -p scrim_dialog --example confirm
//! ```

use std::rc::Rc;

use scrim_dialog::prelude::*;

const TITLE: StringId = StringId(1);
const BODY: StringId = StringId(2);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let resources = ResourceTable::new()
        .with_string(TITLE, "Delete recording?")
        .with_string(BODY, "The recording is removed from this device. This cannot be undone.");

    // A host with light text infers the Dark scheme
    let context = Context::new(Rc::new(resources)).with_color(ColorAttr::TextPrimary, Color::WHITE);

    let mut confirm = dialog(context)
        .title(Some(TITLE), None)
        .message(Some(BODY), None)
        .positive_button(None, Some("Delete"), Some(callback(|_| println!("deleted"))))
        .negative_button(None, None, None)
        .on_show(|_| println!("dialog visible"))
        .on_dismiss(|_| println!("dialog closed"))
        .show();

    println!("scheme: {:?}", confirm.scheme());
    println!("positive label: {:?}", confirm.button_text(ActionButton::Positive));
    println!("negative label: {:?}", confirm.button_text(ActionButton::Negative));

    confirm.press(ActionButton::Positive);
    println!("state: {:?}", confirm.state());
}
