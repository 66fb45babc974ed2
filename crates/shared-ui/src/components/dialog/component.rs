use dioxus::prelude::*;

/// Centered modal overlay. Clicking the backdrop closes it.
#[component]
pub fn Dialog(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "hr-dialog-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "hr-dialog-content",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Title element inside a Dialog.
#[component]
pub fn DialogTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "hr-dialog-title", {children} }
    }
}

/// Muted description under the title.
#[component]
pub fn DialogDescription(children: Element) -> Element {
    rsx! {
        p { class: "hr-dialog-description", {children} }
    }
}

/// Close affordance rendered in the dialog corner.
#[component]
pub fn DialogClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "hr-dialog-close",
            r#type: "button",
            onclick: move |_| on_close.call(()),
            "\u{00d7}"
        }
    }
}
