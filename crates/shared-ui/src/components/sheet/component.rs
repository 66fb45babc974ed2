use dioxus::prelude::*;

/// Which edge of the screen the sheet slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetSide {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

impl SheetSide {
    fn class(&self) -> &'static str {
        match self {
            SheetSide::Top => "top",
            SheetSide::Right => "right",
            SheetSide::Bottom => "bottom",
            SheetSide::Left => "left",
        }
    }
}

/// Sliding panel overlay. Clicking the backdrop closes it.
#[component]
pub fn Sheet(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] side: SheetSide,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sheet-overlay",
            "data-open": "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet-panel",
                "data-side": side.class(),
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Content area inside a Sheet.
#[component]
pub fn SheetContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sheet-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Header block at the top of a Sheet.
#[component]
pub fn SheetHeader(children: Element) -> Element {
    rsx! {
        div { class: "sheet-header", {children} }
    }
}

/// Title inside a SheetHeader.
#[component]
pub fn SheetTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "sheet-title", {children} }
    }
}

/// Muted description under the title.
#[component]
pub fn SheetDescription(children: Element) -> Element {
    rsx! {
        p { class: "sheet-description", {children} }
    }
}

/// Footer block pinned at the bottom of a Sheet.
#[component]
pub fn SheetFooter(children: Element) -> Element {
    rsx! {
        div { class: "sheet-footer", {children} }
    }
}

/// Close affordance rendered as an unobtrusive button.
#[component]
pub fn SheetClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "sheet-close",
            r#type: "button",
            onclick: move |_| on_close.call(()),
            "Close"
        }
    }
}
