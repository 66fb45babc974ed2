use dioxus::prelude::*;

/// A container for label/value pairs in a detail view.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-list", {children} }
    }
}

/// A single label/value row inside a `DetailList`.
///
/// For plain text values, pass the `value` prop. For rich content (badges,
/// links), use children instead.
#[component]
pub fn DetailItem(
    /// The field label (e.g. "Department").
    label: &'static str,
    /// The field value as a string. Ignored when children are provided.
    #[props(default)]
    value: String,
    /// Optional children for rich content (badges, links, etc).
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            span { class: "detail-item-label", "{label}" }
            span { class: "detail-item-value",
                if has_children {
                    {children}
                } else {
                    span { "{value}" }
                }
            }
        }
    }
}

/// Grid layout for multiple cards in a detail view.
#[component]
pub fn DetailGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-grid", {children} }
    }
}
