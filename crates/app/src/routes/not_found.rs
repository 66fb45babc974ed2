use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        div { class: "not-found",
            h1 { "Page Not Found" }
            p { "No page exists at /{path}." }
            Link { to: Route::Dashboard {}, "Back to Dashboard" }
        }
    }
}
