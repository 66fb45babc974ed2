use dioxus::prelude::*;
use shared_types::Employee;
use shared_ui::components::{
    Button, ButtonVariant, Dialog, DialogClose, DialogDescription, DialogTitle,
};

use crate::routes::Route;

/// Read-only employee summary layered over the list, with a link to the
/// full detail page. Renders nothing while no employee is selected.
#[component]
pub fn EmployeeCardOverlay(employee: Option<Employee>, on_close: EventHandler<()>) -> Element {
    let Some(employee) = employee else {
        return rsx! {};
    };

    let hired = crate::format_helpers::format_date_human(employee.hire_date);
    let employee_id = employee.id;

    rsx! {
        Dialog {
            open: true,
            on_close: move |_| on_close.call(()),
            DialogClose { on_close: move |_| on_close.call(()) }
            DialogTitle { "{employee.full_name()}" }
            DialogDescription { "{employee.job_title} \u{2022} {employee.department}" }

            div { class: "overlay-section",
                h4 { "Hired" }
                p { "{hired}" }
            }
            div { class: "overlay-section",
                h4 { "Email" }
                p { "{employee.email}" }
            }
            if !employee.details.is_empty() {
                div { class: "overlay-section overlay-bio",
                    h4 { "About" }
                    p { "{employee.details}" }
                }
            }

            div { class: "overlay-actions",
                Link { to: Route::EmployeeDetail { id: employee_id },
                    Button { variant: ButtonVariant::Secondary, "Details" }
                }
            }
        }
    }
}
