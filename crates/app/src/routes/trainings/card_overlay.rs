use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::{Training, TrainingStatus};
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Dialog, DialogClose, DialogDescription,
    DialogTitle,
};

use crate::routes::Route;

/// Read-only training summary layered over the list, with a link to the
/// full detail page. Renders nothing while no training is selected.
#[component]
pub fn TrainingCardOverlay(
    training: Option<Training>,
    today: NaiveDate,
    on_close: EventHandler<()>,
) -> Element {
    let Some(training) = training else {
        return rsx! {};
    };

    let status = training.status(today);
    let status_variant = match status {
        TrainingStatus::Ongoing => BadgeVariant::Primary,
        TrainingStatus::Finished => BadgeVariant::Destructive,
    };
    let start = crate::format_helpers::format_date_human(training.start_date);
    let end = crate::format_helpers::format_date_human(training.end_date);
    let training_id = training.id;

    rsx! {
        Dialog {
            open: true,
            on_close: move |_| on_close.call(()),
            DialogClose { on_close: move |_| on_close.call(()) }
            DialogTitle { "{training.title}" }
            DialogDescription { "{training.category}" }

            div { class: "overlay-section",
                p { "{training.description}" }
            }
            div { class: "overlay-section",
                span { class: "training-card-dates", "{start} \u{2013} {end}" }
            }
            div { class: "overlay-section",
                Badge { variant: status_variant, {status.label()} }
            }

            div { class: "overlay-actions",
                Link { to: Route::TrainingDetail { id: training_id },
                    Button { variant: ButtonVariant::Secondary, "Details" }
                }
            }
        }
    }
}
