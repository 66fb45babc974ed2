use dioxus::prelude::*;
use shared_ui::components::{Card, CardContent, CardHeader, PageHeader, PageTitle, Skeleton};

use crate::auth::use_employee_id;

#[component]
pub fn TrainerDashboard() -> Element {
    let trainer_id = use_employee_id();

    let stats = use_resource(move || async move {
        let Some(trainer_id) = trainer_id else {
            return None;
        };
        let trainings = server::api::trainer_trainings(trainer_id).await.ok()?;
        let feedback = server::api::trainer_feedback(trainer_id).await.ok()?;

        let today = chrono::Local::now().date_naive();
        let ongoing = trainings.iter().filter(|t| t.end_date >= today).count();

        Some((trainings.len(), ongoing, feedback.len()))
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Trainer Dashboard" }
            }

            match &*stats.read() {
                Some(Some((total, ongoing, feedback_count))) => rsx! {
                    div { class: "stat-grid",
                        Card {
                            CardHeader { "My Trainings" }
                            CardContent {
                                span { class: "stat-value", "{total}" }
                                span { class: "stat-label", "{ongoing} ongoing" }
                            }
                        }
                        Card {
                            CardHeader { "Feedback" }
                            CardContent {
                                span { class: "stat-value", "{feedback_count}" }
                                span { class: "stat-label", "From Participants" }
                            }
                        }
                    }
                },
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-state-text",
                                "This account is not linked to an employee record, so no trainings can be resolved."
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "stat-grid",
                        for _ in 0..2 {
                            Card {
                                CardContent { Skeleton {} }
                            }
                        }
                    }
                },
            }
        }
    }
}
