use dioxus::prelude::*;
use shared_ui::components::{Card, CardContent, CardHeader, PageHeader, PageTitle, Skeleton};

use crate::auth::use_employee_id;

#[component]
pub fn EmployeeDashboard() -> Element {
    let employee_id = use_employee_id();

    let stats = use_resource(move || async move {
        let Some(employee_id) = employee_id else {
            return None;
        };
        let trainings = server::api::assigned_trainings(employee_id).await.ok()?;
        let suggestions = server::api::suggested_skills(employee_id).await.ok()?;

        let today = chrono::Local::now().date_naive();
        let ongoing = trainings.iter().filter(|t| t.end_date >= today).count();

        Some((ongoing, trainings.len(), suggestions.len()))
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "My Dashboard" }
            }

            match &*stats.read() {
                Some(Some((ongoing, total, suggestion_count))) => rsx! {
                    div { class: "stat-grid",
                        Card {
                            CardHeader { "Ongoing Trainings" }
                            CardContent {
                                span { class: "stat-value", "{ongoing}" }
                                span { class: "stat-label", "Of {total} assigned" }
                            }
                        }
                        Card {
                            CardHeader { "Suggested Skills" }
                            CardContent {
                                span { class: "stat-value", "{suggestion_count}" }
                                span { class: "stat-label", "Waiting for Review" }
                            }
                        }
                    }
                },
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-state-text",
                                "This account is not linked to an employee record. Contact your HR admin."
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
