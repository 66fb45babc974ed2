use dioxus::prelude::*;
use shared_ui::components::{Card, CardContent, CardHeader, PageHeader, PageTitle, Skeleton};

use crate::auth::use_employee_id;
use crate::format_helpers::format_avg;

#[component]
pub fn ManagerDashboard() -> Element {
    let manager_id = use_employee_id();

    let stats = use_resource(move || async move {
        let Some(manager_id) = manager_id else {
            return None;
        };
        let team = server::api::manager_team(manager_id).await.ok()?;
        let analytics = server::api::manager_team_analytics(manager_id).await.ok()?;

        let scored: Vec<f64> = analytics.iter().filter_map(|a| a.avg_feedback).collect();
        let team_avg = if scored.is_empty() {
            None
        } else {
            Some(scored.iter().sum::<f64>() / scored.len() as f64)
        };
        let total_trainings: i64 = analytics.iter().map(|a| a.trainings_completed).sum();

        Some((team.len(), total_trainings, team_avg))
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Team Dashboard" }
            }

            match &*stats.read() {
                Some(Some((team_size, total_trainings, team_avg))) => rsx! {
                    div { class: "stat-grid",
                        Card {
                            CardHeader { "My Team" }
                            CardContent {
                                span { class: "stat-value", "{team_size}" }
                                span { class: "stat-label", "Direct Reports" }
                            }
                        }
                        Card {
                            CardHeader { "Trainings" }
                            CardContent {
                                span { class: "stat-value", "{total_trainings}" }
                                span { class: "stat-label", "Completed by Team" }
                            }
                        }
                        Card {
                            CardHeader { "Team Sentiment" }
                            CardContent {
                                span { class: "stat-value", {format_avg(*team_avg)} }
                                span { class: "stat-label", "Average Feedback" }
                            }
                        }
                    }
                },
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-state-text",
                                "This account is not linked to an employee record, so no team can be resolved."
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "stat-grid",
                        for _ in 0..3 {
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
