use dioxus::prelude::*;
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, CardHeader, PageHeader, PageTitle, Skeleton,
};

use crate::format_helpers::format_avg;
use crate::routes::Route;

#[component]
pub fn HrAdminDashboard() -> Element {
    let stats = use_resource(move || async move {
        server::api::analytics_overview(None, None).await.ok()
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "HR Overview" }
            }

            match &*stats.read() {
                Some(Some(overview)) => rsx! {
                    div { class: "stat-grid",
                        Card {
                            CardHeader { "Employees" }
                            CardContent {
                                span { class: "stat-value", "{overview.employee_count}" }
                                span { class: "stat-label", "Total Records" }
                            }
                        }
                        Card {
                            CardHeader { "Trainings" }
                            CardContent {
                                span { class: "stat-value", "{overview.training_count}" }
                                span { class: "stat-label", "{overview.active_trainings} active" }
                            }
                        }
                        Card {
                            CardHeader { "Feedback" }
                            CardContent {
                                span { class: "stat-value", "{overview.feedback_count}" }
                                span { class: "stat-label", "Entries Collected" }
                            }
                        }
                        Card {
                            CardHeader { "Avg Sentiment" }
                            CardContent {
                                span { class: "stat-value", {format_avg(overview.avg_feedback)} }
                                span { class: "stat-label", "Across All Feedback" }
                            }
                        }
                    }
                },
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            p { class: "form-error", "Failed to load overview stats." }
                        }
                    }
                },
                None => rsx! {
                    div { class: "stat-grid",
                        for _ in 0..4 {
                            Card {
                                CardContent { Skeleton {} }
                            }
                        }
                    }
                },
            }

            div { class: "quick-actions",
                h3 { "Quick Actions" }
                div { class: "quick-action-grid",
                    Link { to: Route::EmployeeList {},
                        Button { variant: ButtonVariant::Outline, "Manage Employees" }
                    }
                    Link { to: Route::TrainingList {},
                        Button { variant: ButtonVariant::Outline, "Manage Trainings" }
                    }
                    Link { to: Route::SkillList {},
                        Button { variant: ButtonVariant::Outline, "Skills Taxonomy" }
                    }
                    Link { to: Route::Analytics {},
                        Button { variant: ButtonVariant::Outline, "Reports" }
                    }
                }
            }
        }
    }
}
