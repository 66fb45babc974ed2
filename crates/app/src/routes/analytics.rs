use dioxus::prelude::*;
use shared_types::{FeatureFlags, FeedbackLeader};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Input, PageActions, PageHeader,
    PageTitle, SearchBar, Skeleton,
};

use crate::auth::{can, use_role, Action};
use crate::format_helpers::format_avg;
use crate::routes::AccessDenied;

fn opt_param(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn AnalyticsPage() -> Element {
    let role = use_role();
    let allowed = can(&role, Action::ViewAnalytics);
    let flags: FeatureFlags = use_context();

    let mut start_input = use_signal(String::new);
    let mut end_input = use_signal(String::new);
    let mut start_date = use_signal(|| Option::<String>::None);
    let mut end_date = use_signal(|| Option::<String>::None);

    let overview = use_resource(move || {
        let start = start_date.read().clone();
        let end = end_date.read().clone();
        async move {
            if !allowed {
                return None;
            }
            server::api::analytics_overview(start, end).await.ok()
        }
    });

    let trainings = use_resource(move || {
        let start = start_date.read().clone();
        let end = end_date.read().clone();
        async move {
            if !allowed {
                return None;
            }
            server::api::analytics_trainings(start, end).await.ok()
        }
    });

    let feedback = use_resource(move || {
        let start = start_date.read().clone();
        let end = end_date.read().clone();
        async move {
            if !allowed {
                return None;
            }
            server::api::analytics_feedback(start, end).await.ok()
        }
    });

    if !allowed {
        return rsx! {
            AccessDenied { message: "Analytics are limited to HR Admins and Managers." }
        };
    }

    let handle_apply = move |_| {
        start_date.set(opt_param(&start_input.read()));
        end_date.set(opt_param(&end_input.read()));
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Analytics & Reports" }
                PageActions {
                    if flags.export {
                        a { href: "/api/analytics/export?format=csv",
                            Button { variant: ButtonVariant::Primary, "Export CSV" }
                        }
                        a { href: "/api/analytics/export?format=excel",
                            Button { variant: ButtonVariant::Secondary, "Export Excel" }
                        }
                    }
                }
            }

            SearchBar {
                Input {
                    label: "From",
                    input_type: "date",
                    value: start_input.read().clone(),
                    on_input: move |e: FormEvent| start_input.set(e.value()),
                }
                Input {
                    label: "To",
                    input_type: "date",
                    value: end_input.read().clone(),
                    on_input: move |e: FormEvent| end_input.set(e.value()),
                }
                Button { onclick: handle_apply, "Apply" }
            }

            match &*overview.read() {
                Some(Some(overview)) => rsx! {
                    div { class: "stat-grid",
                        StatCard { label: "Employees", value: overview.employee_count.to_string() }
                        StatCard { label: "Trainings", value: overview.training_count.to_string() }
                        StatCard { label: "Active Trainings", value: overview.active_trainings.to_string() }
                        StatCard { label: "Upcoming Trainings", value: overview.upcoming_trainings.to_string() }
                        StatCard { label: "Feedback Entries", value: overview.feedback_count.to_string() }
                        StatCard { label: "Avg Feedback", value: format_avg(overview.avg_feedback) }
                    }

                    Card {
                        CardHeader { CardTitle { "Employee Feedback by Month" } }
                        CardContent {
                            if overview.monthly_feedback.is_empty() {
                                p { class: "empty-state-text", "No feedback in the selected period." }
                            } else {
                                div { class: "monthly-strip",
                                    for point in overview.monthly_feedback.iter() {
                                        div { class: "monthly-tile",
                                            span { class: "monthly-tile-month", "{point.month}" }
                                            span { class: "monthly-tile-value", {format_avg(point.avg_feedback)} }
                                            span { class: "monthly-tile-n", "{point.n} pts" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            p { class: "form-error", "Failed to load analytics. Please try again." }
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }

            div { class: "analytics-columns",
                Card {
                    CardHeader { CardTitle { "Trainings by Participants" } }
                    CardContent {
                        match &*trainings.read() {
                            Some(Some(analytics)) if !analytics.trainings.is_empty() => rsx! {
                                DataTable {
                                    DataTableHeader {
                                        DataTableColumn { "Title" }
                                        DataTableColumn { "Category" }
                                        DataTableColumn { "Participants" }
                                    }
                                    DataTableBody {
                                        for row in analytics.trainings.iter() {
                                            DataTableRow {
                                                DataTableCell { "{row.title}" }
                                                DataTableCell { "{row.category}" }
                                                DataTableCell { "{row.participants}" }
                                            }
                                        }
                                    }
                                }
                            },
                            Some(_) => rsx! {
                                p { class: "empty-state-text", "No trainings recorded." }
                            },
                            None => rsx! { Skeleton {} },
                        }
                    }
                }

                Card {
                    CardHeader { CardTitle { "Feedback: Top / Bottom" } }
                    CardContent {
                        match &*feedback.read() {
                            Some(Some(analytics)) => rsx! {
                                div { class: "leader-columns",
                                    LeaderTable {
                                        heading: "Top Positive (avg)",
                                        leaders: analytics.top_positive.clone(),
                                    }
                                    LeaderTable {
                                        heading: "Top Negative (avg)",
                                        leaders: analytics.top_negative.clone(),
                                    }
                                }
                            },
                            Some(None) => rsx! {
                                p { class: "empty-state-text", "No feedback recorded." }
                            },
                            None => rsx! { Skeleton {} },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-label", "{label}" }
            span { class: "stat-value", "{value}" }
        }
    }
}

#[component]
fn LeaderTable(heading: &'static str, leaders: Vec<FeedbackLeader>) -> Element {
    rsx! {
        div { class: "leader-table",
            h4 { "{heading}" }
            if leaders.is_empty() {
                p { class: "empty-state-text", "No data." }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Employee" }
                        DataTableColumn { "Avg" }
                        DataTableColumn { "N" }
                    }
                    DataTableBody {
                        for leader in leaders.iter() {
                            DataTableRow {
                                DataTableCell { "{leader.first_name} {leader.last_name}" }
                                DataTableCell { {format_avg(leader.avg_feedback)} }
                                DataTableCell { "{leader.n_feedback}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
