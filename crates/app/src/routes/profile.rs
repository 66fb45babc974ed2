use dioxus::prelude::*;
use shared_types::{AppError, Role};
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    DetailItem, DetailList, FormSelect, PageHeader, PageTitle, Skeleton,
};
use shared_ui::{use_toast, ToastOptions};

use crate::auth::{use_auth, use_employee_id, use_role};
use crate::format_helpers::{format_avg, format_date_human, format_score};

/// Role-adaptive profile page: account info plus the sections relevant to
/// the signed-in role.
#[component]
pub fn ProfilePage() -> Element {
    let auth = use_auth();
    let role = use_role();
    let employee_id = use_employee_id();

    let email = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Profile" }
            }

            Card {
                CardHeader { CardTitle { "Account" } }
                CardContent {
                    DetailList {
                        DetailItem { label: "Email", value: email }
                        DetailItem { label: "Role",
                            Badge { variant: BadgeVariant::Secondary, "{role.label()}" }
                        }
                    }
                }
            }

            match (role, employee_id) {
                (Role::Trainer, Some(id)) => rsx! { TrainerSection { trainer_id: id } },
                (Role::Manager, Some(id)) => rsx! { ManagerSection { manager_id: id } },
                (Role::Employee, Some(id)) => rsx! { EmployeeSection { employee_id: id } },
                (Role::HrAdmin, _) => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-state-text",
                                "HR Admin accounts manage the organisation from the Employees, Trainings, Skills, and Analytics pages."
                            }
                        }
                    }
                },
                _ => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-state-text",
                                "This account is not linked to an employee record yet."
                            }
                        }
                    }
                },
            }
        }
    }
}

/// Trainer view: their trainings and the feedback those trainings received.
#[component]
fn TrainerSection(trainer_id: i64) -> Element {
    let trainings = use_resource(move || async move {
        server::api::trainer_trainings(trainer_id).await.ok()
    });
    let feedback = use_resource(move || async move {
        server::api::trainer_feedback(trainer_id).await.ok()
    });

    rsx! {
        Card {
            CardHeader { CardTitle { "Assigned Trainings" } }
            CardContent {
                match &*trainings.read() {
                    Some(Some(list)) if !list.is_empty() => rsx! {
                        ul {
                            for t in list.iter() {
                                li {
                                    "{t.title} ({t.category}) \u{2014} "
                                    {format_date_human(t.start_date)}
                                    " to "
                                    {format_date_human(t.end_date)}
                                }
                            }
                        }
                    },
                    Some(_) => rsx! {
                        p { class: "empty-state-text", "No trainings assigned to you yet." }
                    },
                    None => rsx! { Skeleton {} },
                }
            }
        }

        Card {
            CardHeader { CardTitle { "Feedback for Your Trainings" } }
            CardContent {
                match &*feedback.read() {
                    Some(Some(list)) if !list.is_empty() => rsx! {
                        ul {
                            for f in list.iter() {
                                {
                                    let comment = f.comments.clone().unwrap_or_default();
                                    rsx! {
                                        li {
                                            {format_date_human(f.feedback_date)}
                                            ": {comment} (Score: "
                                            {format_score(f.sentiment_score)}
                                            ")"
                                        }
                                    }
                                }
                            }
                        }
                    },
                    Some(_) => rsx! {
                        p { class: "empty-state-text", "No feedback available yet." }
                    },
                    None => rsx! { Skeleton {} },
                }
            }
        }
    }
}

/// Manager view: team roster, a quick assignment form, and team analytics.
#[component]
fn ManagerSection(manager_id: i64) -> Element {
    let toast = use_toast();

    let team = use_resource(move || async move {
        server::api::manager_team(manager_id).await.ok()
    });
    let trainings = use_resource(move || async move {
        server::api::list_trainings().await.ok()
    });
    let mut analytics = use_resource(move || async move {
        server::api::manager_team_analytics(manager_id).await.ok()
    });

    let mut assign_employee = use_signal(String::new);
    let mut assign_training = use_signal(String::new);
    let mut in_flight = use_signal(|| false);

    let handle_assign = move |_| {
        if *in_flight.read() {
            return;
        }
        let (Ok(emp), Ok(tr)) = (
            assign_employee.read().parse::<i64>(),
            assign_training.read().parse::<i64>(),
        ) else {
            toast.error(
                "Select an employee and a training.".to_string(),
                ToastOptions::new(),
            );
            return;
        };
        spawn(async move {
            in_flight.set(true);
            match server::api::assign_employee_to_training(emp, tr).await {
                Ok(()) => {
                    assign_employee.set(String::new());
                    assign_training.set(String::new());
                    analytics.restart();
                    toast.success("Training assigned".to_string(), ToastOptions::new());
                }
                Err(e) => toast.error(
                    AppError::friendly_message(&e.to_string()),
                    ToastOptions::new(),
                ),
            }
            in_flight.set(false);
        });
    };

    rsx! {
        Card {
            CardHeader { CardTitle { "Your Team" } }
            CardContent {
                match &*team.read() {
                    Some(Some(list)) if !list.is_empty() => rsx! {
                        div { class: "team-grid",
                            for member in list.iter() {
                                div { class: "team-card",
                                    b { {member.full_name()} }
                                    span { class: "team-card-email", "{member.email}" }
                                    span { class: "team-card-meta", "{member.job_title}" }
                                }
                            }
                        }
                    },
                    Some(_) => rsx! {
                        p { class: "empty-state-text", "No employees assigned to you yet." }
                    },
                    None => rsx! { Skeleton {} },
                }
            }
        }

        Card {
            CardHeader { CardTitle { "Assign Training" } }
            CardContent {
                div { class: "request-training-form",
                    FormSelect {
                        label: "Employee",
                        value: assign_employee.read().clone(),
                        onchange: move |e: Event<FormData>| assign_employee.set(e.value()),
                        option { value: "", "-- Select employee --" }
                        for member in team.read().clone().flatten().unwrap_or_default() {
                            option { value: "{member.id}", {member.full_name()} }
                        }
                    }
                    FormSelect {
                        label: "Training",
                        value: assign_training.read().clone(),
                        onchange: move |e: Event<FormData>| assign_training.set(e.value()),
                        option { value: "", "-- Select training --" }
                        for t in trainings.read().clone().flatten().unwrap_or_default() {
                            option { value: "{t.id}", "{t.title}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: *in_flight.read(),
                        onclick: handle_assign,
                        "Assign"
                    }
                }
            }
        }

        Card {
            CardHeader { CardTitle { "Team Analytics" } }
            CardContent {
                match &*analytics.read() {
                    Some(Some(rows)) if !rows.is_empty() => rsx! {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Name" }
                                DataTableColumn { "Trainings Completed" }
                                DataTableColumn { "Avg. Feedback" }
                            }
                            DataTableBody {
                                for row in rows.iter() {
                                    DataTableRow {
                                        DataTableCell { "{row.first_name} {row.last_name}" }
                                        DataTableCell { "{row.trainings_completed}" }
                                        DataTableCell { {format_avg(row.avg_feedback)} }
                                    }
                                }
                            }
                        }
                    },
                    Some(_) => rsx! {
                        p { class: "empty-state-text", "No analytics available." }
                    },
                    None => rsx! { Skeleton {} },
                }
            }
        }
    }
}

/// Employee view: assigned trainings and suggested skills.
#[component]
fn EmployeeSection(employee_id: i64) -> Element {
    let trainings = use_resource(move || async move {
        server::api::assigned_trainings(employee_id).await.ok()
    });
    let suggestions = use_resource(move || async move {
        server::api::suggested_skills(employee_id).await.ok()
    });

    rsx! {
        Card {
            CardHeader { CardTitle { "Your Trainings" } }
            CardContent {
                match &*trainings.read() {
                    Some(Some(list)) if !list.is_empty() => rsx! {
                        ul {
                            for t in list.iter() {
                                li {
                                    "{t.title} ({t.category}) \u{2014} "
                                    {format_date_human(t.start_date)}
                                    " to "
                                    {format_date_human(t.end_date)}
                                }
                            }
                        }
                    },
                    Some(_) => rsx! {
                        p { class: "empty-state-text", "No trainings assigned to you yet." }
                    },
                    None => rsx! { Skeleton {} },
                }
            }
        }

        Card {
            CardHeader { CardTitle { "Suggested Skills" } }
            CardContent {
                match &*suggestions.read() {
                    Some(Some(list)) if !list.is_empty() => rsx! {
                        ul {
                            for s in list.iter() {
                                li { "{s.skill_name} \u{2014} score {s.score:.0}" }
                            }
                        }
                    },
                    Some(_) => rsx! {
                        p { class: "empty-state-text", "No suggestions yet." }
                    },
                    None => rsx! { Skeleton {} },
                }
            }
        }
    }
}
