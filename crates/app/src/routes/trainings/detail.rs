use dioxus::prelude::*;
use shared_types::{AppError, Employee, TrainingStatus};
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    DetailGrid, DetailItem, DetailList, FormSelect, PageActions, PageHeader, PageTitle, Skeleton,
};
use shared_ui::{use_toast, ToastOptions};

use super::form_sheet::{FormMode, TrainingFormSheet};
use crate::auth::{can, use_role, Action};
use crate::format_helpers::format_date_human;
use crate::routes::Route;

#[component]
pub fn TrainingDetailPage(id: i64) -> Element {
    let role = use_role();
    let mut show_edit = use_signal(|| false);

    let mut data = use_resource(move || async move {
        match server::api::get_training(id).await {
            Ok(training) => Some(training),
            Err(_) => None,
        }
    });

    let today = chrono::Local::now().date_naive();

    rsx! {
        div { class: "container",
            match &*data.read() {
                Some(Some(training)) => {
                    let status = training.status(today);
                    let status_variant = match status {
                        TrainingStatus::Ongoing => BadgeVariant::Primary,
                        TrainingStatus::Finished => BadgeVariant::Destructive,
                    };
                    rsx! {
                        PageHeader {
                            PageTitle { "{training.title}" }
                            PageActions {
                                Link { to: Route::TrainingList {},
                                    Button { variant: ButtonVariant::Secondary, "Back to List" }
                                }
                                if can(&role, Action::ManageTrainings) {
                                    Button {
                                        variant: ButtonVariant::Primary,
                                        onclick: move |_| show_edit.set(true),
                                        "Edit"
                                    }
                                }
                            }
                        }

                        DetailGrid {
                            Card {
                                CardHeader { CardTitle { "Training Information" } }
                                CardContent {
                                    DetailList {
                                        DetailItem { label: "Category",
                                            Badge { variant: BadgeVariant::Secondary, "{training.category}" }
                                        }
                                        DetailItem { label: "Start Date", value: format_date_human(training.start_date) }
                                        DetailItem { label: "End Date", value: format_date_human(training.end_date) }
                                        DetailItem { label: "Status",
                                            Badge { variant: status_variant, {status.label()} }
                                        }
                                    }
                                }
                            }

                            Card {
                                CardHeader { CardTitle { "Description" } }
                                CardContent {
                                    p { class: "detail-bio",
                                        if training.description.is_empty() {
                                            "--"
                                        } else {
                                            "{training.description}"
                                        }
                                    }
                                }
                            }
                        }

                        ParticipantsSection { training_id: id }

                        TrainingFormSheet {
                            mode: FormMode::Edit,
                            initial: Some(training.clone()),
                            open: show_edit(),
                            on_close: move |_| show_edit.set(false),
                            on_saved: move |_| data.restart(),
                        }
                    }
                }
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            div { class: "empty-state",
                                h2 { "Training Not Found" }
                                p { "The training you're looking for doesn't exist." }
                                Link { to: Route::TrainingList {},
                                    Button { "Back to List" }
                                }
                            }
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
        }
    }
}

/// Assigned employees, with add/remove controls for roles that may assign.
#[component]
fn ParticipantsSection(training_id: i64) -> Element {
    let toast = use_toast();
    let role = use_role();
    let can_assign = can(&role, Action::AssignTraining);

    let mut assign_employee_id = use_signal(String::new);
    let mut in_flight = use_signal(|| false);

    let mut participants = use_resource(move || async move {
        server::api::training_participants(training_id).await.ok()
    });

    // Directory for the assignment selector; empty unless assignment is allowed.
    let candidates = use_resource(move || async move {
        if !can_assign {
            return Vec::new();
        }
        server::api::list_employees().await.unwrap_or_default()
    });

    let handle_assign = move |_| {
        if *in_flight.read() {
            return;
        }
        let Ok(employee_id) = assign_employee_id.read().parse::<i64>() else {
            toast.error("Select an employee.".to_string(), ToastOptions::new());
            return;
        };
        spawn(async move {
            in_flight.set(true);
            match server::api::assign_employee_to_training(employee_id, training_id).await {
                Ok(()) => {
                    assign_employee_id.set(String::new());
                    participants.restart();
                    toast.success("Employee assigned".to_string(), ToastOptions::new());
                }
                Err(e) => toast.error(
                    AppError::friendly_message(&e.to_string()),
                    ToastOptions::new(),
                ),
            }
            in_flight.set(false);
        });
    };

    let mut handle_remove = move |employee_id: i64| {
        spawn(async move {
            match server::api::remove_employee_from_training(employee_id, training_id).await {
                Ok(()) => {
                    participants.restart();
                    toast.success("Employee removed".to_string(), ToastOptions::new());
                }
                Err(e) => toast.error(
                    AppError::friendly_message(&e.to_string()),
                    ToastOptions::new(),
                ),
            }
        });
    };

    rsx! {
        Card {
            CardHeader { CardTitle { "Participants" } }
            CardContent {
                if can_assign {
                    div { class: "request-training-form",
                        FormSelect {
                            label: "Assign employee",
                            value: assign_employee_id.read().clone(),
                            onchange: move |e: Event<FormData>| assign_employee_id.set(e.value()),
                            option { value: "", "-- Select employee --" }
                            for employee in candidates.read().clone().unwrap_or_default() {
                                option { value: "{employee.id}", {employee.full_name()} }
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

                match &*participants.read() {
                    Some(Some(list)) if !list.is_empty() => rsx! {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Name" }
                                DataTableColumn { "Department" }
                                DataTableColumn { "Job Title" }
                                if can_assign {
                                    DataTableColumn { "" }
                                }
                            }
                            DataTableBody {
                                for participant in list.iter() {
                                    ParticipantRow {
                                        participant: participant.clone(),
                                        can_remove: can_assign,
                                        on_remove: move |id| handle_remove(id),
                                    }
                                }
                            }
                        }
                    },
                    Some(_) => rsx! {
                        p { class: "empty-state-text", "No employees assigned yet." }
                    },
                    None => rsx! { Skeleton {} },
                }
            }
        }
    }
}

#[component]
fn ParticipantRow(
    participant: Employee,
    can_remove: bool,
    on_remove: EventHandler<i64>,
) -> Element {
    let id = participant.id;

    rsx! {
        DataTableRow {
            DataTableCell { {participant.full_name()} }
            DataTableCell { "{participant.department}" }
            DataTableCell { "{participant.job_title}" }
            if can_remove {
                DataTableCell {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_remove.call(id),
                        "Remove"
                    }
                }
            }
        }
    }
}
