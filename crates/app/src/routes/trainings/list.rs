use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::{AppError, Employee, Role, Training, TrainingNeedRequest, TrainingStatus};
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    FormSelect, PageActions, PageHeader, PageTitle, SearchBar, Skeleton,
};
use shared_ui::{use_toast, ToastOptions};

use super::card_overlay::TrainingCardOverlay;
use super::form_sheet::{FormMode, TrainingFormSheet};
use crate::auth::{can, use_auth, use_role, Action};

/// Status dropdown options for the trainings list.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StatusFilter {
    All,
    Ongoing,
    Finished,
}

impl StatusFilter {
    fn from_value(value: &str) -> Self {
        match value {
            "Ongoing" => StatusFilter::Ongoing,
            "Finished" => StatusFilter::Finished,
            _ => StatusFilter::All,
        }
    }

    fn as_value(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Ongoing => "Ongoing",
            StatusFilter::Finished => "Finished",
        }
    }
}

/// Filter by derived status and order by newest start date first.
fn filter_trainings(trainings: &[Training], filter: StatusFilter, today: NaiveDate) -> Vec<Training> {
    let mut result: Vec<Training> = trainings
        .iter()
        .filter(|t| match filter {
            StatusFilter::All => true,
            StatusFilter::Ongoing => t.status(today) == TrainingStatus::Ongoing,
            StatusFilter::Finished => t.status(today) == TrainingStatus::Finished,
        })
        .cloned()
        .collect();
    result.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    result
}

#[component]
pub fn TrainingListPage() -> Element {
    let auth = use_auth();
    let role = use_role();

    let mut status = use_signal(|| StatusFilter::All);
    let mut show_create = use_signal(|| false);
    let mut edit_training = use_signal(|| Option::<Training>::None);
    let mut overlay_training = use_signal(|| Option::<Training>::None);

    let mut data = use_resource(move || async move {
        server::api::list_trainings().await.ok()
    });

    // Managers pick from their team in the request form.
    let request_candidates = use_resource(move || {
        let user = auth.current_user.read().clone();
        async move {
            let Some(user) = user else {
                return None;
            };
            if !can(&user.role_tag(), Action::RequestTraining) {
                return Some(Vec::new());
            }
            match (user.role_tag(), user.employee_id) {
                (Role::Manager, Some(manager_id)) => {
                    server::api::manager_team(manager_id).await.ok()
                }
                _ => server::api::list_employees().await.ok(),
            }
        }
    });

    let today = chrono::Local::now().date_naive();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Trainings" }
                PageActions {
                    if can(&role, Action::ManageTrainings) {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| show_create.set(true),
                            "New Training"
                        }
                    }
                }
            }

            SearchBar {
                FormSelect {
                    label: "Status",
                    value: status.read().as_value().to_string(),
                    onchange: move |e: Event<FormData>| status.set(StatusFilter::from_value(&e.value())),
                    option { value: "All", "All" }
                    option { value: "Ongoing", "Ongoing" }
                    option { value: "Finished", "Finished" }
                }
            }

            match &*data.read() {
                Some(Some(trainings)) => {
                    let filtered = filter_trainings(trainings, *status.read(), today);
                    rsx! {
                        if filtered.is_empty() {
                            Card {
                                CardContent {
                                    p { class: "empty-state-text", "No trainings match the current filter." }
                                }
                            }
                        } else {
                            div { class: "card-grid",
                                for training in filtered {
                                    TrainingCard {
                                        training: training.clone(),
                                        today,
                                        can_edit: can(&role, Action::ManageTrainings),
                                        on_open: move |t| overlay_training.set(Some(t)),
                                        on_edit: move |t| edit_training.set(Some(t)),
                                    }
                                }
                            }
                        }

                        if can(&role, Action::RequestTraining) {
                            RequestTrainingCard {
                                trainings: trainings.clone(),
                                candidates: request_candidates.read().clone().flatten().unwrap_or_default(),
                            }
                        }
                    }
                }
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            p { class: "form-error", "Failed to load trainings. Please try again." }
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }

            TrainingCardOverlay {
                training: overlay_training.read().clone(),
                today,
                on_close: move |_| overlay_training.set(None),
            }

            TrainingFormSheet {
                mode: FormMode::Create,
                initial: None,
                open: show_create(),
                on_close: move |_| show_create.set(false),
                on_saved: move |_| data.restart(),
            }

            TrainingFormSheet {
                mode: FormMode::Edit,
                initial: edit_training.read().clone(),
                open: edit_training.read().is_some(),
                on_close: move |_| edit_training.set(None),
                on_saved: move |_| data.restart(),
            }
        }
    }
}

#[component]
fn TrainingCard(
    training: Training,
    today: NaiveDate,
    can_edit: bool,
    on_open: EventHandler<Training>,
    on_edit: EventHandler<Training>,
) -> Element {
    let status = training.status(today);
    let status_variant = match status {
        TrainingStatus::Ongoing => BadgeVariant::Primary,
        TrainingStatus::Finished => BadgeVariant::Destructive,
    };
    let start = crate::format_helpers::format_date_human(training.start_date);
    let end = crate::format_helpers::format_date_human(training.end_date);
    let for_overlay = training.clone();
    let for_edit = training.clone();

    rsx! {
        div {
            class: "training-card",
            onclick: move |_| on_open.call(for_overlay.clone()),
            div { class: "training-card-body",
                span { class: "training-card-title", "{training.title}" }
                span { class: "training-card-category", "{training.category}" }
                p { class: "training-card-description", "{training.description}" }
            }
            div { class: "training-card-footer",
                span { class: "training-card-dates", "{start} \u{2013} {end}" }
                Badge { variant: status_variant, {status.label()} }
                if can_edit {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_edit.call(for_edit.clone());
                        },
                        "Edit"
                    }
                }
            }
        }
    }
}

/// Manager affordance: request a training for a report with a 1-5 level.
#[component]
fn RequestTrainingCard(trainings: Vec<Training>, candidates: Vec<Employee>) -> Element {
    let toast = use_toast();

    let mut employee_id = use_signal(String::new);
    let mut training_id = use_signal(String::new);
    let mut level = use_signal(|| "3".to_string());
    let mut in_flight = use_signal(|| false);

    let handle_request = move |_| {
        if *in_flight.read() {
            return;
        }
        let (Ok(emp), Ok(tr)) = (
            employee_id.read().parse::<i64>(),
            training_id.read().parse::<i64>(),
        ) else {
            toast.error(
                "Select an employee and a training.".to_string(),
                ToastOptions::new(),
            );
            return;
        };
        let request = TrainingNeedRequest {
            employee_id: emp,
            training_id: tr,
            recommendation_level: level.read().parse().unwrap_or(3),
        };
        spawn(async move {
            in_flight.set(true);
            match server::api::request_training(request).await {
                Ok(()) => {
                    employee_id.set(String::new());
                    training_id.set(String::new());
                    level.set("3".to_string());
                    toast.success("Training requested".to_string(), ToastOptions::new());
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
            CardHeader { CardTitle { "Request Training for Employee" } }
            CardContent {
                div { class: "request-training-form",
                    FormSelect {
                        label: "Employee",
                        value: employee_id.read().clone(),
                        onchange: move |e: Event<FormData>| employee_id.set(e.value()),
                        option { value: "", "-- Select employee --" }
                        for employee in candidates.iter() {
                            option { value: "{employee.id}", {employee.full_name()} }
                        }
                    }
                    FormSelect {
                        label: "Training",
                        value: training_id.read().clone(),
                        onchange: move |e: Event<FormData>| training_id.set(e.value()),
                        option { value: "", "-- Select training --" }
                        for training in trainings.iter() {
                            option { value: "{training.id}", "{training.title}" }
                        }
                    }
                    FormSelect {
                        label: "Level (1-5)",
                        value: level.read().clone(),
                        onchange: move |e: Event<FormData>| level.set(e.value()),
                        for l in 1..=5 {
                            option { value: "{l}", "{l}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: *in_flight.read(),
                        onclick: handle_request,
                        if *in_flight.read() { "Requesting..." } else { "Request" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training(id: i64, start: (i32, u32, u32), end: (i32, u32, u32)) -> Training {
        Training {
            id,
            title: format!("Training {id}"),
            category: "General".to_string(),
            description: String::new(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn sample() -> Vec<Training> {
        vec![
            training(1, (2026, 1, 1), (2026, 3, 1)),   // finished
            training(2, (2026, 5, 1), (2026, 6, 15)),  // ends today -> ongoing
            training(3, (2026, 6, 1), (2026, 12, 31)), // ongoing
        ]
    }

    #[test]
    fn all_filter_keeps_everything_sorted_newest_first() {
        let filtered = filter_trainings(&sample(), StatusFilter::All, today());
        let ids: Vec<i64> = filtered.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn ongoing_includes_training_ending_today() {
        let filtered = filter_trainings(&sample(), StatusFilter::Ongoing, today());
        let ids: Vec<i64> = filtered.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn finished_means_end_date_passed() {
        let filtered = filter_trainings(&sample(), StatusFilter::Finished, today());
        let ids: Vec<i64> = filtered.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn status_filter_parses_dropdown_values() {
        assert_eq!(StatusFilter::from_value("Ongoing"), StatusFilter::Ongoing);
        assert_eq!(StatusFilter::from_value("Finished"), StatusFilter::Finished);
        assert_eq!(StatusFilter::from_value("All"), StatusFilter::All);
        assert_eq!(StatusFilter::from_value("anything"), StatusFilter::All);
    }
}
