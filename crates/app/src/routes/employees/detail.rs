use dioxus::prelude::*;
use shared_types::{AppError, EmployeeProfile, FeatureFlags, SkillVote};
use shared_ui::components::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, DetailGrid, DetailItem,
    DetailList, PageActions, PageHeader, PageTitle, Skeleton, TabContent, TabList, TabTrigger,
    Tabs,
};
use shared_ui::{use_toast, ToastOptions};

use super::form_sheet::{EmployeeFormSheet, FormMode};
use crate::auth::{can, use_role, Action};
use crate::components::FeedbackDialog;
use crate::format_helpers::{format_date_human, format_score};
use crate::routes::Route;

#[component]
pub fn EmployeeDetailPage(id: i64) -> Element {
    let toast = use_toast();
    let role = use_role();

    let mut show_edit = use_signal(|| false);
    let mut show_delete_confirm = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let mut data = use_resource(move || async move {
        match server::api::get_employee(id).await {
            Ok(profile) => Some(profile),
            Err(_) => None,
        }
    });

    let handle_delete = move |_: MouseEvent| {
        spawn(async move {
            deleting.set(true);
            match server::api::delete_employee(id).await {
                Ok(()) => {
                    toast.success("Employee deleted successfully".to_string(), ToastOptions::new());
                    navigator().push(Route::EmployeeList {});
                }
                Err(e) => {
                    toast.error(
                        AppError::friendly_message(&e.to_string()),
                        ToastOptions::new(),
                    );
                    deleting.set(false);
                    show_delete_confirm.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "container",
            match &*data.read() {
                Some(Some(profile)) => rsx! {
                    PageHeader {
                        PageTitle { {profile.employee.full_name()} }
                        PageActions {
                            Link { to: Route::EmployeeList {},
                                Button { variant: ButtonVariant::Secondary, "Back to List" }
                            }
                            if can(&role, Action::ManageEmployees) {
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: move |_| show_edit.set(true),
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Destructive,
                                    onclick: move |_| show_delete_confirm.set(true),
                                    "Delete"
                                }
                            }
                        }
                    }

                    AlertDialogRoot {
                        open: show_delete_confirm(),
                        on_open_change: move |v| show_delete_confirm.set(v),
                        AlertDialogContent {
                            AlertDialogTitle { "Delete Employee" }
                            AlertDialogDescription {
                                "Are you sure you want to delete this employee? This action cannot be undone."
                            }
                            AlertDialogActions {
                                AlertDialogCancel { "Cancel" }
                                AlertDialogAction {
                                    on_click: handle_delete,
                                    if *deleting.read() { "Deleting..." } else { "Delete" }
                                }
                            }
                        }
                    }

                    Tabs { default_value: "profile", horizontal: true,
                        TabList {
                            TabTrigger { value: "profile", index: 0usize, "Profile" }
                            TabTrigger { value: "suggestions", index: 1usize, "Skills & Suggestions" }
                            TabTrigger { value: "feedback", index: 2usize, "Feedback" }
                        }
                        TabContent { value: "profile", index: 0usize,
                            ProfileTab { profile: profile.clone() }
                        }
                        TabContent { value: "suggestions", index: 1usize,
                            SuggestionsTab { employee_id: id }
                        }
                        TabContent { value: "feedback", index: 2usize,
                            FeedbackTab { employee_id: id }
                        }
                    }

                    EmployeeFormSheet {
                        mode: FormMode::Edit,
                        initial: Some(profile.employee.clone()),
                        open: show_edit(),
                        on_close: move |_| show_edit.set(false),
                        on_saved: move |_| data.restart(),
                    }
                },
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            div { class: "empty-state",
                                h2 { "Employee Not Found" }
                                p { "The employee you're looking for doesn't exist." }
                                Link { to: Route::EmployeeList {},
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
                        Skeleton {}
                    }
                },
            }
        }
    }
}

/// Profile tab: core record fields, skills with proficiency, and the
/// employee's ongoing trainings.
#[component]
fn ProfileTab(profile: EmployeeProfile) -> Element {
    let e = &profile.employee;
    let manager_display = e
        .manager_id
        .map(|m| format!("#{m}"))
        .unwrap_or_else(|| "--".to_string());
    let bio = if e.details.is_empty() {
        "--".to_string()
    } else {
        e.details.clone()
    };

    rsx! {
        DetailGrid {
            Card {
                CardHeader { CardTitle { "Employee Information" } }
                CardContent {
                    DetailList {
                        DetailItem { label: "First Name", value: e.first_name.clone() }
                        DetailItem { label: "Last Name", value: e.last_name.clone() }
                        DetailItem { label: "Email", value: e.email.clone() }
                        DetailItem { label: "Department",
                            Badge { variant: BadgeVariant::Secondary, "{e.department}" }
                        }
                        DetailItem { label: "Job Title", value: e.job_title.clone() }
                        DetailItem { label: "Hire Date", value: format_date_human(e.hire_date) }
                        DetailItem { label: "Manager", value: manager_display }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Skills" } }
                CardContent {
                    if profile.skills.is_empty() {
                        p { class: "empty-state-text", "No skills recorded yet." }
                    } else {
                        DetailList {
                            for skill in profile.skills.iter() {
                                DetailItem { label: "",
                                    span { "{skill.preferred_label}" }
                                    Badge { variant: BadgeVariant::Outline, "{skill.proficiency_level}/5" }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Ongoing Trainings" } }
                CardContent {
                    if profile.trainings.is_empty() {
                        p { class: "empty-state-text", "No ongoing trainings." }
                    } else {
                        ul {
                            for training in profile.trainings.iter() {
                                li { "{training}" }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "About" } }
                CardContent {
                    p { class: "detail-bio", "{bio}" }
                }
            }
        }
    }
}

/// Suggested skills tab: persisted recommendations with voting and an
/// on-demand recalculation.
#[component]
fn SuggestionsTab(employee_id: i64) -> Element {
    let toast = use_toast();
    let flags: FeatureFlags = use_context();
    let mut refreshing = use_signal(|| false);

    let mut suggestions = use_resource(move || async move {
        server::api::suggested_skills(employee_id).await.ok()
    });

    let handle_refresh = move |_| {
        if *refreshing.read() {
            return;
        }
        spawn(async move {
            refreshing.set(true);
            match server::api::recalculate_suggested_skills(employee_id, None).await {
                Ok(_) => {
                    suggestions.restart();
                    toast.success("Suggestions refreshed".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    toast.error(
                        AppError::friendly_message(&e.to_string()),
                        ToastOptions::new(),
                    );
                }
            }
            refreshing.set(false);
        });
    };

    let mut vote = move |skill_id: i64, vote: SkillVote| {
        spawn(async move {
            match server::api::skill_vote(employee_id, skill_id, vote).await {
                Ok(()) => suggestions.restart(),
                Err(e) => toast.error(
                    AppError::friendly_message(&e.to_string()),
                    ToastOptions::new(),
                ),
            }
        });
    };

    rsx! {
        div { class: "suggestions-tab",
            if flags.recommender {
                div { class: "suggestions-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: *refreshing.read(),
                        onclick: handle_refresh,
                        if *refreshing.read() { "Refreshing..." } else { "Refresh Suggestions" }
                    }
                }
            }

            match &*suggestions.read() {
                Some(Some(list)) if !list.is_empty() => rsx! {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Skill" }
                            DataTableColumn { "Category" }
                            DataTableColumn { "Score" }
                            DataTableColumn { "Vote" }
                        }
                        DataTableBody {
                            for suggestion in list.iter() {
                                {
                                    let skill_id = suggestion.skill_id;
                                    let category = suggestion
                                        .category
                                        .clone()
                                        .unwrap_or_else(|| "--".to_string());
                                    rsx! {
                                        DataTableRow {
                                            DataTableCell { "{suggestion.skill_name}" }
                                            DataTableCell { "{category}" }
                                            DataTableCell {
                                                Badge { variant: BadgeVariant::Primary, "{suggestion.score:.0}" }
                                            }
                                            DataTableCell {
                                                div { class: "vote-buttons",
                                                    Button {
                                                        variant: ButtonVariant::Ghost,
                                                        onclick: move |_| vote(skill_id, SkillVote::Up),
                                                        "\u{25b2}"
                                                    }
                                                    Button {
                                                        variant: ButtonVariant::Ghost,
                                                        onclick: move |_| vote(skill_id, SkillVote::Down),
                                                        "\u{25bc}"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(_) => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-state-text", "No skill suggestions yet." }
                        }
                    }
                },
                None => rsx! { Skeleton {} },
            }
        }
    }
}

/// Feedback tab: history plus the two-phase submission dialog.
#[component]
fn FeedbackTab(employee_id: i64) -> Element {
    let role = use_role();
    let mut show_dialog = use_signal(|| false);

    let mut feedback = use_resource(move || async move {
        server::api::feedback_for_employee(employee_id).await.ok()
    });

    rsx! {
        div { class: "feedback-tab",
            if can(&role, Action::SubmitFeedback) {
                div { class: "feedback-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| show_dialog.set(true),
                        "Give Feedback"
                    }
                }
            }

            match &*feedback.read() {
                Some(Some(list)) if !list.is_empty() => rsx! {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Date" }
                            DataTableColumn { "Sentiment" }
                            DataTableColumn { "Comment" }
                        }
                        DataTableBody {
                            for item in list.iter() {
                                {
                                    let variant = match item.sentiment_score {
                                        Some(s) if s >= 0.05 => BadgeVariant::Primary,
                                        Some(s) if s <= -0.05 => BadgeVariant::Destructive,
                                        _ => BadgeVariant::Outline,
                                    };
                                    let comment = item.comments.clone().unwrap_or_default();
                                    rsx! {
                                        DataTableRow {
                                            DataTableCell { {format_date_human(item.feedback_date)} }
                                            DataTableCell {
                                                Badge { variant: variant, {format_score(item.sentiment_score)} }
                                            }
                                            DataTableCell { "{comment}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(_) => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-state-text", "No feedback recorded for this employee." }
                        }
                    }
                },
                None => rsx! { Skeleton {} },
            }

            FeedbackDialog {
                employee_id,
                open: show_dialog(),
                on_close: move |_| show_dialog.set(false),
                on_saved: move |_| feedback.restart(),
            }
        }
    }
}
