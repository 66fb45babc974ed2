use dioxus::prelude::*;
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, Input, PageActions, PageHeader, PageTitle,
    SearchBar, Skeleton,
};

use super::form_sheet::SkillFormSheet;
use crate::auth::{can, use_role, Action};
use crate::routes::AccessDenied;

/// Skills taxonomy page. HR admin only — other roles see the denied state
/// and no fetch is issued.
#[component]
pub fn SkillListPage() -> Element {
    let role = use_role();
    let allowed = can(&role, Action::ManageSkills);

    let mut search_input = use_signal(String::new);
    let mut search_query = use_signal(String::new);
    let mut show_create = use_signal(|| false);

    let mut data = use_resource(move || {
        let q = search_query.read().clone();
        async move {
            if !allowed {
                return Some(Vec::new());
            }
            let result = if q.trim().is_empty() {
                server::api::list_skills(None).await
            } else {
                server::api::search_skills(q.trim().to_string()).await
            };
            result.ok()
        }
    });

    if !allowed {
        return rsx! {
            AccessDenied { message: "Only HR Admins are allowed to view the skills taxonomy." }
        };
    }

    let handle_search = move |_| {
        search_query.set(search_input.read().clone());
    };

    let handle_clear = move |_| {
        search_input.set(String::new());
        search_query.set(String::new());
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Skills" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| show_create.set(true),
                        "New Skill"
                    }
                }
            }

            SearchBar {
                Input {
                    label: "Search",
                    value: search_input.read().clone(),
                    placeholder: "Search by label...",
                    on_input: move |e: FormEvent| search_input.set(e.value()),
                }
                Button { onclick: handle_search, "Search" }
                if !search_query.read().is_empty() {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: handle_clear,
                        "Clear"
                    }
                }
            }

            match &*data.read() {
                Some(Some(skills)) if !skills.is_empty() => rsx! {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "ID" }
                            DataTableColumn { "Preferred Label" }
                            DataTableColumn { "Type" }
                            DataTableColumn { "Reuse Level" }
                            DataTableColumn { "Alt Labels" }
                        }
                        DataTableBody {
                            for skill in skills.iter() {
                                {
                                    let skill_type = skill.skill_type.clone().unwrap_or_else(|| "--".to_string());
                                    let reuse = skill.reuse_level.clone().unwrap_or_else(|| "--".to_string());
                                    let alts = skill.alt_labels.clone().unwrap_or_else(|| "--".to_string());
                                    rsx! {
                                        DataTableRow {
                                            DataTableCell { "{skill.id}" }
                                            DataTableCell { "{skill.preferred_label}" }
                                            DataTableCell { "{skill_type}" }
                                            DataTableCell { "{reuse}" }
                                            DataTableCell { "{alts}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Some(_)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-state-text",
                                if search_query.read().is_empty() {
                                    "No skills recorded yet."
                                } else {
                                    "No skills match this search."
                                }
                            }
                        }
                    }
                },
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            p { class: "form-error", "Failed to load skills. Please try again." }
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

            SkillFormSheet {
                open: show_create(),
                on_close: move |_| show_create.set(false),
                on_saved: move |_| data.restart(),
            }
        }
    }
}
