use dioxus::prelude::*;
use shared_types::{Employee, Role};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, FormSelect, Input, PageActions, PageHeader,
    PageTitle, SearchBar, Skeleton,
};

use super::card_overlay::EmployeeCardOverlay;
use super::form_sheet::{EmployeeFormSheet, FormMode};
use crate::auth::{can, use_auth, use_role, Action};
use crate::routes::AccessDenied;

/// In-memory list filter: department dropdown plus free-text search over
/// name, department, and job title. Empty search and "Any" department pass
/// everything through.
fn filter_employees(employees: &[Employee], department: &str, search: &str) -> Vec<Employee> {
    let needle = search.trim().to_lowercase();
    employees
        .iter()
        .filter(|e| department == "Any" || e.department == department)
        .filter(|e| {
            needle.is_empty()
                || e.first_name.to_lowercase().contains(&needle)
                || e.last_name.to_lowercase().contains(&needle)
                || e.department.to_lowercase().contains(&needle)
                || e.job_title.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
pub fn EmployeeListPage() -> Element {
    let auth = use_auth();
    let role = use_role();

    let mut search = use_signal(String::new);
    let mut department = use_signal(|| "Any".to_string());
    let mut show_add = use_signal(|| false);
    let mut overlay_employee = use_signal(|| Option::<Employee>::None);

    // The fetch is role-aware: a denied role issues no request at all, and a
    // manager fetches only their team instead of the directory.
    let mut data = use_resource(move || {
        let user = auth.current_user.read().clone();
        async move {
            let Some(user) = user else {
                return None;
            };
            let role = user.role_tag();
            if !can(&role, Action::ViewEmployees) {
                return Some(Vec::new());
            }
            let result = match (role, user.employee_id) {
                (Role::Manager, Some(manager_id)) => server::api::manager_team(manager_id).await,
                _ => server::api::list_employees().await,
            };
            result.ok()
        }
    });

    if !can(&role, Action::ViewEmployees) {
        return rsx! {
            AccessDenied { message: "Trainers are not permitted to browse the employee directory." }
        };
    }

    let page_title = if matches!(role, Role::Manager) {
        "My Team"
    } else {
        "Employees"
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "{page_title}" }
                PageActions {
                    if can(&role, Action::ManageEmployees) {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| show_add.set(true),
                            "Add Employee"
                        }
                    }
                }
            }

            match &*data.read() {
                Some(Some(employees)) => {
                    let departments = {
                        let mut d: Vec<String> =
                            employees.iter().map(|e| e.department.clone()).collect();
                        d.sort();
                        d.dedup();
                        d
                    };
                    let filtered =
                        filter_employees(employees, &department.read(), &search.read());
                    rsx! {
                        SearchBar {
                            Input {
                                label: "Search",
                                value: search.read().clone(),
                                placeholder: "Name, department, or job title...",
                                on_input: move |e: FormEvent| search.set(e.value()),
                            }
                            FormSelect {
                                label: "Department",
                                value: department.read().clone(),
                                onchange: move |e: Event<FormData>| department.set(e.value()),
                                option { value: "Any", "Any" }
                                for dep in departments {
                                    option { value: "{dep}", "{dep}" }
                                }
                            }
                        }

                        if filtered.is_empty() {
                            Card {
                                CardContent {
                                    p { class: "empty-state-text", "No employees match the current filters." }
                                }
                            }
                        } else {
                            div { class: "card-grid",
                                for employee in filtered {
                                    EmployeeCard {
                                        employee: employee.clone(),
                                        on_open: move |emp| overlay_employee.set(Some(emp)),
                                    }
                                }
                            }
                        }
                    }
                }
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            p { class: "form-error", "Failed to load employees. Please try again." }
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

            EmployeeCardOverlay {
                employee: overlay_employee.read().clone(),
                on_close: move |_| overlay_employee.set(None),
            }

            EmployeeFormSheet {
                mode: FormMode::Create,
                initial: None,
                open: show_add(),
                on_close: move |_| show_add.set(false),
                on_saved: move |_| data.restart(),
            }
        }
    }
}

#[component]
fn EmployeeCard(employee: Employee, on_open: EventHandler<Employee>) -> Element {
    let for_overlay = employee.clone();
    let hired = crate::format_helpers::format_date_human(employee.hire_date);

    rsx! {
        div {
            class: "employee-card",
            onclick: move |_| on_open.call(for_overlay.clone()),
            div { class: "employee-card-avatar",
                span { {employee.first_name.chars().next().map(|c| c.to_string()).unwrap_or_default()} }
            }
            div { class: "employee-card-body",
                span { class: "employee-card-name", "{employee.full_name()}" }
                span { class: "employee-card-department", "{employee.department}" }
                span { class: "employee-card-meta", "{employee.job_title}" }
                span { class: "employee-card-meta", "Joined {hired}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn employee(id: i64, first: &str, last: &str, dept: &str, title: &str) -> Employee {
        Employee {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{first}@example.com").to_lowercase(),
            hire_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            department: dept.to_string(),
            job_title: title.to_string(),
            details: String::new(),
            manager_id: None,
        }
    }

    fn sample() -> Vec<Employee> {
        vec![
            employee(1, "Ada", "Lovelace", "Engineering", "Software Engineer"),
            employee(2, "Mary", "Seacole", "Sales", "Account Executive"),
            employee(3, "Alan", "Turing", "Engineering", "Data Scientist"),
        ]
    }

    #[test]
    fn empty_search_and_any_department_returns_everything() {
        let all = sample();
        assert_eq!(filter_employees(&all, "Any", ""), all);
    }

    #[test]
    fn department_filter_narrows() {
        let filtered = filter_employees(&sample(), "Engineering", "");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|e| e.department == "Engineering"));
    }

    #[test]
    fn search_matches_name_department_and_title() {
        assert_eq!(filter_employees(&sample(), "Any", "ada").len(), 1);
        assert_eq!(filter_employees(&sample(), "Any", "sales").len(), 1);
        assert_eq!(filter_employees(&sample(), "Any", "scientist").len(), 1);
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        assert_eq!(filter_employees(&sample(), "Any", "  TURING ").len(), 1);
    }

    #[test]
    fn filters_compose() {
        // "a" matches all three by name, but the department narrows to two.
        assert_eq!(filter_employees(&sample(), "Engineering", "a").len(), 2);
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(filter_employees(&sample(), "Any", "zzz").is_empty());
    }
}
