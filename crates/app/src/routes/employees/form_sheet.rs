use dioxus::prelude::*;
use shared_types::{Employee, EmployeeRequest};
use shared_ui::components::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Form, Input, Separator, Sheet,
    SheetClose, SheetContent, SheetDescription, SheetFooter, SheetHeader, SheetSide, SheetTitle,
    Textarea,
};
use shared_ui::{use_toast, ToastOptions};

/// Controls whether the form is in Create or Edit mode.
#[derive(Clone, Copy, PartialEq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Unified create/edit form for employees, rendered inside a Sheet.
#[component]
pub fn EmployeeFormSheet(
    mode: FormMode,
    initial: Option<Employee>,
    open: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let toast = use_toast();

    // --- Form field signals ---
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut hire_date = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut job_title = use_signal(String::new);
    let mut details = use_signal(String::new);

    // --- Hydration ---
    // Runs on every open transition so Cancel-then-reopen always starts from
    // the last fetched entity, never from discarded edits.
    let initial_for_hydration = initial.clone();
    let mut was_open = use_signal(|| false);

    use_effect(move || {
        let opening = open && !*was_open.peek();
        was_open.set(open);
        if !opening {
            return;
        }
        match &initial_for_hydration {
            Some(data) => {
                first_name.set(data.first_name.clone());
                last_name.set(data.last_name.clone());
                email.set(data.email.clone());
                hire_date.set(data.hire_date.to_string());
                department.set(data.department.clone());
                job_title.set(data.job_title.clone());
                details.set(data.details.clone());
            }
            None => {
                first_name.set(String::new());
                last_name.set(String::new());
                email.set(String::new());
                hire_date.set(String::new());
                department.set(String::new());
                job_title.set(String::new());
                details.set(String::new());
            }
        }
    });

    // --- Dirty state ---
    let mut initial_snapshot = use_signal(String::new);

    use_effect(move || {
        if open {
            initial_snapshot.set(snapshot(
                &first_name,
                &last_name,
                &email,
                &hire_date,
                &department,
                &job_title,
                &details,
            ));
        }
    });

    let is_dirty = move || {
        let current = snapshot(
            &first_name,
            &last_name,
            &email,
            &hire_date,
            &department,
            &job_title,
            &details,
        );
        *initial_snapshot.read() != current
    };

    let mut show_discard = use_signal(|| false);

    let try_close = move |_| {
        if is_dirty() {
            show_discard.set(true);
        } else {
            on_close.call(());
        }
    };

    // --- Submit ---
    let mut in_flight = use_signal(|| false);
    let initial_for_save = initial.clone();

    let handle_save = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }

        for (value, label) in [
            (&first_name, "First name"),
            (&last_name, "Last name"),
            (&email, "Email"),
            (&hire_date, "Hire date"),
            (&department, "Department"),
            (&job_title, "Job title"),
        ] {
            if value.read().trim().is_empty() {
                toast.error(format!("{label} is required."), ToastOptions::new());
                return;
            }
        }

        let request = EmployeeRequest {
            first_name: first_name.read().trim().to_string(),
            last_name: last_name.read().trim().to_string(),
            email: email.read().trim().to_string(),
            hire_date: hire_date.read().clone(),
            department: department.read().trim().to_string(),
            job_title: job_title.read().trim().to_string(),
            details: details.read().clone(),
        };
        let id = initial_for_save.as_ref().map(|e| e.id);

        spawn(async move {
            in_flight.set(true);
            let result = match (mode, id) {
                (FormMode::Edit, Some(id)) => {
                    server::api::update_employee(id, request).await.map(|_| ())
                }
                _ => server::api::create_employee(request).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    on_saved.call(());
                    on_close.call(());
                    let verb = if mode == FormMode::Create { "created" } else { "updated" };
                    toast.success(format!("Employee {verb} successfully"), ToastOptions::new());
                }
                Err(e) => {
                    toast.error(
                        shared_types::AppError::friendly_message(&e.to_string()),
                        ToastOptions::new(),
                    );
                }
            }
            in_flight.set(false);
        });
    };

    // --- Render ---
    let sheet_title = match mode {
        FormMode::Create => "Add Employee",
        FormMode::Edit => "Edit Employee",
    };
    let description = match mode {
        FormMode::Create => "Create a new employee record. A login account with the default password is provisioned.",
        FormMode::Edit => "Modify the employee record.",
    };
    let submit_label = match mode {
        FormMode::Create => "Create Employee",
        FormMode::Edit => "Save Changes",
    };

    rsx! {
        Sheet {
            open,
            on_close: try_close,
            side: SheetSide::Right,
            SheetContent {
                SheetHeader {
                    SheetTitle { "{sheet_title}" }
                    SheetDescription { "{description}" }
                    SheetClose { on_close: try_close }
                }

                Form {
                    onsubmit: handle_save,

                    div {
                        class: "sheet-form",

                        Input {
                            label: "First Name *",
                            value: first_name.read().clone(),
                            on_input: move |e: FormEvent| first_name.set(e.value()),
                        }

                        Input {
                            label: "Last Name *",
                            value: last_name.read().clone(),
                            on_input: move |e: FormEvent| last_name.set(e.value()),
                        }

                        Input {
                            label: "Email *",
                            input_type: "email",
                            value: email.read().clone(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                            placeholder: "e.g., jane@company.com",
                        }

                        Input {
                            label: "Hire Date *",
                            input_type: "date",
                            value: hire_date.read().clone(),
                            on_input: move |e: FormEvent| hire_date.set(e.value()),
                        }

                        Input {
                            label: "Department *",
                            value: department.read().clone(),
                            on_input: move |e: FormEvent| department.set(e.value()),
                            placeholder: "e.g., Engineering",
                        }

                        Input {
                            label: "Job Title *",
                            value: job_title.read().clone(),
                            on_input: move |e: FormEvent| job_title.set(e.value()),
                        }

                        Textarea {
                            label: "Bio",
                            value: details.read().clone(),
                            on_input: move |e: FormEvent| details.set(e.value()),
                            placeholder: "A few sentences about this employee",
                        }
                    }

                    Separator {}

                    SheetFooter {
                        div {
                            class: "sheet-footer-actions",
                            SheetClose { on_close: try_close }
                            button {
                                class: "button",
                                "data-style": "primary",
                                r#type: "submit",
                                disabled: *in_flight.read(),
                                if *in_flight.read() { "Saving..." } else { "{submit_label}" }
                            }
                        }
                    }
                }
            }
        }

        AlertDialogRoot {
            open: *show_discard.read(),
            on_open_change: move |open: bool| show_discard.set(open),
            AlertDialogContent {
                AlertDialogTitle { "Discard changes?" }
                AlertDialogDescription {
                    "You have unsaved changes. Are you sure you want to close without saving?"
                }
                AlertDialogActions {
                    AlertDialogCancel { "Keep Editing" }
                    AlertDialogAction {
                        on_click: move |_| {
                            show_discard.set(false);
                            on_close.call(());
                        },
                        "Discard"
                    }
                }
            }
        }
    }
}

fn snapshot(
    first_name: &Signal<String>,
    last_name: &Signal<String>,
    email: &Signal<String>,
    hire_date: &Signal<String>,
    department: &Signal<String>,
    job_title: &Signal<String>,
    details: &Signal<String>,
) -> String {
    serde_json::json!({
        "first_name": first_name.read().clone(),
        "last_name": last_name.read().clone(),
        "email": email.read().clone(),
        "hire_date": hire_date.read().clone(),
        "department": department.read().clone(),
        "job_title": job_title.read().clone(),
        "details": details.read().clone(),
    })
    .to_string()
}
