use dioxus::prelude::*;
use shared_types::{Training, TrainingRequest};
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

/// Unified create/edit form for trainings, rendered inside a Sheet.
#[component]
pub fn TrainingFormSheet(
    mode: FormMode,
    initial: Option<Training>,
    open: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let toast = use_toast();

    let mut title = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);

    // Hydrate on every open transition so a cancelled edit never leaks into
    // the next session of the form.
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
                title.set(data.title.clone());
                category.set(data.category.clone());
                description.set(data.description.clone());
                start_date.set(data.start_date.to_string());
                end_date.set(data.end_date.to_string());
            }
            None => {
                title.set(String::new());
                category.set(String::new());
                description.set(String::new());
                start_date.set(String::new());
                end_date.set(String::new());
            }
        }
    });

    // --- Dirty state ---
    let mut initial_snapshot = use_signal(String::new);

    use_effect(move || {
        if open {
            initial_snapshot.set(snapshot(&title, &category, &description, &start_date, &end_date));
        }
    });

    let is_dirty = move || {
        *initial_snapshot.read()
            != snapshot(&title, &category, &description, &start_date, &end_date)
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
    let mut delete_confirm = use_signal(|| false);
    let initial_for_save = initial.clone();
    let initial_for_delete = initial.clone();

    let handle_save = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }

        for (value, label) in [
            (&title, "Title"),
            (&category, "Category"),
            (&start_date, "Start date"),
            (&end_date, "End date"),
        ] {
            if value.read().trim().is_empty() {
                toast.error(format!("{label} is required."), ToastOptions::new());
                return;
            }
        }

        let request = TrainingRequest {
            title: title.read().trim().to_string(),
            category: category.read().trim().to_string(),
            description: description.read().clone(),
            start_date: start_date.read().clone(),
            end_date: end_date.read().clone(),
        };
        let id = initial_for_save.as_ref().map(|t| t.id);

        spawn(async move {
            in_flight.set(true);
            let result = match (mode, id) {
                (FormMode::Edit, Some(id)) => {
                    server::api::update_training(id, request).await.map(|_| ())
                }
                _ => server::api::create_training(request).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    on_saved.call(());
                    on_close.call(());
                    let verb = if mode == FormMode::Create { "created" } else { "updated" };
                    toast.success(format!("Training {verb} successfully"), ToastOptions::new());
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

    let handle_delete = move |_: MouseEvent| {
        let Some(id) = initial_for_delete.as_ref().map(|t| t.id) else {
            return;
        };
        spawn(async move {
            in_flight.set(true);
            match server::api::delete_training(id).await {
                Ok(()) => {
                    delete_confirm.set(false);
                    on_saved.call(());
                    on_close.call(());
                    toast.success("Training deleted successfully".to_string(), ToastOptions::new());
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

    let sheet_title = match mode {
        FormMode::Create => "New Training",
        FormMode::Edit => "Edit Training",
    };
    let description_text = match mode {
        FormMode::Create => "Schedule a new training.",
        FormMode::Edit => "Modify or delete this training.",
    };
    let submit_label = match mode {
        FormMode::Create => "Create Training",
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
                    SheetDescription { "{description_text}" }
                    SheetClose { on_close: try_close }
                }

                Form {
                    onsubmit: handle_save,

                    div {
                        class: "sheet-form",

                        Input {
                            label: "Title *",
                            value: title.read().clone(),
                            on_input: move |e: FormEvent| title.set(e.value()),
                        }

                        Input {
                            label: "Category *",
                            value: category.read().clone(),
                            on_input: move |e: FormEvent| category.set(e.value()),
                            placeholder: "e.g., IT, Soft Skills",
                        }

                        Input {
                            label: "Start Date *",
                            input_type: "date",
                            value: start_date.read().clone(),
                            on_input: move |e: FormEvent| start_date.set(e.value()),
                        }

                        Input {
                            label: "End Date *",
                            input_type: "date",
                            value: end_date.read().clone(),
                            on_input: move |e: FormEvent| end_date.set(e.value()),
                        }

                        Textarea {
                            label: "Description",
                            value: description.read().clone(),
                            on_input: move |e: FormEvent| description.set(e.value()),
                        }
                    }

                    Separator {}

                    SheetFooter {
                        div {
                            class: "sheet-footer-actions",
                            if mode == FormMode::Edit {
                                button {
                                    class: "button",
                                    "data-style": "destructive",
                                    r#type: "button",
                                    disabled: *in_flight.read(),
                                    onclick: move |_| delete_confirm.set(true),
                                    "Delete"
                                }
                            }
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

        AlertDialogRoot {
            open: *delete_confirm.read(),
            on_open_change: move |open: bool| delete_confirm.set(open),
            AlertDialogContent {
                AlertDialogTitle { "Delete Training" }
                AlertDialogDescription {
                    "Are you sure you want to delete this training? This action cannot be undone."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction {
                        on_click: handle_delete,
                        if *in_flight.read() { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}

fn snapshot(
    title: &Signal<String>,
    category: &Signal<String>,
    description: &Signal<String>,
    start_date: &Signal<String>,
    end_date: &Signal<String>,
) -> String {
    serde_json::json!({
        "title": title.read().clone(),
        "category": category.read().clone(),
        "description": description.read().clone(),
        "start_date": start_date.read().clone(),
        "end_date": end_date.read().clone(),
    })
    .to_string()
}
