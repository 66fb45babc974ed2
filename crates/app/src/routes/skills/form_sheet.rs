use dioxus::prelude::*;
use shared_types::SkillRequest;
use shared_ui::components::{
    Form, Input, Separator, Sheet, SheetClose, SheetContent, SheetDescription, SheetFooter,
    SheetHeader, SheetSide, SheetTitle,
};
use shared_ui::{use_toast, ToastOptions};

/// Create form for skills, rendered inside a Sheet.
#[component]
pub fn SkillFormSheet(
    open: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let toast = use_toast();

    let mut preferred_label = use_signal(String::new);
    let mut skill_type = use_signal(String::new);
    let mut reuse_level = use_signal(String::new);
    let mut alt_labels = use_signal(String::new);
    let mut in_flight = use_signal(|| false);

    let mut was_open = use_signal(|| false);
    use_effect(move || {
        let opening = open && !*was_open.peek();
        was_open.set(open);
        if opening {
            preferred_label.set(String::new());
            skill_type.set(String::new());
            reuse_level.set(String::new());
            alt_labels.set(String::new());
        }
    });

    let handle_save = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        if preferred_label.read().trim().is_empty() {
            toast.error("Label is required.".to_string(), ToastOptions::new());
            return;
        }

        let opt = |s: &Signal<String>| {
            let v = s.read().trim().to_string();
            if v.is_empty() {
                None
            } else {
                Some(v)
            }
        };
        let request = SkillRequest {
            preferred_label: preferred_label.read().trim().to_string(),
            skill_type: opt(&skill_type),
            reuse_level: opt(&reuse_level),
            alt_labels: opt(&alt_labels),
        };

        spawn(async move {
            in_flight.set(true);
            match server::api::create_skill(request).await {
                Ok(_) => {
                    on_saved.call(());
                    on_close.call(());
                    toast.success("Skill created successfully".to_string(), ToastOptions::new());
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

    rsx! {
        Sheet {
            open,
            on_close: move |_| on_close.call(()),
            side: SheetSide::Right,
            SheetContent {
                SheetHeader {
                    SheetTitle { "New Skill" }
                    SheetDescription { "Add a skill to the taxonomy." }
                    SheetClose { on_close: move |_| on_close.call(()) }
                }

                Form {
                    onsubmit: handle_save,

                    div {
                        class: "sheet-form",

                        Input {
                            label: "Preferred Label *",
                            value: preferred_label.read().clone(),
                            on_input: move |e: FormEvent| preferred_label.set(e.value()),
                            placeholder: "e.g., Stakeholder Management",
                        }

                        Input {
                            label: "Skill Type",
                            value: skill_type.read().clone(),
                            on_input: move |e: FormEvent| skill_type.set(e.value()),
                            placeholder: "e.g., skill/competence",
                        }

                        Input {
                            label: "Reuse Level",
                            value: reuse_level.read().clone(),
                            on_input: move |e: FormEvent| reuse_level.set(e.value()),
                            placeholder: "e.g., cross-sector",
                        }

                        Input {
                            label: "Alt Labels",
                            value: alt_labels.read().clone(),
                            on_input: move |e: FormEvent| alt_labels.set(e.value()),
                            placeholder: "Comma-separated alternates",
                        }
                    }

                    Separator {}

                    SheetFooter {
                        div {
                            class: "sheet-footer-actions",
                            SheetClose { on_close: move |_| on_close.call(()) }
                            button {
                                class: "button",
                                "data-style": "primary",
                                r#type: "submit",
                                disabled: *in_flight.read(),
                                if *in_flight.read() { "Saving..." } else { "Create Skill" }
                            }
                        }
                    }
                }
            }
        }
    }
}
