use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Form, Input};
use std::collections::HashMap;

use crate::auth::use_auth;
use crate::routes::Route;

/// Login page with email/password credentials.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Redirect to dashboard if already authenticated
    if auth.is_authenticated() {
        navigator().push(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::login(email(), password()).await {
            Ok(user) => {
                auth.set_user(user);
                navigator().push(Route::Dashboard {});
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        div { class: "login-page",
            Card {
                CardHeader {
                    CardTitle { "Meridian HR" }
                    CardDescription { "Sign in with your company account." }
                }
                CardContent {
                    Form {
                        onsubmit: handle_login,

                        Input {
                            label: "Email",
                            input_type: "email",
                            value: email.read().clone(),
                            placeholder: "you@company.com",
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        if let Some(msg) = field_errors.read().get("email") {
                            p { class: "field-error", "{msg}" }
                        }

                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password.read().clone(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        if let Some(msg) = field_errors.read().get("password") {
                            p { class: "field-error", "{msg}" }
                        }

                        if let Some(msg) = error_msg.read().as_ref() {
                            p { class: "form-error", "{msg}" }
                        }

                        button {
                            class: "button",
                            "data-style": "primary",
                            r#type: "submit",
                            disabled: *loading.read(),
                            if *loading.read() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
