use dioxus::prelude::*;
use shared_types::{AppError, FeedbackRequest, SentimentResult};
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Dialog, DialogClose, DialogDescription,
    DialogTitle, Input, Textarea,
};
use shared_ui::{use_toast, ToastOptions};

/// Two-phase feedback submission.
///
/// Phase one scores the comment and shows the result for confirmation;
/// nothing is persisted. Only the explicit confirm in phase two writes the
/// feedback record, with the score the user saw attached.
#[component]
pub fn FeedbackDialog(
    employee_id: i64,
    open: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let toast = use_toast();

    let mut comment = use_signal(String::new);
    let mut feedback_date = use_signal(String::new);
    let mut scored = use_signal(|| Option::<SentimentResult>::None);
    let mut in_flight = use_signal(|| false);

    // Reset the flow each time the dialog opens.
    let mut was_open = use_signal(|| false);
    use_effect(move || {
        let opening = open && !*was_open.peek();
        was_open.set(open);
        if opening {
            comment.set(String::new());
            feedback_date.set(String::new());
            scored.set(None);
        }
    });

    let handle_analyze = move |_| {
        if *in_flight.read() {
            return;
        }
        if comment.read().trim().is_empty() {
            toast.error("Comment is required.".to_string(), ToastOptions::new());
            return;
        }
        let text = comment.read().clone();
        spawn(async move {
            in_flight.set(true);
            match server::api::score_sentiment(text).await {
                Ok(result) => scored.set(Some(result)),
                Err(e) => toast.error(
                    AppError::friendly_message(&e.to_string()),
                    ToastOptions::new(),
                ),
            }
            in_flight.set(false);
        });
    };

    let handle_submit = move |_| {
        if *in_flight.read() {
            return;
        }
        let Some(result) = scored.read().clone() else {
            return;
        };
        if feedback_date.read().trim().is_empty() {
            toast.error("Feedback date is required.".to_string(), ToastOptions::new());
            return;
        }
        let request = FeedbackRequest {
            employee_id,
            feedback_date: feedback_date.read().clone(),
            sentiment_score: Some(result.sentiment_score),
            comments: Some(comment.read().clone()),
        };
        spawn(async move {
            in_flight.set(true);
            match server::api::create_feedback(request).await {
                Ok(()) => {
                    on_saved.call(());
                    on_close.call(());
                    toast.success("Feedback submitted successfully".to_string(), ToastOptions::new());
                }
                Err(e) => toast.error(
                    AppError::friendly_message(&e.to_string()),
                    ToastOptions::new(),
                ),
            }
            in_flight.set(false);
        });
    };

    let label_variant = |label: &str| match label {
        "Positive" => BadgeVariant::Primary,
        "Negative" => BadgeVariant::Destructive,
        _ => BadgeVariant::Outline,
    };

    rsx! {
        Dialog {
            open,
            on_close: move |_| on_close.call(()),
            DialogClose { on_close: move |_| on_close.call(()) }
            DialogTitle { "Give Feedback" }
            DialogDescription {
                "Write a comment, review its sentiment score, then confirm to submit."
            }

            div { class: "feedback-form",
                Input {
                    label: "Date",
                    input_type: "date",
                    value: feedback_date.read().clone(),
                    on_input: move |e: FormEvent| feedback_date.set(e.value()),
                }

                Textarea {
                    label: "Comment",
                    value: comment.read().clone(),
                    placeholder: "How did this employee perform?",
                    on_input: move |e: FormEvent| {
                        comment.set(e.value());
                        // Edits invalidate a previously confirmed score.
                        scored.set(None);
                    },
                }

                match scored.read().as_ref() {
                    Some(result) => rsx! {
                        div { class: "sentiment-result",
                            span { "Sentiment: " }
                            Badge {
                                variant: label_variant(&result.sentiment_label),
                                "{result.sentiment_label}"
                            }
                            span { class: "sentiment-score",
                                "{result.sentiment_score:.2} ({result.sentiment_score_1_5}/5)"
                            }
                        }
                        div { class: "overlay-actions",
                            Button {
                                variant: ButtonVariant::Secondary,
                                disabled: *in_flight.read(),
                                onclick: handle_analyze,
                                "Re-analyze"
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: *in_flight.read(),
                                onclick: handle_submit,
                                if *in_flight.read() { "Submitting..." } else { "Confirm & Submit" }
                            }
                        }
                    },
                    None => rsx! {
                        div { class: "overlay-actions",
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: *in_flight.read(),
                                onclick: handle_analyze,
                                if *in_flight.read() { "Analyzing..." } else { "Analyze Sentiment" }
                            }
                        }
                    },
                }
            }
        }
    }
}
