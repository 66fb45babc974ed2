mod feedback_dialog;

pub use feedback_dialog::FeedbackDialog;
