use chrono::NaiveDate;
use shared_types::{Training, TrainingStatus};

fn training(end: NaiveDate) -> Training {
    Training {
        id: 1,
        title: "Cybersecurity".to_string(),
        category: "IT".to_string(),
        description: String::new(),
        start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        end_date: end,
    }
}

#[test]
fn status_boundary_is_inclusive_of_today() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

    let ends_today = training(today);
    assert_eq!(ends_today.status(today), TrainingStatus::Ongoing);

    let ended_yesterday = training(today.pred_opt().unwrap());
    assert_eq!(ended_yesterday.status(today), TrainingStatus::Finished);

    let ends_tomorrow = training(today.succ_opt().unwrap());
    assert_eq!(ends_tomorrow.status(today), TrainingStatus::Ongoing);
}

#[test]
fn status_labels_match_the_ui_wording() {
    assert_eq!(TrainingStatus::Ongoing.label(), "Ongoing");
    assert_eq!(TrainingStatus::Finished.label(), "Finished");
}
