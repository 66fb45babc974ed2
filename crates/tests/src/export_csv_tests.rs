use chrono::NaiveDate;
use server::export::build_export_csv;
use shared_types::{Employee, Feedback, Training};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn employees() -> Vec<Employee> {
    vec![Employee {
        id: 1,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        hire_date: date(2021, 3, 15),
        department: "Engineering".to_string(),
        job_title: "Engineer".to_string(),
        details: "Likes\nnewlines".to_string(),
        manager_id: Some(2),
    }]
}

fn trainings() -> Vec<Training> {
    vec![Training {
        id: 9,
        title: "Rust, Advanced".to_string(),
        category: "IT".to_string(),
        description: String::new(),
        start_date: date(2026, 1, 1),
        end_date: date(2026, 2, 1),
    }]
}

fn feedback() -> Vec<Feedback> {
    vec![Feedback {
        id: 4,
        employee_id: 1,
        feedback_date: date(2026, 3, 1),
        sentiment_score: Some(0.5),
        comments: Some("solid".to_string()),
    }]
}

#[test]
fn export_contains_all_three_sections_with_headers() {
    let csv = build_export_csv(&employees(), &trainings(), &feedback());
    assert!(csv.contains("EMPLOYEES\nid,first_name"));
    assert!(csv.contains("TRAININGS\nid,title"));
    assert!(csv.contains("FEEDBACK\nid,employee_id"));
}

#[test]
fn rows_carry_the_record_values() {
    let csv = build_export_csv(&employees(), &trainings(), &feedback());
    assert!(csv.contains("ada@example.com"));
    assert!(csv.contains("2021-03-15"));
    assert!(csv.contains("4,1,2026-03-01,0.5,solid"));
}

#[test]
fn titles_with_commas_are_quoted() {
    let csv = build_export_csv(&[], &trainings(), &[]);
    assert!(csv.contains("\"Rust, Advanced\""));
}

#[test]
fn newlines_in_fields_are_quoted() {
    let csv = build_export_csv(&employees(), &[], &[]);
    assert!(csv.contains("\"Likes\nnewlines\""));
}

#[test]
fn empty_dataset_still_produces_section_scaffold() {
    let csv = build_export_csv(&[], &[], &[]);
    let emp = csv.find("EMPLOYEES").unwrap();
    let trn = csv.find("TRAININGS").unwrap();
    let fb = csv.find("FEEDBACK").unwrap();
    assert!(emp < trn && trn < fb);
}
