//! Analytics export download.
//!
//! A raw axum route rather than a server function: the response is a CSV
//! attachment, not JSON. The `excel` format falls back to CSV — the export
//! always succeeds with a spreadsheet-importable payload.

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use shared_types::{AppError, Employee, Feedback, Role, Training};
use sqlx::{Pool, Postgres};

use crate::auth::{cookies, jwt};
use crate::db::AppState;
use crate::error_convert::SqlxErrorExt;

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "csv".to_string()
}

/// Build the export router, merged into the main server router at startup.
pub fn export_router(pool: Pool<Postgres>) -> Router {
    Router::new()
        .route("/api/analytics/export", get(export_handler))
        .with_state(AppState { pool })
}

async fn export_handler(
    State(pool): State<Pool<Postgres>>,
    headers: HeaderMap,
    Query(params): Query<ExportParams>,
) -> Response {
    if !crate::config::feature_flags().export {
        return AppError::not_found("Export is disabled").into_response();
    }

    // The download is navigated to directly by the browser, so the session
    // is validated here rather than by a server fn guard.
    let claims = match cookies::extract_session_token(&headers)
        .and_then(|t| jwt::validate_token(&t).ok())
    {
        Some(claims) => claims,
        None => return AppError::unauthorized("Authentication required").into_response(),
    };
    let role = Role::from_str_or_default(&claims.role);
    if !matches!(role, Role::HrAdmin | Role::Manager) {
        return AppError::forbidden("Insufficient role for export").into_response();
    }

    if params.format == "excel" {
        tracing::debug!("excel export requested; serving CSV fallback");
    }

    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, first_name, last_name, email, hire_date, department, job_title, details, manager_id
         FROM employee ORDER BY id",
    )
    .fetch_all(&pool)
    .await;
    let trainings = sqlx::query_as::<_, Training>(
        "SELECT id, title, category, description, start_date, end_date FROM training ORDER BY id",
    )
    .fetch_all(&pool)
    .await;
    let feedback = sqlx::query_as::<_, Feedback>(
        "SELECT id, employee_id, feedback_date, sentiment_score, comments FROM feedback ORDER BY id",
    )
    .fetch_all(&pool)
    .await;

    let (employees, trainings, feedback) = match (employees, trainings, feedback) {
        (Ok(e), Ok(t), Ok(f)) => (e, t, f),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            return e.into_app_error().into_response()
        }
    };

    let csv = build_export_csv(&employees, &trainings, &feedback);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=analytics_export.csv",
            ),
        ],
        csv,
    )
        .into_response()
}

/// Assemble the sectioned CSV payload: EMPLOYEES, TRAININGS, FEEDBACK blocks,
/// each with a header row, separated by blank lines.
pub fn build_export_csv(
    employees: &[Employee],
    trainings: &[Training],
    feedback: &[Feedback],
) -> String {
    let mut out = String::new();

    out.push_str("EMPLOYEES\n");
    push_row(
        &mut out,
        &[
            "id",
            "first_name",
            "last_name",
            "email",
            "hire_date",
            "department",
            "job_title",
            "details",
            "manager_id",
        ],
    );
    for e in employees {
        push_row(
            &mut out,
            &[
                &e.id.to_string(),
                &e.first_name,
                &e.last_name,
                &e.email,
                &e.hire_date.to_string(),
                &e.department,
                &e.job_title,
                &e.details,
                &e.manager_id.map(|m| m.to_string()).unwrap_or_default(),
            ],
        );
    }

    out.push('\n');
    out.push_str("TRAININGS\n");
    push_row(
        &mut out,
        &["id", "title", "category", "description", "start_date", "end_date"],
    );
    for t in trainings {
        push_row(
            &mut out,
            &[
                &t.id.to_string(),
                &t.title,
                &t.category,
                &t.description,
                &t.start_date.to_string(),
                &t.end_date.to_string(),
            ],
        );
    }

    out.push('\n');
    out.push_str("FEEDBACK\n");
    push_row(
        &mut out,
        &["id", "employee_id", "feedback_date", "sentiment_score", "comments"],
    );
    for f in feedback {
        push_row(
            &mut out,
            &[
                &f.id.to_string(),
                &f.employee_id.to_string(),
                &f.feedback_date.to_string(),
                &f.sentiment_score.map(|s| s.to_string()).unwrap_or_default(),
                f.comments.as_deref().unwrap_or(""),
            ],
        );
    }

    out
}

fn push_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(field));
    }
    out.push('\n');
}

/// Quote a field when it contains a delimiter, quote, or newline.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_employee() -> Employee {
        Employee {
            id: 1,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            hire_date: date(2020, 1, 2),
            department: "Engineering".to_string(),
            job_title: "Engineer, Senior".to_string(),
            details: "Says \"hello\"".to_string(),
            manager_id: None,
        }
    }

    #[test]
    fn sections_appear_in_order() {
        let csv = build_export_csv(&[], &[], &[]);
        let emp = csv.find("EMPLOYEES").unwrap();
        let trn = csv.find("TRAININGS").unwrap();
        let fb = csv.find("FEEDBACK").unwrap();
        assert!(emp < trn && trn < fb);
    }

    #[test]
    fn commas_and_quotes_are_escaped() {
        let csv = build_export_csv(&[sample_employee()], &[], &[]);
        assert!(csv.contains("\"Engineer, Senior\""));
        assert!(csv.contains("\"Says \"\"hello\"\"\""));
    }

    #[test]
    fn empty_optionals_render_as_empty_fields() {
        let fb = Feedback {
            id: 3,
            employee_id: 1,
            feedback_date: date(2026, 2, 1),
            sentiment_score: None,
            comments: None,
        };
        let csv = build_export_csv(&[], &[], &[fb]);
        assert!(csv.contains("3,1,2026-02-01,,\n"));
    }

    #[test]
    fn plain_fields_are_not_quoted() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("with space"), "with space");
    }
}
