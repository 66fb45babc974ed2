use dioxus::prelude::*;
use shared_types::{
    AnalyticsOverview, AuthUser, Employee, EmployeeProfile, EmployeeRequest, EmployeeSearchRow,
    FeatureFlags, Feedback, FeedbackAnalytics, FeedbackRequest, SentimentResult, Skill,
    SkillGap, SkillRequest, SkillVote, SuggestedSkill, TeamMemberAnalytics, Training,
    TrainingNeedRequest, TrainingRequest, TrainingsAnalytics,
};

#[cfg(feature = "server")]
use shared_types::{AppError, LoginRequest, MonthlyCount, MonthlyFeedbackPoint, Role};

#[cfg(feature = "server")]
use crate::auth::{require_auth, require_role};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, SqlxErrorExt, ValidateRequest};

/// Password assigned to accounts provisioned for new employees. Users are
/// expected to change it after their first login.
#[cfg(feature = "server")]
const DEFAULT_EMPLOYEE_PASSWORD: &str = "1234";

// ── Helpers ────────────────────────────────────────────

/// Parse an optional YYYY-MM-DD query parameter.
#[cfg(feature = "server")]
fn parse_date_param(
    name: &str,
    value: &Option<String>,
) -> Result<Option<chrono::NaiveDate>, ServerFnError> {
    match value.as_deref().filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => chrono::NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                AppError::bad_request(format!("{name} must be YYYY-MM-DD")).into_server_fn_error()
            }),
    }
}

/// Parse a required YYYY-MM-DD field.
#[cfg(feature = "server")]
fn parse_date_field(name: &str, value: &str) -> Result<chrono::NaiveDate, ServerFnError> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::bad_request(format!("{name} must be YYYY-MM-DD")).into_server_fn_error()
    })
}

// ── Feature flags ──────────────────────────────────────

/// Get the current feature flags. No auth required — flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

// ── Auth ───────────────────────────────────────────────

#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, jwt, password as pw};

    let req = LoginRequest {
        email: email.clone(),
        password: password.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    let row = sqlx::query_as::<_, (i64, String, String, String, Option<i64>)>(
        "SELECT id, email, password_hash, role, employee_id FROM users WHERE email = $1",
    )
    .bind(&email)
    .fetch_optional(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?
    .ok_or_else(|| AppError::unauthorized("Invalid email or password").into_server_fn_error())?;

    let (user_id, user_email, password_hash, role, employee_id) = row;

    let valid = pw::verify_password(&password, &password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    if !valid {
        return Err(AppError::unauthorized("Invalid email or password").into_server_fn_error());
    }

    let token = jwt::create_token(user_id, &user_email, &role, employee_id)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    // Schedule the cookie to be set by the middleware
    cookies::schedule_session_cookie(&token);

    tracing::info!(user_id, role, "user logged in");

    Ok(AuthUser {
        id: user_id,
        email: user_email,
        role,
        employee_id,
    })
}

/// Get the current authenticated user. Returns None if not authenticated.
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    match require_auth() {
        Ok(claims) => Ok(Some(AuthUser {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
            employee_id: claims.employee_id,
        })),
        Err(_) => Ok(None),
    }
}

#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    crate::auth::cookies::schedule_clear_cookie();
    Ok(())
}

// ── Employees ──────────────────────────────────────────

/// List all employees. Trainers are denied — they have no business browsing
/// the employee directory.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_employees() -> Result<Vec<Employee>, ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Manager, Role::Employee])?;
    let db = get_db().await;
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, first_name, last_name, email, hire_date, department, job_title, details, manager_id
         FROM employee ORDER BY id",
    )
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(employees)
}

/// Get a single employee with their skills and ongoing training titles.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_employee(employee_id: i64) -> Result<EmployeeProfile, ServerFnError> {
    require_auth()?;
    let db = get_db().await;

    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, first_name, last_name, email, hire_date, department, job_title, details, manager_id
         FROM employee WHERE id = $1",
    )
    .bind(employee_id)
    .fetch_optional(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?
    .ok_or_else(|| {
        AppError::not_found(format!("Employee with id {employee_id} not found"))
            .into_server_fn_error()
    })?;

    let skills = sqlx::query_as::<_, shared_types::EmployeeSkill>(
        "SELECT s.id, s.preferred_label, es.proficiency_level
         FROM employee_skill es
         JOIN skill s ON es.skill_id = s.id
         WHERE es.employee_id = $1
         ORDER BY es.proficiency_level DESC, s.preferred_label",
    )
    .bind(employee_id)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let all_trainings = sqlx::query_as::<_, Training>(
        "SELECT t.id, t.title, t.category, t.description, t.start_date, t.end_date
         FROM training t
         JOIN employee_training et ON t.id = et.training_id
         WHERE et.employee_id = $1",
    )
    .bind(employee_id)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let today = chrono::Utc::now().date_naive();
    let trainings = all_trainings
        .into_iter()
        .filter(|t| t.end_date >= today)
        .map(|t| format!("{} ({})", t.title, t.category))
        .collect();

    Ok(EmployeeProfile {
        employee,
        skills,
        trainings,
    })
}

/// Create a new employee record, provisioning a login account with the
/// default password alongside it.
#[server]
pub async fn create_employee(request: EmployeeRequest) -> Result<i64, ServerFnError> {
    require_role(&[Role::HrAdmin])?;
    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;
    let hire_date = parse_date_field("hire_date", &request.hire_date)?;

    let db = get_db().await;
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO employee (first_name, last_name, email, hire_date, department, job_title, details)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING id",
    )
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(&request.email)
    .bind(hire_date)
    .bind(&request.department)
    .bind(&request.job_title)
    .bind(&request.details)
    .fetch_one(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let password_hash = crate::auth::password::hash_password(DEFAULT_EMPLOYEE_PASSWORD)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    sqlx::query(
        "INSERT INTO users (email, password_hash, role, employee_id)
         VALUES ($1, $2, 'employee', $3)
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(&request.email)
    .bind(&password_hash)
    .bind(id)
    .execute(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    tracing::info!(employee_id = id, "employee created");
    Ok(id)
}

/// Update an existing employee record by ID. Overwrites every column.
#[server]
pub async fn update_employee(
    employee_id: i64,
    request: EmployeeRequest,
) -> Result<(), ServerFnError> {
    require_role(&[Role::HrAdmin])?;
    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;
    let hire_date = parse_date_field("hire_date", &request.hire_date)?;

    let db = get_db().await;
    let result = sqlx::query(
        "UPDATE employee
         SET first_name = $1, last_name = $2, email = $3, hire_date = $4,
             department = $5, job_title = $6, details = $7
         WHERE id = $8",
    )
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(&request.email)
    .bind(hire_date)
    .bind(&request.department)
    .bind(&request.job_title)
    .bind(&request.details)
    .bind(employee_id)
    .execute(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found(format!(
            "Employee with id {employee_id} not found"
        ))
        .into_server_fn_error());
    }
    Ok(())
}

/// Delete an employee by ID.
#[server]
pub async fn delete_employee(employee_id: i64) -> Result<(), ServerFnError> {
    require_role(&[Role::HrAdmin])?;
    let db = get_db().await;
    let result = sqlx::query("DELETE FROM employee WHERE id = $1")
        .bind(employee_id)
        .execute(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    if result.rows_affected() == 0 {
        return Err(AppError::not_found(format!(
            "Employee with id {employee_id} not found"
        ))
        .into_server_fn_error());
    }
    tracing::info!(employee_id, "employee deleted");
    Ok(())
}

/// Search employees by any attribute (OR semantics) and return rows with
/// aggregated training/feedback/need display strings.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn search_employees(
    name: Option<String>,
    surname: Option<String>,
    email: Option<String>,
    department: Option<String>,
    job_title: Option<String>,
) -> Result<Vec<EmployeeSearchRow>, ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Manager, Role::Employee])?;
    let db = get_db().await;

    let mut builder = sqlx::QueryBuilder::<sqlx::Postgres>::new(
        "SELECT e.id AS employee_id, e.first_name, e.last_name, e.email, e.hire_date,
                e.department, e.job_title,
                string_agg(DISTINCT t.title || ' (' || t.category || ')', ', ') AS training,
                string_agg(DISTINCT f.feedback_date::text || ' - ' ||
                           COALESCE(f.sentiment_score::text, 'n/a') || ' - ' ||
                           COALESCE(f.comments, ''), '; ') AS feedback,
                string_agg(DISTINCT t2.title || ' (' || tn.recommendation_level::text || '/5)', ', ')
                    AS training_need
         FROM employee e
         LEFT JOIN employee_training et ON e.id = et.employee_id
         LEFT JOIN training t ON et.training_id = t.id
         LEFT JOIN feedback f ON e.id = f.employee_id
         LEFT JOIN training_need tn ON e.id = tn.employee_id
         LEFT JOIN training t2 ON tn.recommended_training_id = t2.id
         WHERE 1=1",
    );

    // OR logic: if any field is provided, match any of them.
    let fields: [(&str, &Option<String>); 5] = [
        ("e.first_name", &name),
        ("e.last_name", &surname),
        ("e.email", &email),
        ("e.department", &department),
        ("e.job_title", &job_title),
    ];
    let present: Vec<(&str, &String)> = fields
        .iter()
        .filter_map(|(col, v)| v.as_ref().filter(|s| !s.is_empty()).map(|s| (*col, s)))
        .collect();

    if !present.is_empty() {
        builder.push(" AND (");
        for (i, (col, value)) in present.iter().enumerate() {
            if i > 0 {
                builder.push(" OR ");
            }
            builder.push(*col);
            builder.push(" ILIKE ");
            builder.push_bind(format!("%{value}%"));
        }
        builder.push(")");
    }
    builder.push(" GROUP BY e.id ORDER BY e.id");

    let rows = builder
        .build_query_as::<EmployeeSearchRow>()
        .fetch_all(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(rows)
}

// ── Trainings ──────────────────────────────────────────

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_trainings() -> Result<Vec<Training>, ServerFnError> {
    require_auth()?;
    let db = get_db().await;
    let trainings = sqlx::query_as::<_, Training>(
        "SELECT id, title, category, description, start_date, end_date
         FROM training ORDER BY start_date DESC",
    )
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(trainings)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_training(training_id: i64) -> Result<Training, ServerFnError> {
    require_auth()?;
    let db = get_db().await;
    sqlx::query_as::<_, Training>(
        "SELECT id, title, category, description, start_date, end_date FROM training WHERE id = $1",
    )
    .bind(training_id)
    .fetch_optional(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?
    .ok_or_else(|| {
        AppError::not_found(format!("Training with id {training_id} not found"))
            .into_server_fn_error()
    })
}

#[server]
pub async fn create_training(request: TrainingRequest) -> Result<i64, ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Trainer])?;
    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;
    let start_date = parse_date_field("start_date", &request.start_date)?;
    let end_date = parse_date_field("end_date", &request.end_date)?;

    let db = get_db().await;
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO training (title, category, description, start_date, end_date)
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(&request.title)
    .bind(&request.category)
    .bind(&request.description)
    .bind(start_date)
    .bind(end_date)
    .fetch_one(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(id)
}

#[server]
pub async fn update_training(
    training_id: i64,
    request: TrainingRequest,
) -> Result<(), ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Trainer])?;
    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;
    let start_date = parse_date_field("start_date", &request.start_date)?;
    let end_date = parse_date_field("end_date", &request.end_date)?;

    let db = get_db().await;
    let result = sqlx::query(
        "UPDATE training SET title = $1, category = $2, description = $3,
             start_date = $4, end_date = $5
         WHERE id = $6",
    )
    .bind(&request.title)
    .bind(&request.category)
    .bind(&request.description)
    .bind(start_date)
    .bind(end_date)
    .bind(training_id)
    .execute(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found(format!(
            "Training with id {training_id} not found"
        ))
        .into_server_fn_error());
    }
    Ok(())
}

#[server]
pub async fn delete_training(training_id: i64) -> Result<(), ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Trainer])?;
    let db = get_db().await;
    let result = sqlx::query("DELETE FROM training WHERE id = $1")
        .bind(training_id)
        .execute(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    if result.rows_affected() == 0 {
        return Err(AppError::not_found(format!(
            "Training with id {training_id} not found"
        ))
        .into_server_fn_error());
    }
    Ok(())
}

/// Record a training need: a manager requests a training for a report with
/// a 1-5 recommendation level.
#[server]
pub async fn request_training(request: TrainingNeedRequest) -> Result<(), ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Manager])?;
    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    sqlx::query(
        "INSERT INTO training_need (employee_id, recommended_training_id, recommendation_level)
         VALUES ($1, $2, $3)",
    )
    .bind(request.employee_id)
    .bind(request.training_id)
    .bind(request.recommendation_level)
    .execute(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(())
}

/// Assign an employee to a training.
#[server]
pub async fn assign_employee_to_training(
    employee_id: i64,
    training_id: i64,
) -> Result<(), ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Manager])?;
    let db = get_db().await;
    sqlx::query("INSERT INTO employee_training (employee_id, training_id) VALUES ($1, $2)")
        .bind(employee_id)
        .bind(training_id)
        .execute(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(())
}

/// Remove an employee from a training.
#[server]
pub async fn remove_employee_from_training(
    employee_id: i64,
    training_id: i64,
) -> Result<(), ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Manager])?;
    let db = get_db().await;
    sqlx::query("DELETE FROM employee_training WHERE employee_id = $1 AND training_id = $2")
        .bind(employee_id)
        .bind(training_id)
        .execute(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(())
}

/// Assign a trainer to a training.
#[server]
pub async fn assign_trainer_to_training(
    trainer_id: i64,
    training_id: i64,
) -> Result<(), ServerFnError> {
    require_role(&[Role::HrAdmin])?;
    let db = get_db().await;
    sqlx::query("INSERT INTO trainer_training (trainer_id, training_id) VALUES ($1, $2)")
        .bind(trainer_id)
        .bind(training_id)
        .execute(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(())
}

/// Remove a trainer from a training.
#[server]
pub async fn remove_trainer_from_training(
    trainer_id: i64,
    training_id: i64,
) -> Result<(), ServerFnError> {
    require_role(&[Role::HrAdmin])?;
    let db = get_db().await;
    sqlx::query("DELETE FROM trainer_training WHERE trainer_id = $1 AND training_id = $2")
        .bind(trainer_id)
        .bind(training_id)
        .execute(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(())
}

/// Employees assigned to a training, for the participants list.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn training_participants(training_id: i64) -> Result<Vec<Employee>, ServerFnError> {
    require_auth()?;
    let db = get_db().await;
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT e.id, e.first_name, e.last_name, e.email, e.hire_date, e.department,
                e.job_title, e.details, e.manager_id
         FROM employee e
         JOIN employee_training et ON e.id = et.employee_id
         WHERE et.training_id = $1
         ORDER BY e.last_name, e.first_name",
    )
    .bind(training_id)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(employees)
}

// ── Skills ─────────────────────────────────────────────

/// Get up to `limit` skills (default 50, max 100).
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_skills(limit: Option<i64>) -> Result<Vec<Skill>, ServerFnError> {
    require_role(&[Role::HrAdmin])?;
    let limit = limit.unwrap_or(50).clamp(1, 100);
    let db = get_db().await;
    let skills = sqlx::query_as::<_, Skill>(
        "SELECT id, preferred_label, skill_type, reuse_level, alt_labels
         FROM skill ORDER BY id LIMIT $1",
    )
    .bind(limit)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(skills)
}

/// Search skills by preferred or alternate label (case-insensitive partial
/// match), capped at 25 results.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn search_skills(q: String) -> Result<Vec<Skill>, ServerFnError> {
    require_role(&[Role::HrAdmin])?;
    let db = get_db().await;
    let like = format!("%{q}%");
    let skills = sqlx::query_as::<_, Skill>(
        "SELECT id, preferred_label, skill_type, reuse_level, alt_labels
         FROM skill
         WHERE preferred_label ILIKE $1 OR alt_labels ILIKE $1
         ORDER BY preferred_label
         LIMIT 25",
    )
    .bind(like)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(skills)
}

#[server]
pub async fn create_skill(request: SkillRequest) -> Result<i64, ServerFnError> {
    require_role(&[Role::HrAdmin])?;
    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;
    let db = get_db().await;
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO skill (preferred_label, skill_type, reuse_level, alt_labels)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(&request.preferred_label)
    .bind(&request.skill_type)
    .bind(&request.reuse_level)
    .bind(&request.alt_labels)
    .fetch_one(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(id)
}

// ── Feedback ───────────────────────────────────────────

/// All feedback records, newest first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_feedback() -> Result<Vec<Feedback>, ServerFnError> {
    require_role(&[Role::HrAdmin])?;
    let db = get_db().await;
    let feedback = sqlx::query_as::<_, Feedback>(
        "SELECT id, employee_id, feedback_date, sentiment_score, comments
         FROM feedback ORDER BY feedback_date DESC",
    )
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(feedback)
}

/// Feedback for one employee, newest first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn feedback_for_employee(employee_id: i64) -> Result<Vec<Feedback>, ServerFnError> {
    require_auth()?;
    let db = get_db().await;
    let feedback = sqlx::query_as::<_, Feedback>(
        "SELECT id, employee_id, feedback_date, sentiment_score, comments
         FROM feedback WHERE employee_id = $1 ORDER BY feedback_date DESC",
    )
    .bind(employee_id)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(feedback)
}

/// Score a comment for the confirmation step. Persists nothing — the
/// feedback record is only written by `create_feedback` after the user
/// confirms the score.
#[server]
pub async fn score_sentiment(comment: String) -> Result<SentimentResult, ServerFnError> {
    require_auth()?;
    if comment.trim().is_empty() {
        return Err(AppError::bad_request("Comment is required").into_server_fn_error());
    }
    Ok(crate::sentiment::analyze(&comment))
}

/// Persist a confirmed feedback record. When no score is supplied but a
/// comment is, the score is derived server-side so stored rows are never
/// missing a sentiment for scored text.
#[server]
pub async fn create_feedback(request: FeedbackRequest) -> Result<(), ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Manager])?;
    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;
    let feedback_date = parse_date_field("feedback_date", &request.feedback_date)?;

    let score = match (request.sentiment_score, request.comments.as_deref()) {
        (Some(s), _) => Some(s),
        (None, Some(c)) if !c.trim().is_empty() => {
            Some(crate::sentiment::compound_score(c))
        }
        _ => None,
    };

    let db = get_db().await;
    sqlx::query(
        "INSERT INTO feedback (employee_id, feedback_date, sentiment_score, comments)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(request.employee_id)
    .bind(feedback_date)
    .bind(score)
    .bind(&request.comments)
    .execute(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(())
}

// ── Role-scoped aggregates ─────────────────────────────

/// All employees reporting to a manager.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn manager_team(manager_id: i64) -> Result<Vec<Employee>, ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Manager])?;
    let db = get_db().await;
    let team = sqlx::query_as::<_, Employee>(
        "SELECT id, first_name, last_name, email, hire_date, department, job_title, details, manager_id
         FROM employee WHERE manager_id = $1 ORDER BY last_name, first_name",
    )
    .bind(manager_id)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(team)
}

/// Per-report analytics for a manager's team: training completion and
/// average feedback.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn manager_team_analytics(
    manager_id: i64,
) -> Result<Vec<TeamMemberAnalytics>, ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Manager])?;
    let db = get_db().await;
    let analytics = sqlx::query_as::<_, TeamMemberAnalytics>(
        "SELECT e.id AS employee_id, e.first_name, e.last_name,
                COUNT(DISTINCT et.training_id) AS trainings_completed,
                AVG(f.sentiment_score) AS avg_feedback
         FROM employee e
         LEFT JOIN employee_training et ON e.id = et.employee_id
         LEFT JOIN feedback f ON e.id = f.employee_id
         WHERE e.manager_id = $1
         GROUP BY e.id
         ORDER BY e.id",
    )
    .bind(manager_id)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(analytics)
}

/// All trainings assigned to a trainer.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn trainer_trainings(trainer_id: i64) -> Result<Vec<Training>, ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Trainer])?;
    let db = get_db().await;
    let trainings = sqlx::query_as::<_, Training>(
        "SELECT t.id, t.title, t.category, t.description, t.start_date, t.end_date
         FROM training t
         JOIN trainer_training tt ON t.id = tt.training_id
         WHERE tt.trainer_id = $1
         ORDER BY t.start_date DESC",
    )
    .bind(trainer_id)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(trainings)
}

/// All feedback left by participants of a trainer's trainings.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn trainer_feedback(trainer_id: i64) -> Result<Vec<Feedback>, ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Trainer])?;
    let db = get_db().await;
    let feedback = sqlx::query_as::<_, Feedback>(
        "SELECT DISTINCT f.id, f.employee_id, f.feedback_date, f.sentiment_score, f.comments
         FROM feedback f
         JOIN employee_training et ON f.employee_id = et.employee_id
         JOIN trainer_training tt ON et.training_id = tt.training_id
         WHERE tt.trainer_id = $1
         ORDER BY f.feedback_date DESC",
    )
    .bind(trainer_id)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(feedback)
}

/// All trainings assigned to an employee.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn assigned_trainings(employee_id: i64) -> Result<Vec<Training>, ServerFnError> {
    require_auth()?;
    let db = get_db().await;
    let trainings = sqlx::query_as::<_, Training>(
        "SELECT t.id, t.title, t.category, t.description, t.start_date, t.end_date
         FROM training t
         JOIN employee_training et ON t.id = et.training_id
         WHERE et.employee_id = $1
         ORDER BY t.start_date DESC",
    )
    .bind(employee_id)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(trainings)
}

/// Current persisted skill suggestions for an employee, highest score first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn suggested_skills(employee_id: i64) -> Result<Vec<SuggestedSkill>, ServerFnError> {
    require_auth()?;
    let db = get_db().await;
    let skills = sqlx::query_as::<_, SuggestedSkill>(
        "SELECT s.id AS skill_id, s.preferred_label AS skill_name, s.skill_type AS category,
                sn.recommendation_score AS score
         FROM skill_need sn
         JOIN skill s ON sn.skill_id = s.id
         WHERE sn.employee_id = $1
         ORDER BY sn.recommendation_score DESC",
    )
    .bind(employee_id)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(skills)
}

/// Re-run the recommender for an employee: derive a shortlist from their job
/// title, skip skills they already hold, insert unknown labels into the skill
/// table, and upsert suggestion scores. Returns the refreshed suggestions.
#[server]
pub async fn recalculate_suggested_skills(
    employee_id: i64,
    topn: Option<i64>,
) -> Result<Vec<SuggestedSkill>, ServerFnError> {
    require_auth()?;
    if !crate::config::feature_flags().recommender {
        return Err(AppError::not_found("Recommender is disabled").into_server_fn_error());
    }
    let topn = topn.unwrap_or(10).clamp(1, 25) as usize;
    let db = get_db().await;

    let job_title: String = sqlx::query_scalar("SELECT job_title FROM employee WHERE id = $1")
        .bind(employee_id)
        .fetch_optional(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?
        .ok_or_else(|| {
            AppError::not_found(format!("Employee with id {employee_id} not found"))
                .into_server_fn_error()
        })?;

    let held: Vec<String> = sqlx::query_scalar(
        "SELECT lower(s.preferred_label)
         FROM employee_skill es JOIN skill s ON es.skill_id = s.id
         WHERE es.employee_id = $1",
    )
    .bind(employee_id)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let recommendations = crate::recommender::recommend_skills(&job_title, topn);
    for rec in recommendations
        .iter()
        .filter(|r| !held.contains(&r.label.to_lowercase()))
    {
        let skill_id: i64 = match sqlx::query_scalar::<_, i64>(
            "SELECT id FROM skill WHERE lower(preferred_label) = lower($1)",
        )
        .bind(&rec.label)
        .fetch_optional(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?
        {
            Some(id) => id,
            None => sqlx::query_scalar(
                "INSERT INTO skill (preferred_label) VALUES ($1) RETURNING id",
            )
            .bind(&rec.label)
            .fetch_one(db)
            .await
            .map_err(|e| e.into_app_error().into_server_fn_error())?,
        };

        sqlx::query(
            "INSERT INTO skill_need (employee_id, skill_id, recommendation_score)
             VALUES ($1, $2, $3)
             ON CONFLICT (employee_id, skill_id)
             DO UPDATE SET recommendation_score = EXCLUDED.recommendation_score",
        )
        .bind(employee_id)
        .bind(skill_id)
        .bind(rec.score)
        .execute(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    }

    suggested_skills(employee_id).await
}

/// Record an up/down vote on a skill suggestion and nudge its score by ±5,
/// clamped to 0..=100.
#[server]
pub async fn skill_vote(
    employee_id: i64,
    skill_id: i64,
    vote: SkillVote,
) -> Result<(), ServerFnError> {
    require_auth()?;
    let db = get_db().await;

    sqlx::query("INSERT INTO skill_feedback (employee_id, skill_id, vote) VALUES ($1, $2, $3)")
        .bind(employee_id)
        .bind(skill_id)
        .bind(vote.as_str())
        .execute(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    sqlx::query(
        "UPDATE skill_need
         SET recommendation_score = GREATEST(0, LEAST(100, recommendation_score + $1))
         WHERE employee_id = $2 AND skill_id = $3",
    )
    .bind(vote.score_change())
    .bind(employee_id)
    .bind(skill_id)
    .execute(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(())
}

// ── Analytics ──────────────────────────────────────────

/// High-level stats plus the monthly feedback timeseries.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn analytics_overview(
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<AnalyticsOverview, ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Manager])?;
    let start = parse_date_param("start_date", &start_date)?;
    let end = parse_date_param("end_date", &end_date)?;
    let db = get_db().await;

    let employee_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
        .fetch_one(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    let training_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM training")
        .fetch_one(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    let feedback_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback")
        .fetch_one(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    let active_trainings: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM training WHERE start_date <= CURRENT_DATE AND end_date >= CURRENT_DATE",
    )
    .fetch_one(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    let upcoming_trainings: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM training WHERE start_date > CURRENT_DATE")
            .fetch_one(db)
            .await
            .map_err(|e| e.into_app_error().into_server_fn_error())?;
    let avg_feedback: Option<f64> =
        sqlx::query_scalar("SELECT AVG(sentiment_score) FROM feedback")
            .fetch_one(db)
            .await
            .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let monthly_feedback = sqlx::query_as::<_, MonthlyFeedbackPoint>(
        "SELECT to_char(feedback_date, 'YYYY-MM') AS month,
                AVG(sentiment_score) AS avg_feedback, COUNT(*) AS n
         FROM feedback
         WHERE ($1::date IS NULL OR feedback_date >= $1)
           AND ($2::date IS NULL OR feedback_date <= $2)
         GROUP BY month ORDER BY month",
    )
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    Ok(AnalyticsOverview {
        employee_count,
        training_count,
        feedback_count,
        active_trainings,
        upcoming_trainings,
        avg_feedback,
        monthly_feedback,
    })
}

/// Trainings with participant counts, plus monthly start/participant series.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn analytics_trainings(
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<TrainingsAnalytics, ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Manager])?;
    let start = parse_date_param("start_date", &start_date)?;
    let end = parse_date_param("end_date", &end_date)?;
    let db = get_db().await;

    let trainings = sqlx::query_as::<_, shared_types::TrainingParticipants>(
        "SELECT t.id, t.title, t.category, COUNT(et.employee_id) AS participants
         FROM training t
         LEFT JOIN employee_training et ON t.id = et.training_id
         GROUP BY t.id
         ORDER BY participants DESC",
    )
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let trainings_by_month = sqlx::query_as::<_, MonthlyCount>(
        "SELECT to_char(t.start_date, 'YYYY-MM') AS month, COUNT(*) AS count
         FROM training t
         WHERE ($1::date IS NULL OR t.start_date >= $1)
           AND ($2::date IS NULL OR t.start_date <= $2)
         GROUP BY month ORDER BY month",
    )
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let participants_by_month = sqlx::query_as::<_, MonthlyCount>(
        "SELECT to_char(t.start_date, 'YYYY-MM') AS month, COUNT(et.employee_id) AS count
         FROM training t
         LEFT JOIN employee_training et ON t.id = et.training_id
         WHERE ($1::date IS NULL OR t.start_date >= $1)
           AND ($2::date IS NULL OR t.start_date <= $2)
         GROUP BY month ORDER BY month",
    )
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    Ok(TrainingsAnalytics {
        trainings,
        trainings_by_month,
        participants_by_month,
    })
}

/// Feedback analytics: monthly averages and top/bottom employees.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn analytics_feedback(
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<FeedbackAnalytics, ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Manager])?;
    let start = parse_date_param("start_date", &start_date)?;
    let end = parse_date_param("end_date", &end_date)?;
    let db = get_db().await;

    let monthly = sqlx::query_as::<_, MonthlyFeedbackPoint>(
        "SELECT to_char(f.feedback_date, 'YYYY-MM') AS month,
                AVG(f.sentiment_score) AS avg_feedback, COUNT(*) AS n
         FROM feedback f
         WHERE ($1::date IS NULL OR f.feedback_date >= $1)
           AND ($2::date IS NULL OR f.feedback_date <= $2)
         GROUP BY month ORDER BY month",
    )
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let top_positive = sqlx::query_as::<_, shared_types::FeedbackLeader>(
        "SELECT e.id AS employee_id, e.first_name, e.last_name,
                AVG(f.sentiment_score) AS avg_feedback, COUNT(f.id) AS n_feedback
         FROM employee e
         JOIN feedback f ON e.id = f.employee_id
         GROUP BY e.id
         HAVING COUNT(f.id) >= 1
         ORDER BY avg_feedback DESC
         LIMIT 10",
    )
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let top_negative = sqlx::query_as::<_, shared_types::FeedbackLeader>(
        "SELECT e.id AS employee_id, e.first_name, e.last_name,
                AVG(f.sentiment_score) AS avg_feedback, COUNT(f.id) AS n_feedback
         FROM employee e
         JOIN feedback f ON e.id = f.employee_id
         GROUP BY e.id
         HAVING COUNT(f.id) >= 1
         ORDER BY avg_feedback ASC
         LIMIT 10",
    )
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    Ok(FeedbackAnalytics {
        monthly,
        top_positive,
        top_negative,
    })
}

/// Skills with the lowest average proficiency across the employees holding
/// them — the organisation's skill gaps.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn analytics_skills(limit: Option<i64>) -> Result<Vec<SkillGap>, ServerFnError> {
    require_role(&[Role::HrAdmin, Role::Manager])?;
    let limit = limit.unwrap_or(20).clamp(1, 100);
    let db = get_db().await;
    let skills = sqlx::query_as::<_, SkillGap>(
        "SELECT s.id AS skill_id, s.preferred_label,
                AVG(es.proficiency_level::float8) AS avg_proficiency, COUNT(es.employee_id) AS n
         FROM skill s
         JOIN employee_skill es ON s.id = es.skill_id
         GROUP BY s.id
         HAVING COUNT(es.employee_id) > 0
         ORDER BY avg_proficiency ASC
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(skills)
}
