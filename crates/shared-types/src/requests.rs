use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Request DTO for creating an employee. The same shape is accepted by the
/// update operation — the backend overwrites every column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct EmployeeRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "First name is required"))
    )]
    pub first_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Last name is required"))
    )]
    pub last_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    /// YYYY-MM-DD.
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Hire date is required"))
    )]
    pub hire_date: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Department is required"))
    )]
    pub department: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Job title is required"))
    )]
    pub job_title: String,
    #[serde(default)]
    pub details: String,
}

/// Request DTO for creating or updating a training.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct TrainingRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Title is required"))
    )]
    pub title: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Category is required"))
    )]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// YYYY-MM-DD.
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Start date is required"))
    )]
    pub start_date: String,
    /// YYYY-MM-DD.
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "End date is required"))
    )]
    pub end_date: String,
}

/// Request DTO for creating a skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SkillRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Label is required"))
    )]
    pub preferred_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reuse_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_labels: Option<String>,
}

/// Request DTO for persisting a confirmed feedback record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct FeedbackRequest {
    pub employee_id: i64,
    /// YYYY-MM-DD.
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Feedback date is required"))
    )]
    pub feedback_date: String,
    /// The confirmed compound score from the sentiment step.
    pub sentiment_score: Option<f32>,
    pub comments: Option<String>,
}

/// Request DTO for a training need (manager requests a training for a report).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct TrainingNeedRequest {
    pub employee_id: i64,
    pub training_id: i64,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, max = 5, message = "Recommendation level must be 1-5"))
    )]
    pub recommendation_level: i32,
}

#[cfg(all(test, feature = "validation"))]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn employee_request_rejects_blank_required_fields() {
        let req = EmployeeRequest {
            first_name: String::new(),
            last_name: "Doe".to_string(),
            email: "not-an-email".to_string(),
            hire_date: "2024-01-01".to_string(),
            department: "Sales".to_string(),
            job_title: "Rep".to_string(),
            details: String::new(),
        };
        let errs = req.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("first_name"));
        assert!(errs.field_errors().contains_key("email"));
    }

    #[test]
    fn training_need_level_bounds() {
        let mut req = TrainingNeedRequest {
            employee_id: 1,
            training_id: 2,
            recommendation_level: 0,
        };
        assert!(req.validate().is_err());
        req.recommendation_level = 3;
        assert!(req.validate().is_ok());
        req.recommendation_level = 6;
        assert!(req.validate().is_err());
    }
}
