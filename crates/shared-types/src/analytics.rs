use serde::{Deserialize, Serialize};

/// One month of aggregated feedback: "YYYY-MM" bucket, average score, sample size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct MonthlyFeedbackPoint {
    pub month: String,
    pub avg_feedback: Option<f64>,
    pub n: i64,
}

/// High-level counters plus the monthly feedback timeseries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsOverview {
    pub employee_count: i64,
    pub training_count: i64,
    pub feedback_count: i64,
    pub active_trainings: i64,
    pub upcoming_trainings: i64,
    pub avg_feedback: Option<f64>,
    pub monthly_feedback: Vec<MonthlyFeedbackPoint>,
}

/// One month of counts ("YYYY-MM" bucket).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct MonthlyCount {
    pub month: String,
    pub count: i64,
}

/// A training with its participant count, for the analytics table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct TrainingParticipants {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub participants: i64,
}

/// Trainings analytics: participant ranking plus monthly aggregates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingsAnalytics {
    pub trainings: Vec<TrainingParticipants>,
    pub trainings_by_month: Vec<MonthlyCount>,
    pub participants_by_month: Vec<MonthlyCount>,
}

/// An employee ranked by average feedback score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct FeedbackLeader {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub avg_feedback: Option<f64>,
    pub n_feedback: i64,
}

/// Feedback analytics: monthly series plus top/bottom employees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackAnalytics {
    pub monthly: Vec<MonthlyFeedbackPoint>,
    pub top_positive: Vec<FeedbackLeader>,
    pub top_negative: Vec<FeedbackLeader>,
}

/// Per-report analytics for a manager's team view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct TeamMemberAnalytics {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub trainings_completed: i64,
    pub avg_feedback: Option<f64>,
}

/// A skill with low average proficiency across the employees holding it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct SkillGap {
    pub skill_id: i64,
    pub preferred_label: String,
    pub avg_proficiency: Option<f64>,
    pub n: i64,
}
