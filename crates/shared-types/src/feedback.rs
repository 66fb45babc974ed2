use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A feedback record for an employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Feedback {
    pub id: i64,
    pub employee_id: i64,
    pub feedback_date: NaiveDate,
    pub sentiment_score: Option<f32>,
    pub comments: Option<String>,
}

/// Result of scoring a comment, shown to the user for confirmation before
/// any feedback record is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentimentResult {
    /// Compound score in [-1, 1].
    pub sentiment_score: f32,
    /// "Positive", "Negative", or "Neutral".
    pub sentiment_label: String,
    /// The compound score mapped onto a 1-5 scale.
    pub sentiment_score_1_5: i32,
}

impl SentimentResult {
    /// Thresholds: compound >= 0.05 is Positive, <= -0.05 is Negative.
    pub fn from_compound(compound: f32) -> Self {
        let label = if compound >= 0.05 {
            "Positive"
        } else if compound <= -0.05 {
            "Negative"
        } else {
            "Neutral"
        };
        let scaled = ((compound + 1.0) * 2.0 + 1.0).round() as i32;
        Self {
            sentiment_score: compound,
            sentiment_label: label.to_string(),
            sentiment_score_1_5: scaled.clamp(1, 5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_at_threshold() {
        let r = SentimentResult::from_compound(0.05);
        assert_eq!(r.sentiment_label, "Positive");
    }

    #[test]
    fn negative_at_threshold() {
        let r = SentimentResult::from_compound(-0.05);
        assert_eq!(r.sentiment_label, "Negative");
    }

    #[test]
    fn neutral_between_thresholds() {
        assert_eq!(SentimentResult::from_compound(0.0).sentiment_label, "Neutral");
        assert_eq!(SentimentResult::from_compound(0.049).sentiment_label, "Neutral");
        assert_eq!(SentimentResult::from_compound(-0.049).sentiment_label, "Neutral");
    }

    #[test]
    fn five_point_scale_clamps_to_bounds() {
        assert_eq!(SentimentResult::from_compound(1.0).sentiment_score_1_5, 5);
        assert_eq!(SentimentResult::from_compound(-1.0).sentiment_score_1_5, 1);
    }

    #[test]
    fn five_point_scale_midpoint() {
        // compound 0.0 -> (0+1)*2+1 = 3
        assert_eq!(SentimentResult::from_compound(0.0).sentiment_score_1_5, 3);
    }
}
