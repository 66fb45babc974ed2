use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Derived training status. Ongoing as long as the end date has not passed —
/// a training ending today still counts as ongoing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrainingStatus {
    Ongoing,
    Finished,
}

impl TrainingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TrainingStatus::Ongoing => "Ongoing",
            TrainingStatus::Finished => "Finished",
        }
    }
}

/// A training record as stored in the `training` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Training {
    #[serde(rename = "training_id")]
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Training {
    /// Status relative to the given day: Ongoing iff `end_date >= today`.
    pub fn status(&self, today: NaiveDate) -> TrainingStatus {
        if self.end_date >= today {
            TrainingStatus::Ongoing
        } else {
            TrainingStatus::Finished
        }
    }
}

/// A pending training request for an employee, with a 1-5 recommendation level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct TrainingNeed {
    pub id: i64,
    pub employee_id: i64,
    pub recommended_training_id: i64,
    pub recommendation_level: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training(start: (i32, u32, u32), end: (i32, u32, u32)) -> Training {
        Training {
            id: 1,
            title: "Time Management".to_string(),
            category: "Soft Skills".to_string(),
            description: String::new(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    #[test]
    fn ends_in_future_is_ongoing() {
        let t = training((2026, 1, 1), (2026, 12, 31));
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        assert_eq!(t.status(today), TrainingStatus::Ongoing);
    }

    #[test]
    fn ends_today_still_ongoing() {
        let t = training((2026, 1, 1), (2026, 6, 1));
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        assert_eq!(t.status(today), TrainingStatus::Ongoing);
    }

    #[test]
    fn ended_yesterday_is_finished() {
        let t = training((2026, 1, 1), (2026, 5, 31));
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        assert_eq!(t.status(today), TrainingStatus::Finished);
    }

    #[test]
    fn serializes_id_as_training_id() {
        let t = training((2026, 1, 1), (2026, 2, 1));
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["training_id"], 1);
        assert!(json.get("id").is_none());
    }
}
