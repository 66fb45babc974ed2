use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee record as stored in the `employee` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub hire_date: NaiveDate,
    pub department: String,
    pub job_title: String,
    pub details: String,
    pub manager_id: Option<i64>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A skill held by an employee, with its proficiency level (1-5).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct EmployeeSkill {
    pub id: i64,
    pub preferred_label: String,
    pub proficiency_level: i32,
}

/// An employee with their skills and currently ongoing training titles,
/// as returned by the single-employee lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeProfile {
    #[serde(flatten)]
    pub employee: Employee,
    #[serde(default)]
    pub skills: Vec<EmployeeSkill>,
    /// Titles of trainings whose end date has not passed, e.g. "Cybersecurity (IT)".
    #[serde(default)]
    pub trainings: Vec<String>,
}

/// One row of the cross-entity employee search: per-employee aggregates of
/// trainings, feedback, and training needs flattened into display strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct EmployeeSearchRow {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub hire_date: NaiveDate,
    pub department: String,
    pub job_title: String,
    pub training: Option<String>,
    pub feedback: Option<String>,
    pub training_need: Option<String>,
}

/// A persisted skill suggestion for an employee, ordered by score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct SuggestedSkill {
    pub skill_id: i64,
    pub skill_name: String,
    pub category: Option<String>,
    pub score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employee() -> Employee {
        Employee {
            id: 7,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
            department: "Engineering".to_string(),
            job_title: "Software Engineer".to_string(),
            details: String::new(),
            manager_id: Some(2),
        }
    }

    #[test]
    fn full_name_joins_parts() {
        assert_eq!(sample_employee().full_name(), "Ada Lovelace");
    }

    #[test]
    fn profile_flattens_employee_fields() {
        let profile = EmployeeProfile {
            employee: sample_employee(),
            skills: vec![],
            trainings: vec!["Cybersecurity (IT)".to_string()],
        };
        let json = serde_json::to_value(&profile).unwrap();
        // Flattened: employee columns sit at the top level next to skills/trainings.
        assert_eq!(json["first_name"], "Ada");
        assert_eq!(json["trainings"][0], "Cybersecurity (IT)");
        let parsed: EmployeeProfile = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, profile);
    }
}
