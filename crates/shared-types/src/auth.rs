use serde::{Deserialize, Serialize};

use crate::Role;

/// The authenticated user as returned by login / current-user lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub role: String,
    /// The employee record this account is linked to, when one exists.
    /// Managers/trainers/employees use it for their role-scoped fetches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
}

impl AuthUser {
    /// Typed view of the raw role string.
    pub fn role_tag(&self) -> Role {
        Role::from_str_or_default(&self.role)
    }
}

/// Login form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_tag_parses_stored_string() {
        let user = AuthUser {
            id: 1,
            email: "hr@example.com".to_string(),
            role: "hradmin".to_string(),
            employee_id: None,
        };
        assert_eq!(user.role_tag(), Role::HrAdmin);
    }

    #[test]
    fn unknown_role_string_defaults_to_employee() {
        let user = AuthUser {
            id: 1,
            email: "x@example.com".to_string(),
            role: "wizard".to_string(),
            employee_id: Some(9),
        };
        assert_eq!(user.role_tag(), Role::Employee);
    }
}
