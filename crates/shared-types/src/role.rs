use serde::{Deserialize, Serialize};

/// Role tag stored on user accounts and carried in the session token.
///
/// The raw string from the database never leaves the session resolver —
/// everything downstream branches on this enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Role {
    HrAdmin,
    Manager,
    Trainer,
    #[default]
    Employee,
}

impl Role {
    /// Parse from the `role` column / JWT claim. Unknown values fall back to
    /// Employee, the most restrictive view.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hradmin" => Role::HrAdmin,
            "manager" => Role::Manager,
            "trainer" => Role::Trainer,
            _ => Role::Employee,
        }
    }

    /// Lowercase string for database / JWT storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::HrAdmin => "hradmin",
            Role::Manager => "manager",
            Role::Trainer => "trainer",
            Role::Employee => "employee",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Role::HrAdmin => "HR Admin",
            Role::Manager => "Manager",
            Role::Trainer => "Trainer",
            Role::Employee => "Employee",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles_case_insensitively() {
        assert_eq!(Role::from_str_or_default("hradmin"), Role::HrAdmin);
        assert_eq!(Role::from_str_or_default("HRAdmin"), Role::HrAdmin);
        assert_eq!(Role::from_str_or_default("manager"), Role::Manager);
        assert_eq!(Role::from_str_or_default("trainer"), Role::Trainer);
        assert_eq!(Role::from_str_or_default("employee"), Role::Employee);
    }

    #[test]
    fn unknown_role_falls_back_to_employee() {
        assert_eq!(Role::from_str_or_default("superuser"), Role::Employee);
        assert_eq!(Role::from_str_or_default(""), Role::Employee);
    }

    #[test]
    fn as_str_roundtrips() {
        for role in [Role::HrAdmin, Role::Manager, Role::Trainer, Role::Employee] {
            assert_eq!(Role::from_str_or_default(role.as_str()), role);
        }
    }
}
