use dioxus::prelude::*;
use shared_types::{AuthUser, Role};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// The current user's role. Resolved from auth state; missing or unknown
/// roles collapse to the most restrictive Employee view.
pub fn use_role() -> Role {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding
        .as_ref()
        .map(|u| u.role_tag())
        .unwrap_or(Role::Employee)
}

/// The employee record linked to the current account, when one exists.
pub fn use_employee_id() -> Option<i64> {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding.as_ref().and_then(|u| u.employee_id)
}

/// UI affordances gated by role. Pages consult `can` before rendering a
/// control or issuing the fetch behind it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Browse the employee directory.
    ViewEmployees,
    /// Create/edit/delete employee records.
    ManageEmployees,
    /// Create/edit/delete trainings.
    ManageTrainings,
    /// Request a training for a report.
    RequestTraining,
    /// Assign employees or trainers to trainings.
    AssignTraining,
    /// Browse and create skills.
    ManageSkills,
    /// View org-wide analytics and exports.
    ViewAnalytics,
    /// Submit feedback for an employee.
    SubmitFeedback,
}

/// Whether `role` may perform `action`.
pub fn can(role: &Role, action: Action) -> bool {
    match action {
        Action::ViewEmployees => !matches!(role, Role::Trainer),
        Action::ManageEmployees => matches!(role, Role::HrAdmin),
        Action::ManageTrainings => matches!(role, Role::HrAdmin | Role::Trainer),
        Action::RequestTraining => matches!(role, Role::HrAdmin | Role::Manager),
        Action::AssignTraining => matches!(role, Role::HrAdmin | Role::Manager),
        Action::ManageSkills => matches!(role, Role::HrAdmin),
        Action::ViewAnalytics => matches!(role, Role::HrAdmin | Role::Manager),
        Action::SubmitFeedback => matches!(role, Role::HrAdmin | Role::Manager),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trainer_is_denied_the_employee_directory() {
        assert!(!can(&Role::Trainer, Action::ViewEmployees));
        assert!(can(&Role::HrAdmin, Action::ViewEmployees));
        assert!(can(&Role::Manager, Action::ViewEmployees));
        assert!(can(&Role::Employee, Action::ViewEmployees));
    }

    #[test]
    fn only_hradmin_manages_employees_and_skills() {
        for role in [Role::Manager, Role::Trainer, Role::Employee] {
            assert!(!can(&role, Action::ManageEmployees));
            assert!(!can(&role, Action::ManageSkills));
        }
        assert!(can(&Role::HrAdmin, Action::ManageEmployees));
        assert!(can(&Role::HrAdmin, Action::ManageSkills));
    }

    #[test]
    fn trainers_and_hradmin_manage_trainings() {
        assert!(can(&Role::Trainer, Action::ManageTrainings));
        assert!(can(&Role::HrAdmin, Action::ManageTrainings));
        assert!(!can(&Role::Manager, Action::ManageTrainings));
        assert!(!can(&Role::Employee, Action::ManageTrainings));
    }

    #[test]
    fn analytics_is_for_hradmin_and_managers() {
        assert!(can(&Role::HrAdmin, Action::ViewAnalytics));
        assert!(can(&Role::Manager, Action::ViewAnalytics));
        assert!(!can(&Role::Trainer, Action::ViewAnalytics));
        assert!(!can(&Role::Employee, Action::ViewAnalytics));
    }
}
