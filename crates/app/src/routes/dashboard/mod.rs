pub mod employee;
pub mod hradmin;
pub mod manager;
pub mod trainer;

use dioxus::prelude::*;
use shared_types::Role;

use crate::auth::use_role;

/// Role-adaptive dashboard — renders the appropriate dashboard for the
/// user's role.
#[component]
pub fn Dashboard() -> Element {
    let role = use_role();

    match role {
        Role::HrAdmin => rsx! { hradmin::HrAdminDashboard {} },
        Role::Manager => rsx! { manager::ManagerDashboard {} },
        Role::Trainer => rsx! { trainer::TrainerDashboard {} },
        Role::Employee => rsx! { employee::EmployeeDashboard {} },
    }
}
