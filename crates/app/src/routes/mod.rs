pub mod analytics;
pub mod dashboard;
pub mod employees;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod skills;
pub mod trainings;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdBriefcase, LdFileText, LdLayoutDashboard, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_ui::Navbar;

use crate::auth::{can, use_auth, use_role, Action};

use analytics::AnalyticsPage as Analytics;
use dashboard::Dashboard;
use employees::{EmployeeDetailPage as EmployeeDetail, EmployeeListPage as EmployeeList};
use login::Login;
use not_found::NotFound;
use profile::ProfilePage as Profile;
use skills::SkillListPage as SkillList;
use trainings::{TrainingDetailPage as TrainingDetail, TrainingListPage as TrainingList};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/employees")]
    EmployeeList {},
    #[route("/employees/:id")]
    EmployeeDetail { id: i64 },
    #[route("/trainings")]
    TrainingList {},
    #[route("/trainings/:id")]
    TrainingDetail { id: i64 },
    #[route("/skills")]
    SkillList {},
    #[route("/analytics")]
    Analytics {},
    #[route("/profile")]
    Profile {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout — redirects to /login if not authenticated.
///
/// Uses `use_server_future` with `?` to propagate suspension properly.
/// During SSR the component suspends until the auth check completes, then
/// Dioxus re-renders with the resolved data embedded in the HTML.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    // Clone the result out of the resource guard to avoid lifetime issues.
    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Main app layout: top navbar with role-filtered links above the page outlet.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let role = use_role();

    let email = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_default();

    rsx! {
        Navbar {
            span { class: "nav-brand", "Meridian HR" }

            nav { class: "nav-links",
                NavLink {
                    to: Route::Dashboard {},
                    active: matches!(route, Route::Dashboard {}),
                    icon: rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 } },
                    label: "Dashboard",
                }
                if can(&role, Action::ViewEmployees) {
                    NavLink {
                        to: Route::EmployeeList {},
                        active: matches!(route, Route::EmployeeList {} | Route::EmployeeDetail { .. }),
                        icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 } },
                        label: "Employees",
                    }
                }
                NavLink {
                    to: Route::TrainingList {},
                    active: matches!(route, Route::TrainingList {} | Route::TrainingDetail { .. }),
                    icon: rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 16, height: 16 } },
                    label: "Trainings",
                }
                if can(&role, Action::ManageSkills) {
                    NavLink {
                        to: Route::SkillList {},
                        active: matches!(route, Route::SkillList {}),
                        icon: rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 16, height: 16 } },
                        label: "Skills",
                    }
                }
                if can(&role, Action::ViewAnalytics) {
                    NavLink {
                        to: Route::Analytics {},
                        active: matches!(route, Route::Analytics {}),
                        icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 } },
                        label: "Analytics",
                    }
                }
                NavLink {
                    to: Route::Profile {},
                    active: matches!(route, Route::Profile {}),
                    icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 16, height: 16 } },
                    label: "Profile",
                }
            }

            div { class: "nav-session",
                span { class: "nav-role-tag", "{role.label()}" }
                span { class: "nav-email", "{email}" }
                button {
                    class: "nav-logout",
                    onclick: move |_| {
                        spawn(async move {
                            let _ = server::api::logout().await;
                        });
                        auth.clear_auth();
                        navigator().push(Route::Login {});
                    },
                    "Sign Out"
                }
            }
        }

        div { class: "page-content",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn NavLink(to: Route, active: bool, icon: Element, label: &'static str) -> Element {
    let class = if active { "nav-link active" } else { "nav-link" };

    rsx! {
        Link {
            to,
            class: class.to_string(),
            {icon}
            "{label}"
        }
    }
}

/// Full-page card shown when a role may not view the current page.
#[component]
pub fn AccessDenied(message: &'static str) -> Element {
    rsx! {
        div { class: "access-denied",
            h2 { "Access Denied" }
            p { "{message}" }
        }
    }
}
