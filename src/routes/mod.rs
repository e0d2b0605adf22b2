mod forgot_password;
mod home;
mod login;
mod not_found;
mod profile;
mod reset_password;
mod schedules;
mod surveys;

pub(crate) use forgot_password::ForgotPasswordPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;
pub(crate) use reset_password::ResetPasswordPage;
pub(crate) use schedules::{ScheduleCreatePage, ScheduleEditPage, SchedulesListPage};
pub(crate) use surveys::{SurveyAnswerPage, SurveyCreatePage, SurveyEditPage, SurveysListPage};

use crate::features::auth::guards::{Protected, RequireGuest, RouteAccess};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Named route paths. Builders exist for the parameterized routes so links
/// and redirects never hand-format paths.
pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const FORGOT_PASSWORD: &str = "/forgot-password";
    pub const PROFILE: &str = "/profile";
    pub const SURVEYS: &str = "/surveys";
    pub const SURVEY_CREATE: &str = "/survey/create";
    pub const SCHEDULES: &str = "/schedules";
    pub const SCHEDULE_CREATE: &str = "/schedule/create";

    pub fn survey_edit(id: u64) -> String {
        format!("/survey/edit/{id}")
    }

    pub fn survey_answer(public_id: &str) -> String {
        format!("/survey/answer/{public_id}")
    }

    pub fn schedule_edit(id: u64) -> String {
        format!("/schedule/edit/{id}")
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route
                path=path!("/login")
                view=|| view! { <RequireGuest><LoginPage /></RequireGuest> }
            />
            <Route
                path=path!("/forgot-password")
                view=|| view! { <RequireGuest><ForgotPasswordPage /></RequireGuest> }
            />
            <Route
                path=path!("/reset-password/:token")
                view=|| view! { <RequireGuest><ResetPasswordPage /></RequireGuest> }
            />
            <Route
                path=path!("/profile")
                view=|| view! {
                    <Protected access=RouteAccess::AUTHENTICATED>
                        <ProfilePage />
                    </Protected>
                }
            />
            <Route
                path=path!("/surveys")
                view=|| view! {
                    <Protected access=RouteAccess::AUTHENTICATED>
                        <SurveysListPage />
                    </Protected>
                }
            />
            <Route
                path=path!("/survey/create")
                view=|| view! {
                    <Protected access=RouteAccess::VERIFIED>
                        <SurveyCreatePage />
                    </Protected>
                }
            />
            <Route
                path=path!("/survey/edit/:id")
                view=|| view! {
                    <Protected access=RouteAccess::VERIFIED>
                        <SurveyEditPage />
                    </Protected>
                }
            />
            <Route
                path=path!("/survey/answer/:id")
                view=|| view! {
                    <Protected access=RouteAccess::AUTHENTICATED>
                        <SurveyAnswerPage />
                    </Protected>
                }
            />
            <Route
                path=path!("/schedules")
                view=|| view! {
                    <Protected access=RouteAccess::AUTHENTICATED>
                        <SchedulesListPage />
                    </Protected>
                }
            />
            <Route
                path=path!("/schedule/create")
                view=|| view! {
                    <Protected access=RouteAccess::VERIFIED>
                        <ScheduleCreatePage />
                    </Protected>
                }
            />
            <Route
                path=path!("/schedule/edit/:id")
                view=|| view! {
                    <Protected access=RouteAccess::VERIFIED>
                        <ScheduleEditPage />
                    </Protected>
                }
            />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
