//! Login route. The session context performs the credential exchange; on
//! success this view makes the post-login navigation explicit by sending the
//! user home.

use crate::app_lib::{AppError, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::state::use_session;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move { session.login(input.email, input.password).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => navigate(paths::HOME, Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Email and password are required.".to_string(),
            )));
            return;
        }

        login_action.dispatch(LoginInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <TextField
                    id="email"
                    label="Your email"
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@inbox.im"
                    value=email
                    on_input=set_email
                />
                <TextField
                    id="password"
                    label="Your password"
                    input_type="password"
                    autocomplete="current-password"
                    value=password
                    on_input=set_password
                />
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign In"
                </Button>
                <p class="mt-4 text-sm text-gray-500 dark:text-gray-400">
                    <A href={paths::FORGOT_PASSWORD} {..} class=Theme::LINK>
                        "Forgot your password?"
                    </A>
                </p>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}
