//! Password recovery finish: consumes the emailed reset token. The token is
//! a one-time credential distinct from the bearer session token and must not
//! be logged.

use crate::app_lib::{AppError, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::state::use_session;
use crate::features::auth::types::ResetPasswordRequest;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let reset_token = move || params.with(|map| map.get("token").unwrap_or_default());

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (done, set_done) = signal(false);

    let reset_action = Action::new_local(move |request: &ResetPasswordRequest| {
        let request = request.clone();
        async move { session.reset_password(request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(_) => set_done.set(true),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let token_value = reset_token();
        if token_value.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Missing reset token. Check your email link.".to_string(),
            )));
            return;
        }

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let confirm_value = confirm.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Email and new password are required.".to_string(),
            )));
            return;
        }
        if password_value != confirm_value {
            set_error.set(Some(AppError::Config(
                "Passwords do not match.".to_string(),
            )));
            return;
        }

        reset_action.dispatch(ResetPasswordRequest {
            email: email_value,
            password: password_value,
            password_confirmation: confirm_value,
            token: token_value,
        });
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <Show
                    when=move || !done.get()
                    fallback=move || {
                        view! {
                            <div class="space-y-4">
                                <Alert
                                    kind=AlertKind::Success
                                    message="Password updated. You can sign in now.".to_string()
                                />
                                <A href={paths::LOGIN} {..} class=Theme::LINK>
                                    "Go to sign in"
                                </A>
                            </div>
                        }
                    }
                >
                    <form on:submit=on_submit>
                        <h1 class="mb-5 text-2xl font-semibold text-gray-900 dark:text-white">
                            "Choose a new password"
                        </h1>
                        <TextField
                            id="email"
                            label="Your email"
                            input_type="email"
                            autocomplete="email"
                            value=email
                            on_input=set_email
                        />
                        <TextField
                            id="password"
                            label="New password"
                            input_type="password"
                            autocomplete="new-password"
                            value=password
                            on_input=set_password
                        />
                        <TextField
                            id="password_confirmation"
                            label="Repeat new password"
                            input_type="password"
                            autocomplete="new-password"
                            value=confirm
                            on_input=set_confirm
                        />
                        <Button button_type="submit" disabled=reset_action.pending()>
                            "Update password"
                        </Button>
                        {move || {
                            reset_action
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
                </Show>
            </div>
        </AppShell>
    }
}
