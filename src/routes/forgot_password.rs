//! Password recovery start: asks the server to email a reset link.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::state::use_session;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let session = use_session();
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let forgot_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move { session.forgot_password(email).await }
    });

    Effect::new(move |_| {
        if let Some(result) = forgot_action.value().get() {
            match result {
                Ok(status) => set_notice.set(Some(status.message.unwrap_or_else(|| {
                    "If that email exists, a reset link is on the way.".to_string()
                }))),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_notice.set(None);

        let email_value = email.get_untracked().trim().to_string();
        if email_value.is_empty() || !email_value.contains('@') {
            set_error.set(Some(AppError::Config(
                "A valid email address is required.".to_string(),
            )));
            return;
        }

        forgot_action.dispatch(email_value);
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-5 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Reset your password"
                </h1>
                <TextField
                    id="email"
                    label="Your email"
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@inbox.im"
                    value=email
                    on_input=set_email
                />
                <Button button_type="submit" disabled=forgot_action.pending()>
                    "Send reset link"
                </Button>
                {move || {
                    forgot_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    notice
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Success message=message />
                                </div>
                            }
                        })
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
