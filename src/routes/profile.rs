//! Profile route: identity details, email-verification status, and profile
//! updates. The guard redirects unverified identities here with a reason code
//! in the query string, which this view turns into a banner.

use crate::app_lib::{AppError, dates, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::guards::{REASON_EMAIL_NOT_VERIFIED, REDIRECT_REASON_PARAM};
use crate::features::auth::state::use_session;
use crate::features::profile::{client, types::UpdateProfilePayload};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();
    let redirected_unverified = move || {
        query.with(|map| {
            map.get(REDIRECT_REASON_PARAM).as_deref() == Some(REASON_EMAIL_NOT_VERIFIED)
        })
    };

    let profile = LocalResource::new(move || {
        let credentials = session
            .session
            .get()
            .map(|record| (record.user_id, record.token));
        async move {
            match credentials {
                Some((user_id, token)) => client::fetch_user(user_id, &token).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (avatar, set_avatar) = signal(String::new());
    let (form_error, set_form_error) = signal::<Option<AppError>>(None);
    let (form_notice, set_form_notice) = signal::<Option<String>>(None);

    // Seed the form whenever a fresh profile arrives.
    Effect::new(move |_| {
        if let Some(Ok(Some(record))) = profile.get() {
            set_full_name.set(record.full_name.unwrap_or_default());
            set_email.set(record.email);
            set_avatar.set(record.avatar.unwrap_or_default());
        }
    });

    let update_action = Action::new_local(move |payload: &UpdateProfilePayload| {
        let payload = payload.clone();
        async move {
            let Some(token) = session.token() else {
                return Err(AppError::Config("Sign in to update your profile.".to_string()));
            };
            client::update_profile(&payload, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(()) => {
                    set_form_notice.set(Some("Profile updated.".to_string()));
                    set_password.set(String::new());
                    profile.refetch();
                }
                Err(err) => set_form_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_form_error.set(None);
        set_form_notice.set(None);

        let email_value = email.get_untracked().trim().to_string();
        if email_value.is_empty() || !email_value.contains('@') {
            set_form_error.set(Some(AppError::Config(
                "A valid email address is required.".to_string(),
            )));
            return;
        }

        let password_value = password.get_untracked();
        let avatar_value = avatar.get_untracked().trim().to_string();
        update_action.dispatch(UpdateProfilePayload {
            full_name: full_name.get_untracked().trim().to_string(),
            email: email_value,
            password: (!password_value.trim().is_empty()).then_some(password_value),
            avatar: (!avatar_value.is_empty()).then_some(avatar_value),
        });
    };

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto space-y-6">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Your profile"
                </h1>

                {move || {
                    redirected_unverified()
                        .then_some(view! {
                            <Alert
                                kind=AlertKind::Info
                                message="That page needs a verified email address. Confirm your email below to continue."
                                    .to_string()
                            />
                        })
                }}

                {move || match profile.get() {
                    Some(Ok(Some(record))) => {
                        let member_since = record
                            .created_at
                            .as_deref()
                            .map(dates::format_from_now)
                            .unwrap_or_else(|| "-".to_string());
                        view! {
                            <div class=Theme::CARD>
                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                    "Signed in as "
                                    <span class="font-medium text-gray-900 dark:text-white">
                                        {record.email.clone()}
                                    </span>
                                </p>
                                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                                    {format!("Member since {member_since}")}
                                </p>
                            </div>
                        }
                        .into_any()
                    }
                    Some(Ok(None)) => ().into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}

                <VerificationPanel />

                <form class=Theme::CARD on:submit=on_submit>
                    <h2 class="mb-4 text-lg font-semibold text-gray-900 dark:text-white">
                        "Update details"
                    </h2>
                    <TextField
                        id="full_name"
                        label="Full name"
                        autocomplete="name"
                        value=full_name
                        on_input=set_full_name
                    />
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        autocomplete="email"
                        value=email
                        on_input=set_email
                    />
                    <TextField
                        id="password"
                        label="New password (optional)"
                        input_type="password"
                        autocomplete="new-password"
                        value=password
                        on_input=set_password
                    />
                    <TextField
                        id="avatar"
                        label="Avatar URL (optional)"
                        value=avatar
                        on_input=set_avatar
                    />
                    <Button button_type="submit" disabled=update_action.pending()>
                        "Save changes"
                    </Button>
                    {move || {
                        update_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                    {move || {
                        form_notice
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
                        form_error
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
            </div>
        </AppShell>
    }
}

/// Email-verification status with refresh and resend controls.
#[component]
fn VerificationPanel() -> impl IntoView {
    let session = use_session();
    let email_verified = session.email_verified;
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let check_action = Action::new_local(move |_: &()| async move {
        session.check_verification_status().await
    });
    let resend_action = Action::new_local(move |_: &()| async move {
        session.send_verification_email().await
    });

    Effect::new(move |_| {
        if let Some(result) = check_action.value().get() {
            match result {
                Ok(true) => set_notice.set(Some("Your email address is verified.".to_string())),
                Ok(false) => set_notice.set(Some("Still unverified. Check your inbox.".to_string())),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(status) => set_notice.set(Some(status.message.unwrap_or_else(|| {
                    "A new verification email is on the way.".to_string()
                }))),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_check = Callback::new(move |()| {
        set_error.set(None);
        set_notice.set(None);
        check_action.dispatch(());
    });
    let on_resend = Callback::new(move |()| {
        set_error.set(None);
        set_notice.set(None);
        resend_action.dispatch(());
    });

    let busy = Signal::derive(move || {
        check_action.pending().get() || resend_action.pending().get()
    });

    view! {
        <div class=Theme::CARD>
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                "Email verification"
            </h2>
            <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                {move || {
                    if email_verified.get() {
                        "Your email address is confirmed."
                    } else {
                        "Your email address has not been confirmed yet."
                    }
                }}
            </p>
            <div class="mt-4 flex flex-col gap-3 sm:flex-row">
                <Button disabled=busy on_click=on_check>
                    "Check again"
                </Button>
                <Show when=move || !email_verified.get()>
                    <Button disabled=busy on_click=on_resend>
                        "Resend verification email"
                    </Button>
                </Show>
            </div>
            {move || busy.get().then_some(view! { <div class="mt-4"><Spinner /></div> })}
            {move || {
                notice
                    .get()
                    .map(|message| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Info message=message />
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
        </div>
    }
}
