use crate::app_lib::AppError;
use crate::components::AppShell;
use crate::features::auth::state::use_session;
use crate::features::schedules::{client, types::SchedulePayload};
use crate::routes::paths;
use crate::routes::schedules::form::ScheduleForm;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn ScheduleCreatePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (error, set_error) = signal::<Option<AppError>>(None);

    let create_action = Action::new_local(move |payload: &SchedulePayload| {
        let payload = payload.clone();
        async move {
            let Some(token) = session.token() else {
                return Err(AppError::Config("Sign in to create schedules.".to_string()));
            };
            client::create_schedule(&payload, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(_) => navigate(paths::SCHEDULES, Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = Callback::new(move |payload: SchedulePayload| {
        set_error.set(None);
        create_action.dispatch(payload);
    });

    view! {
        <AppShell>
            <div class="space-y-6">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white text-center">
                    "New schedule"
                </h1>
                <ScheduleForm
                    submit_label="Create schedule"
                    on_submit=on_submit
                    pending=create_action.pending()
                    error=error
                />
            </div>
        </AppShell>
    }
}
