use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::state::use_session;
use crate::features::schedules::{client, types::SchedulePayload};
use crate::routes::paths;
use crate::routes::schedules::form::ScheduleForm;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
pub fn ScheduleEditPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let params = use_params_map();
    let (error, set_error) = signal::<Option<AppError>>(None);

    let schedule = LocalResource::new(move || {
        let id = params.with(|map| {
            map.get("id")
                .and_then(|value| value.parse::<u64>().ok())
        });
        let token = session.token();
        async move {
            match (id, token) {
                (Some(id), Some(token)) => client::get_schedule(id, &token).await,
                (None, _) => Err(AppError::Config("Unknown schedule.".to_string())),
                (_, None) => Err(AppError::Config("Sign in to edit schedules.".to_string())),
            }
        }
    });

    let update_action = Action::new_local(move |input: &(u64, SchedulePayload)| {
        let (id, payload) = input.clone();
        async move {
            let Some(token) = session.token() else {
                return Err(AppError::Config("Sign in to edit schedules.".to_string()));
            };
            client::update_schedule(id, &payload, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(_) => navigate(paths::SCHEDULES, Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    view! {
        <AppShell>
            <div class="space-y-6">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white text-center">
                    "Edit schedule"
                </h1>
                {move || match schedule.get() {
                    Some(Ok(record)) => {
                        let schedule_id = record.id;
                        let on_submit = Callback::new(move |payload: SchedulePayload| {
                            set_error.set(None);
                            update_action.dispatch((schedule_id, payload));
                        });
                        view! {
                            <ScheduleForm
                                initial=record
                                submit_label="Save changes"
                                on_submit=on_submit
                                pending=update_action.pending()
                                error=error
                            />
                        }
                        .into_any()
                    }
                    Some(Err(err)) => view! {
                        <div class="max-w-xl mx-auto">
                            <Alert kind=AlertKind::Error message=err.to_string() />
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="text-center"><Spinner /></div>
                    }
                    .into_any(),
                }}
            </div>
        </AppShell>
    }
}
