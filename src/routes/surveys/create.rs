use crate::app_lib::AppError;
use crate::components::AppShell;
use crate::features::auth::state::use_session;
use crate::features::surveys::{client, types::SurveyPayload};
use crate::routes::paths;
use crate::routes::surveys::form::SurveyForm;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SurveyCreatePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (error, set_error) = signal::<Option<AppError>>(None);

    let create_action = Action::new_local(move |payload: &SurveyPayload| {
        let payload = payload.clone();
        async move {
            let Some(token) = session.token() else {
                return Err(AppError::Config("Sign in to create surveys.".to_string()));
            };
            client::create_survey(&payload, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(_) => navigate(paths::SURVEYS, Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = Callback::new(move |payload: SurveyPayload| {
        set_error.set(None);
        create_action.dispatch(payload);
    });

    view! {
        <AppShell>
            <div class="space-y-6">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white text-center">
                    "New survey"
                </h1>
                <SurveyForm
                    submit_label="Create survey"
                    on_submit=on_submit
                    pending=create_action.pending()
                    error=error
                />
            </div>
        </AppShell>
    }
}
