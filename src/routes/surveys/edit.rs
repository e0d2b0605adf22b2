//! Survey edit route: loads the survey, pre-fills the shared form, and shows
//! how many answers have come in.

use crate::app_lib::{AppError, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::state::use_session;
use crate::features::responses::client as responses_client;
use crate::features::surveys::{client, types::SurveyPayload};
use crate::routes::paths;
use crate::routes::surveys::form::SurveyForm;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
pub fn SurveyEditPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let params = use_params_map();
    let (error, set_error) = signal::<Option<AppError>>(None);

    let survey = LocalResource::new(move || {
        let identifier = params.with(|map| map.get("id").unwrap_or_default());
        let token = session.token();
        async move {
            match token {
                Some(token) => client::get_survey(&identifier, &token).await,
                None => Err(AppError::Config("Sign in to edit surveys.".to_string())),
            }
        }
    });

    let responses = LocalResource::new(move || {
        let token = session.token();
        async move {
            match token {
                Some(token) => responses_client::list_responses(&token).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let update_action = Action::new_local(move |input: &(u64, SurveyPayload)| {
        let (id, payload) = input.clone();
        async move {
            let Some(token) = session.token() else {
                return Err(AppError::Config("Sign in to edit surveys.".to_string()));
            };
            client::update_survey(id, &payload, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(_) => navigate(paths::SURVEYS, Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    view! {
        <AppShell>
            <div class="space-y-6">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white text-center">
                    "Edit survey"
                </h1>
                {move || match survey.get() {
                    Some(Ok(record)) => {
                        let survey_id = record.id;
                        let answered = responses.get().and_then(|result| result.ok()).map(
                            |list| {
                                list.iter()
                                    .filter(|response| response.survey_id == survey_id)
                                    .count()
                            },
                        );
                        let on_submit = Callback::new(move |payload: SurveyPayload| {
                            set_error.set(None);
                            update_action.dispatch((survey_id, payload));
                        });
                        view! {
                            <div class="max-w-2xl mx-auto">
                                <p class=Theme::TD>
                                    {match answered {
                                        Some(count) => format!("{count} answers so far"),
                                        None => "Counting answers...".to_string(),
                                    }}
                                </p>
                            </div>
                            <SurveyForm
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
                        <div class="max-w-2xl mx-auto">
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
