//! Surveys list: table of the identity's surveys with edit, answer-link, and
//! delete actions.

use crate::app_lib::{AppError, dates, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::state::use_session;
use crate::features::surveys::client;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SurveysListPage() -> impl IntoView {
    let session = use_session();
    let (action_error, set_action_error) = signal::<Option<AppError>>(None);

    let surveys = LocalResource::new(move || {
        let token = session.token();
        async move {
            match token {
                Some(token) => client::list_surveys(&token).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let delete_action = Action::new_local(move |id: &u64| {
        let id = *id;
        async move {
            let Some(token) = session.token() else {
                return Err(AppError::Config("Sign in to delete surveys.".to_string()));
            };
            client::delete_survey(id, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    set_action_error.set(None);
                    surveys.refetch();
                }
                Err(err) => set_action_error.set(Some(err)),
            }
        }
    });

    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Surveys"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Questionnaires you own, newest first."
                        </p>
                    </div>
                    <A
                        href={paths::SURVEY_CREATE}
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                    >
                        "New survey"
                    </A>
                </div>

                {move || {
                    action_error
                        .get()
                        .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
                }}

                <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                <th scope="col" class=Theme::TH>"Title"</th>
                                <th scope="col" class=Theme::TH>"Questions"</th>
                                <th scope="col" class=Theme::TH>"Created"</th>
                                <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                    "Actions"
                                </th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            <Suspense fallback=move || view! {
                                <tr>
                                    <td colspan="4" class="px-6 py-12 text-center">
                                        <Spinner />
                                    </td>
                                </tr>
                            }>
                                {move || match surveys.get() {
                                    Some(Ok(list)) if list.is_empty() => view! {
                                        <tr>
                                            <td colspan="4" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                "No surveys yet. Create your first one."
                                            </td>
                                        </tr>
                                    }
                                    .into_any(),
                                    Some(Ok(list)) => view! {
                                        <For
                                            each=move || list.clone()
                                            key=|survey| survey.id
                                            children=move |survey| {
                                                let created = survey
                                                    .created_at
                                                    .as_deref()
                                                    .map(dates::format_from_now)
                                                    .unwrap_or_else(|| "-".to_string());
                                                let survey_id = survey.id;
                                                view! {
                                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                            <A
                                                                href=paths::survey_edit(survey.id)
                                                                {..}
                                                                class=Theme::LINK
                                                            >
                                                                {survey.title.clone()}
                                                            </A>
                                                        </td>
                                                        <td class=Theme::TD>
                                                            {survey.questions.len()}
                                                        </td>
                                                        <td class=Theme::TD>{created}</td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium space-x-4">
                                                            <A
                                                                href=paths::survey_answer(&survey.public_id)
                                                                {..}
                                                                class=Theme::LINK
                                                            >
                                                                "Answer"
                                                            </A>
                                                            <A
                                                                href=paths::survey_edit(survey.id)
                                                                {..}
                                                                class=Theme::LINK
                                                            >
                                                                "Edit"
                                                            </A>
                                                            <button
                                                                type="button"
                                                                class="text-red-600 hover:text-red-800 dark:text-red-400"
                                                                on:click=move |_| {
                                                                    delete_action.dispatch(survey_id);
                                                                }
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    }
                                    .into_any(),
                                    Some(Err(err)) => view! {
                                        <tr>
                                            <td colspan="4" class="px-6 py-4">
                                                <Alert kind=AlertKind::Error message=err.to_string() />
                                            </td>
                                        </tr>
                                    }
                                    .into_any(),
                                    None => view! {
                                        <tr>
                                            <td colspan="4" class="px-6 py-12 text-center">
                                                <Spinner />
                                            </td>
                                        </tr>
                                    }
                                    .into_any(),
                                }}
                            </Suspense>
                        </tbody>
                    </table>
                </div>
            </div>
        </AppShell>
    }
}
