//! Schedules list: table of distribution schedules with edit and delete
//! actions. Survey titles are resolved from the surveys collection.

use crate::app_lib::{AppError, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::state::use_session;
use crate::features::schedules::client;
use crate::features::surveys::client as surveys_client;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;
use std::collections::HashMap;

#[component]
pub fn SchedulesListPage() -> impl IntoView {
    let session = use_session();
    let (action_error, set_action_error) = signal::<Option<AppError>>(None);

    let schedules = LocalResource::new(move || {
        let token = session.token();
        async move {
            match token {
                Some(token) => client::list_schedules(&token).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let surveys = LocalResource::new(move || {
        let token = session.token();
        async move {
            match token {
                Some(token) => surveys_client::list_surveys(&token).await,
                None => Ok(Vec::new()),
            }
        }
    });
    let survey_titles = Signal::derive(move || {
        surveys
            .get()
            .and_then(|result| result.ok())
            .map(|list| {
                list.into_iter()
                    .map(|survey| (survey.id, survey.title))
                    .collect::<HashMap<u64, String>>()
            })
            .unwrap_or_default()
    });

    let delete_action = Action::new_local(move |id: &u64| {
        let id = *id;
        async move {
            let Some(token) = session.token() else {
                return Err(AppError::Config("Sign in to delete schedules.".to_string()));
            };
            client::delete_schedule(id, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    set_action_error.set(None);
                    schedules.refetch();
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
                            "Schedules"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "When and to whom your surveys go out."
                        </p>
                    </div>
                    <A
                        href={paths::SCHEDULE_CREATE}
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                    >
                        "New schedule"
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
                                <th scope="col" class=Theme::TH>"Survey"</th>
                                <th scope="col" class=Theme::TH>"Starts"</th>
                                <th scope="col" class=Theme::TH>"Frequency"</th>
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
                                {move || match schedules.get() {
                                    Some(Ok(list)) if list.is_empty() => view! {
                                        <tr>
                                            <td colspan="4" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                "No schedules yet."
                                            </td>
                                        </tr>
                                    }
                                    .into_any(),
                                    Some(Ok(list)) => view! {
                                        <For
                                            each=move || list.clone()
                                            key=|schedule| schedule.id
                                            children=move |schedule| {
                                                let schedule_id = schedule.id;
                                                let survey_id = schedule.survey_id;
                                                let title = move || {
                                                    survey_titles
                                                        .get()
                                                        .get(&survey_id)
                                                        .cloned()
                                                        .unwrap_or_else(|| {
                                                            format!("Survey #{survey_id}")
                                                        })
                                                };
                                                view! {
                                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                            <A
                                                                href=paths::schedule_edit(schedule_id)
                                                                {..}
                                                                class=Theme::LINK
                                                            >
                                                                {title}
                                                            </A>
                                                        </td>
                                                        <td class=Theme::TD>
                                                            {schedule.starts_at.clone()}
                                                        </td>
                                                        <td class=Theme::TD>
                                                            {schedule.frequency.label()}
                                                        </td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium space-x-4">
                                                            <A
                                                                href=paths::schedule_edit(schedule_id)
                                                                {..}
                                                                class=Theme::LINK
                                                            >
                                                                "Edit"
                                                            </A>
                                                            <button
                                                                type="button"
                                                                class="text-red-600 hover:text-red-800 dark:text-red-400"
                                                                on:click=move |_| {
                                                                    delete_action.dispatch(schedule_id);
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
