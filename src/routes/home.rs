//! Landing page. Guests get a short pitch and a sign-in link; signed-in users
//! get quick links and their practice areas.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::state::use_session;
use crate::features::practices::client;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.is_authenticated;

    let practices = LocalResource::new(move || {
        let token = session.token();
        async move {
            match token {
                Some(token) => client::list_practices(&token).await.map(Some),
                None => Ok(None),
            }
        }
    });

    view! {
        <AppShell>
            <div class="max-w-3xl mx-auto space-y-8">
                <div class="space-y-2">
                    <h1 class="text-3xl font-semibold text-gray-900 dark:text-white">
                        "Sondeo"
                    </h1>
                    <p class="text-gray-500 dark:text-gray-400">
                        "Create surveys, schedule their distribution, and collect answers."
                    </p>
                </div>

                <Show
                    when=move || is_authenticated.get()
                    fallback=move || {
                        view! {
                            <p class="text-gray-600 dark:text-gray-300">
                                <A href={paths::LOGIN} {..} class=Theme::LINK.to_string()>
                                    "Sign in"
                                </A>
                                " to manage your surveys and schedules."
                            </p>
                        }
                    }
                >
                    <div class="grid gap-4 sm:grid-cols-2">
                        <div class=Theme::CARD>
                            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                                "Surveys"
                            </h2>
                            <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                                "Build questionnaires and share answer links."
                            </p>
                            <div class="mt-3">
                                <A href={paths::SURVEYS} {..} class=Theme::LINK.to_string()>
                                    "Open surveys"
                                </A>
                            </div>
                        </div>
                        <div class=Theme::CARD>
                            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                                "Schedules"
                            </h2>
                            <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                                "Send surveys to groups on a recurrence."
                            </p>
                            <div class="mt-3">
                                <A href={paths::SCHEDULES} {..} class=Theme::LINK.to_string()>
                                    "Open schedules"
                                </A>
                            </div>
                        </div>
                    </div>

                    <div class="mt-8">
                        <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                            "Practice areas"
                        </h2>
                        <div class="mt-3">
                            {move || match practices.get() {
                                Some(Ok(Some(list))) if list.is_empty() => view! {
                                    <p class="text-sm text-gray-500 dark:text-gray-400">
                                        "No practice areas yet."
                                    </p>
                                }
                                .into_any(),
                                Some(Ok(Some(list))) => view! {
                                    <ul class="space-y-2">
                                        <For
                                            each=move || list.clone()
                                            key=|practice| practice.id
                                            children=|practice| {
                                                view! {
                                                    <li class=Theme::CARD>
                                                        <span class="font-medium text-gray-900 dark:text-white">
                                                            {practice.name.clone()}
                                                        </span>
                                                        {practice
                                                            .description
                                                            .clone()
                                                            .map(|text| {
                                                                view! {
                                                                    <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                                                                        {text}
                                                                    </p>
                                                                }
                                                            })}
                                                    </li>
                                                }
                                            }
                                        />
                                    </ul>
                                }
                                .into_any(),
                                Some(Ok(None)) => ().into_any(),
                                Some(Err(err)) => view! {
                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                }
                                .into_any(),
                                None => view! { <Spinner /> }.into_any(),
                            }}
                        </div>
                    </div>
                </Show>
            </div>
        </AppShell>
    }
}
