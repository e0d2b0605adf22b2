//! Shared layout wrapper with navigation and content container. It centralizes
//! header markup so routes can focus on content. Navigation remains
//! client-side; the API enforces access control on every request.

use crate::app_lib::build_info;
use crate::features::auth::state::use_session;
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

/// Wraps routes with a header, main content container, and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let session = use_session();
    let is_authenticated = session.is_authenticated;
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            session.logout().await;
            navigate(paths::LOGIN, Default::default());
        });
        set_menu_open.set(false);
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href={paths::HOME}
                        {..}
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <img src="/logo.svg" class="h-8" alt="sondeo" />
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "Sondeo"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 rtl:space-x-reverse md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                            <Show when=move || is_authenticated.get()>
                                <li>
                                    <A
                                        href={paths::SURVEYS}
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Surveys"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href={paths::SCHEDULES}
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Schedules"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href={paths::PROFILE}
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Profile"
                                    </A>
                                </li>
                            </Show>
                            <li>
                                <Show
                                    when=move || is_authenticated.get()
                                    fallback=move || {
                                        view! {
                                            <A
                                                href={paths::LOGIN}
                                                {..}
                                                class=NAV_LINK
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                "Sign In"
                                            </A>
                                        }
                                    }
                                >
                                    <button type="button" class=NAV_LINK on:click=on_sign_out.clone()>
                                        "Sign Out"
                                    </button>
                                </Show>
                            </li>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="py-4 text-center text-xs text-gray-400 dark:text-gray-600">
                {format!("sondeo-web {}", build_info::git_commit_hash())}
            </footer>
        </div>
    }
}
