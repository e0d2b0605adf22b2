//! Shared schedule form used by the create and edit routes. Survey and group
//! choices are loaded live; times are entered as local datetimes.

use crate::app_lib::{AppError, theme::Theme};
use crate::components::{Alert, AlertKind, Button, Spinner, TextField};
use crate::features::auth::state::use_session;
use crate::features::groups::client as groups_client;
use crate::features::schedules::types::{Frequency, Schedule, SchedulePayload};
use crate::features::surveys::client as surveys_client;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ScheduleForm(
    #[prop(optional)] initial: Option<Schedule>,
    submit_label: &'static str,
    on_submit: Callback<SchedulePayload>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] error: Signal<Option<AppError>>,
) -> impl IntoView {
    let session = use_session();

    let (survey, set_survey) = signal(
        initial
            .as_ref()
            .map(|schedule| schedule.survey_id.to_string())
            .unwrap_or_default(),
    );
    let (group, set_group) = signal(
        initial
            .as_ref()
            .and_then(|schedule| schedule.group_id)
            .map(|id| id.to_string())
            .unwrap_or_default(),
    );
    let (starts_at, set_starts_at) = signal(
        initial
            .as_ref()
            .map(|schedule| schedule.starts_at.clone())
            .unwrap_or_default(),
    );
    let (ends_at, set_ends_at) = signal(
        initial
            .as_ref()
            .and_then(|schedule| schedule.ends_at.clone())
            .unwrap_or_default(),
    );
    let (frequency, set_frequency) = signal(
        initial
            .as_ref()
            .map(|schedule| schedule.frequency)
            .unwrap_or(Frequency::Once),
    );
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let surveys = LocalResource::new(move || {
        let token = session.token();
        async move {
            match token {
                Some(token) => surveys_client::list_surveys(&token).await,
                None => Ok(Vec::new()),
            }
        }
    });
    let groups = LocalResource::new(move || {
        let token = session.token();
        async move {
            match token {
                Some(token) => groups_client::list_groups(&token).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let handle_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_form_error.set(None);

        let Ok(survey_id) = survey.get_untracked().parse::<u64>() else {
            set_form_error.set(Some("Pick a survey to distribute.".to_string()));
            return;
        };
        let starts_value = starts_at.get_untracked().trim().to_string();
        if starts_value.is_empty() {
            set_form_error.set(Some("A start time is required.".to_string()));
            return;
        }

        let ends_value = ends_at.get_untracked().trim().to_string();
        on_submit.run(SchedulePayload {
            survey_id,
            group_id: group.get_untracked().parse().ok(),
            starts_at: starts_value,
            ends_at: (!ends_value.is_empty()).then_some(ends_value),
            frequency: frequency.get_untracked(),
        });
    };

    view! {
        <form class="max-w-xl mx-auto space-y-6" on:submit=handle_submit>
            <div class=Theme::CARD>
                <div class="mb-5">
                    <label class=Theme::LABEL for="survey">"Survey"</label>
                    <select
                        id="survey"
                        class=Theme::INPUT
                        on:change=move |event| set_survey.set(event_target_value(&event))
                    >
                        <option value="" selected=move || survey.get().is_empty()>
                            "Choose a survey..."
                        </option>
                        {move || match surveys.get() {
                            Some(Ok(list)) => list
                                .into_iter()
                                .map(|item| {
                                    let value = item.id.to_string();
                                    let chosen = value.clone();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || survey.get() == chosen
                                        >
                                            {item.title}
                                        </option>
                                    }
                                })
                                .collect_view()
                                .into_any(),
                            _ => ().into_any(),
                        }}
                    </select>
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="group">"Recipient group (optional)"</label>
                    <select
                        id="group"
                        class=Theme::INPUT
                        on:change=move |event| set_group.set(event_target_value(&event))
                    >
                        <option value="" selected=move || group.get().is_empty()>
                            "Everyone"
                        </option>
                        {move || match groups.get() {
                            Some(Ok(list)) => list
                                .into_iter()
                                .map(|item| {
                                    let value = item.id.to_string();
                                    let chosen = value.clone();
                                    let label = match item.members_count {
                                        Some(count) => format!("{} ({count})", item.name),
                                        None => item.name,
                                    };
                                    view! {
                                        <option
                                            value=value
                                            selected=move || group.get() == chosen
                                        >
                                            {label}
                                        </option>
                                    }
                                })
                                .collect_view()
                                .into_any(),
                            _ => ().into_any(),
                        }}
                    </select>
                </div>
                <TextField
                    id="starts_at"
                    label="Starts at"
                    input_type="datetime-local"
                    value=starts_at
                    on_input=set_starts_at
                />
                <TextField
                    id="ends_at"
                    label="Ends at (optional)"
                    input_type="datetime-local"
                    value=ends_at
                    on_input=set_ends_at
                />
                <div class="mb-5">
                    <label class=Theme::LABEL for="frequency">"Frequency"</label>
                    <select
                        id="frequency"
                        class=Theme::INPUT
                        on:change=move |event| {
                            if let Some(kind) = Frequency::parse(&event_target_value(&event)) {
                                set_frequency.set(kind);
                            }
                        }
                    >
                        {Frequency::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option
                                        value=kind.as_str()
                                        selected=move || frequency.get() == kind
                                    >
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <Button button_type="submit" disabled=pending>
                {submit_label}
            </Button>
            {move || pending.get().then_some(view! { <div class="mt-4"><Spinner /></div> })}
            {move || {
                form_error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=message />
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
    }
}
