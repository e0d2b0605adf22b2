//! Answer route: renders a survey's questions for a respondent and submits
//! one response payload. Reached through the shareable public link.

use crate::app_lib::{AppError, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::use_session;
use crate::features::responses::{
    client as responses_client,
    types::{Answer, ResponsePayload},
};
use crate::features::surveys::{
    client,
    types::{Question, QuestionType, Survey},
};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;
use std::collections::HashMap;

/// Adds the option to a comma-joined selection, or removes it when present.
fn toggle_option(current: &str, option: &str) -> String {
    let mut parts: Vec<&str> = current
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if let Some(position) = parts.iter().position(|part| *part == option) {
        parts.remove(position);
    } else {
        parts.push(option);
    }
    parts.join(", ")
}

fn is_selected(current: &str, option: &str) -> bool {
    current
        .split(',')
        .map(str::trim)
        .any(|part| part == option)
}

#[component]
pub fn SurveyAnswerPage() -> impl IntoView {
    let session = use_session();
    let params = leptos_router::hooks::use_params_map();

    let survey = LocalResource::new(move || {
        let public_id = params.with(|map| map.get("id").unwrap_or_default());
        let token = session.token();
        async move {
            match token {
                Some(token) => client::get_survey(&public_id, &token).await,
                None => Err(AppError::Config("Sign in to answer surveys.".to_string())),
            }
        }
    });

    view! {
        <AppShell>
            <div class="max-w-2xl mx-auto">
                {move || match survey.get() {
                    Some(Ok(record)) => view! { <AnswerForm survey=record /> }.into_any(),
                    Some(Err(err)) => view! {
                        <Alert kind=AlertKind::Error message=err.to_string() />
                    }
                    .into_any(),
                    None => view! { <div class="text-center"><Spinner /></div> }.into_any(),
                }}
            </div>
        </AppShell>
    }
}

#[component]
fn AnswerForm(survey: Survey) -> impl IntoView {
    let session = use_session();
    let answers = RwSignal::new(HashMap::<u64, String>::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (submitted, set_submitted) = signal(false);

    let survey_id = survey.id;
    let questions = survey.questions.clone();

    let submit_action = Action::new_local(move |payload: &ResponsePayload| {
        let payload = payload.clone();
        async move {
            let Some(token) = session.token() else {
                return Err(AppError::Config("Sign in to answer surveys.".to_string()));
            };
            responses_client::submit_response(&payload, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(_) => set_submitted.set(true),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let question_ids: Vec<u64> = questions.iter().filter_map(|question| question.id).collect();
    let on_submit = Callback::new(move |_: ()| {
        set_error.set(None);

        let values = answers.get_untracked();
        let collected: Vec<Answer> = question_ids
            .iter()
            .filter_map(|id| {
                let value = values.get(id).cloned().unwrap_or_default();
                let trimmed = value.trim().to_string();
                (!trimmed.is_empty()).then_some(Answer {
                    question_id: *id,
                    value: trimmed,
                })
            })
            .collect();
        if collected.is_empty() {
            set_error.set(Some(AppError::Config(
                "Answer at least one question.".to_string(),
            )));
            return;
        }

        submit_action.dispatch(ResponsePayload {
            survey_id,
            answers: collected,
        });
    });

    view! {
        <Show
            when=move || !submitted.get()
            fallback=move || {
                view! {
                    <div class="space-y-4">
                        <Alert
                            kind=AlertKind::Success
                            message="Thanks, your answers were recorded.".to_string()
                        />
                        <A href={paths::HOME} {..} class=Theme::LINK>
                            "Back to home"
                        </A>
                    </div>
                }
            }
        >
            <div class="space-y-6">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        {survey.title.clone()}
                    </h1>
                    {survey
                        .description
                        .clone()
                        .map(|text| {
                            view! {
                                <p class="text-sm text-gray-500 dark:text-gray-400">{text}</p>
                            }
                        })}
                </div>

                {questions
                    .iter()
                    .map(|question| question_row(question, answers))
                    .collect_view()}

                <Button disabled=submit_action.pending() on_click=on_submit>
                    "Submit answers"
                </Button>
                {move || {
                    submit_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
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
        </Show>
    }
}

fn question_row(question: &Question, answers: RwSignal<HashMap<u64, String>>) -> impl IntoView {
    let Some(question_id) = question.id else {
        return ().into_any();
    };
    let set_value = move |value: String| {
        answers.update(|map| {
            map.insert(question_id, value);
        });
    };
    let current = move || {
        answers
            .get()
            .get(&question_id)
            .cloned()
            .unwrap_or_default()
    };

    let control = match question.question_type {
        QuestionType::Text => view! {
            <input
                type="text"
                class=Theme::INPUT
                prop:value=current
                on:input=move |event| set_value(event_target_value(&event))
            />
        }
        .into_any(),
        QuestionType::SingleChoice => {
            let options = question.options.clone();
            view! {
                <select
                    class=Theme::INPUT
                    on:change=move |event| set_value(event_target_value(&event))
                >
                    <option value="" selected=move || current().is_empty()>
                        "Choose..."
                    </option>
                    {options
                        .into_iter()
                        .map(|option| {
                            let chosen = option.clone();
                            view! {
                                <option
                                    value=option.clone()
                                    selected=move || current() == chosen
                                >
                                    {option.clone()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        QuestionType::MultipleChoice => {
            let options = question.options.clone();
            view! {
                <div class="space-y-2">
                    {options
                        .into_iter()
                        .map(|option| {
                            let toggled = option.clone();
                            let checked_option = option.clone();
                            view! {
                                <label class="flex items-center gap-2 text-sm text-gray-900 dark:text-white">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            is_selected(&current(), &checked_option)
                                        }
                                        on:change=move |_| {
                                            let next = toggle_option(&current(), &toggled);
                                            set_value(next);
                                        }
                                    />
                                    {option}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
        QuestionType::Scale => view! {
            <select
                class=Theme::INPUT
                on:change=move |event| set_value(event_target_value(&event))
            >
                <option value="" selected=move || current().is_empty()>
                    "Choose..."
                </option>
                {(1..=10)
                    .map(|step| {
                        let value = step.to_string();
                        let chosen = value.clone();
                        view! {
                            <option value=value.clone() selected=move || current() == chosen>
                                {value.clone()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
    };

    view! {
        <div class=Theme::CARD>
            <label class=Theme::LABEL>{question.text.clone()}</label>
            {control}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::{is_selected, toggle_option};

    #[test]
    fn toggle_option_adds_and_removes() {
        let selection = toggle_option("", "Yes");
        assert_eq!(selection, "Yes");

        let selection = toggle_option(&selection, "Maybe");
        assert_eq!(selection, "Yes, Maybe");

        let selection = toggle_option(&selection, "Yes");
        assert_eq!(selection, "Maybe");
    }

    #[test]
    fn is_selected_matches_whole_options() {
        assert!(is_selected("Yes, Maybe", "Maybe"));
        assert!(!is_selected("Yes, Maybe", "May"));
        assert!(!is_selected("", "Yes"));
    }
}
