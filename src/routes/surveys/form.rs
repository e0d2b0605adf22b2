//! Shared survey form used by the create and edit routes. Question rows are
//! edited in place; options for choice questions are entered comma-separated
//! and split on submit.

use crate::app_lib::{AppError, theme::Theme};
use crate::components::{Alert, AlertKind, Button, Spinner, TextField};
use crate::features::auth::state::use_session;
use crate::features::practices::client as practices_client;
use crate::features::surveys::types::{Question, QuestionType, Survey, SurveyPayload};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct QuestionDraft {
    key: usize,
    id: Option<u64>,
    text: RwSignal<String>,
    question_type: RwSignal<QuestionType>,
    /// Comma-separated in the form, split on submit.
    options: RwSignal<String>,
}

impl QuestionDraft {
    fn blank(key: usize) -> Self {
        Self {
            key,
            id: None,
            text: RwSignal::new(String::new()),
            question_type: RwSignal::new(QuestionType::Text),
            options: RwSignal::new(String::new()),
        }
    }

    fn from_question(key: usize, question: &Question) -> Self {
        Self {
            key,
            id: question.id,
            text: RwSignal::new(question.text.clone()),
            question_type: RwSignal::new(question.question_type),
            options: RwSignal::new(question.options.join(", ")),
        }
    }

    fn into_question(self) -> Question {
        Question {
            id: self.id,
            text: self.text.get_untracked().trim().to_string(),
            question_type: self.question_type.get_untracked(),
            options: split_options(&self.options.get_untracked()),
        }
    }
}

pub(super) fn split_options(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
pub fn SurveyForm(
    #[prop(optional)] initial: Option<Survey>,
    submit_label: &'static str,
    on_submit: Callback<SurveyPayload>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] error: Signal<Option<AppError>>,
) -> impl IntoView {
    let session = use_session();

    let (title, set_title) = signal(
        initial
            .as_ref()
            .map(|survey| survey.title.clone())
            .unwrap_or_default(),
    );
    let (description, set_description) = signal(
        initial
            .as_ref()
            .and_then(|survey| survey.description.clone())
            .unwrap_or_default(),
    );
    let (practice, set_practice) = signal(
        initial
            .as_ref()
            .and_then(|survey| survey.practice_id)
            .map(|id| id.to_string())
            .unwrap_or_default(),
    );

    let seeded: Vec<QuestionDraft> = match initial.as_ref() {
        Some(survey) if !survey.questions.is_empty() => survey
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionDraft::from_question(index, question))
            .collect(),
        _ => vec![QuestionDraft::blank(0)],
    };
    let next_key = RwSignal::new(seeded.len());
    let questions = RwSignal::new(seeded);
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let practices = LocalResource::new(move || {
        let token = session.token();
        async move {
            match token {
                Some(token) => practices_client::list_practices(&token).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let add_question = Callback::new(move |()| {
        let key = next_key.get_untracked();
        next_key.set(key + 1);
        questions.update(|list| list.push(QuestionDraft::blank(key)));
    });

    let handle_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_form_error.set(None);

        let title_value = title.get_untracked().trim().to_string();
        if title_value.is_empty() {
            set_form_error.set(Some("A title is required.".to_string()));
            return;
        }

        let question_values: Vec<Question> = questions
            .get_untracked()
            .into_iter()
            .map(QuestionDraft::into_question)
            .filter(|question| !question.text.is_empty())
            .collect();
        if question_values.is_empty() {
            set_form_error.set(Some("Add at least one question.".to_string()));
            return;
        }

        let description_value = description.get_untracked().trim().to_string();
        on_submit.run(SurveyPayload {
            title: title_value,
            description: (!description_value.is_empty()).then_some(description_value),
            practice_id: practice.get_untracked().parse().ok(),
            questions: question_values,
        });
    };

    view! {
        <form class="max-w-2xl mx-auto space-y-6" on:submit=handle_submit>
            <div class=Theme::CARD>
                <TextField
                    id="title"
                    label="Title"
                    placeholder="Quarterly team pulse"
                    value=title
                    on_input=set_title
                />
                <TextField
                    id="description"
                    label="Description (optional)"
                    value=description
                    on_input=set_description
                />
                <div class="mb-5">
                    <label class=Theme::LABEL for="practice">
                        "Practice area (optional)"
                    </label>
                    <select
                        id="practice"
                        class=Theme::INPUT
                        on:change=move |event| set_practice.set(event_target_value(&event))
                    >
                        <option value="" selected=move || practice.get().is_empty()>
                            "None"
                        </option>
                        {move || match practices.get() {
                            Some(Ok(list)) => list
                                .into_iter()
                                .map(|item| {
                                    let value = item.id.to_string();
                                    let chosen = value.clone();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || practice.get() == chosen
                                        >
                                            {item.name}
                                        </option>
                                    }
                                })
                                .collect_view()
                                .into_any(),
                            _ => ().into_any(),
                        }}
                    </select>
                </div>
            </div>

            <div class="space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                        "Questions"
                    </h2>
                    <Button on_click=add_question>"Add question"</Button>
                </div>
                <For
                    each=move || questions.get()
                    key=|draft| draft.key
                    children=move |draft| {
                        view! {
                            <div class=Theme::CARD>
                                <div class="mb-5">
                                    <label class=Theme::LABEL>"Question text"</label>
                                    <input
                                        type="text"
                                        class=Theme::INPUT
                                        prop:value=move || draft.text.get()
                                        on:input=move |event| {
                                            draft.text.set(event_target_value(&event))
                                        }
                                    />
                                </div>
                                <div class="mb-5">
                                    <label class=Theme::LABEL>"Answer kind"</label>
                                    <select
                                        class=Theme::INPUT
                                        on:change=move |event| {
                                            if let Some(kind) =
                                                QuestionType::parse(&event_target_value(&event))
                                            {
                                                draft.question_type.set(kind);
                                            }
                                        }
                                    >
                                        {QuestionType::ALL
                                            .into_iter()
                                            .map(|kind| {
                                                view! {
                                                    <option
                                                        value=kind.as_str()
                                                        selected=move || {
                                                            draft.question_type.get() == kind
                                                        }
                                                    >
                                                        {kind.label()}
                                                    </option>
                                                }
                                            })
                                            .collect_view()}
                                    </select>
                                </div>
                                <div class="mb-5">
                                    <label class=Theme::LABEL>
                                        "Choices (comma-separated, for choice kinds)"
                                    </label>
                                    <input
                                        type="text"
                                        class=Theme::INPUT
                                        placeholder="Yes, No, Maybe"
                                        prop:value=move || draft.options.get()
                                        on:input=move |event| {
                                            draft.options.set(event_target_value(&event))
                                        }
                                    />
                                </div>
                                <button
                                    type="button"
                                    class="text-sm text-red-600 hover:text-red-800 dark:text-red-400"
                                    on:click=move |_| {
                                        questions.update(|list| {
                                            list.retain(|item| item.key != draft.key)
                                        })
                                    }
                                >
                                    "Remove question"
                                </button>
                            </div>
                        }
                    }
                />
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

#[cfg(test)]
mod tests {
    use super::split_options;

    #[test]
    fn split_options_trims_and_drops_empties() {
        assert_eq!(split_options("Yes, No , ,Maybe"), vec!["Yes", "No", "Maybe"]);
        assert!(split_options("   ").is_empty());
        assert!(split_options("").is_empty());
    }
}
