//! Labeled input shared by every form. Keeps the field markup in one place so
//! route code only wires signals.

use crate::app_lib::theme::Theme;
use leptos::prelude::*;

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(String::new()))] value: Signal<String>,
    on_input: WriteSignal<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");

    view! {
        <div class="mb-5">
            <label class=Theme::LABEL for=id>
                {label}
            </label>
            <input
                id=id
                type=input_type
                class=Theme::INPUT
                autocomplete=autocomplete.unwrap_or("off")
                placeholder=placeholder.unwrap_or("")
                prop:value=move || value.get()
                on:input=move |event| on_input.set(event_target_value(&event))
            />
        </div>
    }
}
