// =============================================================================
// Toorrii Web - Form Components
// =============================================================================
// Table of Contents:
// 1. TextInput
// 2. TextArea
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. TextInput
// -----------------------------------------------------------------------------

/// Labelled text input bound to a value signal.
#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };

    view! {
        <div class="form-field">
            <label class="form-label" for=name.clone()>
                {label}
            </label>
            <input
                id=name.clone()
                name=name
                type=input_type
                class="form-input"
                placeholder=placeholder
                disabled=move || disabled.get()
                required=required
                prop:value=move || value.get()
                on:input=move |e| on_input.run(event_target_value(&e))
            />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. TextArea
// -----------------------------------------------------------------------------

/// Multi-line text area.
#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] rows: u32,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let rows = if rows == 0 { 4 } else { rows };

    view! {
        <div class="form-field">
            <label class="form-label" for=name.clone()>
                {label}
            </label>
            <textarea
                id=name.clone()
                name=name
                class="form-textarea"
                placeholder=placeholder
                rows=rows
                disabled=move || disabled.get()
                required=required
                prop:value=move || value.get()
                on:input=move |e| on_input.run(event_target_value(&e))
            />
        </div>
    }
}
