use leptos::prelude::*;

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// Whether field is required (enforced by the browser before submit)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Autocomplete hint for the browser
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                type=input_type
                class="input-base"
                placeholder=placeholder
                autocomplete=autocomplete
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    /// Field label text
    label: String,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
    /// Whether field is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">{label}</label>
            <select
                class="select-base"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                {options
                    .into_iter()
                    .map(|(option_value, display)| {
                        view! { <option value=option_value>{display}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
