use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!("spinner spinner-circle {}", size.class());

    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    view! {
        <div class=full_classes role="status" aria-live="polite">
            <div class="spinner-circle-inner"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

/// Inline spinner for buttons or text
#[component]
pub fn InlineSpinner(
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    view! {
        <Spinner
            size=SpinnerSize::Small
            class=format!("spinner-inline {}", class)
        />
    }
}
