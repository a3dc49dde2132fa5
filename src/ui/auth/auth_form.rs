//! Shared login/registration form component
//!
//! One component drives all three faces of the flow: login, initial
//! registration, and OTP verification after a successful registration. The
//! transition logic lives in `core::auth::FormState`; this component binds
//! the inputs, runs the single in-flight backend call, and performs the side
//! effect the machine asks for (session cookie + navigation).

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::use_auth_context;
use super::session;
use crate::core::auth::{FormMode, FormState, Role, SubmitEffect, client};
use crate::ui::common::{ErrorMessage, FormField, InlineSpinner, SelectField, SuccessMessage};

/// Login/registration form. `mode` is fixed for the lifetime of the mount;
/// the registration flow reveals the OTP field after the initial call
/// succeeds.
#[component]
pub fn AuthForm(mode: FormMode) -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    let state = RwSignal::new(FormState::new(mode));

    let email = Signal::derive(move || state.with(|s| s.email.clone()));
    let password = Signal::derive(move || state.with(|s| s.password.clone()));
    let otp = Signal::derive(move || state.with(|s| s.otp.clone()));
    let role = Signal::derive(move || state.with(|s| s.role.as_str().to_string()));
    let submitting = Signal::derive(move || state.with(|s| s.submitting));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // No-op while a call is in flight: begin_submit rejects re-entry.
        let Some(call) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = client::dispatch(call).await;

            // try_update so a response landing after unmount is dropped
            let Some(effect) = state.try_update(|s| s.finish_submit(outcome)) else {
                return;
            };

            match effect {
                SubmitEffect::Stay => {}
                SubmitEffect::PersistAndNavigate { token, path } => {
                    if let Err(err) = session::persist_token(&token) {
                        state.try_update(|s| s.error = Some(err));
                        return;
                    }
                    auth.mark_signed_in();
                    navigate(path, Default::default());
                }
                SubmitEffect::Navigate { path } => {
                    navigate(path, Default::default());
                }
            }
        });
    };

    let title = match mode {
        FormMode::Login => "Login",
        FormMode::Register => "Register",
    };
    let subtitle = match mode {
        FormMode::Login => "Enter your credentials to access your account",
        FormMode::Register => "Enter your credentials to create your account",
    };

    let submit_label = move || {
        state.with(|s| {
            if s.shows_otp() {
                "Verify OTP"
            } else {
                match s.mode {
                    FormMode::Login => "Login",
                    FormMode::Register => "Register",
                }
            }
        })
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <form on:submit=on_submit class="space-y-5">
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-theme-primary">{title}</h2>
                    <p class="mt-2 text-sm text-theme-secondary">{subtitle}</p>
                </div>

                <FormField
                    label="Email".to_string()
                    required=true
                    input_type="email"
                    placeholder="Enter your email".to_string()
                    autocomplete="email"
                    value=email
                    on_input=Callback::new(move |value: String| {
                        state.update(|s| s.email = value);
                    })
                />

                <FormField
                    label="Password".to_string()
                    required=true
                    input_type="password"
                    placeholder="Enter your password".to_string()
                    autocomplete="current-password"
                    value=password
                    on_input=Callback::new(move |value: String| {
                        state.update(|s| s.password = value);
                    })
                />

                // Role picker: registration only, hidden once the OTP phase starts
                {move || {
                    state
                        .with(|s| s.shows_role())
                        .then(|| {
                            view! {
                                <SelectField
                                    label="Role".to_string()
                                    value=role
                                    on_change=Callback::new(move |value: String| {
                                        state
                                            .update(|s| {
                                                s.role = Role::parse(&value).unwrap_or_default();
                                            });
                                    })
                                    options=Role::ALL
                                        .iter()
                                        .map(|r| (r.as_str().to_string(), r.label().to_string()))
                                        .collect()
                                />
                            }
                        })
                }}

                // OTP entry: revealed after the initial registration succeeds
                {move || {
                    state
                        .with(|s| s.shows_otp())
                        .then(|| {
                            view! {
                                <FormField
                                    label="Enter OTP".to_string()
                                    required=true
                                    placeholder="Enter OTP".to_string()
                                    autocomplete="one-time-code"
                                    value=otp
                                    on_input=Callback::new(move |value: String| {
                                        state.update(|s| s.otp = value);
                                    })
                                    disabled=submitting
                                />
                            }
                        })
                }}

                <SuccessMessage message=notice />
                <ErrorMessage error=error />

                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                           text-white font-medium rounded-lg
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                    disabled=move || submitting.get()
                >
                    {move || {
                        if submitting.get() {
                            view! {
                                <span class="flex items-center justify-center gap-2">
                                    <InlineSpinner />
                                    "Processing..."
                                </span>
                            }
                                .into_any()
                        } else {
                            view! { <span class="block">{submit_label()}</span> }.into_any()
                        }
                    }}
                </button>

                <div class="text-center text-sm text-theme-secondary">
                    {match mode {
                        FormMode::Login => {
                            view! {
                                <p>
                                    "Don't have an account? "
                                    <A
                                        href="/register"
                                        attr:class="text-accent-primary hover:text-accent-primary-hover font-medium"
                                    >
                                        "Register"
                                    </A>
                                </p>
                            }
                                .into_any()
                        }
                        FormMode::Register => {
                            view! {
                                <p>
                                    "Already have an account? "
                                    <A
                                        href="/login"
                                        attr:class="text-accent-primary hover:text-accent-primary-hover font-medium"
                                    >
                                        "Login"
                                    </A>
                                </p>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </form>
        </div>
    }
}
