//! 404 page component

use leptos::prelude::*;
use leptos_router::components::A;

/// Not-found page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-theme-primary">"404"</h1>
                <p class="mt-4 text-lg text-theme-secondary">"This page does not exist."</p>
                <div class="mt-8">
                    <A
                        href="/"
                        attr:class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    >
                        "Back to the home page"
                    </A>
                </div>
            </div>
        </div>
    }
}
