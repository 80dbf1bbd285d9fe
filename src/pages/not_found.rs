//! Fallback for unknown paths.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="404 - Page Not Found - CoreUp"/>
        <main class="not-found" aria-label="Page Not Found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/" attr:class="btn btn--primary">"Go Home"</A>
        </main>
    }
}
