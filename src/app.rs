use leptos::prelude::*;
use crate::core::CardTheme;
use crate::pages::TaskBoard;

#[component]
pub fn App() -> impl IntoView {
    provide_context(CardTheme::default());

    view! {
        <main class="app">
            <h1>"Tasks"</h1>
            <TaskBoard />
        </main>
    }
}
