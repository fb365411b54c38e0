use crate::domain::a001_platform::ui::directory::PlatformDirectory;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="content">
            <PlatformDirectory />
        </main>
    }
}
