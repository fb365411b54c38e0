/// Search field used above the directory table.
use crate::shared::icons::icon;
use leptos::html::Input;
use leptos::prelude::*;

/// Text input that reports every keystroke, with a clear button.
///
/// `input_ref` lets the owner move focus after filling the field programmatically.
#[component]
pub fn SearchInput(
    /// Current field content
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new content on input and with `""` on clear
    #[prop(into)]
    on_change: Callback<String>,
    input_ref: NodeRef<Input>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search platforms, +tag or #category...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-box" style="position: relative; display: inline-flex; align-items: center;">
            <span style="position: absolute; left: 8px; color: #888; display: inline-flex;">
                {icon("search")}
            </span>
            <input
                type="text"
                id="search"
                node_ref=input_ref
                placeholder=placeholder
                autocomplete="off"
                style=move || format!(
                    "width: 320px; padding: 6px 32px 6px 30px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=move |_| on_change.run(String::new())
                        title="Clear"
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
