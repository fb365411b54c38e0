pub mod state;

use self::state::DirectoryHandle;
use super::row::PlatformRow;
use crate::domain::a001_platform::api::load_platforms;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::shared::directory::view_model::EMPTY_PLACEHOLDER;
use contracts::shared::directory::{DirectoryCommand, TableBody};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn PlatformDirectory() -> impl IntoView {
    let handle = DirectoryHandle::new();
    let directory_view = handle.view();

    // Single load at startup; the table shows a loading row until it resolves.
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = load_platforms().await;
        handle.load(outcome.platforms);
    });

    view! {
        <div class="directory">
            <div class="header">
                <h2>{"Platform Directory"}</h2>
                <div class="header__actions">
                    <SearchInput
                        value=handle.search_text()
                        on_change=Callback::new(move |text: String| {
                            handle.dispatch(DirectoryCommand::Search(text))
                        })
                        input_ref=handle.search_input()
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| handle.dispatch(DirectoryCommand::ToggleSort)
                    >
                        {icon("sort")}
                        {"Sort by name"}
                        {move || directory_view.with(|v| v.sort_indicator)}
                    </Button>
                    <span id="count" class="header__count">
                        {move || directory_view.with(|v| v.count_label.clone())}
                    </span>
                </div>
            </div>

            <div class="table-container">
                <table class="table__data table--striped platforms-table">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Platform"}</th>
                            <th class="table__header-cell">{"Category"}</th>
                            <th class="table__header-cell">{"Tags"}</th>
                        </tr>
                    </thead>
                    <tbody id="platforms-tbody">
                        {move || match directory_view.get().body {
                            TableBody::Loading => view! {
                                <tr>
                                    <td colspan="3" style="text-align: center; color: #666;">
                                        {"Loading platforms..."}
                                    </td>
                                </tr>
                            }.into_any(),
                            TableBody::Empty => view! {
                                <tr>
                                    <td colspan="3" style="text-align: center; color: #666;">
                                        {EMPTY_PLACEHOLDER}
                                    </td>
                                </tr>
                            }.into_any(),
                            TableBody::Rows(rows) => rows
                                .into_iter()
                                .map(|row| view! { <PlatformRow row=row handle=handle /> })
                                .collect_view()
                                .into_any(),
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
