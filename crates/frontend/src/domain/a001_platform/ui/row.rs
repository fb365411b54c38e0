use super::directory::state::DirectoryHandle;
use crate::shared::icons::icon;
use contracts::shared::directory::view_model::{DetailLine, TagChip};
use contracts::shared::directory::{DirectoryCommand, PlatformRowView};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Clicks on links open the link and never toggle the row.
fn originates_on_link(ev: &MouseEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|el| el.tag_name().eq_ignore_ascii_case("a"))
        .unwrap_or(false)
}

/// Summary row and its details row.
#[component]
#[allow(non_snake_case)]
pub fn PlatformRow(row: PlatformRowView, handle: DirectoryHandle) -> impl IntoView {
    let index = row.index;
    let expanded = row.expanded;
    let row_id = row.row_id();
    let details_id = row.details_id();
    let indicator = row.indicator();
    let website = row.website.clone();
    let category = row.category.clone();
    let category_for_click = row.category.clone();

    let on_row_click = move |ev: MouseEvent| {
        if originates_on_link(&ev) {
            return;
        }
        handle.dispatch(DirectoryCommand::ExpandRow(index));
    };

    view! {
        <tr
            class={if expanded { "platform-row expanded" } else { "platform-row" }}
            id=row_id
            data-platform-id=index.to_string()
            style="cursor: pointer;"
            on:click=on_row_click
        >
            <td>
                <div class="platform-header">
                    <span class="expand-indicator">{indicator}</span>
                    <div class="platform-info">
                        <div class="platform-name">{row.name}</div>
                        <a href=website target="_blank" rel="noopener" class="platform-url">
                            {row.website}
                        </a>
                    </div>
                </div>
            </td>
            <td>
                <div
                    class="category-info"
                    style="cursor: pointer;"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        handle.filter_by_category(&category_for_click);
                    }
                >
                    {category}
                </div>
            </td>
            <td>
                <div class="tags">
                    {row.tags
                        .into_iter()
                        .map(|chip| view! { <TagChipView chip=chip handle=handle /> })
                        .collect_view()}
                </div>
            </td>
        </tr>
        <tr
            class="platform-details"
            id=details_id
            style:display={if expanded { "table-row" } else { "none" }}
        >
            <td colspan="3">
                <div class="details-content">
                    {row.details
                        .into_iter()
                        .map(|line| view! { <DetailRow line=line /> })
                        .collect_view()}
                </div>
            </td>
        </tr>
    }
}

#[component]
#[allow(non_snake_case)]
fn TagChipView(chip: TagChip, handle: DirectoryHandle) -> impl IntoView {
    let text = chip.text.clone();

    view! {
        <span
            class=chip.class
            style="cursor: pointer;"
            on:click=move |ev: MouseEvent| {
                ev.stop_propagation();
                handle.filter_by_tag(&text);
            }
        >
            {chip.text}
        </span>
    }
}

#[component]
#[allow(non_snake_case)]
fn DetailRow(line: DetailLine) -> impl IntoView {
    let label = format!("{}:", line.label);
    let href = line.value.clone();
    let value = if line.is_link {
        view! {
            <a href=href target="_blank" rel="noopener" class="detail-link">
                {line.value}
                " "
                {icon("external")}
            </a>
        }
        .into_any()
    } else {
        view! { <span>{line.value}</span> }.into_any()
    };

    view! {
        <div class="detail-row">
            <strong>{label}</strong>
            " "
            {value}
        </div>
    }
}
