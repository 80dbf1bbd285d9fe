//! Opportunity search at `/investor/search`.
//!
//! SYSTEM CONTEXT
//! ==============
//! All filtering and pagination happens in `state::search`; this page binds
//! one dropdown per `FilterDimension`, the free-text box and the pager to
//! the shared `RwSignal<SearchState>`.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::opportunity_card::OpportunityCard;
use crate::state::search::{FilterDimension, SearchState};

#[component]
fn FilterSelect(dimension: FilterDimension) -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let select_id = format!("filter-{dimension:?}").to_lowercase();
    let current = move || search.with(|s| s.filters.get(dimension).unwrap_or_default().to_owned());
    view! {
        <div class="search-filter">
            <label for=select_id.clone()>{dimension.label()}</label>
            <select
                id=select_id
                prop:value=current
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    search.update(|s| s.set_filter(dimension, Some(value)));
                }
            >
                <option value="">"Any"</option>
                {dimension
                    .options()
                    .iter()
                    .map(|option| {
                        let value = option.value;
                        view! {
                            <option value=value selected=move || current() == value>
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn Pager() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let position = move || search.with(|s| {
        let page = s.current_page();
        (page.page, page.total_pages, page.has_previous(), page.has_next())
    });
    view! {
        <nav class="pager" aria-label="Search results pages">
            <button
                class="btn"
                disabled=move || !position().2
                on:click=move |_| search.update(SearchState::previous_page)
            >
                "Previous"
            </button>
            <span class="pager__position">
                {move || {
                    let (page, total, _, _) = position();
                    format!("Page {page} of {total}")
                }}
            </span>
            <button class="btn" disabled=move || !position().3 on:click=move |_| search.update(SearchState::next_page)>
                "Next"
            </button>
        </nav>
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();

    let results = move || {
        search.with(|s| {
            let page = s.current_page();
            (page.items.into_iter().cloned().collect::<Vec<_>>(), page.total_items)
        })
    };

    view! {
        <Title text="Search Opportunities - CoreUp"/>
        <section class="search">
            <h1>"Search Opportunities"</h1>
            <div class="search__query">
                <input
                    type="search"
                    aria-label="Search by title or description"
                    placeholder="Search opportunities"
                    prop:value=move || search.with(|s| s.filters.query.clone())
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        search.update(|s| s.set_query(query));
                    }
                />
                <button
                    class="btn"
                    disabled=move || search.with(|s| s.filters.is_empty())
                    on:click=move |_| search.update(SearchState::clear_filters)
                >
                    "Clear filters"
                </button>
            </div>
            <div class="search__filters">
                {FilterDimension::ALL
                    .into_iter()
                    .map(|dimension| view! { <FilterSelect dimension/> })
                    .collect_view()}
            </div>

            {move || {
                let (items, total) = results();
                if total == 0 {
                    return view! {
                        <p class="empty-state" role="status">"No opportunities match your filters."</p>
                    }
                        .into_any();
                }
                view! {
                    <p class="search__count" role="status">{format!("{total} opportunities found")}</p>
                    <div class="search__results">
                        {items.into_iter().map(|opportunity| view! { <OpportunityCard opportunity/> }).collect_view()}
                    </div>
                }
                    .into_any()
            }}

            <Pager/>
        </section>
    }
}
