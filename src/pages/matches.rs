//! Suggested opportunities at `/investor/matches`.
//!
//! Matches are page-local: removing one hides it until the page is
//! re-mounted.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::opportunity_card::OpportunityCard;
use crate::net::mock;

#[component]
pub fn MatchesPage() -> impl IntoView {
    let matches = RwSignal::new(mock::opportunities());

    let on_remove = move |id: String| {
        matches.update(|list| list.retain(|o| o.id != id));
        log::info!("removed match {id}");
    };

    view! {
        <Title text="Investment Matches - CoreUp"/>
        <section class="matches" aria-labelledby="matches-heading">
            <h1 id="matches-heading">"Investment Opportunities"</h1>
            {move || {
                let list = matches.get();
                if list.is_empty() {
                    return view! { <p class="empty-state">"No matches right now. Check back soon."</p> }.into_any();
                }
                view! {
                    <div class="matches__grid">
                        {list
                            .into_iter()
                            .map(|opportunity| {
                                let id = opportunity.id.clone();
                                view! {
                                    <OpportunityCard
                                        opportunity
                                        actions=Box::new(move || {
                                            view! {
                                                <button class="btn" on:click=move |_| on_remove(id.clone())>
                                                    "Remove"
                                                </button>
                                            }
                                                .into_any()
                                        })
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
