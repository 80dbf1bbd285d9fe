//! Portfolio dashboard: connection requests and current investments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route after login. Reads and mutates the shared
//! `RwSignal<PortfolioState>`; every action is local.

use leptos::prelude::*;

use crate::components::opportunity_card::OpportunityCard;
use crate::state::portfolio::{PortfolioState, PortfolioTab};
use crate::util::clock::short_date;

#[component]
fn StatCard(#[prop(into)] label: String, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{move || value.get()}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}

#[component]
fn TabButton(tab: PortfolioTab) -> impl IntoView {
    let portfolio = expect_context::<RwSignal<PortfolioState>>();
    let active = move || portfolio.with(|p| p.tab == tab);
    view! {
        <button
            class="tab"
            class:tab--active=active
            role="tab"
            aria-selected=move || active().to_string()
            on:click=move |_| portfolio.update(|p| p.set_tab(tab))
        >
            {tab.label()}
        </button>
    }
}

#[component]
fn ConnectionRequests() -> impl IntoView {
    let portfolio = expect_context::<RwSignal<PortfolioState>>();
    move || {
        let requests = portfolio.with(|p| p.requests.clone());
        if requests.is_empty() {
            return view! { <p class="empty-state">"No pending connection requests."</p> }.into_any();
        }
        requests
            .into_iter()
            .map(|request| {
                let id = request.opportunity.id.clone();
                let reject_id = id.clone();
                let received = format!("Requested {}", short_date(request.request_date.date()));
                view! {
                    <div class="request">
                        <span class="request__date">{received}</span>
                        <OpportunityCard
                            opportunity=request.opportunity
                            actions=Box::new(move || {
                                view! {
                                    <button
                                        class="btn btn--primary"
                                        on:click=move |_| {
                                            portfolio.update(|p| {
                                                p.accept_request(&id);
                                            });
                                        }
                                    >
                                        "Accept"
                                    </button>
                                    <button
                                        class="btn"
                                        on:click=move |_| {
                                            portfolio.update(|p| {
                                                p.reject_request(&reject_id);
                                            });
                                        }
                                    >
                                        "Reject"
                                    </button>
                                }
                                    .into_any()
                            })
                        />
                    </div>
                }
            })
            .collect_view()
            .into_any()
    }
}

#[component]
fn Investments() -> impl IntoView {
    let portfolio = expect_context::<RwSignal<PortfolioState>>();
    move || {
        let investments = portfolio.with(|p| p.investments.clone());
        if investments.is_empty() {
            return view! { <p class="empty-state">"You have no investments yet."</p> }.into_any();
        }
        investments
            .into_iter()
            .map(|opportunity| {
                let id = opportunity.id.clone();
                view! {
                    <OpportunityCard
                        opportunity
                        actions=Box::new(move || {
                            view! {
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| {
                                        portfolio.update(|p| {
                                            p.remove_investment(&id);
                                        });
                                    }
                                >
                                    "Remove"
                                </button>
                            }
                                .into_any()
                        })
                    />
                }
            })
            .collect_view()
            .into_any()
    }
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let portfolio = expect_context::<RwSignal<PortfolioState>>();
    let pending = Signal::derive(move || portfolio.with(PortfolioState::pending_count));
    let invested = Signal::derive(move || portfolio.with(|p| p.investments.len()));

    view! {
        <section class="portfolio">
            <h1>"Portfolio"</h1>
            <div class="portfolio__stats">
                <StatCard label="Awaiting Responses" value=pending/>
                <StatCard label="Investments" value=invested/>
            </div>
            <div class="tabs" role="tablist">
                <TabButton tab=PortfolioTab::ConnectionRequests/>
                <TabButton tab=PortfolioTab::Investments/>
            </div>
            <div class="portfolio__panel" role="tabpanel">
                {move || match portfolio.with(|p| p.tab) {
                    PortfolioTab::ConnectionRequests => view! { <ConnectionRequests/> }.into_any(),
                    PortfolioTab::Investments => view! { <Investments/> }.into_any(),
                }}
            </div>
        </section>
    }
}
