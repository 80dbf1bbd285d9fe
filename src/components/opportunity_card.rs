//! Listing card used by search, matches and the portfolio tabs.

#[cfg(test)]
#[path = "opportunity_card_test.rs"]
mod opportunity_card_test;

use leptos::prelude::*;

use crate::net::types::Opportunity;

/// Thousands-separated whole currency amount, e.g. `$2,100,000`.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[component]
pub fn OpportunityCard(
    opportunity: Opportunity,
    /// Optional trailing actions (accept/reject, remove, ...).
    #[prop(optional)]
    actions: Option<Children>,
) -> impl IntoView {
    let heading_id = format!("opportunity-{}", opportunity.id);
    let labelled_by = heading_id.clone();
    view! {
        <article class="opportunity-card" aria-labelledby=labelled_by>
            <header class="opportunity-card__header">
                <h3 id=heading_id>{opportunity.title}</h3>
                <span class="opportunity-card__badge">{opportunity.badge_text}</span>
            </header>
            <p class="opportunity-card__location">{opportunity.location}</p>
            <p class="opportunity-card__description">{opportunity.description}</p>
            <ul class="opportunity-card__highlights">
                {opportunity.highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}
            </ul>
            <dl class="opportunity-card__numbers">
                <dt>"Total required"</dt>
                <dd>{format_amount(opportunity.total_required)}</dd>
                <dt>"Min per investor"</dt>
                <dd>{format_amount(opportunity.min_per_investor)}</dd>
            </dl>
            {opportunity.details.map(|d| {
                view! {
                    <dl class="opportunity-card__details">
                        <dt>"Equity"</dt>
                        <dd>{format!("{}%", d.equity_percent)}</dd>
                        <dt>"Projected ROI"</dt>
                        <dd>{format!("{}%", d.projected_roi)}</dd>
                        <dt>"Founders"</dt>
                        <dd>{d.founders}</dd>
                        <dt>"Team size"</dt>
                        <dd>{d.company_size}</dd>
                    </dl>
                    <ul class="opportunity-card__traction">
                        {d.traction.into_iter().map(|t| view! { <li>{t}</li> }).collect_view()}
                    </ul>
                }
            })}
            {actions.map(|a| view! { <footer class="opportunity-card__actions">{a()}</footer> })}
        </article>
    }
}
