//! Public landing page: hero, onboarding steps, metrics and pricing plans.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

/// One onboarding step in the "how it works" strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

/// A subscription tier on the pricing grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub title: &'static str,
    pub description: &'static str,
    /// Monthly price in whole dollars.
    pub price: u32,
    pub features: &'static [&'static str],
    pub recommended: bool,
}

/// A headline figure shown under the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STEPS: &[Step] = &[
    Step { title: "Create account", description: "Quickly sign up to start exploring opportunities." },
    Step { title: "Complete your profile", description: "Add details to enhance your visibility." },
    Step { title: "Find an investor", description: "Discover investors matching your goals." },
    Step { title: "Apply now", description: "Submit your pitch to secure funding." },
];

pub const PLANS: &[Plan] = &[
    Plan {
        title: "Basic",
        description: "Ideal for new startups exploring the platform.",
        price: 19,
        features: &[
            "Profile creation",
            "Basic search access",
            "Limited matches",
            "Email support",
            "Monthly reports",
            "Community access",
        ],
        recommended: false,
    },
    Plan {
        title: "Standard",
        description: "Perfect for growing startups seeking more opportunities.",
        price: 39,
        features: &[
            "All Basic features",
            "Advanced search filters",
            "Unlimited matches",
            "Priority support",
            "Weekly reports",
            "Networking events",
        ],
        recommended: true,
    },
    Plan {
        title: "Premium",
        description: "Comprehensive tools for established startups.",
        price: 59,
        features: &[
            "All Standard features",
            "Premium profile badge",
            "Dedicated account manager",
            "Custom analytics",
            "Exclusive events",
            "API access",
        ],
        recommended: false,
    },
];

pub const METRICS: &[Metric] = &[
    Metric { value: "1,200+", label: "Startups Onboarded" },
    Metric { value: "350+", label: "Active Investors" },
    Metric { value: "$48M", label: "Capital Raised" },
];

fn price_label(plan: &Plan) -> String {
    format!("${}/Month", plan.price)
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="home__nav">
                <span class="home__brand">"CoreUp"</span>
                <nav>
                    <A href="/login">"Log in"</A>
                    <A href="/signup" attr:class="btn btn--primary">"Get started"</A>
                </nav>
            </header>

            <section class="hero" aria-labelledby="hero-heading">
                <h1 id="hero-heading">"Where startups meet the investors who back them"</h1>
                <p>"Build your profile, get matched and close your round on one platform."</p>
                <A href="/investor/register" attr:class="btn btn--primary">"Join as an investor"</A>
            </section>

            <section class="metrics" aria-label="Platform metrics">
                {METRICS
                    .iter()
                    .map(|m| {
                        view! {
                            <div class="metric">
                                <span class="metric__value">{m.value}</span>
                                <span class="metric__label">{m.label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="steps" aria-labelledby="steps-heading">
                <h2 id="steps-heading">"How it works"</h2>
                <ol>
                    {STEPS
                        .iter()
                        .map(|s| {
                            view! {
                                <li class="step">
                                    <h3>{s.title}</h3>
                                    <p>{s.description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>

            <section class="plans" aria-labelledby="plans-heading">
                <h2 id="plans-heading">"Pricing"</h2>
                <div class="plans__grid">
                    {PLANS
                        .iter()
                        .map(|p| {
                            view! {
                                <article class="plan" class:plan--recommended=p.recommended>
                                    <h3>{p.title}</h3>
                                    <p>{p.description}</p>
                                    <p class="plan__price">{price_label(p)}</p>
                                    <ul>
                                        {p.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                    </ul>
                                    <A href="/signup" attr:class="btn">"Choose plan"</A>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <footer class="home__footer">"© CoreUp"</footer>
        </div>
    }
}
