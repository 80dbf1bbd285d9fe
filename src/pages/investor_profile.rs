//! Public investor profile card at `/profile`.
//!
//! The profile is static seed data until a profile backend exists.

#[cfg(test)]
#[path = "investor_profile_test.rs"]
mod investor_profile_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::net::types::PLACEHOLDER_AVATAR;

/// Read-only investor profile shown to other users.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvestorProfile {
    pub name: &'static str,
    pub country: &'static str,
    pub investment_range: &'static str,
    pub joined: &'static str,
    pub role: &'static str,
    pub about: &'static str,
    pub expertise: &'static [&'static str],
    pub industries: &'static [&'static str],
    pub stages: &'static [&'static str],
    pub locations: &'static [&'static str],
}

pub const SAMPLE_PROFILE: InvestorProfile = InvestorProfile {
    name: "Mohamed G.",
    country: "Egypt",
    investment_range: "$0 - $10,000,000",
    joined: "Feb, 2025",
    role: "Angel Investor",
    about: "I am Mohamed, a savvy Angel Investor based in UAE. I have been active in AI since 2025, and my \
            investment focus lies in Education & Training, Agriculture and Business across Pre-Startup/R&D \
            to Other stages.",
    expertise: &["Education & Training", "Agriculture", "Business"],
    industries: &[
        "Education & Training",
        "Agriculture",
        "Business Services",
        "Finance",
        "Energy & Natural Resources",
        "Property",
        "Software",
    ],
    stages: &["Pre-Startup/R&D", "MVP/Finished Product", "Achieving Sales", "Breaking Even", "Profitable", "Other"],
    locations: &["UAE", "Egypt", "Qatar", "Kuwait", "Lebanon", "Oman", "Saudi Arabia"],
};

const FLAG_CODES: &[(&str, &str)] = &[
    ("Egypt", "eg"),
    ("UAE", "ae"),
    ("Qatar", "qa"),
    ("Armenia", "am"),
    ("Azerbaijan", "az"),
    ("Kyrgyzstan", "kg"),
    ("Iraq", "iq"),
    ("Iran", "ir"),
    ("Kuwait", "kw"),
    ("Lebanon", "lb"),
    ("Oman", "om"),
    ("Syria", "sy"),
    ("Yemen", "ye"),
    ("Saudi Arabia", "sa"),
    ("Palestine", "ps"),
];

/// Small flag image for a country name; unknown countries get a generic flag.
pub fn flag_url(country: &str) -> String {
    let code = FLAG_CODES.iter().find(|(name, _)| *name == country).map_or("default", |(_, code)| *code);
    format!("https://flagcdn.com/24x18/{code}.png")
}

#[component]
fn TagList(#[prop(into)] heading: String, tags: &'static [&'static str]) -> impl IntoView {
    view! {
        <section class="profile__tags">
            <h2>{heading}</h2>
            <ul class="tag-list">{tags.iter().map(|t| view! { <li class="tag">{*t}</li> }).collect_view()}</ul>
        </section>
    }
}

#[component]
pub fn InvestorProfilePage() -> impl IntoView {
    let profile = SAMPLE_PROFILE;
    view! {
        <Title text=format!("{}'s Profile - CoreUp", profile.name)/>
        <main class="profile">
            <article class="investor-card" aria-labelledby="investor-profile-heading">
                <header class="investor-card__top">
                    <img src=PLACEHOLDER_AVATAR alt=format!("{}'s avatar", profile.name) width="80" height="80"/>
                    <div>
                        <h1 id="investor-profile-heading">{profile.name}</h1>
                        <img
                            class="investor-card__flag"
                            src=flag_url(profile.country)
                            alt=format!("{} Flag", profile.country)
                            width="24"
                            height="18"
                        />
                        <span class="investor-card__location">{profile.country.to_uppercase()}</span>
                    </div>
                    <A href="/chats" attr:class="btn btn--primary">"Connect"</A>
                </header>
                <dl class="investor-card__facts">
                    <dt>"Role"</dt>
                    <dd>{profile.role}</dd>
                    <dt>"Investment range"</dt>
                    <dd>{profile.investment_range}</dd>
                    <dt>"Joined"</dt>
                    <dd>{profile.joined}</dd>
                </dl>
                <section>
                    <h2>"About"</h2>
                    <p>{profile.about}</p>
                </section>
                <TagList heading="Areas of expertise" tags=profile.expertise/>
                <TagList heading="Industries" tags=profile.industries/>
                <TagList heading="Stages" tags=profile.stages/>
                <TagList heading="Locations" tags=profile.locations/>
            </article>
        </main>
    }
}
