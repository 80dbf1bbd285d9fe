//! Investor onboarding form at `/investor/register`.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::form_field::{CheckboxGroup, RangeInputs, TextAreaField, TextField, publish};
use crate::config::AppConfig;
use crate::forms::register::{InvestorRegisterForm, REGISTER_COUNTRIES, REGISTER_INDUSTRIES, validate_investor_register};
use crate::forms::rules::{AMOUNT_ERROR, parse_amount};
use crate::forms::{FieldErrors, field};

#[component]
pub fn InvestorRegisterPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let max_industries = config.max_industry_selections;
    let defaults = InvestorRegisterForm::default();

    let city = RwSignal::new(String::new());
    let countries = RwSignal::new(Vec::<String>::new());
    let range_min = RwSignal::new(defaults.range_min.to_string());
    let range_max = RwSignal::new(defaults.range_max.to_string());
    let industries = RwSignal::new(Vec::<String>::new());
    let background = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let min = parse_amount(&range_min.get());
        let max = parse_amount(&range_max.get());
        let form = InvestorRegisterForm {
            city: city.get(),
            countries: countries.get(),
            range_min: min.unwrap_or_default(),
            range_max: max.unwrap_or_default(),
            industries: industries.get(),
            background: background.get(),
        };
        let mut found = validate_investor_register(&form, max_industries);
        if min.is_none() || max.is_none() {
            found.insert(field::INVESTMENT_RANGE, AMOUNT_ERROR);
        }
        if publish(errors, found) {
            log::info!("investor registration submitted for {}", form.city);
            submitted.set(true);
        }
    };

    view! {
        <main class="register">
            <h1>"Tell us about your investing"</h1>
            <Show
                when=move || !submitted.get()
                fallback=|| {
                    view! {
                        <div class="register__done" role="status">
                            <p>"Thanks! Your investor profile has been submitted."</p>
                            <A href="/login" attr:class="btn btn--primary">"Continue to login"</A>
                        </div>
                    }
                }
            >
                <form class="register__form" on:submit=on_submit novalidate aria-label="Investor registration form">
                    <TextField label="City" field=field::CITY value=city errors/>
                    <CheckboxGroup
                        legend="Countries you invest in"
                        field=field::COUNTRY
                        options=REGISTER_COUNTRIES
                        selected=countries
                        errors
                    />
                    <RangeInputs
                        legend="Investment range (USD)"
                        field=field::INVESTMENT_RANGE
                        min=range_min
                        max=range_max
                        errors
                    />
                    <CheckboxGroup
                        legend="Industries"
                        field=field::INDUSTRIES
                        options=REGISTER_INDUSTRIES
                        selected=industries
                        errors
                        max=max_industries
                    />
                    <TextAreaField label="Professional background" field=field::BACKGROUND value=background errors/>
                    <button class="btn btn--primary" type="submit">"Submit"</button>
                </form>
            </Show>
        </main>
    }
}
