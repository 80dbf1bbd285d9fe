//! Investor profile settings pages under `/investor/profile/...`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Five forms share one side navigation. Saving is local: a valid submit
//! logs the change and shows a confirmation. Deleting the account ends the
//! session and returns to the landing page.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{
    CheckboxField, CheckboxGroup, FieldError, RangeInputs, SelectField, TextAreaField, TextField, publish,
};
use crate::config::AppConfig;
use crate::forms::profile::{
    CONTACT_COUNTRY_OPTIONS, CRITERIA_INDUSTRIES, CRITERIA_LANGUAGES, CRITERIA_LOCATIONS, CRITERIA_STAGES,
    ChangePasswordForm, ContactInfoForm, INVESTOR_TYPE_OPTIONS, InvestmentCriteriaForm, ProfileSettingsForm,
    validate_change_password, validate_contact_info, validate_delete_account, validate_investment_criteria,
    validate_profile_settings,
};
use crate::forms::rules::{AMOUNT_ERROR, parse_amount};
use crate::forms::{FieldErrors, field};
use crate::net::auth::AuthService;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::search::FilterOption;

const DELETE_FAILED_MESSAGE: &str = "Could not delete your account. Please try again.";

/// Largest value offered by the "investments made" picker.
const MAX_INVESTMENT_COUNT: u8 = 10;

fn choices(options: &[FilterOption]) -> Vec<(String, String)> {
    options.iter().map(|o| (o.value.to_owned(), o.label.to_owned())).collect()
}

#[component]
fn ProfileLayout(
    #[prop(into)] title: String,
    #[prop(optional)] saved: Option<RwSignal<bool>>,
    children: Children,
) -> impl IntoView {
    let links = [
        (AppRoute::ProfileSettings, "Profile settings"),
        (AppRoute::ContactEdit, "Contact info"),
        (AppRoute::InvestmentCriteriaEdit, "Investment criteria"),
        (AppRoute::ChangePassword, "Change password"),
        (AppRoute::DeleteAccount, "Delete account"),
    ];
    view! {
        <div class="profile-settings">
            <nav class="profile-settings__nav" aria-label="Profile settings">
                {links
                    .into_iter()
                    .map(|(route, label)| view! { <A href=route.path()>{label}</A> })
                    .collect_view()}
            </nav>
            <section class="profile-settings__content">
                <h1>{title}</h1>
                <Show when=move || saved.is_some_and(|s| s.get())>
                    <p class="form-success" role="status">"Changes saved."</p>
                </Show>
                {children()}
            </section>
        </div>
    }
}

#[component]
pub fn ContactEditPage() -> impl IntoView {
    let defaults = ContactInfoForm::default();
    let first_name = RwSignal::new(defaults.first_name);
    let last_name = RwSignal::new(defaults.last_name);
    let email = RwSignal::new(defaults.email);
    let phone = RwSignal::new(defaults.phone);
    let country = RwSignal::new(defaults.country);
    let city = RwSignal::new(defaults.city);
    let errors = RwSignal::new(FieldErrors::new());
    let saved = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ContactInfoForm {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            phone: phone.get(),
            country: country.get(),
            city: city.get(),
        };
        let accepted = publish(errors, validate_contact_info(&form));
        if accepted {
            log::info!("contact info saved");
        }
        saved.set(accepted);
    };

    view! {
        <ProfileLayout title="Contact info" saved>
            <form class="profile-form" on:submit=on_submit novalidate>
                <TextField label="First name" field=field::FIRST_NAME value=first_name errors/>
                <TextField label="Last name" field=field::LAST_NAME value=last_name errors/>
                <TextField label="Email" field=field::EMAIL value=email errors input_type="email"/>
                <TextField label="Phone" field=field::PHONE value=phone errors input_type="tel" placeholder="+971501234567"/>
                <SelectField
                    label="Country"
                    field=field::COUNTRY
                    options=choices(CONTACT_COUNTRY_OPTIONS)
                    value=country
                    errors
                    placeholder="Select a country"
                />
                <TextField label="City" field=field::CITY value=city errors/>
                <button class="btn btn--primary" type="submit">"Save"</button>
            </form>
        </ProfileLayout>
    }
}

#[component]
pub fn InvestmentCriteriaPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let defaults = InvestmentCriteriaForm::default();
    let locations = RwSignal::new(defaults.locations);
    let stages = RwSignal::new(defaults.stages);
    let industries = RwSignal::new(defaults.industries);
    let languages = RwSignal::new(defaults.languages);
    let range_min = RwSignal::new(defaults.range_min.to_string());
    let range_max = RwSignal::new(defaults.range_max.to_string());
    let errors = RwSignal::new(FieldErrors::new());
    let saved = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let min = parse_amount(&range_min.get());
        let max = parse_amount(&range_max.get());
        let form = InvestmentCriteriaForm {
            locations: locations.get(),
            stages: stages.get(),
            industries: industries.get(),
            languages: languages.get(),
            range_min: min.unwrap_or_default(),
            range_max: max.unwrap_or_default(),
        };
        let mut found = validate_investment_criteria(&form);
        if min.is_none() || max.is_none() {
            found.insert(field::INVESTMENT_RANGE, AMOUNT_ERROR);
        }
        let accepted = publish(errors, found);
        if accepted {
            log::info!("investment criteria saved");
        }
        saved.set(accepted);
    };

    view! {
        <ProfileLayout title="Investment criteria" saved>
            <form class="profile-form" on:submit=on_submit novalidate>
                <CheckboxGroup
                    legend="Locations"
                    field=field::LOCATIONS
                    options=CRITERIA_LOCATIONS
                    selected=locations
                    errors
                />
                <CheckboxGroup legend="Stages" field=field::STAGES options=CRITERIA_STAGES selected=stages errors/>
                <CheckboxGroup
                    legend="Industries"
                    field=field::INDUSTRIES
                    options=CRITERIA_INDUSTRIES
                    selected=industries
                    errors
                    max=config.max_industry_selections
                />
                <CheckboxGroup
                    legend="Languages"
                    field=field::LANGUAGES
                    options=CRITERIA_LANGUAGES
                    selected=languages
                    errors
                />
                <RangeInputs
                    legend="Investment range (USD)"
                    field=field::INVESTMENT_RANGE
                    min=range_min
                    max=range_max
                    errors
                />
                <button class="btn btn--primary" type="submit">"Save"</button>
            </form>
        </ProfileLayout>
    }
}

#[component]
fn CompanyRows(companies: RwSignal<Vec<String>>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    view! {
        <fieldset class="company-rows" aria-describedby="companies-error">
            <legend>"Companies you've invested in"</legend>
            {move || {
                (0..companies.with(Vec::len))
                    .map(|index| {
                        view! {
                            <div class="company-rows__row">
                                <input
                                    type="text"
                                    aria-label=format!("Company {}", index + 1)
                                    prop:value=move || {
                                        companies.with(|c| c.get(index).cloned().unwrap_or_default())
                                    }
                                    on:input=move |ev| {
                                        let name = event_target_value(&ev);
                                        companies.update(|c| {
                                            if let Some(slot) = c.get_mut(index) {
                                                *slot = name;
                                            }
                                        });
                                        errors.update(|e| e.clear_field(field::COMPANIES));
                                    }
                                />
                                <button
                                    type="button"
                                    class="btn btn--link"
                                    on:click=move |_| {
                                        companies.update(|c| {
                                            if index < c.len() {
                                                c.remove(index);
                                            }
                                        });
                                    }
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <button type="button" class="btn" on:click=move |_| companies.update(|c| c.push(String::new()))>
                "Add company"
            </button>
            <FieldError errors field=field::COMPANIES/>
        </fieldset>
    }
}

#[component]
pub fn ProfileSettingsPage() -> impl IntoView {
    let investor_type = RwSignal::new(String::new());
    let linkedin = RwSignal::new(String::new());
    let twitter = RwSignal::new(String::new());
    let facebook = RwSignal::new(String::new());
    let website = RwSignal::new(String::new());
    let about = RwSignal::new(String::new());
    let expertise = RwSignal::new(String::new());
    let investment_count = RwSignal::new(0_u8);
    let companies = RwSignal::new(Vec::<String>::new());
    let errors = RwSignal::new(FieldErrors::new());
    let saved = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ProfileSettingsForm {
            investor_type: Some(investor_type.get()).filter(|t| !t.is_empty()),
            linkedin: linkedin.get(),
            twitter: twitter.get(),
            facebook: facebook.get(),
            website: website.get(),
            about: about.get(),
            expertise: expertise.get(),
            investment_count: investment_count.get(),
            companies: companies.get(),
        };
        let accepted = publish(errors, validate_profile_settings(&form));
        if accepted {
            companies.update(|c| c.retain(|name| !name.is_empty()));
            log::info!("profile settings saved");
        }
        saved.set(accepted);
    };

    view! {
        <ProfileLayout title="Profile settings" saved>
            <form class="profile-form" on:submit=on_submit novalidate>
                <SelectField
                    label="Investor type"
                    field=field::INVESTOR_TYPE
                    options=choices(INVESTOR_TYPE_OPTIONS)
                    value=investor_type
                    errors
                    placeholder="Select investor type"
                />
                <TextField label="LinkedIn" field=field::LINKEDIN value=linkedin errors input_type="url"/>
                <TextField label="Twitter" field=field::TWITTER value=twitter errors input_type="url"/>
                <TextField label="Facebook" field=field::FACEBOOK value=facebook errors input_type="url"/>
                <TextField label="Website" field=field::WEBSITE value=website errors input_type="url"/>
                <TextAreaField label="About Me" field=field::ABOUT value=about errors/>
                <TextAreaField label="Areas of expertise" field=field::EXPERTISE value=expertise errors/>
                <div class="form-field">
                    <label for="input-investment-count">"Investments made"</label>
                    <select
                        id="input-investment-count"
                        on:change=move |ev| {
                            let picked = event_target_value(&ev).parse::<u8>().unwrap_or_default();
                            investment_count.set(picked.min(MAX_INVESTMENT_COUNT));
                        }
                    >
                        {(0..=MAX_INVESTMENT_COUNT)
                            .map(|n| {
                                view! {
                                    <option value=n.to_string() selected=move || investment_count.get() == n>
                                        {n.to_string()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <CompanyRows companies errors/>
                <button class="btn btn--primary" type="submit">"Save"</button>
            </form>
        </ProfileLayout>
    }
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let saved = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ChangePasswordForm {
            current_password: current_password.get(),
            new_password: new_password.get(),
            confirm_password: confirm_password.get(),
        };
        let accepted = publish(errors, validate_change_password(&form));
        if accepted {
            log::info!("password changed");
            current_password.set(String::new());
            new_password.set(String::new());
            confirm_password.set(String::new());
        }
        saved.set(accepted);
    };

    view! {
        <ProfileLayout title="Change password" saved>
            <form class="profile-form" on:submit=on_submit novalidate>
                <TextField
                    label="Current password"
                    field=field::CURRENT_PASSWORD
                    value=current_password
                    errors
                    input_type="password"
                />
                <TextField
                    label="New password"
                    field=field::NEW_PASSWORD
                    value=new_password
                    errors
                    input_type="password"
                />
                <TextField
                    label="Confirm new password"
                    field=field::CONFIRM_PASSWORD
                    value=confirm_password
                    errors
                    input_type="password"
                />
                <button class="btn btn--primary" type="submit">"Update password"</button>
            </form>
        </ProfileLayout>
    }
}

#[component]
pub fn DeleteAccountPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let service = expect_context::<AuthService>();
    let navigate = use_navigate();
    let confirmed = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !publish(errors, validate_delete_account(confirmed.get())) {
            return;
        }
        log::warn!("account deletion requested");
        let service = service.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match service.logout().await {
                Ok(()) => {
                    auth.update(AuthState::apply_logout);
                    navigate(&AppRoute::Home.path(), NavigateOptions { replace: true, ..Default::default() });
                }
                Err(e) => {
                    log::error!("account deletion failed: {e}");
                    errors.update(|found| found.insert(field::CONFIRM, DELETE_FAILED_MESSAGE));
                }
            }
        });
    };

    view! {
        <ProfileLayout title="Delete account">
            <form class="profile-form" on:submit=on_submit novalidate>
                <p>"Deleting your account removes your profile, matches and conversations. This cannot be undone."</p>
                <CheckboxField
                    label="I understand and want to delete my account"
                    field=field::CONFIRM
                    checked=confirmed
                    errors
                />
                <button class="btn btn--danger" type="submit">"Delete account"</button>
            </form>
        </ProfileLayout>
    }
}
