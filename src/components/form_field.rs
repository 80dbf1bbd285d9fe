//! Form inputs that render validator output inline.
//!
//! Each input clears its own error as soon as the user edits it, and the
//! message is rendered in a `role="alert"` element tied to the input by
//! `aria-describedby`.

use leptos::prelude::*;

use crate::forms::FieldErrors;
use crate::forms::rules::{password_strength, strength_label, toggle_selection};

/// Publish a validator's result; `true` when the submit may proceed.
pub fn publish(errors: RwSignal<FieldErrors>, found: FieldErrors) -> bool {
    let accepted = found.is_empty();
    if !accepted {
        log::debug!("form rejected: {:?}", found.fields().collect::<Vec<_>>());
    }
    errors.set(found);
    accepted
}

fn error_id(field: &str) -> String {
    format!("{field}-error")
}

/// Inline error for one field, rendered only while the field is invalid.
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| e.get(field).map(str::to_owned)).map(|message| {
            view! {
                <p class="form-error" role="alert" id=error_id(field)>
                    {message}
                </p>
            }
        })
    }
}

/// Labelled single-line input bound to `value`.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    field: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let input_id = format!("input-{field}");
    view! {
        <div class="form-field">
            <label for=input_id.clone()>{label}</label>
            <input
                id=input_id
                type=input_type
                placeholder=placeholder
                aria-invalid=move || errors.with(|e| e.contains(field)).to_string()
                aria-describedby=error_id(field)
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    errors.update(|e| e.clear_field(field));
                }
            />
            <FieldError errors field/>
        </div>
    }
}

/// Labelled multi-line input bound to `value`.
#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    field: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let input_id = format!("input-{field}");
    view! {
        <div class="form-field">
            <label for=input_id.clone()>{label}</label>
            <textarea
                id=input_id
                rows="4"
                aria-invalid=move || errors.with(|e| e.contains(field)).to_string()
                aria-describedby=error_id(field)
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    errors.update(|e| e.clear_field(field));
                }
            ></textarea>
            <FieldError errors field/>
        </div>
    }
}

/// Single checkbox, e.g. terms acceptance or delete confirmation.
#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    field: &'static str,
    checked: RwSignal<bool>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let input_id = format!("input-{field}");
    view! {
        <div class="form-field form-field--checkbox">
            <input
                id=input_id.clone()
                type="checkbox"
                aria-describedby=error_id(field)
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    checked.set(event_target_checked(&ev));
                    errors.update(|e| e.clear_field(field));
                }
            />
            <label for=input_id>{label}</label>
            <FieldError errors field/>
        </div>
    }
}

/// Dropdown over `(value, label)` pairs. An empty value means "nothing chosen".
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    field: &'static str,
    options: Vec<(String, String)>,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let input_id = format!("input-{field}");
    view! {
        <div class="form-field">
            <label for=input_id.clone()>{label}</label>
            <select
                id=input_id
                aria-describedby=error_id(field)
                prop:value=move || value.get()
                on:change=move |ev| {
                    value.set(event_target_value(&ev));
                    errors.update(|e| e.clear_field(field));
                }
            >
                <option value="">{placeholder}</option>
                {options
                    .into_iter()
                    .map(|(v, l)| {
                        let selected_value = v.clone();
                        view! {
                            <option value=v selected=move || value.with(|cur| *cur == selected_value)>
                                {l}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <FieldError errors field/>
        </div>
    }
}

/// Checkbox group writing into `selected`, optionally capped at `max`.
#[component]
pub fn CheckboxGroup(
    #[prop(into)] legend: String,
    field: &'static str,
    options: &'static [&'static str],
    selected: RwSignal<Vec<String>>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional)] max: Option<usize>,
) -> impl IntoView {
    let cap = max.unwrap_or(usize::MAX);
    view! {
        <fieldset class="checkbox-group" aria-describedby=error_id(field)>
            <legend>{legend}</legend>
            {max.map(|m| view! { <p class="checkbox-group__hint">{format!("Select up to {m}")}</p> })}
            {options
                .iter()
                .map(|option| {
                    let option = *option;
                    let is_checked = move || selected.with(|s| s.iter().any(|v| v == option));
                    view! {
                        <label class="checkbox-group__option">
                            <input
                                type="checkbox"
                                prop:checked=is_checked
                                disabled=move || !is_checked() && selected.with(|s| s.len() >= cap)
                                on:change=move |_| {
                                    selected.update(|s| {
                                        if !toggle_selection(s, option, cap) {
                                            log::debug!("{field}: selection cap {cap} reached");
                                        }
                                    });
                                    errors.update(|e| e.clear_field(field));
                                }
                            />
                            {option}
                        </label>
                    }
                })
                .collect_view()}
            <FieldError errors field/>
        </fieldset>
    }
}

/// Min/max pair of amount inputs sharing one error slot.
#[component]
pub fn RangeInputs(
    #[prop(into)] legend: String,
    field: &'static str,
    min: RwSignal<String>,
    max: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let bound = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="range-inputs__bound">
                {label}
                <input
                    type="text"
                    inputmode="numeric"
                    aria-describedby=error_id(field)
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        value.set(event_target_value(&ev));
                        errors.update(|e| e.clear_field(field));
                    }
                />
            </label>
        }
    };
    view! {
        <fieldset class="range-inputs">
            <legend>{legend}</legend>
            {bound("Min", min)}
            {bound("Max", max)}
            <FieldError errors field/>
        </fieldset>
    }
}

/// Strength bar and caption for a password being typed.
#[component]
pub fn PasswordMeter(password: RwSignal<String>) -> impl IntoView {
    let score = move || password.with(|p| password_strength(p));
    view! {
        <div class="password-meter" aria-hidden="true">
            <div class="password-meter__bar" style=move || format!("width: {}%", score())></div>
        </div>
        <span class="password-meter__label" id="strength-desc">
            {move || format!("Password strength: {}% {}", score(), strength_label(score()))}
        </span>
    }
}
