//! Signed-out pages: login, signup and the password recovery flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Recovery is a three-step chain: forgot-password sends the user to
//! verify-code, which sends them to new-password, which returns to login.
//! Only login talks to the auth service; the other submits are local.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{CheckboxField, FieldError, PasswordMeter, TextField, publish};
use crate::forms::auth::{
    LoginForm, NewPasswordForm, SignupForm, validate_forgot_password, validate_login, validate_new_password,
    validate_signup, validate_verify_code,
};
use crate::forms::rules::{MIN_NEW_PASSWORD_STRENGTH, password_strength, sanitize_code_input};
use crate::forms::{FieldErrors, field};
use crate::net::auth::AuthService;
use crate::net::types::Credentials;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;

#[component]
fn AuthCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"CoreUp"</h1>
                <h2 class="auth-card__title">{title}</h2>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let service = expect_context::<AuthService>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let failure = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if auth.with(|a| a.loading) {
            return;
        }
        let form = LoginForm { email: email.get(), password: password.get() };
        if !publish(errors, validate_login(&form)) {
            return;
        }
        failure.set(None);
        auth.update(|a| a.loading = true);

        let service = service.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let credentials = Credentials { email: form.email, password: form.password };
            match service.login(&credentials).await {
                Ok(user) => {
                    auth.update(|a| a.apply_login(user));
                    navigate(&AppRoute::Portfolio.path(), NavigateOptions::default());
                }
                Err(e) => {
                    auth.update(|a| a.loading = false);
                    failure.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <AuthCard title="Log in">
            <form class="auth-form" on:submit=on_submit novalidate>
                <TextField label="Email" field=field::EMAIL value=email errors input_type="email" placeholder="you@example.com"/>
                <TextField label="Password" field=field::PASSWORD value=password errors input_type="password"/>
                <Show when=move || failure.get().is_some()>
                    <p class="form-error" role="alert">{move || failure.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || auth.with(|a| a.loading)>
                    {move || if auth.with(|a| a.loading) { "Signing in..." } else { "Log in" }}
                </button>
            </form>
            <p class="auth-card__links">
                <A href="/forgot-password">"Forgot password?"</A>
                " · "
                <A href="/signup">"Create an account"</A>
            </p>
        </AuthCard>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let terms = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            terms: terms.get(),
        };
        if publish(errors, validate_signup(&form)) {
            log::info!("signup accepted for {}", form.email);
            navigate(&AppRoute::VerifyCode.path(), NavigateOptions::default());
        }
    };

    view! {
        <AuthCard title="Create your account">
            <form class="auth-form" on:submit=on_submit novalidate>
                <TextField label="First name" field=field::FIRST_NAME value=first_name errors/>
                <TextField label="Last name" field=field::LAST_NAME value=last_name errors/>
                <TextField label="Email" field=field::EMAIL value=email errors input_type="email"/>
                <TextField label="Password" field=field::PASSWORD value=password errors input_type="password"/>
                <TextField
                    label="Confirm password"
                    field=field::CONFIRM_PASSWORD
                    value=confirm_password
                    errors
                    input_type="password"
                />
                <CheckboxField label="I agree to the terms and conditions" field=field::TERMS checked=terms errors/>
                <button class="btn btn--primary" type="submit">"Sign up"</button>
            </form>
            <p class="auth-card__links">
                "Already have an account? "
                <A href="/login">"Log in"</A>
            </p>
        </AuthCard>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if publish(errors, validate_forgot_password(&email.get())) {
            log::info!("password recovery requested");
            navigate(&AppRoute::VerifyCode.path(), NavigateOptions::default());
        }
    };

    view! {
        <AuthCard title="Forgot your password?">
            <p>"Enter your email and we'll send you a verification code."</p>
            <form class="auth-form" on:submit=on_submit novalidate>
                <TextField label="Email" field=field::EMAIL value=email errors input_type="email"/>
                <button class="btn btn--primary" type="submit">"Send code"</button>
            </form>
            <p class="auth-card__links">
                <A href="/login">"Back to login"</A>
            </p>
        </AuthCard>
    }
}

#[component]
pub fn VerifyCodePage() -> impl IntoView {
    let navigate = use_navigate();
    let code = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if publish(errors, validate_verify_code(&code.get())) {
            navigate(&AppRoute::NewPassword.path(), NavigateOptions::default());
        }
    };

    view! {
        <AuthCard title="Enter verification code">
            <form class="auth-form" on:submit=on_submit novalidate>
                <div class="form-field">
                    <label for="input-code">"6-digit code"</label>
                    <input
                        id="input-code"
                        type="text"
                        inputmode="numeric"
                        maxlength="6"
                        aria-describedby="code-error"
                        prop:value=move || code.get()
                        on:input=move |ev| {
                            code.set(sanitize_code_input(&event_target_value(&ev)));
                            errors.update(|e| e.clear_field(field::CODE));
                        }
                    />
                    <FieldError errors field=field::CODE/>
                </div>
                <button class="btn btn--primary" type="submit">"Verify"</button>
            </form>
        </AuthCard>
    }
}

#[component]
pub fn NewPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = NewPasswordForm { password: password.get(), confirm_password: confirm_password.get() };
        if publish(errors, validate_new_password(&form)) {
            log::info!("new password set");
            navigate(&AppRoute::Login.path(), NavigateOptions::default());
        }
    };

    let submit_disabled = move || {
        password.with(|p| p.is_empty() || password_strength(p) < MIN_NEW_PASSWORD_STRENGTH)
            || confirm_password.with(String::is_empty)
    };

    view! {
        <AuthCard title="Set a new password">
            <form class="auth-form" on:submit=on_submit novalidate>
                <TextField label="New password" field=field::PASSWORD value=password errors input_type="password"/>
                <PasswordMeter password/>
                <TextField
                    label="Confirm password"
                    field=field::CONFIRM_PASSWORD
                    value=confirm_password
                    errors
                    input_type="password"
                />
                <button class="btn btn--primary" type="submit" disabled=submit_disabled>
                    "Set Password"
                </button>
            </form>
        </AuthCard>
    }
}
