//! Typed route surface and the auth guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` registers one Leptos route per variant; everything else that
//! needs a URL (navigation after login, chat selection, redirects) builds it
//! from `AppRoute::path` so paths are spelled in one place.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::auth::AuthState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Signup,
    ForgotPassword,
    NewPassword,
    VerifyCode,
    InvestorRegister,
    /// `/investor`, which lands on the portfolio.
    InvestorDashboard,
    Portfolio,
    Matches,
    NewsFeed,
    Search,
    /// `/investor/profile`, which lands on contact editing.
    ProfileSettingsRoot,
    ContactEdit,
    InvestmentCriteriaEdit,
    ProfileSettings,
    ChangePassword,
    DeleteAccount,
    Chats,
    Chat { username: String },
    PublicProfile,
    Notifications,
    NotFound(String),
}

impl AppRoute {
    /// Map a location path (query and fragment ignored) to a route.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["forgot-password"] => Self::ForgotPassword,
            ["new-password"] => Self::NewPassword,
            ["verify-code"] => Self::VerifyCode,
            ["investor"] => Self::InvestorDashboard,
            ["investor", "register"] => Self::InvestorRegister,
            ["investor", "portfolio"] => Self::Portfolio,
            ["investor", "matches"] => Self::Matches,
            ["investor", "news-feed"] => Self::NewsFeed,
            ["investor", "search"] => Self::Search,
            ["investor", "profile"] => Self::ProfileSettingsRoot,
            ["investor", "profile", "contact", "edit"] => Self::ContactEdit,
            ["investor", "profile", "investment-criteria", "edit"] => Self::InvestmentCriteriaEdit,
            ["investor", "profile", "settings"] => Self::ProfileSettings,
            ["investor", "profile", "change-password"] => Self::ChangePassword,
            ["investor", "profile", "delete"] => Self::DeleteAccount,
            ["chats"] => Self::Chats,
            ["chats", username] if !username.is_empty() => Self::Chat { username: (*username).to_owned() },
            ["profile"] => Self::PublicProfile,
            ["notifications"] => Self::Notifications,
            _ => Self::NotFound(path.to_owned()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Chat { username } => format!("/chats/{username}"),
            Self::NotFound(path) => path.clone(),
            other => other.static_path().to_owned(),
        }
    }

    fn static_path(&self) -> &'static str {
        match self {
            Self::Home | Self::NotFound(_) => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::ForgotPassword => "/forgot-password",
            Self::NewPassword => "/new-password",
            Self::VerifyCode => "/verify-code",
            Self::InvestorRegister => "/investor/register",
            Self::InvestorDashboard => "/investor",
            Self::Portfolio => "/investor/portfolio",
            Self::Matches => "/investor/matches",
            Self::NewsFeed => "/investor/news-feed",
            Self::Search => "/investor/search",
            Self::ProfileSettingsRoot => "/investor/profile",
            Self::ContactEdit => "/investor/profile/contact/edit",
            Self::InvestmentCriteriaEdit => "/investor/profile/investment-criteria/edit",
            Self::ProfileSettings => "/investor/profile/settings",
            Self::ChangePassword => "/investor/profile/change-password",
            Self::DeleteAccount => "/investor/profile/delete",
            Self::Chats | Self::Chat { .. } => "/chats",
            Self::PublicProfile => "/profile",
            Self::Notifications => "/notifications",
        }
    }

    /// Dashboard, profile editing, chats and notifications need a session.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::InvestorDashboard
                | Self::Portfolio
                | Self::Matches
                | Self::NewsFeed
                | Self::Search
                | Self::ProfileSettingsRoot
                | Self::ContactEdit
                | Self::InvestmentCriteriaEdit
                | Self::ProfileSettings
                | Self::ChangePassword
                | Self::DeleteAccount
                | Self::Chats
                | Self::Chat { .. }
                | Self::Notifications
        )
    }

    /// Index routes that forward to a child page.
    pub fn index_redirect(&self) -> Option<Self> {
        match self {
            Self::InvestorDashboard => Some(Self::Portfolio),
            Self::ProfileSettingsRoot => Some(Self::ContactEdit),
            _ => None,
        }
    }
}

/// Where to send the user instead of `route`, if anywhere.
///
/// Protected routes redirect to login once the session check has finished
/// without a user. While the check is running the caller should render a
/// loading state rather than redirect.
pub fn guard(route: &AppRoute, auth: &AuthState) -> Option<AppRoute> {
    if route.requires_auth() && !auth.loading && !auth.is_authenticated() {
        log::debug!("guard: {} requires a session", route.path());
        return Some(AppRoute::Login);
    }
    route.index_redirect()
}
