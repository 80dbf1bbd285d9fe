//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the composition root. Every shared state object and service is
//! created here exactly once and provided as context; pages and components
//! only ever `expect_context` them.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Protected;
use crate::config::AppConfig;
use crate::net::auth::AuthService;
use crate::net::feed::MockFeed;
use crate::net::mock;
use crate::pages::{
    auth_pages::{ForgotPasswordPage, LoginPage, NewPasswordPage, SignupPage, VerifyCodePage},
    chats::{ChatPage, ChatsPage},
    home::HomePage,
    investor_profile::InvestorProfilePage,
    investor_register::InvestorRegisterPage,
    matches::MatchesPage,
    news_feed::NewsFeedPage,
    not_found::NotFoundPage,
    notifications::NotificationsPage,
    portfolio::PortfolioPage,
    profile_edit::{ChangePasswordPage, ContactEditPage, DeleteAccountPage, InvestmentCriteriaPage, ProfileSettingsPage},
    search::SearchPage,
};
use crate::state::{
    auth::AuthState, chat::ChatState, news_feed::NewsFeedState, notifications::NotificationsState,
    portfolio::PortfolioState, search::SearchState,
};

/// Root application component.
///
/// Provides all shared state contexts, restores any persisted session and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let auth_service = AuthService::mock();
    let feed = MockFeed::from_config(&config);

    let auth = RwSignal::new(AuthState::restoring());
    let chat = RwSignal::new(ChatState::default());
    let search = RwSignal::new(SearchState::new(mock::opportunities(), config.search_page_size));
    let notifications = RwSignal::new(NotificationsState::default());
    let news_feed = RwSignal::new(NewsFeedState::default());
    let portfolio = RwSignal::new(PortfolioState::default());

    let restored = auth_service.restore();
    auth.update(|a| a.apply_restore(restored));

    provide_context(config);
    provide_context(auth_service);
    provide_context(feed);
    provide_context(auth);
    provide_context(chat);
    provide_context(search);
    provide_context(notifications);
    provide_context(news_feed);
    provide_context(portfolio);

    view! {
        <Title text="CoreUp"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("new-password") view=NewPasswordPage/>
                <Route path=StaticSegment("verify-code") view=VerifyCodePage/>
                <Route path=StaticSegment("profile") view=InvestorProfilePage/>
                <Route path=(StaticSegment("investor"), StaticSegment("register")) view=InvestorRegisterPage/>

                <Route path=StaticSegment("investor") view=|| view! { <Protected><p class="page-loading">"Redirecting..."</p></Protected> }/>
                <Route
                    path=(StaticSegment("investor"), StaticSegment("portfolio"))
                    view=|| view! { <Protected><PortfolioPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("investor"), StaticSegment("matches"))
                    view=|| view! { <Protected><MatchesPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("investor"), StaticSegment("news-feed"))
                    view=|| view! { <Protected><NewsFeedPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("investor"), StaticSegment("search"))
                    view=|| view! { <Protected><SearchPage/></Protected> }
                />

                <Route
                    path=(StaticSegment("investor"), StaticSegment("profile"))
                    view=|| view! { <Protected><p class="page-loading">"Redirecting..."</p></Protected> }
                />
                <Route
                    path=(StaticSegment("investor"), StaticSegment("profile"), StaticSegment("contact"), StaticSegment("edit"))
                    view=|| view! { <Protected><ContactEditPage/></Protected> }
                />
                <Route
                    path=(
                        StaticSegment("investor"),
                        StaticSegment("profile"),
                        StaticSegment("investment-criteria"),
                        StaticSegment("edit"),
                    )
                    view=|| view! { <Protected><InvestmentCriteriaPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("investor"), StaticSegment("profile"), StaticSegment("settings"))
                    view=|| view! { <Protected><ProfileSettingsPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("investor"), StaticSegment("profile"), StaticSegment("change-password"))
                    view=|| view! { <Protected><ChangePasswordPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("investor"), StaticSegment("profile"), StaticSegment("delete"))
                    view=|| view! { <Protected><DeleteAccountPage/></Protected> }
                />

                <Route path=StaticSegment("chats") view=|| view! { <Protected><ChatsPage/></Protected> }/>
                <Route
                    path=(StaticSegment("chats"), ParamSegment("username"))
                    view=|| view! { <Protected><ChatPage/></Protected> }
                />
                <Route
                    path=StaticSegment("notifications")
                    view=|| view! { <Protected><NotificationsPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
