//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{admin_gate::AdminGate, app_header::AppHeader};
use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    admin_chat_history::AdminChatHistoryPage,
    admin_users::AdminUsersPage,
    home::HomePage,
    info::{AboutPage, DocsPage, ProjectsPage},
    templates::TemplatesPage,
    user_login::UserLoginPage,
    user_register::UserRegisterPage,
};
use crate::state::session::{AppSessionStore, SessionState, SessionStore};
use crate::util::storage::LocalStorage;

/// Root application component.
///
/// Builds the config and session store once and provides both as context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        log::error!("invalid build config, using defaults: {e}");
        AppConfig::default()
    });
    let store: AppSessionStore =
        SessionStore::new(RwSignal::new(SessionState::default()), LocalStorage, ApiClient::new(&config));

    provide_context(config);
    provide_context(store);

    view! {
        <Title text="AppForge"/>

        <Router>
            <AppHeader/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("templates") view=TemplatesPage/>
                    <Route path=StaticSegment("docs") view=DocsPage/>
                    <Route path=(StaticSegment("user"), StaticSegment("login")) view=UserLoginPage/>
                    <Route path=(StaticSegment("user"), StaticSegment("register")) view=UserRegisterPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=|| {
                            view! {
                                <AdminGate>
                                    <AdminUsersPage/>
                                </AdminGate>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("chat-history"))
                        view=|| {
                            view! {
                                <AdminGate>
                                    <AdminChatHistoryPage/>
                                </AdminGate>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
