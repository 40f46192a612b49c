//! Landing page.

use leptos::prelude::*;

use crate::router::AppRoute;
use crate::state::session::AppSessionStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = *expect_context::<AppSessionStore>().cell();
    let greeting = move || {
        session
            .get()
            .login_user
            .map_or_else(|| "Welcome".to_owned(), |user| format!("Welcome back, {}", user.display_name()))
    };

    view! {
        <section class="home">
            <h1>{greeting}</h1>
            <p class="home__lead">"Describe an app in plain words and get a working site you can preview and deploy."</p>
            <div class="home__actions">
                <a class="home__cta" href=AppRoute::Templates.path()>"Browse templates"</a>
                <a class="home__secondary" href=AppRoute::Docs.path()>"Read the docs"</a>
            </div>
        </section>
    }
}
