//! Static content pages.

use leptos::prelude::*;

use crate::router::AppRoute;
use crate::state::session::AppSessionStore;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="info">
            <h1>"About AppForge"</h1>
            <p>"AppForge turns a conversation into a runnable web app: single-page HTML, multi-file sites or full Vue projects."</p>
        </section>
    }
}

#[component]
pub fn DocsPage() -> impl IntoView {
    view! {
        <section class="info">
            <h1>"Docs"</h1>
            <ol>
                <li>"Sign in or create an account."</li>
                <li>"Describe the app you want; pick a generation mode."</li>
                <li>"Refine it in chat and open the preview link to try it."</li>
            </ol>
        </section>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let session = *expect_context::<AppSessionStore>().cell();

    view! {
        <section class="info">
            <h1>"Projects"</h1>
            <Show
                when=move || session.get().login_user.is_some()
                fallback=|| {
                    view! {
                        <p>
                            <a href=AppRoute::UserLogin.path()>"Sign in"</a>
                            " to see your projects."
                        </p>
                    }
                }
            >
                <p>"Your generated apps appear here once you create one."</p>
            </Show>
        </section>
    }
}
