//! Account + password login page.

#[cfg(test)]
#[path = "user_login_test.rs"]
mod user_login_test;

use leptos::prelude::*;

use crate::net::types::UserLoginRequest;
use crate::router::AppRoute;
use crate::state::session::AppSessionStore;

pub(crate) const MIN_ACCOUNT_LEN: usize = 4;
pub(crate) const MIN_PASSWORD_LEN: usize = 8;

/// Validate form input and build the login request.
pub(crate) fn login_request(account: &str, password: &str) -> Result<UserLoginRequest, &'static str> {
    let account = account.trim();
    if account.is_empty() || password.is_empty() {
        return Err("Enter both account and password.");
    }
    if account.chars().count() < MIN_ACCOUNT_LEN {
        return Err("Account must be at least 4 characters.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(UserLoginRequest { user_account: account.to_owned(), user_password: password.to_owned() })
}

#[component]
pub fn UserLoginPage() -> impl IntoView {
    let store = expect_context::<AppSessionStore>();
    let account = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match login_request(&account.get(), &password.get()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            use crate::net::types::BaseResponse;

            let store = store.clone();
            leptos::task::spawn_local(async move {
                match store.api().user_login(&request).await.and_then(BaseResponse::into_result) {
                    Ok(Some(user)) => {
                        store.set_session(Some(user));
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(AppRoute::Home.path());
                        }
                    }
                    Ok(None) => {
                        info.set("Login failed: empty response.".to_owned());
                        busy.set(false);
                    }
                    Err(e) => {
                        info.set(format!("Login failed: {}", e.user_message()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&store, request);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"AppForge"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Account"
                        prop:value=move || account.get()
                        on:input=move |ev| account.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? "
                    <a href=AppRoute::UserRegister.path()>"Register"</a>
                </p>
            </div>
        </div>
    }
}
