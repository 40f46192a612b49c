//! Account registration page.

#[cfg(test)]
#[path = "user_register_test.rs"]
mod user_register_test;

use leptos::prelude::*;

use super::user_login::{MIN_ACCOUNT_LEN, MIN_PASSWORD_LEN};
use crate::net::types::UserRegisterRequest;
use crate::router::AppRoute;
use crate::state::session::AppSessionStore;

/// Validate form input and build the registration request.
pub(crate) fn register_request(
    account: &str,
    password: &str,
    check_password: &str,
) -> Result<UserRegisterRequest, &'static str> {
    let account = account.trim();
    if account.is_empty() || password.is_empty() || check_password.is_empty() {
        return Err("Fill in every field.");
    }
    if account.chars().count() < MIN_ACCOUNT_LEN {
        return Err("Account must be at least 4 characters.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != check_password {
        return Err("Passwords do not match.");
    }
    Ok(UserRegisterRequest {
        user_account: account.to_owned(),
        user_password: password.to_owned(),
        check_password: check_password.to_owned(),
    })
}

#[component]
pub fn UserRegisterPage() -> impl IntoView {
    let store = expect_context::<AppSessionStore>();
    let account = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let check_password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match register_request(&account.get(), &password.get(), &check_password.get()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            use crate::net::types::BaseResponse;

            let store = store.clone();
            leptos::task::spawn_local(async move {
                match store.api().user_register(&request).await.and_then(BaseResponse::into_result) {
                    Ok(_) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(AppRoute::UserLogin.path());
                        }
                    }
                    Err(e) => {
                        info.set(format!("Registration failed: {}", e.user_message()));
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
                <h1>"Create account"</h1>
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
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || check_password.get()
                        on:input=move |ev| check_password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=AppRoute::UserLogin.path()>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
