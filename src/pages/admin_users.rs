//! Admin page listing registered users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable through `AdminGate`; the backend enforces the admin role
//! again on `/user/list/page/vo`, so a stale client session only ever sees
//! an error message here.

#[cfg(test)]
#[path = "admin_users_test.rs"]
mod admin_users_test;

use leptos::prelude::*;

use crate::net::types::{UserQueryRequest, UserVo};
use crate::state::session::AppSessionStore;

pub(crate) const PAGE_SIZE: i64 = 10;

/// Query for one page of users, filtered by account when `search` is set.
pub(crate) fn user_query(page: i64, search: &str) -> UserQueryRequest {
    let search = search.trim();
    UserQueryRequest {
        page_num: page.max(1),
        page_size: PAGE_SIZE,
        sort_field: Some("createTime".to_owned()),
        sort_order: Some("descend".to_owned()),
        user_account: (!search.is_empty()).then(|| search.to_owned()),
        ..UserQueryRequest::default()
    }
}

/// Number of pages needed for `total` rows.
pub(crate) fn page_count(total: i64) -> i64 {
    ((total + PAGE_SIZE - 1) / PAGE_SIZE).max(1)
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let store = expect_context::<AppSessionStore>();
    let users = RwSignal::new(Vec::<UserVo>::new());
    let total = RwSignal::new(0_i64);
    let page = RwSignal::new(1_i64);
    let search = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let load = Callback::new(move |()| {
        let query = user_query(page.get_untracked(), &search.get_untracked());
        #[cfg(feature = "csr")]
        {
            use crate::net::types::BaseResponse;

            let store = store.clone();
            leptos::task::spawn_local(async move {
                match store.api().list_user_vo_by_page(&query).await.and_then(BaseResponse::into_result) {
                    Ok(result) => {
                        let (records, total_row) = result.map_or_else(|| (Vec::new(), 0), |p| (p.records, p.total_row));
                        users.set(records);
                        total.set(total_row);
                        info.set(String::new());
                    }
                    Err(e) => info.set(format!("Failed to load users: {}", e.user_message())),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&store, query);
    });

    load.run(());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.set(1);
        load.run(());
    };
    let on_prev = move |_| {
        if page.get_untracked() > 1 {
            page.update(|p| *p -= 1);
            load.run(());
        }
    };
    let on_next = move |_| {
        if page.get_untracked() < page_count(total.get_untracked()) {
            page.update(|p| *p += 1);
            load.run(());
        }
    };

    let at_first = move || page.get() <= 1;
    let at_last = move || page.get() >= page_count(total.get());
    let summary = move || format!("Page {} of {} ({} users)", page.get(), page_count(total.get()), total.get());

    view! {
        <section class="admin-users">
            <h1>"Users"</h1>
            <form class="admin-users__search" on:submit=on_search>
                <input
                    type="search"
                    placeholder="Search by account"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="admin-users__message">{move || info.get()}</p>
            </Show>
            <table class="admin-users__table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Account"</th>
                        <th>"Name"</th>
                        <th>"Role"</th>
                        <th>"Created"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        users
                            .get()
                            .into_iter()
                            .map(|user| {
                                view! {
                                    <tr>
                                        <td>{user.id}</td>
                                        <td>{user.user_account.unwrap_or_default()}</td>
                                        <td>{user.user_name.unwrap_or_default()}</td>
                                        <td>{user.user_role}</td>
                                        <td>{user.create_time.unwrap_or_default()}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <div class="admin-users__pager">
                <button on:click=on_prev disabled=at_first>"Previous"</button>
                <span>{summary}</span>
                <button on:click=on_next disabled=at_last>"Next"</button>
            </div>
        </section>
    }
}
