//! Admin page for browsing chat history across apps.
//!
//! The table pages through every message via the admin endpoint. Picking a
//! row's app opens that app's conversation, loaded newest first with a
//! `lastCreateTime` cursor for older messages.

#[cfg(test)]
#[path = "admin_chat_history_test.rs"]
mod admin_chat_history_test;

use leptos::prelude::*;

use super::admin_users::{PAGE_SIZE, page_count};
use crate::net::types::{ChatHistoryQueryRequest, ChatHistoryVo, GetMessagesParams};
use crate::state::session::AppSessionStore;

/// Messages fetched per conversation page.
pub(crate) const CONVERSATION_PAGE_SIZE: i64 = 20;

/// Query for one page of messages, optionally narrowed to one app and one
/// message type.
pub(crate) fn history_query(page: i64, app_id: &str, message_type: &str) -> ChatHistoryQueryRequest {
    let message_type = message_type.trim();
    ChatHistoryQueryRequest {
        page_num: page.max(1),
        page_size: PAGE_SIZE,
        sort_field: Some("createTime".to_owned()),
        sort_order: Some("descend".to_owned()),
        app_id: parse_app_id(app_id),
        message_type: (!message_type.is_empty()).then(|| message_type.to_owned()),
        ..ChatHistoryQueryRequest::default()
    }
}

/// Positive numeric app id from a filter box; anything else means "no filter".
pub(crate) fn parse_app_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Cursor for the page after `loaded`, which is ordered newest first.
pub(crate) fn older_cursor(loaded: &[ChatHistoryVo]) -> Option<String> {
    loaded.last().and_then(|m| m.create_time.clone())
}

pub(crate) fn conversation_params(app_id: i64, cursor: Option<String>) -> GetMessagesParams {
    GetMessagesParams { app_id, page_size: CONVERSATION_PAGE_SIZE, last_create_time: cursor }
}

#[component]
pub fn AdminChatHistoryPage() -> impl IntoView {
    let store = expect_context::<AppSessionStore>();
    let rows = RwSignal::new(Vec::<ChatHistoryVo>::new());
    let total = RwSignal::new(0_i64);
    let page = RwSignal::new(1_i64);
    let app_filter = RwSignal::new(String::new());
    let type_filter = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let conversation_app = RwSignal::new(None::<i64>);
    let conversation = RwSignal::new(Vec::<ChatHistoryVo>::new());
    let has_older = RwSignal::new(false);

    let load = {
        let store = store.clone();
        Callback::new(move |()| {
            let query = history_query(page.get_untracked(), &app_filter.get_untracked(), &type_filter.get_untracked());
            #[cfg(feature = "csr")]
            {
                use crate::net::types::BaseResponse;

                let store = store.clone();
                leptos::task::spawn_local(async move {
                    let resp = store.api().list_chat_history_vo_by_page_admin(&query).await;
                    match resp.and_then(BaseResponse::into_result) {
                        Ok(result) => {
                            let (records, total_row) =
                                result.map_or_else(|| (Vec::new(), 0), |p| (p.records, p.total_row));
                            rows.set(records);
                            total.set(total_row);
                            info.set(String::new());
                        }
                        Err(e) => info.set(format!("Failed to load chat history: {}", e.user_message())),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = (&store, query);
        })
    };

    // `true` appends older messages, `false` starts the conversation over.
    let load_conversation = Callback::new(move |older: bool| {
        let Some(app_id) = conversation_app.get_untracked() else {
            return;
        };
        let cursor = if older { conversation.with_untracked(|loaded| older_cursor(loaded)) } else { None };
        let params = conversation_params(app_id, cursor);
        #[cfg(feature = "csr")]
        {
            use crate::net::types::BaseResponse;

            let store = store.clone();
            leptos::task::spawn_local(async move {
                match store.api().get_messages(&params).await.and_then(BaseResponse::into_result) {
                    Ok(result) => {
                        let records = result.map(|p| p.records).unwrap_or_default();
                        has_older.set(i64::try_from(records.len()).unwrap_or(i64::MAX) >= params.page_size);
                        conversation.update(|loaded| {
                            if !older {
                                loaded.clear();
                            }
                            loaded.extend(records);
                        });
                    }
                    Err(e) => info.set(format!("Failed to load conversation: {}", e.user_message())),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&store, params, older, has_older);
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
    let open_conversation = move |app_id: i64| {
        conversation_app.set(Some(app_id));
        load_conversation.run(false);
    };

    let at_first = move || page.get() <= 1;
    let at_last = move || page.get() >= page_count(total.get());
    let summary = move || format!("Page {} of {} ({} messages)", page.get(), page_count(total.get()), total.get());

    view! {
        <section class="admin-chat">
            <h1>"Chat history"</h1>
            <form class="admin-chat__search" on:submit=on_search>
                <input
                    type="search"
                    placeholder="App id"
                    prop:value=move || app_filter.get()
                    on:input=move |ev| app_filter.set(event_target_value(&ev))
                />
                <select on:change=move |ev| type_filter.set(event_target_value(&ev))>
                    <option value="">"All messages"</option>
                    <option value="user">"User"</option>
                    <option value="ai">"AI"</option>
                </select>
                <button type="submit">"Search"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="admin-chat__message">{move || info.get()}</p>
            </Show>
            <table class="admin-chat__table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"App"</th>
                        <th>"User"</th>
                        <th>"Type"</th>
                        <th>"Message"</th>
                        <th>"Created"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                let app_id = row.app_id;
                                view! {
                                    <tr>
                                        <td>{row.id}</td>
                                        <td>
                                            <button on:click=move |_| open_conversation(app_id)>{app_id}</button>
                                        </td>
                                        <td>{row.user_id}</td>
                                        <td>{row.message_type}</td>
                                        <td class="admin-chat__text">{row.message}</td>
                                        <td>{row.create_time.unwrap_or_default()}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <div class="admin-chat__pager">
                <button on:click=on_prev disabled=at_first>"Previous"</button>
                <span>{summary}</span>
                <button on:click=on_next disabled=at_last>"Next"</button>
            </div>
            <Show when=move || conversation_app.get().is_some()>
                <aside class="admin-chat__conversation">
                    <h2>{move || format!("App {}", conversation_app.get().unwrap_or_default())}</h2>
                    <ul>
                        {move || {
                            conversation
                                .get()
                                .into_iter()
                                .map(|m| {
                                    view! {
                                        <li class=format!("admin-chat__bubble admin-chat__bubble--{}", m.message_type)>
                                            <span class="admin-chat__time">{m.create_time.unwrap_or_default()}</span>
                                            <p>{m.message}</p>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <Show when=move || has_older.get()>
                        <button on:click=move |_| load_conversation.run(true)>"Load older"</button>
                    </Show>
                </aside>
            </Show>
        </section>
    }
}
