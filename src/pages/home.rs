//! Home page — the chat-driven analysis workspace.
//!
//! DESIGN
//! ======
//! This is the page controller: it owns the conversation state signal,
//! runs the one-shot startup fetch, and wires user actions (submit,
//! sample-query click, export) to the API client. All state rules live in
//! [`ChatState`]; network results are applied through its methods, so the
//! controller itself is only sequencing and layout.

use leptos::prelude::*;

use crate::components::analysis_chart::AnalysisChart;
use crate::components::chat_input::ChatInput;
use crate::components::data_table::DataTable;
use crate::components::message::Message;
use crate::state::chat::ChatState;
use crate::util::time::now_ms;

/// Run one analyze round-trip for `text`.
///
/// The user message is appended optimistically before the call issues;
/// whitespace input is rejected by `begin_submission` and issues no call.
/// Each submission attempts exactly once; a failure waits for the next
/// user action.
fn submit(chat: RwSignal<ChatState>, text: String) {
    let accepted = chat
        .try_update(|c| c.begin_submission(&text, now_ms()))
        .unwrap_or(false);
    if !accepted {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let filters = crate::net::types::Record::new();
        match crate::net::api::analyze(&text, &filters).await {
            Ok(result) => chat.update(|c| c.finish_analysis(result, now_ms())),
            Err(_) => chat.update(|c| c.fail_analysis(now_ms())),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = text;
}

/// Export the current result's data in `format` ("csv" or "excel"),
/// reusing the filters the backend reported for that result. Failures set
/// the visible error banner; no chat message is appended.
fn export(chat: RwSignal<ChatState>, format: String) {
    #[cfg(feature = "hydrate")]
    {
        let filters = chat.with_untracked(|c| c.result.as_ref().map(|r| r.filters.clone()));
        let Some(filters) = filters else {
            return;
        };
        leptos::task::spawn_local(async move {
            if crate::net::api::export_analysis(&format, &filters)
                .await
                .is_err()
            {
                chat.update(|c| c.fail_export());
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, format);
    }
}

/// Chat page: message history, input, current analysis, sample queries.
#[component]
pub fn HomePage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let started = RwSignal::new(false);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // One-shot startup fetch: sample queries and localities requested
    // concurrently and joined before the single state update. The welcome
    // message is appended by `apply_startup` whatever the outcome.
    Effect::new(move || {
        if started.get() {
            return;
        }
        started.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (queries, localities) = futures::future::join(
                crate::net::api::fetch_sample_queries(),
                crate::net::api::fetch_localities(),
            )
            .await;
            chat.update(|c| c.apply_startup(queries, localities, now_ms()));
        });
    });

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let loading = Signal::derive(move || chat.with(|c| c.loading));
    let on_send = Callback::new(move |text: String| submit(chat, text));
    let on_download = Callback::new(move |format: String| export(chat, format));

    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Real Estate Analysis Chatbot"</h1>
            <p class="home-page__subtitle">
                "Get insights and analysis of real estate markets with natural language queries"
            </p>

            <Show when=move || chat.with(|c| c.error.is_some())>
                <div class="alert alert--danger">
                    {move || chat.with(|c| c.error.clone().unwrap_or_default())}
                </div>
            </Show>

            <div class="card chat-card">
                <div class="chat-messages" node_ref=messages_ref>
                    {move || {
                        chat.with(|c| c.messages.clone())
                            .into_iter()
                            .map(|msg| {
                                view! {
                                    <Message
                                        text=msg.text
                                        is_user=msg.is_user
                                        timestamp=msg.timestamp
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <Show when=move || loading.get()>
                        <div class="message-row message-row--bot">
                            <div class="message message--bot message--pending">
                                <small>"Analyzing..."</small>
                            </div>
                        </div>
                    </Show>
                </div>
                <ChatInput on_send=on_send loading=loading/>
            </div>

            {move || {
                chat.with(|c| c.result.clone())
                    .map(|result| {
                        let ai_badge = result.is_ai_summary();
                        view! {
                            <div class="card analysis-card">
                                <div class="analysis-card__header">
                                    <h5>"Market Analysis"</h5>
                                    <Show when=move || ai_badge>
                                        <span class="badge badge--info">"AI enhanced"</span>
                                    </Show>
                                </div>
                                <AnalysisChart chart_data=result.chart_data.clone()/>
                            </div>
                            <div class="card table-card">
                                <DataTable
                                    data=result.table_data.clone()
                                    title="Real Estate Data".to_owned()
                                    on_download=on_download
                                />
                            </div>
                        }
                    })
            }}

            {move || {
                let samples = chat.with(|c| {
                    if c.result.is_none() {
                        c.sample_queries.clone()
                    } else {
                        Vec::new()
                    }
                });
                (!samples.is_empty()).then(|| {
                    view! {
                        <div class="card samples-card">
                            <h5>"Try asking:"</h5>
                            <div class="samples-card__buttons">
                                {samples
                                    .into_iter()
                                    .map(|sample| {
                                        let text = sample.query.clone();
                                        view! {
                                            <button
                                                class="btn btn--outline btn--small"
                                                on:click=move |_| submit(chat, text.clone())
                                            >
                                                {sample.query}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
