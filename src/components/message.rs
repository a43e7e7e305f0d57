//! One chat bubble with author line and timestamp.

use leptos::prelude::*;

use crate::util::time::clock_time;

/// A single message bubble. Alignment and author label depend on
/// `is_user`; newlines in the text render as visual line breaks.
#[component]
pub fn Message(text: String, is_user: bool, timestamp: f64) -> impl IntoView {
    let row_class = if is_user {
        "message-row message-row--user"
    } else {
        "message-row message-row--bot"
    };
    let bubble_class = if is_user {
        "message message--user"
    } else {
        "message message--bot"
    };
    let author = if is_user { "You" } else { "Analyst" };
    let meta = format!("{author} • {}", clock_time(timestamp));

    let lines: Vec<String> = text.split('\n').map(str::to_owned).collect();
    let last = lines.len().saturating_sub(1);

    view! {
        <div class=row_class>
            <div class=bubble_class>
                <div class="message__meta">
                    <small>{meta}</small>
                </div>
                <div class="message__content">
                    {lines
                        .into_iter()
                        .enumerate()
                        .map(|(i, line)| {
                            view! {
                                <span>{line}</span>
                                {(i < last).then(|| view! { <br/> })}
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
