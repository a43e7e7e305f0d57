//! Single-line query input with its submit control.

use leptos::prelude::*;

/// Text field plus send button.
///
/// The button is disabled while the field is empty/whitespace or a request
/// is in flight; the field itself is disabled while loading. The field
/// clears after a successful submit and auto-focuses on first display.
#[component]
pub fn ChatInput(on_send: Callback<String>, loading: Signal<bool>) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Auto-focus once the input node exists.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input_ref;
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() || loading.get() {
            return;
        }
        on_send.run(text);
        input.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !loading.get();

    view! {
        <div class="chat-input">
            <input
                class="chat-input__field"
                type="text"
                placeholder="Type your query here (e.g., Analyze Wakad real estate)"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
                disabled=move || loading.get()
                node_ref=input_ref
            />
            <button
                class="btn btn--primary chat-input__send"
                on:click=move |_| do_send()
                disabled=move || !can_send()
            >
                {move || if loading.get() { "Analyzing..." } else { "Send" }}
            </button>
        </div>
    }
}
