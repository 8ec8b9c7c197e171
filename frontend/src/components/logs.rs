//! Activity panel.
//!
//! Shows what the wizard did locally (file reads, validation results) next to
//! the backend's own log lines, streamed over SSE from `/api/logs`.

use leptos::*;
use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};

use crate::{LogEntry, LogLevel, BACKEND_URL, MAX_LOG_ENTRIES};

fn request_animation_frame(f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn push_entry(set_logs: WriteSignal<Vec<LogEntry>>, entry: LogEntry) {
    set_logs.update(|logs| {
        logs.push(entry);
        if logs.len() > MAX_LOG_ENTRIES {
            logs.remove(0);
        }
    });
}

/// Append a local entry, stamped with the browser clock.
pub fn add_log(set_logs: WriteSignal<Vec<LogEntry>>, level: LogLevel, message: &str) {
    let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();

    push_entry(
        set_logs,
        LogEntry {
            level,
            message: message.to_string(),
            timestamp,
        },
    );
}

thread_local! {
    static SSE_STARTED: Cell<bool> = const { Cell::new(false) };
}

/// True for the first caller only.
fn claim_sse_stream() -> bool {
    SSE_STARTED.with(|started| !started.replace(true))
}

/// Start SSE connection to receive backend logs.
///
/// Called from [`App`](crate::App); later calls are ignored so the browser
/// never holds more than one stream.
pub fn init_sse_logs(set_logs: WriteSignal<Vec<LogEntry>>) {
    if !claim_sse_stream() {
        log::debug!("📡 SSE log stream already running");
        return;
    }

    let sse_url = format!("{}/api/logs", BACKEND_URL);

    let event_source = match EventSource::new(&sse_url) {
        Ok(es) => es,
        Err(e) => {
            log::error!("Failed to create EventSource: {:?}", e);
            return;
        }
    };

    let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Some(entry) = event.data().as_string().as_deref().and_then(LogEntry::from_sse) {
            push_entry(set_logs, entry);
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    event_source.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
    onmessage.forget();

    let onerror = Closure::wrap(Box::new(move |_: web_sys::Event| {
        log::warn!("SSE connection error - will auto-reconnect");
    }) as Box<dyn FnMut(web_sys::Event)>);

    event_source.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    // Lives for the app's lifetime
    std::mem::forget(event_source);

    log::info!("📡 SSE log stream initialized");
}

#[component]
pub fn ActivityPanel(
    logs: ReadSignal<Vec<LogEntry>>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let logs_container = create_node_ref::<leptos::html::Div>();

    // Keep the newest entry in view
    create_effect(move |_| {
        let _ = logs.get();
        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div class="logs-panel">
            <div class="logs-header">
                <span class="logs-title">"📋 Activity"</span>
                <button class="logs-clear" on:click=move |_| set_logs.set(vec![])>
                    "Clear"
                </button>
            </div>
            <div class="logs-content" node_ref=logs_container>
                <Show
                    when=move || !logs.with(Vec::is_empty)
                    fallback=|| view! { <div class="log-empty">"Nothing yet"</div> }
                >
                    <For
                        each=move || logs.get().into_iter().enumerate()
                        key=|(i, entry)| (*i, entry.timestamp.clone())
                        children=move |(_, entry)| {
                            view! {
                                <div class=format!("log-entry {}", entry.level.css_class())>
                                    <span class="log-time">"[" {entry.timestamp.clone()} "] "</span>
                                    {entry.message.clone()}
                                </div>
                            }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sse_stream_is_claimed_once() {
        assert!(claim_sse_stream());
        assert!(!claim_sse_stream());
        assert!(!claim_sse_stream());
    }
}
