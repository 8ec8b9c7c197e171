//! Recipients step: a textarea parsed on every edit, plus a file picker.
//!
//! Statistics come straight from [`CampaignDraft::set_recipients_text`], so
//! the cards always describe exactly what is in the textarea.
//!
//! File reads are asynchronous and can overlap when the operator picks files
//! quickly. Each read takes a ticket from a [`LoadSequencer`]; a read whose
//! ticket is no longer the latest is dropped on completion, so the textarea
//! ends up with the last file picked, whatever order the reads finish in.
//! Typing, "Clear All" and "Load Sample" do not cancel a read in flight.

use leptos::*;
use mailblast_core::{LoadSequencer, RecipientBatch, Wizard};
use web_sys::{Event, HtmlInputElement};

use crate::components::logs::add_log;
use crate::services::file::read_file_text;
use crate::{LogEntry, LogLevel, RECIPIENT_FILE_ACCEPT, SAMPLE_RECIPIENTS};

#[component]
pub fn RecipientsStep(
    wizard: RwSignal<Wizard>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let sequencer = store_value(LoadSequencer::new());
    let (reading, set_reading) = create_signal(None::<String>);

    let stats = create_memo(move |_| wizard.with(|w| w.draft.recipient_stats));
    let has_text = move || wizard.with(|w| !w.draft.recipients_text.trim().is_empty());

    let set_text = move |text: String| wizard.update(|w| w.draft.set_recipients_text(text));

    let on_input = move |ev: Event| set_text(event_target_value(&ev));

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Picking the same file twice must fire `change` again
        input.set_value("");

        let ticket = sequencer.with_value(|s| s.begin());
        let name = file.name();
        set_reading.set(Some(name.clone()));

        spawn_local(async move {
            let content = read_file_text(&file).await;

            let Some(content) = sequencer.try_with_value(|s| s.complete(ticket, content)).flatten()
            else {
                log::debug!("📄 Discarding stale read of {}", name);
                return;
            };

            set_reading.set(None);
            set_text(content);

            let batch = stats.get_untracked();
            if batch.has_valid() {
                add_log(
                    set_logs,
                    LogLevel::Success,
                    &format!("📄 {}: {} valid recipients", name, batch.valid_count),
                );
            } else {
                add_log(
                    set_logs,
                    LogLevel::Warning,
                    &format!("📄 {}: no valid recipients in {} lines", name, batch.total_lines),
                );
            }
        });
    };

    let on_clear = move |_| wizard.update(|w| w.draft.clear_recipients());
    let on_sample = move |_| set_text(SAMPLE_RECIPIENTS.to_string());

    view! {
        <div class="step recipients-step">
            <label for="recipients" class="field-label">
                "Recipients"
                <span class="field-hint">
                    " One per line, or separated by commas or semicolons. "
                    "A \"tag:\" prefix (e.g. an IP) is allowed."
                </span>
            </label>

            <textarea
                id="recipients"
                class="recipients-input"
                rows="12"
                placeholder="alice@example.com\n10.0.0.1:bob@example.com"
                prop:value=move || wizard.with(|w| w.draft.recipients_text.clone())
                on:input=on_input
            ></textarea>

            <div class="recipients-actions">
                <label for="recipientsFile" class="upload-button">"Upload TXT/CSV"</label>
                <input
                    type="file"
                    id="recipientsFile"
                    accept=RECIPIENT_FILE_ACCEPT
                    style="display:none"
                    on:change=on_file_change
                />
                <button class="secondary-button" on:click=on_sample>"Load Sample"</button>
                <button class="secondary-button" on:click=on_clear>"Clear All"</button>
                <Show when=move || reading.with(Option::is_some) fallback=|| view! { }>
                    <span class="reading-hint">
                        "⏳ Reading " {move || reading.get().unwrap_or_default()}
                    </span>
                </Show>
            </div>

            <RecipientStats stats=stats/>

            <Show
                when=move || has_text() && !stats.get().has_valid()
                fallback=|| view! { }
            >
                <div class="error-message">"Please add at least one valid recipient"</div>
            </Show>
        </div>
    }
}

/// The four counters under the textarea.
#[component]
pub fn RecipientStats(#[prop(into)] stats: Signal<RecipientBatch>) -> impl IntoView {
    let card = move |label: &'static str, class: &'static str, value: fn(&RecipientBatch) -> usize| {
        view! {
            <div class=format!("stat-card {}", class)>
                <div class="stat-value">{move || value(&stats.get())}</div>
                <div class="stat-label">{label}</div>
            </div>
        }
    };

    view! {
        <div class="stats-grid">
            {card("Total", "stat-total", |b| b.total_lines)}
            {card("Valid", "stat-valid", |b| b.valid_count)}
            {card("Invalid", "stat-invalid", |b| b.invalid_count)}
            {card("Duplicates", "stat-duplicates", |b| b.duplicate_count)}
        </div>
    }
}
