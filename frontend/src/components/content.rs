//! Content step: subject, body and delivery options.

use leptos::*;
use mailblast_core::{ContentType, LoadSequencer, RichText, Wizard};
use web_sys::{Event, HtmlInputElement};

use crate::components::logs::add_log;
use crate::components::wizard::{ChoiceField, DraftField};
use crate::services::file::read_file_text;
use crate::{LogEntry, LogLevel, MESSAGE_ENCODINGS, TRANSFER_ENCODINGS};

const CONTENT_TYPES: [&str; 2] = ["plain", "html"];

#[component]
pub fn ContentStep(
    wizard: RwSignal<Wizard>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let sequencer = store_value(LoadSequencer::new());

    // Templates come from the editor as whole documents
    let on_import = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");

        let ticket = sequencer.with_value(|s| s.begin());
        spawn_local(async move {
            let document = read_file_text(&file).await;
            let Some(document) = sequencer.try_with_value(|s| s.complete(ticket, document)).flatten()
            else {
                return;
            };

            let body = RichText::from_html(&document);
            if body.is_blank() {
                add_log(set_logs, LogLevel::Warning, &format!("🖋️ {} has no body content", file.name()));
                return;
            }
            wizard.update(|w| w.draft.body = body);
            add_log(set_logs, LogLevel::Info, &format!("🖋️ Imported {}", file.name()));
        });
    };

    let on_throttle = move |ev: Event| {
        if let Ok(throttle) = event_target_value(&ev).trim().parse::<u32>() {
            if throttle >= 1 {
                wizard.update(|w| w.draft.throttle = throttle);
            }
        }
    };

    view! {
        <div class="step content-step">
            <DraftField wizard=wizard label="Subject" required=true
                get={|d| d.subject.clone()} set={|d, v| d.subject = v}/>

            <ChoiceField wizard=wizard label="Format" options=&CONTENT_TYPES
                get={|d| d.body.content_type.as_str().to_string()}
                set={|d, v| d.body.content_type = if v == "html" { ContentType::Html } else { ContentType::Plain }}/>

            <label class="field">
                <span class="field-label">"Body" <span class="required">" *"</span></span>
                <textarea
                    class="body-input"
                    rows="14"
                    prop:value=move || wizard.with(|w| w.draft.body.body.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        wizard.update(|w| w.draft.body.body = value);
                    }
                ></textarea>
            </label>

            <div class="content-actions">
                <label for="templateFile" class="upload-button">"Import HTML template"</label>
                <input
                    type="file"
                    id="templateFile"
                    accept=".html,.htm"
                    style="display:none"
                    on:change=on_import
                />
            </div>

            <div class="body-preview">
                <span class="field-label">"Preview"</span>
                <iframe sandbox="" srcdoc=move || wizard.with(|w| w.draft.body.to_html())></iframe>
            </div>

            <fieldset class="delivery-options">
                <legend>"Delivery"</legend>
                <ChoiceField wizard=wizard label="Charset" options=&MESSAGE_ENCODINGS
                    get={|d| d.encoding.clone()} set={|d, v| d.encoding = v}/>
                <ChoiceField wizard=wizard label="Transfer encoding" options=&TRANSFER_ENCODINGS
                    get={|d| d.transfer_encoding.clone()} set={|d, v| d.transfer_encoding = v}/>
                <label class="field">
                    <span class="field-label">"Messages per minute"</span>
                    <input
                        type="number"
                        min="1"
                        max="100000"
                        prop:value=move || wizard.with(|w| w.draft.throttle.to_string())
                        on:change=on_throttle
                    />
                </label>
            </fieldset>
        </div>
    }
}
