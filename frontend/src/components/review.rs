//! Review step: summary of the draft and server-side validation.

use leptos::*;
use mailblast_core::Wizard;

use crate::components::logs::add_log;
use crate::components::recipients::RecipientStats;
use crate::services::campaign::validate_draft;
use crate::{DraftReport, LogEntry, LogLevel, BACKEND_URL};

#[component]
pub fn ReviewStep(
    wizard: RwSignal<Wizard>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let (report, set_report) = create_signal(None::<DraftReport>);
    let (checking, set_checking) = create_signal(false);

    let problems = create_memo(move |_| {
        wizard.with(|w| w.draft.problems().iter().map(ToString::to_string).collect::<Vec<_>>())
    });
    let stats = Signal::derive(move || wizard.with(|w| w.draft.recipient_stats));

    let on_validate = move |_| {
        let draft = wizard.get_untracked().draft;
        set_checking.set(true);
        set_report.set(None);

        spawn_local(async move {
            match validate_draft(&draft, BACKEND_URL).await {
                Ok(result) => {
                    if result.is_valid() {
                        add_log(set_logs, LogLevel::Success, "✅ Draft accepted by the server");
                    } else {
                        add_log(
                            set_logs,
                            LogLevel::Warning,
                            &format!(
                                "Draft rejected: {} schema errors, {} problems",
                                result.schema_errors.len(),
                                result.problems.len()
                            ),
                        );
                    }
                    set_report.set(Some(result));
                }
                Err(e) => add_log(set_logs, LogLevel::Error, &format!("❌ {}", e)),
            }
            set_checking.set(false);
        });
    };

    let row = move |label: &'static str, value: fn(&Wizard) -> String| {
        view! {
            <tr>
                <th>{label}</th>
                <td>{move || wizard.with(value)}</td>
            </tr>
        }
    };

    view! {
        <div class="step review-step">
            <table class="review-summary">
                {row("Campaign", |w| w.draft.name.clone())}
                {row("Sender", |w| format!("{} <{}>", w.draft.sender_name, w.draft.from_email))}
                {row("Subject", |w| w.draft.subject.clone())}
                {row("Format", |w| w.draft.body.content_type.as_str().to_string())}
                {row("Charset", |w| format!("{} / {}", w.draft.encoding, w.draft.transfer_encoding))}
                {row("Throttle", |w| format!("{} per minute", w.draft.throttle))}
            </table>

            <RecipientStats stats=stats/>

            <Show
                when=move || problems.with(Vec::is_empty)
                fallback=move || view! {
                    <ul class="problem-list">
                        {move || problems.get().into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}
                    </ul>
                }
            >
                <div class="ready-message">"✅ Ready to launch"</div>
            </Show>

            <button class="primary-button" disabled=move || checking.get() on:click=on_validate>
                {move || if checking.get() { "⏳ Checking..." } else { "Check with server" }}
            </button>

            {move || report.get().map(|r| {
                if r.is_valid() {
                    view! { <div class="report report-ok">"Server: draft is valid"</div> }.into_view()
                } else {
                    let lines = r
                        .schema_errors
                        .into_iter()
                        .chain(r.problems.into_iter().map(|p| format!("{}: {}", p.field, p.message)))
                        .map(|line| view! { <li>{line}</li> })
                        .collect_view();
                    view! { <ul class="report report-errors">{lines}</ul> }.into_view()
                }
            })}
        </div>
    }
}
