//! Campaign creation wizard.
//!
//! Owns the [`Wizard`] state for the page. "Next" runs the current step's
//! checks from `mailblast-core` and shows the first problem instead of moving
//! on; "Back" is always allowed.

use leptos::*;
use mailblast_core::{CampaignDraft, Wizard, WizardStep};

use crate::components::content::ContentStep;
use crate::components::logs::add_log;
use crate::components::recipients::RecipientsStep;
use crate::components::review::ReviewStep;
use crate::{LogEntry, LogLevel};

#[component]
pub fn CampaignWizard(set_logs: WriteSignal<Vec<LogEntry>>) -> impl IntoView {
    let wizard = create_rw_signal(Wizard::new());
    let (error, set_error) = create_signal(None::<String>);
    let step = create_memo(move |_| wizard.with(|w| w.step));

    let on_next = move |_| match wizard.try_update(Wizard::advance) {
        Some(Ok(step)) => {
            set_error.set(None);
            log::info!("➡️  {}", step.title());
        }
        Some(Err(e)) => {
            add_log(set_logs, LogLevel::Warning, &e.to_string());
            set_error.set(Some(e.to_string()));
        }
        None => {}
    };

    let on_back = move |_| {
        set_error.set(None);
        wizard.update(|w| {
            w.back();
        });
    };

    let steps = WizardStep::ALL
        .iter()
        .map(|s| {
            let s = *s;
            view! {
                <li
                    class="wizard-step"
                    class:active=move || step.get() == s
                    class:done={move || step.get().index() > s.index()}
                >
                    {s.index() + 1} ". " {s.title()}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="wizard">
            <ol class="wizard-steps">{steps}</ol>

            <div class="wizard-body">
                {move || match step.get() {
                    WizardStep::Setup => view! { <SetupStep wizard=wizard/> }.into_view(),
                    WizardStep::Recipients => {
                        view! { <RecipientsStep wizard=wizard set_logs=set_logs/> }.into_view()
                    }
                    WizardStep::Content => {
                        view! { <ContentStep wizard=wizard set_logs=set_logs/> }.into_view()
                    }
                    WizardStep::Review => {
                        view! { <ReviewStep wizard=wizard set_logs=set_logs/> }.into_view()
                    }
                }}
            </div>

            <Show when=move || error.with(Option::is_some) fallback=|| view! { }>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="wizard-nav">
                <button
                    class="secondary-button"
                    disabled=move || step.get().previous().is_none()
                    on:click=on_back
                >
                    "Back"
                </button>
                <Show when=move || step.get() != WizardStep::Review fallback=|| view! { }>
                    <button
                        class="primary-button"
                        class:dimmed=move || !wizard.with(Wizard::can_advance)
                        on:click=on_next
                    >
                        "Next"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn SetupStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    view! {
        <div class="step setup-step">
            <DraftField wizard=wizard label="Campaign name" required=true
                get={|d| d.name.clone()} set={|d, v| d.name = v}/>
            <DraftField wizard=wizard label="Description"
                get={|d| d.description.clone()} set={|d, v| d.description = v}/>
            <DraftField wizard=wizard label="Sender name"
                get={|d| d.sender_name.clone()} set={|d, v| d.sender_name = v}/>
            <DraftField wizard=wizard label="From address" placeholder="news@example.com"
                get={|d| d.from_email.clone()} set={|d, v| d.from_email = v}/>
            <DraftField wizard=wizard label="Reply-to" placeholder="support@example.com"
                get={|d| d.reply_to.clone()} set={|d, v| d.reply_to = v}/>
        </div>
    }
}

/// A single-line text input bound to one draft field.
#[component]
pub fn DraftField(
    wizard: RwSignal<Wizard>,
    label: &'static str,
    get: fn(&CampaignDraft) -> String,
    set: fn(&mut CampaignDraft, String),
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || wizard.with(|w| get(&w.draft))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| set(&mut w.draft, value));
                }
            />
        </label>
    }
}

/// A `<select>` bound to one draft field.
#[component]
pub fn ChoiceField(
    wizard: RwSignal<Wizard>,
    label: &'static str,
    options: &'static [&'static str],
    get: fn(&CampaignDraft) -> String,
    set: fn(&mut CampaignDraft, String),
) -> impl IntoView {
    let choices = options
        .iter()
        .map(|option| {
            let option = *option;
            view! {
                <option
                    value=option
                    selected=move || wizard.with(|w| get(&w.draft) == option)
                >
                    {option}
                </option>
            }
        })
        .collect_view();

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                wizard.update(|w| set(&mut w.draft, value));
            }>
                {choices}
            </select>
        </label>
    }
}
