//! Page title

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Create Campaign"</h1>
            <p class="subtitle">
                "Name the campaign, paste or upload recipients, write the message, "
                "then review before launch."
            </p>
        </div>
    }
}
