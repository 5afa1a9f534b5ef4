//! Success Page

use leptos::prelude::*;

#[component]
pub fn SuccessPage(session_id: Option<String>) -> impl IntoView {
    view! {
        <div class="success-page">
            <h1>"Card saved"</h1>
            <p>"Your card is on file. No charge was made."</p>
            {session_id.map(|id| view! {
                <p class="session-ref">"Reference: " <code>{id}</code></p>
            })}
            <a href="/" class="btn">"Done"</a>
        </div>
    }
}
