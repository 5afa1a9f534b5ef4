//! UI Components

use std::time::Duration;

use leptos::prelude::*;

use billing_core::{
    PageSession, PhoneSave, SaveState, phone::format_for_display, session::SAVED_INDICATOR_MS,
};

use crate::api;
use crate::config::FrontendConfig;

/// Optional phone number, saved to the customer when the field loses focus
#[component]
pub fn PhoneField(config: FrontendConfig, session: RwSignal<PageSession>) -> impl IntoView {
    let (phone_text, set_phone_text) = signal(String::new());

    let save = move |_| {
        let decision = session.with_untracked(|s| s.prepare_phone_save(&phone_text.get_untracked()));

        let (customer_id, phone) = match decision {
            PhoneSave::Skip => return,
            PhoneSave::Invalid(message) => {
                session.update(|s| s.reject(message));
                return;
            }
            PhoneSave::Submit { customer_id, phone } => (customer_id, phone),
        };

        session.update(PageSession::begin_save);

        let config = config.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::update_customer_phone(&config, &customer_id, &phone)
                .await
                .map_err(|e| e.to_string());
            let generation = session.try_update(|s| s.finish_save(&phone, outcome)).flatten();

            if let Some(generation) = generation {
                set_timeout(
                    move || session.update(|s| s.clear_saved(generation)),
                    Duration::from_millis(SAVED_INDICATOR_MS),
                );
            }
        });
    };

    let status_class = move || {
        session.with(|s| match s.save_state() {
            SaveState::Idle => "phone-status",
            SaveState::Submitting => "phone-status pending",
            SaveState::Saved => "phone-status saved",
            SaveState::Failed(_) => "phone-status error",
        })
    };

    view! {
        <div class="field phone-field">
            <label for="phone">"Phone number (optional)"</label>
            <input
                id="phone"
                type="tel"
                autocomplete="tel"
                placeholder="(555) 123-4567"
                prop:value=move || phone_text.get()
                on:input=move |ev| set_phone_text.set(format_for_display(&event_target_value(&ev)))
                on:blur=save
                disabled=move || session.with(|s| s.save_state().is_submitting())
            />
            <span class=status_class>
                {move || session.with(|s| s.save_state().status_text().map(str::to_string))}
            </span>
        </div>
    }
}
