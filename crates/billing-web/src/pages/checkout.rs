//! Checkout Page

use leptos::prelude::*;

use billing_core::PageSession;

use crate::api;
use crate::components::PhoneField;
use crate::config::FrontendConfig;
use crate::stripe_js;

const CHECKOUT_SELECTOR: &str = "#checkout";

#[component]
pub fn CheckoutPage(config: FrontendConfig) -> impl IntoView {
    let session = RwSignal::new(PageSession::new());
    let (loading, set_loading) = signal(true);
    let (checkout_error, set_checkout_error) = signal(None::<String>);

    let mount_config = config.clone();
    Effect::new(move |_| {
        if !session.try_update(PageSession::claim_checkout_mount).unwrap_or(false) {
            return;
        }

        let config = mount_config.clone();
        leptos::task::spawn_local(async move {
            let result: Result<(), String> = async {
                let created = api::create_setup_session(&config)
                    .await
                    .map_err(|e| e.to_string())?;
                session.update(|s| s.attach_customer(created.customer_id));
                stripe_js::mount_embedded_checkout(
                    &config.publishable_key,
                    &created.client_secret,
                    CHECKOUT_SELECTOR,
                )
                .await
            }
            .await;

            if let Err(message) = result {
                set_checkout_error.set(Some(message));
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="checkout-page">
            <header>
                <h1>"Save a card on file"</h1>
                <p class="subtitle">"You won't be charged today."</p>
            </header>

            <PhoneField config=config session=session />

            <section class="checkout-panel">
                <Show when=move || loading.get()>
                    <p class="loading">"Loading secure checkout…"</p>
                </Show>
                {move || checkout_error.get().map(|message| view! {
                    <p class="error">{message}</p>
                })}
                <div id="checkout"></div>
            </section>
        </div>
    }
}
