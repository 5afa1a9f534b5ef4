//! Stripe.js Embedded Checkout binding
//!
//! Expects `<script src="https://js.stripe.com/v3/"></script>` in index.html.

use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::{JsCast, prelude::*};
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    type StripeJs;

    #[wasm_bindgen(catch, js_name = Stripe)]
    fn stripe_js(publishable_key: &str) -> Result<StripeJs, JsValue>;

    #[wasm_bindgen(method, catch, js_name = initEmbeddedCheckout)]
    fn init_embedded_checkout(this: &StripeJs, options: &Object) -> Result<Promise, JsValue>;

    type EmbeddedCheckout;

    #[wasm_bindgen(method, catch)]
    fn mount(this: &EmbeddedCheckout, selector: &str) -> Result<(), JsValue>;
}

fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| "Stripe.js failed to load the checkout".into())
}

/// Mount the provider-hosted checkout form into `selector`
pub async fn mount_embedded_checkout(
    publishable_key: &str,
    client_secret: &str,
    selector: &str,
) -> Result<(), String> {
    let stripe = stripe_js(publishable_key).map_err(|e| js_error(&e))?;

    let secret = JsValue::from_str(client_secret);
    let fetch_client_secret = Closure::once_into_js(move || Promise::resolve(&secret));

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("fetchClientSecret"), &fetch_client_secret)
        .map_err(|e| js_error(&e))?;

    let pending = stripe
        .init_embedded_checkout(&options)
        .map_err(|e| js_error(&e))?;
    let checkout: EmbeddedCheckout = JsFuture::from(pending)
        .await
        .map_err(|e| js_error(&e))?
        .unchecked_into();

    checkout.mount(selector).map_err(|e| js_error(&e))
}
