//! Service worker entry points, called from the `sw.js` glue. Each handler
//! returns the promise the glue passes to `event.waitUntil`.

use courtside_api::{PushPayload, PushSubscriptionJson, SubscribeRequest, VapidKeyResponse};
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

#[wasm_bindgen(start)]
pub fn start() {
    tracing_wasm::set_as_global_default();
}

fn scope() -> Result<web_sys::ServiceWorkerGlobalScope, JsValue> {
    js_sys::global()
        .dyn_into::<web_sys::ServiceWorkerGlobalScope>()
        .map_err(|_| JsValue::from_str("not running inside a service worker"))
}

fn json_err(what: &str, e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{what}: {e}"))
}

fn notification_actions() -> JsValue {
    let action = |name: &str, title: &str| {
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&obj, &"action".into(), &name.into());
        let _ = js_sys::Reflect::set(&obj, &"title".into(), &title.into());
        JsValue::from(obj)
    };
    js_sys::Array::of2(&action("open", "Open"), &action("close", "Dismiss")).into()
}

#[wasm_bindgen]
pub fn handle_push(event: web_sys::PushEvent) -> Promise {
    let payload = event
        .data()
        .map(|d| d.text())
        .and_then(|t| match PushPayload::parse(&t) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!("unparseable push payload: {e}");
                None
            }
        })
        .unwrap_or_else(PushPayload::fallback);
    future_to_promise(async move {
        let registration = scope()?.registration();
        let mut options = web_sys::NotificationOptions::new();
        options.body(&payload.body);
        if let Some(icon) = &payload.icon {
            options.icon(icon);
        }
        if let Some(badge) = &payload.badge {
            options.badge(badge);
        }
        let data = js_sys::Object::new();
        if let Some(url) = &payload.url {
            let _ = js_sys::Reflect::set(&data, &"url".into(), &url.into());
        }
        options.data(data.as_ref());
        if let Some(ts) = payload.timestamp {
            let _ = js_sys::Reflect::set(
                options.as_ref(),
                &"timestamp".into(),
                &JsValue::from_f64(ts as f64),
            );
        }
        let _ = js_sys::Reflect::set(options.as_ref(), &"actions".into(), &notification_actions());
        JsFuture::from(registration.show_notification_with_options(&payload.title, &options)?)
            .await?;
        Ok(JsValue::UNDEFINED)
    })
}

#[wasm_bindgen]
pub fn handle_notification_click(event: web_sys::NotificationEvent) -> Promise {
    let notification = event.notification();
    notification.close();
    // web-sys has no `action` binding on NotificationEvent (Firefox WebIDL
    // lacks notification actions), so read the property via Reflect.
    let action = js_sys::Reflect::get(event.as_ref(), &"action".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    if action == "close" {
        return Promise::resolve(&JsValue::UNDEFINED);
    }
    let url = js_sys::Reflect::get(&notification.data(), &"url".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| String::from("/"));
    future_to_promise(async move {
        let clients = scope()?.clients();
        let mut query = web_sys::ClientQueryOptions::new();
        query.type_(web_sys::ClientType::Window);
        let found = JsFuture::from(clients.match_all_with_options(&query)).await?;
        for client in js_sys::Array::from(&found).iter() {
            let client: web_sys::WindowClient = match client.dyn_into() {
                Ok(c) => c,
                Err(_) => continue,
            };
            if client.url().ends_with(&url) {
                JsFuture::from(client.focus()?).await?;
                return Ok(JsValue::UNDEFINED);
            }
        }
        JsFuture::from(clients.open_window(&url)).await?;
        Ok(JsValue::UNDEFINED)
    })
}

/// Server-side key rotation invalidates the subscription behind our back;
/// resubscribe with the old subscription's options and tell the server.
#[wasm_bindgen]
pub fn handle_subscription_change() -> Promise {
    future_to_promise(async move {
        let scope = scope()?;
        let manager = scope.registration().push_manager()?;
        let existing = JsFuture::from(manager.get_subscription()?).await?;
        let key: js_sys::Object = if existing.is_undefined() || existing.is_null() {
            // the old subscription is already gone, ask the server again
            let key = fetch_vapid_key(&scope).await?;
            js_sys::Uint8Array::from(&key[..]).into()
        } else {
            let existing: web_sys::PushSubscription = existing.dyn_into()?;
            match existing.options().application_server_key()? {
                Some(buf) => buf.into(),
                None => {
                    let key = fetch_vapid_key(&scope).await?;
                    js_sys::Uint8Array::from(&key[..]).into()
                }
            }
        };
        let mut init = web_sys::PushSubscriptionOptionsInit::new();
        init.user_visible_only(true);
        init.application_server_key(Some(&key));
        let new_sub = JsFuture::from(manager.subscribe_with_options(&init)?).await?;
        let new_sub: web_sys::PushSubscription = new_sub.dyn_into()?;
        post_subscription(&scope, &new_sub).await?;
        Ok(JsValue::UNDEFINED)
    })
}

async fn fetch_vapid_key(scope: &web_sys::ServiceWorkerGlobalScope) -> Result<Vec<u8>, JsValue> {
    let resp = JsFuture::from(scope.fetch_with_str("/push/vapid-public-key")).await?;
    let resp: web_sys::Response = resp.dyn_into()?;
    let text = JsFuture::from(resp.text()?).await?;
    let text = text
        .as_string()
        .ok_or_else(|| JsValue::from_str("non-string response body"))?;
    let parsed: VapidKeyResponse =
        serde_json::from_str(&text).map_err(|e| json_err("parsing vapid key response", e))?;
    courtside_client::decode_public_key(&parsed.public_key)
        .map_err(|e| json_err("decoding vapid key", format!("{e:#}")))
}

async fn post_subscription(
    scope: &web_sys::ServiceWorkerGlobalScope,
    sub: &web_sys::PushSubscription,
) -> Result<(), JsValue> {
    let raw = js_sys::JSON::stringify(sub.as_ref())?;
    let subscription: PushSubscriptionJson = serde_json::from_str(&String::from(raw))
        .map_err(|e| json_err("parsing push subscription", e))?;
    let body = serde_json::to_string(&SubscribeRequest { subscription })
        .map_err(|e| json_err("serializing subscribe request", e))?;
    let headers = web_sys::Headers::new()?;
    headers.append("content-type", "application/json")?;
    let mut init = web_sys::RequestInit::new();
    init.method("POST");
    init.headers(headers.as_ref());
    init.body(Some(&JsValue::from_str(&body)));
    let request = web_sys::Request::new_with_str_and_init("/push/subscribe", &init)?;
    JsFuture::from(scope.fetch_with_request(&request)).await?;
    Ok(())
}
