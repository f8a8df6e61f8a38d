//! Browser-side implementations of the push traits: the real Push API behind
//! [`PushProvider`], and the backend endpoints behind [`PushServer`].

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use courtside_client::{
    api::{PushSubscriptionJson, SubscribeRequest},
    Permission, PushProvider, PushServer,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::api;

const SERVICE_WORKER_URL: &str = "/sw.js";

fn js_err(what: &str, e: JsValue) -> anyhow::Error {
    anyhow!("{what}: {e:?}")
}

fn window() -> anyhow::Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| anyhow!("no window in this context"))
}

pub struct BrowserPush {
    registration: Option<web_sys::ServiceWorkerRegistration>,
}

impl BrowserPush {
    pub fn new() -> BrowserPush {
        BrowserPush { registration: None }
    }

    async fn active_registration(
        &mut self,
    ) -> anyhow::Result<Option<web_sys::ServiceWorkerRegistration>> {
        if let Some(reg) = &self.registration {
            return Ok(Some(reg.clone()));
        }
        let container = window()?.navigator().service_worker();
        let reg = JsFuture::from(container.get_registration())
            .await
            .map_err(|e| js_err("querying service worker registration", e))?;
        if reg.is_undefined() || reg.is_null() {
            return Ok(None);
        }
        let reg: web_sys::ServiceWorkerRegistration = reg
            .dyn_into()
            .map_err(|e| js_err("unexpected registration object", e))?;
        self.registration = Some(reg.clone());
        Ok(Some(reg))
    }

    async fn current_subscription(&mut self) -> anyhow::Result<Option<web_sys::PushSubscription>> {
        let reg = match self.active_registration().await? {
            Some(reg) => reg,
            None => return Ok(None),
        };
        let manager = reg
            .push_manager()
            .map_err(|e| js_err("accessing push manager", e))?;
        let sub = JsFuture::from(
            manager
                .get_subscription()
                .map_err(|e| js_err("querying push subscription", e))?,
        )
        .await
        .map_err(|e| js_err("querying push subscription", e))?;
        if sub.is_undefined() || sub.is_null() {
            return Ok(None);
        }
        Ok(Some(sub.dyn_into().map_err(|e| {
            js_err("unexpected push subscription object", e)
        })?))
    }
}

fn subscription_to_json(sub: &web_sys::PushSubscription) -> anyhow::Result<PushSubscriptionJson> {
    // PushSubscription has a toJSON, so stringify gives the wire shape
    let raw = js_sys::JSON::stringify(sub.as_ref())
        .map_err(|e| js_err("serializing push subscription", e))?;
    serde_json::from_str(&String::from(raw)).context("parsing push subscription json")
}

#[async_trait(?Send)]
impl PushProvider for BrowserPush {
    fn is_supported(&self) -> bool {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return false,
        };
        let has_worker = js_sys::Reflect::has(
            window.navigator().as_ref(),
            &JsValue::from_str("serviceWorker"),
        )
        .unwrap_or(false);
        let has_push =
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("PushManager"))
                .unwrap_or(false);
        has_worker && has_push
    }

    async fn request_permission(&mut self) -> anyhow::Result<Permission> {
        let promise = web_sys::Notification::request_permission()
            .map_err(|e| js_err("requesting notification permission", e))?;
        let res = JsFuture::from(promise)
            .await
            .map_err(|e| js_err("requesting notification permission", e))?;
        Ok(match res.as_string().as_deref() {
            Some("granted") => Permission::Granted,
            Some("denied") => Permission::Denied,
            // "default": the prompt was dismissed without an answer
            _ => Permission::Dismissed,
        })
    }

    async fn register_worker(&mut self) -> anyhow::Result<()> {
        let container = window()?.navigator().service_worker();
        let reg = JsFuture::from(container.register(SERVICE_WORKER_URL))
            .await
            .map_err(|e| js_err("registering service worker", e))?;
        self.registration = Some(
            reg.dyn_into()
                .map_err(|e| js_err("unexpected registration object", e))?,
        );
        Ok(())
    }

    async fn existing_subscription(&mut self) -> anyhow::Result<Option<PushSubscriptionJson>> {
        match self.current_subscription().await? {
            Some(sub) => Ok(Some(subscription_to_json(&sub)?)),
            None => Ok(None),
        }
    }

    async fn subscribe(
        &mut self,
        application_server_key: &[u8],
    ) -> anyhow::Result<PushSubscriptionJson> {
        let reg = self
            .registration
            .clone()
            .ok_or_else(|| anyhow!("service worker is not registered"))?;
        let manager = reg
            .push_manager()
            .map_err(|e| js_err("accessing push manager", e))?;
        let key = js_sys::Uint8Array::from(application_server_key);
        let mut options = web_sys::PushSubscriptionOptionsInit::new();
        options.user_visible_only(true);
        options.application_server_key(Some(key.as_ref()));
        let sub = JsFuture::from(
            manager
                .subscribe_with_options(&options)
                .map_err(|e| js_err("subscribing to push", e))?,
        )
        .await
        .map_err(|e| js_err("subscribing to push", e))?;
        let sub: web_sys::PushSubscription = sub
            .dyn_into()
            .map_err(|e| js_err("unexpected push subscription object", e))?;
        subscription_to_json(&sub)
    }

    async fn unsubscribe(&mut self) -> anyhow::Result<()> {
        let sub = self
            .current_subscription()
            .await?
            .ok_or_else(|| anyhow!("no push subscription to release"))?;
        JsFuture::from(
            sub.unsubscribe()
                .map_err(|e| js_err("releasing push subscription", e))?,
        )
        .await
        .map_err(|e| js_err("releasing push subscription", e))?;
        Ok(())
    }
}

/// Backend endpoints for the subscription lifecycle.
pub struct WebPushServer;

#[async_trait(?Send)]
impl PushServer for WebPushServer {
    async fn vapid_public_key(&mut self) -> anyhow::Result<String> {
        let resp = api::vapid_public_key()
            .await
            .context("fetching vapid public key")?;
        Ok(resp.public_key)
    }

    async fn register(&mut self, subscription: &PushSubscriptionJson) -> anyhow::Result<()> {
        api::push_subscribe(&SubscribeRequest {
            subscription: subscription.clone(),
        })
        .await
        .context("registering push subscription")?;
        Ok(())
    }

    async fn revoke(&mut self, endpoint: &str) -> anyhow::Result<()> {
        api::push_unsubscribe(String::from(endpoint))
            .await
            .context("revoking push subscription")?;
        Ok(())
    }
}
