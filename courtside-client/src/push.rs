//! Lifecycle of the single browser push subscription.
//!
//! The browser side (service worker registration, Notification permission,
//! Push API) sits behind [`PushProvider`] and the HTTP side behind
//! [`PushServer`], so the state machine itself runs against fakes in tests.

use anyhow::Context;
use async_trait::async_trait;

use crate::api::PushSubscriptionJson;
use crate::vapid;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PushStatus {
    /// The runtime lacks the required browser capabilities. Terminal.
    Unsupported,
    Unknown,
    Subscribed,
    Unsubscribed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Permission {
    Granted,
    Denied,
    Dismissed,
}

/// Browser push capabilities. Not `Send`: the real implementation wraps
/// thread-bound browser APIs.
#[async_trait(?Send)]
pub trait PushProvider {
    fn is_supported(&self) -> bool;
    async fn request_permission(&mut self) -> anyhow::Result<Permission>;
    async fn register_worker(&mut self) -> anyhow::Result<()>;
    async fn existing_subscription(&mut self) -> anyhow::Result<Option<PushSubscriptionJson>>;
    async fn subscribe(
        &mut self,
        application_server_key: &[u8],
    ) -> anyhow::Result<PushSubscriptionJson>;
    async fn unsubscribe(&mut self) -> anyhow::Result<()>;
}

/// Server endpoints backing the subscription lifecycle.
#[async_trait(?Send)]
pub trait PushServer {
    async fn vapid_public_key(&mut self) -> anyhow::Result<String>;
    async fn register(&mut self, subscription: &PushSubscriptionJson) -> anyhow::Result<()>;
    async fn revoke(&mut self, endpoint: &str) -> anyhow::Result<()>;
}

/// Sole client-side owner and mutator of the browser push subscription.
pub struct PushManager<P, S> {
    provider: P,
    server: S,
    status: PushStatus,
    endpoint: Option<String>,
    loading: bool,
}

impl<P: PushProvider, S: PushServer> PushManager<P, S> {
    pub fn new(provider: P, server: S) -> PushManager<P, S> {
        PushManager {
            provider,
            server,
            status: PushStatus::Unknown,
            endpoint: None,
            loading: false,
        }
    }

    pub fn status(&self) -> PushStatus {
        self.status
    }

    /// True while a subscribe or unsubscribe is in flight. The UI disables
    /// both triggers while this holds.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Capability check, then a probe for an existing subscription.
    pub async fn init(&mut self) -> PushStatus {
        if !self.provider.is_supported() {
            self.status = PushStatus::Unsupported;
            return self.status;
        }
        self.status = match self.provider.existing_subscription().await {
            Ok(Some(sub)) => {
                self.endpoint = Some(sub.endpoint);
                PushStatus::Subscribed
            }
            Ok(None) => PushStatus::Unsubscribed,
            Err(e) => {
                tracing::error!("failed to query existing push subscription: {e:?}");
                PushStatus::Unsubscribed
            }
        };
        self.status
    }

    /// Runs the full subscription flow. `Ok(false)` means the operation did
    /// not complete without being an error: unsupported runtime, an
    /// operation already in flight, or the user declining the permission
    /// prompt. Any failure after that point propagates and leaves the
    /// status at `Unsubscribed`.
    pub async fn subscribe(&mut self) -> anyhow::Result<bool> {
        // re-checked here so a subscribe without a prior init stays inert
        if !self.provider.is_supported() {
            self.status = PushStatus::Unsupported;
            return Ok(false);
        }
        if self.loading {
            return Ok(false);
        }
        self.loading = true;
        let res = self.run_subscribe().await;
        self.loading = false;
        res
    }

    async fn run_subscribe(&mut self) -> anyhow::Result<bool> {
        match self
            .provider
            .request_permission()
            .await
            .context("requesting notification permission")?
        {
            Permission::Granted => (),
            Permission::Denied | Permission::Dismissed => {
                tracing::warn!("notification permission was not granted");
                return Ok(false);
            }
        }
        self.provider
            .register_worker()
            .await
            .context("registering service worker")?;
        let key = self
            .server
            .vapid_public_key()
            .await
            .context("fetching vapid public key")?;
        let key = vapid::decode_public_key(&key)?;
        let sub = self
            .provider
            .subscribe(&key)
            .await
            .context("subscribing with the browser push service")?;
        self.server
            .register(&sub)
            .await
            .context("sending subscription to server")?;
        self.endpoint = Some(sub.endpoint);
        self.status = PushStatus::Subscribed;
        Ok(true)
    }

    /// Revokes server-side by endpoint, then releases the browser
    /// subscription. Failure at any step leaves the status unchanged; there
    /// is no automatic retry.
    pub async fn unsubscribe(&mut self) -> anyhow::Result<()> {
        if self.loading {
            return Ok(());
        }
        let endpoint = match self.endpoint.clone() {
            Some(e) => e,
            None => return Ok(()),
        };
        self.loading = true;
        let res = self.run_unsubscribe(&endpoint).await;
        self.loading = false;
        res
    }

    async fn run_unsubscribe(&mut self, endpoint: &str) -> anyhow::Result<()> {
        self.server
            .revoke(endpoint)
            .await
            .context("revoking subscription on server")?;
        self.provider
            .unsubscribe()
            .await
            .context("releasing browser subscription")?;
        self.endpoint = None;
        self.status = PushStatus::Unsubscribed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PushKeys;
    use futures::executor::block_on;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Clone, Debug, Eq, PartialEq)]
    enum Call {
        Permission,
        RegisterWorker,
        VapidKey,
        BrowserSubscribe(Vec<u8>),
        ServerRegister(String),
        ServerRevoke(String),
        BrowserUnsubscribe,
    }

    type CallLog = Rc<RefCell<Vec<Call>>>;

    fn subscription(endpoint: &str) -> PushSubscriptionJson {
        PushSubscriptionJson {
            endpoint: String::from(endpoint),
            keys: PushKeys {
                p256dh: String::from("p256dh-material"),
                auth: String::from("auth-material"),
            },
        }
    }

    struct FakeProvider {
        supported: bool,
        permission: Permission,
        existing: Option<PushSubscriptionJson>,
        calls: CallLog,
    }

    #[async_trait(?Send)]
    impl PushProvider for FakeProvider {
        fn is_supported(&self) -> bool {
            self.supported
        }

        async fn request_permission(&mut self) -> anyhow::Result<Permission> {
            self.calls.borrow_mut().push(Call::Permission);
            Ok(self.permission)
        }

        async fn register_worker(&mut self) -> anyhow::Result<()> {
            self.calls.borrow_mut().push(Call::RegisterWorker);
            Ok(())
        }

        async fn existing_subscription(&mut self) -> anyhow::Result<Option<PushSubscriptionJson>> {
            Ok(self.existing.clone())
        }

        async fn subscribe(&mut self, key: &[u8]) -> anyhow::Result<PushSubscriptionJson> {
            self.calls
                .borrow_mut()
                .push(Call::BrowserSubscribe(key.to_vec()));
            Ok(subscription("https://push.example/new"))
        }

        async fn unsubscribe(&mut self) -> anyhow::Result<()> {
            self.calls.borrow_mut().push(Call::BrowserUnsubscribe);
            Ok(())
        }
    }

    struct FakeServer {
        register_fails: bool,
        revoke_fails: bool,
        calls: CallLog,
    }

    #[async_trait(?Send)]
    impl PushServer for FakeServer {
        async fn vapid_public_key(&mut self) -> anyhow::Result<String> {
            self.calls.borrow_mut().push(Call::VapidKey);
            Ok(String::from("AB-_"))
        }

        async fn register(&mut self, sub: &PushSubscriptionJson) -> anyhow::Result<()> {
            self.calls
                .borrow_mut()
                .push(Call::ServerRegister(sub.endpoint.clone()));
            match self.register_fails {
                true => Err(anyhow::anyhow!("server said no")),
                false => Ok(()),
            }
        }

        async fn revoke(&mut self, endpoint: &str) -> anyhow::Result<()> {
            self.calls
                .borrow_mut()
                .push(Call::ServerRevoke(String::from(endpoint)));
            match self.revoke_fails {
                true => Err(anyhow::anyhow!("server said no")),
                false => Ok(()),
            }
        }
    }

    fn manager(
        supported: bool,
        permission: Permission,
        existing: Option<PushSubscriptionJson>,
    ) -> (PushManager<FakeProvider, FakeServer>, CallLog) {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
        let provider = FakeProvider {
            supported,
            permission,
            existing,
            calls: calls.clone(),
        };
        let server = FakeServer {
            register_fails: false,
            revoke_fails: false,
            calls: calls.clone(),
        };
        (PushManager::new(provider, server), calls)
    }

    #[test]
    fn unsupported_runtime_is_terminal_and_makes_no_calls() {
        let (mut mgr, calls) = manager(false, Permission::Granted, None);
        assert_eq!(block_on(mgr.init()), PushStatus::Unsupported);
        assert!(!block_on(mgr.subscribe()).expect("subscribe on unsupported runtime"));
        assert_eq!(mgr.status(), PushStatus::Unsupported);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn subscribe_without_init_stays_inert_on_unsupported_runtime() {
        let (mut mgr, calls) = manager(false, Permission::Granted, None);
        assert!(!block_on(mgr.subscribe()).expect("subscribing"));
        assert_eq!(mgr.status(), PushStatus::Unsupported);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn init_finds_existing_subscription() {
        let (mut mgr, _) = manager(
            true,
            Permission::Granted,
            Some(subscription("https://push.example/existing")),
        );
        assert_eq!(block_on(mgr.init()), PushStatus::Subscribed);
    }

    #[test]
    fn subscribe_happy_path_calls_each_step_once_in_order() {
        let (mut mgr, calls) = manager(true, Permission::Granted, None);
        assert_eq!(block_on(mgr.init()), PushStatus::Unsubscribed);
        assert!(block_on(mgr.subscribe()).expect("subscribing"));
        assert_eq!(mgr.status(), PushStatus::Subscribed);
        assert!(!mgr.is_loading());
        assert_eq!(
            *calls.borrow(),
            vec![
                Call::Permission,
                Call::RegisterWorker,
                Call::VapidKey,
                // "AB-_" decoded as base64url
                Call::BrowserSubscribe(vec![0x00, 0x1f, 0xbf]),
                Call::ServerRegister(String::from("https://push.example/new")),
            ],
        );
    }

    #[test]
    fn denied_permission_aborts_before_any_network_call() {
        let (mut mgr, calls) = manager(true, Permission::Denied, None);
        block_on(mgr.init());
        assert!(!block_on(mgr.subscribe()).expect("subscribing"));
        assert_eq!(mgr.status(), PushStatus::Unsubscribed);
        assert_eq!(*calls.borrow(), vec![Call::Permission]);
    }

    #[test]
    fn dismissed_permission_behaves_like_denied() {
        let (mut mgr, calls) = manager(true, Permission::Dismissed, None);
        block_on(mgr.init());
        assert!(!block_on(mgr.subscribe()).expect("subscribing"));
        assert_eq!(*calls.borrow(), vec![Call::Permission]);
    }

    #[test]
    fn server_register_failure_leaves_state_unsubscribed() {
        let (mut mgr, _) = manager(true, Permission::Granted, None);
        mgr.server.register_fails = true;
        block_on(mgr.init());
        assert!(block_on(mgr.subscribe()).is_err());
        assert_eq!(mgr.status(), PushStatus::Unsubscribed);
        assert!(!mgr.is_loading());
    }

    #[test]
    fn unsubscribe_revokes_then_releases_then_clears() {
        let (mut mgr, calls) = manager(
            true,
            Permission::Granted,
            Some(subscription("https://example/abc")),
        );
        assert_eq!(block_on(mgr.init()), PushStatus::Subscribed);
        block_on(mgr.unsubscribe()).expect("unsubscribing");
        assert_eq!(mgr.status(), PushStatus::Unsubscribed);
        assert_eq!(
            *calls.borrow(),
            vec![
                Call::ServerRevoke(String::from("https://example/abc")),
                Call::BrowserUnsubscribe,
            ],
        );
    }

    #[test]
    fn failed_revoke_leaves_subscription_in_place() {
        let (mut mgr, calls) = manager(
            true,
            Permission::Granted,
            Some(subscription("https://example/abc")),
        );
        mgr.server.revoke_fails = true;
        block_on(mgr.init());
        assert!(block_on(mgr.unsubscribe()).is_err());
        assert_eq!(mgr.status(), PushStatus::Subscribed);
        // the browser primitive must not have been called
        assert!(!calls.borrow().contains(&Call::BrowserUnsubscribe));
    }
}
