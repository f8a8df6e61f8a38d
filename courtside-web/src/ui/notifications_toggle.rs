use std::{cell::RefCell, rc::Rc};

use courtside_client::{PushManager, PushStatus};
use yew::prelude::*;

use crate::push::{BrowserPush, WebPushServer};

type Manager = Rc<RefCell<PushManager<BrowserPush, WebPushServer>>>;

#[derive(Clone, PartialEq, Properties)]
pub struct NotificationsToggleProps {}

pub enum NotificationsToggleMsg {
    Initialized(PushStatus),
    Clicked,
    SubscribeDone(anyhow::Result<bool>),
    UnsubscribeDone(anyhow::Result<()>),
}

/// The bell in the navbar. Owns the one push subscription of this browser.
pub struct NotificationsToggle {
    manager: Manager,
    status: PushStatus,
    busy: bool,
}

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

impl Component for NotificationsToggle {
    type Message = NotificationsToggleMsg;
    type Properties = NotificationsToggleProps;

    fn create(ctx: &Context<Self>) -> Self {
        let manager: Manager = Rc::new(RefCell::new(PushManager::new(
            BrowserPush::new(),
            WebPushServer,
        )));
        {
            let manager = manager.clone();
            ctx.link().send_future(async move {
                let status = manager.borrow_mut().init().await;
                NotificationsToggleMsg::Initialized(status)
            });
        }
        Self {
            manager,
            status: PushStatus::Unknown,
            busy: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            NotificationsToggleMsg::Initialized(status) => {
                self.status = status;
                self.busy = false;
            }
            NotificationsToggleMsg::Clicked => {
                if self.busy {
                    return false;
                }
                let manager = self.manager.clone();
                match self.status {
                    PushStatus::Unsubscribed => {
                        self.busy = true;
                        ctx.link().send_future(async move {
                            let res = manager.borrow_mut().subscribe().await;
                            NotificationsToggleMsg::SubscribeDone(res)
                        });
                    }
                    PushStatus::Subscribed => {
                        self.busy = true;
                        ctx.link().send_future(async move {
                            let res = manager.borrow_mut().unsubscribe().await;
                            NotificationsToggleMsg::UnsubscribeDone(res)
                        });
                    }
                    PushStatus::Unsupported | PushStatus::Unknown => return false,
                }
            }
            NotificationsToggleMsg::SubscribeDone(res) => {
                self.busy = false;
                match res {
                    Ok(true) => self.status = PushStatus::Subscribed,
                    Ok(false) => alert(
                        "Notifications stay off until you allow them in your browser.",
                    ),
                    Err(e) => {
                        tracing::error!("failed to enable notifications: {e:?}");
                        alert("Could not enable notifications.");
                    }
                }
            }
            NotificationsToggleMsg::UnsubscribeDone(res) => {
                self.busy = false;
                match res {
                    Ok(()) => self.status = PushStatus::Unsubscribed,
                    Err(e) => {
                        tracing::error!("failed to disable notifications: {e:?}");
                        alert("Could not disable notifications.");
                    }
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.status == PushStatus::Unsupported {
            return html! {};
        }
        let label = match self.status {
            PushStatus::Subscribed => "Disable notifications",
            _ => "Enable notifications",
        };
        html! {
            <button
                type="button"
                class={ classes!("btn", "btn-light", "btn-circle", "bi-btn",
                    if self.status == PushStatus::Subscribed { "bi-bell-fill" } else { "bi-bell" }) }
                title={ label }
                aria-label={ label }
                disabled={ self.busy || self.status == PushStatus::Unknown }
                onclick={ ctx.link().callback(|_| NotificationsToggleMsg::Clicked) }
            >
            </button>
        }
    }
}
