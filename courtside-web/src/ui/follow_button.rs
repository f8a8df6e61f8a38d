use courtside_client::api::ApiError;
use yew::prelude::*;

use crate::api;

#[derive(Clone, PartialEq, Properties)]
pub struct FollowButtonProps {
    pub team_api_id: i64,
    #[prop_or(false)]
    pub initially_following: bool,
}

pub enum FollowButtonMsg {
    ToggleFollow,
    ToggleNotifications,
    FollowDone(Result<bool, ApiError>),
    NotificationsDone(Result<(), ApiError>),
}

pub struct FollowButton {
    following: bool,
    notifying: bool,
    busy: bool,
}

impl Component for FollowButton {
    type Message = FollowButtonMsg;
    type Properties = FollowButtonProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            following: ctx.props().initially_following,
            notifying: false,
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FollowButtonMsg::ToggleFollow => {
                if self.busy {
                    return false;
                }
                self.busy = true;
                let id = ctx.props().team_api_id;
                let now_following = !self.following;
                ctx.link().send_future(async move {
                    let res = match now_following {
                        true => api::follow_team(id).await,
                        false => api::unfollow_team(id).await,
                    };
                    FollowButtonMsg::FollowDone(res.map(|()| now_following))
                });
            }
            FollowButtonMsg::ToggleNotifications => {
                if self.busy {
                    return false;
                }
                self.busy = true;
                let id = ctx.props().team_api_id;
                ctx.link().send_future(async move {
                    FollowButtonMsg::NotificationsDone(api::toggle_team_notifications(id).await)
                });
            }
            FollowButtonMsg::FollowDone(res) => {
                self.busy = false;
                match res {
                    Ok(now_following) => {
                        self.following = now_following;
                        if !now_following {
                            self.notifying = false;
                        }
                    }
                    Err(e) => tracing::error!("failed to update team follow: {e:?}"),
                }
            }
            FollowButtonMsg::NotificationsDone(res) => {
                self.busy = false;
                match res {
                    Ok(()) => self.notifying = !self.notifying,
                    Err(e) => tracing::error!("failed to toggle team notifications: {e:?}"),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <span class="follow-controls">
                <button
                    type="button"
                    class={ classes!("btn", "btn-sm",
                        if self.following { "btn-secondary" } else { "btn-outline-secondary" }) }
                    disabled={ self.busy }
                    onclick={ ctx.link().callback(|_| FollowButtonMsg::ToggleFollow) }
                >
                    { if self.following { "Following" } else { "Follow" } }
                </button>
                { for self.following.then(|| html! {
                    <button
                        type="button"
                        class={ classes!("btn", "btn-sm", "ms-1", "bi-btn",
                            if self.notifying { "bi-bell-fill" } else { "bi-bell" }) }
                        title="Game notifications"
                        disabled={ self.busy }
                        onclick={ ctx.link().callback(|_| FollowButtonMsg::ToggleNotifications) }
                    >
                    </button>
                }) }
            </span>
        }
    }
}
