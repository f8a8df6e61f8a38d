use courtside_client::api::{Comment, CommentableRef, UserId};
use courtside_client::comments;
use yew::prelude::*;

use crate::{api, ui};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentSectionProps {
    pub commentable: CommentableRef,
    /// Snapshot rendered until a fresh list arrives.
    #[prop_or_default]
    pub initial_comments: Vec<Comment>,
    #[prop_or_default]
    pub viewer: Option<UserId>,
}

pub enum CommentSectionMsg {
    Changed,
    Refreshed(Vec<Comment>),
    RefreshFailed,
}

pub struct CommentSection {
    /// Freshly fetched list; supersedes the initial prop when present.
    refreshed: Option<Vec<Comment>>,
}

impl CommentSection {
    fn refresh(&self, ctx: &Context<Self>) {
        let target = ctx.props().commentable;
        ctx.link().send_future(async move {
            match api::fetch_comments(&target).await {
                Ok(comments) => CommentSectionMsg::Refreshed(comments),
                Err(e) => {
                    tracing::error!("failed to refresh comments: {e:?}");
                    CommentSectionMsg::RefreshFailed
                }
            }
        });
    }
}

impl Component for CommentSection {
    type Message = CommentSectionMsg;
    type Properties = CommentSectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let this = Self { refreshed: None };
        this.refresh(ctx);
        this
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().commentable != old_props.commentable {
            self.refreshed = None;
            self.refresh(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentSectionMsg::Changed => {
                self.refresh(ctx);
                false
            }
            CommentSectionMsg::Refreshed(comments) => {
                self.refreshed = Some(comments);
                true
            }
            // keep whatever snapshot we were already showing
            CommentSectionMsg::RefreshFailed => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let comments = self
            .refreshed
            .as_ref()
            .unwrap_or(&ctx.props().initial_comments);
        let on_changed = ctx.link().callback(|_| CommentSectionMsg::Changed);
        html! {
            <section class="comment-section">
                <h2 class="fs-5">{ comments::count_label(comments.len()) }</h2>
                <ui::CommentForm
                    commentable={ ctx.props().commentable }
                    on_created={ on_changed.clone() }
                />
                { if comments.is_empty() { html! {
                    <p class="text-muted">{ "No comments yet. Be the first to share your take." }</p>
                } } else { html! {
                    <div class="comment-list mt-3">
                        { for comments.iter().map(|comment| html! {
                            <ui::CommentNode
                                comment={ comment.clone() }
                                commentable={ ctx.props().commentable }
                                viewer={ ctx.props().viewer }
                                on_changed={ on_changed.clone() }
                            />
                        }) }
                    </div>
                } } }
            </section>
        }
    }
}
