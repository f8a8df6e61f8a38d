use courtside_client::api::{Comment, CommentableRef, UserId};
use courtside_client::comments;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{api, ui};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentNodeProps {
    pub comment: Comment,
    #[prop_or(0)]
    pub depth: usize,
    /// Root association of the whole thread, shared by every node in it.
    pub commentable: CommentableRef,
    #[prop_or_default]
    pub viewer: Option<UserId>,
    /// Emitted after any mutation below this node; the section re-fetches.
    pub on_changed: Callback<()>,
}

#[function_component(CommentNode)]
pub fn comment_node(p: &CommentNodeProps) -> Html {
    let replies_expanded = use_state(|| true);
    let reply_open = use_state(|| false);

    let is_author = comments::is_author(p.viewer, &p.comment);

    let on_delete = {
        let id = p.comment.id;
        let on_changed = p.on_changed.clone();
        Callback::from(move |_| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this comment?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let on_changed = on_changed.clone();
            spawn_local(async move {
                match api::delete_comment(id).await {
                    Ok(()) => on_changed.emit(()),
                    Err(e) => {
                        tracing::error!("failed to delete comment: {e:?}");
                        if let Some(w) = web_sys::window() {
                            let _ = w.alert_with_message("Could not delete this comment.");
                        }
                    }
                }
            });
        })
    };

    let toggle_reply = {
        let reply_open = reply_open.clone();
        Callback::from(move |_| reply_open.set(!*reply_open))
    };

    let on_reply_created = {
        let reply_open = reply_open.clone();
        let on_changed = p.on_changed.clone();
        Callback::from(move |_| {
            reply_open.set(false);
            on_changed.emit(());
        })
    };

    let reply_count = p.comment.replies.len();
    let toggle_replies = {
        let replies_expanded = replies_expanded.clone();
        Callback::from(move |_| replies_expanded.set(!*replies_expanded))
    };

    html! {
        <div
            class="comment d-flex flex-column mb-2"
            style={ format!("margin-left: {}px", p.depth * 24) }
        >
            <div class="comment-header d-flex align-items-center">
                <span class="fw-bold me-2">{ &p.comment.author.name }</span>
                <span class="text-muted me-auto">
                    { p.comment.created_at.format("%b %e, %Y %H:%M").to_string() }
                </span>
                { for is_author.then(|| html! {
                    <button
                        type="button"
                        class="btn btn-link btn-sm text-danger"
                        onclick={ on_delete }
                    >
                        { "Delete" }
                    </button>
                }) }
            </div>
            <div class="comment-body">{ &p.comment.content }</div>
            <div class="comment-actions">
                <button type="button" class="btn btn-link btn-sm" onclick={ toggle_reply }>
                    { if *reply_open { "Cancel" } else { "Reply" } }
                </button>
                { for (reply_count > 0).then(|| html! {
                    <button type="button" class="btn btn-link btn-sm" onclick={ toggle_replies }>
                        { match *replies_expanded {
                            true => format!("Hide replies ({})", reply_count),
                            false => format!("Show replies ({})", reply_count),
                        } }
                    </button>
                }) }
            </div>
            { for reply_open.then(|| html! {
                <ui::CommentForm
                    commentable={ p.commentable }
                    parent_id={ Some(p.comment.id) }
                    placeholder="Write a reply"
                    compact=true
                    on_created={ on_reply_created }
                />
            }) }
            { for (*replies_expanded).then(|| html! {
                <div class="comment-replies">
                    { for p.comment.replies.iter().map(|reply| html! {
                        <CommentNode
                            comment={ reply.clone() }
                            depth={ p.depth + 1 }
                            commentable={ p.commentable }
                            viewer={ p.viewer }
                            on_changed={ p.on_changed.clone() }
                        />
                    }) }
                </div>
            }) }
        </div>
    }
}
