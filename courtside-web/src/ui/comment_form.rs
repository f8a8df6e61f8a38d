use courtside_client::api::{ApiError, CommentId, CommentableRef, NewComment, ValidationErrors};
use courtside_client::comments;
use yew::prelude::*;

use crate::api;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormProps {
    pub commentable: CommentableRef,
    /// None for a top-level comment, the parent's id for a reply.
    #[prop_or_default]
    pub parent_id: Option<CommentId>,
    #[prop_or_default]
    pub on_created: Callback<()>,
    #[prop_or(AttrValue::Static("Join the conversation"))]
    pub placeholder: AttrValue,
    /// Rendering density only, behavior is identical.
    #[prop_or(false)]
    pub compact: bool,
}

pub enum CommentFormMsg {
    ContentChanged(String),
    SubmitClicked,
    SubmitSucceeded,
    SubmitFailed(ApiError),
}

pub struct CommentForm {
    content: String,
    submitting: bool,
    field_errors: ValidationErrors,
    generic_error: Option<String>,
}

impl CommentForm {
    fn can_submit(&self) -> bool {
        comments::submittable(&self.content, self.submitting)
    }
}

impl Component for CommentForm {
    type Message = CommentFormMsg;
    type Properties = CommentFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            content: String::new(),
            submitting: false,
            field_errors: ValidationErrors::new(),
            generic_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentFormMsg::ContentChanged(c) => self.content = c,
            CommentFormMsg::SubmitClicked => {
                if !self.can_submit() {
                    return false;
                }
                self.submitting = true;
                self.field_errors.clear();
                self.generic_error = None;
                let body = NewComment::on(
                    ctx.props().commentable,
                    ctx.props().parent_id,
                    String::from(self.content.trim()),
                );
                ctx.link().send_future(async move {
                    match api::create_comment(&body).await {
                        Ok(()) => CommentFormMsg::SubmitSucceeded,
                        Err(e) => CommentFormMsg::SubmitFailed(e),
                    }
                });
            }
            CommentFormMsg::SubmitSucceeded => {
                self.submitting = false;
                self.content.clear();
                ctx.props().on_created.emit(());
            }
            CommentFormMsg::SubmitFailed(e) => {
                // keep the text so the user can edit and resubmit
                self.submitting = false;
                tracing::error!("failed to submit comment: {e:?}");
                match e {
                    ApiError::Validation(errors) => self.field_errors = errors,
                    _ => {
                        self.generic_error =
                            Some(String::from("Could not post your comment. Please try again."))
                    }
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let rows = if ctx.props().compact { "2" } else { "3" };
        let content_errors = self
            .field_errors
            .get("content")
            .map(|msgs| msgs.clone())
            .unwrap_or_default();
        html! {
            <form class={ classes!("comment-form", ctx.props().compact.then(|| "comment-form-compact")) }>
                <textarea
                    class="form-control"
                    rows={ rows }
                    placeholder={ ctx.props().placeholder.clone() }
                    value={ self.content.clone() }
                    onchange={ ctx.link().callback(|e: web_sys::Event| {
                        let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                        CommentFormMsg::ContentChanged(input.value())
                    }) }
                >
                </textarea>
                { for content_errors.iter().map(|msg| html! {
                    <div class="invalid-feedback d-block">{ msg }</div>
                }) }
                { for self.generic_error.iter().map(|msg| html! {
                    <div class="text-danger">{ msg }</div>
                }) }
                <button
                    type="submit"
                    class="btn btn-primary btn-sm mt-2"
                    disabled={ !self.can_submit() }
                    onclick={ ctx.link().callback(|e: web_sys::MouseEvent| {
                        e.prevent_default();
                        CommentFormMsg::SubmitClicked
                    }) }
                >
                    { if self.submitting { "Posting..." } else { "Post" } }
                </button>
            </form>
        }
    }
}
