use courtside_client::api::{League, NewsArticle};
use yew::prelude::*;

use crate::api;

#[derive(Clone, PartialEq, Properties)]
pub struct NewsListProps {
    pub league: League,
    #[prop_or(12)]
    pub limit: u32,
}

pub enum NewsListMsg {
    Fetched(Vec<NewsArticle>),
}

pub struct NewsList {
    articles: Vec<NewsArticle>,
}

impl NewsList {
    fn fetch(ctx: &Context<Self>) {
        let (league, limit) = (ctx.props().league, ctx.props().limit);
        ctx.link()
            .send_future(
                async move { NewsListMsg::Fetched(api::fetch_news(league, limit).await) },
            );
    }
}

impl Component for NewsList {
    type Message = NewsListMsg;
    type Properties = NewsListProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::fetch(ctx);
        Self {
            articles: Vec::new(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props() != old_props {
            Self::fetch(ctx);
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let NewsListMsg::Fetched(articles) = msg;
        self.articles = articles;
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="news-list">
                <h2 class="fs-5">{ "Around the league" }</h2>
                { if self.articles.is_empty() { html! {
                    <p class="text-muted">{ "No news right now" }</p>
                } } else { html! {
                    <ul class="list-unstyled">
                        { for self.articles.iter().map(|a| html! {
                            <li class="mb-2">
                                <a href={ a.url.clone() } target="_blank" rel="noopener">
                                    { &a.title }
                                </a>
                                <div class="text-muted">
                                    { &a.source }
                                    { for a.published_at.iter().map(|t| html! {
                                        <span>{ format!(" - {}", t.format("%b %e")) }</span>
                                    }) }
                                </div>
                            </li>
                        }) }
                    </ul>
                } } }
            </div>
        }
    }
}
