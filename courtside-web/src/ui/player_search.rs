use courtside_client::api::PlayerMatch;
use yew::prelude::*;

use crate::api;

#[derive(Clone, PartialEq, Properties)]
pub struct PlayerSearchProps {}

pub enum PlayerSearchMsg {
    QueryChanged(String),
    SearchClicked,
    Results(Vec<PlayerMatch>),
}

pub struct PlayerSearch {
    query: String,
    results: Vec<PlayerMatch>,
    searching: bool,
    searched: bool,
}

impl Component for PlayerSearch {
    type Message = PlayerSearchMsg;
    type Properties = PlayerSearchProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            searching: false,
            searched: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PlayerSearchMsg::QueryChanged(q) => self.query = q,
            PlayerSearchMsg::SearchClicked => {
                let q = String::from(self.query.trim());
                if self.searching || q.is_empty() {
                    return false;
                }
                self.searching = true;
                ctx.link().send_future(async move {
                    PlayerSearchMsg::Results(api::search_players(&q).await)
                });
            }
            PlayerSearchMsg::Results(results) => {
                self.searching = false;
                self.searched = true;
                self.results = results;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let empty_state = self.searched && self.results.is_empty();
        html! {
            <div class="player-search">
                <h2 class="fs-5">{ "Find a player" }</h2>
                <div class="input-group">
                    <input
                        type="search"
                        class="form-control"
                        placeholder="Player name"
                        value={ self.query.clone() }
                        onchange={ ctx.link().callback(|e: web_sys::Event| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            PlayerSearchMsg::QueryChanged(input.value())
                        }) }
                        onkeyup={ ctx.link().batch_callback(|e: web_sys::KeyboardEvent| {
                            (e.key() == "Enter").then(|| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                vec![
                                    PlayerSearchMsg::QueryChanged(input.value()),
                                    PlayerSearchMsg::SearchClicked,
                                ]
                            }).unwrap_or_default()
                        }) }
                    />
                    <button
                        type="button"
                        class="btn btn-outline-primary"
                        disabled={ self.searching }
                        onclick={ ctx.link().callback(|_| PlayerSearchMsg::SearchClicked) }
                    >
                        { "Search" }
                    </button>
                </div>
                { for empty_state.then(|| html! {
                    <p class="text-muted mt-2">{ "No players found" }</p>
                }) }
                <ul class="list-group mt-2">
                    { for self.results.iter().map(|p| html! {
                        <li class="list-group-item">
                            { &p.name }
                            { for p.team.iter().map(|t| html! {
                                <span class="text-muted">{ format!(" - {}", t) }</span>
                            }) }
                        </li>
                    }) }
                </ul>
            </div>
        }
    }
}
