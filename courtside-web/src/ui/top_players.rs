use courtside_client::api::{League, PlayerSummary};
use yew::prelude::*;

use crate::api;

#[derive(Clone, PartialEq, Properties)]
pub struct TopPlayersProps {
    pub league: League,
    #[prop_or(7)]
    pub days: u32,
    #[prop_or(10)]
    pub limit: u32,
}

pub enum TopPlayersMsg {
    Fetched(Vec<PlayerSummary>),
}

pub struct TopPlayers {
    players: Vec<PlayerSummary>,
}

impl TopPlayers {
    fn fetch(ctx: &Context<Self>) {
        let (league, days, limit) = (
            ctx.props().league,
            ctx.props().days,
            ctx.props().limit,
        );
        ctx.link().send_future(async move {
            TopPlayersMsg::Fetched(api::fetch_top_players(league, days, limit).await)
        });
    }
}

impl Component for TopPlayers {
    type Message = TopPlayersMsg;
    type Properties = TopPlayersProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::fetch(ctx);
        Self {
            players: Vec::new(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props() != old_props {
            Self::fetch(ctx);
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let TopPlayersMsg::Fetched(players) = msg;
        self.players = players;
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-players">
                <h2 class="fs-5">{ "Top performers" }</h2>
                { if self.players.is_empty() { html! {
                    <p class="text-muted">{ "No stats available" }</p>
                } } else { html! {
                    <ol class="list-group list-group-numbered">
                        { for self.players.iter().map(|p| html! {
                            <li class="list-group-item d-flex justify-content-between">
                                <span>{ format!("{} ({})", p.name, p.team) }</span>
                                <span class="text-muted">
                                    { format!("{:.1} pts / {:.1} reb / {:.1} ast", p.points, p.rebounds, p.assists) }
                                </span>
                            </li>
                        }) }
                    </ol>
                } } }
            </div>
        }
    }
}
