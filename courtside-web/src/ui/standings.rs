use courtside_client::api::{Conference, League, StandingRow};
use yew::prelude::*;

use crate::{api, ui};

#[derive(Clone, PartialEq, Properties)]
pub struct StandingsProps {
    pub league: League,
}

pub enum StandingsMsg {
    SetConference(Conference),
    Fetched(Vec<StandingRow>),
}

pub struct Standings {
    conference: Conference,
    rows: Vec<StandingRow>,
}

impl Standings {
    fn fetch(&self, ctx: &Context<Self>) {
        let league = ctx.props().league;
        let conference = self.conference;
        ctx.link().send_future(async move {
            StandingsMsg::Fetched(api::fetch_standings(league, Some(conference)).await)
        });
    }
}

impl Component for Standings {
    type Message = StandingsMsg;
    type Properties = StandingsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let this = Self {
            conference: Conference::East,
            rows: Vec::new(),
        };
        this.fetch(ctx);
        this
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().league != old_props.league {
            self.rows.clear();
            self.fetch(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            StandingsMsg::SetConference(c) => {
                if self.conference != c {
                    self.conference = c;
                    self.fetch(ctx);
                }
            }
            StandingsMsg::Fetched(rows) => self.rows = rows,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let tab = |c: Conference, label: &str| {
            let active = (self.conference == c).then(|| "active");
            html! {
                <button
                    type="button"
                    class={ classes!("nav-link", active) }
                    onclick={ ctx.link().callback(move |_| StandingsMsg::SetConference(c)) }
                >
                    { label }
                </button>
            }
        };
        html! {
            <div class="standings">
                <h2 class="fs-5">{ "Standings" }</h2>
                <nav class="nav nav-tabs">
                    { tab(Conference::East, "East") }
                    { tab(Conference::West, "West") }
                </nav>
                { if self.rows.is_empty() { html! {
                    <p class="text-muted">{ "No standings available" }</p>
                } } else { html! {
                    <table class="table table-sm">
                        <thead>
                            <tr>
                                <th>{ "Team" }</th>
                                <th>{ "W" }</th>
                                <th>{ "L" }</th>
                                <th>{ "Pct" }</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for self.rows.iter().map(|row| html! {
                                <tr>
                                    <td>{ &row.team }</td>
                                    <td>{ row.wins }</td>
                                    <td>{ row.losses }</td>
                                    <td>{ format!("{:.3}", row.win_pct()) }</td>
                                    <td><ui::FollowButton team_api_id={ row.team_api_id } /></td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                } } }
            </div>
        }
    }
}
