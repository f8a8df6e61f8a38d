use std::time::Duration;

use courtside_client::api::{Game, GameStatus};
use futures::{channel::oneshot, pin_mut, select, FutureExt};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;

/// Live games are re-fetched on this interval; each tick is independent of
/// whether the previous one completed.
const LIVE_REFRESH_SECS: u64 = 30;

#[derive(Clone, PartialEq, Properties)]
pub struct DashboardProps {
    pub on_select: Callback<Game>,
}

pub enum DashboardMsg {
    Fetched(GameStatus, Vec<Game>),
}

pub struct Dashboard {
    live: Vec<Game>,
    upcoming: Vec<Game>,
    finished: Vec<Game>,
    poll_canceller: oneshot::Receiver<()>,
}

impl Component for Dashboard {
    type Message = DashboardMsg;
    type Properties = DashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (cancel_sender, poll_canceller) = oneshot::channel();
        spawn_local(poll_live_games(ctx.link().clone(), cancel_sender));
        for status in [GameStatus::Upcoming, GameStatus::Finished] {
            ctx.link().send_future(async move {
                DashboardMsg::Fetched(status, api::fetch_games(status).await)
            });
        }
        Dashboard {
            live: Vec::new(),
            upcoming: Vec::new(),
            finished: Vec::new(),
            poll_canceller,
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.poll_canceller.close();
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DashboardMsg::Fetched(GameStatus::Live, games) => self.live = games,
            DashboardMsg::Fetched(GameStatus::Upcoming, games) => self.upcoming = games,
            DashboardMsg::Fetched(GameStatus::Finished, games) => self.finished = games,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="row dashboard">
                { column("Live", &self.live, "No games in progress", &ctx.props().on_select) }
                { column("Upcoming", &self.upcoming, "No upcoming games", &ctx.props().on_select) }
                { column("Finished", &self.finished, "No finished games", &ctx.props().on_select) }
            </div>
        }
    }
}

fn column(title: &str, games: &[Game], empty: &str, on_select: &Callback<Game>) -> Html {
    html! {
        <div class="col-md-4">
            <h2 class="fs-5">{ title }</h2>
            { if games.is_empty() { html! {
                <p class="text-muted">{ empty }</p>
            } } else { html! {
                <ul class="list-group">
                    { for games.iter().map(|g| game_card(g, on_select)) }
                </ul>
            } } }
        </div>
    }
}

fn game_card(game: &Game, on_select: &Callback<Game>) -> Html {
    let score = |s: Option<u32>| s.map(|s| s.to_string()).unwrap_or_else(|| String::from("-"));
    let onclick = {
        let game = game.clone();
        on_select.reform(move |_| game.clone())
    };
    html! {
        <li class="list-group-item game-card" { onclick }>
            <div class="d-flex justify-content-between">
                <span>{ &game.away.abbreviation }</span>
                <span>{ score(game.away.score) }</span>
            </div>
            <div class="d-flex justify-content-between">
                <span>{ &game.home.abbreviation }</span>
                <span>{ score(game.home.score) }</span>
            </div>
            <div class="text-muted">
                { match (&game.status, &game.period) {
                    (GameStatus::Live, Some(period)) => period.clone(),
                    (GameStatus::Live, None) => String::from("Live"),
                    (GameStatus::Upcoming, _) =>
                        game.starts_at.format("%b %e, %H:%M").to_string(),
                    (GameStatus::Finished, _) => String::from("Final"),
                } }
            </div>
        </li>
    }
}

async fn sleep_for(d: Duration) {
    if wasm_timer::Delay::new(d).await.is_err() {
        tracing::warn!("timer failed, stopping live game polling");
        futures::future::pending::<()>().await;
    }
}

async fn poll_live_games(scope: yew::html::Scope<Dashboard>, mut cancel: oneshot::Sender<()>) {
    let mut cancellation = cancel.cancellation().fuse();
    loop {
        // detached so a stalled fetch cannot hold back the next tick
        let scope = scope.clone();
        spawn_local(async move {
            let games = api::fetch_games(GameStatus::Live).await;
            scope.send_message(DashboardMsg::Fetched(GameStatus::Live, games));
        });
        let delay = sleep_for(Duration::from_secs(LIVE_REFRESH_SECS)).fuse();
        pin_mut!(delay);
        select! {
            _ = cancellation => return,
            _ = delay => (),
        }
    }
}
