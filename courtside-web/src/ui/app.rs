use courtside_client::api::{Author, CommentableKind, CommentableRef, Game, League};
use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;

use crate::ui;

/// Written by the login flow of the host site; absent for anonymous readers.
const KEY_VIEWER: &str = "viewer";

pub enum AppMsg {
    SetLeague(League),
    SelectGame(Game),
}

pub struct App {
    viewer: Option<Author>,
    league: League,
    selected_game: Option<Game>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            viewer: LocalStorage::get(KEY_VIEWER).ok(),
            league: League::Nba,
            selected_game: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::SetLeague(league) => {
                self.league = league;
                self.selected_game = None;
            }
            AppMsg::SelectGame(game) => self.selected_game = Some(game),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let league_tab = |league: League, label: &str| {
            let active = (self.league == league).then(|| "active");
            html! {
                <button
                    type="button"
                    class={ classes!("nav-link", active) }
                    onclick={ ctx.link().callback(move |_| AppMsg::SetLeague(league)) }
                >
                    { label }
                </button>
            }
        };
        let viewer_id = self.viewer.as_ref().map(|v| v.id);
        html! {
            <div class="container-fluid">
                <header class="d-flex align-items-center py-2">
                    <h1 class="fs-4 me-auto">{ "Courtside" }</h1>
                    <nav class="nav nav-pills me-3">
                        { league_tab(League::Nba, "NBA") }
                        { league_tab(League::Wnba, "WNBA") }
                    </nav>
                    <ui::NotificationsToggle />
                </header>
                <main class="row">
                    <div class="col-lg-8">
                        <ui::Dashboard on_select={ ctx.link().callback(AppMsg::SelectGame) } />
                        { for self.selected_game.iter().map(|game| html! {
                            <div class="mt-4">
                                <h2 class="fs-5">
                                    { format!("{} @ {}", game.away.name, game.home.name) }
                                </h2>
                                <ui::CommentSection
                                    commentable={ CommentableRef {
                                        kind: CommentableKind::Game,
                                        id: game.id.0,
                                    } }
                                    viewer={ viewer_id }
                                />
                            </div>
                        }) }
                    </div>
                    <aside class="col-lg-4">
                        <ui::TopPlayers league={ self.league } />
                        <ui::PlayerSearch />
                        <ui::Standings league={ self.league } />
                        <ui::NewsList league={ self.league } />
                    </aside>
                </main>
            </div>
        }
    }
}
