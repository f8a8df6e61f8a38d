//! HTTP calls against the backend. List fetchers degrade to an empty list
//! after logging, so views fall back to their empty state instead of an
//! error banner. Mutations return the structured error for inline display.

use courtside_client::api::{
    ApiError, Comment, CommentId, CommentableRef, Conference, Game, GameStatus, League,
    NewComment, NewsArticle, PlayerMatch, PlayerSearchResponse, PlayerSummary, StandingRow,
    SubscribeRequest, TeamFollowRequest, TopPlayersResponse, UnsubscribeRequest,
    VapidKeyResponse,
};

lazy_static::lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::new();
    // reqwest needs absolute urls, even for same-origin requests
    static ref ORIGIN: String = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
}

fn url(path: &str) -> String {
    format!("{}{}", *ORIGIN, path)
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

async fn get_json<R>(url: &str) -> Result<R, ApiError>
where
    R: for<'de> serde::Deserialize<'de>,
{
    let resp = CLIENT.get(url).send().await.map_err(transport)?;
    if !resp.status().is_success() {
        return Err(ApiError::UnexpectedStatus(resp.status().as_u16()));
    }
    resp.json().await.map_err(transport)
}

async fn check_status(resp: reqwest::Response) -> Result<(), ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_response(status.as_u16(), &body))
}

pub async fn create_comment(comment: &NewComment) -> Result<(), ApiError> {
    let resp = CLIENT
        .post(url("/comments"))
        .json(comment)
        .send()
        .await
        .map_err(transport)?;
    check_status(resp).await
}

pub async fn delete_comment(id: CommentId) -> Result<(), ApiError> {
    let resp = CLIENT
        .delete(url(&format!("/comments/{}", id.0)))
        .send()
        .await
        .map_err(transport)?;
    check_status(resp).await
}

/// Re-fetches the full root list for a commentable. Used after every comment
/// mutation; the caller keeps its previous snapshot when this fails.
pub async fn fetch_comments(target: &CommentableRef) -> Result<Vec<Comment>, ApiError> {
    get_json(&url(&format!(
        "/comments?commentable_type={}&commentable_id={}",
        target.kind.as_str(),
        target.id,
    )))
    .await
}

pub async fn fetch_games(status: GameStatus) -> Vec<Game> {
    match get_json(&url(&format!("/api/games/{}", status.as_path()))).await {
        Ok(games) => games,
        Err(e) => {
            tracing::error!("failed to fetch {} games: {e:?}", status.as_path());
            Vec::new()
        }
    }
}

pub async fn fetch_top_players(league: League, days: u32, limit: u32) -> Vec<PlayerSummary> {
    let url = url(&format!(
        "/api/players/top?league={}&days={}&limit={}",
        league.as_str(),
        days,
        limit,
    ));
    match get_json::<TopPlayersResponse>(&url).await {
        Ok(r) => r.into_players(),
        Err(e) => {
            tracing::error!("failed to fetch top players: {e:?}");
            Vec::new()
        }
    }
}

pub async fn search_players(q: &str) -> Vec<PlayerMatch> {
    let req = CLIENT.get(url("/api/players/search")).query(&[("q", q)]);
    let resp = async {
        let resp = req.send().await.map_err(transport)?;
        if !resp.status().is_success() {
            return Err(ApiError::UnexpectedStatus(resp.status().as_u16()));
        }
        resp.json::<PlayerSearchResponse>().await.map_err(transport)
    }
    .await;
    match resp {
        Ok(r) => r.results,
        Err(e) => {
            tracing::error!("failed to search players: {e:?}");
            Vec::new()
        }
    }
}

pub async fn fetch_news(league: League, limit: u32) -> Vec<NewsArticle> {
    let url = url(&format!(
        "/api/news-data?league={}&limit={}",
        league.as_str(),
        limit,
    ));
    match get_json(&url).await {
        Ok(articles) => articles,
        Err(e) => {
            tracing::error!("failed to fetch news: {e:?}");
            Vec::new()
        }
    }
}

pub async fn fetch_standings(league: League, conference: Option<Conference>) -> Vec<StandingRow> {
    let url = match conference {
        Some(c) => url(&format!(
            "/api/standings/{}?conference={}",
            league.as_str(),
            c.as_str(),
        )),
        None => url(&format!("/api/standings/{}", league.as_str())),
    };
    match get_json(&url).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("failed to fetch standings: {e:?}");
            Vec::new()
        }
    }
}

async fn post_team(path: &str, team_api_id: i64) -> Result<(), ApiError> {
    let resp = CLIENT
        .post(url(path))
        .json(&TeamFollowRequest { team_api_id })
        .send()
        .await
        .map_err(transport)?;
    check_status(resp).await
}

pub async fn follow_team(team_api_id: i64) -> Result<(), ApiError> {
    post_team("/teams/follow", team_api_id).await
}

pub async fn unfollow_team(team_api_id: i64) -> Result<(), ApiError> {
    post_team("/teams/unfollow", team_api_id).await
}

pub async fn toggle_team_notifications(team_api_id: i64) -> Result<(), ApiError> {
    post_team("/teams/notifications", team_api_id).await
}

pub async fn vapid_public_key() -> Result<VapidKeyResponse, ApiError> {
    get_json(&url("/push/vapid-public-key")).await
}

pub async fn push_subscribe(request: &SubscribeRequest) -> Result<(), ApiError> {
    let resp = CLIENT
        .post(url("/push/subscribe"))
        .json(request)
        .send()
        .await
        .map_err(transport)?;
    check_status(resp).await
}

pub async fn push_unsubscribe(endpoint: String) -> Result<(), ApiError> {
    let resp = CLIENT
        .post(url("/push/unsubscribe"))
        .json(&UnsubscribeRequest { endpoint })
        .send()
        .await
        .map_err(transport)?;
    check_status(resp).await
}
