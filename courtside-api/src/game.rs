use crate::Time;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GameId(pub i64);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    Nba,
    Wnba,
}

impl League {
    pub fn as_str(&self) -> &'static str {
        match self {
            League::Nba => "nba",
            League::Wnba => "wnba",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Live,
    Upcoming,
    Finished,
}

impl GameStatus {
    /// Path segment of the games endpoint serving this bucket.
    pub fn as_path(&self) -> &'static str {
        match self {
            GameStatus::Live => "live",
            GameStatus::Upcoming => "upcoming",
            GameStatus::Finished => "finished",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GameTeam {
    pub name: String,
    pub abbreviation: String,
    /// None until the game has started.
    pub score: Option<u32>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Game {
    pub id: GameId,
    pub league: League,
    pub status: GameStatus,
    pub home: GameTeam,
    pub away: GameTeam,
    pub starts_at: Time,
    /// Display string for the current period and clock, live games only.
    #[serde(default)]
    pub period: Option<String>,
}
