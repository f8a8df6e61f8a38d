#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PlayerSummary {
    pub id: i64,
    pub name: String,
    pub team: String,
    pub games_played: u32,
    pub points: f32,
    pub rebounds: f32,
    pub assists: f32,
}

/// The top-players endpoint answers either a bare array or an object with a
/// `response` key, depending on whether the upstream stats provider answer
/// was passed through verbatim.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum TopPlayersResponse {
    Bare(Vec<PlayerSummary>),
    Wrapped { response: Vec<PlayerSummary> },
}

impl TopPlayersResponse {
    pub fn into_players(self) -> Vec<PlayerSummary> {
        match self {
            TopPlayersResponse::Bare(p) => p,
            TopPlayersResponse::Wrapped { response } => response,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PlayerMatch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub team: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PlayerSearchResponse {
    pub results: Vec<PlayerMatch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_json() -> serde_json::Value {
        serde_json::json!({
            "id": 23,
            "name": "Example Player",
            "team": "EXA",
            "games_played": 10,
            "points": 27.5,
            "rebounds": 8.1,
            "assists": 6.0,
        })
    }

    #[test]
    fn accepts_bare_array() {
        let parsed: TopPlayersResponse =
            serde_json::from_value(serde_json::json!([summary_json()])).expect("bare array");
        assert_eq!(parsed.into_players().len(), 1);
    }

    #[test]
    fn accepts_response_envelope() {
        let parsed: TopPlayersResponse =
            serde_json::from_value(serde_json::json!({ "response": [summary_json()] }))
                .expect("wrapped array");
        assert_eq!(parsed.into_players()[0].name, "Example Player");
    }
}
