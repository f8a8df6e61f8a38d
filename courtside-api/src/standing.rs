#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conference {
    East,
    West,
}

impl Conference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Conference::East => "east",
            Conference::West => "west",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct StandingRow {
    pub team: String,
    /// Id of this team in the upstream stats provider, used by the follow
    /// endpoints.
    pub team_api_id: i64,
    pub conference: Conference,
    pub wins: u32,
    pub losses: u32,
}

impl StandingRow {
    pub fn win_pct(&self) -> f32 {
        let played = self.wins + self.losses;
        match played {
            0 => 0.0,
            _ => self.wins as f32 / played as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_pct_handles_unplayed_season() {
        let row = StandingRow {
            team: String::from("Example"),
            team_api_id: 1,
            conference: Conference::East,
            wins: 0,
            losses: 0,
        };
        assert_eq!(row.win_pct(), 0.0);
    }

    #[test]
    fn win_pct_is_wins_over_played() {
        let row = StandingRow {
            team: String::from("Example"),
            team_api_id: 2,
            conference: Conference::West,
            wins: 3,
            losses: 1,
        };
        assert_eq!(row.win_pct(), 0.75);
    }
}
