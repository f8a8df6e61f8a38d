#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TeamFollowRequest {
    pub team_api_id: i64,
}
