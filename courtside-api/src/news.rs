use crate::Time;

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
    pub source: String,
    #[serde(default)]
    pub published_at: Option<Time>,
    #[serde(default)]
    pub image: Option<String>,
}
