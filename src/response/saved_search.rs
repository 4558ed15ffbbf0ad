use super::twitter_date;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SavedSearch {
    pub id: u64,
    pub id_str: String,
    pub name: String,
    pub query: String,
    pub position: Option<String>,
    #[serde(with = "twitter_date")]
    pub created_at: Option<DateTime<Utc>>,
}
