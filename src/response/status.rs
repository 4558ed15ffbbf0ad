use super::{twitter_date, Entities, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tweet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Status {
    #[serde(with = "twitter_date")]
    pub created_at: Option<DateTime<Utc>>,
    pub id: u64,
    pub id_str: String,
    pub text: String,
    pub full_text: Option<String>,
    pub display_text_range: Option<Vec<u32>>,
    pub source: String,
    pub truncated: bool,
    pub in_reply_to_status_id: Option<u64>,
    pub in_reply_to_user_id: Option<u64>,
    pub in_reply_to_screen_name: Option<String>,
    pub user: Option<Box<User>>,
    pub coordinates: Option<Coordinates>,
    pub place: Option<Place>,
    pub quoted_status_id: Option<u64>,
    pub quoted_status: Option<Box<Status>>,
    pub retweeted_status: Option<Box<Status>>,
    pub retweet_count: u64,
    pub favorite_count: Option<u64>,
    pub entities: Option<Entities>,
    pub extended_entities: Option<Entities>,
    pub favorited: Option<bool>,
    pub retweeted: bool,
    pub possibly_sensitive: Option<bool>,
    pub lang: Option<String>,
    pub withheld_in_countries: Vec<String>,
}

impl Status {
    /// The untruncated text when the API sent it (`tweet_mode=extended`).
    pub fn full_text(&self) -> &str {
        self.full_text.as_deref().unwrap_or(&self.text)
    }

    pub fn is_retweet(&self) -> bool {
        self.retweeted_status.is_some()
    }
}

/// A GeoJSON point; note the `[longitude, latitude]` order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Coordinates {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

impl Coordinates {
    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.get(0).copied()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.get(1).copied()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Place {
    pub id: String,
    pub url: String,
    pub place_type: String,
    pub name: String,
    pub full_name: String,
    pub country_code: String,
    pub country: String,
    pub bounding_box: Option<BoundingBox>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct BoundingBox {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<Vec<Vec<f64>>>,
}
