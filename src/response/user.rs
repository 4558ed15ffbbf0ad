use super::{twitter_date, Status, UrlEntity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub id_str: String,
    pub name: String,
    pub screen_name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub entities: Option<UserEntities>,
    pub protected: bool,
    pub verified: bool,
    pub followers_count: u64,
    pub friends_count: u64,
    pub listed_count: u64,
    pub favourites_count: u64,
    pub statuses_count: u64,
    #[serde(with = "twitter_date")]
    pub created_at: Option<DateTime<Utc>>,
    pub utc_offset: Option<i32>,
    pub time_zone: Option<String>,
    pub geo_enabled: bool,
    pub lang: Option<String>,
    pub contributors_enabled: bool,
    pub is_translator: bool,
    pub profile_background_color: Option<String>,
    pub profile_background_image_url: Option<String>,
    pub profile_background_image_url_https: Option<String>,
    pub profile_background_tile: Option<bool>,
    pub profile_banner_url: Option<String>,
    pub profile_image_url: Option<String>,
    pub profile_image_url_https: Option<String>,
    pub profile_link_color: Option<String>,
    pub profile_sidebar_border_color: Option<String>,
    pub profile_sidebar_fill_color: Option<String>,
    pub profile_text_color: Option<String>,
    pub profile_use_background_image: Option<bool>,
    pub default_profile: bool,
    pub default_profile_image: bool,
    pub show_all_inline_media: Option<bool>,
    pub following: Option<bool>,
    pub follow_request_sent: Option<bool>,
    pub notifications: Option<bool>,
    pub email: Option<String>,
    pub status: Option<Box<Status>>,
    pub withheld_in_countries: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct UserEntities {
    pub url: Option<UrlEntities>,
    pub description: Option<UrlEntities>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct UrlEntities {
    pub urls: Vec<UrlEntity>,
}
