use super::User;
use crate::request::AccountType;
use serde::{Deserialize, Serialize};

/// The result of an account query, carrying the query's own inputs alongside the data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Account {
    pub kind: AccountType,
    pub skip_status: bool,
    pub include_entities: bool,
    pub include_email: bool,
    /// Set for `verify_credentials`
    pub user: Option<User>,
    /// Set for `settings`
    pub settings: Option<Settings>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub trend_location: Vec<TrendLocation>,
    pub geo_enabled: bool,
    pub sleep_time: SleepTime,
    pub language: String,
    pub time_zone: UserTimeZone,
    pub screen_name: String,
    pub protected: bool,
    pub discoverable_by_email: bool,
    pub discoverable_by_mobile_phone: Option<bool>,
    pub always_use_https: bool,
    pub show_all_inline_media: bool,
    pub use_cookie_personalization: Option<bool>,
    pub allow_contributor_request: Option<String>,
    pub allow_dms_from: Option<String>,
}

impl Settings {
    /// The first (and in practice only) trend location.
    pub fn trend_location(&self) -> Option<&TrendLocation> {
        self.trend_location.first()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct TrendLocation {
    pub name: String,
    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,
    #[serde(rename = "placeType")]
    pub place_type: PlaceType,
    #[serde(rename = "parentid")]
    pub parent_id: u64,
    pub country: String,
    pub url: String,
    pub woeid: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PlaceType {
    pub name: String,
    pub code: i32,
}

/// Hours are `0..24`; the API sends `null` when sleep time was never configured.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SleepTime {
    pub start_time: Option<u8>,
    pub end_time: Option<u8>,
    pub enabled: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct UserTimeZone {
    pub name: String,
    pub tzinfo_name: String,
    pub utc_offset: i32,
}
