use crate::response::{twitter_date, Status, User};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::convert::TryFrom;

/// One line of a stream, classified.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamMessage {
    Status(Box<Status>),
    Control(Control),
    Event(Box<StreamEvent>),
    /// JSON that matched none of the typed shapes
    Dynamic(Value),
}

/// Messages the streaming API sends about the stream itself rather than about tweets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Delete(Delete),
    Limit(Limit),
    Warning(Warning),
    Disconnect(Disconnect),
    ScrubGeo(ScrubGeo),
    StatusWithheld(StatusWithheld),
    UserWithheld(UserWithheld),
    /// Sent first on user streams: who the user follows
    Friends(Vec<u64>),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Delete {
    pub status: DeletedStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DeletedStatus {
    pub id: u64,
    pub id_str: String,
    pub user_id: u64,
    pub user_id_str: String,
}

/// How many matching tweets were left out since the connection opened.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Limit {
    pub track: u64,
    pub timestamp_ms: Option<String>,
}

/// A stall warning (`stall_warnings=true`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Warning {
    pub code: String,
    pub message: String,
    pub percent_full: Option<u8>,
    pub user_id: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Disconnect {
    pub code: u32,
    pub stream_name: String,
    pub reason: String,
}

/// Location data to remove from a user's tweets up to `up_to_status_id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ScrubGeo {
    pub user_id: u64,
    pub up_to_status_id: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct StatusWithheld {
    pub id: u64,
    pub user_id: u64,
    pub withheld_in_countries: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct UserWithheld {
    pub id: u64,
    pub withheld_in_countries: Vec<String>,
}

/// A user-stream event such as `favorite` or `follow`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct StreamEvent {
    pub event: String,
    #[serde(with = "twitter_date")]
    pub created_at: Option<DateTime<Utc>>,
    pub source: User,
    pub target: User,
    /// Whatever the event acted on: a tweet, a list...
    pub target_object: Option<Value>,
}

impl TryFrom<&str> for StreamMessage {
    type Error = serde_json::Error;

    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let value: Value = serde_json::from_str(line)?;

        if let Ok(control) = Control::deserialize(&value) {
            return Ok(Self::Control(control));
        }
        let typed = if value.get("event").is_some() {
            StreamEvent::deserialize(&value).map(|e| Self::Event(Box::new(e)))
        } else if value.get("id").is_some() && value.get("user").is_some() {
            Status::deserialize(&value).map(|s| Self::Status(Box::new(s)))
        } else {
            log::warn!("Stream message of unknown shape; passing it on untyped: {}", line);
            return Ok(Self::Dynamic(value));
        };

        typed.or_else(|e| {
            log::warn!(
                "Could not type-check a stream message; passing it on untyped.\n{}",
                e
            );
            Ok(Self::Dynamic(value))
        })
    }
}
