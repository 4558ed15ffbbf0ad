use super::User;
use crate::request::FriendshipType;
use serde::{Deserialize, Deserializer, Serialize};

/// The result of a friendship query.  Which fields are populated depends on `kind`:
/// `Show` fills the source/target pair, `Lookup` fills `relationships`, the id queries fill
/// `ids` and the list queries fill `users`; paged results carry `cursors`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Friendship {
    pub kind: FriendshipType,
    pub source_relationship: Option<Relationship>,
    pub target_relationship: Option<Relationship>,
    pub relationships: Vec<Relationship>,
    pub ids: Vec<u64>,
    pub users: Vec<User>,
    pub cursors: Cursors,
}

/// One side of a relationship, or one row of a `friendships/lookup` answer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Relationship {
    pub id: u64,
    pub id_str: String,
    pub screen_name: String,
    pub name: Option<String>,
    pub following: bool,
    pub followed_by: bool,
    pub following_received: Option<bool>,
    pub following_requested: Option<bool>,
    pub want_retweets: Option<bool>,
    pub all_replies: Option<bool>,
    pub marked_spam: Option<bool>,
    pub blocking: Option<bool>,
    pub blocked_by: Option<bool>,
    pub muting: Option<bool>,
    pub notifications_enabled: Option<bool>,
    pub can_dm: Option<bool>,
    pub connections: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RelationshipPair {
    pub source: Relationship,
    pub target: Relationship,
}

#[derive(Deserialize)]
pub(crate) struct RelationshipEnvelope {
    pub(crate) relationship: RelationshipPair,
}

/// `0` in either direction means there are no more pages that way.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Cursors {
    pub next_cursor: i64,
    pub previous_cursor: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct IdList {
    #[serde(deserialize_with = "ids")]
    pub ids: Vec<u64>,
    #[serde(flatten)]
    pub cursors: Cursors,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct UserList {
    pub users: Vec<User>,
    #[serde(flatten)]
    pub cursors: Cursors,
}

/// Ids arrive as numbers, or as strings when `stringify_ids` was requested.
fn ids<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(u64),
        Text(String),
    }

    Vec::<Id>::deserialize(deserializer)?
        .into_iter()
        .map(|id| match id {
            Id::Number(n) => Ok(n),
            Id::Text(s) => s.parse().map_err(serde::de::Error::custom),
        })
        .collect()
}
