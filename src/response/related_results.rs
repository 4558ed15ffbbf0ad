use super::Status;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// One group of results related to a tweet (e.g. the conversation it belongs to).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct RelatedResults {
    /// Echoes the queried tweet; not part of the response body.
    #[serde(skip)]
    pub status_id: u64,
    #[serde(rename = "resultType")]
    pub result_type: String,
    #[serde(rename = "groupName")]
    pub group_name: String,
    pub annotations: HashMap<String, String>,
    pub results: Vec<RelatedResult>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct RelatedResult {
    pub score: f64,
    pub kind: String,
    pub annotations: HashMap<String, String>,
    pub value: Status,
}
