use super::Status;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Search {
    pub statuses: Vec<Status>,
    pub search_metadata: SearchMetadata,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SearchMetadata {
    pub completed_in: f64,
    pub max_id: u64,
    pub since_id: u64,
    pub count: u32,
    pub query: String,
    pub next_results: Option<String>,
    pub refresh_url: Option<String>,
}

impl SearchMetadata {
    /// The `max_id` to request the next (older) page with, if there is one.
    pub fn next_max_id(&self) -> Option<u64> {
        let next = self.next_results.as_deref()?;
        url::form_urlencoded::parse(next.trim_start_matches('?').as_bytes())
            .find(|(key, _)| key == "max_id")
            .and_then(|(_, value)| value.parse().ok())
    }
}
