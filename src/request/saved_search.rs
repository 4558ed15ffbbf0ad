use super::{parse_list, QueryErr, Request, RequestProcessor};
use crate::response::SavedSearch;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum SavedSearchType {
    #[default]
    Searches,
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SavedSearchQuery {
    kind: SavedSearchType,
    id: Option<u64>,
}

impl SavedSearchQuery {
    /// All of the authorizing user's saved searches.
    pub fn searches() -> Self {
        Self::default()
    }

    pub fn show(id: u64) -> Self {
        Self {
            kind: SavedSearchType::Show,
            id: Some(id),
        }
    }
}

impl RequestProcessor for SavedSearchQuery {
    type Entity = SavedSearch;

    fn build_request(&self, base_url: &str) -> Result<Request, QueryErr> {
        match (self.kind, self.id) {
            (SavedSearchType::Searches, _) => {
                Ok(Request::new(format!("{}saved_searches/list.json", base_url)))
            }
            (SavedSearchType::Show, Some(id)) if id != 0 => Ok(Request::new(format!(
                "{}saved_searches/show/{}.json",
                base_url, id
            ))),
            (SavedSearchType::Show, _) => Err(QueryErr::MissingParam("id")),
        }
    }

    fn process_results(&self, body: &str) -> Result<Vec<SavedSearch>, QueryErr> {
        parse_list(body)
    }
}
