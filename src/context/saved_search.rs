use super::{Error, TwitterContext};
use crate::net::Execute;
use crate::request::HttpMethod;
use crate::response::SavedSearch;

impl<E: Execute> TwitterContext<E> {
    pub async fn create_saved_search(&self, query: &str) -> Result<SavedSearch, Error> {
        if query.trim().is_empty() {
            return Err(Error::invalid("query", "a search query is required"));
        }
        let mut req = self.api_request("saved_searches/create.json");
        req.add("query", query);
        self.send(HttpMethod::Post, req).await
    }

    pub async fn destroy_saved_search(&self, id: u64) -> Result<SavedSearch, Error> {
        if id == 0 {
            return Err(Error::invalid("id", "a saved search id is required"));
        }
        let req = self.api_request(&format!("saved_searches/destroy/{}.json", id));
        self.send(HttpMethod::Post, req).await
    }
}
