use super::{Error, TwitterContext};
use crate::net::Execute;
use crate::request::HttpMethod;
use crate::response::Status;

impl<E: Execute> TwitterContext<E> {
    /// Likes a tweet.
    pub async fn create_favorite(&self, id: u64, include_entities: bool) -> Result<Status, Error> {
        self.favorite("favorites/create.json", id, include_entities)
            .await
    }

    pub async fn destroy_favorite(&self, id: u64, include_entities: bool) -> Result<Status, Error> {
        self.favorite("favorites/destroy.json", id, include_entities)
            .await
    }

    async fn favorite(&self, path: &str, id: u64, include_entities: bool) -> Result<Status, Error> {
        if id == 0 {
            return Err(Error::invalid("id", "a tweet id is required"));
        }
        let mut req = self.api_request(path);
        req.add("id", id);
        req.add("include_entities", include_entities);
        self.send(HttpMethod::Post, req).await
    }
}
