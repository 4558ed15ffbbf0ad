use super::{parse_list, QueryErr, Request, RequestProcessor, TweetMode};
use crate::response::Status;

/// The tweets a user has liked, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoritesQuery {
    user_id: Option<u64>,
    screen_name: Option<String>,
    count: Option<u32>,
    since_id: Option<u64>,
    max_id: Option<u64>,
    include_entities: Option<bool>,
    tweet_mode: Option<TweetMode>,
}

impl FavoritesQuery {
    /// Favorites of the authorizing user.
    pub fn new() -> Self {
        Self::default()
    }

    with_params!(
        user_id: u64,
        screen_name: String,
        count: u32,
        since_id: u64,
        max_id: u64,
        include_entities: bool,
        tweet_mode: TweetMode,
    );
}

impl RequestProcessor for FavoritesQuery {
    type Entity = Status;

    fn build_request(&self, base_url: &str) -> Result<Request, QueryErr> {
        if let Some(0) = self.count {
            return Err(QueryErr::InvalidParam {
                param: "count",
                reason: "must be at least 1".to_string(),
            });
        }
        let mut req = Request::new(format!("{}favorites/list.json", base_url));
        req.add_opt("user_id", self.user_id);
        req.add_opt("screen_name", self.screen_name.as_deref());
        req.add_opt("count", self.count);
        req.add_opt("since_id", self.since_id);
        req.add_opt("max_id", self.max_id);
        req.add_opt("include_entities", self.include_entities);
        req.add_opt("tweet_mode", self.tweet_mode);
        Ok(req)
    }

    fn process_results(&self, body: &str) -> Result<Vec<Status>, QueryErr> {
        parse_list(body)
    }
}
