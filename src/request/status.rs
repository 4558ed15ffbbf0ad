use super::{parse_list, QueryErr, Request, RequestProcessor, TweetMode};
use crate::response::Status;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum StatusType {
    /// The authorizing user's home timeline
    #[default]
    Home,
    /// Tweets posted by one user
    User,
    Mentions,
    RetweetsOfMe,
    Show,
    /// Recent retweets of one tweet
    Retweets,
    Lookup,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusQuery {
    kind: StatusType,
    id: Option<u64>,
    ids: Vec<u64>,
    user_id: Option<u64>,
    screen_name: Option<String>,
    count: Option<u32>,
    since_id: Option<u64>,
    max_id: Option<u64>,
    trim_user: Option<bool>,
    exclude_replies: Option<bool>,
    include_rts: Option<bool>,
    include_entities: Option<bool>,
    include_my_retweet: Option<bool>,
    tweet_mode: Option<TweetMode>,
}

impl StatusQuery {
    pub fn new(kind: StatusType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn home() -> Self {
        Self::new(StatusType::Home)
    }

    pub fn show(id: u64) -> Self {
        Self::new(StatusType::Show).id(id)
    }

    pub fn lookup(ids: &[u64]) -> Self {
        Self {
            ids: ids.to_vec(),
            ..Self::new(StatusType::Lookup)
        }
    }

    with_params!(
        id: u64,
        user_id: u64,
        screen_name: String,
        count: u32,
        since_id: u64,
        max_id: u64,
        trim_user: bool,
        exclude_replies: bool,
        include_rts: bool,
        include_entities: bool,
        include_my_retweet: bool,
        tweet_mode: TweetMode,
    );

    fn required_id(&self) -> Result<u64, QueryErr> {
        match self.id {
            Some(id) if id != 0 => Ok(id),
            _ => Err(QueryErr::MissingParam("id")),
        }
    }

    fn add_paging(&self, req: &mut Request) {
        req.add_opt("count", self.count);
        req.add_opt("since_id", self.since_id);
        req.add_opt("max_id", self.max_id);
    }
}

impl RequestProcessor for StatusQuery {
    type Entity = Status;

    fn build_request(&self, base_url: &str) -> Result<Request, QueryErr> {
        use StatusType::*;
        let mut req = match self.kind {
            Home => {
                let mut req = Request::new(format!("{}statuses/home_timeline.json", base_url));
                self.add_paging(&mut req);
                req.add_opt("exclude_replies", self.exclude_replies);
                req
            }
            User => {
                if self.user_id.is_none() && self.screen_name.is_none() {
                    return Err(QueryErr::MissingParam("user_id or screen_name"));
                }
                let mut req = Request::new(format!("{}statuses/user_timeline.json", base_url));
                req.add_opt("user_id", self.user_id);
                req.add_opt("screen_name", self.screen_name.as_deref());
                self.add_paging(&mut req);
                req.add_opt("exclude_replies", self.exclude_replies);
                req.add_opt("include_rts", self.include_rts);
                req
            }
            Mentions => {
                let mut req = Request::new(format!("{}statuses/mentions_timeline.json", base_url));
                self.add_paging(&mut req);
                req
            }
            RetweetsOfMe => {
                let mut req = Request::new(format!("{}statuses/retweets_of_me.json", base_url));
                self.add_paging(&mut req);
                req
            }
            Show => {
                let mut req = Request::new(format!("{}statuses/show.json", base_url));
                req.add("id", self.required_id()?);
                req.add_opt("include_my_retweet", self.include_my_retweet);
                req
            }
            Retweets => {
                let id = self.required_id()?;
                let mut req = Request::new(format!("{}statuses/retweets/{}.json", base_url, id));
                req.add_opt("count", self.count);
                req
            }
            Lookup => {
                if self.ids.is_empty() {
                    return Err(QueryErr::MissingParam("id"));
                }
                let mut req = Request::new(format!("{}statuses/lookup.json", base_url));
                req.add_list("id", &self.ids);
                req
            }
        };
        req.add_opt("trim_user", self.trim_user);
        req.add_opt("include_entities", self.include_entities);
        req.add_opt("tweet_mode", self.tweet_mode);
        Ok(req)
    }

    fn process_results(&self, body: &str) -> Result<Vec<Status>, QueryErr> {
        parse_list(body)
    }
}
