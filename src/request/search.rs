use super::{parse_list, QueryErr, Request, RequestProcessor, TweetMode};
use crate::response::Search;
use chrono::NaiveDate;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ResultType {
    Mixed,
    Recent,
    Popular,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    query: String,
    geocode: Option<String>,
    lang: Option<String>,
    locale: Option<String>,
    result_type: Option<ResultType>,
    count: Option<u32>,
    until: Option<NaiveDate>,
    since_id: Option<u64>,
    max_id: Option<u64>,
    include_entities: Option<bool>,
    tweet_mode: Option<TweetMode>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    with_params!(
        geocode: String,
        lang: String,
        locale: String,
        result_type: ResultType,
        count: u32,
        until: NaiveDate,
        since_id: u64,
        max_id: u64,
        include_entities: bool,
        tweet_mode: TweetMode,
    );
}

impl RequestProcessor for SearchQuery {
    type Entity = Search;

    fn build_request(&self, base_url: &str) -> Result<Request, QueryErr> {
        if self.query.trim().is_empty() {
            return Err(QueryErr::MissingParam("q"));
        }
        let mut req = Request::new(format!("{}search/tweets.json", base_url));
        req.add("q", &self.query);
        req.add_opt("geocode", self.geocode.as_deref());
        req.add_opt("lang", self.lang.as_deref());
        req.add_opt("locale", self.locale.as_deref());
        req.add_opt("result_type", self.result_type);
        req.add_opt("count", self.count);
        req.add_opt("until", self.until.map(|date| date.format("%Y-%m-%d")));
        req.add_opt("since_id", self.since_id);
        req.add_opt("max_id", self.max_id);
        req.add_opt("include_entities", self.include_entities);
        req.add_opt("tweet_mode", self.tweet_mode);
        Ok(req)
    }

    fn process_results(&self, body: &str) -> Result<Vec<Search>, QueryErr> {
        parse_list(body)
    }
}
