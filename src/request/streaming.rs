use super::{BaseUrl, QueryErr, Request};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum StreamingType {
    /// A small random sample of all public tweets
    #[default]
    Sample,
    /// Public tweets matching `track`, `follow` or `locations`
    Filter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FilterLevel {
    None,
    Low,
    Medium,
}

/// A query against the streaming API; see `TwitterContext::start_stream`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamingQuery {
    kind: StreamingType,
    track: Option<String>,
    follow: Option<String>,
    locations: Option<String>,
    language: Option<String>,
    stall_warnings: Option<bool>,
    filter_level: Option<FilterLevel>,
}

impl StreamingQuery {
    pub fn sample() -> Self {
        Self::default()
    }

    pub fn filter() -> Self {
        Self {
            kind: StreamingType::Filter,
            ..Self::default()
        }
    }

    with_params!(
        track: String,
        follow: String,
        locations: String,
        language: String,
        stall_warnings: bool,
        filter_level: FilterLevel,
    );

    pub fn kind(&self) -> StreamingType {
        self.kind
    }

    pub fn base(&self) -> BaseUrl {
        BaseUrl::Stream
    }

    pub fn build_request(&self, base_url: &str) -> Result<Request, QueryErr> {
        let mut req = match self.kind {
            StreamingType::Sample => Request::new(format!("{}statuses/sample.json", base_url)),
            StreamingType::Filter => {
                let blank = |param: &Option<String>| param.as_deref().map_or(true, str::is_empty);
                if blank(&self.track) && blank(&self.follow) && blank(&self.locations) {
                    return Err(QueryErr::MissingParam("track, follow or locations"));
                }
                let mut req = Request::new(format!("{}statuses/filter.json", base_url));
                req.add_opt("track", self.track.as_deref());
                req.add_opt("follow", self.follow.as_deref());
                req.add_opt("locations", self.locations.as_deref());
                req
            }
        };
        req.add_opt("language", self.language.as_deref());
        req.add_opt("stall_warnings", self.stall_warnings);
        req.add_opt("filter_level", self.filter_level);
        Ok(req)
    }
}
