use super::{parse_list, QueryErr, Request, RequestProcessor};
use crate::response::User;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum UserType {
    #[default]
    Show,
    Lookup,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserQuery {
    kind: UserType,
    user_id: Option<u64>,
    screen_name: Option<String>,
    user_ids: Vec<u64>,
    screen_names: Vec<String>,
    query: Option<String>,
    page: Option<u32>,
    count: Option<u32>,
    include_entities: Option<bool>,
}

impl UserQuery {
    pub fn new(kind: UserType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn search(query: impl Into<String>) -> Self {
        Self::new(UserType::Search).query(query)
    }

    pub fn user_ids(self, user_ids: &[u64]) -> Self {
        Self {
            user_ids: user_ids.to_vec(),
            ..self
        }
    }

    pub fn screen_names<S: AsRef<str>>(self, screen_names: &[S]) -> Self {
        Self {
            screen_names: screen_names.iter().map(|s| s.as_ref().to_string()).collect(),
            ..self
        }
    }

    with_params!(
        user_id: u64,
        screen_name: String,
        query: String,
        page: u32,
        count: u32,
        include_entities: bool,
    );
}

impl RequestProcessor for UserQuery {
    type Entity = User;

    fn build_request(&self, base_url: &str) -> Result<Request, QueryErr> {
        let mut req = match self.kind {
            UserType::Show => {
                if self.user_id.is_none() && self.screen_name.is_none() {
                    return Err(QueryErr::MissingParam("user_id or screen_name"));
                }
                let mut req = Request::new(format!("{}users/show.json", base_url));
                req.add_opt("user_id", self.user_id);
                req.add_opt("screen_name", self.screen_name.as_deref());
                req
            }
            UserType::Lookup => {
                if self.user_ids.is_empty() && self.screen_names.is_empty() {
                    return Err(QueryErr::MissingParam("user_id or screen_name"));
                }
                let mut req = Request::new(format!("{}users/lookup.json", base_url));
                req.add_list("user_id", &self.user_ids);
                req.add_list("screen_name", &self.screen_names);
                req
            }
            UserType::Search => {
                let query = self.query.as_deref().unwrap_or_default();
                if query.trim().is_empty() {
                    return Err(QueryErr::MissingParam("q"));
                }
                let mut req = Request::new(format!("{}users/search.json", base_url));
                req.add("q", query);
                req.add_opt("page", self.page);
                req.add_opt("count", self.count);
                req
            }
        };
        req.add_opt("include_entities", self.include_entities);
        Ok(req)
    }

    fn process_results(&self, body: &str) -> Result<Vec<User>, QueryErr> {
        parse_list(body)
    }
}
