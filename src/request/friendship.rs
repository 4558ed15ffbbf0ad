use super::{QueryErr, Request, RequestProcessor};
use crate::response::{Friendship, IdList, Relationship, RelationshipEnvelope, UserList};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum FriendshipType {
    /// The relationship between two users
    #[default]
    Show,
    /// How the authorizing user relates to up to 100 others
    Lookup,
    /// Pending follow requests for the (protected) authorizing user
    Incoming,
    /// Follow requests the authorizing user has pending
    Outgoing,
    /// Users the authorizing user does not want retweets from
    NoRetweetIds,
    FollowerIds,
    FriendIds,
    FollowersList,
    FriendsList,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FriendshipQuery {
    kind: FriendshipType,
    source_id: Option<u64>,
    source_screen_name: Option<String>,
    target_id: Option<u64>,
    target_screen_name: Option<String>,
    user_id: Option<u64>,
    screen_name: Option<String>,
    user_ids: Vec<u64>,
    screen_names: Vec<String>,
    cursor: Option<i64>,
    count: Option<u32>,
    skip_status: Option<bool>,
    include_user_entities: Option<bool>,
    stringify_ids: Option<bool>,
}

impl FriendshipQuery {
    pub fn new(kind: FriendshipType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
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
        source_id: u64,
        source_screen_name: String,
        target_id: u64,
        target_screen_name: String,
        user_id: u64,
        screen_name: String,
        cursor: i64,
        count: u32,
        skip_status: bool,
        include_user_entities: bool,
        stringify_ids: bool,
    );

    fn user_request(&self, endpoint: String) -> Request {
        let mut req = Request::new(endpoint);
        req.add_opt("user_id", self.user_id);
        req.add_opt("screen_name", self.screen_name.as_deref());
        req.add_opt("cursor", self.cursor);
        req.add_opt("count", self.count);
        req
    }
}

impl RequestProcessor for FriendshipQuery {
    type Entity = Friendship;

    fn build_request(&self, base_url: &str) -> Result<Request, QueryErr> {
        use FriendshipType::*;
        Ok(match self.kind {
            Show => {
                if self.source_id.is_none() && self.source_screen_name.is_none() {
                    return Err(QueryErr::MissingParam("source_id or source_screen_name"));
                }
                if self.target_id.is_none() && self.target_screen_name.is_none() {
                    return Err(QueryErr::MissingParam("target_id or target_screen_name"));
                }
                let mut req = Request::new(format!("{}friendships/show.json", base_url));
                req.add_opt("source_id", self.source_id);
                req.add_opt("source_screen_name", self.source_screen_name.as_deref());
                req.add_opt("target_id", self.target_id);
                req.add_opt("target_screen_name", self.target_screen_name.as_deref());
                req
            }
            Lookup => {
                if self.user_ids.is_empty() && self.screen_names.is_empty() {
                    return Err(QueryErr::MissingParam("screen_name or user_id"));
                }
                let mut req = Request::new(format!("{}friendships/lookup.json", base_url));
                req.add_list("screen_name", &self.screen_names);
                req.add_list("user_id", &self.user_ids);
                req
            }
            Incoming | Outgoing => {
                let endpoint = if self.kind == Incoming { "incoming" } else { "outgoing" };
                let mut req = Request::new(format!("{}friendships/{}.json", base_url, endpoint));
                req.add_opt("cursor", self.cursor);
                req
            }
            NoRetweetIds => Request::new(format!("{}friendships/no_retweets/ids.json", base_url)),
            FollowerIds | FriendIds => {
                let who = if self.kind == FollowerIds { "followers" } else { "friends" };
                let mut req = self.user_request(format!("{}{}/ids.json", base_url, who));
                req.add_opt("stringify_ids", self.stringify_ids);
                req
            }
            FollowersList | FriendsList => {
                let who = if self.kind == FollowersList { "followers" } else { "friends" };
                let mut req = self.user_request(format!("{}{}/list.json", base_url, who));
                req.add_opt("skip_status", self.skip_status);
                req.add_opt("include_user_entities", self.include_user_entities);
                req
            }
        })
    }

    fn process_results(&self, body: &str) -> Result<Vec<Friendship>, QueryErr> {
        use FriendshipType::*;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let mut friendship = Friendship {
            kind: self.kind,
            ..Friendship::default()
        };
        match self.kind {
            Show => {
                let envelope: RelationshipEnvelope = serde_json::from_str(body)?;
                friendship.source_relationship = Some(envelope.relationship.source);
                friendship.target_relationship = Some(envelope.relationship.target);
            }
            Lookup => {
                friendship.relationships = serde_json::from_str::<Vec<Relationship>>(body)?;
            }
            NoRetweetIds => friendship.ids = serde_json::from_str(body)?,
            Incoming | Outgoing | FollowerIds | FriendIds => {
                let list: IdList = serde_json::from_str(body)?;
                friendship.ids = list.ids;
                friendship.cursors = list.cursors;
            }
            FollowersList | FriendsList => {
                let list: UserList = serde_json::from_str(body)?;
                friendship.users = list.users;
                friendship.cursors = list.cursors;
            }
        }
        Ok(vec![friendship])
    }
}
