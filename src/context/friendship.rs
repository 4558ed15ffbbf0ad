use super::{Error, TwitterContext};
use crate::net::Execute;
use crate::request::{FriendshipType, HttpMethod, Request};
use crate::response::{Friendship, RelationshipEnvelope, User};

/// A user named by id or by screen name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRef {
    Id(u64),
    ScreenName(String),
}

impl UserRef {
    fn is_unset(&self) -> bool {
        match self {
            Self::Id(id) => *id == 0,
            Self::ScreenName(name) => name.trim().is_empty(),
        }
    }

    fn add_to(&self, req: &mut Request) {
        match self {
            Self::Id(id) => req.add("user_id", id),
            Self::ScreenName(name) => req.add("screen_name", name),
        }
    }
}

impl From<u64> for UserRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}
impl From<&str> for UserRef {
    fn from(screen_name: &str) -> Self {
        Self::ScreenName(screen_name.to_string())
    }
}

impl<E: Execute> TwitterContext<E> {
    /// Follows a user; `follow` also turns on their device notifications.
    pub async fn create_friendship(
        &self,
        user_id: u64,
        screen_name: &str,
        follow: bool,
    ) -> Result<User, Error> {
        let mut req = self.friendship_request("friendships/create.json", user_id, screen_name)?;
        if follow {
            req.add("follow", true);
        }
        self.send(HttpMethod::Post, req).await
    }

    pub async fn destroy_friendship(&self, user_id: u64, screen_name: &str) -> Result<User, Error> {
        let req = self.friendship_request("friendships/destroy.json", user_id, screen_name)?;
        self.send(HttpMethod::Post, req).await
    }

    /// Turns retweets and device notifications from `target` on or off.
    pub async fn update_friendship_settings(
        &self,
        target: &UserRef,
        retweets: bool,
        device: bool,
    ) -> Result<Friendship, Error> {
        if target.is_unset() {
            return Err(Error::invalid(
                "screenNameOrUserID",
                "a user id or screen name is required",
            ));
        }
        let mut req = self.api_request("friendships/update.json");
        target.add_to(&mut req);
        req.add("retweets", retweets);
        req.add("device", device);

        let envelope: RelationshipEnvelope = self.send(HttpMethod::Post, req).await?;
        Ok(Friendship {
            kind: FriendshipType::Show,
            source_relationship: Some(envelope.relationship.source),
            target_relationship: Some(envelope.relationship.target),
            ..Friendship::default()
        })
    }

    fn friendship_request(&self, path: &str, user_id: u64, screen_name: &str) -> Result<Request, Error> {
        if user_id == 0 && screen_name.trim().is_empty() {
            return Err(Error::invalid(
                "UserIDOrScreenName",
                "a user id or screen name is required",
            ));
        }
        let mut req = self.api_request(path);
        if user_id != 0 {
            req.add("user_id", user_id);
        }
        req.add("screen_name", screen_name);
        Ok(req)
    }
}
