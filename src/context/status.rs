use super::{Error, Image, TwitterContext};
use crate::net::Execute;
use crate::request::{HttpMethod, Request};
use crate::response::Status;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Optional parts of a new tweet.  Unset options are not sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TweetOptions {
    /// `None` (or `0`) posts a tweet that replies to nothing
    pub in_reply_to_status_id: Option<u64>,
    pub coordinate: Option<Coordinate>,
    pub place_id: Option<String>,
    /// Whether to show a pin at the exact coordinate
    pub display_coordinates: Option<bool>,
    pub possibly_sensitive: bool,
    pub trim_user: bool,
    /// Ids of media uploaded beforehand with `upload_media`
    pub media_ids: Vec<u64>,
}

impl TweetOptions {
    pub fn reply_to(in_reply_to_status_id: u64) -> Self {
        Self {
            in_reply_to_status_id: Some(in_reply_to_status_id),
            ..Self::default()
        }
    }

    fn add_to(&self, req: &mut Request) {
        req.add_opt(
            "in_reply_to_status_id",
            self.in_reply_to_status_id.filter(|id| *id != 0),
        );
        if let Some(Coordinate {
            latitude,
            longitude,
        }) = self.coordinate
        {
            req.add("lat", latitude);
            req.add("long", longitude);
        }
        req.add_opt("place_id", self.place_id.as_deref());
        req.add_opt("display_coordinates", self.display_coordinates);
        if self.possibly_sensitive {
            req.add("possibly_sensitive", true);
        }
        if self.trim_user {
            req.add("trim_user", true);
        }
        req.add_list("media_ids", &self.media_ids);
    }
}

fn require_status(status: &str) -> Result<(), Error> {
    if status.trim().is_empty() {
        Err(Error::invalid("status", "the tweet text is required"))
    } else {
        Ok(())
    }
}

fn require_id(param: &'static str, id: u64) -> Result<u64, Error> {
    if id == 0 {
        Err(Error::invalid(param, "a tweet id is required"))
    } else {
        Ok(id)
    }
}

impl<E: Execute> TwitterContext<E> {
    pub async fn tweet(&self, status: &str) -> Result<Status, Error> {
        self.tweet_with(status, &TweetOptions::default()).await
    }

    pub async fn tweet_with(&self, status: &str, options: &TweetOptions) -> Result<Status, Error> {
        require_status(status)?;
        let mut req = self.api_request("statuses/update.json");
        req.add("status", status);
        options.add_to(&mut req);
        self.send(HttpMethod::Post, req).await
    }

    pub async fn reply(&self, in_reply_to_status_id: u64, status: &str) -> Result<Status, Error> {
        let id = require_id("in_reply_to_status_id", in_reply_to_status_id)?;
        self.tweet_with(status, &TweetOptions::reply_to(id)).await
    }

    pub async fn delete_tweet(&self, id: u64) -> Result<Status, Error> {
        let id = require_id("id", id)?;
        let req = self.api_request(&format!("statuses/destroy/{}.json", id));
        self.send(HttpMethod::Post, req).await
    }

    pub async fn retweet(&self, id: u64) -> Result<Status, Error> {
        let id = require_id("id", id)?;
        let req = self.api_request(&format!("statuses/retweet/{}.json", id));
        self.send(HttpMethod::Post, req).await
    }

    pub async fn tweet_with_media(
        &self,
        status: &str,
        possibly_sensitive: bool,
        image: Image<'_>,
    ) -> Result<Status, Error> {
        let options = TweetOptions {
            possibly_sensitive,
            ..TweetOptions::default()
        };
        self.reply_with_media(status, image, &options).await
    }

    /// Posts a tweet and its image in one multipart request.  Whether it replies depends on
    /// `options.in_reply_to_status_id`.
    pub async fn reply_with_media(
        &self,
        status: &str,
        image: Image<'_>,
        options: &TweetOptions,
    ) -> Result<Status, Error> {
        require_status(status)?;
        if image.data.is_empty() {
            return Err(Error::invalid("image", "no image data"));
        }
        let mut req = self.api_request("statuses/update_with_media.json");
        req.add("status", status);
        options.add_to(&mut req);

        let body = self
            .exec
            .post_image(req.endpoint(), req.params(), image.as_part("media[]"))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }
}
