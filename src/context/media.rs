use super::{Error, TwitterContext};
use crate::net::{Attachment, Execute};
use crate::request::{BaseUrl, Request};
use crate::response::Media;

impl<E: Execute> TwitterContext<E> {
    /// Uploads media in chunks.  `media_category` (`tweet_image`, `tweet_video`, ...) is
    /// needed for videos longer than 30 seconds; `shared` lets the media id be used by
    /// other accounts in `additional_owners`.
    pub async fn upload_media(
        &self,
        data: &[u8],
        media_type: &str,
        media_category: Option<&str>,
        shared: bool,
        additional_owners: &[u64],
    ) -> Result<Media, Error> {
        if data.is_empty() {
            return Err(Error::invalid("data", "no media to upload"));
        }
        if media_type.trim().is_empty() {
            return Err(Error::invalid("mediaType", "a media type is required"));
        }
        let mut extra = Request::default();
        extra.add_list("additional_owners", additional_owners);

        let media = Attachment {
            data,
            name: "media",
            file_name: "media",
            content_type: media_type,
        };
        let body = self
            .exec
            .post_media(
                &self.upload_url(),
                extra.params(),
                media,
                media_category,
                shared,
            )
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Polls the processing state of an uploaded video or GIF.
    pub async fn media_status(&self, media_id: u64) -> Result<Media, Error> {
        if media_id == 0 {
            return Err(Error::invalid("mediaID", "a media id is required"));
        }
        let mut req = Request::new(self.upload_url());
        req.add("command", "STATUS");
        req.add("media_id", media_id);
        let body = self.exec.query(&req).await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn upload_url(&self) -> String {
        format!("{}media/upload.json", self.base_url(BaseUrl::Upload))
    }
}
