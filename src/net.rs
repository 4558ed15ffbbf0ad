//! HTTP transport: signs each request, sends it and turns non-success answers into
//! [`TwitterErr::Api`].
//!
//! [`TwitterContext`](crate::TwitterContext) talks to the network only through the [`Execute`]
//! trait, so commands can be exercised against a recording mock.
mod err;
mod upload;

pub use err::TwitterErr;
pub use upload::CHUNK_SIZE;

use crate::auth::Authorizer;
use crate::config::Endpoints;
use crate::request::{HttpMethod, Request};
use crate::response::{parse_api_errors, RateLimit};

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use hashbrown::HashMap;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};

#[cfg(test)]
mod test;

/// The body of a streaming response, chunk by chunk.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, TwitterErr>> + Send>>;

/// A file sent as one part of a multipart body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attachment<'a> {
    pub data: &'a [u8],
    /// The form field name, e.g. `media` or `image`
    pub name: &'a str,
    pub file_name: &'a str,
    pub content_type: &'a str,
}

#[async_trait]
pub trait Execute: Send + Sync {
    /// GETs `request`, answering with the response body.
    async fn query(&self, request: &Request) -> Result<String, TwitterErr>;

    /// Sends `params` as a form-urlencoded body.
    async fn post_form(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
    ) -> Result<String, TwitterErr>;

    /// Sends `body` as JSON; `params` travel in the query string.
    async fn send_json(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
        body: &serde_json::Value,
    ) -> Result<String, TwitterErr>;

    /// One multipart POST carrying `params` as text parts plus the attachment.
    async fn post_image(
        &self,
        url: &str,
        params: &[(String, String)],
        image: Attachment<'_>,
    ) -> Result<String, TwitterErr>;

    /// Chunked media upload (INIT, APPEND..., FINALIZE), answering with FINALIZE's body.
    async fn post_media(
        &self,
        url: &str,
        params: &[(String, String)],
        media: Attachment<'_>,
        media_category: Option<&str>,
        shared: bool,
    ) -> Result<String, TwitterErr>;

    /// Opens a long-lived GET and hands back its body as it arrives.
    async fn open_stream(&self, request: &Request) -> Result<ByteStream, TwitterErr>;
}

/// What the most recent response looked like.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LastResponse {
    pub url: String,
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub rate_limit: RateLimit,
    pub media_rate_limit: RateLimit,
}

/// [`Execute`] over `reqwest`.
pub struct TwitterExecute {
    client: reqwest::Client,
    stream_client: reqwest::Client,
    authorizer: Arc<dyn Authorizer>,
    last_response: Mutex<LastResponse>,
}

impl TwitterExecute {
    pub fn new(authorizer: Arc<dyn Authorizer>, endpoints: &Endpoints) -> Result<Self, TwitterErr> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        let user_agent = endpoints.user_agent.0.as_str();

        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .default_headers(headers.clone())
                .timeout(endpoints.timeout.0)
                .build()?,
            // streams stay open indefinitely
            stream_client: reqwest::Client::builder()
                .user_agent(user_agent)
                .default_headers(headers)
                .build()?,
            authorizer,
            last_response: Mutex::new(LastResponse::default()),
        })
    }

    pub fn authorizer(&self) -> &dyn Authorizer {
        self.authorizer.as_ref()
    }

    pub fn last_response(&self) -> LastResponse {
        self.last_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn authorization(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
    ) -> Result<String, TwitterErr> {
        Ok(self.authorizer.authorization_header(method, url, params)?)
    }

    /// Records the response and reads its body, failing on a non-success status.
    async fn finish(&self, url: &str, response: reqwest::Response) -> Result<String, TwitterErr> {
        let status = self.record(url, &response);
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(api_error(status, url, body))
        }
    }

    fn record(&self, url: &str, response: &reqwest::Response) -> reqwest::StatusCode {
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let status = response.status();
        log::debug!("{} answered {}", url, status);

        let mut last = self
            .last_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *last = LastResponse {
            url: url.to_string(),
            status: status.as_u16(),
            rate_limit: RateLimit::from_headers(&headers),
            media_rate_limit: RateLimit::media_from_headers(&headers),
            headers,
        };
        status
    }

    async fn send_form(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
    ) -> Result<String, TwitterErr> {
        let authorization = self.authorization(method, url, params)?;
        log::debug!("{} {}", method, url);
        let response = self
            .client
            .request(to_reqwest(method), url)
            .header(header::AUTHORIZATION, authorization)
            .form(params)
            .send()
            .await?;
        self.finish(url, response).await
    }

    async fn send_multipart(&self, url: &str, form: Form) -> Result<String, TwitterErr> {
        let authorization = self.authorization(HttpMethod::Post, url, &[])?;
        log::debug!("POST {} (multipart)", url);
        let response = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, authorization)
            .multipart(form)
            .send()
            .await?;
        self.finish(url, response).await
    }
}

#[async_trait]
impl Execute for TwitterExecute {
    async fn query(&self, request: &Request) -> Result<String, TwitterErr> {
        let authorization =
            self.authorization(HttpMethod::Get, request.endpoint(), request.params())?;
        let url = request.full_url();
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, authorization)
            .send()
            .await?;
        self.finish(&url, response).await
    }

    async fn post_form(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
    ) -> Result<String, TwitterErr> {
        self.send_form(method, url, params).await
    }

    async fn send_json(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
        body: &serde_json::Value,
    ) -> Result<String, TwitterErr> {
        let authorization = self.authorization(method, url, params)?;
        let mut request = Request::new(url);
        params.iter().for_each(|(k, v)| request.add(k, v));
        let full_url = request.full_url();
        log::debug!("{} {} (json)", method, full_url);
        let response = self
            .client
            .request(to_reqwest(method), &full_url)
            .header(header::AUTHORIZATION, authorization)
            .json(body)
            .send()
            .await?;
        self.finish(&full_url, response).await
    }

    async fn post_image(
        &self,
        url: &str,
        params: &[(String, String)],
        image: Attachment<'_>,
    ) -> Result<String, TwitterErr> {
        let form = params
            .iter()
            .fold(Form::new(), |form, (k, v)| form.text(k.clone(), v.clone()))
            .part(image.name.to_string(), attachment_part(image)?);
        self.send_multipart(url, form).await
    }

    async fn post_media(
        &self,
        url: &str,
        params: &[(String, String)],
        media: Attachment<'_>,
        media_category: Option<&str>,
        shared: bool,
    ) -> Result<String, TwitterErr> {
        let init = upload::init_params(media, media_category, shared, params);
        let init_body = self.send_form(HttpMethod::Post, url, &init).await?;
        let media_id = upload::media_id(&init_body)?;
        log::debug!("upload INIT gave media_id {}", media_id);

        for (segment_index, chunk) in upload::segments(media.data) {
            let form = Form::new()
                .text("command", "APPEND")
                .text("media_id", media_id.to_string())
                .text("segment_index", segment_index.to_string())
                .part(
                    media.name.to_string(),
                    attachment_part(Attachment {
                        data: chunk,
                        ..media
                    })?,
                );
            self.send_multipart(url, form).await?;
        }

        self.send_form(HttpMethod::Post, url, &upload::finalize_params(media_id))
            .await
    }

    async fn open_stream(&self, request: &Request) -> Result<ByteStream, TwitterErr> {
        let authorization =
            self.authorization(HttpMethod::Get, request.endpoint(), request.params())?;
        let url = request.full_url();
        log::debug!("GET {} (stream)", url);
        let response = self
            .stream_client
            .get(&url)
            .header(header::AUTHORIZATION, authorization)
            .send()
            .await?;

        let status = self.record(&url, &response);
        if status.is_success() {
            Ok(Box::pin(
                response.bytes_stream().map(|chunk| chunk.map_err(TwitterErr::from)),
            ))
        } else {
            let body = response.text().await?;
            Err(api_error(status, &url, body))
        }
    }
}

fn attachment_part(attachment: Attachment<'_>) -> Result<Part, TwitterErr> {
    Ok(Part::bytes(attachment.data.to_vec())
        .file_name(attachment.file_name.to_string())
        .mime_str(attachment.content_type)?)
}

fn api_error(status: reqwest::StatusCode, url: &str, body: String) -> TwitterErr {
    log::error!("{} answered {}: {}", url, status, body);
    TwitterErr::Api {
        status: status.as_u16(),
        url: url.to_string(),
        errors: parse_api_errors(&body),
        body,
    }
}

fn to_reqwest(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}
