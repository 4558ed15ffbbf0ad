//! The entry point: run queries, send commands and read streams.
//!
//! ```no_run
//! # async fn run() -> Result<(), kvitter::Error> {
//! use kvitter::{CredentialStore, Endpoints, SingleUserAuthorizer, StatusQuery, TwitterContext};
//! use std::sync::Arc;
//!
//! let creds = CredentialStore::new("key", "secret").with_token("token", "token secret");
//! let ctx = TwitterContext::new(Arc::new(SingleUserAuthorizer::new(creds)), Endpoints::default())?;
//!
//! for status in ctx.query(&StatusQuery::home().count(5_u32)).await? {
//!     println!("{}: {}", status.id, status.full_text());
//! }
//! ctx.tweet("Hello from Rust").await?;
//! # Ok(())
//! # }
//! ```
mod account;
mod err;
mod favorites;
mod friendship;
mod media;
mod saved_search;
mod status;

pub use account::{BannerSize, DeviceType, Image, ProfileColors, ProfileUpdate, SettingsUpdate};
pub use err::Error;
pub use friendship::UserRef;
pub use status::{Coordinate, TweetOptions};

use crate::auth::Authorizer;
use crate::config::Endpoints;
use crate::net::{Execute, TwitterExecute};
use crate::request::{BaseUrl, HttpMethod, Request, RequestProcessor, StreamingQuery};
use crate::stream::{StreamContent, StreamReader};

use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;


pub struct TwitterContext<E: Execute = TwitterExecute> {
    exec: E,
    endpoints: Endpoints,
}

impl TwitterContext<TwitterExecute> {
    pub fn new(authorizer: Arc<dyn Authorizer>, endpoints: Endpoints) -> Result<Self, Error> {
        let exec = TwitterExecute::new(authorizer, &endpoints)?;
        Ok(Self { exec, endpoints })
    }
}

impl<E: Execute> TwitterContext<E> {
    pub fn with_executor(exec: E, endpoints: Endpoints) -> Self {
        Self { exec, endpoints }
    }

    pub fn executor(&self) -> &E {
        &self.exec
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn base_url(&self, base: BaseUrl) -> &str {
        match base {
            BaseUrl::Api => self.endpoints.api.0.as_str(),
            BaseUrl::Upload => self.endpoints.upload.0.as_str(),
            BaseUrl::Stream => self.endpoints.stream.0.as_str(),
        }
    }

    /// A request against `path` under the REST root.
    fn api_request(&self, path: &str) -> Request {
        Request::new(format!("{}{}", self.base_url(BaseUrl::Api), path))
    }

    pub async fn query<P: RequestProcessor>(&self, processor: &P) -> Result<Vec<P::Entity>, Error> {
        let request = processor.build_request(self.base_url(processor.base()))?;
        let body = self.exec.query(&request).await?;
        Ok(processor.process_results(&body)?)
    }

    /// Reads a stream until it ends or a [`StreamContent`] closes it; answers with the
    /// number of messages delivered.
    pub async fn start_stream<F, Fut>(&self, query: &StreamingQuery, callback: F) -> Result<usize, Error>
    where
        F: FnMut(StreamContent) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.start_stream_with(StreamReader::new(), query, callback)
            .await
    }

    /// Like `start_stream`, with a reader whose handle the caller may already hold.
    pub async fn start_stream_with<F, Fut>(
        &self,
        reader: StreamReader,
        query: &StreamingQuery,
        callback: F,
    ) -> Result<usize, Error>
    where
        F: FnMut(StreamContent) -> Fut,
        Fut: Future<Output = ()>,
    {
        let request = query.build_request(self.base_url(query.base()))?;
        let bytes = self.exec.open_stream(&request).await?;
        Ok(reader.read(bytes, callback).await?)
    }

    async fn send<T: DeserializeOwned>(&self, method: HttpMethod, request: Request) -> Result<T, Error> {
        let body = self
            .exec
            .post_form(method, request.endpoint(), request.params())
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Like `send`, for endpoints that may answer with an empty body.
    async fn send_maybe_empty<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<Option<T>, Error> {
        let body = self
            .exec
            .post_form(HttpMethod::Post, request.endpoint(), request.params())
            .await?;
        if body.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(serde_json::from_str(&body)?))
        }
    }
}
