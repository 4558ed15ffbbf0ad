//! A client for the Twitter v1.1 REST and streaming APIs
//!
//!
//! Reads are described declaratively as queries; commands are methods on a
//! [`TwitterContext`].  Both end up as signed HTTP requests whose JSON answers are mapped into
//! typed entities.
//!
//! # Notes on data flow
//! * **Query → Request**:
//! A query type ([`StatusQuery`], [`SearchQuery`], ...) validates its inputs and produces a
//! [`Request`](request::Request): the endpoint plus its ordered parameters.  Parameters that
//! were never set are not sent.
//!
//! * **Request → Execute**:
//! The context hands the request to an [`Execute`](net::Execute) implementation.  The default,
//! [`TwitterExecute`], asks its [`Authorizer`] for an `Authorization` header, sends the request
//! with `reqwest` and turns non-success answers into [`TwitterErr::Api`](net::TwitterErr::Api)
//! carrying the HTTP status and the API's error list.
//!
//! * **Execute → Entities**:
//! The query maps the body into entities ([`Status`], [`User`], ...).  Streaming endpoints are
//! read line by line by a [`StreamReader`](stream::StreamReader), which calls back once per
//! message until the caller closes the stream or the connection ends.

pub mod auth;
pub mod config;
pub mod context;
pub mod err;
pub mod net;
pub mod request;
pub mod response;
pub mod stream;

pub use auth::{
    ApplicationOnlyAuthorizer, AuthErr, Authorizer, CredentialStore, HttpTokenClient,
    PinAuthorizer, SingleUserAuthorizer,
};
pub use config::{Credentials, Endpoints};
pub use context::{Error, TwitterContext};
pub use net::{TwitterErr, TwitterExecute};
pub use request::{
    AccountQuery, FavoritesQuery, FriendshipQuery, FriendshipType, RelatedResultsQuery,
    ResultType, SavedSearchQuery, SearchQuery, StatusQuery, StatusType, StreamingQuery,
    TweetMode, UserQuery,
};
pub use response::{Account, Friendship, Media, SavedSearch, Search, Status, User};
pub use stream::{StreamContent, StreamHandle, StreamMessage};
