//! Request authorization.
//!
//! Every request leaving the crate carries an `Authorization` header produced by an
//! [`Authorizer`].  Three are provided:
//!
//! * [`SingleUserAuthorizer`] signs with all four OAuth 1.0a secrets supplied up front.
//! * [`PinAuthorizer`] runs the out-of-band PIN flow (request token → user visits the
//!   authorization link → PIN → access token) and then signs like a single user.
//! * [`ApplicationOnlyAuthorizer`] trades the consumer key and secret for an OAuth2 bearer
//!   token and sends `Bearer <token>`.
//!
//! The PIN and application-only flows reach the token endpoints through a [`TokenClient`],
//! which tests replace with a mock.
mod application_only;
mod credentials;
mod err;
mod oauth;
mod pin;
mod single_user;
mod token_client;

pub use application_only::ApplicationOnlyAuthorizer;
pub use credentials::CredentialStore;
pub use err::AuthErr;
pub use oauth::{percent_encode, OAuthSigner};
pub use pin::PinAuthorizer;
pub use single_user::SingleUserAuthorizer;
pub use token_client::{HttpTokenClient, TokenClient};

use crate::request::HttpMethod;


/// Produces the `Authorization` header for an outgoing request.
///
/// `params` are the parameters that travel in the query string or in a form-urlencoded
/// body; multipart and JSON bodies are never part of the signature.
pub trait Authorizer: Send + Sync {
    fn authorization_header(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
    ) -> Result<String, AuthErr>;

    fn is_authorized(&self) -> bool;

    fn credentials(&self) -> &CredentialStore;
}
