//! OAuth 1.0a `HMAC-SHA1` request signing.
use super::{AuthErr, CredentialStore};
use crate::request::HttpMethod;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::borrow::Cow;
use url::Url;

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 encoding: everything except `A-Z a-z 0-9 - . _ ~` is escaped.
pub fn percent_encode(input: &str) -> Cow<'_, str> {
    urlencoding::encode(input)
}

/// Signs requests on behalf of the credentials it borrows.
///
/// An empty `oauth_token` is left out of the header, which is what the request-token
/// step of the PIN flow needs.
pub struct OAuthSigner<'a> {
    credentials: &'a CredentialStore,
}

impl<'a> OAuthSigner<'a> {
    pub fn new(credentials: &'a CredentialStore) -> Self {
        Self { credentials }
    }

    pub fn header(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
        extra_oauth: &[(&str, &str)],
    ) -> Result<String, AuthErr> {
        let nonce = uuid::Uuid::new_v4().simple().to_string();
        let timestamp = chrono::Utc::now().timestamp().to_string();
        self.header_with(method, url, params, extra_oauth, &nonce, &timestamp)
    }

    pub fn header_with(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
        extra_oauth: &[(&str, &str)],
        nonce: &str,
        timestamp: &str,
    ) -> Result<String, AuthErr> {
        let creds = self.credentials;
        if creds.consumer_key.is_empty() {
            return Err(AuthErr::MissingCredential("consumer_key"));
        }
        if creds.consumer_secret.is_empty() {
            return Err(AuthErr::MissingCredential("consumer_secret"));
        }

        let mut oauth = vec![
            ("oauth_consumer_key", creds.consumer_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", timestamp),
            ("oauth_version", "1.0"),
        ];
        if !creds.oauth_token.is_empty() {
            oauth.push(("oauth_token", creds.oauth_token.as_str()));
        }
        oauth.extend_from_slice(extra_oauth);

        let base = signature_base(method, url, params, &oauth)?;
        let signature = sign(&base, &creds.consumer_secret, &creds.oauth_token_secret);
        oauth.push(("oauth_signature", signature.as_str()));
        oauth.sort();

        let fields: Vec<String> = oauth
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect();
        Ok(format!("OAuth {}", fields.join(", ")))
    }
}

/// `METHOD&url&params`, with any query already on `url` folded into the parameters.
pub(crate) fn signature_base(
    method: HttpMethod,
    url: &str,
    params: &[(String, String)],
    oauth: &[(&str, &str)],
) -> Result<String, AuthErr> {
    let parsed = Url::parse(url)?;
    let normalized = match parsed.port() {
        Some(port) => format!(
            "{}://{}:{}{}",
            parsed.scheme(),
            parsed.host_str().unwrap_or_default(),
            port,
            parsed.path()
        ),
        None => format!(
            "{}://{}{}",
            parsed.scheme(),
            parsed.host_str().unwrap_or_default(),
            parsed.path()
        ),
    };

    let mut encoded: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| (percent_encode(&k).into_owned(), percent_encode(&v).into_owned()))
        .chain(
            params
                .iter()
                .map(|(k, v)| (percent_encode(k).into_owned(), percent_encode(v).into_owned())),
        )
        .chain(
            oauth
                .iter()
                .map(|(k, v)| (percent_encode(k).into_owned(), percent_encode(v).into_owned())),
        )
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    Ok(format!(
        "{}&{}&{}",
        method,
        percent_encode(&normalized),
        percent_encode(&param_string)
    ))
}

pub(crate) fn sign(base: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .expect("Guaranteed: HMAC accepts keys of any length");
    mac.update(base.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Splits a form-urlencoded token endpoint body into its fields.
pub(crate) fn parse_token_response(body: &str) -> hashbrown::HashMap<String, String> {
    url::form_urlencoded::parse(body.trim().as_bytes())
        .into_owned()
        .collect()
}
