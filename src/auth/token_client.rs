use super::AuthErr;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use std::time::Duration;

/// A form POST to an OAuth token endpoint, answered with the raw response body.
#[async_trait]
pub trait TokenClient: Send + Sync {
    async fn post(
        &self,
        url: &str,
        authorization: &str,
        form: &[(String, String)],
    ) -> Result<String, AuthErr>;
}

#[derive(Debug, Clone)]
pub struct HttpTokenClient {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpTokenClient {
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Result<Self, AuthErr> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            user_agent: user_agent.into(),
        })
    }
}

#[async_trait]
impl TokenClient for HttpTokenClient {
    async fn post(
        &self,
        url: &str,
        authorization: &str,
        form: &[(String, String)],
    ) -> Result<String, AuthErr> {
        log::debug!("POST {} (token endpoint)", url);
        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, authorization)
            .header(USER_AGENT, self.user_agent.as_str())
            .form(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            log::error!("token endpoint {} answered {}: {}", url, status, body);
            Err(AuthErr::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
