use super::{QueryErr, Request, RequestProcessor};
use crate::response::Account;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum AccountType {
    #[default]
    VerifyCredentials,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountQuery {
    kind: AccountType,
    skip_status: Option<bool>,
    include_entities: Option<bool>,
    include_email: Option<bool>,
}

impl AccountQuery {
    pub fn verify_credentials() -> Self {
        Self::default()
    }

    pub fn settings() -> Self {
        Self {
            kind: AccountType::Settings,
            ..Self::default()
        }
    }

    with_params!(skip_status: bool, include_entities: bool, include_email: bool);
}

impl RequestProcessor for AccountQuery {
    type Entity = Account;

    fn build_request(&self, base_url: &str) -> Result<Request, QueryErr> {
        Ok(match self.kind {
            AccountType::VerifyCredentials => {
                let mut req = Request::new(format!("{}account/verify_credentials.json", base_url));
                req.add_opt("skip_status", self.skip_status);
                req.add_opt("include_entities", self.include_entities);
                req.add_opt("include_email", self.include_email);
                req
            }
            AccountType::Settings => Request::new(format!("{}account/settings.json", base_url)),
        })
    }

    fn process_results(&self, body: &str) -> Result<Vec<Account>, QueryErr> {
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let (user, settings) = match self.kind {
            AccountType::VerifyCredentials => (Some(serde_json::from_str(body)?), None),
            AccountType::Settings => (None, Some(serde_json::from_str(body)?)),
        };
        Ok(vec![Account {
            kind: self.kind,
            skip_status: self.skip_status.unwrap_or_default(),
            include_entities: self.include_entities.unwrap_or_default(),
            include_email: self.include_email.unwrap_or_default(),
            user,
            settings,
        }])
    }
}
