use kvitter::config::{Credentials, Endpoints};
use kvitter::err::FatalErr;
use kvitter::{Authorizer, HttpTokenClient, PinAuthorizer};

use std::io::{self, BufRead, Write};
use std::sync::Arc;

fn read_pin() -> String {
    print!("Enter the PIN shown after authorizing: ");
    io::stdout().flush().unwrap_or_default();
    let mut pin = String::new();
    if let Err(e) = io::stdin().lock().read_line(&mut pin) {
        FatalErr::log(e);
    }
    pin.trim().to_string()
}

pub async fn pin(credentials: &Credentials, endpoints: &Endpoints) -> Result<(), FatalErr> {
    let mut store = credentials.to_store();
    store.clear_token();
    let client = HttpTokenClient::new(endpoints.user_agent.as_str(), *endpoints.timeout)?;

    let mut authorizer = PinAuthorizer::new(store, endpoints.oauth.as_str(), Arc::new(client))
        .go_to_authorization(|link| println!("Open this link and authorize the app:\n  {}", link))
        .get_pin(read_pin);
    authorizer.authorize().await?;

    let creds = authorizer.credentials();
    println!("Authorized as @{} (id {}).  Add these to .env:", creds.screen_name, creds.user_id);
    println!("TWITTER_ACCESS_TOKEN={}", creds.oauth_token);
    println!("TWITTER_ACCESS_TOKEN_SECRET={}", creds.oauth_token_secret);
    Ok(())
}
