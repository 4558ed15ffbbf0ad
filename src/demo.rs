//! Console walkthrough of queries, commands and streams against the live API.
//!
//! Credentials and endpoints come from the environment (see `.env`); `pin-auth` prints the
//! access token pair to put there.
mod account;
mod auth;
mod status;
mod stream;

use kvitter::config::{Credentials, Endpoints};
use kvitter::err::FatalErr;
use kvitter::{SingleUserAuthorizer, TwitterContext};

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "kvitter", version, about = "Try out the Twitter v1.1 API from the console.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the authenticated user.
    Verify,
    /// Show the account settings.
    Settings,
    /// List recent likes.
    Favorites {
        #[arg(long, default_value_t = 10)]
        count: u32,
    },
    /// List saved searches.
    SavedSearches,
    /// Search recent tweets, authorized as the application only.
    Search {
        query: String,
        #[arg(long, default_value_t = 10)]
        count: u32,
    },
    /// Show the home timeline.
    Timeline {
        #[arg(long, default_value_t = 10)]
        count: u32,
    },
    /// Post a tweet.
    Tweet { text: String },
    /// Upload a media file and, with --status, tweet it.
    Upload {
        file: PathBuf,
        /// e.g. image/png or video/mp4
        media_type: String,
        /// tweet_image, tweet_gif or tweet_video
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Print messages from the sample stream.
    SampleStream {
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Run the PIN flow and print the resulting access token.
    PinAuth,
}

pub async fn run(command: Command, credentials: Credentials, endpoints: Endpoints) -> Result<(), FatalErr> {
    log::debug!("Running {:?}", command);
    match command {
        Command::Search { query, count } => status::search(&credentials, endpoints, &query, count).await,
        Command::PinAuth => auth::pin(&credentials, &endpoints).await,
        Command::Verify => account::verify(&user_context(&credentials, endpoints)?).await,
        Command::Settings => account::settings(&user_context(&credentials, endpoints)?).await,
        Command::Favorites { count } => {
            account::favorites(&user_context(&credentials, endpoints)?, count).await
        }
        Command::SavedSearches => {
            account::saved_searches(&user_context(&credentials, endpoints)?).await
        }
        Command::Timeline { count } => {
            status::timeline(&user_context(&credentials, endpoints)?, count).await
        }
        Command::Tweet { text } => status::tweet(&user_context(&credentials, endpoints)?, &text).await,
        Command::Upload {
            file,
            media_type,
            category,
            status: text,
        } => {
            let ctx = user_context(&credentials, endpoints)?;
            status::upload(&ctx, &file, &media_type, category.as_deref(), text.as_deref()).await
        }
        Command::SampleStream { count } => {
            stream::sample(&user_context(&credentials, endpoints)?, count).await
        }
    }
}

fn user_context(credentials: &Credentials, endpoints: Endpoints) -> Result<TwitterContext, FatalErr> {
    let authorizer = SingleUserAuthorizer::new(credentials.to_store());
    Ok(TwitterContext::new(Arc::new(authorizer), endpoints)?)
}

fn print_rate_limit(ctx: &TwitterContext) {
    let last = ctx.executor().last_response();
    if let (Some(remaining), Some(limit)) = (last.rate_limit.remaining, last.rate_limit.limit) {
        println!("({} of {} requests left in this window)", remaining, limit);
    }
}
