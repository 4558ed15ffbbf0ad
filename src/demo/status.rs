use super::print_rate_limit;
use kvitter::config::{Credentials, Endpoints};
use kvitter::context::TweetOptions;
use kvitter::err::FatalErr;
use kvitter::{
    ApplicationOnlyAuthorizer, HttpTokenClient, SearchQuery, Status, StatusQuery, TweetMode,
    TwitterContext,
};

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

fn print_status(status: &Status) {
    let author = status.user.as_ref().map(|u| u.screen_name.as_str()).unwrap_or("?");
    println!("{} @{}: {}", status.id, author, status.full_text());
}

/// Runs a search with an application-only bearer token instead of the user's tokens.
pub async fn search(
    credentials: &Credentials,
    endpoints: Endpoints,
    query: &str,
    count: u32,
) -> Result<(), FatalErr> {
    let client = HttpTokenClient::new(endpoints.user_agent.as_str(), *endpoints.timeout)?;
    let mut authorizer =
        ApplicationOnlyAuthorizer::new(credentials.to_store(), endpoints.oauth.as_str(), Arc::new(client));
    authorizer.authorize().await?;
    let ctx = TwitterContext::new(Arc::new(authorizer), endpoints)?;

    let query = SearchQuery::new(query)
        .count(count)
        .tweet_mode(TweetMode::Extended);
    for search in ctx.query(&query).await? {
        println!(
            "{} results for `{}`",
            search.statuses.len(),
            search.search_metadata.query
        );
        search.statuses.iter().for_each(print_status);
    }
    print_rate_limit(&ctx);
    Ok(())
}

pub async fn timeline(ctx: &TwitterContext, count: u32) -> Result<(), FatalErr> {
    let query = StatusQuery::home()
        .count(count)
        .tweet_mode(TweetMode::Extended);
    ctx.query(&query).await?.iter().for_each(print_status);
    print_rate_limit(ctx);
    Ok(())
}

pub async fn tweet(ctx: &TwitterContext, text: &str) -> Result<(), FatalErr> {
    let status = ctx.tweet(text).await?;
    println!("Posted:");
    print_status(&status);
    Ok(())
}

pub async fn upload(
    ctx: &TwitterContext,
    file: &Path,
    media_type: &str,
    category: Option<&str>,
    text: Option<&str>,
) -> Result<(), FatalErr> {
    let data = tokio::fs::read(file).await?;
    println!("Uploading {} ({} bytes)", file.display(), data.len());
    let mut media = ctx
        .upload_media(&data, media_type, category, false, &[])
        .await?;

    while media.is_processing() {
        let wait = media
            .processing_info
            .as_ref()
            .and_then(|info| info.check_after_secs)
            .unwrap_or(1);
        let progress = media
            .processing_info
            .as_ref()
            .and_then(|info| info.progress_percent)
            .unwrap_or(0);
        println!("Processing, {}% done; checking again in {}s", progress, wait);
        tokio::time::sleep(Duration::from_secs(wait)).await;
        media = ctx.media_status(media.media_id).await?;
    }
    println!("Media id {}", media.media_id);

    if let Some(text) = text {
        let options = TweetOptions {
            media_ids: vec![media.media_id],
            ..TweetOptions::default()
        };
        let status = ctx.tweet_with(text, &options).await?;
        print_status(&status);
    }
    Ok(())
}
