use super::print_rate_limit;
use kvitter::err::FatalErr;
use kvitter::{AccountQuery, FavoritesQuery, SavedSearchQuery, TwitterContext};

pub async fn verify(ctx: &TwitterContext) -> Result<(), FatalErr> {
    let accounts = ctx
        .query(&AccountQuery::verify_credentials().skip_status(true))
        .await?;
    for user in accounts.into_iter().filter_map(|account| account.user) {
        println!("@{} ({}), id {}", user.screen_name, user.name, user.id);
        println!(
            "{} followers, following {}, {} tweets",
            user.followers_count, user.friends_count, user.statuses_count
        );
    }
    print_rate_limit(ctx);
    Ok(())
}

pub async fn settings(ctx: &TwitterContext) -> Result<(), FatalErr> {
    let accounts = ctx.query(&AccountQuery::settings()).await?;
    for settings in accounts.into_iter().filter_map(|account| account.settings) {
        println!("screen name: {}", settings.screen_name);
        println!("language:    {}", settings.language);
        println!("time zone:   {}", settings.time_zone.name);
        if let Some(location) = settings.trend_location() {
            println!("trends for:  {} ({})", location.name, location.woeid);
        }
    }
    Ok(())
}

pub async fn favorites(ctx: &TwitterContext, count: u32) -> Result<(), FatalErr> {
    let statuses = ctx.query(&FavoritesQuery::new().count(count)).await?;
    for status in statuses {
        let author = status.user.as_ref().map(|u| u.screen_name.as_str()).unwrap_or("?");
        println!("{} @{}: {}", status.id, author, status.full_text());
    }
    print_rate_limit(ctx);
    Ok(())
}

pub async fn saved_searches(ctx: &TwitterContext) -> Result<(), FatalErr> {
    let searches = ctx.query(&SavedSearchQuery::searches()).await?;
    if searches.is_empty() {
        println!("No saved searches.");
    }
    for search in searches {
        println!("{}: {}", search.id, search.query);
    }
    Ok(())
}
