use super::*;
use chrono::{Datelike, TimeZone, Timelike, Utc};
use hashbrown::HashMap;

type TestResult = Result<(), Box<dyn std::error::Error>>;

macro_rules! fixture {
    ($name:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/", $name))
    };
}

#[test]
fn user_maps_profile_fields() -> TestResult {
    let user: User = serde_json::from_str(fixture!("verify_credentials.json"))?;

    assert_eq!(user.id, 15_411_837);
    assert_eq!(user.id_str, "15411837");
    assert_eq!(user.screen_name, "JoeMayo");
    assert_eq!(user.name, "Joe Mayo");
    assert_eq!(user.location.as_deref(), Some("Denver, CO"));
    assert_eq!(user.url.as_deref(), Some("http://linqtotwitter.codeplex.com/"));
    assert_eq!(user.followers_count, 875);
    assert_eq!(user.friends_count, 161);
    assert_eq!(user.statuses_count, 1624);
    assert_eq!(user.favourites_count, 65);
    assert_eq!(user.listed_count, 101);
    assert_eq!(user.utc_offset, Some(-25200));
    assert_eq!(user.profile_text_color.as_deref(), Some("3C3940"));
    assert_eq!(user.following, Some(false));
    assert!(user.geo_enabled);
    assert!(!user.protected);
    assert_eq!(
        user.created_at,
        Some(Utc.with_ymd_and_hms(2008, 7, 13, 4, 35, 50).unwrap())
    );

    let status = user.status.expect("embedded status");
    assert_eq!(status.id, 115_131_137_906_589_696);
    assert_eq!(status.retweet_count, 2);
    assert_eq!(status.in_reply_to_status_id, None);
    assert_eq!(status.user, None);
    Ok(())
}

#[test]
fn status_maps_retweeted_status() -> TestResult {
    let status: Status = serde_json::from_str(fixture!("single_status.json"))?;

    assert_eq!(status.id_str, "184835136037191681");
    assert!(status.is_retweet());
    assert!(status.text.starts_with("RT @scottgu"));
    let original = status.retweeted_status.as_ref().expect("retweeted status");
    assert_eq!(original.id, 184_793_217_231_880_192);
    assert_eq!(original.retweet_count, 393);
    assert_eq!(
        original.user.as_ref().map(|u| u.screen_name.as_str()),
        Some("scottgu")
    );
    assert_eq!(
        status.user.as_ref().and_then(|u| u.notifications),
        Some(true)
    );
    Ok(())
}

#[test]
fn status_maps_entities_and_geo() -> TestResult {
    let timeline: Vec<Status> = serde_json::from_str(fixture!("home_timeline.json"))?;
    assert_eq!(timeline.len(), 2);

    let tweet = &timeline[0];
    let entities = tweet.entities.as_ref().expect("entities");
    assert_eq!(entities.hashtags[0].text, "rustlang");
    assert_eq!(entities.hashtags[0].indices, vec![13, 22]);
    assert_eq!(
        entities.urls[0].expanded_url.as_deref(),
        Some("https://docs.example.com/kvitter")
    );
    assert_eq!(entities.user_mentions[0].id, 15_411_837);
    assert_eq!(entities.media[0].kind, "photo");
    assert_eq!(entities.media[0].sizes["large"].w, 1024);

    let coordinates = tweet.coordinates.as_ref().expect("coordinates");
    assert_eq!(coordinates.latitude(), Some(39.742043));
    assert_eq!(coordinates.longitude(), Some(-104.991531));
    let place = tweet.place.as_ref().expect("place");
    assert_eq!(place.full_name, "Denver, CO");
    assert_eq!(
        place.bounding_box.as_ref().map(|b| b.coordinates[0].len()),
        Some(4)
    );
    assert_eq!(tweet.favorite_count, Some(7));
    assert_eq!(tweet.favorited, Some(true));

    let reply = &timeline[1];
    assert_eq!(reply.in_reply_to_status_id, Some(386_238_000_000_000_000));
    assert_eq!(reply.in_reply_to_screen_name.as_deref(), Some("Linq2Tweeter"));
    assert_eq!(reply.coordinates, None);
    assert_eq!(reply.full_text(), "@Linq2Tweeter looks good");
    Ok(())
}

#[test]
fn settings_map_trend_location_and_sleep_time() -> TestResult {
    let settings: Settings = serde_json::from_str(fixture!("settings.json"))?;

    let trend = settings.trend_location().expect("trend location");
    assert_eq!(trend.name, "United States");
    assert_eq!(trend.country_code.as_deref(), Some("US"));
    assert_eq!(trend.place_type.name, "Country");
    assert_eq!(trend.place_type.code, 12);
    assert_eq!(trend.parent_id, 1);
    assert_eq!(trend.woeid, 23_424_977);
    assert_eq!(trend.url, "http://where.yahooapis.com/v1/place/23424977");

    assert_eq!(settings.sleep_time.start_time, None);
    assert_eq!(settings.sleep_time.end_time, None);
    assert!(!settings.sleep_time.enabled);
    assert_eq!(settings.time_zone.name, "Mountain Time (US & Canada)");
    assert_eq!(settings.time_zone.tzinfo_name, "America/Denver");
    assert_eq!(settings.time_zone.utc_offset, -25200);
    assert_eq!(settings.language, "en");
    assert_eq!(settings.screen_name, "JoeMayo");
    assert!(settings.geo_enabled);
    assert!(settings.always_use_https);
    assert!(settings.discoverable_by_email);
    Ok(())
}

#[test]
fn relationship_maps_both_sides() -> TestResult {
    let envelope: RelationshipEnvelope = serde_json::from_str(fixture!("relationship.json"))?;
    let RelationshipPair { source, target } = envelope.relationship;

    assert_eq!(source.screen_name, "Linq2Tweeter");
    assert_eq!(source.id, 16_761_255);
    assert!(source.following);
    assert_eq!(source.want_retweets, Some(true));
    assert_eq!(source.can_dm, Some(false));
    assert_eq!(source.notifications_enabled, Some(true));
    assert_eq!(target.screen_name, "JoeMayo");
    assert!(target.followed_by);
    assert_eq!(target.blocking, None);
    Ok(())
}

#[test]
fn id_lists_keep_cursors() -> TestResult {
    let ids: IdList = serde_json::from_str(fixture!("follower_ids.json"))?;

    assert_eq!(ids.ids.len(), 5);
    assert_eq!(ids.ids[0], 657_693);
    assert_eq!(ids.cursors.next_cursor, 1_374_004_777_531_007_833);
    assert_eq!(ids.cursors.previous_cursor, 0);
    Ok(())
}

#[test]
fn saved_searches_map() -> TestResult {
    let searches: Vec<SavedSearch> = serde_json::from_str(fixture!("saved_searches.json"))?;

    assert_eq!(searches.len(), 2);
    assert_eq!(searches[0].id, 9_569_704);
    assert_eq!(searches[0].query, "@twitterapi");
    assert_eq!(searches[0].position, None);
    assert_eq!(
        searches[1].created_at.map(|d| (d.day(), d.hour(), d.second())),
        Some((15, 9, 4))
    );
    Ok(())
}

#[test]
fn search_metadata_points_to_next_page() -> TestResult {
    let search: Search = serde_json::from_str(fixture!("search.json"))?;

    assert_eq!(search.statuses.len(), 1);
    assert_eq!(search.statuses[0].user.as_ref().map(|u| u.verified), Some(true));
    assert_eq!(search.search_metadata.query, "nasa");
    assert_eq!(search.search_metadata.next_max_id(), Some(967_574_182_522_482_687));
    Ok(())
}

#[test]
fn media_reports_processing_state() -> TestResult {
    let uploaded: Media = serde_json::from_str(fixture!("media_upload.json"))?;
    let processing: Media = serde_json::from_str(fixture!("media_status.json"))?;

    assert_eq!(uploaded.media_id, 710_511_363_345_354_753);
    assert_eq!(uploaded.image.as_ref().map(|i| i.w), Some(800));
    assert!(!uploaded.is_processing());
    assert!(processing.is_processing());
    assert_eq!(
        processing.processing_info.and_then(|p| p.progress_percent),
        Some(8)
    );
    Ok(())
}

#[test]
fn api_errors_accept_both_shapes() {
    let many = parse_api_errors(fixture!("error.json"));
    let single = parse_api_errors(r#"{"error":"Not authorized."}"#);

    assert_eq!(many[0].code, 34);
    assert_eq!(many[0].message, "Sorry, that page does not exist.");
    assert_eq!(single[0].message, "Not authorized.");
    assert!(parse_api_errors("<html>Bad gateway</html>").is_empty());
}

#[test]
fn rate_limits_read_from_headers() {
    let mut headers = HashMap::new();
    headers.insert("x-rate-limit-limit".to_string(), "15".to_string());
    headers.insert("x-rate-limit-remaining".to_string(), "14".to_string());
    headers.insert("x-rate-limit-reset".to_string(), "1363544400".to_string());

    let limit = RateLimit::from_headers(&headers);

    assert_eq!(limit.limit, Some(15));
    assert_eq!(limit.remaining, Some(14));
    assert_eq!(limit.reset.map(|r| r.timestamp()), Some(1_363_544_400));
    assert!(!RateLimit::media_from_headers(&headers).is_present());
}

#[test]
fn out_of_range_rate_limits_are_dropped() {
    let mut headers = HashMap::new();
    headers.insert("x-rate-limit-limit".to_string(), "-1".to_string());
    headers.insert("x-rate-limit-remaining".to_string(), "4294967296".to_string());
    headers.insert("x-rate-limit-reset".to_string(), "soon".to_string());

    let limit = RateLimit::from_headers(&headers);

    assert_eq!(limit.limit, None);
    assert_eq!(limit.remaining, None);
    assert_eq!(limit.reset, None);
    assert!(!limit.is_present());
}

#[test]
fn dates_round_trip_through_api_format() -> TestResult {
    let date = twitter_date::parse("Sun Jul 13 04:35:50 +0000 2008")?;
    let shifted = twitter_date::parse("Sat Sep 17 11:32:56 -0700 2011")?;

    assert_eq!(date.year(), 2008);
    assert_eq!(shifted, Utc.with_ymd_and_hms(2011, 9, 17, 18, 32, 56).unwrap());
    assert_eq!(
        date.format(twitter_date::FORMAT).to_string(),
        "Sun Jul 13 04:35:50 +0000 2008"
    );
    Ok(())
}
