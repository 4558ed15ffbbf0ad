use super::*;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const API: &str = "https://api.twitter.com/1.1/";

macro_rules! fixture {
    ($name:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/", $name))
    };
}

#[test]
fn verify_credentials_url_carries_set_flags_only() -> TestResult {
    let query = AccountQuery::verify_credentials()
        .skip_status(true)
        .include_entities(false);

    let req = query.build_request(API)?;

    assert_eq!(
        req.full_url(),
        "https://api.twitter.com/1.1/account/verify_credentials.json?skip_status=true&include_entities=false"
    );
    assert_eq!(req.param("include_email"), None);
    Ok(())
}

#[test]
fn settings_url_has_no_parameters() -> TestResult {
    let req = AccountQuery::settings().build_request(API)?;

    assert_eq!(
        req.full_url(),
        "https://api.twitter.com/1.1/account/settings.json"
    );
    assert!(req.params().is_empty());
    Ok(())
}

#[test]
fn account_results_echo_the_query() -> TestResult {
    let query = AccountQuery::verify_credentials().skip_status(true);

    let accounts = query.process_results(fixture!("verify_credentials.json"))?;

    assert_eq!(accounts.len(), 1);
    let account = &accounts[0];
    assert_eq!(account.kind, AccountType::VerifyCredentials);
    assert!(account.skip_status);
    assert!(!account.include_email);
    assert_eq!(account.user.as_ref().map(|u| u.screen_name.as_str()), Some("JoeMayo"));
    assert!(account.settings.is_none());
    Ok(())
}

#[test]
fn settings_results_map_into_account() -> TestResult {
    let accounts = AccountQuery::settings().process_results(fixture!("settings.json"))?;

    let settings = accounts[0].settings.as_ref().expect("settings");
    assert_eq!(accounts[0].kind, AccountType::Settings);
    assert_eq!(settings.language, "en");
    assert_eq!(settings.screen_name, "JoeMayo");
    assert_eq!(settings.trend_location().map(|t| t.woeid), Some(23_424_977));
    Ok(())
}

#[test]
fn empty_body_yields_no_entities() -> TestResult {
    assert!(AccountQuery::settings().process_results("")?.is_empty());
    assert!(StatusQuery::home().process_results("  \n")?.is_empty());
    assert!(FriendshipQuery::new(FriendshipType::FollowerIds)
        .process_results("")?
        .is_empty());
    Ok(())
}

#[test]
fn empty_values_are_dropped_and_values_encoded() {
    let mut req = Request::new("https://example.com/x.json");
    req.add("q", "rust lang&more");
    req.add("empty", "");
    req.add_opt::<u32>("unset", None);
    req.add_list::<u64>("ids", &[]);
    req.add_list("user_id", &[1_u64, 2, 3]);

    assert_eq!(
        req.full_url(),
        "https://example.com/x.json?q=rust%20lang%26more&user_id=1%2C2%2C3"
    );
    assert_eq!(req.param("user_id"), Some("1,2,3"));
}

#[test]
fn favorites_rejects_zero_count() {
    let err = FavoritesQuery::new()
        .count(0_u32)
        .build_request(API)
        .unwrap_err();

    assert_eq!(err.param(), Some("count"));
}

#[test]
fn favorites_list_parameters() -> TestResult {
    let req = FavoritesQuery::new()
        .screen_name("JoeMayo")
        .count(20_u32)
        .tweet_mode(TweetMode::Extended)
        .build_request(API)?;

    assert_eq!(req.endpoint(), "https://api.twitter.com/1.1/favorites/list.json");
    assert_eq!(req.param("screen_name"), Some("JoeMayo"));
    assert_eq!(req.param("count"), Some("20"));
    assert_eq!(req.param("tweet_mode"), Some("extended"));
    Ok(())
}

#[test]
fn friendship_show_needs_source_and_target() -> TestResult {
    let missing_target = FriendshipQuery::new(FriendshipType::Show)
        .source_screen_name("Linq2Tweeter")
        .build_request(API)
        .unwrap_err();
    assert_eq!(missing_target.param(), Some("target_id or target_screen_name"));

    let req = FriendshipQuery::new(FriendshipType::Show)
        .source_screen_name("Linq2Tweeter")
        .target_id(15_411_837_u64)
        .build_request(API)?;
    assert_eq!(
        req.full_url(),
        "https://api.twitter.com/1.1/friendships/show.json?source_screen_name=Linq2Tweeter&target_id=15411837"
    );
    Ok(())
}

#[test]
fn friendship_show_maps_both_sides() -> TestResult {
    let query = FriendshipQuery::new(FriendshipType::Show);

    let friendship = query.process_results(fixture!("relationship.json"))?.remove(0);

    assert_eq!(friendship.kind, FriendshipType::Show);
    let source = friendship.source_relationship.expect("source");
    let target = friendship.target_relationship.expect("target");
    assert_eq!(source.screen_name, "Linq2Tweeter");
    assert!(source.following);
    assert_eq!(target.id, 15_411_837);
    assert!(target.followed_by);
    Ok(())
}

#[test]
fn friendship_lookup_joins_lists() -> TestResult {
    let req = FriendshipQuery::new(FriendshipType::Lookup)
        .screen_names(&["episod", "twitterapi"])
        .build_request(API)?;
    assert_eq!(req.param("screen_name"), Some("episod,twitterapi"));

    let lookup = FriendshipQuery::new(FriendshipType::Lookup)
        .process_results(fixture!("friendship_lookup.json"))?
        .remove(0);
    assert_eq!(lookup.relationships.len(), 2);
    assert_eq!(lookup.relationships[1].connections, vec!["following", "followed_by"]);

    let err = FriendshipQuery::new(FriendshipType::Lookup)
        .build_request(API)
        .unwrap_err();
    assert_eq!(err.param(), Some("screen_name or user_id"));
    Ok(())
}

#[test]
fn follower_ids_carry_cursors() -> TestResult {
    let query = FriendshipQuery::new(FriendshipType::FollowerIds)
        .screen_name("JoeMayo")
        .cursor(-1_i64);
    let req = query.build_request(API)?;
    assert_eq!(
        req.full_url(),
        "https://api.twitter.com/1.1/followers/ids.json?screen_name=JoeMayo&cursor=-1"
    );

    let ids = query.process_results(fixture!("follower_ids.json"))?.remove(0);
    assert_eq!(ids.ids.len(), 5);
    assert_eq!(ids.ids[0], 657_693);
    assert_eq!(ids.cursors.next_cursor, 1_374_004_777_531_007_833);
    assert_eq!(ids.cursors.previous_cursor, 0);
    Ok(())
}

#[test]
fn stringified_ids_still_parse() -> TestResult {
    let query = FriendshipQuery::new(FriendshipType::FriendIds).stringify_ids(true);
    assert_eq!(query.build_request(API)?.param("stringify_ids"), Some("true"));

    let ids = query
        .process_results(r#"{"ids":["15411837","16761255"],"next_cursor":0,"previous_cursor":0}"#)?
        .remove(0);
    assert_eq!(ids.ids, vec![15_411_837, 16_761_255]);
    Ok(())
}

#[test]
fn related_results_need_and_echo_status_id() -> TestResult {
    let err = RelatedResultsQuery::show(0).build_request(API).unwrap_err();
    assert_eq!(err.param(), Some("status_id"));

    let query = RelatedResultsQuery::show(161_946_690_084_028_416);
    assert_eq!(
        query.build_request(API)?.full_url(),
        "https://api.twitter.com/1.1/related_results/show/161946690084028416.json"
    );

    let groups = query.process_results(fixture!("related_results.json"))?;
    assert_eq!(groups[0].status_id, 161_946_690_084_028_416);
    assert_eq!(groups[0].group_name, "TweetsWithConversation");
    assert_eq!(groups[0].results[0].kind, "Tweet");
    Ok(())
}

#[test]
fn saved_search_endpoints() -> TestResult {
    assert_eq!(
        SavedSearchQuery::searches().build_request(API)?.full_url(),
        "https://api.twitter.com/1.1/saved_searches/list.json"
    );
    assert_eq!(
        SavedSearchQuery::show(9_569_704).build_request(API)?.full_url(),
        "https://api.twitter.com/1.1/saved_searches/show/9569704.json"
    );
    assert_eq!(
        SavedSearchQuery::show(0).build_request(API).unwrap_err().param(),
        Some("id")
    );

    let searches = SavedSearchQuery::searches().process_results(fixture!("saved_searches.json"))?;
    assert_eq!(searches.len(), 2);
    assert_eq!(searches[0].query, "@twitterapi");
    Ok(())
}

#[test]
fn search_requires_query_and_formats_until() -> TestResult {
    assert_eq!(
        SearchQuery::new("  ").build_request(API).unwrap_err().param(),
        Some("q")
    );

    let until = chrono::NaiveDate::from_ymd_opt(2018, 2, 26).expect("valid date");
    let req = SearchQuery::new("#BlackHistoryMonth")
        .result_type(ResultType::Recent)
        .count(10_u32)
        .until(until)
        .build_request(API)?;

    assert_eq!(
        req.full_url(),
        "https://api.twitter.com/1.1/search/tweets.json?q=%23BlackHistoryMonth&result_type=recent&count=10&until=2018-02-26"
    );
    Ok(())
}

#[test]
fn status_timelines_and_lookups() -> TestResult {
    let home = StatusQuery::home()
        .count(5_u32)
        .tweet_mode(TweetMode::Extended)
        .build_request(API)?;
    assert_eq!(
        home.full_url(),
        "https://api.twitter.com/1.1/statuses/home_timeline.json?count=5&tweet_mode=extended"
    );

    let retweets = StatusQuery::new(StatusType::Retweets)
        .id(386_260_731_214_622_721_u64)
        .build_request(API)?;
    assert_eq!(
        retweets.endpoint(),
        "https://api.twitter.com/1.1/statuses/retweets/386260731214622721.json"
    );

    let lookup = StatusQuery::lookup(&[1, 2]).build_request(API)?;
    assert_eq!(lookup.param("id"), Some("1,2"));

    assert_eq!(
        StatusQuery::new(StatusType::Show).build_request(API).unwrap_err().param(),
        Some("id")
    );
    assert_eq!(
        StatusQuery::new(StatusType::User).build_request(API).unwrap_err().param(),
        Some("user_id or screen_name")
    );
    Ok(())
}

#[test]
fn home_timeline_maps_statuses() -> TestResult {
    let statuses = StatusQuery::home().process_results(fixture!("home_timeline.json"))?;

    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].id, 386_260_731_214_622_721);
    assert_eq!(statuses[1].id, 386_239_054_334_255_104);
    Ok(())
}

#[test]
fn single_status_maps_as_one_entity() -> TestResult {
    let statuses = StatusQuery::show(1).process_results(fixture!("single_status.json"))?;

    assert_eq!(statuses.len(), 1);
    Ok(())
}

#[test]
fn user_queries_validate_their_keys() -> TestResult {
    assert_eq!(
        UserQuery::new(UserType::Show).build_request(API).unwrap_err().param(),
        Some("user_id or screen_name")
    );
    assert_eq!(
        UserQuery::new(UserType::Search).build_request(API).unwrap_err().param(),
        Some("q")
    );

    let lookup = UserQuery::new(UserType::Lookup)
        .user_ids(&[15_411_837, 16_761_255])
        .build_request(API)?;
    assert_eq!(
        lookup.full_url(),
        "https://api.twitter.com/1.1/users/lookup.json?user_id=15411837%2C16761255"
    );

    let search = UserQuery::search("joe mayo").page(2_u32).build_request(API)?;
    assert_eq!(search.param("q"), Some("joe mayo"));
    assert_eq!(search.param("page"), Some("2"));

    let users = UserQuery::new(UserType::Show).process_results(fixture!("single_user.json"))?;
    assert_eq!(users.len(), 1);
    Ok(())
}

#[test]
fn streaming_filter_needs_a_predicate() -> TestResult {
    let err = StreamingQuery::filter().build_request("https://stream.twitter.com/1.1/");
    assert_eq!(err.unwrap_err().param(), Some("track, follow or locations"));

    let req = StreamingQuery::filter()
        .track("rust")
        .filter_level(FilterLevel::Low)
        .build_request("https://stream.twitter.com/1.1/")?;
    assert_eq!(
        req.full_url(),
        "https://stream.twitter.com/1.1/statuses/filter.json?track=rust&filter_level=low"
    );

    Ok(())
}

#[test]
fn streaming_filter_rejects_blank_predicates() -> TestResult {
    let err = StreamingQuery::filter()
        .track("")
        .follow("")
        .build_request("https://stream.twitter.com/1.1/");
    assert_eq!(err.unwrap_err().param(), Some("track, follow or locations"));

    let req = StreamingQuery::filter()
        .track("")
        .follow("15411837")
        .build_request("https://stream.twitter.com/1.1/")?;
    assert_eq!(
        req.full_url(),
        "https://stream.twitter.com/1.1/statuses/filter.json?follow=15411837"
    );
    Ok(())
}

#[test]
fn sample_stream_url() -> TestResult {
    let sample = StreamingQuery::sample().stall_warnings(true);
    assert_eq!(sample.base(), BaseUrl::Stream);
    assert_eq!(
        sample.build_request("https://stream.twitter.com/1.1/")?.full_url(),
        "https://stream.twitter.com/1.1/statuses/sample.json?stall_warnings=true"
    );
    Ok(())
}

#[test]
fn http_method_renders_uppercase() {
    assert_eq!(HttpMethod::Post.to_string(), "POST");
    assert_eq!(HttpMethod::Delete.as_ref(), "DELETE");
}
