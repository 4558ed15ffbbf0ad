use kvitter::net::CHUNK_SIZE;
use kvitter::{
    AccountQuery, CredentialStore, Endpoints, Error, SingleUserAuthorizer, StreamMessage,
    StreamingQuery, TwitterContext, TwitterErr,
};

use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use warp::http::{Method, Response};
use warp::path::FullPath;
use warp::Filter;

type TestResult = Result<(), Box<dyn std::error::Error>>;

macro_rules! fixture {
    ($name:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/", $name))
    };
}

/// Starts a local server for `routes` and points every endpoint at it.
macro_rules! serve {
    ($routes:expr) => {{
        let (addr, server) = warp::serve($routes).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        Endpoints::with_root(&format!("http://{}", addr))
    }};
}

/// One request as the mock API saw it.
#[derive(Debug, Clone)]
struct Seen {
    method: Method,
    path: String,
    query: HashMap<String, String>,
    authorization: Option<String>,
    content_type: Option<String>,
    body: String,
}

type Log = Arc<Mutex<Vec<Seen>>>;

fn recorder(log: Log) -> impl Filter<Extract = (Seen,), Error = warp::Rejection> + Clone {
    warp::method()
        .and(warp::path::full())
        .and(warp::query::<HashMap<String, String>>())
        .and(warp::header::optional::<String>("authorization"))
        .and(warp::header::optional::<String>("content-type"))
        .and(warp::body::bytes())
        .map(
            move |method: Method,
                  path: FullPath,
                  query: HashMap<String, String>,
                  authorization: Option<String>,
                  content_type: Option<String>,
                  body: Bytes| {
                let seen = Seen {
                    method,
                    path: path.as_str().to_string(),
                    query,
                    authorization,
                    content_type,
                    body: String::from_utf8_lossy(&body).into_owned(),
                };
                log.lock().expect("request log").push(seen.clone());
                seen
            },
        )
}

fn json(status: u16, body: &str) -> Response<String> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json; charset=utf-8")
        .header("x-rate-limit-limit", "15")
        .header("x-rate-limit-remaining", "14")
        .body(body.to_string())
        .expect("mock response")
}

fn context(endpoints: Endpoints) -> Result<TwitterContext, Error> {
    let creds = CredentialStore::new("key", "secret").with_token("token", "token secret");
    TwitterContext::new(Arc::new(SingleUserAuthorizer::new(creds)), endpoints)
}

fn requests(log: &Log) -> Vec<Seen> {
    log.lock().expect("request log").clone()
}

#[tokio::test]
async fn verify_credentials_is_signed_and_mapped() -> TestResult {
    let log = Log::default();
    let endpoints = serve!(recorder(log.clone()).map(|_| json(200, fixture!("verify_credentials.json"))));
    let ctx = context(endpoints)?;

    let accounts = ctx
        .query(&AccountQuery::verify_credentials().skip_status(true))
        .await?;

    assert_eq!(accounts.len(), 1);
    assert_eq!(
        accounts[0].user.as_ref().map(|u| u.screen_name.as_str()),
        Some("JoeMayo")
    );
    assert!(accounts[0].skip_status);

    let seen = requests(&log);
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, Method::GET);
    assert_eq!(seen[0].path, "/1.1/account/verify_credentials.json");
    assert_eq!(seen[0].query.get("skip_status").map(String::as_str), Some("true"));
    let authorization = seen[0].authorization.clone().unwrap_or_default();
    assert!(authorization.starts_with("OAuth "));
    assert!(authorization.contains("oauth_consumer_key=\"key\""));
    assert!(authorization.contains("oauth_token=\"token\""));
    assert!(authorization.contains("oauth_signature_method=\"HMAC-SHA1\""));
    assert!(authorization.contains("oauth_signature=\""));

    let last = ctx.executor().last_response();
    assert_eq!(last.status, 200);
    assert_eq!(last.rate_limit.limit, Some(15));
    assert_eq!(last.rate_limit.remaining, Some(14));
    Ok(())
}

#[tokio::test]
async fn api_errors_keep_status_and_messages() -> TestResult {
    let log = Log::default();
    let body = r#"{"errors":[{"code":32,"message":"Could not authenticate you."}]}"#;
    let endpoints = serve!(recorder(log.clone()).map(move |_| json(401, body)));
    let ctx = context(endpoints)?;

    let err = ctx
        .query(&AccountQuery::settings())
        .await
        .expect_err("a 401 must not map to entities");

    match err {
        Error::Twitter(TwitterErr::Api { status, errors, .. }) => {
            assert_eq!(status, 401);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].code, 32);
            assert_eq!(errors[0].message, "Could not authenticate you.");
        }
        other => panic!("expected an API error, got {:?}", other),
    }
    assert_eq!(ctx.executor().last_response().status, 401);
    Ok(())
}

#[tokio::test]
async fn commands_post_signed_forms() -> TestResult {
    let log = Log::default();
    let endpoints = serve!(recorder(log.clone()).map(|_| json(200, fixture!("single_status.json"))));
    let ctx = context(endpoints)?;

    let status = ctx.tweet("kvitter").await?;

    assert_eq!(status.id_str, "184835136037191681");
    let seen = requests(&log);
    assert_eq!(seen[0].method, Method::POST);
    assert_eq!(seen[0].path, "/1.1/statuses/update.json");
    assert_eq!(
        seen[0].content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(seen[0].body, "status=kvitter");
    assert!(seen[0].authorization.is_some());
    Ok(())
}

#[tokio::test]
async fn stream_lines_arrive_as_messages() -> TestResult {
    let log = Log::default();
    let endpoints = serve!(recorder(log.clone()).map(|_| {
        Response::builder()
            .status(200)
            .body(fixture!("stream_sample.txt").to_string())
            .expect("mock response")
    }));
    let ctx = context(endpoints)?;
    let statuses = Mutex::new(0);

    let delivered = ctx
        .start_stream(&StreamingQuery::sample(), |content| {
            if let StreamMessage::Status(_) = content.message {
                *statuses.lock().expect("counter") += 1;
            }
            async {}
        })
        .await?;

    let expected = fixture!("stream_sample.txt")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count();
    assert_eq!(delivered, expected);
    assert!(*statuses.lock().expect("counter") >= 1);
    assert_eq!(requests(&log)[0].path, "/1.1/statuses/sample.json");
    Ok(())
}

#[tokio::test]
async fn stream_closes_from_the_callback() -> TestResult {
    let endpoints = serve!(warp::any().map(|| fixture!("stream_sample.txt")));
    let ctx = context(endpoints)?;

    let delivered = ctx
        .start_stream(&StreamingQuery::sample(), |content| {
            content.close_stream();
            async {}
        })
        .await?;

    assert_eq!(delivered, 1);
    Ok(())
}

#[tokio::test]
async fn media_uploads_in_chunks() -> TestResult {
    let log = Log::default();
    let endpoints = serve!(recorder(log.clone()).map(|seen: Seen| {
        let multipart = seen
            .content_type
            .as_deref()
            .map_or(false, |ct| ct.starts_with("multipart/form-data"));
        if multipart {
            json(204, "")
        } else if seen.body.contains("command=INIT") {
            json(
                202,
                r#"{"media_id":710511363345354753,"media_id_string":"710511363345354753","expires_after_secs":86400}"#,
            )
        } else {
            json(201, fixture!("media_upload.json"))
        }
    }));
    let ctx = context(endpoints)?;
    let data = vec![b'x'; CHUNK_SIZE + 10];

    let media = ctx
        .upload_media(&data, "image/png", Some("tweet_image"), false, &[])
        .await?;

    assert_eq!(media.media_id, 710_511_363_345_354_753);
    let seen = requests(&log);
    assert_eq!(seen.len(), 4);
    assert!(seen.iter().all(|s| s.path == "/1.1/media/upload.json"));

    assert!(seen[0].body.contains("command=INIT"));
    assert!(seen[0].body.contains("media_type=image%2Fpng"));
    assert!(seen[0].body.contains("media_category=tweet_image"));
    assert!(seen[0].body.contains(&format!("total_bytes={}", CHUNK_SIZE + 10)));

    for (index, append) in seen[1..3].iter().enumerate() {
        assert!(append.body.contains("APPEND"));
        assert!(append.body.contains("name=\"segment_index\""));
        assert!(append.body.contains(&format!("\r\n\r\n{}\r\n", index)));
        assert!(append.authorization.is_some());
    }

    assert!(seen[3].body.contains("command=FINALIZE"));
    assert!(seen[3].body.contains("media_id=710511363345354753"));
    Ok(())
}
