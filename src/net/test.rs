use super::upload::{finalize_params, init_params, media_id, segments};
use super::*;
use crate::auth::{CredentialStore, SingleUserAuthorizer};
use crate::response::ApiError;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn attachment(data: &[u8]) -> Attachment<'_> {
    Attachment {
        data,
        name: "media",
        file_name: "clip.mp4",
        content_type: "video/mp4",
    }
}

fn pairs(params: &[(String, String)]) -> Vec<(&str, &str)> {
    params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

#[test]
fn init_lists_type_category_shared_and_size() {
    let data = vec![0_u8; 1_200_000];
    let extra = vec![("additional_owners".to_string(), "15411837".to_string())];

    let params = init_params(attachment(&data), Some("tweet_video"), true, &extra);

    assert_eq!(
        pairs(&params),
        vec![
            ("command", "INIT"),
            ("media_type", "video/mp4"),
            ("media_category", "tweet_video"),
            ("shared", "true"),
            ("total_bytes", "1200000"),
            ("additional_owners", "15411837"),
        ]
    );
}

#[test]
fn init_omits_unset_category_and_unshared() {
    let params = init_params(attachment(b"gif"), None, false, &[]);

    assert_eq!(
        pairs(&params),
        vec![("command", "INIT"), ("media_type", "video/mp4"), ("total_bytes", "3")]
    );
}

#[test]
fn media_is_cut_into_numbered_chunks() {
    let data = vec![7_u8; CHUNK_SIZE * 2 + 10];

    let chunks: Vec<(usize, usize)> = segments(&data).map(|(i, c)| (i, c.len())).collect();

    assert_eq!(chunks, vec![(0, CHUNK_SIZE), (1, CHUNK_SIZE), (2, 10)]);
}

#[test]
fn empty_media_has_no_chunks() {
    assert_eq!(segments(&[]).count(), 0);
}

#[test]
fn media_id_from_number_or_string() -> TestResult {
    assert_eq!(media_id(r#"{"media_id":710511363345354753}"#)?, 710_511_363_345_354_753);
    assert_eq!(media_id(r#"{"media_id_string":"42"}"#)?, 42);
    assert!(matches!(
        media_id(r#"{"expires_after_secs":86400}"#),
        Err(TwitterErr::MissingMediaId(_))
    ));
    assert!(matches!(media_id("<html>"), Err(TwitterErr::Json(_))));
    Ok(())
}

#[test]
fn finalize_names_the_media() {
    assert_eq!(
        pairs(&finalize_params(42)),
        vec![("command", "FINALIZE"), ("media_id", "42")]
    );
}

#[test]
fn api_error_display_lists_messages() {
    let err = TwitterErr::Api {
        status: 404,
        url: "https://api.twitter.com/1.1/users/show.json".to_string(),
        errors: vec![ApiError {
            code: 34,
            message: "Sorry, that page does not exist".to_string(),
        }],
        body: String::new(),
    };

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.api_errors()[0].code, 34);
    assert_eq!(
        err.to_string(),
        "https://api.twitter.com/1.1/users/show.json responded with 404: \
         Sorry, that page does not exist (code 34)"
    );
}

#[test]
fn executor_starts_without_a_last_response() -> TestResult {
    let creds = CredentialStore::new("key", "secret").with_token("token", "token-secret");
    let exec = TwitterExecute::new(
        Arc::new(SingleUserAuthorizer::new(creds)),
        &Endpoints::default(),
    )?;

    assert_eq!(exec.last_response(), LastResponse::default());
    assert!(exec.authorizer().is_authorized());
    Ok(())
}
