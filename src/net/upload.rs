//! The pieces of a chunked media upload that do not touch the network.
use super::{Attachment, TwitterErr};
use serde::Deserialize;

/// Bytes sent per APPEND.
pub const CHUNK_SIZE: usize = 500_000;

#[derive(Deserialize)]
struct InitResponse {
    media_id: Option<u64>,
    media_id_string: Option<String>,
}

pub(super) fn init_params(
    media: Attachment<'_>,
    media_category: Option<&str>,
    shared: bool,
    extra: &[(String, String)],
) -> Vec<(String, String)> {
    let mut params = vec![
        ("command".to_string(), "INIT".to_string()),
        ("media_type".to_string(), media.content_type.to_string()),
    ];
    if let Some(category) = media_category.filter(|c| !c.is_empty()) {
        params.push(("media_category".to_string(), category.to_string()));
    }
    if shared {
        params.push(("shared".to_string(), "true".to_string()));
    }
    params.push(("total_bytes".to_string(), media.data.len().to_string()));
    params.extend(extra.iter().cloned());
    params
}

pub(super) fn finalize_params(media_id: u64) -> Vec<(String, String)> {
    vec![
        ("command".to_string(), "FINALIZE".to_string()),
        ("media_id".to_string(), media_id.to_string()),
    ]
}

/// Numbered chunks of `data`; nothing at all for empty media.
pub(super) fn segments(data: &[u8]) -> impl Iterator<Item = (usize, &[u8])> {
    data.chunks(CHUNK_SIZE).enumerate()
}

pub(super) fn media_id(init_body: &str) -> Result<u64, TwitterErr> {
    let init: InitResponse = serde_json::from_str(init_body)?;
    init.media_id
        .or_else(|| init.media_id_string.and_then(|id| id.parse().ok()))
        .ok_or_else(|| TwitterErr::MissingMediaId(init_body.to_string()))
}
