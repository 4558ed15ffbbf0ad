use super::ApiError;
use serde::{Deserialize, Serialize};

/// An uploaded media item.  Pass `media_id` in a tweet's `media_ids`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Media {
    pub media_id: u64,
    pub media_id_string: String,
    pub size: Option<u64>,
    pub expires_after_secs: Option<u64>,
    pub image: Option<MediaImage>,
    pub video: Option<MediaVideo>,
    pub processing_info: Option<ProcessingInfo>,
}

impl Media {
    /// True while asynchronous processing (video, GIF) is still pending.
    pub fn is_processing(&self) -> bool {
        matches!(
            self.processing_info.as_ref().map(|info| info.state.as_str()),
            Some("pending") | Some("in_progress")
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MediaImage {
    pub image_type: String,
    pub w: u32,
    pub h: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MediaVideo {
    pub video_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ProcessingInfo {
    pub state: String,
    pub check_after_secs: Option<u64>,
    pub progress_percent: Option<u8>,
    pub error: Option<ApiError>,
}
