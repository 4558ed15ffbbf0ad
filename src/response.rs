//! Typed entities mapped from the API's JSON responses.
//!
//! Fields the API may omit or send as `null` are `Option`s or fall back to their defaults, so
//! older and newer payload shapes both map cleanly.  Timestamps in the API's
//! `Sun Jul 13 04:35:50 +0000 2008` format become UTC `DateTime`s.
mod account;
mod api_error;
mod date;
mod entities;
mod friendship;
mod media;
mod rate_limit;
mod related_results;
mod saved_search;
mod search;
mod status;
mod user;

pub use account::{Account, PlaceType, Settings, SleepTime, TrendLocation, UserTimeZone};
pub use api_error::ApiError;
pub use entities::{Entities, HashtagEntity, MediaEntity, MediaSize, MentionEntity, UrlEntity};
pub use friendship::{Cursors, Friendship, IdList, Relationship, RelationshipPair, UserList};
pub use media::{Media, MediaImage, MediaVideo, ProcessingInfo};
pub use rate_limit::RateLimit;
pub use related_results::{RelatedResult, RelatedResults};
pub use saved_search::SavedSearch;
pub use search::{Search, SearchMetadata};
pub use status::{BoundingBox, Coordinates, Place, Status};
pub use user::{User, UserEntities, UrlEntities};

pub(crate) use api_error::parse_api_errors;
pub(crate) use date::twitter_date;
pub(crate) use friendship::RelationshipEnvelope;

#[cfg(test)]
mod test;
