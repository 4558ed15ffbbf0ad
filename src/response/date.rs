/// `(de)serialize_with` helpers for the API's `created_at` format.
pub(crate) mod twitter_date {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub(crate) const FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

    pub(crate) fn parse(input: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_str(input, FORMAT).map(|date| date.with_timezone(&Utc))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) if !text.is_empty() => parse(&text).map(Some).map_err(de::Error::custom),
            _ => Ok(None),
        }
    }

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }
}
