//! Datetime serialization helpers.
//!
//! - Serialization: `DateTime<Utc>` -> RFC3339 string
//! - Deserialization: RFC3339 string or Unix timestamp (seconds) -> `DateTime<Utc>`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserializes `DateTime<Utc>` from RFC3339 or a Unix timestamp in seconds.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TimestampOrString {
        String(String),
        I64(i64),
    }

    match TimestampOrString::deserialize(deserializer)? {
        TimestampOrString::String(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        TimestampOrString::I64(ts) => DateTime::from_timestamp(ts, 0)
            .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
    }
}

/// `Option<DateTime<Utc>>` serializer/deserializer helpers.
pub mod option {
    use super::{DateTime, Deserialize, Deserializer, Serializer, Utc};

    /// Serializes `Option<DateTime<Utc>>` as RFC3339 or `null`.
    pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes `Option<DateTime<Utc>>` from RFC3339, Unix timestamp, or `null`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OptionalTimestamp {
            String(String),
            I64(i64),
        }

        match Option::<OptionalTimestamp>::deserialize(deserializer)? {
            Some(OptionalTimestamp::String(s)) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
            Some(OptionalTimestamp::I64(ts)) => DateTime::from_timestamp(ts, 0)
                .map(Some)
                .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        ts: DateTime<Utc>,
    }

    #[test]
    fn test_roundtrip_rfc3339() {
        let json = r#"{"ts":"2024-01-15T08:00:00+00:00"}"#;
        let w: Wrapper = serde_json::from_str(json).unwrap();
        assert_eq!(w.ts.timestamp(), 1_705_305_600);
        assert_eq!(serde_json::to_string(&w).unwrap(), json);
    }

    #[test]
    fn test_deserialize_unix_seconds() {
        let w: Wrapper = serde_json::from_str(r#"{"ts":1705305600}"#).unwrap();
        assert_eq!(w.ts.timestamp(), 1_705_305_600);
    }

    #[test]
    fn test_invalid_string_rejected() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"ts":"yesterday"}"#).is_err());
    }
}
