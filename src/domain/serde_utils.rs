//! Serde utilities for API payloads.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses the timestamp shapes the API and the date inputs produce.
///
/// Accepts naive timestamps (with or without fractional seconds), RFC 3339
/// timestamps (converted to UTC) and bare `YYYY-MM-DD` dates (midnight).
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = value.parse::<NaiveDateTime>() {
        return Some(parsed);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Module to handle timestamps that might arrive naive, zoned or date-only.
pub mod api_datetime {
    use super::{
        Deserializer, NaiveDateTime, Serializer, Visitor, WIRE_FORMAT, de, fmt, parse_timestamp,
    };

    /// Serializes a timestamp in the naive ISO form the API stores.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(WIRE_FORMAT).to_string())
    }

    /// Deserializes a timestamp from any accepted string shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string or cannot be parsed.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = NaiveDateTime;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an ISO 8601 timestamp or date")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_timestamp(value)
                    .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {value}")))
            }
        }

        deserializer.deserialize_str(TimestampVisitor)
    }

    /// Optional timestamps; empty strings read as `None`.
    pub mod option {
        use super::{Deserializer, NaiveDateTime, Serializer, Visitor, de, fmt, parse_timestamp};

        /// Serializes an optional timestamp.
        ///
        /// # Errors
        ///
        /// Returns an error if the serializer fails.
        #[allow(clippy::ref_option)]
        pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(v) => super::serialize(v, serializer),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional timestamp.
        ///
        /// # Errors
        ///
        /// Returns an error if a present value cannot be parsed.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct OptionVisitor;

            impl<'de> Visitor<'de> for OptionVisitor {
                type Value = Option<NaiveDateTime>;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("optional timestamp")
                }

                fn visit_none<E>(self) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Ok(None)
                }

                fn visit_unit<E>(self) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Ok(None)
                }

                fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    deserializer.deserialize_str(self)
                }

                fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    if value.trim().is_empty() {
                        return Ok(None);
                    }
                    parse_timestamp(value)
                        .map(Some)
                        .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {value}")))
                }
            }

            deserializer.deserialize_option(OptionVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "api_datetime")]
        at: NaiveDateTime,
        #[serde(default, with = "api_datetime::option")]
        until: Option<NaiveDateTime>,
    }

    #[test]
    fn test_parse_naive_with_fraction() {
        let parsed = parse_timestamp("2025-07-14T10:30:00.123456").unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), "2025-07-14 10:30");
    }

    #[test]
    fn test_parse_rfc3339_converts_to_utc() {
        let parsed = parse_timestamp("2025-07-14T10:30:00+02:00").unwrap();
        assert_eq!(parsed.format("%H:%M").to_string(), "08:30");
    }

    #[test]
    fn test_parse_date_only() {
        let parsed = parse_timestamp("2025-08-15").unwrap();
        assert_eq!(parsed.format("%Y-%m-%dT%H:%M:%S").to_string(), "2025-08-15T00:00:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("next tuesday").is_none());
        assert!(parse_timestamp("   ").is_none());
    }

    #[test]
    fn test_optional_field_accepts_null_and_empty() {
        let with_null: Stamped =
            serde_json::from_str(r#"{"at":"2025-07-14T00:00:00","until":null}"#).unwrap();
        assert!(with_null.until.is_none());

        let with_empty: Stamped =
            serde_json::from_str(r#"{"at":"2025-07-14","until":""}"#).unwrap();
        assert!(with_empty.until.is_none());

        let missing: Stamped = serde_json::from_str(r#"{"at":"2025-07-14"}"#).unwrap();
        assert!(missing.until.is_none());
    }

    #[test]
    fn test_serializes_naive_wire_format() {
        let value = Stamped {
            at: parse_timestamp("2025-07-14T08:15:00Z").unwrap(),
            until: None,
        };
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"at":"2025-07-14T08:15:00","until":null}"#);
    }
}
