//! Join date encoding and decoding.
//!
//! Employee records store the join date as `dd/mm/yyyy` text. This module
//! converts between that representation and [`NaiveDate`], and provides serde
//! adapters so models can serialize dates in the same form.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Length of a well-formed `dd/mm/yyyy` string.
const JOIN_DATE_LEN: usize = 10;

/// Decodes a `dd/mm/yyyy` join date.
///
/// The input must be exactly two digits, `/`, two digits, `/`, four digits,
/// and must name a real calendar date. Dates such as `31/02/2020` are
/// rejected rather than rolled over into the following month.
///
/// # Errors
///
/// Returns [`EngineError::FormatError`] when the text has the wrong shape or
/// the day/month/year combination does not exist.
///
/// # Example
///
/// ```
/// use milestone_engine::calculation::decode_join_date;
/// use chrono::NaiveDate;
///
/// let date = decode_join_date("05/03/2015").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2015, 3, 5).unwrap());
///
/// assert!(decode_join_date("2015-03-05").is_err());
/// assert!(decode_join_date("31/02/2020").is_err());
/// ```
pub fn decode_join_date(text: &str) -> EngineResult<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() != JOIN_DATE_LEN || bytes[2] != b'/' || bytes[5] != b'/' {
        return Err(format_error(text, "expected dd/mm/yyyy"));
    }

    let day = parse_digits(text, &bytes[0..2])?;
    let month = parse_digits(text, &bytes[3..5])?;
    let year = parse_digits(text, &bytes[6..10])?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| format_error(text, "not a valid calendar date"))
}

/// Encodes a date as `dd/mm/yyyy`.
///
/// Day and month are zero-padded to two digits and the year to four.
///
/// # Example
///
/// ```
/// use milestone_engine::calculation::encode_join_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
/// assert_eq!(encode_join_date(date), "01/01/2027");
/// ```
pub fn encode_join_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

fn parse_digits(text: &str, digits: &[u8]) -> EngineResult<u32> {
    digits.iter().try_fold(0u32, |acc, &b| {
        if b.is_ascii_digit() {
            Ok(acc * 10 + u32::from(b - b'0'))
        } else {
            Err(format_error(text, "expected dd/mm/yyyy"))
        }
    })
}

fn format_error(text: &str, message: &str) -> EngineError {
    EngineError::FormatError {
        input: text.to_string(),
        message: message.to_string(),
    }
}

/// Serde adapter for a [`NaiveDate`] field stored as `dd/mm/yyyy`.
///
/// Use with `#[serde(with = "join_date_format")]`.
pub mod join_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes the date as `dd/mm/yyyy`.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode_join_date(*date))
    }

    /// Deserializes a `dd/mm/yyyy` string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::decode_join_date(&text).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for an optional `dd/mm/yyyy` date.
pub mod option_join_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes the date as `dd/mm/yyyy`, or `null` when absent.
    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_some(&super::encode_join_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional `dd/mm/yyyy` string.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|text| super::decode_join_date(&text).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Serde adapter for a list of `dd/mm/yyyy` dates.
pub mod join_date_list_format {
    use chrono::NaiveDate;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes each date as `dd/mm/yyyy`.
    pub fn serialize<S: Serializer>(dates: &[NaiveDate], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(dates.len()))?;
        for date in dates {
            seq.serialize_element(&super::encode_join_date(*date))?;
        }
        seq.end()
    }

    /// Deserializes a list of `dd/mm/yyyy` strings.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<NaiveDate>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|text| super::decode_join_date(text).map_err(serde::de::Error::custom))
            .collect()
    }
}

/// Deserializer for a join date field as records store it.
///
/// Older records hold the join year as a JSON number. Numbers are kept as
/// their decimal text so the record still loads and later degrades when
/// decoded. Use with `#[serde(deserialize_with = "stored_join_date::deserialize")]`.
pub mod stored_join_date {
    use std::fmt;

    use serde::Deserializer;
    use serde::de::{self, Visitor};

    struct StoredJoinDateVisitor;

    impl Visitor<'_> for StoredJoinDateVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a dd/mm/yyyy string or a numeric join year")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    /// Deserializes a string as is, or an integer as its decimal text.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_any(StoredJoinDateVisitor)
    }
}
