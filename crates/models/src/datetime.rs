//! Serde helpers for the `dueDate` field.
//!
//! Values are local date-times without an offset. Output uses chrono's default
//! `YYYY-MM-DDTHH:MM:SS[.fff]`; input additionally accepts the minute-precision form
//! browsers send from `datetime-local` inputs, and treats `""` like `null`.

use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer};

const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

pub fn parse_local(s: &str) -> Option<NaiveDateTime> {
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_local(s).map(Some).ok_or_else(|| {
            de::Error::custom(format!("invalid date-time `{s}`, expected YYYY-MM-DDTHH:MM[:SS]"))
        }),
    }
}
