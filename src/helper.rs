use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::errors::AppError;

/// Length of `YYYY-MM-DDTHH:MM:SS`.
pub const TIMESTAMP_DISPLAY_LEN: usize = 19;

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Date and time without sub-second precision or offset.
pub fn short_timestamp(timestamp: &DateTime<Utc>) -> String {
    let full = timestamp.format("%Y-%m-%dT%H:%M:%S%.f").to_string();
    full.chars().take(TIMESTAMP_DISPLAY_LEN).collect()
}

pub fn default_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Accepts RFC 3339 timestamps and naive ISO-8601 ones (read as UTC).
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt {
        Some(s) => parse_timestamp(&s).map_err(serde::de::Error::custom),
        None => Ok(Utc::now()),
    }
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(_) => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc()),
    }
}
