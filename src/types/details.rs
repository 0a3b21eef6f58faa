use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `ISteamRemoteStorage/GetPublishedFileDetails`, minus the
/// `"response"` envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDetailsResponse {
    pub result: i32,
    #[serde(rename = "resultcount")]
    pub result_count: u32,
    #[serde(rename = "publishedfiledetails")]
    pub published_file_details: Vec<FileDetail>,
}

/// One published workshop item.
///
/// Steam leaves most of these out for items it could not find, so every
/// field falls back to its zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDetail {
    #[serde(rename = "publishedfileid")]
    pub published_file_id: String,
    pub result: i32,
    pub creator: String,
    #[serde(deserialize_with = "lenient")]
    pub creator_app_id: u32,
    #[serde(deserialize_with = "lenient")]
    pub consumer_app_id: u32,
    pub filename: String,
    #[serde(deserialize_with = "lenient")]
    pub file_size: u64,
    pub file_url: String,
    pub hcontent_file: String,
    pub preview_url: String,
    pub hcontent_preview: String,
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "unix_time")]
    pub time_created: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "unix_time")]
    pub time_updated: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient")]
    pub visibility: i32,
    #[serde(deserialize_with = "flag")]
    pub banned: bool,
    pub ban_reason: String,
    #[serde(deserialize_with = "lenient")]
    pub subscriptions: u64,
    #[serde(deserialize_with = "lenient")]
    pub favorited: u64,
    #[serde(deserialize_with = "lenient")]
    pub lifetime_subscriptions: u64,
    #[serde(deserialize_with = "lenient")]
    pub lifetime_favorited: u64,
    #[serde(deserialize_with = "lenient")]
    pub views: u64,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub tag: String,
}

impl FileDetail {
    pub fn has_download(&self) -> bool {
        !self.file_url.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    String(String),
}

// Steam is inconsistent about quoting numbers (file_size in particular).
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr + Default,
    T::Err: std::fmt::Display,
{
    match Option::<NumberOrString<T>>::deserialize(deserializer)? {
        None => Ok(T::default()),
        Some(NumberOrString::Number(n)) => Ok(n),
        Some(NumberOrString::String(s)) if s.is_empty() => Ok(T::default()),
        Some(NumberOrString::String(s)) => s.parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrNumber {
    Bool(bool),
    Number(i64),
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<BoolOrNumber>::deserialize(deserializer)? {
        Some(BoolOrNumber::Bool(b)) => b,
        Some(BoolOrNumber::Number(n)) => n != 0,
        None => false,
    })
}

fn unix_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let secs: i64 = lenient(deserializer)?;
    if secs <= 0 {
        return Ok(None);
    }
    Ok(DateTime::from_timestamp(secs, 0))
}
