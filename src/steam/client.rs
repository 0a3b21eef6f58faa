use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::{Error, FileDetailsResponse, Result, WorkshopId};

const FILE_DETAILS_PATH: &str = "/ISteamRemoteStorage/GetPublishedFileDetails/v1/";

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    response: FileDetailsResponse,
}

/// Unauthenticated client for the Steam Web API.
#[derive(Debug, Clone)]
pub struct SteamClient {
    http: Client,
    api_base: String,
}

impl SteamClient {
    pub fn new(http: Client, api_base: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
        }
    }

    /// Look up download metadata for a batch of workshop items in one POST.
    ///
    /// A non-200 reply is reported as [`Error::NonOkStatus`] and its body is
    /// never read.
    pub fn get_published_file_details(&self, ids: &[WorkshopId]) -> Result<FileDetailsResponse> {
        let url = format!("{}{}", self.api_base, FILE_DETAILS_PATH);
        debug!(%url, items = ids.len(), "requesting published file details");

        let response = self.http.post(&url).form(&details_form(ids)).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::NonOkStatus(status));
        }

        let body = response.bytes()?;
        let envelope: Envelope = serde_json::from_slice(&body)?;
        Ok(envelope.response)
    }
}

fn details_form(ids: &[WorkshopId]) -> Vec<(String, String)> {
    let mut form = Vec::with_capacity(ids.len() + 1);
    form.push(("itemcount".to_string(), ids.len().to_string()));
    for (i, id) in ids.iter().enumerate() {
        form.push((format!("publishedfileids[{}]", i), id.to_string()));
    }
    form
}
