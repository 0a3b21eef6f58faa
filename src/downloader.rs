use std::path::PathBuf;

use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::gmad::{Extractor, LazyGmad};
use crate::steam::SteamClient;
use crate::storage::download_file;
use crate::{find_workshop_id, Config, Error, FileDetail, Result, WorkshopId};

/// Drives lookup, download and extraction for each input in turn.
///
/// The first failure ends the run; nothing already written is removed.
pub struct Downloader<X = LazyGmad> {
    config: Config,
    http: Client,
    steam: SteamClient,
    extractor: X,
}

impl Downloader<LazyGmad> {
    pub fn new(config: Config) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self::with_extractor(config, http, LazyGmad::new()))
    }
}

impl<X: Extractor> Downloader<X> {
    pub fn with_extractor(config: Config, http: Client, extractor: X) -> Self {
        let steam = SteamClient::new(http.clone(), config.api_base.clone());
        Self {
            config,
            http,
            steam,
            extractor,
        }
    }

    pub fn extractor(&self) -> &X {
        &self.extractor
    }

    /// Process each input independently. Inputs without a workshop id are
    /// skipped. Returns every file written, in order.
    pub fn run<S: AsRef<str>>(&self, inputs: &[S]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for input in inputs {
            let input = input.as_ref();
            match find_workshop_id(input) {
                Some(id) => written.extend(self.download_addons(&[id])?),
                None => warn!("No workshop id found in {:?}, skipping", input),
            }
        }
        Ok(written)
    }

    pub fn download_addons(&self, ids: &[WorkshopId]) -> Result<Vec<PathBuf>> {
        info!("Fetching file details for {:?}", ids.iter().map(WorkshopId::as_str).collect::<Vec<_>>());
        let details = self.steam.get_published_file_details(ids)?;

        let mut written = Vec::with_capacity(details.published_file_details.len());
        for (i, detail) in details.published_file_details.iter().enumerate() {
            written.push(self.download_addon(detail, ids.get(i))?);
        }
        Ok(written)
    }

    fn download_addon(&self, detail: &FileDetail, requested: Option<&WorkshopId>) -> Result<PathBuf> {
        if !detail.has_download() {
            return Err(Error::MissingDownload {
                id: detail.published_file_id.clone(),
                result: detail.result,
            });
        }

        info!("Downloading {}", detail.title);
        let out = self.config.output_dir.join(output_filename(detail, requested));
        download_file(&self.http, &detail.file_url, &out)?;

        if self.config.extract {
            info!("File downloaded {:?}. Extracting with gmad", out);
            self.extractor.extract(&out)?;
        } else {
            info!("File downloaded {:?}", out);
        }
        Ok(out)
    }
}

/// Flatten a remote filename into a single path component.
pub fn normalize_filename(filename: &str) -> String {
    filename.replace(['/', '\\'], "_")
}

// The fallback is built from a parsed WorkshopId (digits only) so it stays a
// single component no matter what the reply carried.
fn output_filename(detail: &FileDetail, requested: Option<&WorkshopId>) -> String {
    let name = normalize_filename(&detail.filename);
    match name.as_str() {
        "" | "." | ".." => {
            let id = detail
                .published_file_id
                .parse::<WorkshopId>()
                .ok()
                .or_else(|| requested.cloned());
            let fallback = match id {
                Some(id) => format!("{}.gma", id),
                None => "addon.gma".to_string(),
            };
            warn!("Unusable filename {:?}, saving as {}", detail.filename, fallback);
            fallback
        }
        _ => name,
    }
}
