#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Form, Router,
};
use tokio::runtime::Runtime;
use xz2::stream::{LzmaOptions, Stream};
use xz2::write::XzEncoder;

pub const DETAILS_PATH: &str = "/ISteamRemoteStorage/GetPublishedFileDetails/v1/";

pub fn lzma(data: &[u8]) -> Vec<u8> {
    let options = LzmaOptions::new_preset(6).unwrap();
    let stream = Stream::new_lzma_encoder(&options).unwrap();
    let mut encoder = XzEncoder::new_stream(Vec::new(), stream);
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// What the fake Steam API should answer with.
#[derive(Clone)]
pub enum DetailsReply {
    Json(String),
    Status(StatusCode, String),
}

/// Fake Steam API plus file host, served from its own runtime so the
/// blocking client under test can run on the test thread.
pub struct TestSteam {
    base: String,
    forms: Arc<Mutex<Vec<HashMap<String, String>>>>,
    _runtime: Runtime,
}

impl TestSteam {
    pub fn spawn(details: DetailsReply, files: Vec<(&str, Vec<u8>)>) -> Self {
        let files = files
            .into_iter()
            .map(|(path, body)| (path, StatusCode::OK, body))
            .collect();
        Self::spawn_with_status(details, files)
    }

    /// Like [`TestSteam::spawn`], but each hosted file carries its own status.
    pub fn spawn_with_status(details: DetailsReply, files: Vec<(&str, StatusCode, Vec<u8>)>) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let forms = Arc::new(Mutex::new(Vec::new()));

        let mut router = Router::new().route(
            DETAILS_PATH,
            post({
                let forms = forms.clone();
                move |Form(form): Form<HashMap<String, String>>| {
                    let forms = forms.clone();
                    let details = details.clone();
                    async move {
                        forms.lock().unwrap().push(form);
                        match details {
                            DetailsReply::Json(body) => {
                                (StatusCode::OK, [(CONTENT_TYPE, "application/json")], body)
                                    .into_response()
                            }
                            DetailsReply::Status(status, body) => (status, body).into_response(),
                        }
                    }
                }
            }),
        );
        for (path, status, body) in files {
            router = router.route(
                path,
                get(move || {
                    let body = body.clone();
                    async move { (status, body) }
                }),
            );
        }

        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .unwrap();
        let addr = listener.local_addr().unwrap();
        runtime.spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            base: format!("http://{}", addr),
            forms,
            _runtime: runtime,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Forms received by the details endpoint, in order.
    pub fn forms(&self) -> Vec<HashMap<String, String>> {
        self.forms.lock().unwrap().clone()
    }
}

pub fn details_json(id: &str, title: &str, filename: &str, file_url: &str) -> String {
    serde_json::json!({
        "response": {
            "result": 1,
            "resultcount": 1,
            "publishedfiledetails": [{
                "publishedfileid": id,
                "result": 1,
                "creator": "76561197960287930",
                "creator_app_id": 4000,
                "consumer_app_id": 4000,
                "filename": filename,
                "file_size": "1024",
                "file_url": file_url,
                "title": title,
                "time_created": 1_500_000_000,
                "time_updated": 1_600_000_000,
                "visibility": 0,
                "banned": 0,
                "tags": [{ "tag": "Addon" }, { "tag": "Tool" }]
            }]
        }
    })
    .to_string()
}

/// An address nothing is listening on.
pub fn closed_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
