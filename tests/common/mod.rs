//! In-process stand-in for the hotel backend.
//!
//! Serves the endpoints the console uses from an in-memory list of hotel
//! rows, records every request, and answers 500 on any path marked failing.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct StubState {
    hotels: Mutex<Vec<Value>>,
    requests: Mutex<Vec<Recorded>>,
    failing: Mutex<HashSet<String>>,
}

pub struct StubBackend {
    pub base_url: String,
    state: Arc<StubState>,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

pub fn spawn_backend(hotels: Vec<Value>) -> Result<StubBackend> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").context("bind stub backend")?;
    listener
        .set_nonblocking(true)
        .context("set stub listener nonblocking")?;
    let addr = listener.local_addr().context("stub backend addr")?;

    let state = Arc::new(StubState {
        hotels: Mutex::new(hotels),
        ..StubState::default()
    });
    let app = Router::new().fallback(handle).with_state(state.clone());

    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("build stub runtime")?;
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    thread::spawn(move || {
        rt.block_on(async move {
            let listener = match tokio::net::TcpListener::from_std(listener) {
                Ok(l) => l,
                Err(_) => return,
            };
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await;
        });
    });

    Ok(StubBackend {
        base_url: format!("http://{}", addr),
        state,
        shutdown: Some(tx),
    })
}

#[allow(dead_code)]
impl StubBackend {
    /// Requests to `path` (as sent, percent-encoded) answer 500 from now on.
    pub fn fail(&self, path: &str) {
        self.state.failing.lock().unwrap().insert(path.to_string());
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, method: &str, path_prefix: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path.starts_with(path_prefix))
            .collect()
    }

    pub fn clear_requests(&self) {
        self.state.requests.lock().unwrap().clear();
    }

    pub fn hotels(&self) -> Vec<Value> {
        self.state.hotels.lock().unwrap().clone()
    }

    pub fn hotel_ids(&self) -> Vec<String> {
        self.hotels().iter().map(|h| id_text(&h["hotelId"])).collect()
    }
}

/// A hotel row shaped like the backend's, with its own video.
#[allow(dead_code)]
pub fn hotel_json(id: i64, name: &str, verified: bool) -> Value {
    json!({
        "hotelId": id,
        "hotelName": name,
        "hotelCity": "Chennai",
        "hotelCategory": "Veg",
        "hotelVlogVideoLink": format!("https://youtu.be/v{}", id),
        "videoId": format!("v{}", id),
        "videoType": "Youtube",
        "vlogVideoViewCount": 1200,
        "verified": verified,
        "valid": true,
        "userMobileNumber": "9840000000",
        "hotelSignatureDishes": [],
    })
}

async fn handle(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        body: serde_json::from_str(&body).ok(),
    });
    if state.failing.lock().unwrap().contains(&path) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "stub failure").into_response();
    }

    let segments: Vec<String> = path
        .trim_start_matches('/')
        .split('/')
        .map(percent_decode)
        .collect();
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let mut hotels = state.hotels.lock().unwrap();

    match (method.as_str(), segments.as_slice()) {
        ("GET", ["getVerifiedHotels"]) => axum::Json(hotels.clone()).into_response(),
        ("GET", ["getVerifiedHotels", "true"]) => {
            let verified: Vec<Value> = hotels
                .iter()
                .filter(|h| h["verified"] == Value::Bool(true))
                .cloned()
                .collect();
            axum::Json(verified).into_response()
        }
        ("GET", ["searchhotels", name]) => {
            let needle = name.to_lowercase();
            let found: Vec<Value> = hotels
                .iter()
                .filter(|h| {
                    h["hotelName"]
                        .as_str()
                        .is_some_and(|n| n.to_lowercase().contains(&needle))
                })
                .cloned()
                .collect();
            axum::Json(found).into_response()
        }
        ("GET", ["count"]) => axum::Json(json!({ "count": hotels.len() })).into_response(),
        ("GET", ["count", mobile]) => {
            let n = hotels
                .iter()
                .filter(|h| h["userMobileNumber"].as_str() == Some(*mobile))
                .count();
            axum::Json(json!({ "count": n })).into_response()
        }
        ("PUT", ["verify"]) => {
            if let Some(h) = hotels.iter_mut().find(|h| h["hotelId"] == body["hotelId"]) {
                h["verified"] = body["verified"].clone();
                h["valid"] = body["valid"].clone();
            }
            StatusCode::OK.into_response()
        }
        ("PUT", ["updateHotel"]) => {
            if let Some(h) = hotels.iter_mut().find(|h| h["hotelId"] == body["hotelId"]) {
                *h = body.clone();
            }
            StatusCode::OK.into_response()
        }
        ("POST", ["createhotelvideo"]) | ("POST", ["dish"]) => StatusCode::OK.into_response(),
        ("GET", ["deletehotel", id]) => {
            hotels.retain(|h| id_text(&h["hotelId"]) != *id);
            StatusCode::OK.into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

fn id_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).unwrap_or("");
            if let Ok(b) = u8::from_str_radix(hex, 16) {
                out.push(b);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
