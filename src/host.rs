//! Native host for the built site.
//!
//! Serves the Trunk output directory and static assets (`/cv.pdf`,
//! `/images/*`) as-is, falling back to `index.html` for unknown paths.
//! Every request is logged as a JSON line with a request id.

use crate::log::{log_event, LogLevel};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use serde_json::json;
use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u64 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const PORT_BOUNDS: (u64, u64) = (1, 65_535);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug, PartialEq)]
pub struct HostConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u64_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = parse_non_empty_string(lookup("DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = parse_non_empty_string(lookup("LOG_LEVEL"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port: u16::try_from(port).unwrap_or(DEFAULT_PORT as u16),
            dist_dir,
            log_level,
        }
    }
}

#[derive(Clone)]
struct HostState {
    log_level: LogLevel,
}

pub fn router(config: &HostConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));
    let state = HostState {
        log_level: config.log_level,
    };

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&bind_address).await?;

    log_event(
        config.log_level,
        LogLevel::Info,
        "host_listening",
        json!({
            "address": format!("http://127.0.0.1:{}", config.port),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(&config)).await?;
    Ok(())
}

async fn log_requests(State(state): State<HostState>, request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().as_str().to_string();
    let path = request.uri().path().to_string();

    log_event(
        state.log_level,
        LogLevel::Debug,
        "request_start",
        json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
        }),
    );

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    log_event(
        state.log_level,
        LogLevel::Info,
        "request_complete",
        json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
            "status": response.status().as_u16(),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    response
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, fs, net::SocketAddr};

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    async fn spawn_host(dist: &tempfile::TempDir) -> SocketAddr {
        let config = HostConfig {
            port: 0,
            dist_dir: dist.path().to_path_buf(),
            log_level: LogLevel::Info,
        };
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
        let address = listener.local_addr().expect("listener address");
        let app = router(&config);

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        address
    }

    fn dist_with_assets() -> tempfile::TempDir {
        let dist = tempfile::tempdir().expect("temp dist dir");
        fs::write(dist.path().join("index.html"), "<html>portfolio</html>").expect("write index");
        fs::write(dist.path().join("cv.pdf"), b"%PDF-1.7 resume").expect("write resume");
        dist
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = HostConfig::from_lookup(lookup(&[]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn out_of_bounds_port_falls_back_to_default() {
        let config = HostConfig::from_lookup(lookup(&[("PORT", "70000")]));
        assert_eq!(config.port, 8080);

        let config = HostConfig::from_lookup(lookup(&[("PORT", " 3000 ")]));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn dist_dir_and_log_level_are_read() {
        let config = HostConfig::from_lookup(lookup(&[
            ("DIST_DIR", "/srv/site"),
            ("LOG_LEVEL", "DEBUG"),
        ]));
        assert_eq!(config.dist_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn blank_request_id_header_is_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  "));
        assert!(resolve_request_id(&headers).starts_with("req-"));

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-1"));
        assert_eq!(resolve_request_id(&headers), "abc-1");
    }

    #[tokio::test]
    async fn assets_are_served_as_is() {
        let dist = dist_with_assets();
        let address = spawn_host(&dist).await;

        let response = reqwest::get(format!("http://{address}/cv.pdf"))
            .await
            .expect("request resume");
        assert_eq!(response.status().as_u16(), 200);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        let body = response.bytes().await.expect("resume body");
        assert_eq!(&body[..], b"%PDF-1.7 resume");
    }

    #[tokio::test]
    async fn unknown_path_falls_back_to_index() {
        let dist = dist_with_assets();
        let address = spawn_host(&dist).await;

        let response = reqwest::get(format!("http://{address}/no/such/page"))
            .await
            .expect("request unknown path");
        assert_eq!(response.status().as_u16(), 404);
        let body = response.text().await.expect("fallback body");
        assert!(body.contains("portfolio"));
    }

    #[tokio::test]
    async fn caller_request_id_is_echoed() {
        let dist = dist_with_assets();
        let address = spawn_host(&dist).await;

        let response = reqwest::Client::new()
            .get(format!("http://{address}/"))
            .header(REQUEST_ID_HEADER, "trace-42")
            .send()
            .await
            .expect("request index");
        assert_eq!(
            response
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Some("trace-42")
        );
    }
}
