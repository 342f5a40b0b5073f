mod api;
mod newswire;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use parking_lot::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use session::SelectionController;
use towns::TownIndex;
use view::Viewport;

use crate::newswire::NewsSlot;

#[derive(Clone)]
pub struct AppState {
    pub towns: Arc<TownIndex>,
    pub session: Arc<Mutex<SelectionController>>,
    pub news: Arc<Mutex<NewsSlot>>,
    pub news_url: Arc<String>,
    pub http: reqwest::Client,
}

#[derive(Clone, Debug)]
struct AppConfig {
    addr: SocketAddr,
    towns_url: String,
    news_url: String,
    viewport: Viewport,
    towns_retries: u32,
}

fn load_config() -> AppConfig {
    let addr: SocketAddr = env::var("TOWNLENS_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:9200".to_string())
        .parse()
        .expect("invalid TOWNLENS_ADDR");

    let towns_url = env::var("TOWNS_URL").unwrap_or_else(|_| {
        "https://geodata.ct.gov/api/download/v1/items/ct-town-boundaries/geojson".to_string()
    });
    let news_url = env::var("NEWS_URL")
        .unwrap_or_else(|_| "https://api.gdeltproject.org/api/v2/doc/doc".to_string());

    AppConfig {
        addr,
        towns_url,
        news_url,
        viewport: Viewport::new(
            env_var_f64("VIEW_WIDTH", 960.0),
            env_var_f64("VIEW_HEIGHT", 720.0),
        ),
        towns_retries: env_var_u32("TOWNS_RETRIES", 3),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config();
    let http = reqwest::Client::new();

    // Boundaries are loaded once; nothing in the app can work without
    // them, so repeated failure is a hard exit rather than a degraded
    // mode.
    let towns = match load_towns(&http, &config.towns_url, config.towns_retries).await {
        Ok(index) => Arc::new(index),
        Err(err) => {
            error!("town boundaries unavailable, giving up: {err}");
            std::process::exit(1);
        }
    };
    info!("loaded {} town boundaries", towns.len());

    let session = SelectionController::new(Arc::clone(&towns), config.viewport);
    let state = AppState {
        towns,
        session: Arc::new(Mutex::new(session)),
        news: Arc::new(Mutex::new(NewsSlot::default())),
        news_url: Arc::new(config.news_url),
        http,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    let app = Router::new()
        .route("/healthz", get(api::healthz))
        .route("/towns", get(api::list_towns))
        .route("/selection", get(api::get_selection))
        .route("/selection", post(api::post_selection))
        .route("/locate", post(api::post_locate))
        .route("/news", get(api::get_news))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("townlens server listening on http://{}", config.addr);
    axum::serve(
        tokio::net::TcpListener::bind(config.addr)
            .await
            .expect("bind TOWNLENS_ADDR"),
        app,
    )
    .await
    .expect("server error");
}

async fn load_towns(
    http: &reqwest::Client,
    url: &str,
    retries: u32,
) -> Result<TownIndex, String> {
    let attempts = retries.max(1);
    let mut last_err = String::new();

    for attempt in 1..=attempts {
        match fetch_towns_once(http, url).await {
            Ok(index) => return Ok(index),
            Err(err) => {
                warn!("town boundary load failed (attempt {attempt}/{attempts}): {err}");
                last_err = err;
            }
        }
        if attempt < attempts {
            tokio::time::sleep(Duration::from_secs(2)).await;
        }
    }

    Err(last_err)
}

async fn fetch_towns_once(http: &reqwest::Client, url: &str) -> Result<TownIndex, String> {
    let resp = http
        .get(url)
        .send()
        .await
        .map_err(|e| format!("fetch failed: {e}"))?;
    if !resp.status().is_success() {
        return Err(format!("upstream HTTP {}", resp.status().as_u16()));
    }

    let text = resp.text().await.map_err(|e| format!("read failed: {e}"))?;
    TownIndex::from_geojson(&text).map_err(|e| e.to_string())
}

fn env_var_u32(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_var_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
