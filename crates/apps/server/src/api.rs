use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use geom::{Aabb2, Vec2};
use links::TownLinks;
use news::NewsView;
use session::{AppError, Effect, SelectOutcome};
use towns::Town;
use view::{fit_all, Camera, FocusTransform, BASE_FILL_ALPHA, SELECTED_FILL_ALPHA};

use crate::newswire;
use crate::AppState;

type ApiError = (StatusCode, Json<Value>);

fn api_error(err: &AppError) -> ApiError {
    let status = match err {
        AppError::UnknownTown(_) | AppError::NoContainingTown => StatusCode::NOT_FOUND,
        AppError::GeolocationUnsupported
        | AppError::GeolocationDenied
        | AppError::GeolocationTimeout => StatusCode::BAD_REQUEST,
        AppError::Network(_) | AppError::Parse(_) => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(json!({ "error": err.to_string(), "kind": err.kind() })),
    )
}

fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

#[derive(Debug, Serialize)]
struct CameraDoc {
    scale: f64,
    translate: [f64; 2],
}

impl From<Camera> for CameraDoc {
    fn from(cam: Camera) -> Self {
        Self {
            scale: cam.scale,
            translate: [cam.translate.x, cam.translate.y],
        }
    }
}

#[derive(Debug, Serialize)]
struct FocusDoc {
    #[serde(flatten)]
    camera: CameraDoc,
    duration_ms: u64,
}

impl From<FocusTransform> for FocusDoc {
    fn from(t: FocusTransform) -> Self {
        Self {
            camera: t.camera.into(),
            duration_ms: t.duration_ms,
        }
    }
}

#[derive(Debug, Serialize)]
struct BboxDoc {
    min: [f64; 2],
    max: [f64; 2],
}

impl From<Aabb2> for BboxDoc {
    fn from(b: Aabb2) -> Self {
        Self {
            min: [b.min.x, b.min.y],
            max: [b.max.x, b.max.y],
        }
    }
}

#[derive(Debug, Serialize)]
struct TownDoc {
    id: u64,
    name: String,
    bbox: BboxDoc,
}

impl From<&Town> for TownDoc {
    fn from(town: &Town) -> Self {
        Self {
            id: town.id.0,
            name: town.name.clone(),
            bbox: town.bounds.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TownsResponse {
    towns: Vec<TownDoc>,
    camera: CameraDoc,
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    town: TownDoc,
    selected_fill_alpha: f64,
    base_fill_alpha: f64,
    focus: FocusDoc,
    links: TownLinks,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    name: String,
}

/// Coordinates from the client's geolocation, or the failure kind it
/// reports when geolocation itself failed.
#[derive(Debug, Deserialize)]
pub struct LocateRequest {
    lon: Option<f64>,
    lat: Option<f64>,
    error: Option<String>,
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn list_towns(State(state): State<AppState>) -> Json<TownsResponse> {
    let viewport = state.session.lock().viewport();
    let camera = match state.towns.union_bounds() {
        Some(bounds) => fit_all(bounds, viewport),
        None => Camera {
            scale: 1.0,
            translate: Vec2::new(0.0, 0.0),
        },
    };

    Json(TownsResponse {
        towns: state.towns.iter().map(TownDoc::from).collect(),
        camera: camera.into(),
    })
}

pub async fn get_selection(State(state): State<AppState>) -> Json<Option<SelectionResponse>> {
    let session = state.session.lock();
    let Some(town) = session.selected_town() else {
        return Json(None);
    };

    Json(Some(SelectionResponse {
        town: town.into(),
        selected_fill_alpha: SELECTED_FILL_ALPHA,
        base_fill_alpha: BASE_FILL_ALPHA,
        focus: view::focus(town.bounds, session.viewport()).into(),
        links: TownLinks::for_town(&town.name),
    }))
}

pub async fn post_selection(
    State(state): State<AppState>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let outcome = state
        .session
        .lock()
        .select(&req.name)
        .map_err(|e| api_error(&e))?;
    respond_with_outcome(state, outcome)
}

pub async fn post_locate(
    State(state): State<AppState>,
    Json(req): Json<LocateRequest>,
) -> Result<Json<SelectionResponse>, ApiError> {
    if let Some(kind) = req.error.as_deref() {
        let err = geolocation_error(kind).ok_or_else(|| bad_request("unknown geolocation error kind"))?;
        return Err(api_error(&err));
    }

    let (Some(lon), Some(lat)) = (req.lon, req.lat) else {
        return Err(bad_request("lon and lat are required"));
    };

    let outcome = state
        .session
        .lock()
        .locate(Vec2::new(lon, lat))
        .map_err(|e| api_error(&e))?;
    respond_with_outcome(state, outcome)
}

pub async fn get_news(State(state): State<AppState>) -> Json<Value> {
    if state.session.lock().selection().is_none() {
        return Json(Value::Null);
    }

    let slot = state.news.lock();
    match slot.view() {
        Some(view) => Json(news_view_json(view)),
        None => Json(json!({ "status": "pending" })),
    }
}

/// Builds the select/locate response from the controller's ordered
/// effect list, and kicks off the fire-and-forget news refresh last so
/// visual feedback never waits on the network.
fn respond_with_outcome(
    state: AppState,
    outcome: SelectOutcome,
) -> Result<Json<SelectionResponse>, ApiError> {
    let town = state
        .towns
        .get(outcome.town)
        .ok_or_else(|| bad_request("selection refers to an unknown town"))?;

    let mut focus: Option<FocusDoc> = None;
    let mut links: Option<TownLinks> = None;
    let mut refresh: Option<u64> = None;

    for effect in outcome.effects {
        match effect {
            Effect::Highlight { .. } => {}
            Effect::Focus(t) => focus = Some(t.into()),
            Effect::Links(l) => links = Some(l),
            Effect::RefreshNews { generation, .. } => refresh = Some(generation),
        }
    }

    let (Some(focus), Some(links), Some(generation)) = (focus, links, refresh) else {
        return Err(bad_request("selection produced an incomplete effect list"));
    };

    let response = SelectionResponse {
        town: town.into(),
        selected_fill_alpha: SELECTED_FILL_ALPHA,
        base_fill_alpha: BASE_FILL_ALPHA,
        focus,
        links,
    };

    newswire::spawn_refresh(state.clone(), response.town.name.clone(), generation);
    Ok(Json(response))
}

fn news_view_json(view: &NewsView) -> Value {
    serde_json::to_value(view).unwrap_or_else(|_| json!({ "status": "unavailable" }))
}

fn geolocation_error(kind: &str) -> Option<AppError> {
    match kind {
        "unsupported" => Some(AppError::GeolocationUnsupported),
        "denied" => Some(AppError::GeolocationDenied),
        "timeout" => Some(AppError::GeolocationTimeout),
        _ => None,
    }
}
