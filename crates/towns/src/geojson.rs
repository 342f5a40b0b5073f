use serde::Deserialize;
use serde_json::Value;

use geom::{MultiPolygon, Polygon, Ring, Vec2};

use crate::error::TownsError;
use crate::town::{Town, TownId};

/// Minimal GeoJSON FeatureCollection shape for town boundaries.
///
/// Coordinates are `[lon, lat]`; a trailing altitude is tolerated and
/// dropped.
#[derive(Debug, Deserialize)]
struct FeatureCollectionDoc {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<FeatureDoc>,
}

#[derive(Debug, Deserialize)]
struct FeatureDoc {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    properties: Option<Value>,
    #[serde(default)]
    geometry: Option<GeometryDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum GeometryDoc {
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
    #[serde(other)]
    Unsupported,
}

/// Decodes a FeatureCollection into towns, in document order.
///
/// Each feature must expose a unique numeric id (top level, or an `id`
/// property) and a `name` string property.
pub fn parse_feature_collection(text: &str) -> Result<Vec<Town>, TownsError> {
    let doc: FeatureCollectionDoc =
        serde_json::from_str(text).map_err(|e| TownsError::Parse(e.to_string()))?;
    if doc.kind != "FeatureCollection" {
        return Err(TownsError::Parse(format!(
            "expected FeatureCollection, got {:?}",
            doc.kind
        )));
    }

    let mut towns = Vec::with_capacity(doc.features.len());
    for feature in doc.features {
        towns.push(town_from_feature(feature)?);
    }
    Ok(towns)
}

fn town_from_feature(feature: FeatureDoc) -> Result<Town, TownsError> {
    let id = feature_id(&feature).ok_or(TownsError::MissingId)?;
    let name = feature
        .properties
        .as_ref()
        .and_then(|p| p.get("name"))
        .and_then(|v| v.as_str())
        .ok_or(TownsError::MissingName)?
        .to_string();

    let geometry = match feature.geometry {
        Some(GeometryDoc::Polygon { coordinates }) => {
            MultiPolygon::new(vec![polygon_from_rings(&coordinates)?])
        }
        Some(GeometryDoc::MultiPolygon { coordinates }) => {
            let mut parts = Vec::with_capacity(coordinates.len());
            for rings in &coordinates {
                parts.push(polygon_from_rings(rings)?);
            }
            MultiPolygon::new(parts)
        }
        Some(GeometryDoc::Unsupported) => {
            return Err(TownsError::Geometry(format!(
                "town {name:?} is not a Polygon or MultiPolygon"
            )));
        }
        None => return Err(TownsError::Geometry(format!("town {name:?} has no geometry"))),
    };

    let bounds = geometry
        .bounds()
        .ok_or_else(|| TownsError::Geometry(format!("town {name:?} has empty geometry")))?;

    Ok(Town {
        id: TownId(id),
        name,
        geometry,
        bounds,
    })
}

fn feature_id(feature: &FeatureDoc) -> Option<u64> {
    if let Some(id) = feature.id.as_ref().and_then(Value::as_u64) {
        return Some(id);
    }
    feature
        .properties
        .as_ref()
        .and_then(|p| p.get("id"))
        .and_then(Value::as_u64)
}

fn polygon_from_rings(rings: &[Vec<Vec<f64>>]) -> Result<Polygon, TownsError> {
    let mut out: Vec<Ring> = Vec::with_capacity(rings.len());
    for ring in rings {
        let mut vertices = Vec::with_capacity(ring.len());
        for position in ring {
            if position.len() < 2 {
                return Err(TownsError::Geometry("position with fewer than 2 ordinates".into()));
            }
            vertices.push(Vec2::new(position[0], position[1]));
        }
        out.push(Ring::new(vertices));
    }

    let mut iter = out.into_iter();
    let outer = iter
        .next()
        .ok_or_else(|| TownsError::Geometry("polygon with no rings".into()))?;
    Ok(Polygon::new(outer, iter.collect()))
}
