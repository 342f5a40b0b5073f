use std::collections::BTreeMap;

use geom::{Aabb2, Vec2};

use crate::error::TownsError;
use crate::geojson::parse_feature_collection;
use crate::town::{Town, TownId};

/// Read-only town collection, loaded once at startup.
///
/// Lookup contracts:
/// - `by_name` is a case-sensitive exact match.
/// - `locate` returns the first containing town in load order; towns are
///   assumed non-overlapping, so at most one true match is expected.
#[derive(Debug, Clone, PartialEq)]
pub struct TownIndex {
    towns: Vec<Town>,
    by_name: BTreeMap<String, usize>,
    by_id: BTreeMap<TownId, usize>,
}

impl TownIndex {
    pub fn from_geojson(text: &str) -> Result<Self, TownsError> {
        Self::from_towns(parse_feature_collection(text)?)
    }

    pub fn from_towns(towns: Vec<Town>) -> Result<Self, TownsError> {
        if towns.is_empty() {
            return Err(TownsError::Empty);
        }

        let mut by_name = BTreeMap::new();
        let mut by_id = BTreeMap::new();
        for (i, town) in towns.iter().enumerate() {
            if by_id.insert(town.id, i).is_some() {
                return Err(TownsError::DuplicateId(town.id.0));
            }
            if by_name.insert(town.name.clone(), i).is_some() {
                return Err(TownsError::DuplicateName(town.name.clone()));
            }
        }

        Ok(Self {
            towns,
            by_name,
            by_id,
        })
    }

    pub fn len(&self) -> usize {
        self.towns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.towns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Town> {
        self.towns.iter()
    }

    pub fn get(&self, id: TownId) -> Option<&Town> {
        self.by_id.get(&id).map(|&i| &self.towns[i])
    }

    pub fn by_name(&self, name: &str) -> Option<&Town> {
        self.by_name.get(name).map(|&i| &self.towns[i])
    }

    /// First town (load order) whose geometry contains `p`.
    pub fn locate(&self, p: Vec2) -> Option<&Town> {
        self.towns.iter().find(|t| t.contains(p))
    }

    /// Union of all town bounds. `None` is unreachable for a constructed
    /// index, since construction rejects empty collections.
    pub fn union_bounds(&self) -> Option<Aabb2> {
        let mut out: Option<Aabb2> = None;
        for town in &self.towns {
            out = Some(match out {
                Some(acc) => acc.union(town.bounds),
                None => town.bounds,
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::TownIndex;
    use crate::town::{Town, TownId};
    use geom::{MultiPolygon, Polygon, Ring, Vec2};

    fn town(id: u64, name: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> Town {
        let ring = Ring::new(vec![
            Vec2::new(x0, y0),
            Vec2::new(x1, y0),
            Vec2::new(x1, y1),
            Vec2::new(x0, y1),
        ]);
        let geometry = MultiPolygon::new(vec![Polygon::new(ring, Vec::new())]);
        let bounds = geometry.bounds().unwrap();
        Town {
            id: TownId(id),
            name: name.to_string(),
            geometry,
            bounds,
        }
    }

    fn index() -> TownIndex {
        TownIndex::from_towns(vec![
            town(1, "Avon", 0.0, 0.0, 1.0, 1.0),
            town(2, "Bethel", 2.0, 0.0, 3.0, 1.0),
            town(3, "Canton", 0.0, 2.0, 1.0, 3.0),
        ])
        .expect("index")
    }

    #[test]
    fn name_lookup_is_case_sensitive_exact() {
        let ix = index();
        assert_eq!(ix.by_name("Bethel").unwrap().id, TownId(2));
        assert!(ix.by_name("bethel").is_none());
        assert!(ix.by_name("Bethel ").is_none());
    }

    #[test]
    fn locate_inside_exactly_one_polygon() {
        let ix = index();
        assert_eq!(ix.locate(Vec2::new(2.5, 0.5)).unwrap().name, "Bethel");
        assert!(ix.locate(Vec2::new(5.0, 5.0)).is_none());
    }

    #[test]
    fn locate_first_match_wins_in_load_order() {
        // Overlapping towns are out of contract, but the answer must
        // still be deterministic.
        let ix = TownIndex::from_towns(vec![
            town(1, "First", 0.0, 0.0, 2.0, 2.0),
            town(2, "Second", 0.0, 0.0, 2.0, 2.0),
        ])
        .unwrap();
        assert_eq!(ix.locate(Vec2::new(1.0, 1.0)).unwrap().name, "First");
    }

    #[test]
    fn union_bounds_spans_all_towns() {
        let b = index().union_bounds().unwrap();
        assert_eq!(b.min, Vec2::new(0.0, 0.0));
        assert_eq!(b.max, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn duplicates_and_empty_are_rejected() {
        use crate::error::TownsError;

        let dup_id = TownIndex::from_towns(vec![
            town(1, "Avon", 0.0, 0.0, 1.0, 1.0),
            town(1, "Bethel", 2.0, 0.0, 3.0, 1.0),
        ]);
        assert_eq!(dup_id, Err(TownsError::DuplicateId(1)));

        let dup_name = TownIndex::from_towns(vec![
            town(1, "Avon", 0.0, 0.0, 1.0, 1.0),
            town(2, "Avon", 2.0, 0.0, 3.0, 1.0),
        ]);
        assert_eq!(dup_name, Err(TownsError::DuplicateName("Avon".into())));

        assert_eq!(TownIndex::from_towns(Vec::new()), Err(TownsError::Empty));
    }
}
