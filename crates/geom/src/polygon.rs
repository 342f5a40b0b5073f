use crate::bounds::Aabb2;
use crate::vec::Vec2;

/// A closed vertex loop. A closing duplicate of the first vertex is
/// tolerated and ignored by the containment test.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring {
    pub vertices: Vec<Vec2>,
}

impl Ring {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }
}

/// One outer ring plus zero or more holes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub outer: Ring,
    pub holes: Vec<Ring>,
}

impl Polygon {
    pub fn new(outer: Ring, holes: Vec<Ring>) -> Self {
        Self { outer, holes }
    }

    /// Even-odd containment: inside the outer ring and inside no hole.
    pub fn contains(&self, p: Vec2) -> bool {
        if !point_in_ring(p, &self.outer) {
            return false;
        }
        !self.holes.iter().any(|h| point_in_ring(p, h))
    }

    pub fn bounds(&self) -> Option<Aabb2> {
        Aabb2::from_points(self.outer.vertices.iter().copied())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPolygon {
    pub parts: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(parts: Vec<Polygon>) -> Self {
        Self { parts }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        self.parts.iter().any(|part| part.contains(p))
    }

    /// Union of the parts' outer-ring bounds; `None` when there is no geometry.
    pub fn bounds(&self) -> Option<Aabb2> {
        let mut out: Option<Aabb2> = None;
        for part in &self.parts {
            let Some(b) = part.bounds() else {
                continue;
            };
            out = Some(match out {
                Some(acc) => acc.union(b),
                None => b,
            });
        }
        out
    }
}

/// Even-odd ray cast against a ring.
///
/// Points exactly on an edge are decided arbitrarily; callers that need
/// stable answers should test strict interiors only.
pub fn point_in_ring(p: Vec2, ring: &Ring) -> bool {
    let pts = effective_vertices(&ring.vertices);
    if pts.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = pts.len() - 1;
    for i in 0..pts.len() {
        let a = pts[i];
        let b = pts[j];
        let crosses = (a.y > p.y) != (b.y > p.y);
        if crosses {
            let x_at = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_at {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn effective_vertices(vertices: &[Vec2]) -> &[Vec2] {
    if vertices.len() >= 2 {
        let first = vertices[0];
        let last = vertices[vertices.len() - 1];
        if (first.x - last.x).abs() < 1e-12 && (first.y - last.y).abs() < 1e-12 {
            return &vertices[..vertices.len() - 1];
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::{MultiPolygon, Polygon, Ring, point_in_ring};
    use crate::vec::Vec2;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Ring {
        Ring::new(vec![
            Vec2::new(x0, y0),
            Vec2::new(x1, y0),
            Vec2::new(x1, y1),
            Vec2::new(x0, y1),
        ])
    }

    #[test]
    fn ring_containment_square() {
        let r = square(0.0, 0.0, 2.0, 2.0);
        assert!(point_in_ring(Vec2::new(1.0, 1.0), &r));
        assert!(!point_in_ring(Vec2::new(3.0, 1.0), &r));
        assert!(!point_in_ring(Vec2::new(-0.1, 1.0), &r));
    }

    #[test]
    fn closing_duplicate_is_tolerated() {
        let mut verts = square(0.0, 0.0, 2.0, 2.0).vertices;
        verts.push(verts[0]);
        let closed = Ring::new(verts);
        assert!(point_in_ring(Vec2::new(1.0, 1.0), &closed));
        assert!(!point_in_ring(Vec2::new(2.5, 1.0), &closed));
    }

    #[test]
    fn hole_excludes_interior() {
        let poly = Polygon::new(square(0.0, 0.0, 4.0, 4.0), vec![square(1.0, 1.0, 2.0, 2.0)]);
        assert!(poly.contains(Vec2::new(3.0, 3.0)));
        assert!(!poly.contains(Vec2::new(1.5, 1.5)));
    }

    #[test]
    fn multipolygon_any_part_contains() {
        let mp = MultiPolygon::new(vec![
            Polygon::new(square(0.0, 0.0, 1.0, 1.0), Vec::new()),
            Polygon::new(square(5.0, 5.0, 6.0, 6.0), Vec::new()),
        ]);
        assert!(mp.contains(Vec2::new(0.5, 0.5)));
        assert!(mp.contains(Vec2::new(5.5, 5.5)));
        assert!(!mp.contains(Vec2::new(3.0, 3.0)));

        let b = mp.bounds().unwrap();
        assert_eq!(b.min, Vec2::new(0.0, 0.0));
        assert_eq!(b.max, Vec2::new(6.0, 6.0));
    }

    #[test]
    fn degenerate_ring_contains_nothing() {
        let r = Ring::new(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)]);
        assert!(!point_in_ring(Vec2::new(0.5, 0.5), &r));
        assert!(MultiPolygon::default().bounds().is_none());
    }
}
