use crate::vec::Vec2;

/// Axis-aligned bounding box in map plane coordinates (lon/lat degrees).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb2 {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Aabb2 { min, max }
    }

    /// Tight bounds of a point set; `None` for an empty set.
    pub fn from_points<I: IntoIterator<Item = Vec2>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut out = Aabb2::new(first, first);
        for p in iter {
            out.expand(p);
        }
        Some(out)
    }

    pub fn expand(&mut self, p: Vec2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn union(self, other: Self) -> Self {
        let mut out = self;
        out.expand(other.min);
        out.expand(other.max);
        out
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// True when the box has no area on either axis.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::Aabb2;
    use crate::vec::Vec2;

    #[test]
    fn from_points_and_union() {
        let a = Aabb2::from_points([Vec2::new(0.0, 0.0), Vec2::new(2.0, 1.0)]).unwrap();
        assert_eq!(a.width(), 2.0);
        assert_eq!(a.height(), 1.0);
        assert_eq!(a.center(), Vec2::new(1.0, 0.5));

        let b = Aabb2::new(Vec2::new(-1.0, -1.0), Vec2::new(0.5, 0.5));
        let u = a.union(b);
        assert_eq!(u.min, Vec2::new(-1.0, -1.0));
        assert_eq!(u.max, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn empty_point_set_has_no_bounds() {
        assert!(Aabb2::from_points(std::iter::empty::<Vec2>()).is_none());
    }

    #[test]
    fn degenerate_and_contains() {
        let flat = Aabb2::new(Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0));
        assert!(flat.is_degenerate());

        let b = Aabb2::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        assert!(b.contains(Vec2::new(0.5, 0.5)));
        assert!(!b.contains(Vec2::new(1.5, 0.5)));
    }
}
