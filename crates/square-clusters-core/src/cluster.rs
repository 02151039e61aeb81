use serde::{Deserialize, Serialize};

/// Axis-aligned square region of uniform cells.
///
/// Bounds are inclusive grid indices: `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cluster {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
    pub size: usize,
}

impl Cluster {
    /// Square with top-left corner (`x1`, `y1`) and side `size` (`size >= 1`).
    #[inline]
    pub fn square(x1: usize, y1: usize, size: usize) -> Self {
        debug_assert!(size >= 1);
        Self {
            x1,
            y1,
            x2: x1 + size - 1,
            y2: y1 + size - 1,
            size,
        }
    }

    /// Bounding boxes share at least one row and one column. Edge contact
    /// counts.
    #[inline]
    pub fn overlaps(&self, other: &Cluster) -> bool {
        !(self.y2 < other.y1 || self.y1 > other.y2 || self.x2 < other.x1 || self.x1 > other.x2)
    }

    /// `other` lies within (or on) the bounds of `self`.
    #[inline]
    pub fn contains(&self, other: &Cluster) -> bool {
        other.y1 >= self.y1 && other.y2 <= self.y2 && other.x1 >= self.x1 && other.x2 <= self.x2
    }

    /// Grid cell (row, col) lies inside the square.
    #[inline]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        (self.y1..=self.y2).contains(&row) && (self.x1..=self.x2).contains(&col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_derives_bottom_right() {
        let c = Cluster::square(2, 1, 3);
        assert_eq!((c.x2, c.y2, c.size), (4, 3, 3));
        assert!(c.covers(3, 4));
        assert!(!c.covers(4, 4));
    }

    #[test]
    fn edge_contact_is_overlap() {
        let a = Cluster::square(0, 0, 2);
        let b = Cluster::square(1, 1, 2);
        let c = Cluster::square(2, 0, 2);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn containment_implies_overlap_but_not_back() {
        let outer = Cluster::square(0, 0, 4);
        let inner = Cluster::square(1, 1, 2);
        let partial = Cluster::square(3, 3, 2);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.overlaps(&partial));
        assert!(!outer.contains(&partial));
        assert!(outer.contains(&outer));
    }
}
