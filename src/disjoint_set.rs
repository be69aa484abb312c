use crate::geometry::{BoundingBox, Point};

/// Union-find over cell indices, tracking the bounding box of each set.
pub struct DisjointSet {
    parent: Vec<usize>,
    bounds: Vec<Option<BoundingBox>>,
}

impl DisjointSet {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            bounds: vec![None; size],
        }
    }

    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // path compression
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets containing `a` and `b`; `a`'s root survives.
    pub fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[rb] = ra;
        }
    }

    /// Widens the bounds of `node`'s set to include `point`.
    pub fn include(&mut self, node: usize, point: Point) {
        let root = self.find(node);
        self.bounds[root] = Some(match self.bounds[root] {
            None => BoundingBox::new(point, point),
            Some(b) => BoundingBox::new(
                Point::new(b.top_left.row.min(point.row), b.top_left.col.min(point.col)),
                Point::new(
                    b.bottom_right.row.max(point.row),
                    b.bottom_right.col.max(point.col),
                ),
            ),
        });
    }

    /// Bounding boxes of every set that has had a point included, ordered
    /// by root index.
    pub fn boxes(&self) -> Vec<BoundingBox> {
        self.bounds.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_root() {
        let mut ds = DisjointSet::new(3);
        assert_eq!(ds.find(0), 0);
        assert_eq!(ds.find(2), 2);
    }

    #[test]
    fn union_is_transitive() {
        let mut ds = DisjointSet::new(4);
        ds.union(0, 1);
        ds.union(2, 3);
        ds.union(1, 3);
        let root = ds.find(0);
        assert!((1..4).all(|n| ds.find(n) == root));
    }

    #[test]
    fn include_tracks_extent_per_set() {
        let mut ds = DisjointSet::new(4);
        ds.union(0, 1);
        ds.include(0, Point::new(2, 3));
        ds.include(1, Point::new(1, 5));
        ds.include(3, Point::new(4, 4));

        let boxes = ds.boxes();
        assert_eq!(boxes.len(), 2);
        assert!(boxes.contains(&BoundingBox::new(Point::new(1, 3), Point::new(2, 5))));
        assert!(boxes.contains(&BoundingBox::new(Point::new(4, 4), Point::new(4, 4))));
    }
}
