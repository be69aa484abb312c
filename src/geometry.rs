use std::fmt;

/// A 1-based (row, column) grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Inclusive rectangle spanned by `top_left` and `bottom_right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl BoundingBox {
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self { top_left, bottom_right }
    }

    pub fn area(&self) -> u64 {
        let height = (self.bottom_right.row - self.top_left.row + 1) as u64;
        let width = (self.bottom_right.col - self.top_left.col + 1) as u64;
        height * width
    }

    /// True when the rectangles share at least one cell.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        !(self.bottom_right.row < other.top_left.row
            || self.top_left.row > other.bottom_right.row
            || self.bottom_right.col < other.top_left.col
            || self.top_left.col > other.bottom_right.col)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.top_left, self.bottom_right)
    }
}
