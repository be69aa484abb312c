use std::cmp::Reverse;

use crate::config::Selection;
use crate::disjoint_set::DisjointSet;
use crate::geometry::{BoundingBox, Point};
use crate::grid::Grid;

/// Bounding boxes of the 4-connected groups of filled cells.
pub fn component_boxes(grid: &Grid) -> Vec<BoundingBox> {
    let mut ds = DisjointSet::new(grid.rows() * grid.cols());

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if !grid.is_filled(row, col) {
                continue;
            }
            let here = grid.index(row, col);
            // right and down cover every edge once
            if grid.is_filled(row, col + 1) {
                ds.union(here, grid.index(row, col + 1));
            }
            if grid.is_filled(row + 1, col) {
                ds.union(here, grid.index(row + 1, col));
            }
        }
    }

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.is_filled(row, col) {
                ds.include(grid.index(row, col), Point::new(row + 1, col + 1));
            }
        }
    }

    ds.boxes()
}

/// Greedy overlap filter: larger boxes win, ties broken by top-left corner.
/// Returned boxes are in that priority order.
pub fn non_overlapping(boxes: &[BoundingBox]) -> Vec<BoundingBox> {
    let mut sorted = boxes.to_vec();
    sorted.sort_by_key(|b| (Reverse(b.area()), b.top_left));

    let mut discarded = vec![false; sorted.len()];
    let mut kept = Vec::new();

    for i in 0..sorted.len() {
        if discarded[i] {
            continue;
        }
        kept.push(sorted[i]);
        for j in i + 1..sorted.len() {
            if !discarded[j] && sorted[i].overlaps(&sorted[j]) {
                discarded[j] = true;
            }
        }
    }

    kept
}

/// Applies `selection` to the grid. An empty result means no box qualifies.
pub fn solve(grid: &Grid, selection: Selection) -> Vec<BoundingBox> {
    if grid.is_empty() {
        return Vec::new();
    }

    let boxes = component_boxes(grid);
    let kept = non_overlapping(&boxes);
    tracing::debug!("{} groups, {} without overlap", boxes.len(), kept.len());

    match selection {
        // equal areas go to the box whose top-left corner comes last
        Selection::Largest => kept
            .into_iter()
            .max_by_key(|b| (b.area(), b.top_left))
            .into_iter()
            .collect(),
        Selection::All => {
            if kept.len() < boxes.len() {
                return Vec::new();
            }
            let mut all = kept;
            all.sort_by_key(|b| b.top_left);
            all
        }
    }
}

pub fn render(boxes: &[BoundingBox]) -> String {
    boxes.iter().map(BoundingBox::to_string).collect()
}
