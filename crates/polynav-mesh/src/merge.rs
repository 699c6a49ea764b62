use std::collections::VecDeque;

use polynav_geom::{polygons_adjacent, sort_by_angle_around, Polygon, Vec2};

/// Merge two cells that share exactly one edge, if the result is convex.
///
/// The merged vertex set (shared vertices once) is ordered by angle around the midpoint of the
/// shared edge, which lies inside the union.
pub fn try_merge(a: &Polygon, b: &Polygon) -> Option<Polygon> {
    let shared = polygons_adjacent(a, b)?;

    let mut points: Vec<Vec2> = a.points().to_vec();
    for p in b.points() {
        if !points.contains(p) {
            points.push(*p);
        }
    }
    sort_by_angle_around(&mut points, shared.midpoint());

    let merged = Polygon::new(points);
    merged.is_convex().then_some(merged)
}

/// Greedily merge adjacent cells into larger convex cells.
///
/// Cells live in slots; a FIFO worklist holds slots still to be examined. Examining a cell
/// scans every other live cell for a convex merge. A merge retires both sources and queues
/// the merged cell, which will in turn be compared against everything still alive. When the
/// queue drains no pair of remaining cells merges into a convex polygon.
pub fn merge_cells(cells: Vec<Polygon>) -> Vec<Polygon> {
    let initial = cells.len();
    let mut slots: Vec<Option<Polygon>> = cells.into_iter().map(Some).collect();
    let mut queue: VecDeque<usize> = (0..slots.len()).collect();
    let mut merges = 0usize;

    while let Some(i) = queue.pop_front() {
        let Some(cell) = slots[i].as_ref() else {
            continue;
        };

        let found = slots.iter().enumerate().find_map(|(j, other)| {
            let other = other.as_ref().filter(|_| j != i)?;
            try_merge(cell, other).map(|merged| (j, merged))
        });

        if let Some((j, merged)) = found {
            slots[i] = None;
            slots[j] = None;
            slots.push(Some(merged));
            queue.push_back(slots.len() - 1);
            merges += 1;
        }
    }

    let merged: Vec<Polygon> = slots.into_iter().flatten().collect();
    tracing::trace!(initial, merges, cells = merged.len(), "Merged cells");
    merged
}
