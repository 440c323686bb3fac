//! Line-oriented merge and compaction shared by all four directions
//!
//! A move is applied independently to every line. Each line is first merged
//! in place, then compacted toward index 0. Both passes report whether they
//! changed anything so the engine can decide whether a tile spawns.

use crate::engine::moves::Direction;
use crate::spatial::{Grid, Line};

/// Merge equal tiles along a line, anchors processed from index 0
///
/// For each non-empty anchor the scan walks forward over empty cells. The
/// first non-empty cell either matches and is absorbed into the anchor, or
/// ends the scan. An anchor merges at most once per pass, so `[2, 2, 2, 0]`
/// becomes `[4, 0, 2, 0]` and a freshly merged tile never absorbs its
/// neighbour in the same move. Sums that would overflow do not merge.
pub fn merge_line(values: &mut [u32]) -> bool {
    let mut changed = false;
    let mut last_merged: Option<usize> = None;

    for anchor in 0..values.len().saturating_sub(1) {
        for other in anchor + 1..values.len() {
            let (Some(&held), Some(&next)) = (values.get(anchor), values.get(other)) else {
                break;
            };
            if held == 0 {
                break;
            }
            if next == 0 {
                continue;
            }

            let eligible = last_merged.is_none_or(|last| anchor > last);
            match held.checked_add(next) {
                Some(sum) if held == next && eligible => {
                    if let Some(slot) = values.get_mut(anchor) {
                        *slot = sum;
                    }
                    if let Some(slot) = values.get_mut(other) {
                        *slot = 0;
                    }
                    changed = true;
                    last_merged = Some(anchor);
                }
                _ => break,
            }
        }
    }

    changed
}

/// Slide non-empty tiles toward index 0, preserving their order
pub fn compact_line(values: &mut [u32]) -> bool {
    let mut changed = false;
    let mut target = 0;

    for source in 0..values.len() {
        if values.get(source).is_none_or(|&value| value == 0) {
            continue;
        }
        if source != target {
            values.swap(source, target);
            changed = true;
        }
        target += 1;
    }

    changed
}

/// Merge then compact one line of values
pub fn process_line(values: &mut [u32]) -> bool {
    let merged = merge_line(values);
    let compacted = compact_line(values);
    merged || compacted
}

/// Lines of a `width` x `height` board, ordered so index 0 faces `direction`
pub fn lines_toward(direction: Direction, width: usize, height: usize) -> Vec<Line> {
    let lines: Vec<Line> = if direction.is_horizontal() {
        (0..height).map(|row| Line::row(row, width)).collect()
    } else {
        (0..width).map(|col| Line::column(col, height)).collect()
    };

    if direction.is_reversed() {
        lines.into_iter().map(Line::reversed).collect()
    } else {
        lines
    }
}

/// Apply a move to every line of `grid` without spawning
///
/// Returns true if any tile merged or slid.
pub fn shift_grid(grid: &mut Grid, direction: Direction) -> bool {
    let mut changed = false;
    for line in lines_toward(direction, grid.width(), grid.height()) {
        let mut values = line.values(grid);
        if process_line(&mut values) {
            line.write_values(grid, &values);
            changed = true;
        }
    }
    changed
}
