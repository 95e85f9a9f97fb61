//! Merge engine - one adjacent-equal merge per line per slide
//!
//! The input line must already be in priority order (see
//! [`priority_sort`](crate::line::priority_sort)). The scan finds the first
//! pair of neighbouring tiles with equal values and replaces them by a single
//! tile worth their sum, placed where the second tile of the pair was (the one
//! nearer the target edge).
//!
//! Tiles already at [`MAX_TILE_VALUE`](crate::types::MAX_TILE_VALUE) are never
//! merged, so the merged value always stays inside the valid range.
//!
//! Merges do not cascade. In a run of three or more equal tiles only the first
//! two combine; the rest of the run, and every other tile, passes through
//! untouched until the next slide.

use crate::line::Line;
use crate::types::Tile;

/// Merge the first adjacent equal pair of an ordered line.
///
/// Returns the new line and whether a merge happened. When it did, the line
/// is exactly one tile shorter.
pub fn merge_line(line: Line) -> (Line, bool) {
    let Some((i, value)) = line
        .windows(2)
        .enumerate()
        .find_map(|(i, pair)| pair[0].merged_value(&pair[1]).map(|v| (i, v)))
    else {
        return (line, false);
    };

    let merged = Tile::new(line[i + 1].position, value);

    let mut out = Line::new();
    out.extend(line[..i].iter().copied());
    out.push(merged);
    out.extend(line[i + 2..].iter().copied());
    (out, true)
}
