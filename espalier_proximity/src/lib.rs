// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=espalier_proximity --heading-base-level=0

//! Espalier Proximity: a signed box proximity metric for drop-target ranking.
//!
//! Drag-and-drop reordering needs to answer one question many times per
//! pointer move: *which sibling box is the dragged box closest to?* The
//! candidates can be separated from the dragged box, touching it, or under
//! it, and all three cases must rank on a single scale so that a plain
//! minimum scan picks the winner.
//!
//! [`proximity`] collapses the three cases into one signed scalar:
//!
//! - **Overlapping boxes** return the *negative* fraction of the first box's
//!   area covered by the intersection, in `[-1.0, 0.0)`. Deeper overlap is
//!   more negative, so among overlapped candidates the most-covered one
//!   ranks first.
//! - **Separated boxes** return the positive edge-to-edge distance, computed
//!   per axis as `max(0, |center delta| - half-extent sum)` and combined
//!   with the Euclidean norm.
//! - **Touching edges** sit exactly at `0.0`.
//!
//! Folding overlap depth and physical separation into one ordering is a
//! deliberate trade: the two halves of the scale measure different things,
//! but any box that overlaps the dragged box always outranks every box that
//! does not, which is the behavior a reorder cursor wants.
//!
//! Box/vector arithmetic itself (translation, center) is [`kurbo`]'s job:
//! `Rect + Vec2`, `Rect - Vec2`, and [`Rect::center`] cover everything this
//! metric needs, so this crate adds only the metric and a gap helper.
//!
//! ## Minimal example
//!
//! ```
//! use espalier_proximity::proximity;
//! use kurbo::{Rect, Vec2};
//!
//! let target = Rect::new(100.0, 0.0, 150.0, 50.0);
//! let dragged = Rect::new(0.0, 0.0, 50.0, 50.0);
//!
//! // 50 units of clear air between the facing edges.
//! assert_eq!(proximity(dragged, target), 50.0);
//!
//! // Slide the dragged box until it covers the left fifth of the target.
//! let dragged = dragged + Vec2::new(60.0, 0.0);
//! assert_eq!(proximity(dragged, target), -0.2);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Rect, Vec2};

/// Signed proximity between two boxes.
///
/// Returns the negative fraction of `a`'s area covered by `b` when the boxes
/// overlap, and the positive edge-to-edge Euclidean distance when they do
/// not. `0.0` means the edges exactly touch.
///
/// The metric is not symmetric in the overlap case (the fraction is of `a`'s
/// area), so callers comparing several candidates against one dragged box
/// should keep the argument order fixed. Ranking candidates by `<` over this
/// value with a first-wins scan gives deterministic enumeration-order
/// tie-breaking.
pub fn proximity(a: Rect, b: Rect) -> f64 {
    let overlap_width = (a.x1.min(b.x1) - a.x0.max(b.x0)).max(0.0);
    let overlap_height = (a.y1.min(b.y1) - a.y0.max(b.y0)).max(0.0);
    let covered = (overlap_width * overlap_height) / a.area();

    if covered == 0.0 {
        let gap = Vec2::new(
            ((a.center().x - b.center().x).abs() - (a.width() + b.width()) / 2.0).max(0.0),
            ((a.center().y - b.center().y).abs() - (a.height() + b.height()) / 2.0).max(0.0),
        );
        gap.hypot()
    } else {
        -covered
    }
}

/// Minimum positive proximity between consecutive boxes.
///
/// Scans consecutive pairs in layout order and keeps the smallest strictly
/// positive gap; overlapping or touching pairs are skipped. Returns `None`
/// when fewer than two boxes are given or no pair has clear air between it.
///
/// This is the gap a zone uses to size its insertion cursor.
///
/// ```
/// use espalier_proximity::min_positive_gap;
/// use kurbo::Rect;
///
/// let row = [
///     Rect::new(0.0, 0.0, 50.0, 50.0),
///     Rect::new(60.0, 0.0, 110.0, 50.0),
///     Rect::new(140.0, 0.0, 190.0, 50.0),
/// ];
/// assert_eq!(min_positive_gap(&row), Some(10.0));
/// assert_eq!(min_positive_gap(&row[..1]), None);
/// ```
pub fn min_positive_gap(rects: &[Rect]) -> Option<f64> {
    let mut min = None;
    for pair in rects.windows(2) {
        let gap = proximity(pair[0], pair[1]);
        if gap > 0.0 && min.is_none_or(|m| gap < m) {
            min = Some(gap);
        }
    }
    min
}
