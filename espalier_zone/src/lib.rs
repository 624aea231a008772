// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=espalier_zone --heading-base-level=0

//! Espalier Zone: drop-zone resolution for pointer-driven reordering.
//!
//! A [`DropZone`] indexes one container's reorderable children at gesture
//! start and answers, for any translated position of the dragged box, *which
//! sibling is nearest and on which side would the drop land?* It is a pure
//! kernel: it holds snapshots and computes hits, while the session layer
//! applies visual state (active markers, cursors) from what it returns.
//!
//! ## Resolution model
//!
//! - Construction snapshots the zone's own box, every candidate's box with
//!   its original index, and derives two things: the **layout axis** (one of
//!   the four flex directions, or column for table sections) and the
//!   **cursor thickness** (the smallest clear gap between consecutive
//!   candidates, floored at [`MIN_CURSOR_SIZE`] so the cursor stays visible
//!   even when siblings touch).
//! - [`DropZone::find_drop_target`] first rejects drag boxes that do not
//!   overlap the zone at all, then ranks candidates by
//!   [`espalier_proximity::proximity`] with a first-wins scan, and finally
//!   computes the insertion side by comparing centers along the layout axis.
//! - The reversed axes invert the visual-side → logical-position mapping:
//!   "visually to the right" means *before* the candidate in a
//!   [`FlexDirection::RowReverse`] container. [`Placement`] carries both
//!   views so cursors stay visual and commits stay logical.
//!
//! ## Minimal example
//!
//! ```
//! use espalier_zone::{DropZone, FlexDirection, InsertDirection, InsertRelative, ReportedLayout};
//! use kurbo::Rect;
//!
//! // A row zone with two candidates and a dragged element (handle 9)
//! // hovering between them, slightly nearer the second.
//! let zone = DropZone::new(
//!     0_u32,
//!     Rect::new(0.0, 0.0, 160.0, 50.0),
//!     Some(ReportedLayout::Flex(FlexDirection::Row)),
//!     [
//!         (1, Rect::new(0.0, 0.0, 50.0, 50.0)),
//!         (2, Rect::new(100.0, 0.0, 150.0, 50.0)),
//!     ],
//! )
//! .unwrap();
//!
//! let dragged = Rect::new(55.0, 0.0, 105.0, 50.0);
//! let hit = zone.find_drop_target(9, dragged).unwrap();
//! let placement = hit.placement.unwrap();
//!
//! assert_eq!(hit.candidate.element, 2);
//! assert_eq!(placement.direction, InsertDirection::Left);
//! assert_eq!(placement.relative, InsertRelative::Before);
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod types;

pub use types::{
    Candidate, DropHit, FlexDirection, InsertDirection, InsertRelative, InsertionCursor,
    Placement, ReportedLayout, ZoneError,
};

use alloc::vec::Vec;

use espalier_proximity::{min_positive_gap, proximity};
use kurbo::Rect;

/// Minimum insertion-cursor thickness, in box units.
///
/// Guarantees a visible cursor even when candidates touch or overlap.
pub const MIN_CURSOR_SIZE: f64 = 8.0;

/// One drop zone's candidate index and insertion-side resolver.
///
/// Snapshot semantics: boxes and indices are captured at construction (i.e.
/// gesture start) and never refreshed. A zone is built per gesture and
/// discarded with it.
#[derive(Clone, Debug)]
pub struct DropZone<E> {
    element: E,
    rect: Rect,
    direction: FlexDirection,
    table_section: bool,
    candidates: Vec<Candidate<E>>,
    cursor_size: f64,
}

impl<E: Copy + PartialEq> DropZone<E> {
    /// Build a zone from its element handle, bounding box, host-reported
    /// layout, and ordered child elements with their boxes.
    ///
    /// `layout` of `None` means the host cannot inspect computed layout;
    /// the zone assumes [`FlexDirection::Row`] and logs a warning. A
    /// reported layout that is neither flex nor a table section fails with
    /// [`ZoneError::UnsupportedLayout`].
    pub fn new(
        element: E,
        rect: Rect,
        layout: Option<ReportedLayout>,
        children: impl IntoIterator<Item = (E, Rect)>,
    ) -> Result<Self, ZoneError> {
        let (direction, table_section) = match layout {
            Some(ReportedLayout::Flex(direction)) => (direction, false),
            Some(ReportedLayout::TableSection) => (FlexDirection::Column, true),
            Some(ReportedLayout::Other(display)) => {
                return Err(ZoneError::UnsupportedLayout { display });
            }
            None => {
                log::warn!("host cannot report zone layout, assuming flex-direction row");
                (FlexDirection::Row, false)
            }
        };

        let candidates: Vec<Candidate<E>> = children
            .into_iter()
            .enumerate()
            .map(|(index, (element, rect))| Candidate {
                element,
                rect,
                index,
            })
            .collect();

        let rects: Vec<Rect> = candidates.iter().map(|c| c.rect).collect();
        let cursor_size =
            min_positive_gap(&rects).map_or(MIN_CURSOR_SIZE, |gap| gap.max(MIN_CURSOR_SIZE));
        log::debug!(
            "{direction:?} drop zone with {} candidates has cursor size {cursor_size}",
            candidates.len()
        );

        Ok(Self {
            element,
            rect,
            direction,
            table_section,
            candidates,
            cursor_size,
        })
    }

    /// Host handle of the zone container.
    pub fn element(&self) -> E {
        self.element
    }

    /// The zone's bounding box at gesture start.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Resolved layout axis.
    pub fn direction(&self) -> FlexDirection {
        self.direction
    }

    /// Whether the zone is a table section (structural cursor rows).
    pub fn is_table_section(&self) -> bool {
        self.table_section
    }

    /// The candidate snapshot, in enumeration order.
    pub fn candidates(&self) -> &[Candidate<E>] {
        &self.candidates
    }

    /// Insertion-cursor thickness derived at construction.
    pub fn cursor_size(&self) -> f64 {
        self.cursor_size
    }

    /// Find the nearest candidate for the given translated drag box.
    ///
    /// Returns `None` when the drag box does not overlap the zone. Otherwise
    /// the hit names the minimum-proximity candidate (ties broken by
    /// enumeration order) and, unless that candidate is `dragged` itself,
    /// the computed [`Placement`].
    pub fn find_drop_target(&self, dragged: E, dragged_rect: Rect) -> Option<DropHit<E>> {
        if proximity(self.rect, dragged_rect) >= 0.0 {
            return None;
        }

        let mut best: Option<Candidate<E>> = None;
        let mut best_proximity = f64::INFINITY;
        for candidate in &self.candidates {
            let p = proximity(candidate.rect, dragged_rect);
            if p < best_proximity {
                best_proximity = p;
                best = Some(*candidate);
            }
        }
        let candidate = best?;

        if candidate.element == dragged {
            // Nearest to itself: a hit, but nothing to change.
            return Some(DropHit {
                candidate,
                placement: None,
            });
        }

        let placement = self.placement_for(&candidate, dragged_rect);
        log::trace!(
            "insert {:?} {:?} of candidate {}",
            placement.relative,
            placement.direction,
            candidate.index
        );
        Some(DropHit {
            candidate,
            placement: Some(placement),
        })
    }

    /// Compute which side of `candidate` the drag box is on, comparing
    /// centers along the zone's layout axis.
    fn placement_for(&self, candidate: &Candidate<E>, dragged_rect: Rect) -> Placement {
        let dragged_center = dragged_rect.center();
        let candidate_center = candidate.rect.center();
        let reversed = self.direction.is_reversed();

        if self.direction.is_row() {
            if dragged_center.x >= candidate_center.x {
                Placement {
                    direction: InsertDirection::Right,
                    relative: if reversed {
                        InsertRelative::Before
                    } else {
                        InsertRelative::After
                    },
                }
            } else {
                Placement {
                    direction: InsertDirection::Left,
                    relative: if reversed {
                        InsertRelative::After
                    } else {
                        InsertRelative::Before
                    },
                }
            }
        } else if dragged_center.y >= candidate_center.y {
            Placement {
                direction: InsertDirection::Bottom,
                relative: if reversed {
                    InsertRelative::Before
                } else {
                    InsertRelative::After
                },
            }
        } else {
            Placement {
                direction: InsertDirection::Top,
                relative: if reversed {
                    InsertRelative::After
                } else {
                    InsertRelative::Before
                },
            }
        }
    }

    /// Insertion-cursor geometry for a hit, or `None` for a self-match.
    ///
    /// Flex zones get a thin [`InsertionCursor::Overlay`] rect flush against
    /// the candidate's edge, offset outward by the cursor thickness and
    /// spanning the candidate's cross-axis extent. Table sections get a
    /// structural [`InsertionCursor::Row`] instead.
    pub fn cursor_for(&self, hit: &DropHit<E>) -> Option<InsertionCursor<E>> {
        let placement = hit.placement?;

        if self.table_section {
            return Some(InsertionCursor::Row {
                anchor: hit.candidate.element,
                relative: placement.relative,
            });
        }

        let r = hit.candidate.rect;
        let size = self.cursor_size;
        let rect = match placement.direction {
            InsertDirection::Left => Rect::new(r.x0 - size, r.y0, r.x0, r.y1),
            InsertDirection::Right => Rect::new(r.x1, r.y0, r.x1 + size, r.y1),
            InsertDirection::Top => Rect::new(r.x0, r.y0 - size, r.x1, r.y0),
            InsertDirection::Bottom => Rect::new(r.x0, r.y1, r.x1, r.y1 + size),
        };
        Some(InsertionCursor::Overlay(rect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn row_zone() -> DropZone<u32> {
        DropZone::new(
            0,
            Rect::new(0.0, 0.0, 160.0, 50.0),
            Some(ReportedLayout::Flex(FlexDirection::Row)),
            [
                (1, Rect::new(0.0, 0.0, 50.0, 50.0)),
                (2, Rect::new(100.0, 0.0, 150.0, 50.0)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn unsupported_layout_is_a_construction_error() {
        let err = DropZone::<u32>::new(
            0,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Some(ReportedLayout::Other("grid".to_string())),
            [],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ZoneError::UnsupportedLayout {
                display: "grid".to_string()
            }
        );
    }

    #[test]
    fn unreported_layout_falls_back_to_row() {
        let zone = DropZone::<u32>::new(0, Rect::new(0.0, 0.0, 100.0, 100.0), None, []).unwrap();
        assert_eq!(zone.direction(), FlexDirection::Row);
        assert!(!zone.is_table_section());
    }

    #[test]
    fn table_sections_resolve_as_columns() {
        let zone = DropZone::new(
            0_u32,
            Rect::new(0.0, 0.0, 100.0, 60.0),
            Some(ReportedLayout::TableSection),
            [
                (1, Rect::new(0.0, 0.0, 100.0, 20.0)),
                (2, Rect::new(0.0, 20.0, 100.0, 40.0)),
            ],
        )
        .unwrap();
        assert_eq!(zone.direction(), FlexDirection::Column);
        assert!(zone.is_table_section());
    }

    #[test]
    fn cursor_size_floors_at_the_minimum() {
        // Candidates spaced 2 units apart still get a visible cursor.
        let zone = DropZone::new(
            0_u32,
            Rect::new(0.0, 0.0, 160.0, 50.0),
            Some(ReportedLayout::Flex(FlexDirection::Row)),
            [
                (1, Rect::new(0.0, 0.0, 50.0, 50.0)),
                (2, Rect::new(52.0, 0.0, 102.0, 50.0)),
            ],
        )
        .unwrap();
        assert_eq!(zone.cursor_size(), MIN_CURSOR_SIZE);
    }

    #[test]
    fn cursor_size_uses_the_smallest_clear_gap() {
        let zone = DropZone::new(
            0_u32,
            Rect::new(0.0, 0.0, 300.0, 50.0),
            Some(ReportedLayout::Flex(FlexDirection::Row)),
            [
                (1, Rect::new(0.0, 0.0, 50.0, 50.0)),
                (2, Rect::new(62.0, 0.0, 112.0, 50.0)),
                (3, Rect::new(130.0, 0.0, 180.0, 50.0)),
            ],
        )
        .unwrap();
        assert_eq!(zone.cursor_size(), 12.0);
    }

    #[test]
    fn drag_box_outside_the_zone_is_no_match() {
        let zone = row_zone();
        let outside = Rect::new(200.0, 0.0, 250.0, 50.0);
        assert_eq!(zone.find_drop_target(9, outside), None);
        // Touching the zone edge still counts as outside.
        let touching = Rect::new(160.0, 0.0, 210.0, 50.0);
        assert_eq!(zone.find_drop_target(9, touching), None);
    }

    #[test]
    fn row_axis_resolves_nearest_candidate_and_side() {
        let zone = row_zone();
        // Centered at x=80: clear of the first candidate, overlapping the
        // second, and left of its center.
        let dragged = Rect::new(55.0, 0.0, 105.0, 50.0);
        let hit = zone.find_drop_target(9, dragged).unwrap();
        assert_eq!(hit.candidate.element, 2);
        assert_eq!(hit.candidate.index, 1);
        assert_eq!(
            hit.placement,
            Some(Placement {
                direction: InsertDirection::Left,
                relative: InsertRelative::Before,
            })
        );
    }

    #[test]
    fn reversed_row_inverts_the_logical_side() {
        let zone = DropZone::new(
            0_u32,
            Rect::new(0.0, 0.0, 160.0, 50.0),
            Some(ReportedLayout::Flex(FlexDirection::RowReverse)),
            [
                (1, Rect::new(0.0, 0.0, 50.0, 50.0)),
                (2, Rect::new(100.0, 0.0, 150.0, 50.0)),
            ],
        )
        .unwrap();
        let dragged = Rect::new(55.0, 0.0, 105.0, 50.0);
        let placement = zone.find_drop_target(9, dragged).unwrap().placement.unwrap();
        // Same visual side as the `Row` case, opposite logical position.
        assert_eq!(placement.direction, InsertDirection::Left);
        assert_eq!(placement.relative, InsertRelative::After);
    }

    #[test]
    fn column_axis_compares_vertical_centers() {
        let zone = DropZone::new(
            0_u32,
            Rect::new(0.0, 0.0, 50.0, 160.0),
            Some(ReportedLayout::Flex(FlexDirection::Column)),
            [
                (1, Rect::new(0.0, 0.0, 50.0, 50.0)),
                (2, Rect::new(0.0, 100.0, 50.0, 150.0)),
            ],
        )
        .unwrap();
        // Below the second candidate's center.
        let dragged = Rect::new(0.0, 110.0, 50.0, 160.0);
        let placement = zone.find_drop_target(9, dragged).unwrap().placement.unwrap();
        assert_eq!(placement.direction, InsertDirection::Bottom);
        assert_eq!(placement.relative, InsertRelative::After);
    }

    #[test]
    fn nearest_self_is_a_hit_without_placement() {
        let zone = row_zone();
        // Barely moved from candidate 1's own spot.
        let dragged = Rect::new(2.0, 0.0, 52.0, 50.0);
        let hit = zone.find_drop_target(1, dragged).unwrap();
        assert_eq!(hit.candidate.element, 1);
        assert_eq!(hit.placement, None);
        assert_eq!(zone.cursor_for(&hit), None);
    }

    #[test]
    fn ties_resolve_to_the_first_enumerated_candidate() {
        let zone = DropZone::new(
            0_u32,
            Rect::new(0.0, 0.0, 200.0, 50.0),
            Some(ReportedLayout::Flex(FlexDirection::Row)),
            [
                (1, Rect::new(0.0, 0.0, 50.0, 50.0)),
                (2, Rect::new(0.0, 0.0, 50.0, 50.0)),
            ],
        )
        .unwrap();
        let dragged = Rect::new(10.0, 0.0, 60.0, 50.0);
        let hit = zone.find_drop_target(9, dragged).unwrap();
        assert_eq!(hit.candidate.element, 1);
    }

    #[test]
    fn overlay_cursor_hugs_the_relevant_edge() {
        let zone = row_zone();
        let hit = zone
            .find_drop_target(9, Rect::new(55.0, 0.0, 105.0, 50.0))
            .unwrap();
        let cursor = zone.cursor_for(&hit).unwrap();
        // Left of candidate 2 at x0=100, one cursor-size thick, full height.
        let size = zone.cursor_size();
        assert_eq!(
            cursor,
            InsertionCursor::Overlay(Rect::new(100.0 - size, 0.0, 100.0, 50.0))
        );
    }

    #[test]
    fn column_cursor_spans_the_candidate_width() {
        let zone = DropZone::new(
            0_u32,
            Rect::new(0.0, 0.0, 50.0, 160.0),
            Some(ReportedLayout::Flex(FlexDirection::Column)),
            [
                (1, Rect::new(0.0, 0.0, 50.0, 50.0)),
                (2, Rect::new(0.0, 100.0, 50.0, 150.0)),
            ],
        )
        .unwrap();
        let hit = zone
            .find_drop_target(9, Rect::new(0.0, 110.0, 50.0, 160.0))
            .unwrap();
        let cursor = zone.cursor_for(&hit).unwrap();
        // Below candidate 2 at y1=150, one cursor-size tall, full width.
        let size = zone.cursor_size();
        assert_eq!(
            cursor,
            InsertionCursor::Overlay(Rect::new(0.0, 150.0, 50.0, 150.0 + size))
        );
    }

    #[test]
    fn table_sections_get_a_structural_cursor_row() {
        let zone = DropZone::new(
            0_u32,
            Rect::new(0.0, 0.0, 100.0, 60.0),
            Some(ReportedLayout::TableSection),
            [
                (1, Rect::new(0.0, 0.0, 100.0, 20.0)),
                (2, Rect::new(0.0, 20.0, 100.0, 40.0)),
            ],
        )
        .unwrap();
        let dragged = Rect::new(0.0, 25.0, 100.0, 45.0);
        let hit = zone.find_drop_target(9, dragged).unwrap();
        let cursor = zone.cursor_for(&hit).unwrap();
        assert_eq!(
            cursor,
            InsertionCursor::Row {
                anchor: 2,
                relative: InsertRelative::After,
            }
        );
    }
}
