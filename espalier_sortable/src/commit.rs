// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Commit policies: how a resolved drop is applied to the host.
//!
//! Two interchangeable policies cover the two ways hosts model reorderable
//! content:
//!
//! - [`Relocate`] moves the dragged element itself, for hosts whose element
//!   tree *is* the source of truth.
//! - [`Reorder`] splices the dragged element's backing value within an
//!   abstract sequence and hands the reordered sequence back to the host to
//!   re-render, for hosts that render elements from state.
//!
//! Both treat a self-match resolution (placement absent) as a no-op: the
//! drop changes nothing and produces no event.

use core::marker::PhantomData;

use alloc::vec::Vec;

use espalier_session::{DropResolution, Surface};
use espalier_zone::InsertRelative;
use thiserror::Error;

/// Faults raised while applying a resolved drop.
///
/// These indicate host wiring problems, not user gestures; per the error
/// taxonomy they are reported, never silently swallowed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommitError {
    /// The dragged element was not among any zone's candidates at gesture
    /// start, so there is no origin zone to report the move from.
    #[error("dragged element is not a candidate of any drop zone")]
    DraggedNotInZone,
    /// The dragged element has no backing value in the destination zone's
    /// sequence.
    #[error("dragged element has no backing value in the reordered sequence")]
    DraggedNotInSequence,
    /// The host's backing sequence is shorter than the candidate indices
    /// resolved against it.
    #[error("backing sequence (len {len}) does not cover the resolved candidate indices")]
    SequenceMismatch {
        /// Length of the sequence the host returned.
        len: usize,
    },
}

/// Notification produced by a committed [`Relocate`] drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortEvent<E> {
    /// Zone the dragged element left.
    pub from_zone: E,
    /// Zone the dragged element landed in (may equal `from_zone`).
    pub to_zone: E,
    /// `from_zone`'s children after the move.
    pub from_children: Vec<E>,
    /// `to_zone`'s children after the move.
    pub to_children: Vec<E>,
    /// The element that moved.
    pub target: E,
}

/// Notification produced by a committed [`Reorder`] drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortCollectionEvent<T> {
    /// The full sequence in its new order.
    pub sequence: Vec<T>,
    /// The value that moved.
    pub moved: T,
    /// The value's index before the move.
    pub old_index: usize,
    /// The value's index after the move.
    pub new_index: usize,
}

/// Policy for applying a resolved drop.
///
/// Selected by configuration on the [`Sortable`](crate::Sortable)
/// controller; the session algorithm itself never forks on the policy.
pub trait CommitPolicy<S: Surface> {
    /// Notification type handed back to the application.
    type Event;

    /// Apply the drop. Returns `Ok(None)` when there is nothing to change
    /// (self-match resolutions).
    fn commit(
        &mut self,
        surface: &mut S,
        resolution: &DropResolution<S::Element>,
    ) -> Result<Option<Self::Event>, CommitError>;
}

/// Direct relocation: move the dragged element next to the resolved
/// candidate and report both zones' post-move child lists.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Relocate;

impl<S: Surface> CommitPolicy<S> for Relocate {
    type Event = SortEvent<S::Element>;

    fn commit(
        &mut self,
        surface: &mut S,
        resolution: &DropResolution<S::Element>,
    ) -> Result<Option<Self::Event>, CommitError> {
        let Some(placement) = resolution.hit.placement else {
            return Ok(None);
        };
        let origin = resolution.origin.ok_or(CommitError::DraggedNotInZone)?;

        surface.relocate(
            resolution.dragged,
            resolution.hit.candidate.element,
            placement.relative,
        );

        // Re-enumerate after the move so the lists reflect the new order.
        let from_children = surface.children(origin.zone);
        let to_children = surface.children(resolution.zone);
        Ok(Some(SortEvent {
            from_zone: origin.zone,
            to_zone: resolution.zone,
            from_children,
            to_children,
            target: resolution.dragged,
        }))
    }
}

/// Host access to the abstract sequence behind a zone's candidates.
///
/// The engine only ever reads the sequence, removes one value, and resubmits
/// the full reordered list; ownership stays with the host.
pub trait SequenceSurface<T>: Surface {
    /// The backing values, one per candidate, in candidate order.
    fn sequence(&self) -> Vec<T>;

    /// Replace the backing values and re-render the zone from the new order.
    fn assign_sequence(&mut self, values: Vec<T>);
}

/// Logical reorder: splice the dragged element's backing value within the
/// host's sequence and let the host re-render from the result.
#[derive(Debug)]
pub struct Reorder<T>(PhantomData<T>);

impl<T> Reorder<T> {
    /// Create the policy.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Reorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, S: SequenceSurface<T>> CommitPolicy<S> for Reorder<T> {
    type Event = SortCollectionEvent<T>;

    fn commit(
        &mut self,
        surface: &mut S,
        resolution: &DropResolution<S::Element>,
    ) -> Result<Option<Self::Event>, CommitError> {
        let Some(placement) = resolution.hit.placement else {
            return Ok(None);
        };
        let origin = resolution.origin.ok_or(CommitError::DraggedNotInSequence)?;
        if origin.zone != resolution.zone {
            // The drop landed in a zone whose sequence does not contain the
            // dragged value.
            return Err(CommitError::DraggedNotInSequence);
        }

        let mut values = surface.sequence();
        let candidate_index = resolution.hit.candidate.index;
        if origin.index >= values.len() || candidate_index >= values.len() {
            return Err(CommitError::SequenceMismatch { len: values.len() });
        }

        let old_index = origin.index;
        let moved = values.remove(old_index);
        let raw = match placement.relative {
            InsertRelative::Before => candidate_index,
            InsertRelative::After => candidate_index + 1,
        };
        // Removing the dragged value shifts every slot at or after it left
        // by one, so an insertion point past the old slot comes down with it.
        let new_index = if old_index < raw { raw - 1 } else { raw };
        values.insert(new_index, moved.clone());

        surface.assign_sequence(values.clone());
        log::debug!("reordered sequence value from {old_index} to {new_index}");
        Ok(Some(SortCollectionEvent {
            sequence: values,
            moved,
            old_index,
            new_index,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use espalier_session::Origin;
    use espalier_zone::{Candidate, DropHit, InsertDirection, Placement, ReportedLayout};
    use kurbo::{Rect, Vec2};

    const ZONE: u32 = 100;

    /// Minimal host with one zone: `order` is the element tree, `values`
    /// the backing sequence.
    struct ListSurface {
        order: Vec<u32>,
        values: Vec<char>,
    }

    impl Surface for ListSurface {
        type Element = u32;

        fn bounding_box(&self, _element: u32) -> Rect {
            Rect::ZERO
        }

        fn zone_layout(&self, _zone: u32) -> Option<ReportedLayout> {
            None
        }

        fn set_translation(&mut self, _element: u32, _offset: Option<Vec2>) {}

        fn set_marker(&mut self, _element: u32, _marker: espalier_session::Marker, _on: bool) {}

        fn set_page_dragging(&mut self, _on: bool) {}

        fn show_cursor(&mut self, _zone: u32, _cursor: espalier_zone::InsertionCursor<u32>) {}

        fn clear_cursor(&mut self, _zone: u32) {}

        fn relocate(&mut self, element: u32, anchor: u32, relative: InsertRelative) {
            self.order.retain(|e| *e != element);
            let at = self.order.iter().position(|e| *e == anchor).unwrap();
            let at = match relative {
                InsertRelative::Before => at,
                InsertRelative::After => at + 1,
            };
            self.order.insert(at, element);
        }

        fn children(&self, _zone: u32) -> Vec<u32> {
            self.order.clone()
        }
    }

    impl SequenceSurface<char> for ListSurface {
        fn sequence(&self) -> Vec<char> {
            self.values.clone()
        }

        fn assign_sequence(&mut self, values: Vec<char>) {
            self.values = values;
        }
    }

    fn resolution(
        dragged: u32,
        origin_index: usize,
        candidate: u32,
        candidate_index: usize,
        relative: InsertRelative,
    ) -> DropResolution<u32> {
        DropResolution {
            dragged,
            origin: Some(Origin {
                zone: ZONE,
                index: origin_index,
            }),
            zone: ZONE,
            hit: DropHit {
                candidate: Candidate {
                    element: candidate,
                    rect: Rect::ZERO,
                    index: candidate_index,
                },
                placement: Some(Placement {
                    direction: InsertDirection::Right,
                    relative,
                }),
            },
        }
    }

    #[test]
    fn relocate_moves_the_element_and_reports_child_lists() {
        let mut surface = ListSurface {
            order: vec![1, 2, 3],
            values: vec![],
        };
        let resolution = resolution(1, 0, 2, 1, InsertRelative::After);

        let event = Relocate.commit(&mut surface, &resolution).unwrap().unwrap();
        assert_eq!(surface.order, vec![2, 1, 3]);
        assert_eq!(event.from_zone, ZONE);
        assert_eq!(event.to_zone, ZONE);
        assert_eq!(event.from_children, vec![2, 1, 3]);
        assert_eq!(event.to_children, vec![2, 1, 3]);
        assert_eq!(event.target, 1);
    }

    #[test]
    fn relocate_without_an_origin_is_a_wiring_fault() {
        let mut surface = ListSurface {
            order: vec![1, 2],
            values: vec![],
        };
        let mut resolution = resolution(9, 0, 2, 1, InsertRelative::Before);
        resolution.origin = None;

        assert_eq!(
            Relocate.commit(&mut surface, &resolution),
            Err(CommitError::DraggedNotInZone)
        );
        // Nothing moved.
        assert_eq!(surface.order, vec![1, 2]);
    }

    #[test]
    fn self_match_commits_nothing() {
        let mut surface = ListSurface {
            order: vec![1, 2],
            values: vec!['a', 'b'],
        };
        let mut res = resolution(1, 0, 1, 0, InsertRelative::After);
        res.hit.placement = None;

        assert_eq!(Relocate.commit(&mut surface, &res), Ok(None));
        assert_eq!(
            Reorder::<char>::new().commit(&mut surface, &res),
            Ok(None)
        );
        assert_eq!(surface.order, vec![1, 2]);
        assert_eq!(surface.values, vec!['a', 'b']);
    }

    #[test]
    fn reorder_corrects_the_insertion_index_for_forward_moves() {
        // [A,B,C,D], drag A after C: raw index 3 corrects to 2.
        let mut surface = ListSurface {
            order: vec![1, 2, 3, 4],
            values: vec!['a', 'b', 'c', 'd'],
        };
        let resolution = resolution(1, 0, 3, 2, InsertRelative::After);

        let event = Reorder::new().commit(&mut surface, &resolution).unwrap().unwrap();
        assert_eq!(surface.values, vec!['b', 'c', 'a', 'd']);
        assert_eq!(event.sequence, vec!['b', 'c', 'a', 'd']);
        assert_eq!(event.moved, 'a');
        assert_eq!(event.old_index, 0);
        assert_eq!(event.new_index, 2);
    }

    #[test]
    fn reorder_backward_moves_need_no_correction() {
        // [A,B,C,D], drag D before B: raw index 1 stays 1.
        let mut surface = ListSurface {
            order: vec![1, 2, 3, 4],
            values: vec!['a', 'b', 'c', 'd'],
        };
        let resolution = resolution(4, 3, 2, 1, InsertRelative::Before);

        let event = Reorder::new().commit(&mut surface, &resolution).unwrap().unwrap();
        assert_eq!(surface.values, vec!['a', 'd', 'b', 'c']);
        assert_eq!(event.old_index, 3);
        assert_eq!(event.new_index, 1);
    }

    #[test]
    fn reorder_without_a_backing_value_is_a_wiring_fault() {
        let mut surface = ListSurface {
            order: vec![1, 2],
            values: vec!['a', 'b'],
        };
        let mut res = resolution(9, 0, 2, 1, InsertRelative::After);
        res.origin = None;

        assert_eq!(
            Reorder::<char>::new().commit(&mut surface, &res),
            Err(CommitError::DraggedNotInSequence)
        );
    }

    #[test]
    fn reorder_rejects_a_sequence_shorter_than_the_candidates() {
        let mut surface = ListSurface {
            order: vec![1, 2, 3],
            values: vec!['a'],
        };
        let res = resolution(1, 0, 3, 2, InsertRelative::After);

        assert_eq!(
            Reorder::<char>::new().commit(&mut surface, &res),
            Err(CommitError::SequenceMismatch { len: 1 })
        );
        assert_eq!(surface.values, vec!['a']);
    }
}
