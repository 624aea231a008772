// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for zone resolution: layout axes, candidates, and drop hits.

use alloc::string::String;

use kurbo::Rect;
use thiserror::Error;

/// Single-axis layout direction of a drop zone.
///
/// Mirrors the four flex-like flow directions. The reversed variants flip the
/// mapping from visual side to logical insertion position; see
/// [`Placement::relative`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FlexDirection {
    /// Candidates flow left to right.
    Row,
    /// Candidates flow right to left.
    RowReverse,
    /// Candidates flow top to bottom.
    Column,
    /// Candidates flow bottom to top.
    ColumnReverse,
}

impl FlexDirection {
    /// Returns `true` for the horizontal directions.
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// Returns `true` when the visual order is the reverse of the logical order.
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

/// How a zone container lays out its children, as reported by the host.
///
/// Hosts that cannot inspect computed layout at all should pass `None` to
/// [`DropZone::new`](crate::DropZone::new) instead; the zone then falls back
/// to [`FlexDirection::Row`] rather than failing the gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportedLayout {
    /// A single-axis flex container with the given direction.
    Flex(FlexDirection),
    /// A table section; rows always stack as [`FlexDirection::Column`] and
    /// the insertion cursor becomes a structural row marker.
    TableSection,
    /// Any other display model. Carries the host's name for it so the
    /// resulting error can say what was actually found.
    Other(String),
}

/// Errors raised while constructing a [`DropZone`](crate::DropZone).
///
/// These are configuration faults in the host markup, not runtime
/// conditions: they abort the gesture before it starts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ZoneError {
    /// The zone container is neither single-axis flex nor a table section,
    /// so no insertion axis can be derived from it.
    #[error(
        "drop zones must use a single-axis flex layout or be a table section, not `{display}`"
    )]
    UnsupportedLayout {
        /// The display model the host reported.
        display: String,
    },
}

/// The visual side of a candidate an insertion cursor attaches to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InsertDirection {
    /// Flush against the candidate's left edge.
    Left,
    /// Flush against the candidate's right edge.
    Right,
    /// Flush against the candidate's top edge.
    Top,
    /// Flush against the candidate's bottom edge.
    Bottom,
}

/// Logical insertion position relative to the candidate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InsertRelative {
    /// Insert as the candidate's previous sibling.
    Before,
    /// Insert as the candidate's next sibling.
    After,
}

/// Where a drop would land relative to the resolved candidate.
///
/// `direction` is purely visual (which edge the cursor hugs); `relative` is
/// the logical position and already accounts for reversed axes, so it is the
/// field commit strategies consume.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Edge of the candidate the cursor attaches to.
    pub direction: InsertDirection,
    /// Logical sibling position the drop maps to.
    pub relative: InsertRelative,
}

/// One reorderable element of a zone, snapshotted at gesture start.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate<E> {
    /// Host handle of the candidate element.
    pub element: E,
    /// Bounding box at gesture start.
    pub rect: Rect,
    /// Position among the zone's candidates at gesture start. Never
    /// renumbered mid-gesture.
    pub index: usize,
}

/// Result of one nearest-candidate query.
///
/// `placement` is `None` when the nearest candidate is the dragged element
/// itself: the drag has not moved far enough to matter, so there is nothing
/// to change and no cursor to draw.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DropHit<E> {
    /// The nearest candidate.
    pub candidate: Candidate<E>,
    /// Computed insertion side, absent for a self-match.
    pub placement: Option<Placement>,
}

/// Geometry of the transient insertion marker.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InsertionCursor<E> {
    /// A thin absolutely-positioned rect flush against the candidate's edge,
    /// in the same coordinate space as the candidate boxes.
    Overlay(Rect),
    /// A structural full-width marker row for table sections, to be placed
    /// before or after the anchor row.
    Row {
        /// Candidate row the marker is inserted next to.
        anchor: E,
        /// Which side of the anchor the marker row goes.
        relative: InsertRelative,
    },
}
