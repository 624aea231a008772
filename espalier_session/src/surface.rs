// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host surface a drag session drives.
//!
//! The engine never touches a real scene tree or DOM. Everything it needs
//! from the host — geometry queries, visual effects, structural moves — goes
//! through [`Surface`], keyed by an opaque copyable element handle the host
//! chooses (a node id, a generational index, an element reference wrapper).
//!
//! Visual effects are modeled as idempotent setters: the session may set a
//! marker that is already set or clear a cursor that is not shown, and the
//! host must treat both as no-ops. This is what makes session teardown safe
//! to run unconditionally.

use alloc::vec::Vec;

use espalier_zone::{InsertRelative, InsertionCursor, ReportedLayout};
use kurbo::{Rect, Vec2};

/// Visual flags a session toggles on individual elements.
///
/// Hosts typically map these to CSS classes or style layers. They are owned
/// exclusively by the active session: set on entry or resolution, cleared by
/// teardown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The element being dragged.
    DragSource,
    /// A container that could receive the drop.
    PossibleZone,
    /// The container the drag currently resolves into.
    ActiveZone,
}

/// Host-side operations a drag session is wired to.
///
/// Queries (`bounding_box`, `zone_layout`, `children`) must answer in the
/// same coordinate space the pointer positions use; the engine is agnostic
/// to which space that is as long as it is consistent within a gesture.
pub trait Surface {
    /// Opaque, copyable handle the host uses to identify elements.
    type Element: Copy + PartialEq;

    /// Bounding box of an element.
    fn bounding_box(&self, element: Self::Element) -> Rect;

    /// Computed layout of a zone container, or `None` when the host cannot
    /// inspect it (the zone then assumes a plain row).
    fn zone_layout(&self, zone: Self::Element) -> Option<ReportedLayout>;

    /// Apply (`Some`) or clear (`None`) the dragged element's visual
    /// translation from its resting position.
    fn set_translation(&mut self, element: Self::Element, offset: Option<Vec2>);

    /// Toggle a per-element visual marker.
    fn set_marker(&mut self, element: Self::Element, marker: Marker, on: bool);

    /// Toggle the page-level "a drag is in progress" flag.
    fn set_page_dragging(&mut self, on: bool);

    /// Show the insertion cursor for a zone, replacing any cursor the zone
    /// currently shows.
    fn show_cursor(&mut self, zone: Self::Element, cursor: InsertionCursor<Self::Element>);

    /// Remove the zone's insertion cursor if one is shown.
    fn clear_cursor(&mut self, zone: Self::Element);

    /// Structurally move `element` to be the sibling of `anchor` given by
    /// `relative`. Only invoked by the direct-relocation commit.
    fn relocate(
        &mut self,
        element: Self::Element,
        anchor: Self::Element,
        relative: InsertRelative,
    );

    /// Current child elements of a zone, in visual order. Queried after a
    /// relocation to report post-move child lists.
    fn children(&self, zone: Self::Element) -> Vec<Self::Element>;
}
