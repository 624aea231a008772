// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-gesture drag session state machine.

use smallvec::SmallVec;

use alloc::vec::Vec;

use espalier_zone::{DropHit, DropZone, ZoneError};
use kurbo::{Point, Rect};

use crate::surface::{Marker, Surface};

/// The dragged element's own candidate entry, located at gesture start.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Origin<E> {
    /// Zone whose candidate list contains the dragged element.
    pub zone: E,
    /// The dragged element's candidate index in that zone.
    pub index: usize,
}

/// A released gesture's final drop target, handed to a commit policy.
#[derive(Clone, Debug, PartialEq)]
pub struct DropResolution<E> {
    /// The element that was dragged.
    pub dragged: E,
    /// Where the dragged element started, if it was among any zone's
    /// candidates. Commit policies that need it treat `None` as a host
    /// wiring fault.
    pub origin: Option<Origin<E>>,
    /// Zone the drop resolved into.
    pub zone: E,
    /// Nearest candidate and insertion side at release time.
    pub hit: DropHit<E>,
}

/// State of one pointer-down-to-pointer-up reordering gesture.
///
/// A session is created on a qualifying pointer press, fed every subsequent
/// pointer position through [`update`](Self::update), and finished exactly
/// once via [`release`](Self::release) or [`cancel`](Self::cancel). It
/// exclusively owns the dragged element's translation and markers, every
/// zone's cursor, and the page-level dragging flag; teardown restores all of
/// them and is idempotent.
#[derive(Clone, Debug)]
pub struct DragSession<E> {
    anchor: Point,
    dragged: E,
    origin_rect: Rect,
    zones: SmallVec<[DropZone<E>; 4]>,
    origin: Option<Origin<E>>,
    resolution: Option<(E, DropHit<E>)>,
    disposed: bool,
}

impl<E: Copy + PartialEq> DragSession<E> {
    /// Start a session for `dragged` at the given anchor point.
    ///
    /// `zones` lists each qualifying zone container with its ordered
    /// candidate elements; boxes and layout are snapshotted through
    /// `surface` here and never refreshed during the gesture. Zone
    /// construction errors abort the start before any visual effect has
    /// been applied.
    pub fn begin<S: Surface<Element = E>>(
        surface: &mut S,
        dragged: E,
        anchor: Point,
        zones: impl IntoIterator<Item = (E, Vec<E>)>,
    ) -> Result<Self, ZoneError> {
        let mut resolved: SmallVec<[DropZone<E>; 4]> = SmallVec::new();
        for (zone, children) in zones {
            let rect = surface.bounding_box(zone);
            let layout = surface.zone_layout(zone);
            let children = children
                .into_iter()
                .map(|child| (child, surface.bounding_box(child)));
            resolved.push(DropZone::new(zone, rect, layout, children)?);
        }

        let origin = resolved.iter().find_map(|zone| {
            zone.candidates()
                .iter()
                .find(|candidate| candidate.element == dragged)
                .map(|candidate| Origin {
                    zone: zone.element(),
                    index: candidate.index,
                })
        });

        let origin_rect = surface.bounding_box(dragged);

        surface.set_page_dragging(true);
        surface.set_marker(dragged, Marker::DragSource, true);
        for zone in &resolved {
            surface.set_marker(zone.element(), Marker::PossibleZone, true);
        }

        log::debug!("starting drag session with {} drop zones", resolved.len());

        Ok(Self {
            anchor,
            dragged,
            origin_rect,
            zones: resolved,
            origin,
            resolution: None,
            disposed: false,
        })
    }

    /// The element being dragged.
    pub fn dragged(&self) -> E {
        self.dragged
    }

    /// The pointer position the gesture started at.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Returns `true` until the session has been released or cancelled.
    pub fn is_active(&self) -> bool {
        !self.disposed
    }

    /// The current drop resolution, if the last update landed in a zone.
    pub fn resolution(&self) -> Option<&DropHit<E>> {
        self.resolution.as_ref().map(|(_, hit)| hit)
    }

    /// Process a pointer move to the given position.
    ///
    /// Applies the pointer offset as the dragged element's visual
    /// translation, clears every zone's cursor and active marker, then asks
    /// each zone for a drop target in enumeration order. The first zone that
    /// reports a hit wins the pass outright; its cursor is drawn and the
    /// resolution stored. Zones are mutually exclusive per move, and a move
    /// that lands in no zone leaves no resolution behind.
    pub fn update<S: Surface<Element = E>>(&mut self, surface: &mut S, position: Point) {
        if self.disposed {
            return;
        }

        let offset = position - self.anchor;
        surface.set_translation(self.dragged, Some(offset));
        let dragged_rect = self.origin_rect + offset;

        // Clear first so a pass that crosses zone boundaries never leaves a
        // stale cursor behind.
        for zone in &self.zones {
            surface.clear_cursor(zone.element());
            surface.set_marker(zone.element(), Marker::ActiveZone, false);
        }
        self.resolution = None;

        for zone in &self.zones {
            if let Some(hit) = zone.find_drop_target(self.dragged, dragged_rect) {
                surface.set_marker(zone.element(), Marker::ActiveZone, true);
                if let Some(cursor) = zone.cursor_for(&hit) {
                    surface.show_cursor(zone.element(), cursor);
                }
                self.resolution = Some((zone.element(), hit));
                break;
            }
        }
    }

    /// Finish the gesture, returning the drop resolution if the last move
    /// landed in a zone.
    ///
    /// Teardown runs unconditionally. The resolution is taken, so a second
    /// release returns `None`; this is what limits a commit to once per
    /// session.
    pub fn release<S: Surface<Element = E>>(
        &mut self,
        surface: &mut S,
    ) -> Option<DropResolution<E>> {
        let resolution = self.resolution.take();
        let dragged = self.dragged;
        let origin = self.origin;
        self.teardown(surface);

        let (zone, hit) = resolution?;
        log::debug!("drag released over candidate {}", hit.candidate.index);
        Some(DropResolution {
            dragged,
            origin,
            zone,
            hit,
        })
    }

    /// Abandon the gesture without committing anything.
    ///
    /// Routes through the same teardown as release, so no listeners,
    /// transforms, or cursors can leak.
    pub fn cancel<S: Surface<Element = E>>(&mut self, surface: &mut S) {
        self.resolution = None;
        self.teardown(surface);
    }

    /// Restore every piece of host state the session owns.
    ///
    /// Idempotent: the first call clears the translation, markers, cursors,
    /// and page flag; later calls are no-ops.
    pub fn teardown<S: Surface<Element = E>>(&mut self, surface: &mut S) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.resolution = None;

        surface.set_translation(self.dragged, None);
        surface.set_marker(self.dragged, Marker::DragSource, false);
        surface.set_page_dragging(false);
        for zone in &self.zones {
            surface.clear_cursor(zone.element());
            surface.set_marker(zone.element(), Marker::ActiveZone, false);
            surface.set_marker(zone.element(), Marker::PossibleZone, false);
        }
    }
}
