// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=espalier_sortable --heading-base-level=0

//! Espalier Sortable: the host-facing reordering controller.
//!
//! [`Sortable`] is the adapter between an application's pointer events and
//! the drag-session kernel. It owns at most one in-flight
//! [`DragSession`] (`Option` held here is the only gate on concurrent
//! gestures), applies the pointer-down gating policy, and runs the
//! configured [commit policy](commit::CommitPolicy) when the gesture ends,
//! handing the resulting [`SortEvent`]/[`SortCollectionEvent`] back to the
//! caller.
//!
//! ## Gating
//!
//! A press starts a gesture only when all of these hold:
//!
//! - no session is already in flight,
//! - it is a primary-button press of the primary pointer,
//! - it did not land on an interactive form control,
//! - it landed inside a drag handle, when
//!   [`SortableConfig::require_handle`] is set,
//! - the host resolved it to a candidate item inside a qualifying zone.
//!
//! Element discovery stays host-side: the host's selector or predicate
//! machinery resolves the pressed element chain into a [`Press`] and the
//! zone → candidates map, and the controller owns only the policy above.
//!
//! ## Minimal example
//!
//! ```
//! # use espalier_sortable::{commit::Relocate, Press, Sortable};
//! # use espalier_session::{Marker, Surface};
//! # use espalier_zone::{FlexDirection, InsertRelative, InsertionCursor, ReportedLayout};
//! # use kurbo::{Point, Rect, Vec2};
//! # struct App { order: Vec<u32> }
//! # impl Surface for App {
//! #     type Element = u32;
//! #     fn bounding_box(&self, element: u32) -> Rect {
//! #         match element {
//! #             0 => Rect::new(0.0, 0.0, 170.0, 50.0),
//! #             e => {
//! #                 let at = self.order.iter().position(|o| *o == e).unwrap() as f64;
//! #                 Rect::new(at * 60.0, 0.0, at * 60.0 + 50.0, 50.0)
//! #             }
//! #         }
//! #     }
//! #     fn zone_layout(&self, _zone: u32) -> Option<ReportedLayout> {
//! #         Some(ReportedLayout::Flex(FlexDirection::Row))
//! #     }
//! #     fn set_translation(&mut self, _element: u32, _offset: Option<Vec2>) {}
//! #     fn set_marker(&mut self, _element: u32, _marker: Marker, _on: bool) {}
//! #     fn set_page_dragging(&mut self, _on: bool) {}
//! #     fn show_cursor(&mut self, _zone: u32, _cursor: InsertionCursor<u32>) {}
//! #     fn clear_cursor(&mut self, _zone: u32) {}
//! #     fn relocate(&mut self, element: u32, anchor: u32, relative: InsertRelative) {
//! #         self.order.retain(|e| *e != element);
//! #         let at = self.order.iter().position(|e| *e == anchor).unwrap();
//! #         let at = if relative == InsertRelative::After { at + 1 } else { at };
//! #         self.order.insert(at, element);
//! #     }
//! #     fn children(&self, _zone: u32) -> Vec<u32> { self.order.clone() }
//! # }
//! let mut app = App { order: vec![1, 2, 3] };
//! let mut sortable = Sortable::new(Relocate);
//!
//! // Zone 0 holds items 1, 2, 3; the press lands on item 1.
//! let started = sortable
//!     .pointer_down(
//!         &mut app,
//!         Press::at(Point::new(25.0, 25.0)).item(1),
//!         [(0, vec![1, 2, 3])],
//!     )
//!     .unwrap();
//! assert!(started);
//!
//! // Drag item 1 to the right of item 2 and drop it there.
//! sortable.pointer_move(&mut app, Point::new(110.0, 25.0));
//! let event = sortable.pointer_up(&mut app).unwrap().unwrap();
//! assert_eq!(event.to_children, vec![2, 1, 3]);
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

pub mod commit;

pub use commit::{SortCollectionEvent, SortEvent};

use alloc::vec::Vec;

use espalier_session::{DragSession, Surface};
use espalier_zone::ZoneError;
use kurbo::Point;
use ui_events::pointer::{PointerButton, PointerButtonEvent, PointerEvent, PointerUpdate};

use crate::commit::{CommitError, CommitPolicy};

/// A resolved pointer press, as described by the host's hit testing.
///
/// The host decides *what* was pressed (which candidate item, whether the
/// press was on a form control or inside a drag handle); the controller
/// decides whether that press starts a gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Press<E> {
    /// Pointer position of the press, in the surface's coordinate space.
    pub position: Point,
    /// Button of the press, `None` for buttonless pointers.
    pub button: Option<PointerButton>,
    /// Whether this is the primary pointer of its kind.
    pub primary_pointer: bool,
    /// The candidate item containing the press, if any.
    pub item: Option<E>,
    /// The press landed on an interactive form control.
    pub form_control: bool,
    /// The press landed inside a drag handle.
    pub handle: bool,
}

impl<E> Press<E> {
    /// A primary press at `position` with nothing resolved yet.
    pub fn at(position: Point) -> Self {
        Self {
            position,
            button: None,
            primary_pointer: true,
            item: None,
            form_control: false,
            handle: false,
        }
    }

    /// Extract position and button state from a `ui-events` press.
    ///
    /// Item, form-control, and handle resolution remain with the host; chain
    /// the builder methods to fill them in.
    pub fn from_button_event(event: &PointerButtonEvent) -> Self {
        Self {
            position: event.state.logical_point(),
            button: event.button,
            primary_pointer: event.pointer.is_primary_pointer(),
            item: None,
            form_control: false,
            handle: false,
        }
    }

    /// Set the candidate item containing the press.
    #[must_use]
    pub fn item(mut self, item: E) -> Self {
        self.item = Some(item);
        self
    }

    /// Mark the press as landing on a form control.
    #[must_use]
    pub fn form_control(mut self, on: bool) -> Self {
        self.form_control = on;
        self
    }

    /// Mark the press as landing inside a drag handle.
    #[must_use]
    pub fn handle(mut self, on: bool) -> Self {
        self.handle = on;
        self
    }

    fn is_primary(&self) -> bool {
        self.primary_pointer && self.button.is_none_or(|b| b == PointerButton::Primary)
    }
}

/// Gating configuration for the controller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SortableConfig {
    /// When set, only presses inside a drag handle start a gesture.
    pub require_handle: bool,
}

/// The reordering controller: one per sortable surface region.
///
/// Generic over the element handle type and the commit policy; the session
/// algorithm is shared, so swapping [`commit::Relocate`] for
/// [`commit::Reorder`] changes only what happens at release.
#[derive(Debug)]
pub struct Sortable<E, C> {
    config: SortableConfig,
    policy: C,
    session: Option<DragSession<E>>,
}

impl<E: Copy + PartialEq, C> Sortable<E, C> {
    /// Create a controller with the default configuration.
    pub fn new(policy: C) -> Self {
        Self::with_config(policy, SortableConfig::default())
    }

    /// Create a controller with explicit gating configuration.
    pub fn with_config(policy: C, config: SortableConfig) -> Self {
        Self {
            config,
            policy,
            session: None,
        }
    }

    /// Returns `true` while a gesture is in flight.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Consider starting a gesture from a resolved press.
    ///
    /// `zones` lists each qualifying zone with its ordered candidate
    /// elements, in enumeration order (which is also resolution priority).
    /// Returns `Ok(true)` when a session started, `Ok(false)` when the press
    /// was gated out, and a [`ZoneError`] when a zone is misconfigured.
    pub fn pointer_down<S: Surface<Element = E>>(
        &mut self,
        surface: &mut S,
        press: Press<E>,
        zones: impl IntoIterator<Item = (E, Vec<E>)>,
    ) -> Result<bool, ZoneError> {
        if self.session.is_some() {
            log::debug!("ignoring press: a drag session is already in flight");
            return Ok(false);
        }
        if !press.is_primary() {
            return Ok(false);
        }
        if press.form_control {
            // Leave form controls usable inside sortable items.
            return Ok(false);
        }
        if self.config.require_handle && !press.handle {
            return Ok(false);
        }
        let Some(item) = press.item else {
            return Ok(false);
        };

        let session = DragSession::begin(surface, item, press.position, zones)?;
        self.session = Some(session);
        Ok(true)
    }

    /// Forward a pointer move to the in-flight session, if any.
    pub fn pointer_move<S: Surface<Element = E>>(&mut self, surface: &mut S, position: Point) {
        if let Some(session) = &mut self.session {
            session.update(surface, position);
        }
    }

    /// Finish the in-flight gesture and apply the commit policy.
    ///
    /// Returns the policy's notification event when a drop resolved and
    /// changed something, `Ok(None)` otherwise. The session is consumed
    /// either way.
    pub fn pointer_up<S: Surface<Element = E>>(
        &mut self,
        surface: &mut S,
    ) -> Result<Option<C::Event>, CommitError>
    where
        C: CommitPolicy<S>,
    {
        let Some(mut session) = self.session.take() else {
            return Ok(None);
        };
        let Some(resolution) = session.release(surface) else {
            return Ok(None);
        };
        self.policy.commit(surface, &resolution)
    }

    /// Abandon the in-flight gesture without committing.
    pub fn cancel<S: Surface<Element = E>>(&mut self, surface: &mut S) {
        if let Some(mut session) = self.session.take() {
            session.cancel(surface);
        }
    }

    /// Route a `ui-events` pointer event to the in-flight session.
    ///
    /// Handles move, up, and cancel; presses must go through
    /// [`pointer_down`](Self::pointer_down) because only the host can
    /// resolve them into a [`Press`].
    pub fn handle_pointer<S: Surface<Element = E>>(
        &mut self,
        surface: &mut S,
        event: &PointerEvent,
    ) -> Result<Option<C::Event>, CommitError>
    where
        C: CommitPolicy<S>,
    {
        match event {
            PointerEvent::Move(PointerUpdate { current, .. }) => {
                self.pointer_move(surface, current.logical_point());
                Ok(None)
            }
            PointerEvent::Up(_) => self.pointer_up(surface),
            PointerEvent::Cancel(_) => {
                self.cancel(surface);
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}
