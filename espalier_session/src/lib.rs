// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=espalier_session --heading-base-level=0

//! Espalier Session: the drag-session state machine for pointer reordering.
//!
//! A [`DragSession`] owns one pointer-down-to-pointer-up gesture. At entry
//! it snapshots every qualifying drop zone (through
//! [`espalier_zone::DropZone`]), on every move it translates the dragged
//! element, re-resolves the nearest drop target across all zones, and
//! redraws the insertion cursor; at release it hands the final
//! [`DropResolution`] to whoever commits it and restores every piece of
//! host state it touched.
//!
//! The host is injected as a [`Surface`]: a trait over opaque element
//! handles covering geometry queries and the visual effects the session
//! owns (translation, markers, cursors, the page-level dragging flag). The
//! session never holds references into the host, so hosts are free to
//! represent elements however they like.
//!
//! ## Lifecycle
//!
//! `idle → active → resolving (per move) → committing → disposed`:
//!
//! - [`DragSession::begin`] — validate and snapshot zones, then apply the
//!   entry effects. Zone configuration errors abort before any effect.
//! - [`DragSession::update`] — one synchronous, atomic resolution pass per
//!   pointer move: clear all cursors, find the first matching zone, draw.
//! - [`DragSession::release`] — take the resolution (at most once) and tear
//!   down.
//! - [`DragSession::cancel`] — drop the resolution and tear down; for hosts
//!   that need an explicit abort path (focus loss, escape).
//!
//! Teardown is idempotent, so a release racing a cancel in host glue code
//! cannot double-apply or leak visual state.
//!
//! ## Minimal example
//!
//! ```
//! # use espalier_session::{DragSession, Marker, Surface};
//! # use espalier_zone::{FlexDirection, InsertRelative, InsertionCursor, ReportedLayout};
//! # use kurbo::{Point, Rect, Vec2};
//! # #[derive(Default)]
//! # struct Host { cursors: usize }
//! # impl Surface for Host {
//! #     type Element = u32;
//! #     fn bounding_box(&self, element: u32) -> Rect {
//! #         match element {
//! #             0 => Rect::new(0.0, 0.0, 170.0, 50.0),
//! #             1 => Rect::new(0.0, 0.0, 50.0, 50.0),
//! #             _ => Rect::new(60.0, 0.0, 110.0, 50.0),
//! #         }
//! #     }
//! #     fn zone_layout(&self, _zone: u32) -> Option<ReportedLayout> {
//! #         Some(ReportedLayout::Flex(FlexDirection::Row))
//! #     }
//! #     fn set_translation(&mut self, _element: u32, _offset: Option<Vec2>) {}
//! #     fn set_marker(&mut self, _element: u32, _marker: Marker, _on: bool) {}
//! #     fn set_page_dragging(&mut self, _on: bool) {}
//! #     fn show_cursor(&mut self, _zone: u32, _cursor: InsertionCursor<u32>) { self.cursors += 1; }
//! #     fn clear_cursor(&mut self, _zone: u32) {}
//! #     fn relocate(&mut self, _element: u32, _anchor: u32, _relative: InsertRelative) {}
//! #     fn children(&self, _zone: u32) -> Vec<u32> { Vec::new() }
//! # }
//! let mut host = Host::default();
//!
//! // Zone 0 contains items 1 and 2; start dragging item 1.
//! let mut session =
//!     DragSession::begin(&mut host, 1, Point::new(25.0, 25.0), [(0, vec![1, 2])]).unwrap();
//!
//! // Carry it over item 2; the session resolves and draws a cursor.
//! session.update(&mut host, Point::new(110.0, 25.0));
//! assert!(session.resolution().is_some());
//!
//! // Dropping yields the resolution for a commit policy, exactly once.
//! let resolution = session.release(&mut host).unwrap();
//! assert_eq!(resolution.hit.candidate.element, 2);
//! assert!(session.release(&mut host).is_none());
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod session;
mod surface;

pub use session::{DragSession, DropResolution, Origin};
pub use surface::{Marker, Surface};
