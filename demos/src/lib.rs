// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared demo host: a pretend page with one row of cards.
//!
//! Cards are 50 units wide on a 60-unit grid, so there is a 10-unit gap
//! between neighbors. Every effect the engine applies is printed, which
//! makes the demo binaries a readable trace of a full gesture. Run with
//! `RUST_LOG=debug` to interleave the engine's own log lines.

use espalier_session::{Marker, Surface};
use espalier_sortable::commit::SequenceSurface;
use espalier_zone::{FlexDirection, InsertRelative, InsertionCursor, ReportedLayout};
use kurbo::{Rect, Vec2};

/// Element handle of the single drop zone.
pub const ZONE: u32 = 0;

/// A one-zone page; card ids start at 1 and index into `labels`.
pub struct DemoPage {
    /// Current child order of the zone.
    pub order: Vec<u32>,
    /// Card labels, id - 1 indexed.
    pub labels: Vec<String>,
    /// Backing values for the collection demo, in candidate order.
    pub values: Vec<String>,
}

impl DemoPage {
    /// Build a page with one card per label.
    pub fn new(labels: &[&str]) -> Self {
        Self {
            order: (1..=labels.len() as u32).collect(),
            labels: labels.iter().map(|l| (*l).to_string()).collect(),
            values: labels.iter().map(|l| (*l).to_string()).collect(),
        }
    }

    /// Label of a card.
    pub fn label(&self, element: u32) -> &str {
        &self.labels[element as usize - 1]
    }

    /// The zone map handed to the controller on pointer down.
    pub fn zones(&self) -> Vec<(u32, Vec<u32>)> {
        vec![(ZONE, self.order.clone())]
    }

    /// Current order, as labels.
    pub fn order_labels(&self) -> Vec<&str> {
        self.order.iter().map(|e| self.label(*e)).collect()
    }
}

impl Surface for DemoPage {
    type Element = u32;

    fn bounding_box(&self, element: u32) -> Rect {
        if element == ZONE {
            return Rect::new(0.0, 0.0, self.order.len() as f64 * 60.0, 50.0);
        }
        let slot = self
            .order
            .iter()
            .position(|e| *e == element)
            .expect("unknown card") as f64;
        Rect::new(slot * 60.0, 0.0, slot * 60.0 + 50.0, 50.0)
    }

    fn zone_layout(&self, _zone: u32) -> Option<ReportedLayout> {
        Some(ReportedLayout::Flex(FlexDirection::Row))
    }

    fn set_translation(&mut self, element: u32, offset: Option<Vec2>) {
        match offset {
            Some(offset) => println!("  [page] {} translated by {offset:?}", self.label(element)),
            None => println!("  [page] {} translation cleared", self.label(element)),
        }
    }

    fn set_marker(&mut self, element: u32, marker: Marker, on: bool) {
        let name = if element == ZONE {
            "zone"
        } else {
            self.label(element)
        };
        let state = if on { "+" } else { "-" };
        println!("  [page] {state}{marker:?} on {name}");
    }

    fn set_page_dragging(&mut self, on: bool) {
        println!("  [page] dragging flag = {on}");
    }

    fn show_cursor(&mut self, _zone: u32, cursor: InsertionCursor<u32>) {
        match cursor {
            InsertionCursor::Overlay(rect) => println!("  [page] cursor at {rect:?}"),
            InsertionCursor::Row { anchor, relative } => {
                println!("  [page] cursor row {relative:?} {}", self.label(anchor));
            }
        }
    }

    fn clear_cursor(&mut self, _zone: u32) {}

    fn relocate(&mut self, element: u32, anchor: u32, relative: InsertRelative) {
        self.order.retain(|e| *e != element);
        let at = self
            .order
            .iter()
            .position(|e| *e == anchor)
            .expect("unknown anchor");
        let at = match relative {
            InsertRelative::Before => at,
            InsertRelative::After => at + 1,
        };
        self.order.insert(at, element);
        println!(
            "  [page] moved {} {relative:?} {}",
            self.label(element),
            self.label(anchor)
        );
    }

    fn children(&self, _zone: u32) -> Vec<u32> {
        self.order.clone()
    }
}

impl SequenceSurface<String> for DemoPage {
    fn sequence(&self) -> Vec<String> {
        self.values.clone()
    }

    fn assign_sequence(&mut self, values: Vec<String>) {
        println!("  [page] re-rendered from sequence {values:?}");
        self.values = values;
    }
}
