// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direct relocation: drag the "Bravo" card to the right end of the row.

use espalier_demos::DemoPage;
use espalier_sortable::{Press, Sortable, commit::Relocate};
use kurbo::Point;

fn main() {
    env_logger::init();

    let mut page = DemoPage::new(&["Alpha", "Bravo", "Charlie"]);
    let mut sortable = Sortable::new(Relocate);
    println!("row: {:?}", page.order_labels());

    let zones = page.zones();
    let press = Press::at(Point::new(85.0, 25.0)).item(2);
    let started = sortable
        .pointer_down(&mut page, press, zones)
        .expect("zone is a plain flex row");
    println!("press on Bravo, gesture started: {started}");

    for x in [100.0, 120.0, 145.0, 165.0] {
        println!("move to x={x}");
        sortable.pointer_move(&mut page, Point::new(x, 25.0));
    }

    println!("release");
    match sortable.pointer_up(&mut page) {
        Ok(Some(event)) => {
            let order: Vec<&str> = event
                .to_children
                .iter()
                .map(|e| page.label(*e))
                .collect();
            println!("sorted: {} moved, row is now {order:?}", page.label(event.target));
        }
        Ok(None) => println!("released without a drop target"),
        Err(fault) => println!("commit fault: {fault}"),
    }
}
