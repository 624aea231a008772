// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical reorder: drag the last movement of a program to the front, and
//! let the host re-render from the spliced sequence.

use espalier_demos::DemoPage;
use espalier_sortable::{Press, Sortable, commit::Reorder};
use kurbo::Point;

fn main() {
    env_logger::init();

    let mut page = DemoPage::new(&["Overture", "Aria", "Finale"]);
    let mut sortable = Sortable::new(Reorder::<String>::new());
    println!("program: {:?}", page.values);

    let zones = page.zones();
    let press = Press::at(Point::new(145.0, 25.0)).item(3);
    sortable
        .pointer_down(&mut page, press, zones)
        .expect("zone is a plain flex row");

    for x in [100.0, 50.0, 10.0] {
        println!("move to x={x}");
        sortable.pointer_move(&mut page, Point::new(x, 25.0));
    }

    println!("release");
    match sortable.pointer_up(&mut page) {
        Ok(Some(event)) => println!(
            "moved {:?} from index {} to {}: {:?}",
            event.moved, event.old_index, event.new_index, event.sequence
        ),
        Ok(None) => println!("released without a drop target"),
        Err(fault) => println!("commit fault: {fault}"),
    }
}
