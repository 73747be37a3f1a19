// Copyright 2025 the Sight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas basics.
//!
//! Place a few values on a canvas, then sweep a cursor across it and print
//! which value each position snaps to.
//!
//! Run:
//! - `cargo run -p sight_demos --example canvas_basics`

use kurbo::Point;
use sight::BoundedView;

fn main() {
    let mut canvas = BoundedView::new(Point::ZERO, Point::new(10.0, 10.0), 2.0).unwrap();
    canvas.adds([
        ("red", Point::new(2.0, 2.0)),
        ("green", Point::new(5.0, 2.0)),
        ("blue", Point::new(8.0, 2.0)),
    ]);

    for i in 0..=20_i32 {
        let cursor = Point::new(f64::from(i) * 0.5, 2.5);
        match canvas.closest_value(cursor) {
            Some(name) => println!("x = {:>4.1}: {name}", cursor.x),
            None => println!("x = {:>4.1}: -", cursor.x),
        }
    }

    // Half a cell away along one axis is still a hit.
    assert_eq!(canvas.closest_value(Point::new(3.0, 2.0)), Some(&"red"));
}
