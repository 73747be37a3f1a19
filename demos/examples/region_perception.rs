// Copyright 2025 the Sight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region perception.
//!
//! Scatter food on a map and let a few agents look for the closest item
//! within their sight radius.
//!
//! Run:
//! - `cargo run -p sight_demos --example region_perception`

use kurbo::Point;
use sight::RadialView;

fn main() {
    let mut map = RadialView::new(Point::ZERO, Point::new(100.0, 100.0), 6.0).unwrap();

    // A deterministic scatter.
    let mut seed = 0x2545_F491_u32;
    for id in 0..200_u32 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let x = f64::from(seed % 10_000) / 100.0;
        let y = f64::from((seed / 10_000) % 10_000) / 100.0;
        map.add(id, Point::new(x, y));
    }
    // Something just past the edge of the map.
    map.add(999, Point::new(101.0, 50.0));

    println!("items inside the map: {}", map.total_items());
    println!("items placed: {}", map.index().len());

    let agents = [
        Point::new(10.0, 10.0),
        Point::new(50.0, 50.0),
        Point::new(99.0, 50.0),
        Point::new(-20.0, -20.0),
    ];
    for agent in agents {
        match map.closest(agent) {
            Some(food) => println!(
                "agent at {agent:?} sees food #{} at distance {:.2}",
                food.value(),
                food.distance_to(agent)
            ),
            None => println!("agent at {agent:?} sees nothing"),
        }
    }
}
