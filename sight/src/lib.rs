// Copyright 2025 the Sight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sight --heading-base-level=0

//! Sight: "what is the closest thing to me?" over a bounded plane.
//!
//! ## Overview
//!
//! Sight places values at 2D points and answers single nearest-value queries with a
//! hard cutoff. It is meant for simulations, games, and agent perception, where a
//! query should come back empty when nothing is close enough rather than reach
//! across the whole map.
//!
//! Two views share one engine ([`sight_index::SpatialIndex`]) and one policy
//! ([`NearestQuery`]):
//!
//! - [`BoundedView`] (a canvas): each query looks at a square one cell wide and
//!   accepts values within half a cell.
//! - [`RadialView`] (a region): each query looks at a square two radii wide and
//!   accepts values within one radius. It also reports [`RadialView::total_items`].
//!
//! ## Boundaries and ties
//!
//! - Acceptance is inclusive: a value exactly half a cell, or exactly one radius,
//!   away is returned.
//! - Acceptance is circular even though the search window is square.
//! - Values at equal distance resolve to the one placed first.
//! - Values placed outside the bounds are kept and found like any other.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use sight::RadialView;
//!
//! let mut region = RadialView::new(Point::ZERO, Point::new(100.0, 100.0), 5.0).unwrap();
//! region.add("food", Point::new(10.0, 10.0));
//! region.add("water", Point::new(14.0, 10.0));
//!
//! assert_eq!(region.closest_value(Point::new(11.0, 10.0)), Some(&"food"));
//! assert_eq!(region.closest_value(Point::new(13.5, 10.0)), Some(&"water"));
//! // Too far from everything.
//! assert_eq!(region.closest_value(Point::new(50.0, 50.0)), None);
//! assert_eq!(region.total_items(), 2);
//! ```
//!
//! A canvas snaps queries to a cell-sized neighbourhood instead:
//!
//! ```rust
//! use kurbo::Point;
//! use sight::BoundedView;
//!
//! let mut canvas = BoundedView::new(Point::ZERO, Point::new(10.0, 10.0), 1.0).unwrap();
//! canvas.adds([(0, Point::ZERO), (1, Point::new(1.0, 0.0))]);
//!
//! // Exactly halfway is a tie, and the first value placed wins.
//! assert_eq!(canvas.closest_value(Point::new(0.5, 0.0)), Some(&0));
//! assert_eq!(canvas.closest_value(Point::new(0.6, 0.0)), Some(&1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod bounded;
pub mod nearest;
pub mod radial;

pub use bounded::BoundedView;
pub use nearest::NearestQuery;
pub use radial::{DEFAULT_MIN_CELL_SIZE, RadialView};
pub use sight_index::{ElementRecord, IndexError, Misconfiguration, SpatialIndex};
