// Copyright 2025 the Sight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sight_index --heading-base-level=0

//! Sight Index: a Kurbo-native, insert-only quadtree for values placed at 2D points.
//!
//! Sight Index is the engine underneath the nearest-value views in the `sight` crate.
//!
//! - Store any value `T` at a [`kurbo::Point`]. Elements are never moved or removed.
//! - Query every element inside a rectangle, edges included, with [`SpatialIndex::elements_in`].
//! - Tune the memory/speed trade-off with a minimum cell size and a per-node capacity.
//!
//! Nodes split lazily into four equal quadrants when they overflow. A node that is not
//! wider and taller than the minimum cell size keeps accepting elements instead of
//! splitting, which bounds the depth of the tree.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use sight_index::SpatialIndex;
//!
//! let mut idx = SpatialIndex::new(Rect::new(0.0, 0.0, 100.0, 100.0), 1.0).unwrap();
//! idx.add("well", Point::new(10.0, 10.0));
//! idx.add("tower", Point::new(60.0, 40.0));
//!
//! // Edges count: a query whose corner sits exactly on an element finds it.
//! let hits: Vec<_> = idx.elements_in(Rect::new(10.0, 10.0, 50.0, 50.0)).collect();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(*hits[0].value(), "well");
//! assert_eq!(hits[0].distance_to(Point::new(13.0, 14.0)), 5.0);
//! ```
//!
//! ## Out-of-bounds positions
//!
//! Positions outside the bounding rectangle are not rejected. They are stored in the
//! nearest boundary leaf, and every node tracks an extent that covers such strays so
//! range queries still reach them.
//!
//! ## Concurrency
//!
//! Insertion takes `&mut self` and queries take `&self`, so the usual borrow rules give
//! single-writer/multi-reader access. Wrap the index in a lock to share a writer across
//! threads.
//!
//! ### Float semantics
//!
//! Coordinates are `f64`. This crate assumes no NaNs in positions; NaN positions are
//! stored but never match a range query.

#![no_std]

extern crate alloc;

pub mod element;
pub mod error;
pub mod index;
mod node;
pub mod types;

pub use element::ElementRecord;
pub use error::{IndexError, Misconfiguration};
pub use index::{DEFAULT_NODE_CAPACITY, SpatialIndex};
