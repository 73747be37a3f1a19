// Copyright 2025 the Sight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `SpatialIndex` API.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect};

use crate::element::ElementRecord;
use crate::error::{IndexError, Misconfiguration};
use crate::node::{QuadNode, SplitPolicy};

/// Elements a node holds before it subdivides, unless it is already at the
/// minimum cell size.
pub const DEFAULT_NODE_CAPACITY: usize = 8;

/// An insert-only quadtree mapping 2D positions to values.
///
/// The root covers a fixed bounding rectangle. Nodes split into four equal
/// quadrants once they hold more than `node_capacity` elements, as long as
/// their region is wider and taller than `min_cell_size`.
///
/// Positions outside the bounds are accepted. They are stored in the leaf
/// nearest to them and remain reachable by range queries.
pub struct SpatialIndex<T> {
    bounds: Rect,
    policy: SplitPolicy,
    root: QuadNode<T>,
    len: usize,
}

impl<T> SpatialIndex<T> {
    /// Create an empty index over `bounds` with the default node capacity.
    ///
    /// Inverted corners are swapped. Fails if the bounds are not finite or
    /// enclose no area, or if `min_cell_size` is not finite and positive.
    pub fn new(bounds: Rect, min_cell_size: f64) -> Result<Self, IndexError> {
        Self::with_node_capacity(bounds, min_cell_size, DEFAULT_NODE_CAPACITY)
    }

    /// Create an empty index with an explicit subdivision threshold.
    pub fn with_node_capacity(
        bounds: Rect,
        min_cell_size: f64,
        node_capacity: usize,
    ) -> Result<Self, IndexError> {
        let bounds = bounds.abs();
        let issue = if !bounds.is_finite() || bounds.is_zero_area() {
            Some(Misconfiguration::DegenerateBounds(bounds))
        } else if !(min_cell_size.is_finite() && min_cell_size > 0.0) {
            Some(Misconfiguration::MinCellSize(min_cell_size))
        } else if node_capacity == 0 {
            Some(Misconfiguration::NodeCapacity(node_capacity))
        } else {
            None
        };
        if let Some(issue) = issue {
            log::debug!("rejecting spatial index configuration: {issue}");
            return Err(issue.into());
        }
        Ok(Self {
            bounds,
            policy: SplitPolicy {
                min_cell_size,
                node_capacity,
            },
            root: QuadNode::new(bounds),
            len: 0,
        })
    }

    /// Store `value` at `position`.
    ///
    /// Duplicate positions are allowed; each insertion is a distinct element.
    pub fn add(&mut self, value: T, position: Point) {
        let record = ElementRecord::new(value, position, self.len);
        self.len += 1;
        self.root.insert(record, self.policy, 1);
    }

    /// Every element whose position lies inside `area` or on its edges.
    ///
    /// Inverted corners in `area` are swapped. Only nodes whose extent touches
    /// `area` are visited.
    pub fn elements_in(&self, area: Rect) -> impl Iterator<Item = &ElementRecord<T>> + '_ {
        let area = area.abs();
        let mut out = Vec::new();
        self.root.collect_in(&area, &mut out);
        out.into_iter()
    }

    /// Every stored element, in tree order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementRecord<T>> + '_ {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect_all(&mut out);
        out.into_iter()
    }

    /// Number of stored elements, including those outside the bounds.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been added.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The (normalized) bounding rectangle the root covers.
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Smallest width and height a node may be split down to.
    pub const fn min_cell_size(&self) -> f64 {
        self.policy.min_cell_size
    }

    /// Elements a node holds before it subdivides.
    pub const fn node_capacity(&self) -> usize {
        self.policy.node_capacity
    }

    /// Number of node levels; a lone root has depth 1.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

impl<T> Extend<(T, Point)> for SpatialIndex<T> {
    fn extend<I: IntoIterator<Item = (T, Point)>>(&mut self, iter: I) {
        for (value, position) in iter {
            self.add(value, position);
        }
    }
}

impl<T> Debug for SpatialIndex<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("bounds", &self.bounds)
            .field("min_cell_size", &self.policy.min_cell_size)
            .field("node_capacity", &self.policy.node_capacity)
            .field("len", &self.len)
            .field("depth", &self.depth())
            .field("nodes", &self.node_count())
            .finish_non_exhaustive()
    }
}
