// Copyright 2025 the Sight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quad nodes: the owned tree behind [`SpatialIndex`](crate::SpatialIndex).

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::element::ElementRecord;
use crate::types::{
    can_split, contains_inclusive, grow_to, overlaps_inclusive, quadrant_of, quadrants,
};

/// Subdivision parameters shared by every node of one index.
#[derive(Copy, Clone, Debug)]
pub(crate) struct SplitPolicy {
    pub(crate) min_cell_size: f64,
    pub(crate) node_capacity: usize,
}

#[derive(Debug)]
enum NodeKind<T> {
    Leaf(Vec<ElementRecord<T>>),
    Branch(Box<[QuadNode<T>; 4]>),
}

/// A node covering `region`.
///
/// `extent` is `region` grown to cover every position stored below this node.
/// It differs from `region` only when positions outside the index bounds were
/// routed here, and it is what queries prune against.
#[derive(Debug)]
pub(crate) struct QuadNode<T> {
    region: Rect,
    extent: Rect,
    kind: NodeKind<T>,
}

impl<T> QuadNode<T> {
    pub(crate) const fn new(region: Rect) -> Self {
        Self {
            region,
            extent: region,
            kind: NodeKind::Leaf(Vec::new()),
        }
    }

    pub(crate) fn insert(&mut self, record: ElementRecord<T>, policy: SplitPolicy, depth: usize) {
        self.extent = grow_to(self.extent, record.position());
        let split = match &mut self.kind {
            NodeKind::Leaf(items) => {
                items.push(record);
                items.len() > policy.node_capacity && can_split(&self.region, policy.min_cell_size)
            }
            NodeKind::Branch(children) => {
                let q = quadrant_of(&self.region, record.position());
                children[q].insert(record, policy, depth + 1);
                false
            }
        };
        if split {
            self.split(policy, depth);
        }
    }

    fn split(&mut self, policy: SplitPolicy, depth: usize) {
        let NodeKind::Leaf(items) = core::mem::replace(&mut self.kind, NodeKind::Leaf(Vec::new()))
        else {
            return;
        };
        log::trace!(
            "splitting node {:?} at depth {} holding {} elements",
            self.region,
            depth,
            items.len()
        );
        let mut children = quadrants(&self.region).map(Self::new);
        for record in items {
            let q = quadrant_of(&self.region, record.position());
            children[q].insert(record, policy, depth + 1);
        }
        self.kind = NodeKind::Branch(Box::new(children));
    }

    /// Push every record whose position lies in `area` (edges included).
    pub(crate) fn collect_in<'a>(&'a self, area: &Rect, out: &mut Vec<&'a ElementRecord<T>>) {
        if !overlaps_inclusive(&self.extent, area) {
            return;
        }
        match &self.kind {
            NodeKind::Leaf(items) => {
                out.extend(items.iter().filter(|r| contains_inclusive(area, r.position())));
            }
            NodeKind::Branch(children) => {
                for child in children.iter() {
                    child.collect_in(area, out);
                }
            }
        }
    }

    pub(crate) fn collect_all<'a>(&'a self, out: &mut Vec<&'a ElementRecord<T>>) {
        match &self.kind {
            NodeKind::Leaf(items) => out.extend(items.iter()),
            NodeKind::Branch(children) => {
                for child in children.iter() {
                    child.collect_all(out);
                }
            }
        }
    }

    pub(crate) fn depth(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 1,
            NodeKind::Branch(children) => 1 + children.iter().map(Self::depth).max().unwrap_or(0),
        }
    }

    pub(crate) fn node_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 1,
            NodeKind::Branch(children) => 1 + children.iter().map(Self::node_count).sum::<usize>(),
        }
    }

    /// Smallest region width and height among the leaves.
    #[cfg(test)]
    pub(crate) fn smallest_leaf(&self) -> (f64, f64) {
        match &self.kind {
            NodeKind::Leaf(_) => (self.region.width(), self.region.height()),
            NodeKind::Branch(children) => children
                .iter()
                .map(Self::smallest_leaf)
                .fold((f64::INFINITY, f64::INFINITY), |(w, h), (cw, ch)| {
                    (w.min(cw), h.min(ch))
                }),
        }
    }

    /// Whether every record in the subtree lies inside this node's `extent`,
    /// recursively, and `extent` still covers `region`.
    #[cfg(test)]
    pub(crate) fn holds_invariants(&self) -> bool {
        let mut all = Vec::new();
        self.collect_all(&mut all);
        self.extent.union(self.region) == self.extent
            && all.iter().all(|r| contains_inclusive(&self.extent, r.position()))
            && match &self.kind {
                NodeKind::Leaf(_) => true,
                NodeKind::Branch(children) => children.iter().all(Self::holds_invariants),
            }
    }
}
