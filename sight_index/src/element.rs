// Copyright 2025 the Sight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stored value/position pairs.

use kurbo::Point;

/// A value stored in a [`SpatialIndex`](crate::SpatialIndex) at a fixed position.
///
/// Records are immutable once stored. Each one carries the slot it was assigned
/// on insertion (its zero-based insertion ordinal), and two records are equal
/// only when their slots are equal: the same value at the same position,
/// inserted twice, yields two distinct records.
#[derive(Clone, Debug)]
pub struct ElementRecord<T> {
    value: T,
    position: Point,
    slot: usize,
}

impl<T> ElementRecord<T> {
    pub(crate) const fn new(value: T, position: Point, slot: usize) -> Self {
        Self {
            value,
            position,
            slot,
        }
    }

    /// The stored value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consume the record and return its value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Where the value was placed.
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Insertion ordinal within the owning index.
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Euclidean distance from the record's position to `point`.
    pub fn distance_to(&self, point: Point) -> f64 {
        self.position.distance(point)
    }
}

impl<T> PartialEq for ElementRecord<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T> Eq for ElementRecord<T> {}
