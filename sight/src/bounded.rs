// Copyright 2025 the Sight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas-style view: a grid-sized area of interest around every query.

use kurbo::{Point, Rect};
use sight_index::{ElementRecord, IndexError, SpatialIndex};

use crate::nearest::NearestQuery;

/// A canvas where each query looks at one cell-sized square around the point.
///
/// The cell size doubles as the index's minimum cell size. A value is returned
/// by [`closest_value`](Self::closest_value) only if it lies within half a cell
/// of the query point, boundary included.
#[derive(Debug)]
pub struct BoundedView<T> {
    index: SpatialIndex<T>,
    query: NearestQuery,
}

impl<T> BoundedView<T> {
    /// Create an empty canvas spanning `min_bounds..=max_bounds`.
    ///
    /// The bounds only organize storage; values may still be placed outside
    /// them. Fails if the bounds enclose no area or `min_cell_size` is not
    /// positive.
    pub fn new(
        min_bounds: Point,
        max_bounds: Point,
        min_cell_size: f64,
    ) -> Result<Self, IndexError> {
        let index = SpatialIndex::new(Rect::from_points(min_bounds, max_bounds), min_cell_size)?;
        Self::from_index(index)
    }

    /// Wrap an existing index, using its minimum cell size as the cell.
    pub fn from_index(index: SpatialIndex<T>) -> Result<Self, IndexError> {
        let query = NearestQuery::cell(index.min_cell_size())?;
        log::debug!(
            "bounded view over {:?} with cell size {}",
            index.bounds(),
            index.min_cell_size()
        );
        Ok(Self { index, query })
    }

    /// Place `value` at `position`.
    ///
    /// If several values share a position, the earliest placed one wins ties in
    /// [`closest_value`](Self::closest_value).
    pub fn add(&mut self, value: T, position: Point) {
        self.index.add(value, position);
    }

    /// Place every `(value, position)` pair, in order.
    pub fn adds(&mut self, items: impl IntoIterator<Item = (T, Point)>) {
        self.index.extend(items);
    }

    /// Elements inside the cell-sized square centred on `point`.
    pub fn elements_near(&self, point: Point) -> impl Iterator<Item = &ElementRecord<T>> + '_ {
        self.query.candidates(&self.index, point)
    }

    /// Elements inside `area`, edges included.
    pub fn elements_in(&self, area: Rect) -> impl Iterator<Item = &ElementRecord<T>> + '_ {
        self.index.elements_in(area)
    }

    /// The element closest to `point` within half a cell, if any.
    pub fn closest(&self, point: Point) -> Option<&ElementRecord<T>> {
        self.query.resolve(&self.index, point)
    }

    /// The value closest to `point` within half a cell, if any.
    pub fn closest_value(&self, point: Point) -> Option<&T> {
        self.closest(point).map(ElementRecord::value)
    }

    /// Side of the square searched around each query point.
    pub fn min_cell_size(&self) -> f64 {
        self.index.min_cell_size()
    }

    /// The underlying index.
    pub const fn index(&self) -> &SpatialIndex<T> {
        &self.index
    }
}

impl<T> Extend<(T, Point)> for BoundedView<T> {
    fn extend<I: IntoIterator<Item = (T, Point)>>(&mut self, iter: I) {
        self.adds(iter);
    }
}
