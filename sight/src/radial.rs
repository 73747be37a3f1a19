// Copyright 2025 the Sight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region-style view: a fixed search radius around every query.

use kurbo::{Point, Rect};
use sight_index::{ElementRecord, IndexError, SpatialIndex};

use crate::nearest::NearestQuery;

/// Minimum cell size used by [`RadialView::new`].
pub const DEFAULT_MIN_CELL_SIZE: f64 = 1.0;

/// A region where each query accepts the closest value within a fixed radius.
///
/// The search radius is independent of the index's minimum cell size, which
/// stays available as a memory/speed knob through
/// [`with_min_cell_size`](Self::with_min_cell_size).
#[derive(Debug)]
pub struct RadialView<T> {
    index: SpatialIndex<T>,
    query: NearestQuery,
}

impl<T> RadialView<T> {
    /// Create an empty region spanning `min_bounds..=max_bounds`, using
    /// [`DEFAULT_MIN_CELL_SIZE`].
    pub fn new(
        min_bounds: Point,
        max_bounds: Point,
        search_radius: f64,
    ) -> Result<Self, IndexError> {
        Self::with_min_cell_size(min_bounds, max_bounds, search_radius, DEFAULT_MIN_CELL_SIZE)
    }

    /// Create an empty region with an explicit minimum cell size.
    ///
    /// Smaller cells mean deeper trees and fewer candidates per query.
    pub fn with_min_cell_size(
        min_bounds: Point,
        max_bounds: Point,
        search_radius: f64,
        min_cell_size: f64,
    ) -> Result<Self, IndexError> {
        let query = NearestQuery::radius(search_radius)?;
        let index = SpatialIndex::new(Rect::from_points(min_bounds, max_bounds), min_cell_size)?;
        log::debug!(
            "radial view over {:?} with radius {} and cell size {}",
            index.bounds(),
            search_radius,
            min_cell_size
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

    /// Number of placed values whose position lies within the original bounds,
    /// edges included.
    ///
    /// This re-queries the index rather than reading a counter, so values placed
    /// outside the bounds are not counted.
    pub fn total_items(&self) -> usize {
        self.index.elements_in(self.index.bounds()).count()
    }

    /// Elements inside the square of side `2 * search_radius` centred on `point`.
    pub fn elements_near(&self, point: Point) -> impl Iterator<Item = &ElementRecord<T>> + '_ {
        self.query.candidates(&self.index, point)
    }

    /// Elements inside `area`, edges included.
    pub fn elements_in(&self, area: Rect) -> impl Iterator<Item = &ElementRecord<T>> + '_ {
        self.index.elements_in(area)
    }

    /// The element closest to `point`, if it is within the search radius.
    pub fn closest(&self, point: Point) -> Option<&ElementRecord<T>> {
        self.query.resolve(&self.index, point)
    }

    /// The value closest to `point`, if it is within the search radius.
    pub fn closest_value(&self, point: Point) -> Option<&T> {
        self.closest(point).map(ElementRecord::value)
    }

    /// Largest distance at which a value is still returned.
    pub const fn search_radius(&self) -> f64 {
        self.query.max_distance()
    }

    /// The underlying index.
    pub const fn index(&self) -> &SpatialIndex<T> {
        &self.index
    }
}

impl<T> Extend<(T, Point)> for RadialView<T> {
    fn extend<I: IntoIterator<Item = (T, Point)>>(&mut self, iter: I) {
        self.adds(iter);
    }
}
