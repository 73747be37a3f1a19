// Copyright 2025 the Sight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The nearest-value policy shared by both views.

use kurbo::{Point, Rect};
use sight_index::{ElementRecord, IndexError, Misconfiguration, SpatialIndex};

/// How a view turns a query point into at most one element.
///
/// A query searches the square window of side `2 * half_extent` centred on the
/// point, keeps candidates within `max_distance` (boundary included), and picks
/// the closest. Candidates at equal distance resolve to the earliest inserted.
///
/// - [`NearestQuery::cell`] searches a window one cell wide and accepts anything
///   within half a cell.
/// - [`NearestQuery::radius`] searches a window two radii wide and accepts
///   anything within one radius.
///
/// In both cases the acceptance test is circular, so candidates in the window's
/// corners can be rejected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NearestQuery {
    half_extent: f64,
    max_distance: f64,
}

impl NearestQuery {
    /// Policy for a window exactly one cell of `size` wide.
    pub fn cell(size: f64) -> Result<Self, IndexError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(Misconfiguration::MinCellSize(size).into());
        }
        let half = size / 2.0;
        Ok(Self {
            half_extent: half,
            max_distance: half,
        })
    }

    /// Policy for a circular neighbourhood of `radius`.
    pub fn radius(radius: f64) -> Result<Self, IndexError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Misconfiguration::SearchRadius(radius).into());
        }
        Ok(Self {
            half_extent: radius,
            max_distance: radius,
        })
    }

    /// Half the side of the search window.
    pub const fn half_extent(&self) -> f64 {
        self.half_extent
    }

    /// Largest distance still accepted as a match.
    pub const fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// The square search window centred on `point`.
    pub fn window(&self, point: Point) -> Rect {
        let h = self.half_extent;
        Rect::new(point.x - h, point.y - h, point.x + h, point.y + h)
    }

    /// Whether a candidate at `distance` is close enough.
    pub fn accepts(&self, distance: f64) -> bool {
        distance <= self.max_distance
    }

    /// Every element in the search window around `point`.
    pub fn candidates<'a, T>(
        &self,
        index: &'a SpatialIndex<T>,
        point: Point,
    ) -> impl Iterator<Item = &'a ElementRecord<T>> + use<'a, T> {
        index.elements_in(self.window(point))
    }

    /// The accepted element closest to `point`, if any.
    pub fn resolve<'a, T>(
        &self,
        index: &'a SpatialIndex<T>,
        point: Point,
    ) -> Option<&'a ElementRecord<T>> {
        self.candidates(index, point)
            .map(|r| (r.distance_to(point), r))
            .filter(|(d, _)| self.accepts(*d))
            .min_by(|(da, a), (db, b)| da.total_cmp(db).then(a.slot().cmp(&b.slot())))
            .map(|(_, r)| r)
    }
}
