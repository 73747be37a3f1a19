// Copyright 2025 the Sight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use kurbo::Rect;
use thiserror::Error;

/// Errors reported when building an index or a view over one.
///
/// Queries and insertions never fail; only construction does.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum IndexError {
    /// A construction parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(Misconfiguration),
}

/// The parameter that made a configuration invalid.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Misconfiguration {
    /// The bounding rectangle is not finite or encloses no area.
    #[error("bounds {0:?} must be finite and enclose a non-zero area")]
    DegenerateBounds(Rect),
    /// The minimum cell size is not finite or not positive.
    #[error("minimum cell size must be finite and positive, got {0}")]
    MinCellSize(f64),
    /// The per-node capacity is zero.
    #[error("node capacity must be at least 1, got {0}")]
    NodeCapacity(usize),
    /// The search radius is not finite or not positive.
    #[error("search radius must be finite and positive, got {0}")]
    SearchRadius(f64),
}

impl From<Misconfiguration> for IndexError {
    fn from(m: Misconfiguration) -> Self {
        Self::InvalidConfiguration(m)
    }
}
