// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The output raster and the vertical strips it is cut into, one per
//! worker.
//!
//! Strips are `width / count` pixels wide, using integer division.
//! When the width does not divide evenly the rightmost
//! `width % count` columns belong to no strip and are never rendered.

use std::ops::Range;

/// The size of the whole output image, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
}

impl Raster {
    /// A `width` x `height` raster.
    pub fn new(width: usize, height: usize) -> Self {
        Raster { width, height }
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether there are no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Columns left over when cutting into `count` strips.
    pub fn remainder(&self, count: usize) -> usize {
        self.width % count
    }

    /// All `count` strips, left to right.  `count` must be non-zero.
    pub fn partitions(&self, count: usize) -> Vec<Partition> {
        (0..count)
            .map(|index| partition(self.width, self.height, count, index))
            .collect()
    }
}

/// A rectangle of the raster assigned to one worker.  Bounds are in
/// whole-raster coordinates, lower inclusive and upper exclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    /// The raster this partition is a piece of.
    pub raster: Raster,
    /// First column.
    pub x_lower: usize,
    /// One past the last column.
    pub x_upper: usize,
    /// First row.
    pub y_lower: usize,
    /// One past the last row.
    pub y_upper: usize,
}

impl Partition {
    /// Columns covered.
    pub fn columns(&self) -> Range<usize> {
        self.x_lower..self.x_upper
    }

    /// Rows covered.
    pub fn rows(&self) -> Range<usize> {
        self.y_lower..self.y_upper
    }

    /// Number of pixels covered.
    pub fn len(&self) -> usize {
        (self.x_upper - self.x_lower) * (self.y_upper - self.y_lower)
    }

    /// Whether this partition covers no pixels, which happens when
    /// there are more strips than columns.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The `index`th of `count` equal vertical strips of a
/// `total_width` x `total_height` raster.  Panics if `count` is zero.
pub fn partition(total_width: usize, total_height: usize, count: usize, index: usize) -> Partition {
    let strip = total_width / count;
    Partition {
        raster: Raster::new(total_width, total_height),
        x_lower: strip * index,
        x_upper: strip * (index + 1),
        y_lower: 0,
        y_upper: total_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split_tiles_the_raster() {
        let parts = Raster::new(768, 512).partitions(32);
        assert_eq!(parts.len(), 32);
        assert_eq!(parts[0].columns(), 0..24);
        assert_eq!(parts[31].columns(), 744..768);
        for pair in parts.windows(2) {
            assert_eq!(pair[0].x_upper, pair[1].x_lower);
        }
        assert!(parts.iter().all(|p| p.rows() == (0..512)));
        assert_eq!(parts.iter().map(Partition::len).sum::<usize>(), 768 * 512);
    }

    #[test]
    fn remainder_columns_are_dropped() {
        let r = Raster::new(10, 4);
        let parts = r.partitions(3);
        assert_eq!(parts[0].columns(), 0..3);
        assert_eq!(parts[1].columns(), 3..6);
        assert_eq!(parts[2].columns(), 6..9);
        assert_eq!(r.remainder(3), 1);
    }

    #[test]
    fn more_strips_than_columns_leaves_them_empty() {
        let parts = Raster::new(3, 2).partitions(4);
        assert!(parts.iter().all(Partition::is_empty));
    }

    #[test]
    fn partition_is_independent_of_raster_helper() {
        assert_eq!(partition(100, 50, 4, 2), Raster::new(100, 50).partitions(4)[2]);
        assert_eq!(partition(100, 50, 4, 2).raster, Raster::new(100, 50));
    }
}
