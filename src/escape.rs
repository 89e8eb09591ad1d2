// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time worker: map a pixel to a point, iterate
//! `z = z² + c` from the origin, and turn the escape count into a
//! gray level.

use itertools::iproduct;

use crate::complex::{add, magnitude, square, Point, ZERO};
use crate::errors::RenderError;
use crate::planes::{Pixel, PlaneMapper};
use crate::raster::Partition;
use crate::viewport::Viewport;

/// Once an orbit is further than this from the origin it will never
/// come back.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Counts iterations up to a fixed limit and shades pixels with the
/// result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EscapeTime {
    max_iterations: usize,
}

impl EscapeTime {
    /// A worker that gives up after `max_iterations` steps.
    pub fn new(max_iterations: usize) -> Result<Self, RenderError> {
        if max_iterations == 0 {
            return Err(RenderError::raster("max_iterations must be at least 1"));
        }
        Ok(EscapeTime { max_iterations })
    }

    /// The iteration limit.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// The 0-based iteration on which the orbit of `c` first left the
    /// escape radius, or `max_iterations` if it never did and `c` is
    /// taken to be in the set.
    pub fn escape_time(&self, c: Point) -> usize {
        let mut z = ZERO;
        for i in 0..self.max_iterations {
            z = add(square(z), c);
            if magnitude(z) > ESCAPE_RADIUS {
                return i;
            }
        }
        self.max_iterations
    }

    /// Linear gray level for an escape count: points that leave at
    /// once are near white, points in the set are the darkest value.
    /// That is 0 only when 255 divides evenly by the limit.  Counts
    /// past the limit shade like the limit.
    pub fn intensity(&self, count: usize) -> u8 {
        let count = std::cmp::min(count, self.max_iterations);
        let range = (count as f64 * (255.0 / self.max_iterations as f64)) as usize;
        (255 - range) as u8
    }

    /// Shades every pixel of `partition` into `cells`, its own
    /// column-major slice of the frame.  Pixel coordinates, and the
    /// mapping onto `viewport`, are those of the whole raster.
    pub fn shade(&self, viewport: &Viewport, partition: &Partition, cells: &mut [u8]) {
        let raster = partition.raster;
        let plane = PlaneMapper::new(viewport, raster.width, raster.height);
        let rows = partition.y_upper - partition.y_lower;
        for (x, y) in iproduct!(partition.columns(), partition.rows()) {
            let c = plane.pixel_to_point(Pixel(x, y));
            let offset = (x - partition.x_lower) * rows + (y - partition.y_lower);
            cells[offset] = self.intensity(self.escape_time(c));
        }
    }
}
