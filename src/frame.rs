// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The grayscale intensity buffer every worker of a pass writes into,
//! and its conversions into something a display can show.
//!
//! Cells are stored column by column (`x * height + y`), so a vertical
//! strip of the raster is one contiguous run of memory and the buffer
//! can be split into disjoint mutable strips before the workers start.

use image::{GrayImage, ImageBuffer, Luma, Pixel};

use crate::raster::{Partition, Raster};

/// One intensity (0 black, 255 white) per pixel of the raster.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    raster: Raster,
    cells: Vec<u8>,
}

impl Frame {
    /// An all-black frame the size of `raster`.
    pub fn new(raster: Raster) -> Self {
        Frame {
            raster,
            cells: vec![0 as u8; raster.len()],
        }
    }

    /// The raster this frame covers.
    pub fn raster(&self) -> Raster {
        self.raster
    }

    /// Intensity at column `x`, row `y`, or `None` outside the raster.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.raster.width || y >= self.raster.height {
            return None;
        }
        Some(self.cells[x * self.raster.height + y])
    }

    /// Every row of column `x`, top to bottom, or `None` outside the
    /// raster.
    pub fn column(&self, x: usize) -> Option<&[u8]> {
        if x >= self.raster.width {
            return None;
        }
        let h = self.raster.height;
        Some(&self.cells[x * h..(x + 1) * h])
    }

    /// The raw column-major cells.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Cuts the buffer into one mutable view per partition.  The
    /// partitions must be full-height strips laid out left to right
    /// from column 0, which is what `Raster::partitions` produces;
    /// anything past the last strip stays out of every view.
    pub(crate) fn strips_mut(&mut self, partitions: &[Partition]) -> Vec<&mut [u8]> {
        let height = self.raster.height;
        let mut rest: &mut [u8] = &mut self.cells;
        let mut next_column = 0;
        let mut strips = Vec::with_capacity(partitions.len());
        for p in partitions {
            assert!(
                p.x_lower == next_column && p.y_lower == 0 && p.y_upper == height,
                "partition {:?} is not the next full-height strip",
                p
            );
            let (strip, tail) = std::mem::take(&mut rest).split_at_mut(p.len());
            strips.push(strip);
            rest = tail;
            next_column = p.x_upper;
        }
        strips
    }

    /// The frame as a row-major 8-bit grayscale surface.
    pub fn to_image(&self) -> GrayImage {
        let h = self.raster.height;
        ImageBuffer::from_fn(self.raster.width as u32, h as u32, |x, y| {
            Luma([self.cells[x as usize * h + y as usize]])
        })
    }
}

const RAMP: &[u8] = b" .:-=+*#%@";

/// Renders `image` as text, `columns` characters wide.  Rows are
/// halved because a terminal cell is about twice as tall as it is
/// wide.  Darker pixels get denser characters.
pub fn ascii_preview(image: &GrayImage, columns: usize) -> String {
    let (w, h) = (image.width() as usize, image.height() as usize);
    if w == 0 || h == 0 || columns == 0 {
        return String::new();
    }
    let rows = std::cmp::max(1, columns * h / w / 2);
    let mut out = String::with_capacity((columns + 1) * rows);
    for row in 0..rows {
        for col in 0..columns {
            let x = (col * w / columns) as u32;
            let y = (row * h / rows) as u32;
            let v = image.get_pixel(x, y).channels()[0] as usize;
            let idx = (255 - v) * (RAMP.len() - 1) / 255;
            out.push(RAMP[idx] as char);
        }
        out.push('\n');
    }
    out
}
