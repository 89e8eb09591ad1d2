//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a viewport on the complex plane.  Pixel (0, 0) lands on the
//! viewport's `re_min + im_min·i` corner.
use crate::complex::Point;
use crate::viewport::Viewport;
use num::Complex;

/// Describes the x, y of a pixel in the whole output raster, never
/// relative to a partition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels of a `width` x `height` raster onto a viewport by
/// linear interpolation.
#[derive(Debug, Clone)]
pub struct PlaneMapper {
    origin: Point,
    // The size of one pixel on the complex plane, along x and y.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Takes the viewport and the size of the *total* raster.  The
    /// caller guarantees both dimensions are non-zero.
    pub fn new(viewport: &Viewport, width: usize, height: usize) -> PlaneMapper {
        PlaneMapper {
            origin: Complex::new(viewport.re_min(), viewport.im_min()),
            steps: (
                viewport.width() / (width as f64),
                viewport.height() / (height as f64),
            ),
        }
    }

    /// Given the column and row of a pixel on the integral cartesian
    /// plane, return the complex number at that spot on the viewport.
    #[inline]
    pub fn pixel_to_point(&self, pixel: Pixel) -> Point {
        Complex::new(
            self.origin.re + (pixel.0 as f64) * self.steps.0,
            self.origin.im + (pixel.1 as f64) * self.steps.1,
        )
    }
}
