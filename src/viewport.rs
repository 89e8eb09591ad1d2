// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The visible rectangle of the complex plane, and the pan and zoom
//! steps that move it.
//!
//! A `Viewport` is a value: every transform returns a new one and the
//! old one is left as it was.  Each viewport remembers the
//! width/height ratio it was built with, and zooming solves `im_max`
//! from that ratio so the picture never stretches.

use std::fmt;
use std::str::FromStr;

use crate::errors::RenderError;

/// One zoom or pan step moves each affected bound by this fraction of
/// the current extent, so a zoom click is 15% overall.
pub const STEP: f64 = 0.075;

/// A rectangle on the complex plane, with the real part along x and
/// the imaginary part along y.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    re_min: f64,
    re_max: f64,
    im_min: f64,
    im_max: f64,
    // width / height, fixed when the viewport is first built and
    // carried through every transform.
    ratio: f64,
}

impl Default for Viewport {
    /// The whole set: x in [-2, 1], y in [-1, 1].  Made for a 3:2
    /// raster.
    fn default() -> Self {
        Viewport {
            re_min: -2.0,
            re_max: 1.0,
            im_min: -1.0,
            im_max: 1.0,
            ratio: 1.5,
        }
    }
}

impl Viewport {
    /// Builds a viewport from its four bounds.  The ratio it keeps
    /// through zooming is the one these bounds describe.
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> Result<Self, RenderError> {
        let v = Viewport {
            re_min,
            re_max,
            im_min,
            im_max,
            ratio: (re_max - re_min) / (im_max - im_min),
        };
        v.validate()?;
        Ok(v)
    }

    /// The default view, with `im_max` solved so that the rectangle
    /// has the same shape as a `width` x `height` raster.
    pub fn for_raster(width: usize, height: usize) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::raster(format!(
                "cannot fit a viewport to a {}x{} raster",
                width, height
            )));
        }
        let base = Viewport::default();
        let ratio = width as f64 / height as f64;
        Ok(Viewport {
            im_max: base.im_min + base.width() / ratio,
            ratio,
            ..base
        })
    }

    /// Lower bound of the real (x) component.
    pub fn re_min(&self) -> f64 {
        self.re_min
    }

    /// Upper bound of the real (x) component.
    pub fn re_max(&self) -> f64 {
        self.re_max
    }

    /// Lower bound of the imaginary (y) component.
    pub fn im_min(&self) -> f64 {
        self.im_min
    }

    /// Upper bound of the imaginary (y) component.
    pub fn im_max(&self) -> f64 {
        self.im_max
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.re_max - self.re_min
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.im_max - self.im_min
    }

    /// The width/height ratio this viewport holds across zooms.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Refuses bounds that would render as NaN or as nothing at all.
    /// Transforms never check; this is called before every render.
    pub fn validate(&self) -> Result<(), RenderError> {
        let bounds = [self.re_min, self.re_max, self.im_min, self.im_max];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(RenderError::viewport(format!("non-finite bounds in {}", self)));
        }
        if self.re_min >= self.re_max {
            return Err(RenderError::viewport(format!("re_min >= re_max in {}", self)));
        }
        if self.im_min >= self.im_max {
            return Err(RenderError::viewport(format!("im_min >= im_max in {}", self)));
        }
        // Finite bounds can still be too far apart to subtract.
        if !self.width().is_finite() || !self.height().is_finite() {
            return Err(RenderError::viewport(format!("extent overflows in {}", self)));
        }
        Ok(())
    }

    // Solves im_max from the horizontal bounds and the kept ratio.
    fn normalize(&self, re_min: f64, re_max: f64, im_min: f64) -> Viewport {
        let height = (re_max - re_min) / self.ratio;
        Viewport {
            re_min,
            re_max,
            im_min,
            im_max: im_min + height,
            ratio: self.ratio,
        }
    }

    /// Moves both real bounds and the lower imaginary bound inward by
    /// one step.
    pub fn zoom_in(&self) -> Viewport {
        let (dx, dy) = (STEP * self.width(), STEP * self.height());
        self.normalize(self.re_min + dx, self.re_max - dx, self.im_min + dy)
    }

    /// The outward mirror of `zoom_in`.  Not its inverse: the step is
    /// taken from the current, smaller extent.
    pub fn zoom_out(&self) -> Viewport {
        let (dx, dy) = (STEP * self.width(), STEP * self.height());
        self.normalize(self.re_min - dx, self.re_max + dx, self.im_min - dy)
    }

    /// Shifts the view toward smaller real parts.
    pub fn pan_left(&self) -> Viewport {
        let dx = STEP * self.width();
        Viewport {
            re_min: self.re_min - dx,
            re_max: self.re_max - dx,
            ..*self
        }
    }

    /// Shifts the view toward larger real parts.
    pub fn pan_right(&self) -> Viewport {
        let dx = STEP * self.width();
        Viewport {
            re_min: self.re_min + dx,
            re_max: self.re_max + dx,
            ..*self
        }
    }

    /// Shifts the view toward smaller imaginary parts, which is the
    /// top of the raster since row 0 maps to `im_min`.
    pub fn pan_up(&self) -> Viewport {
        let dy = STEP * self.height();
        Viewport {
            im_min: self.im_min - dy,
            im_max: self.im_max - dy,
            ..*self
        }
    }

    /// Shifts the view toward larger imaginary parts.
    pub fn pan_down(&self) -> Viewport {
        let dy = STEP * self.height();
        Viewport {
            im_min: self.im_min + dy,
            im_max: self.im_max + dy,
            ..*self
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]i",
            self.re_min, self.re_max, self.im_min, self.im_max
        )
    }
}

/// One user interaction that changes the viewport.  The interactive
/// shell binds primary and secondary click to the zooms and the arrow
/// keys to the pans.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Motion {
    /// See `Viewport::zoom_in`.
    ZoomIn,
    /// See `Viewport::zoom_out`.
    ZoomOut,
    /// See `Viewport::pan_left`.
    PanLeft,
    /// See `Viewport::pan_right`.
    PanRight,
    /// See `Viewport::pan_up`.
    PanUp,
    /// See `Viewport::pan_down`.
    PanDown,
}

impl Motion {
    /// The viewport after this motion.
    pub fn apply(self, viewport: &Viewport) -> Viewport {
        match self {
            Motion::ZoomIn => viewport.zoom_in(),
            Motion::ZoomOut => viewport.zoom_out(),
            Motion::PanLeft => viewport.pan_left(),
            Motion::PanRight => viewport.pan_right(),
            Motion::PanUp => viewport.pan_up(),
            Motion::PanDown => viewport.pan_down(),
        }
    }
}

impl FromStr for Motion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "in" => Ok(Motion::ZoomIn),
            "out" => Ok(Motion::ZoomOut),
            "left" => Ok(Motion::PanLeft),
            "right" => Ok(Motion::PanRight),
            "up" => Ok(Motion::PanUp),
            "down" => Ok(Motion::PanDown),
            other => Err(format!("unknown motion '{}'", other)),
        }
    }
}

/// Parses a comma-separated list of motions, e.g. `in,in,left`.  An
/// empty string is no motions at all.
pub fn parse_motions(s: &str) -> Result<Vec<Motion>, String> {
    if s.trim().is_empty() {
        return Ok(vec![]);
    }
    s.split(',').map(Motion::from_str).collect()
}
