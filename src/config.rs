// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Settings for a rendering session.  They are fixed once the
//! session's renderer is built; only the viewport moves afterwards.

use std::str::FromStr;

use crate::errors::RenderError;
use crate::raster::Raster;
use crate::viewport::Viewport;

/// Output width used when nothing else is asked for.  With the
/// default height this is the 3:2 shape of the whole set.
pub const DEFAULT_WIDTH: usize = 768;
/// Output height used when nothing else is asked for.
pub const DEFAULT_HEIGHT: usize = 512;
/// Iteration limit used when nothing else is asked for.
pub const DEFAULT_ITERATIONS: usize = 100;
/// Worker count used when nothing else is asked for.  Divides the
/// default width evenly.
pub const DEFAULT_WORKERS: usize = 32;

/// Raster size, iteration limit and worker count for every pass of a
/// session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Output width in pixels.
    pub width: usize,
    /// Output height in pixels.
    pub height: usize,
    /// Orbit steps before a point is taken to be in the set.
    pub max_iterations: usize,
    /// Vertical strips, and so threads, per pass.
    pub workers: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_ITERATIONS,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl RenderConfig {
    /// The same settings with one worker per logical CPU.
    pub fn with_hardware_workers(self) -> Self {
        RenderConfig {
            workers: num_cpus::get(),
            ..self
        }
    }

    /// The output raster.
    pub fn raster(&self) -> Raster {
        Raster::new(self.width, self.height)
    }

    /// The whole set, shaped to fit the output raster.
    pub fn default_viewport(&self) -> Result<Viewport, RenderError> {
        Viewport::for_raster(self.width, self.height)
    }

    /// Refuses settings no pass could render.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::raster(format!(
                "raster must not be empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_iterations == 0 {
            return Err(RenderError::raster("max_iterations must be at least 1"));
        }
        if self.workers == 0 {
            return Err(RenderError::raster("at least one worker is needed"));
        }
        Ok(())
    }
}

/// Parses a raster size written as `WIDTHxHEIGHT`.  Each side must
/// fit in a `u16`, which keeps the frame buffer addressable and the
/// `GrayImage` conversion lossless.
pub fn parse_size(s: &str) -> Option<(usize, usize)> {
    let index = s.find('x')?;
    let width = u16::from_str(&s[..index]).ok()?;
    let height = u16::from_str(&s[index + 1..]).ok()?;
    Some((usize::from(width), usize::from(height)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_and_even() {
        let c = RenderConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.raster().remainder(c.workers), 0);
        assert_eq!(c.default_viewport().unwrap().im_max(), 1.0);
    }

    #[test]
    fn hardware_workers_are_at_least_one() {
        let c = RenderConfig::default().with_hardware_workers();
        assert!(c.workers >= 1);
        assert_eq!(c.width, DEFAULT_WIDTH);
    }

    #[test]
    fn zeros_are_refused() {
        let base = RenderConfig::default();
        for bad in [
            RenderConfig { width: 0, ..base },
            RenderConfig { height: 0, ..base },
            RenderConfig { max_iterations: 0, ..base },
            RenderConfig { workers: 0, ..base },
        ]
        .iter()
        {
            assert!(bad.validate().is_err(), "{:?}", bad);
        }
    }

    #[test]
    fn parses_sizes() {
        assert_eq!(parse_size("768x512"), Some((768, 512)));
        assert_eq!(parse_size("768,512"), None);
        assert_eq!(parse_size("x512"), None);
        assert_eq!(parse_size("0x0"), Some((0, 0)));
        assert_eq!(parse_size("65535x1"), Some((65535, 1)));
        assert_eq!(parse_size("65536x1"), None);
        assert_eq!(parse_size("-3x4"), None);
    }
}
