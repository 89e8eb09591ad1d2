#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which the orbit of `z = z² + c`, started at the origin, stays
//! within a distance of 2 forever.  We can't iterate forever, so each
//! point gets a fixed number of tries; the number of steps it took to
//! escape becomes a gray level, and points that never escaped are
//! drawn (nearly) black.
//!
//! A frame is rendered by mapping every pixel of the output raster
//! onto a viewport of the complex plane.  The raster is cut into
//! equal vertical strips, one per worker thread; the frame buffer is
//! split into matching disjoint slices up front, so every worker
//! writes its own strip without any locking, and the caller gets the
//! frame back only once all of them have finished.

pub mod complex;
pub mod config;
pub mod errors;
pub mod escape;
pub mod frame;
pub mod planes;
pub mod raster;
pub mod render;
pub mod viewport;

pub use config::RenderConfig;
pub use errors::RenderError;
pub use escape::EscapeTime;
pub use frame::Frame;
pub use raster::{partition, Partition, Raster};
pub use render::{render, Presenter, Renderer};
pub use viewport::{Motion, Viewport};
