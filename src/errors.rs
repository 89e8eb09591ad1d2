// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ways a render pass can be refused or fail.

use failure::Fail;

/// Everything the renderer reports back to its caller.  A pass either
/// completes the whole frame or returns one of these; there is no
/// partially rendered result.
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum RenderError {
    /// The complex-plane rectangle is degenerate or contains
    /// non-finite bounds, and would only produce NaN pixels.
    #[fail(display = "invalid viewport: {}", reason)]
    InvalidViewport {
        /// What was wrong with the bounds.
        reason: String,
    },

    /// The output raster, iteration limit or worker count cannot be
    /// rendered (a zero somewhere it must not be).
    #[fail(display = "invalid raster: {}", reason)]
    InvalidRaster {
        /// What was wrong with the raster settings.
        reason: String,
    },

    /// A worker panicked while shading its partition.  The pass was
    /// aborted after every other worker had been joined.
    #[fail(display = "worker for partition {} failed: {}", partition, message)]
    WorkerFailure {
        /// Index of the failing partition.
        partition: usize,
        /// The panic payload, if it was a string.
        message: String,
    },
}

impl RenderError {
    pub(crate) fn viewport<S: Into<String>>(reason: S) -> Self {
        RenderError::InvalidViewport {
            reason: reason.into(),
        }
    }

    pub(crate) fn raster<S: Into<String>>(reason: S) -> Self {
        RenderError::InvalidRaster {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_partition() {
        let e = RenderError::WorkerFailure {
            partition: 3,
            message: "boom".to_string(),
        };
        assert_eq!(e.to_string(), "worker for partition 3 failed: boom");
    }

    #[test]
    fn helpers_build_the_right_variant() {
        assert_eq!(
            RenderError::viewport("re_min >= re_max"),
            RenderError::InvalidViewport {
                reason: "re_min >= re_max".to_string()
            }
        );
        assert!(RenderError::raster("zero width")
            .to_string()
            .starts_with("invalid raster"));
    }
}
