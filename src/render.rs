// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The render orchestrator.
//!
//! A pass cuts the raster into one vertical strip per worker, splits
//! the frame buffer into the matching disjoint mutable slices, runs
//! one scoped thread per strip and joins them all.  Because each
//! thread owns its slice outright no lock is taken while shading.
//! A panicking worker fails the whole pass; the frame is then not
//! handed out until a later pass succeeds.

use std::any::Any;
use std::time::Instant;

use crossbeam::thread::ScopedJoinHandle;
use log::{debug, error, trace, warn};

use crate::config::RenderConfig;
use crate::errors::RenderError;
use crate::escape::EscapeTime;
use crate::frame::Frame;
use crate::raster::{Partition, Raster};
use crate::viewport::Viewport;

/// Where a render pass is.  Only used for tracing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Stage {
    Idle,
    Partitioning,
    Running,
    Joined,
    Done,
}

/// Whatever shows a finished frame.  The renderer never draws; it
/// only hands complete frames to one of these.
pub trait Presenter {
    /// Show `frame`.  Only ever called with a fully rendered frame.
    fn present(&mut self, frame: &Frame);
}

/// Owns the session's frame buffer and renders whole frames into it,
/// overwriting the previous one each pass.
pub struct Renderer {
    frame: Frame,
    escape: EscapeTime,
    workers: usize,
    stage: Stage,
    complete: bool,
}

impl Renderer {
    /// Allocates the frame buffer once, for the whole session.
    pub fn new(config: &RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        Ok(Renderer {
            frame: Frame::new(config.raster()),
            escape: EscapeTime::new(config.max_iterations)?,
            workers: config.workers,
            stage: Stage::Idle,
            complete: false,
        })
    }

    /// The output raster.
    pub fn raster(&self) -> Raster {
        self.frame.raster()
    }

    /// Strips per pass.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// The last frame, if the last pass completed.
    pub fn frame(&self) -> Option<&Frame> {
        if self.complete {
            Some(&self.frame)
        } else {
            None
        }
    }

    /// Renders the full frame for `viewport`, blocking until every
    /// worker is done.
    pub fn render(&mut self, viewport: &Viewport) -> Result<&Frame, RenderError> {
        viewport.validate()?;
        let escape = self.escape;
        let viewport = *viewport;
        self.run(move |partition, cells| escape.shade(&viewport, partition, cells))?;
        Ok(&self.frame)
    }

    /// Renders `viewport` and hands the frame to `presenter`.  Nothing
    /// is presented if the pass fails.
    pub fn render_to<P: Presenter>(
        &mut self,
        viewport: &Viewport,
        presenter: &mut P,
    ) -> Result<(), RenderError> {
        let frame = self.render(viewport)?;
        presenter.present(frame);
        Ok(())
    }

    /// Runs one fork-join pass of `work` over every partition of the
    /// frame.  `work` gets a partition and that partition's own cells.
    pub fn run<F>(&mut self, work: F) -> Result<(), RenderError>
    where
        F: Fn(&Partition, &mut [u8]) + Sync,
    {
        let started = Instant::now();
        self.complete = false;
        self.advance(Stage::Partitioning);

        let raster = self.frame.raster();
        let dropped = raster.remainder(self.workers);
        if dropped != 0 {
            warn!(
                "{} columns do not split into {} strips; the last {} are not rendered",
                raster.width, self.workers, dropped
            );
        }
        let partitions = raster.partitions(self.workers);

        self.advance(Stage::Running);
        let outcome = fork_join(&mut self.frame, &partitions, &work);
        self.advance(Stage::Joined);

        let result = match outcome {
            Ok(()) => {
                self.complete = true;
                self.advance(Stage::Done);
                debug!(
                    "rendered {}x{} with {} workers in {:?}",
                    raster.width,
                    raster.height,
                    self.workers,
                    started.elapsed()
                );
                Ok(())
            }
            Err(e) => {
                error!("render pass aborted: {}", e);
                Err(e)
            }
        };
        self.advance(Stage::Idle);
        result
    }

    fn advance(&mut self, next: Stage) {
        trace!("render stage {:?} -> {:?}", self.stage, next);
        self.stage = next;
    }
}

/// Renders one frame into a freshly allocated buffer.  Sessions that
/// render repeatedly should keep a `Renderer` instead.
pub fn render(
    viewport: &Viewport,
    width: usize,
    height: usize,
    max_iterations: usize,
    workers: usize,
) -> Result<Frame, RenderError> {
    let config = RenderConfig {
        width,
        height,
        max_iterations,
        workers,
    };
    let mut renderer = Renderer::new(&config)?;
    renderer.render(viewport)?;
    Ok(renderer.frame)
}

fn fork_join<F>(frame: &mut Frame, partitions: &[Partition], work: &F) -> Result<(), RenderError>
where
    F: Fn(&Partition, &mut [u8]) + Sync,
{
    let strips = frame.strips_mut(partitions);
    let outcome = crossbeam::scope(|spawner| {
        let handles: Vec<ScopedJoinHandle<()>> = partitions
            .iter()
            .zip(strips)
            .map(|(partition, strip)| spawner.spawn(move |_| work(partition, strip)))
            .collect();

        // Join everything before reporting, lowest failing index wins.
        let mut failure = None;
        for (index, handle) in handles.into_iter().enumerate() {
            if let Err(cause) = handle.join() {
                if failure.is_none() {
                    failure = Some(RenderError::WorkerFailure {
                        partition: index,
                        message: panic_message(cause.as_ref()),
                    });
                }
            }
        }
        failure
    });

    match outcome {
        Ok(None) => Ok(()),
        Ok(Some(e)) => Err(e),
        // Only reachable for an unjoined panicking thread; every
        // handle is joined above.
        Err(cause) => Err(RenderError::WorkerFailure {
            partition: 0,
            message: panic_message(cause.as_ref()),
        }),
    }
}

fn panic_message(cause: &(dyn Any + Send)) -> String {
    if let Some(s) = cause.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = cause.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}
