// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A headless shell around the renderer: starts at the whole set,
//! replays a list of zoom and pan motions, re-renders after each one
//! and shows every frame as text on the terminal.

use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error};
use log::info;
use std::str::FromStr;
use std::time::Instant;

use mandelbrot::config::{parse_size, DEFAULT_ITERATIONS};
use mandelbrot::frame::{ascii_preview, Frame};
use mandelbrot::viewport::parse_motions;
use mandelbrot::{Presenter, RenderConfig, Renderer, Viewport};

// Accepts an integer within `low..=high`; `what` names it in the
// error, e.g. "Thread count".
fn within(s: &str, what: &str, low: usize, high: usize) -> Result<(), String> {
    let n = usize::from_str(s).map_err(|_| format!("Could not parse {}", what.to_lowercase()))?;
    if n < low || n > high {
        return Err(format!("{} must be between {} and {}", what, low, high));
    }
    Ok(())
}

const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const THREADS: &str = "threads";
const MOVES: &str = "moves";
const COLUMNS: &str = "columns";

const MAX_THREADS: usize = 1024;

fn args<'a>(default_threads: &'a str, default_iterations: &'a str) -> ArgMatches<'a> {
    App::new("mandelbrot")
        .version("0.1.0")
        .about("Parallel escape-time Mandelbrot renderer")
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("768x512")
                .validator(|s| match parse_size(&s) {
                    Some(_) => Ok(()),
                    None => Err("Could not parse output image size".to_string()),
                })
                .help("Size of the rendered raster, WIDTHxHEIGHT"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value(default_iterations)
                .validator(|s| within(&s, "Iteration count", 1, 200_000))
                .help("Iterations before a point counts as inside the set"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value(default_threads)
                .validator(|s| within(&s, "Thread count", 1, MAX_THREADS))
                .help("Number of vertical strips rendered in parallel"),
        )
        .arg(
            Arg::with_name(MOVES)
                .required(false)
                .long(MOVES)
                .short("m")
                .takes_value(true)
                .validator(|s| parse_motions(&s).map(|_| ()))
                .help("Comma-separated motions to replay: in, out, left, right, up, down"),
        )
        .arg(
            Arg::with_name(COLUMNS)
                .required(false)
                .long(COLUMNS)
                .short("c")
                .takes_value(true)
                .default_value("96")
                .validator(|s| within(&s, "Column count", 1, 1000))
                .help("Width of the text preview"),
        )
        .get_matches()
}

fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, Error> {
    matches
        .value_of(name)
        .and_then(|s| T::from_str(s).ok())
        .ok_or_else(|| format_err!("Could not parse --{}", name))
}

struct Terminal {
    columns: usize,
    frames: usize,
}

impl Presenter for Terminal {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        println!("{}", ascii_preview(&frame.to_image(), self.columns));
    }
}

fn show(
    renderer: &mut Renderer,
    viewport: &Viewport,
    terminal: &mut Terminal,
) -> Result<(), Error> {
    println!("# {}", viewport);
    let start = Instant::now();
    renderer.render_to(viewport, terminal)?;
    info!("Frame {} took {:?}", terminal.frames, start.elapsed());
    Ok(())
}

fn run() -> Result<(), Error> {
    let default_threads = RenderConfig::default()
        .with_hardware_workers()
        .workers
        .to_string();
    let default_iterations = DEFAULT_ITERATIONS.to_string();
    let matches = args(&default_threads, &default_iterations);

    let (width, height) = matches
        .value_of(SIZE)
        .and_then(parse_size)
        .ok_or_else(|| format_err!("Could not parse output image size"))?;
    let config = RenderConfig {
        width,
        height,
        max_iterations: value(&matches, ITERATIONS)?,
        workers: value(&matches, THREADS)?,
    };
    let motions =
        parse_motions(matches.value_of(MOVES).unwrap_or("")).map_err(|e| format_err!("{}", e))?;
    let mut terminal = Terminal {
        columns: value(&matches, COLUMNS)?,
        frames: 0,
    };

    info!(
        "Rendering {}x{} at {} iterations on {} threads",
        config.width, config.height, config.max_iterations, config.workers
    );
    let mut renderer = Renderer::new(&config)?;
    let mut viewport = config.default_viewport()?;
    show(&mut renderer, &viewport, &mut terminal)?;
    for motion in motions {
        viewport = motion.apply(&viewport);
        show(&mut renderer, &viewport, &mut terminal)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
