extern crate assert_cmd;
extern crate predicates;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn mandelbrot() -> Command {
    Command::cargo_bin("mandelbrot").unwrap()
}

#[test]
fn renders_a_preview() {
    mandelbrot()
        .args(&["--size", "96x64", "--threads", "4", "--columns", "48"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@"))
        .stdout(predicate::str::contains("# [-2, 1] x [-1, 1]i"));
}

#[test]
fn renders_once_per_motion() {
    let output = mandelbrot()
        .args(&["-s", "60x40", "-t", "3", "-c", "30", "-m", "in,left,out"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("# [").count(), 4);
}

#[test]
fn rejects_a_bad_size() {
    mandelbrot()
        .args(&["--size", "banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}

#[test]
fn rejects_zero_threads() {
    mandelbrot()
        .args(&["--threads", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be between"));
}

#[test]
fn rejects_unknown_motions() {
    mandelbrot()
        .args(&["--moves", "in,sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown motion 'sideways'"));
}

#[test]
fn empty_raster_is_a_render_failure() {
    mandelbrot()
        .args(&["--size", "0x10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure: invalid raster"));
}

#[test]
fn warns_about_dropped_columns() {
    mandelbrot()
        .env("RUST_LOG", "warn")
        .args(&["--size", "10x4", "--threads", "3", "--columns", "10"])
        .assert()
        .success()
        .stderr(predicate::str::contains("are not rendered"));
}

#[test]
fn defaults_to_one_thread_per_cpu() {
    mandelbrot()
        .env("RUST_LOG", "info")
        .args(&["--size", "64x32", "--columns", "16"])
        .assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "on {} threads",
            num_cpus::get()
        )));
}

#[test]
fn rejects_sizes_past_u16() {
    mandelbrot()
        .args(&["--size", "70000x10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}

#[test]
fn rejects_a_non_numeric_iteration_count() {
    mandelbrot()
        .args(&["--iterations", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse iteration count"));
}
