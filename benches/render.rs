#[macro_use]
extern crate criterion;
extern crate mandelbrot;

use criterion::Criterion;
use mandelbrot::{RenderConfig, Renderer};

fn default_frame(c: &mut Criterion) {
    let config = RenderConfig::default();
    let viewport = config.default_viewport().unwrap();
    let mut renderer = Renderer::new(&config).unwrap();
    c.bench_function("default 768x512 frame", move |b| {
        b.iter(|| renderer.render(&viewport).map(|f| f.get(0, 0)))
    });
}

fn zoomed_frame(c: &mut Criterion) {
    let config = RenderConfig::default().with_hardware_workers();
    let viewport = (0..12).fold(config.default_viewport().unwrap(), |v, _| v.zoom_in());
    let mut renderer = Renderer::new(&config).unwrap();
    c.bench_function("zoomed frame, one strip per cpu", move |b| {
        b.iter(|| renderer.render(&viewport).map(|f| f.get(0, 0)))
    });
}

criterion_group!(benches, default_frame, zoomed_frame);
criterion_main!(benches);
