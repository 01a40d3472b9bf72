//! Frame benchmark: Measure the cost of producing one kitty frame.
//!
//! PNG encoding dominates; chunking and base64 should be noise next to it.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sketchpad::terminal::graphics;
use sketchpad::{Canvas, Color, OutputBuffer, Point};

fn sketched_canvas(width: u32, height: u32) -> Canvas {
    let mut canvas = Canvas::new(width, height, Color::WHITE).expect("non-zero canvas");
    let w = i32::try_from(width).unwrap_or(i32::MAX);
    let h = i32::try_from(height).unwrap_or(i32::MAX);
    for i in 0..20 {
        canvas.stroke(
            Point::new(i * 13 % w, 0),
            Point::new(w - 1 - i * 7 % w, h - 1),
            4,
            Color::BLUE,
        );
    }
    canvas
}

fn serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for (width, height) in [(400, 300), (800, 600), (1920, 600)] {
        let canvas = sketched_canvas(width, height);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &canvas,
            |b, canvas| b.iter(|| black_box(canvas).serialize()),
        );
    }

    group.finish();
}

fn transmit(c: &mut Criterion) {
    let png = sketched_canvas(800, 600)
        .serialize()
        .expect("canvas encodes");
    let mut out = OutputBuffer::with_capacity(png.len() * 2);

    c.bench_function("transmit_800x600", |b| {
        b.iter(|| {
            out.clear();
            graphics::write_png(&mut out, 1, black_box(&png));
            out.len()
        });
    });
}

criterion_group!(benches, serialize, transmit);
criterion_main!(benches);
