use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_term::{
    BandBuffer, GridDimensions, Navigation, Viewport, classify, navigate, render_frame,
};

fn bench_render_default_view(c: &mut Criterion) {
    let grid = GridDimensions::new(24, 80).expect("bench grid is valid");
    let view = Viewport::default();

    c.bench_function("render_frame 80x24 default view", |b| {
        b.iter(|| {
            let mut frame = BandBuffer::new(grid);
            render_frame(black_box(grid), black_box(view), &mut frame);
            frame
        });
    });
}

fn bench_render_zoomed_boundary(c: &mut Criterion) {
    let grid = GridDimensions::new(50, 200).expect("bench grid is valid");
    let mut view = Viewport::new(-0.743_643_887, 0.131_825_904, 3.0).expect("bench view is valid");
    for _ in 0..3 {
        view = navigate(view, grid, Navigation::ZoomIn);
    }

    c.bench_function("render_frame 200x50 seahorse valley", |b| {
        b.iter(|| {
            let mut frame = BandBuffer::new(grid);
            render_frame(black_box(grid), black_box(view), &mut frame);
            frame
        });
    });
}

fn bench_classify_interior(c: &mut Criterion) {
    c.bench_function("classify interior point", |b| {
        b.iter(|| classify(black_box(-0.5), black_box(0.0)));
    });
}

criterion_group!(
    benches,
    bench_render_default_view,
    bench_render_zoomed_boundary,
    bench_classify_interior
);
criterion_main!(benches);
