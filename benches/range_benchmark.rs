//! Range computation benchmarks.
//!
//! Measures the per-event cost of the engine: recomputing the window after a
//! scroll and materializing the items to render. Both must stay independent
//! of the item count.
//!
//! Run with: cargo bench --bench range_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::rc::Rc;
use virtscroll::virtualizer::{
    compute_range, fixed_element, GridVirtualizer, Orientation, ScrollElement, Viewport,
    Virtualizer, VirtualizerOptions,
};

/// Item counts spanning four orders of magnitude.
const COUNTS: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

fn bound_rows(count: usize) -> (Virtualizer, Rc<Viewport>) {
    let viewport = Rc::new(Viewport::new(400, 200));
    viewport.set_content_extent(Orientation::Vertical, count as u64 * 35);
    let virtualizer = Virtualizer::new(
        VirtualizerOptions::new(count, 35)
            .with_overscan(5)
            .with_scroll_element(fixed_element(viewport.clone())),
    )
    .expect("valid item size");
    (virtualizer, viewport)
}

/// Pure range arithmetic at the middle of the list.
fn benchmark_compute_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_range");
    for count in COUNTS {
        let offset = count as u64 * 35 / 2;
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| compute_range(black_box(count), 35, black_box(offset), 200, 5));
        });
    }
    group.finish();
}

/// Scroll one step and resync, the work done for every scroll event.
fn benchmark_scroll_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_sync");
    for count in COUNTS {
        let (mut virtualizer, viewport) = bound_rows(count);
        let middle = count as u64 * 35 / 2;
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            let mut step = 0u64;
            b.iter(|| {
                step = (step + 1) % 100;
                viewport.scroll_to(Orientation::Vertical, middle + step);
                black_box(virtualizer.sync())
            });
        });
    }
    group.finish();
}

/// Materialize and walk the rendered items.
fn benchmark_virtual_items(c: &mut Criterion) {
    let mut group = c.benchmark_group("virtual_items");
    for count in COUNTS {
        let (virtualizer, _viewport) = bound_rows(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| virtualizer.virtual_items().map(|item| item.start).sum::<u64>());
        });
    }
    group.finish();
}

/// Walk every rendered cell of a 10 000 x 10 000 grid.
fn benchmark_grid_cells(c: &mut Criterion) {
    let viewport = Rc::new(Viewport::new(500, 500));
    viewport.set_content_extent(Orientation::Vertical, 10_000 * 35);
    viewport.set_content_extent(Orientation::Horizontal, 10_000 * 100);
    let rows = Virtualizer::new(
        VirtualizerOptions::new(10_000, 35)
            .with_overscan(5)
            .with_scroll_element(fixed_element(viewport.clone())),
    )
    .expect("valid row size");
    let columns = Virtualizer::new(
        VirtualizerOptions::new(10_000, 100)
            .horizontal()
            .with_overscan(5)
            .with_scroll_element(fixed_element(viewport.clone())),
    )
    .expect("valid column size");
    let grid = GridVirtualizer::new(rows, columns).expect("orientations match");

    c.bench_function("grid_cells", |b| {
        b.iter(|| grid.cells().filter(|cell| (cell.row.index ^ cell.column.index) & 1 == 0).count());
    });
}

criterion_group!(
    benches,
    benchmark_compute_range,
    benchmark_scroll_sync,
    benchmark_virtual_items,
    benchmark_grid_cells
);
criterion_main!(benches);
