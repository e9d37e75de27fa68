//! Frame rendering benchmarks.
//!
//! Drives the full TUI (layout, tab bar, clipped items, status bar) against a
//! TestBackend. Requires the `bench-internals` feature for access to the
//! benchmark constructors.
//!
//! Run with: cargo bench --bench render_benchmark --features bench-internals

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use virtscroll::config::ResolvedConfig;
use virtscroll::state::{AppState, Pane};
use virtscroll::view::TuiApp;

/// Terminal sizes: a small split pane, a laptop, a large monitor.
const SIZES: [(u16, u16); 3] = [(80, 24), (160, 50), (320, 100)];

fn app(pane: Pane, width: u16, height: u16) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
    let mut state = AppState::new(&ResolvedConfig::default()).expect("default config is valid");
    state.select_pane(pane);
    let mut app = TuiApp::new_for_bench(terminal, state);
    // First frame sizes every viewport.
    app.render_bench().expect("render");
    app
}

/// Render one frame of each pane.
fn benchmark_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    for pane in Pane::ALL {
        for (width, height) in SIZES {
            let mut app = app(pane, width, height);
            group.bench_with_input(
                BenchmarkId::new(pane.title(), format!("{width}x{height}")),
                &pane,
                |b, _| b.iter(|| app.render_bench().expect("render")),
            );
        }
    }
    group.finish();
}

/// Jump to the last item, then render.
fn benchmark_jump_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("jump_and_render");
    for pane in Pane::ALL {
        group.bench_function(pane.title(), |b| {
            b.iter_batched(
                || app(pane, 160, 50),
                |mut app| {
                    app.handle_key_bench(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE));
                    app.render_bench().expect("render");
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_render_frame, benchmark_jump_and_render);
criterion_main!(benches);
