//! Benchmarks for the editing core.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ted::editor::{Command, Direction, Editor};

fn bench_typing_at_end_of_line(c: &mut Criterion) {
    c.bench_function("typing_at_end_of_line", |b| {
        b.iter(|| {
            let mut ed = Editor::new();
            for _ in 0..1_000 {
                ed.insert_text_before_cursor(black_box(b"x"));
            }
            ed
        })
    });
}

fn bench_insert_at_line_start(c: &mut Criterion) {
    // Worst case for a contiguous row buffer: every insert shifts the tail.
    c.bench_function("insert_at_line_start", |b| {
        b.iter(|| {
            let mut ed = Editor::new();
            for _ in 0..1_000 {
                ed.apply(black_box(&Command::InsertText("x".into())));
                ed.apply(&Command::MoveHome);
            }
            ed
        })
    });
}

fn bench_split_and_merge_churn(c: &mut Criterion) {
    let base = "The quick brown fox jumps over the lazy dog".repeat(4);
    c.bench_function("split_and_merge_churn", |b| {
        b.iter(|| {
            let mut ed = Editor::from_text(black_box(&base));
            for col in (0..base.len()).step_by(7) {
                ed.apply(&Command::MoveTo(0, col));
                ed.apply(&Command::NewLine);
                ed.apply(&Command::Backspace);
            }
            ed
        })
    });
}

fn bench_cursor_walk(c: &mut Criterion) {
    let text = (0..200)
        .map(|i| format!("line number {i} with some text"))
        .collect::<Vec<_>>()
        .join("\n");
    c.bench_function("cursor_walk", |b| {
        b.iter(|| {
            let mut ed = Editor::from_text(black_box(&text));
            for _ in 0..199 {
                ed.apply(&Command::MoveCursor(Direction::Down));
                ed.apply(&Command::MoveCursor(Direction::Right));
            }
            ed
        })
    });
}

criterion_group!(
    benches,
    bench_typing_at_end_of_line,
    bench_insert_at_line_start,
    bench_split_and_merge_churn,
    bench_cursor_walk
);
criterion_main!(benches);
