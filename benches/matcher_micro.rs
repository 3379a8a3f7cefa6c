//! Microbenchmark that isolates the matcher DP from all other overhead
//! (collection handling, sorting, presentation).

use criterion::{Criterion, criterion_group, criterion_main};

use fzyr::{Config, FzyMatcher};

/// Synthesize path-like candidate lines so the bonus classes (slashes,
/// dots, word separators) are actually exercised.
fn make_lines() -> Vec<String> {
    let dirs = ["src", "tests", "docs", "vendor", "target", "examples"];
    let stems = ["reader", "matcher", "config", "filter", "bonus", "matrix"];
    let exts = ["rs", "toml", "md", "txt"];
    let mut lines = Vec::with_capacity(20_000);
    for i in 0..20_000 {
        let d1 = dirs[i % dirs.len()];
        let d2 = dirs[(i / dirs.len()) % dirs.len()];
        let stem = stems[i % stems.len()];
        let ext = exts[i % exts.len()];
        lines.push(format!("{d1}/{d2}/{stem}_{i}.{ext}"));
    }
    lines
}

fn bench_matcher(c: &mut Criterion) {
    let lines = make_lines();
    let matcher = FzyMatcher::new(Config::default());

    c.bench_function("micro_has_match", |b| {
        b.iter(|| {
            let mut count = 0u64;
            for line in &lines {
                if matcher.has_match("reader", line) {
                    count += 1;
                }
            }
            count
        });
    });

    c.bench_function("micro_score", |b| {
        b.iter(|| {
            let mut acc = 0.0f64;
            for line in &lines {
                if matcher.has_match("reader", line) {
                    acc += matcher.score("reader", line);
                }
            }
            acc
        });
    });

    c.bench_function("micro_positions", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for line in &lines {
                if matcher.has_match("reader", line) {
                    total += matcher.positions("reader", line).0.len();
                }
            }
            total
        });
    });

    c.bench_function("micro_filter", |b| {
        b.iter(|| matcher.filter("reader", lines.iter().map(String::as_str)).len());
    });
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
