//! Benchmarks for the filtering pipeline
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic list of series releases shaped like a typical indexer
//! response.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::{filter_items, sort_items};
use release_data::{Candidate, FilterConfig, MediaRequest};

const QUALITIES: [Option<&str>; 5] = [Some("4k"), Some("1080p"), Some("720p"), Some("480p"), None];

fn synthetic_candidates(count: usize) -> Vec<Candidate> {
    (0..count)
        .map(|i| {
            let season = i % 5 + 1;
            let episode = i % 12 + 1;
            let title = match i % 4 {
                0 => format!("Show.S{:02}E{:02}.1080p.WEB.x264-GRP", season, episode),
                1 => format!("Show.S{:02}.Complete.720p.BluRay", season),
                2 => format!("Show.S01E01-S{:02}E{:02}.Batch", season, episode),
                _ => "Show.Complete.Series.HDCAM".to_string(),
            };
            Candidate::new(title, QUALITIES[i % QUALITIES.len()], (i as u64 + 1) * 1_000_000)
                .with_languages(if i % 3 == 0 { vec!["en"] } else { vec!["fr"] })
        })
        .collect()
}

fn full_config() -> FilterConfig {
    FilterConfig {
        languages: vec!["en".to_string()],
        max_size: Some(500_000_000),
        exclusion_keywords: vec!["cam".to_string()],
        exclusion: vec!["480p".to_string()],
        results_per_quality: Some(10),
        sort: Some("qualitythensize".to_string()),
    }
}

fn bench_filter_items_series(c: &mut Criterion) {
    let candidates = synthetic_candidates(500);
    let request = MediaRequest::series_numbered(2, 5);
    let config = full_config();

    c.bench_function("filter_items_series_500", |b| {
        b.iter(|| {
            let filtered = filter_items(black_box(&candidates), black_box(&request), &config).unwrap();
            black_box(filtered)
        })
    });
}

fn bench_sort_items(c: &mut Criterion) {
    let candidates = synthetic_candidates(500);
    let config = full_config();

    c.bench_function("sort_items_qualitythensize_500", |b| {
        b.iter(|| black_box(sort_items(black_box(&candidates), &config)))
    });
}

criterion_group!(benches, bench_filter_items_series, bench_sort_items);
criterion_main!(benches);
