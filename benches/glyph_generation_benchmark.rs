//! Benchmark for outline generation and plot building
//!
//! Measures:
//! 1. Raw outline generation per waveform family
//! 2. End-to-end plot building for growing point counts

use entropy_glyphs::{GlyphData, GlyphPlot, GlyphPlotConfig, ShapeFamily, glyph_outline};
use std::hint::black_box;
use std::time::Instant;

/// Generate scattered test data with mixed-sign shape values
fn generate_test_data(points: usize) -> GlyphData {
    let x: Vec<f64> = (0..points).map(|i| (i % 100) as f64).collect();
    let y: Vec<f64> = (0..points).map(|i| (i / 100) as f64).collect();
    let colour: Vec<f64> = (0..points).map(|i| 20.0 * (i as f64 * 0.01).sin()).collect();
    let shape: Vec<f64> = (0..points).map(|i| 3.0 * (i as f64 * 0.07).cos()).collect();
    let size = vec![20.0; points];
    GlyphData::from_columns(&x, &y, &colour, &shape, &size).expect("valid benchmark data")
}

fn summarize(label: &str, mut times: Vec<f64>) {
    times.sort_by(f64::total_cmp);
    let mean = times.iter().sum::<f64>() / times.len() as f64;
    let median = times[times.len() / 2];
    println!(
        "{label:<28} {mean:>9.3}ms (median: {median:.3}ms, range: {:.3}-{:.3}ms)",
        times[0],
        times[times.len() - 1]
    );
}

/// Benchmark outline generation for every family at a fixed frequency
fn benchmark_outlines(frequency: u32) {
    let num_runs = 200;
    for family in ShapeFamily::ALL {
        let mut times = Vec::with_capacity(num_runs);
        for _ in 0..num_runs {
            let start = Instant::now();
            black_box(glyph_outline(black_box(family), black_box(frequency)));
            times.push(start.elapsed().as_secs_f64() * 1000.0);
        }
        summarize(&format!("outline {family} f={frequency}"), times);
    }
}

/// Benchmark building a full plot
fn benchmark_build(points: usize) {
    let data = generate_test_data(points);
    let config = GlyphPlotConfig::default();

    // Warm up
    for _ in 0..3 {
        let _ = GlyphPlot::build(&data, &config);
    }

    let num_runs = 10;
    let mut times = Vec::with_capacity(num_runs);
    for _ in 0..num_runs {
        let start = Instant::now();
        let result = GlyphPlot::build(&data, &config);
        times.push(start.elapsed().as_secs_f64() * 1000.0);
        assert!(result.is_ok(), "plot build failed");
    }
    summarize(&format!("build {points} points"), times);
}

fn main() {
    println!("Glyph Generation Benchmark");
    println!("==========================");
    if cfg!(feature = "parallel-processing") {
        println!("  parallel outline generation enabled");
    }
    println!();

    for frequency in [3, 24, 96] {
        benchmark_outlines(frequency);
    }
    println!();

    for points in [10, 100, 1_000, 10_000] {
        benchmark_build(points);
    }
}
