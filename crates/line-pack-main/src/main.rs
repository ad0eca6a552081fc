// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use line_pack::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::{error::Error, fs::File, io::BufWriter, time::Instant};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct InstanceInfo {
    idx: usize,
    seed: u64,
    line_length: f64,
    requests: usize,
    min_width: f64,
    max_width: f64,
}

#[derive(Debug, Clone, Serialize)]
struct RunResult {
    instance: InstanceInfo,
    placed: usize,
    unpackable: usize,
    mean_distance: f64,
    max_distance: f64,
    utilization: f64,
    final_gaps: usize,
    largest_gap: f64,
    elapsed_us: u128,
}

#[derive(Debug, Clone, Serialize)]
struct PackReport {
    description: String,
    near_policy: String,
    instances: Vec<RunResult>,
}

fn interpolate(val0: f64, val1: f64, step: usize, steps: usize) -> f64 {
    if steps <= 1 {
        return val1;
    }
    val0 + (val1 - val0) * step as f64 / (steps - 1) as f64
}

fn run_instance(idx: usize, info: InstanceInfo) -> Result<RunResult, Box<dyn Error>> {
    let mut rng = ChaCha8Rng::seed_from_u64(info.seed);
    let mut packer = LinePacker::new(LineLength::new(info.line_length))?;

    let mut placed = 0usize;
    let mut unpackable = 0usize;
    let mut total_distance = 0.0f64;
    let mut max_distance = 0.0f64;

    let t0 = Instant::now();
    for _ in 0..info.requests {
        let width = LineLength::new(rng.random_range(info.min_width..=info.max_width));
        let near = LinePosition::new(rng.random_range(0.0..=info.line_length));
        match packer.pack(width, near) {
            Ok(placement) => {
                placed += 1;
                let d = placement.distance().value();
                total_distance += d;
                max_distance = max_distance.max(d);
            }
            Err(PackError::Unpackable(_)) => unpackable += 1,
            Err(e) => return Err(e.into()),
        }
    }
    let elapsed = t0.elapsed();

    let mean_distance = if placed > 0 {
        total_distance / placed as f64
    } else {
        0.0
    };
    let utilization = packer.occupied_space().value() / info.line_length;
    let largest_gap = packer.largest_gap().map_or(0.0, |g| g.extent().value());

    info!(
        idx,
        placed,
        unpackable,
        mean_distance,
        utilization,
        gaps = packer.gaps().len(),
        "Instance packed"
    );
    if placed == 0 {
        warn!(idx, "Nothing could be placed");
    }

    Ok(RunResult {
        instance: info,
        placed,
        unpackable,
        mean_distance,
        max_distance,
        utilization,
        final_gaps: packer.gaps().len(),
        largest_gap,
        elapsed_us: elapsed.as_micros(),
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    enable_tracing();

    // Ramp from a short, lightly loaded line to a long, oversubscribed one.
    let n_instances = 10usize;
    let (min_length, max_length) = (100.0f64, 10_000.0f64);
    let (min_requests, max_requests) = (20usize, 2_000usize);
    let (min_width, max_width) = (0.5f64, 25.0f64);

    let mut results = Vec::with_capacity(n_instances);
    for i in 0..n_instances {
        let line_length = interpolate(min_length, max_length, i, n_instances);
        let requests = interpolate(min_requests as f64, max_requests as f64, i, n_instances)
            .round() as usize;
        let info = InstanceInfo {
            idx: i,
            seed: 42 + i as u64,
            line_length,
            requests,
            min_width,
            max_width,
        };
        results.push(run_instance(i, info)?);
    }

    let report = PackReport {
        description: "Line packing: 10 seeded instances, random widths targeting uniform points."
            .into(),
        near_policy: PackerConfig::default().near.to_string(),
        instances: results,
    };

    let file = File::create("pack_results.json")?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report)?;

    println!();
    println!("Wrote: pack_results.json");
    Ok(())
}
