//! Per-bucket latency statistics from a benchmark latency log.
//!
//! The log is split into buckets by marker lines; each bucket yields one
//! `distance,mean_lat,std` row. Numbers are written the way Python's
//! `statistics` module prints them: a whole mean as an integer (`20`) and the
//! standard deviation always as a float (`10.0`).

pub mod log;
pub mod model;
pub mod render;

use anyhow::Context;
use std::fs;

pub type Result<T> = anyhow::Result<T>;

/// Parse `input`, aggregate every bucket and write the CSV report to `output`.
///
/// The report is rendered in full before `output` is opened, so a failed run
/// never leaves a partial file behind. Returns the number of rows written.
pub fn run(input: &str, output: &str) -> Result<usize> {
    let log = log::parse_latency_file(input)?;
    tracing::debug!(buckets = log.len(), input, "parsed latency log");

    let rows = model::build_bucket_stats(&log)?;
    let text = render::render_csv(&rows)?;

    fs::write(output, text).with_context(|| format!("write output file {}", output))?;
    tracing::info!(rows = rows.len(), output, "wrote bucket statistics");
    Ok(rows.len())
}
