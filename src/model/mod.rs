//! Aggregation model: turn parsed buckets into per-distance latency rows.

pub mod stats;

use crate::log::LatencyLog;
use anyhow::anyhow;
use serde::{Serialize, Serializer};

/// Distance step between consecutive buckets.
pub const DISTANCE_STRIDE: u64 = 5;

/// Statistics for one bucket, in output column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketStats {
    pub distance: u64,
    #[serde(serialize_with = "serialize_mean")]
    pub mean_lat: f64,
    pub std: f64,
}

/// Whole means are written as integers (`20`), the rest as floats (`1.5`).
fn serialize_mean<S: Serializer>(mean: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;
    if mean.fract() == 0.0 && mean.abs() < EXACT_INT_LIMIT {
        serializer.serialize_i64(*mean as i64)
    } else {
        serializer.serialize_f64(*mean)
    }
}

/// Build one row per bucket, in log order. Bucket `i` sits at distance
/// `i * DISTANCE_STRIDE`.
///
/// Fails on the first bucket with fewer than two samples, since its sample
/// standard deviation is undefined.
pub fn build_bucket_stats(log: &LatencyLog) -> crate::Result<Vec<BucketStats>> {
    let mut rows = Vec::with_capacity(log.len());

    for (index, bucket) in log.iter().enumerate() {
        let distance = (index as u64)
            .checked_mul(DISTANCE_STRIDE)
            .ok_or_else(|| anyhow!("distance of bucket {} overflows", index))?;
        let samples = bucket.latencies.len();

        let insufficient = || {
            anyhow!(
                "bucket {} (distance {}) has {} elapsed value(s); standard deviation needs at least 2",
                index,
                distance,
                samples
            )
        };
        let std = stats::sample_stdev(&bucket.latencies).ok_or_else(insufficient)?;
        let mean_lat = stats::mean(&bucket.latencies).ok_or_else(insufficient)?;

        rows.push(BucketStats {
            distance,
            mean_lat,
            std,
        });
    }

    Ok(rows)
}
