//! Log parsing for the benchmark latency log.

pub mod parse;
pub mod row;

pub use parse::{classify_line, parse_latencies, parse_latency_file};
pub use row::{Bucket, LatencyLog, Line, Record};
