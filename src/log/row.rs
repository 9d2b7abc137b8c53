/// A single data line from the latency log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// `key start label`: a request was issued at `start`.
    Start {
        key: String,
        start: i64,
        label: String,
    },
    /// `key end`: the request identified by `key` completed at `end`.
    End { key: String, end: i64 },
}

/// Classification of one raw log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Separator between buckets; its content is ignored.
    Marker,
    Record(Record),
}

/// Elapsed latencies collected between two markers, sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bucket {
    pub latencies: Vec<i64>,
}

/// Buckets in log order; the position determines the distance column.
pub type LatencyLog = Vec<Bucket>;
