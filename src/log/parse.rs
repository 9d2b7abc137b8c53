use crate::log::row::{Bucket, LatencyLog, Line, Record};
use anyhow::{Context, bail};
use std::collections::BTreeMap;
use std::fs;
use tracing::{debug, warn};

/// Parse a latency log file into its buckets.
///
/// Layout (one record per line, buckets separated by marker lines):
///
/// ```text
/// ====            <- opening marker, discarded
/// req-1 1000 GET  <- start: key, timestamp, label
/// req-1 1042      <- end: key, timestamp
/// ====            <- closes the bucket
/// ```
pub fn parse_latency_file(path: &str) -> anyhow::Result<LatencyLog> {
    let text = fs::read_to_string(path).with_context(|| format!("read latency log {}", path))?;
    parse_latencies(&text, path)
}

/// Parse latency log text. `source` is only used in error messages.
pub fn parse_latencies(text: &str, source: &str) -> anyhow::Result<LatencyLog> {
    let mut out = LatencyLog::new();
    let mut current = BucketBuilder::default();

    for (lineno, line) in text.lines().enumerate().skip(1) {
        let lno = lineno + 1;
        let location = || format!("latency log parse error at {}:{}: {:?}", source, lno, line);

        match classify_line(line).with_context(location)? {
            Line::Marker => {
                let bucket = std::mem::take(&mut current).finish(out.len());
                out.push(bucket);
            }
            Line::Record(record) => current.apply(record).with_context(location)?,
        }
    }

    // A trailing marker already closed the last bucket.
    if current.records > 0 {
        out.push(current.finish(out.len()));
    }

    Ok(out)
}

/// Classify a single line. Any line without a space is a marker, including
/// an empty one.
pub fn classify_line(line: &str) -> anyhow::Result<Line> {
    if !line.contains(' ') {
        return Ok(Line::Marker);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    let record = match fields.as_slice() {
        [key, start, label] => Record::Start {
            key: key.to_string(),
            start: parse_timestamp(start)?,
            label: label.to_string(),
        },
        [key, end] => Record::End {
            key: key.to_string(),
            end: parse_timestamp(end)?,
        },
        _ => bail!(
            "Invalid latencies provided: expected 2 or 3 fields, found {}",
            fields.len()
        ),
    };
    Ok(Line::Record(record))
}

fn parse_timestamp(s: &str) -> anyhow::Result<i64> {
    s.parse::<i64>()
        .with_context(|| format!("timestamp {:?} is not an integer", s))
}

#[derive(Debug, Clone, Copy)]
enum Entry {
    Started(i64),
    Elapsed(i64),
}

/// Per-key state of the bucket currently being read.
#[derive(Debug, Default)]
struct BucketBuilder {
    entries: BTreeMap<String, Entry>,
    records: usize,
}

impl BucketBuilder {
    fn apply(&mut self, record: Record) -> anyhow::Result<()> {
        self.records += 1;
        match record {
            Record::Start { key, start, .. } => {
                self.entries.insert(key, Entry::Started(start));
            }
            Record::End { key, end } => {
                let Some(entry) = self.entries.get_mut(&key) else {
                    bail!("end record for key {:?} has no matching start", key);
                };
                // A repeated end is measured from whatever the key holds now.
                let (Entry::Started(stored) | Entry::Elapsed(stored)) = *entry;
                let elapsed = end
                    .checked_sub(stored)
                    .with_context(|| format!("elapsed time for key {:?} overflows", key))?;
                *entry = Entry::Elapsed(elapsed);
            }
        }
        Ok(())
    }

    fn finish(self, index: usize) -> Bucket {
        let mut latencies = Vec::with_capacity(self.entries.len());
        for (key, entry) in self.entries {
            match entry {
                Entry::Elapsed(v) => latencies.push(v),
                Entry::Started(start) => {
                    warn!(
                        bucket = index,
                        key = %key,
                        start,
                        "start record without a matching end, counted as its raw timestamp"
                    );
                    latencies.push(start);
                }
            }
        }
        latencies.sort_unstable();
        debug!(bucket = index, samples = latencies.len(), "closed bucket");
        Bucket { latencies }
    }
}
