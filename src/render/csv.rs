use crate::model::BucketStats;
use anyhow::Context;

pub const HEADER: [&str; 3] = ["distance", "mean_lat", "std"];

/// Render rows as CSV, header first, one newline-terminated line per bucket.
///
/// `std` is always a float (`10.0`); `mean_lat` drops the fraction when the
/// mean is whole (`20`).
pub fn render_csv(rows: &[BucketStats]) -> anyhow::Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);

    // Written explicitly so a report without buckets still has its header.
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    String::from_utf8(wtr.into_inner()?).context("CSV output is not valid UTF-8")
}
