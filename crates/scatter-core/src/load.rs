// File: crates/scatter-core/src/load.rs
// Summary: CSV sample loading shared by the demos: `x,y,label` columns matched by header name.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::warn;

use crate::sample::Sample;

const X_HEADERS: &[&str] = &["x", "px"];
const Y_HEADERS: &[&str] = &["y", "py"];
const LABEL_HEADERS: &[&str] = &["label", "class", "category", "species"];

pub fn samples_from_path(path: impl AsRef<Path>) -> Result<Vec<Sample>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;
    samples_from_reader(file).with_context(|| format!("failed to load CSV '{}'", path.display()))
}

/// Read `x,y,label` rows. Header names are matched case-insensitively; rows
/// with missing or non-finite coordinates are skipped with a warning.
pub fn samples_from_reader<R: Read>(reader: R) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_x = idx(X_HEADERS).context("missing x column")?;
    let i_y = idx(Y_HEADERS).context("missing y column")?;
    let i_label = idx(LABEL_HEADERS).context("missing label column")?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok()).filter(|v| v.is_finite());
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) => out.push(Sample::new(x, y, rec.get(i_label).unwrap_or_default())),
            // +2: one-based, after the header line
            _ => warn!(row = row + 2, "skipping row with invalid coordinates"),
        }
    }
    Ok(out)
}
