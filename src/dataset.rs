// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Write the filtered time-series dataset and read it back as per-day counts
// role: persistence/dataset
// inputs: filtered record dates; dataset file paths; the chart DaySpan
// outputs: <start>-<user>-<name>.csv files (one YYYY-MM-DD per line, no header); per-day count vectors
// side_effects: Creates or truncates files with permissive permissions
// invariants:
// - encode_dates emits exactly one "YYYY-MM-DD\n" line per date, in input order
// - count_per_day returns span.len() buckets in day order; their sum equals the number of in-span dates
// errors: IO errors carry the file path; malformed rows abort with row number and content
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use crate::dates::{DAY_FORMAT, DaySpan};

const DATE_PREFIX_LEN: usize = 10;

pub fn encode_dates<I>(dates: I) -> Vec<u8>
where
  I: IntoIterator<Item = NaiveDate>,
{
  let mut buf = Vec::new();

  for day in dates {
    buf.extend_from_slice(day.format(DAY_FORMAT).to_string().as_bytes());
    buf.push(b'\n');
  }

  buf
}

/// Write `data` to `path`, replacing any existing file.
pub fn write_dataset(path: &Path, data: &[u8]) -> Result<()> {
  let mut opts = OpenOptions::new();
  opts.write(true).create(true).truncate(true);

  #[cfg(unix)]
  {
    use std::os::unix::fs::OpenOptionsExt;
    opts.mode(0o777);
  }

  let mut file = opts
    .open(path)
    .with_context(|| format!("could not write output file {}", path.display()))?;

  file
    .write_all(data)
    .with_context(|| format!("could not write output file {}", path.display()))?;

  tracing::info!(path = %path.display(), bytes = data.len(), "wrote dataset");

  Ok(())
}

/// Read a dataset file as single-column rows and parse the leading `YYYY-MM-DD` of each.
pub fn read_dataset(path: &Path) -> Result<Vec<NaiveDate>> {
  let mut reader = csv::ReaderBuilder::new()
    .has_headers(false)
    .flexible(true)
    .from_path(path)
    .with_context(|| format!("could not read input file {}", path.display()))?;

  let mut out = Vec::new();

  for (idx, row) in reader.records().enumerate() {
    let row = row.with_context(|| format!("could not read data records from {}", path.display()))?;

    if row.len() != 1 {
      bail!(
        "could not read data records from {}: row {} has {} fields, expected 1",
        path.display(),
        idx + 1,
        row.len()
      );
    }

    let field = &row[0];
    let prefix = field.get(..DATE_PREFIX_LEN).unwrap_or(field);
    let day = NaiveDate::parse_from_str(prefix, DAY_FORMAT)
      .with_context(|| format!("could not parse timestamp {:?} at row {} of {}", field, idx + 1, path.display()))?;

    out.push(day);
  }

  Ok(out)
}

/// Tally dates per calendar day of `span`; dates outside the span are ignored.
pub fn count_per_day(dates: &[NaiveDate], span: &DaySpan) -> Vec<u32> {
  let mut counts = vec![0u32; span.len()];

  for day in dates {
    if let Some(i) = span.index_of(*day) {
      counts[i] += 1;
    }
  }

  counts
}

/// `read_dataset` followed by `count_per_day`.
pub fn count_file_per_day(path: &Path, span: &DaySpan) -> Result<Vec<u32>> {
  let dates = read_dataset(path)?;
  Ok(count_per_day(&dates, span))
}
