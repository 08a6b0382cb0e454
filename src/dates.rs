// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Strict YYYY-MM-DD parsing, the inclusive filter window, and the calendar-day span a chart covers
// role: dates/windowing
// inputs: --start/--end strings from the CLI
// outputs: DateWindow (inclusive), DaySpan (first day of start month .. last day of end month)
// invariants:
// - only zero-padded YYYY-MM-DD is accepted
// - DateWindow comparisons use NaiveDate, never string ordering
// - DaySpan always covers at least one whole month
// errors: anyhow with the offending flag named in context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Duration, NaiveDate};

pub const DAY_FORMAT: &str = "%Y-%m-%d";
const DAY_LEN: usize = 10;

/// Parse a `YYYY-MM-DD` day. Unpadded forms like `2018-5-1` are rejected.
pub fn parse_day(raw: &str) -> Result<NaiveDate> {
  let s = raw.trim();

  if s.len() != DAY_LEN {
    bail!("invalid date {:?}, expected YYYY-MM-DD", raw);
  }

  NaiveDate::parse_from_str(s, DAY_FORMAT).with_context(|| format!("invalid date {:?}, expected YYYY-MM-DD", raw))
}

/// Number of days in the given month; None for an invalid year/month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
  let first = NaiveDate::from_ymd_opt(year, month, 1)?;
  let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
  let next = NaiveDate::from_ymd_opt(ny, nm, 1)?;

  Some((next - first).num_days() as u32)
}

/// Inclusive `[start, end]` window used by the record filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
  pub start: NaiveDate,
  pub end: NaiveDate,
}

impl DateWindow {
  pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
    Self { start, end }
  }

  pub fn parse(start: &str, end: &str) -> Result<Self> {
    let start = parse_day(start).context("an error occurred while parsing the start date")?;
    let end = parse_day(end).context("an error occurred while parsing the end date")?;

    Ok(Self::new(start, end))
  }

  pub fn contains(&self, day: NaiveDate) -> bool {
    self.start <= day && day <= self.end
  }

  /// Chart span for this window: whole months from the start month through the end month.
  pub fn chart_span(&self) -> Result<DaySpan> {
    DaySpan::months(
      self.start.year(),
      self.start.month(),
      self.end.year(),
      self.end.month(),
    )
  }
}

/// Contiguous run of calendar days, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpan {
  first: NaiveDate,
  last: NaiveDate,
}

impl DaySpan {
  /// Every day of the start month through the last day of the end month.
  /// An end month before the start month collapses to the start month alone.
  pub fn months(start_year: i32, start_month: u32, end_year: i32, end_month: u32) -> Result<Self> {
    let first = NaiveDate::from_ymd_opt(start_year, start_month, 1)
      .with_context(|| format!("cannot compute days for {:04}-{:02}", start_year, start_month))?;

    let (ey, em) = if (end_year, end_month) < (start_year, start_month) {
      (start_year, start_month)
    } else {
      (end_year, end_month)
    };

    let days = days_in_month(ey, em).with_context(|| format!("cannot compute days for {:04}-{:02}", ey, em))?;
    let last = NaiveDate::from_ymd_opt(ey, em, days).with_context(|| format!("cannot compute days for {:04}-{:02}", ey, em))?;

    Ok(Self { first, last })
  }

  pub fn first(&self) -> NaiveDate {
    self.first
  }

  pub fn last(&self) -> NaiveDate {
    self.last
  }

  pub fn len(&self) -> usize {
    ((self.last - self.first).num_days() + 1) as usize
  }

  pub fn contains(&self, day: NaiveDate) -> bool {
    self.first <= day && day <= self.last
  }

  /// Zero-based offset of `day` inside the span.
  pub fn index_of(&self, day: NaiveDate) -> Option<usize> {
    self.contains(day).then(|| (day - self.first).num_days() as usize)
  }

  pub fn day_at(&self, index: usize) -> NaiveDate {
    self.first + Duration::days(index as i64)
  }
}
