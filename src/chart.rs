// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Render per-day activity counts as a PNG line chart with one or more named series
// role: rendering/chart
// inputs: DaySpan (x axis), named dataset files, output path, optional font override
// outputs: PNG image at the requested path
// side_effects: Reads dataset files; writes the image; registers a process-wide font once
// invariants:
// - every series has exactly span.len() points, day 0 .. day n-1
// - the legend lists series in the order given
// - without a usable font the chart is still drawn, minus caption/labels/legend
// errors: unreadable/malformed datasets and image encode/create failures propagate with the path in context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use once_cell::sync::OnceCell;
use plotters::prelude::*;
use plotters::style::FontStyle;

use crate::dataset;
use crate::dates::DaySpan;

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 600;
const SERIES_COLORS: [RGBColor; 4] = [BLUE, RED, GREEN, MAGENTA];

const FONT_CANDIDATES: &[&str] = &[
  "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
  "/usr/share/fonts/TTF/DejaVuSans.ttf",
  "/usr/share/fonts/dejavu/DejaVuSans.ttf",
  "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
  "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
  "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
  "/System/Library/Fonts/Supplemental/Arial.ttf",
  "/Library/Fonts/Arial.ttf",
  "C:\\Windows\\Fonts\\arial.ttf",
];

/// A named dataset file drawn as one line.
#[derive(Debug, Clone)]
pub struct SeriesInput {
  pub name: String,
  pub path: PathBuf,
}

impl SeriesInput {
  pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
    Self {
      name: name.into(),
      path: path.into(),
    }
  }
}

#[derive(Debug, Clone)]
pub struct Series {
  pub name: String,
  pub counts: Vec<u32>,
}

/// Re-read each dataset and turn it into per-day counts over `span`.
pub fn load_series(span: &DaySpan, inputs: &[SeriesInput]) -> Result<Vec<Series>> {
  inputs
    .iter()
    .map(|input| {
      let counts = dataset::count_file_per_day(&input.path, span)
        .with_context(|| format!("could not get data for series {:?}", input.name))?;
      Ok(Series {
        name: input.name.clone(),
        counts,
      })
    })
    .collect()
}

/// Chart a single dataset.
pub fn draw_chart(span: &DaySpan, series: SeriesInput, output: &Path, font: Option<&Path>) -> Result<()> {
  draw_chart_with_series(span, std::slice::from_ref(&series), output, font)
}

/// Chart the four repository event categories on one image.
pub fn draw_chart_with_four_lines(span: &DaySpan, series: [SeriesInput; 4], output: &Path, font: Option<&Path>) -> Result<()> {
  draw_chart_with_series(span, &series, output, font)
}

pub fn draw_chart_with_series(span: &DaySpan, inputs: &[SeriesInput], output: &Path, font: Option<&Path>) -> Result<()> {
  let series = load_series(span, inputs)?;
  let labelled = ensure_font(font);

  if !labelled {
    tracing::warn!("no usable font found; drawing chart without caption, labels or legend");
  }

  render_png(span, &series, output, labelled).with_context(|| format!("could not draw chart {}", output.display()))?;
  tracing::info!(path = %output.display(), series = series.len(), "wrote chart");

  Ok(())
}

/// Register a TrueType font for plotters once per process; returns whether text can be drawn.
fn ensure_font(explicit: Option<&Path>) -> bool {
  static REGISTERED: OnceCell<bool> = OnceCell::new();

  *REGISTERED.get_or_init(|| {
    if let Some(path) = explicit {
      match register_font_file(path) {
        Ok(()) => return true,
        Err(e) => tracing::warn!(font = %path.display(), "ignoring chart font: {:#}", e),
      }
    }

    FONT_CANDIDATES.iter().any(|p| register_font_file(Path::new(p)).is_ok())
  })
}

fn register_font_file(path: &Path) -> Result<()> {
  let bytes = std::fs::read(path).with_context(|| format!("could not read font {}", path.display()))?;
  let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());

  plotters::style::register_font("sans-serif", FontStyle::Normal, bytes)
    .map_err(|_| anyhow!("could not parse font {}", path.display()))?;
  tracing::debug!(font = %path.display(), "registered chart font");

  Ok(())
}

fn render_png(span: &DaySpan, series: &[Series], output: &Path, labelled: bool) -> Result<()> {
  let root = BitMapBackend::new(output, (WIDTH, HEIGHT)).into_drawing_area();
  root.fill(&WHITE).map_err(|e| anyhow!("{e}"))?;

  let days = span.len() as u32;
  let y_max = series
    .iter()
    .flat_map(|s| s.counts.iter().copied())
    .max()
    .unwrap_or(0)
    .max(1)
    + 1;

  let mut builder = ChartBuilder::on(&root);
  builder.margin(20);

  if labelled {
    builder.x_label_area_size(40).y_label_area_size(40).caption(
      format!("{} .. {}", span.first().format("%Y-%m-%d"), span.last().format("%Y-%m-%d")),
      ("sans-serif", 20).into_font(),
    );
  }

  let mut chart = builder
    .build_cartesian_2d(0u32..days.saturating_sub(1).max(1), 0u32..y_max)
    .map_err(|e| anyhow!("{e}"))?;

  if labelled {
    let label_day = |idx: &u32| span.day_at(*idx as usize).format("%m-%d").to_string();

    chart
      .configure_mesh()
      .x_labels(days.min(16) as usize)
      .x_label_formatter(&label_day)
      .y_desc("count")
      .draw()
      .map_err(|e| anyhow!("{e}"))?;
  }

  for (i, s) in series.iter().enumerate() {
    let color = SERIES_COLORS[i % SERIES_COLORS.len()];
    let points = s.counts.iter().enumerate().map(|(d, c)| (d as u32, *c));

    let drawn = chart
      .draw_series(LineSeries::new(points, color.stroke_width(2)))
      .map_err(|e| anyhow!("{e}"))?;

    if labelled {
      drawn
        .label(s.name.clone())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }
  }

  if labelled {
    chart
      .configure_series_labels()
      .background_style(&WHITE.mix(0.8))
      .border_style(&BLACK)
      .draw()
      .map_err(|e| anyhow!("{e}"))?;
  }

  root.present().map_err(|e| anyhow!("{e}"))?;

  Ok(())
}
