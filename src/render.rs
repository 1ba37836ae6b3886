//! Plots of point sets and their hulls.
//!
//! Rendering is pure ([`render_svg`]); persisting is done by a [`Visualizer`]
//! which picks a fresh file name under a configured directory.
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::data::{Hull, PointSet};

pub mod artifact;
mod svg;

pub use svg::{render_svg, SvgPlot};

/// Something that records a point set together with its hull.
pub trait Visualizer {
  /// Persist a plot and return where it was written.
  fn visualize(&self, points: &PointSet, hull: &Hull) -> Result<PathBuf, RenderError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
  /// Directory that receives the plots. Created if missing.
  pub out_dir: PathBuf,
  /// File names are `<prefix>-YYYY-MM-DD-HH-MM.svg`.
  pub prefix: String,
  pub width: u32,
  pub height: u32,
  /// Blank space around the plot area, in pixels.
  pub margin: f64,
  /// Annotate every point with its coordinates.
  pub labels: bool,
}

impl Default for RenderOptions {
  fn default() -> Self {
    RenderOptions {
      out_dir: PathBuf::from("plots"),
      prefix: "hull".to_string(),
      width: 640,
      height: 480,
      margin: 40.,
      labels: true,
    }
  }
}

/// Failure to write a plot. Unrelated to the validity of the points.
#[derive(Debug)]
pub struct RenderError {
  pub path: PathBuf,
  pub source: io::Error,
}

impl RenderError {
  fn new(path: &Path, source: io::Error) -> RenderError {
    RenderError {
      path: path.to_path_buf(),
      source,
    }
  }
}

impl fmt::Display for RenderError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Failed to write plot to {}: {}", self.path.display(), self.source)
  }
}

impl std::error::Error for RenderError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    Some(&self.source)
  }
}

/// Writes SVG scatter plots to timestamped files.
#[derive(Debug, Clone, Default)]
pub struct SvgVisualizer {
  pub options: RenderOptions,
}

impl SvgVisualizer {
  pub fn new(options: RenderOptions) -> SvgVisualizer {
    SvgVisualizer { options }
  }

  /// Write the plot using `stem` as the base file name.
  pub fn save_as(&self, stem: &str, points: &PointSet, hull: &Hull) -> Result<PathBuf, RenderError> {
    let opts = &self.options;
    let (path, mut file) = artifact::create_unique(&opts.out_dir, stem, "svg")
      .map_err(|err| RenderError::new(&opts.out_dir, err))?;
    let document = render_svg(points, hull, opts);
    file
      .write_all(document.as_bytes())
      .map_err(|err| RenderError::new(&path, err))?;
    tracing::info!(path = %path.display(), vertices = hull.len(), "wrote hull plot");
    Ok(path)
  }
}

impl Visualizer for SvgVisualizer {
  fn visualize(&self, points: &PointSet, hull: &Hull) -> Result<PathBuf, RenderError> {
    let stem = artifact::timestamped(&self.options.prefix, &chrono::Local::now());
    self.save_as(&stem, points, hull)
  }
}
