use std::fmt;

use super::RenderOptions;
use crate::data::{Hull, Point, PointSet};

const GRID_LINES: usize = 5;

// Maps plane coordinates onto the canvas. The y-axis points down in SVG.
struct Viewport {
  min: (f64, f64),
  span: (f64, f64),
  width: f64,
  height: f64,
  margin: f64,
}

impl Viewport {
  fn new(points: &[Point], opts: &RenderOptions) -> Viewport {
    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for pt in points {
      min = (min.0.min(pt.x()), min.1.min(pt.y()));
      max = (max.0.max(pt.x()), max.1.max(pt.y()));
    }
    let span = |lo: f64, hi: f64| if hi > lo { hi - lo } else { 1. };
    Viewport {
      min,
      span: (span(min.0, max.0), span(min.1, max.1)),
      width: f64::from(opts.width),
      height: f64::from(opts.height),
      margin: opts.margin,
    }
  }

  fn project(&self, pt: &Point) -> (f64, f64) {
    let inner_w = self.width - 2. * self.margin;
    let inner_h = self.height - 2. * self.margin;
    let x = self.margin + (pt.x() - self.min.0) / self.span.0 * inner_w;
    let y = self.height - self.margin - (pt.y() - self.min.1) / self.span.1 * inner_h;
    (x, y)
  }
}

/// SVG scatter plot of a point set with its hull drawn as a closed polygon.
///
/// The hull is only drawn when it has more than one vertex.
pub struct SvgPlot<'a> {
  points: &'a PointSet,
  hull: &'a Hull,
  opts: &'a RenderOptions,
}

impl<'a> SvgPlot<'a> {
  pub fn new(points: &'a PointSet, hull: &'a Hull, opts: &'a RenderOptions) -> Self {
    SvgPlot { points, hull, opts }
  }
}

impl fmt::Display for SvgPlot<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let opts = self.opts;
    let view = Viewport::new(self.points, opts);
    let (w, h, m) = (view.width, view.height, view.margin);

    writeln!(
      f,
      r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
      opts.width, opts.height, opts.width, opts.height
    )?;
    writeln!(f, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;

    for i in 0..=GRID_LINES {
      let t = i as f64 / GRID_LINES as f64;
      let x = m + t * (w - 2. * m);
      let y = m + t * (h - 2. * m);
      writeln!(
        f,
        r#"  <line class="grid" x1="{x:.2}" y1="{m:.2}" x2="{x:.2}" y2="{:.2}" stroke="lightgray"/>"#,
        h - m
      )?;
      writeln!(
        f,
        r#"  <line class="grid" x1="{m:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="lightgray"/>"#,
        w - m
      )?;
    }

    if self.hull.len() > 1 {
      write!(f, r#"  <polygon class="hull" points=""#)?;
      for (i, pt) in self.hull.iter().enumerate() {
        let (x, y) = view.project(pt);
        if i > 0 {
          write!(f, " ")?;
        }
        write!(f, "{:.2},{:.2}", x, y)?;
      }
      writeln!(f, r#"" fill="none" stroke="red" stroke-width="1.5"/>"#)?;
    }

    for pt in self.points.iter() {
      let (x, y) = view.project(pt);
      writeln!(
        f,
        r#"  <circle class="point" cx="{x:.2}" cy="{y:.2}" r="3" fill="blue"/>"#
      )?;
      if opts.labels {
        writeln!(
          f,
          r#"  <text x="{x:.2}" y="{y:.2}" font-size="9" text-anchor="end">{}</text>"#,
          pt
        )?;
      }
    }

    caption(f, w / 2., m / 2., 14, "Convex hull")?;
    caption(f, w / 2., h - m / 4., 12, "X")?;
    caption(f, m / 4., h / 2., 12, "Y")?;
    writeln!(f, "</svg>")
  }
}

fn caption(f: &mut fmt::Formatter<'_>, x: f64, y: f64, size: u32, text: &str) -> fmt::Result {
  writeln!(
    f,
    r#"  <text x="{x:.2}" y="{y:.2}" font-size="{size}" text-anchor="middle">{text}</text>"#
  )
}

/// Render `points` and `hull` to an SVG document.
pub fn render_svg(points: &PointSet, hull: &Hull, opts: &RenderOptions) -> String {
  SvgPlot::new(points, hull, opts).to_string()
}
