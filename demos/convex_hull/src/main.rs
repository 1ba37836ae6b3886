use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use rhull::render::{RenderOptions, SvgVisualizer, Visualizer};

#[derive(Parser)]
#[command(name = "convex_hull")]
#[command(about = "Convex hull of a JSON list of [x, y] points")]
struct Cmd {
  /// File holding the points. Reads stdin when omitted.
  input: Option<PathBuf>,

  /// Print the hull as JSON instead of a description.
  #[arg(long)]
  json: bool,

  /// Save an SVG plot of the points and the hull.
  #[arg(long)]
  plot: bool,

  /// Directory for saved plots.
  #[arg(long, default_value = "plots")]
  out_dir: PathBuf,

  /// Do not annotate points with their coordinates.
  #[arg(long)]
  no_labels: bool,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();
  let cmd = Cmd::parse();

  let text = match &cmd.input {
    Some(path) => {
      std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    }
    None => {
      let mut buf = String::new();
      std::io::stdin().read_to_string(&mut buf)?;
      buf
    }
  };

  tracing::debug!(bytes = text.len(), "read input");
  let points = rhull::input::from_json_str(&text)?;
  let hull = rhull::convex_hull_of(&points);

  if cmd.json {
    println!("{}", serde_json::to_string(&hull)?);
  } else {
    println!("{}", hull);
  }

  if cmd.plot {
    let visualizer = SvgVisualizer::new(RenderOptions {
      out_dir: cmd.out_dir,
      labels: !cmd.no_labels,
      ..RenderOptions::default()
    });
    let path = visualizer.visualize(&points, &hull)?;
    println!("Saved plot to {}", path.display());
  }
  Ok(())
}
