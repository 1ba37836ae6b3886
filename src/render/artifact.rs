//! Unique file names for saved plots.
use chrono::{DateTime, TimeZone};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// `<prefix>-YYYY-MM-DD-HH-MM`
pub fn timestamped<Tz>(prefix: &str, now: &DateTime<Tz>) -> String
where
  Tz: TimeZone,
  Tz::Offset: std::fmt::Display,
{
  format!("{}-{}", prefix, now.format("%Y-%m-%d-%H-%M"))
}

/// Create a new file named `<stem>.<ext>` in `dir`, creating `dir` if needed.
///
/// If the name is taken, `<stem>-1.<ext>`, `<stem>-2.<ext>`, ... are tried in
/// turn. Existing files are never overwritten.
pub fn create_unique(dir: &Path, stem: &str, ext: &str) -> io::Result<(PathBuf, File)> {
  fs::create_dir_all(dir)?;
  let mut path = dir.join(format!("{}.{}", stem, ext));
  let mut suffix = 1;
  loop {
    match File::options().write(true).create_new(true).open(&path) {
      Ok(file) => return Ok((path, file)),
      Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
        path = dir.join(format!("{}-{}.{}", stem, suffix, ext));
        suffix += 1;
      }
      Err(err) => return Err(err),
    }
  }
}
