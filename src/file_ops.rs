use std::fs::{create_dir_all, remove_file, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::data::{Structure, MAIN_FILE};
use crate::error::{Result, ScaffoldError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    PartialSkip,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl BuildReport {
    pub fn outcome(&self) -> Outcome {
        if self.skipped.is_empty() {
            Outcome::Created
        } else {
            Outcome::PartialSkip
        }
    }

    fn skip(&mut self, path: PathBuf) {
        warn!(path = %path.display(), "already exists, skipping");
        self.skipped.push(path);
    }
}

enum Written {
    Created,
    Exists,
}

/// Writes `contents` only if nothing is at `path` yet.
fn write_new(path: &Path, contents: &str) -> io::Result<Written> {
    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(Written::Exists),
        Err(e) => return Err(e),
    };
    fill(path, file, contents)?;
    Ok(Written::Created)
}

/// Writes into a file just created at `path`, removing it again if the
/// write fails so no truncated placeholder is left behind.
fn fill<W: Write>(path: &Path, mut out: W, contents: &str) -> io::Result<()> {
    let written = out.write_all(contents.as_bytes()).and_then(|()| out.flush());
    drop(out);
    if written.is_err() {
        let _ = remove_file(path);
    }
    written
}

fn ensure_dir(path: &Path) -> io::Result<Written> {
    match create_dir_all(path) {
        Ok(()) => Ok(Written::Created),
        // create_dir_all only fails with AlreadyExists when something other
        // than a directory sits at the path.
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(Written::Exists),
        Err(e) => Err(e),
    }
}

/// Materialises `structure` under `destination`.
///
/// Existing files are never overwritten: each one is recorded in the
/// report and the build carries on. A destination or folder path taken by
/// something other than a directory is skipped along with everything that
/// would have gone inside it. Any other I/O failure stops the build at that
/// step and is returned as [`ScaffoldError::Filesystem`]; whatever was
/// created before it stays on disk.
pub fn create_structure(destination: &Path, structure: &Structure) -> Result<BuildReport> {
    let mut report = BuildReport::default();

    match ensure_dir(destination).map_err(|e| ScaffoldError::filesystem(destination, e))? {
        Written::Created => debug!(path = %destination.display(), "destination ready"),
        Written::Exists => {
            report.skip(destination.to_path_buf());
            return Ok(report);
        }
    }

    for folder in &structure.folders {
        let folder_path = destination.join(&folder.name);

        match ensure_dir(&folder_path).map_err(|e| ScaffoldError::filesystem(&folder_path, e))? {
            Written::Created => debug!(path = %folder_path.display(), "folder ready"),
            Written::Exists => {
                for file in &folder.files {
                    report.skip(folder_path.join(file));
                }
                report.skip(folder_path);
                continue;
            }
        }

        for file in &folder.files {
            let file_path = folder_path.join(file);
            let contents = format!("// {}", file);

            match write_new(&file_path, &contents).map_err(|e| ScaffoldError::filesystem(&file_path, e))? {
                Written::Created => {
                    debug!(path = %file_path.display(), "created");
                    report.created.push(file_path);
                }
                Written::Exists => report.skip(file_path),
            }
        }
    }

    let main_path = destination.join(MAIN_FILE);
    match write_new(&main_path, &structure.imports()).map_err(|e| ScaffoldError::filesystem(&main_path, e))? {
        Written::Created => {
            debug!(path = %main_path.display(), "created");
            report.created.push(main_path);
        }
        Written::Exists => report.skip(main_path),
    }

    Ok(report)
}
