use std::env;
use std::path::{Component, Path, PathBuf};

use dotenvy::dotenv;
use tracing::info;

use crate::args::Args;
use crate::error::{Result, ScaffoldError};

pub const BASE_DIR_VAR: &str = "SCSS_SCAFFOLD_BASE_DIR";

#[derive(Debug)]
pub struct Config {
    /// Directory a relative destination is resolved against.
    pub base_dir: PathBuf,
}

impl Config {
    pub fn load(args: &Args) -> Result<Config> {
        // load environment variables from .env file
        dotenv().ok();

        let base_dir = match (&args.base_dir, env::var(BASE_DIR_VAR).ok()) {
            (Some(dir), _) => dir.clone(),
            (None, Some(dir)) if !dir.is_empty() => PathBuf::from(dir),
            _ => install_dir()?,
        };

        info!(base_dir = %base_dir.display(), "configuration loaded");
        Ok(Config { base_dir })
    }

    pub fn resolve(&self, destination: &str) -> PathBuf {
        normalize(&self.base_dir.join(destination))
    }
}

fn install_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(ScaffoldError::BaseDir)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ScaffoldError::BaseDir(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "executable has no parent directory",
        ))
    })
}

/// Lexically drops `.` and folds `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
