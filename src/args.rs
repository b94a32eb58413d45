use clap::Parser;
use std::path::PathBuf;

/// Scaffold a 7/1 SCSS folder structure. Everything else is asked
/// interactively.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Resolve relative destinations against this directory instead of the install location
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation() {
        let args = Args::try_parse_from(["scss_scaffold"]).unwrap();
        assert!(args.base_dir.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from(["scss_scaffold", "--base-dir", "/work", "-v"]).unwrap();
        assert_eq!(args.base_dir, Some(PathBuf::from("/work")));
        assert!(args.verbose);
    }

    #[test]
    fn test_rejects_positionals() {
        assert!(Args::try_parse_from(["scss_scaffold", "extra"]).is_err());
    }
}
