mod args;
mod config;
mod data;
mod error;
mod file_ops;
mod logging;
mod matcher;
mod prompt;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use args::Args;
use config::Config;
use data::Template;
use error::ScaffoldError;
use file_ops::{create_structure, Outcome};
use prompt::{collect, ConsolePrompt, Prompt};

/// How a run ended, and the one line the user sees about it.
#[derive(Debug, PartialEq, Eq)]
enum Status {
    Created(PathBuf),
    Skipped,
    Failed(String),
    Unexpected(String),
}

impl Status {
    fn line(&self) -> String {
        match self {
            Status::Created(destination) => format!("🎉 SCSS structure created at: {}", destination.display()),
            Status::Skipped => "⚠️ Some files or folders already exist and were skipped.".to_string(),
            Status::Failed(message) => format!("❌ Error creating structure: {}", message),
            Status::Unexpected(message) => format!("❌ Unexpected error: {}", message),
        }
    }

    fn is_error(&self) -> bool {
        matches!(self, Status::Failed(_) | Status::Unexpected(_))
    }

    fn exit_code(&self) -> u8 {
        if self.is_error() {
            1
        } else {
            0
        }
    }
}

impl From<ScaffoldError> for Status {
    fn from(e: ScaffoldError) -> Self {
        match e {
            ScaffoldError::Filesystem { .. } => Status::Failed(e.to_string()),
            e => Status::Unexpected(e.to_string()),
        }
    }
}

fn scaffold(prompt: &dyn Prompt, template: &Template, config: &Config) -> Status {
    let selection = match collect(prompt, template) {
        Ok(selection) => selection,
        Err(e) => return Status::Unexpected(e.to_string()),
    };

    let structure = match template.select(&selection.folders) {
        Ok(structure) => structure,
        Err(e) => return Status::Unexpected(e.to_string()),
    };
    let destination = config.resolve(&selection.destination);
    info!(destination = %destination.display(), folders = structure.folders.len(), "building");

    match create_structure(&destination, &structure) {
        Ok(report) => {
            info!(created = report.created.len(), skipped = report.skipped.len(), "build finished");
            match report.outcome() {
                Outcome::Created => Status::Created(destination),
                Outcome::PartialSkip => Status::Skipped,
            }
        }
        Err(e) => e.into(),
    }
}

fn run(args: &Args) -> Status {
    let config = match Config::load(args) {
        Ok(config) => config,
        Err(e) => return Status::Unexpected(e.to_string()),
    };
    let template = match Template::load() {
        Ok(template) => template,
        Err(e) => return Status::Unexpected(e.to_string()),
    };

    println!("🛠️ Setting up your 7/1 SCSS structure...");
    match ConsolePrompt::new() {
        Ok(prompt) => scaffold(&prompt, &template, &config),
        Err(e) => Status::Unexpected(e.to_string()),
    }
}

fn main() -> ExitCode {
    let args: Args = Args::parse();
    logging::init(args.verbose);

    let status = run(&args);
    if status.is_error() {
        eprintln!("{}", status.line());
    } else {
        println!("{}", status.line());
    }
    ExitCode::from(status.exit_code())
}
