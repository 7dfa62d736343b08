//! CLI argument parsing for fpreport.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The pipeline itself lives in the `commands` module.

use crate::template::TemplateVariant;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Build a LaTeX/PDF report of features, policies and user stories.
///
/// Reads an export of features, policies and user stories, fills them into
/// a report template, writes `<NAME>.tex` and runs the LaTeX compiler over
/// it twice so the table of contents and cross-references resolve.
#[derive(Parser, Debug)]
#[command(name = "fpreport")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Increase log output (-v for info, -vv for debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for building a report.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Output name; the report is written to `<NAME>.tex`.
    pub name: String,

    /// Export file with features, policies and user stories (YAML or JSON).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Config file (default: ./fpreport.yaml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Template variant, overriding the configured one.
    #[arg(long, value_enum)]
    pub variant: Option<TemplateVariant>,

    /// Report date as YYYY-MM-DD (default: today).
    #[arg(long)]
    pub date: Option<String>,

    /// Directory to write the report to, overriding the configured one.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Write the .tex file but do not run the compiler.
    #[arg(long)]
    pub no_compile: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_minimal() {
        let cli = Cli::try_parse_from(["fpreport", "irs_report", "--input", "export.yaml"]).unwrap();
        assert_eq!(cli.build.name, "irs_report");
        assert_eq!(cli.build.input, PathBuf::from("export.yaml"));
        assert!(cli.build.config.is_none());
        assert!(cli.build.variant.is_none());
        assert!(!cli.build.no_compile);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_full() {
        let cli = Cli::try_parse_from([
            "fpreport",
            "irs_report",
            "-i",
            "export.json",
            "--config",
            "custom.yaml",
            "--variant",
            "draft",
            "--date",
            "2015-09-30",
            "--output-dir",
            "build",
            "--no-compile",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.build.variant, Some(TemplateVariant::Draft));
        assert_eq!(cli.build.date.as_deref(), Some("2015-09-30"));
        assert_eq!(cli.build.output_dir, Some(PathBuf::from("build")));
        assert_eq!(cli.build.config, Some(PathBuf::from("custom.yaml")));
        assert!(cli.build.no_compile);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn name_and_input_are_required() {
        assert!(Cli::try_parse_from(["fpreport"]).is_err());
        assert!(Cli::try_parse_from(["fpreport", "irs_report"]).is_err());
    }

    #[test]
    fn unknown_variant_rejected() {
        assert!(
            Cli::try_parse_from(["fpreport", "r", "-i", "x.yaml", "--variant", "poster"]).is_err()
        );
    }
}
