//! `fpreport <NAME>`: build a report end to end.

use crate::cli::BuildArgs;
use crate::compile::{ExternalCompiler, artifact_stem, compile, write_report};
use crate::config::Config;
use crate::error::{ReportError, Result};
use crate::input::load_catalog;
use crate::pipeline::{ReportOptions, build_document};
use chrono::{Local, NaiveDate};
use std::path::Path;

/// Build the report described by `args`.
///
/// Load config and input, render the document, then write it and (unless
/// `--no-compile`) typeset it twice.
pub fn cmd_build(args: BuildArgs) -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| ReportError::Io(format!("failed to get current working directory: {}", e)))?;
    run(args, &cwd)
}

fn run(args: BuildArgs, cwd: &Path) -> Result<()> {
    let config = Config::resolve(args.config.as_deref(), cwd)?;
    let stem = artifact_stem(&args.name)?;
    let output_dir = cwd.join(args.output_dir.as_ref().unwrap_or(&config.output_dir));

    println!(
        "Building report '{}' from {} into {}",
        stem,
        args.input.display(),
        output_dir.display()
    );

    let date = match &args.date {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let mut catalog = load_catalog(cwd.join(&args.input))?;
    let options = ReportOptions {
        template: config.report_template(args.variant)?,
        date: config.format_date(date)?,
        rules: config.rules(),
        adjust_item_priorities: config.adjust_item_priorities,
    };
    let document = build_document(&mut catalog, &options)?;

    if args.no_compile {
        let tex_path = write_report(&document, stem, &output_dir)?;
        println!("Written {}, done.", tex_path.display());
        return Ok(());
    }

    let compiler = ExternalCompiler::new(config.compiler.as_str());
    let artifact = compile(&document, stem, &output_dir, &compiler)?;
    println!(
        "Written {} and compiled {} ({} passes), done.",
        artifact.tex_path.display(),
        artifact.pdf_path.display(),
        artifact.passes
    );
    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        ReportError::Input(format!(
            "invalid date '{}': {}\nFix: use the form YYYY-MM-DD.",
            s, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE_NAME;
    use crate::template::TemplateVariant;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const EXPORT: &str = r#"
features:
  - {key: IRS-1, name: Deposit API, priority: Critical}
policies:
  - {key: IRS-2, name: Embargo Policy, priority: Major}
user_stories:
  - {key: IRS-3, narrative: As a depositor I want embargoes, relies_on: [IRS-1, IRS-2]}
"#;

    fn args(name: &str) -> BuildArgs {
        BuildArgs {
            name: name.to_string(),
            input: PathBuf::from("export.yaml"),
            config: None,
            variant: None,
            date: Some("2015-09-30".to_string()),
            output_dir: None,
            no_compile: true,
        }
    }

    fn workspace() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("export.yaml"), EXPORT).unwrap();
        dir
    }

    #[test]
    fn test_no_compile_writes_tex() {
        let dir = workspace();
        run(args("irs_report"), dir.path()).unwrap();

        let tex = std::fs::read_to_string(dir.path().join("irs_report.tex")).unwrap();
        assert!(tex.contains("\\date{2015-09-30}"));
        assert!(tex.contains("(IRS-3, Major)"));
    }

    #[test]
    fn test_config_output_dir_and_variant() {
        let dir = workspace();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "variant: draft\noutput_dir: build\ndate_format: '%d %B %Y'\n",
        )
        .unwrap();

        run(args("irs_report"), dir.path()).unwrap();

        let tex =
            std::fs::read_to_string(dir.path().join("build").join("irs_report.tex")).unwrap();
        assert!(tex.contains("(Draft)"));
        assert!(tex.contains("\\date{30 September 2015}"));
    }

    #[test]
    fn test_cli_variant_overrides_config() {
        let dir = workspace();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "variant: draft\n").unwrap();

        let mut a = args("irs_report");
        a.variant = Some(TemplateVariant::Summary);
        run(a, dir.path()).unwrap();

        let tex = std::fs::read_to_string(dir.path().join("irs_report.tex")).unwrap();
        assert!(tex.contains("Features and Policies Summary"));
        assert!(!tex.contains("(Draft)"));
    }

    #[test]
    fn test_invalid_date_is_input_error() {
        let dir = workspace();
        let mut a = args("irs_report");
        a.date = Some("30/09/2015".to_string());
        assert!(matches!(run(a, dir.path()), Err(ReportError::Input(_))));
    }

    #[test]
    fn test_missing_input_is_input_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            run(args("irs_report"), dir.path()),
            Err(ReportError::Input(_))
        ));
        assert!(!dir.path().join("irs_report.tex").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_compile_failure_surfaces_compile_error() {
        let dir = workspace();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "compiler: \"sh -c 'exit 1' {file}\"\n",
        )
        .unwrap();

        let mut a = args("irs_report");
        a.no_compile = false;
        let err = run(a, dir.path()).unwrap_err();
        assert!(matches!(err, ReportError::Compile { pass: 1, .. }));
        assert_eq!(err.exit_code(), crate::exit_codes::COMPILE_FAILURE);
    }
}
