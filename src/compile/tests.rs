//! Tests for report writing and two-pass compilation.

use super::*;
use std::cell::RefCell;
use tempfile::TempDir;

/// Typesetter double that records passes and can fail on a chosen one.
///
/// Pass 1 writes an `.aux` file; pass 2 records whether it saw it.
struct RecordingTypesetter {
    fail_on: Option<u8>,
    passes: RefCell<Vec<u8>>,
    saw_aux_on_second_pass: RefCell<bool>,
}

impl RecordingTypesetter {
    fn new(fail_on: Option<u8>) -> Self {
        Self {
            fail_on,
            passes: RefCell::new(Vec::new()),
            saw_aux_on_second_pass: RefCell::new(false),
        }
    }
}

impl Typesetter for RecordingTypesetter {
    fn run_pass(&self, tex_path: &Path, pass: u8) -> Result<PassResult> {
        assert!(tex_path.exists(), "report must be written before typesetting");
        self.passes.borrow_mut().push(pass);

        let aux = tex_path.with_extension("aux");
        if pass == 1 {
            std::fs::write(&aux, "\\relax").unwrap();
        } else {
            *self.saw_aux_on_second_pass.borrow_mut() = aux.exists();
        }

        let exit_code = if self.fail_on == Some(pass) { 1 } else { 0 };
        Ok(PassResult {
            exit_code: Some(exit_code),
            command: "fake-latex".to_string(),
            log_path: None,
        })
    }
}

fn report() -> RenderedReport {
    RenderedReport::new("\\documentclass{article}\\begin{document}x\\end{document}\n")
}

#[test]
fn test_compile_runs_two_passes_in_order() {
    let dir = TempDir::new().unwrap();
    let typesetter = RecordingTypesetter::new(None);

    let artifact = compile(&report(), "irs_report", dir.path(), &typesetter).unwrap();

    assert_eq!(*typesetter.passes.borrow(), vec![1, 2]);
    assert!(*typesetter.saw_aux_on_second_pass.borrow());
    assert_eq!(artifact.passes, 2);
    assert_eq!(artifact.tex_path, dir.path().join("irs_report.tex"));
    assert_eq!(artifact.pdf_path, dir.path().join("irs_report.pdf"));
    assert_eq!(
        std::fs::read_to_string(&artifact.tex_path).unwrap(),
        report().as_str()
    );
}

#[test]
fn test_first_pass_failure_skips_second_pass() {
    let dir = TempDir::new().unwrap();
    let typesetter = RecordingTypesetter::new(Some(1));

    let err = compile(&report(), "irs_report", dir.path(), &typesetter).unwrap_err();

    assert!(matches!(err, ReportError::Compile { pass: 1, .. }));
    assert_eq!(*typesetter.passes.borrow(), vec![1]);
}

#[test]
fn test_second_pass_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let typesetter = RecordingTypesetter::new(Some(2));

    let err = compile(&report(), "irs_report", dir.path(), &typesetter).unwrap_err();

    match err {
        ReportError::Compile { pass, message } => {
            assert_eq!(pass, 2);
            assert!(message.contains("'fake-latex' exited with status 1"));
        }
        other => panic!("expected compile error, got {:?}", other),
    }
}

#[test]
fn test_artifact_stem() {
    assert_eq!(artifact_stem("irs_report").unwrap(), "irs_report");
    assert_eq!(artifact_stem(" irs_report.tex ").unwrap(), "irs_report");
    assert!(matches!(artifact_stem(""), Err(ReportError::Input(_))));
    assert!(matches!(artifact_stem(".tex"), Err(ReportError::Input(_))));
    assert!(matches!(artifact_stem("out/report"), Err(ReportError::Input(_))));
}

#[test]
fn test_write_report_without_compiling() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&report(), "draft.tex", dir.path()).unwrap();
    assert_eq!(path, dir.path().join("draft.tex"));
    assert!(path.exists());
}

#[cfg(unix)]
mod external {
    use super::*;

    #[test]
    fn test_external_compiler_runs_twice_in_output_dir() {
        let dir = TempDir::new().unwrap();
        let compiler = ExternalCompiler::new("sh -c 'echo \"$0\" >> calls.txt' {file}");

        let artifact = compile(&report(), "irs_report", dir.path(), &compiler).unwrap();

        let calls = std::fs::read_to_string(dir.path().join("calls.txt")).unwrap();
        assert_eq!(calls, "irs_report.tex\nirs_report.tex\n");
        assert!(dir.path().join("irs_report.pass1.log").exists());
        assert!(dir.path().join("irs_report.pass2.log").exists());
        assert_eq!(artifact.passes, 2);
    }

    #[test]
    fn test_file_name_with_spaces_is_one_argument() {
        let dir = TempDir::new().unwrap();
        let compiler = ExternalCompiler::new("sh -c 'printf \"%s|\" \"$@\" > args.txt' sh {file}");

        let artifact = compile(&report(), "irs report", dir.path(), &compiler).unwrap();

        let args = std::fs::read_to_string(dir.path().join("args.txt")).unwrap();
        assert_eq!(args, "irs report.tex|");
        assert!(dir.path().join("irs report.pass2.log").exists());
        assert_eq!(artifact.tex_path, dir.path().join("irs report.tex"));
    }

    #[test]
    fn test_recorded_command_quotes_substituted_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("irs report.tex"), "x").unwrap();
        let compiler = ExternalCompiler::new("true {file}");

        let result = compiler
            .run_pass(&dir.path().join("irs report.tex"), 1)
            .unwrap();
        assert_eq!(result.command, "true 'irs report.tex'");
        assert_eq!(result.exit_code, Some(0));
    }

    #[test]
    fn test_external_failure_on_first_pass_stops() {
        let dir = TempDir::new().unwrap();
        let compiler =
            ExternalCompiler::new("sh -c 'echo run >> calls.txt; echo boom; exit 3' {file}");

        let err = compile(&report(), "irs_report", dir.path(), &compiler).unwrap_err();

        match err {
            ReportError::Compile { pass, message } => {
                assert_eq!(pass, 1);
                assert!(message.contains("exited with status 3"));
                assert!(message.contains("boom"));
            }
            other => panic!("expected compile error, got {:?}", other),
        }
        let calls = std::fs::read_to_string(dir.path().join("calls.txt")).unwrap();
        assert_eq!(calls, "run\n");
        assert!(!dir.path().join("irs_report.pass2.log").exists());
    }

    #[test]
    fn test_missing_program_is_compile_error() {
        let dir = TempDir::new().unwrap();
        let compiler = ExternalCompiler::new("definitely-not-a-latex-binary-xyz {file}");

        let err = compile(&report(), "irs_report", dir.path(), &compiler).unwrap_err();
        match err {
            ReportError::Compile { pass, message } => {
                assert_eq!(pass, 1);
                assert!(message.contains("ensure the compiler is installed"));
            }
            other => panic!("expected compile error, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_command_is_compile_error() {
        let dir = TempDir::new().unwrap();
        let compiler = ExternalCompiler::new("pdflatex 'unterminated {file}");

        let err = compile(&report(), "irs_report", dir.path(), &compiler).unwrap_err();
        assert!(matches!(err, ReportError::Compile { pass: 1, .. }));
    }
}
