//! Output driver: mirrors the input tree and persists split scenarios
//!
//! Walks every feature file under the input root, runs the splitter on each,
//! and writes the results into the mirrored location under the output root.
//! Files without an Examples table are copied byte-for-byte. Processing is
//! best effort: a failed read skips that file, a failed write abandons that
//! single output, and the rest of the tree continues either way.

use crate::error::{Error, Result};
use crate::scanner::scan_directory;
use crate::splitter::{split_feature, SplitOutcome};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// What happened to a single source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileOutcome {
    /// No table found; the file was copied verbatim
    Copied,
    /// The file was split into this many scenario files
    Split { scenarios: usize },
}

/// Per-file processing report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Source file path
    pub source: PathBuf,
    /// Outcome for this file
    pub outcome: FileOutcome,
}

/// Accumulated result of processing a whole input tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Reports for every file that was processed
    pub files: Vec<FileReport>,
    /// Total scenario files written
    pub scenarios_written: usize,
    /// Total files copied verbatim
    pub files_copied: usize,
    /// Errors encountered (path, error message); none of these aborted the run
    pub errors: Vec<(PathBuf, String)>,
}

/// Name of the output file for row `number` of source file `name`.
///
/// "login.feature" with row 3 becomes "login_3.feature".
pub fn scenario_file_name(name: &str, number: usize) -> String {
    match name.strip_suffix(".feature") {
        Some(stem) => format!("{}_{}.feature", stem, number),
        None => format!("{}_{}", name, number),
    }
}

/// Process every feature file under `input_root`, writing results under
/// `output_root`.
///
/// The output directory and any missing ancestors are created up front.
/// Files are processed one at a time in path order; no state is shared
/// across files. Per-file and per-write failures are recorded in the
/// returned [`RunSummary`] instead of halting the traversal.
pub fn process_tree<P: AsRef<Path>, Q: AsRef<Path>>(
    input_root: P,
    output_root: Q,
) -> Result<RunSummary> {
    let input_root = input_root.as_ref();
    let output_root = output_root.as_ref();

    if !input_root.is_dir() {
        return Err(Error::NotADirectory(input_root.to_path_buf()));
    }

    fs::create_dir_all(output_root).map_err(|e| Error::CreateDir {
        path: output_root.to_path_buf(),
        source: e,
    })?;

    let scan = scan_directory(input_root)?;
    let mut summary = RunSummary::default();

    for source in &scan.files {
        match process_file(source, input_root, output_root, &mut summary) {
            Ok(outcome) => {
                match &outcome {
                    FileOutcome::Copied => summary.files_copied += 1,
                    FileOutcome::Split { scenarios } => summary.scenarios_written += scenarios,
                }
                summary.files.push(FileReport {
                    source: source.clone(),
                    outcome,
                });
            }
            Err(e) => {
                summary.errors.push((source.clone(), e.to_string()));
            }
        }
    }

    Ok(summary)
}

/// Process one feature file into the mirrored output directory.
///
/// Write failures for individual scenario files are pushed onto the summary
/// and do not stop the remaining rows; read failures propagate so the caller
/// can record them and skip the file.
fn process_file(
    source: &Path,
    input_root: &Path,
    output_root: &Path,
    summary: &mut RunSummary,
) -> Result<FileOutcome> {
    let content = fs::read_to_string(source).map_err(|e| Error::FileRead {
        path: source.to_path_buf(),
        source: e,
    })?;
    let lines: Vec<&str> = content.lines().collect();

    let name = source
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::FileRead {
            path: source.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "non-UTF-8 file name"),
        })?;

    let out_dir = mirrored_dir(source, input_root, output_root);

    match split_feature(&lines) {
        SplitOutcome::CopyVerbatim => {
            ensure_dir(&out_dir)?;
            let target = out_dir.join(name);
            fs::copy(source, &target).map_err(|e| Error::FileCopy {
                from: source.to_path_buf(),
                to: target,
                source: e,
            })?;
            Ok(FileOutcome::Copied)
        }
        SplitOutcome::Scenarios(scenarios) => {
            let mut written = 0;
            for scenario in &scenarios {
                let target = out_dir.join(scenario_file_name(name, scenario.number));
                match write_lines(&out_dir, &target, &scenario.lines) {
                    Ok(()) => written += 1,
                    Err(e) => summary.errors.push((target, e.to_string())),
                }
            }
            Ok(FileOutcome::Split { scenarios: written })
        }
    }
}

/// Output directory that mirrors `source`'s location relative to the input root
fn mirrored_dir(source: &Path, input_root: &Path, output_root: &Path) -> PathBuf {
    let relative = source.strip_prefix(input_root).unwrap_or(source);
    match relative.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => output_root.join(parent),
        _ => output_root.to_path_buf(),
    }
}

/// Write one scenario's lines, creating the directory first.
///
/// Directory creation is repeated per write; it is idempotent.
fn write_lines(out_dir: &Path, target: &Path, lines: &[String]) -> Result<()> {
    ensure_dir(out_dir)?;

    let file = File::create(target).map_err(|e| Error::FileWrite {
        path: target.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{}", line).map_err(|e| Error::FileWrite {
            path: target.to_path_buf(),
            source: e,
        })?;
    }

    writer.flush().map_err(|e| Error::FileWrite {
        path: target.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    const OUTLINE: &str = "\
Feature: math
  Scenario Outline: add <a> and <b>
    Given <a> and <b>
  Examples:
    | a | b |
    | 1 | 2 |
    | 3 | 4 |
";

    const PLAIN: &str = "\
Feature: plain
  Scenario: fixed
    Given nothing tabular
";

    fn read_tree(root: &Path) -> BTreeMap<PathBuf, String> {
        let mut map = BTreeMap::new();
        for entry in walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let relative = entry.path().strip_prefix(root).unwrap().to_path_buf();
            map.insert(relative, fs::read_to_string(entry.path()).unwrap());
        }
        map
    }

    #[test]
    fn test_scenario_file_name() {
        assert_eq!(scenario_file_name("login.feature", 1), "login_1.feature");
        assert_eq!(scenario_file_name("login.feature", 12), "login_12.feature");
    }

    #[test]
    fn test_table_free_file_is_copied_byte_identical() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("plain.feature"), PLAIN).unwrap();

        let summary = process_tree(input.path(), output.path()).unwrap();

        assert_eq!(summary.files_copied, 1);
        assert_eq!(summary.scenarios_written, 0);
        assert!(summary.errors.is_empty());

        let copied = fs::read(output.path().join("plain.feature")).unwrap();
        assert_eq!(copied, PLAIN.as_bytes());
    }

    #[test]
    fn test_one_output_file_per_row() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("math.feature"), OUTLINE).unwrap();

        let summary = process_tree(input.path(), output.path()).unwrap();

        assert_eq!(summary.scenarios_written, 2);
        assert!(summary.errors.is_empty());

        let first = fs::read_to_string(output.path().join("math_1.feature")).unwrap();
        let second = fs::read_to_string(output.path().join("math_2.feature")).unwrap();

        let preamble = "\
Feature: math
  Scenario Outline: add <a> and <b>
    Given <a> and <b>
  Examples:
    | a | b |
";
        assert_eq!(first, format!("{}    | 1 | 2 |\n", preamble));
        assert_eq!(second, format!("{}    | 3 | 4 |\n", preamble));
    }

    #[test]
    fn test_output_mirrors_input_subdirectories() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::create_dir_all(input.path().join("auth/session")).unwrap();
        fs::write(input.path().join("auth/session/login.feature"), OUTLINE).unwrap();

        let summary = process_tree(input.path(), output.path()).unwrap();
        assert_eq!(summary.scenarios_written, 2);

        assert!(output.path().join("auth/session/login_1.feature").is_file());
        assert!(output.path().join("auth/session/login_2.feature").is_file());
    }

    #[test]
    fn test_numbering_continues_across_blocks() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let two_blocks = "\
Feature: math
  Examples:
    | a |
    | 1 |
    | 2 |
  Examples:
    | b |
    | 3 |
    | 4 |
    | 5 |
";
        fs::write(input.path().join("math.feature"), two_blocks).unwrap();

        let summary = process_tree(input.path(), output.path()).unwrap();
        assert_eq!(summary.scenarios_written, 5);

        for n in 1..=5 {
            let name = format!("math_{}.feature", n);
            assert!(output.path().join(&name).is_file(), "missing {}", name);
        }
        assert!(!output.path().join("math_6.feature").exists());
    }

    #[test]
    fn test_unreadable_file_is_skipped_and_reported() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        // invalid UTF-8 makes read_to_string fail
        fs::write(input.path().join("bad.feature"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(input.path().join("good.feature"), PLAIN).unwrap();

        let summary = process_tree(input.path(), output.path()).unwrap();

        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].0.ends_with("bad.feature"));
        // the readable file was still processed
        assert_eq!(summary.files_copied, 1);
        assert!(output.path().join("good.feature").is_file());
        assert!(!output.path().join("bad.feature").exists());
    }

    #[test]
    fn test_missing_input_directory_is_an_argument_error() {
        let output = tempfile::tempdir().unwrap();
        let result = process_tree(Path::new("/no/such/dir"), output.path());
        assert!(matches!(result, Err(Error::NotADirectory(_))));
    }

    #[test]
    fn test_run_summary_serialization() {
        let summary = RunSummary {
            files: vec![FileReport {
                source: PathBuf::from("a.feature"),
                outcome: FileOutcome::Split { scenarios: 3 },
            }],
            scenarios_written: 3,
            files_copied: 0,
            errors: vec![(PathBuf::from("b.feature"), "boom".to_string())],
        };

        let json = serde_json::to_string_pretty(&summary).unwrap();
        let loaded: RunSummary = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.scenarios_written, 3);
        assert_eq!(loaded.files.len(), 1);
        assert_eq!(loaded.files[0].outcome, FileOutcome::Split { scenarios: 3 });
        assert_eq!(loaded.errors[0].1, "boom");
    }

    #[test]
    fn test_two_runs_are_idempotent() {
        let input = tempfile::tempdir().unwrap();
        fs::create_dir_all(input.path().join("sub")).unwrap();
        fs::write(input.path().join("math.feature"), OUTLINE).unwrap();
        fs::write(input.path().join("sub/plain.feature"), PLAIN).unwrap();

        let first_out = tempfile::tempdir().unwrap();
        process_tree(input.path(), first_out.path()).unwrap();

        let second_out = tempfile::tempdir().unwrap();
        process_tree(input.path(), second_out.path()).unwrap();

        assert_eq!(read_tree(first_out.path()), read_tree(second_out.path()));
    }
}
