use crate::remover::detect::GENERATED_MARKER;
use crate::remover::{remove, FsRemover, Outcome, RemoveOptions};
use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn generated(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("{}\n\npackage mocks\n", GENERATED_MARKER)).unwrap();
}

fn plain(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "package foo\n").unwrap();
}

/// Runs `remove` against a recording remover that never touches the disk.
fn run(root: &Path, options: &RemoveOptions, input: &str) -> (Outcome, String, Vec<PathBuf>) {
    let mut out = Vec::new();
    let mut input = Cursor::new(input.as_bytes().to_vec());
    let mut calls = Vec::new();
    let mut remover = |p: &Path| -> io::Result<()> {
        calls.push(p.to_path_buf());
        Ok(())
    };
    let outcome = remove(root, options, &mut out, &mut input, &mut remover).unwrap();
    (outcome, String::from_utf8(out).unwrap(), calls)
}

fn sample_tree() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    generated(&dir.path().join("matchers/foo_matcher.go"));
    generated(&dir.path().join("mock_foo.go"));
    plain(&dir.path().join("real_foo.go"));
    dir
}

#[test]
fn test_dry_run_lists_sorted_plan() {
    let dir = sample_tree();
    let root = dir.path();
    let options = RemoveOptions {
        recursive: true,
        dry_run: true,
        ..Default::default()
    };

    let (outcome, out, calls) = run(root, &options, "");

    let expected = format!(
        "This is a dry-run. Would delete the following files:\n{}\n{}\n{}\n",
        root.join("matchers").display(),
        root.join("matchers/foo_matcher.go").display(),
        root.join("mock_foo.go").display(),
    );
    assert!(matches!(outcome, Outcome::DryRun));
    assert_eq!(out, expected);
    assert!(!out.contains("real_foo.go"));
    assert!(calls.is_empty());
}

#[test]
fn test_dry_run_never_removes_whatever_the_other_flags() {
    let dir = sample_tree();
    for (confirm, silent) in [(false, false), (false, true), (true, false), (true, true)] {
        let options = RemoveOptions {
            recursive: true,
            dry_run: true,
            confirm,
            silent,
            ..Default::default()
        };
        let (_, out, calls) = run(dir.path(), &options, "y\n");
        assert!(calls.is_empty());
        assert!(!out.contains("[y/n]"));
    }
}

#[test]
fn test_empty_root_has_nothing_to_remove() {
    let dir = tempdir().unwrap();
    let options = RemoveOptions {
        recursive: true,
        confirm: true,
        ..Default::default()
    };

    let (outcome, out, calls) = run(dir.path(), &options, "y\n");

    assert!(matches!(outcome, Outcome::NothingToRemove));
    assert_eq!(out, "No files to remove.\n");
    assert!(calls.is_empty());
}

#[test]
fn test_missing_root_reports_traversal_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent");

    let (outcome, out, calls) = run(&missing, &RemoveOptions::default(), "");

    assert!(matches!(outcome, Outcome::TraversalFailed));
    assert_eq!(out, format!("Could not get files in path {}\n", missing.display()));
    assert!(calls.is_empty());
}

#[test]
fn test_declined_confirmation_removes_nothing() {
    let dir = sample_tree();
    let options = RemoveOptions {
        recursive: true,
        confirm: true,
        ..Default::default()
    };

    let (outcome, out, calls) = run(dir.path(), &options, "n\n");

    assert!(matches!(outcome, Outcome::Declined));
    assert!(out.starts_with("Will delete the following files:\n"));
    assert!(out.ends_with("Continue? [y/n]: "));
    assert!(calls.is_empty());
}

#[test]
fn test_accepted_confirmation_removes_files_then_directory() {
    let dir = sample_tree();
    let root = dir.path();
    let options = RemoveOptions {
        recursive: true,
        confirm: true,
        ..Default::default()
    };

    let (outcome, _, calls) = run(root, &options, "y\n");

    assert!(matches!(outcome, Outcome::Completed(_)));
    let mut files: Vec<_> = calls[..2].to_vec();
    files.sort();
    assert_eq!(files, vec![root.join("matchers/foo_matcher.go"), root.join("mock_foo.go")]);
    // The recorder does not delete, so the directory is still populated and skipped.
    assert_eq!(calls.len(), 2);
}

#[test]
fn test_reprompt_then_accept() {
    let dir = sample_tree();
    let options = RemoveOptions {
        recursive: true,
        confirm: true,
        ..Default::default()
    };

    let (_, out, calls) = run(dir.path(), &options, "maybe\nyes\n");

    assert_eq!(out.matches("Continue? [y/n]: ").count(), 2);
    assert_eq!(calls.len(), 2);
}

#[test]
fn test_closed_input_aborts() {
    let dir = sample_tree();
    let options = RemoveOptions {
        recursive: true,
        confirm: true,
        ..Default::default()
    };

    let (outcome, out, calls) = run(dir.path(), &options, "");

    assert!(matches!(outcome, Outcome::Declined));
    assert!(out.contains("Could not get confirmation from StdIn EOF\n"));
    assert!(calls.is_empty());
}

#[test]
fn test_announce_and_silent_modes() {
    let dir = sample_tree();
    let announced = RemoveOptions {
        recursive: true,
        ..Default::default()
    };
    let (_, out, calls) = run(dir.path(), &announced, "");
    assert!(out.starts_with("Deleting the following files:\n"));
    assert_eq!(calls.len(), 2);

    let silent = RemoveOptions {
        recursive: true,
        silent: true,
        ..Default::default()
    };
    let (_, out, calls) = run(dir.path(), &silent, "");
    assert_eq!(out, "");
    assert_eq!(calls.len(), 2);
}

#[test]
fn test_non_recursive_ignores_subdirectories() {
    let dir = sample_tree();
    let root = dir.path();
    let options = RemoveOptions {
        dry_run: true,
        ..Default::default()
    };

    let (_, out, _) = run(root, &options, "");

    assert_eq!(
        out,
        format!(
            "This is a dry-run. Would delete the following files:\n{}\n",
            root.join("mock_foo.go").display()
        )
    );
}

#[test]
fn test_real_removal_deletes_matchers_directory() {
    let dir = sample_tree();
    let root = dir.path();
    let options = RemoveOptions {
        recursive: true,
        silent: true,
        ..Default::default()
    };
    let mut out = Vec::new();
    let mut input = Cursor::new(Vec::new());

    let outcome = remove(root, &options, &mut out, &mut input, &mut FsRemover).unwrap();

    match outcome {
        Outcome::Completed(report) => {
            assert!(report.is_clean());
            assert_eq!(report.removed, 3);
        }
        other => panic!("Expected Completed, got {:?}", other),
    }
    assert!(!root.join("matchers").exists());
    assert!(!root.join("mock_foo.go").exists());
    assert!(root.join("real_foo.go").exists());
    assert!(out.is_empty());
}

#[test]
fn test_matchers_with_handwritten_file_is_kept() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    generated(&root.join("matchers/foo_matcher.go"));
    plain(&root.join("matchers/custom_matcher.go"));
    let options = RemoveOptions {
        recursive: true,
        silent: true,
        ..Default::default()
    };
    let mut out = Vec::new();
    let mut input = Cursor::new(Vec::new());

    remove(root, &options, &mut out, &mut input, &mut FsRemover).unwrap();

    assert!(!root.join("matchers/foo_matcher.go").exists());
    assert!(root.join("matchers/custom_matcher.go").exists());
}

#[test]
fn test_removal_errors_are_reported_once() {
    let dir = sample_tree();
    let options = RemoveOptions {
        recursive: true,
        silent: true,
        ..Default::default()
    };
    let mut out = Vec::new();
    let mut input = Cursor::new(Vec::new());
    let mut failing = |_: &Path| -> io::Result<()> { Err(io::Error::other("read-only")) };

    remove(dir.path(), &options, &mut out, &mut input, &mut failing).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("There were some errors when trying to delete files: [remove "));
    assert_eq!(out.matches("read-only").count(), 2);
}

#[cfg(unix)]
#[test]
fn test_unopenable_file_is_reported_and_scan_continues() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    generated(&root.join("mock_foo.go"));
    let broken = root.join("broken.go");
    std::os::unix::fs::symlink(root.join("missing"), &broken).unwrap();
    let options = RemoveOptions {
        dry_run: true,
        ..Default::default()
    };

    let (outcome, out, calls) = run(root, &options, "");

    assert!(matches!(outcome, Outcome::DryRun));
    let mut lines = out.lines();
    let diagnostic = lines.next().unwrap();
    assert!(diagnostic.starts_with(&format!("Could not open file {}. Error: ", broken.display())));
    assert_eq!(lines.next(), Some("This is a dry-run. Would delete the following files:"));
    assert_eq!(lines.next(), Some(root.join("mock_foo.go").display().to_string().as_str()));
    assert_eq!(lines.next(), None);
    assert!(calls.is_empty());
}

#[test]
fn test_nested_matchers_directories_are_both_removed() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    generated(&root.join("matchers/a_matcher.go"));
    generated(&root.join("matchers/matchers/b_matcher.go"));
    let options = RemoveOptions {
        recursive: true,
        silent: true,
        ..Default::default()
    };
    let mut out = Vec::new();
    let mut input = Cursor::new(Vec::new());

    remove(root, &options, &mut out, &mut input, &mut FsRemover).unwrap();

    assert!(out.is_empty());
    assert!(!root.join("matchers/matchers").exists());
    assert!(!root.join("matchers").exists());
}
