#![allow(dead_code)]

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use stencil::cli::{Args, RunReport, Runner};
use stencil::conflict::ScriptedDecider;
use walkdir::WalkDir;

pub const SCENARIO_SKELETON: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/scenario");
pub const SCENARIO_EXPECTED: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/expected/scenario");

/// Arguments generating `name` from `skeleton` under `path`.
pub fn args_for(name: &str, path: &Path, skeleton: Option<&str>) -> Args {
    Args {
        name: name.to_string(),
        path: path.to_path_buf(),
        directory: None,
        skel: skeleton.map(PathBuf::from),
        overwrite: false,
        git: false,
        remote: None,
        verbose: 2,
    }
}

/// Runs the generator answering prompts from `answers`, in order.
pub fn run_scripted(args: Args, answers: &[&str]) -> RunReport {
    Runner::new(args).run_with_decider(ScriptedDecider::new(answers.iter().copied())).unwrap()
}

fn relative_files(dir: &Path) -> HashSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1 = relative_files(dir1);
    let files2 = relative_files(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }

    for file in files1.intersection(&files2) {
        let content1 = fs::read(dir1.join(file)).unwrap();
        let content2 = fs::read(dir2.join(file)).unwrap();
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&content1));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&content2));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directory trees are identical, printing differences first.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    let different = dir_diff::is_different(actual, expected).unwrap();
    if different {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}
