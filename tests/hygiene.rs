//! Hygiene — enforces coding standards at test time
//!
//! Scans `src/` for antipatterns. Each pattern has a budget; if you must add
//! an occurrence, remove an existing one first — budgets never grow.
//!
//! Panic budgets are zero: the behavior layer must never take the page down
//! over a missing element or a storage failure. Discard budgets are nonzero
//! because guard-and-tolerate is this crate's documented error model, but
//! they are still ratcheted.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs` side files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Count lines containing `pattern` and fail once the budget is exceeded,
/// reporting per-file hits.
fn assert_budget(pattern: &str, budget: usize) {
    let mut hits = Vec::new();
    let mut total = 0;
    for file in source_files() {
        let count = file
            .content
            .lines()
            .filter(|line| line.contains(pattern))
            .count();
        if count > 0 {
            total += count;
            hits.push(format!("  {}: {count}", file.path));
        }
    }
    assert!(
        total <= budget,
        "`{pattern}` budget exceeded: found {total}, max {budget}.\n{}",
        hits.join("\n")
    );
}

#[test]
fn no_unwrap_in_production_code() {
    assert_budget(".unwrap()", 0);
}

#[test]
fn no_expect_in_production_code() {
    assert_budget(".expect(", 0);
}

#[test]
fn no_panicking_macros() {
    assert_budget("panic!(", 0);
    assert_budget("unreachable!(", 0);
    assert_budget("todo!(", 0);
    assert_budget("unimplemented!(", 0);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 16);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", 12);
}

#[test]
fn no_allow_dead_code() {
    assert_budget("#[allow(dead_code)]", 0);
}
