// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for `.env` parsing and loading.

use super::{
    Assignment, LoadOutcome, absolutize, load_env_into, parse_line, parse_str, resolve_env_path,
    strip_quotes,
};
use crate::core::env::{EnvTable, MemoryEnv};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_env(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join(".env");
    std::fs::write(&path, contents).expect("failed to write .env");
    path
}

fn assignment(key: &str, value: &str) -> Assignment {
    Assignment {
        key: key.to_string(),
        value: value.to_string(),
    }
}

// =============================================================================
// parser
// =============================================================================

#[test]
fn test_parse_line_skips_blank_and_comments() {
    assert_eq!(parse_line(""), None);
    assert_eq!(parse_line("   \t "), None);
    assert_eq!(parse_line("# DATABASE_URL=postgres://"), None);
    assert_eq!(parse_line("   #indented comment"), None);
}

#[test]
fn test_parse_line_without_equals_is_ignored() {
    assert_eq!(parse_line("NOTANASSIGNMENT"), None);
}

#[test]
fn test_parse_line_trims_key_and_value() {
    assert_eq!(
        parse_line("  SERVER_PORT =  8080  "),
        Some(assignment("SERVER_PORT", "8080"))
    );
}

#[test]
fn test_parse_line_splits_on_first_equals() {
    assert_eq!(
        parse_line("URL=http://host/a=b"),
        Some(assignment("URL", "http://host/a=b"))
    );
}

#[test]
fn test_parse_line_empty_value_and_key() {
    assert_eq!(parse_line("EMPTY="), Some(assignment("EMPTY", "")));
    assert_eq!(parse_line("=orphan"), Some(assignment("", "orphan")));
}

#[test]
fn test_strip_quotes() {
    let cases = [
        ("\"hello world\"", "hello world"),
        ("'single'", "single"),
        ("\"\"", ""),
        ("\"", "\""),
        ("'", "'"),
        ("\"mismatched'", "\"mismatched'"),
        ("\"inner \"quotes\" kept\"", "inner \"quotes\" kept"),
        ("\"\"double\"\"", "\"double\""),
        ("plain", "plain"),
        ("trailing\"", "trailing\""),
    ];
    for (input, expected) in cases {
        assert_eq!(strip_quotes(input), expected, "input: {input}");
    }
}

#[test]
fn test_quotes_stripped_after_trim() {
    assert_eq!(
        parse_line("GREETING =  \"hello world\"  "),
        Some(assignment("GREETING", "hello world"))
    );
}

#[test]
fn test_parse_str_keeps_file_order_and_duplicates() {
    let parsed = parse_str("A=1\n# note\n\nB=2\r\nA=3\njunk\n");
    assert_eq!(
        parsed,
        vec![assignment("A", "1"), assignment("B", "2"), assignment("A", "3")]
    );
}

#[test]
fn test_parse_str_lone_carriage_return_ends_line() {
    let parsed = parse_str("A=1\rB=2\r\nC=3");
    assert_eq!(
        parsed,
        vec![assignment("A", "1"), assignment("B", "2"), assignment("C", "3")]
    );
}

// =============================================================================
// loader
// =============================================================================

#[test]
fn test_load_two_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_env(&dir, "A=1\nB=2\n");
    let mut env = MemoryEnv::new();

    let outcome = load_env_into(Some(&path), &mut env);

    assert_eq!(outcome.count(), 2);
    assert!(outcome.is_applied());
    assert_eq!(env.get("A").as_deref(), Some("1"));
    assert_eq!(env.get("B").as_deref(), Some("2"));
}

#[test]
fn test_load_classic_mac_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_env(&dir, "# header\rA=1\rB='two'\r");
    let mut env = MemoryEnv::new();

    let outcome = load_env_into(Some(&path), &mut env);

    assert_eq!(outcome.count(), 2);
    assert_eq!(env.get("A").as_deref(), Some("1"));
    assert_eq!(env.get("B").as_deref(), Some("two"));
}

#[test]
fn test_load_comments_only_applies_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_env(&dir, "# header\n\n   \n# FOO=bar\n");
    let mut env = MemoryEnv::new();
    env.set("EXISTING", "kept");

    let outcome = load_env_into(Some(&path), &mut env);

    assert_eq!(outcome.count(), 0);
    assert!(outcome.is_applied());
    assert_eq!(env.len(), 1);
    assert_eq!(env.get("EXISTING").as_deref(), Some("kept"));
}

#[test]
fn test_load_quoted_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_env(&dir, "A=\"hello world\"\n");
    let mut env = MemoryEnv::new();

    load_env_into(Some(&path), &mut env);

    assert_eq!(env.get("A").as_deref(), Some("hello world"));
}

#[test]
fn test_load_last_assignment_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_env(&dir, "A=1\nA=2\n");
    let mut env = MemoryEnv::new();

    let outcome = load_env_into(Some(&path), &mut env);

    // Both lines are applied, the later one overwrites.
    assert_eq!(outcome.count(), 2);
    assert_eq!(env.get("A").as_deref(), Some("2"));
}

#[test]
fn test_load_overwrites_existing_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_env(&dir, "BASE_URL=http://api.local\n");
    let mut env = MemoryEnv::new();
    env.set("BASE_URL", "http://localhost:8080");

    load_env_into(Some(&path), &mut env);

    assert_eq!(env.get("BASE_URL").as_deref(), Some("http://api.local"));
}

#[test]
fn test_load_line_without_equals() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_env(&dir, "NOTANASSIGNMENT\n");
    let mut env = MemoryEnv::new();

    let outcome = load_env_into(Some(&path), &mut env);

    assert_eq!(outcome.count(), 0);
    assert!(env.is_empty());
}

#[test]
fn test_load_value_with_equals() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_env(&dir, "URL=http://host/a=b\n");
    let mut env = MemoryEnv::new();

    load_env_into(Some(&path), &mut env);

    assert_eq!(env.get("URL").as_deref(), Some("http://host/a=b"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.env");
    let mut env = MemoryEnv::new();
    env.set("UNCHANGED", "yes");

    let outcome = load_env_into(Some(&path), &mut env);

    assert_eq!(outcome, LoadOutcome::NotFound { path: path.clone() });
    assert_eq!(outcome.count(), 0);
    assert_eq!(env.len(), 1);
}

#[test]
fn test_load_invalid_utf8_is_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, b"A=1\nB=\xff\xfe\n").unwrap();
    let mut env = MemoryEnv::new();

    let outcome = load_env_into(Some(&path), &mut env);

    assert!(matches!(outcome, LoadOutcome::ReadFailed { .. }));
    assert_eq!(outcome.count(), 0);
    assert!(env.is_empty(), "no key is applied when the read fails");
}

#[test]
fn test_load_directory_is_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut env = MemoryEnv::new();

    let outcome = load_env_into(Some(dir.path()), &mut env);

    assert!(matches!(outcome, LoadOutcome::ReadFailed { .. }));
    assert!(env.is_empty());
}

// =============================================================================
// path resolution
// =============================================================================

#[test]
fn test_resolve_relative_path_is_absolute() {
    let resolved = resolve_env_path(Some(Path::new("config/../.env")));
    let expected = std::env::current_dir().unwrap().join(".env");
    assert!(resolved.is_absolute());
    assert_eq!(resolved, expected);
}

#[test]
fn test_default_path_is_parent_of_exe_dir() {
    let resolved = resolve_env_path(None);
    let exe_dir = std::env::current_exe().unwrap();
    let exe_dir = exe_dir.parent().unwrap();

    assert!(resolved.is_absolute());
    assert_eq!(resolved.file_name().unwrap(), ".env");
    assert_eq!(Some(resolved.parent().unwrap()), absolutize(exe_dir).parent());
}

#[cfg(unix)]
#[test]
fn test_absolutize_normalizes_components() {
    assert_eq!(
        absolutize(Path::new("/srv/app/./scripts/../.env")),
        PathBuf::from("/srv/app/.env")
    );
    assert_eq!(absolutize(Path::new("/../.env")), PathBuf::from("/.env"));
}
