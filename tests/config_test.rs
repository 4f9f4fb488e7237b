//! Integration tests for Settings config loading
//!
//! These tests only use temp directories for the local layer; they assume no
//! global config and no PATSYN_* variables are present.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use patsyn::config::{local_config_path, Settings};
use patsyn::domain::WildcardPolicy;

#[test]
fn given_no_local_config_when_load_then_returns_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load(Some(dir.path())).expect("load settings");
    assert_eq!(settings, Settings::default());
    assert!(settings.escape);
    assert_eq!(settings.wildcard, WildcardPolicy::Interior);
}

#[test]
fn given_local_config_when_load_then_overrides_specified_values() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "wildcard = \"reachable\"\nescape = false\n",
    )
    .unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");
    assert_eq!(settings.wildcard, WildcardPolicy::Reachable);
    assert!(!settings.escape);
    assert_eq!(settings.input, PathBuf::from("input.txt"));
    assert_eq!(settings.output, PathBuf::from("output.txt"));
}

#[test]
fn given_local_config_with_paths_when_load_then_paths_are_used() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "input = \"words.in\"\noutput = \"pattern.out\"\n",
    )
    .unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");
    assert_eq!(settings.input, PathBuf::from("words.in"));
    assert_eq!(settings.output, PathBuf::from("pattern.out"));
}

#[test]
fn given_invalid_policy_in_local_config_when_load_then_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "wildcard = \"always\"\n").unwrap();

    let err = Settings::load(Some(dir.path())).unwrap_err();
    assert!(err.to_string().contains("config error"));
}
