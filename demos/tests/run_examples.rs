use assert_cmd::Command;
use predicates::prelude::*;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;

/// Every numbered demo, with fragments its output must contain.
const DEMOS: &[(&str, &[&str])] = &[
    ("00_tracing", &[]),
    ("01_point_lookup", &["INTL BUSINESS MACHINES CORP", "VODAFONE GROUP PLC"]),
    ("02_bulk_lookup", &["Dividend Amount", "Total dividend amount", "Empty table"]),
    ("03_historical", &["IBM US Equity.PX_LAST", "cells had no history"]),
    ("04_scoped_session", &["connected after with_session: false", "rejected:", "securityError"]),
];

fn numbered_demos_on_disk() -> BTreeSet<String> {
    fs::read_dir("examples")
        .expect("read examples dir")
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension() == Some(OsStr::new("rs")))
        .filter_map(|p| p.file_stem().and_then(OsStr::to_str).map(str::to_string))
        .filter(|n| n.starts_with(|c: char| c.is_ascii_digit()))
        .collect()
}

#[test]
fn every_demo_on_disk_has_expectations() {
    let listed: BTreeSet<String> = DEMOS.iter().map(|(n, _)| (*n).to_string()).collect();
    assert_eq!(numbered_demos_on_disk(), listed);
}

#[test]
fn demos_run_against_the_mock_transport() {
    for (name, fragments) in DEMOS {
        let output = Command::new("cargo")
            .args(["run", "--quiet", "--example", name])
            .assert()
            .success()
            .stdout(predicate::str::contains("Using Mock Transport"))
            .get_output()
            .stdout
            .clone();
        let stdout = String::from_utf8_lossy(&output);
        for fragment in *fragments {
            assert!(stdout.contains(fragment), "{name}: missing {fragment:?} in\n{stdout}");
        }
    }
}
