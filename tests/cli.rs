//! CLI smoke tests driven through assert_cmd

mod harness;

use assert_cmd::prelude::*;
use harness::TestTree;
use predicates::prelude::*;
use std::process::Command;

fn canopy() -> Command {
    let mut cmd = Command::cargo_bin("canopy").expect("canopy binary");
    cmd.env_remove("CANOPY_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    canopy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("policies"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("concat"));
}

#[test]
fn test_unknown_family_is_rejected() {
    let tree = TestTree::new();
    canopy()
        .current_dir(tree.path())
        .args(["render", "--family", "galaxy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("galaxy"));
}

#[test]
fn test_concat_writes_output_file() {
    let tree = TestTree::new();
    let a = tree.add_file("a.cs", "class A {}");
    let b = tree.add_file("nested/b.cs", "class B {}");
    let out = tree.path().join("bundle.txt");

    canopy()
        .current_dir(tree.path())
        .arg("concat")
        .arg(&b)
        .arg(&a)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = std::fs::read_to_string(&out).expect("bundle written");
    let first = text.find("==== a.cs ====").expect("a.cs section");
    let second = text.find("==== nested/b.cs ====").expect("b.cs section");
    assert!(first < second);
    assert!(text.contains("// Show file sizes: no\n"));
}

#[test]
fn test_verbose_logging_goes_to_stderr() {
    let tree = TestTree::new();
    tree.add_file("src/main.cs", "class Program {}");

    canopy()
        .current_dir(tree.path())
        .args(["-vv", "tree", "--files"])
        .assert()
        .success()
        .stdout(predicate::str::contains("main.cs"))
        .stdout(predicate::str::contains("built tree").not())
        .stderr(predicate::str::contains("built tree"));
}

#[test]
fn test_json_log_format() {
    let tree = TestTree::new();
    tree.add_file("main.cs", "class Program {}");

    canopy()
        .current_dir(tree.path())
        .args(["-vv", "--log-format", "json", "tree"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"built tree\""));
}
