//! Test harness for canopy integration tests

use std::path::Path;
use std::process::Command;

use chrono::{NaiveDate, NaiveDateTime};

pub use canopy::test_utils::TestTree;

/// A fixed header timestamp so rendered output is reproducible.
pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(10, 30, 0))
        .expect("valid timestamp")
}

/// Diagram lines of a rendered export, header and root line stripped.
pub fn diagram_lines(text: &str) -> Vec<String> {
    text.lines()
        .skip_while(|line| !line.is_empty())
        .skip(2)
        .map(str::to_string)
        .collect()
}

pub fn run_canopy(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_canopy");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("CANOPY_LOG")
        .output()
        .expect("Failed to run canopy");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("src/main.cs", "class Program {}");
        assert!(file_path.exists());
    }

    #[test]
    fn test_diagram_lines_strip_header() {
        let text = "=== PROJECT ARCHITECTURE ===\nRoot: x\n\n📁 x\n└─ 📄 a.cs\n";
        assert_eq!(diagram_lines(text), vec!["└─ 📄 a.cs"]);
    }
}
