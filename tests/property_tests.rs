use canopy::tree::format_size;
use canopy::{Policy, PolicyFamily, PolicyFilter, PolicyRegistry};
use proptest::prelude::*;

fn cs_policy(exclude: &str) -> Policy {
    Policy {
        id: 40,
        family: PolicyFamily::Size,
        name: "Prop".to_string(),
        description: String::new(),
        exclude_folder_patterns: Vec::new(),
        include_folder_prefixes: Vec::new(),
        include_extensions: vec![".cs".to_string()],
        exclude_patterns: vec![exclude.to_string()],
        include_all: false,
    }
}

proptest! {
    #[test]
    fn test_directory_exclusion_is_deterministic(
        segments in prop::collection::vec("[A-Za-z_.*]{1,12}", 1..5)
    ) {
        let registry = PolicyRegistry::builtin();
        let relative = segments.join("/");
        let name = segments.last().cloned().unwrap_or_default();
        let full = format!("/work/{}", relative);
        for policy in registry.list_all() {
            let filter = PolicyFilter::new(policy);
            let first = filter.excludes_directory(&name, &full, &relative);
            let second = filter.excludes_directory(&name, &full, &relative);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn test_exclusion_pattern_beats_extension_match(
        stem in "[A-Za-z]{0,8}",
        pattern in "[A-Za-z]{1,6}",
        tail in "[A-Za-z]{0,8}",
    ) {
        let policy = cs_policy(&pattern);
        let filter = PolicyFilter::new(&policy);
        let name = format!("{}{}{}.cs", stem, pattern, tail);
        prop_assert!(!filter.includes_file_name(&name));
    }

    #[test]
    fn test_include_all_keeps_every_file(name in "[^/\\\\]{1,24}") {
        let registry = PolicyRegistry::builtin();
        for family in [PolicyFamily::Size, PolicyFamily::Project] {
            let filter = PolicyFilter::new(registry.default_for(family));
            prop_assert!(filter.includes_file_name(&name));
        }
    }

    #[test]
    fn test_formatted_size_has_trimmed_decimals(bytes in 0u64..(64 * 1024 * 1024 * 1024)) {
        let formatted = format_size(bytes);
        let (number, unit) = formatted.split_once(' ').unwrap();
        prop_assert!(["B", "KB", "MB", "GB"].contains(&unit));
        if let Some((_, decimals)) = number.split_once('.') {
            prop_assert!(!decimals.is_empty() && decimals.len() <= 2);
            prop_assert!(!decimals.ends_with('0'));
        }
        if bytes < 1024 {
            prop_assert_eq!(formatted, format!("{} B", bytes));
        }
    }
}
