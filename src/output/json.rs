//! JSON output formatting

use std::io;

use serde::Serialize;

/// Print any serializable value as pretty-printed JSON to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let json = to_json(value)?;
    println!("{}", json);
    Ok(())
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyRegistry;
    use crate::tree::Node;
    use std::path::PathBuf;

    #[test]
    fn test_node_json_uses_camel_case() {
        let file = Node::file(
            "main.cs".to_string(),
            PathBuf::from("app/main.cs"),
            2048,
            ".cs".to_string(),
        );
        let root = Node::directory("app".to_string(), PathBuf::from("app"), vec![file]);

        let parsed: serde_json::Value = serde_json::from_str(&to_json(&root).unwrap()).unwrap();
        assert_eq!(parsed["name"], "app");
        assert_eq!(parsed["isDirectory"], true);
        assert_eq!(parsed["formattedSize"], "2 KB");
        assert_eq!(parsed["children"][0]["extension"], ".cs");
        assert_eq!(parsed["children"][0]["selected"], true);
    }

    #[test]
    fn test_policies_json_is_an_array() {
        let registry = PolicyRegistry::builtin();
        let all: Vec<_> = registry.list_all().collect();
        let parsed: serde_json::Value = serde_json::from_str(&to_json(&all).unwrap()).unwrap();
        let policies = parsed.as_array().unwrap();
        assert_eq!(policies.len(), all.len());
        assert_eq!(policies[0]["family"], "size");
        assert!(policies[0].get("includeExtensions").is_some());
    }
}
