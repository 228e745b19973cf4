//! Line layout shared by every diagram output

use crate::error::Error;
use crate::tree::format_size;

pub const BRANCH: &str = "├─ ";
pub const LAST_BRANCH: &str = "└─ ";
pub const CONTINUATION: &str = "│  ";
pub const LAST_CONTINUATION: &str = "   ";

/// Connector drawn before an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Prefix for the children of an entry drawn with `prefix`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    let continuation = if is_last {
        LAST_CONTINUATION
    } else {
        CONTINUATION
    };
    format!("{}{}", prefix, continuation)
}

/// Size annotation of a file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSize {
    Known(u64),
    /// The size was requested but the metadata read failed.
    Unknown,
}

impl FileSize {
    pub fn label(self) -> String {
        match self {
            FileSize::Known(bytes) => format!("[{}]", format_size(bytes)),
            FileSize::Unknown => "[?]".to_string(),
        }
    }
}

/// Inline markers emitted in place of directory contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NoMatches,
    AccessDenied,
    Error(String),
}

impl Notice {
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::AccessDenied(_) => Notice::AccessDenied,
            Error::Read { source, .. } => Notice::Error(source.to_string()),
            other => Notice::Error(other.to_string()),
        }
    }

    pub fn text(&self) -> String {
        match self {
            Notice::NoMatches => "📭 [no files match the selected policy]".to_string(),
            Notice::AccessDenied => "⚠️ [access denied]".to_string(),
            Notice::Error(message) => format!("❌ [error: {}]", message),
        }
    }
}

/// Marker appended to directories with nothing to show.
pub const EMPTY_MARKER: &str = " 📭";

/// `├─ 📁 name` style directory line, without a trailing newline.
pub fn directory_line(prefix: &str, is_last: bool, icon: &str, name: &str, empty: bool) -> String {
    format!(
        "{}{}{} {}{}",
        prefix,
        connector(is_last),
        icon,
        name,
        if empty { EMPTY_MARKER } else { "" }
    )
}

/// `└─ 📄 name [1.5 KB]` style file line, without a trailing newline.
pub fn file_line(
    prefix: &str,
    is_last: bool,
    icon: &str,
    name: &str,
    size: Option<FileSize>,
) -> String {
    let mut line = format!("{}{}{} {}", prefix, connector(is_last), icon, name);
    if let Some(size) = size {
        line.push(' ');
        line.push_str(&size.label());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_connectors_and_prefixes() {
        assert_eq!(connector(false), "├─ ");
        assert_eq!(connector(true), "└─ ");
        assert_eq!(child_prefix("", false), "│  ");
        assert_eq!(child_prefix("│  ", true), "│     ");
    }

    #[test]
    fn test_directory_line() {
        assert_eq!(directory_line("│  ", false, "📁", "src", false), "│  ├─ 📁 src");
        assert_eq!(directory_line("", true, "📁", "docs", true), "└─ 📁 docs 📭");
    }

    #[test]
    fn test_file_line_sizes() {
        assert_eq!(file_line("", true, "📄", "a.cs", None), "└─ 📄 a.cs");
        assert_eq!(
            file_line("   ", false, "📄", "a.cs", Some(FileSize::Known(1536))),
            "   ├─ 📄 a.cs [1.5 KB]"
        );
        assert_eq!(
            file_line("", true, "📄", "a.cs", Some(FileSize::Unknown)),
            "└─ 📄 a.cs [?]"
        );
    }

    #[test]
    fn test_notice_from_error() {
        let denied = Error::AccessDenied(PathBuf::from("/x"));
        assert_eq!(Notice::from_error(&denied), Notice::AccessDenied);

        let read = Error::Read {
            path: PathBuf::from("/x"),
            source: io::Error::other("disk on fire"),
        };
        assert_eq!(Notice::from_error(&read).text(), "❌ [error: disk on fire]");
    }
}
