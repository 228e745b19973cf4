//! Icons for diagram lines

/// Project layout, which selects the icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    General,
    /// Unity-style project with `Assets`, `ProjectSettings` and friends.
    Structured,
}

pub const FOLDER: &str = "📁";
pub const FILE: &str = "📄";

impl Layout {
    pub fn label(self) -> &'static str {
        match self {
            Layout::General => "General project",
            Layout::Structured => "Structured (Unity) project",
        }
    }

    pub fn folder_icon(self, name: &str) -> &'static str {
        match self {
            Layout::General => FOLDER,
            Layout::Structured => structured_folder_icon(name),
        }
    }

    /// Icon for a file, given its lowercase extension with the leading dot.
    pub fn file_icon(self, extension: &str) -> &'static str {
        match self {
            Layout::General => FILE,
            Layout::Structured => structured_file_icon(extension),
        }
    }
}

fn structured_folder_icon(name: &str) -> &'static str {
    match name.to_lowercase().as_str() {
        "scripts" => "📝",
        "prefabs" => "🎭",
        "materials" => "🎨",
        "textures" | "sprites" => "🖼️",
        "editor" => "⚙️",
        "resources" => "📦",
        "plugins" => "🔌",
        "animations" => "🎬",
        "audio" => "🔊",
        "models" => "🎲",
        "shaders" => "✨",
        "ui" => "🖥️",
        "fonts" => "🔤",
        "scenes" => "🏞️",
        _ => FOLDER,
    }
}

fn structured_file_icon(extension: &str) -> &'static str {
    match extension {
        ".cs" => "📜",
        ".prefab" => "🎭",
        ".unity" => "🏞️",
        ".mat" => "🎨",
        ".shader" | ".cginc" | ".hlsl" | ".compute" => "✨",
        ".asmdef" | ".asmref" | ".xml" | ".yaml" => "📋",
        ".controller" => "🎮",
        ".asset" => "📦",
        ".png" | ".jpg" | ".jpeg" | ".tga" => "🖼️",
        ".fbx" | ".obj" | ".dae" => "🎲",
        ".anim" | ".animation" => "🎬",
        ".mp3" | ".wav" | ".ogg" => "🔊",
        ".ttf" | ".otf" => "🔤",
        ".md" | ".txt" => "📝",
        _ => FILE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_layout_uses_generic_icons() {
        assert_eq!(Layout::General.folder_icon("Scripts"), "📁");
        assert_eq!(Layout::General.file_icon(".cs"), "📄");
    }

    #[test]
    fn test_structured_layout_icons() {
        assert_eq!(Layout::Structured.folder_icon("Scripts"), "📝");
        assert_eq!(Layout::Structured.folder_icon("UI"), "🖥️");
        assert_eq!(Layout::Structured.folder_icon("Misc"), "📁");
        assert_eq!(Layout::Structured.file_icon(".cs"), "📜");
        assert_eq!(Layout::Structured.file_icon(".hlsl"), "✨");
        assert_eq!(Layout::Structured.file_icon(".json"), "📄");
        assert_eq!(Layout::Structured.file_icon(""), "📄");
    }
}
