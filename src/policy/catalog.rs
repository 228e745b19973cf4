//! Built-in policy catalog

use super::{Policy, PolicyFamily};

/// Directory names dropped by the tree builder under every policy except
/// the include-everything one.
pub const ALWAYS_EXCLUDE: &[&str] = &[
    ".git",
    "bin",
    "obj",
    ".vs",
    ".idea",
    ".vscode",
    "publish",
    ".github",
    "logs",
    "packages",
    "TestResults",
    "node_modules",
    "dist",
    "build",
    ".nuget",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn size_policy(
    id: u32,
    name: &str,
    description: &str,
    include_extensions: &[&str],
    exclude_patterns: &[&str],
) -> Policy {
    Policy {
        id,
        family: PolicyFamily::Size,
        name: name.to_string(),
        description: description.to_string(),
        exclude_folder_patterns: strings(ALWAYS_EXCLUDE),
        include_folder_prefixes: Vec::new(),
        include_extensions: strings(include_extensions),
        exclude_patterns: strings(exclude_patterns),
        include_all: false,
    }
}

/// Generic policies, ordered from most to least inclusive.
pub fn size_policies() -> Vec<Policy> {
    vec![
        Policy::include_everything(PolicyFamily::Size, "100% - every file"),
        size_policy(
            2,
            "Large",
            "~80% - code and configuration",
            &[
                ".cs", ".cshtml", ".razor", ".js", ".ts", ".jsx", ".tsx", ".html", ".css",
                ".scss", ".sass", ".csproj", ".sln", ".json", ".yml", ".yaml", ".xml",
                ".config", ".sql", ".md", ".txt", ".sh", ".cmd", ".bat", ".ps1", ".env",
                ".gitignore", ".dockerignore", ".editorconfig", "Dockerfile", "Makefile",
                "docker-compose",
            ],
            &["Test.cs", "Tests.cs", "Mock.cs", "_test.", ".test."],
        ),
        size_policy(
            3,
            "Medium",
            "~60% - backend and configuration",
            &[
                ".cs", ".cshtml", ".razor", ".csproj", ".sln", ".json", ".config", ".xml",
                "Dockerfile", "docker-compose",
            ],
            &[
                "Test.cs", "Tests.cs", "Mock.cs", "Migrations", "wwwroot", ".md", ".txt",
            ],
        ),
        size_policy(
            4,
            "Small",
            "~40% - core code",
            &[".cs", ".csproj", ".json"],
            &[
                "Test.cs", "Tests.cs", "Mock.cs", "Migrations", "wwwroot", "Properties",
                "Options",
            ],
        ),
        size_policy(
            5,
            "Tiny",
            "~20% - minimal code",
            &[".cs"],
            &[
                "Test.cs", "Tests.cs", "Migrations", "Properties", "wwwroot", "Services",
                "Options", "Helpers", "Hubs", ".csproj", ".sln", ".json",
            ],
        ),
        size_policy(
            6,
            "CodeOnly",
            "Code only - .cs, .html, .js, .csproj",
            &[".cs", ".csproj", ".html", ".js", ".jsx", ".ts", ".tsx", ".css"],
            &["Test.cs", "Tests.cs", "Mock.cs", ".sample"],
        ),
    ]
}

/// Policies for structured (Unity-style) projects.
pub fn project_policies() -> Vec<Policy> {
    vec![
        Policy::include_everything(PolicyFamily::Project, "Complete structure - every folder and file"),
        Policy {
            id: 2,
            family: PolicyFamily::Project,
            name: "Standard".to_string(),
            description: "Standard structure - the main project folders".to_string(),
            exclude_folder_patterns: strings(&[
                "Library",
                "Temp",
                "Logs",
                "MemoryCaptures",
                "Recordings",
                "obj",
                "Build",
                "Builds",
                ".vs",
                ".idea",
                "*.app",
                "*.exe",
                "*_Data",
                "*_BurstDebugInformation_DoNotShip",
            ]),
            include_folder_prefixes: strings(&[
                "Assets",
                "Packages",
                "ProjectSettings",
                "UserSettings",
            ]),
            include_extensions: strings(&[
                ".cs", ".shader", ".cginc", ".hlsl", ".compute", ".prefab", ".unity", ".mat",
                ".asset", ".controller", ".asmdef", ".asmref", ".json", ".xml", ".yaml", ".md",
                ".txt", ".pdf",
            ]),
            exclude_patterns: Vec::new(),
            include_all: false,
        },
        Policy {
            id: 3,
            family: PolicyFamily::Project,
            name: "Minimal".to_string(),
            description: "Minimal structure - scripts only".to_string(),
            exclude_folder_patterns: strings(&[
                "Library",
                "Temp",
                "Logs",
                "obj",
                "Build",
                "Builds",
                "UserSettings",
                "MemoryCaptures",
                "Recordings",
                ".vs",
                ".idea",
                "Packages",
                "ProjectSettings",
                "Assets/Textures",
                "Assets/Materials",
                "Assets/Models",
                "Assets/Animations",
                "Assets/Audio",
                "Assets/Fonts",
                "Assets/Sprites",
                "Assets/UI",
                "Assets/Prefabs",
            ]),
            include_folder_prefixes: strings(&[
                "Assets/Scripts",
                "Assets/Editor",
                "Assets/Plugins",
                "Assets/Resources",
                "Assets/StreamingAssets",
            ]),
            include_extensions: strings(&[".cs", ".asmdef", ".asmref"]),
            exclude_patterns: Vec::new(),
            include_all: false,
        },
        Policy {
            id: 4,
            family: PolicyFamily::Project,
            name: "CodeOnly".to_string(),
            description: "Code only - .cs, .csproj, .html, .js".to_string(),
            exclude_folder_patterns: strings(&[
                ".git",
                "Library",
                "Temp",
                "Logs",
                "obj",
                "Build",
                "Builds",
                "UserSettings",
                "MemoryCaptures",
                "Recordings",
                ".vs",
                ".idea",
                "node_modules",
                "packages",
            ]),
            include_folder_prefixes: Vec::new(),
            include_extensions: strings(&[
                ".cs", ".csproj", ".html", ".js", ".jsx", ".ts", ".tsx", ".css", ".scss",
            ]),
            exclude_patterns: Vec::new(),
            include_all: false,
        },
    ]
}
