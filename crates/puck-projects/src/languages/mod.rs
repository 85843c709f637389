//! Supported languages and their capability descriptors
//!
//! Each language is described once by a [`LanguageDescriptor`] in the static
//! [`registry`]: how it is detected, scaffolded, built and run, and
//! syntax-checked. Operations look descriptors up instead of branching on
//! language names.

pub mod registry;

pub use registry::{lookup, lookup_id, LANGUAGES};

use crate::render::Quoting;

/// Language enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Lua,
    Python,
    C,
    Cpp,
    Rust,
    Js,
    Ts,
    Html,
    Css,
    Go,
    Java,
    Assembly,
}

impl Language {
    /// Get all supported languages
    pub fn all() -> &'static [Self] {
        &[
            Self::Lua,
            Self::Python,
            Self::C,
            Self::Cpp,
            Self::Rust,
            Self::Js,
            Self::Ts,
            Self::Html,
            Self::Css,
            Self::Go,
            Self::Java,
            Self::Assembly,
        ]
    }

    /// Get the identifier stored in metadata
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lua => "lua",
            Self::Python => "python",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Rust => "rust",
            Self::Js => "js",
            Self::Ts => "ts",
            Self::Html => "html",
            Self::Css => "css",
            Self::Go => "go",
            Self::Java => "java",
            Self::Assembly => "assembly",
        }
    }

    /// Get aliases accepted on the command line
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Lua => &[],
            Self::Python => &["py", "python3"],
            Self::C => &[],
            Self::Cpp => &["c++", "cxx"],
            Self::Rust => &["rs"],
            Self::Js => &["javascript", "node", "nodejs"],
            Self::Ts => &["typescript"],
            Self::Html => &["htm"],
            Self::Css => &[],
            Self::Go => &["golang"],
            Self::Java => &[],
            Self::Assembly => &["asm", "nasm"],
        }
    }

    /// Parse an identifier exactly as stored in metadata
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|l| l.as_str() == id)
    }

    /// Parse from string, checking aliases
    pub fn from_str_with_aliases(s: &str) -> Option<Self> {
        let s_lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|l| l.as_str() == s_lower || l.aliases().contains(&s_lower.as_str()))
    }

    /// Comma-separated list of identifiers, for diagnostics
    pub fn available() -> String {
        Self::all()
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_with_aliases(s).ok_or_else(|| {
            format!(
                "Unknown language: {}. Valid languages: {}",
                s,
                Self::available()
            )
        })
    }
}

/// Immutable record of how one language is detected, scaffolded, built, and checked
#[derive(Debug, Clone)]
pub struct LanguageDescriptor {
    pub language: Language,
    /// Human-readable name
    pub name: &'static str,
    /// Files whose presence identifies a project of this language
    pub signatures: &'static [Signature],
    /// Source paths relative to the project root; canonical first
    pub sources: &'static [&'static str],
    /// How the project directory comes into existence
    pub scaffold: Scaffold,
    /// Boilerplate files written at creation
    pub files: &'static [TemplateFile],
    /// Build/run recipe
    pub build: BuildRecipe,
    /// Syntax checker, if one exists for this language
    pub check: Option<CheckCommand>,
    /// `.gitignore` contents; the generic fallback applies when `None`
    pub gitignore: Option<&'static str>,
    /// Dockerfile template, if the language has one
    pub docker: Option<&'static str>,
    /// Reference files copied from the cheatsheet directory
    pub cheatsheet: Cheatsheet,
}

impl LanguageDescriptor {
    /// The canonical source path
    pub fn canonical_source(&self) -> &'static str {
        self.sources[0]
    }

    /// The first source path that exists under `root`, else the canonical one
    pub fn source_in(&self, root: &camino::Utf8Path) -> &'static str {
        self.sources
            .iter()
            .copied()
            .find(|s| root.join(s).is_file())
            .unwrap_or_else(|| self.canonical_source())
    }

    /// Whether any signature matches the project root
    pub fn matches(&self, root: &camino::Utf8Path) -> bool {
        self.signatures.iter().any(|s| s.matches(root))
    }
}

/// A filesystem probe identifying a language
#[derive(Debug, Clone, Copy)]
pub enum Signature {
    /// A file at this relative path
    File(&'static str),
    /// Any file with this extension directly inside a directory
    Extension {
        dir: &'static str,
        ext: &'static str,
    },
}

impl Signature {
    pub fn matches(&self, root: &camino::Utf8Path) -> bool {
        match self {
            Self::File(path) => root.join(path).is_file(),
            Self::Extension { dir, ext } => {
                let Ok(entries) = root.join(dir).read_dir_utf8() else {
                    return false;
                };
                entries.flatten().any(|entry| {
                    entry.path().extension() == Some(*ext)
                        && entry.file_type().map(|t| t.is_file()).unwrap_or(false)
                })
            }
        }
    }
}

/// How a new project directory is created
#[derive(Debug, Clone, Copy)]
pub enum Scaffold {
    /// Create the directory and write the boilerplate files directly
    Direct,
    /// Run the toolchain's project initializer, then overwrite its entry point
    Toolchain {
        /// Initializer argv; `{name}` is the project name
        init: &'static [&'static str],
        /// Entry point replaced with the boilerplate
        entry: &'static str,
    },
}

/// A boilerplate file
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    /// Path relative to the project root
    pub path: &'static str,
    /// Template text with `{author}` / `{name}` placeholders
    pub content: &'static str,
    /// How substituted values are escaped
    pub quoting: Quoting,
}

/// Ordered toolchain candidates plus an optional run step
#[derive(Debug, Clone, Copy)]
pub struct BuildRecipe {
    /// Tried in order; the first available one is used
    pub toolchains: &'static [Toolchain],
    /// Directory created before building, relative to the project root
    pub output_dir: Option<&'static str>,
    /// Executed after a successful build
    pub run: Option<&'static [&'static str]>,
    /// Tried once when no toolchain is available
    pub remedy: Option<&'static [&'static str]>,
    /// Shown when the toolchain is missing
    pub hint: &'static str,
}

/// One way of building/running a project
#[derive(Debug, Clone, Copy)]
pub struct Toolchain {
    /// Executable whose presence selects this toolchain; a path containing
    /// `/` is checked relative to the project instead of PATH
    pub tool: &'static str,
    /// Commands run in order inside the project directory
    pub steps: &'static [&'static [&'static str]],
}

/// Syntax-check command
#[derive(Debug, Clone, Copy)]
pub struct CheckCommand {
    pub tool: &'static str,
    /// Arguments; `{source}` is the source path
    pub args: &'static [&'static str],
    pub hint: &'static str,
}

/// Which cheatsheet files a language copies
#[derive(Debug, Clone, Copy)]
pub enum Cheatsheet {
    /// Exactly this file name
    Single(&'static str),
    /// Every file whose name starts with this prefix
    Prefixed(&'static str),
}
