//! Project language detection
//!
//! Resolution order:
//! 1. `language` field of `puck.json` (trusted as-is)
//! 2. `language` value salvaged from a malformed `puck.json` by pattern match
//! 3. Signature files, probed in a fixed priority order
//!
//! The priority order is the only tie-break between ambiguous layouts, e.g.
//! a project holding both `main.js` and `style.css` is JavaScript.

use std::sync::LazyLock;

use camino::Utf8Path;
use puck_core::METADATA_FILE;
use regex::Regex;
use tracing::debug;

use crate::languages::{lookup, Language};

/// Pre-compiled pattern for salvaging the language from broken JSON
static LANGUAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""language"\s*:\s*"([^"]*)""#).expect("language regex is valid")
});

/// Signature probing order
pub const DETECTION_ORDER: &[Language] = &[
    Language::Python,
    Language::Lua,
    Language::C,
    Language::Cpp,
    Language::Ts,
    Language::Js,
    Language::Css,
    Language::Html,
    Language::Go,
    Language::Java,
    Language::Assembly,
    Language::Rust,
];

/// Where a detected language came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSource {
    /// Parsed metadata
    Metadata,
    /// Pattern match over malformed metadata
    Salvaged,
    /// Signature file in the project tree
    Signature,
}

/// A detected language identifier
///
/// The identifier comes straight from metadata when present, so it may
/// name a language the registry does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub language: String,
    pub source: DetectionSource,
}

impl Detection {
    fn new(language: impl Into<String>, source: DetectionSource) -> Self {
        Self {
            language: language.into(),
            source,
        }
    }
}

/// Detect the language of the project rooted at `project`
///
/// Returns `None` when neither metadata nor any signature identifies it.
pub fn detect(project: &Utf8Path) -> Option<Detection> {
    if let Some(detection) = from_metadata(project) {
        debug!("{}: language '{}' from {:?}", project, detection.language, detection.source);
        return Some(detection);
    }

    let detection = from_signatures(project);
    match &detection {
        Some(d) => debug!("{}: language '{}' from signature files", project, d.language),
        None => debug!("{}: no language detected", project),
    }
    detection
}

fn from_metadata(project: &Utf8Path) -> Option<Detection> {
    let content = std::fs::read_to_string(project.join(METADATA_FILE)).ok()?;

    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(value) => {
            if let Some(language) = value.get("language").and_then(|l| l.as_str()) {
                return Some(Detection::new(language, DetectionSource::Metadata));
            }
            debug!("{} has no language field", METADATA_FILE);
            None
        }
        Err(e) => {
            debug!("{} is malformed ({}), salvaging language", METADATA_FILE, e);
            salvage_language(&content).map(|l| Detection::new(l, DetectionSource::Salvaged))
        }
    }
}

/// Pull the `language` value out of text that is not valid JSON
pub fn salvage_language(content: &str) -> Option<String> {
    LANGUAGE_RE
        .captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn from_signatures(project: &Utf8Path) -> Option<Detection> {
    DETECTION_ORDER
        .iter()
        .find(|language| lookup(**language).matches(project))
        .map(|language| Detection::new(language.as_str(), DetectionSource::Signature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn project() -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        (temp, path)
    }

    fn touch(root: &Utf8Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, "").unwrap();
    }

    fn detected(root: &Utf8Path) -> Option<String> {
        detect(root).map(|d| d.language)
    }

    #[test]
    fn test_metadata_wins_over_signatures() {
        let (_temp, root) = project();
        touch(&root, "main.py");
        std::fs::write(root.join(METADATA_FILE), r#"{"name":"x","language":"go"}"#).unwrap();

        let detection = detect(&root).unwrap();
        assert_eq!(detection.language, "go");
        assert_eq!(detection.source, DetectionSource::Metadata);
    }

    #[test]
    fn test_metadata_language_is_trusted_verbatim() {
        let (_temp, root) = project();
        std::fs::write(root.join(METADATA_FILE), r#"{"language":"cobol"}"#).unwrap();
        assert_eq!(detected(&root).as_deref(), Some("cobol"));
    }

    #[test]
    fn test_malformed_metadata_is_salvaged() {
        let (_temp, root) = project();
        std::fs::write(
            root.join(METADATA_FILE),
            "{\n  \"name\": \"demo\",\n  \"language\": \"lua\",\n  \"author\": ",
        )
        .unwrap();

        let detection = detect(&root).unwrap();
        assert_eq!(detection.language, "lua");
        assert_eq!(detection.source, DetectionSource::Salvaged);
    }

    #[test]
    fn test_unsalvageable_metadata_falls_back_to_signatures() {
        let (_temp, root) = project();
        std::fs::write(root.join(METADATA_FILE), "not json at all").unwrap();
        touch(&root, "main.go");

        let detection = detect(&root).unwrap();
        assert_eq!(detection.language, "go");
        assert_eq!(detection.source, DetectionSource::Signature);
    }

    #[test]
    fn test_signatures() {
        let cases = [
            ("main.py", "python"),
            ("main.lua", "lua"),
            ("src/main.c", "c"),
            ("src/main.cpp", "cpp"),
            ("main.ts", "ts"),
            ("src/main.ts", "ts"),
            ("main.js", "js"),
            ("style.css", "css"),
            ("main.css", "css"),
            ("index.html", "html"),
            ("main.go", "go"),
            ("src/main.go", "go"),
            ("src/Hello.java", "java"),
            ("src/main.asm", "assembly"),
            ("Cargo.toml", "rust"),
        ];

        for (file, expected) in cases {
            let (_temp, root) = project();
            touch(&root, file);
            assert_eq!(detected(&root).as_deref(), Some(expected), "for {}", file);
        }
    }

    #[test]
    fn test_priority_breaks_ties() {
        let (_temp, root) = project();
        touch(&root, "main.js");
        touch(&root, "style.css");
        touch(&root, "index.html");
        assert_eq!(detected(&root).as_deref(), Some("js"));

        touch(&root, "main.py");
        assert_eq!(detected(&root).as_deref(), Some("python"));
    }

    #[test]
    fn test_css_beats_html() {
        let (_temp, root) = project();
        touch(&root, "index.html");
        touch(&root, "style.css");
        assert_eq!(detected(&root).as_deref(), Some("css"));
    }

    #[test]
    fn test_rust_is_last_resort() {
        let (_temp, root) = project();
        touch(&root, "Cargo.toml");
        touch(&root, "src/main.asm");
        assert_eq!(detected(&root).as_deref(), Some("assembly"));
    }

    #[test]
    fn test_java_only_directly_under_src() {
        let (_temp, root) = project();
        touch(&root, "src/pkg/Deep.java");
        assert_eq!(detected(&root), None);
    }

    #[test]
    fn test_unknown_layout() {
        let (_temp, root) = project();
        touch(&root, "notes.txt");
        assert_eq!(detect(&root), None);
    }

    #[test]
    fn test_detection_is_repeatable() {
        let (_temp, root) = project();
        touch(&root, "main.lua");
        touch(&root, "index.html");
        let first = detect(&root);
        for _ in 0..3 {
            assert_eq!(detect(&root), first);
        }
    }

    #[test]
    fn test_salvage_language() {
        assert_eq!(
            salvage_language(r#"{ "language" : "rust", oops"#).as_deref(),
            Some("rust")
        );
        assert_eq!(salvage_language("{}"), None);
    }
}
