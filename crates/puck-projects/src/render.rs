//! Placeholder substitution for boilerplate and command templates
//!
//! Uses plain `{var}` replacement rather than a template engine: boilerplate
//! is source code full of braces that must pass through untouched.

use camino::Utf8Path;

/// How a substituted value is escaped for the file it lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    /// Inside a double-quoted string literal
    Literal,
    /// Inside HTML/CSS text
    Markup,
    /// Inside a string that supports no escapes; quotes and backslashes dropped
    Plain,
}

/// Values available to templates
#[derive(Debug, Clone)]
pub struct TemplateVars<'a> {
    pub name: &'a str,
    pub author: &'a str,
    pub source: &'a str,
    pub dir: &'a Utf8Path,
}

impl<'a> TemplateVars<'a> {
    pub fn new(name: &'a str, author: &'a str, source: &'a str, dir: &'a Utf8Path) -> Self {
        Self {
            name,
            author,
            source,
            dir,
        }
    }

    /// Render file content, escaping `{author}` and `{name}` for the target
    ///
    /// Substitution is a single left-to-right pass, so placeholders inside
    /// substituted values are left as they are.
    pub fn render(&self, template: &str, quoting: Quoting) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix("{author}") {
                out.push_str(&escape(self.author, quoting));
                rest = after;
            } else if let Some(after) = tail.strip_prefix("{name}") {
                out.push_str(&escape(self.name, quoting));
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }
        out.push_str(rest);
        out
    }

    /// Expand one command-template argument
    pub fn expand(&self, arg: &str) -> String {
        arg.replace("{source}", self.source)
            .replace("{dir}", self.dir.as_str())
            .replace("{name}", self.name)
    }

    /// Expand a whole command template
    pub fn expand_all(&self, args: &[&str]) -> Vec<String> {
        args.iter().map(|a| self.expand(a)).collect()
    }
}

/// Escape a value for the given context
pub fn escape(value: &str, quoting: Quoting) -> String {
    match quoting {
        Quoting::Literal => value.replace('\\', "\\\\").replace('"', "\\\""),
        Quoting::Markup => value
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
        Quoting::Plain => value.chars().filter(|c| !matches!(c, '"' | '\\')).collect(),
    }
}
