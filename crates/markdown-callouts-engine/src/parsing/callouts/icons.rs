use std::collections::HashMap;

/// Glyph for any kind without an entry, including the empty kind.
pub const DEFAULT_ICON: &str = "📝";

/// The built-in glyph for a lowercase callout kind.
pub fn builtin_icon(kind: &str) -> Option<&'static str> {
    let icon = match kind {
        "note" => "📝",
        "abstract" | "document" => "📄",
        "info" => "ℹ️",
        "todo" | "success" => "✅",
        "tip" => "💡",
        "question" => "❓",
        "warning" => "⚠️",
        "failure" => "❌",
        "danger" => "⛔",
        "bug" => "🐛",
        "example" => "📋",
        "quote" => "💬",
        _ => return None,
    };
    Some(icon)
}

/// Kind to glyph lookup: configured overrides first, then the built-ins,
/// then the default glyph. Total; never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconTable {
    overrides: HashMap<String, String>,
    default_icon: Option<String>,
}

impl IconTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_icon(mut self, kind: &str, icon: impl Into<String>) -> Self {
        self.overrides.insert(kind.to_lowercase(), icon.into());
        self
    }

    #[must_use]
    pub fn with_default_icon(mut self, icon: impl Into<String>) -> Self {
        self.default_icon = Some(icon.into());
        self
    }

    /// Looks up `kind` case-insensitively.
    pub fn lookup(&self, kind: &str) -> &str {
        let key = kind.to_lowercase();
        self.overrides
            .get(&key)
            .map(String::as_str)
            .or_else(|| builtin_icon(&key))
            .unwrap_or_else(|| self.default_icon.as_deref().unwrap_or(DEFAULT_ICON))
    }
}

/// Title shown when a callout has none: the kind, title-cased per word.
///
/// A letter is upper-cased when it follows a non-letter (or starts the
/// string) and lower-cased otherwise: `note` → `Note`, `to-do` → `To-Do`.
pub fn default_title(kind: &str) -> String {
    let mut out = String::with_capacity(kind.len());
    let mut prev_is_letter = false;
    for c in kind.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
