use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CoreError;

/// Token in a URL template that is replaced by the encoded query.
pub const QUERY_PLACEHOLDER: &str = "{query}";

// ---------------------------------------------------------------------------
// Descriptor
// ---------------------------------------------------------------------------

/// Grouping used when listing engines in a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineCategory {
    Mainstream,
    Privacy,
    Regional,
    #[default]
    Specialized,
}

impl EngineCategory {
    pub const ALL: [EngineCategory; 4] = [
        Self::Mainstream,
        Self::Privacy,
        Self::Regional,
        Self::Specialized,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Mainstream => "Mainstream & Global",
            Self::Privacy => "Privacy Focused",
            Self::Regional => "Regional",
            Self::Specialized => "Specialized / Niche",
        }
    }
}

impl fmt::Display for EngineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display name and URL template of a single search engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineDescriptor {
    pub name: String,
    /// URL with exactly one [`QUERY_PLACEHOLDER`].
    pub url_template: String,
    #[serde(default)]
    pub category: EngineCategory,
}

impl EngineDescriptor {
    /// Resolve this engine's search URL for `query`. See [`resolve`].
    pub fn resolve(&self, query: &str) -> String {
        resolve(self, query)
    }

    /// Panel heading shown for this engine.
    pub fn results_title(&self) -> String {
        format!("{} Results", self.name)
    }
}

/// Percent-encode `query` as a URL component and substitute it for the
/// first placeholder in the descriptor's template.
///
/// Spaces become `%20`. Only the first placeholder is replaced; templates are
/// expected to carry exactly one.
pub fn resolve(descriptor: &EngineDescriptor, query: &str) -> String {
    let encoded = urlencoding::encode(query);
    descriptor
        .url_template
        .replacen(QUERY_PLACEHOLDER, &encoded, 1)
}

/// A user-configured engine, as stored in preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineEntry {
    pub code: String,
    pub name: String,
    pub url_template: String,
    #[serde(default)]
    pub category: EngineCategory,
}

// ---------------------------------------------------------------------------
// Built-in table
// ---------------------------------------------------------------------------

#[rustfmt::skip]
const BUILTIN_ENGINES: &[(&str, &str, &str, EngineCategory)] = &[
    ("google", "Google", "https://www.google.com/search?q={query}", EngineCategory::Mainstream),
    ("bing", "Bing", "https://www.bing.com/search?q={query}", EngineCategory::Mainstream),
    ("yahoo", "Yahoo", "https://search.yahoo.com/search?p={query}", EngineCategory::Mainstream),
    ("duckduckgo", "DuckDuckGo", "https://duckduckgo.com/?q={query}", EngineCategory::Mainstream),
    ("yandex", "Yandex", "https://yandex.com/search/?text={query}", EngineCategory::Mainstream),
    ("baidu", "Baidu", "https://www.baidu.com/s?wd={query}", EngineCategory::Mainstream),
    ("startpage", "Startpage", "https://www.startpage.com/sp/search?query={query}", EngineCategory::Privacy),
    ("brave", "Brave Search", "https://search.brave.com/search?q={query}", EngineCategory::Privacy),
    ("ecosia", "Ecosia", "https://www.ecosia.org/search?q={query}", EngineCategory::Privacy),
    ("qwant", "Qwant", "https://www.qwant.com/?q={query}", EngineCategory::Privacy),
    ("mojeek", "Mojeek", "https://www.mojeek.com/search?q={query}", EngineCategory::Privacy),
    ("naver", "Naver", "https://search.naver.com/search.naver?query={query}", EngineCategory::Regional),
    ("wolfram", "Wolfram Alpha", "https://www.wolframalpha.com/input/?i={query}", EngineCategory::Specialized),
    ("scholar", "Google Scholar", "https://scholar.google.com/scholar?q={query}", EngineCategory::Specialized),
    ("pubmed", "PubMed", "https://pubmed.ncbi.nlm.nih.gov/?term={query}", EngineCategory::Specialized),
    ("wayback", "Wayback Machine", "https://web.archive.org/web/*/{query}", EngineCategory::Specialized),
];

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Immutable mapping from engine code to [`EngineDescriptor`].
///
/// Iteration follows registration order: the built-in table first, then any
/// custom engines in the order they were configured.
#[derive(Debug, Clone)]
pub struct EngineRegistry {
    entries: Vec<(String, EngineDescriptor)>,
    index: HashMap<String, usize>,
}

impl EngineRegistry {
    /// Registry containing only the built-in engines.
    pub fn builtin() -> Self {
        let mut registry = Self {
            entries: Vec::with_capacity(BUILTIN_ENGINES.len()),
            index: HashMap::with_capacity(BUILTIN_ENGINES.len()),
        };
        // Built-in codes are unique by construction; no validation here.
        for &(code, name, template, category) in BUILTIN_ENGINES {
            registry.insert(
                code.to_string(),
                EngineDescriptor {
                    name: name.to_string(),
                    url_template: template.to_string(),
                    category,
                },
            );
        }
        registry
    }

    /// Built-in engines plus `custom`. Entries that fail validation are
    /// logged and skipped.
    pub fn with_custom(custom: impl IntoIterator<Item = EngineEntry>) -> Self {
        let mut registry = Self::builtin();
        for entry in custom {
            let code = entry.code.clone();
            match registry.register(entry) {
                Ok(()) => debug!(code = %code, "Registered custom engine"),
                Err(e) => warn!("Skipping custom engine: {e}"),
            }
        }
        registry
    }

    /// Add a validated engine. Fails if the code is taken or the template
    /// does not contain exactly one placeholder.
    pub fn register(&mut self, entry: EngineEntry) -> crate::Result<()> {
        if self.index.contains_key(&entry.code) {
            return Err(CoreError::DuplicateEngine(entry.code));
        }
        let placeholders = entry.url_template.matches(QUERY_PLACEHOLDER).count();
        if placeholders != 1 {
            return Err(CoreError::InvalidTemplate {
                code: entry.code,
                placeholders,
            });
        }
        self.insert(
            entry.code,
            EngineDescriptor {
                name: entry.name,
                url_template: entry.url_template,
                category: entry.category,
            },
        );
        Ok(())
    }

    fn insert(&mut self, code: String, descriptor: EngineDescriptor) {
        self.index.insert(code.clone(), self.entries.len());
        self.entries.push((code, descriptor));
    }

    pub fn lookup(&self, code: &str) -> Option<&EngineDescriptor> {
        self.index.get(code).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// `(code, descriptor)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EngineDescriptor)> {
        self.entries.iter().map(|(c, d)| (c.as_str(), d))
    }

    /// Engines of one category, in registration order.
    pub fn by_category(
        &self,
        category: EngineCategory,
    ) -> impl Iterator<Item = (&str, &EngineDescriptor)> {
        self.iter().filter(move |(_, d)| d.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
