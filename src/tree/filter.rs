//! Name-based entry filtering

/// Excludes hidden entries and entries whose name contains an ignore pattern.
///
/// Patterns are plain substrings, not globs, and are not anchored.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    patterns: Vec<String>,
}

impl IgnoreFilter {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // An empty pattern is a substring of every name.
        let patterns = patterns
            .into_iter()
            .map(Into::into)
            .filter(|p: &String| !p.is_empty())
            .collect();
        Self { patterns }
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        name.starts_with('.') || self.patterns.iter().any(|p| name.contains(p.as_str()))
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}
