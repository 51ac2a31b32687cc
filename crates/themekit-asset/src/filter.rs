//! Ignore filters applied to discovered keys

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use regex::Regex;
use std::fs;
use std::path::Path;
use themekit_core::{Result, ThemeError};

/// Patterns every project ignores
pub const DEFAULT_IGNORES: &[&str] = &[".DS_Store", ".git/", "*.swp", "*~", ".themekit/"];

/// Decides whether a root-relative key is left out of the asset set
pub trait IgnoreFilter: Send + Sync {
    fn is_ignored(&self, key: &str) -> bool;
}

impl<F> IgnoreFilter for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_ignored(&self, key: &str) -> bool {
        self(key)
    }
}

/// Ignores nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl IgnoreFilter for AcceptAll {
    fn is_ignored(&self, _key: &str) -> bool {
        false
    }
}

/// Glob and regex patterns.
///
/// A pattern wrapped in slashes (`/\.min\./`) is a regular expression
/// searched anywhere in the key. Everything else is a gitignore style glob.
#[derive(Debug, Clone)]
pub struct PatternFilter {
    globs: Gitignore,
    regexes: Vec<Regex>,
}

impl PatternFilter {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GitignoreBuilder::new("");
        let mut regexes = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() || pattern.starts_with('#') {
                continue;
            }
            if let Some(expr) = regex_body(pattern) {
                let re = Regex::new(expr)
                    .map_err(|e| ThemeError::Pattern(format!("{}: {}", pattern, e)))?;
                regexes.push(re);
            } else {
                builder
                    .add_line(None, pattern)
                    .map_err(|e| ThemeError::Pattern(format!("{}: {}", pattern, e)))?;
            }
        }

        let globs = builder
            .build()
            .map_err(|e| ThemeError::Pattern(e.to_string()))?;
        Ok(Self { globs, regexes })
    }

    /// Patterns every project ignores
    pub fn defaults() -> Self {
        Self::new(DEFAULT_IGNORES).expect("DEFAULT_IGNORES are valid gitignore globs")
    }

    /// Read one pattern per line, skipping blanks and `#` comments
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::new(content.lines())
    }

    /// Number of compiled patterns
    pub fn len(&self) -> usize {
        self.globs.num_ignores() as usize + self.regexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn regex_body(pattern: &str) -> Option<&str> {
    if pattern.len() > 2 && pattern.starts_with('/') && pattern.ends_with('/') {
        Some(&pattern[1..pattern.len() - 1])
    } else {
        None
    }
}

impl IgnoreFilter for PatternFilter {
    fn is_ignored(&self, key: &str) -> bool {
        if self.regexes.iter().any(|re| re.is_match(key)) {
            return true;
        }
        // The matcher rejects rooted paths
        let relative = key.trim_start_matches('/');
        !relative.is_empty()
            && self
                .globs
                .matched_path_or_any_parents(relative, false)
                .is_ignore()
    }
}

/// Ordered set of filters; a key is ignored if any member ignores it
#[derive(Default)]
pub struct FilterSet {
    filters: Vec<Box<dyn IgnoreFilter>>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter to the set
    pub fn push<F: IgnoreFilter + 'static>(&mut self, filter: F) {
        self.filters.push(Box::new(filter));
    }

    /// Builder form of `push`
    pub fn with<F: IgnoreFilter + 'static>(mut self, filter: F) -> Self {
        self.push(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl IgnoreFilter for FilterSet {
    fn is_ignored(&self, key: &str) -> bool {
        self.filters.iter().any(|f| f.is_ignored(key))
    }
}
