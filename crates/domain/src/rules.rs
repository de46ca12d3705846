//! Serialization rule sets.
//!
//! A rule set is an explicit list of dotted field paths passed to every
//! render call. Relationship fields are only rendered when a path names
//! them, which is what bounds recursion through
//! restaurant → restaurant pizza → pizza → restaurant pizza → …
//!
//! - `"restaurant_pizzas"` includes a relationship.
//! - `"restaurant_pizzas.pizza"` includes `restaurant_pizzas`, and `pizza`
//!   inside each of them.
//! - `"-address"` or `"-restaurant_pizzas"` excludes a field at that depth.
//!   Exclusion wins over inclusion.

/// A per-call set of include/exclude paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl Rules {
    /// Parse a list of paths; a leading `-` marks an exclusion.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = Self::default();
        for path in paths {
            let path = path.as_ref().trim();
            if path.is_empty() {
                continue;
            }
            match path.strip_prefix('-') {
                Some(excluded) => rules.exclude.push(excluded.to_string()),
                None => rules.include.push(path.to_string()),
            }
        }
        rules
    }

    /// Scalars only, no relationships.
    #[must_use]
    pub fn flat() -> Self {
        Self::default()
    }

    /// Whether `field` is explicitly excluded at this depth.
    #[must_use]
    pub fn excludes(&self, field: &str) -> bool {
        self.exclude.iter().any(|path| path == field)
    }

    /// Whether the relationship `field` should be rendered at this depth.
    #[must_use]
    pub fn includes(&self, field: &str) -> bool {
        !self.excludes(field) && self.include.iter().any(|path| head(path) == field)
    }

    /// Rules that apply to the records nested under `field`.
    #[must_use]
    pub fn descend(&self, field: &str) -> Self {
        Self {
            include: nested(&self.include, field),
            exclude: nested(&self.exclude, field),
        }
    }
}

fn head(path: &str) -> &str {
    path.split_once('.').map_or(path, |(first, _)| first)
}

fn nested(paths: &[String], field: &str) -> Vec<String> {
    paths
        .iter()
        .filter_map(|path| path.strip_prefix(field)?.strip_prefix('.'))
        .map(str::to_string)
        .collect()
}
