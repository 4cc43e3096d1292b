use crate::affix::sort_affixes;
use crate::constants::SORTED_PREFIX_LIBRARY;
use crate::error::Error;

/// `mem` -> `[PREFIX=mem]`
pub fn prefix_marker(prefix: &str) -> String {
    format!("[PREFIX={prefix}]")
}

/// An ordered list of known prefixes. It's sorted by length (longest first),
/// and prefixes with the same length are sorted lexicographically.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrefixSet {
    prefixes: Vec<String>,
}

impl PrefixSet {
    pub fn new(prefixes: Vec<String>) -> Result<Self, Error> {
        if prefixes.iter().any(|prefix| prefix.is_empty()) {
            return Err(Error::EmptyPrefix);
        }

        Ok(PrefixSet { prefixes: sort_affixes(prefixes) })
    }

    /// `PREFIX_LIBRARY`
    pub fn builtin() -> Self {
        PrefixSet { prefixes: SORTED_PREFIX_LIBRARY.clone() }
    }

    /// It's `self` plus `extra`. It fails if any of `extra` is empty.
    pub fn extend(&self, extra: &[String]) -> Result<Self, Error> {
        PrefixSet::new(
            self.prefixes.iter().chain(extra.iter()).cloned().collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(|prefix| prefix.as_str())
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// The longest prefix that `s` starts with.
    pub fn longest_match(&self, s: &str) -> Option<&str> {
        self.iter().find(|prefix| s.starts_with(prefix))
    }

    /// `memperbaiki` -> `["mem", "per"]`
    ///
    /// It keeps matching the longest prefix against what's left of the word,
    /// until nothing matches. Prefixes are in the order they're found.
    pub fn detect_prefixes(&self, word: &str) -> Vec<&str> {
        let mut result = vec![];
        let mut rest = word;

        // every prefix is non-empty, so `rest` gets shorter each iteration
        while let Some(prefix) = self.longest_match(rest) {
            result.push(prefix);
            rest = &rest[prefix.len()..];
        }

        result
    }

    /// `memperbaiki` -> `(["[PREFIX=mem]", "[PREFIX=per]"], "memperbaiki")`
    ///
    /// The word is returned as-is. Detected prefixes are only reported as markers.
    pub fn strip_prefixes<'w>(&self, word: &'w str) -> (Vec<String>, &'w str) {
        (
            self.detect_prefixes(word).into_iter().map(prefix_marker).collect(),
            word,
        )
    }

    /// `memperbaiki` -> `(Some("mem"), "perbaiki")`
    ///
    /// Unlike `strip_prefixes`, it removes the prefix from the word, and it
    /// only looks for one prefix.
    pub fn strip_single_prefix<'w>(&self, word: &'w str) -> (Option<&str>, &'w str) {
        match self.longest_match(word) {
            Some(prefix) => (Some(prefix), &word[prefix.len()..]),
            None => (None, word),
        }
    }
}

impl Default for PrefixSet {
    fn default() -> Self {
        PrefixSet::builtin()
    }
}
