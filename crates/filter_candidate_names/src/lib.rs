// crates/filter_candidate_names/src/lib.rs

use readme_config::ReadmeConfig;

/// Decides whether a file name is a candidate for comment extraction.
///
/// A name is accepted when it contains at least one required substring and
/// none of the forbidden substrings. Both checks are plain, case-sensitive
/// substring containment; there is no glob or regex interpretation, so
/// `".h"` also matches `"foo.hpp"` and `"a.h.in"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameFilter {
    required: Vec<String>,
    forbidden: Vec<String>,
}

impl NameFilter {
    pub fn new(required: Vec<String>, forbidden: Vec<String>) -> Self {
        Self { required, forbidden }
    }

    pub fn from_config(config: &ReadmeConfig) -> Self {
        Self::new(
            config.required_name_substrings.clone(),
            config.forbidden_name_substrings.clone(),
        )
    }

    /// Returns `true` if `file_name` passes both the required and forbidden checks.
    /// With no required substrings nothing is accepted.
    pub fn accepts(&self, file_name: &str) -> bool {
        self.required.iter().any(|s| file_name.contains(s.as_str()))
            && !self.forbidden.iter().any(|s| file_name.contains(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_filter() -> NameFilter {
        NameFilter::from_config(&ReadmeConfig::default())
    }

    #[test]
    fn test_accepts_sources_and_headers() {
        let filter = default_filter();
        assert!(filter.accepts("foo.h"));
        assert!(filter.accepts("main.cpp"));
        assert!(filter.accepts("widget.hpp"));
    }

    #[test]
    fn test_rejects_names_without_required_substring() {
        let filter = default_filter();
        assert!(!filter.accepts("README"));
        assert!(!filter.accepts("make_readme.py"));
        assert!(!filter.accepts("Makefile"));
    }

    #[test]
    fn test_forbidden_substring_wins() {
        let filter = default_filter();
        assert!(!filter.accepts("bar.cpp.swp"));
        assert!(!filter.accepts(".foo.h.swp"));
        assert!(!filter.accepts("moc_mainwindow.cpp"));
    }

    #[test]
    fn test_case_sensitivity() {
        let filter = default_filter();
        // ".CPP" does not contain ".cpp".
        assert!(!filter.accepts("LEGACY.CPP"));
        // "MOC_" is not the forbidden "moc_".
        assert!(filter.accepts("MOC_widget.cpp"));
    }

    #[test]
    fn test_substring_not_suffix_semantics() {
        let filter = NameFilter::new(vec![".h".to_string()], Vec::new());
        assert!(filter.accepts("config.h.in"));
        assert!(filter.accepts("x.html"));
    }

    #[test]
    fn test_empty_required_accepts_nothing() {
        let filter = NameFilter::new(Vec::new(), Vec::new());
        assert!(!filter.accepts("foo.h"));
        assert!(!filter.accepts(""));
    }
}
