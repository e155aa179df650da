//! Ranked fuzzy search over catalog titles.
//!
//! Scores every indexed title against the query with normalized Levenshtein
//! distance plus a prefix/substring boost, then returns the candidates above
//! the configured threshold, best first.

use strsim::normalized_levenshtein;

use super::normalizer::normalize_title;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Configuration for title matching.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Minimum score to include a candidate (below → excluded).
    pub min_score: f64,
    /// Maximum number of candidates returned per query.
    pub max_results: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_score: 0.45,
            max_results: 8,
        }
    }
}

// ─── Index ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct IndexedTitle {
    title: String,
    normalized: String,
}

/// Fuzzy index over the catalog's titles. Cheap to rebuild; the controller
/// rebuilds it whenever the catalog changes.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    entries: Vec<IndexedTitle>,
}

impl TitleIndex {
    pub fn build<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = titles
            .into_iter()
            .map(|t| {
                let title = t.into();
                let normalized = normalize_title(&title);
                IndexedTitle { title, normalized }
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranked candidate titles for `query`, best first.
    ///
    /// Empty or whitespace-only queries yield an empty sequence; there is no
    /// implicit "show everything". Ties break by title ascending so the
    /// ranking is deterministic.
    pub fn search<'a>(
        &'a self,
        query: &str,
        config: &MatcherConfig,
    ) -> impl Iterator<Item = &'a str> + 'a {
        let needle = normalize_title(query);

        let mut scored: Vec<(&IndexedTitle, f64)> = Vec::new();
        if !needle.is_empty() {
            for entry in &self.entries {
                let score = score_candidate(&needle, &entry.normalized);

                #[cfg(feature = "debug_matcher")]
                log::debug!("matcher: {:?} vs {:?} -> {:.3}", needle, entry.title, score);

                if score >= config.min_score {
                    scored.push((entry, score));
                }
            }
        }

        // Sort: score desc → title asc (deterministic)
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.title.cmp(&b.0.title))
        });

        scored
            .into_iter()
            .take(config.max_results)
            .map(|(entry, _)| entry.title.as_str())
    }
}

/// Score a normalized query against a normalized title.
///
/// Base score is normalized Levenshtein similarity. Partial input is the
/// common case (the operator is mid-typing), so a title that starts with or
/// contains the query gets floored at a high score even when the raw edit
/// distance is poor.
fn score_candidate(needle: &str, haystack: &str) -> f64 {
    let base = normalized_levenshtein(needle, haystack);
    if haystack.starts_with(needle) {
        base.max(0.9)
    } else if haystack.contains(needle) {
        base.max(0.75)
    } else {
        base
    }
}

#[cfg(test)]
#[path = "tests/title_index_tests.rs"]
mod tests;
