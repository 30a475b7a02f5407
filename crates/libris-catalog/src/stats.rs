//! Title statistics and analysis.
//!
//! Provides pure functions over a collection of book titles: how many
//! titles tie for the longest word count, and the most frequent words
//! across all titles.
//!
//! The two functions deliberately use different word-boundary rules.
//! [`count_longest_titles`] counts maximal alphabetic runs (digits and
//! punctuation separate words and never belong to them), while
//! [`most_common_words`] case-folds and splits on whitespace. Unifying
//! them would change observable behavior on titles containing punctuation
//! or embedded digits, so the discrepancy is kept.

use std::collections::HashMap;

// ============================================================================
// Word counting (character-class scan)
// ============================================================================

/// Count the words in a title, where a word is a maximal run of alphabetic
/// characters bounded by non-alphabetic characters or string boundaries.
///
/// A trailing alphabetic character always completes a word; an
/// all-punctuation or empty title counts zero words.
fn scan_word_count(title: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;

    for ch in title.chars() {
        if ch.is_alphabetic() {
            in_word = true;
        } else if in_word {
            count += 1;
            in_word = false;
        }
    }
    if in_word {
        count += 1;
    }
    count
}

// ============================================================================
// Functions
// ============================================================================

/// Count how many titles tie for the longest word count.
///
/// Two passes: the first finds the maximum word count over the collection
/// (0 when the collection is empty), the second counts the titles whose
/// word count equals that maximum. An empty collection yields 0; a
/// non-empty collection always yields at least 1, because every title with
/// no alphabetic characters ties at word count 0.
pub fn count_longest_titles<S: AsRef<str>>(titles: &[S]) -> usize {
    if titles.is_empty() {
        return 0;
    }

    let max_len = titles
        .iter()
        .map(|t| scan_word_count(t.as_ref()))
        .max()
        .unwrap_or(0);

    titles
        .iter()
        .filter(|t| scan_word_count(t.as_ref()) == max_len)
        .count()
}

/// Rank the most frequent words across all titles.
///
/// Titles are lower-cased and split on whitespace (no punctuation
/// stripping). Entries are ordered by count descending, then by word
/// ascending for ties, and truncated to at most `top_k` entries. A
/// `top_k` of 0 returns an empty vec without scanning the titles.
pub fn most_common_words<S: AsRef<str>>(titles: &[S], top_k: usize) -> Vec<(String, usize)> {
    if top_k == 0 {
        return Vec::new();
    }

    let mut frequencies: HashMap<String, usize> = HashMap::new();
    for title in titles {
        for word in title.as_ref().to_lowercase().split_whitespace() {
            *frequencies.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    let mut ranking: Vec<(String, usize)> = frequencies.into_iter().collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranking.truncate(top_k);
    ranking
}

// ============================================================================
// Tests
// ============================================================================
