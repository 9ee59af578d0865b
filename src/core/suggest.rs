// src/core/suggest.rs

/// Minimum similarity for a name to be suggested.
pub const SUGGESTION_CUTOFF: f64 = 0.5;

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 3;

/// Ratcliff/Obershelp similarity in `[0, 1]`: twice the number of matching characters
/// divided by the total length of both strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches = matching_chars(&a, &b);
    (2 * matches) as f64 / total as f64
}

/// Up to `MAX_SUGGESTIONS` candidates whose similarity to `word` reaches `SUGGESTION_CUTOFF`,
/// best first. Equal scores are ordered by name, descending.
pub fn close_matches<'a, I>(word: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|candidate| (similarity(candidate, word), candidate))
        .filter(|(score, _)| *score >= SUGGESTION_CUTOFF)
        .collect();

    scored.sort_by(|(sa, na), (sb, nb)| sb.total_cmp(sa).then_with(|| nb.cmp(na)));

    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, name)| name.to_string())
        .collect()
}

/// Total length of the matching blocks: the longest common run, then recursively the
/// best runs to its left and to its right.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let Some((i, j, len)) = longest_common_run(a, b) else {
        return 0;
    };

    let (a_left, a_rest) = a.split_at(i);
    let (b_left, b_rest) = b.split_at(j);
    let (_, a_right) = a_rest.split_at(len);
    let (_, b_right) = b_rest.split_at(len);

    len + matching_chars(a_left, b_left) + matching_chars(a_right, b_right)
}

/// Earliest longest common substring as `(start_in_a, start_in_b, len)`.
fn longest_common_run(a: &[char], b: &[char]) -> Option<(usize, usize, usize)> {
    let mut best: Option<(usize, usize, usize)> = None;
    // prev[j + 1] = length of the common run ending at a[i - 1], b[j]
    let mut prev = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        let mut current = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let run = prev.get(j).copied().unwrap_or(0) + 1;
                if let Some(slot) = current.get_mut(j + 1) {
                    *slot = run;
                }
                if best.is_none_or(|(_, _, len)| run > len) {
                    best = Some((i + 1 - run, j + 1 - run, run));
                }
            }
        }
        prev = current;
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(similarity("build", "build"), 1.0);
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_similarity_counts_blocks_on_both_sides() {
        // "bu" + "ld" match: 2 * 4 / 9
        let score = similarity("buld", "build");
        assert!((score - 8.0 / 9.0).abs() < 1e-9, "{}", score);
    }

    #[test]
    fn test_similarity_depends_on_argument_order() {
        assert_eq!(similarity("bcda", "abdc"), 0.5);
        assert_eq!(similarity("abdc", "bcda"), 0.25);
        assert_eq!(close_matches("abdc", ["bcda"]), vec!["bcda"]);
    }

    #[test]
    fn test_typo_suggests_closest_command() {
        let names = ["build", "deploy", "test"];
        assert_eq!(close_matches("buld", names), vec!["build"]);
    }

    #[test]
    fn test_suggestions_are_capped_and_ordered() {
        let names = ["test", "tests", "testa", "testb", "lint"];
        let suggestions = close_matches("test", names);
        assert_eq!(suggestions, vec!["test", "tests", "testb"]);
    }

    #[test]
    fn test_equal_scores_prefer_the_later_name() {
        // abcd scores 0.75; dcba, cdab and bcda all score 0.5.
        let names = ["abcd", "dcba", "cdab", "bcda"];
        assert_eq!(close_matches("abdc", names), vec!["abcd", "dcba", "cdab"]);
    }

    #[test]
    fn test_nothing_close_enough() {
        assert!(close_matches("zzz", ["build", "deploy"]).is_empty());
    }
}
