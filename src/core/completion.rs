// src/core/completion.rs

use crate::constants::BUILTIN_COMMANDS;
use std::collections::BTreeSet;

/// Built-in subcommands plus configured command names, deduplicated and sorted.
pub fn candidates(command_names: &[String]) -> Vec<String> {
    BUILTIN_COMMANDS
        .iter()
        .map(|s| s.to_string())
        .chain(command_names.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Candidates that start with the last word typed, sorted. No words: every candidate.
pub fn complete(words: &[String], candidates: &[String]) -> Vec<String> {
    let mut matches: Vec<String> = match words.last() {
        Some(current) => candidates
            .iter()
            .filter(|c| c.starts_with(current.as_str()))
            .cloned()
            .collect(),
        None => candidates.to_vec(),
    };
    matches.sort();
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_candidates_merge_builtins_and_commands() {
        let all = candidates(&words(&["deploy", "ls", "build"]));
        assert!(all.contains(&"deploy".to_string()));
        assert_eq!(all.iter().filter(|c| *c == "ls").count(), 1);
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
    }

    #[test]
    fn test_complete_filters_on_last_word() {
        let all = words(&["doctor", "deploy", "dev", "init"]);
        assert_eq!(complete(&words(&["x", "de"]), &all), vec!["deploy", "dev"]);
        assert!(complete(&words(&["zz"]), &all).is_empty());
    }

    #[test]
    fn test_complete_without_words_returns_everything_sorted() {
        let all = words(&["init", "dev", "ls"]);
        assert_eq!(complete(&[], &all), vec!["dev", "init", "ls"]);
    }
}
