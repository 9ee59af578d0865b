// src/core/interpolator.rs

use crate::models::VarValue;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

lazy_static! {
    // `{{key}}` or `{{table.sub}}`; braces are not allowed inside the key.
    static ref TOKEN_RE: Regex = Regex::new(r"\{\{([^{}]+)\}\}").expect("valid token regex");
}

/// Name of the synthetic table holding the command's selected environment block.
pub const ENV_TABLE: &str = "env";

/// Expands `{{key}}` and `{{key.subkey}}` tokens in a run template.
///
/// Expansion is one left-to-right pass: text produced by a substitution is never
/// scanned again, and tokens that match nothing are kept verbatim.
#[derive(Debug, Clone, Default)]
pub struct Interpolator {
    scalars: BTreeMap<String, String>,
    tables: BTreeMap<String, BTreeMap<String, String>>,
}

impl Interpolator {
    /// Builds the substitution context from a configuration's `vars` plus the selected
    /// environment block, which is exposed as the `env` table and shadows any var named `env`.
    pub fn new(vars: &BTreeMap<String, VarValue>, env_block: &BTreeMap<String, String>) -> Self {
        let mut scalars: BTreeMap<String, String> = BTreeMap::new();
        let mut tables: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();

        for (key, value) in vars {
            match value {
                VarValue::Scalar(s) => {
                    scalars.insert(key.clone(), s.to_string());
                }
                VarValue::Table(t) => {
                    let rendered: BTreeMap<String, String> =
                        t.iter().map(|(k, v)| (k.clone(), v.to_string())).collect();
                    tables.insert(key.clone(), rendered);
                }
            }
        }

        scalars.remove(ENV_TABLE);
        tables.insert(ENV_TABLE.to_string(), env_block.clone());

        Self { scalars, tables }
    }

    /// Expands every known token in `template`.
    pub fn expand_string(&self, template: &str) -> String {
        TOKEN_RE
            .replace_all(template, |caps: &Captures<'_>| {
                let whole = caps.get(0).map_or("", |m| m.as_str());
                caps.get(1)
                    .and_then(|key| self.lookup(key.as_str()))
                    .unwrap_or(whole)
                    .to_string()
            })
            .into_owned()
    }

    /// `key` as a plain var first, then as `table.subkey` split at each dot in turn.
    fn lookup(&self, key: &str) -> Option<&str> {
        if let Some(value) = self.scalars.get(key) {
            return Some(value);
        }

        key.match_indices('.').find_map(|(dot, _)| {
            let (table, sub) = key.split_at(dot);
            let sub = sub.strip_prefix('.')?;
            self.tables.get(table)?.get(sub).map(String::as_str)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scalar;

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, VarValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), VarValue::Scalar(Scalar::from(*v))))
            .collect()
    }

    fn block(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_plain_var() {
        let interp = Interpolator::new(&vars(&[("NAME", "world")]), &BTreeMap::new());
        assert_eq!(interp.expand_string("echo {{NAME}}"), "echo world");
    }

    #[test]
    fn test_env_table() {
        let interp = Interpolator::new(
            &BTreeMap::new(),
            &block(&[("compose", "docker-compose.prod.yml")]),
        );
        assert_eq!(
            interp.expand_string("docker compose -f {{env.compose}} up -d"),
            "docker compose -f docker-compose.prod.yml up -d"
        );
    }

    #[test]
    fn test_substitution_is_not_recursive() {
        let interp = Interpolator::new(
            &vars(&[("FOO", "{{BAR}}"), ("BAR", "bar")]),
            &BTreeMap::new(),
        );
        assert_eq!(interp.expand_string("x {{FOO}} {{BAR}}"), "x {{BAR}} bar");
    }

    #[test]
    fn test_unknown_and_unterminated_tokens_are_kept() {
        let interp = Interpolator::new(&vars(&[("A", "1")]), &BTreeMap::new());
        assert_eq!(interp.expand_string("{{MISSING}} {{A}}"), "{{MISSING}} 1");
        assert_eq!(interp.expand_string("{{env.nope}}"), "{{env.nope}}");
        assert_eq!(interp.expand_string("echo {{A"), "echo {{A");
        assert_eq!(interp.expand_string("{{}}"), "{{}}");
    }

    #[test]
    fn test_extra_braces_around_a_token() {
        let interp = Interpolator::new(&vars(&[("A", "1")]), &BTreeMap::new());
        assert_eq!(interp.expand_string("{{{A}}}"), "{1}");
        assert_eq!(interp.expand_string("{{x {{A}}"), "{{x 1");
    }

    #[test]
    fn test_key_is_matched_exactly() {
        let interp = Interpolator::new(&vars(&[("A", "1")]), &BTreeMap::new());
        assert_eq!(interp.expand_string("{{ A }} {{A}}"), "{{ A }} 1");
        assert_eq!(interp.expand_string("{{a{b}} {{A}}}"), "{{a{b}} 1}");
    }

    #[test]
    fn test_table_var_only_matches_with_subkey() {
        let mut v = BTreeMap::new();
        v.insert(
            "db".to_string(),
            VarValue::Table(BTreeMap::from([(
                "host".to_string(),
                Scalar::from("localhost"),
            )])),
        );
        let interp = Interpolator::new(&v, &BTreeMap::new());
        assert_eq!(interp.expand_string("{{db.host}}:{{db}}"), "localhost:{{db}}");
    }

    #[test]
    fn test_env_block_shadows_var_named_env() {
        let interp = Interpolator::new(&vars(&[("env", "var")]), &block(&[("k", "v")]));
        assert_eq!(interp.expand_string("{{env}} {{env.k}}"), "{{env}} v");
    }

    #[test]
    fn test_dotted_scalar_key_wins_over_table_split() {
        let mut v = vars(&[("a.b", "scalar")]);
        v.insert(
            "a".to_string(),
            VarValue::Table(BTreeMap::from([("b".to_string(), Scalar::from("table"))])),
        );
        let interp = Interpolator::new(&v, &BTreeMap::new());
        assert_eq!(interp.expand_string("{{a.b}}"), "scalar");
    }

    #[test]
    fn test_subkey_may_contain_dots() {
        let interp = Interpolator::new(&BTreeMap::new(), &block(&[("api.url", "http://x")]));
        assert_eq!(interp.expand_string("{{env.api.url}}"), "http://x");
    }

    #[test]
    fn test_repeated_tokens_and_non_string_scalars() {
        let mut v = vars(&[("N", "n")]);
        v.insert(
            "PORT".to_string(),
            VarValue::Scalar(Scalar::Number(8000.into())),
        );
        v.insert("DEBUG".to_string(), VarValue::Scalar(Scalar::Flag(true)));
        let interp = Interpolator::new(&v, &BTreeMap::new());
        assert_eq!(
            interp.expand_string("{{N}}-{{N}} :{{PORT}} {{DEBUG}}"),
            "n-n :8000 true"
        );
    }
}
