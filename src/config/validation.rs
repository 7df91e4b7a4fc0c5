use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn env_reference() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap())
}

/// Expand `${VAR_NAME}` references using `lookup`. Unknown variables are
/// left as written so the server reports them instead of a silent blank.
pub fn expand_env_refs<F>(value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    env_reference()
        .replace_all(value, |caps: &regex::Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

pub fn expand_env_map<F>(values: &HashMap<String, String>, lookup: F) -> HashMap<String, String>
where
    F: Fn(&str) -> Option<String>,
{
    values
        .iter()
        .map(|(key, value)| (key.clone(), expand_env_refs(value, &lookup)))
        .collect()
}
