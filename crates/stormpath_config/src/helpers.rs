//! Small helpers shared by the strategies.

use serde_json::Value;
use std::path::PathBuf;

#[cfg(test)]
#[path = "helpers_tests.rs"]
mod tests;

/// Truthiness rule used for feature flags and emptiness checks.
///
/// `null`, `false`, zero, empty strings, empty sequences and empty mappings
/// are falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Converts a snake_case attribute name to camelCase.
///
/// Names without an underscore are returned unchanged. Otherwise the part
/// before the first underscore is kept verbatim and the remainder is
/// title-cased word by word with the underscores removed.
///
/// # Examples
///
/// ```
/// use stormpath_config::helpers::to_camel_case;
///
/// assert_eq!(to_camel_case("sp_http_status"), "spHttpStatus");
/// assert_eq!(to_camel_case("min_upper_case"), "minUpperCase");
/// assert_eq!(to_camel_case("href"), "href");
/// ```
pub fn to_camel_case(name: &str) -> String {
    let Some((head, tail)) = name.split_once('_') else {
        return name.to_string();
    };

    let mut camel = String::with_capacity(name.len());
    camel.push_str(head);

    let mut word_start = true;
    for ch in tail.chars() {
        if ch.is_alphabetic() {
            if word_start {
                camel.extend(ch.to_uppercase());
            } else {
                camel.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            word_start = true;
            if ch != '_' {
                camel.push(ch);
            }
        }
    }
    camel
}

/// Returns the current user's home directory.
///
/// On Unix this prefers `HOME` and falls back to the password database entry
/// of the current user when the variable is unset.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expands a leading `~` against `home`.
///
/// Paths that do not start with `~` are returned as-is. `None` means the
/// path needs a home directory that is not available, or uses the
/// unsupported `~user` form.
pub fn expand_home_with(path: &str, home: Option<PathBuf>) -> Option<PathBuf> {
    if !path.starts_with('~') {
        return Some(PathBuf::from(path));
    }

    let rest = &path[1..];
    if !rest.is_empty() && !rest.starts_with('/') && !rest.starts_with('\\') {
        return None;
    }

    let home = home?;
    let rest = rest.trim_start_matches(['/', '\\']);
    if rest.is_empty() {
        Some(home)
    } else {
        Some(home.join(rest))
    }
}

/// Expands a leading `~` using the process environment.
pub fn expand_home(path: &str) -> Option<PathBuf> {
    expand_home_with(path, home_dir())
}
