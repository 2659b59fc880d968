//! Setting value validation.

use regex::Regex;
use std::sync::LazyLock;

static RE_LOCALE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}([-_][A-Za-z0-9]{2,8})*$").expect("locale pattern is valid")
});

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "DASHLET_LOCALE" => {
            if !RE_LOCALE.is_match(value) {
                return Err("must be a language tag like 'en' or 'en-US'".into());
            }
        }
        "DASHLET_APP_VERSION" => {
            if value.is_empty() {
                return Err("must not be empty".into());
            }
            if value.chars().any(char::is_whitespace) {
                return Err("must not contain whitespace".into());
            }
        }
        "DASHLET_GAME_MODE" => {
            if value.chars().any(char::is_whitespace) {
                return Err("game id must not contain whitespace".into());
            }
        }
        _ => {}
    }
    Ok(())
}
