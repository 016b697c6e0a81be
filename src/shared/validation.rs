use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for administrative and country codes (`code`, `kd_*` fields)
    /// Must start with an alphanumeric character, then alphanumerics, dots, underscores or hyphens
    /// - Valid: "ID", "32", "32.73", "32.73.01.1001", "ID-JB"
    /// - Invalid: ".32", "32 73", "", "-ID"
    pub static ref CODE_REGEX: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_regex_valid() {
        assert!(CODE_REGEX.is_match("ID"));
        assert!(CODE_REGEX.is_match("32"));
        assert!(CODE_REGEX.is_match("32.73"));
        assert!(CODE_REGEX.is_match("32.73.01.1001"));
        assert!(CODE_REGEX.is_match("ID-JB"));
        assert!(CODE_REGEX.is_match("kab_bandung"));
    }

    #[test]
    fn test_code_regex_invalid() {
        assert!(!CODE_REGEX.is_match("")); // empty
        assert!(!CODE_REGEX.is_match(".32")); // starts with dot
        assert!(!CODE_REGEX.is_match("-ID")); // starts with hyphen
        assert!(!CODE_REGEX.is_match("32 73")); // space
        assert!(!CODE_REGEX.is_match(" 32")); // leading space
    }
}
