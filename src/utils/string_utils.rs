//! UTF-8-safe string helpers
//!
//! Length bounds in the detector are counted in characters, not bytes, and
//! truncation must never split a multi-byte character (`©`, `—`, emoji in
//! navigation labels).

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// # Examples
/// ```
/// # use kodegen_tools_rebrand::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("© 2024 Ünïcode", 6), "© 2024");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Truncate to `max_chars` characters, replacing the tail with `...` when the
/// input is longer.
///
/// The result is at most `max_chars` characters long.
///
/// ```
/// # use kodegen_tools_rebrand::utils::string_utils::truncate_with_ellipsis;
/// assert_eq!(truncate_with_ellipsis("abcdefgh", 6), "abc...");
/// assert_eq!(truncate_with_ellipsis("abc", 6), "abc");
/// ```
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    if char_len(s) <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    format!("{}...", safe_truncate_chars(s, keep))
}

/// Number of Unicode scalar values in `s`
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "┌──┐┌──┐";
        assert_eq!(safe_truncate_chars(text, 4), "┌──┐");
    }

    #[test]
    fn test_truncate_with_ellipsis_exact_length() {
        let fifty = "x".repeat(50);
        assert_eq!(truncate_with_ellipsis(&fifty, 50), fifty);

        let fifty_one = "x".repeat(51);
        let truncated = truncate_with_ellipsis(&fifty_one, 50);
        assert_eq!(char_len(&truncated), 50);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Home \n\t Page  "), "Home Page");
        assert_eq!(collapse_whitespace("\n\n"), "");
    }
}
