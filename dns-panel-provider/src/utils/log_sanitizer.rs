//! Log sanitization utilities
//!
//! Response bodies can embed credentials (zone export blobs, TXT records
//! carrying keys) and can be very large; debug logs only ever see a prefix.

/// 日志输出的最大字符数
const TRUNCATE_LIMIT: usize = 200;

/// Largest byte index `<= index` that lies on a char boundary.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Truncate a string for safe logging.
///
/// Strings within the limit pass through unchanged; longer ones keep a
/// prefix plus a marker with the original byte length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        let cut = floor_char_boundary(s, TRUNCATE_LIMIT);
        format!("{}... ({} bytes total)", &s[..cut], s.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        assert_eq!(truncate_for_log("ok"), "ok");
    }

    #[test]
    fn long_string_truncated() {
        let s = "x".repeat(TRUNCATE_LIMIT * 2);
        let result = truncate_for_log(&s);
        assert!(result.len() < s.len());
        assert!(result.ends_with(&format!("({} bytes total)", s.len())));
    }

    #[test]
    fn multibyte_not_split() {
        let s = "记".repeat(150); // 3 bytes each
        let result = truncate_for_log(&s);
        assert!(result.contains("bytes total"));
    }
}
