//! Shared string helpers.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Used for log previews of prompts and replies.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("caption me", 7), "caption");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_str("ok", 10), "ok");
    }

    #[test]
    fn truncate_backs_up_to_char_boundary() {
        // '📸' is 4 bytes
        let s = "📸 snap";
        assert_eq!(truncate_str(s, 2), "");
        assert_eq!(truncate_str(s, 5), "📸 ");
    }
}
