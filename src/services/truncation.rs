//! Response truncation for tool output.
//!
//! Keeps responses under a character budget while preserving line
//! boundaries when a break falls close enough to the limit.

/// Appended to every truncated response.
pub const TRUNCATION_NOTICE: &str =
    "\n\n... [Response truncated. Try filtering results to see more details]";

/// A line break counts as "close enough" when it is past this share of the limit.
const LINE_BREAK_THRESHOLD: f64 = 0.8;

/// Truncate `content` to at most `limit` characters plus [`TRUNCATION_NOTICE`].
///
/// Content within the limit is returned unchanged.
pub fn truncate_response(content: &str, limit: usize) -> String {
    let Some((cut, _)) = content.char_indices().nth(limit) else {
        return content.to_string();
    };

    let head = &content[..cut];
    let kept = match head.rfind('\n') {
        Some(newline) if past_threshold(head[..newline].chars().count(), limit) => &head[..newline],
        _ => head,
    };

    format!("{kept}{TRUNCATION_NOTICE}")
}

#[allow(clippy::cast_precision_loss)]
fn past_threshold(position: usize, limit: usize) -> bool {
    position as f64 > limit as f64 * LINE_BREAK_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_content_unchanged() {
        assert_eq!(truncate_response("hello", 10), "hello");
        assert_eq!(truncate_response("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_response("", 0), "");
    }

    #[test]
    fn test_cuts_at_late_line_break() {
        let content = "aaaaaaaaa\nbbbbbbbbbbbbbbbbbbbb";
        let truncated = truncate_response(content, 11);
        assert_eq!(truncated, format!("aaaaaaaaa{TRUNCATION_NOTICE}"));
    }

    #[test]
    fn test_hard_cut_when_line_break_is_early() {
        let content = "ab\ncdefghijklmnopqrstuvwxyz";
        let truncated = truncate_response(content, 10);
        assert_eq!(truncated, format!("ab\ncdefghi{TRUNCATION_NOTICE}"));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let content = "åäöåäöåäöåäö";
        let truncated = truncate_response(content, 4);
        assert_eq!(truncated, format!("åäöå{TRUNCATION_NOTICE}"));
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_limit(content in "\\PC{0,300}", limit in 1usize..200) {
            let truncated = truncate_response(&content, limit);
            let notice_len = TRUNCATION_NOTICE.chars().count();
            prop_assert!(truncated.chars().count() <= limit + notice_len);
            if content.chars().count() <= limit {
                prop_assert_eq!(truncated, content);
            } else {
                prop_assert!(truncated.ends_with(TRUNCATION_NOTICE));
            }
        }
    }
}
