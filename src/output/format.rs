/// ANSI reset sequence
const RESET: &str = "\x1b[0m";

/// Collapse every whitespace run (newlines included) to one space and trim.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse whitespace and cut to at most `max_len` chars, marking cuts
/// with `...`.
pub(crate) fn truncate(text: &str, max_len: usize) -> String {
    let collapsed = collapse_whitespace(text);
    if collapsed.chars().count() <= max_len {
        return collapsed;
    }
    if max_len < 3 {
        return collapsed.chars().take(max_len).collect();
    }
    let mut cut: String = collapsed.chars().take(max_len - 3).collect();
    cut.push_str("...");
    cut
}

/// Wrap text in an SGR color when color output is on
pub(crate) fn paint(text: &str, sgr: &str, use_color: bool) -> String {
    if use_color {
        format!("\x1b[{sgr}m{text}{RESET}")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_whitespace_runs() {
        assert_eq!(collapse_whitespace("  a \n\n b\t c  "), "a b c");
        assert_eq!(collapse_whitespace(" \n "), "");
    }

    #[test]
    fn short_text_unchanged_after_collapse() {
        assert_eq!(truncate("Fix the login bug", 250), "Fix the login bug");
        assert_eq!(truncate("Fix\nthe   bug", 11), "Fix the bug");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
        assert_eq!(truncate("abcdefghij", 8).chars().count(), 8);
    }

    #[test]
    fn exact_length_is_not_cut() {
        assert_eq!(truncate("abcdefgh", 8), "abcdefgh");
    }

    #[test]
    fn tiny_limits_stay_within_bounds() {
        assert_eq!(truncate("abcdef", 3), "...");
        assert_eq!(truncate("abcdef", 2), "ab");
        assert_eq!(truncate("abcdef", 0), "");
    }

    #[test]
    fn truncate_never_exceeds_limit() {
        let inputs = ["", "x", "hello world", "日本語のテキストです", "a\n\n\nb   c", "/cmd do it?"];
        for input in inputs {
            for n in 0..15 {
                let out = truncate(input, n);
                assert!(out.chars().count() <= n, "{input:?} {n} -> {out:?}");
                let collapsed = collapse_whitespace(input);
                if collapsed.chars().count() <= n {
                    assert_eq!(out, collapsed);
                }
            }
        }
    }

    #[test]
    fn paint_respects_color_flag() {
        assert_eq!(paint("hi", "31", true), "\x1b[31mhi\x1b[0m");
        assert_eq!(paint("hi", "31", false), "hi");
    }
}
