use tuitable::text::{align_offset, char_width, display_width, fit, strip_ansi, truncate};
use tuitable::TextAlign;

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_cjk() {
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("a日b"), 4);
}

#[test]
fn test_display_width_ignores_ansi() {
    assert_eq!(display_width("\x1b[1mbold\x1b[0m"), 4);
    assert_eq!(display_width("\x1b[38;2;255;0;0m✓\x1b[0m"), 1);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
    assert_eq!(char_width('\u{301}'), 0);
}

#[test]
fn test_strip_ansi() {
    assert_eq!(strip_ansi("\x1b[31mred\x1b[0m"), "red");
    assert_eq!(strip_ansi("plain"), "plain");
}

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_overflow() {
    assert_eq!(truncate("hello world", 8), "hello w…");
    assert_eq!(truncate("hello", 3), "he…");
    assert_eq!(truncate("hello", 1), "…");
}

#[test]
fn test_truncate_zero_width() {
    assert_eq!(truncate("hello", 0), "");
    assert_eq!(truncate("", 0), "");
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_cuts_at_first_newline() {
    assert_eq!(truncate("hello\nall", 5), "hell…");
    assert_eq!(truncate("hi\nall", 5), "hi…");
    assert_eq!(truncate("\nall", 3), "…");
}

#[test]
fn test_truncate_wide_glyphs() {
    assert_eq!(truncate("直立した恐", 5), "直立…");
    assert_eq!(truncate("直立した恐", 4), "直…");
    assert_eq!(truncate("✓✓✓", 2), "✓…");
}

#[test]
fn test_truncate_keeps_escape_sequences() {
    assert_eq!(truncate("\x1b[31mhello\x1b[0m", 3), "\x1b[31mhe…\x1b[0m");
    assert_eq!(truncate("\x1b[31mhi\x1b[0m", 5), "\x1b[31mhi\x1b[0m");
    assert_eq!(truncate("he\x1b[0mllo", 3), "he\x1b[0m…");
}

#[test]
fn test_truncate_is_idempotent() {
    let once = truncate("a longer line\nsecond", 6);
    assert_eq!(truncate(&once, 6), once);
}

#[test]
fn test_align_offset() {
    assert_eq!(align_offset(5, 10, TextAlign::Left), 0);
    assert_eq!(align_offset(5, 10, TextAlign::Center), 2);
    assert_eq!(align_offset(5, 10, TextAlign::Right), 5);
    assert_eq!(align_offset(12, 10, TextAlign::Right), 0);
}

#[test]
fn test_fit_pads_to_width() {
    assert_eq!(fit("ab", 4, TextAlign::Right), "  ab");
    assert_eq!(fit("ab", 4, TextAlign::Left), "ab  ");
    assert_eq!(fit("ab", 5, TextAlign::Center), " ab  ");
    assert_eq!(fit("abcdef", 4, TextAlign::Left), "abc…");
    assert_eq!(fit("日本語", 4, TextAlign::Left), "日… ");
}
