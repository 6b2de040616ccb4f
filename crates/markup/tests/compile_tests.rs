//! Tests for the color markup compiler.

use markup::{Compiler, MarkupError, compile, resolve_group};

// ============================================================================
// Plain Text
// ============================================================================

#[test]
fn compile_empty_string() {
    assert_eq!(compile("").unwrap(), "");
}

#[test]
fn compile_plain_text_is_identity() {
    for text in ["Hello World", "   ", "日本語", "a { b } c", "100% done", "\x1b[0m"] {
        assert_eq!(compile(text).unwrap(), text);
    }
}

// ============================================================================
// Single-Character Groups
// ============================================================================

#[test]
fn compile_red_foreground() {
    assert_eq!(compile("@r").unwrap(), "\x1b[0;31;49m");
}

#[test]
fn compile_background_only() {
    assert_eq!(compile("@B").unwrap(), "\x1b[0;39;44m");
}

#[test]
fn compile_attribute_only() {
    assert_eq!(compile("@_").unwrap(), "\x1b[4;39;49m");
}

#[test]
fn compile_reset_style_char() {
    assert_eq!(compile("@|").unwrap(), "\x1b[0;39;49m");
}

#[test]
fn compile_group_followed_by_text() {
    assert_eq!(compile("@rExample Text").unwrap(), "\x1b[0;31;49mExample Text");
}

// ============================================================================
// Braced Groups
// ============================================================================

#[test]
fn compile_blue_on_black() {
    assert_eq!(compile("@{bK}").unwrap(), "\x1b[0;34;40m");
}

#[test]
fn compile_full_triple() {
    assert_eq!(compile("@{!yM}").unwrap(), "\x1b[1;33;45m");
}

#[test]
fn compile_group_order_does_not_matter_across_slots() {
    assert_eq!(compile("@{Kb}").unwrap(), compile("@{bK}").unwrap());
}

#[test]
fn compile_empty_group_is_default() {
    assert_eq!(compile("@{}").unwrap(), "\x1b[0;39;49m");
}

#[test]
fn compile_explicit_default_colors() {
    assert_eq!(compile("@{rd}").unwrap(), "\x1b[0;39;49m");
    assert_eq!(compile("@{RD}").unwrap(), "\x1b[0;39;49m");
}

#[test]
fn compile_mixed_text_and_groups() {
    assert_eq!(
        compile("a@rb@{gY}c").unwrap(),
        "a\x1b[0;31;49mb\x1b[0;32;43mc"
    );
}

// ============================================================================
// Last Writer Wins
// ============================================================================

#[test]
fn last_writer_wins_foreground() {
    assert_eq!(compile("@{rGr}").unwrap(), "\x1b[0;31;42m");
    assert_eq!(compile("@{rgb}").unwrap(), "\x1b[0;34;49m");
}

#[test]
fn last_writer_wins_background() {
    assert_eq!(compile("@{RGB}").unwrap(), "\x1b[0;39;44m");
}

#[test]
fn last_writer_wins_attribute() {
    assert_eq!(compile("@{!_}").unwrap(), "\x1b[4;39;49m");
    assert_eq!(compile("@{!|}").unwrap(), "\x1b[0;39;49m");
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn compile_literal_escape() {
    assert_eq!(compile("@@").unwrap(), "@");
}

#[test]
fn compile_email_address() {
    assert_eq!(compile("me@@example.com").unwrap(), "me@example.com");
}

#[test]
fn compile_literal_then_group() {
    assert_eq!(compile("@@@r").unwrap(), "@\x1b[0;31;49m");
}

#[test]
fn recompiling_output_is_stable() {
    let once = compile("@{!bK}hi @@ there@|").unwrap();
    // The literal `@` left in the output would be read as markup again.
    let without_literal = compile("@{!bK}hi there@|").unwrap();
    assert_eq!(compile(&without_literal).unwrap(), without_literal);
    assert!(once.contains('@'));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn unrecognized_single_char() {
    assert_eq!(
        compile("@x"),
        Err(MarkupError::UnrecognizedMarkupCharacter('x'))
    );
}

#[test]
fn unrecognized_char_in_group() {
    assert_eq!(
        compile("ok @{r z}"),
        Err(MarkupError::UnrecognizedMarkupCharacter(' '))
    );
}

#[test]
fn unrecognized_char_aborts_whole_compile() {
    assert!(compile("@rfine@{rK}still fine@?@q").is_err());
}

#[test]
fn unterminated_group() {
    assert_eq!(compile("@{rG"), Err(MarkupError::UnterminatedGroup(0)));
}

#[test]
fn unterminated_group_reports_offset() {
    assert_eq!(compile("abc@{"), Err(MarkupError::UnterminatedGroup(3)));
}

#[test]
fn dangling_escape() {
    assert_eq!(compile("text@"), Err(MarkupError::DanglingEscape(4)));
}

#[test]
fn lone_escape() {
    assert_eq!(compile("@"), Err(MarkupError::DanglingEscape(0)));
}

#[test]
fn unrecognized_multibyte_char() {
    assert_eq!(
        compile("@é"),
        Err(MarkupError::UnrecognizedMarkupCharacter('é'))
    );
    assert_eq!(
        compile("@{r日}"),
        Err(MarkupError::UnrecognizedMarkupCharacter('日'))
    );
}

#[test]
fn error_offsets_are_byte_offsets() {
    assert_eq!(compile("é@"), Err(MarkupError::DanglingEscape(2)));
    assert_eq!(compile("日本@{r"), Err(MarkupError::UnterminatedGroup(6)));
}

#[test]
fn multibyte_text_around_groups() {
    assert_eq!(compile("é@rü").unwrap(), "é\x1b[0;31;49mü");
}

#[test]
fn error_messages() {
    assert_eq!(
        MarkupError::UnrecognizedMarkupCharacter('x').to_string(),
        "unrecognized markup character: 'x'"
    );
    assert_eq!(
        MarkupError::UnterminatedGroup(3).to_string(),
        "unterminated markup group starting at position 3"
    );
    assert_eq!(
        MarkupError::DanglingEscape(4).to_string(),
        "dangling escape character at position 4"
    );
}

// ============================================================================
// resolve_group
// ============================================================================

#[test]
fn resolve_group_without_delimiters() {
    assert_eq!(resolve_group("bK").unwrap(), "\x1b[0;34;40m");
}

#[test]
fn resolve_group_rejects_delimiters() {
    assert_eq!(
        resolve_group("{r}"),
        Err(MarkupError::UnrecognizedMarkupCharacter('{'))
    );
}

// ============================================================================
// Custom Escape
// ============================================================================

#[test]
fn custom_escape_char() {
    let compiler = Compiler::new().with_escape('~');
    assert_eq!(compiler.compile("~{gW}go~~").unwrap(), "\x1b[0;32;47mgo~");
    assert_eq!(compiler.compile("a@b").unwrap(), "a@b");
    assert_eq!(compiler.compile("x~"), Err(MarkupError::DanglingEscape(1)));
}
