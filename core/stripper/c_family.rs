use super::common::{Pattern, StripError, strip_pattern};
use regex::Regex;
use std::sync::LazyLock;

static LINE_COMMENT: Pattern = LazyLock::new(|| Regex::new(r"(?m)//.*$"));
static BLOCK_COMMENT: Pattern = LazyLock::new(|| Regex::new(r"/\*[\s\S]*?\*/"));

pub fn strip_line_comments(input: String) -> Result<String, StripError> {
    strip_pattern(input, &LINE_COMMENT)
}

/// Removes `/* ... */` blocks. Also used by the SQL rule.
pub fn strip_block_comments(input: String) -> Result<String, StripError> {
    strip_pattern(input, &BLOCK_COMMENT)
}

/// `//` runs first, then `/* */` blocks. Quotes are not tracked, so a `//`
/// inside a string literal is cut as well.
pub fn strip(input: &str) -> Result<String, StripError> {
    let without_lines = strip_line_comments(input.to_string())?;
    strip_block_comments(without_lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_line_and_block_comments() {
        let input = "const x = 1; // keep\n/* block */\nconst y = 2;";
        assert_eq!(strip(input).unwrap(), "const x = 1; \n\nconst y = 2;");
    }

    #[test]
    fn block_comment_spans_lines_non_greedy() {
        let input = "a /* one\ntwo */ b /* three */ c";
        assert_eq!(strip(input).unwrap(), "a  b  c");
    }

    #[test]
    fn line_comment_only_runs_to_end_of_line() {
        let input = "let a = 1; // first\nlet b = 2; // second\n";
        assert_eq!(strip(input).unwrap(), "let a = 1; \nlet b = 2; \n");
    }

    #[test]
    fn marker_inside_string_literal_is_still_stripped() {
        let input = "const url = \"https://example.com\";\n";
        assert_eq!(strip(input).unwrap(), "const url = \"https:\n");
    }

    #[test]
    fn unterminated_block_is_left_alone() {
        let input = "a /* never closed\nb";
        assert_eq!(strip(input).unwrap(), input);
    }

    #[test]
    fn carriage_return_goes_with_line_comment() {
        let input = "x; // note\r\ny;\r\n";
        assert_eq!(strip(input).unwrap(), "x; \ny;\r\n");
    }

    #[test]
    fn line_pass_runs_before_block_pass() {
        // The `//` inside the block is cut first, leaving the block unterminated
        // on that line; it closes on the next line instead.
        let input = "/* a // b */ c\nd */ e";
        assert_eq!(strip(input).unwrap(), " e");
    }
}
