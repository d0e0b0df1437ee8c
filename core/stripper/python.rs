use super::common::{Pattern, StripError, strip_pattern};
use regex::Regex;
use std::sync::LazyLock;

static HASH_COMMENT: Pattern = LazyLock::new(|| Regex::new(r"(?m)#.*$"));
static TRIPLE_DOUBLE: Pattern = LazyLock::new(|| Regex::new(r#"(?s)""".*?""""#));
static TRIPLE_SINGLE: Pattern = LazyLock::new(|| Regex::new(r"(?s)'''.*?'''"));

/// `#` runs, then `"""` blocks, then `'''` blocks. Docstrings count as
/// comments here.
pub fn strip(input: &str) -> Result<String, StripError> {
    let content = strip_pattern(input.to_string(), &HASH_COMMENT)?;
    let content = strip_pattern(content, &TRIPLE_DOUBLE)?;
    strip_pattern(content, &TRIPLE_SINGLE)
}
