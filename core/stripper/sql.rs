use super::c_family;
use super::common::{Pattern, StripError, strip_pattern};
use regex::Regex;
use std::sync::LazyLock;

static DASH_COMMENT: Pattern = LazyLock::new(|| Regex::new(r"(?m)--.*$"));

pub fn strip(input: &str) -> Result<String, StripError> {
    let content = strip_pattern(input.to_string(), &DASH_COMMENT)?;
    c_family::strip_block_comments(content)
}
