use super::c_family;
use super::common::{Pattern, StripError, strip_pattern};
use regex::Regex;
use std::sync::LazyLock;

static MARKUP_COMMENT: Pattern = LazyLock::new(|| Regex::new(r"<!--[\s\S]*?-->"));

/// Removes `<!-- -->` blocks; stylesheets additionally get the `//` and
/// `/* */` passes.
pub fn strip(input: &str, stylesheet: bool) -> Result<String, StripError> {
    let content = strip_pattern(input.to_string(), &MARKUP_COMMENT)?;
    if stylesheet {
        c_family::strip(&content)
    } else {
        Ok(content)
    }
}
