use regex::Regex;
use std::sync::LazyLock;

/// A rule regex compiled on first use.
pub type Pattern = LazyLock<Result<Regex, regex::Error>>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StripError {
    #[error("comment range {from}..{to} is outside content of length {len}")]
    OutOfBounds { from: usize, to: usize, len: usize },

    #[error("comment range {from}..{to} overlaps a previous range ending at {last_to}")]
    Overlap {
        from: usize,
        to: usize,
        last_to: usize,
    },

    #[error("comment range {from}..{to} does not fall on character boundaries")]
    NotCharBoundary { from: usize, to: usize },

    #[error("comment pattern failed to compile: {0}")]
    Pattern(String),
}

/// Byte range of one comment inside the content it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentMatch {
    pub from: usize,
    pub to: usize,
}

pub fn find_pattern(input: &str, pattern: &Regex) -> Vec<CommentMatch> {
    pattern
        .find_iter(input)
        .map(|m| CommentMatch {
            from: m.start(),
            to: m.end(),
        })
        .collect()
}

/// Runs one regex pass: every match of `pattern` is cut out of `input`.
pub fn strip_pattern(input: String, pattern: &'static Pattern) -> Result<String, StripError> {
    let regex = match &**pattern {
        Ok(regex) => regex,
        Err(e) => return Err(StripError::Pattern(e.to_string())),
    };
    let matches = find_pattern(&input, regex);
    remove_matches(input, matches)
}

pub fn remove_matches(
    mut input: String,
    mut matches: Vec<CommentMatch>,
) -> Result<String, StripError> {
    if matches.is_empty() {
        return Ok(input);
    }
    check_matches_bounds(&input, &matches)?;

    matches.sort_by_key(|m| m.from);
    check_sorted_matches_overlap(&matches)?;
    matches.reverse();

    for m in matches {
        input.drain(m.from..m.to);
    }
    Ok(input)
}

fn check_matches_bounds(input: &str, matches: &[CommentMatch]) -> Result<(), StripError> {
    let len = input.len();
    for &CommentMatch { from, to } in matches {
        if from > len || to > len || from > to {
            return Err(StripError::OutOfBounds { from, to, len });
        }
        if !input.is_char_boundary(from) || !input.is_char_boundary(to) {
            return Err(StripError::NotCharBoundary { from, to });
        }
    }
    Ok(())
}

fn check_sorted_matches_overlap(matches: &[CommentMatch]) -> Result<(), StripError> {
    let mut last_to = 0;
    for &CommentMatch { from, to } in matches {
        if from < last_to {
            return Err(StripError::Overlap { from, to, last_to });
        }
        last_to = to;
    }
    Ok(())
}
