//! Regex-driven comment removal.
//!
//! Rules are line/block patterns applied to the whole file text. They do not
//! track string literals, so a comment marker inside a string is removed
//! together with whatever follows it.

pub mod c_family;
pub mod common;
pub mod python;
pub mod sql;
pub mod xml_html;

pub use common::{CommentMatch, StripError, remove_matches};

/// Comment syntax family of a file, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// JavaScript, TypeScript, JSON and their config variants.
    Script,
    /// Python-like: `#` lines and triple-quoted blocks.
    Interpreted,
    /// SQL-like: `--` lines and `/* */` blocks.
    Query,
    /// HTML and stylesheets. `stylesheet` adds the script passes after the
    /// `<!-- -->` pass.
    Markup { stylesheet: bool },
    /// Eligible for processing but without a stripping rule.
    Plain,
}

/// Applies the full rule sequence for `category`.
///
/// Either every pass succeeds and the fully stripped text is returned, or the
/// first failing pass is reported and the caller keeps its original text.
pub fn strip_comments(content: &str, category: Category) -> Result<String, StripError> {
    match category {
        Category::Script => c_family::strip(content),
        Category::Interpreted => python::strip(content),
        Category::Query => sql::strip(content),
        Category::Markup { stylesheet } => xml_html::strip(content, stylesheet),
        Category::Plain => Ok(content.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Category; 6] = [
        Category::Script,
        Category::Interpreted,
        Category::Query,
        Category::Markup { stylesheet: false },
        Category::Markup { stylesheet: true },
        Category::Plain,
    ];

    const SAMPLES: &[&str] = &[
        "const x = 1; // keep\n/* block */\nconst y = 2;",
        "def f():\n    \"\"\"Doc.\"\"\"\n    return 1  # one\n'''tail'''\n",
        "SELECT 1; -- note\n/* old */\nSELECT 2;",
        "<div><!-- a --></div>\n<style>/* b */ p { x: 1; } // c\n</style>",
        "/* a // b */ c\nd */ e\n-- f\n# g\n",
        "plain text with no markers\n",
        "",
    ];

    #[test]
    fn stripping_typical_sources_twice_changes_nothing() {
        for category in ALL {
            for sample in SAMPLES {
                let once = strip_comments(sample, category).unwrap();
                let twice = strip_comments(&once, category).unwrap();
                assert_eq!(once, twice, "{category:?} on {sample:?}");
            }
        }
    }

    #[test]
    fn stripping_is_deterministic() {
        for category in ALL {
            for sample in SAMPLES {
                assert_eq!(
                    strip_comments(sample, category),
                    strip_comments(sample, category)
                );
            }
        }
    }

    #[test]
    fn removal_can_splice_a_new_marker_together() {
        let markup = Category::Markup { stylesheet: false };
        let once = strip_comments("<!-<!--x-->-y-->", markup).unwrap();
        assert_eq!(once, "<!--y-->");
        assert_eq!(strip_comments(&once, markup).unwrap(), "");

        let once = strip_comments(r#"""'''x'''"y""""#, Category::Interpreted).unwrap();
        assert_eq!(once, r#""""y""""#);
        assert_eq!(strip_comments(&once, Category::Interpreted).unwrap(), "");
    }

    #[test]
    fn plain_passes_content_through() {
        let input = "#!/bin/sh\n# comment\necho hi // not stripped\n";
        assert_eq!(strip_comments(input, Category::Plain).unwrap(), input);
    }

    #[test]
    fn markup_without_stylesheet_keeps_block_comments() {
        let input = "h1 { } /* keep */ <!-- drop -->";
        assert_eq!(
            strip_comments(input, Category::Markup { stylesheet: false }).unwrap(),
            "h1 { } /* keep */ "
        );
        assert_eq!(
            strip_comments(input, Category::Markup { stylesheet: true }).unwrap(),
            "h1 { }  "
        );
    }

    #[test]
    fn query_rule_ignores_hash_and_slash_markers() {
        let input = "SELECT '#' // x\n";
        assert_eq!(strip_comments(input, Category::Query).unwrap(), input);
    }
}
