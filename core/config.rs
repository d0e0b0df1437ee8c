use crate::backup;
use crate::stripper::Category;
use std::collections::{BTreeMap, BTreeSet};

const SKIP_DIRS: &[&str] = &["node_modules", ".git", ".bolt", "dist"];

const SCRIPT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "json", "config.js", "config.ts"];
const INTERPRETED_EXTENSIONS: &[&str] = &["py"];
const QUERY_EXTENSIONS: &[&str] = &["sql"];
const MARKUP_EXTENSIONS: &[&str] = &["html", "scss"];
const STYLESHEET_EXTENSIONS: &[&str] = &["css"];
const PLAIN_EXTENSIONS: &[&str] = &["sh", "md"];

/// Immutable run configuration: which directories to prune and which
/// extensions to process, each mapped to exactly one category.
///
/// Extensions are stored lower-cased without a leading dot. Compound
/// extensions such as `config.js` are allowed. Backup directories of any run
/// are pruned unless turned off with `with_backup_dirs_skipped(false)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    skip_dirs: BTreeSet<String>,
    skip_backup_dirs: bool,
    extensions: BTreeMap<String, Category>,
}

impl Default for Config {
    fn default() -> Self {
        let mut extensions = BTreeMap::new();
        let groups: [(&[&str], Category); 6] = [
            (SCRIPT_EXTENSIONS, Category::Script),
            (INTERPRETED_EXTENSIONS, Category::Interpreted),
            (QUERY_EXTENSIONS, Category::Query),
            (MARKUP_EXTENSIONS, Category::Markup { stylesheet: false }),
            (STYLESHEET_EXTENSIONS, Category::Markup { stylesheet: true }),
            (PLAIN_EXTENSIONS, Category::Plain),
        ];
        for (exts, category) in groups {
            for &ext in exts {
                extensions.insert(ext.to_string(), category);
            }
        }
        Config {
            skip_dirs: SKIP_DIRS.iter().map(|d| d.to_string()).collect(),
            skip_backup_dirs: true,
            extensions,
        }
    }
}

impl Config {
    /// A configuration with nothing skipped and nothing allowed.
    pub fn empty() -> Self {
        Config {
            skip_dirs: BTreeSet::new(),
            skip_backup_dirs: false,
            extensions: BTreeMap::new(),
        }
    }

    pub fn with_skip_dir(mut self, name: impl Into<String>) -> Self {
        self.skip_dirs.insert(name.into());
        self
    }

    pub fn with_backup_dirs_skipped(mut self, skip: bool) -> Self {
        self.skip_backup_dirs = skip;
        self
    }

    /// Allows `ext` (leading dot optional, any case). A later call for the
    /// same extension replaces its category.
    pub fn with_extension(mut self, ext: &str, category: Category) -> Self {
        self.extensions.insert(normalize_extension(ext), category);
        self
    }

    pub fn skips_dir(&self, name: &str) -> bool {
        self.skip_dirs.contains(name)
            || (self.skip_backup_dirs && backup::is_backup_dir_name(name))
    }

    pub fn category_for(&self, ext: &str) -> Option<Category> {
        self.extensions.get(&normalize_extension(ext)).copied()
    }

    pub fn skip_dirs(&self) -> impl Iterator<Item = &str> {
        self.skip_dirs.iter().map(String::as_str)
    }

    pub fn allowed_extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.keys().map(String::as_str)
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}
