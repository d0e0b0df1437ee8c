use crate::CoreError;
use crate::config::Config;
use crate::stripper::Category;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// A file selected for processing together with its comment category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub category: Category,
}

/// Lazy depth-first walk yielding allowed files and pruning skipped
/// directories before they are read.
pub struct FileIter<'a> {
    walker: walkdir::IntoIter,
    config: &'a Config,
}

impl Iterator for FileIter<'_> {
    type Item = CandidateFile;

    fn next(&mut self) -> Option<CandidateFile> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let file_type = entry.file_type();
            if file_type.is_dir() {
                if entry.depth() > 0 && is_skipped_dir(&entry, self.config) {
                    debug!(path = %entry.path().display(), "pruning directory");
                    self.walker.skip_current_dir();
                }
                continue;
            }
            if !file_type.is_file() {
                continue;
            }
            if let Some(category) = classify(entry.path(), self.config) {
                debug!(path = %entry.path().display(), ?category, "candidate file");
                return Some(CandidateFile {
                    path: entry.into_path(),
                    category,
                });
            }
        }
    }
}

pub fn find_files<'a>(root: &Path, config: &'a Config) -> Result<FileIter<'a>, CoreError> {
    if !root.is_dir() {
        return Err(CoreError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }
    Ok(FileIter {
        walker: WalkDir::new(root).into_iter(),
        config,
    })
}

fn is_skipped_dir(entry: &DirEntry, config: &Config) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| config.skips_dir(name))
}

/// Category of `path` under `config`, trying the longest dotted suffix of the
/// file name first so `vite.config.ts` can match `config.ts` before `ts`.
/// A leading dot (hidden file) does not start an extension.
pub fn classify(path: &Path, config: &Config) -> Option<Category> {
    let name = path.file_name()?.to_str()?.to_lowercase();
    name.match_indices('.')
        .filter(|&(i, _)| i > 0)
        .find_map(|(i, _)| config.category_for(&name[i + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x").unwrap();
    }

    fn found(root: &Path, config: &Config) -> Vec<String> {
        let mut names: Vec<String> = find_files(root, config)
            .unwrap()
            .map(|c| {
                c.path
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        names.sort();
        names
    }

    #[test]
    fn classify_uses_lower_cased_extension() {
        let config = Config::default();
        assert_eq!(
            classify(Path::new("src/App.TSX"), &config),
            Some(Category::Script)
        );
        assert_eq!(
            classify(Path::new("styles/site.css"), &config),
            Some(Category::Markup { stylesheet: true })
        );
        assert_eq!(classify(Path::new("main.rs"), &config), None);
        assert_eq!(classify(Path::new("Makefile"), &config), None);
    }

    #[test]
    fn classify_prefers_compound_extension() {
        let config = Config::empty()
            .with_extension("ts", Category::Plain)
            .with_extension("config.ts", Category::Script);
        assert_eq!(
            classify(Path::new("vite.config.ts"), &config),
            Some(Category::Script)
        );
        assert_eq!(
            classify(Path::new("index.ts"), &config),
            Some(Category::Plain)
        );
    }

    #[test]
    fn classify_ignores_hidden_file_dot() {
        let config = Config::default();
        assert_eq!(classify(Path::new(".js"), &config), None);
        assert_eq!(
            classify(Path::new(".eslintrc.json"), &config),
            Some(Category::Script)
        );
    }

    #[test]
    fn prunes_skipped_directories_with_their_subtrees() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "src/app.js");
        touch(tmp.path(), "node_modules/lib/index.js");
        touch(tmp.path(), "src/dist/bundle.js");
        touch(tmp.path(), ".git/hooks/pre-commit.sh");

        assert_eq!(found(tmp.path(), &Config::default()), vec!["src/app.js"]);
    }

    #[test]
    fn yields_only_allowed_extensions() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.py");
        touch(tmp.path(), "b.rs");
        touch(tmp.path(), "c.SQL");
        touch(tmp.path(), "d.txt");

        assert_eq!(found(tmp.path(), &Config::default()), vec!["a.py", "c.SQL"]);
    }

    #[test]
    fn custom_config_changes_selection() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "keep/a.py");
        touch(tmp.path(), "vendor/b.py");
        touch(tmp.path(), "c.js");

        let config = Config::empty()
            .with_skip_dir("vendor")
            .with_extension("py", Category::Interpreted);
        assert_eq!(found(tmp.path(), &config), vec!["keep/a.py"]);
    }

    #[test]
    fn prunes_backup_dirs_of_any_run() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "app.js");
        touch(tmp.path(), "backup_20250602_212937/app.js");
        touch(tmp.path(), "backup_20240101_000000/old.py");
        touch(tmp.path(), "backup_notes/keep.md");

        assert_eq!(
            found(tmp.path(), &Config::default()),
            vec!["app.js", "backup_notes/keep.md"]
        );
    }

    #[test]
    fn root_named_like_skip_dir_is_still_walked() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "dist/app.js");
        let root = tmp.path().join("dist");

        let files: Vec<_> = find_files(&root, &Config::default()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn missing_root_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        assert!(matches!(
            find_files(&missing, &Config::default()),
            Err(CoreError::InvalidRoot { .. })
        ));
    }
}
