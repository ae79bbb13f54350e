//! Turning command-line paths into the ordered list of files to check.

use crate::error::Error;
use crate::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Files queued for checking plus the per-path problems met on the way.
#[derive(Debug, Default)]
pub struct Collected {
    pub files: Vec<PathBuf>,
    pub errors: Vec<Error>,
}

/// Expand the given paths in argument order.
///
/// Regular files are queued as given, whatever their name. Directories are
/// walked recursively in file-name order, skipping entries whose name
/// starts with '.' and keeping regular files with a configured extension.
/// Paths that cannot be stat'ed, or are neither file nor directory, are
/// recorded as errors and skipped, both at the top level and inside a walk.
pub fn collect_paths(paths: &[PathBuf], config: &Config) -> Collected {
    let mut collected = Collected::default();

    for path in paths {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(source) => {
                collected.errors.push(Error::PathStat {
                    path: path.clone(),
                    source,
                });
                continue;
            }
        };

        if metadata.is_file() {
            collected.files.push(path.clone());
        } else if metadata.is_dir() {
            walk_directory(path, config, &mut collected);
        } else {
            collected.errors.push(Error::PathType { path: path.clone() });
        }
    }

    log::debug!("Collected {} file(s) to check", collected.files.len());
    collected
}

fn walk_directory(root: &Path, config: &Config, collected: &mut Collected) {
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                let path = source.path().unwrap_or(root).to_path_buf();
                collected.errors.push(Error::Walk { path, source });
                continue;
            }
        };

        if entry.depth() == 0 || !entry.file_type().is_file() {
            continue;
        }

        let wanted = entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.matches_extension(name));
        if wanted {
            collected.files.push(entry.into_path());
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().starts_with(b".")
}
