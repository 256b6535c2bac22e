use std::path::{Path, PathBuf};

use ignore::{DirEntry, Walk, WalkBuilder};
use tracing::debug;

use crate::error::{ExplorerError, Result};

/// Lazy, depth-first enumeration of every file under a root.
///
/// Unlike a project scanner this applies no filters: hidden files,
/// ignore files and build directories are all visited. Directory
/// symlinks are not followed, so a link cycle cannot loop the walk.
/// Order is whatever the filesystem returns.
pub struct Walker {
    inner: Walk,
}

impl Walker {
    /// Start walking `root`. Fails if `root` does not exist.
    pub fn new(root: &Path) -> Result<Self> {
        if std::fs::symlink_metadata(root).is_err() {
            return Err(ExplorerError::FileRead {
                path: root.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such path"),
            });
        }
        let inner = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .build();
        Ok(Self { inner })
    }
}

impl Iterator for Walker {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if is_indexable(&entry) {
                        return Some(Ok(entry.into_path()));
                    }
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Regular files and links to anything other than a directory.
///
/// A dangling link is yielded so that reading it fails loudly.
fn is_indexable(entry: &DirEntry) -> bool {
    let Some(ft) = entry.file_type() else {
        return false;
    };
    if ft.is_file() {
        return true;
    }
    if ft.is_symlink() {
        return match std::fs::metadata(entry.path()) {
            Ok(meta) => !meta.is_dir(),
            Err(_) => true,
        };
    }
    if !ft.is_dir() {
        debug!(path = %entry.path().display(), "skipping special file");
    }
    false
}

/// Convenience wrapper: walk `root`.
pub fn walk(root: &Path) -> Result<Walker> {
    Walker::new(root)
}
