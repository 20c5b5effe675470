//! Resolution of request URIs to files under a document root.

use std::path::{Component, Path, PathBuf};

use anyhow::Context;

/// Outcome of resolving a URI against a [`DocumentRoot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// An existing regular file inside the root.
    File {
        /// Canonical location, with symlinks followed.
        path: PathBuf,
        /// Path as named by the request, relative to the root.
        requested: PathBuf,
    },
    /// Nothing servable behind the URI: missing, or a directory.
    NotFound,
    /// The URI points outside the document root.
    Forbidden,
}

/// A canonicalized directory that request URIs are resolved against.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: PathBuf,
    index: String,
}

impl DocumentRoot {
    /// Canonicalizes `root` once; it must exist and be a directory.
    pub fn new(root: impl AsRef<Path>, index: impl Into<String>) -> anyhow::Result<Self> {
        let root = root.as_ref();
        let canonical = root
            .canonicalize()
            .with_context(|| format!("document root {} is not accessible", root.display()))?;

        if !canonical.is_dir() {
            anyhow::bail!("document root {} is not a directory", canonical.display());
        }

        Ok(Self {
            root: canonical,
            index: index.into(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Maps a URI to a file under the root.
    ///
    /// Leading and trailing `/` are stripped; an empty remainder names the
    /// index document. The joined path is canonicalized, so `..` segments and
    /// symlinks are followed before the containment check.
    pub fn resolve(&self, uri: &str) -> Resolution {
        let trimmed = uri.trim_matches('/');
        let relative = if trimmed.is_empty() {
            self.index.as_str()
        } else {
            trimmed
        };

        let relative = Path::new(relative);
        if relative
            .components()
            .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
        {
            return Resolution::Forbidden;
        }

        let candidate = self.root.join(relative);
        let canonical = match candidate.canonicalize() {
            Ok(path) => path,
            Err(_) => {
                // Only report escapes for paths that would lexically leave the root.
                return if escapes_lexically(relative) {
                    Resolution::Forbidden
                } else {
                    Resolution::NotFound
                };
            }
        };

        if !canonical.starts_with(&self.root) {
            return Resolution::Forbidden;
        }

        if canonical.is_dir() {
            return Resolution::NotFound;
        }

        Resolution::File {
            path: canonical,
            requested: relative.to_path_buf(),
        }
    }
}

fn escapes_lexically(relative: &Path) -> bool {
    let mut depth: usize = 0;

    for component in relative.components() {
        match component {
            Component::ParentDir => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return true,
            },
            Component::Normal(_) => depth += 1,
            _ => {}
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_escape_detection() {
        assert!(escapes_lexically(Path::new("../etc/passwd")));
        assert!(escapes_lexically(Path::new("a/../../b")));
        assert!(!escapes_lexically(Path::new("a/../b")));
        assert!(!escapes_lexically(Path::new("./a/b")));
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        assert!(DocumentRoot::new(&missing, "index.html").is_err());
    }
}
