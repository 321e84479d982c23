//! Reusable markup blocks loaded from disk.
//!
//! A block is an HTML fragment stored as `<dir>/<name>.html`. Its contents
//! are returned verbatim as [`Raw`] so they can be embedded like any other
//! renderable value.

use std::path::{Path, PathBuf};

use crate::error::HtmlError;
use crate::raw::Raw;

/// File extension of block files.
const BLOCK_EXTENSION: &str = "html";

/// Loads blocks from a directory.
#[derive(Debug, Clone)]
pub struct BlockLoader {
    dir: PathBuf,
}

impl BlockLoader {
    /// Create a loader reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory blocks are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve the file path of block `name`.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::InvalidBlockName`] if `name` is absolute, has an
    /// empty, `.` or `..` segment, or contains a backslash.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, HtmlError> {
        let valid = name
            .split('/')
            .all(|segment| !matches!(segment, "" | "." | "..") && !segment.contains('\\'));
        if !valid {
            return Err(HtmlError::InvalidBlockName(name.to_owned()));
        }

        let mut path = self.dir.join(name);
        path.as_mut_os_string().push(".");
        path.as_mut_os_string().push(BLOCK_EXTENSION);
        Ok(path)
    }

    /// Load block `name`.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::InvalidBlockName`] for a malformed name,
    /// [`HtmlError::BlockNotFound`] if the file does not exist, and
    /// [`HtmlError::Io`] if it cannot be read.
    pub fn load(&self, name: &str) -> Result<Raw, HtmlError> {
        let path = self.path_for(name)?;
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(block = name, path = %path.display(), "Block not found");
                return Err(HtmlError::BlockNotFound {
                    name: name.to_owned(),
                    path,
                });
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(block = name, bytes = content.len(), "Loaded block");
        Ok(Raw::new(content))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::element::Element;
    use crate::node::Render;

    #[test]
    fn test_load_block() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("footer.html"), "<footer>bye</footer>").unwrap();

        let loader = BlockLoader::new(dir.path());
        let block = loader.load("footer").unwrap();
        assert_eq!(block.as_str(), "<footer>bye</footer>");
    }

    #[test]
    fn test_load_nested_block() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nav")).unwrap();
        fs::write(dir.path().join("nav/main.html"), "<nav></nav>").unwrap();

        let loader = BlockLoader::new(dir.path());
        assert_eq!(loader.load("nav/main").unwrap().as_str(), "<nav></nav>");
    }

    #[test]
    fn test_block_embeds_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("intro.html"), "<p>Hi & welcome</p>").unwrap();
        let loader = BlockLoader::new(dir.path());

        let mut body = Element::new("body").unwrap();
        body.embed(loader.load("intro").unwrap()).unwrap();
        assert_eq!(body.render(), "<body><p>Hi & welcome</p></body>");
    }

    #[test]
    fn test_missing_block() {
        let dir = tempfile::tempdir().unwrap();
        let loader = BlockLoader::new(dir.path());

        let err = loader.load("missing").unwrap_err();
        assert!(
            matches!(&err, HtmlError::BlockNotFound { name, path }
                if name == "missing" && path.ends_with("missing.html")),
            "Expected BlockNotFound, got {err:?}"
        );
    }

    #[test]
    fn test_invalid_block_names() {
        let loader = BlockLoader::new("/blocks");
        let names = [
            "",
            "../secret",
            "/etc/passwd",
            "a/../b",
            "./a",
            "a/./b",
            "a//b",
            "nav/",
            "..\\secret",
        ];
        for name in names {
            let err = loader.path_for(name).unwrap_err();
            assert!(
                matches!(err, HtmlError::InvalidBlockName(_)),
                "Expected InvalidBlockName for {name:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_path_for_appends_extension() {
        let loader = BlockLoader::new("/blocks");
        assert_eq!(
            loader.path_for("header.v2").unwrap(),
            PathBuf::from("/blocks/header.v2.html")
        );
    }
}
