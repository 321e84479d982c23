//! Terminal output utilities.

use std::io::Write;
use std::path::Path;

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter writing to stderr.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            red: Style::new().red(),
        }
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }
}

/// Write rendered markup to `path`, or to stdout when `path` is `None`.
pub(crate) fn write_document(html: &str, path: Option<&Path>) -> std::io::Result<()> {
    match path {
        Some(path) => std::fs::write(path, html),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_write_document_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");

        write_document("<p>Hi</p>", Some(&path)).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>Hi</p>");
    }

    #[test]
    fn test_write_document_missing_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing/page.html");

        let err = write_document("<p>Hi</p>", Some(&path)).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
