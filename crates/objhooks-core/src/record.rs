//! Attribute interception on a record-like entity.
//!
//! [`AttributeAccess`] is the explicit version of read/write/delete hooks:
//! the entity resolves names itself with a `match`, so there is no
//! reflection involved. [`Book`] is the one implementor:
//!
//! - `title`, `author` and `year` are declared and always readable;
//! - `contents` does not exist until first written, and until then a read
//!   falls back to [`CONTENTS_PLACEHOLDER`];
//! - any other name is readable once written, and missing before that;
//! - nothing can ever be deleted.
//!
//! Every read emits a trace event naming the attribute, and a second one
//! when the primary lookup misses and the fallback runs.

use std::collections::BTreeMap;

use crate::error::{CoreError, Result};

/// Attribute values are textual.
pub type AttrValue = String;

/// What a read of the never-written `contents` attribute returns.
pub const CONTENTS_PLACEHOLDER: &str = "Content of the book not supported yet";

/// Named read/write/delete access to an entity's attributes.
pub trait AttributeAccess {
    /// Read `name`, or fail with [`CoreError::AttributeNotFound`].
    fn get_attr(&self, name: &str) -> Result<AttrValue>;

    /// Store `value` under `name`, creating the attribute if needed.
    fn set_attr(&mut self, name: &str, value: AttrValue);

    /// Remove `name`.
    fn del_attr(&mut self, name: &str) -> Result<()>;

    /// Whether a read of `name` would succeed.
    fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_ok()
    }
}

/// A book with three declared fields and a lazily created `contents`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    year: String,
    contents: Option<String>,
    extra: BTreeMap<String, AttrValue>,
}

impl Book {
    /// ```
    /// # use objhooks_core::record::{AttributeAccess, Book};
    /// let book = Book::new("The Book", "The Author", "The Year");
    /// assert_eq!(book.get_attr("title").unwrap(), "The Book");
    /// ```
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            contents: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// The stored contents, `None` until written.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Primary lookup: only attributes that currently exist.
    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(self.title.as_str()),
            "author" => Some(self.author.as_str()),
            "year" => Some(self.year.as_str()),
            "contents" => self.contents.as_deref(),
            other => self.extra.get(other).map(String::as_str),
        }
    }

    /// Fallback lookup, consulted only after [`Self::lookup`] misses.
    fn fallback(name: &str) -> Result<AttrValue> {
        tracing::info!(attribute = name, "fallback lookup");
        match name {
            "contents" => Ok(CONTENTS_PLACEHOLDER.to_owned()),
            _ => Err(CoreError::AttributeNotFound {
                name: name.to_owned(),
            }),
        }
    }
}

impl AttributeAccess for Book {
    fn get_attr(&self, name: &str) -> Result<AttrValue> {
        tracing::info!(attribute = name, "attribute lookup");
        match self.lookup(name) {
            Some(value) => Ok(value.to_owned()),
            None => Self::fallback(name),
        }
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) {
        match name {
            "title" => self.title = value,
            "author" => self.author = value,
            "year" => self.year = value,
            "contents" => self.contents = Some(value),
            other => {
                self.extra.insert(other.to_owned(), value);
            }
        }
    }

    fn del_attr(&mut self, name: &str) -> Result<()> {
        tracing::debug!(attribute = name, "refusing deletion");
        Err(CoreError::DeletionNotPermitted {
            name: name.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    /// Collects formatted trace output in memory.
    #[derive(Clone, Default)]
    struct CapturedLines(Arc<Mutex<Vec<u8>>>);

    impl CapturedLines {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_owned)
                .collect()
        }
    }

    impl io::Write for CapturedLines {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLines {
        type Writer = CapturedLines;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn with_captured_trace(f: impl FnOnce()) -> Vec<String> {
        let captured = CapturedLines::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .without_time()
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        captured.lines()
    }

    fn book() -> Book {
        Book::new("The Book", "The Author", "The Year")
    }

    #[test]
    fn test_declared_fields() {
        let b = book();
        assert_eq!(b.get_attr("title").unwrap(), "The Book");
        assert_eq!(b.get_attr("author").unwrap(), "The Author");
        assert_eq!(b.get_attr("year").unwrap(), "The Year");
    }

    #[test]
    fn test_unset_contents_reads_placeholder() {
        let b = book();
        assert_eq!(b.get_attr("contents").unwrap(), CONTENTS_PLACEHOLDER);
        assert_eq!(b.contents(), None);
    }

    #[test]
    fn test_written_contents_reads_back() {
        let mut b = book();
        b.set_attr("contents", "The Book contents".into());
        assert_eq!(b.get_attr("contents").unwrap(), "The Book contents");
        assert_eq!(b.contents(), Some("The Book contents"));
    }

    #[test]
    fn test_unknown_attribute_not_found() {
        let err = book().get_attr("isbn").unwrap_err();
        assert_eq!(err, CoreError::AttributeNotFound { name: "isbn".into() });
        assert!(!book().has_attr("isbn"));
    }

    #[test]
    fn test_set_creates_new_attribute() {
        let mut b = book();
        b.set_attr("isbn", "978-0".into());
        assert_eq!(b.get_attr("isbn").unwrap(), "978-0");
    }

    #[test]
    fn test_set_overwrites_declared_field() {
        let mut b = book();
        b.set_attr("title", "Another Book".into());
        assert_eq!(b.title(), "Another Book");
    }

    #[test]
    fn test_set_stores_once() {
        let mut b = book();
        b.set_attr("contents", "first".into());
        b.set_attr("contents", "second".into());
        assert_eq!(b.get_attr("contents").unwrap(), "second");
        assert!(b.extra.is_empty());
    }

    #[test]
    fn test_every_read_emits_a_trace_line() {
        let mut b = book();
        let lines = with_captured_trace(|| {
            let _ = b.get_attr("title");
            let _ = b.get_attr("contents");
            let _ = b.get_attr("isbn");
            b.set_attr("contents", "The Book contents".into());
            let _ = b.get_attr("contents");
        });

        let lookups: Vec<_> = lines
            .iter()
            .filter(|l| l.contains("attribute lookup"))
            .collect();
        let fallbacks: Vec<_> = lines
            .iter()
            .filter(|l| l.contains("fallback lookup"))
            .collect();
        assert_eq!(lookups.len(), 4);
        assert_eq!(fallbacks.len(), 2);
        assert!(lookups[0].contains("title"));
        assert!(fallbacks[0].contains("contents"));
        assert!(fallbacks[1].contains("isbn"));
    }

    #[test]
    fn test_delete_always_refused() {
        let mut b = book();
        b.set_attr("contents", "The Book contents".into());
        b.set_attr("isbn", "978-0".into());
        for name in ["title", "author", "year", "contents", "isbn", "missing"] {
            let err = b.del_attr(name).unwrap_err();
            assert_eq!(err, CoreError::DeletionNotPermitted { name: name.into() });
        }
        assert_eq!(b.get_attr("contents").unwrap(), "The Book contents");
        assert_eq!(b.get_attr("isbn").unwrap(), "978-0");
        assert!(b.has_attr("title"));
    }
}
