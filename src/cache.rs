//! # Parse Cache
//!
//! The `graphql_language::cache` module persists parsed documents on disk so that repeated
//! parses of unchanged files are served from their serialized JSON form instead.
//!
//! A [ParseCache] is pointed at a directory and looked up per source file. The cache key covers
//! the crate version, the canonical file path, and the file's modification time, so edited files
//! and documents serialized by older versions of this crate miss naturally. Cache entries are
//! committed by writing to a temporary file and renaming it into place; concurrent writers race
//! but readers never observe a partially written entry.
//!
//! The cache degrades rather than fails: any filesystem or deserialization problem on the cache's
//! side is logged and the document is reparsed from source. Only errors in reading or parsing the
//! source file itself surface to the caller.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use crate::ast::{ASTContext, Document, ParseNode};
use crate::error::{Error, Result};
use crate::json::{document_from_json, document_to_json};

/// A file-backed cache of parsed documents.
///
/// ```
/// use graphql_language::ast::ASTContext;
/// use graphql_language::cache::ParseCache;
///
/// # fn main() -> graphql_language::error::Result<()> {
/// # let dir = std::env::temp_dir().join("parse-cache-doc");
/// # let source = dir.join("query.graphql");
/// # std::fs::create_dir_all(&dir).unwrap();
/// # std::fs::write(&source, "{ id }").unwrap();
/// let cache = ParseCache::new(&dir);
/// let ctx = ASTContext::new();
/// // The first fetch parses and stores the document, later fetches decode the stored form.
/// let document = cache.fetch(&ctx, &source)?;
/// assert_eq!(document.definitions.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ParseCache {
    dir: PathBuf,
}

impl ParseCache {
    /// Creates a cache storing its entries in the given directory.
    ///
    /// The directory is created lazily on the first successful parse.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        ParseCache { dir: dir.into() }
    }

    /// Parses the GraphQL file at `path`, serving the document from the cache when an entry for
    /// the file's current state exists.
    ///
    /// The returned document is allocated into `ctx`'s arena either way. Errors are only returned
    /// for unreadable or syntactically invalid source files.
    pub fn fetch<'a>(&self, ctx: &'a ASTContext, path: &Path) -> Result<&'a Document<'a>> {
        let entry = self.entry_path(path);

        if let Some(entry) = &entry {
            match Self::read_entry(ctx, entry) {
                Ok(Some(document)) => return Ok(document),
                Ok(None) => {}
                Err(error) => {
                    log::debug!(
                        "discarding unreadable cache entry {}: {}",
                        entry.display(),
                        error.message()
                    );
                }
            }
        }

        let source = fs::read_to_string(path).map_err(|error| {
            Error::new(format!("Failed to read {}: {error}", path.display()), None)
        })?;
        let document = Document::parse(ctx, source)?;

        if let Some(entry) = &entry {
            if let Err(error) = self.write_entry(entry, document) {
                log::warn!(
                    "failed to store cache entry {}: {}",
                    entry.display(),
                    error.message()
                );
            }
        }

        Ok(document)
    }

    /// Computes the on-disk location for the given source file's entry.
    ///
    /// Returns `None` when the file cannot be stat'ed, which downgrades the fetch to a plain
    /// parse. The source read that follows reports the underlying problem.
    fn entry_path(&self, path: &Path) -> Option<PathBuf> {
        let canonical = fs::canonicalize(path).ok()?;
        let mtime = fs::metadata(&canonical).ok()?.modified().ok()?;

        let mut hasher = DefaultHasher::new();
        env!("CARGO_PKG_VERSION").hash(&mut hasher);
        canonical.hash(&mut hasher);
        mtime.hash(&mut hasher);
        Some(self.dir.join(format!("{:016x}.json", hasher.finish())))
    }

    fn read_entry<'a>(ctx: &'a ASTContext, entry: &Path) -> Result<Option<&'a Document<'a>>> {
        let serialized = match fs::read_to_string(entry) {
            Ok(serialized) => serialized,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(Error::new(format!("{error}"), None)),
        };
        let json = serde_json::from_str(&serialized)
            .map_err(|error| Error::new(format!("{error}"), None))?;
        document_from_json(ctx, &json).map(Some)
    }

    fn write_entry(&self, entry: &Path, document: &Document) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|error| Error::new(format!("{error}"), None))?;

        // Unique per process so concurrent writers never clobber each other's partial writes.
        let tmp = entry.with_extension(format!("tmp.{}", std::process::id()));
        let serialized = document_to_json(document).to_string();
        fs::write(&tmp, serialized).map_err(|error| Error::new(format!("{error}"), None))?;
        fs::rename(&tmp, entry).map_err(|error| {
            let _ = fs::remove_file(&tmp);
            Error::new(format!("{error}"), None)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::PrintNode;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("graphql-language-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn fetches_parse_and_populate_the_cache() {
        let dir = temp_dir("populate");
        let source = dir.join("query.graphql");
        fs::write(&source, "query Q {\n  id\n}").unwrap();

        let cache = ParseCache::new(&dir);
        let ctx = ASTContext::new();
        let parsed = cache.fetch(&ctx, &source).unwrap();

        let entry = cache.entry_path(&source).unwrap();
        assert!(entry.exists());

        // A second fetch decodes the stored entry and yields an equal document.
        let ctx2 = ASTContext::new();
        let cached = cache.fetch(&ctx2, &source).unwrap();
        assert_eq!(parsed.print(), cached.print());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn corrupt_entries_fall_back_to_parsing() {
        let dir = temp_dir("corrupt");
        let source = dir.join("query.graphql");
        fs::write(&source, "{ a }").unwrap();

        let cache = ParseCache::new(&dir);
        let ctx = ASTContext::new();
        cache.fetch(&ctx, &source).unwrap();

        let entry = cache.entry_path(&source).unwrap();
        fs::write(&entry, "not json at all").unwrap();

        let ctx2 = ASTContext::new();
        let document = cache.fetch(&ctx2, &source).unwrap();
        assert_eq!(document.print(), "{\n  a\n}");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn edited_files_miss_the_stale_entry() {
        let dir = temp_dir("stale");
        let source = dir.join("query.graphql");
        fs::write(&source, "{ a }").unwrap();

        let cache = ParseCache::new(&dir);
        let ctx = ASTContext::new();
        cache.fetch(&ctx, &source).unwrap();
        let first_entry = cache.entry_path(&source).unwrap();

        // Push the mtime forward so the rewrite is observable even on coarse clocks.
        fs::write(&source, "{ b }").unwrap();
        let later = std::time::SystemTime::now() + std::time::Duration::from_secs(2);
        let file = fs::File::options().append(true).open(&source).unwrap();
        file.set_modified(later).unwrap();
        drop(file);

        let ctx2 = ASTContext::new();
        let document = cache.fetch(&ctx2, &source).unwrap();
        assert_eq!(document.print(), "{\n  b\n}");
        assert_ne!(cache.entry_path(&source).unwrap(), first_entry);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_source_files_are_errors() {
        let dir = temp_dir("missing");
        let cache = ParseCache::new(&dir);
        let ctx = ASTContext::new();
        let error = cache.fetch(&ctx, &dir.join("nope.graphql")).unwrap_err();
        assert!(error.message().starts_with("Failed to read"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn concurrent_fetches_agree() {
        let dir = temp_dir("concurrent");
        let source = dir.join("query.graphql");
        fs::write(&source, "query Shared {\n  id\n  name\n}").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let dir = dir.clone();
                let source = source.clone();
                std::thread::spawn(move || {
                    let cache = ParseCache::new(&dir);
                    let ctx = ASTContext::new();
                    cache.fetch(&ctx, &source).unwrap().print()
                })
            })
            .collect();

        let expected = "query Shared {\n  id\n  name\n}";
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }

        // The entry left behind is a complete document, not a torn write.
        let cache = ParseCache::new(&dir);
        let entry = cache.entry_path(&source).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(entry).unwrap()).unwrap();
        let ctx = ASTContext::new();
        assert_eq!(document_from_json(&ctx, &json).unwrap().print(), expected);

        fs::remove_dir_all(&dir).unwrap();
    }
}
