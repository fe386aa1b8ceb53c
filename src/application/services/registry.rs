//! In-memory short code registry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::domain::entities::{Entry, Submission};
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
use crate::utils::url_normalizer::normalize_url;

/// Upper bound on candidate codes tried for a single submission.
///
/// With 62^6 possible codes this is never reached in practice; it only guards
/// against a generator that keeps returning taken codes.
pub const MAX_CODE_ATTEMPTS: usize = 1000;

/// Registry-side record. `clicks` is atomic so resolutions only need the
/// shared lock.
#[derive(Debug)]
struct StoredEntry {
    target_url: String,
    created_at: DateTime<Utc>,
    clicks: AtomicU64,
}

impl StoredEntry {
    fn snapshot(&self, code: &str) -> Entry {
        Entry::new(
            code.to_string(),
            self.target_url.clone(),
            self.created_at,
            self.clicks.load(Ordering::Acquire),
        )
    }
}

#[derive(Debug, Default)]
struct Table {
    /// code -> entry, in insertion order
    entries: IndexMap<String, StoredEntry>,
    /// target_url -> code
    by_target: HashMap<String, String>,
}

/// Owning store of all short code mappings.
///
/// # Invariants
///
/// - No two entries share a code
/// - No two entries share a target URL
/// - Entries are never removed; only their click counters change
///
/// # Concurrency
///
/// The table sits behind an [`RwLock`]. [`Registry::submit`] holds the write
/// lock across deduplication, code selection, and insertion, so concurrent
/// submissions of the same URL create at most one entry. Click counters are
/// atomics bumped under the read lock, so concurrent resolutions never lose
/// an increment.
pub struct Registry {
    table: RwLock<Table>,
    generator: Arc<dyn CodeGenerator>,
}

impl Registry {
    /// Creates an empty registry drawing codes from `generator`.
    pub fn new(generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            table: RwLock::new(Table::default()),
            generator,
        }
    }

    /// Creates an empty registry with the production random generator.
    pub fn with_random_codes() -> Self {
        Self::new(Arc::new(RandomCodeGenerator::new()))
    }

    /// Registers a URL, or returns the entry it was already registered under.
    ///
    /// The input is normalized first (see [`normalize_url`]). Deduplication
    /// compares normalized strings exactly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or malformed.
    /// Returns [`AppError::Internal`] if no free code was found within
    /// [`MAX_CODE_ATTEMPTS`] or the table lock is poisoned.
    pub fn submit(&self, raw_url: &str) -> Result<Submission, AppError> {
        let target_url = normalize_url(raw_url).map_err(|e| {
            debug!("Rejected submission {:?}: {:?}", raw_url, e);
            AppError::bad_request(e.to_string())
        })?;

        let mut table = self.write()?;

        if let Some(code) = table.by_target.get(&target_url)
            && let Some(stored) = table.entries.get(code)
        {
            debug!("URL already registered as {}", code);
            return Ok(Submission::Existing(stored.snapshot(code)));
        }

        let code = self.unused_code(&table)?;
        let created_at = Utc::now();

        table.by_target.insert(target_url.clone(), code.clone());
        table.entries.insert(
            code.clone(),
            StoredEntry {
                target_url: target_url.clone(),
                created_at,
                clicks: AtomicU64::new(0),
            },
        );

        info!("Registered {} -> {}", code, target_url);

        Ok(Submission::Created(Entry::new(code, target_url, created_at, 0)))
    }

    /// Returns the target URL for `code` and counts one click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never minted.
    pub fn resolve(&self, code: &str) -> Result<String, AppError> {
        let table = self.read()?;

        let stored = table.entries.get(code).ok_or_else(not_found)?;
        let clicks = stored.clicks.fetch_add(1, Ordering::AcqRel) + 1;

        debug!("Resolved {} (clicks: {})", code, clicks);

        Ok(stored.target_url.clone())
    }

    /// Returns a snapshot of the entry for `code` without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never minted.
    pub fn stats(&self, code: &str) -> Result<Entry, AppError> {
        let table = self.read()?;

        table
            .entries
            .get(code)
            .map(|stored| stored.snapshot(code))
            .ok_or_else(not_found)
    }

    /// Returns snapshots of all entries, oldest first.
    pub fn list(&self) -> Result<Vec<Entry>, AppError> {
        let table = self.read()?;

        Ok(table
            .entries
            .iter()
            .map(|(code, stored)| stored.snapshot(code))
            .collect())
    }

    /// Number of registered entries.
    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.entries.len())
    }

    /// Draws codes until one is free in `table`.
    fn unused_code(&self, table: &Table) -> Result<String, AppError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = self.generator.generate();

            if !table.entries.contains_key(&code) {
                return Ok(code);
            }

            warn!("Code collision on {} (attempt {})", code, attempt);
        }

        Err(AppError::internal(format!(
            "Failed to generate unique code after {MAX_CODE_ATTEMPTS} attempts"
        )))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table>, AppError> {
        self.table
            .read()
            .map_err(|_| AppError::internal("Registry lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table>, AppError> {
        self.table
            .write()
            .map_err(|_| AppError::internal("Registry lock poisoned"))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_random_codes()
    }
}

fn not_found() -> AppError {
    AppError::not_found("Short URL not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::code_generator::{MockCodeGenerator, is_valid_code};
    use std::collections::HashSet;

    fn registry_with_codes(codes: &[&str]) -> Registry {
        let mut codes: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        codes.reverse();

        let mut generator = MockCodeGenerator::new();
        generator
            .expect_generate()
            .returning(move || codes.pop().expect("code sequence exhausted"));

        Registry::new(Arc::new(generator))
    }

    #[test]
    fn test_submit_creates_entry() {
        let registry = registry_with_codes(&["abc123"]);

        let submission = registry.submit("https://example.com").unwrap();

        assert!(submission.is_created());
        let entry = submission.into_entry();
        assert_eq!(entry.code, "abc123");
        assert_eq!(entry.target_url, "https://example.com");
        assert_eq!(entry.clicks, 0);
    }

    #[test]
    fn test_submit_normalizes_bare_domain() {
        let registry = Registry::default();

        let entry = registry.submit("example.com").unwrap().into_entry();
        assert_eq!(entry.target_url, "https://example.com");
        assert!(is_valid_code(&entry.code));
    }

    #[test]
    fn test_submit_keeps_http_scheme() {
        let registry = Registry::default();

        let entry = registry.submit("http://example.com").unwrap().into_entry();
        assert_eq!(entry.target_url, "http://example.com");
    }

    #[test]
    fn test_submit_rejects_invalid_input() {
        let registry = Registry::default();

        for input in ["", "   ", "not a url at all"] {
            let result = registry.submit(input);
            assert!(
                matches!(result, Err(AppError::Validation { .. })),
                "{input:?} should be rejected"
            );
        }

        assert_eq!(registry.len().unwrap(), 0);
    }

    #[test]
    fn test_submit_is_idempotent() {
        let mut generator = MockCodeGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|| "abc123".to_string());
        let registry = Registry::new(Arc::new(generator));

        let first = registry.submit("example.com").unwrap();
        registry.resolve("abc123").unwrap();
        let second = registry.submit("example.com").unwrap();

        assert!(first.is_created());
        assert!(!second.is_created());
        assert_eq!(second.entry().code, "abc123");
        assert_eq!(second.entry().clicks, 1);
        assert_eq!(second.entry().created_at, first.entry().created_at);
        assert_eq!(registry.len().unwrap(), 1);
    }

    #[test]
    fn test_submit_dedup_is_literal() {
        let registry = registry_with_codes(&["AAAAAA", "BBBBBB", "CCCCCC"]);

        let a = registry.submit("https://example.com").unwrap().into_entry();
        let b = registry.submit("https://example.com/").unwrap().into_entry();
        let c = registry.submit("https://EXAMPLE.com").unwrap().into_entry();

        assert_eq!(a.code, "AAAAAA");
        assert_eq!(b.code, "BBBBBB");
        assert_eq!(c.code, "CCCCCC");
    }

    #[test]
    fn test_submit_retries_on_collision() {
        let registry = registry_with_codes(&["AAAAAA", "AAAAAA", "AAAAAA", "BBBBBB"]);

        let first = registry.submit("one.example").unwrap().into_entry();
        let second = registry.submit("two.example").unwrap().into_entry();

        assert_eq!(first.code, "AAAAAA");
        assert_eq!(second.code, "BBBBBB");
        assert_eq!(registry.len().unwrap(), 2);
    }

    #[test]
    fn test_submit_gives_up_after_max_attempts() {
        let mut generator = MockCodeGenerator::new();
        generator
            .expect_generate()
            .times(1 + MAX_CODE_ATTEMPTS)
            .returning(|| "AAAAAA".to_string());
        let registry = Registry::new(Arc::new(generator));

        registry.submit("one.example").unwrap();
        let result = registry.submit("two.example");

        assert!(matches!(result, Err(AppError::Internal { .. })));
        assert_eq!(registry.len().unwrap(), 1);
    }

    #[test]
    fn test_distinct_urls_get_distinct_codes() {
        let registry = Registry::default();

        for i in 0..500 {
            registry.submit(&format!("example.com/page/{i}")).unwrap();
        }

        let entries = registry.list().unwrap();
        let codes: HashSet<_> = entries.iter().map(|e| e.code.clone()).collect();
        assert_eq!(entries.len(), 500);
        assert_eq!(codes.len(), 500);
    }

    #[test]
    fn test_resolve_counts_clicks() {
        let registry = registry_with_codes(&["abc123"]);
        registry.submit("example.com").unwrap();

        for _ in 0..5 {
            assert_eq!(registry.resolve("abc123").unwrap(), "https://example.com");
        }

        assert_eq!(registry.stats("abc123").unwrap().clicks, 5);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = registry_with_codes(&["abcDEF"]);
        registry.submit("example.com").unwrap();

        assert!(registry.resolve("ABCDEF").is_err());
        assert!(registry.resolve("abcDEF").is_ok());
    }

    #[test]
    fn test_unknown_code() {
        let registry = Registry::default();

        assert!(matches!(
            registry.resolve("ZZZZZZ"),
            Err(AppError::NotFound { .. })
        ));
        assert!(matches!(
            registry.stats("ZZZZZZ"),
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn test_stats_has_no_side_effects() {
        let registry = registry_with_codes(&["abc123"]);
        registry.submit("example.com").unwrap();

        registry.stats("abc123").unwrap();
        registry.stats("abc123").unwrap();

        assert_eq!(registry.stats("abc123").unwrap().clicks, 0);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let registry = registry_with_codes(&["zzzzzz", "aaaaaa", "mmmmmm"]);

        registry.submit("a.example").unwrap();
        registry.submit("b.example").unwrap();
        registry.submit("c.example").unwrap();

        let targets: Vec<_> = registry
            .list()
            .unwrap()
            .into_iter()
            .map(|e| e.target_url)
            .collect();

        assert_eq!(
            targets,
            vec!["https://a.example", "https://b.example", "https://c.example"]
        );
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let registry = registry_with_codes(&["AAAAAA", "BBBBBB"]);
        registry.submit("a.example").unwrap();

        let snapshot = registry.list().unwrap();
        registry.resolve("AAAAAA").unwrap();
        registry.submit("b.example").unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].clicks, 0);
        assert_eq!(registry.list().unwrap().len(), 2);
    }

    #[test]
    fn test_concurrent_resolves_are_all_counted() {
        let registry = registry_with_codes(&["abc123"]);
        registry.submit("example.com").unwrap();
        let registry = &registry;

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(move || {
                    for _ in 0..250 {
                        registry.resolve("abc123").unwrap();
                    }
                });
            }
        });

        assert_eq!(registry.stats("abc123").unwrap().clicks, 2000);
    }

    #[test]
    fn test_concurrent_submissions_create_one_entry() {
        let registry = Registry::default();
        let shared = &registry;

        let codes: Vec<String> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|_| s.spawn(move || shared.submit("example.com").unwrap().into_entry().code))
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let unique: HashSet<_> = codes.into_iter().collect();
        assert_eq!(unique.len(), 1);
        assert_eq!(registry.len().unwrap(), 1);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let registry = Registry::default();

        let created = registry.submit("github.com").unwrap().into_entry();
        assert_eq!(created.target_url, "https://github.com");
        assert_eq!(created.clicks, 0);

        assert_eq!(
            registry.resolve(&created.code).unwrap(),
            "https://github.com"
        );
        assert_eq!(registry.stats(&created.code).unwrap().clicks, 1);

        let again = registry.submit("github.com").unwrap();
        assert!(!again.is_created());
        assert_eq!(again.entry().code, created.code);
        assert_eq!(again.entry().clicks, 1);
    }
}
