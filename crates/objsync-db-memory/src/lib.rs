//! In-memory storage backend for the objsync reconciliation job.
//!
//! Implements the same `ObjectStorage` contract as the PostgreSQL backend,
//! including the non-root filter on object lookups, and additionally counts
//! every write call so tests can assert exactly which writes a run emitted.

mod storage;

pub use storage::InMemoryStorage;
