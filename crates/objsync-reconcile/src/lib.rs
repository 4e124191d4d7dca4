//! Document-driven reconciliation pipeline.
//!
//! A run reads all pending documents, extracts the owner/status transitions
//! their payloads request, resolves the non-root objects they reference,
//! joins the three sources into per-(document, object) actions, strips
//! absent fields, and applies each action as a conditional update before
//! marking the originating document processed.
//!
//! The pipeline is storage-agnostic: everything goes through the
//! [`ObjectStorage`](objsync_storage::ObjectStorage) trait.
//!
//! ```text
//! documents ──► extract ─┐
//!           └─► expand ──┼─► resolve ──► assemble ──► sanitize ──► apply
//! ```

pub mod apply;
pub mod assemble;
pub mod error;
pub mod extract;
pub mod resolve;
pub mod run;
pub mod sanitize;
pub mod summary;

pub use apply::apply_actions;
pub use assemble::assemble_actions;
pub use error::{ReconcileError, UpdateTarget};
pub use extract::{expand_references, extract_operation};
pub use resolve::resolve_objects;
pub use run::run_reconciliation;
pub use sanitize::sanitize_actions;
pub use summary::RunSummary;
