//! Finlist Listing - the in-memory pipeline behind the account listing
//!
//! This crate transforms a fetched record set into a displayed, sorted,
//! filtered and edited view while keeping a canonical baseline
//! synchronized with the remote store.
//!
//! # Architecture
//!
//! ```text
//! Host platform (grid, toasts, navigation)
//!     ↓
//! ListingService  ← top-level entry point
//!     ↓
//! RecordStore / PendingEdits / EditOrchestrator
//!     ↓
//! finlist-core (record model, RecordBackend, Notifier)
//! ```
//!
//! The baseline snapshot is the last-fetched truth; the displayed view is
//! a sort/filter of it. Draft edits accumulate per record and are
//! submitted as one concurrent batch with an all-or-none observable
//! outcome.

mod comparator;
mod drafts;
mod filter;
mod orchestrator;
mod service;
mod store;
mod view;

#[cfg(test)]
mod test_helpers;

pub use comparator::*;
pub use drafts::*;
pub use filter::*;
pub use orchestrator::*;
pub use service::*;
pub use store::*;
pub use view::*;
