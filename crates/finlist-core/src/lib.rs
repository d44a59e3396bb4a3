//! Finlist Core - abstractions shared by the account listing pipeline
//!
//! This crate provides the fundamental traits and types the listing layer
//! depends on:
//!
//! - `RecordBackend` - Trait for the remote fetch/persistence store
//! - `Notifier` - Trait for the user-facing notification sink
//! - `AccountRecord`, `FieldKey`, `FieldValue` - the record model
//! - `ColumnSpec` - the display column declarations

mod backend;
mod columns;
mod error;
mod notify;
mod record;
mod types;

pub use backend::*;
pub use columns::*;
pub use error::*;
pub use notify::*;
pub use record::*;
pub use types::*;
