//! # Command Layer
//!
//! This module contains the **core business logic** of notekeep. Each operation lives
//! in its own submodule as plain functions over a [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Load the collections they need, mutate them in memory, write them back
//! - Enforce the live/trash disjointness and the write ordering of cross-collection moves
//! - Apply the retention window when the trash is read
//! - Return typed data, never strings for display
//!
//! ## What Commands Do NOT Do
//!
//! - **Presentation**: no formatting, no dates rendered for humans
//! - **Retries**: a failed store write is returned to the caller as-is
//! - **Notifications**: callers re-read collections after a mutation
//!
//! ## Not Found vs Failure
//!
//! Targeted mutations return [`Outcome`]. An id that is not in the relevant
//! collection yields [`Outcome::NotFound`], which is not an error. `Err` is
//! reserved for storage and serialization failures.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and the `StoreFixture` builder, and pass explicit instants to
//! the `*_at` variants for anything time dependent.
//!
//! ## Command Modules
//!
//! - [`create`]: Create notes
//! - [`get`]: List and fetch live notes
//! - [`update`]: Replace a live note's contents
//! - [`delete`]: Soft-delete notes into the trash
//! - [`move_notes`]: File notes into folders
//! - [`trash`]: List the trash, applying expiry
//! - [`restore`]: Move trashed notes back to live
//! - [`purge`]: Permanently remove trashed notes
//! - [`folders`]: Folder CRUD with note unlinking
//! - [`doctor`]: Verify and fix data consistency

pub mod create;
pub mod delete;
pub mod doctor;
pub mod folders;
pub mod get;
pub mod move_notes;
pub mod purge;
pub mod restore;
pub mod trash;
pub mod update;

/// Result of a mutation that targets a single record by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T = ()> {
    /// The record existed and the change was persisted.
    Done(T),
    /// No record with that id exists in the targeted collection. Nothing was written.
    NotFound,
}

impl<T> Outcome<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Done(value) => Some(value),
            Outcome::NotFound => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Done(value) => Outcome::Done(f(value)),
            Outcome::NotFound => Outcome::NotFound,
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Outcome::Done(value),
            None => Outcome::NotFound,
        }
    }
}
