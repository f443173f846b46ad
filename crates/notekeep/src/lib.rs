//! # notekeep
//!
//! Local storage for notes and folders with a soft-delete trash.
//!
//! Notes live in one of two collections: **live** or **trash**. Deleting a note
//! moves it to the trash and stamps `deletedAt`. Trashed notes can be restored
//! for 30 days and are purged the next time the trash is read after that.
//! Folders are a flat, optional grouping. Deleting a folder unfiles its notes.
//!
//! ## Layers
//!
//! - [`api`]: The facade hosts talk to. Generic over the store.
//! - [`commands`]: The operations themselves.
//! - [`store`]: Typed collections over a raw document backend.
//! - [`model`] and [`retention`]: Records and the expiry arithmetic.
//! - [`init`], [`config`] and [`logging`]: Process startup.
//!
//! ```ignore
//! let mut ctx = notekeep::init::initialize(None)?;
//! let note = ctx.api.create("Shopping", "milk, eggs")?;
//! ctx.api.soft_delete(&note.id)?;
//! assert_eq!(ctx.api.list_trash()?.len(), 1);
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod retention;
pub mod store;
