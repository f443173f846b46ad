//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point that presentation collaborators (screens, CLIs, bindings) use.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Supplies the clock** for time-dependent commands
//! - **Returns typed data** (`Note`, `Folder`, [`Outcome`], reports)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Change notifications**: callers re-read `list_live`, `list_trash` or
//!   `list_folders` after a mutation to refresh their view
//! - **Presentation**: dates, counts and messages are formatted by the caller
//!
//! ## Single Writer
//!
//! Every method that can write takes `&mut self`, including [`NotekeepApi::list_trash`],
//! because reading the trash persists expiry. The borrow checker therefore
//! serializes each read-modify-write cycle per instance. Hosts that share one
//! instance across threads wrap it in a `Mutex`. Several processes writing the
//! same data directory are not coordinated: the last writer wins.
//!
//! ## Generic Over DataStore
//!
//! `NotekeepApi<S: DataStore>` is generic over the storage backend:
//! - Production: `NotekeepApi<FileStore>`
//! - Testing: `NotekeepApi<InMemoryStore>`

use crate::commands::{self, Outcome};
use crate::error::Result;
use crate::model::{Folder, Note};
use crate::retention;
use crate::store::DataStore;
use chrono::{DateTime, Utc};

pub use crate::commands::doctor::DoctorReport;
pub use crate::commands::folders::FolderDeletion;
pub use crate::commands::get::FolderFilter;

/// The main API facade for notekeep operations.
pub struct NotekeepApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> NotekeepApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // --- Notes ---

    pub fn list_live(&self) -> Result<Vec<Note>> {
        commands::get::list(&self.store)
    }

    pub fn get(&self, id: &str) -> Result<Option<Note>> {
        commands::get::run(&self.store, id)
    }

    pub fn list_in_folder(&self, filter: &FolderFilter) -> Result<Vec<Note>> {
        commands::get::list_filtered(&self.store, filter)
    }

    pub fn create(&mut self, title: impl Into<String>, content: impl Into<String>) -> Result<Note> {
        commands::create::run(&mut self.store, title.into(), content.into())
    }

    pub fn update(&mut self, note: Note) -> Result<Outcome<Note>> {
        commands::update::run(&mut self.store, note)
    }

    pub fn edit(
        &mut self,
        id: &str,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Outcome<Note>> {
        commands::update::edit(&mut self.store, id, title.into(), content.into())
    }

    pub fn soft_delete(&mut self, id: &str) -> Result<Outcome<Note>> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn soft_delete_many<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<Vec<Note>> {
        commands::delete::run_many(&mut self.store, ids)
    }

    pub fn move_to_folder(&mut self, id: &str, folder_id: Option<&str>) -> Result<Outcome<Note>> {
        commands::move_notes::run(&mut self.store, id, folder_id)
    }

    pub fn move_many_to_folder<I: AsRef<str>>(
        &mut self,
        ids: &[I],
        folder_id: Option<&str>,
    ) -> Result<usize> {
        commands::move_notes::run_many(&mut self.store, ids, folder_id)
    }

    // --- Trash ---

    pub fn list_trash(&mut self) -> Result<Vec<Note>> {
        commands::trash::run(&mut self.store)
    }

    pub fn restore(&mut self, id: &str) -> Result<Outcome<Note>> {
        commands::restore::run(&mut self.store, id)
    }

    pub fn purge(&mut self, id: &str) -> Result<Outcome<Note>> {
        commands::purge::run(&mut self.store, id)
    }

    pub fn purge_many<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<usize> {
        commands::purge::run_many(&mut self.store, ids).map(|purged| purged.len())
    }

    pub fn empty_trash(&mut self) -> Result<usize> {
        commands::purge::empty(&mut self.store)
    }

    /// Days left before a note deleted at `deleted_at` expires, rounded up.
    pub fn remaining_days(&self, deleted_at: DateTime<Utc>) -> i64 {
        retention::remaining_days(deleted_at, Utc::now())
    }

    pub fn expires_at(&self, deleted_at: DateTime<Utc>) -> DateTime<Utc> {
        retention::expires_at(deleted_at)
    }

    // --- Folders ---

    pub fn list_folders(&self) -> Result<Vec<Folder>> {
        commands::folders::list(&self.store)
    }

    pub fn create_folder(&mut self, name: &str) -> Result<Option<Folder>> {
        commands::folders::create(&mut self.store, name)
    }

    pub fn delete_folders<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<FolderDeletion> {
        commands::folders::delete_many(&mut self.store, ids)
    }

    // --- Maintenance ---

    pub fn doctor(&mut self) -> Result<DoctorReport> {
        commands::doctor::run(&mut self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use chrono::Duration;

    fn make_api() -> NotekeepApi<InMemoryStore> {
        NotekeepApi::new(InMemoryStore::new())
    }

    #[test]
    fn shopping_scenario() {
        let mut api = make_api();
        let note = api.create("Shopping", "milk, eggs").unwrap();
        assert_eq!(note.character_count, 10);

        api.soft_delete(&note.id).unwrap();
        assert!(api.list_live().unwrap().is_empty());
        let trash = api.list_trash().unwrap();
        assert_eq!(trash.len(), 1);
        assert_eq!(trash[0].id, note.id);
        let deleted_at = trash[0].deleted_at.unwrap();
        assert!((Utc::now() - deleted_at).num_seconds().abs() < 5);

        api.restore(&note.id).unwrap();
        let live = api.list_live().unwrap();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id, note.id);
        assert!(live[0].deleted_at.is_none());
        assert!(api.list_trash().unwrap().is_empty());
    }

    #[test]
    fn folder_methods_dispatch() {
        let mut api = make_api();
        let folder = api.create_folder(" Work ").unwrap().unwrap();
        assert!(api.create_folder("  ").unwrap().is_none());

        let a = api.create("A", "").unwrap();
        let b = api.create("B", "").unwrap();
        assert!(api
            .move_to_folder(&a.id, Some(folder.id.as_str()))
            .unwrap()
            .is_done());
        assert_eq!(api.move_many_to_folder(&[b.id.as_str()], None).unwrap(), 1);

        let filed = api
            .list_in_folder(&FolderFilter::In(folder.id.clone()))
            .unwrap();
        assert_eq!(filed.len(), 1);

        let report = api.delete_folders(&[folder.id.as_str()]).unwrap();
        assert_eq!(report.folders_removed, 1);
        assert_eq!(report.notes_unlinked, 1);
        assert!(api.list_folders().unwrap().is_empty());
    }

    #[test]
    fn trash_methods_dispatch() {
        let mut api = make_api();
        let a = api.create("A", "").unwrap();
        let b = api.create("B", "").unwrap();
        let c = api.create("C", "").unwrap();

        assert_eq!(
            api.soft_delete_many(&[a.id.as_str(), b.id.as_str(), c.id.as_str()])
                .unwrap()
                .len(),
            3
        );
        assert!(api.purge(&a.id).unwrap().is_done());
        assert!(api.purge(&a.id).unwrap().is_not_found());
        assert_eq!(api.purge_many(&[b.id.as_str()]).unwrap(), 1);
        assert_eq!(api.empty_trash().unwrap(), 1);
        assert!(api.list_trash().unwrap().is_empty());
    }

    #[test]
    fn not_found_is_distinct_from_success() {
        let mut api = make_api();
        let stranger = Note::new("x".into(), "".into());
        assert!(api.update(stranger).unwrap().is_not_found());
        assert!(api.edit("nope", "t", "c").unwrap().is_not_found());
        assert!(api.soft_delete("nope").unwrap().is_not_found());
        assert!(api.move_to_folder("nope", None).unwrap().is_not_found());
        assert!(api.restore("nope").unwrap().is_not_found());
        assert!(api.purge("nope").unwrap().is_not_found());
        assert!(api.get("nope").unwrap().is_none());
    }

    #[test]
    fn remaining_days_is_informational() {
        let mut api = make_api();
        let note = api.create("A", "").unwrap();
        api.soft_delete(&note.id).unwrap();

        let deleted_at = api.list_trash().unwrap()[0].deleted_at.unwrap();
        assert_eq!(api.remaining_days(deleted_at), 30);
        assert_eq!(api.expires_at(deleted_at) - deleted_at, Duration::days(30));

        // Asking about an expired instant purges nothing
        assert!(api.remaining_days(Utc::now() - Duration::days(40)) < 0);
        assert_eq!(api.store().load_trash().unwrap().len(), 1);
    }

    #[test]
    fn doctor_dispatches() {
        let mut api = make_api();
        api.create("A", "").unwrap();
        assert!(api.doctor().unwrap().is_clean());
    }
}
