use super::doc_store::DocStore;
use super::fs_backend::FsBackend;
use std::path::{Path, PathBuf};

pub type FileStore = DocStore<FsBackend>;

impl FileStore {
    pub fn new_fs(data_dir: PathBuf) -> Self {
        DocStore::with_backend(FsBackend::new(data_dir))
    }

    pub fn data_dir(&self) -> &Path {
        self.backend.root()
    }
}
