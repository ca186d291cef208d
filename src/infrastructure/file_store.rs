use crate::domain::application::{LoanApplication, Ticket};
use crate::domain::ports::ApplicationStore;
use crate::error::{LoanError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use tokio::sync::Mutex;

/// Extension of record files under the store root.
pub const FILE_EXTENSION: &str = "loan";

/// File-backed store keeping one JSON record per application id.
///
/// Records live at `<root>/<id>.loan`. Approvals hold a per-id lock across
/// the fetch/flip/store sequence so concurrent approvals of the same
/// application cannot lose the update; a raw `store` racing an `approve` on
/// the same id is still unserialized.
pub struct FileStore {
    root: PathBuf,
    locks: StdMutex<HashMap<u64, Arc<Mutex<()>>>>,
}

impl FileStore {
    /// Opens a store rooted at `root`, creating the directory if absent.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            locks: StdMutex::new(HashMap::new()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, id: u64) -> PathBuf {
        self.root.join(format!("{id}.{FILE_EXTENSION}"))
    }

    fn read_record(&self, id: u64) -> Result<LoanApplication> {
        let bytes = match fs::read(self.record_path(id)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LoanError::TicketNotFound(id));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn write_record(&self, application: &LoanApplication) -> Result<Ticket> {
        fs::create_dir_all(&self.root)?;
        fs::write(
            self.record_path(application.id),
            serde_json::to_vec(application)?,
        )?;
        tracing::debug!(id = application.id, "wrote application record");
        Ok(Ticket::new(application.id))
    }

    fn lock_for(&self, id: u64) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().expect("lock map poisoned");
        locks.entry(id).or_default().clone()
    }
}

#[async_trait]
impl ApplicationStore for FileStore {
    async fn store(&self, application: LoanApplication) -> Result<Ticket> {
        self.write_record(&application)
    }

    async fn fetch(&self, id: u64) -> Result<LoanApplication> {
        self.read_record(id)
    }

    async fn approve(&self, id: u64) -> Result<Ticket> {
        let lock = self.lock_for(id);
        let _guard = lock.lock().await;
        let mut application = self.read_record(id)?;
        application.approved = true;
        self.write_record(&application)
    }

    async fn last_id(&self) -> Result<u64> {
        let mut last = 0;
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(OsStr::to_str) != Some(FILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(OsStr::to_str)
                && let Ok(id) = stem.parse::<u64>()
            {
                last = last.max(id);
            }
        }
        Ok(last)
    }
}
