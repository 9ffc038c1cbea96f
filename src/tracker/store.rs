use std::{
    future::Future,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Result;
use fs4::tokio::AsyncFileExt;
use tokio::{
    fs::File,
    io::{AsyncReadExt, AsyncWriteExt},
};
use tracing::debug;

use super::entities::TrackerState;

pub const DATA_FILE_NAME: &str = "urgeshield_data.json";

/// Interface for abstracting storage of the tracker document.
pub trait StateStore {
    /// Reads the persisted document. A missing file yields the zero-value
    /// state; a malformed one is an error, there is no recovery for it.
    fn load(&self) -> impl Future<Output = Result<TrackerState>>;

    /// Rewrites the whole document. Each user action is a full
    /// read-modify-write, so there is never a partial update to preserve.
    fn save(&self, state: &TrackerState) -> impl Future<Output = Result<()>>;
}

/// The main realization of [StateStore]. The document is one JSON file inside
/// the application data directory, guarded by an advisory lock while touched.
pub struct StateStoreImpl {
    data_file: PathBuf,
}

impl StateStoreImpl {
    pub fn new(data_dir: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&data_dir)?;

        Ok(Self {
            data_file: data_dir.join(DATA_FILE_NAME),
        })
    }

    async fn read_document(path: &Path) -> Result<Option<TrackerState>> {
        let mut file = match File::open(path).await {
            Ok(v) => v,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        file.lock_shared()?;
        let mut contents = String::new();
        let read = file.read_to_string(&mut contents).await;
        file.unlock_async().await?;
        read?;

        Ok(Some(serde_json::from_str(&contents)?))
    }

    async fn write_document(file: &mut File, state: &TrackerState) -> Result<()> {
        let buffer = serde_json::to_vec(state)?;
        file.write_all(&buffer).await?;
        file.flush().await?;
        Ok(())
    }
}

impl StateStore for StateStoreImpl {
    async fn load(&self) -> Result<TrackerState> {
        match Self::read_document(&self.data_file).await? {
            Some(state) => Ok(state),
            None => {
                debug!("No document at {:?}, treating as first use", self.data_file);
                Ok(TrackerState::default())
            }
        }
    }

    async fn save(&self, state: &TrackerState) -> Result<()> {
        let mut file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.data_file)
            .await?;
        file.lock_exclusive()?;
        let result = Self::write_document(&mut file, state).await;
        file.unlock_async().await?;
        result
    }
}
