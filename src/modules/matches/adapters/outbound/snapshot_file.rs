// JSON file implementation of the SnapshotStore port.
//
// Responsibilities
// - Treat a missing file as "nothing persisted yet".
// - Replace the file wholesale: write a sibling temp file, then rename it over the target,
//   so a crash mid-write leaves the previous snapshot intact.

use crate::modules::matches::core::ports::{SnapshotError, SnapshotStore};
use crate::modules::matches::core::snapshot::MatchSnapshot;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait::async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn load(&self) -> Result<Option<MatchSnapshot>, SnapshotError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot: MatchSnapshot = serde_json::from_slice(&bytes)?;
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &MatchSnapshot) -> Result<(), SnapshotError> {
        let bytes = serde_json::to_vec_pretty(snapshot)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, bytes).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}
