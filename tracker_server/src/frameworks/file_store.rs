// JSON file adapter for the position store: one `<slug>.json` per drone.

use async_trait::async_trait;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::entities::{DroneId, Position};
use crate::domain::errors::StoreError;
use crate::domain::ports::PositionStore;

#[derive(Clone, Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn path_for(&self, drone: DroneId) -> PathBuf {
        self.data_dir.join(format!("{}.json", drone.slug()))
    }

    // Create the data directory and write home positions for drones without a file.
    pub async fn seed_defaults(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.data_dir).await?;

        for drone in DroneId::ALL {
            let path = self.path_for(drone);
            if tokio::fs::try_exists(&path).await? {
                continue;
            }
            self.set(drone, drone.home())
                .await
                .map_err(|err| std::io::Error::other(format!("failed to seed {drone}: {err:?}")))?;
            info!(%drone, path = %path.display(), "seeded default position");
        }

        Ok(())
    }
}

#[async_trait]
impl PositionStore for JsonFileStore {
    async fn get(&self, drone: DroneId) -> Result<Position, StoreError> {
        let bytes = match tokio::fs::read(self.path_for(drone)).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Err(StoreError::NotFound),
            Err(err) => return Err(StoreError::Failure(err.to_string())),
        };

        serde_json::from_slice(&bytes).map_err(|err| StoreError::Failure(err.to_string()))
    }

    async fn set(&self, drone: DroneId, position: Position) -> Result<(), StoreError> {
        let json =
            serde_json::to_vec(&position).map_err(|err| StoreError::Failure(err.to_string()))?;
        let data_dir = self.data_dir.clone();
        let target = self.path_for(drone);

        tokio::task::spawn_blocking(move || write_atomically(&data_dir, &target, &json))
            .await
            .map_err(|err| StoreError::Failure(err.to_string()))?
            .map_err(|err| StoreError::Failure(err.to_string()))
    }
}

// Readers never see half a file: write beside the target, then move it into place.
// The temp file is removed on drop if anything fails before the persist.
fn write_atomically(data_dir: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tempfile::NamedTempFile::new_in(data_dir)?;
    file.write_all(bytes)?;
    file.persist(target).map_err(|err| err.error)?;
    Ok(())
}
