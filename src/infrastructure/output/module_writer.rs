//! Writes generated Elm modules into the destination directory.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use crate::domain::errors::GenerateError;
use crate::domain::ports::ModuleOutputPort;

/// File extension of generated modules.
const MODULE_EXTENSION: &str = "elm";

/// Module output backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct ElmModuleWriter {
    destination: PathBuf,
}

impl ElmModuleWriter {
    /// Creates writer targeting `destination`.
    #[must_use]
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// Path a module is written to.
    #[must_use]
    pub fn module_path(&self, module: &str) -> PathBuf {
        self.destination
            .join(format!("{module}.{MODULE_EXTENSION}"))
    }
}

#[async_trait]
impl ModuleOutputPort for ElmModuleWriter {
    async fn prepare(&self) -> Result<(), GenerateError> {
        if fs::try_exists(&self.destination).await.unwrap_or(false) {
            return Ok(());
        }

        info!(path = %self.destination.display(), "Creating destination directory");
        fs::create_dir_all(&self.destination)
            .await
            .map_err(|source| GenerateError::Write {
                path: self.destination.clone(),
                source,
            })
    }

    async fn write_module(&self, module: &str, source: &str) -> Result<(), GenerateError> {
        let path = self.module_path(module);
        debug!(path = %path.display(), bytes = source.len(), "Writing module");

        if let Err(err) = fs::write(&path, source).await {
            return Err(GenerateError::Write { path, source: err });
        }
        Ok(())
    }
}
