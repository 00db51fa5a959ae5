//! Generated module output port definition.

use async_trait::async_trait;

use crate::domain::errors::GenerateError;

/// Port for persisting generated Elm modules.
#[async_trait]
pub trait ModuleOutputPort: Send + Sync {
    /// Makes sure the destination can receive modules.
    async fn prepare(&self) -> Result<(), GenerateError>;

    /// Stores the source of `module`, replacing any previous version.
    async fn write_module(&self, module: &str, source: &str) -> Result<(), GenerateError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    /// Mock output keeping modules in memory.
    #[derive(Default)]
    pub struct InMemoryOutput {
        modules: RwLock<BTreeMap<String, String>>,
    }

    impl InMemoryOutput {
        /// Returns the source written for `module`.
        pub async fn module(&self, module: &str) -> Option<String> {
            self.modules.read().await.get(module).cloned()
        }

        /// Returns all module names written, sorted.
        pub async fn module_names(&self) -> Vec<String> {
            self.modules.read().await.keys().cloned().collect()
        }
    }

    #[async_trait]
    impl ModuleOutputPort for InMemoryOutput {
        async fn prepare(&self) -> Result<(), GenerateError> {
            Ok(())
        }

        async fn write_module(&self, module: &str, source: &str) -> Result<(), GenerateError> {
            self.modules
                .write()
                .await
                .insert(module.to_string(), source.to_string());
            Ok(())
        }
    }
}
