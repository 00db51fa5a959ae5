//! End-to-end generation of the Elm album storage modules.

use std::sync::Arc;

use tracing::{error, info};

use crate::application::services::{
    INDEX_MODULE, TYPES_MODULE, assign_module_names, prepare_albums, render_artist_module,
    render_index_module, render_types_module,
};
use crate::domain::entities::{ArtistSource, ModuleName};
use crate::domain::errors::GenerateError;
use crate::domain::ports::{CatalogPort, ModuleOutputPort};

use super::ResolveDimensionsUseCase;

/// Artist that could not be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistFailure {
    /// Catalog artist identifier.
    pub artist_id: String,
    /// Rendered error.
    pub reason: String,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Modules written, in catalog order.
    pub generated: Vec<ModuleName>,
    /// Artists skipped because of an error.
    pub failed: Vec<ArtistFailure>,
}

impl GenerateReport {
    /// Number of artists attempted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.generated.len() + self.failed.len()
    }

    /// Converts the report into an error if any artist failed.
    ///
    /// # Errors
    /// Returns `GenerateError::ArtistsFailed` when at least one artist failed.
    pub fn into_result(self) -> Result<Self, GenerateError> {
        if self.failed.is_empty() {
            Ok(self)
        } else {
            Err(GenerateError::ArtistsFailed {
                failed: self.failed.len(),
                total: self.total(),
            })
        }
    }
}

/// Fetches the catalog and writes one module per artist plus the shared modules.
pub struct GenerateModulesUseCase {
    catalog: Arc<dyn CatalogPort>,
    output: Arc<dyn ModuleOutputPort>,
    resolver: ResolveDimensionsUseCase,
}

impl GenerateModulesUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(
        catalog: Arc<dyn CatalogPort>,
        output: Arc<dyn ModuleOutputPort>,
        resolver: ResolveDimensionsUseCase,
    ) -> Self {
        Self {
            catalog,
            output,
            resolver,
        }
    }

    /// Runs the generation.
    ///
    /// Artists are processed one after another; a failing artist is recorded
    /// in the report and the run continues with the next one. The index
    /// module lists only artists whose module was written.
    ///
    /// # Errors
    /// Returns error if the catalog index cannot be read, short names are
    /// empty or collide, or a module cannot be written.
    pub async fn execute(&self) -> Result<GenerateReport, GenerateError> {
        self.output.prepare().await?;

        let sources = self.catalog.artist_sources().await?;
        info!(count = sources.len(), "Fetched artist sources");

        let named = assign_module_names(&sources)?;
        let mut report = GenerateReport::default();

        for (source, module) in named {
            info!(artist_id = %source.id, module = %module, "Handling artist");

            match self.generate_artist(&source, &module).await {
                Ok(album_count) => {
                    info!(module = %module, albums = album_count, "Artist module written");
                    report.generated.push(module);
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    error!(artist_id = %source.id, error = %e, "Failed to generate artist module");
                    report.failed.push(ArtistFailure {
                        artist_id: source.id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        self.output
            .write_module(TYPES_MODULE, &render_types_module())
            .await?;
        self.output
            .write_module(INDEX_MODULE, &render_index_module(&report.generated))
            .await?;

        info!(
            generated = report.generated.len(),
            failed = report.failed.len(),
            "Generation finished"
        );

        Ok(report)
    }

    async fn generate_artist(
        &self,
        source: &ArtistSource,
        module: &ModuleName,
    ) -> Result<usize, GenerateError> {
        let (mut artist, albums) = tokio::try_join!(
            self.catalog.artist_details(&source.id),
            self.catalog.albums(&source.id)
        )?;

        let prepared = prepare_albums(&source.id, albums)?;
        self.resolver.execute(&mut artist).await?;

        let contents = render_artist_module(module, &artist, &prepared);
        self.output
            .write_module(&module.storage_module(), &contents)
            .await?;

        Ok(prepared.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Album, Artist, ImageRef};
    use crate::domain::ports::mocks::{FixedDimensionPort, InMemoryCatalog, InMemoryOutput};

    fn image(url: &str, dims: Option<(u32, u32)>) -> ImageRef {
        ImageRef {
            url: url.to_string(),
            width: dims.map(|d| d.0),
            height: dims.map(|d| d.1),
        }
    }

    fn artist(id: &str, short_name: &str, images: Vec<ImageRef>) -> Artist {
        Artist {
            id: id.to_string(),
            name: short_name.to_uppercase(),
            http_friendly_short_name: short_name.to_string(),
            images,
        }
    }

    fn album(id: &str) -> Album {
        Album {
            id: id.to_string(),
            name: format!("Album {id}"),
            url_to_open: None,
            images: vec![image(&format!("https://img/{id}"), Some((300, 300)))],
        }
    }

    fn use_case(
        catalog: InMemoryCatalog,
        dimensions: FixedDimensionPort,
    ) -> (GenerateModulesUseCase, Arc<InMemoryOutput>) {
        let output = Arc::new(InMemoryOutput::default());
        let use_case = GenerateModulesUseCase::new(
            Arc::new(catalog),
            output.clone(),
            ResolveDimensionsUseCase::new(Arc::new(dimensions)),
        );
        (use_case, output)
    }

    #[tokio::test]
    async fn test_generates_all_modules() {
        let catalog = InMemoryCatalog::default()
            .with_artist(
                artist("1", "queen", vec![image("https://img/queen", None)]),
                vec![album("q1"), album("q2")],
            )
            .with_artist(artist("2", "abba", vec![]), vec![album("a1")]);
        let dimensions = FixedDimensionPort::default().with("https://img/queen", 640, 480);
        let (use_case, output) = use_case(catalog, dimensions);

        let report = use_case.execute().await.unwrap();

        assert_eq!(report.generated.len(), 2);
        assert!(report.failed.is_empty());
        assert_eq!(
            output.module_names().await,
            vec![
                "AlbumStorageAbba",
                "AlbumStorageQueen",
                "AlbumStorageTypes",
                "ArtistsWithAlbums"
            ]
        );
        let queen = output.module("AlbumStorageQueen").await.unwrap();
        assert!(queen.contains("width = Just 640, height = Just 480"));
        let index = output.module("ArtistsWithAlbums").await.unwrap();
        assert!(index.contains("import AlbumStorageQueen\nimport AlbumStorageAbba\n"));
    }

    #[tokio::test]
    async fn test_failing_artist_does_not_stop_others() {
        let catalog = InMemoryCatalog::default()
            .with_artist(
                artist("1", "queen", vec![image("https://img/unreachable", None)]),
                vec![album("q1")],
            )
            .with_artist(artist("2", "abba", vec![]), vec![])
            .with_dangling_source("3", "ghost")
            .with_artist(artist("4", "toto", vec![]), vec![album("t1")]);
        let (use_case, output) = use_case(catalog, FixedDimensionPort::default());

        let report = use_case.execute().await.unwrap();

        let generated: Vec<_> = report.generated.iter().map(ModuleName::as_str).collect();
        assert_eq!(generated, vec!["Toto"]);
        let failed: Vec<_> = report.failed.iter().map(|f| f.artist_id.as_str()).collect();
        assert_eq!(failed, vec!["1", "2", "3"]);
        assert!(output.module("AlbumStorageQueen").await.is_none());

        let index = output.module("ArtistsWithAlbums").await.unwrap();
        assert!(index.contains("AlbumStorageToto"));
        assert!(!index.contains("AlbumStorageAbba"));

        let err = report.into_result().unwrap_err();
        assert!(matches!(err, GenerateError::ArtistsFailed { failed: 3, total: 4 }));
    }

    #[tokio::test]
    async fn test_duplicate_short_names_abort_before_writing() {
        let catalog = InMemoryCatalog::default()
            .with_artist(artist("1", "queen", vec![]), vec![album("q1")])
            .with_dangling_source("2", "queen");
        let (use_case, output) = use_case(catalog, FixedDimensionPort::default());

        let err = use_case.execute().await.unwrap_err();

        assert!(matches!(err, GenerateError::DuplicateShortNames { .. }));
        assert!(output.module_names().await.is_empty());
    }

    #[test]
    fn test_clean_report_into_result() {
        let report = GenerateReport::default();
        assert!(report.into_result().is_ok());
    }
}
