//! Application services.

pub mod album_preparer;
pub mod dimension_retry;
pub mod elm_renderer;

pub use album_preparer::{PreparedAlbums, assign_module_names, prepare_album, prepare_albums};
pub use dimension_retry::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY, RetryPolicy, RetryingDimensionFetcher,
};
pub use elm_renderer::{
    INDEX_MODULE, TYPES_MODULE, elm_string, render_artist_module, render_index_module,
    render_types_module,
};
