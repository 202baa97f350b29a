//! Layer catalog loading.

use geoview_core::LayerGroup;

use crate::config::LAYERS_ENDPOINT;
use crate::core::error::FetchError;
use crate::utils::fetch_json;

/// Fetch the group/file tree from the catalog endpoint.
pub async fn fetch_catalog() -> Result<Vec<LayerGroup>, FetchError> {
    fetch_json::<Vec<LayerGroup>>(LAYERS_ENDPOINT).await
}
