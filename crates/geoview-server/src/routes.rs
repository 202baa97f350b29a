//! HTTP routes.

use actix_web::{HttpResponse, web};

use crate::catalog::CatalogRoot;
use crate::error::ApiError;

pub const LAYERS_PATH: &str = "/api/layers";
pub const LAYER_DATA_PATH: &str = "/api/layers/data";

/// Register the catalog routes. Expects a `web::Data<CatalogRoot>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|_, _| ApiError::MissingPath.into()))
        .route(LAYERS_PATH, web::get().to(list_layers))
        .route(LAYER_DATA_PATH, web::get().to(layer_data));
}

/// Query pairs in request order. Repeated keys are kept rather than rejected.
type QueryPairs = web::Query<Vec<(String, String)>>;

/// First `path` value, if any. Later duplicates are ignored.
fn first_path(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find_map(|(key, value)| (key == "path").then_some(value))
}

async fn list_layers(root: web::Data<CatalogRoot>) -> Result<HttpResponse, ApiError> {
    let root = root.into_inner();
    let groups = web::block(move || root.scan()).await??;
    Ok(HttpResponse::Ok().json(groups))
}

async fn layer_data(
    root: web::Data<CatalogRoot>,
    query: QueryPairs,
) -> Result<HttpResponse, ApiError> {
    let requested = first_path(query.into_inner())
        .filter(|p| !p.is_empty())
        .ok_or(ApiError::MissingPath)?;

    let root = root.into_inner();
    let document = web::block(move || root.load_document(&requested)).await??;
    Ok(HttpResponse::Ok().json(document))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_first_path_wins() {
        let query = pairs(&[("zoom", "3"), ("path", "a/b.geojson"), ("path", "x")]);
        assert_eq!(first_path(query).as_deref(), Some("a/b.geojson"));
    }

    #[test]
    fn test_first_path_absent() {
        assert_eq!(first_path(pairs(&[("other", "1")])), None);
    }

    #[test]
    fn test_first_path_empty_is_kept() {
        let query = pairs(&[("path", ""), ("path", "a/b.geojson")]);
        assert_eq!(first_path(query).as_deref(), Some(""));
    }
}
