use std::fs;
use std::path::Path;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};
use tempfile::TempDir;

use geoview_server::{CatalogRoot, routes};

const COLLECTION: &str = r#"{"type":"FeatureCollection","zeta":1,"alpha":2,"features":[]}"#;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Temp dir with `catalog/` as the root and a `catalog-evil/` sibling.
fn fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("catalog");
    write(&root, "roads/highways.geojson", COLLECTION);
    write(&root, "roads/streets.json", r#"{"type":"Feature","properties":{},"geometry":null}"#);
    write(&root, "roads/notes.txt", "not a layer");
    write(&root, "roads/point.geojson", r#"{"type":"Point","coordinates":[1,2]}"#);
    write(&root, "roads/broken.geojson", "{\"type\": ");
    write(&root, "admin/regions.geojson", r#"{"type":"GeometryCollection","geometries":[]}"#);
    write(&root, "misc/readme.md", "# nothing here");
    write(dir.path(), "catalog-evil/x.geojson", COLLECTION);
    write(dir.path(), "secret.geojson", COLLECTION);
    dir
}

macro_rules! service {
    ($root:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(CatalogRoot::new($root)))
                .configure(routes::configure),
        )
        .await
    };
}

async fn get_error(root: &Path, uri: &str) -> (StatusCode, Value) {
    let app = service!(root);
    let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn lists_groups_sorted_and_filtered() {
    let dir = fixture();
    let app = service!(dir.path().join("catalog"));

    let req = test::TestRequest::get().uri("/api/layers").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!([
            {"groupName": "admin", "files": ["regions.geojson"]},
            {
                "groupName": "roads",
                "files": ["broken.geojson", "highways.geojson", "point.geojson", "streets.json"]
            }
        ])
    );
}

#[actix_web::test]
async fn missing_root_lists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let app = service!(dir.path().join("does-not-exist"));

    let req = test::TestRequest::get().uri("/api/layers").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn serves_document_verbatim() {
    let dir = fixture();
    let app = service!(dir.path().join("catalog"));

    let req = test::TestRequest::get()
        .uri("/api/layers/data?path=roads%2Fhighways.geojson")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(std::str::from_utf8(&body).unwrap(), COLLECTION);
}

#[actix_web::test]
async fn serves_feature_and_geometry_collection() {
    let dir = fixture();
    let app = service!(dir.path().join("catalog"));

    for (path, kind) in [
        ("roads/streets.json", "Feature"),
        ("admin/regions.geojson", "GeometryCollection"),
    ] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/layers/data?path={path}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["type"], kind);
    }
}

#[actix_web::test]
async fn missing_or_empty_path_is_bad_request() {
    let dir = fixture();
    let root = dir.path().join("catalog");

    for uri in ["/api/layers/data", "/api/layers/data?path="] {
        let (status, body) = get_error(&root, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({"error": "Path parameter is required"}));
    }
}

#[actix_web::test]
async fn repeated_path_uses_first_value() {
    let dir = fixture();
    let app = service!(dir.path().join("catalog"));

    let req = test::TestRequest::get()
        .uri("/api/layers/data?path=roads/highways.geojson&path=x")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(std::str::from_utf8(&body).unwrap(), COLLECTION);
}

#[actix_web::test]
async fn empty_first_path_is_bad_request_even_if_repeated() {
    let dir = fixture();
    let (status, body) = get_error(
        &dir.path().join("catalog"),
        "/api/layers/data?path=&path=roads/highways.geojson",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Path parameter is required"}));
}

#[actix_web::test]
async fn traversal_is_forbidden() {
    let dir = fixture();
    let root = dir.path().join("catalog");

    for uri in [
        "/api/layers/data?path=../secret.geojson",
        "/api/layers/data?path=..%2Fsecret.geojson",
        "/api/layers/data?path=roads%2F..%2F..%2Fsecret.geojson",
        "/api/layers/data?path=%2Fetc%2Fpasswd",
        "/api/layers/data?path=..%2F..%2F..%2F..%2Fetc%2Fpasswd",
    ] {
        let (status, body) = get_error(&root, uri).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");
        assert_eq!(body, json!({"error": "Invalid path"}), "{uri}");
    }
}

#[actix_web::test]
async fn sibling_with_shared_prefix_is_forbidden() {
    let dir = fixture();
    let (status, body) = get_error(
        &dir.path().join("catalog"),
        "/api/layers/data?path=..%2Fcatalog-evil%2Fx.geojson",
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({"error": "Invalid path"}));
}

#[actix_web::test]
async fn wrong_extension_is_forbidden() {
    let dir = fixture();
    let (status, body) = get_error(
        &dir.path().join("catalog"),
        "/api/layers/data?path=roads%2Fnotes.txt",
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({"error": "Invalid file type"}));
}

#[actix_web::test]
async fn absent_file_is_not_found() {
    let dir = fixture();
    let (status, body) = get_error(
        &dir.path().join("catalog"),
        "/api/layers/data?path=roads%2Fmissing.geojson",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "File not found"}));
}

#[actix_web::test]
async fn non_container_type_is_bad_request() {
    let dir = fixture();
    let (status, body) = get_error(
        &dir.path().join("catalog"),
        "/api/layers/data?path=roads%2Fpoint.geojson",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid GeoJSON format"}));
}

#[actix_web::test]
async fn unparsable_file_is_server_error() {
    let dir = fixture();
    let (status, body) = get_error(
        &dir.path().join("catalog"),
        "/api/layers/data?path=roads%2Fbroken.geojson",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Error reading file"}));
}
