//! HTTP tests against the full router

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use bistro_api::{create_router, ApiState, ServerConfig};
use bistro_store::StoreConfig;
use bistro_types::{seed_menu, Menu, MenuCategory, MenuItem, Nutrition};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "XBISTROBOUNDARY";

fn setup_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = ServerConfig::in_memory(temp_dir.path());
    let state = ApiState::new(config).expect("Failed to build state");
    (create_router(state), temp_dir)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn put_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("PUT")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn multipart(field: &str, file_name: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .uri("/api/upload")
        .method("POST")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn sample_menu() -> Menu {
    let mut tea = MenuCategory::new("Чай");
    tea.items.push(MenuItem::dish(
        "Пуэр",
        "690₽",
        "Выдержанный",
        "/uploads/puer.png",
        Nutrition::default(),
    ));
    Menu::new(vec![tea])
}

#[tokio::test]
async fn test_get_menu_falls_back_to_seed() {
    let (app, _temp_dir) = setup_app();

    let (status, body) = send(&app, get("/api/menu")).await;

    assert_eq!(status, StatusCode::OK);
    let menu: Menu = serde_json::from_slice(&body).unwrap();
    assert_eq!(menu, seed_menu());
}

#[tokio::test]
async fn test_put_then_get_returns_same_document() {
    let (app, _temp_dir) = setup_app();
    let menu = sample_menu();

    let (status, body) = send(&app, put_json("/api/menu", serde_json::to_vec(&menu).unwrap())).await;
    assert_eq!(status, StatusCode::OK);
    let ack: Value = serde_json::from_slice(&body).unwrap();
    assert!(ack["message"].is_string());

    let (status, body) = send(&app, get("/api/menu")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Menu>(&body).unwrap(), menu);
}

#[tokio::test]
async fn test_stored_document_is_served_back_unchanged() {
    let (app, _temp_dir) = setup_app();
    let document = json!([
        {
            "category": "Бар",
            "icon": "glass",
            "items": [
                {
                    "name": "Ром",
                    "description": "",
                    "isSubcategory": true,
                    "level": 1,
                    "subcategory": [{ "name": "legacy" }],
                    "items": [
                        {
                            "name": "Zacapa 23",
                            "price": "590₽",
                            "image": "/uploads/zacapa.png",
                            "weight": "40 мл",
                            "nutrition": { "calories": 97, "protein": 0.5, "fats": 0, "carbs": 0.3 }
                        }
                    ]
                }
            ]
        }
    ]);

    let (status, _) = send(&app, put_json("/api/menu", document.to_string())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, get("/api/menu")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), document);
}

#[tokio::test]
async fn test_last_put_wins() {
    let (app, _temp_dir) = setup_app();
    let first = sample_menu();
    let second = Menu::new(vec![MenuCategory::new("Десерты")]);

    send(&app, put_json("/api/menu", serde_json::to_vec(&first).unwrap())).await;
    send(&app, put_json("/api/menu", serde_json::to_vec(&second).unwrap())).await;

    let (_, body) = send(&app, get("/api/menu")).await;
    assert_eq!(serde_json::from_slice::<Menu>(&body).unwrap(), second);
}

#[tokio::test]
async fn test_put_invalid_document_is_500() {
    let (app, _temp_dir) = setup_app();

    let (status, body) = send(&app, put_json("/api/menu", r#"{"not": "a menu"}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert!(error["error"].as_str().unwrap().contains("Invalid menu document"));

    // Stored document untouched
    let (_, body) = send(&app, get("/api/menu")).await;
    assert_eq!(serde_json::from_slice::<Menu>(&body).unwrap(), seed_menu());
}

#[tokio::test]
async fn test_file_store_persists_across_apps() {
    let temp_dir = TempDir::new().unwrap();
    let menu_path = temp_dir.path().join("data").join("menu.json");
    let config = ServerConfig::in_memory(temp_dir.path())
        .with_store(StoreConfig::file(&menu_path).with_uploads_dir(temp_dir.path().join("uploads")));

    let app = create_router(ApiState::new(config.clone()).unwrap());
    let menu = sample_menu();
    let (status, _) = send(&app, put_json("/api/menu", serde_json::to_vec(&menu).unwrap())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(menu_path.exists());

    let restarted = create_router(ApiState::new(config).unwrap());
    let (_, body) = send(&restarted, get("/api/menu")).await;
    assert_eq!(serde_json::from_slice::<Menu>(&body).unwrap(), menu);
}

#[tokio::test]
async fn test_upload_png_returns_hex_url_and_is_served() {
    let (app, temp_dir) = setup_app();
    let bytes = b"\x89PNG\r\n\x1a\nfake image";

    let (status, body) = send(&app, multipart("image", "Dish Photo.png", bytes)).await;

    assert_eq!(status, StatusCode::OK);
    let upload: Value = serde_json::from_slice(&body).unwrap();
    let url = upload["url"].as_str().unwrap().to_string();
    let file_name = url.strip_prefix("/uploads/").expect("served under /uploads");
    let stem = file_name.strip_suffix(".png").expect("extension kept");
    assert_eq!(stem.len(), 32);
    assert!(stem.chars().all(|c| c.is_ascii_hexdigit()));

    let stored = std::fs::read(temp_dir.path().join("uploads").join(file_name)).unwrap();
    assert_eq!(stored, bytes);

    let (status, served) = send(&app, get(&url)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(served, bytes);
}

#[tokio::test]
async fn test_upload_without_image_field_is_400() {
    let (app, _temp_dir) = setup_app();

    let (status, body) = send(&app, multipart("document", "menu.pdf", b"%PDF")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert!(error["error"].is_string());
}

#[tokio::test]
async fn test_booking_is_acknowledged() {
    let (app, _temp_dir) = setup_app();
    let request = Request::builder()
        .uri("/api/booking")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "date": "2026-10-20",
                "time": "19:30",
                "name": "Анна",
                "phone": "+7 999 000-00-00"
            })
            .to_string(),
        ))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::ACCEPTED);
    let ack: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(ack["reference"].as_str().unwrap().len(), 36);
}

#[tokio::test]
async fn test_booking_form_renders_confirmation() {
    let (app, _temp_dir) = setup_app();
    let request = Request::builder()
        .uri("/booking")
        .method("POST")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(
            "date=2026-10-20&time=20%3A00&guests=4&name=Ivan&phone=123&comment=",
        ))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Спасибо, Ivan!"));
    assert!(html.contains("20:00"));
}

#[tokio::test]
async fn test_pages_render() {
    let (app, _temp_dir) = setup_app();

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("01:30"));
    assert!(html.contains("action=\"/booking\""));

    let (status, _) = send(&app, get("/about")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_menu_page_shows_stored_menu_and_detail() {
    let (app, _temp_dir) = setup_app();
    send(&app, put_json("/api/menu", serde_json::to_vec(&sample_menu()).unwrap())).await;

    let uri = format!("/menu?category=0&item={}", urlencoding::encode("Пуэр"));
    let (status, body) = send(&app, get(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<h1>Чай</h1>"));
    assert!(html.contains("<h2>Пуэр</h2>"));
    assert!(html.contains("690₽"));
    assert!(html.contains("Калории"));
}

#[tokio::test]
async fn test_health() {
    let (app, _temp_dir) = setup_app();

    let (status, body) = send(&app, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "healthy");
}
